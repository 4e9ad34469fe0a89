//! Team join code generation.

use rand::Rng;

/// Uppercase letters and digits without the easily confused `0`, `1`, `I` and `O`.
const JOIN_CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const JOIN_CODE_LENGTH: usize = 8;

/// Generates a random join code.
///
/// Uniqueness is not guaranteed; callers check the code against existing teams.
pub fn generate_join_code() -> String {
    let mut rng = rand::rng();

    (0..JOIN_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..JOIN_CODE_CHARSET.len());
            JOIN_CODE_CHARSET[idx] as char
        })
        .collect()
}

/// Normalizes user input for comparison against stored codes.
pub fn normalize_join_code(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generated codes use the fixed length and charset.
    ///
    /// Expected: 8 characters, all from the charset
    #[test]
    fn generates_codes_from_charset() {
        for _ in 0..100 {
            let code = generate_join_code();

            assert_eq!(code.len(), JOIN_CODE_LENGTH);
            assert!(code.bytes().all(|b| JOIN_CODE_CHARSET.contains(&b)));
        }
    }

    /// Consecutive codes differ.
    ///
    /// Expected: two codes are not equal
    #[test]
    fn generates_different_codes() {
        assert_ne!(generate_join_code(), generate_join_code());
    }

    #[test]
    fn normalizes_input() {
        assert_eq!(normalize_join_code("  abcd2345 "), "ABCD2345");
    }
}
