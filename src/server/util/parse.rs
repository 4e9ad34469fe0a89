use crate::server::error::{internal::InternalError, AppError};

/// Parses a Discord ID stored as a String column back into `u64`.
///
/// Discord IDs are stored as text because SQLite integers are signed.
///
/// # Returns
/// - `Ok(u64)` - Parsed ID
/// - `Err(AppError::InternalErr(ParseStringId))` - Stored value is not a valid u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    match value.parse::<u64>() {
        Ok(id) => Ok(id),
        Err(source) => Err(InternalError::ParseStringId { value, source }.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snowflake() {
        assert_eq!(
            parse_u64_from_string("123456789012345678".to_string()).unwrap(),
            123456789012345678
        );
    }

    #[test]
    fn rejects_non_numeric_value() {
        let result = parse_u64_from_string("not-an-id".to_string());

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::ParseStringId { .. }))
        ));
    }
}
