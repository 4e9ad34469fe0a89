//! Request guards shared by controllers.
//!
//! - `session` - Typed access to the authenticated user stored in the session
//! - `auth` - `AuthGuard` resolving the session user and checking permissions

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
