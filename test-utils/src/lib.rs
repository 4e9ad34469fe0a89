//! Statboard Test Utils
//!
//! Shared testing utilities for the statboard service. Provides a builder for test contexts
//! backed by in-memory SQLite databases with only the tables a test needs, plus factories for
//! the rows those tests depend on.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Row factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn joins_team() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_event_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, event, team) = factory::helpers::create_team_with_dependencies(db).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
