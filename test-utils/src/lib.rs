//! Ticketdesk Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the ticket
//! bot. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert entities with sensible defaults
//! - **fixture**: In-memory entity models without database insertion
//! - **serenity**: Serenity API objects deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_ticket_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_ticket_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
pub mod serenity;
