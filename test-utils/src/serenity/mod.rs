//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON,
//! simulating what Discord's API would return.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Create Serenity Member objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod member;
pub mod message;

pub use member::create_test_member;
pub use message::{create_test_message, TestAttachment};
