//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests of model conversions and business rules that take entity models.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let settings = fixture::guild_settings::entity();
//! let ticket = fixture::ticket::entity();
//! ```

pub mod guild_settings;
pub mod ticket;

pub use guild_settings::entity as guild_settings_entity;
pub use ticket::entity as ticket_entity;
