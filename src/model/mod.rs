//! Domain models used by the service layer.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary,
//! parsing stored string snowflakes into `u64` and string enums into typed variants.

pub mod member;
pub mod settings;
pub mod ticket;
pub mod transcript;
