//! SeaORM entity definitions for the ticket bot database.
//!
//! Discord snowflakes are stored as strings and parsed at the repository boundary.

pub mod prelude;

pub mod guild_settings;
pub mod ticket;
pub mod ticket_category;
