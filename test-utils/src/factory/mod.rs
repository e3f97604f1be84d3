//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests.
//! Each entity has its own module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let settings = factory::guild_settings::create_settings(&db).await?;
//! let ticket = factory::ticket::create_ticket(&db, &settings.guild_id, "42").await?;
//!
//! let (settings, categories) = factory::helpers::create_settings_with_categories(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let settings = factory::guild_settings::GuildSettingsFactory::new(&db)
//!     .guild_id("987654321")
//!     .max_tickets_per_user(1)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild_settings` - Create guild settings rows
//! - `ticket_category` - Create ticket category rows
//! - `ticket` - Create ticket rows

pub mod guild_settings;
pub mod helpers;
pub mod ticket;
pub mod ticket_category;

pub use guild_settings::create_settings;
pub use helpers::create_settings_with_categories;
pub use ticket::create_ticket;
pub use ticket_category::create_category;
