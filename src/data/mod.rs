//! Database repository layer.
//!
//! Repositories perform all queries, inserts and updates through SeaORM entities and
//! return domain models from `crate::model`, keeping entity types out of the service
//! layer. Discord IDs cross this boundary as `u64` and are stored as strings.

pub mod settings;
pub mod ticket;

pub use settings::GuildSettingsRepository;
pub use ticket::TicketRepository;

#[cfg(test)]
mod test;
