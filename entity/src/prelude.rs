pub use super::guild_settings::Entity as GuildSettings;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_category::Entity as TicketCategory;
