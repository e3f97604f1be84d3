use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::model::member::MemberInfo;

pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Thank you for creating a ticket. Support staff will be with you shortly.";
pub const DEFAULT_CLOSE_MESSAGE: &str =
    "This ticket has been closed. If you need further assistance, please create a new ticket.";
pub const DEFAULT_MAX_TICKETS_PER_USER: u32 = 3;

/// Allowed range for the per-user open ticket cap.
pub const MAX_TICKETS_RANGE: std::ops::RangeInclusive<u32> = 1..=10;
/// Upper bound for the inactivity auto-close window, in hours.
pub const MAX_AUTO_CLOSE_HOURS: u32 = 720;
/// Discord allows at most 25 options in a select menu.
pub const MAX_CATEGORIES: usize = 25;
pub const MAX_CATEGORY_NAME_LEN: usize = 100;
pub const MAX_CATEGORY_DESCRIPTION_LEN: usize = 100;
pub const MAX_CATEGORY_EMOJI_LEN: usize = 4;
/// Welcome and close messages share the modal input limit.
pub const MAX_MESSAGE_LEN: usize = 1000;

/// A ticket category configured for a guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketCategory {
    pub name: String,
    pub description: String,
    pub emoji: String,
}

impl TicketCategory {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            emoji: emoji.into(),
        }
    }

    /// Categories seeded the first time a guild runs setup.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("General Support", "General questions and assistance", "❓"),
            Self::new(
                "Technical Support",
                "Technical issues and troubleshooting",
                "🔧",
            ),
            Self::new("Billing", "Billing inquiries and payment issues", "💰"),
            Self::new("Report", "Report users or issues", "🚨"),
        ]
    }

    /// Case-insensitive name comparison used for uniqueness.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn from_entity(entity: entity::ticket_category::Model) -> Self {
        Self {
            name: entity.name,
            description: entity.description,
            emoji: entity.emoji,
        }
    }
}

/// Per-guild ticket system configuration.
///
/// Categories are ordered by their stored position.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    pub guild_id: u64,
    pub support_role_id: u64,
    pub admin_role_id: u64,
    pub log_channel_id: u64,
    pub categories: Vec<TicketCategory>,
    pub ticket_counter: u64,
    pub welcome_message: String,
    pub close_message: String,
    pub max_tickets_per_user: u32,
    /// Hours of inactivity before an open ticket is closed; 0 disables auto-close.
    pub auto_close_hours: u32,
    pub created_at: DateTime<Utc>,
}

impl GuildSettings {
    /// Converts an entity model and its ordered categories at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - Settings row
    /// - `categories` - Category rows for the guild, already ordered by position
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Successfully converted settings
    /// - `Err(DbErr::Custom)` - A stored ID or counter could not be parsed
    pub fn from_entity(
        entity: entity::guild_settings::Model,
        categories: Vec<entity::ticket_category::Model>,
    ) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;
        let support_role_id = entity
            .support_role_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse support_role_id: {}", e)))?;
        let admin_role_id = entity
            .admin_role_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse admin_role_id: {}", e)))?;
        let log_channel_id = entity
            .log_channel_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse log_channel_id: {}", e)))?;

        Ok(Self {
            guild_id,
            support_role_id,
            admin_role_id,
            log_channel_id,
            categories: categories
                .into_iter()
                .map(TicketCategory::from_entity)
                .collect(),
            ticket_counter: u64::try_from(entity.ticket_counter)
                .map_err(|e| DbErr::Custom(format!("Invalid ticket_counter: {}", e)))?,
            welcome_message: entity.welcome_message,
            close_message: entity.close_message,
            max_tickets_per_user: u32::try_from(entity.max_tickets_per_user).map_err(|e| {
                DbErr::Custom(format!("Invalid max_tickets_per_user: {}", e))
            })?,
            auto_close_hours: u32::try_from(entity.auto_close_hours)
                .map_err(|e| DbErr::Custom(format!("Invalid auto_close_hours: {}", e)))?,
            created_at: entity.created_at,
        })
    }

    /// Staff members hold the support role, the admin role, or Administrator.
    pub fn is_staff(&self, member: &MemberInfo) -> bool {
        member.administrator
            || member.has_role(self.support_role_id)
            || member.has_role(self.admin_role_id)
    }

    /// Admins hold the admin role or Administrator.
    pub fn is_admin(&self, member: &MemberInfo) -> bool {
        member.administrator || member.has_role(self.admin_role_id)
    }

    pub fn find_category(&self, name: &str) -> Option<&TicketCategory> {
        self.categories.iter().find(|c| c.has_name(name))
    }
}

/// Parameters of the `/setup` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupParam {
    pub guild_id: u64,
    pub support_role_id: u64,
    pub admin_role_id: u64,
    pub log_channel_id: u64,
}
