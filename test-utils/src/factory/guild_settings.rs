//! Guild settings factory for creating test settings entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild settings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_settings::GuildSettingsFactory;
///
/// let settings = GuildSettingsFactory::new(&db)
///     .guild_id("987654321")
///     .ticket_counter(41)
///     .build()
///     .await?;
/// ```
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    support_role_id: String,
    admin_role_id: String,
    log_channel_id: String,
    ticket_counter: i64,
    welcome_message: String,
    close_message: String,
    max_tickets_per_user: i32,
    auto_close_hours: i32,
}

impl<'a> GuildSettingsFactory<'a> {
    /// Creates a new GuildSettingsFactory with default values.
    ///
    /// Defaults:
    /// - guild_id, support_role_id, admin_role_id, log_channel_id: unique numeric strings
    /// - ticket_counter: `0`
    /// - welcome_message / close_message: the standard bot messages
    /// - max_tickets_per_user: `3`
    /// - auto_close_hours: `0` (disabled)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id().to_string(),
            support_role_id: next_id().to_string(),
            admin_role_id: next_id().to_string(),
            log_channel_id: next_id().to_string(),
            ticket_counter: 0,
            welcome_message:
                "Thank you for creating a ticket. Support staff will be with you shortly."
                    .to_string(),
            close_message: "This ticket has been closed. If you need further assistance, please create a new ticket.".to_string(),
            max_tickets_per_user: 3,
            auto_close_hours: 0,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn support_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.support_role_id = role_id.into();
        self
    }

    pub fn admin_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.admin_role_id = role_id.into();
        self
    }

    pub fn log_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.log_channel_id = channel_id.into();
        self
    }

    pub fn ticket_counter(mut self, counter: i64) -> Self {
        self.ticket_counter = counter;
        self
    }

    pub fn welcome_message(mut self, message: impl Into<String>) -> Self {
        self.welcome_message = message.into();
        self
    }

    pub fn close_message(mut self, message: impl Into<String>) -> Self {
        self.close_message = message.into();
        self
    }

    pub fn max_tickets_per_user(mut self, max: i32) -> Self {
        self.max_tickets_per_user = max;
        self
    }

    pub fn auto_close_hours(mut self, hours: i32) -> Self {
        self.auto_close_hours = hours;
        self
    }

    /// Builds and inserts the settings entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_settings::Model)` - Created settings entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            support_role_id: ActiveValue::Set(self.support_role_id),
            admin_role_id: ActiveValue::Set(self.admin_role_id),
            log_channel_id: ActiveValue::Set(self.log_channel_id),
            ticket_counter: ActiveValue::Set(self.ticket_counter),
            welcome_message: ActiveValue::Set(self.welcome_message),
            close_message: ActiveValue::Set(self.close_message),
            max_tickets_per_user: ActiveValue::Set(self.max_tickets_per_user),
            auto_close_hours: ActiveValue::Set(self.auto_close_hours),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates guild settings with default values and no categories.
pub async fn create_settings(
    db: &DatabaseConnection,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db).build().await
}
