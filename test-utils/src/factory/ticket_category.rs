//! Ticket category factory for creating test category entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ticket categories with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let category = TicketCategoryFactory::new(&db, &settings.guild_id)
///     .name("Billing")
///     .position(2)
///     .build()
///     .await?;
/// ```
pub struct TicketCategoryFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    position: i32,
    name: String,
    description: String,
    emoji: String,
}

impl<'a> TicketCategoryFactory<'a> {
    /// Creates a new TicketCategoryFactory with default values.
    ///
    /// Defaults:
    /// - position: `0`
    /// - name: `"Category {id}"`
    /// - description: `"Description {id}"`
    /// - emoji: `"📁"`
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.to_string(),
            position: 0,
            name: format!("Category {}", id),
            description: format!("Description {}", id),
            emoji: "📁".to_string(),
        }
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    /// Builds and inserts the category entity into the database.
    pub async fn build(self) -> Result<entity::ticket_category::Model, DbErr> {
        entity::ticket_category::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            position: ActiveValue::Set(self.position),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            emoji: ActiveValue::Set(self.emoji),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values at position 0 for the guild.
pub async fn create_category(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::ticket_category::Model, DbErr> {
    TicketCategoryFactory::new(db, guild_id).build().await
}
