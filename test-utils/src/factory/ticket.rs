//! Ticket factory for creating test ticket entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let ticket = TicketFactory::new(&db, &settings.guild_id, "42")
///     .ticket_id("0007")
///     .status("closed")
///     .build()
///     .await?;
/// ```
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    ticket_id: String,
    guild_id: String,
    channel_id: String,
    user_id: String,
    category: String,
    priority: String,
    status: String,
    subject: String,
    description: String,
    assigned_to: Option<String>,
    created_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
    closed_by: Option<String>,
    last_activity: DateTime<Utc>,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory with default values.
    ///
    /// Defaults:
    /// - ticket_id: four-digit id derived from an auto-incremented counter
    /// - channel_id: unique numeric string
    /// - category: `"General Support"`, priority `"medium"`, status `"open"`
    /// - created_at / last_activity: now
    pub fn new(db: &'a DatabaseConnection, guild_id: &str, user_id: &str) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            ticket_id: format!("{:04}", id % 10_000),
            guild_id: guild_id.to_string(),
            channel_id: next_id().to_string(),
            user_id: user_id.to_string(),
            category: "General Support".to_string(),
            priority: "medium".to_string(),
            status: "open".to_string(),
            subject: format!("Subject {}", id),
            description: format!("Description {}", id),
            assigned_to: None,
            created_at: now,
            closed_at: None,
            closed_by: None,
            last_activity: now,
        }
    }

    pub fn ticket_id(mut self, ticket_id: impl Into<String>) -> Self {
        self.ticket_id = ticket_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    /// Sets the status; `"closed"` also fills `closed_at` when unset.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        if self.status == "closed" && self.closed_at.is_none() {
            self.closed_at = Some(Utc::now());
        }
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn assigned_to(mut self, assigned_to: Option<String>) -> Self {
        self.assigned_to = assigned_to;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn closed_by(mut self, closed_by: Option<String>) -> Self {
        self.closed_by = closed_by;
        self
    }

    pub fn last_activity(mut self, last_activity: DateTime<Utc>) -> Self {
        self.last_activity = last_activity;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            ticket_id: ActiveValue::Set(self.ticket_id),
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            user_id: ActiveValue::Set(self.user_id),
            category: ActiveValue::Set(self.category),
            priority: ActiveValue::Set(self.priority),
            status: ActiveValue::Set(self.status),
            subject: ActiveValue::Set(self.subject),
            description: ActiveValue::Set(self.description),
            assigned_to: ActiveValue::Set(self.assigned_to),
            created_at: ActiveValue::Set(self.created_at),
            closed_at: ActiveValue::Set(self.closed_at),
            closed_by: ActiveValue::Set(self.closed_by),
            last_activity: ActiveValue::Set(self.last_activity),
            tags: ActiveValue::Set(serde_json::json!([])),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ticket for the given guild and creator with default values.
pub async fn create_ticket(
    db: &DatabaseConnection,
    guild_id: &str,
    user_id: &str,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, guild_id, user_id).build().await
}
