use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::ticket::{CreateTicketParam, Ticket, TicketPriority, TicketStatus};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new open ticket with medium priority
    ///
    /// `created_at` and `last_activity` are both set to the current time.
    ///
    /// # Arguments
    /// - `param`: Ticket identity, channel, creator, and form contents
    ///
    /// # Returns
    /// - `Ok(Ticket)`: The created ticket
    /// - `Err(DbErr)`: Database error, including a duplicate channel ID
    pub async fn create(&self, param: CreateTicketParam) -> Result<Ticket, DbErr> {
        let now = Utc::now();

        let entity = entity::ticket::ActiveModel {
            ticket_id: ActiveValue::Set(param.ticket_id),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            category: ActiveValue::Set(param.category),
            priority: ActiveValue::Set(TicketPriority::default().as_str().to_string()),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            subject: ActiveValue::Set(param.subject),
            description: ActiveValue::Set(param.description),
            assigned_to: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            closed_at: ActiveValue::Set(None),
            closed_by: ActiveValue::Set(None),
            last_activity: ActiveValue::Set(now),
            tags: ActiveValue::Set(serde_json::json!([])),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ticket::from_entity(entity)
    }

    /// Finds the ticket bound to a channel
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))`: The channel is a ticket channel
    /// - `Ok(None)`: No ticket uses this channel
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_channel_id(&self, channel_id: u64) -> Result<Option<Ticket>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ChannelId.eq(channel_id.to_string()))
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    /// Finds a ticket by its formatted ID within a guild
    pub async fn find_by_ticket_id(
        &self,
        guild_id: u64,
        ticket_id: &str,
    ) -> Result<Option<Ticket>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::ticket::Column::TicketId.eq(ticket_id))
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    /// Counts the open tickets a member has in a guild
    pub async fn count_open_for_user(&self, guild_id: u64, user_id: u64) -> Result<u64, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::ticket::Column::UserId.eq(user_id.to_string()))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Open.as_str()))
            .count(self.db)
            .await
    }

    /// Gets all open tickets in a guild, oldest first
    pub async fn list_open(&self, guild_id: u64) -> Result<Vec<Ticket>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Open.as_str()))
            .order_by_asc(entity::ticket::Column::CreatedAt)
            .order_by_asc(entity::ticket::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect()
    }

    /// Gets open tickets in a guild whose last activity is before `cutoff`
    pub async fn list_stale_open(
        &self,
        guild_id: u64,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Ticket>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Open.as_str()))
            .filter(entity::ticket::Column::LastActivity.lt(cutoff))
            .order_by_asc(entity::ticket::Column::LastActivity)
            .all(self.db)
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect()
    }

    /// Sets the priority of a ticket
    ///
    /// # Returns
    /// - `Ok(Ticket)`: The updated ticket
    /// - `Err(DbErr::RecordNotFound)`: No ticket with this row ID
    /// - `Err(DbErr)`: Database error
    pub async fn set_priority(&self, id: i32, priority: TicketPriority) -> Result<Ticket, DbErr> {
        let ticket = entity::prelude::Ticket::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Ticket with id {} not found", id)))?;

        let mut active: entity::ticket::ActiveModel = ticket.into();
        active.priority = ActiveValue::Set(priority.as_str().to_string());

        let entity = active.update(self.db).await?;

        Ticket::from_entity(entity)
    }

    /// Assigns a ticket to a staff member, replacing any previous assignee
    pub async fn assign(&self, id: i32, staff_id: u64) -> Result<Ticket, DbErr> {
        let ticket = entity::prelude::Ticket::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Ticket with id {} not found", id)))?;

        let mut active: entity::ticket::ActiveModel = ticket.into();
        active.assigned_to = ActiveValue::Set(Some(staff_id.to_string()));

        let entity = active.update(self.db).await?;

        Ticket::from_entity(entity)
    }

    /// Closes a ticket if it is still open
    ///
    /// The status check and the update are a single conditional `UPDATE`, so two
    /// concurrent closes resolve to exactly one winner.
    ///
    /// # Arguments
    /// - `id`: Row ID of the ticket
    /// - `closed_by`: Member who closed the ticket, `None` when closed automatically
    /// - `at`: Close timestamp
    ///
    /// # Returns
    /// - `Ok(true)`: This call closed the ticket
    /// - `Ok(false)`: Ticket was missing or already closed
    /// - `Err(DbErr)`: Database error
    pub async fn close(
        &self,
        id: i32,
        closed_by: Option<u64>,
        at: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Ticket::update_many()
            .col_expr(
                entity::ticket::Column::Status,
                Expr::value(TicketStatus::Closed.as_str()),
            )
            .col_expr(entity::ticket::Column::ClosedAt, Expr::value(Some(at)))
            .col_expr(
                entity::ticket::Column::ClosedBy,
                Expr::value(closed_by.map(|id| id.to_string())),
            )
            .filter(entity::ticket::Column::Id.eq(id))
            .filter(entity::ticket::Column::Status.ne(TicketStatus::Closed.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Marks the open ticket bound to a channel as closed without a closer
    ///
    /// Used when a ticket channel is deleted outside the bot.
    pub async fn close_by_channel(&self, channel_id: u64, at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Ticket::update_many()
            .col_expr(
                entity::ticket::Column::Status,
                Expr::value(TicketStatus::Closed.as_str()),
            )
            .col_expr(entity::ticket::Column::ClosedAt, Expr::value(Some(at)))
            .filter(entity::ticket::Column::ChannelId.eq(channel_id.to_string()))
            .filter(entity::ticket::Column::Status.ne(TicketStatus::Closed.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records activity in an open ticket channel
    ///
    /// # Returns
    /// - `Ok(true)`: An open ticket's `last_activity` was updated
    /// - `Ok(false)`: Channel has no open ticket
    pub async fn touch_activity(&self, channel_id: u64, at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Ticket::update_many()
            .col_expr(entity::ticket::Column::LastActivity, Expr::value(at))
            .filter(entity::ticket::Column::ChannelId.eq(channel_id.to_string()))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Open.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
