use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::model::settings::{
    GuildSettings, SetupParam, TicketCategory, DEFAULT_CLOSE_MESSAGE,
    DEFAULT_MAX_TICKETS_PER_USER, DEFAULT_WELCOME_MESSAGE,
};

pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the settings for a guild along with its ordered categories
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild
    ///
    /// # Returns
    /// - `Ok(Some(GuildSettings))`: Ticket system is set up for the guild
    /// - `Ok(None)`: Guild has never run setup
    /// - `Err(DbErr)`: Database error or unparseable stored value
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildSettings>, DbErr> {
        find_settings(self.db, guild_id).await
    }

    /// Creates or updates the settings for a guild from the `/setup` command
    ///
    /// A new guild is created with default messages, a zero counter, and the four
    /// default categories. An existing guild only has its roles and log channel
    /// replaced; categories, messages, and the counter are kept.
    ///
    /// # Returns
    /// - `Ok((GuildSettings, true))`: Settings were created
    /// - `Ok((GuildSettings, false))`: Existing settings were updated
    /// - `Err(DbErr)`: Database error
    pub async fn upsert_setup(&self, param: &SetupParam) -> Result<(GuildSettings, bool), DbErr> {
        let txn = self.db.begin().await?;
        let guild_id = param.guild_id.to_string();

        let existing = entity::prelude::GuildSettings::find()
            .filter(entity::guild_settings::Column::GuildId.eq(&guild_id))
            .one(&txn)
            .await?;

        let created = match existing {
            Some(model) => {
                let mut active: entity::guild_settings::ActiveModel = model.into();
                active.support_role_id = ActiveValue::Set(param.support_role_id.to_string());
                active.admin_role_id = ActiveValue::Set(param.admin_role_id.to_string());
                active.log_channel_id = ActiveValue::Set(param.log_channel_id.to_string());
                active.update(&txn).await?;
                false
            }
            None => {
                entity::guild_settings::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.clone()),
                    support_role_id: ActiveValue::Set(param.support_role_id.to_string()),
                    admin_role_id: ActiveValue::Set(param.admin_role_id.to_string()),
                    log_channel_id: ActiveValue::Set(param.log_channel_id.to_string()),
                    ticket_counter: ActiveValue::Set(0),
                    welcome_message: ActiveValue::Set(DEFAULT_WELCOME_MESSAGE.to_string()),
                    close_message: ActiveValue::Set(DEFAULT_CLOSE_MESSAGE.to_string()),
                    max_tickets_per_user: ActiveValue::Set(DEFAULT_MAX_TICKETS_PER_USER as i32),
                    auto_close_hours: ActiveValue::Set(0),
                    created_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;

                for (position, category) in TicketCategory::defaults().into_iter().enumerate() {
                    insert_category(&txn, &guild_id, position as i32, category).await?;
                }
                true
            }
        };

        let settings = find_settings(&txn, param.guild_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Guild settings {}", guild_id)))?;

        txn.commit().await?;

        Ok((settings, created))
    }

    /// Atomically increments the ticket counter and returns the new value
    ///
    /// The increment is a single `UPDATE ... SET ticket_counter = ticket_counter + 1`
    /// followed by a read inside the same transaction, so concurrent callers never
    /// receive the same value.
    ///
    /// # Returns
    /// - `Ok(u64)`: The incremented counter value
    /// - `Err(DbErr::RecordNotFound)`: Guild has no settings
    /// - `Err(DbErr)`: Database error
    pub async fn next_ticket_counter(&self, guild_id: u64) -> Result<u64, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::GuildSettings::update_many()
            .col_expr(
                entity::guild_settings::Column::TicketCounter,
                Expr::cust("ticket_counter + 1"),
            )
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!(
                "Guild settings {} not found",
                guild_id
            )));
        }

        let settings = entity::prelude::GuildSettings::find()
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .one(&txn)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!("Guild settings {} not found", guild_id))
            })?;

        txn.commit().await?;

        u64::try_from(settings.ticket_counter)
            .map_err(|e| DbErr::Custom(format!("Invalid ticket_counter: {}", e)))
    }

    /// Replaces the welcome message posted in new ticket channels
    ///
    /// # Returns
    /// - `Ok(true)`: Message updated
    /// - `Ok(false)`: Guild has no settings
    pub async fn set_welcome_message(&self, guild_id: u64, message: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildSettings::update_many()
            .col_expr(
                entity::guild_settings::Column::WelcomeMessage,
                Expr::value(message.to_string()),
            )
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Replaces the message posted when a ticket is closed
    pub async fn set_close_message(&self, guild_id: u64, message: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildSettings::update_many()
            .col_expr(
                entity::guild_settings::Column::CloseMessage,
                Expr::value(message.to_string()),
            )
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the maximum number of simultaneously open tickets per member
    pub async fn set_max_tickets_per_user(&self, guild_id: u64, max: u32) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildSettings::update_many()
            .col_expr(
                entity::guild_settings::Column::MaxTicketsPerUser,
                Expr::value(max as i32),
            )
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the inactivity window in hours after which open tickets are auto-closed
    pub async fn set_auto_close_hours(&self, guild_id: u64, hours: u32) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildSettings::update_many()
            .col_expr(
                entity::guild_settings::Column::AutoCloseHours,
                Expr::value(hours as i32),
            )
            .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Appends a category after the guild's last category
    pub async fn add_category(&self, guild_id: u64, category: TicketCategory) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        let guild_id = guild_id.to_string();

        let last = entity::prelude::TicketCategory::find()
            .filter(entity::ticket_category::Column::GuildId.eq(&guild_id))
            .order_by_desc(entity::ticket_category::Column::Position)
            .one(&txn)
            .await?;
        let position = last.map(|c| c.position + 1).unwrap_or(0);

        insert_category(&txn, &guild_id, position, category).await?;

        txn.commit().await
    }

    /// Removes the category at `index` of the guild's ordered category list
    ///
    /// The index is checked against the list as it exists when the removal runs,
    /// not when the removal menu was shown.
    ///
    /// # Returns
    /// - `Ok(Some(TicketCategory))`: The removed category
    /// - `Ok(None)`: Index is out of range; nothing was removed
    /// - `Err(DbErr)`: Database error
    pub async fn remove_category_at(
        &self,
        guild_id: u64,
        index: usize,
    ) -> Result<Option<TicketCategory>, DbErr> {
        let txn = self.db.begin().await?;

        let mut categories = entity::prelude::TicketCategory::find()
            .filter(entity::ticket_category::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::ticket_category::Column::Position)
            .order_by_asc(entity::ticket_category::Column::Id)
            .all(&txn)
            .await?;

        if index >= categories.len() {
            return Ok(None);
        }

        let removed = categories.remove(index);
        entity::prelude::TicketCategory::delete_by_id(removed.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Some(TicketCategory::from_entity(removed)))
    }

    /// Gets every guild with auto-close enabled
    pub async fn get_auto_close_enabled(&self) -> Result<Vec<GuildSettings>, DbErr> {
        let models = entity::prelude::GuildSettings::find()
            .filter(entity::guild_settings::Column::AutoCloseHours.gt(0))
            .all(self.db)
            .await?;

        let mut settings = Vec::with_capacity(models.len());
        for model in models {
            let categories = find_categories(self.db, &model.guild_id).await?;
            settings.push(GuildSettings::from_entity(model, categories)?);
        }

        Ok(settings)
    }
}

async fn find_settings<C: ConnectionTrait>(
    conn: &C,
    guild_id: u64,
) -> Result<Option<GuildSettings>, DbErr> {
    let Some(model) = entity::prelude::GuildSettings::find()
        .filter(entity::guild_settings::Column::GuildId.eq(guild_id.to_string()))
        .one(conn)
        .await?
    else {
        return Ok(None);
    };

    let categories = find_categories(conn, &model.guild_id).await?;

    GuildSettings::from_entity(model, categories).map(Some)
}

async fn find_categories<C: ConnectionTrait>(
    conn: &C,
    guild_id: &str,
) -> Result<Vec<entity::ticket_category::Model>, DbErr> {
    entity::prelude::TicketCategory::find()
        .filter(entity::ticket_category::Column::GuildId.eq(guild_id))
        .order_by_asc(entity::ticket_category::Column::Position)
        .order_by_asc(entity::ticket_category::Column::Id)
        .all(conn)
        .await
}

async fn insert_category<C: ConnectionTrait>(
    conn: &C,
    guild_id: &str,
    position: i32,
    category: TicketCategory,
) -> Result<entity::ticket_category::Model, DbErr> {
    entity::ticket_category::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        position: ActiveValue::Set(position),
        name: ActiveValue::Set(category.name),
        description: ActiveValue::Set(category.description),
        emoji: ActiveValue::Set(category.emoji),
        ..Default::default()
    }
    .insert(conn)
    .await
}
