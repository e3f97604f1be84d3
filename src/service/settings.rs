//! Guild configuration and category management.

use sea_orm::DatabaseConnection;

use crate::{
    data::settings::GuildSettingsRepository,
    error::AppError,
    model::{
        member::MemberInfo,
        settings::{
            GuildSettings, SetupParam, TicketCategory, MAX_AUTO_CLOSE_HOURS, MAX_CATEGORIES,
            MAX_CATEGORY_DESCRIPTION_LEN, MAX_CATEGORY_EMOJI_LEN, MAX_CATEGORY_NAME_LEN,
            MAX_MESSAGE_LEN, MAX_TICKETS_RANGE,
        },
    },
    platform::{ChatPlatform, OutboundMessage},
    service::notify,
    ui,
};

pub const NOT_SET_UP_MESSAGE: &str =
    "Ticket system has not been set up yet. Please use `/setup` first.";
pub const NO_PERMISSION_MESSAGE: &str = "You do not have permission to use this command.";

/// Result of the `/setup` command.
#[derive(Debug, Clone)]
pub struct SetupOutcome {
    pub settings: GuildSettings,
    /// Whether settings were created rather than updated.
    pub created: bool,
}

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
    platform: &'a dyn ChatPlatform,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection, platform: &'a dyn ChatPlatform) -> Self {
        Self { db, platform }
    }

    /// Configures the ticket system for a guild and posts the ticket panel.
    ///
    /// Requires the Administrator permission. The panel is posted to `channel_id` and a
    /// setup entry is sent to the configured log channel; both posts are best-effort.
    ///
    /// # Arguments
    /// - `param` - Roles and log channel chosen in the command
    /// - `actor` - Member running the command
    /// - `channel_id` - Channel the command was run in
    ///
    /// # Returns
    /// - `Ok(SetupOutcome)` - Settings were stored
    /// - `Err(AppError::PermissionDenied)` - Member is not an administrator
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn setup(
        &self,
        param: SetupParam,
        actor: &MemberInfo,
        channel_id: u64,
    ) -> Result<SetupOutcome, AppError> {
        if !actor.administrator {
            return Err(AppError::PermissionDenied(NO_PERMISSION_MESSAGE.to_string()));
        }

        let repo = GuildSettingsRepository::new(self.db);
        let (settings, created) = repo.upsert_setup(&param).await?;

        tracing::info!(
            "Ticket system {} for guild {} by {}",
            if created { "set up" } else { "reconfigured" },
            param.guild_id,
            actor.tag
        );

        let panel = OutboundMessage {
            embeds: vec![ui::embed::panel(&settings.categories)],
            components: vec![ui::component::panel_row()],
            ..Default::default()
        };
        let panel_link = match self.platform.send_message(channel_id, panel).await {
            Ok(message_id) => Some(format!(
                "https://discord.com/channels/{}/{}/{}",
                param.guild_id, channel_id, message_id
            )),
            Err(e) => {
                tracing::warn!("Failed to post ticket panel in channel {}: {}", channel_id, e);
                None
            }
        };

        notify::send_log(
            self.platform,
            settings.log_channel_id,
            OutboundMessage::embed(ui::embed::log_setup(
                &actor.tag,
                &param,
                panel_link.as_deref(),
            )),
        )
        .await;

        Ok(SetupOutcome { settings, created })
    }

    /// Gets the settings of a guild that has run setup.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Guild settings with ordered categories
    /// - `Err(AppError::NotFound)` - Guild has not run setup
    pub async fn get(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        GuildSettingsRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_SET_UP_MESSAGE.to_string()))
    }

    /// Gets the settings of a guild, requiring the member to be an admin.
    pub async fn get_for_admin(
        &self,
        guild_id: u64,
        actor: &MemberInfo,
    ) -> Result<GuildSettings, AppError> {
        let settings = self.get(guild_id).await?;
        if !settings.is_admin(actor) {
            return Err(AppError::PermissionDenied(NO_PERMISSION_MESSAGE.to_string()));
        }

        Ok(settings)
    }

    pub async fn set_welcome_message(
        &self,
        guild_id: u64,
        actor: &MemberInfo,
        message: &str,
    ) -> Result<String, AppError> {
        self.get_for_admin(guild_id, actor).await?;
        let message = validate_message(message)?;

        GuildSettingsRepository::new(self.db)
            .set_welcome_message(guild_id, &message)
            .await?;

        Ok(message)
    }

    pub async fn set_close_message(
        &self,
        guild_id: u64,
        actor: &MemberInfo,
        message: &str,
    ) -> Result<String, AppError> {
        self.get_for_admin(guild_id, actor).await?;
        let message = validate_message(message)?;

        GuildSettingsRepository::new(self.db)
            .set_close_message(guild_id, &message)
            .await?;

        Ok(message)
    }

    /// Sets the per-member open ticket cap.
    ///
    /// # Returns
    /// - `Ok(u32)` - The stored limit
    /// - `Err(AppError::Validation)` - Limit outside 1..=10
    pub async fn set_max_tickets(
        &self,
        guild_id: u64,
        actor: &MemberInfo,
        limit: i64,
    ) -> Result<u32, AppError> {
        self.get_for_admin(guild_id, actor).await?;

        let limit = u32::try_from(limit)
            .ok()
            .filter(|l| MAX_TICKETS_RANGE.contains(l))
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "The ticket limit must be between {} and {}.",
                    MAX_TICKETS_RANGE.start(),
                    MAX_TICKETS_RANGE.end()
                ))
            })?;

        GuildSettingsRepository::new(self.db)
            .set_max_tickets_per_user(guild_id, limit)
            .await?;

        Ok(limit)
    }

    /// Sets the inactivity window after which open tickets close; `0` disables.
    pub async fn set_auto_close(
        &self,
        guild_id: u64,
        actor: &MemberInfo,
        hours: i64,
    ) -> Result<u32, AppError> {
        self.get_for_admin(guild_id, actor).await?;

        let hours = u32::try_from(hours)
            .ok()
            .filter(|h| *h <= MAX_AUTO_CLOSE_HOURS)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Auto-close time must be between 0 and {} hours.",
                    MAX_AUTO_CLOSE_HOURS
                ))
            })?;

        GuildSettingsRepository::new(self.db)
            .set_auto_close_hours(guild_id, hours)
            .await?;

        Ok(hours)
    }

    /// Adds a category after validating its fields and name uniqueness.
    ///
    /// # Returns
    /// - `Ok(TicketCategory)` - The stored category, with fields trimmed
    /// - `Err(AppError::Validation)` - Field out of bounds, duplicate name, or category limit reached
    /// - `Err(AppError::PermissionDenied)` - Member is not an admin
    pub async fn add_category(
        &self,
        guild_id: u64,
        actor: &MemberInfo,
        name: &str,
        description: &str,
        emoji: &str,
    ) -> Result<TicketCategory, AppError> {
        let settings = self.get_for_admin(guild_id, actor).await?;

        let category = TicketCategory::new(name.trim(), description.trim(), emoji.trim());
        validate_field("Category name", &category.name, MAX_CATEGORY_NAME_LEN)?;
        validate_field(
            "Category description",
            &category.description,
            MAX_CATEGORY_DESCRIPTION_LEN,
        )?;
        validate_field("Emoji", &category.emoji, MAX_CATEGORY_EMOJI_LEN)?;

        if settings.find_category(&category.name).is_some() {
            return Err(AppError::Validation(format!(
                "A category with the name \"{}\" already exists.",
                category.name
            )));
        }
        if settings.categories.len() >= MAX_CATEGORIES {
            return Err(AppError::Validation(format!(
                "You cannot have more than {} categories.",
                MAX_CATEGORIES
            )));
        }

        GuildSettingsRepository::new(self.db)
            .add_category(guild_id, category.clone())
            .await?;

        tracing::info!("Added category {} in guild {}", category.name, guild_id);

        Ok(category)
    }

    /// Gets the categories offered for removal.
    ///
    /// # Returns
    /// - `Ok(Vec<TicketCategory>)` - At least one category
    /// - `Err(AppError::Validation)` - No categories configured
    pub async fn categories_for_removal(
        &self,
        guild_id: u64,
        actor: &MemberInfo,
    ) -> Result<Vec<TicketCategory>, AppError> {
        let settings = self.get_for_admin(guild_id, actor).await?;
        if settings.categories.is_empty() {
            return Err(AppError::Validation(
                "There are no categories to remove.".to_string(),
            ));
        }

        Ok(settings.categories)
    }

    /// Removes the category at `index` of the current category list.
    ///
    /// # Returns
    /// - `Ok(TicketCategory)` - The removed category
    /// - `Err(AppError::Validation)` - Index is not valid for the current list
    pub async fn remove_category(
        &self,
        guild_id: u64,
        actor: &MemberInfo,
        index: usize,
    ) -> Result<TicketCategory, AppError> {
        self.get_for_admin(guild_id, actor).await?;

        let removed = GuildSettingsRepository::new(self.db)
            .remove_category_at(guild_id, index)
            .await?
            .ok_or_else(|| AppError::Validation("Invalid category selection.".to_string()))?;

        tracing::info!("Removed category {} in guild {}", removed.name, guild_id);

        Ok(removed)
    }
}

fn validate_message(message: &str) -> Result<String, AppError> {
    let message = message.trim();
    validate_field("The message", message, MAX_MESSAGE_LEN)?;

    Ok(message.to_string())
}

fn validate_field(label: &str, value: &str, max_len: usize) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} cannot be empty.", label)));
    }
    if value.chars().count() > max_len {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters.",
            label, max_len
        )));
    }

    Ok(())
}
