//! Ticket lifecycle service.
//!
//! `TicketService` drives a ticket from form submission through category selection,
//! channel creation, side operations, and closing. It is organized by concern:
//! - `create` - Form submission and category selection
//! - `close` - Close requests, confirmation, auto-close, and external deletion
//! - `manage` - Panel, participants, rename, assignment, priority, listing, activity

pub mod close;
pub mod create;
pub mod manage;

use crate::{
    data::ticket::TicketRepository,
    error::AppError,
    model::{member::MemberInfo, settings::GuildSettings, ticket::Ticket},
    platform::ChatPlatform,
    service::settings::{SettingsService, NO_PERMISSION_MESSAGE},
    state::AppState,
};

pub const NOT_TICKET_CHANNEL_MESSAGE: &str = "This command can only be used in a ticket channel.";
pub const TICKET_GONE_MESSAGE: &str = "This ticket no longer exists.";
pub const ALREADY_CLOSED_MESSAGE: &str = "This ticket is already closed.";
pub const UNKNOWN_USER_TAG: &str = "Unknown User";

/// Service for the ticket lifecycle.
///
/// Holds the shared application state: database, chat platform, draft store,
/// deletion scheduler, transcript store, and admission locks.
pub struct TicketService<'a> {
    state: &'a AppState,
}

impl<'a> TicketService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn platform(&self) -> &dyn ChatPlatform {
        self.state.platform.as_ref()
    }

    async fn settings(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        SettingsService::new(&self.state.db, self.platform())
            .get(guild_id)
            .await
    }

    /// Finds the open ticket bound to a channel of the guild.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Open ticket in this channel
    /// - `Err(AppError::NotFound)` - Channel is not a ticket channel of the guild
    /// - `Err(AppError::Validation)` - Ticket is already closed
    async fn open_ticket_in_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Ticket, AppError> {
        let ticket = TicketRepository::new(&self.state.db)
            .find_by_channel_id(channel_id)
            .await?
            .filter(|t| t.guild_id == guild_id)
            .ok_or_else(|| AppError::NotFound(NOT_TICKET_CHANNEL_MESSAGE.to_string()))?;

        ensure_open(&ticket)?;

        Ok(ticket)
    }

    /// Finds a ticket by its formatted ID within a guild.
    async fn ticket_by_id(&self, guild_id: u64, ticket_id: &str) -> Result<Ticket, AppError> {
        TicketRepository::new(&self.state.db)
            .find_by_ticket_id(guild_id, ticket_id)
            .await?
            .ok_or_else(|| AppError::NotFound(TICKET_GONE_MESSAGE.to_string()))
    }

    /// Resolves a user's display tag, falling back to [`UNKNOWN_USER_TAG`].
    async fn user_tag(&self, user_id: u64) -> String {
        match self.platform().fetch_user_tag(user_id).await {
            Ok(Some(tag)) => tag,
            Ok(None) => UNKNOWN_USER_TAG.to_string(),
            Err(e) => {
                tracing::warn!("Failed to fetch user {}: {}", user_id, e);
                UNKNOWN_USER_TAG.to_string()
            }
        }
    }
}

fn ensure_open(ticket: &Ticket) -> Result<(), AppError> {
    if ticket.is_open() {
        Ok(())
    } else {
        Err(AppError::Validation(ALREADY_CLOSED_MESSAGE.to_string()))
    }
}

fn require_staff(settings: &GuildSettings, member: &MemberInfo) -> Result<(), AppError> {
    if settings.is_staff(member) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(NO_PERMISSION_MESSAGE.to_string()))
    }
}
