//! Chat platform abstraction.
//!
//! Services talk to Discord only through [`ChatPlatform`], which exposes the handful of
//! channel, message, and member operations the ticket lifecycle needs. The production
//! implementation wraps serenity's HTTP client; tests use a recording mock.

pub mod discord;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use serenity::all::{CreateActionRow, CreateEmbed};

use crate::{
    error::AppError,
    model::{member::MemberInfo, transcript::TranscriptMessage},
};

/// Maximum number of messages captured for a transcript.
pub const TRANSCRIPT_MESSAGE_LIMIT: u8 = 100;

/// Channel to create for a new ticket.
///
/// The channel hides from `@everyone` and grants view, send, and history access to the
/// creator and each staff role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketChannelSpec {
    pub guild_id: u64,
    pub name: String,
    pub topic: String,
    pub creator_id: u64,
    pub staff_role_ids: Vec<u64>,
}

/// File attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundAttachment {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Message posted to a channel by the bot.
#[derive(Debug, Clone, Default)]
pub struct OutboundMessage {
    pub content: Option<String>,
    pub embeds: Vec<CreateEmbed>,
    pub components: Vec<CreateActionRow>,
    pub attachment: Option<OutboundAttachment>,
}

impl OutboundMessage {
    pub fn embed(embed: CreateEmbed) -> Self {
        Self {
            embeds: vec![embed],
            ..Default::default()
        }
    }
}

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Creates a private ticket channel and returns its ID.
    async fn create_ticket_channel(&self, spec: &TicketChannelSpec) -> Result<u64, AppError>;

    /// Posts a message and returns the new message ID.
    async fn send_message(&self, channel_id: u64, message: OutboundMessage)
        -> Result<u64, AppError>;

    /// Fetches up to `limit` of the most recent messages, oldest first.
    async fn fetch_recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<TranscriptMessage>, AppError>;

    async fn delete_channel(&self, channel_id: u64) -> Result<(), AppError>;

    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), AppError>;

    /// Grants a member view, send, and history access to a channel.
    async fn grant_member_access(&self, channel_id: u64, user_id: u64) -> Result<(), AppError>;

    /// Removes a member's permission overwrite from a channel.
    async fn revoke_member_access(&self, channel_id: u64, user_id: u64) -> Result<(), AppError>;

    /// Fetches a guild member, returning `None` when the user is not in the guild.
    async fn fetch_member(&self, guild_id: u64, user_id: u64)
        -> Result<Option<MemberInfo>, AppError>;

    /// Fetches a user's display tag, returning `None` for unknown users.
    async fn fetch_user_tag(&self, user_id: u64) -> Result<Option<String>, AppError>;
}
