//! Discord gateway integration.
//!
//! The bot receives interactions and guild events over the gateway, hands them to the
//! router and services, and delivers the resulting replies.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Channel deletions for ticket reconciliation
//! - `GUILD_MESSAGES` - Message events for ticket activity tracking
//! - `MESSAGE_CONTENT` - Message text in transcripts (privileged intent)
//!
//! `MESSAGE_CONTENT` must be enabled in the Discord Developer Portal.

pub mod commands;
pub mod handler;
pub mod respond;
pub mod start;
