use chrono::{Duration, Utc};
use test_utils::factory;

use super::{member, Harness};
use crate::{
    data::ticket::TicketRepository,
    error::AppError,
    model::{
        settings::GuildSettings,
        ticket::{TicketPriority, TicketStatus},
        transcript::TranscriptMessage,
    },
    service::ticket::TicketService,
};

mod auto_close;
mod choose_category;
mod close;

/// Inserts an open ticket in channel `channel_id` created by `user_id`.
async fn seed_ticket(
    harness: &Harness,
    settings: &GuildSettings,
    ticket_id: &str,
    channel_id: u64,
    user_id: u64,
) -> entity::ticket::Model {
    factory::ticket::TicketFactory::new(
        harness.db(),
        &settings.guild_id.to_string(),
        &user_id.to_string(),
    )
    .ticket_id(ticket_id)
    .channel_id(channel_id.to_string())
    .build()
    .await
    .unwrap()
}
