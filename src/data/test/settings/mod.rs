use crate::{
    data::settings::GuildSettingsRepository,
    model::settings::{SetupParam, TicketCategory, DEFAULT_WELCOME_MESSAGE},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod add_category;
mod find_by_guild_id;
mod get_auto_close_enabled;
mod next_ticket_counter;
mod remove_category_at;
mod set_fields;
mod upsert_setup;
