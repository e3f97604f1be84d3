use crate::{
    data::ticket::TicketRepository,
    model::ticket::{CreateTicketParam, TicketPriority, TicketStatus},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod count_open_for_user;
mod list_stale_open;
