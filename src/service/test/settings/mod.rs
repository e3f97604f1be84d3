use super::{administrator, member, Harness};
use crate::{
    error::AppError,
    model::settings::{SetupParam, TicketCategory},
    service::settings::SettingsService,
};

mod categories;
mod limits;
mod setup;
