//! Error types for the ticket bot.
//!
//! `AppError` is the top-level error returned by services, repositories wrapped by
//! services, and interaction handlers. Variants fall into two groups: user-facing
//! rejections (`NotFound`, `PermissionDenied`, `Validation`) whose message is shown
//! to the member who triggered the interaction, and infrastructure failures (database,
//! Discord, filesystem, scheduler) which are logged and answered with a generic message.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Message shown to members when an interaction fails for a non user-facing reason.
pub const GENERIC_FAILURE_MESSAGE: &str = "There was an error while executing this command!";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Filesystem error while writing transcripts.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// A referenced resource does not exist.
    ///
    /// # Fields
    /// - Message shown to the member
    #[error("{0}")]
    NotFound(String),

    /// The member lacks the role or permission required for the action.
    ///
    /// # Fields
    /// - Message shown to the member
    #[error("{0}")]
    PermissionDenied(String),

    /// The input was rejected before any state was mutated.
    ///
    /// # Fields
    /// - Message shown to the member
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Returns true for errors whose message is meant for the member.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::PermissionDenied(_) | Self::Validation(_)
        )
    }

    /// Message to show the member who triggered the failing interaction.
    ///
    /// User-facing variants return their own message. Every other variant returns
    /// [`GENERIC_FAILURE_MESSAGE`] so internal details never reach Discord.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::PermissionDenied(msg) | Self::Validation(msg) => {
                msg.clone()
            }
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
