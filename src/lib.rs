//! Support ticket bot for Discord guilds.
//!
//! Members open tickets from a panel, pick a category, and get a private channel
//! shared with the guild's support staff. Staff manage tickets with slash commands
//! and buttons; closing a ticket stores a transcript and removes the channel.

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod platform;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod ui;
