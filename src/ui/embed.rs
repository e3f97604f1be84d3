//! Embed builders for channel messages, replies, and log entries.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, Timestamp};

use crate::{
    model::{
        settings::{GuildSettings, SetupParam, TicketCategory},
        ticket::{Ticket, TicketPriority, TicketSummary},
    },
    ui::{COLOUR_BLURPLE, COLOUR_GREEN, COLOUR_ORANGE, COLOUR_RED},
};

/// Discord rejects embeds with more than 25 fields.
pub const MAX_EMBED_FIELDS: usize = 25;

/// Formats categories as `<emoji> **<name>**: <description>` lines.
pub fn category_lines(categories: &[TicketCategory]) -> String {
    categories
        .iter()
        .map(|c| format!("{} **{}**: {}", c.emoji, c.name, c.description))
        .collect::<Vec<_>>()
        .join("\n")
}

fn discord_time(at: DateTime<Utc>, style: char) -> String {
    format!("<t:{}:{}>", at.timestamp(), style)
}

pub fn panel(categories: &[TicketCategory]) -> CreateEmbed {
    let categories = if categories.is_empty() {
        "No categories configured.".to_string()
    } else {
        category_lines(categories)
    };

    CreateEmbed::new()
        .title("🎫 Support Ticket System")
        .description("Need assistance? Click the button below to create a support ticket.")
        .colour(COLOUR_BLURPLE)
        .field("Available Categories", categories, false)
        .footer(CreateEmbedFooter::new("Advanced Ticket System"))
        .timestamp(Timestamp::now())
}

/// Embed posted with the welcome message in a new ticket channel.
pub fn ticket_welcome(ticket: &Ticket) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("Ticket #{} - {}", ticket.ticket_id, ticket.subject))
        .description(format!(
            "**Category:** {}\n**Description:**\n{}",
            ticket.category, ticket.description
        ))
        .colour(COLOUR_BLURPLE)
        .footer(CreateEmbedFooter::new(format!("Ticket ID: {}", ticket.ticket_id)))
        .timestamp(Timestamp::now())
}

/// Notice posted in a ticket channel when it closes.
pub fn ticket_closed(close_message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Ticket Closed")
        .description(close_message)
        .colour(COLOUR_RED)
        .timestamp(Timestamp::now())
}

pub fn settings_view(settings: &GuildSettings) -> CreateEmbed {
    let auto_close = if settings.auto_close_hours > 0 {
        format!("{} hours", settings.auto_close_hours)
    } else {
        "Disabled".to_string()
    };

    let mut embed = CreateEmbed::new()
        .title("Ticket System Settings")
        .colour(COLOUR_BLURPLE)
        .field("Support Role", format!("<@&{}>", settings.support_role_id), true)
        .field("Admin Role", format!("<@&{}>", settings.admin_role_id), true)
        .field("Log Channel", format!("<#{}>", settings.log_channel_id), true)
        .field(
            "Max Tickets Per User",
            settings.max_tickets_per_user.to_string(),
            true,
        )
        .field("Auto-Close Time", auto_close, true)
        .field("Ticket Counter", settings.ticket_counter.to_string(), true)
        .field("Welcome Message", &settings.welcome_message, false)
        .field("Close Message", &settings.close_message, false)
        .timestamp(Timestamp::now());

    if !settings.categories.is_empty() {
        embed = embed.field(
            "Ticket Categories",
            category_lines(&settings.categories),
            false,
        );
    }

    embed
}

pub fn categories_overview(categories: &[TicketCategory]) -> CreateEmbed {
    let listing = if categories.is_empty() {
        "No categories defined yet.".to_string()
    } else {
        categories
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{}. {} **{}**: {}", i + 1, c.emoji, c.name, c.description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    CreateEmbed::new()
        .title("Ticket Categories")
        .description("Manage your ticket categories using the buttons below.")
        .colour(COLOUR_BLURPLE)
        .field("Current Categories", listing, false)
}

pub fn category_added(category: &TicketCategory) -> CreateEmbed {
    CreateEmbed::new()
        .title("Category Added")
        .description(format!(
            "The category \"{}\" has been added to the ticket system.",
            category.name
        ))
        .field("Name", &category.name, true)
        .field("Description", &category.description, true)
        .field("Emoji", &category.emoji, true)
        .colour(COLOUR_GREEN)
        .timestamp(Timestamp::now())
}

pub fn category_removed(category: &TicketCategory) -> CreateEmbed {
    CreateEmbed::new()
        .title("Category Removed")
        .description(format!(
            "The category \"{}\" has been removed from the ticket system.",
            category.name
        ))
        .colour(COLOUR_RED)
        .timestamp(Timestamp::now())
}

pub fn welcome_message_updated(message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Welcome Message Updated")
        .description("The welcome message for new tickets has been updated.")
        .field("New Message", message, false)
        .colour(COLOUR_GREEN)
        .timestamp(Timestamp::now())
}

pub fn close_message_updated(message: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Close Message Updated")
        .description("The close message for tickets has been updated.")
        .field("New Message", message, false)
        .colour(COLOUR_GREEN)
        .timestamp(Timestamp::now())
}

/// Open tickets listing; entries beyond the embed field limit are counted but not shown.
pub fn ticket_list(summaries: &[TicketSummary]) -> CreateEmbed {
    let mut description = format!("There are currently {} open tickets.", summaries.len());
    if summaries.len() > MAX_EMBED_FIELDS {
        description.push_str(&format!(" Showing the oldest {}.", MAX_EMBED_FIELDS));
    }

    let mut embed = CreateEmbed::new()
        .title("Open Tickets")
        .description(description)
        .colour(COLOUR_BLURPLE)
        .timestamp(Timestamp::now());

    for summary in summaries.iter().take(MAX_EMBED_FIELDS) {
        let ticket = &summary.ticket;
        embed = embed.field(
            format!("Ticket #{} - {}", ticket.ticket_id, ticket.subject),
            format!(
                "**Category:** {}\n**Created by:** {}\n**Priority:** {} {}\n**Assigned to:** {}\n**Channel:** <#{}>\n**Created:** {}",
                ticket.category,
                summary.creator_tag,
                ticket.priority.emoji(),
                ticket.priority.label(),
                summary.assignee_tag.as_deref().unwrap_or("Unassigned"),
                ticket.channel_id,
                discord_time(ticket.created_at, 'R'),
            ),
            false,
        );
    }

    embed
}

pub fn log_setup(actor_tag: &str, param: &SetupParam, panel_link: Option<&str>) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title("Ticket System Setup")
        .description(format!("Ticket system has been set up by {}", actor_tag))
        .colour(COLOUR_GREEN)
        .field("Support Role", format!("<@&{}>", param.support_role_id), true)
        .field("Admin Role", format!("<@&{}>", param.admin_role_id), true)
        .field("Log Channel", format!("<#{}>", param.log_channel_id), true)
        .timestamp(Timestamp::now());

    if let Some(link) = panel_link {
        embed = embed.field("Panel Message", format!("[Jump to Message]({})", link), false);
    }

    embed
}

pub fn log_ticket_created(actor_tag: &str, ticket: &Ticket) -> CreateEmbed {
    CreateEmbed::new()
        .title("New Ticket Created")
        .description(format!("A new ticket has been created by {}", actor_tag))
        .colour(COLOUR_GREEN)
        .field("Ticket ID", &ticket.ticket_id, true)
        .field("Category", &ticket.category, true)
        .field("Subject", &ticket.subject, true)
        .field("Channel", format!("<#{}>", ticket.channel_id), true)
        .timestamp(Timestamp::now())
}

pub fn log_member_added(ticket: &Ticket, user_id: u64, actor_tag: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("User Added to Ticket")
        .description(format!(
            "<@{}> was added to ticket #{}",
            user_id, ticket.ticket_id
        ))
        .colour(COLOUR_GREEN)
        .field("Added By", actor_tag, true)
        .field("Ticket", format!("<#{}>", ticket.channel_id), true)
        .timestamp(Timestamp::now())
}

pub fn log_member_removed(ticket: &Ticket, user_id: u64, actor_tag: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("User Removed from Ticket")
        .description(format!(
            "<@{}> was removed from ticket #{}",
            user_id, ticket.ticket_id
        ))
        .colour(COLOUR_RED)
        .field("Removed By", actor_tag, true)
        .field("Ticket", format!("<#{}>", ticket.channel_id), true)
        .timestamp(Timestamp::now())
}

pub fn log_renamed(ticket: &Ticket, new_name: &str, actor_tag: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Ticket Renamed")
        .description(format!("Ticket #{} was renamed", ticket.ticket_id))
        .colour(COLOUR_ORANGE)
        .field("Renamed By", actor_tag, true)
        .field("New Name", new_name, true)
        .timestamp(Timestamp::now())
}

pub fn log_assigned(ticket: &Ticket, assignee_tag: &str, actor_tag: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Ticket Assigned")
        .description(format!(
            "Ticket #{} was assigned to {}",
            ticket.ticket_id, assignee_tag
        ))
        .colour(COLOUR_BLURPLE)
        .field("Assigned By", actor_tag, true)
        .field("Ticket", format!("<#{}>", ticket.channel_id), true)
        .timestamp(Timestamp::now())
}

pub fn log_priority(ticket: &Ticket, priority: TicketPriority, actor_tag: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title("Ticket Priority Updated")
        .description(format!(
            "Ticket #{} priority has been updated to {}",
            ticket.ticket_id, priority
        ))
        .colour(priority.colour())
        .field("Updated By", actor_tag, true)
        .field("Ticket", format!("<#{}>", ticket.channel_id), true)
        .timestamp(Timestamp::now())
}

/// Close log posted with the transcript attachment.
///
/// # Arguments
/// - `ticket` - The ticket as it was before closing
/// - `closed_by` - Display text for who closed it
/// - `creator_tag` - Display tag of the ticket creator
/// - `closed_at` - Close timestamp
pub fn log_ticket_closed(
    ticket: &Ticket,
    closed_by: &str,
    creator_tag: &str,
    closed_at: DateTime<Utc>,
) -> CreateEmbed {
    CreateEmbed::new()
        .title("Ticket Closed")
        .description(format!(
            "Ticket #{} has been closed by {}",
            ticket.ticket_id, closed_by
        ))
        .colour(COLOUR_RED)
        .field("Subject", &ticket.subject, true)
        .field("Category", &ticket.category, true)
        .field("Created By", creator_tag, true)
        .field("Created At", discord_time(ticket.created_at, 'F'), true)
        .field("Closed At", discord_time(closed_at, 'F'), true)
        .timestamp(Timestamp::now())
}
