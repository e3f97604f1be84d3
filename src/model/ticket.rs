use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Lifecycle status of a ticket.
///
/// Tickets move from `Open` to `Closed` and never back. `Pending` is accepted
/// when reading stored rows but nothing in the bot assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Pending,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Closed => "closed",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "open" => Ok(Self::Open),
            "pending" => Ok(Self::Pending),
            "closed" => Ok(Self::Closed),
            other => Err(format!("Unknown ticket status '{}'", other)),
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority level of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TicketPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low priority issue",
            Self::Medium => "Medium priority issue",
            Self::High => "High priority issue",
            Self::Urgent => "Critical issue requiring immediate attention",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Urgent => "🔴",
        }
    }

    /// Embed colour for log entries about this priority.
    pub fn colour(&self) -> u32 {
        match self {
            Self::Low => 0x00FF00,
            Self::Medium => 0xFFFF00,
            Self::High => 0xFFA500,
            Self::Urgent => 0xFF0000,
        }
    }
}

impl FromStr for TicketPriority {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(format!("Unknown ticket priority '{}'", other)),
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted support ticket bound to a dedicated channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    /// Four-digit, zero-padded counter value, unique within the guild.
    pub ticket_id: String,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Creator of the ticket.
    pub user_id: u64,
    pub category: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub subject: String,
    pub description: String,
    pub assigned_to: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    /// Member who closed the ticket; `None` for automatic closes.
    pub closed_by: Option<u64>,
    pub last_activity: DateTime<Utc>,
    pub tags: Vec<String>,
}

impl Ticket {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Successfully converted ticket
    /// - `Err(DbErr::Custom)` - A stored ID, status, priority, or tag list was invalid
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, DbErr> {
        let guild_id = parse_id("guild_id", &entity.guild_id)?;
        let channel_id = parse_id("channel_id", &entity.channel_id)?;
        let user_id = parse_id("user_id", &entity.user_id)?;
        let assigned_to = entity
            .assigned_to
            .as_deref()
            .map(|id| parse_id("assigned_to", id))
            .transpose()?;
        let closed_by = entity
            .closed_by
            .as_deref()
            .map(|id| parse_id("closed_by", id))
            .transpose()?;

        let tags: Vec<String> = serde_json::from_value(entity.tags)
            .map_err(|e| DbErr::Custom(format!("Failed to parse tags: {}", e)))?;

        Ok(Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            guild_id,
            channel_id,
            user_id,
            category: entity.category,
            priority: entity.priority.parse().map_err(DbErr::Custom)?,
            status: entity.status.parse().map_err(DbErr::Custom)?,
            subject: entity.subject,
            description: entity.description,
            assigned_to,
            created_at: entity.created_at,
            closed_at: entity.closed_at,
            closed_by,
            last_activity: entity.last_activity,
            tags,
        })
    }

    pub fn is_open(&self) -> bool {
        self.status == TicketStatus::Open
    }
}

fn parse_id(field: &str, value: &str) -> Result<u64, DbErr> {
    value
        .parse::<u64>()
        .map_err(|e| DbErr::Custom(format!("Failed to parse {}: {}", field, e)))
}

/// Parameters for persisting a newly opened ticket.
#[derive(Debug, Clone)]
pub struct CreateTicketParam {
    pub ticket_id: String,
    pub guild_id: u64,
    pub channel_id: u64,
    pub user_id: u64,
    pub category: String,
    pub subject: String,
    pub description: String,
}

/// An open ticket with resolved display names, as shown by the ticket list.
#[derive(Debug, Clone)]
pub struct TicketSummary {
    pub ticket: Ticket,
    pub creator_tag: String,
    pub assignee_tag: Option<String>,
}

/// Formats a counter value as a ticket ID, e.g. `7` becomes `0007`.
pub fn format_ticket_id(counter: u64) -> String {
    format!("{:04}", counter)
}

/// Builds a ticket channel name of the form `ticket-<id>-<suffix>`.
///
/// The suffix is lowercased and every character outside `[a-z0-9]` is replaced
/// with `-`.
pub fn ticket_channel_name(ticket_id: &str, suffix: &str) -> String {
    let suffix: String = suffix
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect();

    format!("ticket-{}-{}", ticket_id, suffix)
}
