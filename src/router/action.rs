//! Decoding of inbound interactions into typed actions.
//!
//! An [`InteractionEvent`] is the platform-neutral form of a slash command, button
//! press, select menu choice, or modal submission. [`decode`] resolves its identifier
//! against the registries in [`ids`](crate::router::ids) and parses the payload once,
//! so handlers receive typed values and never re-split identifier strings.

use std::collections::HashMap;

use crate::{
    error::AppError,
    model::ticket::TicketPriority,
    router::ids::{self, Resolved},
};

const STALE_INTERACTION_MESSAGE: &str = "This interaction is no longer valid.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionKind {
    Command,
    Button,
    SelectMenu,
    ModalSubmit,
}

/// A command option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    String(String),
    Integer(i64),
    User(u64),
    Role(u64),
    Channel(u64),
}

/// A platform-neutral inbound interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    pub kind: InteractionKind,
    /// Command name or component custom ID.
    pub identifier: String,
    pub subcommand: Option<String>,
    /// Command options by name.
    pub options: HashMap<String, OptionValue>,
    /// Values chosen in a select menu.
    pub values: Vec<String>,
    /// Modal text inputs by custom ID.
    pub fields: HashMap<String, String>,
}

impl InteractionEvent {
    fn new(kind: InteractionKind, identifier: impl Into<String>) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            subcommand: None,
            options: HashMap::new(),
            values: Vec::new(),
            fields: HashMap::new(),
        }
    }

    pub fn command(name: impl Into<String>) -> Self {
        Self::new(InteractionKind::Command, name)
    }

    pub fn button(custom_id: impl Into<String>) -> Self {
        Self::new(InteractionKind::Button, custom_id)
    }

    pub fn select(custom_id: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            values,
            ..Self::new(InteractionKind::SelectMenu, custom_id)
        }
    }

    pub fn modal(custom_id: impl Into<String>, fields: HashMap<String, String>) -> Self {
        Self {
            fields,
            ..Self::new(InteractionKind::ModalSubmit, custom_id)
        }
    }

    pub fn with_subcommand(mut self, name: impl Into<String>) -> Self {
        self.subcommand = Some(name.into());
        self
    }

    pub fn with_option(mut self, name: impl Into<String>, value: OptionValue) -> Self {
        self.options.insert(name.into(), value);
        self
    }
}

/// `/ticket` subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TicketCommand {
    Panel,
    Close,
    Add { user_id: u64 },
    Remove { user_id: u64 },
    Rename { name: String },
    Priority,
    Assign { user_id: u64 },
    List,
}

/// `/settings` subcommands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsCommand {
    View,
    Welcome,
    Close,
    Categories,
    MaxTickets { limit: i64 },
    AutoClose { hours: i64 },
}

/// Step of the close flow encoded in the close button ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseStep {
    Request,
    Confirm,
    Cancel,
}

/// A decoded interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Setup {
        support_role_id: u64,
        admin_role_id: u64,
        log_channel_id: u64,
    },
    Ticket(TicketCommand),
    Settings(SettingsCommand),
    OpenTicketForm,
    Close {
        ticket_id: String,
        step: CloseStep,
    },
    ShowPriorityMenu {
        ticket_id: String,
    },
    OpenCategoryForm,
    ShowCategoryRemoval,
    ChooseCategory {
        counter: u64,
        category: String,
    },
    SetPriority {
        ticket_id: String,
        priority: TicketPriority,
    },
    RemoveCategory {
        index: usize,
    },
    SubmitTicketForm {
        subject: String,
        description: String,
    },
    AddCategory {
        name: String,
        description: String,
        emoji: String,
    },
    SetWelcomeMessage(String),
    SetCloseMessage(String),
}

/// How an interaction is acknowledged before its action runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgement {
    None,
    /// Acknowledge a component; the reply edits the message it is attached to.
    DeferUpdate,
    /// Acknowledge with a pending ephemeral response.
    DeferEphemeral,
}

impl Action {
    /// Actions that create channels, allocate counters, or build transcripts are
    /// acknowledged before they run.
    pub fn acknowledgement(&self) -> Acknowledgement {
        match self {
            Self::ChooseCategory { .. }
            | Self::Close {
                step: CloseStep::Confirm,
                ..
            } => Acknowledgement::DeferUpdate,
            Self::SubmitTicketForm { .. } => Acknowledgement::DeferEphemeral,
            _ => Acknowledgement::None,
        }
    }
}

/// Decodes an interaction into an action.
///
/// # Returns
/// - `Ok(Some(Action))` - The interaction matched a registered handler
/// - `Ok(None)` - No handler is registered for the identifier
/// - `Err(AppError::Validation)` - A registered identifier carried an unusable payload
pub fn decode(event: &InteractionEvent) -> Result<Option<Action>, AppError> {
    match event.kind {
        InteractionKind::Command => match ids::resolve_command(&event.identifier) {
            Some(command) => decode_command(command, event).map(Some),
            None => Ok(None),
        },
        InteractionKind::Button => match ids::resolve(ids::BUTTONS, &event.identifier) {
            Some(resolved) => decode_button(&resolved).map(Some),
            None => Ok(None),
        },
        InteractionKind::SelectMenu => match ids::resolve(ids::SELECT_MENUS, &event.identifier) {
            Some(resolved) => decode_select(&resolved, &event.values).map(Some),
            None => Ok(None),
        },
        InteractionKind::ModalSubmit => match ids::resolve(ids::MODALS, &event.identifier) {
            Some(resolved) => decode_modal(resolved.handler, &event.fields).map(Some),
            None => Ok(None),
        },
    }
}

fn decode_command(command: &str, event: &InteractionEvent) -> Result<Action, AppError> {
    match command {
        ids::SETUP_COMMAND => Ok(Action::Setup {
            support_role_id: role_option(event, "support_role")?,
            admin_role_id: role_option(event, "admin_role")?,
            log_channel_id: channel_option(event, "log_channel")?,
        }),
        ids::TICKET_COMMAND => {
            let command = match subcommand(event)? {
                "panel" => TicketCommand::Panel,
                "close" => TicketCommand::Close,
                "add" => TicketCommand::Add {
                    user_id: user_option(event, "user")?,
                },
                "remove" => TicketCommand::Remove {
                    user_id: user_option(event, "user")?,
                },
                "rename" => TicketCommand::Rename {
                    name: string_option(event, "name")?,
                },
                "priority" => TicketCommand::Priority,
                "assign" => TicketCommand::Assign {
                    user_id: user_option(event, "user")?,
                },
                "list" => TicketCommand::List,
                other => return Err(unknown_subcommand(other)),
            };
            Ok(Action::Ticket(command))
        }
        ids::SETTINGS_COMMAND => {
            let command = match subcommand(event)? {
                "view" => SettingsCommand::View,
                "welcome" => SettingsCommand::Welcome,
                "close" => SettingsCommand::Close,
                "categories" => SettingsCommand::Categories,
                "max_tickets" => SettingsCommand::MaxTickets {
                    limit: integer_option(event, "limit")?,
                },
                "auto_close" => SettingsCommand::AutoClose {
                    hours: integer_option(event, "hours")?,
                },
                other => return Err(unknown_subcommand(other)),
            };
            Ok(Action::Settings(command))
        }
        _ => Err(stale()),
    }
}

fn decode_button(resolved: &Resolved<'_>) -> Result<Action, AppError> {
    match (resolved.handler, resolved.payload.as_slice()) {
        (ids::CREATE_TICKET, []) => Ok(Action::OpenTicketForm),
        (ids::CLOSE_TICKET, [ticket_id]) => Ok(close(ticket_id, CloseStep::Request)),
        (ids::CLOSE_TICKET, [ticket_id, ids::CLOSE_CONFIRM]) => {
            Ok(close(ticket_id, CloseStep::Confirm))
        }
        (ids::CLOSE_TICKET, [ticket_id, ids::CLOSE_CANCEL]) => {
            Ok(close(ticket_id, CloseStep::Cancel))
        }
        (ids::TICKET_PRIORITY, [ticket_id]) => Ok(Action::ShowPriorityMenu {
            ticket_id: ticket_id.to_string(),
        }),
        (ids::ADD_CATEGORY, []) => Ok(Action::OpenCategoryForm),
        (ids::REMOVE_CATEGORY, []) => Ok(Action::ShowCategoryRemoval),
        _ => Err(stale()),
    }
}

fn decode_select(resolved: &Resolved<'_>, values: &[String]) -> Result<Action, AppError> {
    let value = values.first().ok_or_else(stale)?;

    match (resolved.handler, resolved.payload.as_slice()) {
        (ids::TICKET_CATEGORY, [counter]) => Ok(Action::ChooseCategory {
            counter: counter.parse().map_err(|_| stale())?,
            category: value.clone(),
        }),
        (ids::SET_PRIORITY, [ticket_id]) => Ok(Action::SetPriority {
            ticket_id: ticket_id.to_string(),
            priority: value
                .parse()
                .map_err(|_| AppError::Validation("Unknown priority level.".to_string()))?,
        }),
        (ids::REMOVE_CATEGORY_SELECT, []) => Ok(Action::RemoveCategory {
            index: value
                .parse()
                .map_err(|_| AppError::Validation("Invalid category selection.".to_string()))?,
        }),
        _ => Err(stale()),
    }
}

fn decode_modal(handler: &str, fields: &HashMap<String, String>) -> Result<Action, AppError> {
    match handler {
        ids::TICKET_CREATE_MODAL => Ok(Action::SubmitTicketForm {
            subject: field(fields, ids::FIELD_TICKET_SUBJECT)?,
            description: field(fields, ids::FIELD_TICKET_DESCRIPTION)?,
        }),
        ids::ADD_CATEGORY_MODAL => Ok(Action::AddCategory {
            name: field(fields, ids::FIELD_CATEGORY_NAME)?,
            description: field(fields, ids::FIELD_CATEGORY_DESCRIPTION)?,
            emoji: field(fields, ids::FIELD_CATEGORY_EMOJI)?,
        }),
        ids::SETTINGS_WELCOME_MODAL => Ok(Action::SetWelcomeMessage(field(
            fields,
            ids::FIELD_WELCOME_MESSAGE,
        )?)),
        ids::SETTINGS_CLOSE_MODAL => Ok(Action::SetCloseMessage(field(
            fields,
            ids::FIELD_CLOSE_MESSAGE,
        )?)),
        _ => Err(stale()),
    }
}

fn close(ticket_id: &str, step: CloseStep) -> Action {
    Action::Close {
        ticket_id: ticket_id.to_string(),
        step,
    }
}

fn subcommand(event: &InteractionEvent) -> Result<&str, AppError> {
    event.subcommand.as_deref().ok_or_else(stale)
}

fn option<'a>(event: &'a InteractionEvent, name: &str) -> Result<&'a OptionValue, AppError> {
    event
        .options
        .get(name)
        .ok_or_else(|| AppError::Validation(format!("Missing option `{}`.", name)))
}

fn wrong_type(name: &str) -> AppError {
    AppError::Validation(format!("Invalid value for option `{}`.", name))
}

fn user_option(event: &InteractionEvent, name: &str) -> Result<u64, AppError> {
    match option(event, name)? {
        OptionValue::User(id) => Ok(*id),
        _ => Err(wrong_type(name)),
    }
}

fn role_option(event: &InteractionEvent, name: &str) -> Result<u64, AppError> {
    match option(event, name)? {
        OptionValue::Role(id) => Ok(*id),
        _ => Err(wrong_type(name)),
    }
}

fn channel_option(event: &InteractionEvent, name: &str) -> Result<u64, AppError> {
    match option(event, name)? {
        OptionValue::Channel(id) => Ok(*id),
        _ => Err(wrong_type(name)),
    }
}

fn string_option(event: &InteractionEvent, name: &str) -> Result<String, AppError> {
    match option(event, name)? {
        OptionValue::String(value) => Ok(value.clone()),
        _ => Err(wrong_type(name)),
    }
}

fn integer_option(event: &InteractionEvent, name: &str) -> Result<i64, AppError> {
    match option(event, name)? {
        OptionValue::Integer(value) => Ok(*value),
        _ => Err(wrong_type(name)),
    }
}

fn field(fields: &HashMap<String, String>, id: &str) -> Result<String, AppError> {
    fields
        .get(id)
        .cloned()
        .ok_or_else(|| AppError::Validation("The submitted form is incomplete.".to_string()))
}

fn unknown_subcommand(name: &str) -> AppError {
    AppError::Validation(format!("Unknown subcommand `{}`.", name))
}

fn stale() -> AppError {
    AppError::Validation(STALE_INTERACTION_MESSAGE.to_string())
}
