//! Registered interaction identifiers.
//!
//! Components and modals carry a `custom_id` of the form `<handler>[:<payload>...]`.
//! Resolution tries an exact match against the registered identifiers first, then
//! matches the segment before the first `:`.

pub const SETUP_COMMAND: &str = "setup";
pub const TICKET_COMMAND: &str = "ticket";
pub const SETTINGS_COMMAND: &str = "settings";

pub const CREATE_TICKET: &str = "create_ticket";
pub const CLOSE_TICKET: &str = "close_ticket";
pub const TICKET_PRIORITY: &str = "ticket_priority";
pub const ADD_CATEGORY: &str = "add_category";
pub const REMOVE_CATEGORY: &str = "remove_category";

pub const TICKET_CATEGORY: &str = "ticket_category";
pub const SET_PRIORITY: &str = "set_priority";
pub const REMOVE_CATEGORY_SELECT: &str = "remove_category_select";

pub const TICKET_CREATE_MODAL: &str = "ticket_create_modal";
pub const ADD_CATEGORY_MODAL: &str = "add_category_modal";
pub const SETTINGS_WELCOME_MODAL: &str = "settings_welcome_modal";
pub const SETTINGS_CLOSE_MODAL: &str = "settings_close_modal";

pub const FIELD_TICKET_SUBJECT: &str = "ticketSubject";
pub const FIELD_TICKET_DESCRIPTION: &str = "ticketDescription";
pub const FIELD_CATEGORY_NAME: &str = "categoryName";
pub const FIELD_CATEGORY_DESCRIPTION: &str = "categoryDescription";
pub const FIELD_CATEGORY_EMOJI: &str = "categoryEmoji";
pub const FIELD_WELCOME_MESSAGE: &str = "welcomeMessage";
pub const FIELD_CLOSE_MESSAGE: &str = "closeMessage";

pub const CLOSE_CONFIRM: &str = "confirm";
pub const CLOSE_CANCEL: &str = "cancel";

pub const COMMANDS: &[&str] = &[SETUP_COMMAND, TICKET_COMMAND, SETTINGS_COMMAND];
pub const BUTTONS: &[&str] = &[
    CREATE_TICKET,
    CLOSE_TICKET,
    TICKET_PRIORITY,
    ADD_CATEGORY,
    REMOVE_CATEGORY,
];
pub const SELECT_MENUS: &[&str] = &[TICKET_CATEGORY, SET_PRIORITY, REMOVE_CATEGORY_SELECT];
pub const MODALS: &[&str] = &[
    TICKET_CREATE_MODAL,
    ADD_CATEGORY_MODAL,
    SETTINGS_WELCOME_MODAL,
    SETTINGS_CLOSE_MODAL,
];

/// A component identifier resolved to its registered handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub handler: &'static str,
    /// Segments after the handler segment; empty on exact match.
    pub payload: Vec<&'a str>,
}

/// Resolves a component or modal identifier against a registry.
///
/// # Returns
/// - `Some(Resolved)` - Exact match, or match on the first `:` segment
/// - `None` - No registered handler
pub fn resolve<'a>(registry: &[&'static str], identifier: &'a str) -> Option<Resolved<'a>> {
    if let Some(handler) = registry.iter().find(|id| **id == identifier).copied() {
        return Some(Resolved {
            handler,
            payload: Vec::new(),
        });
    }

    let mut segments = identifier.split(':');
    let head = segments.next()?;
    let handler = registry.iter().find(|id| **id == head).copied()?;

    Some(Resolved {
        handler,
        payload: segments.collect(),
    })
}

/// Resolves a command name; commands match exactly.
pub fn resolve_command(name: &str) -> Option<&'static str> {
    COMMANDS.iter().find(|id| **id == name).copied()
}

pub fn close_ticket_id(ticket_id: &str) -> String {
    format!("{}:{}", CLOSE_TICKET, ticket_id)
}

pub fn close_ticket_confirm_id(ticket_id: &str) -> String {
    format!("{}:{}:{}", CLOSE_TICKET, ticket_id, CLOSE_CONFIRM)
}

pub fn close_ticket_cancel_id(ticket_id: &str) -> String {
    format!("{}:{}:{}", CLOSE_TICKET, ticket_id, CLOSE_CANCEL)
}

pub fn ticket_priority_id(ticket_id: &str) -> String {
    format!("{}:{}", TICKET_PRIORITY, ticket_id)
}

pub fn set_priority_id(ticket_id: &str) -> String {
    format!("{}:{}", SET_PRIORITY, ticket_id)
}

pub fn ticket_category_id(counter: u64) -> String {
    format!("{}:{}", TICKET_CATEGORY, counter)
}
