use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateInputText, CreateModal, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, InputTextStyle, ReactionType,
};

use crate::{
    model::{
        settings::{
            TicketCategory, MAX_CATEGORY_DESCRIPTION_LEN, MAX_CATEGORY_EMOJI_LEN,
            MAX_CATEGORY_NAME_LEN, MAX_MESSAGE_LEN,
        },
        ticket::TicketPriority,
    },
    router::ids,
};

fn unicode(emoji: &str) -> ReactionType {
    ReactionType::Unicode(emoji.to_string())
}

/// The "Create Ticket" button under the ticket panel.
pub fn panel_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![CreateButton::new(ids::CREATE_TICKET)
        .label("Create Ticket")
        .style(ButtonStyle::Primary)
        .emoji(unicode("🎫"))])
}

/// Close and priority buttons posted with the welcome message of a ticket.
pub fn ticket_controls(ticket_id: &str) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ids::close_ticket_id(ticket_id))
            .label("Close Ticket")
            .style(ButtonStyle::Danger)
            .emoji(unicode("🔒")),
        CreateButton::new(ids::ticket_priority_id(ticket_id))
            .label("Set Priority")
            .style(ButtonStyle::Secondary)
            .emoji(unicode("🔖")),
    ])
}

pub fn close_confirmation(ticket_id: &str) -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ids::close_ticket_confirm_id(ticket_id))
            .label("Confirm")
            .style(ButtonStyle::Danger),
        CreateButton::new(ids::close_ticket_cancel_id(ticket_id))
            .label("Cancel")
            .style(ButtonStyle::Secondary),
    ])
}

/// Category choice for a submitted ticket form, keyed by the reserved counter.
pub fn category_select(counter: u64, categories: &[TicketCategory]) -> CreateActionRow {
    let options = categories
        .iter()
        .map(|category| {
            CreateSelectMenuOption::new(&category.name, &category.name)
                .description(&category.description)
                .emoji(unicode(&category.emoji))
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ids::ticket_category_id(counter),
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Select a category"),
    )
}

pub fn priority_select(ticket_id: &str) -> CreateActionRow {
    let options = TicketPriority::ALL
        .iter()
        .map(|priority| {
            CreateSelectMenuOption::new(priority.label(), priority.as_str())
                .description(priority.description())
                .emoji(unicode(priority.emoji()))
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ids::set_priority_id(ticket_id),
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Select a priority level"),
    )
}

pub fn category_management_row() -> CreateActionRow {
    CreateActionRow::Buttons(vec![
        CreateButton::new(ids::ADD_CATEGORY)
            .label("Add Category")
            .style(ButtonStyle::Success)
            .emoji(unicode("➕")),
        CreateButton::new(ids::REMOVE_CATEGORY)
            .label("Remove Category")
            .style(ButtonStyle::Danger)
            .emoji(unicode("🗑️")),
    ])
}

/// Removal menu whose option values are indices into the category list.
pub fn remove_category_select(categories: &[TicketCategory]) -> CreateActionRow {
    let options = categories
        .iter()
        .enumerate()
        .map(|(index, category)| {
            CreateSelectMenuOption::new(&category.name, index.to_string())
                .description(&category.description)
                .emoji(unicode(&category.emoji))
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(
            ids::REMOVE_CATEGORY_SELECT,
            CreateSelectMenuKind::String { options },
        )
        .placeholder("Select a category to remove"),
    )
}

pub fn ticket_form() -> CreateModal {
    CreateModal::new(ids::TICKET_CREATE_MODAL, "Create a Support Ticket").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Subject", ids::FIELD_TICKET_SUBJECT)
                .placeholder("Brief description of your issue")
                .required(true)
                .max_length(100),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(
                InputTextStyle::Paragraph,
                "Description",
                ids::FIELD_TICKET_DESCRIPTION,
            )
            .placeholder("Please provide details about your issue")
            .required(true)
            .max_length(1000),
        ),
    ])
}

pub fn category_form() -> CreateModal {
    CreateModal::new(ids::ADD_CATEGORY_MODAL, "Add Ticket Category").components(vec![
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Category Name", ids::FIELD_CATEGORY_NAME)
                .placeholder("e.g., Technical Support")
                .required(true)
                .max_length(MAX_CATEGORY_NAME_LEN as u16),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(
                InputTextStyle::Short,
                "Description",
                ids::FIELD_CATEGORY_DESCRIPTION,
            )
            .placeholder("Brief description of this category")
            .required(true)
            .max_length(MAX_CATEGORY_DESCRIPTION_LEN as u16),
        ),
        CreateActionRow::InputText(
            CreateInputText::new(InputTextStyle::Short, "Emoji", ids::FIELD_CATEGORY_EMOJI)
                .placeholder("Single emoji (e.g., 🔧)")
                .required(true)
                .max_length(MAX_CATEGORY_EMOJI_LEN as u16),
        ),
    ])
}

fn message_form(
    modal_id: &str,
    title: &str,
    field_id: &str,
    label: &str,
    placeholder: &str,
    current: &str,
) -> CreateModal {
    CreateModal::new(modal_id, title).components(vec![CreateActionRow::InputText(
        CreateInputText::new(InputTextStyle::Paragraph, label, field_id)
            .placeholder(placeholder)
            .required(true)
            .max_length(MAX_MESSAGE_LEN as u16)
            .value(current),
    )])
}

pub fn welcome_message_form(current: &str) -> CreateModal {
    message_form(
        ids::SETTINGS_WELCOME_MODAL,
        "Set Welcome Message",
        ids::FIELD_WELCOME_MESSAGE,
        "Welcome Message",
        "Enter the welcome message for new tickets",
        current,
    )
}

pub fn close_message_form(current: &str) -> CreateModal {
    message_form(
        ids::SETTINGS_CLOSE_MODAL,
        "Set Close Message",
        ids::FIELD_CLOSE_MESSAGE,
        "Close Message",
        "Enter the message shown when tickets are closed",
        current,
    )
}
