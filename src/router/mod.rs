//! Interaction routing.
//!
//! Inbound interactions are decoded once into an [`Action`](action::Action) and
//! dispatched to the settings and ticket services. The returned [`Reply`] describes
//! what the member sees; delivering it is left to the bot layer.

pub mod action;
pub mod ids;
pub mod reply;

use crate::{
    error::AppError,
    model::{member::MemberInfo, settings::SetupParam},
    router::{
        action::{Action, CloseStep, SettingsCommand, TicketCommand},
        reply::{Reply, ReplyMessage},
    },
    service::{settings::SettingsService, ticket::TicketService},
    state::AppState,
    ui,
};

/// The member, guild, and channel an interaction came from.
#[derive(Debug, Clone)]
pub struct Invoker {
    pub guild_id: u64,
    pub channel_id: u64,
    pub member: MemberInfo,
}

/// Runs an action and builds the reply for the invoking member.
///
/// # Arguments
/// - `state` - Shared application state
/// - `invoker` - Member who triggered the interaction
/// - `action` - Decoded interaction
///
/// # Returns
/// - `Ok(Reply)` - Reply to deliver
/// - `Err(AppError)` - Failure to report with [`failure_reply`]
pub async fn dispatch(
    state: &AppState,
    invoker: &Invoker,
    action: Action,
) -> Result<Reply, AppError> {
    let settings = SettingsService::new(&state.db, state.platform.as_ref());
    let tickets = TicketService::new(state);
    let guild_id = invoker.guild_id;
    let member = &invoker.member;

    match action {
        Action::Setup {
            support_role_id,
            admin_role_id,
            log_channel_id,
        } => {
            let param = SetupParam {
                guild_id,
                support_role_id,
                admin_role_id,
                log_channel_id,
            };
            let outcome = settings.setup(param, member, invoker.channel_id).await?;

            Ok(Reply::ephemeral(if outcome.created {
                "Ticket system has been set up successfully!"
            } else {
                "Ticket system settings have been updated successfully!"
            }))
        }
        Action::Ticket(command) => ticket_command(&tickets, invoker, command).await,
        Action::Settings(command) => settings_command(&settings, invoker, command).await,
        Action::OpenTicketForm => Ok(Reply::Modal(ui::component::ticket_form())),
        Action::SubmitTicketForm {
            subject,
            description,
        } => {
            let pending = tickets
                .submit_form(guild_id, member, &subject, &description)
                .await?;

            Ok(Reply::Message(
                ReplyMessage::text("Please select a category for your ticket:")
                    .with_components(vec![ui::component::category_select(
                        pending.counter,
                        &pending.categories,
                    )])
                    .ephemeral(),
            ))
        }
        Action::ChooseCategory { counter, category } => {
            let ticket = tickets
                .choose_category(guild_id, member, counter, &category)
                .await?;

            Ok(Reply::update(format!(
                "Your ticket has been created: <#{}>",
                ticket.channel_id
            )))
        }
        Action::Close { ticket_id, step } => match step {
            CloseStep::Request => {
                let ticket = tickets.request_close(guild_id, &ticket_id, member).await?;
                Ok(close_confirmation(&ticket.ticket_id))
            }
            CloseStep::Confirm => {
                tickets.confirm_close(guild_id, &ticket_id, member).await?;
                Ok(Reply::update("Ticket has been closed."))
            }
            CloseStep::Cancel => Ok(Reply::update("Ticket closure cancelled.")),
        },
        Action::ShowPriorityMenu { ticket_id } => Ok(priority_menu(&ticket_id)),
        Action::SetPriority {
            ticket_id,
            priority,
        } => {
            tickets
                .set_priority(guild_id, &ticket_id, member, priority)
                .await?;

            Ok(Reply::update(format!(
                "Ticket priority has been set to {} **{}**",
                priority.emoji(),
                priority.label()
            )))
        }
        Action::OpenCategoryForm => {
            settings.get_for_admin(guild_id, member).await?;
            Ok(Reply::Modal(ui::component::category_form()))
        }
        Action::ShowCategoryRemoval => {
            let categories = settings.categories_for_removal(guild_id, member).await?;

            Ok(Reply::Message(
                ReplyMessage::text("Select a category to remove:")
                    .with_components(vec![ui::component::remove_category_select(&categories)])
                    .ephemeral(),
            ))
        }
        Action::RemoveCategory { index } => {
            let removed = settings.remove_category(guild_id, member, index).await?;
            Ok(Reply::Update(ReplyMessage::embed(
                ui::embed::category_removed(&removed),
            )))
        }
        Action::AddCategory {
            name,
            description,
            emoji,
        } => {
            let category = settings
                .add_category(guild_id, member, &name, &description, &emoji)
                .await?;
            Ok(Reply::Message(
                ReplyMessage::embed(ui::embed::category_added(&category)).ephemeral(),
            ))
        }
        Action::SetWelcomeMessage(message) => {
            let message = settings
                .set_welcome_message(guild_id, member, &message)
                .await?;
            Ok(Reply::Message(
                ReplyMessage::embed(ui::embed::welcome_message_updated(&message)).ephemeral(),
            ))
        }
        Action::SetCloseMessage(message) => {
            let message = settings.set_close_message(guild_id, member, &message).await?;
            Ok(Reply::Message(
                ReplyMessage::embed(ui::embed::close_message_updated(&message)).ephemeral(),
            ))
        }
    }
}

async fn ticket_command(
    tickets: &TicketService<'_>,
    invoker: &Invoker,
    command: TicketCommand,
) -> Result<Reply, AppError> {
    let guild_id = invoker.guild_id;
    let channel_id = invoker.channel_id;
    let member = &invoker.member;

    match command {
        TicketCommand::Panel => {
            tickets.post_panel(guild_id, channel_id, member).await?;
            Ok(Reply::ephemeral("Ticket panel created!"))
        }
        TicketCommand::Close => {
            let ticket = tickets
                .request_close_in_channel(guild_id, channel_id, member)
                .await?;
            Ok(close_confirmation(&ticket.ticket_id))
        }
        TicketCommand::Add { user_id } => {
            tickets
                .add_member(guild_id, channel_id, member, user_id)
                .await?;
            Ok(Reply::public(format!("Added <@{}> to the ticket.", user_id)))
        }
        TicketCommand::Remove { user_id } => {
            tickets
                .remove_member(guild_id, channel_id, member, user_id)
                .await?;
            Ok(Reply::public(format!(
                "Removed <@{}> from the ticket.",
                user_id
            )))
        }
        TicketCommand::Rename { name } => {
            let name = tickets.rename(guild_id, channel_id, member, &name).await?;
            Ok(Reply::public(format!("Ticket renamed to {}.", name)))
        }
        TicketCommand::Priority => {
            let ticket = tickets.priority_target(guild_id, channel_id).await?;
            Ok(priority_menu(&ticket.ticket_id))
        }
        TicketCommand::Assign { user_id } => {
            tickets.assign(guild_id, channel_id, member, user_id).await?;
            Ok(Reply::public(format!(
                "Ticket has been assigned to <@{}>.",
                user_id
            )))
        }
        TicketCommand::List => {
            let summaries = tickets.list_open(guild_id, member).await?;
            if summaries.is_empty() {
                return Ok(Reply::ephemeral("There are no open tickets."));
            }

            Ok(Reply::Message(
                ReplyMessage::embed(ui::embed::ticket_list(&summaries)).ephemeral(),
            ))
        }
    }
}

async fn settings_command(
    settings: &SettingsService<'_>,
    invoker: &Invoker,
    command: SettingsCommand,
) -> Result<Reply, AppError> {
    let guild_id = invoker.guild_id;
    let member = &invoker.member;

    match command {
        SettingsCommand::View => {
            let current = settings.get_for_admin(guild_id, member).await?;
            Ok(Reply::Message(
                ReplyMessage::embed(ui::embed::settings_view(&current)).ephemeral(),
            ))
        }
        SettingsCommand::Welcome => {
            let current = settings.get_for_admin(guild_id, member).await?;
            Ok(Reply::Modal(ui::component::welcome_message_form(
                &current.welcome_message,
            )))
        }
        SettingsCommand::Close => {
            let current = settings.get_for_admin(guild_id, member).await?;
            Ok(Reply::Modal(ui::component::close_message_form(
                &current.close_message,
            )))
        }
        SettingsCommand::Categories => {
            let current = settings.get_for_admin(guild_id, member).await?;
            Ok(Reply::Message(
                ReplyMessage::embed(ui::embed::categories_overview(&current.categories))
                    .with_components(vec![ui::component::category_management_row()])
                    .ephemeral(),
            ))
        }
        SettingsCommand::MaxTickets { limit } => {
            let limit = settings.set_max_tickets(guild_id, member, limit).await?;
            Ok(Reply::ephemeral(format!(
                "Maximum tickets per user has been set to {}.",
                limit
            )))
        }
        SettingsCommand::AutoClose { hours } => {
            let hours = settings.set_auto_close(guild_id, member, hours).await?;
            Ok(Reply::ephemeral(if hours == 0 {
                "Auto-close has been disabled.".to_string()
            } else {
                format!(
                    "Tickets will now close after {} hours of inactivity.",
                    hours
                )
            }))
        }
    }
}

fn close_confirmation(ticket_id: &str) -> Reply {
    Reply::Message(
        ReplyMessage::text(
            "Are you sure you want to close this ticket? This action cannot be undone.",
        )
        .with_components(vec![ui::component::close_confirmation(ticket_id)])
        .ephemeral(),
    )
}

fn priority_menu(ticket_id: &str) -> Reply {
    Reply::Message(
        ReplyMessage::text("Select a priority level for this ticket:")
            .with_components(vec![ui::component::priority_select(ticket_id)])
            .ephemeral(),
    )
}

/// Logs a failed interaction and builds the ephemeral message shown to the member.
pub fn failure_reply(identifier: &str, err: &AppError) -> ReplyMessage {
    if err.is_user_facing() {
        tracing::debug!("Interaction {} rejected: {}", identifier, err);
    } else {
        tracing::error!("Error handling interaction {}: {}", identifier, err);
    }

    ReplyMessage::text(err.user_message()).ephemeral()
}
