//! Slash command schema shared by the bot and the registration binary.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, Permissions};

use crate::{
    model::settings::{MAX_AUTO_CLOSE_HOURS, MAX_TICKETS_RANGE},
    router::ids,
};

/// Every slash command the bot handles.
pub fn all() -> Vec<CreateCommand> {
    vec![setup(), ticket(), settings()]
}

fn setup() -> CreateCommand {
    CreateCommand::new(ids::SETUP_COMMAND)
        .description("Setup the ticket system")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Role,
                "support_role",
                "The role that can see and respond to tickets",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Role,
                "admin_role",
                "The role that can manage the ticket system",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Channel,
                "log_channel",
                "Channel where ticket logs will be sent",
            )
            .required(true),
        )
}

fn ticket() -> CreateCommand {
    CreateCommand::new(ids::TICKET_COMMAND)
        .description("Manage tickets")
        .add_option(subcommand("panel", "Create a new ticket panel"))
        .add_option(subcommand("close", "Close the current ticket"))
        .add_option(
            subcommand("add", "Add a user to the ticket")
                .add_sub_option(user_option("The user to add")),
        )
        .add_option(
            subcommand("remove", "Remove a user from the ticket")
                .add_sub_option(user_option("The user to remove")),
        )
        .add_option(
            subcommand("rename", "Rename the ticket").add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "name",
                    "The new name for the ticket",
                )
                .required(true),
            ),
        )
        .add_option(subcommand("priority", "Set the priority of the ticket"))
        .add_option(
            subcommand("assign", "Assign the ticket to a staff member")
                .add_sub_option(user_option("The user to assign")),
        )
        .add_option(subcommand("list", "List all open tickets"))
}

fn settings() -> CreateCommand {
    CreateCommand::new(ids::SETTINGS_COMMAND)
        .description("Configure ticket system settings")
        .default_member_permissions(Permissions::ADMINISTRATOR)
        .add_option(subcommand("view", "View current ticket system settings"))
        .add_option(subcommand("welcome", "Set the welcome message for new tickets"))
        .add_option(subcommand("close", "Set the closing message for tickets"))
        .add_option(subcommand("categories", "Manage ticket categories"))
        .add_option(
            subcommand("max_tickets", "Set the maximum number of tickets per user")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::Integer,
                        "limit",
                        "Maximum number of open tickets per user",
                    )
                    .required(true)
                    .min_int_value(u64::from(*MAX_TICKETS_RANGE.start()))
                    .max_int_value(u64::from(*MAX_TICKETS_RANGE.end())),
                ),
        )
        .add_option(
            subcommand("auto_close", "Close tickets after a period of inactivity")
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::Integer,
                        "hours",
                        "Hours of inactivity before a ticket closes, 0 to disable",
                    )
                    .required(true)
                    .min_int_value(0_u64)
                    .max_int_value(u64::from(MAX_AUTO_CLOSE_HOURS)),
                ),
        )
}

fn subcommand(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

fn user_option(description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, "user", description).required(true)
}
