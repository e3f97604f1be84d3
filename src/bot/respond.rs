//! Conversion between serenity interactions and the router's event and reply types.

use std::collections::HashMap;

use serenity::all::{
    ActionRowComponent, CommandDataOption, CommandDataOptionValue, CommandInteraction,
    ComponentInteraction, ComponentInteractionDataKind, Context, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage,
    EditInteractionResponse, Member, ModalInteraction,
};

use crate::{
    error::AppError,
    platform::discord::interaction_member_info,
    router::{
        action::{Acknowledgement, InteractionEvent, OptionValue},
        reply::{Reply, ReplyMessage},
        Invoker,
    },
};

/// An interaction the bot can answer.
pub enum Target<'a> {
    Command(&'a CommandInteraction),
    Component(&'a ComponentInteraction),
    Modal(&'a ModalInteraction),
}

impl Target<'_> {
    /// Converts the interaction into its platform-neutral form.
    pub fn event(&self) -> InteractionEvent {
        match self {
            Self::Command(interaction) => command_event(interaction),
            Self::Component(interaction) => component_event(interaction),
            Self::Modal(interaction) => modal_event(interaction),
        }
    }

    /// Guild, channel, and member the interaction came from; `None` outside a guild.
    pub fn invoker(&self) -> Option<Invoker> {
        let (guild_id, channel_id) = match self {
            Self::Command(interaction) => (interaction.guild_id, interaction.channel_id),
            Self::Component(interaction) => (interaction.guild_id, interaction.channel_id),
            Self::Modal(interaction) => (interaction.guild_id, interaction.channel_id),
        };

        Some(Invoker {
            guild_id: guild_id?.get(),
            channel_id: channel_id.get(),
            member: interaction_member_info(self.member()?),
        })
    }

    fn member(&self) -> Option<&Member> {
        match self {
            Self::Command(interaction) => interaction.member.as_deref(),
            Self::Component(interaction) => interaction.member.as_ref(),
            Self::Modal(interaction) => interaction.member.as_ref(),
        }
    }

    async fn create_response(
        &self,
        ctx: &Context,
        response: CreateInteractionResponse,
    ) -> Result<(), AppError> {
        match self {
            Self::Command(interaction) => interaction.create_response(&ctx.http, response).await?,
            Self::Component(interaction) => {
                interaction.create_response(&ctx.http, response).await?
            }
            Self::Modal(interaction) => interaction.create_response(&ctx.http, response).await?,
        }
        Ok(())
    }

    async fn edit_response(
        &self,
        ctx: &Context,
        builder: EditInteractionResponse,
    ) -> Result<(), AppError> {
        match self {
            Self::Command(interaction) => interaction.edit_response(&ctx.http, builder).await?,
            Self::Component(interaction) => interaction.edit_response(&ctx.http, builder).await?,
            Self::Modal(interaction) => interaction.edit_response(&ctx.http, builder).await?,
        };
        Ok(())
    }

    async fn create_followup(
        &self,
        ctx: &Context,
        builder: CreateInteractionResponseFollowup,
    ) -> Result<(), AppError> {
        match self {
            Self::Command(interaction) => interaction.create_followup(&ctx.http, builder).await?,
            Self::Component(interaction) => {
                interaction.create_followup(&ctx.http, builder).await?
            }
            Self::Modal(interaction) => interaction.create_followup(&ctx.http, builder).await?,
        };
        Ok(())
    }
}

fn command_event(interaction: &CommandInteraction) -> InteractionEvent {
    let mut event = InteractionEvent::command(interaction.data.name.clone());
    let mut options = &interaction.data.options;

    if let Some(CommandDataOption {
        name,
        value: CommandDataOptionValue::SubCommand(nested),
        ..
    }) = options.first()
    {
        event = event.with_subcommand(name.clone());
        options = nested;
    }

    for option in options {
        let value = match &option.value {
            CommandDataOptionValue::String(value) => OptionValue::String(value.clone()),
            CommandDataOptionValue::Integer(value) => OptionValue::Integer(*value),
            CommandDataOptionValue::User(id) => OptionValue::User(id.get()),
            CommandDataOptionValue::Role(id) => OptionValue::Role(id.get()),
            CommandDataOptionValue::Channel(id) => OptionValue::Channel(id.get()),
            _ => continue,
        };
        event = event.with_option(option.name.clone(), value);
    }

    event
}

fn component_event(interaction: &ComponentInteraction) -> InteractionEvent {
    match &interaction.data.kind {
        ComponentInteractionDataKind::StringSelect { values } => {
            InteractionEvent::select(interaction.data.custom_id.clone(), values.clone())
        }
        _ => InteractionEvent::button(interaction.data.custom_id.clone()),
    }
}

fn modal_event(interaction: &ModalInteraction) -> InteractionEvent {
    let fields: HashMap<String, String> = interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .filter_map(|component| match component {
            ActionRowComponent::InputText(input) => Some((
                input.custom_id.clone(),
                input.value.clone().unwrap_or_default(),
            )),
            _ => None,
        })
        .collect();

    InteractionEvent::modal(interaction.data.custom_id.clone(), fields)
}

/// Sends the deferral a slow action needs before it runs.
pub async fn acknowledge(
    ctx: &Context,
    target: &Target<'_>,
    acknowledgement: Acknowledgement,
) -> Result<(), AppError> {
    let response = match acknowledgement {
        Acknowledgement::None => return Ok(()),
        Acknowledgement::DeferUpdate => CreateInteractionResponse::Acknowledge,
        Acknowledgement::DeferEphemeral => {
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true))
        }
    };

    target.create_response(ctx, response).await
}

/// Delivers a reply, editing the deferred response when one was sent.
///
/// # Arguments
/// - `ctx` - Discord context
/// - `target` - Interaction being answered
/// - `acknowledgement` - Deferral sent before the action ran
/// - `reply` - Reply built by the router
pub async fn deliver(
    ctx: &Context,
    target: &Target<'_>,
    acknowledgement: Acknowledgement,
    reply: Reply,
) -> Result<(), AppError> {
    match (acknowledgement, reply) {
        (Acknowledgement::None, Reply::Message(message)) => {
            target
                .create_response(ctx, CreateInteractionResponse::Message(response_message(message)))
                .await
        }
        (Acknowledgement::None, Reply::Update(message)) => {
            target
                .create_response(
                    ctx,
                    CreateInteractionResponse::UpdateMessage(response_message(message)),
                )
                .await
        }
        (Acknowledgement::None, Reply::Modal(modal)) => {
            target
                .create_response(ctx, CreateInteractionResponse::Modal(modal))
                .await
        }
        (Acknowledgement::DeferUpdate, Reply::Update(message))
        | (Acknowledgement::DeferEphemeral, Reply::Message(message))
        | (Acknowledgement::DeferEphemeral, Reply::Update(message)) => {
            target.edit_response(ctx, edit_message(message)).await
        }
        (_, Reply::Message(message)) => target.create_followup(ctx, followup(message)).await,
        (_, Reply::Modal(_)) => {
            tracing::warn!("Cannot open a form after the interaction was deferred");
            Ok(())
        }
    }
}

/// Reports a failed interaction to the member who triggered it.
///
/// A deferred response is edited in place with its components cleared, so a
/// component whose action failed cannot be used again.
pub async fn send_failure(
    ctx: &Context,
    target: &Target<'_>,
    acknowledgement: Acknowledgement,
    message: ReplyMessage,
) -> Result<(), AppError> {
    match acknowledgement {
        Acknowledgement::None => {
            target
                .create_response(ctx, CreateInteractionResponse::Message(response_message(message)))
                .await
        }
        Acknowledgement::DeferUpdate | Acknowledgement::DeferEphemeral => {
            target.edit_response(ctx, edit_message(message)).await
        }
    }
}

fn response_message(message: ReplyMessage) -> CreateInteractionResponseMessage {
    let mut builder = CreateInteractionResponseMessage::new()
        .embeds(message.embeds)
        .components(message.components)
        .ephemeral(message.ephemeral);
    if let Some(content) = message.content {
        builder = builder.content(content);
    }
    builder
}

fn edit_message(message: ReplyMessage) -> EditInteractionResponse {
    let mut builder = EditInteractionResponse::new()
        .embeds(message.embeds)
        .components(message.components);
    if let Some(content) = message.content {
        builder = builder.content(content);
    }
    builder
}

fn followup(message: ReplyMessage) -> CreateInteractionResponseFollowup {
    let mut builder = CreateInteractionResponseFollowup::new()
        .embeds(message.embeds)
        .components(message.components)
        .ephemeral(message.ephemeral);
    if let Some(content) = message.content {
        builder = builder.content(content);
    }
    builder
}
