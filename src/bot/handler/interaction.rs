//! Interaction event handler.
//!
//! Every slash command, button press, select menu choice, and modal submission
//! passes through [`handle_interaction`]: the interaction is decoded into an action,
//! acknowledged when the action is slow, dispatched, and answered. Failures are
//! reported to the member; nothing here propagates past the event.

use serenity::all::{Context, Interaction};

use crate::{
    bot::respond::{self, Target},
    router::{self, action::Acknowledgement, action::decode, reply::ReplyMessage},
    state::AppState,
};

const GUILD_ONLY_MESSAGE: &str = "This bot can only be used in a server.";

/// Handles an inbound interaction.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context used to respond
/// - `interaction` - The raw interaction
pub async fn handle_interaction(state: &AppState, ctx: Context, interaction: Interaction) {
    let target = match &interaction {
        Interaction::Command(command) => Target::Command(command),
        Interaction::Component(component) => Target::Component(component),
        Interaction::Modal(modal) => Target::Modal(modal),
        _ => return,
    };
    let event = target.event();

    let Some(invoker) = target.invoker() else {
        tracing::debug!("Ignoring interaction {} outside a guild", event.identifier);
        report(
            &ctx,
            &target,
            Acknowledgement::None,
            ReplyMessage::text(GUILD_ONLY_MESSAGE).ephemeral(),
        )
        .await;
        return;
    };

    let action = match decode(&event) {
        Ok(Some(action)) => action,
        Ok(None) => {
            tracing::warn!("No handler registered for interaction {}", event.identifier);
            return;
        }
        Err(e) => {
            report(
                &ctx,
                &target,
                Acknowledgement::None,
                router::failure_reply(&event.identifier, &e),
            )
            .await;
            return;
        }
    };

    tracing::debug!(
        "Handling interaction {} from user {} in guild {}",
        event.identifier,
        invoker.member.user_id,
        invoker.guild_id
    );

    let acknowledgement = action.acknowledgement();
    if let Err(e) = respond::acknowledge(&ctx, &target, acknowledgement).await {
        tracing::error!(
            "Failed to acknowledge interaction {}: {}",
            event.identifier,
            e
        );
        return;
    }

    match router::dispatch(state, &invoker, action).await {
        Ok(reply) => {
            if let Err(e) = respond::deliver(&ctx, &target, acknowledgement, reply).await {
                tracing::error!(
                    "Failed to respond to interaction {}: {}",
                    event.identifier,
                    e
                );
            }
        }
        Err(e) => {
            report(
                &ctx,
                &target,
                acknowledgement,
                router::failure_reply(&event.identifier, &e),
            )
            .await;
        }
    }
}

async fn report(
    ctx: &Context,
    target: &Target<'_>,
    acknowledgement: Acknowledgement,
    message: ReplyMessage,
) {
    if let Err(e) = respond::send_failure(ctx, target, acknowledgement, message).await {
        tracing::error!("Failed to send error response: {}", e);
    }
}
