use chrono::{DateTime, Duration, Utc};

use crate::{
    data::{settings::GuildSettingsRepository, ticket::TicketRepository},
    error::AppError,
    model::{
        member::MemberInfo,
        settings::GuildSettings,
        ticket::{Ticket, TicketStatus},
    },
    platform::{OutboundAttachment, OutboundMessage, TRANSCRIPT_MESSAGE_LIMIT},
    service::{
        notify,
        ticket::{ensure_open, TicketService, ALREADY_CLOSED_MESSAGE},
        transcript::{render_transcript, transcript_file_name, HISTORY_UNAVAILABLE},
    },
    ui,
};

const CLOSE_NOT_ALLOWED_MESSAGE: &str = "You do not have permission to close this ticket.";

impl<'a> TicketService<'a> {
    /// Starts a close from inside a ticket channel.
    ///
    /// Nothing is mutated; the caller shows the confirmation prompt for the returned ticket.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Open ticket the member may close
    /// - `Err(AppError::NotFound)` - Channel is not a ticket channel
    /// - `Err(AppError::Validation)` - Ticket is already closed
    /// - `Err(AppError::PermissionDenied)` - Member is neither the creator nor staff
    pub async fn request_close_in_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
        actor: &MemberInfo,
    ) -> Result<Ticket, AppError> {
        let settings = self.settings(guild_id).await?;
        let ticket = self.open_ticket_in_channel(guild_id, channel_id).await?;
        authorize_close(&settings, &ticket, actor)?;

        Ok(ticket)
    }

    /// Starts a close for a ticket referenced by its ID, e.g. from the close button.
    pub async fn request_close(
        &self,
        guild_id: u64,
        ticket_id: &str,
        actor: &MemberInfo,
    ) -> Result<Ticket, AppError> {
        let settings = self.settings(guild_id).await?;
        let ticket = self.ticket_by_id(guild_id, ticket_id).await?;
        ensure_open(&ticket)?;
        authorize_close(&settings, &ticket, actor)?;

        Ok(ticket)
    }

    /// Closes a ticket after the member confirmed.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The closed ticket
    /// - `Err(AppError::NotFound)` - Ticket no longer exists
    /// - `Err(AppError::Validation)` - Ticket was closed meanwhile
    /// - `Err(AppError::PermissionDenied)` - Member is neither the creator nor staff
    pub async fn confirm_close(
        &self,
        guild_id: u64,
        ticket_id: &str,
        actor: &MemberInfo,
    ) -> Result<Ticket, AppError> {
        let settings = self.settings(guild_id).await?;
        let ticket = self.ticket_by_id(guild_id, ticket_id).await?;
        ensure_open(&ticket)?;
        authorize_close(&settings, &ticket, actor)?;

        self.close_ticket(&settings, ticket, Some(actor)).await
    }

    /// Closes every open ticket whose last activity is older than its guild's
    /// auto-close window.
    ///
    /// Failures for individual tickets are logged and do not stop the sweep.
    ///
    /// # Arguments
    /// - `now` - Reference time for the inactivity cutoff
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of tickets closed
    /// - `Err(AppError::DbErr)` - Guild settings could not be loaded
    pub async fn auto_close_stale(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let guilds = GuildSettingsRepository::new(&self.state.db)
            .get_auto_close_enabled()
            .await?;
        let repo = TicketRepository::new(&self.state.db);

        let mut closed = 0;
        for settings in guilds {
            let cutoff = now - Duration::hours(settings.auto_close_hours as i64);
            let stale = match repo.list_stale_open(settings.guild_id, cutoff).await {
                Ok(stale) => stale,
                Err(e) => {
                    tracing::error!(
                        "Failed to list stale tickets for guild {}: {}",
                        settings.guild_id,
                        e
                    );
                    continue;
                }
            };

            for ticket in stale {
                let ticket_id = ticket.ticket_id.clone();
                match self.close_ticket(&settings, ticket, None).await {
                    Ok(_) => closed += 1,
                    Err(e) => tracing::warn!(
                        "Failed to auto-close ticket {} in guild {}: {}",
                        ticket_id,
                        settings.guild_id,
                        e
                    ),
                }
            }
        }

        Ok(closed)
    }

    /// Reconciles a ticket whose channel was deleted outside the bot.
    ///
    /// Cancels any pending deletion of the channel and marks an open ticket closed
    /// without recording a closer.
    ///
    /// # Returns
    /// - `Ok(true)` - An open ticket was closed
    /// - `Ok(false)` - Channel had no open ticket
    pub async fn handle_channel_deleted(&self, channel_id: u64) -> Result<bool, AppError> {
        self.state.deletions.cancel(channel_id).await;

        let closed = TicketRepository::new(&self.state.db)
            .close_by_channel(channel_id, Utc::now())
            .await?;
        if closed {
            tracing::info!("Closed ticket for deleted channel {}", channel_id);
        }

        Ok(closed)
    }

    /// Marks the ticket closed, captures the transcript, posts the close notices, and
    /// schedules the channel for deletion.
    ///
    /// Everything after the status change is best-effort. A channel whose history
    /// cannot be read closes with a placeholder transcript.
    async fn close_ticket(
        &self,
        settings: &GuildSettings,
        ticket: Ticket,
        closer: Option<&MemberInfo>,
    ) -> Result<Ticket, AppError> {
        let closed_at = Utc::now();
        let closed_by = closer.map(|m| m.user_id);
        let committed = TicketRepository::new(&self.state.db)
            .close(ticket.id, closed_by, closed_at)
            .await?;
        if !committed {
            return Err(AppError::Validation(ALREADY_CLOSED_MESSAGE.to_string()));
        }

        let transcript = match self
            .platform()
            .fetch_recent_messages(ticket.channel_id, TRANSCRIPT_MESSAGE_LIMIT)
            .await
        {
            Ok(history) => render_transcript(&history),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch history for ticket {} in channel {}: {}",
                    ticket.ticket_id,
                    ticket.channel_id,
                    e
                );
                HISTORY_UNAVAILABLE.to_string()
            }
        };

        if let Err(e) = self
            .state
            .transcripts
            .write(ticket.guild_id, &ticket.ticket_id, &transcript)
            .await
        {
            tracing::warn!(
                "Failed to store transcript for ticket {}: {}",
                ticket.ticket_id,
                e
            );
        }

        if let Err(e) = self
            .platform()
            .send_message(
                ticket.channel_id,
                OutboundMessage::embed(ui::embed::ticket_closed(&settings.close_message)),
            )
            .await
        {
            tracing::warn!(
                "Failed to post close message in channel {}: {}",
                ticket.channel_id,
                e
            );
        }

        let closed_by_label = match closer {
            Some(member) => member.tag.clone(),
            None => format!(
                "auto-close after {} hours of inactivity",
                settings.auto_close_hours
            ),
        };
        let creator_tag = self.user_tag(ticket.user_id).await;
        let log = OutboundMessage {
            embeds: vec![ui::embed::log_ticket_closed(
                &ticket,
                &closed_by_label,
                &creator_tag,
                closed_at,
            )],
            attachment: Some(OutboundAttachment {
                filename: transcript_file_name(&ticket.ticket_id),
                data: transcript.into_bytes(),
            }),
            ..Default::default()
        };
        notify::send_log(self.platform(), settings.log_channel_id, log).await;

        self.state.deletions.schedule(ticket.channel_id).await;

        tracing::info!(
            "Closed ticket {} in guild {} by {}",
            ticket.ticket_id,
            ticket.guild_id,
            closed_by_label
        );

        Ok(Ticket {
            status: TicketStatus::Closed,
            closed_at: Some(closed_at),
            closed_by,
            ..ticket
        })
    }
}

/// The creator and staff may close a ticket.
fn authorize_close(
    settings: &GuildSettings,
    ticket: &Ticket,
    actor: &MemberInfo,
) -> Result<(), AppError> {
    if ticket.user_id == actor.user_id || settings.is_staff(actor) {
        Ok(())
    } else {
        Err(AppError::PermissionDenied(
            CLOSE_NOT_ALLOWED_MESSAGE.to_string(),
        ))
    }
}
