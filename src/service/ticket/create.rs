use crate::{
    data::{settings::GuildSettingsRepository, ticket::TicketRepository},
    error::AppError,
    model::{
        member::MemberInfo,
        settings::{GuildSettings, TicketCategory},
        ticket::{format_ticket_id, ticket_channel_name, CreateTicketParam, Ticket},
    },
    platform::{OutboundMessage, TicketChannelSpec},
    service::{
        draft::{DraftKey, TicketDraft},
        notify,
        ticket::TicketService,
    },
    ui,
};

const MAX_SUBJECT_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 1000;

/// A submitted ticket form waiting for its category.
#[derive(Debug, Clone)]
pub struct PendingTicket {
    /// Counter value reserved for the ticket, encoded in the category menu.
    pub counter: u64,
    pub ticket_id: String,
    pub categories: Vec<TicketCategory>,
}

impl<'a> TicketService<'a> {
    /// Accepts a ticket form and reserves the next ticket number.
    ///
    /// Runs under the member's admission lock. The open ticket cap is checked before
    /// the counter is incremented, so a rejected form never consumes a number.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the form was submitted in
    /// - `member` - Submitting member
    /// - `subject` / `description` - Form contents
    ///
    /// # Returns
    /// - `Ok(PendingTicket)` - Draft stored; the member should now choose a category
    /// - `Err(AppError::NotFound)` - Guild has not run setup
    /// - `Err(AppError::Validation)` - Cap reached, empty form, or no categories configured
    pub async fn submit_form(
        &self,
        guild_id: u64,
        member: &MemberInfo,
        subject: &str,
        description: &str,
    ) -> Result<PendingTicket, AppError> {
        let subject = subject.trim();
        let description = description.trim();
        validate_form(subject, description)?;

        let _admission = self.state.admission.acquire(guild_id, member.user_id).await;

        let settings = self.settings(guild_id).await?;
        if settings.categories.is_empty() {
            return Err(AppError::Validation(
                "There are no ticket categories configured. Please ask an administrator to add one."
                    .to_string(),
            ));
        }
        self.check_ticket_cap(&settings, member.user_id).await?;

        let counter = GuildSettingsRepository::new(&self.state.db)
            .next_ticket_counter(guild_id)
            .await?;
        let ticket_id = format_ticket_id(counter);

        self.state
            .drafts
            .insert(
                DraftKey {
                    guild_id,
                    user_id: member.user_id,
                    counter,
                },
                TicketDraft {
                    ticket_id: ticket_id.clone(),
                    subject: subject.to_string(),
                    description: description.to_string(),
                },
            )
            .await;

        tracing::debug!(
            "Reserved ticket {} in guild {} for {}",
            ticket_id,
            guild_id,
            member.tag
        );

        Ok(PendingTicket {
            counter,
            ticket_id,
            categories: settings.categories,
        })
    }

    /// Opens the ticket for a stored draft once its category is chosen.
    ///
    /// Creates the private channel, persists the ticket, posts the welcome message,
    /// and logs the creation. If persisting fails the new channel is deleted again.
    ///
    /// # Arguments
    /// - `guild_id` - Guild of the draft
    /// - `member` - Member who submitted the draft
    /// - `counter` - Counter value encoded in the category menu
    /// - `category` - Selected category name
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The opened ticket
    /// - `Err(AppError::NotFound)` - Draft missing or expired, or guild not set up
    /// - `Err(AppError::Validation)` - Unknown category or cap reached meanwhile
    pub async fn choose_category(
        &self,
        guild_id: u64,
        member: &MemberInfo,
        counter: u64,
        category: &str,
    ) -> Result<Ticket, AppError> {
        let _admission = self.state.admission.acquire(guild_id, member.user_id).await;

        let settings = self.settings(guild_id).await?;

        let key = DraftKey {
            guild_id,
            user_id: member.user_id,
            counter,
        };
        let draft = self.state.drafts.get(&key).await.ok_or_else(|| {
            AppError::NotFound(
                "Ticket data not found. Please try creating a new ticket.".to_string(),
            )
        })?;

        let category = settings
            .find_category(category)
            .map(|c| c.name.clone())
            .ok_or_else(|| {
                AppError::Validation(
                    "That category no longer exists. Please choose another one.".to_string(),
                )
            })?;
        self.check_ticket_cap(&settings, member.user_id).await?;

        let mut staff_role_ids = vec![settings.support_role_id];
        if settings.admin_role_id != settings.support_role_id {
            staff_role_ids.push(settings.admin_role_id);
        }
        let spec = TicketChannelSpec {
            guild_id,
            name: ticket_channel_name(&draft.ticket_id, &member.username),
            topic: format!(
                "Support ticket for {} | ID: {} | Subject: {}",
                member.tag, draft.ticket_id, draft.subject
            ),
            creator_id: member.user_id,
            staff_role_ids,
        };
        let channel_id = self.platform().create_ticket_channel(&spec).await?;

        let created = TicketRepository::new(&self.state.db)
            .create(CreateTicketParam {
                ticket_id: draft.ticket_id.clone(),
                guild_id,
                channel_id,
                user_id: member.user_id,
                category,
                subject: draft.subject.clone(),
                description: draft.description.clone(),
            })
            .await;
        let ticket = match created {
            Ok(ticket) => ticket,
            Err(e) => {
                if let Err(delete_err) = self.platform().delete_channel(channel_id).await {
                    tracing::warn!(
                        "Failed to remove channel {} after ticket insert failed: {}",
                        channel_id,
                        delete_err
                    );
                }
                return Err(e.into());
            }
        };

        self.state.drafts.remove(&key).await;

        let welcome = OutboundMessage {
            content: Some(format!(
                "Welcome {}! {}",
                member.mention(),
                settings.welcome_message
            )),
            embeds: vec![ui::embed::ticket_welcome(&ticket)],
            components: vec![ui::component::ticket_controls(&ticket.ticket_id)],
            attachment: None,
        };
        if let Err(e) = self.platform().send_message(channel_id, welcome).await {
            tracing::warn!(
                "Failed to post welcome message for ticket {}: {}",
                ticket.ticket_id,
                e
            );
        }

        notify::send_log(
            self.platform(),
            settings.log_channel_id,
            OutboundMessage::embed(ui::embed::log_ticket_created(&member.tag, &ticket)),
        )
        .await;

        tracing::info!(
            "Opened ticket {} in guild {} for {}",
            ticket.ticket_id,
            guild_id,
            member.tag
        );

        Ok(ticket)
    }

    async fn check_ticket_cap(
        &self,
        settings: &GuildSettings,
        user_id: u64,
    ) -> Result<(), AppError> {
        let open = TicketRepository::new(&self.state.db)
            .count_open_for_user(settings.guild_id, user_id)
            .await?;

        if open >= settings.max_tickets_per_user as u64 {
            return Err(AppError::Validation(format!(
                "You have reached the maximum number of open tickets ({}). Please close some of your existing tickets before creating a new one.",
                settings.max_tickets_per_user
            )));
        }

        Ok(())
    }
}

fn validate_form(subject: &str, description: &str) -> Result<(), AppError> {
    if subject.is_empty() || description.is_empty() {
        return Err(AppError::Validation(
            "Please provide both a subject and a description.".to_string(),
        ));
    }
    if subject.chars().count() > MAX_SUBJECT_LEN {
        return Err(AppError::Validation(format!(
            "The subject must be at most {} characters.",
            MAX_SUBJECT_LEN
        )));
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(AppError::Validation(format!(
            "The description must be at most {} characters.",
            MAX_DESCRIPTION_LEN
        )));
    }

    Ok(())
}
