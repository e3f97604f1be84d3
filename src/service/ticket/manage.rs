use chrono::{DateTime, Utc};

use crate::{
    data::ticket::TicketRepository,
    error::AppError,
    model::{
        member::MemberInfo,
        ticket::{ticket_channel_name, Ticket, TicketPriority, TicketSummary},
    },
    platform::OutboundMessage,
    service::{
        notify,
        ticket::{ensure_open, require_staff, TicketService},
    },
    ui::{self, embed::MAX_EMBED_FIELDS},
};

const MAX_CHANNEL_NAME_LEN: usize = 100;

impl<'a> TicketService<'a> {
    /// Posts the ticket panel to a channel.
    ///
    /// # Returns
    /// - `Ok(u64)` - ID of the panel message
    /// - `Err(AppError::PermissionDenied)` - Member is not staff
    pub async fn post_panel(
        &self,
        guild_id: u64,
        channel_id: u64,
        actor: &MemberInfo,
    ) -> Result<u64, AppError> {
        let settings = self.settings(guild_id).await?;
        require_staff(&settings, actor)?;

        let panel = OutboundMessage {
            embeds: vec![ui::embed::panel(&settings.categories)],
            components: vec![ui::component::panel_row()],
            ..Default::default()
        };
        let message_id = self.platform().send_message(channel_id, panel).await?;

        Ok(message_id)
    }

    /// Grants a user access to the ticket in `channel_id`.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Ticket the user was added to
    /// - `Err(AppError::NotFound)` - Channel is not a ticket channel
    /// - `Err(AppError::PermissionDenied)` - Member is not staff
    pub async fn add_member(
        &self,
        guild_id: u64,
        channel_id: u64,
        actor: &MemberInfo,
        user_id: u64,
    ) -> Result<Ticket, AppError> {
        let settings = self.settings(guild_id).await?;
        let ticket = self.open_ticket_in_channel(guild_id, channel_id).await?;
        require_staff(&settings, actor)?;

        self.platform()
            .grant_member_access(channel_id, user_id)
            .await?;

        notify::send_log(
            self.platform(),
            settings.log_channel_id,
            OutboundMessage::embed(ui::embed::log_member_added(&ticket, user_id, &actor.tag)),
        )
        .await;

        Ok(ticket)
    }

    /// Revokes a user's access to the ticket in `channel_id`.
    ///
    /// The ticket creator can never be removed.
    pub async fn remove_member(
        &self,
        guild_id: u64,
        channel_id: u64,
        actor: &MemberInfo,
        user_id: u64,
    ) -> Result<Ticket, AppError> {
        let settings = self.settings(guild_id).await?;
        let ticket = self.open_ticket_in_channel(guild_id, channel_id).await?;
        require_staff(&settings, actor)?;
        if ticket.user_id == user_id {
            return Err(AppError::Validation(
                "You cannot remove the ticket creator from the ticket.".to_string(),
            ));
        }

        self.platform()
            .revoke_member_access(channel_id, user_id)
            .await?;

        notify::send_log(
            self.platform(),
            settings.log_channel_id,
            OutboundMessage::embed(ui::embed::log_member_removed(
                &ticket, user_id, &actor.tag,
            )),
        )
        .await;

        Ok(ticket)
    }

    /// Renames the ticket channel to `ticket-<id>-<name>`.
    ///
    /// # Returns
    /// - `Ok(String)` - The applied channel name
    /// - `Err(AppError::Validation)` - Name empty or too long
    pub async fn rename(
        &self,
        guild_id: u64,
        channel_id: u64,
        actor: &MemberInfo,
        name: &str,
    ) -> Result<String, AppError> {
        let settings = self.settings(guild_id).await?;
        let ticket = self.open_ticket_in_channel(guild_id, channel_id).await?;
        require_staff(&settings, actor)?;

        let name = name.trim();
        let channel_name = ticket_channel_name(&ticket.ticket_id, name);
        if name.is_empty() || channel_name.chars().count() > MAX_CHANNEL_NAME_LEN {
            return Err(AppError::Validation(format!(
                "The channel name must be between 1 and {} characters.",
                MAX_CHANNEL_NAME_LEN
            )));
        }

        self.platform()
            .rename_channel(channel_id, &channel_name)
            .await?;

        notify::send_log(
            self.platform(),
            settings.log_channel_id,
            OutboundMessage::embed(ui::embed::log_renamed(&ticket, &channel_name, &actor.tag)),
        )
        .await;

        Ok(channel_name)
    }

    /// Assigns the ticket in `channel_id` to a staff member.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The updated ticket
    /// - `Err(AppError::NotFound)` - Target is not in the guild
    /// - `Err(AppError::Validation)` - Target is not staff
    pub async fn assign(
        &self,
        guild_id: u64,
        channel_id: u64,
        actor: &MemberInfo,
        user_id: u64,
    ) -> Result<Ticket, AppError> {
        let settings = self.settings(guild_id).await?;
        let ticket = self.open_ticket_in_channel(guild_id, channel_id).await?;
        require_staff(&settings, actor)?;

        let assignee = self
            .platform()
            .fetch_member(guild_id, user_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound("Could not find that user in the server.".to_string())
            })?;
        if !settings.is_staff(&assignee) {
            return Err(AppError::Validation(
                "You can only assign tickets to staff members.".to_string(),
            ));
        }

        let ticket = TicketRepository::new(&self.state.db)
            .assign(ticket.id, assignee.user_id)
            .await?;

        notify::send_log(
            self.platform(),
            settings.log_channel_id,
            OutboundMessage::embed(ui::embed::log_assigned(&ticket, &assignee.tag, &actor.tag)),
        )
        .await;

        Ok(ticket)
    }

    /// Finds the open ticket whose priority menu should be shown in `channel_id`.
    pub async fn priority_target(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<Ticket, AppError> {
        self.settings(guild_id).await?;
        self.open_ticket_in_channel(guild_id, channel_id).await
    }

    /// Sets the priority of a ticket referenced by its ID.
    pub async fn set_priority(
        &self,
        guild_id: u64,
        ticket_id: &str,
        actor: &MemberInfo,
        priority: TicketPriority,
    ) -> Result<Ticket, AppError> {
        let settings = self.settings(guild_id).await?;
        let ticket = self.ticket_by_id(guild_id, ticket_id).await?;
        ensure_open(&ticket)?;

        let ticket = TicketRepository::new(&self.state.db)
            .set_priority(ticket.id, priority)
            .await?;

        notify::send_log(
            self.platform(),
            settings.log_channel_id,
            OutboundMessage::embed(ui::embed::log_priority(&ticket, priority, &actor.tag)),
        )
        .await;

        Ok(ticket)
    }

    /// Lists open tickets of the guild, oldest first, with resolved display names.
    ///
    /// Only the tickets that fit into one embed are resolved.
    pub async fn list_open(
        &self,
        guild_id: u64,
        actor: &MemberInfo,
    ) -> Result<Vec<TicketSummary>, AppError> {
        let settings = self.settings(guild_id).await?;
        require_staff(&settings, actor)?;

        let tickets = TicketRepository::new(&self.state.db)
            .list_open(guild_id)
            .await?;

        let mut summaries = Vec::with_capacity(tickets.len().min(MAX_EMBED_FIELDS));
        for ticket in tickets.into_iter().take(MAX_EMBED_FIELDS) {
            let creator_tag = self.user_tag(ticket.user_id).await;
            let assignee_tag = match ticket.assigned_to {
                Some(id) => Some(self.user_tag(id).await),
                None => None,
            };
            summaries.push(TicketSummary {
                ticket,
                creator_tag,
                assignee_tag,
            });
        }

        Ok(summaries)
    }

    /// Records a message in a ticket channel as activity.
    ///
    /// # Returns
    /// - `Ok(true)` - An open ticket's activity timestamp was updated
    /// - `Ok(false)` - Channel has no open ticket
    pub async fn record_activity(
        &self,
        channel_id: u64,
        at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let touched = TicketRepository::new(&self.state.db)
            .touch_activity(channel_id, at)
            .await?;

        Ok(touched)
    }
}
