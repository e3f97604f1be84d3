use chrono::Utc;

/// Creates an in-memory guild settings model with fixed default values.
///
/// Ids: guild `111111111`, support role `222222222`, admin role `333333333`,
/// log channel `444444444`.
pub fn entity() -> entity::guild_settings::Model {
    entity::guild_settings::Model {
        id: 1,
        guild_id: "111111111".to_string(),
        support_role_id: "222222222".to_string(),
        admin_role_id: "333333333".to_string(),
        log_channel_id: "444444444".to_string(),
        ticket_counter: 0,
        welcome_message: "Thank you for creating a ticket. Support staff will be with you shortly."
            .to_string(),
        close_message: "This ticket has been closed. If you need further assistance, please create a new ticket.".to_string(),
        max_tickets_per_user: 3,
        auto_close_hours: 0,
        created_at: Utc::now(),
    }
}
