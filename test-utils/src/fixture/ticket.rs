use chrono::Utc;

/// Creates an in-memory open ticket model with fixed default values.
///
/// Ticket `0001` in guild `111111111`, channel `555555555`, created by `666666666`.
pub fn entity() -> entity::ticket::Model {
    let now = Utc::now();
    entity::ticket::Model {
        id: 1,
        ticket_id: "0001".to_string(),
        guild_id: "111111111".to_string(),
        channel_id: "555555555".to_string(),
        user_id: "666666666".to_string(),
        category: "General Support".to_string(),
        priority: "medium".to_string(),
        status: "open".to_string(),
        subject: "Cannot log in".to_string(),
        description: "The login page keeps spinning.".to_string(),
        assigned_to: None,
        created_at: now,
        closed_at: None,
        closed_by: None,
        last_activity: now,
        tags: serde_json::json!([]),
    }
}
