//! Test factory for creating Serenity Member objects.

use serenity::all::Member;

/// Creates a test Serenity Member with the given roles and permission bits.
///
/// # Arguments
/// - `guild_id` - Guild the member belongs to
/// - `user_id` - Discord user ID of the member
/// - `username` - Username of the member
/// - `role_ids` - Role IDs held by the member
/// - `permissions` - Resolved permission bits, as sent on interaction payloads
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
pub fn create_test_member(
    guild_id: u64,
    user_id: u64,
    username: &str,
    role_ids: &[u64],
    permissions: Option<u64>,
) -> Member {
    let roles: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();

    serde_json::from_value(serde_json::json!({
        "guild_id": guild_id.to_string(),
        "user": {
            "id": user_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2024-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": permissions.map(|p| p.to_string()),
        "communication_disabled_until": null,
    }))
    .expect("Failed to create test member - invalid JSON structure")
}
