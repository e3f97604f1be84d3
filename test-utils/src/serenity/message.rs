//! Test factory for creating Serenity Message objects.

use serenity::all::Message;

/// Attachment data for `create_test_message`.
pub struct TestAttachment<'a> {
    pub filename: &'a str,
    pub url: &'a str,
}

/// Creates a test Serenity Message posted by a user in a channel.
///
/// # Arguments
/// - `message_id` - Discord message ID
/// - `channel_id` - Channel the message was posted in
/// - `author_id` / `username` - Message author
/// - `content` - Text content, may be empty
/// - `timestamp` - RFC 3339 timestamp of the message
/// - `attachments` - Attachments on the message
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
pub fn create_test_message(
    message_id: u64,
    channel_id: u64,
    author_id: u64,
    username: &str,
    content: &str,
    timestamp: &str,
    attachments: &[TestAttachment<'_>],
) -> Message {
    let attachments: Vec<serde_json::Value> = attachments
        .iter()
        .enumerate()
        .map(|(index, attachment)| {
            serde_json::json!({
                "id": (message_id * 100 + index as u64).to_string(),
                "filename": attachment.filename,
                "size": 1024,
                "url": attachment.url,
                "proxy_url": attachment.url,
            })
        })
        .collect();

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": {
            "id": author_id.to_string(),
            "username": username,
            "discriminator": "0",
            "global_name": null,
            "avatar": null,
            "bot": false,
        },
        "content": content,
        "timestamp": timestamp,
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": attachments,
        "embeds": [],
        "pinned": false,
        "type": 0,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
