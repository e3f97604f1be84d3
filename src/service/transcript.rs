//! Transcript rendering and storage.
//!
//! A transcript is a plain-text rendering of a ticket channel's recent messages. Each
//! message becomes one entry:
//!
//! ```text
//! [2024-05-01T12:30:00.000Z] alice: message text
//! [Attachment: log.txt](https://cdn.example/log.txt)
//! ```
//!
//! Entries are separated by a blank line. Messages without text render as
//! `[No text content]`, and the attachment line is omitted when there are none.

use std::path::{Path, PathBuf};

use chrono::SecondsFormat;

use crate::{error::AppError, model::transcript::TranscriptMessage};

const NO_TEXT_CONTENT: &str = "[No text content]";
/// Transcript body stored when the channel history could not be read.
pub const HISTORY_UNAVAILABLE: &str = "[Channel history could not be retrieved]";

/// Renders messages, oldest first, into transcript text.
pub fn render_transcript(messages: &[TranscriptMessage]) -> String {
    messages
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_entry(message: &TranscriptMessage) -> String {
    let content = if message.content.is_empty() {
        NO_TEXT_CONTENT
    } else {
        message.content.as_str()
    };

    let mut entry = format!(
        "[{}] {}: {}",
        message
            .timestamp
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        message.author_tag,
        content
    );

    if !message.attachments.is_empty() {
        let attachments = message
            .attachments
            .iter()
            .map(|a| format!("[Attachment: {}]({})", a.name, a.url))
            .collect::<Vec<_>>()
            .join(", ");
        entry.push('\n');
        entry.push_str(&attachments);
    }

    entry
}

/// File name of a ticket's transcript, also used for the log channel attachment.
pub fn transcript_file_name(ticket_id: &str) -> String {
    format!("ticket-{}.txt", ticket_id)
}

/// Writes transcripts to `<dir>/<guild_id>/ticket-<ticket_id>.txt`.
#[derive(Debug, Clone)]
pub struct TranscriptStore {
    dir: PathBuf,
}

impl TranscriptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, guild_id: u64, ticket_id: &str) -> PathBuf {
        self.dir
            .join(guild_id.to_string())
            .join(transcript_file_name(ticket_id))
    }

    /// Writes a transcript, creating the guild directory if needed.
    ///
    /// # Returns
    /// - `Ok(PathBuf)` - Path of the written file
    /// - `Err(AppError::IoErr)` - Directory creation or write failed
    pub async fn write(
        &self,
        guild_id: u64,
        ticket_id: &str,
        content: &str,
    ) -> Result<PathBuf, AppError> {
        let path = self.path_for(guild_id, ticket_id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, content).await?;

        Ok(path)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
