//! Recording [`ChatPlatform`] used by service and router tests.

use std::{
    collections::{HashMap, HashSet},
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;

use crate::{
    error::AppError,
    model::{member::MemberInfo, transcript::TranscriptMessage},
    platform::{ChatPlatform, OutboundMessage, TicketChannelSpec},
};

/// A message recorded by [`MockPlatform::send_message`].
#[derive(Debug, Clone)]
pub struct SentMessage {
    pub channel_id: u64,
    pub content: Option<String>,
    /// Embeds serialized to JSON for inspection.
    pub embeds: Vec<serde_json::Value>,
    pub component_rows: usize,
    pub attachment: Option<(String, Vec<u8>)>,
}

#[derive(Default)]
struct MockState {
    created_channels: Vec<(u64, TicketChannelSpec)>,
    sent: Vec<SentMessage>,
    deleted: Vec<u64>,
    renamed: Vec<(u64, String)>,
    granted: Vec<(u64, u64)>,
    revoked: Vec<(u64, u64)>,
    members: HashMap<(u64, u64), MemberInfo>,
    tags: HashMap<u64, String>,
    history: HashMap<u64, Vec<TranscriptMessage>>,
    failing_channels: HashSet<u64>,
    fail_channel_creation: bool,
}

pub struct MockPlatform {
    next_id: AtomicU64,
    state: Mutex<MockState>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(900_000),
            state: Mutex::new(MockState::default()),
        }
    }

    pub fn add_member(&self, guild_id: u64, member: MemberInfo) {
        let mut state = self.state.lock().unwrap();
        state.tags.insert(member.user_id, member.tag.clone());
        state.members.insert((guild_id, member.user_id), member);
    }

    pub fn set_history(&self, channel_id: u64, messages: Vec<TranscriptMessage>) {
        self.state.lock().unwrap().history.insert(channel_id, messages);
    }

    /// Makes every send to, history fetch from, and delete of `channel_id` fail.
    pub fn fail_channel(&self, channel_id: u64) {
        self.state.lock().unwrap().failing_channels.insert(channel_id);
    }

    pub fn fail_channel_creation(&self) {
        self.state.lock().unwrap().fail_channel_creation = true;
    }

    pub fn created_channels(&self) -> Vec<(u64, TicketChannelSpec)> {
        self.state.lock().unwrap().created_channels.clone()
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.state.lock().unwrap().sent.clone()
    }

    pub fn sent_to(&self, channel_id: u64) -> Vec<SentMessage> {
        self.sent()
            .into_iter()
            .filter(|m| m.channel_id == channel_id)
            .collect()
    }

    pub fn deleted(&self) -> Vec<u64> {
        self.state.lock().unwrap().deleted.clone()
    }

    pub fn renamed(&self) -> Vec<(u64, String)> {
        self.state.lock().unwrap().renamed.clone()
    }

    pub fn granted(&self) -> Vec<(u64, u64)> {
        self.state.lock().unwrap().granted.clone()
    }

    pub fn revoked(&self) -> Vec<(u64, u64)> {
        self.state.lock().unwrap().revoked.clone()
    }

    fn check_channel(&self, channel_id: u64) -> Result<(), AppError> {
        if self.state.lock().unwrap().failing_channels.contains(&channel_id) {
            return Err(AppError::IoErr(std::io::Error::other(format!(
                "channel {} unavailable",
                channel_id
            ))));
        }
        Ok(())
    }
}

#[async_trait]
impl ChatPlatform for MockPlatform {
    async fn create_ticket_channel(&self, spec: &TicketChannelSpec) -> Result<u64, AppError> {
        if self.state.lock().unwrap().fail_channel_creation {
            return Err(AppError::IoErr(std::io::Error::other(
                "missing Manage Channels",
            )));
        }

        let channel_id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.state
            .lock()
            .unwrap()
            .created_channels
            .push((channel_id, spec.clone()));

        Ok(channel_id)
    }

    async fn send_message(
        &self,
        channel_id: u64,
        message: OutboundMessage,
    ) -> Result<u64, AppError> {
        self.check_channel(channel_id)?;

        let sent = SentMessage {
            channel_id,
            content: message.content,
            embeds: message
                .embeds
                .iter()
                .map(|embed| serde_json::to_value(embed).unwrap())
                .collect(),
            component_rows: message.components.len(),
            attachment: message.attachment.map(|a| (a.filename, a.data)),
        };
        self.state.lock().unwrap().sent.push(sent);

        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    async fn fetch_recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<TranscriptMessage>, AppError> {
        self.check_channel(channel_id)?;

        let history = self
            .state
            .lock()
            .unwrap()
            .history
            .get(&channel_id)
            .cloned()
            .unwrap_or_default();

        let skip = history.len().saturating_sub(limit as usize);
        Ok(history.into_iter().skip(skip).collect())
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), AppError> {
        self.check_channel(channel_id)?;
        self.state.lock().unwrap().deleted.push(channel_id);
        Ok(())
    }

    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), AppError> {
        self.state
            .lock()
            .unwrap()
            .renamed
            .push((channel_id, name.to_string()));
        Ok(())
    }

    async fn grant_member_access(&self, channel_id: u64, user_id: u64) -> Result<(), AppError> {
        self.state.lock().unwrap().granted.push((channel_id, user_id));
        Ok(())
    }

    async fn revoke_member_access(&self, channel_id: u64, user_id: u64) -> Result<(), AppError> {
        self.state.lock().unwrap().revoked.push((channel_id, user_id));
        Ok(())
    }

    async fn fetch_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberInfo>, AppError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .members
            .get(&(guild_id, user_id))
            .cloned())
    }

    async fn fetch_user_tag(&self, user_id: u64) -> Result<Option<String>, AppError> {
        Ok(self.state.lock().unwrap().tags.get(&user_id).cloned())
    }
}
