use std::sync::Arc;

use async_trait::async_trait;
use serenity::{
    all::{
        ChannelId, ChannelType, CreateAttachment, CreateChannel, CreateMessage, EditChannel,
        GetMessages, GuildId, HttpError, Member, Message, PermissionOverwrite,
        PermissionOverwriteType, Permissions, RoleId, UserId,
    },
    http::Http,
};

use crate::{
    error::AppError,
    model::{
        member::MemberInfo,
        transcript::{TranscriptAttachment, TranscriptMessage},
    },
    platform::{ChatPlatform, OutboundMessage, TicketChannelSpec},
};

/// Permissions granted to members and staff roles in a ticket channel.
fn ticket_access() -> Permissions {
    Permissions::VIEW_CHANNEL | Permissions::SEND_MESSAGES | Permissions::READ_MESSAGE_HISTORY
}

/// [`ChatPlatform`] backed by serenity's HTTP client.
pub struct DiscordPlatform {
    http: Arc<Http>,
}

impl DiscordPlatform {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ChatPlatform for DiscordPlatform {
    async fn create_ticket_channel(&self, spec: &TicketChannelSpec) -> Result<u64, AppError> {
        let guild_id = GuildId::new(spec.guild_id);

        let mut overwrites = vec![
            PermissionOverwrite {
                allow: Permissions::empty(),
                deny: Permissions::VIEW_CHANNEL,
                // The @everyone role shares the guild's ID
                kind: PermissionOverwriteType::Role(RoleId::new(spec.guild_id)),
            },
            PermissionOverwrite {
                allow: ticket_access(),
                deny: Permissions::empty(),
                kind: PermissionOverwriteType::Member(UserId::new(spec.creator_id)),
            },
        ];
        overwrites.extend(spec.staff_role_ids.iter().map(|role_id| PermissionOverwrite {
            allow: ticket_access(),
            deny: Permissions::empty(),
            kind: PermissionOverwriteType::Role(RoleId::new(*role_id)),
        }));

        let channel = guild_id
            .create_channel(
                &self.http,
                CreateChannel::new(&spec.name)
                    .kind(ChannelType::Text)
                    .topic(&spec.topic)
                    .permissions(overwrites),
            )
            .await?;

        Ok(channel.id.get())
    }

    async fn send_message(
        &self,
        channel_id: u64,
        message: OutboundMessage,
    ) -> Result<u64, AppError> {
        let mut builder = CreateMessage::new()
            .embeds(message.embeds)
            .components(message.components);
        if let Some(content) = message.content {
            builder = builder.content(content);
        }
        if let Some(attachment) = message.attachment {
            builder = builder.add_file(CreateAttachment::bytes(
                attachment.data,
                attachment.filename,
            ));
        }

        let sent = ChannelId::new(channel_id)
            .send_message(&self.http, builder)
            .await?;

        Ok(sent.id.get())
    }

    async fn fetch_recent_messages(
        &self,
        channel_id: u64,
        limit: u8,
    ) -> Result<Vec<TranscriptMessage>, AppError> {
        let messages = ChannelId::new(channel_id)
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        // Discord returns newest first
        Ok(messages.iter().rev().map(transcript_message).collect())
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id).delete(&self.http).await?;

        Ok(())
    }

    async fn rename_channel(&self, channel_id: u64, name: &str) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .edit(&self.http, EditChannel::new().name(name))
            .await?;

        Ok(())
    }

    async fn grant_member_access(&self, channel_id: u64, user_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .create_permission(
                &self.http,
                PermissionOverwrite {
                    allow: ticket_access(),
                    deny: Permissions::empty(),
                    kind: PermissionOverwriteType::Member(UserId::new(user_id)),
                },
            )
            .await?;

        Ok(())
    }

    async fn revoke_member_access(&self, channel_id: u64, user_id: u64) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .delete_permission(
                &self.http,
                PermissionOverwriteType::Member(UserId::new(user_id)),
            )
            .await?;

        Ok(())
    }

    async fn fetch_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<MemberInfo>, AppError> {
        let guild = GuildId::new(guild_id).to_partial_guild(&self.http).await?;

        let member = match guild.id.member(&self.http, UserId::new(user_id)).await {
            Ok(member) => member,
            Err(e) if is_not_found(&e) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let administrator = guild.owner_id == member.user.id
            || std::iter::once(RoleId::new(guild_id))
                .chain(member.roles.iter().copied())
                .filter_map(|role_id| guild.roles.get(&role_id))
                .any(|role| role.permissions.administrator());

        Ok(Some(member_info(&member, administrator)))
    }

    async fn fetch_user_tag(&self, user_id: u64) -> Result<Option<String>, AppError> {
        match UserId::new(user_id).to_user(&self.http).await {
            Ok(user) => Ok(Some(user.tag())),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

fn is_not_found(error: &serenity::Error) -> bool {
    matches!(
        error,
        serenity::Error::Http(HttpError::UnsuccessfulRequest(response))
            if response.status_code.as_u16() == 404
    )
}

/// Converts a serenity member into the permission-check view used by services.
///
/// # Arguments
/// - `member` - Guild member from an interaction or the member endpoint
/// - `administrator` - Whether the member holds the Administrator permission
pub fn member_info(member: &Member, administrator: bool) -> MemberInfo {
    MemberInfo {
        user_id: member.user.id.get(),
        username: member.user.name.clone(),
        tag: member.user.tag(),
        role_ids: member.roles.iter().map(|role| role.get()).collect(),
        administrator,
    }
}

/// Converts an interaction member, using the resolved permissions Discord includes
/// on interaction payloads.
pub fn interaction_member_info(member: &Member) -> MemberInfo {
    let administrator = member
        .permissions
        .map(|permissions| permissions.administrator())
        .unwrap_or(false);

    member_info(member, administrator)
}

fn transcript_message(message: &Message) -> TranscriptMessage {
    TranscriptMessage {
        timestamp: message.timestamp.to_utc(),
        author_tag: message.author.tag(),
        content: message.content.clone(),
        attachments: message
            .attachments
            .iter()
            .map(|attachment| TranscriptAttachment {
                name: attachment.filename.clone(),
                url: attachment.url.clone(),
            })
            .collect(),
    }
}
