use serenity::all::{CreateActionRow, CreateEmbed, CreateModal};

/// Message content of a reply.
#[derive(Debug, Clone, Default)]
pub struct ReplyMessage {
    pub content: Option<String>,
    pub embeds: Vec<CreateEmbed>,
    pub components: Vec<CreateActionRow>,
    /// Only visible to the invoking member.
    pub ephemeral: bool,
}

impl ReplyMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn embed(embed: CreateEmbed) -> Self {
        Self {
            embeds: vec![embed],
            ..Default::default()
        }
    }

    pub fn with_components(mut self, components: Vec<CreateActionRow>) -> Self {
        self.components = components;
        self
    }

    pub fn ephemeral(mut self) -> Self {
        self.ephemeral = true;
        self
    }
}

/// Response to an interaction.
#[derive(Debug, Clone)]
pub enum Reply {
    /// A new message.
    Message(ReplyMessage),
    /// Replaces the message the component is attached to; components are cleared
    /// unless given.
    Update(ReplyMessage),
    /// Opens a form.
    Modal(CreateModal),
}

impl Reply {
    /// Ephemeral text message.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self::Message(ReplyMessage::text(content).ephemeral())
    }

    pub fn public(content: impl Into<String>) -> Self {
        Self::Message(ReplyMessage::text(content))
    }

    pub fn update(content: impl Into<String>) -> Self {
        Self::Update(ReplyMessage::text(content))
    }
}
