//! Conversation turns and their follow-up buttons.

use chrono::{DateTime, Local};
use std::fmt;

use crate::core::responses::{ActionTemplate, CannedResponse};

/// Opaque message identifier. Only uniqueness matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Generate a new UUID v4 message ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A selectable quick reply attached to an assistant message.
/// Choosing it submits `value` as if the user had typed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionButton {
    pub id: String,
    pub label: String,
    pub value: String,
}

impl From<&ActionTemplate> for ActionButton {
    fn from(template: &ActionTemplate) -> Self {
        Self {
            id: template.id.to_string(),
            label: template.label.to_string(),
            value: template.value.to_string(),
        }
    }
}

/// One conversation turn. Never edited after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    /// Display text. May contain line breaks and bullet glyphs; never parsed.
    pub content: String,
    pub timestamp: DateTime<Local>,
    /// Empty unless this is an assistant turn offering follow-up choices.
    pub actions: Vec<ActionButton>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::User,
            content: content.into(),
            timestamp: Local::now(),
            actions: Vec::new(),
        }
    }

    /// Builds an assistant turn from a canned reply, copying its action buttons.
    pub fn assistant(reply: &CannedResponse) -> Self {
        Self {
            id: MessageId::new(),
            role: Role::Assistant,
            content: reply.content.to_string(),
            timestamp: Local::now(),
            actions: reply.actions.iter().map(ActionButton::from).collect(),
        }
    }

    /// Hour and minute of creation, e.g. `"09:41"`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }

    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }
}
