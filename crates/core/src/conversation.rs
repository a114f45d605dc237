//! Append-only log of an emergency assistance conversation.

use chrono::Utc;
use serde::Serialize;

use crate::types::Timestamp;

/// Who said something in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Label used when the log is rendered into a prompt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Bot",
        }
    }
}

/// One turn in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exchange {
    pub speaker: Speaker,
    pub text: String,
    pub at: Timestamp,
}

/// Ordered record of every exchange in a session.
///
/// Records are only ever appended. Prompt rendering takes a trailing window
/// so the prompt size stays bounded however long the session runs.
#[derive(Debug, Clone, Default)]
pub struct ConversationLog {
    exchanges: Vec<Exchange>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(Speaker::User, text.into());
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.push(Speaker::Assistant, text.into());
    }

    fn push(&mut self, speaker: Speaker, text: String) {
        self.exchanges.push(Exchange {
            speaker,
            text,
            at: Utc::now(),
        });
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Render the most recent `max_exchanges` records as `Speaker: text`
    /// lines, oldest first.
    pub fn render_recent(&self, max_exchanges: usize) -> String {
        let start = self.exchanges.len().saturating_sub(max_exchanges);
        self.exchanges[start..]
            .iter()
            .map(|e| format!("{}: {}\n", e.speaker.label(), e.text))
            .collect()
    }
}
