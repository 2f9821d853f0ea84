//! Wire and transcript DTOs shared by the view, the messaging client, and
//! local persistence.
//!
//! DESIGN
//! ======
//! The same `ChatMessage` shape is rendered, persisted to `localStorage`, and
//! restored on load, so serde output must stay stable across releases.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Avatar glyph shown next to the bubble.
    pub fn avatar(self) -> &'static str {
        match self {
            Self::User => "\u{1F464}",
            Self::Bot => "\u{1F916}",
        }
    }

    /// BEM modifier used for bubble alignment and colors.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single transcript entry. Never mutated once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Millisecond timestamp id; not guaranteed unique under rapid sends.
    pub id: i64,
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(id: i64, text: impl Into<String>) -> Self {
        Self { id, text: text.into(), sender: Sender::User }
    }

    pub fn bot(id: i64, text: impl Into<String>) -> Self {
        Self { id, text: text.into(), sender: Sender::Bot }
    }
}

/// Request body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Success body for `POST /chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}
