//! Conversation data types shared between the shaper and the controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The practicing user.
    User,
    /// The conversation-partner assistant.
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One exchange unit in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who spoke.
    pub role: Role,
    /// What was said. Non-empty.
    pub text: String,
}

impl Turn {
    /// Create a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    /// Create an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Ordered, append-only sequence of turns for one session.
///
/// Turns are only ever appended; the whole history is cleared on session
/// restart. Trimming for prompt size drops the oldest turns but never
/// reorders the remainder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationHistory {
    turns: Vec<Turn>,
}

impl ConversationHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// The turns in append order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// True when no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drop the oldest turns so at most `max` remain.
    ///
    /// `max == 0` disables trimming.
    pub fn trim_to(&mut self, max: usize) {
        if max == 0 {
            return;
        }
        if self.turns.len() > max {
            let drop = self.turns.len() - max;
            self.turns.drain(..drop);
        }
    }

    /// Remove all turns (session restart).
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

/// Grammar feedback on the immediately preceding user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Corrected version of the user's utterance.
    pub corrected: String,
    /// Brief, friendly explanation of the correction.
    pub explanation: String,
}

/// Canonical output of response generation.
///
/// `message` and `suggestion` are always non-empty. `feedback` is present
/// only when the prior user utterance contained a language error worth
/// correcting; it is always `None` for opening turns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    /// The assistant's conversational reply.
    pub message: String,
    /// A sentence starter the user could say next.
    pub suggestion: String,
    /// Optional correction of the preceding user turn.
    pub feedback: Option<Feedback>,
}
