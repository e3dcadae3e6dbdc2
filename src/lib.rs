//! Tandem: voice-driven English conversation practice system.
//!
//! The user picks a topic, speaks, and receives an AI-generated reply plus a
//! suggested next utterance and optional grammar feedback, spoken back
//! through a synthesis capability:
//!
//! Capture → Controller → Response Shaper → Remote generator → Reply → Output
//!
//! # Architecture
//!
//! - **Topic classifier** ([`topic`]): maps a free-text topic onto a closed
//!   category set used only for fallback selection.
//! - **Fallback bank + resolver** ([`fallback`]): static opening questions
//!   and suggestion starters, the last line of defense when the remote
//!   generator fails.
//! - **Response shaper** ([`shaper`]): builds prompts, invokes the remote
//!   [`ReplyGenerator`], extracts/validates the structured payload, and
//!   absorbs every failure into a fallback [`Reply`].
//! - **Conversation controller** ([`controller`]): owns topic and history,
//!   serializes generation requests, and wires the injected speech
//!   capabilities ([`speech`]).

pub mod config;
pub mod controller;
pub mod error;
pub mod fallback;
pub mod llm;
pub mod prompt;
pub mod reply;
pub mod shaper;
pub mod speech;
pub mod topic;

pub use config::PracticeConfig;
pub use controller::ConversationController;
pub use error::{PracticeError, Result};
pub use llm::{GeneratorError, ReplyGenerator};
pub use reply::{ConversationHistory, Feedback, Reply, Role, Turn};
pub use shaper::ResponseShaper;
pub use speech::{SpeechCapture, SpeechOutput};
pub use topic::{classify, TopicCategory};
