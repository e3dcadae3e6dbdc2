//! Response shaping: prompt → remote generation → validated reply.
//!
//! [`ResponseShaper`] is the core of the system. Both entry points build an
//! instruction prompt, invoke the remote [`ReplyGenerator`], extract and
//! validate the structured payload, and on any failure substitute
//! deterministic fallback content. Neither entry point can fail: the caller
//! always receives a usable [`Reply`], and failures are only visible in the
//! logs.

pub mod extract;

use crate::fallback;
use crate::llm::ReplyGenerator;
use crate::prompt;
use crate::reply::{ConversationHistory, Reply};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Generic fallback message for continuation turns.
///
/// Topic-specific question banks are deliberately not consulted here; they
/// only seed opening turns.
const CONTINUATION_FALLBACK_MESSAGE: &str =
    "Thank you for sharing that. Could you tell me more about your thoughts on this topic?";

/// Turns (topic, history, utterance) into a validated [`Reply`], with
/// fallback resolution when the remote generator fails.
pub struct ResponseShaper {
    generator: Arc<dyn ReplyGenerator>,
}

impl ResponseShaper {
    /// Create a shaper over the given generator.
    pub fn new(generator: Arc<dyn ReplyGenerator>) -> Self {
        Self { generator }
    }

    /// Open a conversation about `topic`.
    ///
    /// The topic is assumed non-empty and pre-trimmed by the caller. Always
    /// resolves to a Reply with non-empty `message` and `suggestion` and
    /// `feedback == None`: opening turns have no prior user utterance to
    /// correct, so any feedback the model volunteers is dropped.
    pub async fn start_conversation(&self, topic: &str) -> Reply {
        let request_id = Uuid::new_v4();
        info!(%request_id, topic, generator = self.generator.name(), "starting conversation");

        let prompt = prompt::opening_prompt(topic);
        match self.generator.generate_structured_reply(&prompt).await {
            Ok(raw) => match extract::parse_reply(&raw) {
                Ok(mut reply) => {
                    debug!(%request_id, "opening reply parsed");
                    reply.feedback = None;
                    reply
                }
                Err(e) => {
                    warn!(%request_id, error = %e, "opening reply unparsable, using fallback");
                    Self::opening_fallback(topic)
                }
            },
            Err(e) => {
                warn!(%request_id, error = %e, "generation failed, using fallback");
                Self::opening_fallback(topic)
            }
        }
    }

    /// Continue a conversation with the user's latest utterance.
    ///
    /// `history` is the snapshot of turns before `user_text`, which travels
    /// separately. Always resolves to a usable Reply; a malformed optional
    /// feedback sub-object is discarded during parsing without failing the
    /// turn.
    pub async fn continue_conversation(
        &self,
        topic: &str,
        history: &ConversationHistory,
        user_text: &str,
    ) -> Reply {
        let request_id = Uuid::new_v4();
        info!(
            %request_id,
            topic,
            turns = history.len(),
            generator = self.generator.name(),
            "continuing conversation"
        );

        let prompt = prompt::continuation_prompt(topic, history, user_text);
        match self.generator.generate_structured_reply(&prompt).await {
            Ok(raw) => match extract::parse_reply(&raw) {
                Ok(reply) => {
                    debug!(
                        %request_id,
                        has_feedback = reply.feedback.is_some(),
                        "continuation reply parsed"
                    );
                    reply
                }
                Err(e) => {
                    warn!(%request_id, error = %e, "continuation reply unparsable, using fallback");
                    Self::continuation_fallback()
                }
            },
            Err(e) => {
                warn!(%request_id, error = %e, "generation failed, using fallback");
                Self::continuation_fallback()
            }
        }
    }

    /// Fallback for failed opening turns: greeting template plus a question
    /// from the topic's bank (or the general template).
    fn opening_fallback(topic: &str) -> Reply {
        Reply {
            message: format!(
                "Hi there! I'd love to chat about {topic}. {}",
                fallback::opening_question(topic)
            ),
            suggestion: fallback::suggested_starter(),
            feedback: None,
        }
    }

    /// Fallback for failed continuation turns: fixed acknowledgment-and-probe
    /// message plus a random starter.
    fn continuation_fallback() -> Reply {
        Reply {
            message: CONTINUATION_FALLBACK_MESSAGE.to_owned(),
            suggestion: fallback::suggested_starter(),
            feedback: None,
        }
    }
}
