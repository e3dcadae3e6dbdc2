//! Conversation controller: session state and turn sequencing.
//!
//! Owns the topic and history for one session, serializes generation calls
//! with a busy flag, appends turns in order, and hands each reply's message
//! to the speech output. The controller is the only component that mutates
//! history; the shaper gets read-only snapshots.

use crate::config::ConversationConfig;
use crate::error::{PracticeError, Result};
use crate::reply::{ConversationHistory, Reply, Turn};
use crate::shaper::ResponseShaper;
use crate::speech::SpeechOutput;
use tracing::{info, warn};

/// Drives one practice session: start, per-turn submission, restart.
pub struct ConversationController {
    shaper: ResponseShaper,
    output: Box<dyn SpeechOutput>,
    config: ConversationConfig,
    topic: Option<String>,
    history: ConversationHistory,
    busy: bool,
}

impl ConversationController {
    /// Create a controller over the given shaper and speech output.
    pub fn new(
        shaper: ResponseShaper,
        output: Box<dyn SpeechOutput>,
        config: ConversationConfig,
    ) -> Self {
        Self {
            shaper,
            output,
            config,
            topic: None,
            history: ConversationHistory::new(),
            busy: false,
        }
    }

    /// True while a generation request is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// True once a session has started.
    pub fn is_started(&self) -> bool {
        self.topic.is_some()
    }

    /// The session topic, once started.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    /// The session history so far, in append order.
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Start a new session about `topic` and return the opening reply.
    ///
    /// The opening reply is appended to history and spoken.
    ///
    /// # Errors
    ///
    /// Returns a session error when the trimmed topic is empty, a session is
    /// already active, or a generation request is already in flight.
    pub async fn start(&mut self, topic: &str) -> Result<Reply> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(PracticeError::Session("topic is empty".to_owned()));
        }
        if self.topic.is_some() {
            return Err(PracticeError::Session(
                "session already started; restart first".to_owned(),
            ));
        }
        if self.busy {
            return Err(PracticeError::Session(
                "a generation request is already in flight".to_owned(),
            ));
        }

        self.busy = true;
        let reply = self.shaper.start_conversation(topic).await;
        self.busy = false;

        self.topic = Some(topic.to_owned());
        self.history.push(Turn::assistant(reply.message.clone()));
        self.speak(&reply.message).await;

        Ok(reply)
    }

    /// Submit the user's latest utterance and return the assistant's reply.
    ///
    /// The history snapshot passed to the shaper excludes `user_text`, which
    /// travels separately; both turns are appended afterwards in order.
    ///
    /// # Errors
    ///
    /// Returns a session error when no session is active, the trimmed
    /// utterance is empty, or a generation request is already in flight.
    pub async fn submit(&mut self, user_text: &str) -> Result<Reply> {
        let user_text = user_text.trim();
        if user_text.is_empty() {
            return Err(PracticeError::Session("utterance is empty".to_owned()));
        }
        if self.busy {
            return Err(PracticeError::Session(
                "a generation request is already in flight".to_owned(),
            ));
        }
        let topic = self
            .topic
            .clone()
            .ok_or_else(|| PracticeError::Session("session not started".to_owned()))?;

        self.busy = true;
        let reply = self
            .shaper
            .continue_conversation(&topic, &self.history, user_text)
            .await;
        self.busy = false;

        self.history.push(Turn::user(user_text));
        self.history.push(Turn::assistant(reply.message.clone()));
        self.history.trim_to(self.config.max_history_turns);
        self.speak(&reply.message).await;

        Ok(reply)
    }

    /// End the current session, clearing topic and history.
    pub fn restart(&mut self) {
        info!(turns = self.history.len(), "restarting session");
        self.topic = None;
        self.history.clear();
        self.busy = false;
    }

    /// Speak a reply, logging synthesis failures instead of surfacing them;
    /// the turn itself already succeeded.
    async fn speak(&mut self, text: &str) {
        if let Err(e) = self.output.speak(text).await {
            warn!(error = %e, "speech output failed");
        }
    }
}
