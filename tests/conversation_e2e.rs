//! End-to-end conversation scenarios with stubbed generators.
//!
//! Drives the public shaper/controller API with generator stubs covering
//! every outcome class: success, transport failure, provider failure, empty
//! output, prose-only output, and malformed payloads. The shaper must
//! resolve to a usable Reply in all of them.

use async_trait::async_trait;
use std::sync::Arc;

use tandem::config::ConversationConfig;
use tandem::controller::ConversationController;
use tandem::fallback::{SUGGESTED_STARTERS, TECHNOLOGY_QUESTIONS};
use tandem::llm::{GeneratorError, ReplyGenerator};
use tandem::reply::{ConversationHistory, Turn};
use tandem::shaper::ResponseShaper;
use tandem::speech::SpeechOutput;

/// Stub generator with one fixed outcome per instance.
enum Outcome {
    Text(String),
    Unavailable,
    Remote,
}

struct Stub(Outcome);

#[async_trait]
impl ReplyGenerator for Stub {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate_structured_reply(&self, _prompt: &str) -> Result<String, GeneratorError> {
        match &self.0 {
            Outcome::Text(text) => Ok(text.clone()),
            Outcome::Unavailable => Err(GeneratorError::Unavailable("network down".into())),
            Outcome::Remote => Err(GeneratorError::Remote("provider rejected request".into())),
        }
    }
}

fn shaper(outcome: Outcome) -> ResponseShaper {
    ResponseShaper::new(Arc::new(Stub(outcome)))
}

struct SilentOutput;

#[async_trait]
impl SpeechOutput for SilentOutput {
    async fn speak(&mut self, _text: &str) -> tandem::Result<()> {
        Ok(())
    }
}

// ── start_conversation ──────────────────────────────────────────

#[tokio::test]
async fn start_resolves_for_every_generator_outcome() {
    let outcomes = [
        Outcome::Text(r#"{"message":"Hello!","suggestion":"I think..."}"#.into()),
        Outcome::Text("no structured payload".into()),
        Outcome::Text(String::new()),
        Outcome::Unavailable,
        Outcome::Remote,
    ];
    for outcome in outcomes {
        let reply = shaper(outcome).start_conversation("gardening").await;
        assert!(!reply.message.is_empty());
        assert!(!reply.suggestion.is_empty());
        assert!(reply.feedback.is_none());
    }
}

#[tokio::test]
async fn technology_trends_unavailable_scenario() {
    // Topic "Technology trends", remote capability unavailable.
    let reply = shaper(Outcome::Unavailable)
        .start_conversation("Technology trends")
        .await;

    assert!(reply.message.starts_with("Hi there! I'd love to chat about Technology trends."));
    // The embedded question comes from the technology bank.
    assert!(TECHNOLOGY_QUESTIONS
        .iter()
        .any(|q| reply.message.ends_with(q)));
    assert!(SUGGESTED_STARTERS.contains(&reply.suggestion.as_str()));
    assert!(reply.feedback.is_none());
}

#[tokio::test]
async fn unmatched_topic_falls_back_to_exact_template() {
    let reply = shaper(Outcome::Unavailable)
        .start_conversation("gardening")
        .await;
    assert_eq!(
        reply.message,
        "Hi there! I'd love to chat about gardening. Let's talk about gardening. \
         What aspects of gardening are you most interested in?"
    );
}

// ── continue_conversation ───────────────────────────────────────

#[tokio::test]
async fn food_verbatim_payload_scenario() {
    let payload = r#"{"message":"Great!","suggestion":"I also enjoy...","feedback":{"corrected":"I like pasta.","explanation":"Added punctuation."}}"#;
    let shaper = shaper(Outcome::Text(payload.into()));

    let mut history = ConversationHistory::new();
    history.push(Turn::user("I like pasta"));

    let reply = shaper
        .continue_conversation("Food", &history, "I like pasta")
        .await;

    assert_eq!(reply.message, "Great!");
    assert_eq!(reply.suggestion, "I also enjoy...");
    let feedback = reply.feedback.expect("feedback preserved");
    assert_eq!(feedback.corrected, "I like pasta.");
    assert_eq!(feedback.explanation, "Added punctuation.");
}

#[tokio::test]
async fn continuation_failures_use_generic_fallback_not_topic_banks() {
    let history = ConversationHistory::new();
    let outcomes = [
        Outcome::Unavailable,
        Outcome::Remote,
        Outcome::Text(String::new()),
        Outcome::Text("chatty prose without braces".into()),
    ];
    for outcome in outcomes {
        let reply = shaper(outcome)
            .continue_conversation("Technology trends", &history, "I use my phone a lot")
            .await;
        assert_eq!(
            reply.message,
            "Thank you for sharing that. Could you tell me more about your thoughts on this topic?"
        );
        assert!(SUGGESTED_STARTERS.contains(&reply.suggestion.as_str()));
        assert!(reply.feedback.is_none());
        // Topic banks are opening-turn only.
        assert!(!TECHNOLOGY_QUESTIONS.contains(&reply.message.as_str()));
    }
}

#[tokio::test]
async fn incomplete_feedback_discarded_payload_preserved() {
    let payload = r#"{"message":"Nice!","suggestion":"And then...","feedback":{"corrected":"X"}}"#;
    let history = ConversationHistory::new();
    let reply = shaper(Outcome::Text(payload.into()))
        .continue_conversation("Food", &history, "hi")
        .await;
    assert!(reply.feedback.is_none());
    assert_eq!(reply.message, "Nice!");
    assert_eq!(reply.suggestion, "And then...");
}

#[tokio::test]
async fn prose_wrapped_payload_is_extracted() {
    let payload = concat!(
        "Of course! Here you go:\n",
        r#"{"message":"Wonderful choice.","suggestion":"My favorite is...","feedback":null}"#,
        "\nEnjoy practicing!"
    );
    let history = ConversationHistory::new();
    let reply = shaper(Outcome::Text(payload.into()))
        .continue_conversation("Movies", &history, "I watch movies weekly")
        .await;
    assert_eq!(reply.message, "Wonderful choice.");
    assert!(reply.feedback.is_none());
}

// ── full controller flow ────────────────────────────────────────

#[tokio::test]
async fn session_flow_with_degraded_generator() {
    // The generator is down for the whole session; the user still gets a
    // complete, coherent conversation out of fallback content.
    let shaper = shaper(Outcome::Unavailable);
    let mut controller = ConversationController::new(
        shaper,
        Box::new(SilentOutput),
        ConversationConfig::default(),
    );

    let opening = controller.start("Travel to Japan").await.expect("start");
    assert!(opening.message.contains("Travel to Japan"));

    let reply = controller.submit("I visited Kyoto last year").await.expect("submit");
    assert!(!reply.message.is_empty());
    assert!(reply.feedback.is_none());

    // Opening assistant turn + user turn + assistant turn, in order.
    assert_eq!(controller.history().len(), 3);
    assert_eq!(controller.history().turns()[1].text, "I visited Kyoto last year");

    controller.restart();
    assert!(controller.history().is_empty());
    assert!(!controller.is_started());
}
