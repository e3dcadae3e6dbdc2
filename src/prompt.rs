//! Prompt assembly for the remote reply generator.
//!
//! Two prompt shapes exist: the opening prompt (topic only) and the
//! continuation prompt (topic + labeled history + latest utterance). Both
//! instruct the model to answer with a single JSON object so the shaper can
//! extract and validate it.

use crate::reply::{ConversationHistory, Role};

/// Role line prepended to every prompt.
const PARTNER_ROLE: &str =
    "You are an AI English conversation partner helping someone practice \
     their English speaking skills";

/// Build the prompt for the opening turn of a conversation.
///
/// Requests a JSON object with `message` (greeting plus one open-ended,
/// engaging question about the topic) and `suggestion` (a response the user
/// could practice saying).
pub fn opening_prompt(topic: &str) -> String {
    format!(
        "{PARTNER_ROLE}.\n\
         \n\
         The user wants to talk about \"{topic}\".\n\
         \n\
         Respond with a JSON object using this structure:\n\
         {{\n\
         \x20 \"message\": \"A friendly greeting and an interesting open-ended question about {topic} to start the conversation\",\n\
         \x20 \"suggestion\": \"A suggested response the user could say to answer your question\"\n\
         }}\n\
         \n\
         Make your question engaging, specific, and designed to encourage the user to practice speaking English."
    )
}

/// Build the prompt for a continuation turn.
///
/// Includes the full ordered history as alternating labeled turns, the
/// latest user utterance, and the required JSON structure with an optional
/// `feedback` object. The model is directed to stay encouraging and ask a
/// follow-up question within `message`.
pub fn continuation_prompt(topic: &str, history: &ConversationHistory, user_text: &str) -> String {
    let mut prompt = format!("{PARTNER_ROLE} on the topic of \"{topic}\".");

    if !history.is_empty() {
        prompt.push_str("\n\nConversation history:");
        for turn in history.turns() {
            let label = match turn.role {
                Role::User => "User",
                Role::Assistant => "You",
            };
            prompt.push_str(&format!("\n{label}: {}", turn.text));
        }
    }

    prompt.push_str(&format!("\n\nUser's latest message: \"{user_text}\""));

    prompt.push_str(
        "\n\nRespond with a JSON object using this structure:\n\
         {\n\
         \x20 \"message\": \"Your natural, conversational response to the user\",\n\
         \x20 \"suggestion\": \"A suggested response the user could say next to practice their English\",\n\
         \x20 \"feedback\": {\n\
         \x20   \"corrected\": \"The corrected version of the user's message if there are grammar or language errors\",\n\
         \x20   \"explanation\": \"A brief, friendly explanation of any corrections\"\n\
         \x20 }\n\
         }\n\
         \n\
         If there are no errors in the user's message, set \"feedback\" to null.\n\
         Make your response friendly, encouraging, and natural. Ask a follow-up question to keep the conversation going.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::reply::Turn;

    #[test]
    fn opening_prompt_embeds_topic_and_schema() {
        let prompt = opening_prompt("Travel to Japan");
        assert!(prompt.contains("\"Travel to Japan\""));
        assert!(prompt.contains("\"message\""));
        assert!(prompt.contains("\"suggestion\""));
        assert!(prompt.contains("English conversation partner"));
        // Opening prompts never request feedback.
        assert!(!prompt.contains("\"feedback\""));
    }

    #[test]
    fn continuation_prompt_renders_labeled_history_in_order() {
        let mut history = ConversationHistory::new();
        history.push(Turn::assistant("Hi! What do you like to cook?"));
        history.push(Turn::user("I like pasta"));

        let prompt = continuation_prompt("Food", &history, "I cook every day");
        let assistant_pos = prompt.find("You: Hi! What do you like to cook?").unwrap();
        let user_pos = prompt.find("User: I like pasta").unwrap();
        assert!(assistant_pos < user_pos);
        assert!(prompt.contains("User's latest message: \"I cook every day\""));
    }

    #[test]
    fn continuation_prompt_requests_feedback_field() {
        let history = ConversationHistory::new();
        let prompt = continuation_prompt("Food", &history, "hello");
        assert!(prompt.contains("\"feedback\""));
        assert!(prompt.contains("\"corrected\""));
        assert!(prompt.contains("\"explanation\""));
        assert!(prompt.contains("set \"feedback\" to null"));
        assert!(prompt.contains("Ask a follow-up question"));
    }

    #[test]
    fn continuation_prompt_skips_history_block_when_empty() {
        let history = ConversationHistory::new();
        let prompt = continuation_prompt("Music", &history, "hi");
        assert!(!prompt.contains("Conversation history:"));
    }
}
