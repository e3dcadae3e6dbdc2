//! Deterministic fallback content for when the remote generator fails.
//!
//! The content bank is static, read-only data: per-category opening
//! questions and one global list of suggestion sentence-starters. The
//! resolver functions ([`opening_question`], [`suggested_starter`]) are the
//! last line of defense: they never fail and never return empty strings,
//! so the [`ResponseShaper`](crate::shaper::ResponseShaper) can always hand
//! the controller a usable reply.

use crate::topic::{classify, TopicCategory};
use rand::seq::SliceRandom;

/// Opening questions for travel topics.
pub const TRAVEL_QUESTIONS: &[&str] = &[
    "What's your favorite place you've traveled to so far?",
    "Have you ever experienced culture shock while traveling?",
    "What's one place you'd love to visit in the future?",
    "Do you prefer traveling alone or with others?",
    "What's the most interesting food you've tried while traveling?",
];

/// Opening questions for technology topics.
pub const TECHNOLOGY_QUESTIONS: &[&str] = &[
    "How do you think technology has changed our daily lives?",
    "What's your favorite piece of technology that you use every day?",
    "Do you think artificial intelligence will have a positive impact on society?",
    "How do you stay up-to-date with new technology trends?",
    "What technological innovation are you most excited about?",
];

/// Opening questions for food topics.
pub const FOOD_QUESTIONS: &[&str] = &[
    "What's your favorite cuisine and why do you enjoy it?",
    "Have you ever tried cooking a dish from another culture?",
    "What's the most unusual food you've ever eaten?",
    "Do you prefer eating at home or at restaurants?",
    "If you could only eat one meal for the rest of your life, what would it be?",
];

/// Opening questions for movie topics.
pub const MOVIE_QUESTIONS: &[&str] = &[
    "What genre of movies do you enjoy the most?",
    "Who is your favorite actor or actress?",
    "What was the last movie you watched that really impressed you?",
    "Do you prefer watching movies at home or in theaters?",
    "Has a movie ever changed your perspective on something important?",
];

/// Opening questions for music topics.
pub const MUSIC_QUESTIONS: &[&str] = &[
    "What kind of music do you listen to most often?",
    "Do you play any musical instruments?",
    "How has your taste in music changed over time?",
    "What's your favorite song right now?",
    "Have you ever been to a live concert? How was the experience?",
];

/// Suggestion sentence-starters, independent of topic.
pub const SUGGESTED_STARTERS: &[&str] = &[
    "I think... because of my personal experience with...",
    "In my opinion, the most important aspect is...",
    "I've always been interested in this because...",
    "I'm not entirely sure, but I believe that...",
    "From my perspective, I would say that...",
    "Based on what I've learned, I think that...",
];

/// Returns the opening-question bank for a non-general category.
pub fn questions_for(category: TopicCategory) -> Option<&'static [&'static str]> {
    match category {
        TopicCategory::Travel => Some(TRAVEL_QUESTIONS),
        TopicCategory::Technology => Some(TECHNOLOGY_QUESTIONS),
        TopicCategory::Food => Some(FOOD_QUESTIONS),
        TopicCategory::Movies => Some(MOVIE_QUESTIONS),
        TopicCategory::Music => Some(MUSIC_QUESTIONS),
        TopicCategory::General => None,
    }
}

/// Pick an opening question for the topic.
///
/// Topics classified into a known category get a uniform random pick from
/// that category's bank. General topics get a templated question embedding
/// the topic text. Never returns an empty string.
pub fn opening_question(topic: &str) -> String {
    match questions_for(classify(topic)) {
        Some(bank) => pick(bank).to_owned(),
        None => format!(
            "Let's talk about {topic}. What aspects of {topic} are you most interested in?"
        ),
    }
}

/// Pick a suggestion sentence-starter, independent of topic.
///
/// Never returns an empty string.
pub fn suggested_starter() -> String {
    pick(SUGGESTED_STARTERS).to_owned()
}

/// Uniform random pick from a non-empty static list.
fn pick(bank: &'static [&'static str]) -> &'static str {
    bank.choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(bank[0])
}
