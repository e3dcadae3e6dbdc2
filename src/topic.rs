//! Topic classification for fallback content selection.
//!
//! [`classify`] maps a free-text topic string onto a closed set of
//! [`TopicCategory`] values by case-insensitive substring matching. The
//! category only influences which fallback question bank is consulted when
//! the remote generator is unavailable; the remote path never depends on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of topic categories with dedicated fallback content.
///
/// [`TopicCategory::General`] is the catch-all for topics matching no
/// keyword group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicCategory {
    /// Travel and places.
    Travel,
    /// Technology and gadgets.
    Technology,
    /// Food and cooking.
    Food,
    /// Movies and film.
    Movies,
    /// Music and songs.
    Music,
    /// Anything else.
    General,
}

impl fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Travel => write!(f, "travel"),
            Self::Technology => write!(f, "technology"),
            Self::Food => write!(f, "food"),
            Self::Movies => write!(f, "movies"),
            Self::Music => write!(f, "music"),
            Self::General => write!(f, "general"),
        }
    }
}

/// Keyword groups in fixed priority order: the first group with a matching
/// keyword wins.
const KEYWORD_GROUPS: &[(TopicCategory, &[&str])] = &[
    (TopicCategory::Travel, &["travel"]),
    (TopicCategory::Technology, &["tech"]),
    (TopicCategory::Food, &["food", "cook"]),
    (TopicCategory::Movies, &["movie", "film"]),
    (TopicCategory::Music, &["music", "song"]),
];

/// Classify a free-text topic into a [`TopicCategory`].
///
/// Pure function: case-insensitive substring matching against the keyword
/// groups above, first match wins, no match yields
/// [`TopicCategory::General`].
pub fn classify(topic: &str) -> TopicCategory {
    let lowered = topic.to_lowercase();
    for (category, keywords) in KEYWORD_GROUPS {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return *category;
        }
    }
    TopicCategory::General
}
