use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::quiz::error::{QuizError, Result};

/// Display copy shown once a flavor wins the quiz.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuizResult {
    pub flavor_id: String,
    pub title: String,
    pub description: String,
    pub emoji: String,
    /// One-liner vibe description
    pub vibe: String,
}

impl QuizResult {
    fn new(flavor_id: &str, title: &str, description: &str, emoji: &str, vibe: &str) -> Self {
        Self {
            flavor_id: flavor_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            emoji: emoji.to_string(),
            vibe: vibe.to_string(),
        }
    }
}

static RESULTS: LazyLock<BTreeMap<String, QuizResult>> = LazyLock::new(|| {
    [
        QuizResult::new(
            "white-cheese",
            "The Classic",
            "You're the chill friend everyone needs. Low-key, reliable, and universally loved. You don't need flash to make an impression.",
            "🤍",
            "Effortlessly cool, no drama needed",
        ),
        QuizResult::new(
            "orange-spice",
            "The Signature",
            "You've got that perfect blend of warmth and kick. People gravitate to you because you bring the energy without overdoing it.",
            "🧡",
            "The life of the party, but never trying too hard",
        ),
        QuizResult::new(
            "mozz-pure",
            "The Smooth Operator",
            "Cool, calm, collected. You're the one who makes everything look effortless. Silky smooth vibes only.",
            "💙",
            "Zen master with impeccable taste",
        ),
        QuizResult::new(
            "cheddar-beddar",
            "The Bold One",
            "Sharp, confident, unapologetic. You know what you like and you're not afraid to say it. Respect.",
            "🧀",
            "Strong opinions, stronger flavor",
        ),
        QuizResult::new(
            "mega-spice",
            "The Legend",
            "You live life at 11. Others call you intense, you call it Tuesday. Not everyone can handle your energy — and that's exactly how you like it.",
            "🔥",
            "Maximum intensity, zero regrets",
        ),
    ]
    .into_iter()
    .map(|result| (result.flavor_id.clone(), result))
    .collect()
});

pub fn lookup_result_copy(flavor_id: &str) -> Result<&'static QuizResult> {
    RESULTS
        .get(flavor_id)
        .ok_or_else(|| QuizError::UnknownFlavor(flavor_id.to_string()))
}
