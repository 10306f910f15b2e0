use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Content topic, decided once per lesson from its full text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Equations, functions, vectors
    Math,
    /// Dates, reforms, rulers
    History,
    /// Punctuation and clause grammar
    Lang,
    /// Anatomy and digestion
    Bio,
    /// Fallback when no rule fires
    General,
}

/// Literal calendar icon for dated lines in history content.
pub const HISTORY_YEAR_ICON: &str = "📅";

/// Ordered topic rules; the first matching pattern decides. Word
/// boundaries guard the short stems so that "век" does not fire on
/// "человек" or "год" on "погода".
static TOPIC_RULES: Lazy<[(Topic, Regex); 4]> = Lazy::new(|| {
    [
        (
            Topic::Math,
            rule(r"вектор|координат|парабол|уравнени|функци"),
        ),
        (
            Topic::History,
            rule(r"александр|\bвек|реформ|\bцар|народни|\bг\.|\bгод"),
        ),
        (Topic::Lang, rule(r"запят|союз|придаточн|пунктуац")),
        (Topic::Bio, rule(r"зуб|желуд|\bорган|кишечник|фермент")),
    ]
});

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("topic rule regex")
}

/// Classify a lesson's full text into its topic.
#[must_use]
pub fn classify_topic(text: &str) -> Topic {
    let lowered = text.to_lowercase();
    TOPIC_RULES
        .iter()
        .find(|(_, pattern)| pattern.is_match(&lowered))
        .map_or(Topic::General, |(topic, _)| *topic)
}

impl Topic {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Math => "math",
            Self::History => "history",
            Self::Lang => "lang",
            Self::Bio => "bio",
            Self::General => "general",
        }
    }

    /// Ordered icon set used to decorate key sentences. Index 0 is the
    /// definition icon, index 1 the rule-or-date icon; the rest only
    /// serve the positional rotation.
    #[must_use]
    pub const fn icons(self) -> &'static [&'static str] {
        match self {
            Self::Math => &["📐", "📏", "🧮", "✏️"],
            Self::History => &["📜", "👑", "⚔️", "🏛️", "🗺️"],
            Self::Lang => &["📝", "✒️", "📖", "🔤"],
            Self::Bio => &["🔬", "🧬", "🌿", "🫀"],
            Self::General => &["📌", "💡", "📖", "⭐"],
        }
    }
}
