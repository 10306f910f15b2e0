use serde::{Deserialize, Serialize};

use crate::normalize::normalize_line;
use crate::score::{build_stem_frequency, mentions_year, score_line};
use crate::topics::{classify_topic, Topic, HISTORY_YEAR_ICON};

/// Content shorter than this many characters is not worth extracting
/// from.
pub const MIN_CONTENT_CHARS: usize = 100;

/// A candidate line must carry at least this many whitespace tokens...
const MIN_UNIT_TOKENS: usize = 6;
/// ...and at least this many characters.
const MIN_UNIT_CHARS: usize = 30;
/// Cap on emitted key sentences.
const MAX_KEY_SENTENCES: usize = 10;
/// A candidate must beat the mean candidate score by this factor.
const THRESHOLD_FACTOR: f64 = 1.1;

/// Homework and admin phrasing that disqualifies a line outright.
const TRASH_KEYWORDS: &[&str] = &[
    "домашнее",
    "задание",
    "выполнить",
    "упражнение",
    "номер",
    "повторить",
];

/// One extracted key sentence with its decoration icon.
///
/// The icon is metadata; whether and how to render it is the caller's
/// decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySentence {
    pub icon: String,
    pub text: String,
}

/// Scored candidate, alive only for the duration of one `summarize`
/// call.
struct ScoredLine {
    text: String,
    score: f64,
    original_index: usize,
}

/// Extract up to ten key sentences from a lesson body.
///
/// Short content yields an empty list, never an error. The result
/// keeps the original reading order regardless of score, so a caller
/// can render it as a top-to-bottom digest.
#[must_use]
pub fn summarize(content: &str) -> Vec<KeySentence> {
    if content.chars().count() < MIN_CONTENT_CHARS {
        return Vec::new();
    }

    let topic = classify_topic(content);
    let freq = build_stem_frequency(content);

    let mut candidates: Vec<ScoredLine> = content
        .lines()
        .map(normalize_line)
        .filter(|line| is_candidate(line))
        .enumerate()
        .map(|(original_index, text)| ScoredLine {
            score: score_line(&text, &freq),
            text,
            original_index,
        })
        .collect();

    // Without candidates the mean is undefined; short-circuit instead
    // of letting a zero division poison the threshold.
    if candidates.is_empty() {
        return Vec::new();
    }

    let mean = candidates.iter().map(|c| c.score).sum::<f64>() / candidates.len() as f64;
    let threshold = mean * THRESHOLD_FACTOR;
    log::debug!(
        "summarize: {} candidates, mean {:.1}, threshold {:.1}",
        candidates.len(),
        mean,
        threshold
    );

    candidates.retain(|c| c.score >= threshold);
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.original_index.cmp(&b.original_index))
    });
    candidates.truncate(MAX_KEY_SENTENCES);
    candidates.sort_by_key(|c| c.original_index);

    candidates
        .into_iter()
        .map(|c| KeySentence {
            icon: pick_icon(&c.text, topic, c.original_index).to_string(),
            text: c.text,
        })
        .collect()
}

fn is_candidate(line: &str) -> bool {
    if line.split_whitespace().count() < MIN_UNIT_TOKENS || line.chars().count() < MIN_UNIT_CHARS {
        return false;
    }
    let lowered = line.to_lowercase();
    !TRASH_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Decoration rules, checked in order: dated lines, definition shapes,
/// rule-or-condition shapes, then a positional rotation through the
/// topic's icon set.
fn pick_icon(line: &str, topic: Topic, position: usize) -> &'static str {
    let icons = topic.icons();
    if mentions_year(line) {
        return if topic == Topic::History {
            HISTORY_YEAR_ICON
        } else {
            icons[1]
        };
    }
    let lowered = line.to_lowercase();
    if line.contains('—') || lowered.contains("это ") || lowered.contains("называется") {
        return icons[0];
    }
    if lowered.contains("если") || lowered.contains("правило") {
        return icons[1];
    }
    icons[position % icons.len()]
}
