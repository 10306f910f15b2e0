use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::stem::stem;

/// Bonus for a bare four-digit number, the shape of a year fact.
const YEAR_BONUS: f64 = 100.0;
/// Bonus for an em-dash with surrounding spaces, the shape of a
/// definition or apposition.
const SPACED_DASH_BONUS: f64 = 80.0;
/// Bonus for explicit definition phrasing.
const DEFINITION_BONUS: f64 = 70.0;
/// Bonus for high-salience subject keywords.
const SALIENT_BONUS: f64 = 50.0;
/// Penalty for supporting-example phrasing.
const EXAMPLE_PENALTY: f64 = -30.0;
/// Penalty for list lead-ins that carry no content themselves.
const LIST_LEAD_PENALTY: f64 = -40.0;

/// Stems shorter than four characters add noise, not signal.
const MIN_STEM_CHARS: usize = 4;

const SALIENT_KEYWORDS: &[&str] = &["убийство", "манифест", "царь"];

static BARE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}\b").expect("year regex"));

/// True when the line carries a four-digit number as a whole word.
#[must_use]
pub fn mentions_year(line: &str) -> bool {
    BARE_YEAR.is_match(line)
}

/// Count stem occurrences across the entire content, one entry per
/// whitespace token whose stem is long enough to carry signal.
#[must_use]
pub fn build_stem_frequency(content: &str) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for token in content.split_whitespace() {
        let key = stem(token);
        if key.chars().count() >= MIN_STEM_CHARS {
            *freq.entry(key).or_insert(0) += 1;
        }
    }
    freq
}

/// Score one normalized line against the content-wide stem table.
///
/// The base is the summed frequency of the line's stems; shape bonuses
/// and penalties then push factual, definition-like lines up and
/// examples and list lead-ins down.
#[must_use]
pub fn score_line(line: &str, freq: &HashMap<String, usize>) -> f64 {
    let mut score = 0.0;
    for token in line.split_whitespace() {
        if let Some(count) = freq.get(&stem(token)) {
            score += *count as f64;
        }
    }

    let lowered = line.to_lowercase();
    if mentions_year(line) {
        score += YEAR_BONUS;
    }
    if line.contains(" — ") {
        score += SPACED_DASH_BONUS;
    }
    if lowered.contains("это ") || lowered.contains("называется") {
        score += DEFINITION_BONUS;
    }
    if SALIENT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        score += SALIENT_BONUS;
    }
    if lowered.contains("например") {
        score += EXAMPLE_PENALTY;
    }
    if line.ends_with(':') {
        score += LIST_LEAD_PENALTY;
    }
    score
}
