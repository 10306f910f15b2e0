//! # Konspekt Summarize
//!
//! Extractive key-sentence digests for Russian lesson notes.
//!
//! ## Philosophy
//!
//! No model, no dictionary. A lesson's own wording is the signal: the
//! stems that repeat across the body mark its core vocabulary, and a
//! handful of shape heuristics (year facts, definition dashes, list
//! lead-ins) push factual lines up and filler down. What survives is
//! emitted in the original reading order, so the digest reads like the
//! lesson, only shorter.
//!
//! ## Pipeline
//!
//! ```text
//! Lesson body
//!     │
//!     ├──> Topic classification (ordered keyword rules)
//!     │
//!     ├──> Per line: normalize → candidate gate (length, homework)
//!     │
//!     ├──> Stem-frequency table over the whole body
//!     │
//!     ├──> Score = Σ stem frequency + shape bonuses/penalties
//!     │
//!     └──> Keep ≥ 1.1 × mean, top 10 by score,
//!          re-sort by position, attach topic icons
//! ```
//!
//! ## Example
//!
//! ```rust
//! use konspekt_summarize::summarize;
//!
//! let content = "\
//! Крепостное право — зависимость крестьян от помещиков в России.
//! В 1861 году крепостное право было отменено манифестом Александра II.
//! Домашнее задание: прочитать параграф пятый и выписать даты.";
//!
//! for point in summarize(content) {
//!     println!("{} {}", point.icon, point.text);
//! }
//! ```

mod normalize;
mod score;
mod stem;
mod summarize;
mod topics;

pub use normalize::normalize_line;
pub use score::{build_stem_frequency, mentions_year, score_line};
pub use stem::stem;
pub use summarize::{summarize, KeySentence, MIN_CONTENT_CHARS};
pub use topics::{classify_topic, Topic, HISTORY_YEAR_ICON};
