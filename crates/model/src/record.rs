use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RecordError, Result};

/// One lesson in the archive.
///
/// Records arrive from an external source and are never mutated by the
/// pipeline. Within a set the title doubles as the deep-link identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonRecord {
    /// Display title, unique within a set
    pub title: String,
    /// Subject label, an open set ("Алгебра", "История", ...)
    pub subject: String,
    /// Calendar date in ISO form, "2024-01-15"; no time of day
    pub date: String,
    /// Markdown body
    pub content: String,
    /// Optional compact body for constrained rendering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_tiny: Option<String>,
}

impl LessonRecord {
    /// Parse the record's date field.
    ///
    /// A blank field is reported as a missing field, anything else that
    /// is not an ISO calendar date as an invalid one. Callers must not
    /// substitute the current date for either case.
    pub fn parsed_date(&self) -> Result<NaiveDate> {
        let raw = self.date.trim();
        if raw.is_empty() {
            return Err(RecordError::missing_field(&self.title, "date"));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| RecordError::invalid_date(&self.title, raw))
    }

    /// Body preferred for compact rendering.
    #[must_use]
    pub fn compact_content(&self) -> &str {
        self.content_tiny.as_deref().unwrap_or(&self.content)
    }
}
