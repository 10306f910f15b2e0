use konspekt_model::{LessonRecord, RecordError};
use serde::{Deserialize, Serialize};

/// Why a record was left out of a date-ordered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    pub title: String,
    pub reason: String,
}

impl From<RecordError> for SkippedRecord {
    fn from(err: RecordError) -> Self {
        Self {
            title: err.title().to_string(),
            reason: err.to_string(),
        }
    }
}

/// Relative-day badge on a group label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBadge {
    Today,
    Yesterday,
}

impl DayBadge {
    /// Fixed-locale display text
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "Сегодня",
            Self::Yesterday => "Вчера",
        }
    }
}

/// One calendar day on a page, in the page's sort direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayGroup {
    /// Exact date string the group is keyed by
    pub date: String,
    /// "Понедельник, 15 января 2024"
    pub label: String,
    /// Set when the day is today or yesterday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<DayBadge>,
    /// Page items falling on this day, page order preserved
    pub items: Vec<LessonRecord>,
}

/// Result of one pipeline run: the page slice plus everything a
/// presentation layer needs to draw the controls around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryPage {
    /// Records on the clamped page, in sort order
    pub items: Vec<LessonRecord>,
    /// 1-based page number after clamping
    pub page: usize,
    /// Total pages in the match set; 0 when nothing matches
    pub total_pages: usize,
    /// Sortable matches before pagination
    pub total_matches: usize,
    /// Day partition of `items`; None for orders that ignore dates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<DayGroup>>,
    /// Records excluded from date-dependent steps, with reasons
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedRecord>,
}

impl QueryPage {
    /// True when nothing matched the state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}
