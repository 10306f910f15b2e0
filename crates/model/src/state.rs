use serde::{Deserialize, Serialize};

/// Default number of cards per page.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Which subjects pass the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubjectFilter {
    /// Every subject passes; `"all"` on the wire
    #[default]
    All,
    /// Exact subject label
    Subject(String),
}

impl From<String> for SubjectFilter {
    fn from(raw: String) -> Self {
        if raw == "all" {
            Self::All
        } else {
            Self::Subject(raw)
        }
    }
}

impl From<SubjectFilter> for String {
    fn from(filter: SubjectFilter) -> Self {
        match filter {
            SubjectFilter::All => "all".to_string(),
            SubjectFilter::Subject(name) => name,
        }
    }
}

impl SubjectFilter {
    /// True when the given subject label passes the filter.
    #[must_use]
    pub fn admits(&self, subject: &str) -> bool {
        match self {
            Self::All => true,
            Self::Subject(name) => name == subject,
        }
    }
}

/// Stable orderings the pipeline can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recent date first
    #[default]
    Newest,
    /// Oldest date first
    Oldest,
    /// Case-insensitive title order
    Title,
}

impl SortOrder {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
        }
    }

    /// Orders that compare calendar dates, and therefore need each
    /// record's date to parse.
    #[must_use]
    pub const fn is_date_based(self) -> bool {
        matches!(self, Self::Newest | Self::Oldest)
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "title" => Ok(Self::Title),
            other => Err(format!(
                "unknown sort order '{other}' (expected newest, oldest or title)"
            )),
        }
    }
}

/// Immutable snapshot of the browsing controls.
///
/// A state value is built once per interaction and handed to the
/// pipeline whole; refining a control produces a new value instead of
/// mutating shared state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Search term, lowercase and trimmed; empty matches everything
    pub search: String,
    /// Subject restriction
    pub subject: SubjectFilter,
    /// Active ordering
    pub sort: SortOrder,
    /// 1-based page number; the pipeline clamps out-of-range values
    pub page: usize,
    /// Cards per page, at least 1
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            subject: SubjectFilter::All,
            sort: SortOrder::Newest,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// State with every control at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term, trimming and lowercasing the raw input.
    #[must_use]
    pub fn with_search(mut self, raw: &str) -> Self {
        self.search = raw.trim().to_lowercase();
        self
    }

    /// Restrict to one subject; `"all"` clears the restriction.
    #[must_use]
    pub fn with_subject(mut self, raw: &str) -> Self {
        self.subject = SubjectFilter::from(raw.to_string());
        self
    }

    /// Change the ordering.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Jump to a 1-based page.
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Change the page size, keeping it at least 1.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_state_shows_page_one_of_everything() {
        let state = QueryState::new();
        assert_eq!(state.search, "");
        assert_eq!(state.subject, SubjectFilter::All);
        assert_eq!(state.sort, SortOrder::Newest);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn with_search_normalizes_raw_input() {
        let state = QueryState::new().with_search("  КреПостное ПРАВО  ");
        assert_eq!(state.search, "крепостное право");
    }

    #[test]
    fn with_page_size_refuses_zero() {
        assert_eq!(QueryState::new().with_page_size(0).page_size, 1);
        assert_eq!(QueryState::new().with_page_size(12).page_size, 12);
    }

    #[test]
    fn subject_filter_round_trips_the_all_sentinel() {
        assert_eq!(
            serde_json::to_string(&SubjectFilter::All).unwrap(),
            "\"all\""
        );
        let parsed: SubjectFilter = serde_json::from_str("\"История\"").unwrap();
        assert_eq!(parsed, SubjectFilter::Subject("История".to_string()));
        let sentinel: SubjectFilter = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(sentinel, SubjectFilter::All);
    }

    #[test]
    fn subject_filter_matches_exact_labels_only() {
        let filter = SubjectFilter::Subject("История".to_string());
        assert!(filter.admits("История"));
        assert!(!filter.admits("история"));
        assert!(!filter.admits("Истории России"));
        assert!(SubjectFilter::All.admits("Что угодно"));
    }

    #[test]
    fn sort_order_parses_wire_names() {
        assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
        assert_eq!(" Oldest ".parse::<SortOrder>().unwrap(), SortOrder::Oldest);
        assert_eq!("title".parse::<SortOrder>().unwrap(), SortOrder::Title);
        assert!("date".parse::<SortOrder>().is_err());
    }

    #[test]
    fn only_date_orders_are_date_based() {
        assert!(SortOrder::Newest.is_date_based());
        assert!(SortOrder::Oldest.is_date_based());
        assert!(!SortOrder::Title.is_date_based());
    }
}
