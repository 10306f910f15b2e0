//! Shared data model for the lesson archive: records, the immutable
//! browsing state, and the fixed Russian date tables the rest of the
//! workspace renders with.

mod dates;
mod error;
mod record;
mod state;

pub use dates::{
    capitalize_first, long_date, month_name, short_date, weekday_label, MONTHS_GENITIVE,
    MONTHS_NOMINATIVE, WEEKDAYS,
};
pub use error::{RecordError, Result};
pub use record::LessonRecord;
pub use state::{QueryState, SortOrder, SubjectFilter, DEFAULT_PAGE_SIZE};
