//! Browse pipeline for the lesson archive: substring filtering, stable
//! sorting, clamped pagination and day grouping, plus the deep-link
//! helpers a presentation layer needs. The pipeline is pure; the only
//! ambient input is an explicit `today` used for group badges.

mod groups;
mod page;
mod pipeline;

pub use page::{DayBadge, DayGroup, QueryPage, SkippedRecord};
pub use pipeline::{find_by_title, query, subjects};
