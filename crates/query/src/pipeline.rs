use chrono::NaiveDate;
use konspekt_model::{month_name, short_date, LessonRecord, QueryState, SortOrder};

use crate::groups::group_by_day;
use crate::page::{QueryPage, SkippedRecord};

/// Run the whole browse pipeline over a record set: filter, sort,
/// clamp, slice, group.
///
/// Pure in `records`, `state` and `today`; the current date only
/// affects the Today/Yesterday group badges.
#[must_use]
pub fn query(records: &[LessonRecord], state: &QueryState, today: NaiveDate) -> QueryPage {
    let needle = state.search.trim().to_lowercase();
    let page_size = state.page_size.max(1);

    let matched: Vec<&LessonRecord> = records
        .iter()
        .filter(|record| state.subject.admits(&record.subject) && matches_search(record, &needle))
        .collect();
    log::debug!(
        "query: {} of {} records match search='{}' subject={:?}",
        matched.len(),
        records.len(),
        needle,
        state.subject
    );

    if state.sort.is_date_based() {
        let mut skipped = Vec::new();
        let mut dated: Vec<(NaiveDate, &LessonRecord)> = Vec::with_capacity(matched.len());
        for record in matched {
            match record.parsed_date() {
                Ok(date) => dated.push((date, record)),
                Err(err) => {
                    log::warn!("dropping record from date ordering: {err}");
                    skipped.push(SkippedRecord::from(err));
                }
            }
        }
        // Stable sorts, so records sharing a date keep their source
        // order in either direction.
        if state.sort == SortOrder::Newest {
            dated.sort_by(|a, b| b.0.cmp(&a.0));
        } else {
            dated.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let (page, total_pages, slice) = paginate(&dated, state.page, page_size);
        QueryPage {
            items: slice.iter().map(|(_, record)| (*record).clone()).collect(),
            page,
            total_pages,
            total_matches: dated.len(),
            groups: Some(group_by_day(slice, today)),
            skipped,
        }
    } else {
        let mut rows = matched;
        rows.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));

        let (page, total_pages, slice) = paginate(&rows, state.page, page_size);
        QueryPage {
            items: slice.iter().map(|record| (*record).clone()).collect(),
            page,
            total_pages,
            total_matches: rows.len(),
            groups: None,
            skipped: Vec::new(),
        }
    }
}

/// Case-insensitive substring match over every user-visible field: the
/// title, the subject, the body, the numeric date and the standalone
/// month name.
fn matches_search(record: &LessonRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if record.title.to_lowercase().contains(needle)
        || record.subject.to_lowercase().contains(needle)
        || record.content.to_lowercase().contains(needle)
    {
        return true;
    }
    // A record with a bad date can still match on the fields above.
    record
        .parsed_date()
        .is_ok_and(|date| short_date(date).contains(needle) || month_name(date).contains(needle))
}

/// Clamp the requested page into `[1, max(1, total_pages)]` and cut
/// the slice, so any requested number lands on a real page (or page 1
/// of an empty set).
fn paginate<T>(rows: &[T], requested: usize, page_size: usize) -> (usize, usize, &[T]) {
    let total_pages = rows.len().div_ceil(page_size);
    let page = requested.clamp(1, total_pages.max(1));
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(rows.len());
    (page, total_pages, &rows[start..end])
}

/// Exact-title lookup used by deep links into a lesson view.
#[must_use]
pub fn find_by_title<'a>(records: &'a [LessonRecord], title: &str) -> Option<&'a LessonRecord> {
    records.iter().find(|record| record.title == title)
}

/// Distinct subject labels, sorted for deterministic filter controls.
#[must_use]
pub fn subjects(records: &[LessonRecord]) -> Vec<String> {
    let mut labels: Vec<String> = records.iter().map(|r| r.subject.clone()).collect();
    labels.sort();
    labels.dedup();
    labels
}
