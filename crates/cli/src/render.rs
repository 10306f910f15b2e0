//! Text rendering of the view models: cards, day groups and the
//! key-point panel. The fixed Russian product strings live here, next
//! to the ANSI accents that stand in for the web palette.

use konspekt_model::{long_date, LessonRecord};
use konspekt_query::{DayGroup, QueryPage};
use konspekt_summarize::KeySentence;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Accent colors per subject, mirroring the web palette.
const SUBJECT_ACCENTS: &[(&str, &str)] = &[
    ("Алгебра", "\x1b[34m"),
    ("Геометрия", "\x1b[36m"),
    ("История", "\x1b[33m"),
    ("Биология", "\x1b[32m"),
    ("Физика", "\x1b[35m"),
];
const DEFAULT_ACCENT: &str = "\x1b[37m";

pub(crate) const EMPTY_STATE: &str = "Ничего не найдено";

fn subject_accent(subject: &str) -> &'static str {
    SUBJECT_ACCENTS
        .iter()
        .find(|(name, _)| *name == subject)
        .map_or(DEFAULT_ACCENT, |(_, color)| color)
}

/// Render a query page: day groups when present, a flat list
/// otherwise, the shared empty state when nothing matched.
pub(crate) fn page(page: &QueryPage) -> String {
    if page.is_empty() {
        return EMPTY_STATE.to_string();
    }

    let mut out = String::new();
    match &page.groups {
        Some(groups) => {
            for group in groups {
                out.push_str(&group_header(group));
                out.push('\n');
                for lesson in &group.items {
                    out.push_str(&card(lesson));
                    out.push('\n');
                }
            }
        }
        None => {
            for lesson in &page.items {
                out.push_str(&card(lesson));
                out.push('\n');
            }
        }
    }

    out.push_str(&format!(
        "Страница {} из {} · найдено: {}",
        page.page, page.total_pages, page.total_matches
    ));
    for skip in &page.skipped {
        out.push_str(&format!("\nпропущено: {}", skip.reason));
    }
    out
}

fn group_header(group: &DayGroup) -> String {
    match group.badge {
        Some(badge) => format!("{BOLD}{}{RESET} · {}", group.label, badge.label()),
        None => format!("{BOLD}{}{RESET}", group.label),
    }
}

fn card(lesson: &LessonRecord) -> String {
    let accent = subject_accent(&lesson.subject);
    // A card never fails on a bad date; it falls back to the raw field.
    let date = lesson
        .parsed_date()
        .map(long_date)
        .unwrap_or_else(|_| lesson.date.clone());
    format!(
        "  {accent}[{}]{RESET} {BOLD}{}{RESET} {DIM}{}{RESET}",
        lesson.subject, lesson.title, date
    )
}

/// Render one lesson: header card, body, then the key-point panel.
pub(crate) fn lesson(lesson: &LessonRecord, key_points: &[KeySentence], tiny: bool) -> String {
    let mut out = String::new();
    out.push_str(&card(lesson));
    out.push_str("\n\n");
    let body = if tiny {
        lesson.compact_content()
    } else {
        lesson.content.as_str()
    };
    out.push_str(body);
    if !key_points.is_empty() {
        out.push_str("\n\nКлючевые моменты:");
        for point in key_points {
            out.push_str(&format!("\n  {} {}", point.icon, point.text));
        }
    }
    out
}
