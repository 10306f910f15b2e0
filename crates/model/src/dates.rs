use chrono::{Datelike, NaiveDate};

/// Month names in the nominative case. This is the standalone month
/// label a search term is matched against ("январь").
pub const MONTHS_NOMINATIVE: [&str; 12] = [
    "январь",
    "февраль",
    "март",
    "апрель",
    "май",
    "июнь",
    "июль",
    "август",
    "сентябрь",
    "октябрь",
    "ноябрь",
    "декабрь",
];

/// Month names in the genitive case, used inside display dates
/// ("15 января 2024").
pub const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Weekday names, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "понедельник",
    "вторник",
    "среда",
    "четверг",
    "пятница",
    "суббота",
    "воскресенье",
];

/// Numeric display form, "15.01.2024".
#[must_use]
pub fn short_date(date: NaiveDate) -> String {
    format!("{:02}.{:02}.{:04}", date.day(), date.month(), date.year())
}

/// Standalone month name, "январь".
#[must_use]
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTHS_NOMINATIVE[date.month0() as usize]
}

/// Spelled-out display form, "15 января 2024".
#[must_use]
pub fn long_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_GENITIVE[date.month0() as usize],
        date.year()
    )
}

/// Capitalized weekday name, "Понедельник".
#[must_use]
pub fn weekday_label(date: NaiveDate) -> String {
    capitalize_first(WEEKDAYS[date.weekday().num_days_from_monday() as usize])
}

/// Uppercase the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
