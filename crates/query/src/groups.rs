use chrono::NaiveDate;
use konspekt_model::{long_date, weekday_label, LessonRecord};

use crate::page::{DayBadge, DayGroup};

/// Partition date-sorted page items into day groups.
///
/// Items arrive sorted, so equal dates sit next to each other and one
/// forward pass preserves the order days first appear in. The key is
/// the record's exact date string, not the parsed value.
pub(crate) fn group_by_day(
    items: &[(NaiveDate, &LessonRecord)],
    today: NaiveDate,
) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for (date, record) in items {
        match groups.last_mut() {
            Some(group) if group.date == record.date => group.items.push((*record).clone()),
            _ => groups.push(DayGroup {
                date: record.date.clone(),
                label: format!("{}, {}", weekday_label(*date), long_date(*date)),
                badge: badge_for(*date, today),
                items: vec![(*record).clone()],
            }),
        }
    }
    groups
}

fn badge_for(date: NaiveDate, today: NaiveDate) -> Option<DayBadge> {
    if date == today {
        Some(DayBadge::Today)
    } else if today.pred_opt() == Some(date) {
        Some(DayBadge::Yesterday)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lesson(title: &str, date: &str) -> LessonRecord {
        LessonRecord {
            title: title.to_string(),
            subject: "История".to_string(),
            date: date.to_string(),
            content: String::new(),
            content_tiny: None,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn adjacent_same_dates_share_a_group() {
        let a = lesson("Первый", "2024-01-15");
        let b = lesson("Второй", "2024-01-15");
        let c = lesson("Третий", "2024-01-14");
        let items = vec![
            (day(2024, 1, 15), &a),
            (day(2024, 1, 15), &b),
            (day(2024, 1, 14), &c),
        ];

        let groups = group_by_day(&items, day(2024, 1, 16));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[0].date, "2024-01-15");
        assert_eq!(groups[1].items.len(), 1);
    }

    #[test]
    fn labels_spell_out_the_weekday_and_date() {
        let a = lesson("Урок", "2024-01-15");
        let items = vec![(day(2024, 1, 15), &a)];

        let groups = group_by_day(&items, day(2024, 2, 1));
        assert_eq!(groups[0].label, "Понедельник, 15 января 2024");
        assert_eq!(groups[0].badge, None);
    }

    #[test]
    fn today_and_yesterday_get_badges() {
        let a = lesson("Сегодняшний", "2024-01-16");
        let b = lesson("Вчерашний", "2024-01-15");
        let c = lesson("Старый", "2024-01-10");
        let items = vec![
            (day(2024, 1, 16), &a),
            (day(2024, 1, 15), &b),
            (day(2024, 1, 10), &c),
        ];

        let groups = group_by_day(&items, day(2024, 1, 16));
        assert_eq!(groups[0].badge, Some(DayBadge::Today));
        assert_eq!(groups[1].badge, Some(DayBadge::Yesterday));
        assert_eq!(groups[2].badge, None);
    }

    #[test]
    fn grouping_keys_on_the_exact_string() {
        // Same calendar day, different spellings: two groups.
        let a = lesson("Полный формат", "2024-01-15");
        let b = lesson("Короткий формат", "2024-1-15");
        let items = vec![(day(2024, 1, 15), &a), (day(2024, 1, 15), &b)];

        let groups = group_by_day(&items, day(2024, 1, 20));
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn empty_input_builds_no_groups() {
        let groups = group_by_day(&[], day(2024, 1, 16));
        assert!(groups.is_empty());
    }
}
