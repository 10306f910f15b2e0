use once_cell::sync::Lazy;
use regex::Regex;

/// Leading enumeration markers: one or two digits with an optional
/// ".digit" section suffix, or a single letter with a closing
/// parenthesis, then an optional dash/dot/colon separator. The trailing
/// whitespace is required, which keeps a line that opens with a bare
/// four-digit year intact.
static ENUMERATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\d{1,2}(?:\.\d)?|[A-Za-zА-Яа-яЁё]\))[-.:]?\s+").expect("enumeration regex")
});

/// Leading note labels ("Важно: ...", "Пример: ...").
static LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:важно|пример|примечание|внимание):\s+").expect("label regex"));

/// Strip markdown markers, surrounding whitespace, one leading
/// enumeration marker and one leading note label from a content line.
///
/// A line that opens with a short number and a dot ("12. Пушкин...")
/// loses that prefix even when it is prose rather than an enumeration;
/// the ambiguity is not decidable at this level and the cheap rule
/// wins.
#[must_use]
pub fn normalize_line(line: &str) -> String {
    let stripped: String = line
        .chars()
        .filter(|ch| !matches!(ch, '*' | '#' | '_' | '`'))
        .collect();
    let trimmed = stripped.trim();
    let without_marker = ENUMERATION.replace(trimmed, "");
    LABEL.replace(&without_marker, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn removes_markdown_markers_everywhere() {
        assert_eq!(
            normalize_line("## Тема: **квадратные** уравнения"),
            "Тема: квадратные уравнения"
        );
        assert_eq!(normalize_line("`код` и _курсив_"), "код и курсив");
    }

    #[test]
    fn strips_digit_enumerations() {
        assert_eq!(normalize_line("1. Первый пункт плана"), "Первый пункт плана");
        assert_eq!(normalize_line("12.3: Теорема о векторах"), "Теорема о векторах");
        assert_eq!(normalize_line("  7- свойства степени"), "свойства степени");
    }

    #[test]
    fn strips_letter_enumerations() {
        assert_eq!(normalize_line("а) однородные члены"), "однородные члены");
        assert_eq!(normalize_line("Б) сложные случаи"), "сложные случаи");
        assert_eq!(normalize_line("b) irregular verbs"), "irregular verbs");
    }

    #[test]
    fn keeps_a_leading_year() {
        assert_eq!(
            normalize_line("1861 год — отмена крепостного права"),
            "1861 год — отмена крепостного права"
        );
    }

    #[test]
    fn digit_with_parenthesis_is_not_an_enumeration() {
        assert_eq!(normalize_line("2) второй пункт"), "2) второй пункт");
    }

    #[test]
    fn strips_note_labels_case_insensitively() {
        assert_eq!(normalize_line("Важно: повторить правило"), "повторить правило");
        assert_eq!(normalize_line("ПРИМЕР: синус острого угла"), "синус острого угла");
        assert_eq!(normalize_line("Примечание: даты условны"), "даты условны");
    }

    #[test]
    fn strips_marker_then_label() {
        assert_eq!(normalize_line("б) Пример: деление в столбик"), "деление в столбик");
        assert_eq!(
            normalize_line("**Важно:** манифест подписан царём"),
            "манифест подписан царём"
        );
    }

    #[test]
    fn prose_starting_with_a_short_number_loses_it() {
        assert_eq!(
            normalize_line("12. Пушкин родился в Москве"),
            "Пушкин родился в Москве"
        );
    }

    #[test]
    fn plain_lines_pass_through() {
        assert_eq!(
            normalize_line("Обычная строка без маркеров."),
            "Обычная строка без маркеров."
        );
        assert_eq!(normalize_line(""), "");
    }
}
