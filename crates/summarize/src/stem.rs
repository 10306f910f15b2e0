/// Stem prefix length. Five characters are enough to group Russian
/// inflections ("уравнение", "уравнения", "уравнений" all become
/// "уравн").
const STEM_PREFIX_LEN: usize = 5;

/// Reduce a token to its frequency-grouping key: lowercase, keep only
/// Russian and Latin letters plus digits, cut to the first five
/// characters.
///
/// This is not linguistic stemming. Colliding prefixes ("прове" for
/// both "проверка" and "проведение") are an accepted trade-off, since
/// the keys are only ever compared for equality within one document.
#[must_use]
pub fn stem(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|ch| is_stem_char(*ch))
        .take(STEM_PREFIX_LEN)
        .collect()
}

const fn is_stem_char(ch: char) -> bool {
    matches!(ch, 'а'..='я' | 'ё' | 'a'..='z' | '0'..='9')
}
