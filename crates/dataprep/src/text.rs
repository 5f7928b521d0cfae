//! Text cleanup for cells coming out of the survey workbook.
//!
//! The workbook is hand-typed, so cells carry stray non-ASCII punctuation,
//! doubled spaces and inconsistent casing. Everything funnels through
//! `ascii_clean` before any rule looks at it.

/// Drop non-ASCII characters and collapse whitespace runs to single spaces.
/// Accented letters are dropped, not transliterated; the source data is
/// ASCII apart from stray smart quotes and dashes.
pub fn ascii_clean(raw: &str) -> String {
    let ascii: String = raw.chars().filter(|ch| ch.is_ascii()).collect();
    ascii.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduce a token to lowercase letters and single spaces: hyphens become
/// spaces, every other non-letter is stripped.
pub fn normalize_token(token: &str) -> String {
    let lowered = ascii_clean(token).to_lowercase();
    let letters: String = lowered
        .chars()
        .map(|ch| match ch {
            'a'..='z' => ch,
            _ => ' ',
        })
        .collect();
    letters.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Uppercase the letter after every non-letter, lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            if at_word_start {
                result.push(ch.to_ascii_uppercase());
            } else {
                result.push(ch.to_ascii_lowercase());
            }
            at_word_start = false;
        } else {
            result.push(ch);
            at_word_start = true;
        }
    }
    result
}

/// Lowercase, squash every non-alphanumeric run to one dash, trim dashes.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;
    for ch in value.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Join a list for prose: "A", "A and B", "A, B and C".
pub fn human_join(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [head @ .., last] => format!("{} and {}", head.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_clean_strips_and_collapses() {
        assert_eq!(ascii_clean("  Wild   Honey "), "Wild Honey");
        assert_eq!(ascii_clean("Mahua\u{2019}s  flower"), "Mahuas flower");
        assert_eq!(ascii_clean("caf\u{e9}"), "caf");
    }

    #[test]
    fn test_normalize_token_keeps_only_letters() {
        assert_eq!(normalize_token("Root-Rhizome"), "root rhizome");
        assert_eq!(normalize_token("  Nut (kernel) 2kg "), "nut kernel kg");
        assert_eq!(normalize_token("123"), "");
    }

    #[test]
    fn test_title_case_matches_cell_style() {
        assert_eq!(title_case("khurda town"), "Khurda Town");
        assert_eq!(title_case("boudh-kandhamal"), "Boudh-Kandhamal");
        assert_eq!(title_case("KORAPUT"), "Koraput");
    }

    #[test]
    fn test_slugify_trims_and_collapses_dashes() {
        assert_eq!(slugify("Wild Honey"), "wild-honey");
        assert_eq!(slugify("  Amla (Indian Gooseberry)  "), "amla-indian-gooseberry");
        assert_eq!(slugify("--"), "");
    }

    #[test]
    fn test_human_join_forms() {
        assert_eq!(human_join(&[]), "");
        assert_eq!(human_join(&["Koraput".to_string()]), "Koraput");
        assert_eq!(
            human_join(&["A".to_string(), "B".to_string(), "C".to_string()]),
            "A, B and C"
        );
    }
}
