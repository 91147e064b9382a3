//! Locale-aware title comparison.
//!
//! Approximates root-locale collation as browsers apply it for
//! `localeCompare`, which is what readers expect an alphabetical list to look
//! like:
//!
//! 1. **Primary**: whitespace < punctuation < symbols < digits < letters;
//!    letters compare without case or accents
//! 2. **Secondary**: unaccented before accented
//! 3. **Tertiary**: lowercase before uppercase
//! 4. **Tie-break**: code point order, so distinct strings never compare equal

use std::cmp::Ordering;

use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Punctuation in root collation order. Anything not listed here or
/// alphanumeric is treated as a symbol.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Primary weight classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Symbol,
    Digit,
    Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PrimaryWeight(CharClass, u32);

/// Compare two strings the way a locale-aware sort orders them.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(primary_key(b))
        .then_with(|| secondary_key(a).cmp(secondary_key(b)))
        .then_with(|| tertiary_key(a).cmp(tertiary_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> impl Iterator<Item = PrimaryWeight> + '_ {
    s.chars().filter(|c| !is_combining_mark(*c)).map(primary_weight)
}

fn secondary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(|c| fold_accent(c).1)
}

/// Lowercase sorts first, so uppercase gets the larger weight.
fn tertiary_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

fn primary_weight(c: char) -> PrimaryWeight {
    if c.is_whitespace() {
        return PrimaryWeight(CharClass::Whitespace, 0);
    }
    if let Some(pos) = PUNCTUATION_ORDER.chars().position(|p| p == c) {
        return PrimaryWeight(CharClass::Punctuation, pos as u32);
    }
    if let Some(digit) = c.to_digit(10) {
        return PrimaryWeight(CharClass::Digit, digit);
    }
    if c.is_alphabetic() {
        let (base, _) = fold_accent(c);
        let lower = base.to_lowercase().next().unwrap_or(base);
        return PrimaryWeight(CharClass::Letter, lower as u32);
    }
    PrimaryWeight(CharClass::Symbol, c as u32)
}

/// Split a character into its base letter and whether it carries an accent.
///
/// Uses the canonical decomposition, so `Č` folds to `C` the same way `é`
/// folds to `e`. Stroked letters have no decomposition and are mapped here.
fn fold_accent(c: char) -> (char, bool) {
    if is_combining_mark(c) {
        return (c, true);
    }
    let stroked = match c {
        'ø' => Some('o'),
        'Ø' => Some('O'),
        'ł' => Some('l'),
        'Ł' => Some('L'),
        'đ' => Some('d'),
        'Đ' => Some('D'),
        'ħ' => Some('h'),
        'Ħ' => Some('H'),
        _ => None,
    };
    if let Some(base) = stroked {
        return (base, true);
    }

    let mut base = None;
    let mut accented = false;
    decompose_canonical(c, |part| {
        if is_combining_mark(part) {
            accented = true;
        } else if base.is_none() {
            base = Some(part);
        }
    });
    (base.unwrap_or(c), accented)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut titles: Vec<&str>) -> Vec<&str> {
        titles.sort_by(|a, b| locale_compare(a, b));
        titles
    }

    #[test]
    fn test_case_insensitive_primary() {
        // Ordinal order would put "CAP" first because 'P' < 'c'.
        assert_eq!(
            sorted(vec!["CAP Theorem", "Caching Strategies", "CORS"]),
            ["Caching Strategies", "CAP Theorem", "CORS"]
        );
    }

    #[test]
    fn test_space_sorts_before_letters() {
        assert_eq!(
            sorted(vec!["Rate Limiter", "Rate Limiting", "RateLimit"]),
            ["Rate Limiter", "Rate Limiting", "RateLimit"]
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(locale_compare("Tries", "Tries and Heaps"), Ordering::Less);
        assert_eq!(locale_compare("Tries and Heaps", "Tries"), Ordering::Greater);
    }

    #[test]
    fn test_digits_before_letters() {
        assert_eq!(locale_compare("2PC", "ACID"), Ordering::Less);
        assert_eq!(locale_compare("HTTP/1.1", "HTTP/2"), Ordering::Less);
    }

    #[test]
    fn test_punctuation_before_digits() {
        assert_eq!(locale_compare("B-Trees", "B2 Storage"), Ordering::Less);
        assert_eq!(locale_compare("(Draft)", "1st"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("redis", "Redis"), Ordering::Less);
        assert_eq!(locale_compare("Redis", "redis"), Ordering::Greater);
    }

    #[test]
    fn test_accents_are_secondary() {
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "resumes"), Ordering::Less);
    }

    #[test]
    fn test_equal_only_for_identical() {
        assert_eq!(locale_compare("Vector Clocks", "Vector Clocks"), Ordering::Equal);
        assert_ne!(locale_compare("a", "A"), Ordering::Equal);
    }

    #[test]
    fn test_mixed_titles() {
        assert_eq!(
            sorted(vec![
                "Vector Clocks",
                "ACID Properties",
                "b-trees",
                "API Gateway",
                "Big O Notation",
            ]),
            [
                "ACID Properties",
                "API Gateway",
                "b-trees",
                "Big O Notation",
                "Vector Clocks",
            ]
        );
    }

    #[test]
    fn test_accents_outside_latin1_fold_to_base_letter() {
        assert_eq!(locale_compare("Čapek", "Dijkstra"), Ordering::Less);
        assert_eq!(locale_compare("Łukasiewicz", "Lamport"), Ordering::Greater);
        assert_eq!(locale_compare("Sevcik", "Ševčík"), Ordering::Less);
        assert_eq!(locale_compare("Ševčík", "Shamir"), Ordering::Less);
        assert_eq!(
            sorted(vec!["Żurek", "Čapek", "Cormen", "Dijkstra"]),
            ["Čapek", "Cormen", "Dijkstra", "Żurek"]
        );
    }

    #[test]
    fn test_decomposed_input_matches_precomposed() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT.
        let decomposed = "re\u{301}sume\u{301}";
        assert_eq!(locale_compare("resume", decomposed), Ordering::Less);
        assert_eq!(locale_compare(decomposed, "resumes"), Ordering::Less);
    }
}
