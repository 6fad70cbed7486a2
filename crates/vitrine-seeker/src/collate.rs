//! Locale-aware string collation for name ordering.
//!
//! Names compare in levels, the way `localeCompare` does:
//!
//! 1. Base letters: the ASCII transliteration, ignoring case. Whitespace
//!    sorts before punctuation, punctuation before digits, and digits
//!    before letters, so `"_x"` < `"9 pens"` < `"apple"`.
//! 2. Accents: over the whole string, unaccented before accented.
//! 3. Case: over the whole string, lowercase before uppercase.
//! 4. Code points, so the result is a total order.
//!
//! A later level only decides when every earlier level is equal, so
//! `"resume"` < `"Resume"` < `"résumé"`.

use std::cmp::Ordering;

use deunicode::deunicode;

/// Compares two strings the way a reader would expect a name list sorted.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use vitrine_seeker::collate;
///
/// assert_eq!(collate("apple", "Banana"), Ordering::Less);
/// assert_eq!(collate("éclair", "eclairs"), Ordering::Less);
/// assert_eq!(collate("a", "A"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| flags(a, is_accented).cmp(flags(b, is_accented)))
        .then_with(|| flags(a, char::is_uppercase).cmp(flags(b, char::is_uppercase)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> Vec<(CharClass, char)> {
    deunicode(s)
        .to_lowercase()
        .chars()
        .map(|c| (CharClass::of(c), c))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Punctuation,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Space
        } else if c.is_ascii_digit() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Punctuation
        }
    }
}

fn flags(s: &str, flag: fn(char) -> bool) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(flag)
}

fn is_accented(c: char) -> bool {
    !c.is_ascii()
}
