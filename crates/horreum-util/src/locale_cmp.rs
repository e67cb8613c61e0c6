use std::cmp::Ordering;

/// Compare two strings the way a user-facing table sorts its rows.
///
/// The ordering is case-insensitive at the first level, with punctuation and
/// whitespace sorting before digits and digits before letters. Strings that
/// only differ in case put the lowercase variant first, titlecase and
/// caseless characters in between. Remaining ties are broken by code point.
/// Each level compares a key derived from the string alone, so the result is
/// a total order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use horreum_util::locale_cmp::locale_cmp;
///
/// assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_cmp("a", "A"), Ordering::Less);
/// assert_eq!(locale_cmp("_x", "1x"), Ordering::Less);
/// assert_eq!(locale_cmp("10", "a"), Ordering::Less);
/// ```
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn primary(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

fn char_class(c: char) -> u8 {
    if c.is_numeric() {
        1
    } else if c.is_alphabetic() {
        2
    } else {
        0
    }
}

/// Tertiary key: lowercase, then caseless or titlecase, then uppercase.
fn case_key(c: char) -> u8 {
    if c.is_lowercase() {
        0
    } else if c.is_uppercase() {
        2
    } else {
        1
    }
}

fn case_order(a: &str, b: &str) -> Ordering {
    a.chars().map(case_key).cmp(b.chars().map(case_key))
}
