use crate::atomic::Atomic;

fn char_matches<T: Atomic>(element: &T, predicate: impl Fn(char) -> bool) -> bool {
    element.as_char().is_some_and(predicate)
}

/// ASCII letter, either case
pub fn is_alpha<T: Atomic>(element: &T) -> bool {
    char_matches(element, |c| c.is_ascii_alphabetic())
}

/// Decimal digit `0-9`
pub fn is_digit<T: Atomic>(element: &T) -> bool {
    char_matches(element, |c| c.is_ascii_digit())
}

/// Hex digit `0-9`, `a-f` or `A-F`
pub fn is_hex_digit<T: Atomic>(element: &T) -> bool {
    char_matches(element, |c| c.is_ascii_hexdigit())
}

pub fn is_alpha_num<T: Atomic>(element: &T) -> bool {
    char_matches(element, |c| c.is_ascii_alphanumeric())
}

/// Space or tab
pub fn is_space<T: Atomic>(element: &T) -> bool {
    char_matches(element, |c| c == ' ' || c == '\t')
}

/// Carriage return or line feed
pub fn is_newline<T: Atomic>(element: &T) -> bool {
    char_matches(element, |c| c == '\r' || c == '\n')
}

pub fn is_space_or_newline<T: Atomic>(element: &T) -> bool {
    is_space(element) || is_newline(element)
}

/// Predicate accepting the elements of `set`
///
/// Works for any element type, textual or not.
pub fn in_set<T: Atomic>(set: impl IntoIterator<Item = T>) -> impl Fn(&T) -> bool {
    let set: Vec<T> = set.into_iter().collect();
    move |element| set.contains(element)
}

/// Predicate accepting everything except the elements of `set`
pub fn not_in_set<T: Atomic>(set: impl IntoIterator<Item = T>) -> impl Fn(&T) -> bool {
    let set: Vec<T> = set.into_iter().collect();
    move |element| !set.contains(element)
}
