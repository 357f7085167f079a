use crate::anything::Nothing;
use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;

/// Parser that matches `prefix body suffix` and returns only the body's output
///
/// The stages run in order and the first one that fails decides the error.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
pub struct Delimited<Pre, P, Suf> {
    prefix: Pre,
    body: P,
    suffix: Suf,
}

impl<Pre, P, Suf> Delimited<Pre, P, Suf> {
    pub fn new(prefix: Pre, body: P, suffix: Suf) -> Self {
        Delimited { prefix, body, suffix }
    }
}

impl<'code, T, Pre, P, Suf> Parser<'code, T> for Delimited<Pre, P, Suf>
where
    T: Atomic,
    Pre: Parser<'code, T>,
    P: Parser<'code, T>,
    Suf: Parser<'code, T>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let (_, cursor) = self.prefix.parse(cursor, verbosity)?;
        let (output, cursor) = self.body.parse(cursor, verbosity)?;
        let (_, cursor) = self.suffix.parse(cursor, verbosity)?;
        Ok((output, cursor))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{}, {}, {}",
            self.prefix.name(),
            self.body.name(),
            self.suffix.name()
        ))
    }
}

/// Convenience function to create a Delimited parser
pub fn delimited<'code, T, Pre, P, Suf>(prefix: Pre, body: P, suffix: Suf) -> Delimited<Pre, P, Suf>
where
    T: Atomic,
    Pre: Parser<'code, T>,
    P: Parser<'code, T>,
    Suf: Parser<'code, T>,
{
    Delimited::new(prefix, body, suffix)
}

/// `prefix body`, keeping the body's output
pub fn with_prefix<'code, T, Pre, P>(prefix: Pre, body: P) -> Delimited<Pre, P, Nothing<T>>
where
    T: Atomic,
    Pre: Parser<'code, T>,
    P: Parser<'code, T>,
{
    Delimited::new(prefix, body, Nothing::new())
}

/// `body suffix`, keeping the body's output
pub fn with_suffix<'code, T, P, Suf>(body: P, suffix: Suf) -> Delimited<Nothing<T>, P, Suf>
where
    T: Atomic,
    P: Parser<'code, T>,
    Suf: Parser<'code, T>,
{
    Delimited::new(Nothing::new(), body, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::one_of::none_of_run;
    use crate::parser::ParseExt;
    use crate::tag::tag_str;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_delimited() {
        let data = chars("[content] tail");
        let parser = delimited(tag_str("OPEN", "["), none_of_run("BODY", [']']), tag_str("CLOSE", "]"));

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, &chars("content")[..]);
        assert_eq!(rest, &chars(" tail")[..]);
    }

    #[test]
    fn test_delimited_missing_suffix() {
        let data = chars("[content");
        let parser = delimited(tag_str("OPEN", "["), none_of_run("BODY", [']']), tag_str("CLOSE", "]"));

        let error = parser.parse_slice(&data, Verbosity::Verbose).unwrap_err();
        assert_eq!(error.to_string(), r#"expected CLOSE but got """#);
        assert_eq!(error.location().unwrap().position(), 8);
    }

    #[test]
    fn test_delimited_missing_prefix() {
        let data = chars("content]");
        let parser = delimited(tag_str("OPEN", "["), none_of_run("BODY", [']']), tag_str("CLOSE", "]"));

        let error = parser.parse_slice(&data, Verbosity::Verbose).unwrap_err();
        assert_eq!(error.to_string(), r#"expected OPEN but got "content]""#);
    }

    #[test]
    fn test_with_prefix_and_suffix() {
        let data = chars("#abc;");
        let prefixed = with_prefix(tag_str("HASH", "#"), none_of_run("BODY", [';']));
        let (output, rest) = prefixed.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, &chars("abc")[..]);
        assert_eq!(rest, &[';']);

        let data = chars("abc;");
        let suffixed = with_suffix(none_of_run("BODY", [';']), tag_str("SEMI", ";"));
        let (output, rest) = suffixed.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, &chars("abc")[..]);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_delimited_name() {
        let parser = delimited(tag_str("A", "a"), tag_str("B", "b"), tag_str("C", "c"));
        assert_eq!(parser.name(), "A, B, C");

        let parser = with_prefix(tag_str("A", "a"), tag_str("B", "b"));
        assert_eq!(parser.name(), "A, B, NOTHING");
    }
}
