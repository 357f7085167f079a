use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;

/// Which side of the set an element has to be on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Membership {
    In,
    NotIn,
}

#[derive(Debug, Clone)]
struct ElementSet<T> {
    name: Cow<'static, str>,
    set: Vec<T>,
    membership: Membership,
}

impl<T: Atomic> ElementSet<T> {
    fn new(
        name: impl Into<Cow<'static, str>>,
        set: impl IntoIterator<Item = T>,
        membership: Membership,
    ) -> Self {
        ElementSet {
            name: name.into(),
            set: set.into_iter().collect(),
            membership,
        }
    }

    fn accepts(&self, element: &T) -> bool {
        self.set.contains(element) == (self.membership == Membership::In)
    }

    /// Number of leading elements of `input` that are accepted
    fn run_length(&self, input: &[T]) -> usize {
        input.iter().take_while(|e| self.accepts(e)).count()
    }
}

/// Parser that matches a single element listed in a set
#[derive(Debug, Clone)]
pub struct OneOf<T>(ElementSet<T>);

/// Parser that matches a single element NOT listed in a set
#[derive(Debug, Clone)]
pub struct NoneOf<T>(ElementSet<T>);

/// Parser that matches the longest non-empty run of elements listed in a set
#[derive(Debug, Clone)]
pub struct OneOfRun<T>(ElementSet<T>);

/// Parser that matches the longest non-empty run of elements NOT listed in a set
#[derive(Debug, Clone)]
pub struct NoneOfRun<T>(ElementSet<T>);

fn parse_single<'code, T: Atomic>(
    set: &ElementSet<T>,
    cursor: Cursor<'code, T>,
    verbosity: Verbosity,
) -> ParseResult<'code, T, T> {
    match cursor.value() {
        Some(element) if set.accepts(element) => Ok((element.clone(), cursor.next())),
        _ => Err(ParseError::mismatch(verbosity, &set.name, cursor)),
    }
}

fn parse_run<'code, T: Atomic>(
    set: &ElementSet<T>,
    cursor: Cursor<'code, T>,
    verbosity: Verbosity,
) -> ParseResult<'code, T, &'code [T]> {
    let rest = cursor.remaining();
    match set.run_length(rest) {
        0 => Err(ParseError::mismatch(verbosity, &set.name, cursor)),
        length => Ok((&rest[..length], cursor.advance(length))),
    }
}

macro_rules! impl_set_parser {
    ($parser:ident, $output:ty, $parse:ident) => {
        impl<'code, T: Atomic + 'code> Parser<'code, T> for $parser<T> {
            type Output = $output;

            fn parse(
                &self,
                cursor: Cursor<'code, T>,
                verbosity: Verbosity,
            ) -> ParseResult<'code, T, Self::Output> {
                $parse(&self.0, cursor, verbosity)
            }

            fn name(&self) -> Cow<'_, str> {
                Cow::Borrowed(&self.0.name)
            }
        }
    };
}

impl_set_parser!(OneOf, T, parse_single);
impl_set_parser!(NoneOf, T, parse_single);
impl_set_parser!(OneOfRun, &'code [T], parse_run);
impl_set_parser!(NoneOfRun, &'code [T], parse_run);

/// Convenience function to create a OneOf parser
pub fn one_of<T: Atomic>(name: impl Into<Cow<'static, str>>, set: impl IntoIterator<Item = T>) -> OneOf<T> {
    OneOf(ElementSet::new(name, set, Membership::In))
}

/// Convenience function to create a NoneOf parser
pub fn none_of<T: Atomic>(name: impl Into<Cow<'static, str>>, set: impl IntoIterator<Item = T>) -> NoneOf<T> {
    NoneOf(ElementSet::new(name, set, Membership::NotIn))
}

/// Convenience function to create a OneOfRun parser
pub fn one_of_run<T: Atomic>(
    name: impl Into<Cow<'static, str>>,
    set: impl IntoIterator<Item = T>,
) -> OneOfRun<T> {
    OneOfRun(ElementSet::new(name, set, Membership::In))
}

/// Convenience function to create a NoneOfRun parser
pub fn none_of_run<T: Atomic>(
    name: impl Into<Cow<'static, str>>,
    set: impl IntoIterator<Item = T>,
) -> NoneOfRun<T> {
    NoneOfRun(ElementSet::new(name, set, Membership::NotIn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseExt;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_one_of() {
        let data = chars("123 hello");
        let parser = one_of("DIGIT", "0123456789".chars());

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, '1');
        assert_eq!(rest, &chars("23 hello")[..]);
    }

    #[test]
    fn test_one_of_fails_without_consuming() {
        let data = chars("hello");
        let parser = one_of("DIGIT", "0123456789".chars());

        let error = parser.parse_slice(&data, Verbosity::Verbose).unwrap_err();
        assert_eq!(error.to_string(), r#"expected DIGIT but got "hello""#);
        assert_eq!(error.location().unwrap().position(), 0);
    }

    #[test]
    fn test_none_of() {
        let data = chars("hello 123");
        let parser = none_of("NOT_DIGIT", "0123456789".chars());

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, 'h');
        assert_eq!(rest, &chars("ello 123")[..]);

        let data = chars("1");
        assert!(parser.parse_slice(&data, Verbosity::Terse).is_err());
    }

    #[test]
    fn test_single_on_empty_input() {
        let data: Vec<char> = Vec::new();
        assert!(one_of("DIGIT", "01".chars()).parse_slice(&data, Verbosity::Terse).is_err());
        assert!(none_of("NOT_DIGIT", "01".chars()).parse_slice(&data, Verbosity::Terse).is_err());
    }

    #[test]
    fn test_one_of_run() {
        let data = chars("123 hello");
        let parser = one_of_run("DIGITS", "0123456789".chars());

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, &chars("123")[..]);
        assert_eq!(rest, &chars(" hello")[..]);
    }

    #[test]
    fn test_one_of_run_requires_one() {
        let data = chars(" 123");
        let parser = one_of_run("DIGITS", "0123456789".chars());

        let error = parser.parse_slice(&data, Verbosity::Verbose).unwrap_err();
        assert_eq!(error.to_string(), r#"expected DIGITS but got " 123""#);
    }

    #[test]
    fn test_none_of_run() {
        let data = chars("hello world; foo bar;");
        let parser = none_of_run("NOT_SEMICOLON", [';']);

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, &chars("hello world")[..]);
        assert_eq!(rest, &chars("; foo bar;")[..]);
    }

    #[test]
    fn test_run_to_end_of_input() {
        let parser = one_of_run("AB", *b"ab");

        let (output, rest) = parser.parse_slice(b"abba", Verbosity::Terse).unwrap();
        assert_eq!(output, b"abba");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_token_sets() {
        let data = [3u32, 1, 4, 1, 5];
        let parser = one_of_run("SMALL", [1u32, 3, 4]);

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, &[3, 1, 4, 1]);
        assert_eq!(rest, &[5]);
    }
}
