use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;

/// Parser that matches one element satisfying a predicate
#[derive(Clone)]
pub struct TakeSingle<F> {
    name: Cow<'static, str>,
    predicate: F,
}

impl<F> TakeSingle<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<'code, T, F> Parser<'code, T> for TakeSingle<F>
where
    T: Atomic,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        match cursor.value() {
            Some(element) if (self.predicate)(element) => Ok((element.clone(), cursor.next())),
            _ => Err(ParseError::mismatch(verbosity, &self.name, cursor)),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Parser that matches the longest non-empty run of elements satisfying a predicate
#[derive(Clone)]
pub struct TakeWhile<F> {
    name: Cow<'static, str>,
    predicate: F,
}

impl<F> TakeWhile<F> {
    pub fn new(name: impl Into<Cow<'static, str>>, predicate: F) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }
}

impl<'code, T, F> Parser<'code, T> for TakeWhile<F>
where
    T: Atomic + 'code,
    F: Fn(&T) -> bool,
{
    type Output = &'code [T];

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let rest = cursor.remaining();
        let length = rest.iter().take_while(|e| (self.predicate)(e)).count();
        if length == 0 {
            return Err(ParseError::mismatch(verbosity, &self.name, cursor));
        }
        Ok((&rest[..length], cursor.advance(length)))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Convenience function to create a TakeSingle parser
pub fn take_single<T, F>(name: impl Into<Cow<'static, str>>, predicate: F) -> TakeSingle<F>
where
    T: Atomic,
    F: Fn(&T) -> bool,
{
    TakeSingle::new(name, predicate)
}

/// Convenience function to create a TakeWhile parser
pub fn take_while<T, F>(name: impl Into<Cow<'static, str>>, predicate: F) -> TakeWhile<F>
where
    T: Atomic,
    F: Fn(&T) -> bool,
{
    TakeWhile::new(name, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseExt;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_take_single() {
        let data = chars("a1");
        let parser = take_single("LOWER", |c: &char| c.is_ascii_lowercase());

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, 'a');
        assert_eq!(rest, &['1']);

        let data = chars("A1");
        let error = parser.parse_slice(&data, Verbosity::Verbose).unwrap_err();
        assert_eq!(error.to_string(), r#"expected LOWER but got "A1""#);
    }

    #[test]
    fn test_take_single_at_end() {
        let data: Vec<char> = Vec::new();
        let parser = take_single("ANY", |_: &char| true);
        assert!(parser.parse_slice(&data, Verbosity::Terse).is_err());
    }

    #[test]
    fn test_take_while() {
        let data = chars("abc123");
        let parser = take_while("LOWER", |c: &char| c.is_ascii_lowercase());

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, &chars("abc")[..]);
        assert_eq!(rest, &chars("123")[..]);
    }

    #[test]
    fn test_take_while_requires_one() {
        let data = chars("123");
        let parser = take_while("LOWER", |c: &char| c.is_ascii_lowercase());

        let error = parser.parse_slice(&data, Verbosity::Verbose).unwrap_err();
        assert_eq!(error.location().unwrap().position(), 0);
    }

    #[test]
    fn test_take_while_even_tokens() {
        let data = [2i64, 4, 6, 7, 8];
        let parser = take_while("EVEN", |n: &i64| n % 2 == 0);

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, &[2, 4, 6]);
        assert_eq!(rest, &[7, 8]);
    }
}
