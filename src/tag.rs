use crate::atomic::Atomic;
use crate::convert::Replace;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;

/// Parser that matches a fixed sequence of elements, like a keyword
///
/// Returns the matched part of the input, which is element-wise equal to the
/// literal.
#[derive(Debug, Clone)]
pub struct Tag<T> {
    name: Cow<'static, str>,
    literal: Vec<T>,
}

impl<T: Atomic> Tag<T> {
    pub fn new(name: impl Into<Cow<'static, str>>, literal: impl IntoIterator<Item = T>) -> Self {
        Tag {
            name: name.into(),
            literal: literal.into_iter().collect(),
        }
    }

    pub fn literal(&self) -> &[T] {
        &self.literal
    }
}

impl<'code, T: Atomic + 'code> Parser<'code, T> for Tag<T> {
    type Output = &'code [T];

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let rest = cursor.remaining();
        if rest.starts_with(&self.literal) {
            let matched = &rest[..self.literal.len()];
            Ok((matched, cursor.advance(self.literal.len())))
        } else {
            Err(ParseError::mismatch(verbosity, &self.name, cursor))
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }
}

/// Convenience function to create a Tag parser
///
/// The `name` is the human readable name used in error messages.
pub fn tag<T: Atomic>(name: impl Into<Cow<'static, str>>, literal: impl IntoIterator<Item = T>) -> Tag<T> {
    Tag::new(name, literal)
}

/// Tag over characters, built from a string
pub fn tag_str(name: impl Into<Cow<'static, str>>, literal: &str) -> Tag<char> {
    Tag::new(name, literal.chars())
}

/// Tag whose output is `value` instead of the matched input
pub fn tag_as<T: Atomic, V: Clone>(
    name: impl Into<Cow<'static, str>>,
    literal: impl IntoIterator<Item = T>,
    value: V,
) -> Replace<Tag<T>, V> {
    Replace::new(Tag::new(name, literal), value)
}
