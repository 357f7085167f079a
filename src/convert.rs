use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;
use std::error::Error as StdError;

/// Parser that applies a fallible conversion to the output of another parser
///
/// A failed conversion is a `ParseError::Conversion` located where the inner
/// parser started, with the converter's error kept as its source. It is reported
/// in both verbosity tiers.
pub struct Convert<P, F> {
    parser: P,
    converter: F,
}

impl<P, F> Convert<P, F> {
    pub fn new(parser: P, converter: F) -> Self {
        Self { parser, converter }
    }
}

fn conversion_failed<'code, T: Atomic>(
    name: Cow<'_, str>,
    start: Cursor<'code, T>,
    source: impl Into<Box<dyn StdError + Send + Sync>>,
) -> ParseError<'code, T> {
    let error = ParseError::conversion(name, start, source);
    log::trace!("{}", error);
    error
}

impl<'code, T, P, F, U, E> Parser<'code, T> for Convert<P, F>
where
    T: Atomic,
    P: Parser<'code, T>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    type Output = U;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let (output, next) = self.parser.parse(cursor, verbosity)?;
        match (self.converter)(output) {
            Ok(converted) => Ok((converted, next)),
            Err(source) => Err(conversion_failed(self.parser.name(), cursor, source)),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        self.parser.name()
    }
}

/// Parser that converts each element of a list output, stopping at the first failure
pub struct MapEach<P, F> {
    parser: P,
    converter: F,
}

impl<P, F> MapEach<P, F> {
    pub fn new(parser: P, converter: F) -> Self {
        Self { parser, converter }
    }
}

impl<'code, T, P, F, O, U, E> Parser<'code, T> for MapEach<P, F>
where
    T: Atomic,
    P: Parser<'code, T, Output = Vec<O>>,
    F: Fn(O) -> Result<U, E>,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    type Output = Vec<U>;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let (outputs, next) = self.parser.parse(cursor, verbosity)?;
        let converted = outputs
            .into_iter()
            .map(&self.converter)
            .collect::<Result<Vec<U>, E>>()
            .map_err(|source| conversion_failed(self.parser.name(), cursor, source))?;
        Ok((converted, next))
    }

    fn name(&self) -> Cow<'_, str> {
        self.parser.name()
    }
}

/// Parser that discards the output of another parser and returns a fixed value
#[derive(Debug, Clone)]
pub struct Replace<P, V> {
    parser: P,
    value: V,
}

impl<P, V> Replace<P, V> {
    pub fn new(parser: P, value: V) -> Self {
        Self { parser, value }
    }
}

impl<'code, T, P, V> Parser<'code, T> for Replace<P, V>
where
    T: Atomic,
    P: Parser<'code, T>,
    V: Clone,
{
    type Output = V;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let (_, next) = self.parser.parse(cursor, verbosity)?;
        Ok((self.value.clone(), next))
    }

    fn name(&self) -> Cow<'_, str> {
        self.parser.name()
    }
}

/// Convenience function to create a Convert parser
pub fn convert<'code, T, P, F, U, E>(parser: P, converter: F) -> Convert<P, F>
where
    T: Atomic,
    P: Parser<'code, T>,
    F: Fn(P::Output) -> Result<U, E>,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    Convert::new(parser, converter)
}

/// Convenience function to create a MapEach parser
pub fn map_each<'code, T, P, F, O, U, E>(parser: P, converter: F) -> MapEach<P, F>
where
    T: Atomic,
    P: Parser<'code, T, Output = Vec<O>>,
    F: Fn(O) -> Result<U, E>,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    MapEach::new(parser, converter)
}

/// Convenience function to create a Replace parser
pub fn replace<'code, T, P, V>(parser: P, value: V) -> Replace<P, V>
where
    T: Atomic,
    P: Parser<'code, T>,
    V: Clone,
{
    Replace::new(parser, value)
}

/// Extension trait for transforming parser outputs
pub trait ConvertExt<'code, T: Atomic>: Parser<'code, T> + Sized {
    fn convert<F, U, E>(self, converter: F) -> Convert<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        Convert::new(self, converter)
    }

    fn map_each<F, O, U, E>(self, converter: F) -> MapEach<Self, F>
    where
        Self: Parser<'code, T, Output = Vec<O>>,
        F: Fn(O) -> Result<U, E>,
        E: Into<Box<dyn StdError + Send + Sync>>,
    {
        MapEach::new(self, converter)
    }

    fn replace<V: Clone>(self, value: V) -> Replace<Self, V> {
        Replace::new(self, value)
    }
}

impl<'code, T: Atomic, P: Parser<'code, T>> ConvertExt<'code, T> for P {}
