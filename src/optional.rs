use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;

/// Where an `Optional` gets its output from when the inner parser fails
pub trait Fallback<O> {
    fn fallback(&self) -> O;
}

/// Fall back to `Default::default()`
///
/// Unlike a stored value this works for borrowed outputs of any lifetime, so
/// `optional(tag(..))` stays usable on every input.
#[derive(Debug, Clone, Copy, Default)]
pub struct UseDefault;

impl<O: Default> Fallback<O> for UseDefault {
    fn fallback(&self) -> O {
        O::default()
    }
}

/// Fall back to a clone of a fixed value
#[derive(Debug, Clone)]
pub struct UseValue<V>(pub V);

impl<V: Clone> Fallback<V> for UseValue<V> {
    fn fallback(&self) -> V {
        self.0.clone()
    }
}

/// Parser that never fails: the inner parser's result, or a fallback with the input untouched
///
/// The inner parser always runs terse because its failure is never reported.
#[derive(Debug, Clone)]
pub struct Optional<P, F> {
    parser: P,
    fallback: F,
}

impl<P, F> Optional<P, F> {
    pub fn new(parser: P, fallback: F) -> Self {
        Optional { parser, fallback }
    }
}

impl<'code, T, P, F> Parser<'code, T> for Optional<P, F>
where
    T: Atomic,
    P: Parser<'code, T>,
    F: Fallback<P::Output>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code, T>, _verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        match self.parser.parse(cursor, Verbosity::Terse) {
            Ok(success) => Ok(success),
            Err(_) => Ok((self.fallback.fallback(), cursor)),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        self.parser.name()
    }
}

/// Optional parser falling back to `Default::default()`
pub fn optional<'code, T, P>(parser: P) -> Optional<P, UseDefault>
where
    T: Atomic,
    P: Parser<'code, T>,
    P::Output: Default,
{
    Optional::new(parser, UseDefault)
}

/// Optional parser falling back to `default`
pub fn optional_with_default<'code, T, P>(parser: P, default: P::Output) -> Optional<P, UseValue<P::Output>>
where
    T: Atomic,
    P: Parser<'code, T>,
    P::Output: Clone,
{
    Optional::new(parser, UseValue(default))
}

/// Extension trait to make any parser optional
pub trait OptionalExt<'code, T: Atomic>: Parser<'code, T> + Sized {
    fn optional(self) -> Optional<Self, UseDefault>
    where
        Self::Output: Default,
    {
        Optional::new(self, UseDefault)
    }

    fn or_default_to(self, default: Self::Output) -> Optional<Self, UseValue<Self::Output>>
    where
        Self::Output: Clone,
    {
        Optional::new(self, UseValue(default))
    }
}

impl<'code, T: Atomic, P: Parser<'code, T>> OptionalExt<'code, T> for P {}
