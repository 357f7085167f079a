use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;

/// Parser that returns the exact input span another parser consumed
///
/// The inner output is discarded. The span is cut from the input by position,
/// so it is exact even when the inner parser threw structure away.
pub struct MatchOnly<P> {
    parser: P,
}

impl<P> MatchOnly<P> {
    pub fn new(parser: P) -> Self {
        MatchOnly { parser }
    }
}

impl<'code, T, P> Parser<'code, T> for MatchOnly<P>
where
    T: Atomic + 'code,
    P: Parser<'code, T>,
{
    type Output = &'code [T];

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let (_, next) = self.parser.parse(cursor, verbosity)?;
        Ok((next.consumed_since(cursor), next))
    }

    fn name(&self) -> Cow<'_, str> {
        self.parser.name()
    }
}

/// Convenience function to create a MatchOnly parser
pub fn match_only<'code, T, P>(parser: P) -> MatchOnly<P>
where
    T: Atomic + 'code,
    P: Parser<'code, T>,
{
    MatchOnly::new(parser)
}

/// Extension trait to add .match_only() method support for parsers
pub trait MatchOnlyExt<'code, T: Atomic>: Parser<'code, T> + Sized {
    fn match_only(self) -> MatchOnly<Self> {
        MatchOnly::new(self)
    }
}

impl<'code, T: Atomic, P: Parser<'code, T>> MatchOnlyExt<'code, T> for P {}
