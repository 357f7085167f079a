use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Verbosity};
use crate::parsers::ParserList;
use std::borrow::Cow;
use std::ops::ControlFlow;

/// Ordered choice: tries each parser against the same input and returns the first success
///
/// A later alternative is never tried once an earlier one succeeds, even if it
/// would consume more. Alternatives are always run terse since their failures
/// are discarded. When every alternative fails, a verbose caller gets one error
/// naming all of them; a terse caller gets `InvalidInput` without that name
/// ever being built.
pub struct Or<L> {
    parsers: L,
}

impl<L> Or<L> {
    pub fn new(parsers: L) -> Self {
        Or { parsers }
    }
}

impl<'code, T, L> Parser<'code, T> for Or<L>
where
    T: Atomic,
    L: ParserList<'code, T>,
{
    type Output = L::Output;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let mut found = None;
        self.parsers.for_each_parser(&mut |parser| match parser.parse(cursor, Verbosity::Terse) {
            Ok(success) => {
                found = Some(success);
                ControlFlow::Break(())
            }
            Err(_) => ControlFlow::Continue(()),
        });

        if let Some(success) = found {
            return Ok(success);
        }

        match verbosity {
            Verbosity::Terse => Err(ParseError::InvalidInput),
            Verbosity::Verbose => {
                let expected = self.name().into_owned();
                log::trace!(
                    "all {} alternatives failed at {}: {}",
                    self.parsers.parser_count(),
                    cursor.position(),
                    expected
                );
                Err(ParseError::Expected {
                    expected,
                    loc: cursor.loc(),
                })
            }
        }
    }

    fn name(&self) -> Cow<'_, str> {
        let mut name = String::from("one of");
        self.parsers.for_each_parser(&mut |parser| {
            name.push_str(" [");
            name.push_str(&parser.name());
            name.push(']');
            ControlFlow::Continue(())
        });
        Cow::Owned(name)
    }
}

/// Convenience function to create an Or parser from a tuple, array or `Vec`
pub fn or<'code, T, L>(parsers: L) -> Or<L>
where
    T: Atomic,
    L: ParserList<'code, T>,
{
    Or::new(parsers)
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code, T: Atomic>: Parser<'code, T> + Sized {
    fn or<P>(self, other: P) -> Or<(Self, P)>
    where
        P: Parser<'code, T, Output = Self::Output>,
    {
        Or::new((self, other))
    }
}

impl<'code, T: Atomic, P: Parser<'code, T>> OrExt<'code, T> for P {}
