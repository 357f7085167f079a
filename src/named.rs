use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;

/// Parser that gives another parser a label for diagnostics
///
/// Parsing behaves exactly like the inner parser. A verbose structural failure
/// is reported as `expected <label>` at the position where this parser
/// started; conversion errors keep their own message and location.
pub struct Named<P> {
    label: Cow<'static, str>,
    parser: P,
}

impl<P> Named<P> {
    pub fn new(label: impl Into<Cow<'static, str>>, parser: P) -> Self {
        Named {
            label: label.into(),
            parser,
        }
    }
}

impl<'code, T, P> Parser<'code, T> for Named<P>
where
    T: Atomic,
    P: Parser<'code, T>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        self.parser.parse(cursor, verbosity).map_err(|error| match error {
            ParseError::Expected { .. } => ParseError::Expected {
                expected: self.label.to_string(),
                loc: cursor.loc(),
            },
            other => other,
        })
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }
}

/// Convenience function to create a Named parser
pub fn named<'code, T, P>(label: impl Into<Cow<'static, str>>, parser: P) -> Named<P>
where
    T: Atomic,
    P: Parser<'code, T>,
{
    Named::new(label, parser)
}

/// Extension trait to add .named() method support for parsers
pub trait NamedExt<'code, T: Atomic>: Parser<'code, T> + Sized {
    fn named(self, label: impl Into<Cow<'static, str>>) -> Named<Self> {
        Named::new(label, self)
    }
}

impl<'code, T: Atomic, P: Parser<'code, T>> NamedExt<'code, T> for P {}
