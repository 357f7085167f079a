use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser, Verbosity};
use crate::parsers::ParserList;
use std::borrow::Cow;
use std::ops::ControlFlow;

/// Render a list of names as `[a, b, c]`
fn bracketed<'n>(names: impl IntoIterator<Item = Cow<'n, str>>) -> String {
    let names: Vec<Cow<'n, str>> = names.into_iter().collect();
    format!("[{}]", names.join(", "))
}

/// Parser that runs every parser of a list in order and collects their outputs
///
/// Fails with the error of the first parser that fails. Input consumed by the
/// parsers before it is not given back, the failure carries no remainder at all.
///
/// Example:
/// ```
/// use parsekit::parser::{ParseExt, Verbosity};
/// use parsekit::sequence::sequence;
/// use parsekit::tag::tag_str;
///
/// let data: Vec<char> = "a=1".chars().collect();
/// let parser = sequence((tag_str("KEY", "a"), tag_str("EQ", "="), tag_str("ONE", "1")));
///
/// let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
/// assert_eq!(output.len(), 3);
/// assert!(rest.is_empty());
/// ```
pub struct Sequence<L> {
    parsers: L,
}

impl<L> Sequence<L> {
    pub fn new(parsers: L) -> Self {
        Sequence { parsers }
    }
}

impl<'code, T, L> Parser<'code, T> for Sequence<L>
where
    T: Atomic,
    L: ParserList<'code, T>,
{
    type Output = Vec<L::Output>;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let mut outputs = Vec::with_capacity(self.parsers.parser_count());
        let mut current = cursor;
        let mut failure = None;

        self.parsers.for_each_parser(&mut |parser| match parser.parse(current, verbosity) {
            Ok((output, next)) => {
                outputs.push(output);
                current = next;
                ControlFlow::Continue(())
            }
            Err(error) => {
                failure = Some(error);
                ControlFlow::Break(())
            }
        });

        match failure {
            Some(error) => Err(error),
            None => Ok((outputs, current)),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        let mut names = Vec::with_capacity(self.parsers.parser_count());
        self.parsers.for_each_parser(&mut |parser| {
            names.push(Cow::Owned(parser.name().into_owned()));
            ControlFlow::Continue(())
        });
        Cow::Owned(bracketed(names))
    }
}

/// Convenience function to create a Sequence parser from a tuple, array or `Vec`
pub fn sequence<'code, T, L>(parsers: L) -> Sequence<L>
where
    T: Atomic,
    L: ParserList<'code, T>,
{
    Sequence::new(parsers)
}

/// Parser that runs two parsers in order and returns both outputs
pub struct Pair<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Pair<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Pair { first, second }
    }
}

impl<'code, T, P1, P2> Parser<'code, T> for Pair<P1, P2>
where
    T: Atomic,
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let (first, cursor) = self.first.parse(cursor, verbosity)?;
        let (second, cursor) = self.second.parse(cursor, verbosity)?;
        Ok(((first, second), cursor))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Owned(bracketed([self.first.name(), self.second.name()]))
    }
}

/// Convenience function to create a Pair parser
pub fn pair<'code, T, P1, P2>(first: P1, second: P2) -> Pair<P1, P2>
where
    T: Atomic,
    P1: Parser<'code, T>,
    P2: Parser<'code, T>,
{
    Pair::new(first, second)
}

/// Extension trait to chain a second parser onto any parser
pub trait PairExt<'code, T: Atomic>: Parser<'code, T> + Sized {
    fn and<P>(self, other: P) -> Pair<Self, P>
    where
        P: Parser<'code, T>,
    {
        Pair::new(self, other)
    }
}

impl<'code, T: Atomic, P: Parser<'code, T>> PairExt<'code, T> for P {}
