use crate::anything::Nothing;
use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;

/// Parser that collects repeated matches of an element, optionally between delimiters
///
/// Every list-shaped combinator shares this one policy:
///
/// 1. The first element is parsed. If it fails, the result is an empty list
///    with the input untouched when `min == 0`, and a failure otherwise.
/// 2. While the maximum has not been reached, a delimiter and then an element
///    are parsed. If either fails, collection stops and the input consumed by
///    that attempt is given back.
/// 3. Fewer than `min` elements is a failure carrying the error of the last
///    failed attempt.
///
/// Without a maximum, collection also stops as soon as an iteration consumes
/// no input, so zero-width elements cannot loop forever. A maximum below the
/// minimum is accepted and never succeeds.
pub struct Repeat<P, D> {
    parser: P,
    delimiter: D,
    min: usize,
    max: Option<usize>,
    separated: bool,
}

impl<P, D> Repeat<P, D> {
    fn new(parser: P, delimiter: D, min: usize, max: Option<usize>, separated: bool) -> Self {
        Repeat {
            parser,
            delimiter,
            min,
            max,
            separated,
        }
    }

    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound on collected elements, `None` when unbounded
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    fn below_max(&self, count: usize) -> bool {
        self.max.is_none_or(|max| count < max)
    }
}

/// `0` means no upper bound
fn bound(max: usize) -> Option<usize> {
    (max != 0).then_some(max)
}

impl<'code, T, P, D> Parser<'code, T> for Repeat<P, D>
where
    T: Atomic,
    P: Parser<'code, T>,
    D: Parser<'code, T>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let mut outputs = Vec::new();
        let mut current = cursor;
        let mut last_error = None;

        if self.below_max(0) {
            match self.parser.parse(cursor, verbosity) {
                Ok((output, next)) => {
                    outputs.push(output);
                    current = next;
                }
                Err(_) if self.min == 0 => return Ok((outputs, cursor)),
                Err(error) => last_error = Some(error),
            }
        }

        while last_error.is_none() && self.below_max(outputs.len()) {
            let after_delimiter = match self.delimiter.parse(current, verbosity) {
                Ok((_, next)) => next,
                Err(error) => {
                    last_error = Some(error);
                    break;
                }
            };
            match self.parser.parse(after_delimiter, verbosity) {
                Ok((_, next)) if self.max.is_none() && next.position() == current.position() => break,
                Ok((output, next)) => {
                    outputs.push(output);
                    current = next;
                }
                Err(error) => last_error = Some(error),
            }
        }

        if outputs.len() < self.min {
            log::trace!(
                "{} matched {} of at least {} at {}",
                self.name(),
                outputs.len(),
                self.min,
                cursor.position()
            );
            let error = match last_error {
                Some(error) => error,
                None => ParseError::mismatch(verbosity, &self.name(), cursor),
            };
            return Err(error);
        }

        Ok((outputs, current))
    }

    fn name(&self) -> Cow<'_, str> {
        let name = if self.separated {
            format!(
                "multiple [{}] separated by [{}]",
                self.parser.name(),
                self.delimiter.name()
            )
        } else {
            format!("multiple [{}]", self.parser.name())
        };
        Cow::Owned(name)
    }
}

/// Zero or more elements
pub fn many<'code, T, P>(parser: P) -> Repeat<P, Nothing<T>>
where
    T: Atomic,
    P: Parser<'code, T>,
{
    Repeat::new(parser, Nothing::new(), 0, None, false)
}

/// Between `min` and `max` elements; `max == 0` means unbounded
pub fn many_limited<'code, T, P>(min: usize, max: usize, parser: P) -> Repeat<P, Nothing<T>>
where
    T: Atomic,
    P: Parser<'code, T>,
{
    Repeat::new(parser, Nothing::new(), min, bound(max), false)
}

/// Exactly `count` elements
pub fn repeat<'code, T, P>(count: usize, parser: P) -> Repeat<P, Nothing<T>>
where
    T: Atomic,
    P: Parser<'code, T>,
{
    Repeat::new(parser, Nothing::new(), count, Some(count), false)
}

/// Zero or more elements with `delimiter` between each pair
///
/// A trailing delimiter is not consumed.
pub fn separated_list<'code, T, P, D>(parser: P, delimiter: D) -> Repeat<P, D>
where
    T: Atomic,
    P: Parser<'code, T>,
    D: Parser<'code, T>,
{
    Repeat::new(parser, delimiter, 0, None, true)
}

/// Between `min` and `max` delimited elements; `max == 0` means unbounded
pub fn separated_list_limited<'code, T, P, D>(min: usize, max: usize, parser: P, delimiter: D) -> Repeat<P, D>
where
    T: Atomic,
    P: Parser<'code, T>,
    D: Parser<'code, T>,
{
    Repeat::new(parser, delimiter, min, bound(max), true)
}
