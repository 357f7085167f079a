use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;

/// A named forward reference that looks its parser up at parse time
///
/// This breaks cycles in recursive grammars: an array parser can refer to the
/// value parser through a `Deferred` before the value parser exists. The factory
/// runs on every parse, so it should return a reference to a parser built once
/// (for example a `static`) rather than building a new one.
///
/// The label is fixed at construction and never asks the target for its name,
/// so describing a recursive grammar terminates.
pub struct Deferred<F> {
    label: Cow<'static, str>,
    factory: F,
}

impl<F> Deferred<F> {
    pub fn new(label: impl Into<Cow<'static, str>>, factory: F) -> Self {
        Self {
            label: label.into(),
            factory,
        }
    }
}

impl<'code, T, F, P> Parser<'code, T> for Deferred<F>
where
    T: Atomic,
    F: Fn() -> P,
    P: Parser<'code, T>,
{
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor, verbosity)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }
}

/// Create a deferred parser from a label and a factory function
pub fn defer<'code, T, F, P>(label: impl Into<Cow<'static, str>>, factory: F) -> Deferred<F>
where
    T: Atomic,
    F: Fn() -> P,
    P: Parser<'code, T>,
{
    Deferred::new(label, factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConvertExt;
    use crate::delimited::delimited;
    use crate::one_of::one_of;
    use crate::or::or;
    use crate::parser::ParseExt;
    use crate::repeat::many;
    use crate::tag::tag_str;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_defer_basic() {
        let data = chars("aaaa");
        let parser = defer("A", || one_of("A", ['a']));

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output, 'a');
        assert_eq!(rest.len(), 3);
        assert_eq!(parser.name(), "A");
    }

    #[test]
    fn test_defer_with_many() {
        let data = chars("aaab");
        let parser = defer("AS", || many(one_of("A", ['a'])));

        let (output, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(output.len(), 3);
        assert_eq!(rest, &['b']);
    }

    /// Nesting depth of balanced parentheses, e.g. `(())` is 2
    fn nesting<'code>() -> Box<dyn Parser<'code, char, Output = usize> + 'code> {
        Box::new(or((
            delimited(
                tag_str("OPEN", "("),
                defer("NESTING", nesting),
                tag_str("CLOSE", ")"),
            )
            .convert(|depth| Ok::<_, std::convert::Infallible>(depth + 1)),
            tag_str("EMPTY", "").replace(0usize),
        )))
    }

    #[test]
    fn test_defer_recursion() {
        let data = chars("((()))x");
        let parser = nesting();

        let (depth, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(depth, 3);
        assert_eq!(rest, &['x']);
    }

    #[test]
    fn test_recursive_name_terminates() {
        let parser = nesting();
        assert_eq!(parser.name(), "one of [OPEN, NESTING, CLOSE] [EMPTY]");
    }

    #[test]
    fn test_defer_unbalanced() {
        let data = chars("((x");
        let parser = nesting();

        // The empty alternative matches, leaving the unbalanced input behind
        let (depth, rest) = parser.parse_slice(&data, Verbosity::Terse).unwrap();
        assert_eq!(depth, 0);
        assert_eq!(rest, &chars("((x")[..]);
    }
}
