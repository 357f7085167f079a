use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use std::borrow::Cow;
use std::marker::PhantomData;

/// How much detail a failing parse should carry
///
/// Chosen by the caller for each invocation and forwarded to children. It never
/// changes what succeeds or fails, only what a failure looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Failures are the allocation-free `ParseError::InvalidInput`
    #[default]
    Terse,
    /// Failures name what was expected and where
    Verbose,
}

impl Verbosity {
    pub fn is_verbose(self) -> bool {
        self == Verbosity::Verbose
    }
}

/// Output and the cursor after it, or the reason for failing
///
/// A failure carries no remaining input: callers cannot read a remainder that
/// has no defined meaning.
pub type ParseResult<'code, T, O> = Result<(O, Cursor<'code, T>), ParseError<'code, T>>;

/// Core parser trait for parser combinators
///
/// Parsers are immutable values. `parse` has no side effects, so one parser can
/// be reused for any number of inputs, including from several threads.
pub trait Parser<'code, T: Atomic> {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output>;

    /// Description of what this parser expects, used in error messages
    fn name(&self) -> Cow<'_, str>;
}

impl<'code, T: Atomic, P: Parser<'code, T> + ?Sized> Parser<'code, T> for &P {
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        (**self).parse(cursor, verbosity)
    }

    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

impl<'code, T: Atomic, P: Parser<'code, T> + ?Sized> Parser<'code, T> for Box<P> {
    type Output = P::Output;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        (**self).parse(cursor, verbosity)
    }

    fn name(&self) -> Cow<'_, str> {
        (**self).name()
    }
}

/// Slice-level entry points for any parser
pub trait ParseExt<'code, T: Atomic>: Parser<'code, T> {
    /// Parse from the start of `input`, returning the output and the unconsumed suffix
    fn parse_slice(
        &self,
        input: &'code [T],
        verbosity: Verbosity,
    ) -> Result<(Self::Output, &'code [T]), ParseError<'code, T>> {
        let (output, cursor) = self.parse(Cursor::new(input), verbosity)?;
        Ok((output, cursor.remaining()))
    }

    /// Parse all of `input`; leftover input is a `ParseError::TrailingInput`
    fn parse_complete(
        &self,
        input: &'code [T],
        verbosity: Verbosity,
    ) -> Result<Self::Output, ParseError<'code, T>> {
        let (output, cursor) = self.parse(Cursor::new(input), verbosity)?;
        if !cursor.is_end() {
            log::trace!(
                "{} stopped at {} of {} elements",
                self.name(),
                cursor.position(),
                input.len()
            );
            return Err(ParseError::TrailingInput { loc: cursor.loc() });
        }
        Ok(output)
    }
}

impl<'code, T: Atomic, P: Parser<'code, T> + ?Sized> ParseExt<'code, T> for P {}

/// Parser backed by a plain function or closure
pub struct FnParser<F, O> {
    function: F,
    _output: PhantomData<fn() -> O>,
}

impl<F, O> FnParser<F, O> {
    pub fn new(function: F) -> Self {
        FnParser {
            function,
            _output: PhantomData,
        }
    }
}

impl<'code, T, O, F> Parser<'code, T> for FnParser<F, O>
where
    T: Atomic + 'code,
    F: Fn(Cursor<'code, T>, Verbosity) -> ParseResult<'code, T, O>,
{
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        (self.function)(cursor, verbosity)
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("FUNCTION")
    }
}

/// Convenience function to turn a closure into a parser
///
/// Wrap the result in `named` to give it a meaningful name in errors.
pub fn func<'code, T, O, F>(function: F) -> FnParser<F, O>
where
    T: Atomic + 'code,
    F: Fn(Cursor<'code, T>, Verbosity) -> ParseResult<'code, T, O>,
{
    FnParser::new(function)
}
