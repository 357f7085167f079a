use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::parser::{ParseResult, Parser, Verbosity};
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that matches any single element
pub struct Anything<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Anything<T> {
    pub fn new() -> Self {
        Anything {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Anything<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T: Atomic> Parser<'code, T> for Anything<T> {
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>, verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        match cursor.value() {
            Some(element) => Ok((element.clone(), cursor.next())),
            None => Err(ParseError::mismatch(verbosity, "ANYTHING", cursor)),
        }
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("ANYTHING")
    }
}

/// Parser that always succeeds without consuming input
pub struct Nothing<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Nothing<T> {
    pub fn new() -> Self {
        Nothing {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Nothing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code, T: Atomic> Parser<'code, T> for Nothing<T> {
    type Output = ();

    fn parse(&self, cursor: Cursor<'code, T>, _verbosity: Verbosity) -> ParseResult<'code, T, Self::Output> {
        Ok(((), cursor))
    }

    fn name(&self) -> Cow<'_, str> {
        Cow::Borrowed("NOTHING")
    }
}

/// Convenience function to create an Anything parser
pub fn anything<T: Atomic>() -> Anything<T> {
    Anything::new()
}

/// Convenience function to create a Nothing parser
pub fn nothing<T: Atomic>() -> Nothing<T> {
    Nothing::new()
}
