//! # parsekit - Parser Combinator Library
//!
//! Composable parsers over slices of any element type: characters, bytes, or
//! tokens produced by an earlier lexing pass.
//!
//! Small parsers combine into larger ones using combinators. The library emphasizes:
//!
//! - **Any element type**: parsers only compare elements for equality, see [`Atomic`]
//! - **No copying**: outputs that are input spans borrow from the input
//! - **Two error tiers**: a terse, allocation-free failure for speculative parsing
//!   and a verbose one naming what was expected and where, chosen per call
//! - **Zero panics**: all failures are ordinary [`ParseError`] values
//!
//! ```
//! use parsekit::prelude::*;
//! use parsekit::text::{multi_digits, to_int};
//!
//! let data: Vec<char> = "1,22,333".chars().collect();
//! let numbers = separated_list(
//!     multi_digits::<char>().convert(to_int::<u32, char>),
//!     tag_str("COMMA", ","),
//! );
//!
//! let output = numbers.parse_complete(&data, Verbosity::Verbose).unwrap();
//! assert_eq!(output, vec![1, 22, 333]);
//! ```

pub mod anything;
pub mod atomic;
pub mod convert;
pub mod cursor;
pub mod defer;
pub mod delimited;
pub mod error;
pub mod match_only;
pub mod named;
pub mod one_of;
pub mod optional;
pub mod or;
pub mod parser;
pub mod parsers;
pub mod repeat;
pub mod sequence;
pub mod tag;
pub mod take;
pub mod text;

pub use atomic::Atomic;
pub use cursor::Cursor;
pub use error::{CodeLoc, ParseError, ReadablePosition};
pub use parser::{ParseExt, ParseResult, Parser, Verbosity};
pub use parsers::ParserList;

/// Everything needed to write grammars, in one import
pub mod prelude {
    pub use crate::anything::{anything, nothing};
    pub use crate::atomic::Atomic;
    pub use crate::convert::{ConvertExt, convert, map_each, replace};
    pub use crate::cursor::Cursor;
    pub use crate::defer::defer;
    pub use crate::delimited::{delimited, with_prefix, with_suffix};
    pub use crate::error::ParseError;
    pub use crate::match_only::{MatchOnlyExt, match_only};
    pub use crate::named::{NamedExt, named};
    pub use crate::one_of::{none_of, none_of_run, one_of, one_of_run};
    pub use crate::optional::{OptionalExt, optional, optional_with_default};
    pub use crate::or::{OrExt, or};
    pub use crate::parser::{ParseExt, ParseResult, Parser, Verbosity, func};
    pub use crate::repeat::{many, many_limited, repeat, separated_list, separated_list_limited};
    pub use crate::sequence::{PairExt, pair, sequence};
    pub use crate::tag::{tag, tag_as, tag_str};
    pub use crate::take::{take_single, take_while};
}
