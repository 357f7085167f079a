use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::parser::Verbosity;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Number of elements shown when quoting offending input
pub const PREVIEW_LEN: usize = 32;

/// Human oriented location: 1-based line and element offset within that line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub offset: usize,
}

#[derive(Debug)]
pub struct CodeLoc<'code, T> {
    code: &'code [T],
    /// The position in `code` where the failing parser started
    loc: usize,
}

impl<T> Clone for CodeLoc<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CodeLoc<'_, T> {}

impl<T: PartialEq> PartialEq for CodeLoc<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.loc == other.loc && self.code == other.code
    }
}

impl<'code, T: Atomic> CodeLoc<'code, T> {
    pub fn new(code: &'code [T], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    pub fn source(&self) -> &'code [T] {
        self.code
    }

    /// The input suffix starting at this location
    pub fn rest(&self) -> &'code [T] {
        &self.code[self.loc.min(self.code.len())..]
    }

    /// Quoted, length-limited rendering of the input at this location
    pub fn preview(&self) -> String {
        let rest = self.rest();
        if rest.len() > PREVIEW_LEN {
            let end = T::preview_boundary(rest, PREVIEW_LEN);
            format!("{}...", T::format_slice(&rest[..end]))
        } else {
            T::format_slice(rest)
        }
    }

    /// Calculate line number and element offset within that line
    ///
    /// Element offset rather than column: columns depend on encoding, tab width
    /// and rendering, element offsets do not.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, element) in self.code.iter().enumerate() {
            if i >= self.loc {
                break;
            }
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            offset: self.loc.saturating_sub(line_start),
        }
    }

    /// Up to 2 lines of context on either side of the error line, with a marker
    ///
    /// Empty when the element type has no text rendering.
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let mut lines = Vec::new();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;

        for (index, line_elements) in self.code.split(|e| e.is_newline()).enumerate() {
            let number = index + 1;
            if number < first || number > last {
                continue;
            }
            let Some(content) = T::slice_to_text(line_elements) else {
                return Vec::new();
            };
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// Failure of a parse
///
/// `InvalidInput` is the terse sentinel: no location, no allocation. The other
/// variants carry where the failure happened and, for conversions, the
/// converter's own error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError<'code, T: Atomic> {
    #[error("invalid input")]
    InvalidInput,

    #[error("expected {expected} but got {}", .loc.preview())]
    Expected {
        expected: String,
        loc: CodeLoc<'code, T>,
    },

    #[error("failed to convert {expected}: {source}")]
    Conversion {
        expected: String,
        loc: CodeLoc<'code, T>,
        source: Arc<dyn StdError + Send + Sync>,
    },

    #[error("unexpected trailing input {}", .loc.preview())]
    TrailingInput { loc: CodeLoc<'code, T> },
}

impl<'code, T: Atomic> ParseError<'code, T> {
    /// Structural mismatch at `cursor`, with as much detail as `verbosity` asks for
    pub fn mismatch(verbosity: Verbosity, expected: &str, cursor: Cursor<'code, T>) -> Self {
        match verbosity {
            Verbosity::Terse => ParseError::InvalidInput,
            Verbosity::Verbose => ParseError::Expected {
                expected: expected.to_owned(),
                loc: cursor.loc(),
            },
        }
    }

    /// Wrap a converter's error, keeping it reachable through `source()`
    pub fn conversion(
        expected: impl Into<String>,
        cursor: Cursor<'code, T>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        let source: Box<dyn StdError + Send + Sync> = source.into();
        ParseError::Conversion {
            expected: expected.into(),
            loc: cursor.loc(),
            source: Arc::from(source),
        }
    }

    pub fn location(&self) -> Option<CodeLoc<'code, T>> {
        match self {
            ParseError::InvalidInput => None,
            ParseError::Expected { loc, .. }
            | ParseError::Conversion { loc, .. }
            | ParseError::TrailingInput { loc } => Some(*loc),
        }
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, ParseError::Conversion { .. })
    }

    /// Multi-line report with line number and surrounding input
    pub fn report(&self) -> String {
        let Some(loc) = self.location() else {
            return self.to_string();
        };
        let mut out = format!("{} ({})", self, loc);
        let context = loc.context_lines();
        if !context.is_empty() {
            out.push_str("\n\n");
            out.push_str(&context.join("\n"));
        }
        out
    }
}

impl<T: Atomic> PartialEq for ParseError<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ParseError::InvalidInput, ParseError::InvalidInput) => true,
            (
                ParseError::Expected { expected: a, loc: la },
                ParseError::Expected { expected: b, loc: lb },
            ) => a == b && la == lb,
            (
                ParseError::Conversion {
                    expected: a,
                    loc: la,
                    source: sa,
                },
                ParseError::Conversion {
                    expected: b,
                    loc: lb,
                    source: sb,
                },
            ) => a == b && la == lb && sa.to_string() == sb.to_string(),
            (ParseError::TrailingInput { loc: a }, ParseError::TrailingInput { loc: b }) => a == b,
            _ => false,
        }
    }
}

impl<T: Atomic> fmt::Display for CodeLoc<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(f, "line {}, offset {}", pos.line, pos.offset)
    }
}
