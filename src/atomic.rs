use std::fmt;

/// Trait for atomic elements that can be used in parsing
///
/// Parsers only ever compare elements for equality. The remaining methods exist
/// so that errors can render the offending input and locate it by line.
pub trait Atomic: Clone + PartialEq + fmt::Debug {
    /// Whether this element ends a line, used for line/offset reporting
    fn is_newline(&self) -> bool {
        false
    }

    /// The character this element stands for, if the element type is textual
    fn as_char(&self) -> Option<char> {
        None
    }

    /// Convert a slice of elements to text, or `None` if the element type is not textual
    fn slice_to_text(_slice: &[Self]) -> Option<String>
    where
        Self: Sized,
    {
        None
    }

    /// Largest prefix length, at most `limit`, that can be rendered on its own
    ///
    /// Elements encoding text in several units (UTF-8 bytes) must not be cut
    /// in the middle of a character.
    fn preview_boundary(slice: &[Self], limit: usize) -> usize
    where
        Self: Sized,
    {
        limit.min(slice.len())
    }

    /// Render a slice for error messages
    ///
    /// Textual slices are shown as a quoted string literal, anything else as a
    /// debug dump of the elements.
    fn format_slice(slice: &[Self]) -> String
    where
        Self: Sized,
    {
        match Self::slice_to_text(slice) {
            Some(text) => format!("{:?}", text),
            None => format!("{:?}", slice),
        }
    }
}

impl Atomic for char {
    fn is_newline(&self) -> bool {
        *self == '\n'
    }

    fn as_char(&self) -> Option<char> {
        Some(*self)
    }

    fn slice_to_text(slice: &[Self]) -> Option<String> {
        Some(slice.iter().collect())
    }
}

impl Atomic for u8 {
    fn is_newline(&self) -> bool {
        *self == b'\n'
    }

    fn as_char(&self) -> Option<char> {
        Some(*self as char)
    }

    fn slice_to_text(slice: &[Self]) -> Option<String> {
        Some(String::from_utf8_lossy(slice).into_owned())
    }

    fn preview_boundary(slice: &[Self], limit: usize) -> usize {
        let mut end = limit.min(slice.len());
        // Back up over continuation bytes (0b10xx_xxxx)
        while end > 0 && end < slice.len() && slice[end] & 0xC0 == 0x80 {
            end -= 1;
        }
        end
    }
}

macro_rules! impl_opaque_atomic {
    ($($ty:ty),* $(,)?) => {
        $(impl Atomic for $ty {})*
    };
}

// Numeric token streams: comparable, but not text.
impl_opaque_atomic!(u16, u32, u64, usize, i8, i16, i32, i64, isize);
