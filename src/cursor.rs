use crate::atomic::Atomic;
use crate::error::CodeLoc;

/// A position in a finite input sequence
///
/// A cursor never owns or copies input. Advancing it only narrows the view, so
/// `remaining()` is always a suffix of `source()`.
#[derive(Debug)]
pub enum Cursor<'code, T> {
    /// Cursor pointing at a readable element
    Valid { data: &'code [T], position: usize },
    /// Cursor past the last element
    EndOfInput { data: &'code [T] },
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'code, T> Cursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        Self::at(data, 0)
    }

    fn at(data: &'code [T], position: usize) -> Self {
        if position >= data.len() {
            Cursor::EndOfInput { data }
        } else {
            Cursor::Valid { data, position }
        }
    }

    /// The element under the cursor, or `None` at end of input
    pub fn value(&self) -> Option<&'code T> {
        match *self {
            Cursor::Valid { data, position } => data.get(position),
            Cursor::EndOfInput { .. } => None,
        }
    }

    /// Advance by one element; stays put at end of input
    pub fn next(self) -> Self {
        self.advance(1)
    }

    /// Advance by `count` elements, stopping at end of input
    pub fn advance(self, count: usize) -> Self {
        match self {
            Cursor::Valid { data, position } => Self::at(data, position.saturating_add(count)),
            Cursor::EndOfInput { data } => Cursor::EndOfInput { data },
        }
    }

    pub fn position(&self) -> usize {
        match *self {
            Cursor::Valid { data, position } => position.min(data.len()),
            Cursor::EndOfInput { data } => data.len(),
        }
    }

    /// The whole input this cursor walks over
    pub fn source(&self) -> &'code [T] {
        match *self {
            Cursor::Valid { data, .. } => data,
            Cursor::EndOfInput { data } => data,
        }
    }

    /// The unconsumed suffix of the input
    pub fn remaining(&self) -> &'code [T] {
        match *self {
            Cursor::Valid { data, position } => data.get(position..).unwrap_or(&[]),
            Cursor::EndOfInput { .. } => &[],
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Cursor::EndOfInput { .. })
    }

    /// The span between an earlier cursor `start` and this one
    ///
    /// Computed from positions alone, so it is exact regardless of what the
    /// parsers in between produced. Returns an empty slice if `start` is ahead.
    pub fn consumed_since(&self, start: Cursor<'code, T>) -> &'code [T] {
        let source = self.source();
        let from = start.position().min(source.len());
        let to = self.position().min(source.len());
        if from > to {
            return &[];
        }
        &source[from..to]
    }

    /// Consume the cursor and return its inner data and position
    pub fn inner(self) -> (&'code [T], usize) {
        (self.source(), self.position())
    }
}

impl<'code, T: Atomic> Cursor<'code, T> {
    /// Location of this cursor for error reporting
    pub fn loc(&self) -> CodeLoc<'code, T> {
        let (data, position) = self.inner();
        CodeLoc::new(data, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations_u8() {
        let data = b"hello\nworld";
        let cursor = Cursor::new(&data[..]);

        assert_eq!(cursor.value(), Some(&b'h'));

        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some(&b'e'));
        assert_eq!(cursor.remaining(), b"ello\nworld");
    }

    #[test]
    fn test_eof_u8() {
        let data = b"ab";
        let mut cursor = Cursor::new(&data[..]);

        assert_eq!(cursor.value(), Some(&b'a'));
        cursor = cursor.next();
        assert_eq!(cursor.value(), Some(&b'b'));

        cursor = cursor.next();
        assert!(matches!(cursor, Cursor::EndOfInput { .. }));
        assert_eq!(cursor.value(), None);
        assert!(cursor.remaining().is_empty());

        // Stays at end of input
        cursor = cursor.next();
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_empty_data() {
        let data: [u32; 0] = [];
        let cursor = Cursor::new(&data[..]);

        assert!(cursor.is_end());
        assert_eq!(cursor.value(), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_clamps_to_end() {
        let data = [10u32, 20, 30];
        let cursor = Cursor::new(&data[..]);

        let cursor = cursor.advance(2);
        assert_eq!(cursor.value(), Some(&30));

        let cursor = cursor.advance(5);
        assert!(cursor.is_end());
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_copy_independence() {
        let data = [5u32, 10, 15, 20];
        let cursor = Cursor::new(&data[..]);

        let saved_at_5 = cursor;
        let cursor = cursor.next();
        assert_eq!(cursor.value(), Some(&10));
        assert_eq!(saved_at_5.value(), Some(&5));

        let from_5 = saved_at_5.next().next();
        assert_eq!(from_5.value(), Some(&15));
    }

    #[test]
    fn test_remaining_is_suffix() {
        let data: Vec<char> = "parse me".chars().collect();
        let cursor = Cursor::new(&data[..]);

        for step in 0..=data.len() + 1 {
            let moved = cursor.advance(step);
            let rest = moved.remaining();
            assert!(data.ends_with(rest));
            assert_eq!(moved.position() + rest.len(), data.len());
        }
    }

    #[test]
    fn test_hand_built_cursor_past_end() {
        let data = b"abc";
        let cursor = Cursor::Valid {
            data: &data[..],
            position: 7,
        };

        assert_eq!(cursor.value(), None);
        assert!(cursor.remaining().is_empty());
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.loc().preview(), "\"\"");
        assert!(cursor.next().is_end());
    }

    #[test]
    fn test_consumed_since() {
        let data = b"hello world";
        let start = Cursor::new(&data[..]);
        let end = start.advance(5);

        assert_eq!(end.consumed_since(start), b"hello");
        assert_eq!(start.consumed_since(end), b"");
        assert_eq!(end.consumed_since(end), b"");
    }

    #[test]
    fn test_non_copy_elements() {
        let data = vec![String::from("a"), String::from("b")];
        let cursor = Cursor::new(&data[..]);
        let copy = cursor;

        assert_eq!(cursor.value().map(String::as_str), Some("a"));
        assert_eq!(copy.next().value().map(String::as_str), Some("b"));
    }

    #[test]
    fn test_inner_and_loc() {
        let data = [99u32, 88, 77];
        let cursor = Cursor::new(&data[..]).next().next();

        let (source, pos) = cursor.inner();
        assert_eq!(source, &[99, 88, 77]);
        assert_eq!(pos, 2);
        assert_eq!(cursor.loc().position(), 2);
    }
}
