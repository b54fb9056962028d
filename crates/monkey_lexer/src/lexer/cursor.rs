//! Byte cursor over a borrowed input buffer

/// Tracks the current byte of the input, along with the position of the byte after it.
///
/// `read_position` is always `position + 1`. Once `position` reaches the end of the input the
/// current byte becomes `None` and the cursor stops moving.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    position: usize,
    read_position: usize,
    ch: Option<u8>,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor with the first byte of `input` already loaded
    pub(crate) fn new(input: &'a [u8]) -> Self {
        let mut cursor = Self {
            input,
            position: 0,
            read_position: 0,
            ch: None,
        };
        cursor.read_char();
        cursor
    }

    /// Moves the cursor forward by one byte
    pub(crate) fn read_char(&mut self) {
        if self.read_position > self.input.len() {
            return;
        }
        self.ch = self.input.get(self.read_position).copied();
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// The byte after the current one, without moving the cursor
    pub(crate) fn peek_char(&self) -> Option<u8> {
        self.input.get(self.read_position).copied()
    }

    /// The current byte, or `None` at the end of the input
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.ch
    }

    /// The offset of the current byte
    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.position
    }

    /// Consumes bytes while `predicate` holds, returning everything consumed
    pub(crate) fn read_while<F: Fn(u8) -> bool>(&mut self, predicate: F) -> &'a [u8] {
        let start = self.position;
        while self.ch.is_some_and(&predicate) {
            self.read_char();
        }
        let input = self.input;
        &input[start..self.position]
    }
}
