use std::fmt;

use crate::error::PositionError;

/// A location in the source text.
///
/// `line` and `col` count Unicode scalars (both zero based); `offset` is the
/// byte offset into the UTF-8 source. Every node in the tree records where it
/// starts and ends with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub col: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, col: usize, offset: usize) -> Self {
        Self { line, col, offset }
    }

    /// Advances over one character.
    pub fn consume(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        self.offset += c.len_utf8();
    }

    pub fn consume_str(&mut self, s: &str) {
        s.chars().for_each(|c| self.consume(c));
    }

    /// Steps back over `c`, which must be the character just consumed.
    ///
    /// Newlines cannot be stepped back over since the column of the previous
    /// line is not recorded.
    pub fn back(&mut self, c: char) -> Result<(), PositionError> {
        let width = c.len_utf8();
        if c == '\n' || self.col == 0 || self.offset < width {
            return Err(PositionError::InvalidPosition(*self));
        }
        self.col -= 1;
        self.offset -= width;
        Ok(())
    }

    /// Returns the position after consuming `s`.
    #[must_use]
    pub fn advanced(mut self, s: &str) -> Self {
        self.consume_str(s);
        self
    }

    #[must_use]
    pub fn is_line_start(self) -> bool {
        self.col == 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Line {}, Col {}, Offset {}]",
            self.line, self.col, self.offset
        )
    }
}
