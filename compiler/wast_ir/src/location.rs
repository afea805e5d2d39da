//! Source locations.

use std::fmt;

/// Where a token or error sits in its source.
///
/// Lines and columns are 1-based. `last_column` is one past the final byte
/// of the lexeme, so an empty lexeme has `first_column == last_column`.
/// The filename is borrowed from whoever opened the source.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location<'a> {
    pub filename: &'a str,
    pub line: u32,
    pub first_column: u32,
    pub last_column: u32,
}

impl<'a> Location<'a> {
    #[inline]
    pub const fn new(filename: &'a str, line: u32, first_column: u32, last_column: u32) -> Self {
        Location {
            filename,
            line,
            first_column,
            last_column,
        }
    }

    /// Number of columns covered, never less than zero.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.last_column.saturating_sub(self.first_column)
    }
}

impl fmt::Display for Location<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.filename, self.line, self.first_column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_uses_first_column() {
        let loc = Location::new("test.wast", 3, 7, 12);
        assert_eq!(loc.to_string(), "test.wast:3:7");
        assert_eq!(loc.width(), 5);
    }

    #[test]
    fn inverted_range_has_zero_width() {
        assert_eq!(Location::new("x", 1, 9, 4).width(), 0);
    }
}
