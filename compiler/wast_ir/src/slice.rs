//! Borrowed byte views.
//!
//! Token payloads point straight into the lexer's buffer. The borrow ties
//! them to the call that produced them: once the lexer refills, the bytes
//! may move, so anything kept longer must be copied out first.

use std::borrow::Cow;
use std::fmt;

/// A view of bytes owned by someone else.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteSlice<'a>(&'a [u8]);

impl<'a> ByteSlice<'a> {
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        ByteSlice(bytes)
    }

    #[inline]
    pub const fn empty() -> Self {
        ByteSlice(&[])
    }

    #[inline]
    pub const fn from_text(text: &'a str) -> Self {
        ByteSlice(text.as_bytes())
    }

    #[inline]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Byte-wise equality with a string.
    #[inline]
    pub fn eq_str(&self, text: &str) -> bool {
        self.0 == text.as_bytes()
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix.as_bytes())
    }

    /// The remainder after `prefix`, if the slice starts with it.
    pub fn strip_prefix(&self, prefix: &str) -> Option<ByteSlice<'a>> {
        self.0.strip_prefix(prefix.as_bytes()).map(ByteSlice)
    }

    /// Decode as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.0)
    }
}

impl<'a> From<&'a [u8]> for ByteSlice<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ByteSlice(bytes)
    }
}

impl<'a> From<&'a str> for ByteSlice<'a> {
    fn from(text: &'a str) -> Self {
        ByteSlice(text.as_bytes())
    }
}

impl fmt::Display for ByteSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for ByteSlice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_slices_are_equal() {
        assert!(ByteSlice::empty().is_empty());
        assert_eq!(ByteSlice::empty(), ByteSlice::from_text(""));
        assert_eq!(ByteSlice::default().len(), 0);
    }

    #[test]
    fn comparisons() {
        let slice = ByteSlice::from_text("offset=16");
        assert!(slice.eq_str("offset=16"));
        assert!(!slice.eq_str("offset="));
        assert!(slice.starts_with("offset="));
        assert!(!slice.starts_with("align="));
        assert_eq!(slice.strip_prefix("offset="), Some(ByteSlice::from_text("16")));
        assert_eq!(slice.strip_prefix("align="), None);
    }

    #[test]
    fn slices_compare_by_content() {
        let owned = String::from("$label");
        assert_eq!(ByteSlice::from(owned.as_str()), ByteSlice::new(b"$label"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let slice = ByteSlice::new(&[b'a', 0xff, b'b']);
        assert_eq!(slice.to_string(), "a\u{fffd}b");
        assert_eq!(format!("{slice:?}"), "\"a\u{fffd}b\"");
    }
}
