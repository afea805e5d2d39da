//! Numeric literal classification.

use crate::ByteSlice;

/// Which numeric form a literal was written in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralType {
    /// Decimal or `0x` hexadecimal integer, optionally signed.
    Int,
    /// Decimal float with a fraction and/or exponent.
    Float,
    /// Hexadecimal float with a `p` exponent.
    HexFloat,
    /// `inf` or `infinity`, optionally signed.
    Infinity,
    /// `nan` or `nan:0x...`, optionally signed.
    Nan,
}

/// A numeric literal: its form plus the raw text, unconverted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Literal<'a> {
    pub ty: LiteralType,
    pub text: ByteSlice<'a>,
}

impl<'a> Literal<'a> {
    #[inline]
    pub const fn new(ty: LiteralType, text: ByteSlice<'a>) -> Self {
        Literal { ty, text }
    }
}
