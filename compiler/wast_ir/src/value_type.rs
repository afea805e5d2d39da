//! Value types in their binary encoding.

use std::fmt;

/// A value type.
///
/// Discriminants are the signed LEB128 codes of the binary format and must
/// not change. `Void` doubles as the "no type" marker in the opcode table;
/// `Any` never appears on the wire and only exists for type inference.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum ValueType {
    I32 = -0x01,
    I64 = -0x02,
    F32 = -0x03,
    F64 = -0x04,
    /// 128-bit vector of any lane shape.
    M128 = -0x05,
    /// Two boolean lanes.
    B2 = -0x06,
    /// Four boolean lanes.
    B4 = -0x07,
    /// Eight boolean lanes.
    B8 = -0x08,
    /// Sixteen boolean lanes.
    B16 = -0x09,
    Anyfunc = -0x10,
    Func = -0x20,
    Void = -0x40,
    Any = 0,
}

impl ValueType {
    /// Every value type, in declaration order.
    pub const ALL: [ValueType; 13] = [
        ValueType::I32,
        ValueType::I64,
        ValueType::F32,
        ValueType::F64,
        ValueType::M128,
        ValueType::B2,
        ValueType::B4,
        ValueType::B8,
        ValueType::B16,
        ValueType::Anyfunc,
        ValueType::Func,
        ValueType::Void,
        ValueType::Any,
    ];

    /// The binary encoding of this type.
    #[inline]
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// Decode a type from its binary encoding.
    pub const fn from_code(code: i8) -> Option<ValueType> {
        Some(match code {
            -0x01 => ValueType::I32,
            -0x02 => ValueType::I64,
            -0x03 => ValueType::F32,
            -0x04 => ValueType::F64,
            -0x05 => ValueType::M128,
            -0x06 => ValueType::B2,
            -0x07 => ValueType::B4,
            -0x08 => ValueType::B8,
            -0x09 => ValueType::B16,
            -0x10 => ValueType::Anyfunc,
            -0x20 => ValueType::Func,
            -0x40 => ValueType::Void,
            0 => ValueType::Any,
            _ => return None,
        })
    }

    /// The name used in diagnostics and dumps.
    pub const fn name(self) -> &'static str {
        match self {
            ValueType::I32 => "i32",
            ValueType::I64 => "i64",
            ValueType::F32 => "f32",
            ValueType::F64 => "f64",
            ValueType::M128 => "m128",
            ValueType::B2 => "b2",
            ValueType::B4 => "b4",
            ValueType::B8 => "b8",
            ValueType::B16 => "b16",
            ValueType::Anyfunc => "anyfunc",
            ValueType::Func => "func",
            ValueType::Void => "void",
            ValueType::Any => "any",
        }
    }

    /// True for the 128-bit vector and boolean-vector types.
    #[inline]
    pub const fn is_vector(self) -> bool {
        matches!(
            self,
            ValueType::M128 | ValueType::B2 | ValueType::B4 | ValueType::B8 | ValueType::B16
        )
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn codes_round_trip() {
        for ty in ValueType::ALL {
            assert_eq!(ValueType::from_code(ty.code()), Some(ty));
        }
        assert_eq!(ValueType::from_code(-0x0a), None);
        assert_eq!(ValueType::from_code(1), None);
    }

    #[test]
    fn binary_codes_are_frozen() {
        assert_eq!(ValueType::I32.code(), -1);
        assert_eq!(ValueType::B16.code(), -9);
        assert_eq!(ValueType::Anyfunc.code(), -16);
        assert_eq!(ValueType::Func.code(), -32);
        assert_eq!(ValueType::Void.code(), -64);
        assert_eq!(ValueType::Any.code(), 0);
    }

    #[test]
    fn every_type_has_a_distinct_name() {
        let mut names: Vec<&str> = ValueType::ALL.iter().map(|ty| ty.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ValueType::ALL.len());
        assert_eq!(ValueType::B2.to_string(), "b2");
    }

    #[test]
    fn vector_types() {
        assert!(ValueType::M128.is_vector());
        assert!(ValueType::B2.is_vector());
        assert!(!ValueType::I64.is_vector());
        assert!(!ValueType::Void.is_vector());
    }
}
