//! The opcode table.
//!
//! Every instruction has a fixed numeric code shared by the text lexer, the
//! binary encoder/decoder and the type checker. The codes are a wire
//! contract: they are listed once in [`table`] and never renumbered.
//!
//! # Bands
//!
//! ```text
//! 0x000..0x0c0   scalar instructions
//! 0x100..0x22e   128-bit vector instructions
//! 0x2d0..0x2f8   host band (reserved)
//! ```
//!
//! Codes inside `[0, NUM_OPCODES)` without a record map to a reserved entry
//! with an empty name, so [`lookup`] is total over the range.

mod table;


use std::fmt;

use crate::ValueType;

/// Size of the dense opcode space.
pub const NUM_OPCODES: usize = 760;
/// First code of the first extended band.
pub const EXTENDED_START: u16 = 256;
/// First code of the second extended band.
pub const EXTENDED_START2: u16 = 512;
/// First code of the host band.
pub const HOST_START: u16 = 720;
/// Binary prefix byte introducing an opcode from the first extended band.
pub const EXTENDED_OPCODE_PREFIX: u8 = 6;
/// Binary prefix byte introducing an opcode from the second extended band.
pub const EXTENDED_OPCODE_PREFIX2: u8 = 7;

/// Alignment sentinel meaning "use the opcode's natural alignment".
pub const NATURAL_ALIGNMENT: u32 = u32::MAX;

/// An instruction opcode.
///
/// Values are only produced by the associated constants and
/// [`Opcode::from_code`], so every `Opcode` has a defined record.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Opcode(u16);

/// Broad shape of an instruction, as seen by the text grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OpcodeClass {
    /// Slot in the opcode space with no instruction.
    Reserved,
    /// Structured control, calls, locals and globals.
    Control,
    /// `current_memory` and `grow_memory`.
    Memory,
    Load,
    Store,
    /// Scalar `*.const`.
    Const,
    Unary,
    Binary,
    Compare,
    /// Conversions and reinterpretations, plus `eqz`.
    Convert,
    /// Scalar and vector `select`.
    Select,
    VectorConst,
    VectorBuild,
    /// Vector `swizzle` and `shuffle`.
    VectorSwizzle,
    /// Vector lane `replace`.
    VectorReplace,
}

impl OpcodeClass {
    /// Short lowercase name for dumps.
    pub const fn name(self) -> &'static str {
        match self {
            OpcodeClass::Reserved => "reserved",
            OpcodeClass::Control => "control",
            OpcodeClass::Memory => "memory",
            OpcodeClass::Load => "load",
            OpcodeClass::Store => "store",
            OpcodeClass::Const => "const",
            OpcodeClass::Unary => "unary",
            OpcodeClass::Binary => "binary",
            OpcodeClass::Compare => "compare",
            OpcodeClass::Convert => "convert",
            OpcodeClass::Select => "select",
            OpcodeClass::VectorConst => "vector-const",
            OpcodeClass::VectorBuild => "vector-build",
            OpcodeClass::VectorSwizzle => "vector-swizzle",
            OpcodeClass::VectorReplace => "vector-replace",
        }
    }
}

/// Static description of one opcode.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// Text-format mnemonic. Empty for reserved slots.
    pub name: &'static str,
    pub class: OpcodeClass,
    pub result_type: ValueType,
    pub param1_type: ValueType,
    pub param2_type: ValueType,
    /// Bytes of linear memory accessed; 0 when the opcode does not touch memory.
    pub memory_size: u32,
    /// Lane count for vector opcodes, 0 for scalar ones.
    pub lanes: u8,
}

impl OpcodeInfo {
    const RESERVED: OpcodeInfo = OpcodeInfo {
        name: "",
        class: OpcodeClass::Reserved,
        result_type: ValueType::Void,
        param1_type: ValueType::Void,
        param2_type: ValueType::Void,
        memory_size: 0,
        lanes: 0,
    };

    #[inline]
    pub const fn is_defined(&self) -> bool {
        !self.name.is_empty()
    }

    #[inline]
    pub const fn accesses_memory(&self) -> bool {
        self.memory_size != 0
    }
}

static OPCODE_INFO: [OpcodeInfo; NUM_OPCODES] = build_info_table();

/// Spread the record list into the dense table. Evaluated at compile time,
/// so an out-of-range or duplicated code fails the build.
#[allow(
    clippy::cast_lossless,
    reason = "`usize::from` is not callable in const context"
)]
const fn build_info_table() -> [OpcodeInfo; NUM_OPCODES] {
    let mut info = [OpcodeInfo::RESERVED; NUM_OPCODES];
    let mut i = 0;
    while i < table::RECORDS.len() {
        let (opcode, record) = table::RECORDS[i];
        let slot = opcode.0 as usize;
        assert!(slot < NUM_OPCODES, "opcode outside the opcode space");
        assert!(!info[slot].is_defined(), "two records share an opcode");
        assert!(record.is_defined(), "opcode record without a name");
        info[slot] = record;
        i += 1;
    }
    info
}

/// Look up the record for `opcode`.
#[inline]
pub fn lookup(opcode: Opcode) -> &'static OpcodeInfo {
    &OPCODE_INFO[usize::from(opcode.0)]
}

impl Opcode {
    /// Resolve a raw code. Returns `None` outside `[0, NUM_OPCODES)` and for
    /// reserved slots.
    pub fn from_code(code: u16) -> Option<Opcode> {
        OPCODE_INFO
            .get(usize::from(code))
            .filter(|info| info.is_defined())
            .map(|_| Opcode(code))
    }

    #[inline]
    pub const fn code(self) -> u16 {
        self.0
    }

    #[inline]
    pub fn info(self) -> &'static OpcodeInfo {
        lookup(self)
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// Whether the code lives above the scalar band.
    #[inline]
    pub const fn is_extended(self) -> bool {
        self.0 >= EXTENDED_START
    }

    /// All defined opcodes in ascending code order.
    pub fn iter() -> impl Iterator<Item = Opcode> {
        (0..NUM_OPCODES)
            .filter(|&slot| OPCODE_INFO[slot].is_defined())
            .filter_map(|slot| u16::try_from(slot).ok())
            .map(Opcode)
    }

    /// The scalar `*.const` opcode producing `ty`.
    pub const fn scalar_const(ty: ValueType) -> Option<Opcode> {
        match ty {
            ValueType::I32 => Some(Opcode::I32_CONST),
            ValueType::I64 => Some(Opcode::I64_CONST),
            ValueType::F32 => Some(Opcode::F32_CONST),
            ValueType::F64 => Some(Opcode::F64_CONST),
            _ => None,
        }
    }

    /// The vector `*.const` opcode used for a constant of type `ty`.
    ///
    /// `M128` constants are spelled with the `f32x4` shape; the boolean
    /// vectors each have their own constant opcode.
    pub const fn simd_const(ty: ValueType) -> Option<Opcode> {
        match ty {
            ValueType::M128 => Some(Opcode::F32X4_CONST),
            ValueType::B2 => Some(Opcode::B64X2_CONST),
            ValueType::B4 => Some(Opcode::B32X4_CONST),
            ValueType::B8 => Some(Opcode::B16X8_CONST),
            ValueType::B16 => Some(Opcode::B8X16_CONST),
            _ => None,
        }
    }
}

impl fmt::Debug for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opcode({:#x} {:?})", self.0, self.name())
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True iff `alignment` is the natural-alignment sentinel or exactly the
/// opcode's memory access size.
#[inline]
pub fn is_naturally_aligned(opcode: Opcode, alignment: u32) -> bool {
    alignment == NATURAL_ALIGNMENT || alignment == opcode.info().memory_size
}

/// Resolve the natural-alignment sentinel to the opcode's memory access
/// size; any explicit alignment passes through unchanged.
#[inline]
pub fn effective_alignment(opcode: Opcode, alignment: u32) -> u32 {
    if alignment == NATURAL_ALIGNMENT {
        opcode.info().memory_size
    } else {
        alignment
    }
}
