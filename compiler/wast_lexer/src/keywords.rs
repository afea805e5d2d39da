//! Keyword resolution.
//!
//! Three tables, consulted in order:
//! 1. **Reserved words**: module structure and script directives. A
//!    length-bucketed `match`, resolved without hashing.
//! 2. **Value types**: the scalar types map to themselves, the vector
//!    shapes to `m128` or the boolean vector type with the same lane count.
//! 3. **Mnemonics**: one per defined opcode, built once from the opcode
//!    table and shared by every lexer in the process.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use wast_ir::{Opcode, OpcodeClass, ValueType};

use crate::TokenKind;

/// A resolved keyword and the payload its token carries.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Keyword {
    Plain(TokenKind),
    /// Value type keywords and scalar `*.const`.
    Typed(TokenKind, ValueType),
    Instruction(TokenKind, Opcode),
}

/// Look up `text` in every keyword table.
pub(crate) fn lookup(text: &[u8]) -> Option<Keyword> {
    if let Some(kind) = reserved(text) {
        return Some(Keyword::Plain(kind));
    }
    if text == b"if_else" {
        return Some(Keyword::Instruction(TokenKind::If, Opcode::IF));
    }
    if let Some(ty) = value_type(text) {
        return Some(Keyword::Typed(TokenKind::ValueType, ty));
    }
    mnemonics().get(text).copied()
}

/// Look up a reserved word.
///
/// Reserved words are 3 to 17 lowercase bytes; anything else is rejected
/// before any comparison.
#[inline]
fn reserved(text: &[u8]) -> Option<TokenKind> {
    let len = text.len();
    if !(3..=17).contains(&len) || !text[0].is_ascii_lowercase() {
        return None;
    }

    match len {
        3 => match text {
            b"mut" => Some(TokenKind::Mut),
            b"get" => Some(TokenKind::Get),
            _ => None,
        },
        4 => match text {
            b"then" => Some(TokenKind::Then),
            b"type" => Some(TokenKind::Type),
            b"func" => Some(TokenKind::Func),
            b"elem" => Some(TokenKind::Elem),
            b"data" => Some(TokenKind::Data),
            _ => None,
        },
        5 => match text {
            b"param" => Some(TokenKind::Param),
            b"local" => Some(TokenKind::Local),
            b"table" => Some(TokenKind::Table),
            b"start" => Some(TokenKind::Start),
            b"input" => Some(TokenKind::Input),
            _ => None,
        },
        6 => match text {
            b"result" => Some(TokenKind::Result),
            b"global" => Some(TokenKind::Global),
            b"module" => Some(TokenKind::Module),
            b"memory" => Some(TokenKind::Memory),
            b"offset" => Some(TokenKind::Offset),
            b"import" => Some(TokenKind::Import),
            b"export" => Some(TokenKind::Export),
            b"invoke" => Some(TokenKind::Invoke),
            b"output" => Some(TokenKind::Output),
            _ => None,
        },
        7 => match text {
            b"anyfunc" => Some(TokenKind::Anyfunc),
            _ => None,
        },
        8 => match text {
            b"register" => Some(TokenKind::Register),
            _ => None,
        },
        11 => match text {
            b"call_import" => Some(TokenKind::CallImport),
            b"assert_trap" => Some(TokenKind::AssertTrap),
            _ => None,
        },
        13 => match text {
            b"assert_return" => Some(TokenKind::AssertReturn),
            _ => None,
        },
        14 => match text {
            b"assert_invalid" => Some(TokenKind::AssertInvalid),
            _ => None,
        },
        16 => match text {
            b"assert_malformed" => Some(TokenKind::AssertMalformed),
            _ => None,
        },
        17 => match text {
            b"assert_unlinkable" => Some(TokenKind::AssertUnlinkable),
            b"assert_return_nan" => Some(TokenKind::AssertReturnNan),
            _ => None,
        },
        _ => None,
    }
}

/// Look up a value type keyword.
fn value_type(text: &[u8]) -> Option<ValueType> {
    match text {
        b"i32" => Some(ValueType::I32),
        b"i64" => Some(ValueType::I64),
        b"f32" => Some(ValueType::F32),
        b"f64" => Some(ValueType::F64),
        b"f32x4" | b"i32x4" | b"i16x8" | b"i8x16" | b"i64x2" | b"f64x2" => Some(ValueType::M128),
        b"b64x2" => Some(ValueType::B2),
        b"b32x4" => Some(ValueType::B4),
        b"b16x8" => Some(ValueType::B8),
        b"b8x16" => Some(ValueType::B16),
        _ => None,
    }
}

// ─── Mnemonics ───

static MNEMONICS: OnceLock<FxHashMap<&'static [u8], Keyword>> = OnceLock::new();

/// Every instruction mnemonic, keyed by its bytes.
fn mnemonics() -> &'static FxHashMap<&'static [u8], Keyword> {
    MNEMONICS.get_or_init(|| {
        Opcode::iter()
            .filter_map(|opcode| Some((opcode.name().as_bytes(), instruction(opcode)?)))
            .collect()
    })
}

/// The keyword a defined opcode's mnemonic resolves to.
fn instruction(opcode: Opcode) -> Option<Keyword> {
    let info = opcode.info();
    let kind = match info.class {
        OpcodeClass::Reserved => return None,
        OpcodeClass::Const => return Some(Keyword::Typed(TokenKind::Const, info.result_type)),
        OpcodeClass::Control => control_kind(opcode)?,
        OpcodeClass::Memory if opcode == Opcode::GROW_MEMORY => TokenKind::GrowMemory,
        OpcodeClass::Memory => TokenKind::CurrentMemory,
        OpcodeClass::Load => TokenKind::Load,
        OpcodeClass::Store => TokenKind::Store,
        OpcodeClass::Unary => TokenKind::Unary,
        OpcodeClass::Binary => TokenKind::Binary,
        OpcodeClass::Compare => TokenKind::Compare,
        OpcodeClass::Convert => TokenKind::Convert,
        OpcodeClass::Select => TokenKind::Select,
        OpcodeClass::VectorConst => TokenKind::SimdConst,
        OpcodeClass::VectorBuild => TokenKind::SimdBuild,
        OpcodeClass::VectorSwizzle => TokenKind::SimdSwizzle,
        OpcodeClass::VectorReplace => TokenKind::SimdReplace,
    };
    Some(Keyword::Instruction(kind, opcode))
}

/// Control instructions each have a token kind of their own.
fn control_kind(opcode: Opcode) -> Option<TokenKind> {
    Some(match opcode {
        Opcode::UNREACHABLE => TokenKind::Unreachable,
        Opcode::NOP => TokenKind::Nop,
        Opcode::BLOCK => TokenKind::Block,
        Opcode::LOOP => TokenKind::Loop,
        Opcode::IF => TokenKind::If,
        Opcode::ELSE => TokenKind::Else,
        Opcode::END => TokenKind::End,
        Opcode::BR => TokenKind::Br,
        Opcode::BR_IF => TokenKind::BrIf,
        Opcode::BR_TABLE => TokenKind::BrTable,
        Opcode::RETURN => TokenKind::Return,
        Opcode::CALL => TokenKind::Call,
        Opcode::CALL_INDIRECT => TokenKind::CallIndirect,
        Opcode::DROP => TokenKind::Drop,
        Opcode::GET_LOCAL => TokenKind::GetLocal,
        Opcode::SET_LOCAL => TokenKind::SetLocal,
        Opcode::TEE_LOCAL => TokenKind::TeeLocal,
        Opcode::GET_GLOBAL => TokenKind::GetGlobal,
        Opcode::SET_GLOBAL => TokenKind::SetGlobal,
        _ => return None,
    })
}
