//! Token types produced by the lexer.

use std::fmt;

use wast_ir::{ByteSlice, Literal, Location, Opcode, ValueType};

/// Token kinds.
///
/// Instruction tokens are grouped by category; the specific instruction
/// travels in the token's [`TokenValue`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Stream structure
    Eof,
    Lpar,
    Rpar,

    // Literals and names
    /// Unsigned integer.
    Nat,
    /// Signed integer.
    Int,
    /// Any float form; the literal tag says which.
    Float,
    /// Quoted string, quotes included.
    Text,
    /// `$name`.
    Var,
    ValueType,
    /// `offset=N`, payload `N`.
    OffsetEqNat,
    /// `align=N`, payload `N`.
    AlignEqNat,

    // Module and script keywords
    Anyfunc,
    Mut,
    Then,
    CallImport,
    Type,
    Func,
    Param,
    Result,
    Local,
    Global,
    Module,
    Table,
    Memory,
    Start,
    Elem,
    Data,
    Offset,
    Import,
    Export,
    Register,
    Invoke,
    Get,
    AssertMalformed,
    AssertInvalid,
    AssertUnlinkable,
    AssertReturn,
    AssertReturnNan,
    AssertTrap,
    Input,
    Output,

    // Control instructions
    Unreachable,
    Nop,
    Block,
    Loop,
    If,
    Else,
    End,
    Br,
    BrIf,
    BrTable,
    Return,
    Call,
    CallIndirect,
    Drop,
    GetLocal,
    SetLocal,
    TeeLocal,
    GetGlobal,
    SetGlobal,
    CurrentMemory,
    GrowMemory,

    // Instruction categories
    Load,
    Store,
    Const,
    Unary,
    Binary,
    Compare,
    Convert,
    Select,
    SimdConst,
    SimdBuild,
    SimdSwizzle,
    SimdReplace,
}

impl TokenKind {
    /// Upper-case name used in token dumps.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Eof => "EOF",
            TokenKind::Lpar => "LPAR",
            TokenKind::Rpar => "RPAR",
            TokenKind::Nat => "NAT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Text => "TEXT",
            TokenKind::Var => "VAR",
            TokenKind::ValueType => "VALUE_TYPE",
            TokenKind::OffsetEqNat => "OFFSET_EQ_NAT",
            TokenKind::AlignEqNat => "ALIGN_EQ_NAT",
            TokenKind::Anyfunc => "ANYFUNC",
            TokenKind::Mut => "MUT",
            TokenKind::Then => "THEN",
            TokenKind::CallImport => "CALL_IMPORT",
            TokenKind::Type => "TYPE",
            TokenKind::Func => "FUNC",
            TokenKind::Param => "PARAM",
            TokenKind::Result => "RESULT",
            TokenKind::Local => "LOCAL",
            TokenKind::Global => "GLOBAL",
            TokenKind::Module => "MODULE",
            TokenKind::Table => "TABLE",
            TokenKind::Memory => "MEMORY",
            TokenKind::Start => "START",
            TokenKind::Elem => "ELEM",
            TokenKind::Data => "DATA",
            TokenKind::Offset => "OFFSET",
            TokenKind::Import => "IMPORT",
            TokenKind::Export => "EXPORT",
            TokenKind::Register => "REGISTER",
            TokenKind::Invoke => "INVOKE",
            TokenKind::Get => "GET",
            TokenKind::AssertMalformed => "ASSERT_MALFORMED",
            TokenKind::AssertInvalid => "ASSERT_INVALID",
            TokenKind::AssertUnlinkable => "ASSERT_UNLINKABLE",
            TokenKind::AssertReturn => "ASSERT_RETURN",
            TokenKind::AssertReturnNan => "ASSERT_RETURN_NAN",
            TokenKind::AssertTrap => "ASSERT_TRAP",
            TokenKind::Input => "INPUT",
            TokenKind::Output => "OUTPUT",
            TokenKind::Unreachable => "UNREACHABLE",
            TokenKind::Nop => "NOP",
            TokenKind::Block => "BLOCK",
            TokenKind::Loop => "LOOP",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::Br => "BR",
            TokenKind::BrIf => "BR_IF",
            TokenKind::BrTable => "BR_TABLE",
            TokenKind::Return => "RETURN",
            TokenKind::Call => "CALL",
            TokenKind::CallIndirect => "CALL_INDIRECT",
            TokenKind::Drop => "DROP",
            TokenKind::GetLocal => "GET_LOCAL",
            TokenKind::SetLocal => "SET_LOCAL",
            TokenKind::TeeLocal => "TEE_LOCAL",
            TokenKind::GetGlobal => "GET_GLOBAL",
            TokenKind::SetGlobal => "SET_GLOBAL",
            TokenKind::CurrentMemory => "CURRENT_MEMORY",
            TokenKind::GrowMemory => "GROW_MEMORY",
            TokenKind::Load => "LOAD",
            TokenKind::Store => "STORE",
            TokenKind::Const => "CONST",
            TokenKind::Unary => "UNARY",
            TokenKind::Binary => "BINARY",
            TokenKind::Compare => "COMPARE",
            TokenKind::Convert => "CONVERT",
            TokenKind::Select => "SELECT",
            TokenKind::SimdConst => "SIMD_CONST",
            TokenKind::SimdBuild => "SIMD_BUILD",
            TokenKind::SimdSwizzle => "SIMD_SWIZZLE",
            TokenKind::SimdReplace => "SIMD_REPLACE",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a token carries besides its kind and location.
///
/// Slices borrow the lexer buffer and are only valid until the next call
/// to [`Lexer::next_token`](crate::Lexer::next_token).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TokenValue<'a> {
    None,
    /// Strings (quotes included), `$names`, and the number after
    /// `offset=` / `align=`.
    Text(ByteSlice<'a>),
    Literal(Literal<'a>),
    /// Value type keywords and scalar `*.const`.
    Type(ValueType),
    Opcode(Opcode),
}

impl fmt::Display for TokenValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::None => Ok(()),
            TokenValue::Text(text) => write!(f, "{text}"),
            TokenValue::Literal(literal) => write!(f, "{:?} {}", literal.ty, literal.text),
            TokenValue::Type(ty) => write!(f, "{ty}"),
            TokenValue::Opcode(opcode) => write!(f, "{opcode}"),
        }
    }
}

/// A classified lexeme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: TokenValue<'a>,
    pub location: Location<'a>,
}

impl<'a> Token<'a> {
    pub fn text(&self) -> Option<ByteSlice<'a>> {
        match self.value {
            TokenValue::Text(text) => Some(text),
            TokenValue::Literal(literal) => Some(literal.text),
            _ => None,
        }
    }

    pub fn literal(&self) -> Option<Literal<'a>> {
        match self.value {
            TokenValue::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn value_type(&self) -> Option<ValueType> {
        match self.value {
            TokenValue::Type(ty) => Some(ty),
            _ => None,
        }
    }

    /// The instruction this token names. Scalar `*.const` tokens carry
    /// their type; the opcode is derived from it.
    pub fn opcode(&self) -> Option<Opcode> {
        match (self.kind, self.value) {
            (_, TokenValue::Opcode(opcode)) => Some(opcode),
            (TokenKind::Const, TokenValue::Type(ty)) => Opcode::scalar_const(ty),
            _ => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
