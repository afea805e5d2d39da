//! Shared vocabulary for the WebAssembly text tooling.
//!
//! Everything here is plain data: the opcode table with its per-opcode
//! shape, value types in their binary encoding, literal and external kinds,
//! and the borrowed location/slice types every token carries.
//!
//! The opcode table is a compile-time constant. It is read-only for the
//! lifetime of the process, so any number of lexers on any number of threads
//! can query it without synchronization.

mod external_kind;
mod literal;
mod location;
pub mod opcode;
mod slice;
mod value_type;

pub use external_kind::ExternalKind;
pub use literal::{Literal, LiteralType};
pub use location::Location;
pub use opcode::{
    effective_alignment, is_naturally_aligned, lookup, Opcode, OpcodeClass, OpcodeInfo,
    NATURAL_ALIGNMENT, NUM_OPCODES,
};
pub use slice::ByteSlice;
pub use value_type::ValueType;
