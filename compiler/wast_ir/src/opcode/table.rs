//! The opcode records.
//!
//! One row per defined opcode: mnemonic, class, result type, the two
//! parameter types, bytes of memory accessed and vector lane count.
//! Codes below [`EXTENDED_START`](super::EXTENDED_START) are the scalar
//! instructions; the vector instructions live in the extended bands.

use crate::ValueType;

use super::{Opcode, OpcodeClass, OpcodeInfo};
use OpcodeClass::{
    Binary, Compare, Const, Control, Convert, Load, Memory, Select, Store, Unary, VectorBuild,
    VectorConst, VectorReplace, VectorSwizzle,
};

const ___: ValueType = ValueType::Void;
const I32: ValueType = ValueType::I32;
const I64: ValueType = ValueType::I64;
const F32: ValueType = ValueType::F32;
const F64: ValueType = ValueType::F64;
const M128: ValueType = ValueType::M128;
const B2: ValueType = ValueType::B2;
const B4: ValueType = ValueType::B4;
const B8: ValueType = ValueType::B8;
const B16: ValueType = ValueType::B16;

impl Opcode {
    pub const UNREACHABLE: Opcode = Opcode(0x00);
    pub const NOP: Opcode = Opcode(0x01);
    pub const BLOCK: Opcode = Opcode(0x02);
    pub const LOOP: Opcode = Opcode(0x03);
    pub const IF: Opcode = Opcode(0x04);
    pub const ELSE: Opcode = Opcode(0x05);
    pub const END: Opcode = Opcode(0x0b);
    pub const BR: Opcode = Opcode(0x0c);
    pub const BR_IF: Opcode = Opcode(0x0d);
    pub const BR_TABLE: Opcode = Opcode(0x0e);
    pub const RETURN: Opcode = Opcode(0x0f);
    pub const CALL: Opcode = Opcode(0x10);
    pub const CALL_INDIRECT: Opcode = Opcode(0x11);
    pub const DROP: Opcode = Opcode(0x1a);
    pub const SELECT: Opcode = Opcode(0x1b);
    pub const GET_LOCAL: Opcode = Opcode(0x20);
    pub const SET_LOCAL: Opcode = Opcode(0x21);
    pub const TEE_LOCAL: Opcode = Opcode(0x22);
    pub const GET_GLOBAL: Opcode = Opcode(0x23);
    pub const SET_GLOBAL: Opcode = Opcode(0x24);
    pub const I32_LOAD: Opcode = Opcode(0x28);
    pub const I64_LOAD: Opcode = Opcode(0x29);
    pub const F32_LOAD: Opcode = Opcode(0x2a);
    pub const F64_LOAD: Opcode = Opcode(0x2b);
    pub const I32_LOAD8_S: Opcode = Opcode(0x2c);
    pub const I32_LOAD8_U: Opcode = Opcode(0x2d);
    pub const I32_LOAD16_S: Opcode = Opcode(0x2e);
    pub const I32_LOAD16_U: Opcode = Opcode(0x2f);
    pub const I64_LOAD8_S: Opcode = Opcode(0x30);
    pub const I64_LOAD8_U: Opcode = Opcode(0x31);
    pub const I64_LOAD16_S: Opcode = Opcode(0x32);
    pub const I64_LOAD16_U: Opcode = Opcode(0x33);
    pub const I64_LOAD32_S: Opcode = Opcode(0x34);
    pub const I64_LOAD32_U: Opcode = Opcode(0x35);
    pub const I32_STORE: Opcode = Opcode(0x36);
    pub const I64_STORE: Opcode = Opcode(0x37);
    pub const F32_STORE: Opcode = Opcode(0x38);
    pub const F64_STORE: Opcode = Opcode(0x39);
    pub const I32_STORE8: Opcode = Opcode(0x3a);
    pub const I32_STORE16: Opcode = Opcode(0x3b);
    pub const I64_STORE8: Opcode = Opcode(0x3c);
    pub const I64_STORE16: Opcode = Opcode(0x3d);
    pub const I64_STORE32: Opcode = Opcode(0x3e);
    pub const CURRENT_MEMORY: Opcode = Opcode(0x3f);
    pub const GROW_MEMORY: Opcode = Opcode(0x40);
    pub const I32_CONST: Opcode = Opcode(0x41);
    pub const I64_CONST: Opcode = Opcode(0x42);
    pub const F32_CONST: Opcode = Opcode(0x43);
    pub const F64_CONST: Opcode = Opcode(0x44);
    pub const I32_EQZ: Opcode = Opcode(0x45);
    pub const I32_EQ: Opcode = Opcode(0x46);
    pub const I32_NE: Opcode = Opcode(0x47);
    pub const I32_LT_S: Opcode = Opcode(0x48);
    pub const I32_LT_U: Opcode = Opcode(0x49);
    pub const I32_GT_S: Opcode = Opcode(0x4a);
    pub const I32_GT_U: Opcode = Opcode(0x4b);
    pub const I32_LE_S: Opcode = Opcode(0x4c);
    pub const I32_LE_U: Opcode = Opcode(0x4d);
    pub const I32_GE_S: Opcode = Opcode(0x4e);
    pub const I32_GE_U: Opcode = Opcode(0x4f);
    pub const I64_EQZ: Opcode = Opcode(0x50);
    pub const I64_EQ: Opcode = Opcode(0x51);
    pub const I64_NE: Opcode = Opcode(0x52);
    pub const I64_LT_S: Opcode = Opcode(0x53);
    pub const I64_LT_U: Opcode = Opcode(0x54);
    pub const I64_GT_S: Opcode = Opcode(0x55);
    pub const I64_GT_U: Opcode = Opcode(0x56);
    pub const I64_LE_S: Opcode = Opcode(0x57);
    pub const I64_LE_U: Opcode = Opcode(0x58);
    pub const I64_GE_S: Opcode = Opcode(0x59);
    pub const I64_GE_U: Opcode = Opcode(0x5a);
    pub const F32_EQ: Opcode = Opcode(0x5b);
    pub const F32_NE: Opcode = Opcode(0x5c);
    pub const F32_LT: Opcode = Opcode(0x5d);
    pub const F32_GT: Opcode = Opcode(0x5e);
    pub const F32_LE: Opcode = Opcode(0x5f);
    pub const F32_GE: Opcode = Opcode(0x60);
    pub const F64_EQ: Opcode = Opcode(0x61);
    pub const F64_NE: Opcode = Opcode(0x62);
    pub const F64_LT: Opcode = Opcode(0x63);
    pub const F64_GT: Opcode = Opcode(0x64);
    pub const F64_LE: Opcode = Opcode(0x65);
    pub const F64_GE: Opcode = Opcode(0x66);
    pub const I32_CLZ: Opcode = Opcode(0x67);
    pub const I32_CTZ: Opcode = Opcode(0x68);
    pub const I32_POPCNT: Opcode = Opcode(0x69);
    pub const I32_ADD: Opcode = Opcode(0x6a);
    pub const I32_SUB: Opcode = Opcode(0x6b);
    pub const I32_MUL: Opcode = Opcode(0x6c);
    pub const I32_DIV_S: Opcode = Opcode(0x6d);
    pub const I32_DIV_U: Opcode = Opcode(0x6e);
    pub const I32_REM_S: Opcode = Opcode(0x6f);
    pub const I32_REM_U: Opcode = Opcode(0x70);
    pub const I32_AND: Opcode = Opcode(0x71);
    pub const I32_OR: Opcode = Opcode(0x72);
    pub const I32_XOR: Opcode = Opcode(0x73);
    pub const I32_SHL: Opcode = Opcode(0x74);
    pub const I32_SHR_S: Opcode = Opcode(0x75);
    pub const I32_SHR_U: Opcode = Opcode(0x76);
    pub const I32_ROTL: Opcode = Opcode(0x77);
    pub const I32_ROTR: Opcode = Opcode(0x78);
    pub const I64_CLZ: Opcode = Opcode(0x79);
    pub const I64_CTZ: Opcode = Opcode(0x7a);
    pub const I64_POPCNT: Opcode = Opcode(0x7b);
    pub const I64_ADD: Opcode = Opcode(0x7c);
    pub const I64_SUB: Opcode = Opcode(0x7d);
    pub const I64_MUL: Opcode = Opcode(0x7e);
    pub const I64_DIV_S: Opcode = Opcode(0x7f);
    pub const I64_DIV_U: Opcode = Opcode(0x80);
    pub const I64_REM_S: Opcode = Opcode(0x81);
    pub const I64_REM_U: Opcode = Opcode(0x82);
    pub const I64_AND: Opcode = Opcode(0x83);
    pub const I64_OR: Opcode = Opcode(0x84);
    pub const I64_XOR: Opcode = Opcode(0x85);
    pub const I64_SHL: Opcode = Opcode(0x86);
    pub const I64_SHR_S: Opcode = Opcode(0x87);
    pub const I64_SHR_U: Opcode = Opcode(0x88);
    pub const I64_ROTL: Opcode = Opcode(0x89);
    pub const I64_ROTR: Opcode = Opcode(0x8a);
    pub const F32_ABS: Opcode = Opcode(0x8b);
    pub const F32_NEG: Opcode = Opcode(0x8c);
    pub const F32_CEIL: Opcode = Opcode(0x8d);
    pub const F32_FLOOR: Opcode = Opcode(0x8e);
    pub const F32_TRUNC: Opcode = Opcode(0x8f);
    pub const F32_NEAREST: Opcode = Opcode(0x90);
    pub const F32_SQRT: Opcode = Opcode(0x91);
    pub const F32_ADD: Opcode = Opcode(0x92);
    pub const F32_SUB: Opcode = Opcode(0x93);
    pub const F32_MUL: Opcode = Opcode(0x94);
    pub const F32_DIV: Opcode = Opcode(0x95);
    pub const F32_MIN: Opcode = Opcode(0x96);
    pub const F32_MAX: Opcode = Opcode(0x97);
    pub const F32_COPYSIGN: Opcode = Opcode(0x98);
    pub const F64_ABS: Opcode = Opcode(0x99);
    pub const F64_NEG: Opcode = Opcode(0x9a);
    pub const F64_CEIL: Opcode = Opcode(0x9b);
    pub const F64_FLOOR: Opcode = Opcode(0x9c);
    pub const F64_TRUNC: Opcode = Opcode(0x9d);
    pub const F64_NEAREST: Opcode = Opcode(0x9e);
    pub const F64_SQRT: Opcode = Opcode(0x9f);
    pub const F64_ADD: Opcode = Opcode(0xa0);
    pub const F64_SUB: Opcode = Opcode(0xa1);
    pub const F64_MUL: Opcode = Opcode(0xa2);
    pub const F64_DIV: Opcode = Opcode(0xa3);
    pub const F64_MIN: Opcode = Opcode(0xa4);
    pub const F64_MAX: Opcode = Opcode(0xa5);
    pub const F64_COPYSIGN: Opcode = Opcode(0xa6);
    pub const I32_WRAP_I64: Opcode = Opcode(0xa7);
    pub const I32_TRUNC_S_F32: Opcode = Opcode(0xa8);
    pub const I32_TRUNC_U_F32: Opcode = Opcode(0xa9);
    pub const I32_TRUNC_S_F64: Opcode = Opcode(0xaa);
    pub const I32_TRUNC_U_F64: Opcode = Opcode(0xab);
    pub const I64_EXTEND_S_I32: Opcode = Opcode(0xac);
    pub const I64_EXTEND_U_I32: Opcode = Opcode(0xad);
    pub const I64_TRUNC_S_F32: Opcode = Opcode(0xae);
    pub const I64_TRUNC_U_F32: Opcode = Opcode(0xaf);
    pub const I64_TRUNC_S_F64: Opcode = Opcode(0xb0);
    pub const I64_TRUNC_U_F64: Opcode = Opcode(0xb1);
    pub const F32_CONVERT_S_I32: Opcode = Opcode(0xb2);
    pub const F32_CONVERT_U_I32: Opcode = Opcode(0xb3);
    pub const F32_CONVERT_S_I64: Opcode = Opcode(0xb4);
    pub const F32_CONVERT_U_I64: Opcode = Opcode(0xb5);
    pub const F32_DEMOTE_F64: Opcode = Opcode(0xb6);
    pub const F64_CONVERT_S_I32: Opcode = Opcode(0xb7);
    pub const F64_CONVERT_U_I32: Opcode = Opcode(0xb8);
    pub const F64_CONVERT_S_I64: Opcode = Opcode(0xb9);
    pub const F64_CONVERT_U_I64: Opcode = Opcode(0xba);
    pub const F64_PROMOTE_F32: Opcode = Opcode(0xbb);
    pub const I32_REINTERPRET_F32: Opcode = Opcode(0xbc);
    pub const I64_REINTERPRET_F64: Opcode = Opcode(0xbd);
    pub const F32_REINTERPRET_I32: Opcode = Opcode(0xbe);
    pub const F64_REINTERPRET_I64: Opcode = Opcode(0xbf);
    pub const I64X2_CONST: Opcode = Opcode(0x100);
    pub const I32X4_CONST: Opcode = Opcode(0x101);
    pub const I16X8_CONST: Opcode = Opcode(0x102);
    pub const I8X16_CONST: Opcode = Opcode(0x103);
    pub const B32X4_CONST: Opcode = Opcode(0x105);
    pub const B64X2_CONST: Opcode = Opcode(0x104);
    pub const B16X8_CONST: Opcode = Opcode(0x106);
    pub const B8X16_CONST: Opcode = Opcode(0x107);
    pub const F64X2_CONST: Opcode = Opcode(0x108);
    pub const F32X4_CONST: Opcode = Opcode(0x109);
    pub const I64X2_BUILD: Opcode = Opcode(0x10a);
    pub const I32X4_BUILD: Opcode = Opcode(0x10b);
    pub const I16X8_BUILD: Opcode = Opcode(0x10c);
    pub const I8X16_BUILD: Opcode = Opcode(0x10d);
    pub const B64X2_BUILD: Opcode = Opcode(0x10e);
    pub const B32X4_BUILD: Opcode = Opcode(0x10f);
    pub const B16X8_BUILD: Opcode = Opcode(0x110);
    pub const B8X16_BUILD: Opcode = Opcode(0x111);
    pub const F64X2_BUILD: Opcode = Opcode(0x112);
    pub const F32X4_BUILD: Opcode = Opcode(0x113);
    pub const B8X16_SPLAT: Opcode = Opcode(0x114);
    pub const B8X16_EXTRACT: Opcode = Opcode(0x115);
    pub const B8X16_AND: Opcode = Opcode(0x116);
    pub const B8X16_OR: Opcode = Opcode(0x117);
    pub const B8X16_XOR: Opcode = Opcode(0x118);
    pub const B8X16_NOT: Opcode = Opcode(0x119);
    pub const B8X16_ANYTRUE: Opcode = Opcode(0x11a);
    pub const B8X16_ALLTRUE: Opcode = Opcode(0x11b);
    pub const B16X8_SPLAT: Opcode = Opcode(0x11c);
    pub const B16X8_EXTRACT: Opcode = Opcode(0x11d);
    pub const B16X8_AND: Opcode = Opcode(0x11e);
    pub const B16X8_OR: Opcode = Opcode(0x11f);
    pub const B16X8_XOR: Opcode = Opcode(0x120);
    pub const B16X8_NOT: Opcode = Opcode(0x121);
    pub const B16X8_ANYTRUE: Opcode = Opcode(0x122);
    pub const B16X8_ALLTRUE: Opcode = Opcode(0x123);
    pub const B32X4_SPLAT: Opcode = Opcode(0x124);
    pub const B32X4_EXTRACT: Opcode = Opcode(0x125);
    pub const B32X4_AND: Opcode = Opcode(0x126);
    pub const B32X4_OR: Opcode = Opcode(0x127);
    pub const B32X4_XOR: Opcode = Opcode(0x128);
    pub const B32X4_NOT: Opcode = Opcode(0x129);
    pub const B32X4_ANYTRUE: Opcode = Opcode(0x12a);
    pub const B32X4_ALLTRUE: Opcode = Opcode(0x12b);
    pub const B64X2_SPLAT: Opcode = Opcode(0x12c);
    pub const B64X2_EXTRACT: Opcode = Opcode(0x12d);
    pub const B64X2_AND: Opcode = Opcode(0x12e);
    pub const B64X2_OR: Opcode = Opcode(0x12f);
    pub const B64X2_XOR: Opcode = Opcode(0x130);
    pub const B64X2_NOT: Opcode = Opcode(0x131);
    pub const B64X2_ANYTRUE: Opcode = Opcode(0x132);
    pub const B64X2_ALLTRUE: Opcode = Opcode(0x133);
    pub const I8X16_REINTERPRET_I16X8: Opcode = Opcode(0x134);
    pub const I8X16_REINTERPRET_I32X4: Opcode = Opcode(0x135);
    pub const I8X16_REINTERPRET_I64X2: Opcode = Opcode(0x136);
    pub const I8X16_REINTERPRET_F32X4: Opcode = Opcode(0x137);
    pub const I8X16_REINTERPRET_F64X2: Opcode = Opcode(0x138);
    pub const I8X16_SPLAT: Opcode = Opcode(0x139);
    pub const I8X16_EXTRACT_S: Opcode = Opcode(0x13a);
    pub const I8X16_EXTRACT_U: Opcode = Opcode(0x13b);
    pub const I8X16_ADD: Opcode = Opcode(0x13c);
    pub const I8X16_SUB: Opcode = Opcode(0x13d);
    pub const I8X16_MUL: Opcode = Opcode(0x13e);
    pub const I8X16_NEG: Opcode = Opcode(0x13f);
    pub const I8X16_ADDSATURATE_S: Opcode = Opcode(0x140);
    pub const I8X16_ADDSATURATE_U: Opcode = Opcode(0x141);
    pub const I8X16_SUBSATURATE_S: Opcode = Opcode(0x142);
    pub const I8X16_SUBSATURATE_U: Opcode = Opcode(0x143);
    pub const I8X16_SHL: Opcode = Opcode(0x144);
    pub const I8X16_SHR_S: Opcode = Opcode(0x145);
    pub const I8X16_SHR_U: Opcode = Opcode(0x146);
    pub const I8X16_AND: Opcode = Opcode(0x147);
    pub const I8X16_OR: Opcode = Opcode(0x148);
    pub const I8X16_XOR: Opcode = Opcode(0x149);
    pub const I8X16_NOT: Opcode = Opcode(0x14a);
    pub const I8X16_EQ: Opcode = Opcode(0x14b);
    pub const I8X16_NE: Opcode = Opcode(0x14c);
    pub const I8X16_LT_S: Opcode = Opcode(0x14d);
    pub const I8X16_LT_U: Opcode = Opcode(0x14e);
    pub const I8X16_LE_S: Opcode = Opcode(0x14f);
    pub const I8X16_LE_U: Opcode = Opcode(0x150);
    pub const I8X16_GT_S: Opcode = Opcode(0x151);
    pub const I8X16_GT_U: Opcode = Opcode(0x152);
    pub const I8X16_GE_S: Opcode = Opcode(0x153);
    pub const I8X16_GE_U: Opcode = Opcode(0x154);
    pub const I8X16_LOAD: Opcode = Opcode(0x155);
    pub const I8X16_STORE: Opcode = Opcode(0x156);
    pub const I16X8_REINTERPRET_I8X16: Opcode = Opcode(0x157);
    pub const I16X8_REINTERPRET_I32X4: Opcode = Opcode(0x158);
    pub const I16X8_REINTERPRET_I64X2: Opcode = Opcode(0x159);
    pub const I16X8_REINTERPRET_F32X4: Opcode = Opcode(0x15a);
    pub const I16X8_REINTERPRET_F64X2: Opcode = Opcode(0x15b);
    pub const I16X8_SPLAT: Opcode = Opcode(0x15c);
    pub const I16X8_EXTRACT_S: Opcode = Opcode(0x15d);
    pub const I16X8_EXTRACT_U: Opcode = Opcode(0x15e);
    pub const I16X8_ADD: Opcode = Opcode(0x15f);
    pub const I16X8_SUB: Opcode = Opcode(0x160);
    pub const I16X8_MUL: Opcode = Opcode(0x161);
    pub const I16X8_NEG: Opcode = Opcode(0x162);
    pub const I16X8_ADDSATURATE_S: Opcode = Opcode(0x163);
    pub const I16X8_ADDSATURATE_U: Opcode = Opcode(0x164);
    pub const I16X8_SUBSATURATE_S: Opcode = Opcode(0x165);
    pub const I16X8_SUBSATURATE_U: Opcode = Opcode(0x166);
    pub const I16X8_SHL: Opcode = Opcode(0x167);
    pub const I16X8_SHR_S: Opcode = Opcode(0x168);
    pub const I16X8_SHR_U: Opcode = Opcode(0x169);
    pub const I16X8_AND: Opcode = Opcode(0x16a);
    pub const I16X8_OR: Opcode = Opcode(0x16b);
    pub const I16X8_XOR: Opcode = Opcode(0x16c);
    pub const I16X8_NOT: Opcode = Opcode(0x16d);
    pub const I16X8_EQ: Opcode = Opcode(0x16e);
    pub const I16X8_NE: Opcode = Opcode(0x16f);
    pub const I16X8_LT_S: Opcode = Opcode(0x170);
    pub const I16X8_LT_U: Opcode = Opcode(0x171);
    pub const I16X8_LE_S: Opcode = Opcode(0x172);
    pub const I16X8_LE_U: Opcode = Opcode(0x173);
    pub const I16X8_GT_S: Opcode = Opcode(0x174);
    pub const I16X8_GT_U: Opcode = Opcode(0x175);
    pub const I16X8_GE_S: Opcode = Opcode(0x176);
    pub const I16X8_GE_U: Opcode = Opcode(0x177);
    pub const I16X8_LOAD: Opcode = Opcode(0x178);
    pub const I16X8_STORE: Opcode = Opcode(0x179);
    pub const I32X4_REINTERPRET_I8X16: Opcode = Opcode(0x17a);
    pub const I32X4_REINTERPRET_I16X8: Opcode = Opcode(0x17b);
    pub const I32X4_REINTERPRET_I64X2: Opcode = Opcode(0x17c);
    pub const I32X4_REINTERPRET_F32X4: Opcode = Opcode(0x17d);
    pub const I32X4_REINTERPRET_F64X2: Opcode = Opcode(0x17e);
    pub const I32X4_SPLAT: Opcode = Opcode(0x17f);
    pub const I32X4_EXTRACT: Opcode = Opcode(0x180);
    pub const I32X4_ADD: Opcode = Opcode(0x181);
    pub const I32X4_SUB: Opcode = Opcode(0x182);
    pub const I32X4_MUL: Opcode = Opcode(0x183);
    pub const I32X4_NEG: Opcode = Opcode(0x184);
    pub const I32X4_SHL: Opcode = Opcode(0x185);
    pub const I32X4_SHR_S: Opcode = Opcode(0x186);
    pub const I32X4_SHR_U: Opcode = Opcode(0x187);
    pub const I32X4_AND: Opcode = Opcode(0x188);
    pub const I32X4_OR: Opcode = Opcode(0x189);
    pub const I32X4_XOR: Opcode = Opcode(0x18a);
    pub const I32X4_NOT: Opcode = Opcode(0x18b);
    pub const I32X4_EQ: Opcode = Opcode(0x18c);
    pub const I32X4_NE: Opcode = Opcode(0x18d);
    pub const I32X4_LT_S: Opcode = Opcode(0x18e);
    pub const I32X4_LT_U: Opcode = Opcode(0x18f);
    pub const I32X4_LE_S: Opcode = Opcode(0x190);
    pub const I32X4_LE_U: Opcode = Opcode(0x191);
    pub const I32X4_GT_S: Opcode = Opcode(0x192);
    pub const I32X4_GT_U: Opcode = Opcode(0x193);
    pub const I32X4_GE_S: Opcode = Opcode(0x194);
    pub const I32X4_GE_U: Opcode = Opcode(0x195);
    pub const I32X4_LOAD: Opcode = Opcode(0x196);
    pub const I32X4_STORE: Opcode = Opcode(0x197);
    pub const I32X4_LOAD1: Opcode = Opcode(0x198);
    pub const I32X4_LOAD2: Opcode = Opcode(0x199);
    pub const I32X4_LOAD3: Opcode = Opcode(0x19a);
    pub const I32X4_STORE1: Opcode = Opcode(0x19b);
    pub const I32X4_STORE2: Opcode = Opcode(0x19c);
    pub const I32X4_STORE3: Opcode = Opcode(0x19d);
    pub const I32X4_TRUNC_S: Opcode = Opcode(0x19e);
    pub const I32X4_TRUNC_U: Opcode = Opcode(0x19f);
    pub const I64X2_REINTERPRET_I8X16: Opcode = Opcode(0x1a0);
    pub const I64X2_REINTERPRET_I16X8: Opcode = Opcode(0x1a1);
    pub const I64X2_REINTERPRET_I32X4: Opcode = Opcode(0x1a2);
    pub const I64X2_REINTERPRET_F32X4: Opcode = Opcode(0x1a3);
    pub const I64X2_REINTERPRET_F64X2: Opcode = Opcode(0x1a4);
    pub const I64X2_SPLAT: Opcode = Opcode(0x1a5);
    pub const I64X2_EXTRACT: Opcode = Opcode(0x1a6);
    pub const I64X2_ADD: Opcode = Opcode(0x1a7);
    pub const I64X2_SUB: Opcode = Opcode(0x1a8);
    pub const I64X2_MUL: Opcode = Opcode(0x1a9);
    pub const I64X2_NEG: Opcode = Opcode(0x1aa);
    pub const I64X2_SHL: Opcode = Opcode(0x1ab);
    pub const I64X2_SHR_S: Opcode = Opcode(0x1ac);
    pub const I64X2_SHR_U: Opcode = Opcode(0x1ad);
    pub const I64X2_AND: Opcode = Opcode(0x1ae);
    pub const I64X2_OR: Opcode = Opcode(0x1af);
    pub const I64X2_XOR: Opcode = Opcode(0x1b0);
    pub const I64X2_NOT: Opcode = Opcode(0x1b1);
    pub const I64X2_EQ: Opcode = Opcode(0x1b2);
    pub const I64X2_NE: Opcode = Opcode(0x1b3);
    pub const I64X2_LT_S: Opcode = Opcode(0x1b4);
    pub const I64X2_LT_U: Opcode = Opcode(0x1b5);
    pub const I64X2_LE_S: Opcode = Opcode(0x1b6);
    pub const I64X2_LE_U: Opcode = Opcode(0x1b7);
    pub const I64X2_GT_S: Opcode = Opcode(0x1b8);
    pub const I64X2_GT_U: Opcode = Opcode(0x1b9);
    pub const I64X2_GE_S: Opcode = Opcode(0x1ba);
    pub const I64X2_GE_U: Opcode = Opcode(0x1bb);
    pub const I64X2_LOAD: Opcode = Opcode(0x1bc);
    pub const I64X2_STORE: Opcode = Opcode(0x1bd);
    pub const I64X2_TRUNC_S: Opcode = Opcode(0x1be);
    pub const I64X2_TRUNC_U: Opcode = Opcode(0x1bf);
    pub const F32X4_REINTERPRET_I8X16: Opcode = Opcode(0x1c0);
    pub const F32X4_REINTERPRET_I16X8: Opcode = Opcode(0x1c1);
    pub const F32X4_REINTERPRET_I32X4: Opcode = Opcode(0x1c2);
    pub const F32X4_REINTERPRET_I64X2: Opcode = Opcode(0x1c3);
    pub const F32X4_REINTERPRET_F64X2: Opcode = Opcode(0x1c4);
    pub const F32X4_SPLAT: Opcode = Opcode(0x1c5);
    pub const F32X4_EXTRACT: Opcode = Opcode(0x1c6);
    pub const F32X4_ADD: Opcode = Opcode(0x1c7);
    pub const F32X4_SUB: Opcode = Opcode(0x1c8);
    pub const F32X4_MUL: Opcode = Opcode(0x1c9);
    pub const F32X4_NEG: Opcode = Opcode(0x1ca);
    pub const F32X4_AND: Opcode = Opcode(0x1cb);
    pub const F32X4_OR: Opcode = Opcode(0x1cc);
    pub const F32X4_XOR: Opcode = Opcode(0x1cd);
    pub const F32X4_NOT: Opcode = Opcode(0x1ce);
    pub const F32X4_EQ: Opcode = Opcode(0x1cf);
    pub const F32X4_NE: Opcode = Opcode(0x1d0);
    pub const F32X4_LT: Opcode = Opcode(0x1d1);
    pub const F32X4_LE: Opcode = Opcode(0x1d2);
    pub const F32X4_GT: Opcode = Opcode(0x1d3);
    pub const F32X4_GE: Opcode = Opcode(0x1d4);
    pub const F32X4_LOAD: Opcode = Opcode(0x1d5);
    pub const F32X4_STORE: Opcode = Opcode(0x1d6);
    pub const F32X4_LOAD1: Opcode = Opcode(0x1d7);
    pub const F32X4_LOAD2: Opcode = Opcode(0x1d8);
    pub const F32X4_LOAD3: Opcode = Opcode(0x1d9);
    pub const F32X4_STORE1: Opcode = Opcode(0x1da);
    pub const F32X4_STORE2: Opcode = Opcode(0x1db);
    pub const F32X4_STORE3: Opcode = Opcode(0x1dc);
    pub const F32X4_ABS: Opcode = Opcode(0x1dd);
    pub const F32X4_MIN: Opcode = Opcode(0x1de);
    pub const F32X4_MAX: Opcode = Opcode(0x1df);
    pub const F32X4_DIV: Opcode = Opcode(0x1e0);
    pub const F32X4_SQRT: Opcode = Opcode(0x1e1);
    pub const F32X4_RCP: Opcode = Opcode(0x1e2);
    pub const F32X4_RSQRT: Opcode = Opcode(0x1e3);
    pub const F32X4_CONVERT_S: Opcode = Opcode(0x1e4);
    pub const F32X4_CONVERT_U: Opcode = Opcode(0x1e5);
    pub const F64X2_REINTERPRET_I8X16: Opcode = Opcode(0x1e6);
    pub const F64X2_REINTERPRET_I16X8: Opcode = Opcode(0x1e7);
    pub const F64X2_REINTERPRET_I32X4: Opcode = Opcode(0x1e8);
    pub const F64X2_REINTERPRET_I64X2: Opcode = Opcode(0x1e9);
    pub const F64X2_REINTERPRET_F32X4: Opcode = Opcode(0x1ea);
    pub const F64X2_SPLAT: Opcode = Opcode(0x1eb);
    pub const F64X2_EXTRACT: Opcode = Opcode(0x1ec);
    pub const F64X2_ADD: Opcode = Opcode(0x1ed);
    pub const F64X2_SUB: Opcode = Opcode(0x1ee);
    pub const F64X2_MUL: Opcode = Opcode(0x1ef);
    pub const F64X2_NEG: Opcode = Opcode(0x1f0);
    pub const F64X2_AND: Opcode = Opcode(0x1f1);
    pub const F64X2_OR: Opcode = Opcode(0x1f2);
    pub const F64X2_XOR: Opcode = Opcode(0x1f3);
    pub const F64X2_NOT: Opcode = Opcode(0x1f4);
    pub const F64X2_EQ: Opcode = Opcode(0x1f5);
    pub const F64X2_NE: Opcode = Opcode(0x1f6);
    pub const F64X2_LT: Opcode = Opcode(0x1f7);
    pub const F64X2_LE: Opcode = Opcode(0x1f8);
    pub const F64X2_GT: Opcode = Opcode(0x1f9);
    pub const F64X2_GE: Opcode = Opcode(0x1fa);
    pub const F64X2_LOAD: Opcode = Opcode(0x1fb);
    pub const F64X2_STORE: Opcode = Opcode(0x1fc);
    pub const F64X2_ABS: Opcode = Opcode(0x1fd);
    pub const F64X2_MIN: Opcode = Opcode(0x1fe);
    pub const F64X2_MAX: Opcode = Opcode(0x1ff);
    pub const F64X2_DIV: Opcode = Opcode(0x200);
    pub const F64X2_SQRT: Opcode = Opcode(0x201);
    pub const F64X2_RCP: Opcode = Opcode(0x202);
    pub const F64X2_RSQRT: Opcode = Opcode(0x203);
    pub const F64X2_CONVERT_S: Opcode = Opcode(0x204);
    pub const F64X2_CONVERT_U: Opcode = Opcode(0x205);
    pub const I64X2_SWIZZLE: Opcode = Opcode(0x206);
    pub const I64X2_SHUFFLE: Opcode = Opcode(0x207);
    pub const I64X2_SELECT: Opcode = Opcode(0x208);
    pub const I64X2_REPLACE: Opcode = Opcode(0x209);
    pub const I32X4_SWIZZLE: Opcode = Opcode(0x20a);
    pub const I32X4_SHUFFLE: Opcode = Opcode(0x20b);
    pub const I32X4_SELECT: Opcode = Opcode(0x20c);
    pub const I32X4_REPLACE: Opcode = Opcode(0x20d);
    pub const I16X8_SWIZZLE: Opcode = Opcode(0x20e);
    pub const I16X8_SHUFFLE: Opcode = Opcode(0x20f);
    pub const I16X8_SELECT: Opcode = Opcode(0x210);
    pub const I16X8_REPLACE: Opcode = Opcode(0x211);
    pub const I8X16_SWIZZLE: Opcode = Opcode(0x212);
    pub const I8X16_SHUFFLE: Opcode = Opcode(0x213);
    pub const I8X16_SELECT: Opcode = Opcode(0x214);
    pub const I8X16_REPLACE: Opcode = Opcode(0x215);
    pub const B64X2_SWIZZLE: Opcode = Opcode(0x216);
    pub const B64X2_SHUFFLE: Opcode = Opcode(0x217);
    pub const B64X2_SELECT: Opcode = Opcode(0x218);
    pub const B64X2_REPLACE: Opcode = Opcode(0x219);
    pub const B32X4_SWIZZLE: Opcode = Opcode(0x21a);
    pub const B32X4_SHUFFLE: Opcode = Opcode(0x21b);
    pub const B32X4_SELECT: Opcode = Opcode(0x21c);
    pub const B32X4_REPLACE: Opcode = Opcode(0x21d);
    pub const B16X8_SWIZZLE: Opcode = Opcode(0x21e);
    pub const B16X8_SHUFFLE: Opcode = Opcode(0x21f);
    pub const B16X8_SELECT: Opcode = Opcode(0x220);
    pub const B16X8_REPLACE: Opcode = Opcode(0x221);
    pub const B8X16_SWIZZLE: Opcode = Opcode(0x222);
    pub const B8X16_SHUFFLE: Opcode = Opcode(0x223);
    pub const B8X16_SELECT: Opcode = Opcode(0x224);
    pub const B8X16_REPLACE: Opcode = Opcode(0x225);
    pub const F64X2_SWIZZLE: Opcode = Opcode(0x226);
    pub const F64X2_SHUFFLE: Opcode = Opcode(0x227);
    pub const F64X2_SELECT: Opcode = Opcode(0x228);
    pub const F64X2_REPLACE: Opcode = Opcode(0x229);
    pub const F32X4_SWIZZLE: Opcode = Opcode(0x22a);
    pub const F32X4_SHUFFLE: Opcode = Opcode(0x22b);
    pub const F32X4_SELECT: Opcode = Opcode(0x22c);
    pub const F32X4_REPLACE: Opcode = Opcode(0x22d);
}

#[allow(clippy::too_many_arguments)]
const fn op(
    opcode: Opcode,
    name: &'static str,
    class: OpcodeClass,
    result_type: ValueType,
    param1_type: ValueType,
    param2_type: ValueType,
    memory_size: u32,
    lanes: u8,
) -> (Opcode, OpcodeInfo) {
    (
        opcode,
        OpcodeInfo {
            name,
            class,
            result_type,
            param1_type,
            param2_type,
            memory_size,
            lanes,
        },
    )
}

#[rustfmt::skip]
pub(super) const RECORDS: &[(Opcode, OpcodeInfo)] = &[
    op(Opcode::UNREACHABLE, "unreachable", Control, ___, ___, ___, 0, 0),
    op(Opcode::NOP, "nop", Control, ___, ___, ___, 0, 0),
    op(Opcode::BLOCK, "block", Control, ___, ___, ___, 0, 0),
    op(Opcode::LOOP, "loop", Control, ___, ___, ___, 0, 0),
    op(Opcode::IF, "if", Control, ___, ___, ___, 0, 0),
    op(Opcode::ELSE, "else", Control, ___, ___, ___, 0, 0),
    op(Opcode::END, "end", Control, ___, ___, ___, 0, 0),
    op(Opcode::BR, "br", Control, ___, ___, ___, 0, 0),
    op(Opcode::BR_IF, "br_if", Control, ___, ___, ___, 0, 0),
    op(Opcode::BR_TABLE, "br_table", Control, ___, ___, ___, 0, 0),
    op(Opcode::RETURN, "return", Control, ___, ___, ___, 0, 0),
    op(Opcode::CALL, "call", Control, ___, ___, ___, 0, 0),
    op(Opcode::CALL_INDIRECT, "call_indirect", Control, ___, ___, ___, 0, 0),
    op(Opcode::DROP, "drop", Control, ___, ___, ___, 0, 0),
    op(Opcode::SELECT, "select", Select, ___, ___, ___, 0, 0),
    op(Opcode::GET_LOCAL, "get_local", Control, ___, ___, ___, 0, 0),
    op(Opcode::SET_LOCAL, "set_local", Control, ___, ___, ___, 0, 0),
    op(Opcode::TEE_LOCAL, "tee_local", Control, ___, ___, ___, 0, 0),
    op(Opcode::GET_GLOBAL, "get_global", Control, ___, ___, ___, 0, 0),
    op(Opcode::SET_GLOBAL, "set_global", Control, ___, ___, ___, 0, 0),
    op(Opcode::I32_LOAD, "i32.load", Load, I32, I32, ___, 4, 0),
    op(Opcode::I64_LOAD, "i64.load", Load, I64, I32, ___, 8, 0),
    op(Opcode::F32_LOAD, "f32.load", Load, F32, I32, ___, 4, 0),
    op(Opcode::F64_LOAD, "f64.load", Load, F64, I32, ___, 8, 0),
    op(Opcode::I32_LOAD8_S, "i32.load8_s", Load, I32, I32, ___, 1, 0),
    op(Opcode::I32_LOAD8_U, "i32.load8_u", Load, I32, I32, ___, 1, 0),
    op(Opcode::I32_LOAD16_S, "i32.load16_s", Load, I32, I32, ___, 2, 0),
    op(Opcode::I32_LOAD16_U, "i32.load16_u", Load, I32, I32, ___, 2, 0),
    op(Opcode::I64_LOAD8_S, "i64.load8_s", Load, I64, I32, ___, 1, 0),
    op(Opcode::I64_LOAD8_U, "i64.load8_u", Load, I64, I32, ___, 1, 0),
    op(Opcode::I64_LOAD16_S, "i64.load16_s", Load, I64, I32, ___, 2, 0),
    op(Opcode::I64_LOAD16_U, "i64.load16_u", Load, I64, I32, ___, 2, 0),
    op(Opcode::I64_LOAD32_S, "i64.load32_s", Load, I64, I32, ___, 4, 0),
    op(Opcode::I64_LOAD32_U, "i64.load32_u", Load, I64, I32, ___, 4, 0),
    op(Opcode::I32_STORE, "i32.store", Store, ___, I32, I32, 4, 0),
    op(Opcode::I64_STORE, "i64.store", Store, ___, I32, I64, 8, 0),
    op(Opcode::F32_STORE, "f32.store", Store, ___, I32, F32, 4, 0),
    op(Opcode::F64_STORE, "f64.store", Store, ___, I32, F64, 8, 0),
    op(Opcode::I32_STORE8, "i32.store8", Store, ___, I32, I32, 1, 0),
    op(Opcode::I32_STORE16, "i32.store16", Store, ___, I32, I32, 2, 0),
    op(Opcode::I64_STORE8, "i64.store8", Store, ___, I32, I64, 1, 0),
    op(Opcode::I64_STORE16, "i64.store16", Store, ___, I32, I64, 2, 0),
    op(Opcode::I64_STORE32, "i64.store32", Store, ___, I32, I64, 4, 0),
    op(Opcode::CURRENT_MEMORY, "current_memory", Memory, I32, ___, ___, 0, 0),
    op(Opcode::GROW_MEMORY, "grow_memory", Memory, I32, I32, ___, 0, 0),
    op(Opcode::I32_CONST, "i32.const", Const, I32, ___, ___, 0, 0),
    op(Opcode::I64_CONST, "i64.const", Const, I64, ___, ___, 0, 0),
    op(Opcode::F32_CONST, "f32.const", Const, F32, ___, ___, 0, 0),
    op(Opcode::F64_CONST, "f64.const", Const, F64, ___, ___, 0, 0),
    op(Opcode::I32_EQZ, "i32.eqz", Convert, I32, I32, ___, 0, 0),
    op(Opcode::I32_EQ, "i32.eq", Compare, I32, I32, I32, 0, 0),
    op(Opcode::I32_NE, "i32.ne", Compare, I32, I32, I32, 0, 0),
    op(Opcode::I32_LT_S, "i32.lt_s", Compare, I32, I32, I32, 0, 0),
    op(Opcode::I32_LT_U, "i32.lt_u", Compare, I32, I32, I32, 0, 0),
    op(Opcode::I32_GT_S, "i32.gt_s", Compare, I32, I32, I32, 0, 0),
    op(Opcode::I32_GT_U, "i32.gt_u", Compare, I32, I32, I32, 0, 0),
    op(Opcode::I32_LE_S, "i32.le_s", Compare, I32, I32, I32, 0, 0),
    op(Opcode::I32_LE_U, "i32.le_u", Compare, I32, I32, I32, 0, 0),
    op(Opcode::I32_GE_S, "i32.ge_s", Compare, I32, I32, I32, 0, 0),
    op(Opcode::I32_GE_U, "i32.ge_u", Compare, I32, I32, I32, 0, 0),
    op(Opcode::I64_EQZ, "i64.eqz", Convert, I32, I64, ___, 0, 0),
    op(Opcode::I64_EQ, "i64.eq", Compare, I32, I64, I64, 0, 0),
    op(Opcode::I64_NE, "i64.ne", Compare, I32, I64, I64, 0, 0),
    op(Opcode::I64_LT_S, "i64.lt_s", Compare, I32, I64, I64, 0, 0),
    op(Opcode::I64_LT_U, "i64.lt_u", Compare, I32, I64, I64, 0, 0),
    op(Opcode::I64_GT_S, "i64.gt_s", Compare, I32, I64, I64, 0, 0),
    op(Opcode::I64_GT_U, "i64.gt_u", Compare, I32, I64, I64, 0, 0),
    op(Opcode::I64_LE_S, "i64.le_s", Compare, I32, I64, I64, 0, 0),
    op(Opcode::I64_LE_U, "i64.le_u", Compare, I32, I64, I64, 0, 0),
    op(Opcode::I64_GE_S, "i64.ge_s", Compare, I32, I64, I64, 0, 0),
    op(Opcode::I64_GE_U, "i64.ge_u", Compare, I32, I64, I64, 0, 0),
    op(Opcode::F32_EQ, "f32.eq", Compare, I32, F32, F32, 0, 0),
    op(Opcode::F32_NE, "f32.ne", Compare, I32, F32, F32, 0, 0),
    op(Opcode::F32_LT, "f32.lt", Compare, I32, F32, F32, 0, 0),
    op(Opcode::F32_GT, "f32.gt", Compare, I32, F32, F32, 0, 0),
    op(Opcode::F32_LE, "f32.le", Compare, I32, F32, F32, 0, 0),
    op(Opcode::F32_GE, "f32.ge", Compare, I32, F32, F32, 0, 0),
    op(Opcode::F64_EQ, "f64.eq", Compare, I32, F64, F64, 0, 0),
    op(Opcode::F64_NE, "f64.ne", Compare, I32, F64, F64, 0, 0),
    op(Opcode::F64_LT, "f64.lt", Compare, I32, F64, F64, 0, 0),
    op(Opcode::F64_GT, "f64.gt", Compare, I32, F64, F64, 0, 0),
    op(Opcode::F64_LE, "f64.le", Compare, I32, F64, F64, 0, 0),
    op(Opcode::F64_GE, "f64.ge", Compare, I32, F64, F64, 0, 0),
    op(Opcode::I32_CLZ, "i32.clz", Unary, I32, I32, ___, 0, 0),
    op(Opcode::I32_CTZ, "i32.ctz", Unary, I32, I32, ___, 0, 0),
    op(Opcode::I32_POPCNT, "i32.popcnt", Unary, I32, I32, ___, 0, 0),
    op(Opcode::I32_ADD, "i32.add", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_SUB, "i32.sub", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_MUL, "i32.mul", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_DIV_S, "i32.div_s", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_DIV_U, "i32.div_u", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_REM_S, "i32.rem_s", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_REM_U, "i32.rem_u", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_AND, "i32.and", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_OR, "i32.or", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_XOR, "i32.xor", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_SHL, "i32.shl", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_SHR_S, "i32.shr_s", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_SHR_U, "i32.shr_u", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_ROTL, "i32.rotl", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I32_ROTR, "i32.rotr", Binary, I32, I32, I32, 0, 0),
    op(Opcode::I64_CLZ, "i64.clz", Unary, I64, I64, ___, 0, 0),
    op(Opcode::I64_CTZ, "i64.ctz", Unary, I64, I64, ___, 0, 0),
    op(Opcode::I64_POPCNT, "i64.popcnt", Unary, I64, I64, ___, 0, 0),
    op(Opcode::I64_ADD, "i64.add", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_SUB, "i64.sub", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_MUL, "i64.mul", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_DIV_S, "i64.div_s", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_DIV_U, "i64.div_u", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_REM_S, "i64.rem_s", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_REM_U, "i64.rem_u", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_AND, "i64.and", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_OR, "i64.or", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_XOR, "i64.xor", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_SHL, "i64.shl", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_SHR_S, "i64.shr_s", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_SHR_U, "i64.shr_u", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_ROTL, "i64.rotl", Binary, I64, I64, I64, 0, 0),
    op(Opcode::I64_ROTR, "i64.rotr", Binary, I64, I64, I64, 0, 0),
    op(Opcode::F32_ABS, "f32.abs", Unary, F32, F32, ___, 0, 0),
    op(Opcode::F32_NEG, "f32.neg", Unary, F32, F32, ___, 0, 0),
    op(Opcode::F32_CEIL, "f32.ceil", Unary, F32, F32, ___, 0, 0),
    op(Opcode::F32_FLOOR, "f32.floor", Unary, F32, F32, ___, 0, 0),
    op(Opcode::F32_TRUNC, "f32.trunc", Unary, F32, F32, ___, 0, 0),
    op(Opcode::F32_NEAREST, "f32.nearest", Unary, F32, F32, ___, 0, 0),
    op(Opcode::F32_SQRT, "f32.sqrt", Unary, F32, F32, ___, 0, 0),
    op(Opcode::F32_ADD, "f32.add", Binary, F32, F32, F32, 0, 0),
    op(Opcode::F32_SUB, "f32.sub", Binary, F32, F32, F32, 0, 0),
    op(Opcode::F32_MUL, "f32.mul", Binary, F32, F32, F32, 0, 0),
    op(Opcode::F32_DIV, "f32.div", Binary, F32, F32, F32, 0, 0),
    op(Opcode::F32_MIN, "f32.min", Binary, F32, F32, F32, 0, 0),
    op(Opcode::F32_MAX, "f32.max", Binary, F32, F32, F32, 0, 0),
    op(Opcode::F32_COPYSIGN, "f32.copysign", Binary, F32, F32, F32, 0, 0),
    op(Opcode::F64_ABS, "f64.abs", Unary, F64, F64, ___, 0, 0),
    op(Opcode::F64_NEG, "f64.neg", Unary, F64, F64, ___, 0, 0),
    op(Opcode::F64_CEIL, "f64.ceil", Unary, F64, F64, ___, 0, 0),
    op(Opcode::F64_FLOOR, "f64.floor", Unary, F64, F64, ___, 0, 0),
    op(Opcode::F64_TRUNC, "f64.trunc", Unary, F64, F64, ___, 0, 0),
    op(Opcode::F64_NEAREST, "f64.nearest", Unary, F64, F64, ___, 0, 0),
    op(Opcode::F64_SQRT, "f64.sqrt", Unary, F64, F64, ___, 0, 0),
    op(Opcode::F64_ADD, "f64.add", Binary, F64, F64, F64, 0, 0),
    op(Opcode::F64_SUB, "f64.sub", Binary, F64, F64, F64, 0, 0),
    op(Opcode::F64_MUL, "f64.mul", Binary, F64, F64, F64, 0, 0),
    op(Opcode::F64_DIV, "f64.div", Binary, F64, F64, F64, 0, 0),
    op(Opcode::F64_MIN, "f64.min", Binary, F64, F64, F64, 0, 0),
    op(Opcode::F64_MAX, "f64.max", Binary, F64, F64, F64, 0, 0),
    op(Opcode::F64_COPYSIGN, "f64.copysign", Binary, F64, F64, F64, 0, 0),
    op(Opcode::I32_WRAP_I64, "i32.wrap/i64", Convert, I32, I64, ___, 0, 0),
    op(Opcode::I32_TRUNC_S_F32, "i32.trunc_s/f32", Convert, I32, F32, ___, 0, 0),
    op(Opcode::I32_TRUNC_U_F32, "i32.trunc_u/f32", Convert, I32, F32, ___, 0, 0),
    op(Opcode::I32_TRUNC_S_F64, "i32.trunc_s/f64", Convert, I32, F64, ___, 0, 0),
    op(Opcode::I32_TRUNC_U_F64, "i32.trunc_u/f64", Convert, I32, F64, ___, 0, 0),
    op(Opcode::I64_EXTEND_S_I32, "i64.extend_s/i32", Convert, I64, I32, ___, 0, 0),
    op(Opcode::I64_EXTEND_U_I32, "i64.extend_u/i32", Convert, I64, I32, ___, 0, 0),
    op(Opcode::I64_TRUNC_S_F32, "i64.trunc_s/f32", Convert, I64, F32, ___, 0, 0),
    op(Opcode::I64_TRUNC_U_F32, "i64.trunc_u/f32", Convert, I64, F32, ___, 0, 0),
    op(Opcode::I64_TRUNC_S_F64, "i64.trunc_s/f64", Convert, I64, F64, ___, 0, 0),
    op(Opcode::I64_TRUNC_U_F64, "i64.trunc_u/f64", Convert, I64, F64, ___, 0, 0),
    op(Opcode::F32_CONVERT_S_I32, "f32.convert_s/i32", Convert, F32, I32, ___, 0, 0),
    op(Opcode::F32_CONVERT_U_I32, "f32.convert_u/i32", Convert, F32, I32, ___, 0, 0),
    op(Opcode::F32_CONVERT_S_I64, "f32.convert_s/i64", Convert, F32, I64, ___, 0, 0),
    op(Opcode::F32_CONVERT_U_I64, "f32.convert_u/i64", Convert, F32, I64, ___, 0, 0),
    op(Opcode::F32_DEMOTE_F64, "f32.demote/f64", Convert, F32, F64, ___, 0, 0),
    op(Opcode::F64_CONVERT_S_I32, "f64.convert_s/i32", Convert, F64, I32, ___, 0, 0),
    op(Opcode::F64_CONVERT_U_I32, "f64.convert_u/i32", Convert, F64, I32, ___, 0, 0),
    op(Opcode::F64_CONVERT_S_I64, "f64.convert_s/i64", Convert, F64, I64, ___, 0, 0),
    op(Opcode::F64_CONVERT_U_I64, "f64.convert_u/i64", Convert, F64, I64, ___, 0, 0),
    op(Opcode::F64_PROMOTE_F32, "f64.promote/f32", Convert, F64, F32, ___, 0, 0),
    op(Opcode::I32_REINTERPRET_F32, "i32.reinterpret/f32", Convert, I32, F32, ___, 0, 0),
    op(Opcode::I64_REINTERPRET_F64, "i64.reinterpret/f64", Convert, I64, F64, ___, 0, 0),
    op(Opcode::F32_REINTERPRET_I32, "f32.reinterpret/i32", Convert, F32, I32, ___, 0, 0),
    op(Opcode::F64_REINTERPRET_I64, "f64.reinterpret/i64", Convert, F64, I64, ___, 0, 0),
    op(Opcode::I64X2_CONST, "i64x2.const", VectorConst, M128, I64, ___, 0, 2),
    op(Opcode::I32X4_CONST, "i32x4.const", VectorConst, M128, I32, ___, 0, 4),
    op(Opcode::I16X8_CONST, "i16x8.const", VectorConst, M128, I32, ___, 0, 8),
    op(Opcode::I8X16_CONST, "i8x16.const", VectorConst, M128, I32, ___, 0, 16),
    op(Opcode::B32X4_CONST, "b32x4.const", VectorConst, B4, I32, ___, 0, 4),
    op(Opcode::B64X2_CONST, "b64x2.const", VectorConst, B2, I64, ___, 0, 2),
    op(Opcode::B16X8_CONST, "b16x8.const", VectorConst, B8, I32, ___, 0, 8),
    op(Opcode::B8X16_CONST, "b8x16.const", VectorConst, B16, I32, ___, 0, 16),
    op(Opcode::F64X2_CONST, "f64x2.const", VectorConst, M128, F64, ___, 0, 2),
    op(Opcode::F32X4_CONST, "f32x4.const", VectorConst, M128, F32, ___, 0, 4),
    op(Opcode::I64X2_BUILD, "i64x2.build", VectorBuild, M128, I64, ___, 0, 2),
    op(Opcode::I32X4_BUILD, "i32x4.build", VectorBuild, M128, I32, ___, 0, 4),
    op(Opcode::I16X8_BUILD, "i16x8.build", VectorBuild, M128, I32, ___, 0, 8),
    op(Opcode::I8X16_BUILD, "i8x16.build", VectorBuild, M128, I32, ___, 0, 16),
    op(Opcode::B64X2_BUILD, "b64x2.build", VectorBuild, B2, I64, ___, 0, 2),
    op(Opcode::B32X4_BUILD, "b32x4.build", VectorBuild, B4, I32, ___, 0, 4),
    op(Opcode::B16X8_BUILD, "b16x8.build", VectorBuild, B8, I32, ___, 0, 8),
    op(Opcode::B8X16_BUILD, "b8x16.build", VectorBuild, B16, I32, ___, 0, 16),
    op(Opcode::F64X2_BUILD, "f64x2.build", VectorBuild, M128, F64, ___, 0, 2),
    op(Opcode::F32X4_BUILD, "f32x4.build", VectorBuild, M128, F32, ___, 0, 4),
    op(Opcode::B8X16_SPLAT, "b8x16.splat", Unary, B16, I32, ___, 0, 16),
    op(Opcode::B8X16_EXTRACT, "b8x16.extract", Binary, I32, B16, I32, 0, 16),
    op(Opcode::B8X16_AND, "b8x16.and", Binary, B16, B16, B16, 0, 16),
    op(Opcode::B8X16_OR, "b8x16.or", Binary, B16, B16, B16, 0, 16),
    op(Opcode::B8X16_XOR, "b8x16.xor", Binary, B16, B16, B16, 0, 16),
    op(Opcode::B8X16_NOT, "b8x16.not", Unary, B16, B16, ___, 0, 16),
    op(Opcode::B8X16_ANYTRUE, "b8x16.anytrue", Unary, I32, B16, ___, 0, 16),
    op(Opcode::B8X16_ALLTRUE, "b8x16.alltrue", Unary, I32, B16, ___, 0, 16),
    op(Opcode::B16X8_SPLAT, "b16x8.splat", Unary, B8, I32, ___, 0, 8),
    op(Opcode::B16X8_EXTRACT, "b16x8.extract", Binary, I32, B8, I32, 0, 8),
    op(Opcode::B16X8_AND, "b16x8.and", Binary, B8, B8, B8, 0, 8),
    op(Opcode::B16X8_OR, "b16x8.or", Binary, B8, B8, B8, 0, 8),
    op(Opcode::B16X8_XOR, "b16x8.xor", Binary, B8, B8, B8, 0, 8),
    op(Opcode::B16X8_NOT, "b16x8.not", Unary, B8, B8, ___, 0, 8),
    op(Opcode::B16X8_ANYTRUE, "b16x8.anytrue", Unary, I32, B8, ___, 0, 8),
    op(Opcode::B16X8_ALLTRUE, "b16x8.alltrue", Unary, I32, B8, ___, 0, 8),
    op(Opcode::B32X4_SPLAT, "b32x4.splat", Unary, B4, I32, ___, 0, 4),
    op(Opcode::B32X4_EXTRACT, "b32x4.extract", Binary, I32, B4, I32, 0, 4),
    op(Opcode::B32X4_AND, "b32x4.and", Binary, B4, B4, B4, 0, 4),
    op(Opcode::B32X4_OR, "b32x4.or", Binary, B4, B4, B4, 0, 4),
    op(Opcode::B32X4_XOR, "b32x4.xor", Binary, B4, B4, B4, 0, 4),
    op(Opcode::B32X4_NOT, "b32x4.not", Unary, B4, B4, ___, 0, 4),
    op(Opcode::B32X4_ANYTRUE, "b32x4.anytrue", Unary, I32, B4, ___, 0, 4),
    op(Opcode::B32X4_ALLTRUE, "b32x4.alltrue", Unary, I32, B4, ___, 0, 4),
    op(Opcode::B64X2_SPLAT, "b64x2.splat", Unary, B2, I32, ___, 0, 2),
    op(Opcode::B64X2_EXTRACT, "b64x2.extract", Binary, I32, B2, I32, 0, 2),
    op(Opcode::B64X2_AND, "b64x2.and", Binary, B2, B2, B2, 0, 2),
    op(Opcode::B64X2_OR, "b64x2.or", Binary, B2, B2, B2, 0, 2),
    op(Opcode::B64X2_XOR, "b64x2.xor", Binary, B2, B2, B2, 0, 2),
    op(Opcode::B64X2_NOT, "b64x2.not", Unary, B2, B2, ___, 0, 2),
    op(Opcode::B64X2_ANYTRUE, "b64x2.anytrue", Unary, I32, B2, ___, 0, 2),
    op(Opcode::B64X2_ALLTRUE, "b64x2.alltrue", Unary, I32, B2, ___, 0, 2),
    op(Opcode::I8X16_REINTERPRET_I16X8, "i8x16.reinterpret_i16x8", Convert, M128, M128, ___, 0, 16),
    op(Opcode::I8X16_REINTERPRET_I32X4, "i8x16.reinterpret_i32x4", Convert, M128, M128, ___, 0, 16),
    op(Opcode::I8X16_REINTERPRET_I64X2, "i8x16.reinterpret_i64x2", Convert, M128, M128, ___, 0, 16),
    op(Opcode::I8X16_REINTERPRET_F32X4, "i8x16.reinterpret_f32x4", Convert, M128, M128, ___, 0, 16),
    op(Opcode::I8X16_REINTERPRET_F64X2, "i8x16.reinterpret_f64x2", Convert, M128, M128, ___, 0, 16),
    op(Opcode::I8X16_SPLAT, "i8x16.splat", Unary, M128, I32, ___, 0, 16),
    op(Opcode::I8X16_EXTRACT_S, "i8x16.extract_s", Binary, I32, M128, I32, 0, 16),
    op(Opcode::I8X16_EXTRACT_U, "i8x16.extract_u", Binary, I32, M128, I32, 0, 16),
    op(Opcode::I8X16_ADD, "i8x16.add", Binary, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_SUB, "i8x16.sub", Binary, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_MUL, "i8x16.mul", Binary, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_NEG, "i8x16.neg", Unary, M128, M128, ___, 0, 16),
    op(Opcode::I8X16_ADDSATURATE_S, "i8x16.addsaturate_s", Binary, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_ADDSATURATE_U, "i8x16.addsaturate_u", Binary, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_SUBSATURATE_S, "i8x16.subsaturate_s", Binary, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_SUBSATURATE_U, "i8x16.subsaturate_u", Binary, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_SHL, "i8x16.shl", Binary, M128, M128, I32, 0, 16),
    op(Opcode::I8X16_SHR_S, "i8x16.shr_s", Binary, M128, M128, I32, 0, 16),
    op(Opcode::I8X16_SHR_U, "i8x16.shr_u", Binary, M128, M128, I32, 0, 16),
    op(Opcode::I8X16_AND, "i8x16.and", Binary, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_OR, "i8x16.or", Binary, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_XOR, "i8x16.xor", Binary, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_NOT, "i8x16.not", Unary, M128, M128, ___, 0, 16),
    op(Opcode::I8X16_EQ, "i8x16.eq", Compare, B16, M128, M128, 0, 16),
    op(Opcode::I8X16_NE, "i8x16.ne", Compare, B16, M128, M128, 0, 16),
    op(Opcode::I8X16_LT_S, "i8x16.lt_s", Compare, B16, M128, M128, 0, 16),
    op(Opcode::I8X16_LT_U, "i8x16.lt_u", Compare, B16, M128, M128, 0, 16),
    op(Opcode::I8X16_LE_S, "i8x16.le_s", Compare, B16, M128, M128, 0, 16),
    op(Opcode::I8X16_LE_U, "i8x16.le_u", Compare, B16, M128, M128, 0, 16),
    op(Opcode::I8X16_GT_S, "i8x16.gt_s", Compare, B16, M128, M128, 0, 16),
    op(Opcode::I8X16_GT_U, "i8x16.gt_u", Compare, B16, M128, M128, 0, 16),
    op(Opcode::I8X16_GE_S, "i8x16.ge_s", Compare, B16, M128, M128, 0, 16),
    op(Opcode::I8X16_GE_U, "i8x16.ge_u", Compare, B16, M128, M128, 0, 16),
    op(Opcode::I8X16_LOAD, "i8x16.load", Load, M128, I32, ___, 16, 16),
    op(Opcode::I8X16_STORE, "i8x16.store", Store, ___, I32, M128, 16, 16),
    op(Opcode::I16X8_REINTERPRET_I8X16, "i16x8.reinterpret_i8x16", Convert, M128, M128, ___, 0, 8),
    op(Opcode::I16X8_REINTERPRET_I32X4, "i16x8.reinterpret_i32x4", Convert, M128, M128, ___, 0, 8),
    op(Opcode::I16X8_REINTERPRET_I64X2, "i16x8.reinterpret_i64x2", Convert, M128, M128, ___, 0, 8),
    op(Opcode::I16X8_REINTERPRET_F32X4, "i16x8.reinterpret_f32x4", Convert, M128, M128, ___, 0, 8),
    op(Opcode::I16X8_REINTERPRET_F64X2, "i16x8.reinterpret_f64x2", Convert, M128, M128, ___, 0, 8),
    op(Opcode::I16X8_SPLAT, "i16x8.splat", Unary, M128, I32, ___, 0, 8),
    op(Opcode::I16X8_EXTRACT_S, "i16x8.extract_s", Binary, I32, M128, I32, 0, 8),
    op(Opcode::I16X8_EXTRACT_U, "i16x8.extract_u", Binary, I32, M128, I32, 0, 8),
    op(Opcode::I16X8_ADD, "i16x8.add", Binary, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_SUB, "i16x8.sub", Binary, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_MUL, "i16x8.mul", Binary, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_NEG, "i16x8.neg", Unary, M128, M128, ___, 0, 8),
    op(Opcode::I16X8_ADDSATURATE_S, "i16x8.addsaturate_s", Binary, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_ADDSATURATE_U, "i16x8.addsaturate_u", Binary, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_SUBSATURATE_S, "i16x8.subsaturate_s", Binary, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_SUBSATURATE_U, "i16x8.subsaturate_u", Binary, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_SHL, "i16x8.shl", Binary, M128, M128, I32, 0, 8),
    op(Opcode::I16X8_SHR_S, "i16x8.shr_s", Binary, M128, M128, I32, 0, 8),
    op(Opcode::I16X8_SHR_U, "i16x8.shr_u", Binary, M128, M128, I32, 0, 8),
    op(Opcode::I16X8_AND, "i16x8.and", Binary, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_OR, "i16x8.or", Binary, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_XOR, "i16x8.xor", Binary, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_NOT, "i16x8.not", Unary, M128, M128, ___, 0, 8),
    op(Opcode::I16X8_EQ, "i16x8.eq", Compare, B8, M128, M128, 0, 8),
    op(Opcode::I16X8_NE, "i16x8.ne", Compare, B8, M128, M128, 0, 8),
    op(Opcode::I16X8_LT_S, "i16x8.lt_s", Compare, B8, M128, M128, 0, 8),
    op(Opcode::I16X8_LT_U, "i16x8.lt_u", Compare, B8, M128, M128, 0, 8),
    op(Opcode::I16X8_LE_S, "i16x8.le_s", Compare, B8, M128, M128, 0, 8),
    op(Opcode::I16X8_LE_U, "i16x8.le_u", Compare, B8, M128, M128, 0, 8),
    op(Opcode::I16X8_GT_S, "i16x8.gt_s", Compare, B8, M128, M128, 0, 8),
    op(Opcode::I16X8_GT_U, "i16x8.gt_u", Compare, B8, M128, M128, 0, 8),
    op(Opcode::I16X8_GE_S, "i16x8.ge_s", Compare, B8, M128, M128, 0, 8),
    op(Opcode::I16X8_GE_U, "i16x8.ge_u", Compare, B8, M128, M128, 0, 8),
    op(Opcode::I16X8_LOAD, "i16x8.load", Load, M128, I32, ___, 16, 8),
    op(Opcode::I16X8_STORE, "i16x8.store", Store, ___, I32, M128, 16, 8),
    op(Opcode::I32X4_REINTERPRET_I8X16, "i32x4.reinterpret_i8x16", Convert, M128, M128, ___, 0, 4),
    op(Opcode::I32X4_REINTERPRET_I16X8, "i32x4.reinterpret_i16x8", Convert, M128, M128, ___, 0, 4),
    op(Opcode::I32X4_REINTERPRET_I64X2, "i32x4.reinterpret_i64x2", Convert, M128, M128, ___, 0, 4),
    op(Opcode::I32X4_REINTERPRET_F32X4, "i32x4.reinterpret_f32x4", Convert, M128, M128, ___, 0, 4),
    op(Opcode::I32X4_REINTERPRET_F64X2, "i32x4.reinterpret_f64x2", Convert, M128, M128, ___, 0, 4),
    op(Opcode::I32X4_SPLAT, "i32x4.splat", Unary, M128, I32, ___, 0, 4),
    op(Opcode::I32X4_EXTRACT, "i32x4.extract", Binary, I32, M128, I32, 0, 4),
    op(Opcode::I32X4_ADD, "i32x4.add", Binary, M128, M128, M128, 0, 4),
    op(Opcode::I32X4_SUB, "i32x4.sub", Binary, M128, M128, M128, 0, 4),
    op(Opcode::I32X4_MUL, "i32x4.mul", Binary, M128, M128, M128, 0, 4),
    op(Opcode::I32X4_NEG, "i32x4.neg", Unary, M128, M128, ___, 0, 4),
    op(Opcode::I32X4_SHL, "i32x4.shl", Binary, M128, M128, I32, 0, 4),
    op(Opcode::I32X4_SHR_S, "i32x4.shr_s", Binary, M128, M128, I32, 0, 4),
    op(Opcode::I32X4_SHR_U, "i32x4.shr_u", Binary, M128, M128, I32, 0, 4),
    op(Opcode::I32X4_AND, "i32x4.and", Binary, M128, M128, M128, 0, 4),
    op(Opcode::I32X4_OR, "i32x4.or", Binary, M128, M128, M128, 0, 4),
    op(Opcode::I32X4_XOR, "i32x4.xor", Binary, M128, M128, M128, 0, 4),
    op(Opcode::I32X4_NOT, "i32x4.not", Unary, M128, M128, ___, 0, 4),
    op(Opcode::I32X4_EQ, "i32x4.eq", Compare, B4, M128, M128, 0, 4),
    op(Opcode::I32X4_NE, "i32x4.ne", Compare, B4, M128, M128, 0, 4),
    op(Opcode::I32X4_LT_S, "i32x4.lt_s", Compare, B4, M128, M128, 0, 4),
    op(Opcode::I32X4_LT_U, "i32x4.lt_u", Compare, B4, M128, M128, 0, 4),
    op(Opcode::I32X4_LE_S, "i32x4.le_s", Compare, B4, M128, M128, 0, 4),
    op(Opcode::I32X4_LE_U, "i32x4.le_u", Compare, B4, M128, M128, 0, 4),
    op(Opcode::I32X4_GT_S, "i32x4.gt_s", Compare, B4, M128, M128, 0, 4),
    op(Opcode::I32X4_GT_U, "i32x4.gt_u", Compare, B4, M128, M128, 0, 4),
    op(Opcode::I32X4_GE_S, "i32x4.ge_s", Compare, B4, M128, M128, 0, 4),
    op(Opcode::I32X4_GE_U, "i32x4.ge_u", Compare, B4, M128, M128, 0, 4),
    op(Opcode::I32X4_LOAD, "i32x4.load", Load, M128, I32, ___, 16, 4),
    op(Opcode::I32X4_STORE, "i32x4.store", Store, ___, I32, M128, 16, 4),
    op(Opcode::I32X4_LOAD1, "i32x4.load1", Load, M128, I32, ___, 4, 4),
    op(Opcode::I32X4_LOAD2, "i32x4.load2", Load, M128, I32, ___, 4, 4),
    op(Opcode::I32X4_LOAD3, "i32x4.load3", Load, M128, I32, ___, 4, 4),
    op(Opcode::I32X4_STORE1, "i32x4.store1", Store, ___, I32, M128, 4, 4),
    op(Opcode::I32X4_STORE2, "i32x4.store2", Store, ___, I32, M128, 4, 4),
    op(Opcode::I32X4_STORE3, "i32x4.store3", Store, ___, I32, M128, 4, 4),
    op(Opcode::I32X4_TRUNC_S, "i32x4.trunc_s", Convert, M128, M128, ___, 0, 4),
    op(Opcode::I32X4_TRUNC_U, "i32x4.trunc_u", Convert, M128, M128, ___, 0, 4),
    op(Opcode::I64X2_REINTERPRET_I8X16, "i64x2.reinterpret_i8x16", Convert, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_REINTERPRET_I16X8, "i64x2.reinterpret_i16x8", Convert, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_REINTERPRET_I32X4, "i64x2.reinterpret_i32x4", Convert, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_REINTERPRET_F32X4, "i64x2.reinterpret_f32x4", Convert, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_REINTERPRET_F64X2, "i64x2.reinterpret_f64x2", Convert, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_SPLAT, "i64x2.splat", Unary, M128, I64, ___, 0, 2),
    op(Opcode::I64X2_EXTRACT, "i64x2.extract", Binary, I64, M128, I32, 0, 2),
    op(Opcode::I64X2_ADD, "i64x2.add", Binary, M128, M128, M128, 0, 2),
    op(Opcode::I64X2_SUB, "i64x2.sub", Binary, M128, M128, M128, 0, 2),
    op(Opcode::I64X2_MUL, "i64x2.mul", Binary, M128, M128, M128, 0, 2),
    op(Opcode::I64X2_NEG, "i64x2.neg", Unary, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_SHL, "i64x2.shl", Binary, M128, M128, I32, 0, 2),
    op(Opcode::I64X2_SHR_S, "i64x2.shr_s", Binary, M128, M128, I32, 0, 2),
    op(Opcode::I64X2_SHR_U, "i64x2.shr_u", Binary, M128, M128, I32, 0, 2),
    op(Opcode::I64X2_AND, "i64x2.and", Binary, M128, M128, M128, 0, 2),
    op(Opcode::I64X2_OR, "i64x2.or", Binary, M128, M128, M128, 0, 2),
    op(Opcode::I64X2_XOR, "i64x2.xor", Binary, M128, M128, M128, 0, 2),
    op(Opcode::I64X2_NOT, "i64x2.not", Unary, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_EQ, "i64x2.eq", Compare, B2, M128, M128, 0, 2),
    op(Opcode::I64X2_NE, "i64x2.ne", Compare, B2, M128, M128, 0, 2),
    op(Opcode::I64X2_LT_S, "i64x2.lt_s", Compare, B2, M128, M128, 0, 2),
    op(Opcode::I64X2_LT_U, "i64x2.lt_u", Compare, B2, M128, M128, 0, 2),
    op(Opcode::I64X2_LE_S, "i64x2.le_s", Compare, B2, M128, M128, 0, 2),
    op(Opcode::I64X2_LE_U, "i64x2.le_u", Compare, B2, M128, M128, 0, 2),
    op(Opcode::I64X2_GT_S, "i64x2.gt_s", Compare, B2, M128, M128, 0, 2),
    op(Opcode::I64X2_GT_U, "i64x2.gt_u", Compare, B2, M128, M128, 0, 2),
    op(Opcode::I64X2_GE_S, "i64x2.ge_s", Compare, B2, M128, M128, 0, 2),
    op(Opcode::I64X2_GE_U, "i64x2.ge_u", Compare, B2, M128, M128, 0, 2),
    op(Opcode::I64X2_LOAD, "i64x2.load", Load, M128, I32, ___, 16, 2),
    op(Opcode::I64X2_STORE, "i64x2.store", Store, ___, I32, M128, 16, 2),
    op(Opcode::I64X2_TRUNC_S, "i64x2.trunc_s", Convert, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_TRUNC_U, "i64x2.trunc_u", Convert, M128, M128, ___, 0, 2),
    op(Opcode::F32X4_REINTERPRET_I8X16, "f32x4.reinterpret_i8x16", Convert, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_REINTERPRET_I16X8, "f32x4.reinterpret_i16x8", Convert, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_REINTERPRET_I32X4, "f32x4.reinterpret_i32x4", Convert, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_REINTERPRET_I64X2, "f32x4.reinterpret_i64x2", Convert, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_REINTERPRET_F64X2, "f32x4.reinterpret_f64x2", Convert, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_SPLAT, "f32x4.splat", Unary, M128, F32, ___, 0, 4),
    op(Opcode::F32X4_EXTRACT, "f32x4.extract", Binary, F32, M128, I32, 0, 4),
    op(Opcode::F32X4_ADD, "f32x4.add", Binary, M128, M128, M128, 0, 4),
    op(Opcode::F32X4_SUB, "f32x4.sub", Binary, M128, M128, M128, 0, 4),
    op(Opcode::F32X4_MUL, "f32x4.mul", Binary, M128, M128, M128, 0, 4),
    op(Opcode::F32X4_NEG, "f32x4.neg", Unary, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_AND, "f32x4.and", Binary, M128, M128, M128, 0, 4),
    op(Opcode::F32X4_OR, "f32x4.or", Binary, M128, M128, M128, 0, 4),
    op(Opcode::F32X4_XOR, "f32x4.xor", Binary, M128, M128, M128, 0, 4),
    op(Opcode::F32X4_NOT, "f32x4.not", Unary, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_EQ, "f32x4.eq", Compare, B4, M128, M128, 0, 4),
    op(Opcode::F32X4_NE, "f32x4.ne", Compare, B4, M128, M128, 0, 4),
    op(Opcode::F32X4_LT, "f32x4.lt", Compare, B4, M128, M128, 0, 4),
    op(Opcode::F32X4_LE, "f32x4.le", Compare, B4, M128, M128, 0, 4),
    op(Opcode::F32X4_GT, "f32x4.gt", Compare, B4, M128, M128, 0, 4),
    op(Opcode::F32X4_GE, "f32x4.ge", Compare, B4, M128, M128, 0, 4),
    op(Opcode::F32X4_LOAD, "f32x4.load", Load, M128, I32, ___, 16, 4),
    op(Opcode::F32X4_STORE, "f32x4.store", Store, ___, I32, M128, 16, 4),
    op(Opcode::F32X4_LOAD1, "f32x4.load1", Load, M128, I32, ___, 4, 4),
    op(Opcode::F32X4_LOAD2, "f32x4.load2", Load, M128, I32, ___, 4, 4),
    op(Opcode::F32X4_LOAD3, "f32x4.load3", Load, M128, I32, ___, 4, 4),
    op(Opcode::F32X4_STORE1, "f32x4.store1", Store, ___, I32, M128, 4, 4),
    op(Opcode::F32X4_STORE2, "f32x4.store2", Store, ___, I32, M128, 4, 4),
    op(Opcode::F32X4_STORE3, "f32x4.store3", Store, ___, I32, M128, 4, 4),
    op(Opcode::F32X4_ABS, "f32x4.abs", Unary, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_MIN, "f32x4.min", Binary, M128, M128, M128, 0, 4),
    op(Opcode::F32X4_MAX, "f32x4.max", Binary, M128, M128, M128, 0, 4),
    op(Opcode::F32X4_DIV, "f32x4.div", Binary, M128, M128, M128, 0, 4),
    op(Opcode::F32X4_SQRT, "f32x4.sqrt", Unary, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_RCP, "f32x4.rcp", Unary, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_RSQRT, "f32x4.rsqrt", Unary, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_CONVERT_S, "f32x4.convert_s", Convert, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_CONVERT_U, "f32x4.convert_u", Convert, M128, M128, ___, 0, 4),
    op(Opcode::F64X2_REINTERPRET_I8X16, "f64x2.reinterpret_i8x16", Convert, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_REINTERPRET_I16X8, "f64x2.reinterpret_i16x8", Convert, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_REINTERPRET_I32X4, "f64x2.reinterpret_i32x4", Convert, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_REINTERPRET_I64X2, "f64x2.reinterpret_i64x2", Convert, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_REINTERPRET_F32X4, "f64x2.reinterpret_f32x4", Convert, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_SPLAT, "f64x2.splat", Unary, M128, F64, ___, 0, 2),
    op(Opcode::F64X2_EXTRACT, "f64x2.extract", Binary, F64, M128, I32, 0, 2),
    op(Opcode::F64X2_ADD, "f64x2.add", Binary, M128, M128, M128, 0, 2),
    op(Opcode::F64X2_SUB, "f64x2.sub", Binary, M128, M128, M128, 0, 2),
    op(Opcode::F64X2_MUL, "f64x2.mul", Binary, M128, M128, M128, 0, 2),
    op(Opcode::F64X2_NEG, "f64x2.neg", Unary, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_AND, "f64x2.and", Binary, M128, M128, M128, 0, 2),
    op(Opcode::F64X2_OR, "f64x2.or", Binary, M128, M128, M128, 0, 2),
    op(Opcode::F64X2_XOR, "f64x2.xor", Binary, M128, M128, M128, 0, 2),
    op(Opcode::F64X2_NOT, "f64x2.not", Unary, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_EQ, "f64x2.eq", Compare, B2, M128, M128, 0, 2),
    op(Opcode::F64X2_NE, "f64x2.ne", Compare, B2, M128, M128, 0, 2),
    op(Opcode::F64X2_LT, "f64x2.lt", Compare, B2, M128, M128, 0, 2),
    op(Opcode::F64X2_LE, "f64x2.le", Compare, B2, M128, M128, 0, 2),
    op(Opcode::F64X2_GT, "f64x2.gt", Compare, B2, M128, M128, 0, 2),
    op(Opcode::F64X2_GE, "f64x2.ge", Compare, B2, M128, M128, 0, 2),
    op(Opcode::F64X2_LOAD, "f64x2.load", Load, M128, I32, ___, 16, 2),
    op(Opcode::F64X2_STORE, "f64x2.store", Store, ___, I32, M128, 16, 2),
    op(Opcode::F64X2_ABS, "f64x2.abs", Unary, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_MIN, "f64x2.min", Binary, M128, M128, M128, 0, 2),
    op(Opcode::F64X2_MAX, "f64x2.max", Binary, M128, M128, M128, 0, 2),
    op(Opcode::F64X2_DIV, "f64x2.div", Binary, M128, M128, M128, 0, 2),
    op(Opcode::F64X2_SQRT, "f64x2.sqrt", Unary, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_RCP, "f64x2.rcp", Unary, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_RSQRT, "f64x2.rsqrt", Unary, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_CONVERT_S, "f64x2.convert_s", Convert, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_CONVERT_U, "f64x2.convert_u", Convert, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_SWIZZLE, "i64x2.swizzle", VectorSwizzle, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_SHUFFLE, "i64x2.shuffle", VectorSwizzle, M128, M128, ___, 0, 2),
    op(Opcode::I64X2_SELECT, "i64x2.select", Select, M128, M128, M128, 0, 2),
    op(Opcode::I64X2_REPLACE, "i64x2.replace", VectorReplace, M128, I32, I32, 0, 2),
    op(Opcode::I32X4_SWIZZLE, "i32x4.swizzle", VectorSwizzle, M128, M128, ___, 0, 4),
    op(Opcode::I32X4_SHUFFLE, "i32x4.shuffle", VectorSwizzle, M128, M128, ___, 0, 4),
    op(Opcode::I32X4_SELECT, "i32x4.select", Select, M128, M128, M128, 0, 4),
    op(Opcode::I32X4_REPLACE, "i32x4.replace", VectorReplace, M128, I32, I32, 0, 4),
    op(Opcode::I16X8_SWIZZLE, "i16x8.swizzle", VectorSwizzle, M128, M128, ___, 0, 8),
    op(Opcode::I16X8_SHUFFLE, "i16x8.shuffle", VectorSwizzle, M128, M128, ___, 0, 8),
    op(Opcode::I16X8_SELECT, "i16x8.select", Select, M128, M128, M128, 0, 8),
    op(Opcode::I16X8_REPLACE, "i16x8.replace", VectorReplace, M128, I32, I32, 0, 8),
    op(Opcode::I8X16_SWIZZLE, "i8x16.swizzle", VectorSwizzle, M128, M128, ___, 0, 16),
    op(Opcode::I8X16_SHUFFLE, "i8x16.shuffle", VectorSwizzle, M128, M128, ___, 0, 16),
    op(Opcode::I8X16_SELECT, "i8x16.select", Select, M128, M128, M128, 0, 16),
    op(Opcode::I8X16_REPLACE, "i8x16.replace", VectorReplace, M128, I32, I32, 0, 16),
    op(Opcode::B64X2_SWIZZLE, "b64x2.swizzle", VectorSwizzle, B2, B2, ___, 0, 2),
    op(Opcode::B64X2_SHUFFLE, "b64x2.shuffle", VectorSwizzle, B2, B2, ___, 0, 2),
    op(Opcode::B64X2_SELECT, "b64x2.select", Select, B2, B2, B2, 0, 2),
    op(Opcode::B64X2_REPLACE, "b64x2.replace", VectorReplace, B2, I32, I32, 0, 2),
    op(Opcode::B32X4_SWIZZLE, "b32x4.swizzle", VectorSwizzle, B4, B4, ___, 0, 4),
    op(Opcode::B32X4_SHUFFLE, "b32x4.shuffle", VectorSwizzle, B4, B4, ___, 0, 4),
    op(Opcode::B32X4_SELECT, "b32x4.select", Select, B4, B4, B4, 0, 4),
    op(Opcode::B32X4_REPLACE, "b32x4.replace", VectorReplace, B4, I32, I32, 0, 4),
    op(Opcode::B16X8_SWIZZLE, "b16x8.swizzle", VectorSwizzle, B8, B8, ___, 0, 8),
    op(Opcode::B16X8_SHUFFLE, "b16x8.shuffle", VectorSwizzle, B8, B8, ___, 0, 8),
    op(Opcode::B16X8_SELECT, "b16x8.select", Select, B8, B8, B8, 0, 8),
    op(Opcode::B16X8_REPLACE, "b16x8.replace", VectorReplace, B8, I32, I32, 0, 8),
    op(Opcode::B8X16_SWIZZLE, "b8x16.swizzle", VectorSwizzle, B16, B16, ___, 0, 16),
    op(Opcode::B8X16_SHUFFLE, "b8x16.shuffle", VectorSwizzle, B16, B16, ___, 0, 16),
    op(Opcode::B8X16_SELECT, "b8x16.select", Select, B16, B16, B16, 0, 16),
    op(Opcode::B8X16_REPLACE, "b8x16.replace", VectorReplace, B16, I32, I32, 0, 16),
    op(Opcode::F64X2_SWIZZLE, "f64x2.swizzle", VectorSwizzle, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_SHUFFLE, "f64x2.shuffle", VectorSwizzle, M128, M128, ___, 0, 2),
    op(Opcode::F64X2_SELECT, "f64x2.select", Select, M128, M128, M128, 0, 2),
    op(Opcode::F64X2_REPLACE, "f64x2.replace", VectorReplace, M128, I32, F64, 0, 2),
    op(Opcode::F32X4_SWIZZLE, "f32x4.swizzle", VectorSwizzle, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_SHUFFLE, "f32x4.shuffle", VectorSwizzle, M128, M128, ___, 0, 4),
    op(Opcode::F32X4_SELECT, "f32x4.select", Select, M128, M128, M128, 0, 4),
    op(Opcode::F32X4_REPLACE, "f32x4.replace", VectorReplace, M128, I32, F32, 0, 4),
];
