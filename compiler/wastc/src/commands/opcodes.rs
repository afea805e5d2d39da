//! `wastc opcodes`: dump the opcode table.

use wast_ir::Opcode;

pub fn print_opcodes() {
    for opcode in Opcode::iter() {
        println!("{}", format_opcode(opcode));
    }
}

/// `0x<code> <name> <class> <result> <param1> <param2> <memory> <lanes>`
pub(super) fn format_opcode(opcode: Opcode) -> String {
    let info = opcode.info();
    format!(
        "0x{:03x} {} {} {} {} {} {} {}",
        opcode.code(),
        info.name,
        info.class.name(),
        info.result_type,
        info.param1_type,
        info.param2_type,
        info.memory_size,
        info.lanes,
    )
}
