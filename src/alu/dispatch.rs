use log::trace;

use super::{Alu, AluOutput};
use crate::constants::SHIFT_AMOUNT_MASK;
use crate::opcodes::OpCode;

/// Computes the candidate result, carry and overflow for one operation.
/// Zero, sign and parity are left to [`super::derive_flags`].
///
/// Every encoding is total: shift amounts only ever look at B's low three
/// bits, and `OpCode::Undefined` produces an all-zero output.
pub fn dispatch(a: u8, b: u8, op: OpCode) -> AluOutput {
    let amount = b & SHIFT_AMOUNT_MASK;

    let output = match op {
        OpCode::Add => AluOutput::alu_add(a, b),
        OpCode::Sub => AluOutput::alu_sub(a, b),
        OpCode::And => AluOutput::alu_and(a, b),
        OpCode::Or => AluOutput::alu_or(a, b),
        OpCode::Xor => AluOutput::alu_xor(a, b),
        OpCode::Nand => AluOutput::alu_nand(a, b),
        OpCode::Nor => AluOutput::alu_nor(a, b),
        OpCode::Xnor => AluOutput::alu_xnor(a, b),
        OpCode::Not => AluOutput::alu_not(a),
        OpCode::Inc => AluOutput::alu_inc(a),
        OpCode::Dec => AluOutput::alu_dec(a),
        OpCode::Sll => AluOutput::alu_sll(a, amount),
        OpCode::Srl => AluOutput::alu_srl(a, amount),
        OpCode::Rol => AluOutput::alu_rol(a, amount),
        OpCode::Ror => AluOutput::alu_ror(a, amount),
        OpCode::Undefined => AluOutput::default(),
    };

    let output = op.info().flags.filter(output);
    trace!(
        "{} {:02X},{:02X} => {:02X} c:{} v:{}",
        op, a, b, output.value, output.carry as u8, output.overflow as u8
    );
    output
}
