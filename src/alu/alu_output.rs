use super::adder::{byte_add, byte_sub};
use super::alu_trait::Alu;
use crate::constants::{SHIFT_AMOUNT_MASK, SIGN_BIT};

/// Represents an Arithmic operation, and it's result
/// The purpose is to make the underlying operations pure.
/// Zero, sign and parity are not stored here since they only depend on `value`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct AluOutput {
    pub value: u8,
    pub carry: bool,
    pub overflow: bool,
}

impl AluOutput {
    fn logic(value: u8) -> Self {
        AluOutput {
            value,
            carry: false,
            overflow: false,
        }
    }
}

fn sign(val: u8) -> bool {
    val & SIGN_BIT != 0
}

fn bit(val: u8, index: u8) -> bool {
    (val >> index) & 1 == 1
}

impl Alu for AluOutput {
    fn alu_add(a: u8, b: u8) -> Self {
        let out = byte_add(a, b, false);
        let (a7, b7, r7) = (sign(a), sign(b), sign(out.sum));

        AluOutput {
            value: out.sum,
            carry: out.carry,
            // Both operands share a sign the result does not have.
            overflow: (a7 && b7 && !r7) || (!a7 && !b7 && r7),
        }
    }

    fn alu_sub(a: u8, b: u8) -> Self {
        let out = byte_sub(a, b);
        let (a7, b7, r7) = (sign(a), sign(b), sign(out.sum));

        AluOutput {
            value: out.sum,
            carry: out.carry,
            // Operand signs differ and the result's sign differs from A.
            overflow: (a7 && !b7 && !r7) || (!a7 && b7 && r7),
        }
    }

    fn alu_and(a: u8, b: u8) -> Self {
        Self::logic(a & b)
    }

    fn alu_or(a: u8, b: u8) -> Self {
        Self::logic(a | b)
    }

    fn alu_xor(a: u8, b: u8) -> Self {
        Self::logic(a ^ b)
    }

    fn alu_nand(a: u8, b: u8) -> Self {
        Self::logic(!(a & b))
    }

    fn alu_nor(a: u8, b: u8) -> Self {
        Self::logic(!(a | b))
    }

    fn alu_xnor(a: u8, b: u8) -> Self {
        Self::logic(!(a ^ b))
    }

    fn alu_not(val: u8) -> Self {
        Self::logic(!val)
    }

    fn alu_inc(val: u8) -> Self {
        let out = byte_add(val, 1, false);
        AluOutput {
            value: out.sum,
            carry: val == 0xFF,
            overflow: val == 0x7F,
        }
    }

    fn alu_dec(val: u8) -> Self {
        let out = byte_sub(val, 1);
        AluOutput {
            value: out.sum,
            // Borrow, not the adder's "no borrow" carry.
            carry: val == 0x00,
            overflow: val == 0x80,
        }
    }

    fn alu_sll(val: u8, amount: u8) -> Self {
        let amount = amount & SHIFT_AMOUNT_MASK;
        if amount == 0 {
            return Self::logic(val);
        }
        AluOutput {
            value: val << amount,
            // Last bit out of the top.
            carry: bit(val, 8 - amount),
            overflow: false,
        }
    }

    fn alu_srl(val: u8, amount: u8) -> Self {
        let amount = amount & SHIFT_AMOUNT_MASK;
        if amount == 0 {
            return Self::logic(val);
        }
        AluOutput {
            value: val >> amount,
            // Last bit out of the bottom.
            carry: bit(val, amount - 1),
            overflow: false,
        }
    }

    fn alu_rol(val: u8, amount: u8) -> Self {
        let amount = amount & SHIFT_AMOUNT_MASK;
        if amount == 0 {
            return Self::logic(val);
        }
        AluOutput {
            value: (val << amount) | (val >> (8 - amount)),
            // The bit that wraps around into position 0.
            carry: bit(val, 8 - amount),
            overflow: false,
        }
    }

    fn alu_ror(val: u8, amount: u8) -> Self {
        let amount = amount & SHIFT_AMOUNT_MASK;
        if amount == 0 {
            return Self::logic(val);
        }
        AluOutput {
            value: (val >> amount) | (val << (8 - amount)),
            carry: bit(val, amount - 1),
            overflow: false,
        }
    }
}
