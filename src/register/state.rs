use crate::alu::{derive_flags, dispatch};
use crate::constants::*;
use crate::opcodes::OpCode;

/// The registered output of the ALU. Only [`super::StateRegister`] ever holds one
/// that is visible to the outside; everything else works on candidates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AluState {
    pub result: u8,
    pub carry: bool,
    pub zero: bool,
    pub sign: bool,
    pub parity: bool,
    pub overflow: bool,
}

impl AluState {
    /// The combinational stage: the state that would be latched if `a`, `b`
    /// and `op` were sampled on the next enabled edge.
    pub fn next(a: u8, b: u8, op: OpCode) -> Self {
        let output = dispatch(a, b, op);
        let flags = derive_flags(output.value);

        AluState {
            result: output.value,
            carry: output.carry,
            zero: flags.zero,
            sign: flags.sign,
            parity: flags.parity,
            overflow: output.overflow,
        }
    }

    /// Packs the five flags into one byte using the `FLAG_*` masks.
    pub fn flags(&self) -> u8 {
        let mut f = 0;
        for (set, mask) in [
            (self.carry, FLAG_C),
            (self.zero, FLAG_Z),
            (self.sign, FLAG_S),
            (self.parity, FLAG_P),
            (self.overflow, FLAG_V),
        ] {
            if set {
                f |= mask;
            }
        }
        f
    }

    pub fn from_parts(result: u8, flags: u8) -> Self {
        AluState {
            result,
            carry: flags & FLAG_C != 0,
            zero: flags & FLAG_Z != 0,
            sign: flags & FLAG_S != 0,
            parity: flags & FLAG_P != 0,
            overflow: flags & FLAG_V != 0,
        }
    }
}
