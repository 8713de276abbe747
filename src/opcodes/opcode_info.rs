use std::fmt;

use super::*;

/// What an operation reads from its inputs.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
    /// The low three bits of B, used as a shift or rotate distance.
    Amount,
}

impl Operand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operand::A => "A",
            Operand::B => "B",
            Operand::Amount => "B[2:0]",
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct OpcodeInfo {
    // Table is generated in build.rs
    pub code: u8,
    pub op: OpCode,
    pub mnemonic: &'static str,
    pub operands: &'static [Operand],
    pub flags: FlagSpec,
}

impl OpcodeInfo {
    pub fn reads_b(&self) -> bool {
        self.operands
            .iter()
            .any(|operand| matches!(operand, Operand::B | Operand::Amount))
    }
}

impl fmt::Display for OpcodeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operand_strings: Vec<&str> = self.operands.iter().map(Operand::as_str).collect();

        write!(
            f,
            "{:>2}  {:<6} {:<10} {}",
            self.code,
            self.mnemonic,
            operand_strings.join(", "),
            self.flags
        )
    }
}
