use super::*;
use crate::alu::AluOutput;
use std::fmt;

/// How an operation treats the two flags that are not derived from the result.
/// Zero, sign and parity are always calculated.
#[derive(Debug, Copy, Clone)]
pub struct FlagSpec {
    pub carry: FlagAction,
    pub overflow: FlagAction,
}

impl FlagSpec {
    /// Clears whichever flags this operation never produces.
    pub fn filter(&self, mut output: AluOutput) -> AluOutput {
        if self.carry == FlagAction::Reset {
            output.carry = false;
        }
        if self.overflow == FlagAction::Reset {
            output.overflow = false;
        }
        output
    }
}

impl fmt::Display for FlagSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // We use the CZSPV order of the trace output.
        let c = match self.carry {
            FlagAction::Calculate => 'C',
            reset => format!("{}", reset).chars().next().unwrap_or('0'),
        };
        let v = match self.overflow {
            FlagAction::Calculate => 'V',
            reset => format!("{}", reset).chars().next().unwrap_or('0'),
        };

        write!(f, "[{}ZSP{}]", c, v)
    }
}
