use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FlagAction {
    Reset,     // "0" (Always reset)
    Calculate, // "C" or "V" (Computed at runtime)
}

impl fmt::Display for FlagAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match self {
            FlagAction::Calculate => 'v', // Varies/Calculated
            FlagAction::Reset => '0',     // Hardcoded Reset
        };
        write!(f, "{}", c)
    }
}
