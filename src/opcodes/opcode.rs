use std::fmt;
use std::str::FromStr;

use super::*;
use crate::constants::OPCODE_MAX;
use crate::error::InputError;

/// The 4-bit operation selector. Discriminants are the wire encoding.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum OpCode {
    Add = 0,
    Sub = 1,
    And = 2,
    Or = 3,
    Xor = 4,
    Nand = 5,
    Nor = 6,
    Xnor = 7,
    Not = 8,
    Inc = 9,
    Dec = 10,
    Sll = 11,
    Srl = 12,
    Rol = 13,
    Ror = 14,
    /// Encoding 15, no operation is assigned to it. The dispatcher yields a zero
    /// result with carry and overflow clear; zero and parity are still derived
    /// from that result, so the latched state is `R:00 F:[-Z-P-]`.
    Undefined = 15,
}

impl OpCode {
    pub fn info(self) -> &'static OpcodeInfo {
        &OPCODES[self as usize]
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for OpCode {
    type Error = InputError;

    /// Values that do not fit in four bits are rejected, never masked.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        OPCODES
            .get(code as usize)
            .map(|info| info.op)
            .ok_or(InputError::OutOfRange {
                field: "OP",
                value: code as u64,
                max: OPCODE_MAX as u64,
            })
    }
}

impl FromStr for OpCode {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OPCODES
            .iter()
            .find(|info| info.mnemonic.eq_ignore_ascii_case(s))
            .map(|info| info.op)
            .ok_or_else(|| InputError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().mnemonic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_table() {
        let cases = [
            (0, OpCode::Add),
            (1, OpCode::Sub),
            (2, OpCode::And),
            (3, OpCode::Or),
            (4, OpCode::Xor),
            (5, OpCode::Nand),
            (6, OpCode::Nor),
            (7, OpCode::Xnor),
            (8, OpCode::Not),
            (9, OpCode::Inc),
            (10, OpCode::Dec),
            (11, OpCode::Sll),
            (12, OpCode::Srl),
            (13, OpCode::Rol),
            (14, OpCode::Ror),
            (15, OpCode::Undefined),
        ];

        for (code, expected) in cases {
            assert_eq!(OpCode::try_from(code), Ok(expected));
            assert_eq!(expected.code(), code);
        }
    }

    #[test]
    fn test_wide_codes_are_rejected() {
        for code in [16u8, 0x1F, 0xFF] {
            assert!(
                matches!(OpCode::try_from(code), Err(InputError::OutOfRange { .. })),
                "code {} should not be truncated to four bits",
                code
            );
        }
    }

    #[test]
    fn test_parse_mnemonic() {
        assert_eq!("ADD".parse::<OpCode>(), Ok(OpCode::Add));
        assert_eq!("xnor".parse::<OpCode>(), Ok(OpCode::Xnor));
        assert_eq!("Ror".parse::<OpCode>(), Ok(OpCode::Ror));
        assert_eq!("UNDEF".parse::<OpCode>(), Ok(OpCode::Undefined));
        assert_eq!(
            "MUL".parse::<OpCode>(),
            Err(InputError::UnknownOperation("MUL".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips() {
        for info in OPCODES.iter() {
            let printed = format!("{}", info.op);
            assert_eq!(printed.parse::<OpCode>(), Ok(info.op));
        }
    }
}
