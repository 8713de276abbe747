// Bit positions of the status flags when packed into a byte.
pub const FLAG_C: u8 = 0b0000_0001;
pub const FLAG_Z: u8 = 0b0000_0010;
pub const FLAG_S: u8 = 0b0000_0100;
pub const FLAG_P: u8 = 0b0000_1000;
pub const FLAG_V: u8 = 0b0001_0000;

/// Operands and results are all one byte wide.
pub const WORD_BITS: u32 = 8;
pub const SIGN_BIT: u8 = 0b1000_0000;

/// Shift and rotate amounts come from the low three bits of B.
pub const SHIFT_AMOUNT_MASK: u8 = 0b0000_0111;

/// The operation selector is a 4-bit field.
pub const OPCODE_MAX: u8 = 0x0F;
pub const OPCODE_COUNT: usize = OPCODE_MAX as usize + 1;

pub const STIMULUS_COMMENT: char = '#';
