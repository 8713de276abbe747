use crate::constants::WORD_BITS;

/// Sum and carry-out of a full 8-bit addition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AdderOutput {
    pub sum: u8,
    pub carry: bool,
}

/// Single-bit full adder, returns (sum, carry_out).
pub fn bit_add(a: bool, b: bool, carry_in: bool) -> (bool, bool) {
    let sum = a ^ b ^ carry_in;
    // Majority of the three inputs.
    let carry_out = (a & b) | (a & carry_in) | (b & carry_in);
    (sum, carry_out)
}

/// Ripple-carry chain of eight full adders.
/// Bit 0 receives `carry_in`, every other bit receives the carry of the bit below it.
pub fn byte_add(a: u8, b: u8, carry_in: bool) -> AdderOutput {
    let mut sum = 0u8;
    let mut carry = carry_in;

    for i in 0..WORD_BITS {
        let (bit, carry_out) = bit_add((a >> i) & 1 == 1, (b >> i) & 1 == 1, carry);
        sum |= (bit as u8) << i;
        carry = carry_out;
    }

    AdderOutput { sum, carry }
}

/// Two's-complement subtraction `a - b` on the same adder.
/// The returned carry means "no borrow", i.e. it is set when `a >= b`.
pub fn byte_sub(a: u8, b: u8) -> AdderOutput {
    byte_add(a, !b, true)
}
