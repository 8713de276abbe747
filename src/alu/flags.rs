use crate::constants::SIGN_BIT;

/// The flags that follow from the result byte alone.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DerivedFlags {
    // (Z) -> Set if the value is zero
    pub zero: bool,
    // (S) -> Copy of bit 7, set if the 2-complement value is negative
    pub sign: bool,
    // (P) -> Set if an even number of bits are set, zero included
    pub parity: bool,
}

pub fn derive_flags(value: u8) -> DerivedFlags {
    DerivedFlags {
        zero: value == 0,
        sign: value & SIGN_BIT != 0,
        parity: value.count_ones() % 2 == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_byte() {
        let flags = derive_flags(0x00);
        assert!(flags.zero);
        assert!(!flags.sign);
        assert!(flags.parity, "zero set bits is an even count");
    }

    #[test]
    fn test_sign_follows_msb() {
        assert!(derive_flags(0x80).sign);
        assert!(derive_flags(0xFF).sign);
        assert!(!derive_flags(0x7F).sign);
    }

    #[test]
    fn test_parity_against_manual_count() {
        for value in 0..=255u8 {
            let mut bits = 0;
            for i in 0..8 {
                bits += (value >> i) & 1;
            }
            assert_eq!(derive_flags(value).parity, bits % 2 == 0, "value {:#04X}", value);
        }
    }
}
