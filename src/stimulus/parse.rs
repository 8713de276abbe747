use log::warn;
use std::str::FromStr;

use crate::error::InputError;
use crate::opcodes::OpCode;
use crate::register::TickInputs;

#[derive(Copy, Clone, PartialEq)]
enum Radix {
    /// `0x` and `0b` prefixes are honored, bare digits are decimal.
    Prefixed,
    /// Bare digits are hex, as in the trace format.
    Hex,
}

fn parse_number(field: &'static str, text: &str, radix: Radix) -> Result<u64, InputError> {
    let invalid = || InputError::InvalidNumber {
        field,
        text: text.to_string(),
    };

    let lower = text.to_ascii_lowercase();
    let (digits, base) = if let Some(hex) = lower.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(bin) = lower.strip_prefix("0b").filter(|_| radix == Radix::Prefixed) {
        (bin, 2)
    } else if radix == Radix::Hex {
        (lower.as_str(), 16)
    } else {
        (lower.as_str(), 10)
    };

    // Digits only, no sign. Hex fields take bare hex, so `0b1` there is 0x0B1.
    let digits = digits.replace('_', "");
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(base)) {
        return Err(invalid());
    }
    u64::from_str_radix(&digits, base).map_err(|_| invalid())
}

fn check_range(field: &'static str, value: u64, max: u64) -> Result<u64, InputError> {
    if value > max {
        return Err(InputError::OutOfRange { field, value, max });
    }
    Ok(value)
}

/// Parses an 8-bit operand. Anything wider is rejected rather than truncated.
pub fn parse_byte(field: &'static str, text: &str) -> Result<u8, InputError> {
    let value = parse_number(field, text, Radix::Prefixed)?;
    Ok(check_range(field, value, u8::MAX as u64)? as u8)
}

fn parse_hex_byte(field: &'static str, text: &str) -> Result<u8, InputError> {
    let value = parse_number(field, text, Radix::Hex)?;
    Ok(check_range(field, value, u8::MAX as u64)? as u8)
}

/// Parses a one-bit control signal, only `0` and `1` are accepted.
pub fn parse_signal(field: &'static str, text: &str) -> Result<bool, InputError> {
    let value = parse_number(field, text, Radix::Prefixed)?;
    Ok(check_range(field, value, 1)? == 1)
}

/// Accepts a mnemonic (`ADD`, `rol`) or a numeric code in 0..=15.
pub fn parse_operation(text: &str) -> Result<OpCode, InputError> {
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        let value = parse_number("OP", text, Radix::Prefixed)?;
        let code = u8::try_from(value).map_err(|_| InputError::OutOfRange {
            field: "OP",
            value,
            max: crate::constants::OPCODE_MAX as u64,
        })?;
        return OpCode::try_from(code);
    }
    text.parse()
}

fn set_once<T>(slot: &mut Option<T>, field: &'static str, value: T) -> Result<(), InputError> {
    if slot.is_some() {
        return Err(InputError::DuplicateField(field));
    }
    *slot = Some(value);
    Ok(())
}

/// One stimulus line: `A:0F B:01 OP:ADD RST:0 EN:1`.
/// `A` and `B` are hex and default to 0, `RST` defaults to 0, `EN` to 1.
impl FromStr for TickInputs {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut a = None;
        let mut b = None;
        let mut op = None;
        let mut reset = None;
        let mut enable = None;

        for part in s.split_whitespace() {
            let (key, val) = part
                .split_once(':')
                .ok_or_else(|| InputError::UnknownField(part.to_string()))?;

            match key.to_ascii_uppercase().as_str() {
                "A" => set_once(&mut a, "A", parse_hex_byte("A", val)?)?,
                "B" => set_once(&mut b, "B", parse_hex_byte("B", val)?)?,
                "OP" => set_once(&mut op, "OP", parse_operation(val)?)?,
                "RST" => set_once(&mut reset, "RST", parse_signal("RST", val)?)?,
                "EN" => set_once(&mut enable, "EN", parse_signal("EN", val)?)?,
                _ => return Err(InputError::UnknownField(key.to_string())),
            }
        }

        let op: OpCode = op.ok_or(InputError::MissingField("OP"))?;
        let b = b.unwrap_or(0);
        if b != 0 && !op.info().reads_b() {
            warn!("{} does not read B, ignoring B:{:02X}", op, b);
        }

        Ok(TickInputs {
            a: a.unwrap_or(0),
            b,
            op,
            reset: reset.unwrap_or(false),
            enable: enable.unwrap_or(true),
        })
    }
}
