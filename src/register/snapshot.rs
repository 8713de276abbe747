use super::AluState;
use crate::constants::*;
use crate::error::InputError;

// Trace letters in output order.
const FLAG_LETTERS: [(u8, char); 5] = [
    (FLAG_C, 'C'),
    (FLAG_Z, 'Z'),
    (FLAG_S, 'S'),
    (FLAG_P, 'P'),
    (FLAG_V, 'V'),
];

#[derive(Debug, PartialEq)]
pub struct StateMismatch {
    pub field: String,
    pub expected: u8,
    pub actual: u8,
}

impl AluState {
    pub fn pretty_format_flags(&self) -> String {
        let flags = self.flags();
        let mut string = String::new();
        string.push('[');

        for (flag, letter) in FLAG_LETTERS {
            if flags & flag != 0 {
                string.push(letter);
            } else {
                string.push('-');
            }
        }

        string.push(']');
        string
    }

    /// One line per state, e.g. `R:80 F:[--S-V]`.
    pub fn to_trace_string(&self) -> String {
        format!("R:{:02X} F:{}", self.result, self.pretty_format_flags())
    }

    pub fn from_trace_string(s: &str) -> Result<Self, InputError> {
        let mut result = None;
        let mut flags = None;

        for part in s.split_whitespace() {
            let (key, val) = part
                .split_once(':')
                .ok_or_else(|| InputError::UnknownField(part.to_string()))?;

            match key {
                "R" => {
                    if result.is_some() {
                        return Err(InputError::DuplicateField("R"));
                    }
                    result = Some(parse_hex8(val)?);
                }
                "F" => {
                    if flags.is_some() {
                        return Err(InputError::DuplicateField("F"));
                    }
                    flags = Some(parse_flag_group(val)?);
                }
                _ => return Err(InputError::UnknownField(key.to_string())),
            }
        }

        Ok(AluState::from_parts(
            result.ok_or(InputError::MissingField("R"))?,
            flags.ok_or(InputError::MissingField("F"))?,
        ))
    }

    /// Fields of `other` that differ from `self`, treating `self` as expected.
    pub fn compare(&self, other: &AluState) -> Vec<StateMismatch> {
        let mut diffs = Vec::new();

        if self.result != other.result {
            diffs.push(StateMismatch {
                field: "R".into(),
                expected: self.result,
                actual: other.result,
            });
        }

        let (expected, actual) = (self.flags(), other.flags());
        for (flag, letter) in FLAG_LETTERS {
            if expected & flag != actual & flag {
                diffs.push(StateMismatch {
                    field: letter.to_string(),
                    expected: (expected & flag != 0) as u8,
                    actual: (actual & flag != 0) as u8,
                });
            }
        }

        diffs
    }
}

fn parse_hex8(v: &str) -> Result<u8, InputError> {
    let value = u64::from_str_radix(v, 16).map_err(|_| InputError::InvalidNumber {
        field: "R",
        text: v.to_string(),
    })?;
    u8::try_from(value).map_err(|_| InputError::OutOfRange {
        field: "R",
        value,
        max: u8::MAX as u64,
    })
}

fn parse_flag_group(v: &str) -> Result<u8, InputError> {
    let invalid = || InputError::InvalidFlags(v.to_string());
    let inner = v
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(invalid)?;

    if inner.chars().count() != FLAG_LETTERS.len() {
        return Err(invalid());
    }

    let mut flags = 0;
    for (ch, (flag, letter)) in inner.chars().zip(FLAG_LETTERS) {
        match ch {
            '-' => {}
            c if c == letter => flags |= flag,
            _ => return Err(invalid()),
        }
    }
    Ok(flags)
}
