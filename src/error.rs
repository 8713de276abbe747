use std::error::Error;
use std::fmt;
use std::io;

/// A value supplied at the boundary that the ALU cannot represent.
/// Nothing is ever truncated to fit; the caller gets one of these instead.
#[derive(Debug, PartialEq)]
pub enum InputError {
    InvalidNumber {
        field: &'static str,
        text: String,
    },
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },
    UnknownOperation(String),
    UnknownField(String),
    DuplicateField(&'static str),
    MissingField(&'static str),
    InvalidFlags(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidNumber { field, text } => {
                write!(f, "{}: '{}' is not a number", field, text)
            }
            InputError::OutOfRange { field, value, max } => write!(
                f,
                "{}: value {:#X} is out of range (max {:#X})",
                field, value, max
            ),
            InputError::UnknownOperation(name) => write!(f, "unknown operation '{}'", name),
            InputError::UnknownField(name) => write!(f, "unknown field '{}'", name),
            InputError::DuplicateField(name) => write!(f, "field '{}' given more than once", name),
            InputError::MissingField(name) => write!(f, "missing required field '{}'", name),
            InputError::InvalidFlags(text) => write!(f, "malformed flag group '{}'", text),
        }
    }
}

impl Error for InputError {}

#[derive(Debug)]
pub enum RunError {
    Io(io::Error),
    Input {
        line: usize,
        source: InputError,
    },
    Mismatch {
        tick: usize,
        expected: String,
        received: String,
    },
    GoldenExhausted {
        tick: usize,
    },
    GoldenTrailing {
        ticks: usize,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Io(err) => write!(f, "I/O error: {}", err),
            RunError::Input { line, source } => write!(f, "line {}: {}", line, source),
            RunError::Mismatch {
                tick,
                expected,
                received,
            } => write!(
                f,
                "tick {} diverged from golden trace: expected '{}', received '{}'",
                tick, expected, received
            ),
            RunError::GoldenExhausted { tick } => {
                write!(f, "golden trace ended before tick {}", tick)
            }
            RunError::GoldenTrailing { ticks } => write!(
                f,
                "golden trace has more lines than the {} ticks in the stimulus",
                ticks
            ),
        }
    }
}

impl Error for RunError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RunError::Io(err) => Some(err),
            RunError::Input { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        RunError::Io(err)
    }
}

/// Inputs given directly on the command line have no line number.
impl From<InputError> for RunError {
    fn from(source: InputError) -> Self {
        RunError::Input { line: 0, source }
    }
}
