mod snapshot;
mod state;

pub use snapshot::StateMismatch;
pub use state::AluState;

use log::{debug, trace};
use std::fmt;

use crate::opcodes::OpCode;

/// Everything sampled on one clock edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TickInputs {
    pub a: u8,
    pub b: u8,
    pub op: OpCode,
    pub reset: bool,
    pub enable: bool,
}

impl TickInputs {
    /// An enabled, non-reset edge.
    pub fn new(a: u8, b: u8, op: OpCode) -> Self {
        Self {
            a,
            b,
            op,
            reset: false,
            enable: true,
        }
    }

    pub fn with_reset(mut self, reset: bool) -> Self {
        self.reset = reset;
        self
    }

    pub fn with_enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }
}

impl fmt::Display for TickInputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A:{:02X} B:{:02X} OP:{} RST:{} EN:{}",
            self.a, self.b, self.op, self.reset as u8, self.enable as u8
        )
    }
}

/// The only stateful part of the ALU.
///
/// Each [`StateRegister::tick`] is one rising edge: reset wins over enable,
/// enable latches the freshly computed candidate, and a disabled edge leaves
/// the held state untouched.
#[derive(Debug, Default)]
pub struct StateRegister {
    state: AluState,
}

impl StateRegister {
    pub fn new() -> Self {
        Self {
            state: AluState::default(),
        }
    }

    pub fn state(&self) -> &AluState {
        &self.state
    }

    /// Asynchronous reset, takes effect without waiting for an edge.
    pub fn reset(&mut self) {
        debug!("reset");
        self.state = AluState::default();
    }

    pub fn tick(&mut self, inputs: &TickInputs) -> &AluState {
        if inputs.reset {
            self.reset();
            return &self.state;
        }

        if !inputs.enable {
            trace!("hold {}", self.state.to_trace_string());
            return &self.state;
        }

        self.state = AluState::next(inputs.a, inputs.b, inputs.op);
        debug!("{} -> {}", inputs, self.state.to_trace_string());
        &self.state
    }
}
