#![allow(dead_code)]

pub mod ring_logger;

pub use ring_logger::{clear_log, dump_log, init_logger, logged_lines};

use std::path::Path;

use byte_alu::register::{AluState, StateRegister, TickInputs};
use byte_alu::session::{GoldenSession, SessionHandler};
use byte_alu::stimulus::load_stimulus;

/// Runs a stimulus file against its golden trace, panicking on the first divergence.
pub fn run_vector(stimulus: &str, golden: &str) {
    let ticks = load_stimulus(Path::new(stimulus))
        .unwrap_or_else(|e| panic!("{}: {}", stimulus, e));
    let mut session = GoldenSession::open(ticks, Path::new(golden))
        .unwrap_or_else(|e| panic!("{}: {}", golden, e));

    loop {
        match session.next() {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => panic!("{}: {}", stimulus, e),
        }
    }
}

/// Ticks a fresh register once with the given operation enabled.
pub fn eval(a: u8, b: u8, op: byte_alu::opcodes::OpCode) -> AluState {
    let mut register = StateRegister::new();
    *register.tick(&TickInputs::new(a, b, op))
}
