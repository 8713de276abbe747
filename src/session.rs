use log::{info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::vec::IntoIter;

use crate::error::RunError;
use crate::register::{AluState, StateRegister, TickInputs};
use crate::stimulus::strip_comment;

pub trait SessionHandler {
    /// Performs one tick. Returns `false` once the stimulus is used up.
    fn next(&mut self) -> Result<bool, RunError>;
}

/// Binds together a register and the stimulus that drives it.
pub struct Session {
    pub register: StateRegister,
    pub ticks: IntoIter<TickInputs>,
    pub current_tick: usize,
}

impl Session {
    pub fn new(ticks: Vec<TickInputs>) -> Self {
        Session {
            register: StateRegister::new(),
            ticks: ticks.into_iter(),
            current_tick: 0,
        }
    }

    /// Ticks once and returns the inputs that were sampled along with the new state.
    fn step(&mut self) -> Option<(TickInputs, AluState)> {
        let inputs = self.ticks.next()?;
        self.current_tick += 1;
        let state = *self.register.tick(&inputs);
        Some((inputs, state))
    }
}

impl SessionHandler for Session {
    fn next(&mut self) -> Result<bool, RunError> {
        match self.step() {
            Some((inputs, state)) => {
                println!(
                    "{:>4}. {} | {}",
                    self.current_tick,
                    inputs,
                    state.to_trace_string()
                );
                Ok(true)
            }
            None => {
                info!("Finished after {} ticks", self.current_tick);
                Ok(false)
            }
        }
    }
}

/// Runs a stimulus like [`Session`] but checks every tick against a golden trace.
pub struct GoldenSession<R: BufRead> {
    pub session: Session,
    pub golden_log: Lines<R>,
    pub current_line: usize,
}

impl GoldenSession<BufReader<File>> {
    pub fn open(ticks: Vec<TickInputs>, golden: &Path) -> Result<Self, RunError> {
        let file = File::open(golden)?;
        Ok(Self::new(ticks, BufReader::new(file)))
    }
}

impl<R: BufRead> GoldenSession<R> {
    pub fn new(ticks: Vec<TickInputs>, golden: R) -> Self {
        Self {
            session: Session::new(ticks),
            golden_log: golden.lines(),
            current_line: 0,
        }
    }

    /// Next golden line that is not blank or a comment.
    fn next_expected(&mut self) -> Result<Option<String>, RunError> {
        for line in self.golden_log.by_ref() {
            let line = line?;
            self.current_line += 1;
            let trimmed = strip_comment(&line);
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_string()));
            }
        }
        Ok(None)
    }
}

impl<R: BufRead> SessionHandler for GoldenSession<R> {
    fn next(&mut self) -> Result<bool, RunError> {
        let Some((_, received)) = self.session.step() else {
            if self.next_expected()?.is_some() {
                return Err(RunError::GoldenTrailing {
                    ticks: self.session.current_tick,
                });
            }
            println!("PASSED! All {} ticks matched.", self.session.current_tick);
            return Ok(false);
        };

        let tick = self.session.current_tick;
        let expected = self
            .next_expected()?
            .ok_or(RunError::GoldenExhausted { tick })?;
        let expected_state =
            AluState::from_trace_string(&expected).map_err(|source| RunError::Input {
                line: self.current_line,
                source,
            })?;

        let diffs = expected_state.compare(&received);
        if !diffs.is_empty() {
            for diff in &diffs {
                warn!(
                    "tick {}: {} expected {:02X}, got {:02X}",
                    tick, diff.field, diff.expected, diff.actual
                );
            }
            return Err(RunError::Mismatch {
                tick,
                expected,
                received: received.to_trace_string(),
            });
        }
        Ok(true)
    }
}

pub enum SessionType {
    Normal(Session),
    Golden(GoldenSession<BufReader<File>>),
}

// Implement the trait for the Enum itself
impl SessionHandler for SessionType {
    fn next(&mut self) -> Result<bool, RunError> {
        match self {
            SessionType::Normal(s) => s.next(),
            SessionType::Golden(s) => s.next(),
        }
    }
}

pub fn select_session_impl(
    ticks: Vec<TickInputs>,
    golden: Option<&Path>,
) -> Result<SessionType, RunError> {
    match golden {
        Some(path) => Ok(SessionType::Golden(GoldenSession::open(ticks, path)?)),
        None => Ok(SessionType::Normal(Session::new(ticks))),
    }
}
