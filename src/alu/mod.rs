mod adder;
mod alu_output;
mod alu_trait;
mod dispatch;
mod flags;

pub use adder::{AdderOutput, bit_add, byte_add, byte_sub};
pub use alu_output::AluOutput;
pub use alu_trait::Alu;
pub use dispatch::dispatch;
pub use flags::{DerivedFlags, derive_flags};
