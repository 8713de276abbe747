mod flag_action;
mod flagspec;
mod opcode;
mod opcode_info;
mod table;

pub use flag_action::FlagAction;
pub use flagspec::FlagSpec;
pub use opcode::OpCode;
pub use opcode_info::{OpcodeInfo, Operand};
pub use table::OPCODES; // Generated code is included here.
