use super::*;

// The generated table needs OpcodeInfo, OpCode, Operand, FlagSpec and
// FlagAction in scope, all of which come in through `super::*`.
include!(concat!(env!("OUT_DIR"), "/opcodes_generated.rs"));
