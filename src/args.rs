use std::path::PathBuf;

use clap::Parser;

/// Clocked 8-bit ALU: evaluate one operation or drive a stimulus file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Operation mnemonic (ADD, ROL, ...) or code 0-15
    #[arg(long, required_unless_present_any = ["stimulus", "list_ops"])]
    pub op: Option<String>,

    /// Operand A, decimal, 0x hex or 0b binary
    #[arg(short, long, default_value = "0")]
    pub a: String,

    /// Operand B, decimal, 0x hex or 0b binary
    #[arg(short, long, default_value = "0")]
    pub b: String,

    /// Assert reset on the evaluated tick.
    #[arg(long)]
    pub reset: bool,

    /// Deassert enable on the evaluated tick, the register holds.
    #[arg(long)]
    pub disable: bool,

    // Stimulus file, one tick per line: A:0F B:01 OP:ADD RST:0 EN:1
    #[arg(long, conflicts_with = "op")]
    pub stimulus: Option<PathBuf>,

    // Golden trace to compare every tick of the stimulus against.
    #[arg(long, requires = "stimulus", conflicts_with = "op")]
    pub golden: Option<PathBuf>,

    // Optional log path, if none given, logs go to stderr.
    #[arg(long)]
    pub log_path: Option<PathBuf>,

    /// Print the operation table and exit.
    #[arg(long)]
    pub list_ops: bool,
}
