use clap::Parser;

use byte_alu::args::Args;

fn main() {
    let args = Args::parse();

    if let Err(e) = byte_alu::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
