pub mod alu;
pub mod args;
pub mod constants;
pub mod error;
pub mod opcodes;
pub mod register;
pub mod session;
pub mod stimulus;

use error::RunError;
use opcodes::OPCODES;
use register::{StateRegister, TickInputs};
use session::{SessionHandler, select_session_impl};
use std::io;
use std::io::Write;
use std::path::PathBuf;

pub fn setup_logging(log_path: &Option<PathBuf>) -> Result<(), io::Error> {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    // Plain messages, the trace lines carry their own structure.
    builder.format(|buf, record| writeln!(buf, "{}", record.args()));

    // If a path is provided, redirect output to the file
    if let Some(path) = log_path {
        let file = std::fs::File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Entry point for the binary, dispatches on the parsed arguments.
pub fn run(args: args::Args) -> Result<(), RunError> {
    setup_logging(&args.log_path)?;

    if args.list_ops {
        for info in OPCODES.iter() {
            println!("{}", info);
        }
        return Ok(());
    }

    if let Some(path) = &args.stimulus {
        let ticks = stimulus::load_stimulus(path)?;
        let mut session = select_session_impl(ticks, args.golden.as_deref())?;
        while session.next()? {}
        return Ok(());
    }

    let inputs = single_tick_inputs(&args)?;
    let mut register = StateRegister::new();
    let state = register.tick(&inputs);
    println!("{} | {}", inputs, state.to_trace_string());
    Ok(())
}

fn single_tick_inputs(args: &args::Args) -> Result<TickInputs, RunError> {
    let op = args
        .op
        .as_deref()
        .ok_or(error::InputError::MissingField("OP"))?;

    let inputs = TickInputs::new(
        stimulus::parse_byte("A", &args.a)?,
        stimulus::parse_byte("B", &args.b)?,
        stimulus::parse_operation(op)?,
    );
    Ok(inputs.with_reset(args.reset).with_enable(!args.disable))
}
