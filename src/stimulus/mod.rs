mod loader;
mod parse;

pub use loader::{load_stimulus, parse_stimulus};
pub use parse::{parse_byte, parse_operation, parse_signal};

pub(crate) use loader::strip_comment;
