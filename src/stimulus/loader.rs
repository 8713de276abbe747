use log::info;
use std::fs;
use std::path::Path;

use crate::constants::STIMULUS_COMMENT;
use crate::error::RunError;
use crate::register::TickInputs;

/// Parses a whole stimulus text, one tick per line.
/// Blank lines and `#` comments are skipped but still counted for line numbers.
pub fn parse_stimulus(text: &str) -> Result<Vec<TickInputs>, RunError> {
    let mut ticks = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = strip_comment(raw);
        if line.is_empty() {
            continue;
        }
        let inputs = line.parse::<TickInputs>().map_err(|source| RunError::Input {
            line: index + 1,
            source,
        })?;
        ticks.push(inputs);
    }

    Ok(ticks)
}

pub fn load_stimulus(path: &Path) -> Result<Vec<TickInputs>, RunError> {
    let text = fs::read_to_string(path)?;
    let ticks = parse_stimulus(&text)?;
    info!("Loaded {} ticks from {}", ticks.len(), path.display());
    Ok(ticks)
}

pub(crate) fn strip_comment(line: &str) -> &str {
    match line.split_once(STIMULUS_COMMENT) {
        Some((content, _)) => content.trim(),
        None => line.trim(),
    }
}
