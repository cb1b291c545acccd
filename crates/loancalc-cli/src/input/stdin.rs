use log::debug;
use serde::de::DeserializeOwned;
use std::io::{self, Read};

/// Deserialize JSON piped on stdin.
///
/// `None` when stdin is a terminal or the pipe carried only whitespace, so
/// the caller can fall back to command-line flags.
pub fn read_stdin<T: DeserializeOwned>() -> Result<Option<T>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    debug!("reading loan input from stdin ({} bytes)", trimmed.len());
    let value = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse stdin as loan input: {e}"))?;
    Ok(Some(value))
}
