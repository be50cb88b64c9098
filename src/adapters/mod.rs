// Adapters layer: concrete input sources.

use crate::domain::ports::InputSource;
use crate::utils::error::{Result, SignError};
use std::io::BufRead;

/// Reads lines from `reader` until one carries a token and returns that line.
/// Returns an empty string when the stream ends first.
pub fn read_token_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.read_line(&mut line).map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => SignError::InvalidEncoding,
            _ => SignError::Io(e),
        })?;

        if read == 0 || !line.trim().is_empty() {
            return Ok(line);
        }
    }
}

#[derive(Debug, Default)]
pub struct StdinSource;

impl StdinSource {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for StdinSource {
    fn read_input(&mut self) -> Result<String> {
        read_token_line(&mut std::io::stdin().lock())
    }
}

/// In-memory input, handy for embedding and tests.
#[derive(Debug, Clone)]
pub struct StringSource {
    text: String,
}

impl StringSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl InputSource for StringSource {
    fn read_input(&mut self) -> Result<String> {
        Ok(self.text.clone())
    }
}
