//! UTF-8 text source

use docflow_domain::TextSource;
use thiserror::Error;

/// Default upload limit: 10 MiB
pub const DEFAULT_MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

/// Errors turning document bytes into text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Input exceeds the configured size limit
    #[error("Input too large: {size} bytes (max: {max})")]
    TooLarge {
        /// Input size in bytes
        size: usize,
        /// Configured limit
        max: usize,
    },

    /// Input is not UTF-8
    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Input decoded to blank text
    #[error("No text could be extracted from the input")]
    Empty,
}

/// Reads plain UTF-8 documents
///
/// A leading byte-order mark and surrounding whitespace are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utf8TextSource {
    max_input_bytes: usize,
}

impl Utf8TextSource {
    /// Create a source accepting at most `max_input_bytes`
    pub fn new(max_input_bytes: usize) -> Self {
        Self { max_input_bytes }
    }

    /// Configured size limit
    pub fn max_input_bytes(&self) -> usize {
        self.max_input_bytes
    }
}

impl Default for Utf8TextSource {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_INPUT_BYTES)
    }
}

impl TextSource for Utf8TextSource {
    type Error = ExtractionError;

    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        if bytes.len() > self.max_input_bytes {
            return Err(ExtractionError::TooLarge {
                size: bytes.len(),
                max: self.max_input_bytes,
            });
        }

        let text = std::str::from_utf8(bytes)?;
        let text = text.trim_start_matches('\u{feff}').trim();
        if text.is_empty() {
            return Err(ExtractionError::Empty);
        }

        Ok(text.to_string())
    }
}
