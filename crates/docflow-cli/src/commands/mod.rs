//! Command implementations.

pub mod categories;
pub mod classify;
pub mod extract;
pub mod process;

pub use self::categories::execute_categories;
pub use self::classify::execute_classify;
pub use self::extract::execute_extract;
pub use self::process::execute_process;

use crate::error::Result;
use docflow_domain::TextSource;
use docflow_pipeline::Utf8TextSource;
use std::io::Read;
use std::path::Path;

/// Read a document from a path, or from stdin when the path is `-`.
pub fn read_input(input: &str) -> Result<Vec<u8>> {
    if input == "-" {
        let mut bytes = Vec::new();
        std::io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        Ok(std::fs::read(Path::new(input))?)
    }
}

/// Read a document and decode it to text.
pub fn load_text(input: &str, source: &Utf8TextSource) -> Result<String> {
    let bytes = read_input(input)?;
    Ok(source.extract_text(&bytes)?)
}
