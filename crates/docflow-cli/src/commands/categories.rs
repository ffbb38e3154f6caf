//! Categories command implementation.

use crate::error::Result;
use crate::output::Formatter;
use docflow_pipeline::DocumentPipeline;

/// Execute the categories command.
pub fn execute_categories(pipeline: &DocumentPipeline, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_categories(&pipeline.categories())?);
    Ok(())
}
