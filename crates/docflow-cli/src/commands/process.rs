//! Process command implementation.

use super::read_input;
use crate::cli::InputArgs;
use crate::error::Result;
use crate::output::Formatter;
use docflow_pipeline::{DocumentPipeline, Utf8TextSource};

/// Execute the process command.
pub fn execute_process(
    args: InputArgs,
    pipeline: &DocumentPipeline,
    source: &Utf8TextSource,
    formatter: &Formatter,
) -> Result<()> {
    let bytes = read_input(&args.input)?;
    let doc = pipeline.process_bytes(source, &bytes)?;
    println!("{}", formatter.format_document(&doc)?);
    Ok(())
}
