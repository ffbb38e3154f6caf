//! Classify command implementation.

use super::load_text;
use crate::cli::InputArgs;
use crate::error::Result;
use crate::output::Formatter;
use docflow_pipeline::{DocumentPipeline, Utf8TextSource};

/// Execute the classify command.
pub fn execute_classify(
    args: InputArgs,
    pipeline: &DocumentPipeline,
    source: &Utf8TextSource,
    formatter: &Formatter,
) -> Result<()> {
    let text = load_text(&args.input, source)?;
    let result = pipeline.classify(&text);
    println!("{}", formatter.format_classification(&result)?);
    Ok(())
}
