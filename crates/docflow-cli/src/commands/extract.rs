//! Extract command implementation.

use super::load_text;
use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use docflow_domain::Category;
use docflow_pipeline::{DocumentPipeline, Utf8TextSource};

/// Execute the extract command.
pub fn execute_extract(
    args: ExtractArgs,
    pipeline: &DocumentPipeline,
    source: &Utf8TextSource,
    formatter: &Formatter,
) -> Result<()> {
    let text = load_text(&args.input, source)?;

    let category = match args.category.as_deref() {
        Some(name) => resolve_category(name, pipeline)?,
        None => pipeline.classify(&text).into_category(),
    };

    let fields = pipeline.extract(&category, &text);
    println!("{}", formatter.format_fields(&category, &fields)?);
    Ok(())
}

/// Parse a user-supplied category name, rejecting names the pipeline does not know.
pub fn resolve_category(name: &str, pipeline: &DocumentPipeline) -> Result<Category> {
    let category = Category::parse(name);
    let known = category.is_unknown() || pipeline.classifier().categories().any(|c| *c == category);
    if !known {
        return Err(CliError::InvalidInput(format!(
            "Unknown category '{}' (see 'docflow categories')",
            name.trim()
        )));
    }
    Ok(category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin_names() {
        let pipeline = DocumentPipeline::builtin();
        assert_eq!(resolve_category("Invoice", &pipeline).unwrap(), Category::Invoice);
        assert_eq!(resolve_category(" resume ", &pipeline).unwrap(), Category::Resume);
        assert!(resolve_category("unknown", &pipeline).unwrap().is_unknown());
    }

    #[test]
    fn test_resolve_rejects_unregistered() {
        let pipeline = DocumentPipeline::builtin();
        let result = resolve_category("receipt", &pipeline);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
