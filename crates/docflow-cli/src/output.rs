//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use docflow_domain::{Category, ClassificationResult, ExtractedFieldSet, FieldValue};
use docflow_pipeline::{CategoryInfo, ProcessedDocument};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Placeholder for a field that was not located
const ABSENT: &str = "-";

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a classification result.
    pub fn format_classification(&self, result: &ClassificationResult) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
            OutputFormat::Quiet => Ok(result.category().to_string()),
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                self.category_line(result.category()),
                self.scores_table(result)
            )),
        }
    }

    /// Format an extracted field set.
    pub fn format_fields(&self, category: &Category, fields: &ExtractedFieldSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(fields)?),
            OutputFormat::Quiet => Ok(fields_quiet(fields)),
            OutputFormat::Table => Ok(format!(
                "{}\n{}",
                self.category_line(category),
                self.fields_table(category, fields)
            )),
        }
    }

    /// Format a fully processed document.
    pub fn format_document(&self, doc: &ProcessedDocument) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(doc)?),
            OutputFormat::Quiet => Ok(format!(
                "{}\t{}",
                doc.classification.category(),
                doc.task.task_type.as_deref().unwrap_or(ABSENT)
            )),
            OutputFormat::Table => {
                let category = doc.classification.category();
                let task = match &doc.task.task_type {
                    Some(task) => self.colorize(task, "cyan"),
                    None => self.colorize("none", "yellow"),
                };
                Ok(format!(
                    "{}\nTask: {}\nStats: {} chars, {} words, {} lines\n{}\n{}",
                    self.category_line(category),
                    task,
                    doc.stats.text_length,
                    doc.stats.word_count,
                    doc.stats.line_count,
                    self.scores_table(&doc.classification),
                    self.fields_table(category, &doc.fields)
                ))
            }
        }
    }

    /// Format the category listing.
    pub fn format_categories(&self, categories: &[CategoryInfo]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(categories)?),
            OutputFormat::Quiet => Ok(categories
                .iter()
                .map(|c| c.category.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Category", "Fields", "Task"]);
                for info in categories {
                    let fields = if info.fields.is_empty() {
                        ABSENT.to_string()
                    } else {
                        info.fields.join(", ")
                    };
                    builder.push_record([
                        info.category.to_string(),
                        fields,
                        info.task_type.clone().unwrap_or_else(|| ABSENT.to_string()),
                    ]);
                }
                Ok(styled(builder))
            }
        }
    }

    fn category_line(&self, category: &Category) -> String {
        let name = if category.is_unknown() {
            self.colorize(category.as_str(), "yellow")
        } else {
            self.colorize(category.as_str(), "green")
        };
        format!("Category: {}", name)
    }

    fn scores_table(&self, result: &ClassificationResult) -> String {
        if result.scores().is_empty() {
            return self.colorize("No categories registered.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Category", "Score"]);
        for entry in result.scores() {
            let marker = if &entry.category == result.category() { " *" } else { "" };
            builder.push_record([format!("{}{}", entry.category, marker), entry.score.to_string()]);
        }
        styled(builder)
    }

    fn fields_table(&self, category: &Category, fields: &ExtractedFieldSet) -> String {
        if fields.is_empty() {
            return self.colorize(&format!("No fields declared for '{}'.", category), "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (name, value) in fields.iter() {
            let shown = value.map_or_else(|| ABSENT.to_string(), display_value);
            builder.push_record([name.to_string(), shown]);
        }
        styled(builder)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn fields_quiet(fields: &ExtractedFieldSet) -> String {
    fields
        .iter()
        .filter_map(|(name, value)| value.map(|v| format!("{}={}", name, display_value(v))))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a field value for humans.
pub fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(b) => String::from(if *b { "yes" } else { "no" }),
        FieldValue::Integer(i) => i.to_string(),
        FieldValue::Number(n) => format!("{:.2}", n),
        FieldValue::Text(s) => s.clone(),
        FieldValue::List(items) => items.join(", "),
    }
}
