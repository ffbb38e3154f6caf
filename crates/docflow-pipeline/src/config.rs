//! Pipeline configuration
//!
//! Custom categories are declared in TOML and appended after the built-in
//! invoice, resume and legal categories:
//!
//! ```toml
//! max_input_bytes = 10485760
//!
//! [[categories]]
//! name = "purchase_order"
//! keywords = ["purchase order", { term = "po number", weight = 3 }]
//! task_type = "approve_purchase"
//! ```

use crate::{
    DocumentPipeline, PipelineError, Utf8TextSource, WorkflowMapper, DEFAULT_MAX_INPUT_BYTES,
};
use docflow_classifier::{Classifier, Keyword, KeywordTable};
use docflow_domain::Category;
use docflow_extractor::ExtractorDispatcher;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Configuration for building a [`DocumentPipeline`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Largest accepted input document (bytes)
    /// Default: 10 MiB
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// Custom categories, in registration order
    #[serde(default)]
    pub categories: Vec<CategoryConfig>,
}

/// A custom category and its keyword table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Category identifier
    pub name: String,

    /// Keywords scored for this category
    pub keywords: Vec<KeywordEntry>,

    /// Task created for documents of this category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_type: Option<String>,
}

/// A keyword, either a bare term (weight 1) or a weighted term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordEntry {
    /// Term with the default weight
    Term(String),

    /// Term with an explicit weight
    Weighted {
        /// Matched text
        term: String,
        /// Points per occurrence
        weight: u32,
    },
}

impl KeywordEntry {
    /// Matched text
    pub fn term(&self) -> &str {
        match self {
            KeywordEntry::Term(term) | KeywordEntry::Weighted { term, .. } => term,
        }
    }

    /// Points per occurrence
    pub fn weight(&self) -> u32 {
        match self {
            KeywordEntry::Term(_) => 1,
            KeywordEntry::Weighted { weight, .. } => *weight,
        }
    }

    fn to_keyword(&self) -> Keyword {
        Keyword::new(self.term(), self.weight())
    }
}

fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            categories: Vec::new(),
        }
    }
}

impl PipelineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.max_input_bytes == 0 {
            return invalid("max_input_bytes must be greater than 0".to_string());
        }

        let mut seen = HashSet::new();
        for entry in &self.categories {
            let name = entry.name.trim();
            if name.is_empty() {
                return invalid("category name cannot be empty".to_string());
            }

            let category = Category::parse(name);
            if category.is_builtin() || category.is_unknown() {
                return invalid(format!("category '{}' collides with a built-in category", name));
            }
            if !seen.insert(category) {
                return invalid(format!("category '{}' is declared twice", name));
            }

            if entry.keywords.is_empty() {
                return invalid(format!("category '{}' has no keywords", name));
            }
            for keyword in &entry.keywords {
                if keyword.term().trim().is_empty() {
                    return invalid(format!("category '{}' has a blank keyword", name));
                }
                if keyword.weight() == 0 {
                    return invalid(format!(
                        "keyword '{}' in '{}' has weight 0",
                        keyword.term(),
                        name
                    ));
                }
            }

            if entry.task_type.as_ref().is_some_and(|t| t.trim().is_empty()) {
                return invalid(format!("category '{}' has a blank task_type", name));
            }
        }

        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, PipelineError> {
        let config: PipelineConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, PipelineError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Text source honouring `max_input_bytes`
    pub fn text_source(&self) -> Utf8TextSource {
        Utf8TextSource::new(self.max_input_bytes)
    }

    /// Build a pipeline with the built-in categories plus the configured ones
    pub fn build(&self) -> Result<DocumentPipeline, PipelineError> {
        self.validate()?;

        let mut classifier = Classifier::builtin();
        let mut mapper = WorkflowMapper::builtin();

        for entry in &self.categories {
            let category = Category::parse(&entry.name);
            let keywords = entry.keywords.iter().map(KeywordEntry::to_keyword).collect();
            classifier = classifier.with_table(KeywordTable::new(category.clone(), keywords))?;

            if let Some(task_type) = &entry.task_type {
                mapper = mapper.with_mapping(category, task_type.as_str())?;
            }
        }

        info!(
            "Built document pipeline with {} custom categories",
            self.categories.len()
        );

        Ok(DocumentPipeline::new(
            classifier,
            ExtractorDispatcher::builtin(),
            mapper,
        ))
    }
}

fn invalid<T>(message: String) -> Result<T, PipelineError> {
    Err(PipelineError::InvalidConfig(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PURCHASE_ORDERS: &str = r#"
        max_input_bytes = 2048

        [[categories]]
        name = "purchase_order"
        keywords = ["purchase order", { term = "po number", weight = 3 }]
        task_type = "approve_purchase"

        [[categories]]
        name = "memo"
        keywords = ["memo"]
    "#;

    #[test]
    fn test_default_config_is_valid() {
        let config = PipelineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_input_bytes, 10_485_760);
    }

    #[test]
    fn test_parse_toml() {
        let config = PipelineConfig::from_toml(PURCHASE_ORDERS).unwrap();
        assert_eq!(config.max_input_bytes, 2048);
        assert_eq!(config.categories.len(), 2);

        let po = &config.categories[0];
        assert_eq!(po.keywords[0], KeywordEntry::Term("purchase order".to_string()));
        assert_eq!(po.keywords[1].weight(), 3);
        assert_eq!(po.task_type.as_deref(), Some("approve_purchase"));
        assert_eq!(config.categories[1].task_type, None);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = PipelineConfig::from_toml("").unwrap();
        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PipelineConfig::from_toml(PURCHASE_ORDERS).unwrap();
        let toml_str = config.to_toml().unwrap();
        let parsed = PipelineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_build_appends_custom_categories() {
        let pipeline = PipelineConfig::from_toml(PURCHASE_ORDERS)
            .unwrap()
            .build()
            .unwrap();

        let order: Vec<&str> = pipeline.classifier().categories().map(|c| c.as_str()).collect();
        assert_eq!(order, vec!["invoice", "resume", "legal", "purchase_order", "memo"]);

        let doc = pipeline.process("PO Number 5512 for this purchase order");
        assert_eq!(doc.classification.category(), &Category::parse("purchase_order"));
        assert_eq!(doc.task.task_type.as_deref(), Some("approve_purchase"));
        assert!(doc.fields.is_empty());
    }

    #[test]
    fn test_invalid_configs() {
        let cases = [
            "max_input_bytes = 0",
            "[[categories]]\nname = \"\"\nkeywords = [\"x\"]",
            "[[categories]]\nname = \"Invoice\"\nkeywords = [\"x\"]",
            "[[categories]]\nname = \"unknown\"\nkeywords = [\"x\"]",
            "[[categories]]\nname = \"memo\"\nkeywords = []",
            "[[categories]]\nname = \"memo\"\nkeywords = [\"  \"]",
            "[[categories]]\nname = \"memo\"\nkeywords = [{ term = \"memo\", weight = 0 }]",
            "[[categories]]\nname = \"memo\"\nkeywords = [\"memo\"]\ntask_type = \"\"",
            "[[categories]]\nname = \"memo\"\nkeywords = [\"a\"]\n[[categories]]\nname = \"MEMO\"\nkeywords = [\"b\"]",
        ];

        for case in cases {
            let result = PipelineConfig::from_toml(case);
            assert!(
                matches!(result, Err(PipelineError::InvalidConfig(_))),
                "expected rejection for: {case}"
            );
        }
    }

    #[test]
    fn test_malformed_toml() {
        let result = PipelineConfig::from_toml("categories = 5");
        assert!(matches!(result, Err(PipelineError::TomlParse(_))));
    }
}
