//! Extraction dispatch

use crate::FieldSchemaRegistry;
use docflow_domain::{Category, ExtractedFieldSet, FieldSchema, FieldValue};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};

/// Runs the field strategies of a category against raw text
///
/// Every declared field appears in the result. A strategy that finds nothing,
/// or panics, leaves only its own field absent.
#[derive(Debug, Default)]
pub struct ExtractorDispatcher {
    registry: FieldSchemaRegistry,
}

impl ExtractorDispatcher {
    /// Create a dispatcher over a registry
    pub fn new(registry: FieldSchemaRegistry) -> Self {
        Self { registry }
    }

    /// Create a dispatcher over the built-in extractors
    pub fn builtin() -> Self {
        Self::new(FieldSchemaRegistry::builtin())
    }

    /// The underlying registry
    pub fn registry(&self) -> &FieldSchemaRegistry {
        &self.registry
    }

    /// Extract every declared field of `category` from `text`
    pub fn extract(&self, category: &Category, text: &str) -> ExtractedFieldSet {
        let schema = self.registry.schema(category);
        let mut fields = ExtractedFieldSet::declared(schema);

        for field in schema {
            fields.insert(field.name, run_strategy(category, field, text));
        }

        debug!(
            "Extracted {}/{} fields for '{}'",
            fields.found_count(),
            fields.len(),
            category
        );

        fields
    }
}

fn run_strategy(category: &Category, field: &FieldSchema, text: &str) -> Option<FieldValue> {
    let strategy = field.strategy;
    match panic::catch_unwind(AssertUnwindSafe(|| strategy(text))) {
        Ok(value) => value,
        Err(_) => {
            warn!(
                "Strategy for '{}.{}' panicked; field left absent",
                category, field.name
            );
            None
        }
    }
}
