//! Fallback extractor

use docflow_domain::{Category, FieldExtractor, FieldSchema};

/// Extractor for `unknown` and every category without a registered extractor
///
/// Declares no fields, so dispatching to it always yields an empty set.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericExtractor;

impl FieldExtractor for GenericExtractor {
    fn category(&self) -> Category {
        Category::Unknown
    }

    fn schema(&self) -> &[FieldSchema] {
        &[]
    }
}
