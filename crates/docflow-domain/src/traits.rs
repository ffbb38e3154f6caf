//! Trait definitions for the pipeline boundaries
//!
//! Extractors are selected by table lookup on their category; text sources
//! are supplied by whatever layer owns the binary documents.

use crate::{Category, FieldSchema};

/// A category-specific set of field strategies
///
/// Implemented once per category (invoice, resume, legal, generic) and
/// registered in a schema registry at startup. Implementations hold no
/// mutable state, so a single instance is shared across threads.
pub trait FieldExtractor: Send + Sync {
    /// Category this extractor serves
    fn category(&self) -> Category;

    /// Declared fields in output order
    fn schema(&self) -> &[FieldSchema];
}

/// Trait for turning a binary document into raw text
///
/// Implemented by the ingestion layer (docflow-pipeline ships a UTF-8 source)
pub trait TextSource {
    /// Error type for extraction failures (corrupted input, size limits)
    type Error;

    /// Extract raw text from document bytes
    fn extract_text(&self, bytes: &[u8]) -> Result<String, Self::Error>;
}
