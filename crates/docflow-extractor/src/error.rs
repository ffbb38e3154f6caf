//! Error types for the extractor registry

use thiserror::Error;

/// Errors raised while registering category extractors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ExtractorError {
    /// An extractor for this category is already registered
    #[error("Extractor for '{0}' is already registered")]
    DuplicateCategory(String),

    /// `unknown` is always served by the generic extractor
    #[error("Category '{0}' is reserved for the generic extractor")]
    ReservedCategory(String),
}
