//! Error types for pipeline assembly

use docflow_classifier::ClassifierError;
use docflow_extractor::ExtractorError;
use thiserror::Error;

/// Errors raised while loading configuration or assembling a pipeline
///
/// Processing a document never produces one of these.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Keyword table rejected by the classifier
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// Extractor rejected by the schema registry
    #[error("Extractor error: {0}")]
    Extractor(#[from] ExtractorError),
}
