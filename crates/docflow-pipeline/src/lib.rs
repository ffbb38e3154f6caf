//! DocFlow Pipeline
//!
//! Wires the classifier, the extractor dispatcher and the workflow mapper
//! into one document pipeline.
//!
//! # Architecture
//!
//! ```text
//! bytes → TextSource → text → Classifier → category ─┬→ ExtractorDispatcher → fields
//!                                                    └→ WorkflowMapper      → task intent
//! ```
//!
//! The pipeline itself holds no mutable state. Custom categories come from a
//! [`PipelineConfig`] at startup; replacing them later means building a new
//! pipeline and swapping it into a [`PipelineHandle`].
//!
//! # Example Usage
//!
//! ```
//! use docflow_pipeline::{DocumentPipeline, Utf8TextSource};
//!
//! let pipeline = DocumentPipeline::builtin();
//! let doc = pipeline
//!     .process_bytes(&Utf8TextSource::default(), b"Invoice No: A-17\nTotal: $90.00")
//!     .unwrap();
//!
//! assert_eq!(doc.classification.category().as_str(), "invoice");
//! assert_eq!(doc.task.task_type.as_deref(), Some("verify_invoice"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod mapper;
mod pipeline;
mod source;

pub use config::{CategoryConfig, KeywordEntry, PipelineConfig};
pub use error::PipelineError;
pub use mapper::WorkflowMapper;
pub use pipeline::{
    CategoryInfo, DocumentPipeline, DocumentStats, PipelineHandle, ProcessedDocument,
};
pub use source::{ExtractionError, Utf8TextSource, DEFAULT_MAX_INPUT_BYTES};
