//! DocFlow Domain Layer
//!
//! This crate contains the value types and trait seams shared by every other
//! DocFlow crate. Its only external dependency is `serde`, so that results can
//! be handed to persistence and presentation layers without conversion.
//!
//! ## Key Concepts
//!
//! - **Category**: the structural class of a document (invoice, resume, legal,
//!   unknown, or a custom category registered at startup)
//! - **Classification Result**: the winning category plus the score of every
//!   registered category, in registration order
//! - **Field Schema**: a named field and the pure strategy that locates it
//! - **Extracted Field Set**: every declared field, each with an optional value
//! - **Task Intent**: which downstream work item a category calls for
//!
//! ## Architecture
//!
//! - Pure value types, no I/O
//! - Everything is immutable after construction
//! - Trait definitions for the extractor and text-source boundaries

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod classification;
pub mod field;
pub mod task;
pub mod traits;

// Re-exports for convenience
pub use category::Category;
pub use classification::{CategoryScore, ClassificationResult};
pub use field::{ExtractedFieldSet, ExtractionStrategy, FieldSchema, FieldValue};
pub use task::TaskIntent;
pub use traits::{FieldExtractor, TextSource};
