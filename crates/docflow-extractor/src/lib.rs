//! DocFlow Extractor
//!
//! Pulls typed fields out of raw document text once its category is known.
//!
//! # Overview
//!
//! Each category has an extractor declaring an ordered list of fields, and
//! each field has a pure strategy function `&str -> Option<FieldValue>`. The
//! [`ExtractorDispatcher`] runs every strategy of the requested category
//! independently, so a field that cannot be located (or a strategy that
//! fails) only leaves that one field absent.
//!
//! # Architecture
//!
//! ```text
//! Category + Text → ExtractorDispatcher → FieldSchemaRegistry → strategies → ExtractedFieldSet
//! ```
//!
//! Built-in extractors:
//!
//! - **Invoice**: `invoice_no`, `vendor`, `amount`, `due_date`, `date`,
//!   `tax_amount`, `currency`
//! - **Resume**: `name`, `email`, `phone`, `skills`, `experience_years`,
//!   `education`, `current_role`
//! - **Legal**: `has_sections`, `has_dates`, `section_count`, `case_number`,
//!   `effective_date`
//! - **Generic**: no fields; serves `unknown` and unregistered categories
//!
//! # Example Usage
//!
//! ```
//! use docflow_domain::{Category, FieldValue};
//! use docflow_extractor::ExtractorDispatcher;
//!
//! let dispatcher = ExtractorDispatcher::builtin();
//! let fields = dispatcher.extract(
//!     &Category::Invoice,
//!     "Invoice No: INV-2024-001\nVendor: ABC Corp\nTotal: $1,500.00\nDue Date: 2024-12-31",
//! );
//!
//! assert_eq!(fields.get("invoice_no"), Some(&FieldValue::from("INV-2024-001")));
//! assert_eq!(fields.get("amount"), Some(&FieldValue::Number(1500.0)));
//! assert!(fields.contains_field("tax_amount"));
//! ```

#![warn(missing_docs)]

mod dispatcher;
mod error;
mod generic;
pub mod invoice;
pub mod legal;
pub mod patterns;
mod registry;
pub mod resume;

#[cfg(test)]
mod tests;

pub use dispatcher::ExtractorDispatcher;
pub use error::ExtractorError;
pub use generic::GenericExtractor;
pub use invoice::InvoiceExtractor;
pub use legal::LegalExtractor;
pub use registry::FieldSchemaRegistry;
pub use resume::ResumeExtractor;
