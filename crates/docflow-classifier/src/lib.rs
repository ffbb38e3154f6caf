//! DocFlow Classifier
//!
//! Assigns a structural category to raw document text by weighted keyword
//! scoring.
//!
//! Every registered category owns a [`KeywordTable`]. A document's score for a
//! category is the sum, over the table's keywords, of `weight × occurrences`,
//! matched case-insensitively as plain substrings so that OCR and PDF
//! artifacts (missing spaces, broken words) still count. The highest score
//! wins; ties go to the category registered first; all-zero means `unknown`.
//!
//! New categories are added by registering another table. The scoring
//! algorithm does not change.
//!
//! # Examples
//!
//! ```
//! use docflow_classifier::{Classifier, KeywordTable};
//! use docflow_domain::Category;
//!
//! let classifier = Classifier::builtin()
//!     .with_table(KeywordTable::from_terms(
//!         Category::parse("receipt"),
//!         &[("receipt", 3), ("cashier", 1)],
//!     ))
//!     .unwrap();
//!
//! let result = classifier.classify("Invoice No: 42\nAmount due: $10");
//! assert_eq!(result.category(), &Category::Invoice);
//! ```

#![warn(missing_docs)]

mod classifier;
mod error;
mod keywords;

pub use classifier::Classifier;
pub use error::ClassifierError;
pub use keywords::{builtin_tables, Keyword, KeywordTable};
