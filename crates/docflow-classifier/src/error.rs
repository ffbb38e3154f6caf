//! Classifier error types

use thiserror::Error;

/// Errors raised while registering keyword tables
///
/// Classification itself never fails; these only surface at startup when a
/// table is malformed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClassifierError {
    /// The same category was registered twice
    #[error("Category '{0}' is already registered")]
    DuplicateCategory(String),

    /// `unknown` is the fallback and cannot carry keywords
    #[error("Category '{0}' is reserved")]
    ReservedCategory(String),

    /// A table without keywords can never score
    #[error("Keyword table for '{0}' is empty")]
    EmptyTable(String),

    /// Keyword term is blank
    #[error("Keyword table for '{0}' contains a blank term")]
    BlankKeyword(String),

    /// Weights start at 1
    #[error("Keyword '{term}' in '{category}' has weight 0")]
    ZeroWeight {
        /// Table category
        category: String,
        /// Offending term
        term: String,
    },
}
