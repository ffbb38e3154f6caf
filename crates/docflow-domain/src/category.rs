//! Category module - the structural class assigned to a document

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structural category of a document
///
/// The string identifiers (`invoice`, `resume`, `legal`, `unknown`) are shared
/// with persistence and task creation and must stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    /// Bills and invoices
    Invoice,

    /// Resumes and CVs
    Resume,

    /// Court filings, contracts, statutes
    Legal,

    /// Nothing scored above zero
    #[default]
    Unknown,

    /// A category registered at startup (lowercase identifier)
    Custom(String),
}

impl Category {
    /// Built-in categories in registration order
    pub const BUILTIN: [Category; 3] = [Category::Invoice, Category::Resume, Category::Legal];

    /// Build a category from an identifier
    ///
    /// Identifiers are trimmed and lowercased. Built-in names map to their
    /// variants, anything else becomes [`Category::Custom`].
    ///
    /// # Examples
    ///
    /// ```
    /// use docflow_domain::Category;
    ///
    /// assert_eq!(Category::parse(" Invoice "), Category::Invoice);
    /// assert_eq!(
    ///     Category::parse("Purchase_Order"),
    ///     Category::Custom("purchase_order".to_string())
    /// );
    /// ```
    pub fn parse(s: &str) -> Self {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "invoice" => Category::Invoice,
            "resume" => Category::Resume,
            "legal" => Category::Legal,
            "unknown" => Category::Unknown,
            _ => Category::Custom(normalized),
        }
    }

    /// Get the stable string identifier
    pub fn as_str(&self) -> &str {
        match self {
            Category::Invoice => "invoice",
            Category::Resume => "resume",
            Category::Legal => "legal",
            Category::Unknown => "unknown",
            Category::Custom(name) => name,
        }
    }

    /// Whether this is one of the built-in categories (including `unknown`)
    pub fn is_builtin(&self) -> bool {
        !matches!(self, Category::Custom(_))
    }

    /// Whether this is the `unknown` fallback
    pub fn is_unknown(&self) -> bool {
        matches!(self, Category::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}
