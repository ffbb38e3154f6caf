//! Keyword tables and the built-in category vocabularies

use crate::ClassifierError;
use docflow_domain::Category;

/// A scoring term and its per-occurrence weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    term: String,
    weight: u32,
}

impl Keyword {
    /// Create a keyword; the term is lowercased for matching
    pub fn new(term: impl AsRef<str>, weight: u32) -> Self {
        Self {
            term: term.as_ref().to_lowercase(),
            weight,
        }
    }

    /// Create a keyword with the default weight of 1
    pub fn unweighted(term: impl AsRef<str>) -> Self {
        Self::new(term, 1)
    }

    /// Lowercased term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Weight added per occurrence
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Weighted occurrence count in already-lowercased text
    fn score(&self, lowered: &str) -> u32 {
        let occurrences = lowered.matches(self.term.as_str()).count();
        u32::try_from(occurrences)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.weight)
    }
}

/// Weighted keyword set for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    category: Category,
    keywords: Vec<Keyword>,
}

impl KeywordTable {
    /// Create a table from keywords
    pub fn new(category: Category, keywords: Vec<Keyword>) -> Self {
        Self { category, keywords }
    }

    /// Create a table from `(term, weight)` pairs
    pub fn from_terms(category: Category, terms: &[(&str, u32)]) -> Self {
        Self::new(
            category,
            terms.iter().map(|(t, w)| Keyword::new(t, *w)).collect(),
        )
    }

    /// Category this table scores
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Keywords in declaration order
    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    /// Check the table can take part in scoring
    pub fn validate(&self) -> Result<(), ClassifierError> {
        let name = self.category.as_str().to_string();

        if self.category.is_unknown() {
            return Err(ClassifierError::ReservedCategory(name));
        }
        if self.keywords.is_empty() {
            return Err(ClassifierError::EmptyTable(name));
        }
        for keyword in &self.keywords {
            if keyword.term.trim().is_empty() {
                return Err(ClassifierError::BlankKeyword(name));
            }
            if keyword.weight == 0 {
                return Err(ClassifierError::ZeroWeight {
                    category: name,
                    term: keyword.term.clone(),
                });
            }
        }
        Ok(())
    }

    /// Score already-lowercased text against this table
    pub(crate) fn score(&self, lowered: &str) -> u32 {
        self.keywords
            .iter()
            .fold(0u32, |acc, k| acc.saturating_add(k.score(lowered)))
    }
}

const INVOICE_TERMS: &[(&str, u32)] = &[
    ("invoice", 2),
    ("invoice number", 2),
    ("invoice no", 2),
    ("bill to", 1),
    ("ship to", 1),
    ("total amount", 1),
    ("amount due", 2),
    ("balance due", 2),
    ("due date", 1),
    ("payment terms", 1),
    ("gst", 1),
    ("tax", 1),
    ("subtotal", 1),
    ("grand total", 1),
    ("vendor", 1),
    ("supplier", 1),
];

const RESUME_TERMS: &[(&str, u32)] = &[
    ("resume", 2),
    ("curriculum vitae", 3),
    ("cv", 1),
    ("objective", 1),
    ("summary", 1),
    ("experience", 1),
    ("education", 1),
    ("skills", 1),
    ("qualifications", 1),
    ("employment history", 2),
    ("work experience", 2),
    ("professional experience", 2),
    ("projects", 1),
    ("certifications", 1),
    ("references", 1),
];

const LEGAL_TERMS: &[(&str, u32)] = &[
    ("legal notice", 2),
    ("legal document", 2),
    ("court", 1),
    ("judgment", 1),
    ("order", 1),
    ("section", 1),
    ("subsection", 1),
    ("act", 1),
    ("statute", 1),
    ("regulation", 1),
    ("complaint", 1),
    ("petition", 1),
    ("affidavit", 2),
    ("warrant", 1),
    ("subpoena", 2),
    ("law", 1),
    ("legal", 1),
    ("attorney", 1),
    ("counsel", 1),
    ("plaintiff", 2),
    ("defendant", 2),
];

/// Built-in tables in registration order: invoice, resume, legal
pub fn builtin_tables() -> Vec<KeywordTable> {
    vec![
        KeywordTable::from_terms(Category::Invoice, INVOICE_TERMS),
        KeywordTable::from_terms(Category::Resume, RESUME_TERMS),
        KeywordTable::from_terms(Category::Legal, LEGAL_TERMS),
    ]
}
