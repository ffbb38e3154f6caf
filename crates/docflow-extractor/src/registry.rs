//! Field schema registry

use crate::{ExtractorError, GenericExtractor, InvoiceExtractor, LegalExtractor, ResumeExtractor};
use docflow_domain::{Category, FieldExtractor, FieldSchema};
use std::fmt;

static GENERIC: GenericExtractor = GenericExtractor;

/// Maps each category to the extractor declaring its fields
///
/// Registration happens once at startup; afterwards the registry is only
/// read. Categories without an entry resolve to [`GenericExtractor`].
pub struct FieldSchemaRegistry {
    extractors: Vec<Box<dyn FieldExtractor>>,
}

impl FieldSchemaRegistry {
    /// Create a registry with no category extractors
    pub fn empty() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create a registry with the invoice, resume and legal extractors
    pub fn builtin() -> Self {
        Self {
            extractors: vec![
                Box::new(InvoiceExtractor),
                Box::new(ResumeExtractor),
                Box::new(LegalExtractor),
            ],
        }
    }

    /// Register an extractor for its category
    ///
    /// # Errors
    ///
    /// Fails for `unknown` and for a category that already has an extractor.
    pub fn register<E>(&mut self, extractor: E) -> Result<(), ExtractorError>
    where
        E: FieldExtractor + 'static,
    {
        let category = extractor.category();
        if category.is_unknown() {
            return Err(ExtractorError::ReservedCategory(category.to_string()));
        }
        if self.lookup(&category).is_some() {
            return Err(ExtractorError::DuplicateCategory(category.to_string()));
        }
        self.extractors.push(Box::new(extractor));
        Ok(())
    }

    /// Builder form of [`register`](Self::register)
    pub fn with_extractor<E>(mut self, extractor: E) -> Result<Self, ExtractorError>
    where
        E: FieldExtractor + 'static,
    {
        self.register(extractor)?;
        Ok(self)
    }

    /// Extractor registered for exactly this category
    pub fn lookup(&self, category: &Category) -> Option<&dyn FieldExtractor> {
        self.extractors
            .iter()
            .find(|e| e.category() == *category)
            .map(|e| &**e)
    }

    /// Extractor for this category, falling back to the generic one
    pub fn resolve(&self, category: &Category) -> &dyn FieldExtractor {
        self.lookup(category).unwrap_or(&GENERIC as &dyn FieldExtractor)
    }

    /// Declared fields of a category; empty when unregistered
    pub fn schema(&self, category: &Category) -> &[FieldSchema] {
        self.resolve(category).schema()
    }

    /// Categories with an extractor, in registration order
    pub fn categories(&self) -> Vec<Category> {
        self.extractors.iter().map(|e| e.category()).collect()
    }
}

impl Default for FieldSchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for FieldSchemaRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchemaRegistry")
            .field("categories", &self.categories())
            .finish()
    }
}
