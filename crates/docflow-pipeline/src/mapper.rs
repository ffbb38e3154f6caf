//! Category to workflow task mapping

use crate::PipelineError;
use docflow_domain::{Category, TaskIntent};

/// Lookup table from category to downstream task type
///
/// `unknown` never maps to a task. Custom categories map to nothing unless a
/// mapping is added for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowMapper {
    mappings: Vec<(Category, String)>,
}

impl WorkflowMapper {
    /// Create a mapper with no mappings
    pub fn empty() -> Self {
        Self {
            mappings: Vec::new(),
        }
    }

    /// Create a mapper with the built-in task types
    pub fn builtin() -> Self {
        Self {
            mappings: vec![
                (Category::Invoice, "verify_invoice".to_string()),
                (Category::Resume, "screen_candidate".to_string()),
                (Category::Legal, "review_compliance".to_string()),
            ],
        }
    }

    /// Map a category to a task type, replacing any existing mapping
    ///
    /// # Errors
    ///
    /// Returns an error for `unknown` or a blank task type.
    pub fn with_mapping(
        mut self,
        category: Category,
        task_type: impl Into<String>,
    ) -> Result<Self, PipelineError> {
        let task_type = task_type.into();
        if category.is_unknown() {
            return Err(PipelineError::InvalidConfig(
                "category 'unknown' cannot map to a task".to_string(),
            ));
        }
        if task_type.trim().is_empty() {
            return Err(PipelineError::InvalidConfig(format!(
                "task type for '{}' is blank",
                category
            )));
        }

        match self.mappings.iter_mut().find(|(c, _)| *c == category) {
            Some(entry) => entry.1 = task_type,
            None => self.mappings.push((category, task_type)),
        }
        Ok(self)
    }

    /// Task type for a category, if any
    pub fn task_type(&self, category: &Category) -> Option<&str> {
        self.mappings
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, task)| task.as_str())
    }

    /// Describe the downstream work implied by a category
    pub fn map_to_task(&self, category: &Category) -> TaskIntent {
        TaskIntent::new(
            category.clone(),
            self.task_type(category).map(str::to_string),
        )
    }

    /// All mappings in insertion order
    pub fn mappings(&self) -> impl Iterator<Item = (&Category, &str)> {
        self.mappings.iter().map(|(c, t)| (c, t.as_str()))
    }
}

impl Default for WorkflowMapper {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_mappings() {
        let mapper = WorkflowMapper::builtin();
        assert_eq!(mapper.task_type(&Category::Invoice), Some("verify_invoice"));
        assert_eq!(mapper.task_type(&Category::Resume), Some("screen_candidate"));
        assert_eq!(mapper.task_type(&Category::Legal), Some("review_compliance"));
    }

    #[test]
    fn test_unknown_and_custom_map_to_nothing() {
        let mapper = WorkflowMapper::builtin();

        let intent = mapper.map_to_task(&Category::Unknown);
        assert_eq!(intent.task_type, None);
        assert_eq!(intent.source_category, Category::Unknown);

        assert!(!mapper.map_to_task(&Category::parse("receipt")).has_task());
    }

    #[test]
    fn test_custom_mapping() {
        let po = Category::parse("purchase_order");
        let mapper = WorkflowMapper::builtin()
            .with_mapping(po.clone(), "approve_purchase")
            .unwrap();

        let intent = mapper.map_to_task(&po);
        assert_eq!(intent.task_type.as_deref(), Some("approve_purchase"));
        assert_eq!(mapper.mappings().count(), 4);
    }

    #[test]
    fn test_mapping_replaces_existing() {
        let mapper = WorkflowMapper::builtin()
            .with_mapping(Category::Invoice, "pay_invoice")
            .unwrap();
        assert_eq!(mapper.task_type(&Category::Invoice), Some("pay_invoice"));
        assert_eq!(mapper.mappings().count(), 3);
    }

    #[test]
    fn test_invalid_mappings_rejected() {
        assert!(WorkflowMapper::builtin()
            .with_mapping(Category::Unknown, "triage")
            .is_err());
        assert!(WorkflowMapper::builtin()
            .with_mapping(Category::parse("memo"), "  ")
            .is_err());
    }
}
