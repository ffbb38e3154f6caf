//! Task module - downstream work implied by a category

use crate::Category;
use serde::Serialize;

/// Intent to create a downstream work item
///
/// Only describes the decision. Creating the persisted task record is up to
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskIntent {
    /// Task type identifier (e.g. `verify_invoice`), absent when no task applies
    pub task_type: Option<String>,

    /// Category the intent was derived from
    pub source_category: Category,
}

impl TaskIntent {
    /// Create a new task intent
    pub fn new(source_category: Category, task_type: Option<String>) -> Self {
        Self {
            task_type,
            source_category,
        }
    }

    /// Whether a task should be created
    pub fn has_task(&self) -> bool {
        self.task_type.is_some()
    }
}
