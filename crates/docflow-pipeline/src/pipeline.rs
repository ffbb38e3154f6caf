//! Document pipeline and its hot-swappable handle

use crate::WorkflowMapper;
use docflow_classifier::Classifier;
use docflow_domain::{Category, ClassificationResult, ExtractedFieldSet, TaskIntent, TextSource};
use docflow_extractor::ExtractorDispatcher;
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

/// Size metrics of a processed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Length in characters
    pub text_length: usize,

    /// Whitespace-separated words
    pub word_count: usize,

    /// Lines, including blank ones
    pub line_count: usize,
}

impl DocumentStats {
    /// Measure a text
    pub fn from_text(text: &str) -> Self {
        Self {
            text_length: text.chars().count(),
            word_count: text.split_whitespace().count(),
            line_count: text.lines().count(),
        }
    }
}

/// Everything the core derives from one document
///
/// Persisting it is up to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedDocument {
    /// Winning category and per-category scores
    pub classification: ClassificationResult,

    /// Fields declared for the winning category
    pub fields: ExtractedFieldSet,

    /// Downstream work implied by the category
    pub task: TaskIntent,

    /// Size metrics
    pub stats: DocumentStats,
}

/// A registered category as seen by callers listing the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    /// Category identifier
    pub category: Category,

    /// Declared field names in output order
    pub fields: Vec<&'static str>,

    /// Task type, if the category maps to one
    pub task_type: Option<String>,
}

/// Classifier, dispatcher and mapper wired together
///
/// Immutable once built. Changing tables means building a new pipeline and
/// swapping it in through a [`PipelineHandle`].
#[derive(Debug, Default)]
pub struct DocumentPipeline {
    classifier: Classifier,
    dispatcher: ExtractorDispatcher,
    mapper: WorkflowMapper,
}

impl DocumentPipeline {
    /// Assemble a pipeline from its parts
    pub fn new(
        classifier: Classifier,
        dispatcher: ExtractorDispatcher,
        mapper: WorkflowMapper,
    ) -> Self {
        Self {
            classifier,
            dispatcher,
            mapper,
        }
    }

    /// Pipeline with the built-in categories, extractors and task types
    pub fn builtin() -> Self {
        Self::new(
            Classifier::builtin(),
            ExtractorDispatcher::builtin(),
            WorkflowMapper::builtin(),
        )
    }

    /// The classifier
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// The extractor dispatcher
    pub fn dispatcher(&self) -> &ExtractorDispatcher {
        &self.dispatcher
    }

    /// The workflow mapper
    pub fn mapper(&self) -> &WorkflowMapper {
        &self.mapper
    }

    /// Classify raw text
    pub fn classify(&self, text: &str) -> ClassificationResult {
        self.classifier.classify(text)
    }

    /// Extract the fields declared for `category`
    pub fn extract(&self, category: &Category, text: &str) -> ExtractedFieldSet {
        self.dispatcher.extract(category, text)
    }

    /// Task intent for `category`
    pub fn map_to_task(&self, category: &Category) -> TaskIntent {
        self.mapper.map_to_task(category)
    }

    /// Classify, extract and map one document
    pub fn process(&self, text: &str) -> ProcessedDocument {
        let classification = self.classify(text);
        let category = classification.category();
        let fields = self.extract(category, text);
        let task = self.map_to_task(category);
        let stats = DocumentStats::from_text(text);

        debug!(
            "Processed document: category='{}', fields={}/{}, task={:?}",
            category,
            fields.found_count(),
            fields.len(),
            task.task_type
        );

        ProcessedDocument {
            classification,
            fields,
            task,
            stats,
        }
    }

    /// Decode bytes through `source`, then process the text
    ///
    /// # Errors
    ///
    /// Returns the source's error unchanged; nothing is classified in that case.
    pub fn process_bytes<S: TextSource>(
        &self,
        source: &S,
        bytes: &[u8],
    ) -> Result<ProcessedDocument, S::Error> {
        let text = source.extract_text(bytes)?;
        Ok(self.process(&text))
    }

    /// Every classifiable category, in registration order, then `unknown`
    pub fn categories(&self) -> Vec<CategoryInfo> {
        self.classifier
            .categories()
            .chain(std::iter::once(&Category::Unknown))
            .map(|category| CategoryInfo {
                category: category.clone(),
                fields: self
                    .dispatcher
                    .registry()
                    .schema(category)
                    .iter()
                    .map(|f| f.name)
                    .collect(),
                task_type: self.mapper.task_type(category).map(str::to_string),
            })
            .collect()
    }
}

/// Shared access to the current pipeline
///
/// Readers take an `Arc` snapshot and keep using it even if a new pipeline
/// is swapped in meanwhile. A swap replaces the whole pipeline at once.
#[derive(Debug)]
pub struct PipelineHandle {
    current: RwLock<Arc<DocumentPipeline>>,
}

impl PipelineHandle {
    /// Create a handle serving `pipeline`
    pub fn new(pipeline: DocumentPipeline) -> Self {
        Self {
            current: RwLock::new(Arc::new(pipeline)),
        }
    }

    /// The pipeline currently being served
    pub fn snapshot(&self) -> Arc<DocumentPipeline> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the pipeline, returning the previous one
    pub fn swap(&self, pipeline: DocumentPipeline) -> Arc<DocumentPipeline> {
        let next = Arc::new(pipeline);
        let categories = next.classifier.categories().count();

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *guard, next);
        drop(guard);

        info!("Swapped document pipeline ({} categories)", categories);
        previous
    }

    /// Process a document with the current pipeline
    pub fn process(&self, text: &str) -> ProcessedDocument {
        self.snapshot().process(text)
    }
}

impl Default for PipelineHandle {
    fn default() -> Self {
        Self::new(DocumentPipeline::builtin())
    }
}
