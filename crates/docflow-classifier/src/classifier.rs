//! Weighted keyword classification

use crate::{builtin_tables, ClassifierError, KeywordTable};
use docflow_domain::{Category, CategoryScore, ClassificationResult};
use tracing::debug;

/// The Classifier scores text against every registered keyword table
///
/// Tables are fixed once the classifier is built. Classification only reads
/// them, so one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    tables: Vec<KeywordTable>,
}

impl Classifier {
    /// Create a classifier from tables in registration order
    ///
    /// # Errors
    ///
    /// Returns an error if any table is invalid or a category repeats.
    pub fn new(tables: Vec<KeywordTable>) -> Result<Self, ClassifierError> {
        let mut classifier = Self {
            tables: Vec::with_capacity(tables.len()),
        };
        for table in tables {
            classifier.register(table)?;
        }
        Ok(classifier)
    }

    /// Create a classifier with the invoice, resume and legal tables
    pub fn builtin() -> Self {
        Self {
            tables: builtin_tables(),
        }
    }

    /// Register one more category after those already present
    pub fn with_table(mut self, table: KeywordTable) -> Result<Self, ClassifierError> {
        self.register(table)?;
        Ok(self)
    }

    fn register(&mut self, table: KeywordTable) -> Result<(), ClassifierError> {
        table.validate()?;
        if self.tables.iter().any(|t| t.category() == table.category()) {
            return Err(ClassifierError::DuplicateCategory(
                table.category().as_str().to_string(),
            ));
        }
        self.tables.push(table);
        Ok(())
    }

    /// Registered categories in registration order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.tables.iter().map(|t| t.category())
    }

    /// Registered tables in registration order
    pub fn tables(&self) -> &[KeywordTable] {
        &self.tables
    }

    /// Classify raw text
    ///
    /// Never fails: empty or garbage input scores zero everywhere and
    /// yields `unknown`.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let lowered = text.to_lowercase();

        let scores: Vec<CategoryScore> = self
            .tables
            .iter()
            .map(|table| CategoryScore::new(table.category().clone(), table.score(&lowered)))
            .collect();

        let result = ClassificationResult::from_scores(scores);

        debug!(
            "Classified {} chars as '{}' (max score {})",
            text.chars().count(),
            result.category(),
            result.max_score()
        );

        result
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}


#[cfg(test)]
mod log_tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_reports_character_count() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        // 9 characters, 14 bytes
        tracing::subscriber::with_default(subscriber, || {
            Classifier::builtin().classify("Façade €€");
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Classified 9 chars"), "{output}");
    }
}
