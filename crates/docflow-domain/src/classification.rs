//! Classification module - scores and the category chosen from them

use crate::Category;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Score of a single registered category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryScore {
    /// The scored category
    pub category: Category,

    /// Sum of weighted keyword occurrences
    pub score: u32,
}

impl CategoryScore {
    /// Create a new score entry
    pub fn new(category: Category, score: u32) -> Self {
        Self { category, score }
    }
}

/// Outcome of classifying one document
///
/// `category` is always the argmax of `scores`: the first entry (in
/// registration order) holding the maximum, or [`Category::Unknown`] when
/// every score is zero. The invariant is established by [`Self::from_scores`]
/// and the fields are private so it cannot be broken afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    category: Category,
    scores: Vec<CategoryScore>,
}

impl ClassificationResult {
    /// Select the winning category from scores given in registration order
    ///
    /// # Examples
    ///
    /// ```
    /// use docflow_domain::{Category, CategoryScore, ClassificationResult};
    ///
    /// let result = ClassificationResult::from_scores(vec![
    ///     CategoryScore::new(Category::Invoice, 2),
    ///     CategoryScore::new(Category::Resume, 2),
    ///     CategoryScore::new(Category::Legal, 0),
    /// ]);
    /// assert_eq!(result.category(), &Category::Invoice);
    /// ```
    pub fn from_scores(scores: Vec<CategoryScore>) -> Self {
        let mut best: Option<&CategoryScore> = None;
        for entry in &scores {
            // Strictly greater, so the earliest registration keeps a tie
            if entry.score > best.map_or(0, |b| b.score) {
                best = Some(entry);
            }
        }

        let category = best
            .map(|b| b.category.clone())
            .unwrap_or(Category::Unknown);

        Self { category, scores }
    }

    /// The winning category
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Scores of every registered category, in registration order
    pub fn scores(&self) -> &[CategoryScore] {
        &self.scores
    }

    /// Score of one category, if it was registered
    pub fn score(&self, category: &Category) -> Option<u32> {
        self.scores
            .iter()
            .find(|s| &s.category == category)
            .map(|s| s.score)
    }

    /// Highest score across all categories (0 when none registered)
    pub fn max_score(&self) -> u32 {
        self.scores.iter().map(|s| s.score).max().unwrap_or(0)
    }

    /// Consume the result, keeping only the category
    pub fn into_category(self) -> Category {
        self.category
    }
}

/// Serializes scores as an ordered `{category: score}` map
struct ScoreMap<'a>(&'a [CategoryScore]);

impl Serialize for ScoreMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0 {
            map.serialize_entry(entry.category.as_str(), &entry.score)?;
        }
        map.end()
    }
}

impl Serialize for ClassificationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ClassificationResult", 2)?;
        state.serialize_field("category", &self.category)?;
        state.serialize_field("scores", &ScoreMap(&self.scores))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [u32; 3]) -> Vec<CategoryScore> {
        Category::BUILTIN
            .iter()
            .cloned()
            .zip(values)
            .map(|(category, score)| CategoryScore::new(category, score))
            .collect()
    }

    #[test]
    fn test_highest_score_wins() {
        let result = ClassificationResult::from_scores(scores([1, 4, 2]));
        assert_eq!(result.category(), &Category::Resume);
        assert_eq!(result.max_score(), 4);
    }

    #[test]
    fn test_tie_goes_to_earliest_registration() {
        let result = ClassificationResult::from_scores(scores([0, 3, 3]));
        assert_eq!(result.category(), &Category::Resume);
    }

    #[test]
    fn test_all_zero_is_unknown() {
        let result = ClassificationResult::from_scores(scores([0, 0, 0]));
        assert_eq!(result.category(), &Category::Unknown);
        assert_eq!(result.max_score(), 0);
    }

    #[test]
    fn test_no_scores_is_unknown() {
        let result = ClassificationResult::from_scores(Vec::new());
        assert!(result.category().is_unknown());
        assert!(result.scores().is_empty());
    }

    #[test]
    fn test_score_lookup() {
        let result = ClassificationResult::from_scores(scores([5, 0, 1]));
        assert_eq!(result.score(&Category::Invoice), Some(5));
        assert_eq!(result.score(&Category::Unknown), None);
    }

    #[test]
    fn test_serializes_ordered_score_map() {
        let result = ClassificationResult::from_scores(scores([2, 0, 1]));
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"category":"invoice","scores":{"invoice":2,"resume":0,"legal":1}}"#
        );
    }
}
