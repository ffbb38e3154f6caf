//! Field module - extracted values and the schemas that declare them

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// A value located in the document text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Presence flag
    Bool(bool),

    /// Whole number (counts, years)
    Integer(i64),

    /// Decimal number (amounts)
    Number(f64),

    /// Free text (identifiers, names, ISO dates)
    Text(String),

    /// Ordered list of terms
    List(Vec<String>),
}

impl FieldValue {
    /// Text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric content; integers widen to `f64`
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Integer content, if this is an integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Boolean content, if this is a flag
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// List content, if this is a list value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// A pure function locating one field in raw text
pub type ExtractionStrategy = fn(&str) -> Option<FieldValue>;

/// A named field and the strategy that extracts it
///
/// Field names are stable identifiers shared with persistence (`invoice_no`,
/// `due_date`, ...).
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    /// Stable field identifier
    pub name: &'static str,

    /// Strategy run against the raw text
    pub strategy: ExtractionStrategy,
}

impl FieldSchema {
    /// Declare a field
    pub const fn new(name: &'static str, strategy: ExtractionStrategy) -> Self {
        Self { name, strategy }
    }
}

/// Every declared field of a category, each with an optional value
///
/// Keys keep declaration order. A field the strategy could not locate is
/// present with `None`; it is never missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFieldSet {
    entries: Vec<(String, Option<FieldValue>)>,
}

impl ExtractedFieldSet {
    /// Create an empty field set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field set declaring every schema field as absent
    pub fn declared(schema: &[FieldSchema]) -> Self {
        Self {
            entries: schema.iter().map(|f| (f.name.to_string(), None)).collect(),
        }
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: Option<FieldValue>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value of a field; `None` when absent or undeclared
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    /// Whether the field is declared (regardless of value)
    pub fn contains_field(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Declared field names in order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterate over `(name, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FieldValue>)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_ref()))
    }

    /// Number of declared fields
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fields are declared
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of fields holding a value
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|(_, v)| v.is_some()).count()
    }
}

impl Serialize for ExtractedFieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always_found(_: &str) -> Option<FieldValue> {
        Some(FieldValue::from("x"))
    }

    fn never_found(_: &str) -> Option<FieldValue> {
        None
    }

    const SCHEMA: [FieldSchema; 2] = [
        FieldSchema::new("first", always_found),
        FieldSchema::new("second", never_found),
    ];

    #[test]
    fn test_declared_fields_start_absent() {
        let fields = ExtractedFieldSet::declared(&SCHEMA);
        assert_eq!(fields.len(), 2);
        assert!(fields.contains_field("first"));
        assert!(fields.get("first").is_none());
        assert_eq!(fields.found_count(), 0);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut fields = ExtractedFieldSet::declared(&SCHEMA);
        fields.insert("second", Some(FieldValue::Integer(3)));
        fields.insert("second", Some(FieldValue::Integer(4)));

        let names: Vec<&str> = fields.field_names().collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(fields.get("second").and_then(FieldValue::as_integer), Some(4));
    }

    #[test]
    fn test_serializes_absent_as_null() {
        let mut fields = ExtractedFieldSet::declared(&SCHEMA);
        fields.insert("first", Some(FieldValue::Number(1500.0)));
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"first":1500.0,"second":null}"#);
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(FieldValue::Integer(5).as_number(), Some(5.0));
        assert_eq!(FieldValue::from(true).as_bool(), Some(true));
        assert_eq!(FieldValue::from("abc").as_text(), Some("abc"));
        assert!(FieldValue::from("abc").as_list().is_none());
        let list = FieldValue::from(vec!["Go".to_string()]);
        assert_eq!(list.as_list().map(|l| l.len()), Some(1));
    }
}
