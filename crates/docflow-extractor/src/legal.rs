//! Legal document field extraction

use crate::patterns::{find_date, iso_date_near};
use docflow_domain::{Category, FieldExtractor, FieldSchema, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

static SECTION_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:\bsection|\bsec\.|§)[ \t]*\d+").unwrap());

static CASE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:case|docket)[ \t]+(?:number|num|no)\b\.?[ \t]*[:#]?[ \t]*([A-Za-z0-9][A-Za-z0-9\-/:.]*[A-Za-z0-9])",
    )
    .unwrap()
});

static EFFECTIVE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:effective|dated)\b").unwrap());

const FIELDS: &[FieldSchema] = &[
    FieldSchema::new("has_sections", has_sections),
    FieldSchema::new("has_dates", has_dates),
    FieldSchema::new("section_count", section_count),
    FieldSchema::new("case_number", case_number),
    FieldSchema::new("effective_date", effective_date),
];

/// Extracts structural markers and identifiers from legal text
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalExtractor;

impl FieldExtractor for LegalExtractor {
    fn category(&self) -> Category {
        Category::Legal
    }

    fn schema(&self) -> &[FieldSchema] {
        FIELDS
    }
}

/// Whether the text mentions sections or subsections
pub fn has_sections(text: &str) -> Option<FieldValue> {
    Some(FieldValue::Bool(text.to_lowercase().contains("section")))
}

/// Whether any recognised date appears
pub fn has_dates(text: &str) -> Option<FieldValue> {
    Some(FieldValue::Bool(find_date(text).is_some()))
}

/// Number of numbered section references (`Section 4`, `Sec. 12`, `§ 3`)
pub fn section_count(text: &str) -> Option<FieldValue> {
    let count = SECTION_REFERENCE.find_iter(text).count();
    Some(FieldValue::Integer(i64::try_from(count).unwrap_or(i64::MAX)))
}

/// Token after `case no` / `case number` / `docket no`
pub fn case_number(text: &str) -> Option<FieldValue> {
    CASE_NUMBER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| FieldValue::from(m.as_str()))
}

/// First date near `effective` or `dated`, as ISO-8601
pub fn effective_date(text: &str) -> Option<FieldValue> {
    iso_date_near(text, &EFFECTIVE_LABEL).map(FieldValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const AGREEMENT: &str = "SERVICE AGREEMENT\n\
        Case No. 2:24-cv-01234\n\
        This agreement is effective as of 01/03/2024 between the parties.\n\
        Section 1. Definitions\n\
        Section 2. Term; see subsection 2(b)\n\
        Sec. 3 Governing law";

    #[test]
    fn test_agreement_fields() {
        assert_eq!(has_sections(AGREEMENT), Some(FieldValue::Bool(true)));
        assert_eq!(has_dates(AGREEMENT), Some(FieldValue::Bool(true)));
        assert_eq!(section_count(AGREEMENT), Some(FieldValue::Integer(3)));
        assert_eq!(
            case_number(AGREEMENT),
            Some(FieldValue::from("2:24-cv-01234"))
        );
        assert_eq!(effective_date(AGREEMENT), Some(FieldValue::from("2024-03-01")));
    }

    #[test]
    fn test_flags_are_always_present() {
        assert_eq!(has_sections(""), Some(FieldValue::Bool(false)));
        assert_eq!(has_dates("no dates here 12345"), Some(FieldValue::Bool(false)));
        assert_eq!(section_count(""), Some(FieldValue::Integer(0)));
    }

    #[test]
    fn test_docket_number() {
        assert_eq!(
            case_number("DOCKET NUMBER: A-1142"),
            Some(FieldValue::from("A-1142"))
        );
        assert_eq!(case_number("In this case, no damages"), None);
    }

    #[test]
    fn test_dated_label() {
        let text = "Dated this 5th day, 5 June 2023";
        assert_eq!(effective_date(text), Some(FieldValue::from("2023-06-05")));
    }
}
