//! Invoice field extraction

use crate::patterns::{amount_near, first_non_empty_line, iso_date_in, label_windows};
use docflow_domain::{Category, FieldExtractor, FieldSchema, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

static INVOICE_NO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:\binvoice[ \t]*(?:number|num|no)\b\.?|\binv\.?[ \t]*no\b\.?|#)[ \t]*[:#]?[ \t]*([A-Za-z0-9][A-Za-z0-9\-]*)",
    )
    .unwrap()
});

static VENDOR_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:bill[ \t]+from|vendor(?:[ \t]+name)?|supplier(?:[ \t]+name)?|from)\b[ \t]*[:\-]?[ \t]*([^\s:\-][^\r\n]*)",
    )
    .unwrap()
});

static AMOUNT_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:total|amount[ \t]+due|balance[ \t]+due)\b").unwrap());

static TAX_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:tax|gst|vat)\b").unwrap());

static DUE_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bdue(?:[ \t]+date)?\b").unwrap());

/// `due` immediately before a label, as in `Due Date`
static DUE_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bdue[ \t]*$").unwrap());

static DATE_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bdate\b").unwrap());

static ISO_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(USD|EUR|GBP|INR|JPY|CAD|AUD|CHF)\b").unwrap());

const CURRENCY_SYMBOLS: &[(char, &str)] = &[
    ('$', "USD"),
    ('€', "EUR"),
    ('£', "GBP"),
    ('₹', "INR"),
    ('¥', "JPY"),
];

const ISO_CODES: &[&str] = &["USD", "EUR", "GBP", "INR", "JPY", "CAD", "AUD", "CHF"];

const FIELDS: &[FieldSchema] = &[
    FieldSchema::new("invoice_no", invoice_no),
    FieldSchema::new("vendor", vendor),
    FieldSchema::new("amount", amount),
    FieldSchema::new("due_date", due_date),
    FieldSchema::new("date", date),
    FieldSchema::new("tax_amount", tax_amount),
    FieldSchema::new("currency", currency),
];

/// Extracts invoice number, vendor, amounts, dates and currency
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceExtractor;

impl FieldExtractor for InvoiceExtractor {
    fn category(&self) -> Category {
        Category::Invoice
    }

    fn schema(&self) -> &[FieldSchema] {
        FIELDS
    }
}

/// First alphanumeric/dash token after an invoice-number label
pub fn invoice_no(text: &str) -> Option<FieldValue> {
    INVOICE_NO
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| FieldValue::from(m.as_str()))
}

/// Remainder of the first vendor-labelled line, else the first non-empty line
pub fn vendor(text: &str) -> Option<FieldValue> {
    labelled_vendor(text)
        .or_else(|| first_non_empty_line(text))
        .map(FieldValue::from)
}

fn labelled_vendor(text: &str) -> Option<&str> {
    VENDOR_LABEL
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .find(|v| !v.is_empty())
}

/// Amount near `total` / `amount due` / `balance due`; absent without a label
pub fn amount(text: &str) -> Option<FieldValue> {
    amount_near(text, &AMOUNT_LABEL).map(|(value, _)| FieldValue::Number(value))
}

/// Amount near `tax` / `gst` / `vat`
pub fn tax_amount(text: &str) -> Option<FieldValue> {
    amount_near(text, &TAX_LABEL).map(|(value, _)| FieldValue::Number(value))
}

/// Date after a `due` label, as ISO-8601
///
/// The window ends at the next `date` label on the same line.
pub fn due_date(text: &str) -> Option<FieldValue> {
    iso_date_in(&label_windows(text, &DUE_LABEL, Some(&DATE_LABEL))).map(FieldValue::from)
}

/// Date after a `date` label that is not part of `due date`, as ISO-8601
///
/// The window ends at the next `due` label on the same line.
pub fn date(text: &str) -> Option<FieldValue> {
    let windows: Vec<_> = label_windows(text, &DATE_LABEL, Some(&DUE_LABEL))
        .into_iter()
        .filter(|w| !DUE_PREFIX.is_match(w.before))
        .collect();
    iso_date_in(&windows).map(FieldValue::from)
}

/// ISO currency code from a symbol or code next to the total amount
pub fn currency(text: &str) -> Option<FieldValue> {
    let (_, window) = amount_near(text, &AMOUNT_LABEL)?;
    currency_in(window).map(FieldValue::from)
}

fn currency_in(window: &str) -> Option<&'static str> {
    let by_symbol = window.char_indices().find_map(|(i, c)| {
        CURRENCY_SYMBOLS
            .iter()
            .find(|(symbol, _)| *symbol == c)
            .map(|(_, code)| (i, *code))
    });
    let by_code = ISO_CODE.captures(window).and_then(|caps| {
        let m = caps.get(1)?;
        let code = m.as_str().to_ascii_uppercase();
        ISO_CODES
            .iter()
            .find(|c| **c == code)
            .map(|c| (m.start(), *c))
    });

    // Whichever appears first in the window is closest to the label
    match (by_symbol, by_code) {
        (Some(s), Some(c)) => Some(if s.0 <= c.0 { s.1 } else { c.1 }),
        (s, c) => s.or(c).map(|(_, code)| code),
    }
}
