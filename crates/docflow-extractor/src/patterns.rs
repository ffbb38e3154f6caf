//! Reusable pattern functions shared by the category extractors
//!
//! Each function is pure and independently testable. Extractors compose them
//! through ordered fallbacks instead of nesting conditionals.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Numeric token: digits with optional thousands separators and decimals.
/// Always starts and ends with a digit; malformed shapes fail to parse later.
static NUMBER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d(?:[\d,.]*\d)?").unwrap());

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap()
});

/// Phone patterns in priority order: with country code, separated, bare digits
static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"\+\d{1,3}[-. ]?\(?\d{2,4}\)?[-. ]?\d{3,4}[-. ]?\d{3,4}\b").unwrap(),
        Regex::new(r"\(?\b\d{3}\)?[-. ]?\d{3}[-. ]\d{4}\b").unwrap(),
        Regex::new(r"\b\d{10}\b").unwrap(),
    ]
});

/// Field order inside a numeric date match
#[derive(Debug, Clone, Copy)]
enum DateOrder {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
    DayMonthNameYear,
}

/// Date patterns, applied in this order: DD/MM/YYYY, MM-DD-YYYY, YYYY-MM-DD,
/// DD Mon YYYY
static DATE_PATTERNS: LazyLock<Vec<(Regex, DateOrder)>> = LazyLock::new(|| {
    vec![
        (
            Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap(),
            DateOrder::DayMonthYear,
        ),
        (
            Regex::new(r"\b(\d{1,2})-(\d{1,2})-(\d{4})\b").unwrap(),
            DateOrder::MonthDayYear,
        ),
        (
            Regex::new(r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b").unwrap(),
            DateOrder::YearMonthDay,
        ),
        (
            Regex::new(
                r"(?i)\b(\d{1,2})(?:st|nd|rd|th)?[ \t]+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?,?[ \t]+(\d{4})\b",
            )
            .unwrap(),
            DateOrder::DayMonthNameYear,
        ),
    ]
});

/// A term from a fixed vocabulary
#[derive(Debug, Clone, Copy)]
pub struct VocabularyTerm {
    /// Lowercase ASCII text searched for
    pub needle: &'static str,

    /// Value reported when the needle is found
    pub canonical: &'static str,

    /// Require non-alphanumeric neighbours (for short, ambiguous terms)
    pub whole_word: bool,
}

impl VocabularyTerm {
    /// Term matched as a plain substring
    pub const fn substring(needle: &'static str, canonical: &'static str) -> Self {
        Self {
            needle,
            canonical,
            whole_word: false,
        }
    }

    /// Term matched only with non-alphanumeric neighbours
    pub const fn word(needle: &'static str, canonical: &'static str) -> Self {
        Self {
            needle,
            canonical,
            whole_word: true,
        }
    }

    /// First byte offset of this term in ASCII-lowercased text
    pub fn find_in(&self, lowered: &str) -> Option<usize> {
        lowered.match_indices(self.needle).map(|(i, _)| i).find(|&i| {
            !self.whole_word || is_word_bounded(lowered, i, i + self.needle.len())
        })
    }
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Non-empty lines, trimmed, top to bottom
pub fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// First non-empty line, trimmed
pub fn first_non_empty_line(text: &str) -> Option<&str> {
    non_empty_lines(text).next()
}

/// Text following each label match up to the end of that line
///
/// Returned in scan order, paired with the full line containing the label.
/// With a `stop` pattern, each window also ends where `stop` next matches
/// on the same line.
pub fn label_windows<'t>(
    text: &'t str,
    label: &Regex,
    stop: Option<&Regex>,
) -> Vec<LabelWindow<'t>> {
    label
        .find_iter(text)
        .map(|m| {
            let line_start = text[..m.start()].rfind('\n').map_or(0, |i| i + 1);
            let line_end = text[m.end()..]
                .find('\n')
                .map_or(text.len(), |i| m.end() + i);
            let rest = &text[m.end()..line_end];
            let after = stop
                .and_then(|s| s.find(rest))
                .map_or(rest, |next| &rest[..next.start()]);
            LabelWindow {
                line: &text[line_start..line_end],
                before: &text[line_start..m.start()],
                after,
            }
        })
        .collect()
}

/// A label occurrence: its line and the text around it
#[derive(Debug, Clone, Copy)]
pub struct LabelWindow<'t> {
    /// Whole line containing the label
    pub line: &'t str,

    /// Line text before the label
    pub before: &'t str,

    /// Line text after the label, up to the stop pattern if any
    pub after: &'t str,
}

/// Parse a numeric token, stripping currency symbols and separators
///
/// Returns `None` for anything that is not a finite decimal number.
pub fn parse_amount(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() || cleaned.matches('.').count() > 1 {
        debug!("Discarding malformed numeric token '{}'", token);
        return None;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!("Discarding unparseable numeric token '{}'", token);
            None
        }
    }
}

/// First well-formed amount in a window, skipping percentages
pub fn first_amount(window: &str) -> Option<f64> {
    NUMBER_TOKEN
        .find_iter(window)
        .filter(|m| !window[m.end()..].trim_start().starts_with('%'))
        .find_map(|m| parse_amount(m.as_str()))
}

/// First amount near any of the label's occurrences, in scan order
///
/// Returns the amount with the window it was found in.
pub fn amount_near<'t>(text: &'t str, label: &Regex) -> Option<(f64, &'t str)> {
    label_windows(text, label, None)
        .into_iter()
        .find_map(|w| first_amount(w.after).map(|value| (value, w.after)))
}

/// Parse the first date of the given pattern in `window`
fn date_with(window: &str, pattern: &Regex, order: DateOrder) -> Option<NaiveDate> {
    pattern.captures_iter(window).find_map(|caps| {
        let a = caps.get(1)?.as_str();
        let b = caps.get(2)?.as_str();
        let c: i32 = caps.get(3)?.as_str().parse().ok()?;
        match order {
            DateOrder::DayMonthYear => NaiveDate::from_ymd_opt(c, b.parse().ok()?, a.parse().ok()?),
            DateOrder::MonthDayYear => NaiveDate::from_ymd_opt(c, a.parse().ok()?, b.parse().ok()?),
            DateOrder::YearMonthDay => {
                NaiveDate::from_ymd_opt(a.parse().ok()?, b.parse().ok()?, c as u32)
            }
            DateOrder::DayMonthNameYear => {
                NaiveDate::from_ymd_opt(c, month_number(b)?, a.parse().ok()?)
            }
        }
    })
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.get(..3)?.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// First calendar-valid date anywhere in `text`, trying patterns in order
pub fn find_date(text: &str) -> Option<NaiveDate> {
    DATE_PATTERNS
        .iter()
        .find_map(|(pattern, order)| date_with(text, pattern, *order))
}

/// Date near a label, normalized to ISO-8601
pub fn iso_date_near(text: &str, label: &Regex) -> Option<String> {
    iso_date_in(&label_windows(text, label, None))
}

/// First date found in the given windows, normalized to ISO-8601
///
/// Patterns are the outer loop: the first pattern matching in any window
/// wins.
pub fn iso_date_in(windows: &[LabelWindow<'_>]) -> Option<String> {
    DATE_PATTERNS
        .iter()
        .find_map(|(pattern, order)| {
            windows
                .iter()
                .find_map(|w| date_with(w.after, pattern, *order))
        })
        .map(|date| date.format("%Y-%m-%d").to_string())
}

/// First email address
pub fn find_email(text: &str) -> Option<&str> {
    EMAIL.find(text).map(|m| m.as_str())
}

/// First phone number: earliest match across patterns, pattern order on ties
pub fn find_phone(text: &str) -> Option<&str> {
    PHONE_PATTERNS
        .iter()
        .filter_map(|p| p.find(text))
        .min_by_key(|m| m.start())
        .map(|m| m.as_str().trim())
}

/// Whether a line looks like contact details rather than prose
pub fn is_contact_line(line: &str) -> bool {
    find_email(line).is_some() || find_phone(line).is_some()
}
