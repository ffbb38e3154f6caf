//! Resume field extraction

use crate::patterns::{find_email, find_phone, is_contact_line, non_empty_lines, VocabularyTerm};
use docflow_domain::{Category, FieldExtractor, FieldSchema, FieldValue};
use regex::Regex;
use std::sync::LazyLock;

static NAME_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*(?:full[ \t]+)?name[ \t]*:[ \t]*([^\s:][^\r\n]*)").unwrap()
});

static EXPERIENCE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:years?|yrs?)\.?[ \t]+(?:of[ \t]+)?(?:professional[ \t]+|work[ \t]+|industry[ \t]+)?(?:experience|exp)\b",
    )
    .unwrap()
});

/// Integer candidate; a decimal contributes its whole part
static YEARS_CANDIDATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})(?:\.\d+)?(?:\+|\b)").unwrap());

static YEARS_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,2})(?:\.\d+)?\+?[ \t]*(?:years?|yrs?)\b").unwrap()
});

/// Upper bound for a plausible career length
const MAX_EXPERIENCE_YEARS: i64 = 60;

/// Lines scanned from the top when looking for the current role
const ROLE_SCAN_LINES: usize = 5;

/// A role line longer than this is reduced to the matched title word
const MAX_ROLE_WORDS: usize = 5;

/// A first-line name longer than this is more likely a sentence
const MAX_NAME_WORDS: usize = 4;

const SKILLS: &[VocabularyTerm] = &[
    VocabularyTerm::substring("python", "Python"),
    VocabularyTerm::word("java", "Java"),
    VocabularyTerm::substring("javascript", "JavaScript"),
    VocabularyTerm::substring("typescript", "TypeScript"),
    VocabularyTerm::word("go", "Go"),
    VocabularyTerm::substring("golang", "Go"),
    VocabularyTerm::word("rust", "Rust"),
    VocabularyTerm::word("c++", "C++"),
    VocabularyTerm::word("c#", "C#"),
    VocabularyTerm::word("sql", "SQL"),
    VocabularyTerm::word("react", "React"),
    VocabularyTerm::substring("node.js", "Node.js"),
    VocabularyTerm::substring("nodejs", "Node.js"),
    VocabularyTerm::substring("fastapi", "FastAPI"),
    VocabularyTerm::substring("django", "Django"),
    VocabularyTerm::word("flask", "Flask"),
    VocabularyTerm::substring("mongodb", "MongoDB"),
    VocabularyTerm::substring("postgresql", "PostgreSQL"),
    VocabularyTerm::word("postgres", "PostgreSQL"),
    VocabularyTerm::substring("mysql", "MySQL"),
    VocabularyTerm::substring("docker", "Docker"),
    VocabularyTerm::substring("kubernetes", "Kubernetes"),
    VocabularyTerm::word("k8s", "Kubernetes"),
    VocabularyTerm::word("aws", "AWS"),
    VocabularyTerm::substring("azure", "Azure"),
    VocabularyTerm::word("gcp", "GCP"),
    VocabularyTerm::word("git", "Git"),
    VocabularyTerm::substring("linux", "Linux"),
    VocabularyTerm::word("redis", "Redis"),
    VocabularyTerm::substring("elasticsearch", "Elasticsearch"),
    VocabularyTerm::substring("kafka", "Kafka"),
    VocabularyTerm::substring("rabbitmq", "RabbitMQ"),
    VocabularyTerm::substring("graphql", "GraphQL"),
    VocabularyTerm::substring("rest api", "REST API"),
    VocabularyTerm::substring("terraform", "Terraform"),
    VocabularyTerm::word("spark", "Spark"),
    VocabularyTerm::word("pandas", "Pandas"),
    VocabularyTerm::substring("tensorflow", "TensorFlow"),
    VocabularyTerm::substring("pytorch", "PyTorch"),
];

/// Degree levels, highest first
const EDUCATION_LEVELS: &[(&str, &[VocabularyTerm])] = &[
    (
        "PhD",
        &[
            VocabularyTerm::word("phd", "PhD"),
            VocabularyTerm::substring("ph.d", "PhD"),
            VocabularyTerm::substring("doctorate", "PhD"),
            VocabularyTerm::substring("doctor of philosophy", "PhD"),
        ],
    ),
    (
        "Master",
        &[
            VocabularyTerm::substring("master", "Master"),
            VocabularyTerm::word("msc", "Master"),
            VocabularyTerm::substring("m.sc", "Master"),
            VocabularyTerm::word("mba", "Master"),
            VocabularyTerm::substring("m.tech", "Master"),
        ],
    ),
    (
        "Bachelor",
        &[
            VocabularyTerm::substring("bachelor", "Bachelor"),
            VocabularyTerm::word("bsc", "Bachelor"),
            VocabularyTerm::substring("b.sc", "Bachelor"),
            VocabularyTerm::substring("b.tech", "Bachelor"),
        ],
    ),
    (
        "Associate",
        &[
            VocabularyTerm::substring("associate degree", "Associate"),
            VocabularyTerm::substring("associate's", "Associate"),
            VocabularyTerm::substring("associate of", "Associate"),
        ],
    ),
];

const ROLE_WORDS: &[&str] = &[
    "engineer",
    "developer",
    "programmer",
    "manager",
    "analyst",
    "architect",
    "lead",
    "consultant",
    "designer",
    "scientist",
    "director",
    "administrator",
    "specialist",
    "intern",
];

const FIELDS: &[FieldSchema] = &[
    FieldSchema::new("name", name),
    FieldSchema::new("email", email),
    FieldSchema::new("phone", phone),
    FieldSchema::new("skills", skills),
    FieldSchema::new("experience_years", experience_years),
    FieldSchema::new("education", education),
    FieldSchema::new("current_role", current_role),
];

/// Extracts contact details, skills, experience, education and role
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeExtractor;

impl FieldExtractor for ResumeExtractor {
    fn category(&self) -> Category {
        Category::Resume
    }

    fn schema(&self) -> &[FieldSchema] {
        FIELDS
    }
}

/// Text after a `name:` label, else a short first line that is not contact info
pub fn name(text: &str) -> Option<FieldValue> {
    labelled_name(text)
        .or_else(|| first_line_name(text))
        .map(FieldValue::from)
}

fn labelled_name(text: &str) -> Option<&str> {
    NAME_LABEL
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|n| !n.is_empty())
}

fn first_line_name(text: &str) -> Option<&str> {
    non_empty_lines(text).next().filter(|line| {
        !is_contact_line(line)
            && line.split_whitespace().count() <= MAX_NAME_WORDS
            && line.chars().any(char::is_alphabetic)
    })
}

/// First email address
pub fn email(text: &str) -> Option<FieldValue> {
    find_email(text).map(FieldValue::from)
}

/// First phone number
pub fn phone(text: &str) -> Option<FieldValue> {
    find_phone(text).map(FieldValue::from)
}

/// Vocabulary skills in order of first appearance, canonical casing, no duplicates
pub fn skills(text: &str) -> Option<FieldValue> {
    let lowered = text.to_ascii_lowercase();

    let mut found: Vec<(usize, &str)> = SKILLS
        .iter()
        .filter_map(|term| term.find_in(&lowered).map(|pos| (pos, term.canonical)))
        .collect();
    // Stable sort keeps vocabulary order for terms starting at the same offset
    found.sort_by_key(|(pos, _)| *pos);

    let mut skills: Vec<String> = Vec::new();
    for (_, canonical) in found {
        if !skills.iter().any(|s| s == canonical) {
            skills.push(canonical.to_string());
        }
    }

    if skills.is_empty() {
        None
    } else {
        Some(FieldValue::List(skills))
    }
}

/// Integer closest to a years-of-experience label, else a "N years" phrase
/// on a line mentioning experience
pub fn experience_years(text: &str) -> Option<FieldValue> {
    labelled_years(text)
        .or_else(|| phrase_years(text))
        .map(FieldValue::Integer)
}

fn labelled_years(text: &str) -> Option<i64> {
    let mut best: Option<(usize, usize, i64)> = None;

    for label in EXPERIENCE_LABEL.find_iter(text) {
        let line_start = text[..label.start()].rfind('\n').map_or(0, |i| i + 1);
        let line_end = text[label.end()..]
            .find('\n')
            .map_or(text.len(), |i| label.end() + i);
        let line = &text[line_start..line_end];

        for caps in YEARS_CANDIDATE.captures_iter(line) {
            let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let start = line_start + whole.start();
            let end = line_start + whole.end();
            let distance = if end <= label.start() {
                label.start() - end
            } else if start >= label.end() {
                start - label.end()
            } else {
                continue;
            };
            let Some(years) = plausible_years(digits.as_str()) else {
                continue;
            };
            // Ties keep the candidate found first in scan order
            let better = best.is_none_or(|(d, s, _)| (distance, start) < (d, s));
            if better {
                best = Some((distance, start, years));
            }
        }
    }

    best.map(|(_, _, years)| years)
}

fn phrase_years(text: &str) -> Option<i64> {
    text.lines()
        .filter(|line| line.to_ascii_lowercase().contains("experience"))
        .find_map(|line| {
            YEARS_PHRASE
                .captures(line)
                .and_then(|caps| caps.get(1))
                .and_then(|m| plausible_years(m.as_str()))
        })
}

fn plausible_years(digits: &str) -> Option<i64> {
    digits
        .parse::<i64>()
        .ok()
        .filter(|y| (0..=MAX_EXPERIENCE_YEARS).contains(y))
}

/// Highest-ranked degree mentioned anywhere
pub fn education(text: &str) -> Option<FieldValue> {
    let lowered = text.to_ascii_lowercase();
    EDUCATION_LEVELS
        .iter()
        .find(|(_, terms)| terms.iter().any(|t| t.find_in(&lowered).is_some()))
        .map(|(level, _)| FieldValue::from(*level))
}

/// Job title from the first few lines
///
/// Short lines are returned whole ("Senior Software Engineer"); longer lines
/// are reduced to the capitalized title word.
pub fn current_role(text: &str) -> Option<FieldValue> {
    non_empty_lines(text)
        .filter(|line| !is_contact_line(line))
        .take(ROLE_SCAN_LINES)
        .find_map(|line| {
            let word = line
                .split(|c: char| !c.is_alphanumeric())
                .map(str::to_ascii_lowercase)
                .find_map(|token| ROLE_WORDS.iter().find(|w| **w == token).copied())?;

            if line.split_whitespace().count() <= MAX_ROLE_WORDS {
                Some(line.to_string())
            } else {
                Some(capitalize(word))
            }
        })
        .map(FieldValue::Text)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
