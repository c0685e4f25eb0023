use std::sync::LazyLock;

use regex::Regex;

use crate::model::SectionKind;

pub static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

// Tolerates -, ., spaces and parentheses as separators plus an optional
// country code. Minimum three digit groups, so bare years don't qualify.
pub static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s()]?)?(?:\d{2,4}[-.\s()]?){2,5}\d{2,4}").unwrap()
});

pub static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/[^\s|,;]+").unwrap()
});

pub static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[^\s|,;]+").unwrap()
});

// "Mar 2021", "March 2021", "03/2021", bare "2019", or an open end bound.
pub static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)\b(?:
            (?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?
              |jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?
              |nov(?:ember)?|dec(?:ember)?)\.?\s+\d{4}
            |\d{1,2}/\d{4}
            |(?:19|20)\d{2}
            |present|current|ongoing
        )\b",
    )
    .unwrap()
});

/// Header synonyms per section, checked in declaration order: the first
/// kind whose keyword the lowercased line contains wins.
pub const SECTION_KEYWORDS: &[(SectionKind, &[&str])] = &[
    (
        SectionKind::Summary,
        &["summary", "objective", "about me", "professional profile"],
    ),
    (
        SectionKind::Experience,
        &[
            "experience",
            "work history",
            "employment history",
            "professional experience",
            "projects",
        ],
    ),
    (
        SectionKind::Education,
        &["education", "academic background", "qualifications"],
    ),
    (
        SectionKind::Skills,
        &[
            "skills",
            "technical skills",
            "proficiencies",
            "core competencies",
            "tools",
        ],
    ),
];

const HEADER_MAX_TOKENS: usize = 6;
const HEADER_MAX_CHARS: usize = 60;

/// Classify a trimmed line as a section header. Short lines containing a
/// keyword substring qualify, so prose like "Proficient with modern tools"
/// can misfire as a header. Accepted heuristic risk.
pub fn header_kind(line: &str) -> Option<SectionKind> {
    if line.split_whitespace().count() >= HEADER_MAX_TOKENS
        || line.chars().count() >= HEADER_MAX_CHARS
    {
        return None;
    }
    let lower = line.to_lowercase();
    SECTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(kind, _)| *kind)
}

/// True when the line carries any contact pattern (email, phone, handle).
pub fn is_contact_line(line: &str) -> bool {
    EMAIL_RE.is_match(line)
        || PHONE_RE.is_match(line)
        || LINKEDIN_RE.is_match(line)
        || GITHUB_RE.is_match(line)
}
