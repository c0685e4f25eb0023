pub mod contact;
pub mod identity;
pub mod items;
pub mod patterns;
pub mod sections;
pub mod skills;

use std::path::Path;

use crate::model::ParsedResume;
use crate::reader::{self, ReadError};

/// Full heuristic pipeline over already-extracted text: contact scan and
/// identity guess over the top lines, then one segmentation pass, then
/// per-block structuring and skills normalization. Never fails; empty or
/// whitespace-only input short-circuits to the fallback sentinel.
pub fn parse(text: &str) -> ParsedResume {
    if text.trim().is_empty() {
        return ParsedResume::fallback();
    }

    let found = contact::extract(text);
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect();

    let who = identity::guess(&lines);
    let segments = sections::segment(&lines[who.consumed..]);

    ParsedResume {
        name: who.name,
        title: who.title,
        email: found.email,
        phone: found.phone,
        linkedin: found.linkedin,
        github: found.github,
        summary: segments.summary.join("\n"),
        experience: segments
            .experience
            .iter()
            .map(|block| items::structure_block(block))
            .collect(),
        education: segments
            .education
            .iter()
            .map(|block| items::structure_block(block))
            .collect(),
        skills: skills::normalize(segments.skills),
    }
}

/// Dispatch by file extension, extract text, parse. The only error is an
/// unsupported extension; decoder faults inside the readers degrade to
/// empty text and therefore the fallback sentinel.
pub fn parse_document(path: &Path) -> Result<ParsedResume, ReadError> {
    let text = reader::extract_text(path)?;
    Ok(parse(&text))
}
