use crate::model::SectionKind;

use super::patterns;

/// Accumulated section bodies after the single segmentation pass.
/// `experience`/`education` hold one raw multi-line block per
/// header-to-header run; `skills` holds split candidate strings;
/// `summary` holds fragments joined later in document order.
#[derive(Debug, Default)]
pub struct Segments {
    pub summary: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
}

const PRE_SECTION_MIN_TOKENS: usize = 3;
const SKILL_DELIMITERS: &[char] = &[',', ';', '\u{2022}', '\u{25CF}', '\u{25AA}', '\u{2023}'];

/// Single-pass line classifier. State is the currently open section
/// (`None` before the first header); each header flushes the previous
/// accumulator and opens a new one. Pre-section prose of more than three
/// tokens is treated as an implicit summary; end of input flushes the
/// last open section.
pub fn segment(lines: &[String]) -> Segments {
    let mut segments = Segments::default();
    let mut state: Option<SectionKind> = None;
    let mut body: Vec<String> = Vec::new();

    for line in lines {
        if let Some(kind) = patterns::header_kind(line) {
            flush(&mut segments, state, &mut body);
            state = Some(kind);
            continue;
        }
        match state {
            Some(_) => body.push(line.clone()),
            None => {
                if line.split_whitespace().count() > PRE_SECTION_MIN_TOKENS
                    && !patterns::is_contact_line(line)
                {
                    segments.summary.push(line.clone());
                }
            }
        }
    }
    flush(&mut segments, state, &mut body);

    segments
}

fn flush(segments: &mut Segments, state: Option<SectionKind>, body: &mut Vec<String>) {
    if body.is_empty() {
        return;
    }
    match state {
        Some(SectionKind::Summary) => segments.summary.push(body.join("\n")),
        Some(SectionKind::Experience) => segments.experience.push(body.join("\n")),
        Some(SectionKind::Education) => segments.education.push(body.join("\n")),
        Some(SectionKind::Skills) => {
            for line in body.iter() {
                segments.skills.extend(
                    line.split(SKILL_DELIMITERS)
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from),
                );
            }
        }
        None => {}
    }
    body.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect()
    }

    #[test]
    fn header_opens_section_and_accumulates() {
        let segs = segment(&lines("Experience\nLead Dev\nAcme Corp"));
        assert_eq!(segs.experience, vec!["Lead Dev\nAcme Corp"]);
        assert!(segs.summary.is_empty());
    }

    #[test]
    fn pre_section_prose_becomes_summary() {
        let segs = segment(&lines(
            "Engineer who likes shipping useful things\njane@x.com | 555-1234",
        ));
        assert_eq!(segs.summary, vec!["Engineer who likes shipping useful things"]);
    }

    #[test]
    fn short_or_contact_lines_before_sections_are_dropped() {
        let segs = segment(&lines("Portland, OR\njane@x.com and 555-1234 anytime"));
        assert!(segs.summary.is_empty());
    }

    #[test]
    fn explicit_summary_appends_after_implicit() {
        let segs = segment(&lines(
            "Builds reliable backend services since 2014\nSummary\nStill enjoys pager duty",
        ));
        assert_eq!(
            segs.summary,
            vec!["Builds reliable backend services since 2014", "Still enjoys pager duty"]
        );
    }

    #[test]
    fn header_switch_flushes_previous_section() {
        let segs = segment(&lines(
            "Experience\nLead Dev\nAcme Corp\nEducation\nBS Physics\nState University",
        ));
        assert_eq!(segs.experience, vec!["Lead Dev\nAcme Corp"]);
        assert_eq!(segs.education, vec!["BS Physics\nState University"]);
    }

    #[test]
    fn repeated_header_yields_separate_blocks() {
        let segs = segment(&lines(
            "Experience\nLead Dev\nAcme Corp\nExperience\nIntern\nGlobex",
        ));
        assert_eq!(segs.experience.len(), 2);
    }

    #[test]
    fn skills_split_on_delimiters() {
        let segs = segment(&lines("Skills\nPython, Go; Rust\n\u{2022} Kafka \u{2022} Terraform"));
        assert_eq!(segs.skills, vec!["Python", "Go", "Rust", "Kafka", "Terraform"]);
    }

    #[test]
    fn header_with_no_body_flushes_nothing() {
        let segs = segment(&lines("Experience\nEducation\nBS Physics\nState University"));
        assert!(segs.experience.is_empty());
        assert_eq!(segs.education, vec!["BS Physics\nState University"]);
    }
}
