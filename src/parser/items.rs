use crate::model::ResumeItem;

use super::patterns;

/// Try to promote one raw experience/education block into a structured
/// record. The first line matching the period pattern becomes `period`
/// and drops out; of what remains, line one is the title/degree, line two
/// the organization/institution, the rest the description. Fewer than two
/// remaining lines means no confident title+org pair, so the block stays
/// raw rather than producing a partial record.
pub fn structure_block(text: &str) -> ResumeItem {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let period_idx = lines.iter().position(|l| patterns::PERIOD_RE.is_match(l));
    let period = period_idx.map(|i| lines[i].to_string());

    let content: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != period_idx)
        .map(|(_, l)| *l)
        .collect();

    if content.len() < 2 {
        return ResumeItem::Raw {
            text: text.to_string(),
        };
    }

    let description = if content.len() > 2 {
        Some(content[2..].join("\n"))
    } else {
        None
    };

    ResumeItem::Structured {
        title: content[0].to_string(),
        org: content[1].to_string(),
        period,
        description,
    }
}
