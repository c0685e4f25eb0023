use super::patterns;

pub const NAME_PLACEHOLDER: &str = "Your Name";
pub const TITLE_PLACEHOLDER: &str = "Professional Title";

const NAME_MAX_TOKENS: usize = 6;
const NAME_MAX_CHARS: usize = 50;
const TITLE_MAX_TOKENS: usize = 10;
const TITLE_MAX_CHARS: usize = 70;

/// Name and headline guesses from the top of the document, plus how many
/// leading lines were consumed (the segmenter must not see those again).
#[derive(Debug)]
pub struct Identity {
    pub name: String,
    pub title: String,
    pub consumed: usize,
}

/// Guess name and title from the first one or two non-empty lines.
///
/// The first line is taken as the name when it is short, carries no
/// email/phone, and is not itself a section header (a resume opening
/// directly with "Experience" must keep that line for the segmenter).
/// Only when a name was consumed is the next line tried as a title,
/// under looser length bounds. Failures leave the placeholders.
pub fn guess(lines: &[String]) -> Identity {
    let mut identity = Identity {
        name: NAME_PLACEHOLDER.into(),
        title: TITLE_PLACEHOLDER.into(),
        consumed: 0,
    };

    let Some(first) = lines.first() else {
        return identity;
    };
    let name_ok = first.split_whitespace().count() < NAME_MAX_TOKENS
        && first.chars().count() < NAME_MAX_CHARS
        && !patterns::EMAIL_RE.is_match(first)
        && !patterns::PHONE_RE.is_match(first)
        && patterns::header_kind(first).is_none();
    if !name_ok {
        return identity;
    }
    identity.name = first.clone();
    identity.consumed = 1;

    if let Some(second) = lines.get(1) {
        let title_ok = second.split_whitespace().count() < TITLE_MAX_TOKENS
            && second.chars().count() < TITLE_MAX_CHARS
            && !patterns::is_contact_line(second)
            && patterns::header_kind(second).is_none();
        if title_ok {
            identity.title = second.clone();
            identity.consumed = 2;
        }
    }

    identity
}
