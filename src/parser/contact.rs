use regex::Regex;

use super::patterns;

/// Contact fields found anywhere in the text. Empty string means no match.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

/// Scan the whole text for contact patterns, position-independent.
/// Matches are deduplicated and sorted; the first sorted match is the
/// canonical value. Network handles lose their scheme and `www.` prefix
/// before sorting so the same profile linked both ways dedups to one.
pub fn extract(text: &str) -> Contact {
    Contact {
        email: canonical(&patterns::EMAIL_RE, text, |m| m.to_string()),
        phone: canonical(&patterns::PHONE_RE, text, |m| m.trim().to_string()),
        linkedin: canonical(&patterns::LINKEDIN_RE, text, strip_url_prefix),
        github: canonical(&patterns::GITHUB_RE, text, strip_url_prefix),
    }
}

fn canonical(re: &Regex, text: &str, normalize: impl Fn(&str) -> String) -> String {
    let mut matches: Vec<String> = re
        .find_iter(text)
        .map(|m| normalize(m.as_str()))
        .filter(|s| !s.is_empty())
        .collect();
    matches.sort();
    matches.dedup();
    matches.into_iter().next().unwrap_or_default()
}

fn strip_url_prefix(url: &str) -> String {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.strip_prefix("www.").unwrap_or(rest).to_string()
}
