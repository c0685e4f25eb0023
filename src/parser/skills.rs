use std::collections::HashSet;

const MIN_LEN: usize = 2;
const MAX_LEN: usize = 49;

/// Normalize split skill candidates into a clean ordered set: trim,
/// drop entries outside [2, 49] characters, capitalize, dedup
/// case-insensitively keeping the first occurrence, sort ascending.
/// Sorting is for determinism; source order carries no ranking signal.
pub fn normalize(candidates: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut skills: Vec<String> = Vec::new();

    for candidate in candidates {
        let trimmed = candidate.trim();
        let len = trimmed.chars().count();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            continue;
        }
        let skill = capitalize(trimmed);
        if seen.insert(skill.to_lowercase()) {
            skills.push(skill);
        }
    }

    skills.sort();
    skills
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn sorted_and_capitalized() {
        let skills = normalize(candidates(&["python", "go", "rust"]));
        assert_eq!(skills, vec!["Go", "Python", "Rust"]);
    }

    #[test]
    fn case_insensitive_dedup() {
        let skills = normalize(candidates(&["Rust", "RUST", "rust"]));
        assert_eq!(skills, vec!["Rust"]);
    }

    #[test]
    fn length_bounds_inclusive() {
        let long49 = "x".repeat(49);
        let long50 = "x".repeat(50);
        let skills = normalize(candidates(&["a", "Go", &long49, &long50]));
        assert_eq!(skills.len(), 2);
        assert!(skills.contains(&"Go".to_string()));
        assert!(skills.iter().any(|s| s.chars().count() == 49));
    }

    #[test]
    fn whitespace_trimmed_before_bounds() {
        let skills = normalize(candidates(&["  c  ", " Kafka "]));
        assert_eq!(skills, vec!["Kafka"]);
    }

    #[test]
    fn empty_input_empty_output() {
        assert!(normalize(Vec::new()).is_empty());
    }
}
