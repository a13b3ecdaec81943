use super::vocabulary::{SkillDefinition, SkillVocabulary};

/// Lowercase and collapse whitespace so alias matching is insensitive to
/// formatting artifacts in pasted job descriptions.
pub(crate) fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

/// Extract canonical skill names mentioned in `text`. Results come back in
/// vocabulary order, deduplicated.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<&'static str> {
    let normalized = normalize_text(text);
    vocabulary
        .skills()
        .iter()
        .filter(|skill| skill_mentioned(skill, &normalized))
        .map(|skill| skill.name)
        .collect()
}

/// True when any alias of `skill` occurs in already-normalized text.
pub(crate) fn skill_mentioned(skill: &SkillDefinition, normalized: &str) -> bool {
    skill
        .aliases
        .iter()
        .any(|alias| contains_term(normalized, alias))
}

/// True when `term` occurs in `haystack` without running into surrounding
/// alphanumerics ("api" must not match inside "rapid").
pub(crate) fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(offset) = haystack[from..].find(term) {
        let start = from + offset;
        let end = start + term.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        from = end;
    }

    false
}
