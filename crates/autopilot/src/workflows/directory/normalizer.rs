use crate::workflows::jobs::JobTrack;
use crate::workflows::outreach::Persona;

pub(crate) fn normalize(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}

fn contains_word(normalized: &str, word: &str) -> bool {
    normalized
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token == word)
}

fn contains_phrase(normalized: &str, phrase: &str) -> bool {
    if phrase.contains(' ') {
        normalized.contains(phrase)
    } else {
        contains_word(normalized, phrase)
    }
}

const RECRUITER_MARKERS: &[&str] = &[
    "recruiter",
    "recruiting",
    "talent",
    "sourcer",
    "people operations",
];

const PEER_MARKERS: &[&str] = &[
    "product manager",
    "product owner",
    "program manager",
    "product lead",
    "pm",
    "tpm",
];

/// Infer the outreach persona from a connection's position. Recruiting
/// titles win over product titles; everyone else counts as an insider.
pub(crate) fn infer_persona(position: &str) -> Persona {
    let normalized = normalize(position);
    if RECRUITER_MARKERS
        .iter()
        .any(|marker| contains_phrase(&normalized, marker))
    {
        return Persona::Recruiter;
    }
    if PEER_MARKERS
        .iter()
        .any(|marker| contains_phrase(&normalized, marker))
    {
        return Persona::Peer;
    }
    Persona::Insider
}

/// Infer which track a connection's own role maps to, when the title is
/// specific enough to tell.
pub(crate) fn infer_track(position: &str) -> Option<JobTrack> {
    let normalized = normalize(position);
    if contains_phrase(&normalized, "technical program manager") || contains_word(&normalized, "tpm")
    {
        return Some(JobTrack::Tpm);
    }
    if contains_phrase(&normalized, "product owner") || contains_word(&normalized, "po") {
        return Some(JobTrack::Po);
    }
    if contains_phrase(&normalized, "product manager")
        || contains_word(&normalized, "pm")
        || contains_phrase(&normalized, "product lead")
    {
        return Some(JobTrack::Pm);
    }
    None
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize(value)
}
