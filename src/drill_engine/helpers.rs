//! Small text utilities shared by the store, the mode rules and the checker.
//!
//! Everything here is pure string handling; nothing touches the RNG.

/// Fixed marker that replaces the headword in fill-in-the-blank prompts.
pub const BLANK_MARKER: &str = "_____";

/// Replace the first case-sensitive occurrence of `headword` in `sentence`
/// with [`BLANK_MARKER`].
///
/// Returns `None` when the headword is absent, or when it occurs more than
/// once (the rendered prompt would still give the answer away).
pub fn blank_out(sentence: &str, headword: &str) -> Option<String> {
    if headword.is_empty() || !sentence.contains(headword) {
        return None;
    }
    let masked = sentence.replacen(headword, BLANK_MARKER, 1);
    if masked.contains(headword) {
        return None;
    }
    Some(masked)
}

/// Trim, collapse inner whitespace runs to one space and lowercase.
pub fn normalize_answer(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Comma-separated alternatives of a translation ("fast, quick"), trimmed,
/// empty pieces skipped.
pub fn alternatives(s: &str) -> impl Iterator<Item = &str> {
    s.split(',').map(str::trim).filter(|alt| !alt.is_empty())
}

/// First alternative of a translation, or the whole string trimmed.
pub fn primary_alternative(s: &str) -> &str {
    alternatives(s).next().unwrap_or_else(|| s.trim())
}

/// `Some(trimmed)` for a non-blank string, `None` otherwise.
pub fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
