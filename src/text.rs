//! Small string helpers shared by the rewriting stages.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::tables::{
    BRIDGES, CASUAL_TRANSITIONS, ENGAGING_OPENERS, EXPERIENCE_PREFIXES, FALSE_STARTS, HEDGES, LIGHT_TRANSITIONS,
    PERSONAL_STARTERS, UNEXPECTED_TRANSITIONS,
};

static PUNCT_STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\w]+|[^\w]+$").unwrap());

static SENTENCE_START_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(^|[.!?]\s+)([a-z])").unwrap());

/// Every conversational prefix the pipeline can add, longest first so the
/// alternation prefers the full phrase.
static PREFIX_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    let mut markers: Vec<&str> = [
        ENGAGING_OPENERS,
        CASUAL_TRANSITIONS,
        HEDGES,
        EXPERIENCE_PREFIXES,
        FALSE_STARTS,
        BRIDGES,
        PERSONAL_STARTERS,
        LIGHT_TRANSITIONS,
        UNEXPECTED_TRANSITIONS,
    ]
    .iter()
    .flat_map(|list| list.iter().copied())
    .map(|m| m.trim_end_matches([',', ':', '?', '.', '!']))
    .collect();
    markers.sort_by_key(|m| std::cmp::Reverse(m.len()));
    markers.dedup();
    let alt = markers
        .iter()
        .map(|m| regex::escape(m))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)^\\s*({alt})\\b")).unwrap()
});

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading and trailing non-word characters from a token.
pub fn strip_punct(token: &str) -> String {
    PUNCT_STRIP_RE.replace_all(token, "").into_owned()
}

/// First word of `text`, lowercased and without surrounding punctuation.
pub fn first_word(text: &str) -> String {
    text.split_whitespace()
        .next()
        .map(|w| strip_punct(w).to_lowercase())
        .unwrap_or_default()
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first letter unless the first word is "I" (or a contraction
/// of it) or looks like an acronym.
pub fn decapitalize_first(text: &str) -> String {
    let first = text.split_whitespace().next().unwrap_or("");
    let bare = strip_punct(first);
    if bare == "I" || bare.starts_with("I'") {
        return text.to_string();
    }
    let mut letters = bare.chars();
    if let (Some(a), Some(b)) = (letters.next(), letters.next()) {
        if a.is_uppercase() && b.is_uppercase() {
            return text.to_string();
        }
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Shape `replacement` after the case of `original`: all caps stays all caps,
/// a capitalized original gets a capitalized replacement.
pub fn match_case(original: &str, replacement: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return replacement.to_uppercase();
    }
    match letters.first() {
        Some(c) if c.is_uppercase() => capitalize_first(replacement),
        _ => replacement.to_string(),
    }
}

/// Capitalize the first letter of the text and of every sentence in it.
pub fn sentence_case(text: &str) -> String {
    SENTENCE_START_RE
        .replace_all(text, |caps: &Captures| format!("{}{}", &caps[1], caps[2].to_uppercase()))
        .into_owned()
}

/// True when the text already opens with one of the conversational prefixes.
pub fn has_prefix_marker(text: &str) -> bool {
    PREFIX_MARKER_RE.is_match(text)
}

/// Snap a byte offset to a valid char boundary.
/// If `forward` is true, snap forward; otherwise snap backward.
pub fn snap_to_char_boundary(text: &str, pos: usize, forward: bool) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    if forward {
        while p < text.len() && !text.is_char_boundary(p) {
            p += 1;
        }
    } else {
        while p > 0 && !text.is_char_boundary(p) {
            p -= 1;
        }
    }
    p
}

/// Split off the sentence's terminal punctuation: ("It works", ".").
pub fn split_terminal(sentence: &str) -> (&str, &str) {
    let trimmed = sentence.trim_end();
    let body = trimmed.trim_end_matches(['.', '!', '?']);
    (body, &trimmed[body.len()..])
}

/// Put a conversational marker in front of a sentence. The sentence keeps its
/// capital only when the marker is a complete sentence of its own.
pub fn prepend(marker: &str, sentence: &str) -> String {
    if marker.ends_with(['.', '?', '!']) {
        format!("{marker} {sentence}")
    } else {
        format!("{marker} {}", decapitalize_first(sentence))
    }
}
