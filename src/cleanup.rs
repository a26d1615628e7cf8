use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::text::collapse_whitespace;

static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([.,!?;:])").unwrap());

static PUNCT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.,!?;:]{2,}").unwrap());

static MISSING_SPACE_AFTER_PAUSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([,;:])([A-Za-z])").unwrap());

static MISSING_SPACE_AFTER_STOP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?])([A-Z][a-z])").unwrap());

static LOWER_SENTENCE_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(^|[.!?]\s+)(["'(]?)([a-z])"#).unwrap());

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Final punctuation, spacing and capitalization pass. Deterministic and
/// idempotent; input with no words or quotes left gives an empty string.
pub fn cleanup(text: &str) -> String {
    let out = collapse_whitespace(text);
    if out.is_empty() {
        return out;
    }

    let out = SPACE_BEFORE_PUNCT_RE.replace_all(&out, "$1");
    let out = PUNCT_RUN_RE.replace_all(&out, |caps: &Captures| {
        let run = &caps[0];
        if run.contains('?') {
            "?".to_string()
        } else if run.contains('!') {
            "!".to_string()
        } else if run.contains('.') {
            ".".to_string()
        } else {
            run[..1].to_string()
        }
    });
    let out = out.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?' | ';' | ':'));
    if out.is_empty() {
        return String::new();
    }
    let out = MISSING_SPACE_AFTER_PAUSE_RE.replace_all(out, "$1 $2");
    let out = MISSING_SPACE_AFTER_STOP_RE.replace_all(&out, "$1 $2");
    let out = LOWER_SENTENCE_START_RE.replace_all(&out, |caps: &Captures| {
        format!("{}{}{}", &caps[1], &caps[2], caps[3].to_uppercase())
    });

    ensure_terminal(&out)
}

fn ensure_terminal(text: &str) -> String {
    let body = text.trim_end_matches(['"', '\'', ')']);
    if body.ends_with(is_terminal) {
        return text.to_string();
    }
    if text.ends_with([',', ';', ':']) {
        return format!("{}.", &text[..text.len() - 1]);
    }
    format!("{text}.")
}
