use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::collapse_whitespace;

static MISSING_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z]{2,}[.!?])([A-Z][a-z])").unwrap());

/// Fold typographic characters to ASCII, collapse whitespace, and trim.
/// Total over arbitrary input.
pub fn normalize(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => folded.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => folded.push('"'),
            '\u{2013}' | '\u{2012}' | '\u{2212}' => folded.push('-'),
            '\u{2014}' | '\u{2015}' => folded.push_str(" - "),
            '\u{2026}' => folded.push_str("..."),
            '\u{00A0}' | '\u{2007}' | '\u{202F}' => folded.push(' '),
            '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}' => {}
            _ => folded.push(c),
        }
    }
    let collapsed = collapse_whitespace(&folded);
    MISSING_SPACE_RE.replace_all(&collapsed, "$1 $2").trim().to_string()
}
