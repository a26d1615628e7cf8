//! Sentence segmentation.
//!
//! A boundary is a run of `.`/`!`/`?` at parenthesis depth 0 with no open
//! double quote, followed by end of text or by whitespace and an uppercase
//! letter (optionally behind an opening quote or parenthesis). A single period
//! after an abbreviation or an initial ("Dr.", "J.") is not a boundary.
//! Closing quotes and parentheses directly after the punctuation stay with the
//! sentence they close. Boundaries always fall on whitespace, so joining the segments with
//! single spaces gives back normalized input.

use crate::tables::{Breakpoint, ABBREVIATIONS, CLAUSE_BREAKPOINTS};

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | ')' | ']' | '\'')
}

#[derive(Debug, Clone, Copy, Default)]
struct ScanState {
    depth: usize,
    in_quote: bool,
}

impl ScanState {
    fn step(&mut self, c: char) {
        match c {
            '(' | '[' => self.depth += 1,
            ')' | ']' => self.depth = self.depth.saturating_sub(1),
            '"' => self.in_quote = !self.in_quote,
            _ => {}
        }
    }

    fn closed(&self) -> bool {
        self.depth == 0 && !self.in_quote
    }
}

pub fn segment(text: &str) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let byte_at = |i: usize| chars.get(i).map_or(text.len(), |(b, _)| *b);

    let mut sentences = Vec::new();
    let mut state = ScanState::default();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i].1;
        if !is_terminal(c) {
            state.step(c);
            i += 1;
            continue;
        }

        let mut j = i;
        while j < chars.len() && is_terminal(chars[j].1) {
            j += 1;
        }
        let mut after = state;
        let mut k = j;
        while k < chars.len() && is_closer(chars[k].1) {
            after.step(chars[k].1);
            k += 1;
        }

        let single_period = c == '.' && j == i + 1;
        let boundary = after.closed()
            && boundary_follows(&chars, k)
            && !(single_period && is_abbreviation(&text[byte_at(start)..byte_at(i)]));

        if boundary {
            let piece = text[byte_at(start)..byte_at(k)].trim();
            if !piece.is_empty() {
                sentences.push(piece.to_string());
            }
            start = k;
            state = after;
            i = k;
        } else {
            i = j;
        }
    }

    let rest = text[byte_at(start)..].trim();
    if !rest.is_empty() {
        sentences.push(rest.to_string());
    }
    sentences
}

fn boundary_follows(chars: &[(usize, char)], k: usize) -> bool {
    if k >= chars.len() {
        return true;
    }
    if !chars[k].1.is_whitespace() {
        return false;
    }
    let mut m = k;
    while m < chars.len() && chars[m].1.is_whitespace() {
        m += 1;
    }
    match chars.get(m).map(|(_, c)| *c) {
        None => true,
        Some(c) if c.is_uppercase() => true,
        Some('"') | Some('(') | Some('\'') => chars.get(m + 1).is_some_and(|(_, c)| c.is_uppercase()),
        _ => false,
    }
}

/// Whether the word right before a period is an abbreviation, an initial,
/// or a dotted short form like "e.g".
///
/// A lone capital is an initial, except "A" and "I" after a lowercase word,
/// where they are words in their own right ("got an A.", "It was I.").
fn is_abbreviation(before: &str) -> bool {
    let mut words = before
        .split_whitespace()
        .rev()
        .map(|w| w.trim_start_matches(|c: char| !c.is_alphanumeric()));
    let word = words.next().unwrap_or("");
    if word.is_empty() {
        return false;
    }
    if word.contains('.') {
        return true;
    }
    let mut letters = word.chars();
    if let (Some(c), None) = (letters.next(), letters.next()) {
        if !c.is_uppercase() {
            return false;
        }
        let after_lowercase = words.next().is_some_and(|prev| prev.starts_with(char::is_lowercase));
        return !(matches!(c, 'A' | 'I') && after_lowercase);
    }
    let lower = word.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

/// Break sentences longer than `max_chars` at clause boundaries until they
/// fit or no breakpoint applies.
pub fn split_long_sentences(sentences: Vec<String>, max_chars: usize, min_clause: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        let mut current = sentence;
        while current.chars().count() > max_chars {
            match split_at_breakpoint(&current, CLAUSE_BREAKPOINTS, min_clause) {
                Some((head, tail)) => {
                    out.push(head);
                    current = tail;
                }
                None => break,
            }
        }
        out.push(current);
    }
    out
}

/// Cut at the first breakpoint (in table order) present in the sentence. A
/// first clause shorter than `min_clause` characters leaves the sentence
/// alone, as does an empty second clause.
pub fn split_at_breakpoint(sentence: &str, table: &[Breakpoint], min_clause: usize) -> Option<(String, String)> {
    let (bp, pos) = table
        .iter()
        .find_map(|bp| sentence.find(bp.marker).map(|pos| (bp, pos)))?;
    let head = sentence[..pos].trim_end();
    if head.chars().count() < min_clause {
        return None;
    }
    let tail = sentence[pos + bp.marker.len()..].trim();
    if tail.trim_end_matches(|c: char| is_terminal(c)).trim().is_empty() {
        return None;
    }
    Some((format!("{head}."), format!("{} {tail}", bp.continuation)))
}
