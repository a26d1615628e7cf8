//! Register-aware synonym replacement.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};

use crate::pick::{chance, weighted_pick};
use crate::tables::{Register, SynonymEntry, SYNONYMS};
use crate::text::match_case;

static SYNONYM_RE: Lazy<Regex> = Lazy::new(|| {
    let alt = SYNONYMS
        .iter()
        .map(|e| regex::escape(e.word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)\\b(?P<word>{alt})(?P<suffix>s)?\\b")).unwrap()
});

fn entry_for(word: &str) -> Option<&'static SynonymEntry> {
    SYNONYMS.iter().find(|e| e.word.eq_ignore_ascii_case(word))
}

/// Third-person "-s" form of a candidate, inflecting only its first word
/// ("work with" -> "works with").
pub fn inflect_s(phrase: &str) -> String {
    let (head, rest) = match phrase.find(' ') {
        Some(i) => phrase.split_at(i),
        None => (phrase, ""),
    };
    let lower = head.to_lowercase();
    let inflected = if ["s", "sh", "ch", "x", "z", "o"].iter().any(|end| lower.ends_with(end)) {
        format!("{head}es")
    } else if lower.ends_with('y')
        && !lower[..lower.len() - 1].ends_with(['a', 'e', 'i', 'o', 'u'])
        && lower.len() > 1
    {
        format!("{}ies", &head[..head.len() - 1])
    } else {
        format!("{head}s")
    };
    format!("{inflected}{rest}")
}

/// Swap each known word for a candidate from `register` with probability
/// `probability`. The "-s" form of a verb entry gets an inflected candidate;
/// the "-s" form of anything else is left alone.
pub fn replace_synonyms<R: Rng + ?Sized>(text: &str, register: Register, probability: f64, rng: &mut R) -> String {
    SYNONYM_RE
        .replace_all(text, |caps: &Captures| {
            let whole = &caps[0];
            let word = &caps["word"];
            let inflected = caps.name("suffix").is_some();
            let Some(entry) = entry_for(word) else {
                return whole.to_string();
            };
            if inflected && !entry.inflects {
                return whole.to_string();
            }
            if !chance(rng, probability) {
                return whole.to_string();
            }
            let Some(candidate) = weighted_pick(entry.candidates(register), rng) else {
                return whole.to_string();
            };
            let candidate = if inflected { inflect_s(candidate) } else { candidate.to_string() };
            match_case(word, &candidate)
        })
        .into_owned()
}
