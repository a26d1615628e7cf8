//! Deterministic grammar repairs applied to every sentence.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::patterns::MALFORMED_CONTRACTION_TABLE;
use crate::tables::{AGREEMENT_FIXES, CONSONANT_SOUND_PREFIXES, STUTTERS, VOWEL_SOUND_PREFIXES};
use crate::text::match_case;

/// Words after which a bare-infinitive verb is correct ("does it have").
const BARE_VERB_LEADS: &[&str] = &[
    "do", "does", "did", "can", "could", "will", "would", "shall", "should", "may", "might", "must", "to", "let",
    "make", "makes", "made", "help", "helps", "see", "watch",
];

static AGREEMENT_RES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    AGREEMENT_FIXES
        .iter()
        .map(|(pattern, verb)| {
            let re = Regex::new(&format!(r"(?:\b(?P<lead>[A-Za-z']+)\s+)?{pattern}")).unwrap();
            (re, *verb)
        })
        .collect()
});

static ARTICLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:(?P<prev>\S+)\s+)?\b(?P<article>an?)\s+(?P<word>[a-z][\w'-]*)").unwrap());

static STUTTER_RE: Lazy<Regex> = Lazy::new(|| {
    let alt = STUTTERS
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)\\b({alt})\\s+({alt})\\b")).unwrap()
});

pub fn correct(sentence: &str) -> String {
    let out = fix_agreement(sentence);
    let out = fix_articles(&out);
    let out = MALFORMED_CONTRACTION_TABLE.apply_fixed(&out);
    remove_stutters(&out)
}

fn fix_agreement(text: &str) -> String {
    let mut out = text.to_string();
    for (re, verb) in AGREEMENT_RES.iter() {
        out = re
            .replace_all(&out, |caps: &Captures| {
                let lead = caps.name("lead").map(|m| m.as_str());
                if lead.is_some_and(|l| BARE_VERB_LEADS.contains(&l.to_lowercase().as_str())) {
                    return caps[0].to_string();
                }
                let lead = lead.map(|l| format!("{l} ")).unwrap_or_default();
                format!("{lead}{} {verb}", &caps["subject"])
            })
            .into_owned();
    }
    out
}

fn wants_an(word: &str) -> bool {
    let lower = word.to_lowercase();
    if VOWEL_SOUND_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return true;
    }
    if CONSONANT_SOUND_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return false;
    }
    lower.starts_with(['a', 'e', 'i', 'o', 'u'])
}

/// Re-fit every "a"/"an" to the sound of the word that follows it.
pub fn fix_articles(text: &str) -> String {
    ARTICLE_RE
        .replace_all(text, |caps: &Captures| {
            let article = &caps["article"];
            let word = &caps["word"];
            let prev = caps.name("prev").map(|m| m.as_str());
            // A capital "A" mid-sentence is a letter or a grade, not an article.
            if article.starts_with('A') && prev.is_some_and(|p| !p.ends_with(['.', '!', '?', ':', '"', '(', '\''])) {
                return caps[0].to_string();
            }
            let prev = prev.map(|p| format!("{p} ")).unwrap_or_default();
            let mut letters = word.chars();
            // Acronyms are read letter by letter; leave them alone.
            if let (Some(a), Some(b)) = (letters.next(), letters.next()) {
                if a.is_uppercase() && b.is_uppercase() {
                    return caps[0].to_string();
                }
            }
            let fixed = if wants_an(word) { "an" } else { "a" };
            format!("{prev}{} {word}", match_case(article, fixed))
        })
        .into_owned()
}

fn remove_stutters(text: &str) -> String {
    STUTTER_RE
        .replace_all(text, |caps: &Captures| {
            if caps[1].eq_ignore_ascii_case(&caps[2]) {
                caps[1].to_string()
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
