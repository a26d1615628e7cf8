//! Compiled pattern tables.
//!
//! A [`PatternTable`] is the compiled form of a `&'static [PatternEntry]`:
//! one case-insensitive regex per trigger, kept in table order. Literal phrase
//! tables are matched on word boundaries; regex tables may name a `target`
//! group, in which case only that group is rewritten.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};

use crate::pick::{chance, pick_or};
use crate::tables::{
    PatternEntry, Replacement, CONTRACTIONS, FORMAL_CONNECTORS, FORMAL_TO_CASUAL, MALFORMED_CONTRACTIONS,
    PHRASE_PARAPHRASES, REDUNDANT_PHRASES, ROBOTIC_STARTERS, STOCK_COLLOCATIONS, TRANSITIONAL_PARAPHRASES,
};
use crate::text::match_case;

#[derive(Debug)]
struct CompiledRule {
    regex: Regex,
    replacement: &'static Replacement,
}

#[derive(Debug)]
pub struct PatternTable {
    rules: Vec<CompiledRule>,
}

impl PatternTable {
    /// Compile a table of literal phrases.
    pub fn from_phrases(entries: &'static [PatternEntry]) -> Result<Self, regex::Error> {
        Self::compile(entries, |trigger| format!("(?i)\\b{}\\b", regex::escape(trigger)))
    }

    /// Compile a table whose triggers are already regex sources.
    pub fn from_regexes(entries: &'static [PatternEntry]) -> Result<Self, regex::Error> {
        Self::compile(entries, str::to_string)
    }

    fn compile(entries: &'static [PatternEntry], source: impl Fn(&str) -> String) -> Result<Self, regex::Error> {
        let rules = entries
            .iter()
            .filter(|e| !e.trigger.is_empty())
            .map(|e| {
                Ok(CompiledRule {
                    regex: Regex::new(&source(e.trigger))?,
                    replacement: &e.replacement,
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { rules })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.rules.iter().any(|r| r.regex.is_match(text))
    }

    /// Replacement for the first trigger found in `text`, or `None` when no
    /// trigger matches.
    pub fn lookup<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Option<String> {
        self.rules.iter().find_map(|rule| {
            let caps = rule.regex.captures(text)?;
            let original = caps.name("target").or_else(|| caps.get(0))?;
            Some(render(original.as_str(), rule.replacement, rng))
        })
    }

    /// Rewrite every occurrence of every trigger, in table order.
    pub fn apply<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> String {
        self.apply_with_chance(text, 1.0, rng)
    }

    /// Rewrite each occurrence independently with probability `probability`;
    /// occurrences that lose the draw are left as written.
    pub fn apply_with_chance<R: Rng + ?Sized>(&self, text: &str, probability: f64, rng: &mut R) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            if !rule.regex.is_match(&out) {
                continue;
            }
            out = rule
                .regex
                .replace_all(&out, |caps: &Captures| {
                    if probability < 1.0 && !chance(rng, probability) {
                        return caps[0].to_string();
                    }
                    splice(caps, |original| render(original, rule.replacement, rng))
                })
                .into_owned();
        }
        out
    }

    /// Deterministic variant for tables of fixed replacements and deletions.
    /// `Pick` entries are left as written.
    pub fn apply_fixed(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            if let Replacement::Pick(_) = rule.replacement {
                continue;
            }
            out = rule
                .regex
                .replace_all(&out, |caps: &Captures| {
                    splice(caps, |original| match rule.replacement {
                        Replacement::Fixed(s) => match_case(original, s),
                        _ => String::new(),
                    })
                })
                .into_owned();
        }
        out
    }
}

/// Rewrite the `target` group when there is one, otherwise the whole match.
fn splice(caps: &Captures, rewrite: impl FnOnce(&str) -> String) -> String {
    let whole = &caps[0];
    match (caps.get(0), caps.name("target")) {
        (Some(m), Some(t)) => {
            let head = &whole[..t.start() - m.start()];
            let tail = &whole[t.end() - m.start()..];
            format!("{head}{}{tail}", rewrite(t.as_str()))
        }
        _ => rewrite(whole),
    }
}

fn render<R: Rng + ?Sized>(original: &str, replacement: &Replacement, rng: &mut R) -> String {
    match replacement {
        Replacement::Fixed(s) => match_case(original, s),
        Replacement::Pick(candidates) => match_case(original, pick_or(candidates, original, rng)),
        Replacement::Delete => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Compiled tables
// ---------------------------------------------------------------------------

pub static FORMAL_CONNECTOR_TABLE: Lazy<PatternTable> =
    Lazy::new(|| PatternTable::from_regexes(FORMAL_CONNECTORS).unwrap());

pub static ROBOTIC_STARTER_TABLE: Lazy<PatternTable> =
    Lazy::new(|| PatternTable::from_phrases(ROBOTIC_STARTERS).unwrap());

pub static COLLOCATION_TABLE: Lazy<PatternTable> =
    Lazy::new(|| PatternTable::from_regexes(STOCK_COLLOCATIONS).unwrap());

pub static REDUNDANT_PHRASE_TABLE: Lazy<PatternTable> =
    Lazy::new(|| PatternTable::from_phrases(REDUNDANT_PHRASES).unwrap());

pub static MALFORMED_CONTRACTION_TABLE: Lazy<PatternTable> =
    Lazy::new(|| PatternTable::from_phrases(MALFORMED_CONTRACTIONS).unwrap());

pub static CONTRACTION_TABLE: Lazy<PatternTable> = Lazy::new(|| PatternTable::from_phrases(CONTRACTIONS).unwrap());

pub static PHRASE_PARAPHRASE_TABLE: Lazy<PatternTable> =
    Lazy::new(|| PatternTable::from_phrases(PHRASE_PARAPHRASES).unwrap());

pub static TRANSITIONAL_PARAPHRASE_TABLE: Lazy<PatternTable> =
    Lazy::new(|| PatternTable::from_phrases(TRANSITIONAL_PARAPHRASES).unwrap());

pub static FORMAL_TO_CASUAL_TABLE: Lazy<PatternTable> =
    Lazy::new(|| PatternTable::from_phrases(FORMAL_TO_CASUAL).unwrap());
