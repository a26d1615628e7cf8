//! Per-sentence transformer: grammar, synonyms, structural variation.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use tracing::{debug, trace};

use crate::context::ContextSnapshot;
use crate::grammar;
use crate::params::HP;
use crate::pick::{chance, weighted_pick, weighted_pick_fresh};
use crate::segment::split_at_breakpoint;
use crate::settings::ProcessingSettings;
use crate::synonyms::replace_synonyms;
use crate::tables::{
    CASUAL_TRANSITIONS, CLAUSE_BREAKPOINTS, CONNECTIVE_WORDS, COPULA_OPENING_REWRITES, ENGAGING_OPENERS,
    EVIDENCE_OPENING_REWRITES, LINKING_OPENERS,
};
use crate::text::{capitalize_first, first_word, has_prefix_marker, prepend, snap_to_char_boundary};

static COPULA_OPENING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^the\s+(?P<subject>.+?)\s+(?P<verb>is|are)\s+(?P<rest>.+)$").unwrap());

static EVIDENCE_OPENING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^this\s+(?P<subject>.+?)\s+(?P<verb>shows|demonstrates|indicates|suggests)\s+(?P<rest>.+)$")
        .unwrap()
});

/// Bookkeeping for one pipeline run. Never shared between runs.
#[derive(Debug, Default)]
pub struct RunState {
    openings: HashSet<String>,
    /// Transition words already used at a sentence start.
    pub used_transitions: Vec<String>,
    /// Conversational markers inserted so far.
    pub used_markers: Vec<String>,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remember_marker(&mut self, marker: &str) {
        self.used_markers.push(marker.to_string());
    }

    /// Weighted pick that prefers markers not yet used in this run.
    pub fn fresh_marker<R: Rng + ?Sized>(&mut self, candidates: &[&'static str], rng: &mut R) -> Option<&'static str> {
        let marker = weighted_pick_fresh(candidates, &self.used_markers, rng)?;
        self.remember_marker(marker);
        Some(marker)
    }

    /// Record a sentence's two-word opening; true when it was seen before.
    fn repeats_opening(&mut self, sentence: &str) -> bool {
        let key = sentence
            .split_whitespace()
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        !self.openings.insert(key)
    }
}

pub fn transform_sentences<R: Rng + ?Sized>(
    sentences: Vec<String>,
    settings: &ProcessingSettings,
    snapshot: &ContextSnapshot,
    state: &mut RunState,
    rng: &mut R,
) -> Vec<String> {
    let register = snapshot.register(settings);
    let total = sentences.len();
    let mut out = Vec::with_capacity(total);

    for (idx, sentence) in sentences.into_iter().enumerate() {
        let mut s = grammar::correct(&sentence);
        if s.chars().count() < HP.short_sentence_chars {
            out.push(s);
            continue;
        }
        if settings.expressions {
            // A swapped-in word can change which article it needs.
            s = grammar::fix_articles(&replace_synonyms(&s, register, HP.synonym_swap, rng));
        }
        if settings.structure {
            out.extend(vary_structure(s, idx, total, state, rng));
        } else {
            out.push(s);
        }
    }

    debug!(?register, sentences = out.len(), "sentences transformed");
    out
}

fn vary_structure<R: Rng + ?Sized>(
    sentence: String,
    idx: usize,
    total: usize,
    state: &mut RunState,
    rng: &mut R,
) -> Vec<String> {
    let mut s = sentence;

    if state.repeats_opening(&s) && chance(rng, HP.repeated_opening_rewrite) {
        if let Some(rewritten) = rewrite_opening(&s, rng) {
            trace!(from = %s, to = %rewritten, "repeated opening rewritten");
            s = rewritten;
        }
    }

    if idx == 0 && !has_prefix_marker(&s) && chance(rng, HP.engaging_opener) {
        if let Some(opener) = state.fresh_marker(ENGAGING_OPENERS, rng) {
            s = prepend(opener, &s);
        }
    }

    let mut pieces = if s.chars().count() > HP.midpoint_split_min_chars && chance(rng, HP.midpoint_split) {
        match split_near_middle(&s) {
            Some((head, tail)) => vec![head, tail],
            None => vec![s],
        }
    } else {
        vec![s]
    };

    let mid_position = idx > 0 && idx + 1 < total;
    if mid_position {
        if let Some(first) = pieces.first_mut() {
            let linked = LINKING_OPENERS.contains(&first_word(first).as_str());
            if !linked && !has_prefix_marker(first) && chance(rng, HP.casual_transition) {
                if let Some(transition) = state.fresh_marker(CASUAL_TRANSITIONS, rng) {
                    *first = prepend(transition, first);
                }
            }
        }
    }

    pieces
}

/// Rewrite a "The X is Y" or "This X shows Y" sentence.
fn rewrite_opening<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> Option<String> {
    let (caps, templates) = if let Some(caps) = COPULA_OPENING_RE.captures(sentence) {
        (caps, COPULA_OPENING_REWRITES)
    } else {
        (EVIDENCE_OPENING_RE.captures(sentence)?, EVIDENCE_OPENING_REWRITES)
    };
    let template = weighted_pick(templates, rng)?;
    let rewritten = template
        .replace("{subject}", &caps["subject"])
        .replace("{verb}", &caps["verb"].to_lowercase())
        .replace("{rest}", &caps["rest"]);
    Some(capitalize_first(&rewritten))
}

/// Split at a clause breakpoint, or else at the comma closest to the middle
/// whose second half does not open with a connective.
fn split_near_middle(sentence: &str) -> Option<(String, String)> {
    let min_clause = HP.midpoint_split_min_clause;
    if let Some(split) = split_at_breakpoint(sentence, CLAUSE_BREAKPOINTS, min_clause) {
        return Some(split);
    }

    let mid = snap_to_char_boundary(sentence, sentence.len() / 2, false);
    let pos = sentence
        .match_indices(", ")
        .map(|(pos, _)| pos)
        .filter(|&pos| {
            let head = &sentence[..pos];
            let tail = &sentence[pos + 2..];
            head.chars().count() >= min_clause
                && tail.chars().count() >= min_clause
                && !CONNECTIVE_WORDS.contains(&first_word(tail).as_str())
        })
        .min_by_key(|&pos| pos.abs_diff(mid))?;

    let head = sentence[..pos].trim_end();
    let tail = sentence[pos + 2..].trim();
    Some((format!("{head}."), capitalize_first(tail)))
}
