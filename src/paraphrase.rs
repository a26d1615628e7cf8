//! Paraphrase mode: sentence restructuring, voice changes and phrase-level
//! substitution, followed by a coherence pass.
//!
//! Tense and topic-shift detection are keyword checks. They are cheap and
//! wrong often enough that every rewrite they drive stays probabilistic.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::params::HP;
use crate::patterns::{FORMAL_TO_CASUAL_TABLE, PHRASE_PARAPHRASE_TABLE, TRANSITIONAL_PARAPHRASE_TABLE};
use crate::pick::{chance, weighted_pick};
use crate::segment::split_at_breakpoint;
use crate::settings::ProcessingSettings;
use crate::synonyms::inflect_s;
use crate::tables::{
    CONTEXTUAL_SENSES, LINKING_OPENERS, LOGICAL_TRANSITIONS_ADDITION, LOGICAL_TRANSITIONS_CAUSE,
    LOGICAL_TRANSITIONS_CONTRAST, LOGICAL_TRANSITIONS_SEQUENCE, PARAPHRASE_BREAKPOINTS, PAST_FORMS,
};
use crate::text::{capitalize_first, decapitalize_first, first_word, has_prefix_marker, match_case, prepend, split_terminal};

type Variation = fn(&Captures) -> String;

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static COPULA_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<subject>[^,;:?!]+?)\s+(?P<verb>is|are|was|were)\s+(?P<rest>[^?!]+?)\.$").unwrap());

static MODAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<subject>[^,;:?!]+?)\s+(?P<modal>can|could|will|would|should|might|may)\s+(?P<rest>[^?!]+?)\.$")
        .unwrap()
});

static PASSIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<object>[^,;:]+?)\s+(?:was|were)\s+(?P<participle>[a-z]+)\s+by\s+(?P<agent>[^,;:.!?]+)(?P<end>[.!?])$")
        .unwrap()
});

static THERE_IS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^there\s+(?:is|are)\s+(?P<subject>.+?)\s+(?:that|which)\s+(?P<rest>.+)$").unwrap()
});

static IT_IS_THAT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^it\s+(?:is|was)\s+(?P<adj>[a-z]+)\s+that\s+(?P<clause>[^?!]+?)(?P<end>[.!])$").unwrap()
});

static SENSE_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    let alt = CONTEXTUAL_SENSES
        .iter()
        .map(|e| regex::escape(e.word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)\\b(?P<word>{alt})\\b(?P<next>\\s+\\w+)?")).unwrap()
});

static FUTURE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(will|shall|going to)\b").unwrap());
static PAST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(was|were|had|did)\b").unwrap());
static WILL_VERB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bwill\s+(?P<verb>[a-z]+)").unwrap());
static TO_PRESENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(was|were)\b").unwrap());
static TO_PAST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(is|are)\b").unwrap());

static CONTRAST_CUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(but|however|although)\b").unwrap());
static ADDITION_CUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(also|and|plus)\b").unwrap());
static CAUSE_CUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(so|therefore|thus)\b").unwrap());

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

// ---------------------------------------------------------------------------
// Restructuring variations
// ---------------------------------------------------------------------------

fn found_that(c: &Captures) -> String {
    format!("You'll find that {} {} {}.", decapitalize_first(&c["subject"]), &c["verb"], &c["rest"])
}

fn notable_that(c: &Captures) -> String {
    format!("What's notable is that {} {} {}.", decapitalize_first(&c["subject"]), &c["verb"], &c["rest"])
}

fn turns_out(c: &Captures) -> String {
    format!("It turns out {} {} {}.", decapitalize_first(&c["subject"]), &c["verb"], &c["rest"])
}

fn possible_that(c: &Captures) -> String {
    format!("It's possible that {} {} {}.", decapitalize_first(&c["subject"]), &c["modal"], &c["rest"])
}

fn a_chance(c: &Captures) -> String {
    format!("There's a chance {} {} {}.", decapitalize_first(&c["subject"]), &c["modal"], &c["rest"])
}

fn chances_are(c: &Captures) -> String {
    format!("Chances are {} {} {}.", decapitalize_first(&c["subject"]), &c["modal"], &c["rest"])
}

fn drop_there_is(c: &Captures) -> String {
    capitalize_first(&format!("{} {}", &c["subject"], &c["rest"]))
}

fn youll_find(c: &Captures) -> String {
    format!("You'll find {} {}", decapitalize_first(&c["subject"]), &c["rest"])
}

fn whats_adj(c: &Captures) -> String {
    format!("What's {} is that {}{}", c["adj"].to_lowercase(), &c["clause"], &c["end"])
}

fn and_thats_adj(c: &Captures) -> String {
    format!("{}, and that's {}{}", capitalize_first(&c["clause"]), c["adj"].to_lowercase(), &c["end"])
}

static COPULA_VARIATIONS: &[Variation] = &[found_that, notable_that, turns_out];
static MODAL_VARIATIONS: &[Variation] = &[possible_that, a_chance, chances_are];
static THERE_IS_VARIATIONS: &[Variation] = &[drop_there_is, youll_find];
static IT_IS_THAT_VARIATIONS: &[Variation] = &[whats_adj, and_thats_adj];

fn apply_variation<R: Rng + ?Sized>(re: &Regex, variations: &[Variation], sentence: &str, rng: &mut R) -> Option<String> {
    let caps = re.captures(sentence)?;
    let variation = weighted_pick(variations, rng)?;
    Some(variation(&caps))
}

// ---------------------------------------------------------------------------
// Per-sentence rewriting
// ---------------------------------------------------------------------------

/// Run every paraphrase phase over the sentence list.
pub fn paraphrase_sentences<R: Rng + ?Sized>(
    sentences: Vec<String>,
    settings: &ProcessingSettings,
    rng: &mut R,
) -> Vec<String> {
    let rewritten: Vec<String> = sentences
        .into_iter()
        .map(|s| rewrite_sentence(&s, settings, rng))
        .collect();
    debug!(sentences = rewritten.len(), "sentences rewritten");

    let manipulated = if settings.structure {
        manipulate_sentences(rewritten, rng)
    } else {
        rewritten
    };

    if settings.readability {
        let consistent = keep_tense_consistent(manipulated, rng);
        add_logical_transitions(consistent, rng)
    } else {
        manipulated
    }
}

fn rewrite_sentence<R: Rng + ?Sized>(sentence: &str, settings: &ProcessingSettings, rng: &mut R) -> String {
    let mut s = sentence.to_string();

    if settings.structure && !has_prefix_marker(&s) {
        let active = if chance(rng, HP.passive_to_active) {
            passive_to_active(&s)
        } else {
            None
        };
        if let Some(active) = active {
            s = active;
        } else if chance(rng, HP.restructure) {
            let restructured = apply_variation(&COPULA_RE, COPULA_VARIATIONS, &s, rng)
                .or_else(|| apply_variation(&MODAL_RE, MODAL_VARIATIONS, &s, rng));
            if let Some(restructured) = restructured {
                trace!(from = %s, to = %restructured, "sentence restructured");
                s = restructured;
            }
        }
    }

    if settings.expressions {
        s = PHRASE_PARAPHRASE_TABLE.apply_with_chance(&s, HP.phrase_paraphrase, rng);
        s = TRANSITIONAL_PARAPHRASE_TABLE.apply_with_chance(&s, HP.transitional_paraphrase, rng);
        s = substitute_senses(&s, rng);
        s = FORMAL_TO_CASUAL_TABLE.apply_with_chance(&s, HP.formal_to_casual, rng);
    }
    s
}

fn past_form(participle: &str) -> Option<String> {
    if let Some((_, past)) = PAST_FORMS.iter().find(|(p, _)| *p == participle) {
        return Some(past.to_string());
    }
    participle.ends_with("ed").then(|| participle.to_string())
}

/// "The report was written by the team." -> "The team wrote the report."
/// Only simple past passives with an explicit agent are turned around.
pub fn passive_to_active(sentence: &str) -> Option<String> {
    let caps = PASSIVE_RE.captures(sentence)?;
    let past = past_form(&caps["participle"])?;
    Some(format!(
        "{} {past} {}{}",
        capitalize_first(caps["agent"].trim()),
        decapitalize_first(&caps["object"]),
        &caps["end"]
    ))
}

/// Swap show/make/get for a word from one of their senses. Fixed phrases
/// ("make sure") are left alone.
fn substitute_senses<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> String {
    SENSE_WORD_RE
        .replace_all(sentence, |caps: &Captures| {
            let whole = caps[0].to_string();
            let word = &caps["word"];
            let next = caps.name("next").map_or("", |m| m.as_str());
            if next.trim().eq_ignore_ascii_case("sure") || !chance(rng, HP.contextual_sense) {
                return whole;
            }
            let Some(entry) = CONTEXTUAL_SENSES.iter().find(|e| e.word.eq_ignore_ascii_case(word)) else {
                return whole;
            };
            let Some(candidate) = weighted_pick(entry.senses, rng).and_then(|sense| weighted_pick(*sense, rng)) else {
                return whole;
            };
            format!("{}{next}", match_case(word, candidate))
        })
        .into_owned()
}

// ---------------------------------------------------------------------------
// Sentence manipulation
// ---------------------------------------------------------------------------

const COMBINERS: &[&str] = &[", and", ", but", " while"];

fn manipulate_sentences<R: Rng + ?Sized>(sentences: Vec<String>, rng: &mut R) -> Vec<String> {
    let mut out = Vec::with_capacity(sentences.len());
    let mut iter = sentences.into_iter().peekable();
    while let Some(current) = iter.next() {
        let short = |s: &str| s.chars().count() < HP.combine_max_chars && s.ends_with('.');
        if let Some(next) = iter.peek() {
            if short(current.as_str()) && short(next.as_str()) && chance(rng, HP.combine_short) {
                if let Some(combiner) = weighted_pick(COMBINERS, rng) {
                    let (body, _) = split_terminal(&current);
                    out.push(format!("{body}{combiner} {}", decapitalize_first(next)));
                    iter.next();
                    continue;
                }
            }
        }
        if current.chars().count() > HP.split_min_chars && chance(rng, HP.split_long) {
            if let Some((head, tail)) = split_at_breakpoint(&current, PARAPHRASE_BREAKPOINTS, HP.split_min_clause) {
                out.push(head);
                out.push(tail);
                continue;
            }
        }
        out.push(transform_structure(&current, rng));
    }
    out
}

/// "There are X that Y" and "It is ADJ that Z" rewrites.
fn transform_structure<R: Rng + ?Sized>(sentence: &str, rng: &mut R) -> String {
    apply_variation(&THERE_IS_RE, THERE_IS_VARIATIONS, sentence, rng)
        .or_else(|| apply_variation(&IT_IS_THAT_RE, IT_IS_THAT_VARIATIONS, sentence, rng))
        .unwrap_or_else(|| sentence.to_string())
}

// ---------------------------------------------------------------------------
// Coherence
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Present,
    Past,
    Future,
}

pub fn detect_tense(sentence: &str) -> Tense {
    if FUTURE_RE.is_match(sentence) {
        Tense::Future
    } else if PAST_RE.is_match(sentence) {
        Tense::Past
    } else {
        Tense::Present
    }
}

/// Most frequent tense; on a tie the one seen first wins.
fn predominant(tenses: &[Tense]) -> Option<Tense> {
    let mut best: Option<(Tense, usize)> = None;
    for &tense in tenses {
        let count = tenses.iter().filter(|&&t| t == tense).count();
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((tense, count));
        }
    }
    best.map(|(t, _)| t)
}

fn adjust_tense(sentence: &str, target: Tense) -> String {
    match target {
        Tense::Present => {
            let out = WILL_VERB_RE.replace_all(sentence, |c: &Captures| inflect_s(&c["verb"]));
            TO_PRESENT_RE
                .replace_all(&out, |c: &Captures| {
                    let present = if c[1].eq_ignore_ascii_case("was") { "is" } else { "are" };
                    match_case(&c[1], present)
                })
                .into_owned()
        }
        Tense::Past => TO_PAST_RE
            .replace_all(sentence, |c: &Captures| {
                let past = if c[1].eq_ignore_ascii_case("is") { "was" } else { "were" };
                match_case(&c[1], past)
            })
            .into_owned(),
        Tense::Future => sentence.to_string(),
    }
}

fn keep_tense_consistent<R: Rng + ?Sized>(sentences: Vec<String>, rng: &mut R) -> Vec<String> {
    let tenses: Vec<Tense> = sentences.iter().map(|s| detect_tense(s)).collect();
    let Some(target) = predominant(&tenses) else {
        return sentences;
    };
    sentences
        .into_iter()
        .zip(tenses)
        .map(|(s, tense)| {
            if tense != target && chance(rng, HP.tense_consistency) {
                adjust_tense(&s, target)
            } else {
                s
            }
        })
        .collect()
}

/// Share of distinct words two sentences have in common.
pub fn word_overlap(a: &str, b: &str) -> f64 {
    let words = |s: &str| -> HashSet<String> {
        NON_WORD_RE
            .split(&s.to_lowercase())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    };
    let (a, b) = (words(a), words(b));
    let largest = a.len().max(b.len());
    if largest == 0 {
        return 1.0;
    }
    a.intersection(&b).count() as f64 / largest as f64
}

fn logical_transitions(sentence: &str) -> &'static [&'static str] {
    if CONTRAST_CUE_RE.is_match(sentence) {
        LOGICAL_TRANSITIONS_CONTRAST
    } else if ADDITION_CUE_RE.is_match(sentence) {
        LOGICAL_TRANSITIONS_ADDITION
    } else if CAUSE_CUE_RE.is_match(sentence) {
        LOGICAL_TRANSITIONS_CAUSE
    } else {
        LOGICAL_TRANSITIONS_SEQUENCE
    }
}

fn add_logical_transitions<R: Rng + ?Sized>(sentences: Vec<String>, rng: &mut R) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(sentences.len());
    for (idx, sentence) in sentences.iter().enumerate() {
        let linked = LINKING_OPENERS.contains(&first_word(sentence).as_str()) || has_prefix_marker(sentence);
        let shifted = idx > 0 && word_overlap(&sentences[idx - 1], sentence) < HP.topic_shift_similarity;
        if shifted && !linked && chance(rng, HP.logical_transition) {
            if let Some(transition) = weighted_pick(logical_transitions(sentence), rng) {
                out.push(prepend(transition, sentence));
                continue;
            }
        }
        out.push(sentence.clone());
    }
    out
}
