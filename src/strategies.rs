//! Optional stochastic rewriting passes.
//!
//! Each [`Strategy`] is one kind of edit over the sentence list. A [`Pass`]
//! pairs a strategy with a run-level chance (does the pass run at all) and a
//! per-sentence or per-occurrence chance. A [`PassPlan`] is an ordered list of
//! passes; the humanize and light plans are the two built in.

use once_cell::sync::Lazy;
use rand::Rng;
use regex::{Captures, Regex};
use serde::Serialize;
use tracing::trace;

use crate::pick::{chance, pick_by_weight, weighted_pick};
use crate::segment::split_at_breakpoint;
use crate::settings::ProcessingSettings;
use crate::tables::{
    ABSOLUTE_WORDS, ASIDES, BRIDGES, CASUAL_INTENSIFIERS, CLARIFIERS, CLAUSE_BREAKPOINTS, DIRECT_ADDRESSES,
    EMPHASIS_WORDS, EXPERIENCE_PREFIXES, FALSE_STARTS, FILLERS, FILLER_BLOCKERS, FILLER_VERBS, FRONTABLE_SUBORDINATORS,
    FUSION_CONNECTORS, GRADABLE_ADJECTIVES, HEDGES, INTENSIFIERS, INTERJECTIONS, LENGTH_TARGETS, LIGHT_TRANSITIONS,
    LINKING_OPENERS, OPINION_TOUCHES, PERSONAL_STARTERS, RHETORICAL_QUESTIONS, TRAILING_THOUGHTS,
    UNEXPECTED_TRANSITIONS,
};
use crate::text::{
    capitalize_first, decapitalize_first, first_word, has_prefix_marker, match_case, prepend, split_terminal,
    word_count,
};
use crate::transform::RunState;

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

static ABSOLUTE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?i)\\b({})\\b", alternation(ABSOLUTE_WORDS))).unwrap());

static DIRECT_ADDRESS_SITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?P<pronoun>this|that|it)\s+(?P<verb>is|means|shows|indicates|suggests)\b").unwrap()
});

static DIRECT_ADDRESS_PRESENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?i)\\b({})\\b", alternation(DIRECT_ADDRESSES))).unwrap());

static FILLER_SITE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "\\b(?P<verb>(?i:{}))\\s+(?P<next>[a-z][\\w']*)",
        alternation(FILLER_VERBS)
    ))
    .unwrap()
});

static FILLER_PRESENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("(?i)\\b({})\\b", alternation(FILLERS))).unwrap());

static INTERJECTION_SITE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?P<verb>(?i:is|are|was|were))\s+(?P<next>[a-z][\w']*)").unwrap());

static INTERJECTION_PRESENT_RE: Lazy<Regex> = Lazy::new(|| {
    let words: Vec<&str> = INTERJECTIONS.iter().chain(FILLERS).copied().collect();
    Regex::new(&format!("(?i)\\b({})\\b", alternation(&words))).unwrap()
});

static CLAUSE_FRONTING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "^(?P<main>[^,;:]+?)\\s+(?P<conj>(?i:{}))\\s+(?P<sub>[^,;:]+?)(?P<end>[.!?])$",
        alternation(FRONTABLE_SUBORDINATORS)
    ))
    .unwrap()
});

static GRADABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        "(?:\\b(?P<prev>[\\w']+)\\s+)?\\b(?P<adj>(?i:{}))\\b",
        alternation(GRADABLE_ADJECTIVES)
    ))
    .unwrap()
});

static VERY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bvery\b").unwrap());

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    // Conversational injection
    Hedge,
    RhetoricalQuestion,
    DirectAddress,
    PersonalExperience,
    ParentheticalAside,
    UnexpectedTransition,
    CasualInterjection,
    PersonalTouch,
    // Natural imperfections
    RedundantClarification,
    FalseStart,
    TrailingThought,
    ColloquialFiller,
    // Conversational flow
    ConversationalBridge,
    // Stylistic variety
    SentenceFusion,
    ClauseFronting,
    EmphasisVariation,
    LengthVariation,
    // Light touches
    PersonalStarter,
    CasualIntensifier,
    LightTransition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Conversational,
    Imperfection,
    Flow,
    Stylistic,
    Light,
}

impl Strategy {
    pub fn family(self) -> Family {
        use Strategy::*;
        match self {
            Hedge | RhetoricalQuestion | DirectAddress | PersonalExperience | ParentheticalAside
            | UnexpectedTransition | CasualInterjection | PersonalTouch => Family::Conversational,
            RedundantClarification | FalseStart | TrailingThought | ColloquialFiller => Family::Imperfection,
            ConversationalBridge => Family::Flow,
            SentenceFusion | ClauseFronting | EmphasisVariation | LengthVariation => Family::Stylistic,
            PersonalStarter | CasualIntensifier | LightTransition => Family::Light,
        }
    }

    /// Whether the settings allow this strategy to run.
    pub fn enabled(self, settings: &ProcessingSettings) -> bool {
        use Strategy::*;
        match self {
            Hedge | RhetoricalQuestion | DirectAddress | PersonalExperience | ParentheticalAside
            | UnexpectedTransition | CasualInterjection | PersonalTouch | ConversationalBridge | PersonalStarter
            | LightTransition => settings.conversational,
            RedundantClarification | FalseStart | TrailingThought | ColloquialFiller => {
                settings.conversational && !settings.technical
            }
            SentenceFusion | ClauseFronting | LengthVariation => settings.structure,
            EmphasisVariation | CasualIntensifier => settings.expressions,
        }
    }

    /// Apply to the sentence list. `probability` gates each sentence or each
    /// occurrence, depending on the strategy.
    pub fn apply<R: Rng + ?Sized>(
        self,
        sentences: &mut Vec<String>,
        probability: f64,
        state: &mut RunState,
        rng: &mut R,
    ) {
        use Strategy::*;
        match self {
            Hedge => each_sentence(sentences, |_, _, s| {
                if ABSOLUTE_RE.is_match(s) && !has_prefix_marker(s) && chance(rng, probability) {
                    prefix_with(s, HEDGES, state, rng)
                } else {
                    None
                }
            }),
            RhetoricalQuestion => insert_questions(sentences, probability, state, rng),
            DirectAddress => each_sentence(sentences, |_, _, s| add_direct_address(s, probability, state, rng)),
            PersonalExperience => each_sentence(sentences, |idx, _, s| {
                if idx == 0 && !has_prefix_marker(s) && chance(rng, probability) {
                    prefix_with(s, EXPERIENCE_PREFIXES, state, rng)
                } else {
                    None
                }
            }),
            ParentheticalAside => each_sentence(sentences, |_, _, s| {
                if s.chars().count() > 50 && !s.contains('(') && chance(rng, probability) {
                    let aside = state.fresh_marker(ASIDES, rng)?;
                    insert_word(s, 0.6, aside)
                } else {
                    None
                }
            }),
            UnexpectedTransition => each_sentence(sentences, |idx, _, s| {
                if idx > 0 && !s.ends_with('?') && !has_prefix_marker(s) && chance(rng, probability) {
                    prefix_with(s, UNEXPECTED_TRANSITIONS, state, rng)
                } else {
                    None
                }
            }),
            CasualInterjection => each_sentence(sentences, |_, _, s| add_interjection(s, probability, state, rng)),
            PersonalTouch => add_personal_touch(sentences, probability, state, rng),
            RedundantClarification => each_sentence(sentences, |_, _, s| {
                if s.chars().count() > 40 && chance(rng, probability) {
                    add_clarifier(s, state, rng)
                } else {
                    None
                }
            }),
            FalseStart => each_sentence(sentences, |idx, _, s| {
                if idx > 0 && s.chars().count() > 25 && !has_prefix_marker(s) && chance(rng, probability) {
                    prefix_with(s, FALSE_STARTS, state, rng)
                } else {
                    None
                }
            }),
            TrailingThought => each_sentence(sentences, |_, _, s| {
                if s.chars().count() > 35 && s.ends_with('.') && chance(rng, probability) {
                    add_trailing_thought(s, state, rng)
                } else {
                    None
                }
            }),
            ColloquialFiller => each_sentence(sentences, |_, _, s| add_filler(s, probability, state, rng)),
            ConversationalBridge => each_sentence(sentences, |idx, total, s| {
                if idx > 0 && idx + 1 < total && !has_prefix_marker(s) && chance(rng, probability) {
                    prefix_with(s, BRIDGES, state, rng)
                } else {
                    None
                }
            }),
            SentenceFusion => fuse_sentences(sentences, probability, rng),
            ClauseFronting => each_sentence(sentences, |_, _, s| {
                if !has_prefix_marker(s) && chance(rng, probability) {
                    front_clause(s)
                } else {
                    None
                }
            }),
            EmphasisVariation => each_sentence(sentences, |_, _, s| emphasize(s, probability, usize::MAX, state, rng)),
            LengthVariation => vary_length(sentences, probability, state, rng),
            PersonalStarter => each_sentence(sentences, |idx, _, s| {
                if idx == 0 && !has_prefix_marker(s) && chance(rng, probability) {
                    prefix_with(s, PERSONAL_STARTERS, state, rng)
                } else {
                    None
                }
            }),
            CasualIntensifier => each_sentence(sentences, |_, _, s| {
                let out = VERY_RE
                    .replace_all(s, |caps: &Captures| {
                        if chance(rng, probability) {
                            match weighted_pick(CASUAL_INTENSIFIERS, rng) {
                                Some(word) => match_case(&caps[0], word),
                                None => caps[0].to_string(),
                            }
                        } else {
                            caps[0].to_string()
                        }
                    })
                    .into_owned();
                (out != *s).then_some(out)
            }),
            LightTransition => each_sentence(sentences, |idx, _, s| {
                let linked = LINKING_OPENERS.contains(&first_word(s).as_str());
                if idx > 0 && !linked && !has_prefix_marker(s) && chance(rng, probability) {
                    prefix_with(s, LIGHT_TRANSITIONS, state, rng)
                } else {
                    None
                }
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Passes and plans
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pass {
    pub strategy: Strategy,
    /// Chance the pass runs at all in a given invocation.
    pub run_chance: f64,
    /// Chance per sentence or per occurrence once the pass runs.
    pub chance: f64,
}

impl Pass {
    pub const fn new(strategy: Strategy, run_chance: f64, chance: f64) -> Self {
        Self {
            strategy,
            run_chance,
            chance,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PassPlan {
    pub passes: Vec<Pass>,
}

impl PassPlan {
    pub fn new(passes: Vec<Pass>) -> Self {
        Self { passes }
    }

    /// Full humanize mode: conversational injection always runs, the rest
    /// only some of the time.
    pub fn humanize() -> Self {
        use Strategy::*;
        Self::new(vec![
            Pass::new(Hedge, 1.0, 0.3),
            Pass::new(RhetoricalQuestion, 1.0, 0.2),
            Pass::new(DirectAddress, 1.0, 0.22),
            Pass::new(PersonalExperience, 1.0, 0.18),
            Pass::new(ParentheticalAside, 1.0, 0.14),
            Pass::new(UnexpectedTransition, 1.0, 0.15),
            Pass::new(CasualInterjection, 1.0, 0.10),
            Pass::new(RedundantClarification, 0.18, 0.18),
            Pass::new(FalseStart, 0.12, 0.12),
            Pass::new(TrailingThought, 0.15, 0.15),
            Pass::new(ColloquialFiller, 0.16, 0.16),
            Pass::new(ConversationalBridge, 0.20, 0.20),
            Pass::new(SentenceFusion, 0.28, 0.25),
            Pass::new(ClauseFronting, 0.32, 0.30),
            Pass::new(EmphasisVariation, 0.20, 0.20),
            Pass::new(LengthVariation, 1.0, 0.5),
            Pass::new(PersonalTouch, 0.20, 1.0),
        ])
    }

    /// The small set of touches that follows paraphrasing.
    pub fn light() -> Self {
        use Strategy::*;
        Self::new(vec![
            Pass::new(PersonalStarter, 1.0, 0.3),
            Pass::new(CasualIntensifier, 1.0, 0.4),
            Pass::new(LightTransition, 1.0, 0.15),
        ])
    }

    pub fn run<R: Rng + ?Sized>(
        &self,
        sentences: &mut Vec<String>,
        settings: &ProcessingSettings,
        state: &mut RunState,
        rng: &mut R,
    ) {
        for pass in &self.passes {
            if !pass.strategy.enabled(settings) || !chance(rng, pass.run_chance) {
                continue;
            }
            pass.strategy.apply(sentences, pass.chance, state, rng);
            trace!(strategy = ?pass.strategy, sentences = sentences.len(), "pass applied");
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Run `edit(index, total, sentence)` over every sentence, replacing it when
/// the edit returns something.
fn each_sentence(sentences: &mut [String], mut edit: impl FnMut(usize, usize, &str) -> Option<String>) {
    let total = sentences.len();
    for (idx, sentence) in sentences.iter_mut().enumerate() {
        if let Some(edited) = edit(idx, total, sentence) {
            *sentence = edited;
        }
    }
}

fn prefix_with<R: Rng + ?Sized>(
    sentence: &str,
    markers: &[&'static str],
    state: &mut RunState,
    rng: &mut R,
) -> Option<String> {
    let marker = state.fresh_marker(markers, rng)?;
    Some(prepend(marker, sentence))
}

/// Insert `phrase` before the word at `fraction` of the sentence length,
/// never before the first word or after the last.
fn insert_word(sentence: &str, fraction: f64, phrase: &str) -> Option<String> {
    let mut words: Vec<&str> = sentence.split(' ').collect();
    if words.len() < 3 {
        return None;
    }
    let pos = ((words.len() as f64 * fraction) as usize).clamp(1, words.len() - 1);
    words.insert(pos, phrase);
    Some(words.join(" "))
}

fn insert_questions<R: Rng + ?Sized>(sentences: &mut Vec<String>, probability: f64, state: &mut RunState, rng: &mut R) {
    let total = sentences.len();
    if total < 3 {
        return;
    }
    let mut out = Vec::with_capacity(total + 2);
    let mut asked_last = false;
    for (idx, sentence) in sentences.drain(..).enumerate() {
        let interior = idx > 0 && idx + 1 < total;
        let ask = interior && !asked_last && !sentence.ends_with('?') && chance(rng, probability);
        out.push(sentence);
        asked_last = false;
        if ask {
            if let Some(question) = state.fresh_marker(RHETORICAL_QUESTIONS, rng) {
                out.push(question.to_string());
                asked_last = true;
            }
        }
    }
    *sentences = out;
}

fn add_direct_address<R: Rng + ?Sized>(
    sentence: &str,
    probability: f64,
    state: &mut RunState,
    rng: &mut R,
) -> Option<String> {
    if DIRECT_ADDRESS_PRESENT_RE.is_match(sentence) {
        return None;
    }
    let caps = DIRECT_ADDRESS_SITE_RE.captures(sentence)?;
    let site = caps.get(0)?;
    if !chance(rng, probability) {
        return None;
    }
    let address = state.fresh_marker(DIRECT_ADDRESSES, rng)?;
    let (address, pronoun) = if site.start() == 0 {
        (capitalize_first(address), decapitalize_first(&caps["pronoun"]))
    } else {
        (address.to_string(), caps["pronoun"].to_string())
    };
    Some(format!(
        "{}{address}, {pronoun} {}{}",
        &sentence[..site.start()],
        &caps["verb"],
        &sentence[site.end()..]
    ))
}

/// Drop one interjection in after a copula ("was honestly slower").
fn add_interjection<R: Rng + ?Sized>(
    sentence: &str,
    probability: f64,
    state: &mut RunState,
    rng: &mut R,
) -> Option<String> {
    if INTERJECTION_PRESENT_RE.is_match(sentence) {
        return None;
    }
    let mut placed = false;
    let out = INTERJECTION_SITE_RE
        .replace_all(sentence, |caps: &Captures| {
            if placed || !chance(rng, probability) {
                return caps[0].to_string();
            }
            match state.fresh_marker(INTERJECTIONS, rng) {
                Some(word) => {
                    placed = true;
                    format!("{} {word} {}", &caps["verb"], &caps["next"])
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned();
    placed.then_some(out)
}

/// Put an opinion before the final period of one randomly drawn sentence,
/// if that sentence is long enough to carry it.
fn add_personal_touch<R: Rng + ?Sized>(sentences: &mut [String], probability: f64, state: &mut RunState, rng: &mut R) {
    if sentences.is_empty() {
        return;
    }
    let idx = rng.gen_range(0..sentences.len());
    let sentence = &sentences[idx];
    let fits = sentence.chars().count() > 30 && sentence.ends_with('.') && !sentence.ends_with("..");
    if !fits || sentence.contains('(') || !chance(rng, probability) {
        return;
    }
    if let Some(touch) = state.fresh_marker(OPINION_TOUCHES, rng) {
        let touched = format!("{}{touch}.", &sentence[..sentence.len() - 1]);
        sentences[idx] = touched;
    }
}

fn add_clarifier<R: Rng + ?Sized>(sentence: &str, state: &mut RunState, rng: &mut R) -> Option<String> {
    if CLARIFIERS.iter().any(|c| sentence.contains(c.trim_matches(','))) {
        return None;
    }
    let mut words: Vec<String> = sentence.split(' ').map(str::to_string).collect();
    if words.len() < 4 {
        return None;
    }
    let pos = ((words.len() as f64 * 0.7) as usize).clamp(1, words.len() - 2);
    if words[pos].ends_with(|c: char| !c.is_alphanumeric()) {
        return None;
    }
    let clarifier = state.fresh_marker(CLARIFIERS, rng)?;
    words[pos].push_str(clarifier);
    Some(words.join(" "))
}

fn add_trailing_thought<R: Rng + ?Sized>(sentence: &str, state: &mut RunState, rng: &mut R) -> Option<String> {
    if TRAILING_THOUGHTS.iter().any(|t| sentence.contains(t.trim_start_matches(", "))) {
        return None;
    }
    let (body, end) = split_terminal(sentence);
    if body.ends_with(|c: char| !c.is_alphanumeric()) {
        return None;
    }
    let thought = state.fresh_marker(TRAILING_THOUGHTS, rng)?;
    Some(format!("{body}{thought}{end}"))
}

fn add_filler<R: Rng + ?Sized>(sentence: &str, probability: f64, state: &mut RunState, rng: &mut R) -> Option<String> {
    if FILLER_PRESENT_RE.is_match(sentence) {
        return None;
    }
    let mut placed = false;
    let out = FILLER_SITE_RE
        .replace_all(sentence, |caps: &Captures| {
            let next = caps["next"].to_lowercase();
            if placed || FILLER_BLOCKERS.contains(&next.as_str()) || !chance(rng, probability) {
                return caps[0].to_string();
            }
            match state.fresh_marker(FILLERS, rng) {
                Some(filler) => {
                    placed = true;
                    format!("{} {filler} {}", &caps["verb"], &caps["next"])
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned();
    placed.then_some(out)
}

fn fuse_sentences<R: Rng + ?Sized>(sentences: &mut Vec<String>, probability: f64, rng: &mut R) {
    let mut out = Vec::with_capacity(sentences.len());
    let mut iter = std::mem::take(sentences).into_iter().peekable();
    while let Some(current) = iter.next() {
        let fusable = |s: &str| s.chars().count() < 35 && s.ends_with('.') && !s.contains(':');
        let fused = match iter.peek() {
            Some(next) if fusable(current.as_str()) && fusable(next.as_str()) && chance(rng, probability) => {
                weighted_pick(FUSION_CONNECTORS, rng).map(|connector| {
                    let (body, _) = split_terminal(&current);
                    format!("{body}, {connector} {}", decapitalize_first(next))
                })
            }
            _ => None,
        };
        match fused {
            Some(sentence) => {
                trace!(%sentence, "sentences fused");
                iter.next();
                out.push(sentence);
            }
            None => out.push(current),
        }
    }
    *sentences = out;
}

/// "X because Y." -> "Because Y, x." when both halves have at least three
/// words.
fn front_clause(sentence: &str) -> Option<String> {
    let caps = CLAUSE_FRONTING_RE.captures(sentence)?;
    let main = &caps["main"];
    let sub = &caps["sub"];
    if word_count(main) < 3 || word_count(sub) < 3 {
        return None;
    }
    Some(format!(
        "{} {sub}, {}{}",
        capitalize_first(&caps["conj"].to_lowercase()),
        decapitalize_first(main),
        &caps["end"]
    ))
}

/// Put an emphasis word before up to `limit` gradable adjectives that are not
/// already intensified.
fn emphasize<R: Rng + ?Sized>(
    sentence: &str,
    probability: f64,
    limit: usize,
    state: &mut RunState,
    rng: &mut R,
) -> Option<String> {
    let mut placed = 0usize;
    let out = GRADABLE_RE
        .replace_all(sentence, |caps: &Captures| {
            let prev = caps.name("prev").map(|m| m.as_str().to_lowercase());
            let blocked = prev
                .as_deref()
                .is_some_and(|p| INTENSIFIERS.contains(&p) || p == "a" || p == "an");
            if placed >= limit || blocked || !chance(rng, probability) {
                return caps[0].to_string();
            }
            match state.fresh_marker(EMPHASIS_WORDS, rng) {
                Some(word) => {
                    placed += 1;
                    let lead = caps.name("prev").map(|m| format!("{} ", m.as_str())).unwrap_or_default();
                    let adj = &caps["adj"];
                    if lead.is_empty() {
                        format!("{} {}", match_case(adj, word), adj.to_lowercase())
                    } else {
                        format!("{lead}{word} {adj}")
                    }
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned();
    (placed > 0).then_some(out)
}

/// Burstiness: draw a target length band per sentence, split sentences above
/// it and intensify one adjective in sentences below it.
fn vary_length<R: Rng + ?Sized>(sentences: &mut Vec<String>, probability: f64, state: &mut RunState, rng: &mut R) {
    let mut out = Vec::with_capacity(sentences.len());
    for sentence in std::mem::take(sentences) {
        if !chance(rng, probability) {
            out.push(sentence);
            continue;
        }
        let Some(target) = pick_by_weight(LENGTH_TARGETS, |t| t.weight, rng) else {
            out.push(sentence);
            continue;
        };
        let words = word_count(&sentence);
        if words > target.max {
            if let Some((head, tail)) = split_at_breakpoint(&sentence, CLAUSE_BREAKPOINTS, 20) {
                out.push(head);
                out.push(tail);
                continue;
            }
        } else if words < target.min {
            if let Some(longer) = emphasize(&sentence, 1.0, 1, state, rng) {
                out.push(longer);
                continue;
            }
        }
        out.push(sentence);
    }
    *sentences = out;
}
