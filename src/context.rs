//! Per-run measurements of the input.
//!
//! These are keyword heuristics, not language analysis: formality is the
//! difference between formal and informal marker densities, and the topic is
//! whichever keyword family shows up most.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::params::HP;
use crate::segment::segment;
use crate::settings::ProcessingSettings;
use crate::tables::{Register, FORMAL_MARKERS, INFORMAL_MARKERS, TOPIC_KEYWORDS};
use crate::text::{strip_punct, word_count};

static FORMAL_MARKER_RE: Lazy<Regex> = Lazy::new(|| marker_regex(FORMAL_MARKERS));
static INFORMAL_MARKER_RE: Lazy<Regex> = Lazy::new(|| marker_regex(INFORMAL_MARKERS));

fn marker_regex(words: &[&str]) -> Regex {
    let alt = words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)\\b({alt})\\b")).unwrap()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Academic,
    Business,
    Technology,
    Creative,
    General,
}

impl Topic {
    fn formality_bias(self) -> f64 {
        match self {
            Topic::Academic => HP.topic_bias_academic,
            Topic::Business => HP.topic_bias_business,
            Topic::Creative => HP.topic_bias_creative,
            Topic::Technology | Topic::General => 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContextSnapshot {
    pub word_count: usize,
    pub avg_sentence_length: f64,
    /// In [0, 1]; 0.5 is neutral.
    pub formality: f64,
    pub topic: Topic,
}

impl ContextSnapshot {
    pub fn analyze(text: &str) -> Self {
        let wc = word_count(text);
        let sentences = segment(text).len().max(1);
        let topic = detect_topic(text);
        let formality = (formality_score(text) + topic.formality_bias()).clamp(0.0, 1.0);
        Self {
            word_count: wc,
            avg_sentence_length: wc as f64 / sentences as f64,
            formality,
            topic,
        }
    }

    /// Synonym register for this run. The technical flag pins it to formal.
    pub fn register(&self, settings: &ProcessingSettings) -> Register {
        if settings.technical {
            Register::Formal
        } else if self.formality > HP.formal_register_min {
            Register::Formal
        } else if self.formality < HP.conversational_register_max {
            Register::Conversational
        } else {
            Register::Casual
        }
    }
}

/// `formal ratio - informal ratio + 0.5`, clamped to [0, 1]. Empty text is
/// neutral.
pub fn formality_score(text: &str) -> f64 {
    let wc = word_count(text);
    if wc == 0 {
        return 0.5;
    }
    let formal = FORMAL_MARKER_RE.find_iter(text).count() as f64;
    let informal = INFORMAL_MARKER_RE.find_iter(text).count() as f64;
    ((formal - informal) / wc as f64 + 0.5).clamp(0.0, 1.0)
}

/// Topic family with the most distinct keywords present. Earlier families win
/// ties; no keywords at all means [`Topic::General`].
pub fn detect_topic(text: &str) -> Topic {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| strip_punct(w).to_lowercase())
        .collect();

    let mut best = Topic::General;
    let mut best_count = 0;
    for (topic, keywords) in TOPIC_KEYWORDS {
        let count = keywords
            .iter()
            .filter(|k| words.iter().any(|w| w.contains(*k)))
            .count();
        if count > best_count {
            best = *topic;
            best_count = count;
        }
    }
    best
}
