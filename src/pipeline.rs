//! Stage orchestration for both modes.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cleanup::cleanup;
use crate::context::ContextSnapshot;
use crate::error::{HumanizeError, Result};
use crate::flow::reassemble;
use crate::grammar;
use crate::normalize::normalize;
use crate::params::HP;
use crate::paraphrase::paraphrase_sentences;
use crate::segment::{segment, split_long_sentences};
use crate::settings::ProcessingSettings;
use crate::signatures::{remove_basic_patterns, remove_signatures};
use crate::stats::change_ratio;
use crate::strategies::PassPlan;
use crate::text::word_count;
use crate::transform::{transform_sentences, RunState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Humanize,
    Paraphrase,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub mode: Mode,
    pub output: String,
    pub input_words: usize,
    pub output_words: usize,
    pub change_ratio: f64,
    pub context: ContextSnapshot,
}

/// Run one mode end to end and report on the result.
pub fn run<R: Rng + ?Sized>(text: &str, mode: Mode, settings: &ProcessingSettings, rng: &mut R) -> Result<RunReport> {
    if text.trim().is_empty() {
        return Err(HumanizeError::EmptyInput);
    }

    let normalized = normalize(text);
    let context = ContextSnapshot::analyze(&normalized);
    debug!(
        ?mode,
        words = context.word_count,
        formality = context.formality,
        topic = ?context.topic,
        "context analyzed"
    );

    let output = match mode {
        Mode::Humanize => humanize_stages(&normalized, &context, settings, rng),
        Mode::Paraphrase => paraphrase_stages(&normalized, settings, rng),
    };

    Ok(RunReport {
        mode,
        input_words: word_count(text),
        output_words: word_count(&output),
        change_ratio: change_ratio(&normalized, &output),
        context,
        output,
    })
}

pub fn humanize_with<R: Rng + ?Sized>(text: &str, settings: &ProcessingSettings, rng: &mut R) -> Result<String> {
    run(text, Mode::Humanize, settings, rng).map(|report| report.output)
}

pub fn paraphrase_with<R: Rng + ?Sized>(text: &str, settings: &ProcessingSettings, rng: &mut R) -> Result<String> {
    run(text, Mode::Paraphrase, settings, rng).map(|report| report.output)
}

fn humanize_stages<R: Rng + ?Sized>(
    normalized: &str,
    context: &ContextSnapshot,
    settings: &ProcessingSettings,
    rng: &mut R,
) -> String {
    let mut state = RunState::new();

    // 1. AI signatures
    let stripped = remove_signatures(normalized, settings, rng);
    debug!(before = normalized.len(), after = stripped.len(), "signatures stage done");

    // 2. Segmentation
    let mut sentences = segment(&stripped);
    if settings.readability {
        sentences = split_long_sentences(sentences, HP.long_sentence_chars, HP.long_sentence_min_clause);
    }
    debug!(sentences = sentences.len(), "segmented");

    // 3. Per-sentence transformation
    let mut sentences = transform_sentences(sentences, settings, context, &mut state, rng);

    // 4. Strategy passes
    PassPlan::humanize().run(&mut sentences, settings, &mut state, rng);
    debug!(sentences = sentences.len(), "strategy passes done");

    // 5. Reassembly and cleanup
    let joined = reassemble(sentences, settings, &mut state, rng);
    let out = cleanup(&joined);
    debug!(bytes = out.len(), "cleanup done");
    out
}

fn paraphrase_stages<R: Rng + ?Sized>(normalized: &str, settings: &ProcessingSettings, rng: &mut R) -> String {
    let mut state = RunState::new();

    // 1. Segmentation
    let sentences = segment(normalized);
    debug!(sentences = sentences.len(), "segmented");

    // 2. Rewriting, manipulation and coherence
    let sentences = paraphrase_sentences(sentences, settings, rng);
    debug!(sentences = sentences.len(), "paraphrased");

    // 3. Light humanization
    let mut sentences: Vec<String> = sentences
        .iter()
        .map(|s| grammar::correct(&remove_basic_patterns(s, settings, rng)))
        .filter(|s| !s.is_empty())
        .collect();
    PassPlan::light().run(&mut sentences, settings, &mut state, rng);
    debug!(sentences = sentences.len(), "light pass done");

    // 4. Reassembly and cleanup
    let joined = reassemble(sentences, settings, &mut state, rng);
    let out = cleanup(&joined);
    debug!(bytes = out.len(), "cleanup done");
    out
}
