//! Flow reassembly: transition de-duplication, joining, contractions.

use rand::Rng;
use tracing::{debug, trace};

use crate::params::HP;
use crate::patterns::CONTRACTION_TABLE;
use crate::pick::{chance, weighted_pick};
use crate::settings::ProcessingSettings;
use crate::tables::{FALLBACK_TRANSITIONS, TRANSITION_ALTERNATIVES};
use crate::text::first_word;
use crate::transform::RunState;

/// Join sentences into one string. With `readability` on, a transition word
/// that already opened an earlier sentence is usually swapped for an
/// alternative, and expanded negations are contracted.
pub fn reassemble<R: Rng + ?Sized>(
    sentences: Vec<String>,
    settings: &ProcessingSettings,
    state: &mut RunState,
    rng: &mut R,
) -> String {
    if !settings.readability {
        return sentences.join(" ");
    }

    let sentences: Vec<String> = sentences
        .into_iter()
        .map(|s| dedupe_transition(s, state, rng))
        .collect();
    let joined = sentences.join(" ");
    let out = CONTRACTION_TABLE.apply_with_chance(&joined, HP.contraction, rng);
    debug!(sentences = sentences.len(), bytes = out.len(), "reassembled");
    out
}

fn dedupe_transition<R: Rng + ?Sized>(sentence: String, state: &mut RunState, rng: &mut R) -> String {
    let word = first_word(&sentence);
    let Some(entry) = TRANSITION_ALTERNATIVES.iter().find(|t| t.word == word) else {
        return sentence;
    };
    let repeated = state.used_transitions.contains(&word);
    if !repeated {
        state.used_transitions.push(word);
        return sentence;
    }
    if !chance(rng, HP.transition_swap) {
        return sentence;
    }

    let alternatives = if entry.alternatives.is_empty() {
        FALLBACK_TRANSITIONS
    } else {
        entry.alternatives
    };
    let fresh: Vec<&'static str> = alternatives
        .iter()
        .copied()
        .filter(|a| !state.used_transitions.contains(&first_word(a)))
        .collect();
    let pool = if fresh.is_empty() { alternatives } else { &fresh[..] };
    let Some(alternative) = weighted_pick(pool, rng).copied() else {
        return sentence;
    };
    let Some((_, rest)) = sentence.split_once(' ') else {
        return sentence;
    };
    state.used_transitions.push(first_word(alternative));
    trace!(from = %word, to = alternative, "transition swapped");
    format!("{alternative} {rest}")
}
