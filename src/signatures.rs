//! AI-signature removal: formal connectors, robotic openers, stock
//! collocations and wordy phrases.

use rand::Rng;
use tracing::trace;

use crate::patterns::{COLLOCATION_TABLE, FORMAL_CONNECTOR_TABLE, REDUNDANT_PHRASE_TABLE, ROBOTIC_STARTER_TABLE};
use crate::settings::ProcessingSettings;
use crate::text::{collapse_whitespace, sentence_case};

/// Strip formulaic phrasing. Identity when `settings.patterns` is off.
///
/// Robotic starters, collocations and redundant phrases are replaced on every
/// occurrence; connectors get a weighted-random casual alternative.
pub fn remove_signatures<R: Rng + ?Sized>(text: &str, settings: &ProcessingSettings, rng: &mut R) -> String {
    if !settings.patterns {
        return text.to_string();
    }
    let out = FORMAL_CONNECTOR_TABLE.apply(text, rng);
    let out = ROBOTIC_STARTER_TABLE.apply(&out, rng);
    let out = COLLOCATION_TABLE.apply(&out, rng);
    let out = REDUNDANT_PHRASE_TABLE.apply(&out, rng);
    trace!(before = text.len(), after = out.len(), "signatures removed");
    sentence_case(&collapse_whitespace(&out))
}

/// The subset applied during the light pass of paraphrase mode.
pub fn remove_basic_patterns<R: Rng + ?Sized>(text: &str, settings: &ProcessingSettings, rng: &mut R) -> String {
    if !settings.patterns {
        return text.to_string();
    }
    let out = ROBOTIC_STARTER_TABLE.apply(text, rng);
    let out = REDUNDANT_PHRASE_TABLE.apply(&out, rng);
    sentence_case(&collapse_whitespace(&out))
}
