//! Rewrites machine-sounding prose so it reads as if a person wrote it.
//!
//! Text goes through normalization, AI-signature removal, sentence
//! segmentation, per-sentence transformation, optional strategy passes, flow
//! reassembly and a final cleanup. Every stage is gated by a
//! [`ProcessingSettings`] flag except grammar corrections and cleanup.
//!
//! ```no_run
//! use unslop::{humanize, ProcessingSettings};
//!
//! let out = humanize("Furthermore, it is important to note that this works.", &ProcessingSettings::default())?;
//! println!("{out}");
//! # Ok::<(), unslop::HumanizeError>(())
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod cleanup;
pub mod context;
pub mod error;
pub mod flow;
pub mod grammar;
pub mod normalize;
mod params;
pub mod paraphrase;
pub mod patterns;
pub mod pick;
pub mod pipeline;
pub mod segment;
pub mod settings;
pub mod signatures;
pub mod stats;
pub mod strategies;
pub mod synonyms;
pub mod tables;
pub mod text;
pub mod transform;

pub use context::{ContextSnapshot, Topic};
pub use error::{HumanizeError, Result};
pub use pipeline::{humanize_with, paraphrase_with, run, Mode, RunReport};
pub use settings::ProcessingSettings;
pub use strategies::{Pass, PassPlan, Strategy};

/// Humanize `text` with a freshly seeded RNG.
///
/// Returns [`HumanizeError::EmptyInput`] for empty or whitespace-only text.
pub fn humanize(text: &str, settings: &ProcessingSettings) -> Result<String> {
    let mut rng = StdRng::from_entropy();
    humanize_with(text, settings, &mut rng)
}

/// Paraphrase `text` with default settings and a freshly seeded RNG.
pub fn paraphrase(text: &str) -> Result<String> {
    let mut rng = StdRng::from_entropy();
    paraphrase_with(text, &ProcessingSettings::default(), &mut rng)
}
