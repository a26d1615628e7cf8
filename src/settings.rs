use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Caller-supplied stage toggles. Every stage checks its flag and is a no-op
/// when the flag is off. Grammar corrections and final cleanup always run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingSettings {
    /// Hedges, rhetorical questions, asides and other conversational additions.
    pub conversational: bool,
    /// Sentence splitting, fusion, fronting and openers.
    pub structure: bool,
    /// Synonym and phrase substitution.
    pub expressions: bool,
    /// Keep a formal register and skip the deliberately sloppy strategies.
    pub technical: bool,
    /// Long-sentence splitting, transition de-duplication and contractions.
    pub readability: bool,
    /// AI-signature removal.
    pub patterns: bool,
}

impl Default for ProcessingSettings {
    fn default() -> Self {
        Self {
            conversational: true,
            structure: true,
            expressions: true,
            technical: false,
            readability: true,
            patterns: true,
        }
    }
}

impl ProcessingSettings {
    /// Everything off. Only grammar corrections and cleanup remain.
    pub fn none() -> Self {
        Self {
            conversational: false,
            structure: false,
            expressions: false,
            technical: false,
            readability: false,
            patterns: false,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
