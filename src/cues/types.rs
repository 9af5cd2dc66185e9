use crate::errors::Diagnostic;
use serde::Serialize;

/// One timestamped subtitle entry, 1-indexed to match the source numbering
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Cue {
    pub index: usize,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds, always greater than `start`
    pub end: f64,
    pub speaker: Option<String>,
    pub text: String,
}

/// A tier name with the ordered cues assigned to it, ready for timeline
/// construction
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TierCues {
    pub name: String,
    pub cues: Vec<Cue>,
}

/// Parser output: the cues that parsed plus the blocks that did not
#[derive(Debug)]
pub struct ParsedCues {
    pub cues: Vec<Cue>,
    pub diagnostics: Vec<Diagnostic>,
}
