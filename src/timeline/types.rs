use crate::errors::Diagnostic;
use serde::Serialize;

/// A labeled or silent time span within a tier
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
    /// Cue text, or empty for silence
    pub label: String,
}

impl Interval {
    pub fn silence(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            label: String::new(),
        }
    }

    pub fn is_silence(&self) -> bool {
        self.label.is_empty()
    }
}

/// An independent gap-free timeline spanning the full media duration
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Tier {
    pub name: String,
    pub intervals: Vec<Interval>,
}

/// Builder output: every tier spans `[0, duration)`, with any duration
/// mismatches reported alongside
#[derive(Debug)]
pub struct Timeline {
    pub tiers: Vec<Tier>,
    /// Effective duration, stretched past the probed value when a cue
    /// overran it
    pub duration: f64,
    pub diagnostics: Vec<Diagnostic>,
}
