use serde::Serialize;

/// Which rewrite rule fired for a flagged token
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    Acronym,
    Number,
}

impl FlagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagKind::Acronym => "ACRONYM",
            FlagKind::Number => "NUMBER",
        }
    }
}

/// One token rewrite, logged for manual review
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FlagRecord {
    pub cue_index: usize,
    pub original_token: String,
    pub normalized_token: String,
    pub kind: FlagKind,
}
