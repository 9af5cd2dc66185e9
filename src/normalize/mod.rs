mod numbers;
mod rules;
mod types;

pub use numbers::{EnglishLexicon, NumberLexicon};
pub use rules::normalize_cues;
pub use types::{FlagKind, FlagRecord};

#[cfg(test)]
pub use numbers::MockNumberLexicon;
