mod parser;
mod splitter;
mod types;

pub use parser::parse_srt;
pub use splitter::{
    assign_speakers, group_into_tiers, split_speaker_tag, DEFAULT_TIER, UNKNOWN_SPEAKER,
};
pub use types::{Cue, ParsedCues, TierCues};
