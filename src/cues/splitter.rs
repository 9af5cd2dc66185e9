use super::types::{Cue, TierCues};

/// Tier name used for cues that carry no recognizable speaker tag
pub const UNKNOWN_SPEAKER: &str = "unknown";

/// Tier name used when diarization is off and everything shares one tier
pub const DEFAULT_TIER: &str = "Speaker";

/// Split a leading `[SPEAKER]:` tag off a cue text.
///
/// Returns the speaker name and the remaining text with the tag (and one
/// following space, if present) removed. Texts without a leading tag come
/// back unchanged.
pub fn split_speaker_tag(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text.strip_prefix('[') else {
        return (None, text);
    };
    let Some(close) = rest.find(']') else {
        return (None, text);
    };
    let name = &rest[..close];
    let Some(after) = rest[close + 1..].strip_prefix(':') else {
        return (None, text);
    };
    if name.is_empty() {
        return (None, text);
    }
    (Some(name), after.strip_prefix(' ').unwrap_or(after))
}

/// Populate the speaker field on every cue and strip the tags from the text.
///
/// Untagged cues fall into the sentinel unknown-speaker tier instead of
/// being dropped.
pub fn assign_speakers(cues: &mut [Cue]) {
    for cue in cues.iter_mut() {
        let (speaker, remaining) = split_speaker_tag(&cue.text);
        match speaker.map(str::to_owned) {
            Some(name) => {
                let remaining = remaining.to_owned();
                cue.speaker = Some(name);
                cue.text = remaining;
            }
            None => cue.speaker = Some(UNKNOWN_SPEAKER.to_owned()),
        }
    }
}

/// Group cues into per-tier sequences.
///
/// With diarization on, one tier per distinct speaker label in first-seen
/// order; labels are compared case-sensitively and never merged. With
/// diarization off, a single default tier holds everything, even when no
/// cues parsed at all.
pub fn group_into_tiers(cues: Vec<Cue>, diarize: bool) -> Vec<TierCues> {
    if !diarize {
        return vec![TierCues {
            name: DEFAULT_TIER.to_owned(),
            cues,
        }];
    }

    let mut tiers: Vec<TierCues> = Vec::new();
    for cue in cues {
        let name = cue
            .speaker
            .clone()
            .unwrap_or_else(|| UNKNOWN_SPEAKER.to_owned());
        match tiers.iter_mut().find(|tier| tier.name == name) {
            Some(tier) => tier.cues.push(cue),
            None => tiers.push(TierCues {
                name,
                cues: vec![cue],
            }),
        }
    }
    tiers
}
