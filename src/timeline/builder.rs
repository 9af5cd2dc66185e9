use super::types::{Interval, Tier, Timeline};
use crate::cues::TierCues;
use crate::errors::{Diagnostic, DurationMismatchError};
use log::info;

/// Build one gap-free timeline per tier, spanning `[0, duration)`.
///
/// Cues ending past the probed duration are reported and the shared
/// duration is stretched to cover them; every tier spans the same range,
/// so the extension applies to all of them.
pub fn build_tiers(grouped: Vec<TierCues>, media_duration: f64) -> Timeline {
    let mut diagnostics = Vec::new();
    let mut duration = media_duration;

    for tier in &grouped {
        for cue in &tier.cues {
            if cue.end > media_duration {
                diagnostics.push(Diagnostic::DurationMismatch(DurationMismatchError {
                    cue_index: cue.index,
                    cue_end: cue.end,
                    duration: media_duration,
                }));
                if cue.end > duration {
                    duration = cue.end;
                }
            }
        }
    }

    let tiers: Vec<Tier> = grouped
        .into_iter()
        .map(|tier| build_tier(tier, duration))
        .collect();

    info!(
        "Built {} tiers spanning {}s ({} duration mismatches)",
        tiers.len(),
        duration,
        diagnostics.len()
    );
    Timeline {
        tiers,
        duration,
        diagnostics,
    }
}

fn build_tier(tier: TierCues, duration: f64) -> Tier {
    let mut cues = tier.cues;
    cues.sort_by(|a, b| a.start.total_cmp(&b.start));

    let mut intervals = Vec::with_capacity(cues.len() * 2 + 1);
    if cues.is_empty() {
        intervals.push(Interval::silence(0.0, duration));
    } else {
        if cues[0].start > 0.0 {
            intervals.push(Interval::silence(0.0, cues[0].start));
        }
        for i in 0..cues.len() {
            intervals.push(Interval {
                start: cues[i].start,
                end: cues[i].end,
                label: cues[i].text.clone(),
            });
            if let Some(next) = cues.get(i + 1) {
                if next.start > cues[i].end {
                    intervals.push(Interval::silence(cues[i].end, next.start));
                }
            }
        }
        let last_end = cues[cues.len() - 1].end;
        if last_end < duration {
            intervals.push(Interval::silence(last_end, duration));
        }
    }

    let tier = Tier {
        name: tier.name,
        intervals,
    };
    debug_assert_contiguous(&tier, duration);
    tier
}

/// The builder owns the gap-free invariant; a hole here is an internal
/// logic fault, not a user-facing error.
fn debug_assert_contiguous(tier: &Tier, duration: f64) {
    debug_assert!(
        !tier.intervals.is_empty(),
        "tier '{}' has no intervals",
        tier.name
    );
    if let (Some(first), Some(last)) = (tier.intervals.first(), tier.intervals.last()) {
        debug_assert!(
            first.start == 0.0,
            "tier '{}' starts at {}",
            tier.name,
            first.start
        );
        debug_assert!(
            last.end == duration,
            "tier '{}' ends at {} instead of {}",
            tier.name,
            last.end,
            duration
        );
    }
    for pair in tier.intervals.windows(2) {
        debug_assert!(
            pair[0].end == pair[1].start,
            "gap in tier '{}' between {} and {}",
            tier.name,
            pair[0].end,
            pair[1].start
        );
    }
}
