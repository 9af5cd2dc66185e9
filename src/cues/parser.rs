use super::types::{Cue, ParsedCues};
use crate::errors::MalformedCueError;
use log::info;

/// Parse the full text of an SRT file into an ordered cue sequence.
///
/// Blocks that lack a usable timing line are skipped and reported as
/// diagnostics; the rest of the file still converts.
pub fn parse_srt(text: &str) -> ParsedCues {
    let mut cues = Vec::new();
    let mut diagnostics = Vec::new();

    for (position, block) in split_blocks(text).into_iter().enumerate() {
        let position = position + 1;
        match parse_block(&block, position) {
            Ok(cue) => cues.push(cue),
            Err(err) => diagnostics.push(err.into()),
        }
    }

    info!(
        "Parsed {} cues ({} blocks skipped)",
        cues.len(),
        diagnostics.len()
    );
    ParsedCues { cues, diagnostics }
}

/// Split the file into subtitle blocks separated by blank lines.
/// `lines()` swallows CRLF endings on the way.
fn split_blocks(text: &str) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

fn parse_block(lines: &[String], position: usize) -> Result<Cue, MalformedCueError> {
    let timing_at = lines
        .iter()
        .position(|line| line.contains("-->"))
        .ok_or_else(|| MalformedCueError::new(position, "missing timing line"))?;

    let (start, end) = parse_timing_line(&lines[timing_at])
        .ok_or_else(|| MalformedCueError::new(position, "unparsable timing line"))?;
    if start >= end {
        return Err(MalformedCueError::new(
            position,
            format!("start {} is not before end {}", start, end),
        ));
    }

    // The block's own index line when present, the block position otherwise
    let index = if timing_at > 0 {
        lines[0].trim().parse().unwrap_or(position)
    } else {
        position
    };

    let text = lines[timing_at + 1..].join(" ");

    Ok(Cue {
        index,
        start,
        end,
        speaker: None,
        text,
    })
}

fn parse_timing_line(line: &str) -> Option<(f64, f64)> {
    let (start, end) = line.split_once("-->")?;
    Some((parse_timestamp(start.trim())?, parse_timestamp(end.trim())?))
}

/// Convert a `HH:MM:SS,mmm` timestamp into seconds.
fn parse_timestamp(stamp: &str) -> Option<f64> {
    let (clock, millis) = stamp.rsplit_once(',')?;
    let millis: u32 = millis.parse().ok()?;

    let mut parts = clock.split(':');
    let hours: u32 = parts.next()?.parse().ok()?;
    let minutes: u32 = parts.next()?.parse().ok()?;
    let seconds: u32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let total = u64::from(hours) * 3600 + u64::from(minutes) * 60 + u64::from(seconds);
    Some(total as f64 + f64::from(millis) / 1000.0)
}
