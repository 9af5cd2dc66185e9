pub mod cues;
pub use cues::{parse_srt, split_speaker_tag, Cue, TierCues};

pub mod normalize;
pub use normalize::{EnglishLexicon, FlagKind, FlagRecord, NumberLexicon};

pub mod timeline;
pub use timeline::{build_tiers, Interval, Tier, Timeline};

pub mod media;
pub use media::{DurationProbe, FfprobeDurationProbe};

pub mod writers;
pub use writers::{write_flag_log, write_textgrid};

pub mod errors;
pub use errors::{
    Diagnostic, DurationMismatchError, MalformedCueError, MediaProbeError, OutputWriteError,
    SubGridError, SubGridResult,
};

use log::info;
use std::fs;
use std::path::Path;

/// Pipeline switches, both off by default
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Split cues into one tier per leading `[SPEAKER]:` tag
    pub diarize: bool,
    /// Space out acronyms and expand integers to English words
    pub convert_numbers: bool,
}

/// Everything one conversion produced: the tiers to write, the flagged
/// tokens, the recoverable diagnostics, and the effective duration
#[derive(Debug)]
pub struct Conversion {
    pub tiers: Vec<Tier>,
    pub flags: Vec<FlagRecord>,
    pub diagnostics: Vec<Diagnostic>,
    pub duration: f64,
}

/// Run the in-memory pipeline over already-loaded subtitle text.
///
/// No I/O happens here; file handling lives in [`convert_file`].
pub fn convert_transcript(
    srt_text: &str,
    media_duration: f64,
    options: ConvertOptions,
) -> Conversion {
    // Step 1: Parse the numbered cue blocks, skipping the broken ones
    let parsed = parse_srt(srt_text);
    let mut cues = parsed.cues;
    let mut diagnostics = parsed.diagnostics;

    // Step 2: Pull speaker tags off the text when diarizing
    if options.diarize {
        cues::assign_speakers(&mut cues);
    }

    // Step 3: Normalize the text while it is still in source order, so the
    // flag log reads top to bottom like the input file
    let flags = if options.convert_numbers {
        normalize::normalize_cues(&mut cues, &EnglishLexicon)
    } else {
        Vec::new()
    };

    // Step 4: Group into tiers and rebuild the gap-free timeline
    let grouped = cues::group_into_tiers(cues, options.diarize);
    let timeline = build_tiers(grouped, media_duration);
    diagnostics.extend(timeline.diagnostics);

    Conversion {
        tiers: timeline.tiers,
        flags,
        diagnostics,
        duration: timeline.duration,
    }
}

/// Convert an SRT file into a TextGrid file plus a CSV flag log.
///
/// The media file is probed for its duration up front; both outputs are
/// written only after the full tier and flag data is assembled, so a fatal
/// error never leaves partial files behind.
pub fn convert_file(
    srt_input: &Path,
    media_input: &Path,
    tg_output: &Path,
    csv_output: &Path,
    options: ConvertOptions,
    probe: &dyn DurationProbe,
) -> SubGridResult<Conversion> {
    let media_duration = probe.duration_seconds(media_input)?;
    let srt_text = fs::read_to_string(srt_input)?;

    let conversion = convert_transcript(&srt_text, media_duration, options);

    writers::write_textgrid_file(tg_output, &conversion.tiers, conversion.duration)?;
    if conversion.flags.is_empty() {
        info!("No flagged tokens, skipping {}", csv_output.display());
    } else {
        writers::write_flag_log_file(csv_output, &conversion.flags)?;
    }

    Ok(conversion)
}
