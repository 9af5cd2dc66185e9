use std::path::{Path, PathBuf};

use subgrid::errors::MediaProbeError;
use subgrid::{convert_file, ConvertOptions, DurationProbe, SubGridError};

/// Canned duration so the tests never touch ffprobe or real media
struct FixedDuration(f64);

impl DurationProbe for FixedDuration {
    fn duration_seconds(&self, _path: &Path) -> Result<f64, MediaProbeError> {
        Ok(self.0)
    }
}

struct FailingProbe;

impl DurationProbe for FailingProbe {
    fn duration_seconds(&self, path: &Path) -> Result<f64, MediaProbeError> {
        Err(MediaProbeError::new(format!(
            "unsupported format: {}",
            path.display()
        )))
    }
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/testdata")
        .join(name)
}

#[test]
fn test_convert_file_writes_both_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let tg_output = dir.path().join("session.TextGrid");
    let csv_output = dir.path().join("session.csv");

    let options = ConvertOptions {
        diarize: false,
        convert_numbers: true,
    };
    let conversion = convert_file(
        &fixture("session.srt"),
        Path::new("session.wav"),
        &tg_output,
        &csv_output,
        options,
        &FixedDuration(15.0),
    )
    .unwrap();

    assert!(conversion.diagnostics.is_empty());

    let textgrid = std::fs::read_to_string(&tg_output).unwrap();
    assert!(textgrid.starts_with("File type = \"ooTextFile\""));
    assert!(textgrid.contains("xmax = 15"));
    assert!(textgrid.contains("intervals: size = 5"));
    assert!(textgrid.contains("text = \"Hi S R T\""));
    assert!(textgrid.contains("text = \"twenty-five years\""));

    let csv = std::fs::read_to_string(&csv_output).unwrap();
    assert_eq!(
        csv,
        "cue_index,original_token,normalized_token,kind\n\
         1,SRT,S R T,ACRONYM\n\
         2,25,twenty-five,NUMBER\n"
    );
}

#[test]
fn test_convert_file_skips_csv_without_flags() {
    let dir = tempfile::tempdir().unwrap();
    let tg_output = dir.path().join("session.TextGrid");
    let csv_output = dir.path().join("session.csv");

    convert_file(
        &fixture("session.srt"),
        Path::new("session.wav"),
        &tg_output,
        &csv_output,
        ConvertOptions::default(),
        &FixedDuration(15.0),
    )
    .unwrap();

    assert!(tg_output.exists());
    assert!(!csv_output.exists());
}

#[test]
fn test_probe_failure_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let tg_output = dir.path().join("session.TextGrid");
    let csv_output = dir.path().join("session.csv");

    let err = convert_file(
        &fixture("session.srt"),
        Path::new("broken.wav"),
        &tg_output,
        &csv_output,
        ConvertOptions::default(),
        &FailingProbe,
    )
    .unwrap_err();

    assert!(matches!(err, SubGridError::Probe(_)));
    assert!(err.to_string().contains("Media probe error"));
    assert!(!tg_output.exists());
    assert!(!csv_output.exists());
}

#[test]
fn test_missing_input_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let err = convert_file(
        &fixture("no-such-file.srt"),
        Path::new("session.wav"),
        &dir.path().join("out.TextGrid"),
        &dir.path().join("out.csv"),
        ConvertOptions::default(),
        &FixedDuration(15.0),
    )
    .unwrap_err();

    assert!(matches!(err, SubGridError::Other(_)));
}

#[test]
fn test_unwritable_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();

    let err = convert_file(
        &fixture("session.srt"),
        Path::new("session.wav"),
        &dir.path().join("missing-dir").join("out.TextGrid"),
        &dir.path().join("out.csv"),
        ConvertOptions::default(),
        &FixedDuration(15.0),
    )
    .unwrap_err();

    assert!(matches!(err, SubGridError::Output(_)));
}

#[test]
fn test_diarized_run_reports_malformed_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let tg_output = dir.path().join("malformed.TextGrid");

    let conversion = convert_file(
        &fixture("malformed.srt"),
        Path::new("session.wav"),
        &tg_output,
        &dir.path().join("malformed.csv"),
        ConvertOptions {
            diarize: true,
            convert_numbers: false,
        },
        &FixedDuration(10.0),
    )
    .unwrap();

    assert_eq!(conversion.diagnostics.len(), 1);

    // untagged cues end up on the sentinel tier instead of vanishing
    let textgrid = std::fs::read_to_string(&tg_output).unwrap();
    assert!(textgrid.contains("name = \"unknown\""));
}
