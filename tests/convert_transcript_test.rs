use subgrid::{convert_transcript, ConvertOptions, Diagnostic, FlagKind, Interval};

fn read_fixture(name: &str) -> String {
    let path = format!(
        "{}/tests/testdata/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    );
    std::fs::read_to_string(path).unwrap()
}

#[test]
fn test_full_pipeline_scenario() {
    let srt = read_fixture("session.srt");
    let options = ConvertOptions {
        diarize: false,
        convert_numbers: true,
    };
    let conversion = convert_transcript(&srt, 15.0, options);

    assert!(conversion.diagnostics.is_empty());
    assert_eq!(conversion.duration, 15.0);
    assert_eq!(conversion.tiers.len(), 1);
    assert_eq!(
        conversion.tiers[0].intervals,
        vec![
            Interval::silence(0.0, 2.0),
            Interval {
                start: 2.0,
                end: 4.0,
                label: "Hi S R T".to_string()
            },
            Interval::silence(4.0, 10.0),
            Interval {
                start: 10.0,
                end: 12.0,
                label: "twenty-five years".to_string()
            },
            Interval::silence(12.0, 15.0),
        ]
    );

    assert_eq!(conversion.flags.len(), 2);
    assert_eq!(conversion.flags[0].cue_index, 1);
    assert_eq!(conversion.flags[0].original_token, "SRT");
    assert_eq!(conversion.flags[0].normalized_token, "S R T");
    assert_eq!(conversion.flags[0].kind, FlagKind::Acronym);
    assert_eq!(conversion.flags[1].cue_index, 2);
    assert_eq!(conversion.flags[1].original_token, "25");
    assert_eq!(conversion.flags[1].normalized_token, "twenty-five");
    assert_eq!(conversion.flags[1].kind, FlagKind::Number);
}

#[test]
fn test_normalizer_stays_off_by_default() {
    let srt = read_fixture("session.srt");
    let conversion = convert_transcript(&srt, 15.0, ConvertOptions::default());

    assert!(conversion.flags.is_empty());
    assert_eq!(conversion.tiers[0].intervals[1].label, "Hi SRT");
    assert_eq!(conversion.tiers[0].intervals[3].label, "25 years");
}

#[test]
fn test_diarization_builds_per_speaker_tiers() {
    let srt = read_fixture("speakers.srt");
    let options = ConvertOptions {
        diarize: true,
        convert_numbers: false,
    };
    let conversion = convert_transcript(&srt, 10.0, options);

    let names: Vec<&str> = conversion
        .tiers
        .iter()
        .map(|tier| tier.name.as_str())
        .collect();
    assert_eq!(names, vec!["ANNA", "BEN", "unknown"]);

    // every tier spans the whole recording on its own timeline
    for tier in &conversion.tiers {
        assert_eq!(tier.intervals.first().unwrap().start, 0.0);
        assert_eq!(tier.intervals.last().unwrap().end, 10.0);
        for pair in tier.intervals.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    let anna = &conversion.tiers[0];
    let spoken: Vec<&str> = anna
        .intervals
        .iter()
        .filter(|i| !i.is_silence())
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(spoken, vec!["Good morning", "Ready?"]);

    let unknown = &conversion.tiers[2];
    let spoken: Vec<&str> = unknown
        .intervals
        .iter()
        .filter(|i| !i.is_silence())
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(spoken, vec!["Untagged aside"]);
}

#[test]
fn test_malformed_block_is_skipped_not_fatal() {
    let srt = read_fixture("malformed.srt");
    let conversion = convert_transcript(&srt, 10.0, ConvertOptions::default());

    let labels: Vec<&str> = conversion.tiers[0]
        .intervals
        .iter()
        .filter(|i| !i.is_silence())
        .map(|i| i.label.as_str())
        .collect();
    assert_eq!(labels, vec!["This one is fine", "And this one is fine too"]);

    assert_eq!(conversion.diagnostics.len(), 1);
    match &conversion.diagnostics[0] {
        Diagnostic::MalformedCue(err) => assert_eq!(err.block, 2),
        other => panic!("unexpected diagnostic: {:?}", other),
    }
}

#[test]
fn test_overrunning_cue_extends_the_timeline() {
    let srt = read_fixture("session.srt");
    let conversion = convert_transcript(&srt, 11.0, ConvertOptions::default());

    assert_eq!(conversion.duration, 12.0);
    assert_eq!(conversion.tiers[0].intervals.last().unwrap().end, 12.0);
    assert_eq!(conversion.diagnostics.len(), 1);
    match &conversion.diagnostics[0] {
        Diagnostic::DurationMismatch(err) => {
            assert_eq!(err.cue_index, 2);
            assert_eq!(err.cue_end, 12.0);
            assert_eq!(err.duration, 11.0);
        }
        other => panic!("unexpected diagnostic: {:?}", other),
    }
}

#[test]
fn test_empty_transcript_becomes_full_silence() {
    let conversion = convert_transcript("", 4.0, ConvertOptions::default());

    assert_eq!(conversion.tiers.len(), 1);
    assert_eq!(
        conversion.tiers[0].intervals,
        vec![Interval::silence(0.0, 4.0)]
    );
}
