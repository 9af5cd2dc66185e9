use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use subgrid::{convert_file, ConvertOptions, FfprobeDurationProbe};

/// Convert an SRT subtitle transcript into a Praat TextGrid annotation,
/// filling uncovered time with silence intervals
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the input .srt file
    srt_input: PathBuf,

    /// Path to the media file the subtitles belong to
    media_input: PathBuf,

    /// Path to the output .TextGrid file
    tg_output: PathBuf,

    /// Path to the output .csv flag log
    csv_output: PathBuf,

    /// Assign separate tiers to individual speakers tagged as [NAME]:
    #[arg(short, long)]
    diarize: bool,

    /// Space out acronyms and convert numbers to English words
    #[arg(short, long)]
    convert_numbers: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let options = ConvertOptions {
        diarize: cli.diarize,
        convert_numbers: cli.convert_numbers,
    };

    let conversion = match convert_file(
        &cli.srt_input,
        &cli.media_input,
        &cli.tg_output,
        &cli.csv_output,
        options,
        &FfprobeDurationProbe,
    ) {
        Ok(conversion) => conversion,
        Err(err) => {
            eprintln!("error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    for diagnostic in &conversion.diagnostics {
        eprintln!("warning: {}", diagnostic);
    }

    println!("TextGrid file created at {}", cli.tg_output.display());
    if conversion.flags.is_empty() {
        println!("No flagged tokens to log.");
    } else {
        println!(
            "Flag log created at {} ({} tokens)",
            cli.csv_output.display(),
            conversion.flags.len()
        );
    }

    ExitCode::SUCCESS
}
