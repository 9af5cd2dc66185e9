use crate::errors::OutputWriteError;
use crate::timeline::Tier;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Serialize tiers into Praat's long `ooTextFile` TextGrid format.
pub fn write_textgrid<W: Write>(writer: &mut W, tiers: &[Tier], duration: f64) -> io::Result<()> {
    writeln!(writer, "File type = \"ooTextFile\"")?;
    writeln!(writer, "Object class = \"TextGrid\"")?;
    writeln!(writer)?;
    writeln!(writer, "xmin = 0")?;
    writeln!(writer, "xmax = {}", duration)?;
    writeln!(writer, "tiers? <exists>")?;
    writeln!(writer, "size = {}", tiers.len())?;
    writeln!(writer, "item []:")?;

    for (item, tier) in tiers.iter().enumerate() {
        writeln!(writer, "    item [{}]:", item + 1)?;
        writeln!(writer, "        class = \"IntervalTier\"")?;
        writeln!(writer, "        name = \"{}\"", escape_text(&tier.name))?;
        writeln!(writer, "        xmin = 0")?;
        writeln!(writer, "        xmax = {}", duration)?;
        writeln!(writer, "        intervals: size = {}", tier.intervals.len())?;

        for (i, interval) in tier.intervals.iter().enumerate() {
            writeln!(writer, "        intervals [{}]:", i + 1)?;
            writeln!(writer, "            xmin = {}", interval.start)?;
            writeln!(writer, "            xmax = {}", interval.end)?;
            writeln!(writer, "            text = \"{}\"", escape_text(&interval.label))?;
        }
    }

    Ok(())
}

/// Write the TextGrid to a file path, failing fatally on any I/O problem.
pub fn write_textgrid_file(
    path: &Path,
    tiers: &[Tier],
    duration: f64,
) -> Result<(), OutputWriteError> {
    let file = File::create(path).map_err(|err| open_error(path, err))?;
    let mut writer = BufWriter::new(file);
    write_textgrid(&mut writer, tiers, duration).map_err(|err| write_error(path, err))?;
    writer.flush().map_err(|err| write_error(path, err))?;

    info!("TextGrid file created at {}", path.display());
    Ok(())
}

/// Praat quoting: double quotes inside quoted text are doubled.
fn escape_text(text: &str) -> String {
    text.replace('"', "\"\"")
}

pub(super) fn open_error(path: &Path, err: io::Error) -> OutputWriteError {
    OutputWriteError::new(format!("failed to create '{}': {}", path.display(), err))
}

pub(super) fn write_error(path: &Path, err: io::Error) -> OutputWriteError {
    OutputWriteError::new(format!("failed to write '{}': {}", path.display(), err))
}
