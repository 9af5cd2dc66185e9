use super::textgrid::{open_error, write_error};
use crate::errors::OutputWriteError;
use crate::normalize::FlagRecord;
use log::info;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Serialize flag records as a CSV table, one row per rewritten token.
pub fn write_flag_log<W: Write>(writer: &mut W, flags: &[FlagRecord]) -> io::Result<()> {
    writeln!(writer, "cue_index,original_token,normalized_token,kind")?;
    for flag in flags {
        writeln!(
            writer,
            "{},{},{},{}",
            flag.cue_index,
            csv_field(&flag.original_token),
            csv_field(&flag.normalized_token),
            flag.kind.as_str()
        )?;
    }
    Ok(())
}

/// Write the flag log to a file path, failing fatally on any I/O problem.
pub fn write_flag_log_file(path: &Path, flags: &[FlagRecord]) -> Result<(), OutputWriteError> {
    let file = File::create(path).map_err(|err| open_error(path, err))?;
    let mut writer = BufWriter::new(file);
    write_flag_log(&mut writer, flags).map_err(|err| write_error(path, err))?;
    writer.flush().map_err(|err| write_error(path, err))?;

    info!("Flag log created at {}", path.display());
    Ok(())
}

/// Quote a CSV field only when it needs it.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
