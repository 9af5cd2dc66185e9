use crate::errors::MediaProbeError;
use log::info;
use std::path::Path;
use std::process::Command;

/// Media duration collaborator; the only externally blocking call in a run
pub trait DurationProbe {
    /// Total duration of the media file in seconds.
    fn duration_seconds(&self, path: &Path) -> Result<f64, MediaProbeError>;
}

/// Probe duration by shelling out to `ffprobe`
pub struct FfprobeDurationProbe;

impl DurationProbe for FfprobeDurationProbe {
    fn duration_seconds(&self, path: &Path) -> Result<f64, MediaProbeError> {
        let output = Command::new("ffprobe")
            .args([
                "-v",
                "error",
                "-show_entries",
                "format=duration",
                "-of",
                "default=noprint_wrappers=1:nokey=1",
            ])
            .arg(path)
            .output()
            .map_err(|err| {
                MediaProbeError::new(format!(
                    "failed to run ffprobe for '{}': {}",
                    path.display(),
                    err
                ))
            })?;

        if !output.status.success() {
            return Err(MediaProbeError::new(format!(
                "ffprobe failed for '{}': {}",
                path.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let duration: f64 = stdout.trim().parse().map_err(|_| {
            MediaProbeError::new(format!(
                "ffprobe returned no usable duration for '{}': {:?}",
                path.display(),
                stdout.trim()
            ))
        })?;

        if !duration.is_finite() || duration < 0.0 {
            return Err(MediaProbeError::new(format!(
                "ffprobe reported an invalid duration {} for '{}'",
                duration,
                path.display()
            )));
        }

        info!("Probed media duration: {}s", duration);
        Ok(duration)
    }
}
