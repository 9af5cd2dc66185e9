use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of the fatal errors that abort a conversion run
#[derive(Debug)]
pub enum SubGridError {
    Probe(MediaProbeError),
    Output(OutputWriteError),
    Other(io::Error),
}

/// Media duration probing errors; fatal, raised before any parsing proceeds
#[derive(Debug)]
pub struct MediaProbeError {
    pub message: String,
}

impl MediaProbeError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Output serialization errors; fatal, no partial-success mode
#[derive(Debug)]
pub struct OutputWriteError {
    pub message: String,
}

impl OutputWriteError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A subtitle block that could not be parsed into a cue; recoverable,
/// the block is skipped and the conversion continues
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedCueError {
    /// 1-based position of the block in the source file
    pub block: usize,
    pub message: String,
}

impl MalformedCueError {
    pub fn new(block: usize, message: impl Into<String>) -> Self {
        Self {
            block,
            message: message.into(),
        }
    }
}

/// A cue that ends beyond the probed media duration; recoverable, the
/// timeline duration is extended to cover it
#[derive(Debug, Clone, PartialEq)]
pub struct DurationMismatchError {
    pub cue_index: usize,
    pub cue_end: f64,
    pub duration: f64,
}

/// Recoverable problems accumulated while a conversion keeps going
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    MalformedCue(MalformedCueError),
    DurationMismatch(DurationMismatchError),
}

impl fmt::Display for SubGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubGridError::Probe(err) => write!(f, "Media probe error: {}", err),
            SubGridError::Output(err) => write!(f, "Output write error: {}", err),
            SubGridError::Other(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for MediaProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for OutputWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for MalformedCueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block {}: {}", self.block, self.message)
    }
}

impl fmt::Display for DurationMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cue {} ends at {}s, beyond the media duration of {}s",
            self.cue_index, self.cue_end, self.duration
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedCue(err) => write!(f, "skipped malformed cue: {}", err),
            Diagnostic::DurationMismatch(err) => write!(f, "duration extended: {}", err),
        }
    }
}

impl Error for SubGridError {}
impl Error for MediaProbeError {}
impl Error for OutputWriteError {}
impl Error for MalformedCueError {}
impl Error for DurationMismatchError {}

// Conversion implementations
impl From<io::Error> for SubGridError {
    fn from(err: io::Error) -> Self {
        SubGridError::Other(err)
    }
}

impl From<MediaProbeError> for SubGridError {
    fn from(err: MediaProbeError) -> Self {
        SubGridError::Probe(err)
    }
}

impl From<OutputWriteError> for SubGridError {
    fn from(err: OutputWriteError) -> Self {
        SubGridError::Output(err)
    }
}

impl From<MalformedCueError> for Diagnostic {
    fn from(err: MalformedCueError) -> Self {
        Diagnostic::MalformedCue(err)
    }
}

impl From<DurationMismatchError> for Diagnostic {
    fn from(err: DurationMismatchError) -> Self {
        Diagnostic::DurationMismatch(err)
    }
}

// Type alias for Result with SubGridError
pub type SubGridResult<T> = Result<T, SubGridError>;
