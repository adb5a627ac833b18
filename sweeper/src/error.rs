use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

#[derive(Debug)]
pub enum SweepError {
    /// An axis name that cannot be used as a placeholder.
    InvalidAxisName(String),

    /// Two axes in the same sweep share a name.
    DuplicateAxis(String),

    /// A template word with an unbalanced or empty brace.
    MalformedTemplate(String),

    /// A template placeholder that names no axis.
    UnknownPlaceholder(String),

    /// A template with placeholders that never mentions this axis.
    UnusedAxis(String),

    /// The number of points does not fit in a `usize`.
    TooLarge,

    EmptyProgram,

    IndexOutOfRange { index: usize, len: usize },

    /// The child process could not be started.
    LaunchFailure { command: String, source: io::Error },

    /// The child process ran but exited unsuccessfully. `code` is `None` when
    /// the process was terminated by a signal.
    ChildProcessFailure { command: String, code: Option<i32> },
}

impl Display for SweepError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepError::InvalidAxisName(name) => write!(f, "invalid axis name '{name}'"),
            SweepError::DuplicateAxis(name) => write!(f, "duplicate axis '{name}'"),
            SweepError::MalformedTemplate(word) => write!(f, "malformed template word '{word}'"),
            SweepError::UnknownPlaceholder(name) => {
                write!(f, "placeholder '{{{name}}}' does not name an axis")
            }
            SweepError::UnusedAxis(name) => {
                write!(f, "axis '{name}' is not used by any placeholder")
            }
            SweepError::TooLarge => write!(f, "too many points in sweep"),
            SweepError::EmptyProgram => write!(f, "no program to run"),
            SweepError::IndexOutOfRange { index, len } => {
                write!(f, "invocation {index} is out of range for a sweep of {len}")
            }
            SweepError::LaunchFailure { command, source } => {
                write!(f, "failed to launch '{command}': {source}")
            }
            SweepError::ChildProcessFailure { command, code: Some(code) } => {
                write!(f, "'{command}' exited with code {code}")
            }
            SweepError::ChildProcessFailure { command, code: None } => {
                write!(f, "'{command}' was terminated by a signal")
            }
        }
    }
}

impl Error for SweepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SweepError::LaunchFailure { source, .. } => Some(source),
            _ => None,
        }
    }
}
