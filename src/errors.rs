//! Error types and trait implementations

use std::error;
use std::fmt;
use std::io;

/// Re-exported `Result` for sweepgen errors
pub type Result<T> = std::result::Result<T, SweepError>;

#[derive(Debug)]
/// Represents a generation or serialization error.
pub enum SweepError {
    /// Sweep parameter violated a precondition
    Parameter(String),
    /// Container parse error
    Parse(String),
    /// IO error (file could not be written or read)
    Io(io::Error),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SweepError::Parameter(ref reason) => write!(f, "Parameter error: {}", reason),
            SweepError::Parse(ref token) => write!(f, "Parse error: {}", token),
            SweepError::Io(ref err) => write!(f, "Io error: {}", err),
        }
    }
}

impl error::Error for SweepError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            SweepError::Parameter(_) => None,
            SweepError::Parse(_) => None,
            SweepError::Io(ref err) => Some(err),
        }
    }
}

impl From<io::Error> for SweepError {
    fn from(err: io::Error) -> Self {
        SweepError::Io(err)
    }
}
