//! Error type for grid formatting operations.

use std::fmt;
use std::io;

/// Error type for grid formatting operations.
///
/// Write failures propagate immediately and are never retried; output
/// already written before the failure stays written.
#[derive(Debug)]
pub enum GridError {
    /// A fixed-column layout was requested with a zero column count.
    InvalidColumnCount,

    /// The output sink failed.
    Io(io::Error),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidColumnCount => {
                write!(f, "grid layout needs at least one column")
            }
            GridError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GridError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(err: io::Error) -> Self {
        GridError::Io(err)
    }
}
