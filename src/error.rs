//! Unified error type for the prompt subsystem.

use std::fmt;
use std::io;

/// Errors a prompt call can surface to its caller.
///
/// Bad *user input* never errors (it degrades to the supplied default); these
/// variants cover broken invocations and terminal I/O failures only.
#[derive(Debug)]
pub enum PromptError {
    /// Reading stdin or writing the terminal failed.
    Io(io::Error),
    /// A selection prompt was invoked with zero options.
    EmptyOptions,
    /// A rating prompt was invoked with an inverted range.
    InvalidRange { min: i64, max: i64 },
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::EmptyOptions => write!(f, "select requires at least one option"),
            Self::InvalidRange { min, max } => {
                write!(f, "invalid rating range: min {min} exceeds max {max}")
            }
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let e = PromptError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("pipe closed"));
    }

    #[test]
    fn contract_error_display() {
        assert_eq!(
            PromptError::EmptyOptions.to_string(),
            "select requires at least one option"
        );
        assert_eq!(
            PromptError::InvalidRange { min: 5, max: 1 }.to_string(),
            "invalid rating range: min 5 exceeds max 1"
        );
    }

    #[test]
    fn io_variant_exposes_source() {
        use std::error::Error;
        let e = PromptError::from(io::Error::other("x"));
        assert!(e.source().is_some());
        assert!(PromptError::EmptyOptions.source().is_none());
    }
}
