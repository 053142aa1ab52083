//! Error types for the wire protocol.

use std::fmt;
use std::io;

/// Errors raised while reading the host engine's input stream.
///
/// The game core itself has no error paths; everything that can go wrong
/// happens at the I/O boundary. Any of these is fatal for the session:
/// the host is trusted to send well-formed data, so a malformed stream
/// means the process is being driven incorrectly and should exit.
#[derive(Debug)]
pub enum ProtocolError {
    /// Underlying I/O failure on stdin or stdout.
    Io(io::Error),
    /// The stream ended in the middle of a record.
    ///
    /// A clean end-of-stream at a turn boundary is normal termination and
    /// is not reported through this variant.
    UnexpectedEnd,
    /// A token could not be parsed as the expected integer.
    InvalidInteger {
        /// The offending token, verbatim.
        token: String,
    },
    /// An entity row carried a kind other than `FACTORY` or `TROOP`.
    UnknownEntityKind(String),
    /// A faction code outside {-1, 0, 1}.
    UnknownFaction(i32),
    /// A factory id outside the range declared at setup.
    ///
    /// Covers both link endpoints and factory entity rows; factory ids
    /// index the distance table, so an out-of-range id can never be let
    /// through.
    FactoryOutOfRange {
        /// The offending factory id.
        factory: usize,
        /// The declared factory count.
        count: usize,
    },
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Io(e) => write!(f, "protocol i/o failure: {e}"),
            ProtocolError::UnexpectedEnd => write!(f, "input ended mid-record"),
            ProtocolError::InvalidInteger { token } => {
                write!(f, "expected an integer, got {token:?}")
            }
            ProtocolError::UnknownEntityKind(kind) => {
                write!(f, "unknown entity kind {kind:?}")
            }
            ProtocolError::UnknownFaction(code) => {
                write!(f, "unknown faction code {code}")
            }
            ProtocolError::FactoryOutOfRange { factory, count } => {
                write!(f, "factory id {factory} outside declared range 0..{count}")
            }
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ProtocolError {
    fn from(e: io::Error) -> Self {
        ProtocolError::Io(e)
    }
}

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ProtocolError::InvalidInteger {
            token: "FACTORY".to_string(),
        };
        assert_eq!(e.to_string(), "expected an integer, got \"FACTORY\"");

        let e = ProtocolError::UnknownFaction(7);
        assert_eq!(e.to_string(), "unknown faction code 7");

        let e = ProtocolError::FactoryOutOfRange {
            factory: 9,
            count: 4,
        };
        assert_eq!(e.to_string(), "factory id 9 outside declared range 0..4");
    }

    #[test]
    fn test_io_source_is_preserved() {
        let inner = io::Error::new(io::ErrorKind::BrokenPipe, "gone");
        let e = ProtocolError::from(inner);
        assert!(std::error::Error::source(&e).is_some());
        assert!(e.to_string().contains("gone"));
    }
}
