//! Well-known low-level failures and their classification.

use std::io;

use thiserror::Error;
use tonic::Code;

/// The closed set of low-level failures this crate reclassifies.
///
/// Each sentinel is itself an error value, so callers can raise one
/// directly (e.g. return `Sentinel::Eof` at end of stream) and have it
/// recognized later by [`classify`](Sentinel::classify). The display text
/// doubles as the wire-stable reason string, so it must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Sentinel {
    /// Clean end of stream.
    #[error("EOF")]
    Eof,
    /// The deadline expired before the operation completed.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
    /// The caller canceled the operation.
    #[error("context canceled")]
    Canceled,
    /// The stream ended in the middle of a record.
    #[error("unexpected EOF")]
    UnexpectedEof,
}

impl Sentinel {
    /// Status code this sentinel maps to.
    pub fn code(self) -> Code {
        match self {
            Sentinel::Eof => Code::Unknown,
            Sentinel::DeadlineExceeded => Code::DeadlineExceeded,
            Sentinel::Canceled => Code::Cancelled,
            Sentinel::UnexpectedEof => Code::Internal,
        }
    }

    /// Identify the sentinel in `err`, if there is one.
    ///
    /// Matches sentinel values themselves, plus the `io::ErrorKind`s that
    /// have a stable sentinel meaning. Everything else is `None`; no
    /// guessing from message text.
    pub fn classify(err: &(dyn std::error::Error + 'static)) -> Option<Sentinel> {
        if let Some(sentinel) = err.downcast_ref::<Sentinel>() {
            return Some(*sentinel);
        }
        if let Some(io_err) = err.downcast_ref::<io::Error>() {
            return match io_err.kind() {
                io::ErrorKind::UnexpectedEof => Some(Sentinel::UnexpectedEof),
                io::ErrorKind::TimedOut => Some(Sentinel::DeadlineExceeded),
                _ => None,
            };
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_sentinel_values() {
        assert_eq!(Sentinel::classify(&Sentinel::Eof), Some(Sentinel::Eof));
        assert_eq!(
            Sentinel::classify(&Sentinel::Canceled),
            Some(Sentinel::Canceled)
        );
    }

    #[test]
    fn test_classify_io_kinds() {
        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "early close");
        assert_eq!(Sentinel::classify(&eof), Some(Sentinel::UnexpectedEof));

        let timeout = io::Error::new(io::ErrorKind::TimedOut, "read timed out");
        assert_eq!(Sentinel::classify(&timeout), Some(Sentinel::DeadlineExceeded));
    }

    #[test]
    fn test_classify_rejects_other_errors() {
        let not_found = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert_eq!(Sentinel::classify(&not_found), None);
        assert_eq!(Sentinel::classify(&std::fmt::Error), None);
    }

    #[test]
    fn test_codes_and_text() {
        assert_eq!(Sentinel::Eof.code(), Code::Unknown);
        assert_eq!(Sentinel::DeadlineExceeded.code(), Code::DeadlineExceeded);
        assert_eq!(Sentinel::Canceled.code(), Code::Cancelled);
        assert_eq!(Sentinel::UnexpectedEof.code(), Code::Internal);

        assert_eq!(Sentinel::Eof.to_string(), "EOF");
        assert_eq!(Sentinel::Canceled.to_string(), "context canceled");
    }
}
