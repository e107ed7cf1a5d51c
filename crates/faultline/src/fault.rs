//! The wire-transportable error value.

use std::collections::BTreeMap;
use std::fmt;

use tonic::Code;

use crate::sentinel::Sentinel;

/// Reason string of an unspecified error.
pub const UNKNOWN_REASON: &str = "";

/// Structured error value that crosses RPC boundaries intact.
///
/// A `Fault` carries four fields: a transport status `code`, a stable
/// machine-readable `reason`, a human-readable `message`, and string
/// key-value `metadata`. The `reason` alone is the error's identity;
/// `code`, `message` and `metadata` are payload and never participate in
/// equality.
///
/// Values are immutable after construction. Every `with_*` operation
/// clones the receiver and replaces a single field, so a `Fault` can be
/// shared across threads and derived from freely without aliasing.
#[derive(Debug, Clone)]
pub struct Fault {
    code: i32,
    reason: String,
    message: String,
    metadata: BTreeMap<String, String>,
}

impl Fault {
    /// Create a fault with the given code, reason and message.
    pub fn new(code: Code, reason: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            reason: reason.into(),
            message: message.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Transport status code.
    pub fn code(&self) -> Code {
        Code::from(self.code)
    }

    /// Stable machine-readable cause; empty means unspecified.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Human-readable message, not part of identity.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured context attached to this fault.
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Return a copy with the metadata replaced wholesale.
    pub fn with_metadata<K, V>(&self, metadata: impl IntoIterator<Item = (K, V)>) -> Fault
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut fault = self.clone();
        fault.metadata = metadata
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        fault
    }

    /// Return a copy with the message replaced.
    pub fn with_message(&self, message: impl Into<String>) -> Fault {
        let mut fault = self.clone();
        fault.message = message.into();
        fault
    }

    /// Reclassify this fault from a low-level error.
    ///
    /// If `err` is one of the well-known sentinels (see [`Sentinel`]), the
    /// returned fault takes the sentinel's code and its literal text as both
    /// reason and message. Anything else passes through: the receiver's
    /// fields come back untouched, so callers must not assume the result
    /// differs from the input.
    pub fn with_err(&self, err: &(dyn std::error::Error + 'static)) -> Fault {
        match Sentinel::classify(err) {
            Some(sentinel) => {
                let mut fault = self.clone();
                fault.code = sentinel.code() as i32;
                fault.reason = sentinel.to_string();
                fault.message = sentinel.to_string();
                fault
            }
            None => self.clone(),
        }
    }

    /// Cause-identity comparison against an arbitrary error.
    ///
    /// True iff `other` is itself a [`Fault`] with the same `reason`.
    /// Code, message and metadata are ignored.
    pub fn is(&self, other: &(dyn std::error::Error + 'static)) -> bool {
        match other.downcast_ref::<Fault>() {
            Some(fault) => fault.reason == self.reason,
            None => false,
        }
    }

    /// True iff this fault carries no reason at all.
    pub fn is_unspecified(&self) -> bool {
        self.reason.is_empty()
    }

    /// Equivalent HTTP status for this fault's code.
    pub fn to_http_status(&self) -> http::StatusCode {
        faultline_http::grpc_to_http(self.code())
    }
}

/// Identity is the reason string alone.
impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.reason == other.reason
    }
}

impl Eq for Fault {}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error: code = {} reason = {} message = {} metadata = {:?}",
            self.code, self.reason, self.message, self.metadata
        )
    }
}

impl std::error::Error for Fault {}
