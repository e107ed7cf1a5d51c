//! Conversion between [`Fault`] and the gRPC wire status.

use std::collections::HashMap;

use tonic::{Code, Status};
use tonic_types::{ErrorDetails, StatusExt};

use crate::fault::{Fault, UNKNOWN_REASON};
use crate::registry::Registry;

impl Fault {
    /// Encode into a wire status.
    ///
    /// The status carries this fault's code and message plus exactly one
    /// `ErrorInfo` detail holding the reason and metadata. Never fails.
    pub fn to_status(&self) -> Status {
        let metadata: HashMap<String, String> = self
            .metadata()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let details = ErrorDetails::with_error_info(self.reason(), "", metadata);
        Status::with_error_details(self.code(), self.message(), details)
    }
}

impl From<Fault> for Status {
    fn from(fault: Fault) -> Status {
        fault.to_status()
    }
}

impl From<&Fault> for Status {
    fn from(fault: &Fault) -> Status {
        fault.to_status()
    }
}

/// First `T` in `err`'s source chain, including `err` itself.
fn find_in_chain<'a, T: std::error::Error + 'static>(
    err: &'a (dyn std::error::Error + 'static),
) -> Option<&'a T> {
    let mut current: Option<&(dyn std::error::Error + 'static)> = Some(err);
    while let Some(e) = current {
        if let Some(hit) = e.downcast_ref::<T>() {
            return Some(hit);
        }
        current = e.source();
    }
    None
}

impl Registry {
    /// Decode an arbitrary error into a [`Fault`].
    ///
    /// A `Fault` anywhere in the source chain is returned as-is; no
    /// reconstruction, so locally-raised faults survive without loss. A
    /// wire status in the chain goes through [`from_status`](Self::from_status).
    /// Anything else is coerced into an unknown fault carrying the input's
    /// text. Decoding never fails.
    pub fn from_error(&self, err: &(dyn std::error::Error + 'static)) -> Fault {
        if let Some(fault) = find_in_chain::<Fault>(err) {
            return fault.clone();
        }
        if let Some(status) = find_in_chain::<Status>(err) {
            return self.from_status(status);
        }
        tracing::debug!("error '{}' is not status-shaped, coercing to unknown", err);
        Fault::new(Code::Unknown, UNKNOWN_REASON, err.to_string())
    }

    /// Decode a wire status into a [`Fault`].
    ///
    /// The first `ErrorInfo` detail supplies the reason: a registered
    /// reason rehydrates its prototype, an unregistered one keeps the wire
    /// identity as-is. Either way the wire's message and metadata override
    /// whatever was registered. A status without an `ErrorInfo` detail
    /// decodes to an unspecified fault with the wire code and message.
    pub fn from_status(&self, status: &Status) -> Fault {
        match status.get_details_error_info() {
            Some(info) => match self.get(&info.reason) {
                Some(prototype) => prototype
                    .with_message(status.message())
                    .with_metadata(info.metadata),
                None => {
                    tracing::debug!(
                        "reason '{}' not registered, taking identity from the wire",
                        info.reason
                    );
                    Fault::new(status.code(), info.reason, status.message())
                        .with_metadata(info.metadata)
                }
            },
            None => Fault::new(status.code(), UNKNOWN_REASON, status.message()),
        }
    }
}
