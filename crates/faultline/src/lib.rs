//! # faultline
//!
//! Structured errors that keep their identity across gRPC boundaries.
//!
//! ## Design Philosophy
//!
//! - **Reason**: a stable machine-readable cause, the sole basis of error
//!   identity
//! - **Message**: human-readable and transient, free to change per call
//! - **Metadata**: structured string context (a limit, a field name)
//!   independent of message text
//! - **Registry**: known reasons rehydrate into their registered prototype
//!   on decode; unknown reasons still decode to a usable generic fault
//!
//! ## Usage
//!
//! ```rust
//! use faultline::{Fault, Registry};
//! use tonic::Code;
//!
//! // At startup, each module registers the reasons it owns.
//! let mut registry = Registry::new();
//! registry.register(Fault::new(
//!     Code::ResourceExhausted,
//!     "quota_exhausted",
//!     "quota exhausted",
//! ));
//!
//! // Server side: encode for transport.
//! let status = registry
//!     .get("quota_exhausted")
//!     .unwrap()
//!     .with_metadata([("limit", "100")])
//!     .to_status();
//!
//! // Client side: decode whatever came back.
//! let fault = registry.from_status(&status);
//! assert_eq!(fault.reason(), "quota_exhausted");
//! assert_eq!(fault.metadata()["limit"], "100");
//! ```
//!
//! ## Principles
//!
//! - Decode never fails: every input maps to a usable [`Fault`]
//! - Wire data wins: a decoded fault keeps the wire's message and
//!   metadata, the registry only restores default code/reason identity
//! - `with_*` operations clone; the receiver is never mutated

mod fault;
mod registry;
mod sentinel;
mod status;

pub use fault::{Fault, UNKNOWN_REASON};
pub use registry::Registry;
pub use sentinel::Sentinel;

pub use tonic::Code;
