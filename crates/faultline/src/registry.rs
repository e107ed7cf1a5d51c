//! Process-wide table of canonical fault prototypes.

use std::collections::HashMap;

use crate::fault::Fault;

/// Maps reason strings to their canonical [`Fault`] prototypes.
///
/// Each module that owns a family of reasons registers its prototypes
/// during startup; afterwards the registry is shared read-only (borrow it
/// or wrap it in an `Arc`) with whatever decodes incoming statuses. There
/// is no deletion and no interior mutability: the
/// populate-then-share contract is enforced by the borrow checker.
#[derive(Debug, Default)]
pub struct Registry {
    faults: HashMap<String, Fault>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `fault` as the canonical prototype for its reason,
    /// overwriting any previous entry.
    pub fn register(&mut self, fault: Fault) {
        self.faults.insert(fault.reason().to_owned(), fault);
    }

    /// Canonical prototype registered for `reason`.
    pub fn get(&self, reason: &str) -> Option<&Fault> {
        self.faults.get(reason)
    }

    /// Number of registered reasons.
    pub fn len(&self) -> usize {
        self.faults.len()
    }

    /// True iff nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.faults.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;

    #[test]
    fn test_register_and_get() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.register(Fault::new(Code::NotFound, "user_not_found", "no such user"));
        assert_eq!(registry.len(), 1);

        let fault = registry.get("user_not_found").unwrap();
        assert_eq!(fault.code(), Code::NotFound);
        assert_eq!(fault.message(), "no such user");
        assert!(registry.get("order_not_found").is_none());
    }

    #[test]
    fn test_reregister_overwrites() {
        let mut registry = Registry::new();
        registry.register(Fault::new(Code::NotFound, "user_not_found", "first"));
        registry.register(Fault::new(Code::Internal, "user_not_found", "second"));

        assert_eq!(registry.len(), 1);
        let fault = registry.get("user_not_found").unwrap();
        assert_eq!(fault.code(), Code::Internal);
        assert_eq!(fault.message(), "second");
    }
}
