//! Caller capabilities consulted when selecting affordances.

use std::collections::BTreeSet;

/// Capability required by every mutating operation of the API.
pub const ADMIN: &str = "ADMIN";

/// Answers whether the caller of the current request holds a capability.
pub trait AuthorizationOracle {
    fn has_capability(&self, capability: &str) -> bool;
}

/// Capabilities held by one caller, resolved once per request.
///
/// Passed explicitly into assembly so representations are a pure function of their
/// inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<String>);

impl CapabilitySet {
    /// Caller without any capability.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Caller holding the `ADMIN` capability.
    pub fn admin() -> Self {
        Self::anonymous().with(ADMIN)
    }

    pub fn with(mut self, capability: impl Into<String>) -> Self {
        self.0.insert(capability.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl AuthorizationOracle for CapabilitySet {
    fn has_capability(&self, capability: &str) -> bool {
        self.0.contains(capability)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_holds_nothing() {
        let caller = CapabilitySet::anonymous();

        assert!(caller.is_empty());
        assert!(!caller.has_capability(ADMIN));
    }

    #[test]
    fn admin_holds_admin_only() {
        let caller = CapabilitySet::admin();

        assert!(caller.has_capability(ADMIN));
        assert!(!caller.has_capability("COACH"));
        assert_eq!(caller.iter().collect::<Vec<_>>(), vec![ADMIN]);
    }

    #[test]
    fn collects_from_iterator() {
        let caller: CapabilitySet = ["COACH", ADMIN, "COACH"].into_iter().collect();

        assert!(caller.has_capability("COACH"));
        assert!(caller.has_capability(ADMIN));
        assert_eq!(caller.iter().count(), 2);
    }
}
