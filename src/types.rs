use serde::{Deserialize, Serialize};

/// A named pair of DNS server addresses that can be applied to an interface.
///
/// Addresses are kept as text and are not validated beyond being non-empty;
/// only the external utility can decide whether an address is acceptable.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct DnsProfile {
    pub name: String,
    pub preferred: String,
    /// Empty string means "no alternate server".
    #[serde(default)]
    pub alternate: String,
}

impl DnsProfile {
    pub fn new(
        name: impl Into<String>,
        preferred: impl Into<String>,
        alternate: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            preferred: preferred.into(),
            alternate: alternate.into(),
        }
    }

    /// A profile may be persisted only when both the name and the preferred
    /// address are non-blank.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.preferred.trim().is_empty()
    }

    pub fn has_alternate(&self) -> bool {
        !self.alternate.trim().is_empty()
    }

    /// One-line display form for list rendering.
    pub fn label(&self) -> String {
        if self.has_alternate() {
            format!("{} ({}, {})", self.name, self.preferred, self.alternate)
        } else {
            format!("{} ({})", self.name, self.preferred)
        }
    }
}
