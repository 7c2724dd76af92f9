//! Typed identifier for quick actions.
//!
//! Preset ids are stable, human-chosen strings (e.g. `"pay_alipay_scan"`)
//! rather than generated values, so user settings can refer to them across
//! releases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`QuickAction`](crate::quick_action::QuickAction).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuickActionId(String);

impl QuickActionId {
    /// Wrap an identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for QuickActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for QuickActionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for QuickActionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for QuickActionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for QuickActionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for QuickActionId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for QuickActionId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
