// ============================================================================
// Capitalized Amount
// Opaque formatter output
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Capitalized rendering of an amount, e.g. "壹仟贰佰叁拾肆元伍角陆分".
///
/// Only the formatter builds one. Collaborators store and display the text
/// as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CapitalizedAmount(String);

impl CapitalizedAmount {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CapitalizedAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CapitalizedAmount {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<CapitalizedAmount> for String {
    fn from(amount: CapitalizedAmount) -> Self {
        amount.0
    }
}

impl PartialEq<str> for CapitalizedAmount {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CapitalizedAmount {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
