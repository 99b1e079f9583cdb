use serde::{Deserialize, Serialize};

use apex_core::{DomainError, DomainResult};

/// Wizard steps, numbered the way the form shows them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Step {
    /// Business details.
    Business = 1,
    /// Client, invoice metadata and line items.
    Details = 2,
    /// Read-only preview; nothing to validate.
    Preview = 3,
}

impl Step {
    pub const FIRST: Step = Step::Business;

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn next(self) -> Option<Step> {
        Step::try_from(self.number() + 1).ok()
    }

    pub fn previous(self) -> Option<Step> {
        self.number().checked_sub(1).and_then(|n| Step::try_from(n).ok())
    }
}

impl TryFrom<u8> for Step {
    type Error = DomainError;

    fn try_from(value: u8) -> DomainResult<Self> {
        match value {
            1 => Ok(Step::Business),
            2 => Ok(Step::Details),
            3 => Ok(Step::Preview),
            other => Err(DomainError::InvalidStep(other)),
        }
    }
}

impl From<Step> for u8 {
    fn from(value: Step) -> Self {
        value.number()
    }
}

impl core::fmt::Display for Step {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.number())
    }
}
