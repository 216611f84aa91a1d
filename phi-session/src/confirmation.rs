use phi_core::errors::{PhiError, PhiResult};

/// Explicit caller consent for a destructive or expensive operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

impl Confirmation {
    /// `Ok` when confirmed, `PhiError::NotConfirmed` otherwise.
    pub fn require(self, operation: &str) -> PhiResult<()> {
        match self {
            Confirmation::Confirmed => Ok(()),
            Confirmation::Declined => Err(PhiError::NotConfirmed {
                operation: operation.to_string(),
            }),
        }
    }
}

impl From<bool> for Confirmation {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Confirmation::Confirmed
        } else {
            Confirmation::Declined
        }
    }
}
