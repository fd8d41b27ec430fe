#![forbid(unsafe_code)]

//! Error types for signal/slot validation.

use thiserror::Error;

use crate::contract::Contract;
use crate::slot::SlotError;

pub type Result<T> = std::result::Result<T, SignalError>;

/// Base error for every signal/slot failure.
#[derive(Debug, Error)]
pub enum SignalError {
    /// A slot's parameter shape does not satisfy the signal's contract.
    #[error("{}", invalid_slot_message(.slot, .expected))]
    InvalidSlot {
        slot: String,
        expected: Option<Contract>,
    },

    /// `emit` was called with arguments that do not match the contract.
    #[error("{}", invalid_emit_message(.expected))]
    InvalidEmit { expected: Option<Contract> },

    /// A connected slot failed while the signal was being emitted.
    #[error(transparent)]
    Slot(SlotError),
}

impl SignalError {
    #[must_use]
    pub(crate) fn invalid_slot(slot: impl Into<String>, expected: Option<&Contract>) -> Self {
        Self::InvalidSlot {
            slot: slot.into(),
            expected: expected.cloned(),
        }
    }

    #[must_use]
    pub(crate) fn invalid_emit(expected: Option<&Contract>) -> Self {
        Self::InvalidEmit {
            expected: expected.cloned(),
        }
    }

    #[must_use]
    pub fn is_invalid_slot(&self) -> bool {
        matches!(self, Self::InvalidSlot { .. })
    }

    #[must_use]
    pub fn is_invalid_emit(&self) -> bool {
        matches!(self, Self::InvalidEmit { .. })
    }

    /// The contract the failing call was checked against.
    ///
    /// `None` for slot failures, and for validation failures against a
    /// signal without arguments.
    #[must_use]
    pub fn expected_contract(&self) -> Option<&Contract> {
        match self {
            Self::InvalidSlot { expected, .. } | Self::InvalidEmit { expected } => {
                expected.as_ref()
            }
            Self::Slot(_) => None,
        }
    }
}

fn invalid_slot_message(slot: &str, expected: &Option<Contract>) -> String {
    match expected {
        Some(contract) => format!("slot '{slot}' has to accept args {contract} or a catch-all"),
        None => format!("slot '{slot}' has to be callable without arguments"),
    }
}

fn invalid_emit_message(expected: &Option<Contract>) -> String {
    match expected {
        Some(contract) => format!("emit has to be called with args {contract}"),
        None => "emit has to be called without arguments".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_slot_names_slot_and_contract() {
        let contract = Contract::new(["foo", "bar"]);
        let err = SignalError::invalid_slot("on_change", Some(&contract));
        assert!(err.is_invalid_slot());
        assert_eq!(
            err.to_string(),
            "slot 'on_change' has to accept args ['foo', 'bar'] or a catch-all"
        );
        assert_eq!(err.expected_contract(), Some(&contract));
    }

    #[test]
    fn invalid_slot_without_contract() {
        let err = SignalError::invalid_slot("on_tick", None);
        assert_eq!(
            err.to_string(),
            "slot 'on_tick' has to be callable without arguments"
        );
        assert!(err.expected_contract().is_none());
    }

    #[test]
    fn invalid_emit_messages() {
        let contract = Contract::new(["foo"]);
        let err = SignalError::invalid_emit(Some(&contract));
        assert!(err.is_invalid_emit());
        assert!(!err.is_invalid_slot());
        assert_eq!(err.to_string(), "emit has to be called with args ['foo']");

        let err = SignalError::invalid_emit(None);
        assert_eq!(err.to_string(), "emit has to be called without arguments");
    }

    #[test]
    fn slot_failure_is_transparent() {
        let err = SignalError::Slot("disk full".into());
        assert_eq!(err.to_string(), "disk full");
        assert!(err.expected_contract().is_none());
    }
}
