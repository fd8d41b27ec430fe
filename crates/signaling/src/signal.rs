#![forbid(unsafe_code)]

//! Named signals with an ordered slot registry.
//!
//! # Invariants
//!
//! 1. Every connected slot's shape satisfied the contract when it was
//!    connected.
//! 2. A slot appears at most once; connecting it again is a no-op.
//! 3. Slots are invoked in registration order. Disconnecting and
//!    reconnecting a slot moves it to the end.
//! 4. `emit` validates its arguments once, before any slot runs.
//! 5. Equality compares slot sequences only; name and contract are ignored.
//!
//! # Failure Modes
//!
//! - **Slot fails during emit**: the error is returned immediately and the
//!   remaining slots are not invoked. Slots that already ran are not undone.

use std::fmt;

use crate::contract::Contract;
use crate::error::{Result, SignalError};
use crate::kwargs::Kwargs;
use crate::slot::Slot;

/// Label shown by [`Display`](fmt::Display) for signals without a name.
const ANONYMOUS: &str = "anonymous";

/// An event source holding an ordered set of slots.
///
/// `V` is the type of every argument value passed on emit.
pub struct Signal<V> {
    name: Option<String>,
    contract: Option<Contract>,
    slots: Vec<Slot<V>>,
}

impl<V> Default for Signal<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Signal<V> {
    /// An anonymous signal emitted without arguments.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            contract: None,
            slots: Vec::new(),
        }
    }

    /// A signal emitted with exactly the named arguments.
    ///
    /// An empty name list is the same as [`Signal::new`].
    #[must_use]
    pub fn with_contract<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let contract = Contract::new(names);
        Self {
            name: None,
            contract: (!contract.is_empty()).then_some(contract),
            slots: Vec::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The declared contract, `None` when the signal takes no arguments.
    #[must_use]
    pub fn contract(&self) -> Option<&Contract> {
        self.contract.as_ref()
    }

    /// Connected slots in invocation order.
    #[must_use]
    pub fn slots(&self) -> &[Slot<V>] {
        &self.slots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(ANONYMOUS)
    }

    /// Connect `slot`, appending it after the current slots.
    ///
    /// Connecting an already connected slot does nothing.
    ///
    /// # Errors
    ///
    /// [`SignalError::InvalidSlot`] if the slot's shape does not satisfy
    /// the contract.
    pub fn connect(&mut self, slot: Slot<V>) -> Result<()> {
        if !slot.shape().is_compatible(self.contract.as_ref()) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "signal.reject_slot",
                signal = self.label(),
                slot = slot.name()
            );
            return Err(SignalError::invalid_slot(slot.name(), self.contract.as_ref()));
        }
        if self.is_connected(&slot) {
            return Ok(());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "signal.connect",
            signal = self.label(),
            slot = slot.name(),
            position = self.slots.len()
        );
        self.slots.push(slot);
        Ok(())
    }

    /// Disconnect `slot` if connected. Never fails.
    pub fn disconnect(&mut self, slot: &Slot<V>) {
        if let Some(idx) = self.slots.iter().position(|s| s == slot) {
            let _removed = self.slots.remove(idx);
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "signal.disconnect",
                signal = self.label(),
                slot = _removed.name()
            );
        }
    }

    #[must_use]
    pub fn is_connected(&self, slot: &Slot<V>) -> bool {
        self.slots.contains(slot)
    }

    /// Invoke every connected slot, in order, with `kwargs`.
    ///
    /// # Errors
    ///
    /// - [`SignalError::InvalidEmit`] if the argument names do not match the
    ///   contract. No slot is invoked.
    /// - [`SignalError::Slot`] with the first slot failure. Later slots are
    ///   not invoked.
    pub fn emit(&self, kwargs: &Kwargs<V>) -> Result<()> {
        self.check_emit(kwargs)?;

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "signal.emit",
            signal = self.label(),
            slots = self.slots.len()
        )
        .entered();

        for slot in &self.slots {
            slot.call(kwargs).map_err(SignalError::Slot)?;
        }
        Ok(())
    }

    fn check_emit(&self, kwargs: &Kwargs<V>) -> Result<()> {
        let valid = match &self.contract {
            Some(contract) => contract.matches(kwargs.names()),
            None => kwargs.is_empty(),
        };
        if valid {
            return Ok(());
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "signal.reject_emit",
            signal = self.label(),
            args = kwargs.len()
        );
        Err(SignalError::invalid_emit(self.contract.as_ref()))
    }
}

impl<V> PartialEq for Signal<V> {
    fn eq(&self, other: &Self) -> bool {
        self.slots == other.slots
    }
}

impl<V> fmt::Display for Signal<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Signal: '{}'. Slots={}>", self.label(), self.slots.len())
    }
}

impl<V> fmt::Debug for Signal<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("contract", &self.contract)
            .field("slots", &self.slots)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
