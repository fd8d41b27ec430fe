#![forbid(unsafe_code)]

//! Signals and slots with keyword-argument contracts.
//!
//! - [`Signal`]: a named event source holding an ordered set of slots and
//!   an optional [`Contract`] of argument names.
//! - [`Slot`]: a callable plus its declared [`ParamShape`].
//! - [`Kwargs`]: the named argument bag handed to every slot on emit.
//!
//! # Architecture
//!
//! Slots are `Rc`-backed and signals are mutated through `&mut self`, so
//! the whole primitive is single-threaded and a slot cannot reconnect or
//! disconnect the signal that is currently invoking it.
//!
//! Parameter shapes are declared explicitly when a slot is built. A signal
//! checks the declared shape against its contract on `connect` and the
//! argument names against its contract on `emit`.
//!
//! # Example
//!
//! ```
//! use signaling::{Kwargs, ParamShape, Signal, Slot};
//!
//! let mut resized = Signal::with_contract(["width", "height"]).named("resized");
//! let slot = Slot::new("log_size", ParamShape::named(["width", "height"]), |args| {
//!     assert_eq!(args.get("width"), Some(&80));
//!     Ok(())
//! });
//! resized.connect(slot.clone())?;
//! resized.emit(&Kwargs::new().arg("width", 80).arg("height", 24))?;
//! assert!(resized.is_connected(&slot));
//! assert_eq!(resized.to_string(), "<Signal: 'resized'. Slots=1>");
//! # Ok::<(), signaling::SignalError>(())
//! ```

pub mod contract;
pub mod error;
pub mod kwargs;
pub mod signal;
pub mod slot;

pub use contract::Contract;
pub use error::{Result, SignalError};
pub use kwargs::Kwargs;
pub use signal::Signal;
pub use slot::{ParamShape, Slot, SlotError, SlotResult};

/// Version of this crate.
#[must_use]
pub const fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #[test]
    fn version_is_semver() {
        let parts: Vec<&str> = super::version().split('.').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.parse::<u32>().is_ok()));
    }
}
