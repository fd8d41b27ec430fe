#![forbid(unsafe_code)]

//! Slots: callables that receive a signal's emissions.
//!
//! A [`Slot`] pairs a callable with the [`ParamShape`] it declares. The
//! shape stands in for parameter introspection: a signal checks it against
//! its [`Contract`] when the slot is connected.
//!
//! # Identity
//!
//! Slots compare by identity, never by behavior:
//!
//! - A free slot ([`Slot::new`]) is identified by its allocation. Clones are
//!   the same slot; two separately built slots never are.
//! - A bound slot ([`Slot::bound`]) is identified by its receiver allocation
//!   and method, so binding the same method on the same receiver twice
//!   yields equal slots. Methods are told apart by their fn item type, never
//!   by code address: the optimizer may fold methods with identical bodies.

use std::any::TypeId;
use std::fmt;
use std::rc::Rc;

use crate::contract::Contract;
use crate::kwargs::Kwargs;

/// Name of the implicit receiver parameter dropped from bound slot shapes.
const RECEIVER_PARAM: &str = "self";

/// Failure raised by a slot body.
pub type SlotError = Box<dyn std::error::Error + Send + Sync>;

/// Return type of every slot body.
pub type SlotResult = Result<(), SlotError>;

/// Declared parameters of a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamShape {
    params: Vec<String>,
    catch_all: bool,
}

impl ParamShape {
    /// No parameters and no catch-all.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            params: Vec::new(),
            catch_all: false,
        }
    }

    /// Exactly the given named parameters.
    #[must_use]
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: names.into_iter().map(Into::into).collect(),
            catch_all: false,
        }
    }

    /// Only an arbitrary-keyword catch-all.
    #[must_use]
    pub const fn catch_all() -> Self {
        Self {
            params: Vec::new(),
            catch_all: true,
        }
    }

    /// Also accept arbitrary additional keywords.
    #[must_use]
    pub fn with_catch_all(mut self) -> Self {
        self.catch_all = true;
        self
    }

    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    #[must_use]
    pub const fn accepts_catch_all(&self) -> bool {
        self.catch_all
    }

    /// Whether a slot with this shape may be connected to a signal with
    /// `contract`.
    ///
    /// With a non-empty contract the named parameters must equal the
    /// contract as a set, unless a catch-all is declared. Without one, no
    /// named parameters may be declared at all.
    #[must_use]
    pub fn is_compatible(&self, contract: Option<&Contract>) -> bool {
        match contract.filter(|c| !c.is_empty()) {
            Some(contract) => self.catch_all || contract.matches(&self.params),
            None => self.params.is_empty(),
        }
    }

    fn without_receiver(mut self) -> Self {
        if self.params.first().is_some_and(|p| p == RECEIVER_PARAM) {
            self.params.remove(0);
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Identity {
    Free,
    Bound { receiver: usize, method: TypeId },
}

struct SlotInner<V> {
    name: String,
    shape: ParamShape,
    identity: Identity,
    call: Box<dyn Fn(&Kwargs<V>) -> SlotResult>,
}

/// A callable connected to a signal.
///
/// Cloning a `Slot` creates a new handle to the **same** callable.
pub struct Slot<V> {
    inner: Rc<SlotInner<V>>,
}

impl<V> Clone for Slot<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V> fmt::Debug for Slot<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("name", &self.inner.name)
            .field("shape", &self.inner.shape)
            .field("bound", &matches!(self.inner.identity, Identity::Bound { .. }))
            .finish()
    }
}

impl<V> PartialEq for Slot<V> {
    fn eq(&self, other: &Self) -> bool {
        match (self.inner.identity, other.inner.identity) {
            (a @ Identity::Bound { .. }, b @ Identity::Bound { .. }) => a == b,
            _ => Rc::ptr_eq(&self.inner, &other.inner),
        }
    }
}

impl<V> Eq for Slot<V> {}

impl<V: 'static> Slot<V> {
    /// Wrap a closure declaring `shape` as its parameters.
    pub fn new(
        name: impl Into<String>,
        shape: ParamShape,
        f: impl Fn(&Kwargs<V>) -> SlotResult + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(SlotInner {
                name: name.into(),
                shape,
                identity: Identity::Free,
                call: Box::new(f),
            }),
        }
    }

    /// Bind `method` to `receiver`.
    ///
    /// `shape` is the method's full parameter list. Only a *leading*
    /// parameter named `self` is treated as the receiver and dropped before
    /// the shape is matched against a contract; a shape that does not start
    /// with `"self"` is taken as already receiver-free.
    ///
    /// When `method` is a fn item (e.g. `Widget::on_click`) or a
    /// non-capturing closure, binding it again on the same receiver yields
    /// an equal slot. Capturing closures and fn pointers get a fresh
    /// identity on every call.
    pub fn bound<R, M>(
        receiver: &Rc<R>,
        name: impl Into<String>,
        shape: ParamShape,
        method: M,
    ) -> Self
    where
        R: 'static,
        M: Fn(&R, &Kwargs<V>) -> SlotResult + 'static,
    {
        // Zero-sized callables carry no state, so their type fixes their behavior.
        let identity = if std::mem::size_of::<M>() == 0 {
            Identity::Bound {
                receiver: Rc::as_ptr(receiver) as usize,
                method: TypeId::of::<M>(),
            }
        } else {
            Identity::Free
        };
        let receiver = Rc::clone(receiver);
        Self {
            inner: Rc::new(SlotInner {
                name: name.into(),
                shape: shape.without_receiver(),
                identity,
                call: Box::new(move |kwargs: &Kwargs<V>| method(&*receiver, kwargs)),
            }),
        }
    }
}

impl<V> Slot<V> {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The shape matched against contracts (receiver already excluded).
    #[must_use]
    pub fn shape(&self) -> &ParamShape {
        &self.inner.shape
    }

    /// Invoke the slot body.
    pub fn call(&self, kwargs: &Kwargs<V>) -> SlotResult {
        (self.inner.call)(kwargs)
    }
}
