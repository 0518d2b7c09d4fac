//! Type-erased handler bindings stored by the registry.
//!
//! Each binding is generic over the subscriber and event types it was built
//! for, but the registry only ever sees it through [`HandlerBinding`]. The
//! concrete event type is restored with [`Any::downcast_ref`] at call time.

use std::any::Any;
use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Weak;

/// Outcome of invoking a single binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delivery {
    /// The callback ran.
    Delivered,
    /// The subscriber has been dropped; the binding is inert.
    Dropped,
    /// The event was not of the binding's type. Unreachable through the
    /// registry, which selects bindings by the event's type key.
    Mismatched,
}

#[derive(Debug)]
pub(crate) enum HandlerError {
    /// The callback returned an error.
    Failed(anyhow::Error),
    /// The subscriber is already mutably borrowed, e.g. a handler published
    /// an event that routes back to its own receiver.
    Busy,
}

/// Uniform entry point over every (subscriber, event) pairing.
pub(crate) trait HandlerBinding {
    fn call(&self, event: &dyn Any) -> Result<Delivery, HandlerError>;

    /// Name of the receiving type, for diagnostics.
    fn subscriber_name(&self) -> &'static str;
}

/// Binds a subscriber instance and one of its callbacks for event type `E`.
///
/// Holds the subscriber weakly: the registry never extends its lifetime.
pub(crate) struct MemberHandler<T, E, F> {
    instance: Weak<RefCell<T>>,
    callback: F,
    _event: PhantomData<fn(&E)>,
}

impl<T, E, F> MemberHandler<T, E, F> {
    pub(crate) fn new(instance: Weak<RefCell<T>>, callback: F) -> Self {
        Self {
            instance,
            callback,
            _event: PhantomData,
        }
    }
}

impl<T, E, F> HandlerBinding for MemberHandler<T, E, F>
where
    T: 'static,
    E: 'static,
    F: Fn(&mut T, &E) -> anyhow::Result<()>,
{
    fn call(&self, event: &dyn Any) -> Result<Delivery, HandlerError> {
        let Some(event) = event.downcast_ref::<E>() else {
            return Ok(Delivery::Mismatched);
        };
        let Some(instance) = self.instance.upgrade() else {
            return Ok(Delivery::Dropped);
        };
        let mut receiver = instance.try_borrow_mut().map_err(|_| HandlerError::Busy)?;

        (self.callback)(&mut *receiver, event).map_err(HandlerError::Failed)?;
        Ok(Delivery::Delivered)
    }

    fn subscriber_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// Binds a free closure with no receiver object.
pub(crate) struct CallbackHandler<E, F> {
    callback: F,
    _event: PhantomData<fn(&E)>,
}

impl<E, F> CallbackHandler<E, F> {
    pub(crate) fn new(callback: F) -> Self {
        Self {
            callback,
            _event: PhantomData,
        }
    }
}

impl<E, F> HandlerBinding for CallbackHandler<E, F>
where
    E: 'static,
    F: Fn(&E) -> anyhow::Result<()>,
{
    fn call(&self, event: &dyn Any) -> Result<Delivery, HandlerError> {
        let Some(event) = event.downcast_ref::<E>() else {
            return Ok(Delivery::Mismatched);
        };

        (self.callback)(event).map_err(HandlerError::Failed)?;
        Ok(Delivery::Delivered)
    }

    fn subscriber_name(&self) -> &'static str {
        std::any::type_name::<F>()
    }
}
