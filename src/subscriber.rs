//! Object-style event subscribers.

use anyhow::Result;

/// Trait for event subscribers.
///
/// A type may implement `Subscriber<E>` for several event types and be
/// registered once per type with
/// [`EventRegistry::register_subscriber`](crate::event::EventRegistry::register_subscriber).
pub trait Subscriber<E> {
    /// Called when an event of type E is published.
    fn callback(&mut self, event: &E) -> Result<()>;
}
