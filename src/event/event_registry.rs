use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use anyhow::Result;
use log::debug;
use log::error;
use log::trace;
use log::warn;

use super::EventTypeKey;
use super::handler::CallbackHandler;
use super::handler::Delivery;
use super::handler::HandlerBinding;
use super::handler::HandlerError;
use super::handler::MemberHandler;
use crate::error::DispatchError;
use crate::subscriber::Subscriber;

type Subscribers = HashMap<EventTypeKey, Vec<Box<dyn HandlerBinding>>>;

/// Summary of a successful [`EventRegistry::publish`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Handlers whose callback ran.
    pub delivered: usize,
    /// Handlers skipped because their subscriber has been dropped.
    pub dropped: usize,
}

impl DispatchReport {
    /// Whether no handler ran.
    pub fn is_empty(&self) -> bool {
        self.delivered == 0
    }
}

/// Typed publish/subscribe registry.
///
/// Handlers are grouped by the exact type of the event they accept and fire
/// in subscription order. Subscribers are shared as `Rc<RefCell<T>>` and held
/// weakly: once the last strong handle is dropped, its bindings are skipped.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use event_registry::event::EventRegistry;
///
/// struct Scored(i32);
///
/// #[derive(Default)]
/// struct Scoreboard {
///     total: i32,
/// }
///
/// impl Scoreboard {
///     fn on_scored(&mut self, event: &Scored) {
///         self.total += event.0;
///     }
/// }
///
/// let board = Rc::new(RefCell::new(Scoreboard::default()));
/// let mut registry = EventRegistry::new();
/// registry.subscribe(&board, Scoreboard::on_scored);
///
/// registry.publish(&Scored(3)).unwrap();
/// assert_eq!(board.borrow().total, 3);
/// ```
pub struct EventRegistry {
    subscribers: Subscribers,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self {
            subscribers: HashMap::new(),
        }
    }

    /// Subscribes `callback`, a method of `T` taking `&E`, on `instance`.
    ///
    /// The event type is taken from the callback's parameter. Registering the
    /// same pair twice makes it fire twice.
    pub fn subscribe<T, E, F>(&mut self, instance: &Rc<RefCell<T>>, callback: F) -> &mut Self
    where
        T: 'static,
        E: 'static,
        F: Fn(&mut T, &E) + 'static,
    {
        self.try_subscribe(instance, move |receiver: &mut T, event: &E| {
            callback(receiver, event);
            Ok(())
        })
    }

    /// Like [`subscribe`](Self::subscribe) for callbacks that can fail.
    ///
    /// An `Err` aborts the rest of the dispatch and is returned from
    /// [`publish`](Self::publish).
    pub fn try_subscribe<T, E, F>(&mut self, instance: &Rc<RefCell<T>>, callback: F) -> &mut Self
    where
        T: 'static,
        E: 'static,
        F: Fn(&mut T, &E) -> Result<()> + 'static,
    {
        let handler: MemberHandler<T, E, F> = MemberHandler::new(Rc::downgrade(instance), callback);
        self.insert::<E>(Box::new(handler))
    }

    pub fn register_subscriber<E, S>(&mut self, subscriber: &Rc<RefCell<S>>) -> &mut Self
    where
        E: 'static,
        S: Subscriber<E> + 'static,
    {
        self.try_subscribe(subscriber, <S as Subscriber<E>>::callback)
    }

    /// Subscribes a closure that has no receiver object.
    pub fn register_callback<E, F>(&mut self, callback: F) -> &mut Self
    where
        E: 'static,
        F: Fn(&E) -> Result<()> + 'static,
    {
        let handler: CallbackHandler<E, F> = CallbackHandler::new(callback);
        self.insert::<E>(Box::new(handler))
    }

    fn insert<E: 'static>(&mut self, handler: Box<dyn HandlerBinding>) -> &mut Self {
        let key = EventTypeKey::of::<E>();
        debug!("Subscribing {} to {}", handler.subscriber_name(), key);

        self.subscribers.entry(key).or_default().push(handler);
        self
    }

    /// Invokes every handler registered for `E`, in subscription order.
    ///
    /// Publishing an event nobody listens to does nothing. A failing handler
    /// stops the dispatch; the handlers before it have already run.
    pub fn publish<E: 'static>(&self, event: &E) -> Result<DispatchReport, DispatchError> {
        let key = EventTypeKey::of::<E>();
        let mut report = DispatchReport::default();

        let Some(handlers) = self.subscribers.get(&key) else {
            trace!("No subscribers for {}", key);
            return Ok(report);
        };

        trace!("Publishing {} to {} handler(s)", key, handlers.len());
        for (index, handler) in handlers.iter().enumerate() {
            match handler.call(event) {
                Ok(Delivery::Delivered) => report.delivered += 1,
                Ok(Delivery::Dropped) => {
                    warn!(
                        "Skipping handler #{} for {}: {} has been dropped",
                        index,
                        key,
                        handler.subscriber_name()
                    );
                    report.dropped += 1;
                }
                Ok(Delivery::Mismatched) => {
                    error!("Handler #{} for {} rejected the event type", index, key);
                }
                Err(HandlerError::Failed(source)) => {
                    return Err(DispatchError::HandlerFailed {
                        event: key,
                        index,
                        source: source.into(),
                    });
                }
                Err(HandlerError::Busy) => {
                    return Err(DispatchError::SubscriberBusy {
                        event: key,
                        subscriber: handler.subscriber_name(),
                    });
                }
            }
        }

        Ok(report)
    }

    /// Number of handlers registered for `E`, including ones whose
    /// subscriber has been dropped.
    pub fn handler_count<E: 'static>(&self) -> usize {
        self.subscribers
            .get(&EventTypeKey::of::<E>())
            .map_or(0, Vec::len)
    }

    pub fn has_subscribers<E: 'static>(&self) -> bool {
        self.handler_count::<E>() > 0
    }

    /// Total number of handlers across all event types.
    pub fn len(&self) -> usize {
        self.subscribers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Event types with at least one handler, in no particular order.
    pub fn event_types(&self) -> impl Iterator<Item = EventTypeKey> + '_ {
        self.subscribers.keys().copied()
    }
}

impl Default for EventRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.subscribers
                    .iter()
                    .map(|(key, handlers)| (key.name(), handlers.len())),
            )
            .finish()
    }
}
