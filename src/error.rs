use crate::event::EventTypeKey;

/// Failures surfaced by [`EventRegistry::publish`](crate::event::EventRegistry::publish).
///
/// Publishing an event nobody listens to is not an error.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DispatchError {
    #[error("Handler #{index} for `{event}` failed: {source}")]
    HandlerFailed {
        event: EventTypeKey,
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Subscriber `{subscriber}` is already borrowed while dispatching `{event}`.")]
    SubscriberBusy {
        event: EventTypeKey,
        subscriber: &'static str,
    },
}

impl DispatchError {
    /// The event type whose dispatch was aborted.
    pub fn event(&self) -> EventTypeKey {
        match self {
            DispatchError::HandlerFailed { event, .. } => *event,
            DispatchError::SubscriberBusy { event, .. } => *event,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("Assertion error: {msg}")]
    AssertionError { msg: String },

    #[error("Configuration error: {msg}")]
    ConfigurationError { msg: String },

    #[error("Invalid value \"{value}\" for config key \"{key}\"")]
    InvalidConfig { key: String, value: String },
}
