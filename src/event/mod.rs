pub mod event_registry;
mod handler;

use std::any::Any;
use std::any::TypeId;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

pub use event_registry::DispatchReport;
pub use event_registry::EventRegistry;

/// Optional naming helper for event types.
///
/// The registry does not require events to implement this trait; any
/// `'static` type can be published. Implementing it only gives the event a
/// readable name for logging.
pub trait Event: Any {
    /// Get the name of the event type.
    fn event_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Identity of a concrete event type, used to group and select handlers.
///
/// Equality, hashing and ordering use only the [`TypeId`]; the type name is
/// carried along for diagnostics.
#[derive(Clone, Copy)]
pub struct EventTypeKey {
    id: TypeId,
    name: &'static str,
}

impl EventTypeKey {
    pub fn of<E: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            name: std::any::type_name::<E>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for EventTypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for EventTypeKey {}

impl Hash for EventTypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for EventTypeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventTypeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Debug for EventTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EventTypeKey").field(&self.name).finish()
    }
}

impl fmt::Display for EventTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    struct Ping {
        _value: u32,
    }

    struct Pong {
        _value: u32,
    }

    impl Event for Ping {}

    #[test]
    fn test_same_type_same_key() {
        assert_eq!(EventTypeKey::of::<Ping>(), EventTypeKey::of::<Ping>());
    }

    #[test]
    fn test_structurally_identical_types_differ() {
        assert_ne!(EventTypeKey::of::<Ping>(), EventTypeKey::of::<Pong>());
    }

    #[test]
    fn test_key_usable_in_map() {
        let mut map = HashMap::new();
        map.insert(EventTypeKey::of::<Ping>(), 1);
        map.insert(EventTypeKey::of::<Pong>(), 2);
        *map.entry(EventTypeKey::of::<Ping>()).or_insert(0) += 10;

        assert_eq!(map.len(), 2);
        assert_eq!(map[&EventTypeKey::of::<Ping>()], 11);
    }

    #[test]
    fn test_display_uses_type_name() {
        let key = EventTypeKey::of::<Ping>();
        assert!(key.to_string().ends_with("Ping"));
        assert_eq!(key.name(), std::any::type_name::<Ping>());
    }

    #[test]
    fn test_event_name() {
        let ping = Ping { _value: 1 };
        assert_eq!(ping.event_name(), EventTypeKey::of::<Ping>().name());
    }
}
