//! Common test fixtures: events and systems from the reference scenario.

use event_registry::event::Event;

#[derive(Clone, Debug, PartialEq)]
pub struct EventA {
    pub foo: i32,
    pub bar: i32,
}

impl Default for EventA {
    fn default() -> Self {
        Self { foo: 111, bar: 22 }
    }
}

impl Event for EventA {}

#[derive(Clone, Debug, PartialEq)]
pub struct EventB {
    pub foo: i32,
}

impl Default for EventB {
    fn default() -> Self {
        Self { foo: 3 }
    }
}

impl Event for EventB {}

/// Structurally identical to [`EventB`] but a distinct type.
#[derive(Clone, Debug, Default, PartialEq)]
#[allow(dead_code)]
pub struct EventC {
    pub foo: i32,
}

#[derive(Default)]
#[allow(dead_code)]
pub struct SystemA {
    pub foobar: i32,
}

#[allow(dead_code)]
impl SystemA {
    pub fn handle_event_a(&mut self, event: &EventA) {
        self.foobar += event.foo;
        self.foobar += event.bar;
    }

    pub fn handle_event_b(&mut self, event: &EventB) {
        self.foobar -= event.foo;
    }
}

#[derive(Default)]
#[allow(dead_code)]
pub struct SystemB {
    pub foobar: i32,
}

#[allow(dead_code)]
impl SystemB {
    pub fn handle_event_a(&mut self, event: &EventA) {
        self.foobar -= event.foo;
        self.foobar -= event.bar;
    }

    pub fn handle_event_b(&mut self, event: &EventB) {
        self.foobar += event.foo;
    }
}

/// Records a label per handled event, in order.
#[derive(Default)]
#[allow(dead_code)]
pub struct Journal {
    pub entries: Vec<String>,
}
