//! Demo entry point for event-registry.
//!
//! Two systems listen for two event types; both events are published once
//! and the systems' totals are checked afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use dotenv::dotenv;
use event_registry::config::Config;
use event_registry::error::AppError;
use event_registry::event::Event;
use event_registry::event::EventRegistry;
use event_registry::logging::setup_logging;
use tracing::debug;
use tracing::info;

struct EventA {
    foo: i32,
    bar: i32,
}

impl Default for EventA {
    fn default() -> Self {
        Self { foo: 111, bar: 22 }
    }
}

impl Event for EventA {}

struct EventB {
    foo: i32,
}

impl Default for EventB {
    fn default() -> Self {
        Self { foo: 3 }
    }
}

impl Event for EventB {}

fn log_handling<S>(event: &impl Event) {
    let system = std::any::type_name::<S>().rsplit("::").next().unwrap_or_default();
    let event = event.event_name().rsplit("::").next().unwrap_or_default();
    info!("{} handling \"{}\"", system, event);
}

#[derive(Default)]
struct SystemA {
    foobar: i32,
}

impl SystemA {
    fn handle_event_a(&mut self, event: &EventA) {
        log_handling::<Self>(event);
        self.foobar += event.foo;
        self.foobar += event.bar;
    }

    fn handle_event_b(&mut self, event: &EventB) {
        log_handling::<Self>(event);
        self.foobar -= event.foo;
    }
}

#[derive(Default)]
struct SystemB {
    foobar: i32,
}

impl SystemB {
    fn handle_event_a(&mut self, event: &EventA) {
        log_handling::<Self>(event);
        self.foobar -= event.foo;
        self.foobar -= event.bar;
    }

    fn handle_event_b(&mut self, event: &EventB) {
        log_handling::<Self>(event);
        self.foobar += event.foo;
    }
}

fn main() -> Result<()> {
    dotenv().ok();

    let mut config = Config::new();
    config.load()?;
    setup_logging(&config)?;
    info!("Starting event-registry demo...");

    let mut registry = EventRegistry::new();
    let system_a = Rc::new(RefCell::new(SystemA::default()));
    let system_b = Rc::new(RefCell::new(SystemB::default()));

    registry
        .subscribe(&system_a, SystemA::handle_event_a)
        .subscribe(&system_a, SystemA::handle_event_b)
        .subscribe(&system_b, SystemB::handle_event_a)
        .subscribe(&system_b, SystemB::handle_event_b);
    debug!("Registry: {:?}", registry);

    let event_a = EventA::default();
    let report = registry.publish(&event_a)?;
    debug!("EventA delivered to {} handler(s)", report.delivered);

    let event_b = EventB::default();
    let report = registry.publish(&event_b)?;
    debug!("EventB delivered to {} handler(s)", report.delivered);

    let expected_a = event_a.foo + event_a.bar - event_b.foo;
    let expected_b = event_b.foo - event_a.foo - event_a.bar;
    let (actual_a, actual_b) = (system_a.borrow().foobar, system_b.borrow().foobar);

    if actual_a != expected_a || actual_b != expected_b {
        return Err(AppError::AssertionError {
            msg: format!(
                "expected SystemA={} SystemB={}, got SystemA={} SystemB={}",
                expected_a, expected_b, actual_a, actual_b
            ),
        }
        .into());
    }

    info!("SystemA.foobar = {}, SystemB.foobar = {}", actual_a, actual_b);
    Ok(())
}
