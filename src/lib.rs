//! event-registry - A typed, in-process publish/subscribe registry.
//!
//! This crate provides:
//! - An [`EventRegistry`](event::EventRegistry) keyed by the exact type of each event
//! - Method, closure and [`Subscriber`](subscriber::Subscriber) based subscriptions
//! - Synchronous dispatch in subscription order

pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod subscriber;
