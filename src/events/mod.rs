//! Event reporting.
//!
//! The engine describes what happened with a `GameEvent` and hands it to the
//! matching callback in `EventHandlers`. Nothing is queued: callbacks run
//! synchronously inside the engine call that produced the event.

mod event;
mod handlers;

pub use event::GameEvent;
pub use handlers::EventHandlers;
