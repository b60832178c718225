//! # Interaction Core (Quill)
//!
//! The interaction engine: resolves which scripted entries fire in
//! response to events and drives the per-actor dialogue and cinematic
//! sequences over time.
//!
//! ## Core Components
//!
//! - **event**: Triggers and the immutable per-dispatch event value
//! - **interaction**: The per-actor aggregate routing events through
//!   action, dialogue, and cinematic handling
//! - **sequence**: The dialogue and cinematic sequence state machines
//! - **handler**: The process-wide actor registry and dispatch queue
//! - **hooks**: The capability contracts a host implements
//!
//! ## Design Philosophy
//!
//! - **Event-Driven**: The engine reacts to events and ticks delivered by
//!   the host; it never owns a loop of its own
//! - **Synchronous**: All mutation of one actor's state happens inside
//!   the call that delivered the event or the tick
//! - **Recoverable**: Host hook failures are logged and never corrupt
//!   interaction state

pub mod event;
pub mod handler;
pub mod hooks;
pub mod interaction;
pub mod sequence;

#[cfg(test)]
pub(crate) mod testing;

pub use event::*;
pub use handler::*;
pub use hooks::*;
pub use interaction::*;
pub use sequence::*;
