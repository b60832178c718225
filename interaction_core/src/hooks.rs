//! Consumed capabilities - the contracts a host implements for the engine.

use std::time::Duration;
use thiserror::Error;

use script_entries::{ActorId, CriteriaMatcher, Entry, EntryQuery};

/// Failure reported by a host capability.
///
/// Hook failures are recoverable: the engine logs them and keeps its own
/// state consistent.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct HookError(String);

impl HookError {
    /// Create a hook error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Executes action entries against an actor.
pub trait ActionExecutor {
    fn execute(&mut self, entry: &Entry, actor: ActorId) -> Result<(), HookError>;
}

/// Presentation callbacks for a dialogue sequence.
pub trait DialogueHooks {
    /// A new sequence was created with its first entry.
    fn dialogue_init(&mut self, actor: ActorId, entry: &Entry) -> Result<(), HookError>;

    /// The existing sequence advanced to a new entry.
    fn dialogue_next(&mut self, actor: ActorId, entry: &Entry) -> Result<(), HookError>;

    /// Per-tick update while a sequence exists.
    fn dialogue_tick(&mut self, _actor: ActorId, _entry: &Entry) -> Result<(), HookError> {
        Ok(())
    }

    /// The sequence terminated.
    fn dialogue_end(&mut self, actor: ActorId) -> Result<(), HookError>;

    /// Liveness query: whether the presentation is still holding the
    /// sequence open (e.g. a UI waiting for input).
    fn dialogue_active(&self, actor: ActorId) -> bool;
}

/// Outcome of a cinematic time-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CinematicTick {
    /// The cinematic is still playing.
    Running,
    /// The cinematic ran out of content; the engine will end it.
    Finished,
}

/// Presentation callbacks for a cinematic sequence.
pub trait CinematicHooks {
    /// A new sequence was created.
    fn cinematic_start(&mut self, actor: ActorId) -> Result<(), HookError>;

    /// An entry was appended to the sequence.
    fn cinematic_add(&mut self, actor: ActorId, entry: &Entry) -> Result<(), HookError>;

    /// Advance playback by the elapsed time since the previous tick.
    fn cinematic_tick(&mut self, actor: ActorId, elapsed: Duration)
        -> Result<CinematicTick, HookError>;

    /// The sequence terminated.
    fn cinematic_end(&mut self, actor: ActorId) -> Result<(), HookError>;
}

/// The full capability set the engine needs from its host.
pub trait InteractionHost:
    EntryQuery + CriteriaMatcher + ActionExecutor + DialogueHooks + CinematicHooks
{
}

impl<T> InteractionHost for T where
    T: EntryQuery + CriteriaMatcher + ActionExecutor + DialogueHooks + CinematicHooks
{
}
