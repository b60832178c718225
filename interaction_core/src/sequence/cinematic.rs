//! Cinematic sequence - owns timed presentation entries for one actor.

use std::time::Duration;

use script_entries::{ActorId, Entry};

use crate::hooks::{CinematicHooks, CinematicTick, HookError};

/// The ordered collection of cinematic entries playing for a single actor.
///
/// Entries matched while the sequence is alive are appended, never
/// replacing it; progression is driven by elapsed time, not by events.
#[derive(Debug, Clone)]
pub struct CinematicSequence {
    actor: ActorId,
    entries: Vec<Entry>,
}

impl CinematicSequence {
    /// Create an empty sequence for an actor.
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            entries: Vec::new(),
        }
    }

    /// Run the start hook for a freshly created sequence.
    pub fn start<H: CinematicHooks>(&self, host: &mut H) -> Result<(), HookError> {
        host.cinematic_start(self.actor)
    }

    /// Append an entry and report it to the presentation.
    pub fn add<H: CinematicHooks>(&mut self, entry: Entry, host: &mut H) -> Result<(), HookError> {
        host.cinematic_add(self.actor, &entry)?;
        self.entries.push(entry);
        Ok(())
    }

    /// Advance playback by the elapsed time since the previous tick.
    pub fn tick<H: CinematicHooks>(
        &mut self,
        elapsed: Duration,
        host: &mut H,
    ) -> Result<CinematicTick, HookError> {
        host.cinematic_tick(self.actor, elapsed)
    }

    /// Terminate the sequence, consuming it.
    pub fn end<H: CinematicHooks>(self, host: &mut H) -> Result<(), HookError> {
        host.cinematic_end(self.actor)
    }

    /// The queued entries, in append order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of queued entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries have been queued yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
