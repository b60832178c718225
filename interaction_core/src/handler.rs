//! Interaction handler - the process-wide actor registry and event dispatcher.

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::time::Duration;
use tracing::{debug, warn};

use script_entries::{ActorId, Entry, EntryKind};

use crate::event::{Event, Trigger};
use crate::hooks::InteractionHost;
use crate::interaction::Interaction;

/// Upper bound on dispatch rounds per top-level [`InteractionHandler::dispatch`].
///
/// The per-event trigger subtraction only prevents one-hop loops; longer
/// cycles configured by the operator are cut off here and logged.
pub const MAX_DISPATCH_ROUNDS: usize = 64;

/// Owns one [`Interaction`] per connected actor and the event dispatch loop.
///
/// Interactions are created lazily on the first event for a connected
/// actor and torn down on disconnect. Events for actors that were never
/// connected (or already disconnected) are dropped. Iteration over live
/// interactions is in actor-ID order, stable for a fixed set of actors.
#[derive(Debug, Default)]
pub struct InteractionHandler {
    connected: BTreeSet<ActorId>,
    interactions: BTreeMap<ActorId, Interaction>,
}

impl InteractionHandler {
    /// Create a handler with no connected actors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor as connected.
    pub fn connect(&mut self, actor: ActorId) {
        self.connected.insert(actor);
    }

    /// Unregister an actor, flushing and discarding its interaction.
    pub fn disconnect<H: InteractionHost>(&mut self, host: &mut H, actor: ActorId) {
        self.connected.remove(&actor);
        if let Some(mut interaction) = self.interactions.remove(&actor) {
            interaction.end(host);
        }
    }

    /// Whether an actor is currently connected.
    pub fn is_connected(&self, actor: ActorId) -> bool {
        self.connected.contains(&actor)
    }

    /// The live interaction for an actor, if one exists yet.
    pub fn interaction(&self, actor: ActorId) -> Option<&Interaction> {
        self.interactions.get(&actor)
    }

    /// Number of live interactions.
    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    /// Whether no interactions are live.
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Deliver an event, processing it and all follow-ups to completion.
    ///
    /// Follow-up events produced by the interaction are fed through a FIFO
    /// queue within this call; exceeding [`MAX_DISPATCH_ROUNDS`] drops the
    /// remainder of the queue with a warning instead of running away.
    pub fn dispatch<H: InteractionHost>(&mut self, host: &mut H, event: Event) {
        if !self.connected.contains(&event.actor()) {
            debug!(actor = %event.actor(), "dropping event for unconnected actor");
            return;
        }

        let mut queue = VecDeque::from([event]);
        let mut rounds = 0usize;

        while let Some(event) = queue.pop_front() {
            rounds += 1;
            if rounds > MAX_DISPATCH_ROUNDS {
                warn!(
                    actor = %event.actor(),
                    dropped = queue.len() + 1,
                    "dispatch round limit reached, dropping remaining events"
                );
                break;
            }

            debug!(actor = %event.actor(), triggers = ?event.triggers(), "dispatching event");
            let interaction = self
                .interactions
                .entry(event.actor())
                .or_insert_with(|| Interaction::new(event.actor()));
            queue.extend(interaction.on_event(&event, host));
        }
    }

    /// Fire all event-source entries satisfying a host predicate for an
    /// actor, dispatching one event carrying every collected trigger.
    ///
    /// This is how hosts translate platform occurrences into entry
    /// triggers: find the event-source entries affiliated with the
    /// occurrence, then fire their trigger lists.
    pub fn dispatch_from_sources<H, P>(&mut self, host: &mut H, actor: ActorId, predicate: P)
    where
        H: InteractionHost,
        P: Fn(&Entry) -> bool,
    {
        let triggers: Vec<Trigger> = host
            .entries_of(EntryKind::EventSource)
            .into_iter()
            .filter(|entry| predicate(entry))
            .flat_map(|entry| entry.triggers)
            .map(Trigger::Entry)
            .collect();

        if triggers.is_empty() {
            return;
        }
        self.dispatch(host, Event::new(actor, triggers));
    }

    /// Advance every live interaction's time-based state exactly once,
    /// in actor order, then dispatch whatever events the updates produced.
    pub fn tick<H: InteractionHost>(&mut self, host: &mut H, elapsed: Duration) {
        let mut pending = Vec::new();
        for interaction in self.interactions.values_mut() {
            pending.extend(interaction.tick(elapsed, host));
        }
        for event in pending {
            self.dispatch(host, event);
        }
    }
}
