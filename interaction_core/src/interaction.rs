//! Per-actor interaction - routes events through actions, dialogue, and cinematic.

use std::cmp::Reverse;
use std::time::Duration;
use tracing::{debug, warn};

use script_entries::{ActorId, Entry, EntryKind};

use crate::event::{Event, Trigger};
use crate::hooks::{CinematicTick, InteractionHost};
use crate::sequence::{CinematicSequence, DialogueSequence};

/// The per-actor aggregate owning at most one dialogue sequence and at
/// most one cinematic sequence.
///
/// Handling an event runs three phases in order: action dispatch,
/// dialogue handling, cinematic handling. Follow-up events produced by a
/// phase are returned to the caller rather than dispatched recursively;
/// the [`InteractionHandler`](crate::handler::InteractionHandler) feeds
/// them back through its work queue.
#[derive(Debug)]
pub struct Interaction {
    actor: ActorId,
    dialogue: Option<DialogueSequence>,
    cinematic: Option<CinematicSequence>,
}

impl Interaction {
    /// Create an interaction with no sequences in progress.
    pub fn new(actor: ActorId) -> Self {
        Self {
            actor,
            dialogue: None,
            cinematic: None,
        }
    }

    /// The actor this interaction belongs to.
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// Whether a dialogue sequence is in progress.
    pub fn has_dialogue(&self) -> bool {
        self.dialogue.is_some()
    }

    /// Whether a cinematic sequence is in progress.
    pub fn has_cinematic(&self) -> bool {
        self.cinematic.is_some()
    }

    /// The entry the dialogue sequence is positioned at, if any.
    pub fn current_dialogue(&self) -> Option<&Entry> {
        self.dialogue.as_ref().map(|seq| seq.current())
    }

    /// The entries queued on the cinematic sequence, if any.
    pub fn cinematic_entries(&self) -> Option<&[Entry]> {
        self.cinematic.as_ref().map(|seq| seq.entries())
    }

    /// Handle an event, returning any follow-up events it produced.
    pub fn on_event<H: InteractionHost>(&mut self, event: &Event, host: &mut H) -> Vec<Event> {
        let mut followups = Vec::new();
        self.trigger_actions(event, host, &mut followups);
        self.handle_dialogue(event, host, &mut followups);
        self.handle_cinematic(event, host);
        followups
    }

    /// Advance time-based sequence state by the elapsed duration.
    pub fn tick<H: InteractionHost>(&mut self, elapsed: Duration, host: &mut H) -> Vec<Event> {
        let mut followups = Vec::new();

        if let Some(dialogue) = &self.dialogue {
            if let Err(err) = dialogue.tick(host) {
                warn!(actor = %self.actor, %err, "dialogue tick hook failed");
            }
        }

        if let Some(cinematic) = &mut self.cinematic {
            match cinematic.tick(elapsed, host) {
                Ok(CinematicTick::Finished) => {
                    followups.push(Event::single(self.actor, Trigger::CinematicEnd));
                }
                Ok(CinematicTick::Running) => {}
                Err(err) => {
                    warn!(actor = %self.actor, %err, "cinematic tick hook failed");
                }
            }
        }

        followups
    }

    /// Tear down both sequences. Safe to call at any time, idempotent,
    /// and clears the sequence slots even when an end hook fails.
    pub fn end<H: InteractionHost>(&mut self, host: &mut H) {
        if let Some(dialogue) = self.dialogue.take() {
            if let Err(err) = dialogue.end(host) {
                warn!(actor = %self.actor, %err, "dialogue end hook failed");
            }
        }
        if let Some(cinematic) = self.cinematic.take() {
            if let Err(err) = cinematic.end(host) {
                warn!(actor = %self.actor, %err, "cinematic end hook failed");
            }
        }
    }

    /// Execute all matching action entries and collect their continuations.
    ///
    /// Triggers already present in the incoming event are subtracted from
    /// the continuation, so an action can never directly re-fire the event
    /// that executed it.
    fn trigger_actions<H: InteractionHost>(
        &mut self,
        event: &Event,
        host: &mut H,
        followups: &mut Vec<Event>,
    ) {
        let actions: Vec<Entry> = host
            .entries_of(EntryKind::Action)
            .into_iter()
            .filter(|entry| event.contains_entry(entry) && host.matches(&entry.criteria, self.actor))
            .collect();

        for action in &actions {
            debug!(actor = %self.actor, entry = %action.id, "executing action");
            if let Err(err) = host.execute(action, self.actor) {
                warn!(actor = %self.actor, entry = %action.id, %err, "action execution failed");
            }
        }

        let continuations: Vec<Trigger> = actions
            .iter()
            .flat_map(|action| action.triggers.iter())
            .map(|id| Trigger::Entry(id.clone()))
            .filter(|trigger| !event.contains(trigger))
            .collect();

        if !continuations.is_empty() {
            followups.push(Event::new(self.actor, continuations));
        }
    }

    fn handle_dialogue<H: InteractionHost>(
        &mut self,
        event: &Event,
        host: &mut H,
        followups: &mut Vec<Event>,
    ) {
        if event.contains(&Trigger::DialogueNext) {
            self.on_dialogue_next(followups);
            return;
        }
        if event.contains(&Trigger::DialogueEnd) {
            if let Some(dialogue) = self.dialogue.take() {
                if let Err(err) = dialogue.end(host) {
                    warn!(actor = %self.actor, %err, "dialogue end hook failed");
                }
            }
            return;
        }

        self.try_trigger_next_dialogue(event, host, followups);
    }

    /// Select and apply the next dialogue entry for this event.
    ///
    /// Candidates are ordered by descending specificity; the stable sort
    /// keeps repository order as the tie-break. When nothing matches and
    /// the existing sequence reports itself inactive, the sequence is
    /// ended through a self-addressed dialogue-end event.
    fn try_trigger_next_dialogue<H: InteractionHost>(
        &mut self,
        event: &Event,
        host: &mut H,
        followups: &mut Vec<Event>,
    ) {
        let mut candidates: Vec<Entry> = host
            .entries_of(EntryKind::Dialogue)
            .into_iter()
            .filter(|entry| event.contains_entry(entry))
            .collect();
        candidates.sort_by_key(|entry| Reverse(entry.specificity()));

        let next = candidates
            .into_iter()
            .find(|entry| host.matches(&entry.criteria, self.actor));

        match (next, &mut self.dialogue) {
            (Some(entry), None) => {
                debug!(actor = %self.actor, entry = %entry.id, "starting dialogue sequence");
                let sequence = DialogueSequence::new(self.actor, entry);
                if let Err(err) = sequence.init(host) {
                    warn!(actor = %self.actor, %err, "dialogue init hook failed");
                }
                self.dialogue = Some(sequence);
            }
            (Some(entry), Some(sequence)) => {
                debug!(actor = %self.actor, entry = %entry.id, "advancing dialogue sequence");
                if let Err(err) = sequence.next(entry, host) {
                    warn!(actor = %self.actor, %err, "dialogue next hook failed");
                }
            }
            (None, Some(sequence)) => {
                if !sequence.is_active(host) {
                    followups.push(Event::single(self.actor, Trigger::DialogueEnd));
                }
            }
            (None, None) => {}
        }
    }

    /// The actor asked to continue: fire the current entry's triggers, or
    /// end the sequence when there is nothing left to fire.
    fn on_dialogue_next(&self, followups: &mut Vec<Event>) {
        let Some(dialogue) = &self.dialogue else {
            return;
        };
        if dialogue.triggers().is_empty() {
            followups.push(Event::single(self.actor, Trigger::DialogueEnd));
            return;
        }
        let triggers = dialogue
            .triggers()
            .iter()
            .map(|id| Trigger::Entry(id.clone()));
        followups.push(Event::new(self.actor, triggers));
    }

    fn handle_cinematic<H: InteractionHost>(&mut self, event: &Event, host: &mut H) {
        if event.contains(&Trigger::CinematicEnd) {
            if let Some(cinematic) = self.cinematic.take() {
                if let Err(err) = cinematic.end(host) {
                    warn!(actor = %self.actor, %err, "cinematic end hook failed");
                }
            }
            return;
        }

        let entries: Vec<Entry> = host
            .entries_of(EntryKind::Cinematic)
            .into_iter()
            .filter(|entry| event.contains_entry(entry) && host.matches(&entry.criteria, self.actor))
            .collect();

        if !entries.is_empty() && self.cinematic.is_none() {
            debug!(actor = %self.actor, "starting cinematic sequence");
            let sequence = CinematicSequence::new(self.actor);
            if let Err(err) = sequence.start(host) {
                warn!(actor = %self.actor, %err, "cinematic start hook failed");
            }
            self.cinematic = Some(sequence);
        }

        if let Some(sequence) = &mut self.cinematic {
            for entry in entries {
                if let Err(err) = sequence.add(entry, host) {
                    warn!(actor = %self.actor, %err, "cinematic add hook failed");
                }
            }
        }
    }
}
