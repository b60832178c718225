//! Dialogue sequence - owns the progression of dialogue entries for one actor.

use script_entries::{ActorId, Entry, EntryId};

use crate::hooks::{DialogueHooks, HookError};

/// The progression of dialogue entries shown to a single actor.
///
/// The owning interaction holds the sequence in an `Option`; an absent
/// sequence is the idle state. Advancing to a new entry mutates the
/// existing sequence so presentation continuity (an open UI, a typing
/// animation) is preserved.
#[derive(Debug, Clone)]
pub struct DialogueSequence {
    actor: ActorId,
    current: Entry,
}

impl DialogueSequence {
    /// Create a sequence positioned at its first entry.
    pub fn new(actor: ActorId, entry: Entry) -> Self {
        Self {
            actor,
            current: entry,
        }
    }

    /// Run the initialization hook for the first entry.
    pub fn init<H: DialogueHooks>(&self, host: &mut H) -> Result<(), HookError> {
        host.dialogue_init(self.actor, &self.current)
    }

    /// Advance to the next entry, keeping the sequence alive.
    pub fn next<H: DialogueHooks>(&mut self, entry: Entry, host: &mut H) -> Result<(), HookError> {
        self.current = entry;
        host.dialogue_next(self.actor, &self.current)
    }

    /// Per-tick update (e.g. typing animation) while the sequence exists.
    pub fn tick<H: DialogueHooks>(&self, host: &mut H) -> Result<(), HookError> {
        host.dialogue_tick(self.actor, &self.current)
    }

    /// Whether the presentation still holds the sequence open.
    pub fn is_active<H: DialogueHooks>(&self, host: &H) -> bool {
        host.dialogue_active(self.actor)
    }

    /// Terminate the sequence, consuming it.
    pub fn end<H: DialogueHooks>(self, host: &mut H) -> Result<(), HookError> {
        host.dialogue_end(self.actor)
    }

    /// The entry the sequence is currently positioned at.
    pub fn current(&self) -> &Entry {
        &self.current
    }

    /// Trigger targets of the current entry, fired on dialogue-next.
    pub fn triggers(&self) -> &[EntryId] {
        &self.current.triggers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestHost;
    use script_entries::EntryKind;

    fn dialogue(id: &str) -> Entry {
        Entry::new(id, EntryKind::Dialogue)
    }

    #[test]
    fn test_init_and_next_report_to_hooks() {
        let actor = ActorId::new();
        let mut host = TestHost::new();

        let mut seq = DialogueSequence::new(actor, dialogue("d1"));
        seq.init(&mut host).unwrap();
        seq.next(dialogue("d2"), &mut host).unwrap();

        assert_eq!(host.dialogue_log, vec!["init:d1", "next:d2"]);
        assert_eq!(seq.current().id.as_str(), "d2");
    }

    #[test]
    fn test_triggers_follow_current_entry() {
        let actor = ActorId::new();
        let mut host = TestHost::new();

        let mut seq = DialogueSequence::new(actor, dialogue("d1").with_trigger("gate1"));
        assert_eq!(seq.triggers().len(), 1);

        seq.next(dialogue("d2"), &mut host).unwrap();
        assert!(seq.triggers().is_empty());
    }

    #[test]
    fn test_is_active_delegates_to_host() {
        let actor = ActorId::new();
        let mut host = TestHost::new();
        let seq = DialogueSequence::new(actor, dialogue("d1"));

        host.dialogue_is_active = true;
        assert!(seq.is_active(&host));

        host.dialogue_is_active = false;
        assert!(!seq.is_active(&host));
    }

    #[test]
    fn test_end_consumes_sequence() {
        let actor = ActorId::new();
        let mut host = TestHost::new();

        let seq = DialogueSequence::new(actor, dialogue("d1"));
        seq.end(&mut host).unwrap();
        assert_eq!(host.dialogue_log, vec!["end"]);
    }
}
