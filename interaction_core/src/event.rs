//! Events and triggers - the signals routed through an interaction.

use serde::{Deserialize, Serialize};

use script_entries::{ActorId, Entry, EntryId};

/// A signal carried by an [`Event`].
///
/// System triggers are handled by the engine itself; entry triggers
/// reference a configured entry by ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    /// The actor asked to continue the current dialogue.
    DialogueNext,
    /// The current dialogue sequence must terminate.
    DialogueEnd,
    /// The current cinematic sequence must terminate.
    CinematicEnd,
    /// A configured entry was triggered.
    Entry(EntryId),
}

impl Trigger {
    /// Create an entry trigger.
    pub fn entry(id: impl Into<EntryId>) -> Self {
        Trigger::Entry(id.into())
    }
}

/// An immutable dispatch of triggers aimed at one actor.
///
/// Construction dedupes triggers while preserving their order, so the
/// continuation order of a dispatch round is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    actor: ActorId,
    triggers: Vec<Trigger>,
}

impl Event {
    /// Create an event carrying the given triggers.
    pub fn new(actor: ActorId, triggers: impl IntoIterator<Item = Trigger>) -> Self {
        let mut deduped = Vec::new();
        for trigger in triggers {
            if !deduped.contains(&trigger) {
                deduped.push(trigger);
            }
        }
        Self {
            actor,
            triggers: deduped,
        }
    }

    /// Create an event carrying a single trigger.
    pub fn single(actor: ActorId, trigger: Trigger) -> Self {
        Self {
            actor,
            triggers: vec![trigger],
        }
    }

    /// The actor this event concerns.
    pub fn actor(&self) -> ActorId {
        self.actor
    }

    /// The triggers carried by this event, in dispatch order.
    pub fn triggers(&self) -> &[Trigger] {
        &self.triggers
    }

    /// Whether the event carries the given trigger.
    pub fn contains(&self, trigger: &Trigger) -> bool {
        self.triggers.contains(trigger)
    }

    /// Whether an entry is a candidate for this event.
    ///
    /// An entry is contained when the event carries an entry trigger that
    /// either addresses the entry by its own ID or appears in the entry's
    /// trigger list.
    pub fn contains_entry(&self, entry: &Entry) -> bool {
        self.triggers.iter().any(|trigger| match trigger {
            Trigger::Entry(id) => *id == entry.id || entry.triggers.contains(id),
            _ => false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use script_entries::EntryKind;

    #[test]
    fn test_event_dedupes_triggers_preserving_order() {
        let event = Event::new(
            ActorId::new(),
            vec![
                Trigger::entry("a"),
                Trigger::entry("b"),
                Trigger::entry("a"),
                Trigger::DialogueNext,
            ],
        );

        assert_eq!(
            event.triggers(),
            &[
                Trigger::entry("a"),
                Trigger::entry("b"),
                Trigger::DialogueNext,
            ]
        );
    }

    #[test]
    fn test_contains_trigger() {
        let event = Event::single(ActorId::new(), Trigger::DialogueEnd);
        assert!(event.contains(&Trigger::DialogueEnd));
        assert!(!event.contains(&Trigger::CinematicEnd));
        assert!(!event.contains(&Trigger::entry("gate1")));
    }

    #[test]
    fn test_entry_contained_by_own_trigger_list() {
        let entry = Entry::new("d1", EntryKind::Dialogue).with_trigger("gate1");
        let event = Event::single(ActorId::new(), Trigger::entry("gate1"));
        assert!(event.contains_entry(&entry));
    }

    #[test]
    fn test_entry_contained_by_own_id() {
        let entry = Entry::new("d1", EntryKind::Dialogue);
        let event = Event::single(ActorId::new(), Trigger::entry("d1"));
        assert!(event.contains_entry(&entry));
    }

    #[test]
    fn test_entry_not_contained_by_system_triggers() {
        let entry = Entry::new("d1", EntryKind::Dialogue).with_trigger("gate1");
        let event = Event::new(
            ActorId::new(),
            vec![Trigger::DialogueNext, Trigger::entry("other")],
        );
        assert!(!event.contains_entry(&entry));
    }

    #[test]
    fn test_trigger_serde_representation() {
        let json = serde_json::to_string(&Trigger::entry("gate1")).unwrap();
        assert_eq!(json, r#"{"Entry":"gate1"}"#);
        assert_eq!(
            serde_json::from_str::<Trigger>(r#""DialogueNext""#).unwrap(),
            Trigger::DialogueNext
        );
    }
}
