//! Entry definitions - the configured units of scripted behavior.

use serde::{Deserialize, Serialize};

use crate::criteria::Criterion;

/// Stable identifier of an entry, as authored in the script pages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Create an entry ID from an authored string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// The closed set of entry kinds the engine dispatches over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Fire-and-forget behavior executed against the actor.
    Action,
    /// One step of a conversation, owned by a dialogue sequence.
    Dialogue,
    /// One step of a timed presentation, owned by a cinematic sequence.
    Cinematic,
    /// Entry fired by the host when a platform occurrence happens.
    EventSource,
}

/// A configured, identified unit of behavior.
///
/// Criteria are evaluated as a logical AND by the host's matcher; an entry
/// matches an actor iff every criterion holds at evaluation time. The
/// `triggers` list names the entries to fire next once this entry
/// fires or completes. Specificity is the length of the criteria list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,

    /// Human-readable name shown in tooling.
    #[serde(default)]
    pub name: String,

    pub kind: EntryKind,

    /// Ordered condition references, all of which must hold.
    #[serde(default)]
    pub criteria: Vec<Criterion>,

    /// Ordered IDs of entries to trigger next.
    #[serde(default)]
    pub triggers: Vec<EntryId>,
}

impl Entry {
    /// Create a new entry of the given kind.
    pub fn new(id: impl Into<EntryId>, kind: EntryKind) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind,
            criteria: Vec::new(),
            triggers: Vec::new(),
        }
    }

    /// Set the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Append a criterion.
    pub fn with_criterion(mut self, criterion: impl Into<Criterion>) -> Self {
        self.criteria.push(criterion.into());
        self
    }

    /// Append multiple criteria.
    pub fn with_criteria(mut self, criteria: impl IntoIterator<Item = Criterion>) -> Self {
        self.criteria.extend(criteria);
        self
    }

    /// Append a trigger target.
    pub fn with_trigger(mut self, trigger: impl Into<EntryId>) -> Self {
        self.triggers.push(trigger.into());
        self
    }

    /// Append multiple trigger targets.
    pub fn with_triggers(mut self, triggers: impl IntoIterator<Item = EntryId>) -> Self {
        self.triggers.extend(triggers);
        self
    }

    /// Number of criteria; longer lists win selection ties.
    pub fn specificity(&self) -> usize {
        self.criteria.len()
    }
}
