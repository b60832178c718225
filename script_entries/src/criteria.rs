//! Criteria - externally evaluated conditions gating entries.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::actor::ActorId;

/// An opaque reference to a condition evaluated by the host.
///
/// The engine never inspects the condition itself; it only asks the
/// matcher whether the whole list holds for an actor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Criterion(String);

impl Criterion {
    /// Create a criterion referencing a named condition.
    pub fn new(condition: impl Into<String>) -> Self {
        Self(condition.into())
    }

    /// Get the condition reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Criterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Criterion {
    fn from(condition: &str) -> Self {
        Self::new(condition)
    }
}

impl From<String> for Criterion {
    fn from(condition: String) -> Self {
        Self(condition)
    }
}

/// Evaluates entry criteria against the current state of an actor.
///
/// All criteria are ANDed: an empty list vacuously matches.
pub trait CriteriaMatcher {
    fn matches(&self, criteria: &[Criterion], actor: ActorId) -> bool;
}

/// A matcher backed by per-actor flag sets.
///
/// A criterion holds iff the actor currently carries the flag with the
/// same name. Hosts with richer condition systems implement
/// [`CriteriaMatcher`] themselves.
#[derive(Debug, Clone, Default)]
pub struct FlagMatcher {
    flags: HashMap<ActorId, HashSet<String>>,
}

impl FlagMatcher {
    /// Create a matcher with no flags set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag for an actor.
    pub fn set_flag(&mut self, actor: ActorId, flag: impl Into<String>) {
        self.flags.entry(actor).or_default().insert(flag.into());
    }

    /// Clear a flag for an actor.
    pub fn clear_flag(&mut self, actor: ActorId, flag: &str) {
        if let Some(flags) = self.flags.get_mut(&actor) {
            flags.remove(flag);
        }
    }

    /// Check whether an actor carries a flag.
    pub fn has_flag(&self, actor: ActorId, flag: &str) -> bool {
        self.flags
            .get(&actor)
            .map(|flags| flags.contains(flag))
            .unwrap_or(false)
    }
}

impl CriteriaMatcher for FlagMatcher {
    fn matches(&self, criteria: &[Criterion], actor: ActorId) -> bool {
        criteria
            .iter()
            .all(|criterion| self.has_flag(actor, criterion.as_str()))
    }
}
