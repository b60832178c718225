//! Scripted host used by the engine's tests.

use std::collections::HashSet;
use std::time::Duration;

use script_entries::{
    ActorId, Criterion, CriteriaMatcher, Entry, EntryId, EntryKind, EntryQuery, EntryStore,
    FlagMatcher,
};

use crate::hooks::{ActionExecutor, CinematicHooks, CinematicTick, DialogueHooks, HookError};

/// A host implementing every consumed capability, recording the calls it
/// receives and failing on demand.
pub(crate) struct TestHost {
    pub store: EntryStore,
    pub matcher: FlagMatcher,

    pub executed: Vec<String>,
    pub fail_execute: HashSet<EntryId>,

    pub dialogue_log: Vec<String>,
    pub dialogue_is_active: bool,
    pub fail_dialogue_end: bool,

    pub cinematic_log: Vec<String>,
    pub cinematic_finished: bool,
    pub fail_cinematic_add: bool,
    pub cinematic_tick_order: Vec<ActorId>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            store: EntryStore::new(),
            matcher: FlagMatcher::new(),
            executed: Vec::new(),
            fail_execute: HashSet::new(),
            dialogue_log: Vec::new(),
            dialogue_is_active: true,
            fail_dialogue_end: false,
            cinematic_log: Vec::new(),
            cinematic_finished: false,
            fail_cinematic_add: false,
            cinematic_tick_order: Vec::new(),
        }
    }

    pub fn add_entry(&mut self, entry: Entry) {
        self.store.insert(entry).expect("duplicate entry id in test setup");
    }
}

impl EntryQuery for TestHost {
    fn entries_of(&self, kind: EntryKind) -> Vec<Entry> {
        self.store.entries_of(kind)
    }
}

impl CriteriaMatcher for TestHost {
    fn matches(&self, criteria: &[Criterion], actor: ActorId) -> bool {
        self.matcher.matches(criteria, actor)
    }
}

impl ActionExecutor for TestHost {
    fn execute(&mut self, entry: &Entry, _actor: ActorId) -> Result<(), HookError> {
        if self.fail_execute.contains(&entry.id) {
            return Err(HookError::new(format!("action {} failed", entry.id)));
        }
        self.executed.push(entry.id.as_str().to_owned());
        Ok(())
    }
}

impl DialogueHooks for TestHost {
    fn dialogue_init(&mut self, _actor: ActorId, entry: &Entry) -> Result<(), HookError> {
        self.dialogue_log.push(format!("init:{}", entry.id));
        Ok(())
    }

    fn dialogue_next(&mut self, _actor: ActorId, entry: &Entry) -> Result<(), HookError> {
        self.dialogue_log.push(format!("next:{}", entry.id));
        Ok(())
    }

    fn dialogue_end(&mut self, _actor: ActorId) -> Result<(), HookError> {
        if self.fail_dialogue_end {
            return Err(HookError::new("dialogue end failed"));
        }
        self.dialogue_log.push("end".to_owned());
        Ok(())
    }

    fn dialogue_active(&self, _actor: ActorId) -> bool {
        self.dialogue_is_active
    }
}

impl CinematicHooks for TestHost {
    fn cinematic_start(&mut self, _actor: ActorId) -> Result<(), HookError> {
        self.cinematic_log.push("start".to_owned());
        Ok(())
    }

    fn cinematic_add(&mut self, _actor: ActorId, entry: &Entry) -> Result<(), HookError> {
        if self.fail_cinematic_add {
            return Err(HookError::new(format!("cinematic add {} failed", entry.id)));
        }
        self.cinematic_log.push(format!("add:{}", entry.id));
        Ok(())
    }

    fn cinematic_tick(
        &mut self,
        actor: ActorId,
        _elapsed: Duration,
    ) -> Result<CinematicTick, HookError> {
        self.cinematic_tick_order.push(actor);
        if self.cinematic_finished {
            Ok(CinematicTick::Finished)
        } else {
            Ok(CinematicTick::Running)
        }
    }

    fn cinematic_end(&mut self, _actor: ActorId) -> Result<(), HookError> {
        self.cinematic_log.push("end".to_owned());
        Ok(())
    }
}
