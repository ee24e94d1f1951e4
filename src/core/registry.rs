//! Ordered trigger registry

use crate::triggers::{Sequence, Trigger, TriggerEvaluator, TriggerId};

use super::WorldState;

struct Entry {
    id: TriggerId,
    trigger: Box<dyn Trigger>,
}

/// A trigger whose condition held during dispatch
#[derive(Debug)]
pub struct Fired {
    pub id: TriggerId,
    pub name: String,
    pub one_shot: bool,
    /// Effect returned by the trigger's action
    pub sequence: Sequence,
}

/// All live triggers in registration order
///
/// Registration order is evaluation order. One-shot triggers are removed
/// after their action runs, so each fires at most once.
#[derive(Default)]
pub struct TriggerRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trigger
    pub fn register(&mut self, trigger: Box<dyn Trigger>) -> TriggerId {
        let id = TriggerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, trigger });
        id
    }

    /// Evaluate every trigger in order and run the actions of those that match
    ///
    /// Triggers for which `is_busy` returns true are skipped this round.
    pub fn dispatch<F>(&mut self, state: &WorldState, is_busy: F) -> Vec<Fired>
    where
        F: Fn(TriggerId) -> bool,
    {
        let evaluator = TriggerEvaluator::new(state);
        let mut fired = Vec::new();

        for entry in &mut self.entries {
            if is_busy(entry.id) {
                log::debug!("Trigger '{}' still playing, skipped", entry.trigger.name());
                continue;
            }
            if !evaluator.evaluate(entry.trigger.as_ref()) {
                continue;
            }

            let sequence = entry.trigger.action(state);
            fired.push(Fired {
                id: entry.id,
                name: entry.trigger.name().to_string(),
                one_shot: entry.trigger.one_shot(),
                sequence,
            });
        }

        self.entries
            .retain(|e| !fired.iter().any(|f| f.one_shot && f.id == e.id));
        fired
    }

    /// Remove a trigger by handle
    pub fn remove(&mut self, id: TriggerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: TriggerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of live triggers in evaluation order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.trigger.name()).collect()
    }
}
