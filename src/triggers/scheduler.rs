//! Incremental playback of in-flight sequences

use std::time::Instant;

use super::{Sequence, TriggerId};
use crate::world::WorldConnection;
use crate::Result;

/// A sequence that still has steps left
#[derive(Debug)]
struct Pending {
    trigger_id: TriggerId,
    sequence: Sequence,
    /// When the next step becomes due
    due: Instant,
}

impl Pending {
    /// Apply every step that is due at `now`
    fn drive(&mut self, now: Instant, world: &mut dyn WorldConnection) -> Result<usize> {
        let mut applied = 0;
        while self.due <= now {
            let Some(step) = self.sequence.pop() else {
                break;
            };
            step.edit.apply(world)?;
            applied += 1;

            match self.sequence.next_delay() {
                Some(delay) => self.due = now + delay,
                None => break,
            }
        }
        Ok(applied)
    }
}

/// Plays sequences step by step across ticks
///
/// Each tick applies only the steps whose pause has elapsed, so a long effect
/// does not hold up evaluation of other triggers.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin playing a sequence, applying any steps already due
    ///
    /// Returns the number of edits applied right away.
    pub fn start(
        &mut self,
        trigger_id: TriggerId,
        sequence: Sequence,
        now: Instant,
        world: &mut dyn WorldConnection,
    ) -> Result<usize> {
        let Some(first_delay) = sequence.next_delay() else {
            return Ok(0);
        };

        let mut pending = Pending {
            trigger_id,
            sequence,
            due: now + first_delay,
        };
        let applied = pending.drive(now, world)?;

        if !pending.sequence.is_empty() {
            log::debug!(
                "Trigger {} has {} step(s) pending",
                trigger_id,
                pending.sequence.len()
            );
            self.pending.push(pending);
        }
        Ok(applied)
    }

    /// Apply every pending step that is due at `now`, in start order
    pub fn advance(&mut self, now: Instant, world: &mut dyn WorldConnection) -> Result<usize> {
        let mut applied = 0;
        for pending in &mut self.pending {
            applied += pending.drive(now, world)?;
        }
        self.pending.retain(|p| !p.sequence.is_empty());
        Ok(applied)
    }

    /// Whether a trigger still has steps in flight
    pub fn is_busy(&self, trigger_id: TriggerId) -> bool {
        self.pending.iter().any(|p| p.trigger_id == trigger_id)
    }

    /// Number of sequences in flight
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
