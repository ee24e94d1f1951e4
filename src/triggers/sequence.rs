//! Multi-step effects
//!
//! An action never sleeps. It returns a [`Sequence`] of steps, each carrying
//! the pause that must elapse after the previous step before it is applied.

use std::collections::VecDeque;
use std::time::Duration;

use crate::world::{WorldConnection, WorldEdit};
use crate::Result;

/// One timed edit
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Pause after the previous step
    pub delay: Duration,
    pub edit: WorldEdit,
}

/// Ordered list of timed edits
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    steps: VecDeque<Step>,
}

impl Sequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequence of edits applied all at once
    pub fn immediate(edits: impl IntoIterator<Item = WorldEdit>) -> Self {
        let mut sequence = Self::new();
        for edit in edits {
            sequence = sequence.then(edit);
        }
        sequence
    }

    /// Append an edit with no pause
    pub fn then(self, edit: WorldEdit) -> Self {
        self.after(Duration::ZERO, edit)
    }

    /// Append an edit applied `delay` after the previous one
    pub fn after(mut self, delay: Duration, edit: WorldEdit) -> Self {
        self.steps.push_back(Step { delay, edit });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Sum of all pauses
    pub fn total_delay(&self) -> Duration {
        self.steps.iter().map(|s| s.delay).sum()
    }

    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter()
    }

    /// Pause before the next step, if any
    pub fn next_delay(&self) -> Option<Duration> {
        self.steps.front().map(|s| s.delay)
    }

    /// Take the next step
    pub fn pop(&mut self) -> Option<Step> {
        self.steps.pop_front()
    }

    /// Play the whole sequence on the calling thread, sleeping between steps
    ///
    /// Returns the number of edits applied.
    pub fn run_blocking(mut self, world: &mut dyn WorldConnection) -> Result<usize> {
        let mut applied = 0;
        while let Some(step) = self.pop() {
            if !step.delay.is_zero() {
                std::thread::sleep(step.delay);
            }
            step.edit.apply(world)?;
            applied += 1;
        }
        Ok(applied)
    }
}
