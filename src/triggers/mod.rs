//! Trigger system
//!
//! A trigger pairs a [`TriggerCondition`] (proximity or tile match) with an
//! action that returns a [`Sequence`] of timed world edits. The
//! [`Scheduler`] plays those sequences back across ticks.

mod evaluator;
mod scheduler;
mod sequence;
mod types;

pub use evaluator::TriggerEvaluator;
pub use scheduler::Scheduler;
pub use sequence::{Sequence, Step};
pub use types::{Trigger, TriggerCondition, TriggerId};
