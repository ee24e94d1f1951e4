//! Trigger evaluation engine

use super::{Trigger, TriggerCondition};
use crate::core::WorldState;

/// Evaluates trigger conditions against the current world state
pub struct TriggerEvaluator<'a> {
    state: &'a WorldState,
}

impl<'a> TriggerEvaluator<'a> {
    /// Create a new evaluator for the given state
    pub fn new(state: &'a WorldState) -> Self {
        Self { state }
    }

    /// Evaluate a single trigger
    pub fn evaluate(&self, trigger: &dyn Trigger) -> bool {
        self.evaluate_condition(trigger.condition())
    }

    /// Evaluate a single condition
    ///
    /// A disconnected state never satisfies any condition.
    pub fn evaluate_condition(&self, condition: &TriggerCondition) -> bool {
        if !self.state.connected {
            return false;
        }

        match condition {
            TriggerCondition::Proximity { anchor, radius } => {
                anchor.distance_to(&self.state.pos) < *radius
            }

            TriggerCondition::TileMatch { tile } => *tile == self.state.tile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triggers::Sequence;
    use crate::world::{TilePos, Vec3};

    struct MockTrigger {
        condition: TriggerCondition,
    }

    impl Trigger for MockTrigger {
        fn name(&self) -> &str {
            "mock"
        }

        fn condition(&self) -> &TriggerCondition {
            &self.condition
        }

        fn action(&mut self, _state: &WorldState) -> Sequence {
            Sequence::new()
        }
    }

    #[test]
    fn test_proximity_inside_radius() {
        let state = WorldState::at(Vec3::new(10.0, 64.0, 11.0));
        let evaluator = TriggerEvaluator::new(&state);

        assert!(evaluator.evaluate_condition(&TriggerCondition::proximity(
            Vec3::new(10.0, 64.0, 10.0),
            2.0
        )));
        assert!(!evaluator.evaluate_condition(&TriggerCondition::proximity(
            Vec3::new(100.0, 64.0, 100.0),
            2.0
        )));
    }

    #[test]
    fn test_proximity_boundary_is_exclusive() {
        let state = WorldState::at(Vec3::new(0.0, 0.0, 2.0));
        let evaluator = TriggerEvaluator::new(&state);

        let condition = TriggerCondition::proximity(Vec3::new(0.0, 0.0, 0.0), 2.0);
        assert!(!evaluator.evaluate_condition(&condition));

        let state = WorldState::at(Vec3::new(0.0, 0.0, 1.999));
        assert!(TriggerEvaluator::new(&state).evaluate_condition(&condition));
    }

    #[test]
    fn test_tile_match_requires_all_axes() {
        let state = WorldState::at(Vec3::new(5.4, 71.0, 5.9));
        let evaluator = TriggerEvaluator::new(&state);

        assert!(evaluator.evaluate_condition(&TriggerCondition::TileMatch {
            tile: TilePos::new(5, 71, 5)
        }));
        assert!(!evaluator.evaluate_condition(&TriggerCondition::TileMatch {
            tile: TilePos::new(5, 70, 5)
        }));
        assert!(!evaluator.evaluate_condition(&TriggerCondition::TileMatch {
            tile: TilePos::new(6, 71, 5)
        }));
    }

    #[test]
    fn test_disconnected_state_never_matches() {
        let mut state = WorldState::at(Vec3::new(5.0, 71.0, 5.0));
        state.connected = false;
        let evaluator = TriggerEvaluator::new(&state);

        let trigger = MockTrigger {
            condition: TriggerCondition::TileMatch {
                tile: TilePos::new(5, 71, 5),
            },
        };
        assert!(!evaluator.evaluate(&trigger));
    }
}
