//! Invisible wall that shoves the player back the way they came

use std::time::Duration;

use crate::core::WorldState;
use crate::triggers::{Sequence, Trigger, TriggerCondition};
use crate::world::{Vec3, WorldEdit};

/// Repeatable proximity trap around an anchor
///
/// While the player is in the outer part of the zone their position is
/// remembered. Once they get within a third of the radius they are walked
/// back to the remembered position over a fixed number of teleports.
#[derive(Debug, Clone)]
pub struct PushBackTrap {
    name: String,
    anchor: Vec3,
    radius: f64,
    condition: TriggerCondition,
    retreat_to: Option<Vec3>,
    steps: u32,
    interval: Duration,
}

impl PushBackTrap {
    pub const STEPS: u32 = 20;
    pub const INTERVAL: Duration = Duration::from_millis(100);

    pub fn new(anchor: Vec3, radius: f64) -> Self {
        Self {
            name: "push_back".to_string(),
            anchor,
            radius,
            condition: TriggerCondition::proximity(anchor, radius),
            retreat_to: None,
            steps: Self::STEPS,
            interval: Self::INTERVAL,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Last remembered position outside the inner zone
    pub fn retreat_to(&self) -> Option<Vec3> {
        self.retreat_to
    }

    fn inner_radius(&self) -> f64 {
        self.radius / 3.0
    }
}

impl Trigger for PushBackTrap {
    fn name(&self) -> &str {
        &self.name
    }

    fn condition(&self) -> &TriggerCondition {
        &self.condition
    }

    fn one_shot(&self) -> bool {
        false
    }

    fn action(&mut self, state: &WorldState) -> Sequence {
        if self.anchor.distance_to(&state.pos) > self.inner_radius() {
            self.retreat_to = Some(state.pos);
            return Sequence::new();
        }

        let Some(target) = self.retreat_to else {
            return Sequence::new();
        };

        let displacement = target - state.pos;
        let mut sequence = Sequence::new();
        for i in 1..=self.steps {
            let delay = if i == 1 { Duration::ZERO } else { self.interval };
            let pos = state.pos + displacement * (i as f64 / self.steps as f64);
            sequence = sequence.after(delay, WorldEdit::teleport(pos));
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trap() -> PushBackTrap {
        PushBackTrap::new(Vec3::new(0.0, 64.0, 0.0), 6.0)
    }

    #[test]
    fn test_outer_zone_records_position() {
        let mut trap = trap();
        let sequence = trap.action(&WorldState::at(Vec3::new(0.0, 64.0, 5.0)));
        assert!(sequence.is_empty());
        assert_eq!(trap.retreat_to(), Some(Vec3::new(0.0, 64.0, 5.0)));
        assert!(!trap.one_shot());
    }

    #[test]
    fn test_inner_zone_without_history_does_nothing() {
        let mut trap = trap();
        assert!(trap.action(&WorldState::at(Vec3::new(0.0, 64.0, 1.0))).is_empty());
    }

    #[test]
    fn test_inner_zone_reverses_displacement() {
        let mut trap = trap();
        trap.action(&WorldState::at(Vec3::new(0.0, 64.0, 5.0)));
        let sequence = trap.action(&WorldState::at(Vec3::new(0.0, 64.0, 1.0)));

        assert_eq!(sequence.len(), 20);
        assert_eq!(sequence.total_delay(), Duration::from_millis(1900));

        let teleports: Vec<Vec3> = sequence
            .steps()
            .map(|step| match step.edit {
                WorldEdit::SetPlayerPos(pos) => pos,
                ref other => panic!("unexpected edit {:?}", other),
            })
            .collect();
        assert!((teleports[0].z - 1.2).abs() < 1e-9);
        assert_eq!(teleports.last(), Some(&Vec3::new(0.0, 64.0, 5.0)));
        assert!(teleports.windows(2).all(|w| w[1].z > w[0].z));
    }

    #[test]
    fn test_threshold_uses_own_radius() {
        let mut small = PushBackTrap::new(Vec3::default(), 3.0);
        // 1.5 is outside radius / 3 for this trap
        small.action(&WorldState::at(Vec3::new(1.5, 0.0, 0.0)));
        assert_eq!(small.retreat_to(), Some(Vec3::new(1.5, 0.0, 0.0)));
    }
}
