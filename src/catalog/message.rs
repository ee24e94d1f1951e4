//! Chat messages shown when the player comes close

use crate::core::WorldState;
use crate::triggers::{Sequence, Trigger, TriggerCondition};
use crate::world::{Vec3, WorldEdit};

/// Posts a line to world chat when the avatar gets within range
#[derive(Debug, Clone)]
pub struct Message {
    name: String,
    text: String,
    condition: TriggerCondition,
    one_shot: bool,
}

impl Message {
    pub const DEFAULT_RADIUS: f64 = 2.0;

    pub fn new(anchor: Vec3, text: impl Into<String>) -> Self {
        Self {
            name: "message".to_string(),
            text: text.into(),
            condition: TriggerCondition::proximity(anchor, Self::DEFAULT_RADIUS),
            one_shot: true,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        if let TriggerCondition::Proximity { anchor, .. } = self.condition {
            self.condition = TriggerCondition::proximity(anchor, radius);
        }
        self
    }

    /// Keep posting on every tick the avatar is in range
    pub fn repeatable(mut self) -> Self {
        self.one_shot = false;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Trigger for Message {
    fn name(&self) -> &str {
        &self.name
    }

    fn condition(&self) -> &TriggerCondition {
        &self.condition
    }

    fn one_shot(&self) -> bool {
        self.one_shot
    }

    fn action(&mut self, _state: &WorldState) -> Sequence {
        Sequence::new().then(WorldEdit::chat(self.text.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_defaults() {
        let message = Message::new(Vec3::new(10.0, 64.0, 10.0), "Hello");
        assert!(message.one_shot());
        assert!(message.setup().is_empty());
        assert_eq!(
            message.condition(),
            &TriggerCondition::proximity(Vec3::new(10.0, 64.0, 10.0), 2.0)
        );
    }

    #[test]
    fn test_message_action_posts_text() {
        let mut message = Message::new(Vec3::default(), "Find the exit").with_radius(5.0);
        let sequence = message.action(&WorldState::at(Vec3::default()));
        assert_eq!(sequence, Sequence::new().then(WorldEdit::chat("Find the exit")));
        assert_eq!(
            message.condition(),
            &TriggerCondition::proximity(Vec3::default(), 5.0)
        );
    }
}
