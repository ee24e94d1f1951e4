//! Events emitted by the trigger loop

use std::time::Instant;

use crate::triggers::TriggerId;

/// Event emitted when a trigger's action runs
#[derive(Debug, Clone)]
pub struct TriggerEvent {
    /// Registry handle of the trigger
    pub trigger_id: TriggerId,
    /// Human-readable trigger name
    pub trigger_name: String,
    /// Tick on which the trigger fired
    pub tick: u64,
    /// Whether the trigger was removed after firing
    pub one_shot: bool,
    /// When the event occurred
    pub timestamp: Instant,
}

impl TriggerEvent {
    pub fn fired(
        trigger_id: TriggerId,
        trigger_name: impl Into<String>,
        tick: u64,
        one_shot: bool,
    ) -> Self {
        Self {
            trigger_id,
            trigger_name: trigger_name.into(),
            tick,
            one_shot,
            timestamp: Instant::now(),
        }
    }
}

/// Callback type for trigger events
pub type TriggerCallback = Box<dyn Fn(TriggerEvent) + Send + Sync>;

/// Event handler that can have multiple listeners
pub struct EventHandler {
    callbacks: Vec<TriggerCallback>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            callbacks: Vec::new(),
        }
    }

    /// Add a callback for trigger events
    pub fn on_fire(&mut self, callback: TriggerCallback) {
        self.callbacks.push(callback);
    }

    /// Emit an event to all listeners
    pub fn emit(&self, event: TriggerEvent) {
        for callback in &self.callbacks {
            callback(event.clone());
        }
    }

    pub fn has_listeners(&self) -> bool {
        !self.callbacks.is_empty()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
