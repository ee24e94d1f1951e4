//! Main trigger loop

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use super::events::{EventHandler, TriggerCallback, TriggerEvent};
use super::registry::TriggerRegistry;
use super::state::WorldState;
use crate::config::{LoopConfig, TrapLayout};
use crate::triggers::{Scheduler, Trigger, TriggerId};
use crate::world::WorldConnection;
use crate::Result;

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    /// Dispatch was skipped because the world could not be read
    pub skipped: bool,
    /// Triggers whose action ran, in firing order
    pub fired: Vec<TriggerId>,
    /// World edits sent during the tick
    pub edits_applied: usize,
}

/// Polls the world and dispatches triggers
///
/// Owns the world connection, the trigger registry and the scheduler that
/// plays multi-step effects back across ticks.
pub struct TriggerLoop<W: WorldConnection> {
    world: W,
    registry: TriggerRegistry,
    state: WorldState,
    scheduler: Scheduler,
    events: Arc<Mutex<EventHandler>>,
    config: LoopConfig,
}

impl<W: WorldConnection> TriggerLoop<W> {
    pub fn new(world: W, config: LoopConfig) -> Self {
        Self {
            world,
            registry: TriggerRegistry::new(),
            state: WorldState::new(),
            scheduler: Scheduler::new(),
            events: Arc::new(Mutex::new(EventHandler::new())),
            config,
        }
    }

    /// Create a loop and install every trap of a layout
    pub fn from_layout(world: W, layout: &TrapLayout) -> Result<Self> {
        let mut trigger_loop = Self::new(world, layout.loop_config.clone());
        trigger_loop.install_layout(layout)?;
        Ok(trigger_loop)
    }

    /// Apply a trigger's one-time world setup and register it
    pub fn install(&mut self, trigger: Box<dyn Trigger>) -> Result<TriggerId> {
        for edit in trigger.setup() {
            edit.apply(&mut self.world)?;
        }
        let name = trigger.name().to_string();
        let id = self.registry.register(trigger);
        log::info!("Installed trigger '{}' ({})", name, id);
        Ok(id)
    }

    /// Install every trap of a layout in file order
    pub fn install_layout(&mut self, layout: &TrapLayout) -> Result<Vec<TriggerId>> {
        layout
            .build()?
            .into_iter()
            .map(|trigger| self.install(trigger))
            .collect()
    }

    /// Register a callback for trigger events
    pub fn on_fire(&self, callback: TriggerCallback) {
        self.events.lock().on_fire(callback);
    }

    /// Shared handle to the event handler, for adding listeners from elsewhere
    pub fn events(&self) -> Arc<Mutex<EventHandler>> {
        self.events.clone()
    }

    /// Run one tick now
    pub fn tick(&mut self) -> Result<TickReport> {
        self.tick_at(Instant::now())
    }

    /// Run one tick as if the current time were `now`
    ///
    /// A failed position refresh skips dispatch for this tick without error.
    /// Failed world edits are returned as errors.
    pub fn tick_at(&mut self, now: Instant) -> Result<TickReport> {
        self.state.tick += 1;
        let mut report = TickReport {
            tick: self.state.tick,
            ..Default::default()
        };

        if let Err(e) = self.state.refresh(&mut self.world) {
            log::warn!("Tick {}: could not read player position: {}", report.tick, e);
            report.skipped = true;
            return Ok(report);
        }

        report.edits_applied += self.scheduler.advance(now, &mut self.world)?;

        let scheduler = &self.scheduler;
        let fired = self
            .registry
            .dispatch(&self.state, |id| scheduler.is_busy(id));

        for fired in fired {
            log::info!("Trigger '{}' fired on tick {}", fired.name, report.tick);
            self.events.lock().emit(TriggerEvent::fired(
                fired.id,
                fired.name,
                report.tick,
                fired.one_shot,
            ));

            report.edits_applied += if self.config.blocking_actions {
                fired.sequence.run_blocking(&mut self.world)?
            } else {
                self.scheduler
                    .start(fired.id, fired.sequence, now, &mut self.world)?
            };
            report.fired.push(fired.id);
        }

        Ok(report)
    }

    /// Tick until `stop` is set
    pub fn run(&mut self, stop: &AtomicBool) -> Result<()> {
        log::info!(
            "Trigger loop started with {} trigger(s), tick every {:?}",
            self.registry.len(),
            self.config.tick_interval()
        );

        while !stop.load(Ordering::SeqCst) {
            let started = Instant::now();
            self.tick_at(started)?;

            let elapsed = started.elapsed();
            if let Some(remaining) = self.config.tick_interval().checked_sub(elapsed) {
                std::thread::sleep(remaining);
            }
        }

        log::info!("Trigger loop stopped after {} tick(s)", self.state.tick);
        Ok(())
    }

    pub fn state(&self) -> &WorldState {
        &self.state
    }

    pub fn registry(&self) -> &TriggerRegistry {
        &self.registry
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Number of effects still playing
    pub fn pending_effects(&self) -> usize {
        self.scheduler.len()
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Stop the loop and hand back the connection
    pub fn into_world(self) -> W {
        self.world
    }
}
