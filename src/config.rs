//! Configuration types for the trigger loop
//!
//! Trap layouts are loaded from TOML (or JSON) files and turned into
//! installed triggers by [`TriggerLoop::install_layout`](crate::TriggerLoop::install_layout).

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::catalog::{
    Axis, FallTrap, FallingHazard, FlowHazardBlocker, Message, PushBackTrap, RisingWall, TimedPit,
};
use crate::triggers::Trigger;
use crate::world::{Block, TilePos, Vec3};
use crate::{Result, TriggerError};

/// Settings for the polling loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Pause between ticks
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Play effects inline, sleeping between steps, instead of scheduling them
    #[serde(default)]
    pub blocking_actions: bool,
}

fn default_tick_interval_ms() -> u64 {
    100
}

impl LoopConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            blocking_actions: false,
        }
    }
}

/// One trap entry in a layout file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TrapSpec {
    Message {
        at: [f64; 3],
        text: String,
        #[serde(default = "default_message_radius")]
        radius: f64,
        #[serde(default = "default_true")]
        one_shot: bool,
        #[serde(default)]
        name: Option<String>,
    },
    Fall {
        at: [i32; 3],
        depth: i32,
        #[serde(default)]
        marker: Option<Block>,
        #[serde(default)]
        name: Option<String>,
    },
    FallIntoPool {
        at: [i32; 3],
        #[serde(default)]
        name: Option<String>,
    },
    FallIntoHazard {
        at: [i32; 3],
        #[serde(default)]
        name: Option<String>,
    },
    PushBack {
        at: [f64; 3],
        radius: f64,
        #[serde(default)]
        name: Option<String>,
    },
    FlowHazard {
        at: [i32; 3],
        axis: Axis,
        #[serde(default)]
        name: Option<String>,
    },
    RisingWall {
        at: [i32; 3],
        axis: Axis,
        #[serde(default)]
        name: Option<String>,
    },
    FallingHazard {
        at: [i32; 3],
        #[serde(default)]
        name: Option<String>,
    },
    TimedPit {
        at: [i32; 3],
        axis: Axis,
        #[serde(default)]
        name: Option<String>,
    },
}

fn default_message_radius() -> f64 {
    Message::DEFAULT_RADIUS
}

fn default_true() -> bool {
    true
}

fn vec3([x, y, z]: [f64; 3]) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Largest absolute block coordinate accepted for a trap
const WORLD_LIMIT: i32 = 30_000_000;

fn tile(at: [i32; 3]) -> Result<TilePos> {
    if at.iter().all(|c| (-WORLD_LIMIT..=WORLD_LIMIT).contains(c)) {
        Ok(TilePos::from(at))
    } else {
        Err(TriggerError::InvalidLayout(format!(
            "trap position {:?} is outside the world",
            at
        )))
    }
}

fn positive_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(TriggerError::InvalidLayout(format!(
            "radius must be positive, got {}",
            radius
        )))
    }
}

impl TrapSpec {
    /// Build the trigger this entry describes
    ///
    /// `floors` is the number of maze levels, used for pool shafts.
    pub fn build(&self, floors: u32) -> Result<Box<dyn Trigger>> {
        let trigger: Box<dyn Trigger> = match self {
            TrapSpec::Message {
                at,
                text,
                radius,
                one_shot,
                name,
            } => {
                let mut message =
                    Message::new(vec3(*at), text.clone()).with_radius(positive_radius(*radius)?);
                if !one_shot {
                    message = message.repeatable();
                }
                if let Some(name) = name {
                    message = message.with_name(name.clone());
                }
                Box::new(message)
            }

            TrapSpec::Fall {
                at,
                depth,
                marker,
                name,
            } => {
                if *depth < 2 {
                    return Err(TriggerError::InvalidLayout(format!(
                        "fall depth must be at least 2, got {}",
                        depth
                    )));
                }
                let mut trap = FallTrap::new(tile(*at)?, *depth).checked()?;
                if let Some(block) = marker {
                    trap = trap.with_marker_block(*block);
                }
                if let Some(name) = name {
                    trap = trap.with_name(name.clone());
                }
                Box::new(trap)
            }

            TrapSpec::FallIntoPool { at, name } => {
                let trap = FallTrap::into_pool(tile(*at)?, floors)?;
                Box::new(match name {
                    Some(name) => trap.with_name(name.clone()),
                    None => trap,
                })
            }

            TrapSpec::FallIntoHazard { at, name } => {
                let trap = FallTrap::into_hazard(tile(*at)?);
                Box::new(match name {
                    Some(name) => trap.with_name(name.clone()),
                    None => trap,
                })
            }

            TrapSpec::PushBack { at, radius, name } => {
                let trap = PushBackTrap::new(vec3(*at), positive_radius(*radius)?);
                Box::new(match name {
                    Some(name) => trap.with_name(name.clone()),
                    None => trap,
                })
            }

            TrapSpec::FlowHazard { at, axis, name } => {
                let trap = FlowHazardBlocker::new(tile(*at)?, *axis);
                Box::new(match name {
                    Some(name) => trap.with_name(name.clone()),
                    None => trap,
                })
            }

            TrapSpec::RisingWall { at, axis, name } => {
                let trap = RisingWall::new(tile(*at)?, *axis);
                Box::new(match name {
                    Some(name) => trap.with_name(name.clone()),
                    None => trap,
                })
            }

            TrapSpec::FallingHazard { at, name } => {
                let trap = FallingHazard::new(tile(*at)?);
                Box::new(match name {
                    Some(name) => trap.with_name(name.clone()),
                    None => trap,
                })
            }

            TrapSpec::TimedPit { at, axis, name } => {
                let trap = TimedPit::new(tile(*at)?, *axis);
                Box::new(match name {
                    Some(name) => trap.with_name(name.clone()),
                    None => trap,
                })
            }
        };
        Ok(trigger)
    }
}

/// A complete maze setup: loop settings plus every trap to install
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapLayout {
    /// Number of maze levels stacked below the entrance
    #[serde(default = "default_floors")]
    pub floors: u32,
    #[serde(default, rename = "loop")]
    pub loop_config: LoopConfig,
    #[serde(default, rename = "trap")]
    pub traps: Vec<TrapSpec>,
}

fn default_floors() -> u32 {
    1
}

impl Default for TrapLayout {
    fn default() -> Self {
        Self {
            floors: default_floors(),
            loop_config: LoopConfig::default(),
            traps: Vec::new(),
        }
    }
}

impl TrapLayout {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let layout: TrapLayout = toml::from_str(source)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let layout: TrapLayout = serde_json::from_str(source)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load a layout file; `.json` files are read as JSON, anything else as TOML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        log::info!("Loading trap layout from {}", path.display());

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_str(&source)
        } else {
            Self::from_toml_str(&source)
        }
    }

    fn validate(&self) -> Result<()> {
        if self.floors == 0 {
            return Err(TriggerError::InvalidLayout(
                "floors must be at least 1".to_string(),
            ));
        }
        if FallTrap::pool_depth(self.floors).is_none() {
            return Err(TriggerError::InvalidLayout(format!(
                "{} floors is too deep for a pool shaft",
                self.floors
            )));
        }
        Ok(())
    }

    /// Build every trap in file order
    pub fn build(&self) -> Result<Vec<Box<dyn Trigger>>> {
        self.traps.iter().map(|spec| spec.build(self.floors)).collect()
    }
}
