//! Data-driven game balance
//!
//! Every gameplay constant the designers touch lives here, serializable so a
//! build can ship a tweaked JSON without recompiling. Defaults match the
//! shipped mobile tuning.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Ball physics tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallTuning {
    /// Speed cap enforced every fixed step (units/s)
    pub max_speed: f32,
    /// Horizontal edge of the play field
    pub edge_x: f32,
    /// X impulse used to kick the ball off an edge
    pub escape_impulse: f32,
    /// Where the ball spawns and returns to after a goal
    pub start_pos: Vec3,
    /// Freeze duration of the post-goal reset hold (seconds)
    pub reset_hold_secs: f32,
    /// Size of the head-hit sound pool (0 disables head-hit audio)
    pub head_hit_sounds: u8,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            max_speed: BALL_MAX_SPEED,
            edge_x: FIELD_EDGE_X,
            escape_impulse: ESCAPE_IMPULSE,
            start_pos: Vec3::new(0.0, 2.0, 0.0),
            reset_hold_secs: RESET_HOLD_SECS,
            head_hit_sounds: HEAD_HIT_SOUNDS,
        }
    }
}

impl BallTuning {
    /// Reset hold expressed in fixed simulation ticks
    pub fn reset_hold_ticks(&self) -> u32 {
        (self.reset_hold_secs / SIM_DT).round() as u32
    }
}

/// Background scroller tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollTuning {
    /// Base scroll rate per second
    pub damper: f32,
    /// Per-scene speed coefficient
    pub coef: f32,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            damper: SCROLL_DAMPER,
            coef: 1.0,
        }
    }
}

/// Top-level tuning bundle
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tuning {
    pub ball: BallTuning,
    pub scroll: ScrollTuning,
}

impl Tuning {
    /// Parse a tuning bundle from JSON (missing files fall back to defaults
    /// at the call site; a malformed file is a content error worth surfacing)
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
