//! Head Ball - headless core for a head-soccer arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, pause FSM, scroller)
//! - `audio`: Sound effect queue consumed by the host mixer
//! - `tuning`: Data-driven game balance
//!
//! Rendering, raycast wiring, ad networks and scene loading live in the host;
//! this crate only emits events and mutates simulation state.

pub mod audio;
pub mod sim;
pub mod tuning;

pub use audio::{AudioBus, SoundEffect};
pub use tuning::{BallTuning, ScrollTuning, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (50 Hz, matches the host physics step)
    pub const SIM_DT: f32 = 0.02;

    /// Ball never moves faster than this (units/s)
    pub const BALL_MAX_SPEED: f32 = 10.0;
    /// Horizontal play-field edge; beyond this the ball gets kicked back
    pub const FIELD_EDGE_X: f32 = 2.5;
    /// Instantaneous X impulse applied while resting against an edge
    pub const ESCAPE_IMPULSE: f32 = 3.0;
    /// How long the ball stays frozen at its starting spot after a goal
    pub const RESET_HOLD_SECS: f32 = 1.0;

    /// Shadow sits at this height below the ball
    pub const SHADOW_HEIGHT: f32 = -1.8;
    pub const SHADOW_DEPTH: f32 = 0.1;
    pub const SHADOW_SCALE: [f32; 3] = [1.5, 0.75, 0.001];

    /// Hit effects spawn slightly below and in front of the ball
    pub const HIT_EFFECT_OFFSET: [f32; 3] = [0.0, -0.4, -1.0];

    /// Number of head-hit sound variants in the default pool
    pub const HEAD_HIT_SOUNDS: u8 = 3;

    /// Background scroll rate per second at coefficient 1.0
    pub const SCROLL_DAMPER: f32 = 0.04;
}
