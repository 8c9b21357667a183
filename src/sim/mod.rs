//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Hosts integrate by stepping a [`Session`] and draining its events.

pub mod ball;
pub mod pause;
pub mod schedule;
pub mod scroller;
pub mod session;
pub mod state;

pub use ball::{BallController, Shadow, SpeedReadout};
pub use pause::{AdDisplay, Overlay, PauseFsm, PauseInput, PauseState, SimClock};
pub use schedule::{DeferredKind, Scheduler};
pub use scroller::BackgroundScroller;
pub use session::Session;
pub use state::{
    Ball, CollisionEvent, GameEvent, MatchState, RngState, SceneRequest, SurfaceTag,
};
