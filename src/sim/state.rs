//! Game state and core simulation types
//!
//! Everything that must survive a serialize/restore for determinism lives
//! here. The match context is an explicit shared object handed to whichever
//! component needs it; nothing reads it through globals.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Tag of a body the ball can collide with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceTag {
    /// The field/ground plane
    Field,
    /// A player's head
    PlayerHead,
}

impl SurfaceTag {
    /// Parse a host collision tag. Unknown tags are not collisions we care
    /// about and map to `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Field" => Some(SurfaceTag::Field),
            "PlayerHead" => Some(SurfaceTag::PlayerHead),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceTag::Field => "Field",
            SurfaceTag::PlayerHead => "PlayerHead",
        }
    }
}

/// A single collision callback from the host physics engine.
/// Consumed once; never stored.
#[derive(Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub tag: SurfaceTag,
    /// Contact point in world space
    pub contact: Vec3,
}

/// The ball body as the core sees it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Excluded from force/collision-driven motion while true
    pub kinematic: bool,
    /// Physics body put to sleep (velocity zeroed, engine stops integrating)
    pub asleep: bool,
    /// Spawn point; the ball returns here after every goal
    pub start_pos: Vec3,
}

impl Ball {
    pub fn new(start_pos: Vec3) -> Self {
        Self {
            pos: start_pos,
            vel: Vec3::ZERO,
            kinematic: false,
            asleep: false,
            start_pos,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Zero velocity and stop integrating, like putting a rigidbody to sleep
    pub fn sleep(&mut self) {
        self.vel = Vec3::ZERO;
        self.asleep = true;
    }

    pub fn wake(&mut self) {
        self.asleep = false;
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Shared match context: the score/finished pair every component used to
/// reach through a global for. Injected explicitly instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Once set, scoring and goal handling stop
    pub game_is_finished: bool,
    /// Head-bounce counter for the player
    pub player_score: u32,
    /// Run seed for reproducibility
    pub rng_state: RngState,
}

impl MatchState {
    pub fn new(seed: u64) -> Self {
        Self {
            game_is_finished: false,
            player_score: 0,
            rng_state: RngState::new(seed),
        }
    }
}

/// Scene transitions the core can request from the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneRequest {
    /// Reload the current scene (full state reset)
    ReloadCurrent,
    /// Load a scene by name
    Load(String),
}

/// Events emitted by the simulation for the host to act on.
/// Drained once per frame; order is emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// Spawn a transient contact visual at this world position
    HitEffect { pos: Vec3 },
    /// Deferred goal handling request for the external game controller
    BallLanded,
    /// Deferred face-expression request for the struck player
    FaceReaction,
    /// Post-goal reset hold finished. The ball stays kinematic; un-freezing
    /// is the game controller's call.
    ResetHoldElapsed,
    /// Ask the host to switch scenes
    Scene(SceneRequest),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_tag_literals() {
        assert_eq!(SurfaceTag::from_tag("Field"), Some(SurfaceTag::Field));
        assert_eq!(
            SurfaceTag::from_tag("PlayerHead"),
            Some(SurfaceTag::PlayerHead)
        );
        assert_eq!(SurfaceTag::from_tag("Wall"), None);
        assert_eq!(SurfaceTag::Field.as_str(), "Field");
    }

    #[test]
    fn test_ball_sleep_zeroes_velocity() {
        let mut ball = Ball::new(Vec3::new(0.0, 2.0, 0.0));
        ball.vel = Vec3::new(4.0, -1.0, 0.0);
        ball.sleep();
        assert_eq!(ball.vel, Vec3::ZERO);
        assert!(ball.asleep);
        ball.wake();
        assert!(!ball.asleep);
    }

    #[test]
    fn test_match_state_serde_round_trip() {
        let mut m = MatchState::new(7);
        m.player_score = 3;
        let json = serde_json::to_string(&m).unwrap();
        let back: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.player_score, 3);
        assert!(!back.game_is_finished);
        assert_eq!(back.rng_state.seed, 7);
    }
}
