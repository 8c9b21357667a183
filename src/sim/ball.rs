//! Ball physics controller
//!
//! Owns everything about the ball's status: velocity clamping, boundary
//! correction, collision classification, goal detection and the post-goal
//! reset hold. Position integration is the host physics engine's job; this
//! controller only adjusts velocity and emits effects.

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use super::schedule::{DeferredKind, Scheduler};
use super::state::{Ball, CollisionEvent, GameEvent, MatchState, SurfaceTag};
use crate::audio::{AudioBus, SoundEffect};
use crate::consts::{HIT_EFFECT_OFFSET, SHADOW_DEPTH, SHADOW_HEIGHT, SHADOW_SCALE};
use crate::tuning::BallTuning;

/// Cosmetic shadow that tracks the ball from below. Optional: scenes without
/// a shadow object simply never configure one.
#[derive(Debug, Clone, Default)]
pub struct Shadow {
    pub pos: Vec3,
    pub scale: Vec3,
}

/// Debug speed readout. Optional, present only in debug scenes.
#[derive(Debug, Clone, Default)]
pub struct SpeedReadout {
    pub text: String,
}

/// The main ball controller
#[derive(Debug)]
pub struct BallController {
    tuning: BallTuning,
    rng: Pcg32,
    /// Shadow follower, if the scene has one
    pub shadow: Option<Shadow>,
    /// Debug speed text, if the scene has one
    pub speed_readout: Option<SpeedReadout>,
}

impl BallController {
    pub fn new(tuning: BallTuning, rng: Pcg32) -> Self {
        Self {
            tuning,
            rng,
            shadow: None,
            speed_readout: None,
        }
    }

    /// Spawn the ball at its starting position
    pub fn spawn_ball(&self) -> Ball {
        Ball::new(self.tuning.start_pos)
    }

    /// Per-fixed-step contract: boundary escape, speed clamp, then the
    /// cosmetic followers. Skipped entirely while the ball is kinematic.
    pub fn fixed_step(&mut self, ball: &mut Ball) {
        if !ball.kinematic {
            self.escape_limits(ball);
            self.clamp_speed(ball);
        }
        self.follow_shadow(ball);
        if let Some(readout) = &mut self.speed_readout {
            readout.text = format!("Speed: {}", ball.speed());
        }
    }

    /// Never let the ball rest against the two ends of the field: past an
    /// edge it gets a fixed instantaneous impulse back toward the middle.
    fn escape_limits(&self, ball: &mut Ball) {
        if ball.pos.x <= -self.tuning.edge_x {
            ball.vel += Vec3::new(self.tuning.escape_impulse, 0.0, 0.0);
        }
        if ball.pos.x >= self.tuning.edge_x {
            ball.vel += Vec3::new(-self.tuning.escape_impulse, 0.0, 0.0);
        }
    }

    /// Rescale velocity to the cap, preserving direction. Never clamps
    /// component-wise.
    fn clamp_speed(&self, ball: &mut Ball) {
        let speed = ball.speed();
        if speed > self.tuning.max_speed {
            ball.vel = ball.vel / speed * self.tuning.max_speed;
        }
    }

    /// Keep the shadow directly below the ball at fixed height and scale
    fn follow_shadow(&mut self, ball: &Ball) {
        let Some(shadow) = &mut self.shadow else {
            return;
        };
        shadow.pos = Vec3::new(ball.pos.x, SHADOW_HEIGHT, SHADOW_DEPTH);
        shadow.scale = Vec3::from_array(SHADOW_SCALE);
    }

    /// Classify a collision callback from the host physics engine
    pub fn on_collision(
        &mut self,
        ball: &Ball,
        collision: &CollisionEvent,
        match_state: &mut MatchState,
        scheduler: &mut Scheduler,
        audio: &mut AudioBus,
        events: &mut Vec<GameEvent>,
    ) {
        match collision.tag {
            SurfaceTag::Field => {
                audio.play(SoundEffect::GroundImpact);
                events.push(self.hit_effect(ball));
                self.check_goal(match_state, scheduler);
            }
            SurfaceTag::PlayerHead => {
                // No more scoring once the match is over
                if match_state.game_is_finished {
                    return;
                }
                if self.tuning.head_hit_sounds > 0 {
                    let variant = self.rng.random_range(0..self.tuning.head_hit_sounds);
                    audio.play(SoundEffect::HeadHit(variant));
                }
                scheduler.schedule(DeferredKind::FaceReaction, 0);
                match_state.player_score += 1;
                events.push(self.hit_effect(ball));
            }
        }
    }

    /// Contact visual at the standard offset from the ball
    fn hit_effect(&self, ball: &Ball) -> GameEvent {
        GameEvent::HitEffect {
            pos: ball.pos + Vec3::from_array(HIT_EFFECT_OFFSET),
        }
    }

    /// Ball touched the ground: hand the fall sequence to the external game
    /// controller, unless the match is already over.
    fn check_goal(&self, match_state: &MatchState, scheduler: &mut Scheduler) {
        if match_state.game_is_finished {
            return;
        }
        log::info!("ball landed, requesting fall handling");
        scheduler.schedule(DeferredKind::BallLanded, 0);
    }

    /// Move the ball back to its starting position after a goal and freeze
    /// it for the hold duration. The ball stays kinematic when the hold
    /// elapses; un-freezing is the game controller's responsibility.
    pub fn begin_reset(&self, ball: &mut Ball, scheduler: &mut Scheduler) {
        ball.pos = ball.start_pos;
        ball.sleep();
        ball.kinematic = true;
        scheduler.schedule(DeferredKind::ResetHoldElapsed, self.tuning.reset_hold_ticks());
        log::info!("ball reset, holding for {}s", self.tuning.reset_hold_secs);
    }
}
