//! One playable session wiring the components together
//!
//! The host's game loop owns a [`Session`]: it routes input to the pause
//! FSM, forwards physics collision callbacks to the ball controller, steps
//! the fixed clock, and drains events/sounds once per frame. A scene reload
//! is a [`Session::reset`] — the whole simulation is rebuilt from its seed
//! and tuning, nothing survives.

use super::ball::BallController;
use super::pause::{AdDisplay, PauseFsm, PauseInput, SimClock};
use super::schedule::{DeferredKind, Scheduler};
use super::scroller::BackgroundScroller;
use super::state::{Ball, CollisionEvent, GameEvent, MatchState};
use crate::audio::AudioBus;
use crate::tuning::Tuning;

#[derive(Debug)]
pub struct Session {
    pub clock: SimClock,
    pub match_state: MatchState,
    pub ball: Ball,
    pub ball_ctl: BallController,
    pub pause: PauseFsm,
    pub scroller: BackgroundScroller,
    pub scheduler: Scheduler,
    pub audio: AudioBus,
    events: Vec<GameEvent>,
    seed: u64,
    tuning: Tuning,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let match_state = MatchState::new(seed);
        let ball_ctl = BallController::new(tuning.ball.clone(), match_state.rng_state.to_rng());
        let ball = ball_ctl.spawn_ball();
        log::info!("session started, seed {}", seed);
        Self {
            clock: SimClock::new(),
            match_state,
            ball,
            ball_ctl,
            pause: PauseFsm::new().with_overlay(),
            scroller: BackgroundScroller::new(tuning.scroll.clone()),
            scheduler: Scheduler::new(),
            audio: AudioBus::new(),
            events: Vec::new(),
            seed,
            tuning,
        }
    }

    /// One fixed simulation step. Does nothing while the clock is frozen,
    /// like a physics engine with a zero timescale.
    pub fn fixed_step(&mut self) {
        if self.clock.is_frozen() {
            return;
        }
        self.ball_ctl.fixed_step(&mut self.ball);
        for kind in self.scheduler.advance() {
            self.events.push(match kind {
                DeferredKind::BallLanded => GameEvent::BallLanded,
                DeferredKind::FaceReaction => GameEvent::FaceReaction,
                DeferredKind::ResetHoldElapsed => GameEvent::ResetHoldElapsed,
            });
        }
    }

    /// One visual frame (cosmetics only). `dt` is the raw wall-clock delta;
    /// the clock's timescale is applied here.
    pub fn frame(&mut self, dt: f32) {
        self.scroller.frame(self.clock.scaled(dt));
    }

    /// Route one input event to the pause FSM
    pub fn handle_input(&mut self, input: PauseInput, ads: Option<&mut dyn AdDisplay>) {
        self.pause
            .handle(input, &mut self.clock, &mut self.audio, ads, &mut self.events);
    }

    /// Physics collision callback from the host
    pub fn on_collision(&mut self, collision: &CollisionEvent) {
        self.ball_ctl.on_collision(
            &self.ball,
            collision,
            &mut self.match_state,
            &mut self.scheduler,
            &mut self.audio,
            &mut self.events,
        );
    }

    /// Park the ball at its spawn point after a goal (called by the game
    /// controller when it handles a `BallLanded` event)
    pub fn begin_ball_reset(&mut self) {
        self.ball_ctl.begin_reset(&mut self.ball, &mut self.scheduler);
    }

    /// Events emitted since the last drain, in emission order
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Full subsystem re-initialization: the scene-reload analogue
    pub fn reset(&mut self) {
        log::info!("session reset");
        *self = Session::new(self.seed, self.tuning.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{SceneRequest, SurfaceTag};
    use glam::Vec3;

    fn session() -> Session {
        Session::new(4242, Tuning::default())
    }

    #[test]
    fn test_ground_goal_flow_end_to_end() {
        let mut s = session();
        s.on_collision(&CollisionEvent {
            tag: SurfaceTag::Field,
            contact: Vec3::new(0.5, -1.8, 0.0),
        });

        // Collision effects are immediate, the fall request is deferred
        let events = s.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], GameEvent::HitEffect { .. }));

        s.fixed_step();
        assert_eq!(s.drain_events(), vec![GameEvent::BallLanded]);

        // The game controller reacts by parking the ball
        s.begin_ball_reset();
        assert!(s.ball.kinematic);

        // Hold elapses after 1s of fixed steps; ball stays kinematic
        let mut elapsed = Vec::new();
        for _ in 0..50 {
            s.fixed_step();
            elapsed.extend(s.drain_events());
        }
        assert_eq!(elapsed, vec![GameEvent::ResetHoldElapsed]);
        assert!(s.ball.kinematic);
    }

    #[test]
    fn test_edge_step_adds_impulse_to_prior_velocity() {
        let mut s = session();
        s.ball.pos = Vec3::new(3.0, 0.0, 0.0);
        s.ball.vel = Vec3::new(2.0, 1.0, 0.0);
        s.fixed_step();
        assert_eq!(s.ball.vel, Vec3::new(-1.0, 1.0, 0.0));
    }

    #[test]
    fn test_frozen_clock_stops_stepping() {
        let mut s = session();
        s.ball.pos = Vec3::new(3.0, 0.0, 0.0);
        s.handle_input(PauseInput::PauseKeyDown, None);
        s.fixed_step();
        // No escape impulse applied while paused
        assert_eq!(s.ball.vel, Vec3::ZERO);

        s.handle_input(PauseInput::PauseKeyDown, None);
        s.fixed_step();
        assert_eq!(s.ball.vel, Vec3::new(-3.0, 0.0, 0.0));
    }

    #[test]
    fn test_pause_then_restart_tap_reloads_once() {
        let mut s = session();
        s.handle_input(PauseInput::PauseKeyDown, None);
        s.handle_input(PauseInput::Tap("Btn-Restart"), None);

        assert!(!s.pause.is_paused());
        let reloads: Vec<_> = s
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::Scene(SceneRequest::ReloadCurrent))
            .collect();
        assert_eq!(reloads.len(), 1);

        // Host reacts with a full reset
        s.match_state.player_score = 9;
        s.reset();
        assert_eq!(s.match_state.player_score, 0);
        assert_eq!(s.ball.pos, s.ball.start_pos);
    }

    #[test]
    fn test_head_bounces_accumulate_score() {
        let mut s = session();
        for _ in 0..3 {
            s.on_collision(&CollisionEvent {
                tag: SurfaceTag::PlayerHead,
                contact: s.ball.pos,
            });
            s.fixed_step();
        }
        assert_eq!(s.match_state.player_score, 3);
        let reactions = s
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::FaceReaction)
            .count();
        assert_eq!(reactions, 3);
    }

    #[test]
    fn test_pending_delay_stretches_across_pause() {
        let mut s = session();
        s.begin_ball_reset();
        for _ in 0..25 {
            s.fixed_step();
        }
        s.handle_input(PauseInput::PauseKeyDown, None);
        for _ in 0..100 {
            s.fixed_step(); // frozen, no progress
        }
        assert!(s.drain_events().is_empty());

        s.handle_input(PauseInput::PauseKeyDown, None);
        let mut elapsed = Vec::new();
        for _ in 0..25 {
            s.fixed_step();
            elapsed.extend(s.drain_events());
        }
        assert_eq!(elapsed, vec![GameEvent::ResetHoldElapsed]);
    }

    #[test]
    fn test_frame_scrolls_only_while_playing() {
        let mut s = session();
        s.frame(1.0);
        let offset = s.scroller.offset();
        assert!((offset - 0.04).abs() < 1e-6);

        s.handle_input(PauseInput::PauseKeyDown, None);
        s.frame(1.0);
        assert_eq!(s.scroller.offset(), offset);
    }
}
