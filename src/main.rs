//! Head Ball entry point
//!
//! Headless demo: drives one scripted session through a bounce, a goal, a
//! pause/unpause cycle and a restart, logging what the host would render.

use glam::Vec3;

use head_ball::consts::SIM_DT;
use head_ball::sim::{
    AdDisplay, CollisionEvent, GameEvent, PauseInput, Session, SurfaceTag,
};
use head_ball::Tuning;

/// Stand-in ad collaborator that just logs the request
struct LoggingAds;

impl AdDisplay for LoggingAds {
    fn show_interstitial(&mut self) {
        log::info!("[ads] interstitial requested");
    }
}

fn pump(session: &mut Session, steps: u32) {
    for _ in 0..steps {
        session.fixed_step();
        session.frame(SIM_DT);
        for event in session.drain_events() {
            match event {
                GameEvent::HitEffect { pos } => log::info!("[fx] hit effect at {}", pos),
                GameEvent::BallLanded => {
                    log::info!("[gc] ball landed, goal against the player");
                    session.begin_ball_reset();
                }
                GameEvent::FaceReaction => log::info!("[player] ouch face"),
                GameEvent::ResetHoldElapsed => log::info!("[gc] reset hold over"),
                GameEvent::Scene(req) => log::info!("[scene] request: {:?}", req),
            }
        }
        for sfx in session.audio.drain() {
            log::info!("[sfx] {:?} at volume {}", sfx, session.audio.volume());
        }
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let mut session = Session::new(seed, Tuning::default());
    let mut ads = LoggingAds;

    // Kick the ball around for a moment
    session.ball.vel = Vec3::new(14.0, 6.0, 0.0); // over the cap, gets rescaled
    pump(&mut session, 10);
    log::info!("ball speed after clamp: {}", session.ball.speed());

    // Header
    session.on_collision(&CollisionEvent {
        tag: SurfaceTag::PlayerHead,
        contact: session.ball.pos,
    });
    pump(&mut session, 5);
    log::info!("score: {}", session.match_state.player_score);

    // Ball hits the ground: goal sequence plus one second of reset hold
    session.on_collision(&CollisionEvent {
        tag: SurfaceTag::Field,
        contact: Vec3::new(session.ball.pos.x, -1.8, 0.0),
    });
    pump(&mut session, 60);

    // Pause (shows an interstitial), then resume
    session.handle_input(PauseInput::PauseKeyDown, Some(&mut ads));
    pump(&mut session, 5); // frozen
    session.handle_input(PauseInput::Tap("Btn-Resume"), None);
    pump(&mut session, 5);

    // Tap restart: reload request, then a fresh session
    session.handle_input(PauseInput::Tap("Btn-Restart"), None);
    pump(&mut session, 1);
    session.reset();
    log::info!(
        "after restart: score {}, scroll offset {}",
        session.match_state.player_score,
        session.scroller.offset()
    );
}
