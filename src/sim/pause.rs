//! Pause state machine
//!
//! Two states, Playing and Paused, driven by debug keys and tap hit-tests on
//! named menu buttons. Pausing freezes the simulation clock, mutes the audio
//! bus, raises the overlay and asks the ad collaborator (if any) for an
//! interstitial; unpausing restores the exact pre-pause timescale.

use crate::audio::AudioBus;
use crate::consts::SIM_DT;
use crate::sim::state::{GameEvent, SceneRequest};

/// Simulation clock shared by physics and animation. `time_scale` of zero
/// freezes everything the host scales by it.
#[derive(Debug, Clone)]
pub struct SimClock {
    pub time_scale: f32,
    pub fixed_dt: f32,
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            time_scale: 1.0,
            fixed_dt: SIM_DT,
        }
    }

    pub fn is_frozen(&self) -> bool {
        self.time_scale == 0.0
    }

    /// Scale a wall-clock frame delta by the current timescale
    pub fn scaled(&self, dt: f32) -> f32 {
        dt * self.time_scale
    }
}

/// External ad collaborator: shows a full-screen interstitial at pause
/// boundaries. Scenes without ads simply pass `None`.
pub trait AdDisplay {
    fn show_interstitial(&mut self);
}

/// Pause overlay plane. Optional: scenes without one never configure it.
#[derive(Debug, Clone, Default)]
pub struct Overlay {
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseState {
    Playing,
    Paused,
}

/// One routed input event. The host translates raw key/touch events into
/// exactly one of these per event, so a key and a tap arriving in the same
/// frame are still two separate, atomic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseInput<'a> {
    /// Debug pause-toggle key pressed
    PauseKeyDown,
    /// Cancel/back key released
    CancelKeyUp,
    /// Debug restart key pressed
    RestartKeyDown,
    /// Tap hit-tested a scene object with this name
    Tap(&'a str),
}

/// The pause FSM and its saved pre-pause timescale
#[derive(Debug)]
pub struct PauseFsm {
    state: PauseState,
    saved_time_scale: f32,
    /// Pause overlay, if the scene has one
    pub overlay: Option<Overlay>,
}

impl Default for PauseFsm {
    fn default() -> Self {
        Self::new()
    }
}

impl PauseFsm {
    pub fn new() -> Self {
        Self {
            state: PauseState::Playing,
            saved_time_scale: 1.0,
            overlay: None,
        }
    }

    pub fn with_overlay(mut self) -> Self {
        self.overlay = Some(Overlay::default());
        self
    }

    pub fn state(&self) -> PauseState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.state == PauseState::Paused
    }

    /// Route one input event. Exactly one transition action fires per call.
    pub fn handle(
        &mut self,
        input: PauseInput,
        clock: &mut SimClock,
        audio: &mut AudioBus,
        ads: Option<&mut dyn AdDisplay>,
        events: &mut Vec<GameEvent>,
    ) {
        match input {
            PauseInput::PauseKeyDown | PauseInput::CancelKeyUp => {
                self.toggle(clock, audio, ads);
            }
            PauseInput::RestartKeyDown => {
                // Debug restart works from either state
                events.push(GameEvent::Scene(SceneRequest::ReloadCurrent));
            }
            PauseInput::Tap(name) => match name {
                "Button-Pause" | "Btn-Resume" => {
                    self.toggle(clock, audio, ads);
                }
                "Btn-Restart" => {
                    self.unpause(clock, audio);
                    events.push(GameEvent::Scene(SceneRequest::ReloadCurrent));
                }
                "Btn-Menu" => {
                    self.unpause(clock, audio);
                    events.push(GameEvent::Scene(SceneRequest::Load("Menu".into())));
                }
                _ => {}
            },
        }
    }

    fn toggle(
        &mut self,
        clock: &mut SimClock,
        audio: &mut AudioBus,
        ads: Option<&mut dyn AdDisplay>,
    ) {
        match self.state {
            PauseState::Playing => self.pause(clock, audio, ads),
            PauseState::Paused => self.unpause(clock, audio),
        }
    }

    fn pause(
        &mut self,
        clock: &mut SimClock,
        audio: &mut AudioBus,
        ads: Option<&mut dyn AdDisplay>,
    ) {
        log::info!("game paused");

        // Pause boundaries are where interstitials go
        if let Some(ads) = ads {
            ads.show_interstitial();
        }

        self.saved_time_scale = clock.time_scale;
        clock.time_scale = 0.0;
        audio.set_volume(0.0);
        if let Some(overlay) = &mut self.overlay {
            overlay.visible = true;
        }
        self.state = PauseState::Paused;
    }

    fn unpause(&mut self, clock: &mut SimClock, audio: &mut AudioBus) {
        log::info!("game unpaused");
        clock.time_scale = self.saved_time_scale;
        audio.set_volume(1.0);
        if let Some(overlay) = &mut self.overlay {
            overlay.visible = false;
        }
        self.state = PauseState::Playing;
    }
}
