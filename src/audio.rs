//! Audio event queue
//!
//! The core never touches a mixer. Components fire [`SoundEffect`]s into the
//! [`AudioBus`]; the host drains the queue once per frame and plays whatever
//! it finds at the bus volume. Volume is a listener property, not a gate:
//! effects still enqueue while the bus is muted, the same way a muted
//! listener keeps receiving sources.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits the field/ground
    GroundImpact,
    /// Ball hits a player head; variant indexes the host's sound pool
    HeadHit(u8),
}

/// Queue of fired sound effects plus the global listener volume
#[derive(Debug, Clone)]
pub struct AudioBus {
    volume: f32,
    queue: Vec<SoundEffect>,
}

impl Default for AudioBus {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioBus {
    pub fn new() -> Self {
        Self {
            volume: 1.0,
            queue: Vec::new(),
        }
    }

    /// Fire a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx: {:?}", effect);
        self.queue.push(effect);
    }

    /// Global listener volume (0.0 - 1.0)
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Set the global listener volume (0.0 - 1.0)
    pub fn set_volume(&mut self, vol: f32) {
        self.volume = vol.clamp(0.0, 1.0);
    }

    /// Effects fired since the last drain, in fire order
    pub fn drain(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.queue)
    }

    /// Pending effects without draining (for tests/HUD)
    pub fn pending(&self) -> &[SoundEffect] {
        &self.queue
    }
}
