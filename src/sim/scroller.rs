//! Background texture scroller
//!
//! Trivial per-frame accumulator. The host applies the offset as a 1-D
//! texture offset on the horizontal axis; the vertical axis stays at zero.
//! No bounds, no reset: the offset grows for as long as the session runs.

use crate::tuning::ScrollTuning;

#[derive(Debug, Clone)]
pub struct BackgroundScroller {
    tuning: ScrollTuning,
    offset: f32,
}

impl BackgroundScroller {
    pub fn new(tuning: ScrollTuning) -> Self {
        Self {
            tuning,
            offset: 0.0,
        }
    }

    /// Accumulate one visual frame. `dt` is the timescale-adjusted frame
    /// delta, so a frozen clock stops the scroll.
    pub fn frame(&mut self, dt: f32) {
        self.offset += self.tuning.damper * dt * self.tuning.coef;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Texture offset to apply: (horizontal, 0)
    pub fn texture_offset(&self) -> (f32, f32) {
        (self.offset, 0.0)
    }
}
