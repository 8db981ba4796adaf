//! Dice roll animation.
//!
//! A roll is a burst of tumbling frames at a fixed interval, then a short settle
//! pause before the result is presented. Frames are visual only; the final face
//! is drawn on the last frame.

use std::time::Duration;

use beerdice_types::Face;

pub const DEFAULT_ROLL_FRAMES: u32 = 13;
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(200);
pub const DEFAULT_SHAKE_DURATION: Duration = Duration::from_millis(600);

/// Timing for the roll animation and the penalty shake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollTiming {
    /// Tumbling frames per roll, at least 1.
    pub frames: u32,
    pub frame_interval: Duration,
    /// Pause between the final face landing and the result being presented.
    pub settle: Duration,
    pub shake: Duration,
}

impl Default for RollTiming {
    fn default() -> Self {
        Self {
            frames: DEFAULT_ROLL_FRAMES,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            settle: DEFAULT_SETTLE_DELAY,
            shake: DEFAULT_SHAKE_DURATION,
        }
    }
}

impl RollTiming {
    /// Total time from roll request to presentation.
    #[must_use]
    pub fn roll_duration(&self) -> Duration {
        self.frame_interval
            .saturating_mul(self.frames.max(1))
            .saturating_add(self.settle)
    }
}

/// An in-flight roll.
///
/// Identified by a sequence number so that timeline tasks from a roll that was
/// abandoned (by a clear) can be recognised and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollAnimation {
    id: u64,
    frames_shown: u32,
    landed: Option<Face>,
}

/// What a frame tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameStep {
    /// Show this face; more frames follow.
    Tumble(Face),
    /// Last frame: show `tumble`, then the authoritative `landed` face.
    Landed { tumble: Face, landed: Face },
}

impl RollAnimation {
    pub(crate) fn new(id: u64) -> Self {
        Self {
            id,
            frames_shown: 0,
            landed: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn frames_shown(&self) -> u32 {
        self.frames_shown
    }

    /// The final face, once the last frame has been shown.
    #[must_use]
    pub fn landed(&self) -> Option<Face> {
        self.landed
    }

    /// Record one frame. `next_face` is called once per frame, plus once more
    /// for the final face on the last frame.
    pub(crate) fn step(&mut self, frames: u32, mut next_face: impl FnMut() -> Face) -> FrameStep {
        self.frames_shown = self.frames_shown.saturating_add(1);
        let tumble = next_face();
        if self.frames_shown < frames.max(1) {
            return FrameStep::Tumble(tumble);
        }
        let landed = next_face();
        self.landed = Some(landed);
        FrameStep::Landed { tumble, landed }
    }
}
