//! Entrance animation state for screen content

use std::time::{Duration, Instant};

/// Animation phase for the entrance slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrancePhase {
    /// Content sliding up into place
    Sliding,
    /// Content at rest
    Complete,
}

/// Slide-up animation played whenever a screen is shown
#[derive(Debug)]
pub struct EntranceState {
    /// When the animation started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: EntrancePhase,
    /// Current downward offset in rows
    pub offset: f32,
}

impl EntranceState {
    /// Duration of the slide (1 second)
    const DURATION: Duration = Duration::from_millis(1000);
    /// Rows below the resting position the content starts at
    const START_OFFSET: f32 = 6.0;

    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: EntrancePhase::Sliding,
            offset: Self::START_OFFSET,
        }
    }

    /// Already at rest, for when animations are turned off
    pub fn settled() -> Self {
        Self {
            start_time: Instant::now(),
            phase: EntrancePhase::Complete,
            offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, now: Instant) {
        if self.phase == EntrancePhase::Complete {
            return;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed >= Self::DURATION {
            self.phase = EntrancePhase::Complete;
            self.offset = 0.0;
            return;
        }
        let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
        // Cubic ease-out decelerates into the resting position
        let eased = simple_easing::cubic_out(progress);
        self.offset = Self::START_OFFSET * (1.0 - eased);
    }

    /// Whole rows to shift content down by
    pub fn row_offset(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    pub fn is_complete(&self) -> bool {
        self.phase == EntrancePhase::Complete
    }
}

impl Default for EntranceState {
    fn default() -> Self {
        Self::new()
    }
}
