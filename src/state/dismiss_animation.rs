//! Closing animation for the submission summary

use super::forms::{ApplicationRecord, DISMISS_SCROLL_DELAY};
use std::time::{Duration, Instant};

/// Animation phase of the closing summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissPhase {
    /// Dialog collapsing
    Closing,
    /// Animation finished
    Complete,
}

/// Collapse animation for the summary dialog.
///
/// Keeps a copy of the dismissed record so the dialog can still be drawn
/// while the form underneath has already been reset.
#[derive(Debug)]
pub struct DismissAnimation {
    pub start_time: Instant,
    pub phase: DismissPhase,
    /// Remaining dialog scale, 1.0 (full size) down to 0.0
    pub scale: f32,
    pub record: ApplicationRecord,
}

impl DismissAnimation {
    /// Matches the delay before the form scrolls back to the top
    const ANIMATION_DURATION: Duration = DISMISS_SCROLL_DELAY;

    pub fn new(record: ApplicationRecord) -> Self {
        Self {
            start_time: Instant::now(),
            phase: DismissPhase::Closing,
            scale: 1.0,
            record,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self) {
        self.update_elapsed(self.start_time.elapsed());
    }

    fn update_elapsed(&mut self, elapsed: Duration) {
        if elapsed < Self::ANIMATION_DURATION {
            let progress = elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // Cubic ease-in: slow start, fast finish
            self.scale = 1.0 - simple_easing::cubic_in(progress);
        } else {
            self.scale = 0.0;
            self.phase = DismissPhase::Complete;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == DismissPhase::Complete
    }
}
