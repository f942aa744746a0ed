//! Timeline playback state.
//!
//! The cursor is deliberately dumb: it holds a position and a play flag and
//! knows how to advance against a [`Timeline`]. Scheduling the ticks is the
//! presentation layer's job.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::timeline::Timeline;

/// Position and play/pause state over a [`Timeline`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackCursor {
    position: usize,
    playing: bool,
}

impl PlaybackCursor {
    /// Creates a cursor at step 0, paused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step index.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// True while auto-advance is on.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Starts auto-advance.
    #[inline]
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stops auto-advance; the position stays put.
    #[inline]
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Flips between playing and paused.
    #[inline]
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Moves one step forward, if the timeline has one.
    ///
    /// Returns `true` when the cursor moved. Reaching the last recorded
    /// step pauses playback automatically so a tick loop need not track
    /// the end itself.
    pub fn advance(&mut self, timeline: &Timeline) -> bool {
        if self.position + 1 >= timeline.len() {
            self.playing = false;
            return false;
        }
        self.position += 1;
        if self.position + 1 == timeline.len() {
            self.playing = false;
        }
        true
    }

    /// Rewinds to step 0 without changing the play flag, so playback
    /// restarted mid-run keeps running.
    #[inline]
    pub fn restart(&mut self) {
        self.position = 0;
    }

    /// Jumps to an arbitrary recorded step.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepIndexOutOfBounds`] when `index` is not a
    /// recorded step.
    pub fn jump_to(&mut self, index: usize, timeline: &Timeline) -> Result<(), EngineError> {
        if index >= timeline.len() {
            return Err(EngineError::StepIndexOutOfBounds {
                index,
                len: timeline.len(),
            });
        }
        self.position = index;
        Ok(())
    }

    /// Moves to the step a knowledge shock reported and pauses, leaving
    /// the consumer looking at the injection's immediate effect.
    #[inline]
    pub fn follow_shock(&mut self, index: usize) {
        self.position = index;
        self.playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firm::{Firm, FirmStatus};
    use crate::timeline::SimulationStep;

    fn timeline(len: usize) -> Timeline {
        let mut t = Timeline::new();
        for index in 0..len {
            t.push(SimulationStep {
                index,
                firms: vec![Firm {
                    id: 0,
                    productivity: 0.5,
                    status: FirmStatus::Active,
                    jitter: 0.5,
                }],
                threshold: 0.0,
                survivor_count: 1,
                eliminated_count: 0,
                shock: false,
            });
        }
        t
    }

    #[test]
    fn test_starts_paused_at_zero() {
        let cursor = PlaybackCursor::new();
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.is_playing());
    }

    #[test]
    fn test_advance_pauses_at_end() {
        let t = timeline(3);
        let mut cursor = PlaybackCursor::new();
        cursor.play();

        assert!(cursor.advance(&t));
        assert!(cursor.is_playing());
        assert!(cursor.advance(&t));
        assert_eq!(cursor.position(), 2);
        assert!(!cursor.is_playing(), "reaching the last step pauses");

        assert!(!cursor.advance(&t));
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_advance_on_single_step_timeline() {
        let t = timeline(1);
        let mut cursor = PlaybackCursor::new();
        cursor.play();
        assert!(!cursor.advance(&t));
        assert!(!cursor.is_playing());
    }

    #[test]
    fn test_restart_keeps_play_flag() {
        let t = timeline(5);
        let mut cursor = PlaybackCursor::new();
        cursor.play();
        cursor.advance(&t);
        cursor.restart();
        assert_eq!(cursor.position(), 0);
        assert!(cursor.is_playing());
    }

    #[test]
    fn test_jump_to_is_bounds_checked() {
        let t = timeline(3);
        let mut cursor = PlaybackCursor::new();

        cursor.jump_to(2, &t).unwrap();
        assert_eq!(cursor.position(), 2);

        let err = cursor.jump_to(3, &t).unwrap_err();
        assert!(matches!(
            err,
            EngineError::StepIndexOutOfBounds { index: 3, len: 3 }
        ));
        assert_eq!(cursor.position(), 2, "failed jump leaves position alone");
    }

    #[test]
    fn test_follow_shock_moves_and_pauses() {
        let mut cursor = PlaybackCursor::new();
        cursor.play();
        cursor.follow_shock(4);
        assert_eq!(cursor.position(), 4);
        assert!(!cursor.is_playing());
    }

    #[test]
    fn test_toggle() {
        let mut cursor = PlaybackCursor::new();
        cursor.toggle();
        assert!(cursor.is_playing());
        cursor.toggle();
        assert!(!cursor.is_playing());
    }
}
