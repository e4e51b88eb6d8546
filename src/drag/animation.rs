//! Explicit interpolation timer for settle/return motion.
//!
//! The animation is plain state advanced once per tick. Cancelling it is
//! just dropping the value.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::core::config::{ReturnConfig, MAX_RETURN_DURATION, MIN_RETURN_DURATION};
use crate::core::geometry::Easing;

/// Motion of a released card toward its resting position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReturnAnimation {
    pub start: Vec2,
    pub target: Vec2,
    pub elapsed: f32,
    pub duration: f32,
    pub easing: Easing,
}

impl ReturnAnimation {
    /// Create an animation from `start` to `target`.
    #[must_use]
    pub fn new(start: Vec2, target: Vec2, config: &ReturnConfig) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration: config.duration.clamp(MIN_RETURN_DURATION, MAX_RETURN_DURATION),
            easing: config.easing,
        }
    }

    /// Normalized progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Position at the current progress.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        if self.is_finished() {
            return self.target;
        }
        self.start.lerp(self.target, self.easing.apply(self.progress()))
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Advance by `dt` seconds and return the new position.
    ///
    /// Negative or non-finite steps count as zero. The animation finishes
    /// once the duration has elapsed, the eased position has reached the
    /// target, or `dt` is too small to move the timer any further.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        if dt.is_finite() && dt > 0.0 {
            let before = self.elapsed;
            self.elapsed += dt;
            let stalled = self.elapsed == before;
            let arrived = self.easing.apply(self.progress()) >= 1.0;
            if stalled || arrived {
                self.elapsed = self.elapsed.max(self.duration);
            }
        }
        self.position()
    }

    /// Move the end point without restarting the timer.
    pub fn retarget(&mut self, target: Vec2) {
        self.target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(duration: f32) -> ReturnConfig {
        ReturnConfig::default().with_duration(duration).with_easing(Easing::Linear)
    }

    #[test]
    fn test_linear_progress() {
        let mut anim = ReturnAnimation::new(Vec2::ZERO, Vec2::new(10.0, 0.0), &linear(1.0));

        assert_eq!(anim.position(), Vec2::ZERO);
        let pos = anim.advance(0.5);
        assert!((pos.x - 5.0).abs() < 1e-5);
        assert!(!anim.is_finished());

        let pos = anim.advance(0.6);
        assert_eq!(pos, Vec2::new(10.0, 0.0));
        assert!(anim.is_finished());
    }

    #[test]
    fn test_degenerate_duration_still_finishes() {
        let mut anim = ReturnAnimation::new(Vec2::ZERO, Vec2::ONE, &linear(0.0));
        assert_eq!(anim.duration, MIN_RETURN_DURATION);

        anim.advance(MIN_RETURN_DURATION);
        assert!(anim.is_finished());
        assert_eq!(anim.position(), Vec2::ONE);
    }

    #[test]
    fn test_stalled_timer_finishes() {
        let mut anim = ReturnAnimation::new(Vec2::ZERO, Vec2::ONE, &linear(1.0));
        anim.duration = 1.0e7;
        anim.elapsed = 600_000.0;

        assert_eq!(anim.advance(1.0 / 60.0), Vec2::ONE);
        assert!(anim.is_finished());
    }

    #[test]
    fn test_long_duration_is_capped() {
        let anim = ReturnAnimation::new(Vec2::ZERO, Vec2::ONE, &linear(1.0e7));
        assert_eq!(anim.duration, MAX_RETURN_DURATION);
    }

    #[test]
    fn test_bad_dt_ignored() {
        let mut anim = ReturnAnimation::new(Vec2::ZERO, Vec2::ONE, &linear(1.0));
        anim.advance(-1.0);
        anim.advance(f32::NAN);
        assert_eq!(anim.elapsed, 0.0);
    }

    #[test]
    fn test_retarget() {
        let mut anim = ReturnAnimation::new(Vec2::ZERO, Vec2::new(10.0, 0.0), &linear(1.0));
        anim.advance(0.5);
        anim.retarget(Vec2::new(20.0, 0.0));

        assert!((anim.position().x - 10.0).abs() < 1e-5);
        assert_eq!(anim.advance(1.0), Vec2::new(20.0, 0.0));
    }
}
