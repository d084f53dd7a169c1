//! Time-based tween used to animate shelf scrolling toward a target offset.

use std::time::{Duration, Instant};

pub const DEFAULT_SCROLL_ANIMATION: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` in `[0, 1]` onto the curve (quadratic).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SnapAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Option<Instant>,
    duration: Duration,
    easing: Easing,
}

impl Default for SnapAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_ANIMATION, Easing::default())
    }
}

impl SnapAnimator {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration,
            easing,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn start(&mut self, current: f32, target: f32, now: Instant) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = Some(now);
    }

    /// Offset at `now`, or `None` when idle. The tick that reaches the end
    /// returns the exact target and deactivates.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let started_at = self.started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        Some(self.start + (self.target - self.start) * self.easing.apply(t))
    }

    /// Jumps to the end. Returns the target if an animation was running.
    pub fn finish(&mut self) -> Option<f32> {
        if self.active {
            self.active = false;
            Some(self.target)
        } else {
            None
        }
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_curves_hit_both_ends() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
        ] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert_eq!(Easing::EaseInOut.apply(0.5), 0.5);
    }

    #[test]
    fn tick_interpolates_then_lands_on_target() {
        let t0 = Instant::now();
        let mut animator =
            SnapAnimator::new(Duration::from_millis(100), Easing::Linear);
        animator.start(0.0, 300.0, t0);

        let mid = animator.tick(t0 + Duration::from_millis(50)).unwrap();
        assert!((mid - 150.0).abs() < 1e-3);
        assert!(animator.is_active());

        assert_eq!(animator.tick(t0 + Duration::from_millis(150)), Some(300.0));
        assert!(!animator.is_active());
        assert_eq!(animator.tick(t0 + Duration::from_millis(200)), None);
    }
}
