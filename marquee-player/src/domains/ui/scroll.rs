//! Horizontal scroll tracking for shelves.

use std::time::Instant;

use super::animator::SnapAnimator;

pub const DEFAULT_SCROLL_STEP: f32 = 300.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    fn sign(self) -> f32 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }
}

/// Scroll state of one horizontally scrollable region.
///
/// `can_scroll_left` / `can_scroll_right` are derived from the live offset
/// and the region geometry; they change on every scroll event and whenever
/// the content or viewport width changes.
#[derive(Debug, Clone)]
pub struct ScrollRegion {
    offset: f32,
    viewport_width: f32,
    content_width: f32,
    step: f32,
    animator: SnapAnimator,
}

impl Default for ScrollRegion {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_STEP)
    }
}

impl ScrollRegion {
    pub fn new(step: f32) -> Self {
        Self {
            offset: 0.0,
            viewport_width: 0.0,
            content_width: 0.0,
            step: step.max(1.0),
            animator: SnapAnimator::default(),
        }
    }

    pub fn with_animator(mut self, animator: SnapAnimator) -> Self {
        self.animator = animator;
        self
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn can_scroll_left(&self) -> bool {
        self.offset > 0.0
    }

    pub fn can_scroll_right(&self) -> bool {
        self.offset + self.viewport_width < self.content_width
    }

    pub fn can_scroll(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Left => self.can_scroll_left(),
            ScrollDirection::Right => self.can_scroll_right(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Records an offset reported by the scroll container. A user scroll
    /// interrupts any running animation.
    pub fn on_scroll(&mut self, offset: f32) {
        self.animator.cancel();
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width.max(0.0);
        self.reclamp();
    }

    pub fn set_content_width(&mut self, width: f32) {
        self.content_width = width.max(0.0);
        self.reclamp();
    }

    /// Starts a smooth move of one step. A command whose direction flag is
    /// off, or that would not move at all, is a no-op and returns `false`.
    pub fn scroll(&mut self, direction: ScrollDirection, now: Instant) -> bool {
        if !self.can_scroll(direction) {
            return false;
        }
        // Consecutive presses accumulate on the in-flight target.
        let base = if self.animator.is_active() {
            self.animator.target()
        } else {
            self.offset
        };
        let target =
            (base + direction.sign() * self.step).clamp(0.0, self.max_offset());
        if (target - base).abs() <= f32::EPSILON {
            return false;
        }
        self.animator.start(self.offset, target, now);
        true
    }

    /// Advances the animation. Returns whether it is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(next) = self.animator.tick(now) {
            self.offset = next;
        }
        self.animator.is_active()
    }

    /// Completes any running animation immediately.
    pub fn settle(&mut self) {
        if let Some(target) = self.animator.finish() {
            self.offset = target;
        }
    }

    fn reclamp(&mut self) {
        let max = self.max_offset();
        if self.offset > max {
            self.animator.cancel();
            self.offset = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn region(content: f32, viewport: f32) -> ScrollRegion {
        let mut region = ScrollRegion::new(300.0);
        region.set_content_width(content);
        region.set_viewport_width(viewport);
        region
    }

    #[test]
    fn right_steps_stop_at_the_end() {
        let now = Instant::now();
        let mut region = region(900.0, 300.0);
        assert!(!region.can_scroll_left());
        assert!(region.can_scroll_right());

        assert!(region.scroll(ScrollDirection::Right, now));
        region.settle();
        assert_eq!(region.offset(), 300.0);

        assert!(region.scroll(ScrollDirection::Right, now));
        region.settle();
        assert_eq!(region.offset(), 600.0);
        assert!(!region.can_scroll_right());
        assert!(region.can_scroll_left());

        assert!(!region.scroll(ScrollDirection::Right, now));
        assert_eq!(region.offset(), 600.0);
    }

    #[test]
    fn sub_unit_offsets_keep_both_arrows_enabled() {
        let mut region = region(900.0, 300.0);
        region.on_scroll(0.4);
        assert!(region.can_scroll_left());

        region.on_scroll(599.7);
        assert!(region.can_scroll_right());
        assert!(region.can_scroll_left());
    }

    #[test]
    fn left_is_disabled_at_the_origin() {
        let mut region = region(900.0, 300.0);
        assert!(!region.scroll(ScrollDirection::Left, Instant::now()));
        assert!(!region.is_animating());
    }

    #[test]
    fn content_narrower_than_viewport_cannot_scroll() {
        let region = region(250.0, 300.0);
        assert!(!region.can_scroll_left());
        assert!(!region.can_scroll_right());
    }

    #[test]
    fn rapid_presses_accumulate_on_the_target() {
        let now = Instant::now();
        let mut region = region(2000.0, 500.0);
        assert!(region.scroll(ScrollDirection::Right, now));
        assert!(region.scroll(ScrollDirection::Right, now));
        region.settle();
        assert_eq!(region.offset(), 600.0);
    }

    #[test]
    fn ticking_moves_smoothly_to_the_target() {
        let now = Instant::now();
        let mut region = region(900.0, 300.0);
        region.scroll(ScrollDirection::Right, now);

        assert!(region.tick(now + Duration::from_millis(100)));
        let midway = region.offset();
        assert!(midway > 0.0 && midway < 300.0);

        assert!(!region.tick(now + Duration::from_secs(1)));
        assert_eq!(region.offset(), 300.0);
    }

    #[test]
    fn shrinking_content_pulls_the_offset_back() {
        let mut region = region(900.0, 300.0);
        region.on_scroll(600.0);
        region.set_content_width(500.0);
        assert_eq!(region.offset(), 200.0);
        assert!(!region.can_scroll_right());
    }
}
