//! UI domain: scroll geometry and animation for horizontal shelves.

pub mod animator;
pub mod scroll;

pub use animator::{DEFAULT_SCROLL_ANIMATION, Easing, SnapAnimator};
pub use scroll::{DEFAULT_SCROLL_STEP, ScrollDirection, ScrollRegion};
