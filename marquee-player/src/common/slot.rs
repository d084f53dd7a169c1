//! Request generations for view state fed by async lookups.

use tracing::debug;

/// Tracks which lookup currently owns one piece of view state.
///
/// Every [`begin`](Self::begin) issues a new generation; a response may only
/// be applied while its generation is still current. Older responses are
/// stale and must be dropped on arrival, which makes results apply in issue
/// order no matter when they resolve.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestSlot {
    generation: u64,
    in_flight: bool,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supersedes any outstanding request and returns the new generation.
    pub fn begin(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.in_flight = true;
        self.generation
    }

    /// Supersedes any outstanding request without issuing a new one.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.in_flight = false;
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.in_flight && self.generation == generation
    }

    /// Marks the request done if `generation` is current. Returns whether the
    /// caller may apply the response.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.is_current(generation) {
            self.in_flight = false;
            true
        } else {
            false
        }
    }

    /// [`complete`](Self::complete), logging the drop of a stale
    /// `message`.
    pub fn accept(&mut self, message: &'static str, generation: u64) -> bool {
        let current = self.complete(generation);
        if !current {
            debug!(message, generation, "dropping stale response");
        }
        current
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_requests_win() {
        let mut slot = RequestSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert!(slot.complete(second));
        assert!(!slot.complete(first));
        assert!(!slot.is_loading());
    }

    #[test]
    fn invalidation_drops_the_outstanding_response() {
        let mut slot = RequestSlot::new();
        let issued = slot.begin();
        slot.invalidate();

        assert!(!slot.is_loading());
        assert!(!slot.complete(issued));
    }

    #[test]
    fn a_response_applies_once() {
        let mut slot = RequestSlot::new();
        let issued = slot.begin();
        assert!(slot.complete(issued));
        assert!(!slot.complete(issued));
    }
}
