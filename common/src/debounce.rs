//! Time-based debounce gate for button edges.
//!
//! Each button source owns one [`DebounceGate`]. The gate only remembers the
//! last *accepted* press, so a burst of contact bounce never extends the
//! lockout window.

use crate::config::DEBOUNCE_MS;

/// Debounce state for a single event source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceGate {
    /// Timestamp (ms since boot) of the last accepted event.
    last_accepted: Option<u32>,
    min_interval_ms: u32,
}

impl DebounceGate {
    /// Create a gate with the default [`DEBOUNCE_MS`] interval.
    pub const fn new() -> Self { Self::with_interval(DEBOUNCE_MS) }

    /// Create a gate with a custom minimum interval.
    pub const fn with_interval(min_interval_ms: u32) -> Self {
        Self {
            last_accepted: None,
            min_interval_ms,
        }
    }

    /// Decide whether an event at `now_ms` passes the gate.
    ///
    /// Returns `true` and records `now_ms` when strictly more than the minimum
    /// interval has elapsed since the last accepted event. Rejection leaves the
    /// gate untouched. The first event is always accepted.
    ///
    /// Elapsed time is computed with wrapping subtraction, so the comparison
    /// stays correct when the millisecond counter rolls over.
    pub fn accept(
        &mut self,
        now_ms: u32,
    ) -> bool {
        if let Some(last) = self.last_accepted
            && now_ms.wrapping_sub(last) <= self.min_interval_ms
        {
            return false;
        }

        self.last_accepted = Some(now_ms);
        true
    }

    /// Timestamp of the last accepted event, if any.
    #[inline]
    pub const fn last_accepted(&self) -> Option<u32> { self.last_accepted }

    /// Configured minimum interval in milliseconds.
    #[inline]
    pub const fn min_interval_ms(&self) -> u32 { self.min_interval_ms }
}

impl Default for DebounceGate {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_interval() {
        assert_eq!(DebounceGate::new().min_interval_ms(), 200);
        assert_eq!(DebounceGate::default(), DebounceGate::new());
    }

    #[test]
    fn test_first_event_accepted() {
        let mut gate = DebounceGate::new();
        assert!(gate.accept(0));
        assert_eq!(gate.last_accepted(), Some(0));
    }

    #[test]
    fn test_accept_reject_accept_sequence() {
        let mut gate = DebounceGate::new();
        assert!(gate.accept(0));

        assert!(!gate.accept(150), "150ms after the last press is bounce");
        assert_eq!(gate.last_accepted(), Some(0), "rejection must not move the timestamp");

        assert!(gate.accept(250));
        assert_eq!(gate.last_accepted(), Some(250));
    }

    #[test]
    fn test_interval_boundary_is_exclusive() {
        let mut gate = DebounceGate::new();
        assert!(gate.accept(1000));
        assert!(!gate.accept(1200), "exactly the interval is still rejected");
        assert!(gate.accept(1201));
    }

    #[test]
    fn test_rejections_do_not_extend_window() {
        let mut gate = DebounceGate::new();
        assert!(gate.accept(0));
        for t in (10..200).step_by(10) {
            assert!(!gate.accept(t));
        }
        assert!(gate.accept(201));
    }

    #[test]
    fn test_independent_sources() {
        let mut joystick = DebounceGate::new();
        let mut button_a = DebounceGate::new();

        assert!(joystick.accept(100));
        assert!(!joystick.accept(150));
        // Same timestamp on the other source is unaffected
        assert!(button_a.accept(150));
        assert_eq!(joystick.last_accepted(), Some(100));
        assert_eq!(button_a.last_accepted(), Some(150));
    }

    #[test]
    fn test_wraparound() {
        let mut gate = DebounceGate::new();
        assert!(gate.accept(u32::MAX - 50));
        // 100ms later, across the wrap
        assert!(!gate.accept(49));
        // 251ms later, across the wrap
        assert!(gate.accept(200));
    }

    #[test]
    fn test_custom_interval() {
        let mut gate = DebounceGate::with_interval(10);
        assert!(gate.accept(0));
        assert!(!gate.accept(10));
        assert!(gate.accept(11));
    }
}
