//! Single synchronization boundary around [`ControlState`].
//!
//! Button handlers write through [`SharedControl::update`] and the control
//! loop reads through [`SharedControl::snapshot`]. Both run inside one
//! critical section of the chosen raw mutex and copy the whole struct, so a
//! reader never observes a half-applied press.
//!
//! The firmware uses `CriticalSectionRawMutex` (safe against the GPIO
//! interrupt executor); host tests and the simulator use `NoopRawMutex`.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::state::ControlState;

/// Control state behind a blocking mutex.
pub struct SharedControl<M: RawMutex> {
    inner: Mutex<M, Cell<ControlState>>,
}

impl<M: RawMutex> SharedControl<M> {
    /// Create a container holding the power-on defaults.
    pub const fn new() -> Self { Self::with_state(ControlState::new()) }

    /// Create a container holding `state`.
    pub const fn with_state(state: ControlState) -> Self {
        Self {
            inner: Mutex::new(Cell::new(state)),
        }
    }

    /// Copy the full state in one critical section.
    #[inline]
    pub fn snapshot(&self) -> ControlState { self.inner.lock(Cell::get) }

    /// Mutate the state in one critical section and return the result.
    pub fn update<F>(
        &self,
        f: F,
    ) -> ControlState
    where
        F: FnOnce(&mut ControlState),
    {
        self.inner.lock(|cell| {
            let mut state = cell.get();
            f(&mut state);
            cell.set(state);
            state
        })
    }
}

impl<M: RawMutex> Default for SharedControl<M> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;
    use crate::state::{BorderStyle, Button};

    #[test]
    fn test_starts_with_defaults() {
        let shared: SharedControl<NoopRawMutex> = SharedControl::new();
        assert_eq!(shared.snapshot(), ControlState::default());
    }

    #[test]
    fn test_update_returns_new_state() {
        let shared: SharedControl<NoopRawMutex> = SharedControl::new();
        let after = shared.update(|s| s.on_press(Button::Joystick));
        assert_eq!(after.border, BorderStyle::ThinDotted);
        assert!(after.led_toggle);
        assert_eq!(shared.snapshot(), after);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let shared: SharedControl<NoopRawMutex> = SharedControl::new();
        let before = shared.snapshot();
        shared.update(|s| s.on_press(Button::A));
        assert!(before.led_enabled, "earlier snapshot must not change");
        assert!(!shared.snapshot().led_enabled);
    }

    #[test]
    fn test_with_state() {
        let state = ControlState {
            led_enabled: false,
            led_toggle: true,
            border: BorderStyle::ThickSolid,
        };
        let shared: SharedControl<NoopRawMutex> = SharedControl::with_state(state);
        assert_eq!(shared.snapshot(), state);
    }
}
