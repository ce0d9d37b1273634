//! Button press handling.
//!
//! A [`PressHandler`] is invoked on every falling edge of one button. It runs
//! the debounce gate for that button only and, if the press is accepted,
//! applies it to the shared [`ControlState`]. It never draws, sleeps or
//! touches a bus, so it is safe to call from an interrupt-driven task.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::debounce::DebounceGate;
use crate::shared::SharedControl;
use crate::state::{Button, ControlState};

/// Edge handler for a single button source.
pub struct PressHandler<'a, M: RawMutex> {
    button: Button,
    gate: DebounceGate,
    control: &'a SharedControl<M>,
}

impl<'a, M: RawMutex> PressHandler<'a, M> {
    /// Create a handler with the default debounce interval.
    pub const fn new(
        button: Button,
        control: &'a SharedControl<M>,
    ) -> Self {
        Self::with_gate(button, DebounceGate::new(), control)
    }

    /// Create a handler with a custom debounce gate.
    pub const fn with_gate(
        button: Button,
        gate: DebounceGate,
        control: &'a SharedControl<M>,
    ) -> Self {
        Self { button, gate, control }
    }

    /// Handle a falling edge observed at `now_ms` (milliseconds since boot).
    ///
    /// Returns the state after the press was applied, or `None` if the
    /// debounce gate rejected it (in which case nothing changed).
    pub fn on_edge(
        &mut self,
        now_ms: u32,
    ) -> Option<ControlState> {
        if !self.gate.accept(now_ms) {
            return None;
        }

        let button = self.button;
        Some(self.control.update(|state| state.on_press(button)))
    }

    /// Button this handler serves.
    #[inline]
    pub const fn button(&self) -> Button { self.button }

    /// Debounce state of this source.
    #[inline]
    pub const fn gate(&self) -> &DebounceGate { &self.gate }
}

// =============================================================================
// Unit Tests
// =============================================================================
