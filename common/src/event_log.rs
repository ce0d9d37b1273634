//! Bounded log of recent input events.
//!
//! Keeps the last [`EVENT_LOG_SIZE`] accepted presses as short text lines,
//! oldest dropped first. Fixed capacity, no allocation.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = EventLog::new();
//! log.record(Button::Joystick, now_ms, &state);
//!
//! for line in log.iter() {
//!     println!("{}", line);
//! }
//! ```

use core::fmt::Write;

use heapless::{Deque, String};

use crate::state::{Button, ControlState};

// =============================================================================
// Configuration
// =============================================================================

/// Maximum number of lines kept.
pub const EVENT_LOG_SIZE: usize = 8;

/// Maximum characters per line.
pub const EVENT_LINE_LENGTH: usize = 48;

// =============================================================================
// Event Log Ring Buffer
// =============================================================================

/// Ring buffer of event lines.
pub struct EventLog {
    buffer: Deque<String<EVENT_LINE_LENGTH>, EVENT_LOG_SIZE>,
}

impl EventLog {
    /// Create an empty log.
    pub const fn new() -> Self { Self { buffer: Deque::new() } }

    /// Push a line. Drops the oldest line when full; truncates long lines.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        let mut line: String<EVENT_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        self.buffer.push_back(line).ok();
    }

    /// Record an accepted press and the state it produced.
    ///
    /// Returns the formatted line.
    pub fn record(
        &mut self,
        button: Button,
        now_ms: u32,
        state: &ControlState,
    ) -> String<EVENT_LINE_LENGTH> {
        let mut line: String<EVENT_LINE_LENGTH> = String::new();
        // Overflow only truncates the line
        let _ = write!(
            line,
            "{:>7}ms {:<3} leds={} ind={} {}",
            now_ms,
            button.label(),
            if state.led_enabled { "on" } else { "off" },
            u8::from(state.led_toggle),
            state.border.label()
        );
        self.push(&line);
        line
    }

    /// Iterate over lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(|line| line.as_str()) }

    /// Number of stored lines.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Check if the log is empty.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }
}

impl Default for EventLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BorderStyle;

    #[test]
    fn test_push() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push("first");
        log.push("second");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().next(), Some("first"));
    }

    #[test]
    fn test_ring_drops_oldest() {
        let mut log = EventLog::new();
        for i in 0..=EVENT_LOG_SIZE {
            let mut msg: String<8> = String::new();
            write!(msg, "{i}").unwrap();
            log.push(&msg);
        }
        assert_eq!(log.len(), EVENT_LOG_SIZE);
        assert_eq!(log.iter().next(), Some("1"));
    }

    #[test]
    fn test_truncation() {
        let mut log = EventLog::new();
        log.push("This line is deliberately far longer than the forty-eight character limit");
        assert_eq!(log.iter().next().unwrap().len(), EVENT_LINE_LENGTH);
    }

    #[test]
    fn test_record_format() {
        let mut log = EventLog::new();
        let state = ControlState {
            led_enabled: true,
            led_toggle: true,
            border: BorderStyle::ThinDotted,
        };
        let line = log.record(Button::Joystick, 1234, &state);
        assert_eq!(line.as_str(), "   1234ms JOY leds=on ind=1 2px dotted");
        assert_eq!(log.iter().next(), Some(line.as_str()));
    }
}
