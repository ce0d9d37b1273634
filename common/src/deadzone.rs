//! Deadzone mapping from raw analog samples to output magnitudes.
//!
//! One mapper serves every consumer: both LED channels use it for
//! brightness, so there is no per-axis variant.
//!
//! # Mapping
//!
//! With `d = |sample - center|`:
//!
//! | Region | Magnitude |
//! |--------|-----------|
//! | `d <= threshold` | `0` |
//! | `d > threshold` | `(d - threshold) * out_max / (center - threshold)`, clamped to `out_max` |
//!
//! Both sides share the `center - threshold` divisor. For a 12-bit ADC
//! centred at 2048 the lower rail reaches `out_max` exactly; the upper rail
//! is one count shorter and lands just below it (4092 of 4095).

/// Deadzone parameters for one analog axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeadzoneConfig {
    center: u16,
    threshold: u16,
}

impl DeadzoneConfig {
    /// Create a deadzone configuration.
    ///
    /// # Panics
    ///
    /// Panics unless `threshold < center`. Inside a `const` item this is a
    /// compile error.
    pub const fn new(
        center: u16,
        threshold: u16,
    ) -> Self {
        assert!(threshold < center, "deadzone threshold must be below the center");
        Self { center, threshold }
    }

    /// Resting value of the axis.
    #[inline]
    pub const fn center(&self) -> u16 { self.center }

    /// Deadzone radius around the center.
    #[inline]
    pub const fn threshold(&self) -> u16 { self.threshold }

    /// Map a raw sample into `0..=out_max`. See the module docs.
    pub const fn map(
        &self,
        sample: u16,
        out_max: u16,
    ) -> u16 {
        let deviation = if sample >= self.center {
            sample - self.center
        } else {
            self.center - sample
        };

        if deviation <= self.threshold {
            return 0;
        }

        let span = (self.center - self.threshold) as u32;
        let scaled = (deviation - self.threshold) as u32 * out_max as u32 / span;
        if scaled > out_max as u32 { out_max } else { scaled as u16 }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
