//! Control state shared between the button handlers and the control loop.
//!
//! - [`BorderStyle`] - three-state border cycle (thin solid, thin dotted, thick solid)
//! - [`ControlState`] - LED enable flag, indicator toggle and border style
//! - [`Button`] - the two edge-triggered input sources
//!
//! Thickness and line style are derived from a single [`BorderStyle`]
//! variant, so an illegal combination (thick dotted) cannot be represented.

// =============================================================================
// Border Style
// =============================================================================

/// Line pattern used for the display border.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineStyle {
    /// Continuous rectangle outlines.
    Solid,
    /// Every second pixel along each edge.
    Dotted,
}

/// Border drawn around the display frame.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    /// Two solid outlines.
    #[default]
    ThinSolid,
    /// Dotted single-pixel edge (nominal thickness 2).
    ThinDotted,
    /// Four solid outlines.
    ThickSolid,
}

impl BorderStyle {
    /// Cycle to the next style: ThinSolid -> ThinDotted -> ThickSolid -> ThinSolid
    pub const fn next(self) -> Self {
        match self {
            Self::ThinSolid => Self::ThinDotted,
            Self::ThinDotted => Self::ThickSolid,
            Self::ThickSolid => Self::ThinSolid,
        }
    }

    /// Border thickness in pixels.
    pub const fn thickness(self) -> u32 {
        match self {
            Self::ThinSolid | Self::ThinDotted => 2,
            Self::ThickSolid => 4,
        }
    }

    /// Line pattern for this style.
    pub const fn line_style(self) -> LineStyle {
        match self {
            Self::ThinSolid | Self::ThickSolid => LineStyle::Solid,
            Self::ThinDotted => LineStyle::Dotted,
        }
    }

    /// Short label for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThinSolid => "2px solid",
            Self::ThinDotted => "2px dotted",
            Self::ThickSolid => "4px solid",
        }
    }
}

// =============================================================================
// Buttons
// =============================================================================

/// Edge-triggered input sources.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Joystick push switch: flips the indicator LED and cycles the border.
    Joystick,
    /// Secondary push button: enables or disables the PWM LEDs.
    A,
}

impl Button {
    /// Short label for logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Joystick => "JOY",
            Self::A => "A",
        }
    }
}

// =============================================================================
// Control State
// =============================================================================

/// Settings changed by button presses and read once per loop iteration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlState {
    /// When false, both PWM LEDs are forced off.
    pub led_enabled: bool,
    /// Level of the binary indicator LED.
    pub led_toggle: bool,
    /// Current border style.
    pub border: BorderStyle,
}

impl ControlState {
    /// Power-on defaults: LEDs enabled, indicator off, thin solid border.
    pub const fn new() -> Self {
        Self {
            led_enabled: true,
            led_toggle: false,
            border: BorderStyle::ThinSolid,
        }
    }

    /// Apply an accepted press of `button`.
    pub fn on_press(
        &mut self,
        button: Button,
    ) {
        match button {
            Button::Joystick => {
                self.led_toggle = !self.led_toggle;
                self.border = self.border.next();
            }
            Button::A => {
                self.led_enabled = !self.led_enabled;
            }
        }
    }
}

impl Default for ControlState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
