//! Discrete switch bitmask

use core::fmt;

use crate::{BlinkError, BlinkResult};

/// Maximum number of switches an input mask can describe
pub const MAX_SWITCHES: usize = 8;

/// Debounced state of the discrete input switches, one bit per switch
///
/// Bit `i` set means switch `i` is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InputMask(u8);

impl InputMask {
    /// No switch pressed
    pub const EMPTY: Self = Self(0);

    /// Create a mask from raw bits
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Mask with only `switch` pressed
    pub const fn single(switch: u8) -> BlinkResult<Self> {
        if (switch as usize) < MAX_SWITCHES {
            Ok(Self(1 << switch))
        } else {
            Err(BlinkError::SwitchOutOfRange(switch))
        }
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if no switch is pressed
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check if `switch` is pressed; out-of-range indices read as released
    pub const fn is_pressed(self, switch: u8) -> bool {
        (switch as usize) < MAX_SWITCHES && self.0 & (1 << switch) != 0
    }

    /// Number of switches pressed
    pub const fn pressed_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Index of the only pressed switch, if exactly one is pressed
    pub const fn sole_switch(self) -> Option<u8> {
        if self.0.count_ones() == 1 {
            Some(self.0.trailing_zeros() as u8)
        } else {
            None
        }
    }

    /// Copy of this mask with `switch` set or cleared
    #[must_use]
    pub const fn with(self, switch: u8, pressed: bool) -> Self {
        if (switch as usize) >= MAX_SWITCHES {
            return self;
        }
        if pressed {
            Self(self.0 | (1 << switch))
        } else {
            Self(self.0 & !(1 << switch))
        }
    }
}

impl From<u8> for InputMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl fmt::Display for InputMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010b}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for InputMask {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=u8:#b}", self.0);
    }
}
