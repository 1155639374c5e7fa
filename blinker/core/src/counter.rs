//! Four-bit wrapping display counter

use core::fmt;

use crate::{BlinkError, BlinkResult};

/// Value shown on the display, always in `0..=15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DisplayCounter(u8);

impl DisplayCounter {
    /// Initial value
    pub const ZERO: Self = Self(0);

    /// Largest value before wrapping
    pub const MAX: Self = Self(15);

    /// Number of distinct values
    pub const MODULUS: u8 = 16;

    /// Create a counter; values above 15 are rejected
    pub const fn new(value: u8) -> BlinkResult<Self> {
        if value < Self::MODULUS {
            Ok(Self(value))
        } else {
            Err(BlinkError::CounterOutOfRange(value))
        }
    }

    /// Keep only the low four bits of `value`
    pub const fn from_low_bits(value: u8) -> Self {
        Self(value & 0x0F)
    }

    /// Raw value
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Next value, wrapping 15 to 0
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 >= Self::MAX.0 {
            Self::ZERO
        } else {
            Self(self.0 + 1)
        }
    }
}

impl TryFrom<u8> for DisplayCounter {
    type Error = BlinkError;

    fn try_from(value: u8) -> BlinkResult<Self> {
        Self::new(value)
    }
}

impl From<DisplayCounter> for u8 {
    fn from(counter: DisplayCounter) -> u8 {
        counter.0
    }
}

impl fmt::Display for DisplayCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DisplayCounter {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=u8:x}", self.0);
    }
}
