//! Time types: uptime ticks, tick periods and toggle intervals

use core::fmt;
use core::num::NonZeroU32;

use crate::{BlinkError, BlinkResult};

/// Monotonic tick count since the tick source started
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tick(u64);

impl Tick {
    /// Zero tick
    pub const ZERO: Self = Self(0);

    /// Maximum tick value
    pub const MAX: Self = Self(u64::MAX);

    /// Create a new tick count
    pub const fn new(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Get the raw tick value
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Advance by one tick, wrapping at `u64::MAX`
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Ticks elapsed since an earlier reading (handles wraparound)
    pub fn elapsed_since(self, previous: Tick) -> u64 {
        self.0.wrapping_sub(previous.0)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick:{}", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Tick {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "tick:{}", self.0);
    }
}

/// Period between two ticks of the tick source, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickPeriod(NonZeroU32);

impl TickPeriod {
    /// One millisecond, the cadence the engine is designed around
    pub const MILLISECOND: Self = Self(NonZeroU32::MIN);

    /// Create a tick period; zero is rejected
    pub const fn from_millis(ms: u32) -> BlinkResult<Self> {
        match NonZeroU32::new(ms) {
            Some(ms) => Ok(Self(ms)),
            None => Err(BlinkError::ZeroPeriod),
        }
    }

    /// Period in milliseconds
    pub const fn as_millis(self) -> u32 {
        self.0.get()
    }

    /// Period in microseconds
    pub const fn as_micros(self) -> u64 {
        self.0.get() as u64 * 1_000
    }
}

impl Default for TickPeriod {
    fn default() -> Self {
        Self::MILLISECOND
    }
}

impl fmt::Display for TickPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms/tick", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TickPeriod {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}ms/tick", self.0.get());
    }
}

/// Time between two toggle events, in milliseconds
///
/// Zero is not representable: a zero threshold would make every tick a
/// toggle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntervalMs(NonZeroU32);

impl IntervalMs {
    /// Shortest interval, one millisecond
    pub const MIN: Self = Self(NonZeroU32::MIN);

    /// Longest interval
    pub const MAX: Self = Self(NonZeroU32::MAX);

    /// Create an interval; zero is rejected
    pub const fn new(ms: u32) -> BlinkResult<Self> {
        match NonZeroU32::new(ms) {
            Some(ms) => Ok(Self(ms)),
            None => Err(BlinkError::ZeroInterval),
        }
    }

    /// Create an interval no shorter than `floor`
    pub const fn clamped(ms: u32, floor: IntervalMs) -> Self {
        if ms < floor.get() {
            floor
        } else {
            match NonZeroU32::new(ms) {
                Some(ms) => Self(ms),
                None => floor,
            }
        }
    }

    /// Interval in milliseconds
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Number of ticks of `period` covering this interval, rounded up
    pub const fn ticks(self, period: TickPeriod) -> u32 {
        let ms = self.0.get();
        let per = period.as_millis();
        ms / per + (ms % per != 0) as u32
    }
}

impl Default for IntervalMs {
    fn default() -> Self {
        crate::config::DEFAULT_INTERVAL
    }
}

impl TryFrom<u32> for IntervalMs {
    type Error = BlinkError;

    fn try_from(ms: u32) -> BlinkResult<Self> {
        Self::new(ms)
    }
}

impl From<IntervalMs> for u32 {
    fn from(interval: IntervalMs) -> u32 {
        interval.get()
    }
}

impl fmt::Display for IntervalMs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IntervalMs {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}ms", self.0.get());
    }
}

/// Macro to create compile-time intervals, clamped to one millisecond
#[macro_export]
macro_rules! interval {
    ($value:literal ms) => {
        $crate::IntervalMs::clamped($value, $crate::IntervalMs::MIN)
    };
    ($value:literal s) => {
        $crate::IntervalMs::clamped($value * 1000, $crate::IntervalMs::MIN)
    };
}
