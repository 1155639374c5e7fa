//! Engine configuration

use crate::{IntervalMs, TickPeriod};

/// Interval in force before the first foreground iteration publishes one
pub const DEFAULT_INTERVAL: IntervalMs = IntervalMs::clamped(500, IntervalMs::MIN);

/// Static configuration shared by the tick side and the foreground side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Cadence of the tick source
    pub tick_period: TickPeriod,
    /// Interval used until the inputs select another one
    pub default_interval: IntervalMs,
    /// Floor applied to every interval taken from the rate table
    pub min_interval: IntervalMs,
}

impl EngineConfig {
    /// 1 ms ticks, 500 ms default interval, 1 ms floor
    pub const fn new() -> Self {
        Self {
            tick_period: TickPeriod::MILLISECOND,
            default_interval: DEFAULT_INTERVAL,
            min_interval: IntervalMs::MIN,
        }
    }

    pub const fn with_tick_period(mut self, period: TickPeriod) -> Self {
        self.tick_period = period;
        self
    }

    pub const fn with_default_interval(mut self, interval: IntervalMs) -> Self {
        self.default_interval = interval;
        self
    }

    /// Set the interval floor; the default interval is raised to it if needed
    pub const fn with_min_interval(mut self, floor: IntervalMs) -> Self {
        self.min_interval = floor;
        if self.default_interval.get() < floor.get() {
            self.default_interval = floor;
        }
        self
    }

    /// Apply the configured floor to `interval`
    pub const fn clamp(&self, interval: IntervalMs) -> IntervalMs {
        IntervalMs::clamped(interval.get(), self.min_interval)
    }

    /// Ticks per toggle event for `interval` at the configured cadence
    pub const fn ticks_for(&self, interval: IntervalMs) -> u32 {
        self.clamp(interval).ticks(self.tick_period)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EngineConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "EngineConfig{{tick: {}, default: {}, min: {}}}",
            self.tick_period,
            self.default_interval,
            self.min_interval
        );
    }
}
