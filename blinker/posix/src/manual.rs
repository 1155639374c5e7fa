//! Tick source fired by hand, for deterministic tests and replays

use blinker_core::{InterruptContext, TickPeriod};
use blinker_hal::{HalError, HalResult, PeriodicHandler, TickSource};

/// Tick source that only ticks when told to
#[derive(Debug, Default)]
pub struct ManualTicker<'a> {
    handler: Option<PeriodicHandler<'a>>,
    period: Option<TickPeriod>,
    fired: u64,
}

impl<'a> ManualTicker<'a> {
    pub fn new() -> Self {
        Self {
            handler: None,
            period: None,
            fired: 0,
        }
    }

    /// Deliver one tick; returns false if no handler is registered
    pub fn fire(&mut self) -> bool {
        match self.handler {
            Some(handler) => {
                handler.invoke(&InterruptContext::claim());
                self.fired += 1;
                true
            }
            None => false,
        }
    }

    /// Deliver `n` ticks; returns how many were delivered
    pub fn fire_n(&mut self, n: u64) -> u64 {
        (0..n).take_while(|_| self.fire()).count() as u64
    }

    /// Ticks delivered so far
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Simulated time covered by the delivered ticks
    pub fn elapsed_ms(&self) -> u64 {
        let per = self.period.map_or(0, |p| p.as_millis() as u64);
        self.fired * per
    }
}

impl<'a> TickSource<'a> for ManualTicker<'a> {
    fn init_periodic(&mut self, period: TickPeriod, handler: PeriodicHandler<'a>) -> HalResult<()> {
        if self.handler.is_some() {
            return Err(HalError::AlreadyStarted);
        }
        self.handler = Some(handler);
        self.period = Some(period);
        Ok(())
    }

    fn period(&self) -> Option<TickPeriod> {
        self.period
    }
}
