//! Clock tick service for POSIX
//!
//! A dedicated thread plays the role of the timer interrupt. It sleeps
//! until absolute deadlines taken from the monotonic clock, so the tick
//! cadence does not drift with scheduling jitter.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use blinker_core::{InterruptContext, TickPeriod};
use blinker_hal::{HalResult, PeriodicHandler, TickSource};
use log::{debug, info};

use crate::error::{PosixError, PosixResult};

/// Tick period as a `Duration`
pub fn period_duration(period: TickPeriod) -> Duration {
    Duration::from_micros(period.as_micros())
}

/// Tick source backed by a host thread
///
/// Stops and joins the thread when dropped.
pub struct ThreadTicker {
    running: Arc<AtomicBool>,
    fired: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
    period: Option<TickPeriod>,
}

impl ThreadTicker {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            fired: Arc::new(AtomicU64::new(0)),
            handle: None,
            period: None,
        }
    }

    /// Spawn the ticker thread running `handler` every `period`
    pub fn start(&mut self, period: TickPeriod, handler: PeriodicHandler<'static>) -> PosixResult<()> {
        // Only start once
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(PosixError::AlreadyStarted);
        }

        let running = Arc::clone(&self.running);
        let fired = Arc::clone(&self.fired);
        let tick_period = period_duration(period);

        let spawned = thread::Builder::new()
            .name("blinker-tick".into())
            .spawn(move || ticker_thread(tick_period, handler, running, fired));

        match spawned {
            Ok(handle) => {
                self.handle = Some(handle);
                self.period = Some(period);
                info!("ticker started, period {}", period);
                Ok(())
            }
            Err(err) => {
                self.running.store(false, Ordering::SeqCst);
                Err(PosixError::Spawn(err))
            }
        }
    }

    /// Stop the ticker thread and wait for it to finish
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("ticker stopped after {} ticks", self.fired());
        }
    }

    /// Check if the ticker thread is running
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Handler invocations so far
    pub fn fired(&self) -> u64 {
        self.fired.load(Ordering::Relaxed)
    }
}

impl Default for ThreadTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

impl TickSource<'static> for ThreadTicker {
    fn init_periodic(&mut self, period: TickPeriod, handler: PeriodicHandler<'static>) -> HalResult<()> {
        self.start(period, handler).map_err(Into::into)
    }

    fn period(&self) -> Option<TickPeriod> {
        self.period
    }
}

/// Ticker thread body
///
/// Sleeps until the next absolute deadline rather than for a relative
/// duration. If the thread falls behind, the missed ticks are delivered
/// back to back.
fn ticker_thread(
    tick_period: Duration,
    handler: PeriodicHandler<'static>,
    running: Arc<AtomicBool>,
    fired: Arc<AtomicU64>,
) {
    let cx = InterruptContext::claim();
    let mut next_tick = Instant::now();

    while running.load(Ordering::Relaxed) {
        next_tick += tick_period;

        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        }

        handler.invoke(&cx);
        fired.fetch_add(1, Ordering::Relaxed);
    }
}
