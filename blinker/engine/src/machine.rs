//! Timing state machine run from the periodic tick handler

use core::cell::RefCell;
use core::fmt;

use blinker_core::{DisplayCounter, InterruptContext, TickPeriod};
use blinker_hal::{HalResult, OutputLine, PeriodicHandler, PeriodicTask, TickSource};
use critical_section::Mutex;

use crate::state::TimerState;

/// Where a tick left the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Threshold not reached; still counting
    Accumulating,
    /// Threshold reached: output flipped, counter advanced, elapsed reset
    Event,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Accumulating => write!(f, "Accumulating"),
            Phase::Event => write!(f, "Event"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Phase {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Phase::Accumulating => defmt::write!(fmt, "Accumulating"),
            Phase::Event => defmt::write!(fmt, "Event"),
        }
    }
}

/// Values the tick transition reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub elapsed: u32,
    pub interval_ticks: u32,
    pub counter: DisplayCounter,
    pub output: bool,
}

impl Snapshot {
    /// Fresh start with the given threshold
    pub const fn start(interval_ticks: u32) -> Self {
        Self {
            elapsed: 0,
            interval_ticks,
            counter: DisplayCounter::ZERO,
            output: false,
        }
    }

    /// One tick of the transition function
    ///
    /// A threshold of zero behaves as one: every tick is an event.
    #[must_use]
    pub fn step(self) -> (Self, Phase) {
        let threshold = self.interval_ticks.max(1);
        let elapsed = self.elapsed.saturating_add(1);

        if elapsed >= threshold {
            let next = Self {
                elapsed: 0,
                counter: self.counter.next(),
                output: !self.output,
                ..self
            };
            (next, Phase::Event)
        } else {
            (Self { elapsed, ..self }, Phase::Accumulating)
        }
    }
}

/// The periodic task: accumulates ticks and fires toggle events
///
/// Owns the output line driver. The driver is only touched from
/// [`TimingMachine::tick`], inside a critical section.
pub struct TimingMachine<'s, L> {
    state: &'s TimerState,
    line: Mutex<RefCell<L>>,
}

impl<'s, L: OutputLine> TimingMachine<'s, L> {
    pub fn new(state: &'s TimerState, line: L) -> Self {
        Self {
            state,
            line: Mutex::new(RefCell::new(line)),
        }
    }

    /// Shared state this machine advances
    pub fn state(&self) -> &'s TimerState {
        self.state
    }

    /// Advance by one tick
    pub fn tick(&self, cx: &InterruptContext) -> Phase {
        let state = self.state;
        state.uptime.update(cx, |ticks| ticks.wrapping_add(1));

        let (next, phase) = state.snapshot().step();
        state.elapsed.store(cx, next.elapsed);

        if phase == Phase::Event {
            state.output.store(cx, next.output);
            if critical_section::with(|cs| self.line.borrow_ref_mut(cs).toggle()).is_err() {
                state.output_fault.store(cx, true);
            }
            state.counter.store(cx, next.counter);
            state.toggles.update(cx, |n| n.wrapping_add(1));
        }

        phase
    }

    /// Register this machine with `source`, ticking every `period`
    pub fn attach<'a, T>(&'a self, source: &mut T, period: TickPeriod) -> HalResult<()>
    where
        T: TickSource<'a>,
        L: 'a,
        's: 'a,
    {
        source.init_periodic(period, PeriodicHandler::new(self))
    }

    /// Run `f` with the output line driver
    pub fn with_line<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
        critical_section::with(|cs| f(&mut self.line.borrow_ref_mut(cs)))
    }

    /// Give back the output line driver
    pub fn into_line(self) -> L {
        self.line.into_inner().into_inner()
    }
}

impl<L: OutputLine> PeriodicTask for TimingMachine<'_, L> {
    fn on_tick(&self, cx: &InterruptContext) {
        self.tick(cx);
    }
}
