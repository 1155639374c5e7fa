//! Cooperative foreground loop
//!
//! One iteration samples the switches, publishes the selected interval and
//! renders the counter. Nothing in an iteration waits on the tick handler;
//! the interval it publishes is picked up on the next tick.

use blinker_core::{DisplayCounter, ForegroundContext, InputMask, IntervalMs};
use blinker_hal::{DisplaySink, InputSampler};
use log::{debug, info, warn};

use crate::rate::RateSelector;
use crate::state::TimerState;
use crate::EngineResult;

/// Yield point at the top of every foreground iteration
pub trait Yield {
    fn yield_now(&mut self);
}

/// Busy-wait hint; the default on bare metal
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinYield;

impl Yield for SpinYield {
    #[inline]
    fn yield_now(&mut self) {
        core::hint::spin_loop();
    }
}

/// What one iteration observed and published
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iteration {
    /// Sampled switches (empty if sampling failed)
    pub mask: InputMask,
    /// Interval published for the tick handler
    pub interval: IntervalMs,
    /// True if `interval` differs from the previous iteration's
    pub changed: bool,
    /// Counter value sent to the display
    pub counter: DisplayCounter,
}

/// The foreground loop
pub struct Foreground<'s, S, D, Y = SpinYield> {
    state: &'s TimerState,
    selector: RateSelector,
    sampler: S,
    display: D,
    yielder: Y,
    cx: ForegroundContext,
    iterations: u64,
}

impl<'s, S, D> Foreground<'s, S, D, SpinYield>
where
    S: InputSampler,
    D: DisplaySink,
{
    pub fn new(state: &'s TimerState, selector: RateSelector, sampler: S, display: D) -> Self {
        Self {
            state,
            selector,
            sampler,
            display,
            yielder: SpinYield,
            cx: ForegroundContext::claim(),
            iterations: 0,
        }
    }
}

impl<'s, S, D, Y> Foreground<'s, S, D, Y>
where
    S: InputSampler,
    D: DisplaySink,
    Y: Yield,
{
    /// Replace the yield hook
    pub fn with_yield<Y2: Yield>(self, yielder: Y2) -> Foreground<'s, S, D, Y2> {
        Foreground {
            state: self.state,
            selector: self.selector,
            sampler: self.sampler,
            display: self.display,
            yielder,
            cx: self.cx,
            iterations: self.iterations,
        }
    }

    /// Run one iteration: sample, publish, render
    ///
    /// A failed sample keeps the previous interval; the counter is still
    /// rendered. The first collaborator error is returned after the
    /// iteration completes.
    pub fn poll_once(&mut self) -> EngineResult<Iteration> {
        let sampled = self.sampler.sample();
        let mask = sampled.unwrap_or(InputMask::EMPTY);

        let selection = self.selector.select(mask);
        self.state
            .publish_interval(&self.cx, self.selector.current_ticks());
        if selection.changed {
            info!("interval {} selected by switches {}", selection.interval, mask);
        }

        let counter = self.state.counter();
        let rendered = self.display.render(counter);

        self.iterations = self.iterations.wrapping_add(1);
        sampled?;
        rendered?;

        Ok(Iteration {
            mask,
            interval: selection.interval,
            changed: selection.changed,
            counter,
        })
    }

    /// Loop forever
    pub fn run(&mut self) -> ! {
        info!("foreground loop started, interval {}", self.selector.current());
        loop {
            self.yielder.yield_now();
            if let Err(err) = self.poll_once() {
                warn!("foreground iteration failed: {}", err);
            }
        }
    }

    /// Loop until `stop` returns true; checked at the yield point
    ///
    /// Intended for hosted ports and tests. Returns the number of
    /// iterations run.
    pub fn run_until(&mut self, mut stop: impl FnMut() -> bool) -> u64 {
        let start = self.iterations;
        loop {
            self.yielder.yield_now();
            if stop() {
                break;
            }
            if let Err(err) = self.poll_once() {
                warn!("foreground iteration failed: {}", err);
            }
        }
        let ran = self.iterations.wrapping_sub(start);
        debug!("foreground loop stopped after {} iterations", ran);
        ran
    }

    /// Iterations completed since construction
    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn selector(&self) -> &RateSelector {
        &self.selector
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Give back the collaborators
    pub fn release(self) -> (S, D) {
        (self.sampler, self.display)
    }
}
