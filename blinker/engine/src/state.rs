//! Shared timing state
//!
//! [`TimerState`] is the one context structure both execution contexts hold
//! a reference to. Each field is typed by its write-owner:
//!
//! | Field | Writer | Reader |
//! |---|---|---|
//! | elapsed ticks | interrupt | both |
//! | interval (ticks) | foreground | interrupt |
//! | display counter | interrupt | foreground |
//! | output signal | interrupt | both |
//! | toggle count, uptime, output fault | interrupt | both |

use blinker_core::{
    DisplayCounter, EngineConfig, ForegroundContext, ForegroundOwned, IsrOwned, SharedCounter,
    SharedFlag, SharedWide, SharedWord, Tick,
};

use crate::machine::Snapshot;

/// State shared between the tick handler and the foreground loop
pub struct TimerState {
    pub(crate) elapsed: SharedWord<IsrOwned>,
    pub(crate) interval_ticks: SharedWord<ForegroundOwned>,
    pub(crate) counter: SharedCounter<IsrOwned>,
    pub(crate) output: SharedFlag<IsrOwned>,
    pub(crate) toggles: SharedWord<IsrOwned>,
    pub(crate) uptime: SharedWide<IsrOwned>,
    pub(crate) output_fault: SharedFlag<IsrOwned>,
}

impl TimerState {
    /// Fresh state: nothing elapsed, counter 0, output off, default interval
    pub const fn new(config: &EngineConfig) -> Self {
        Self {
            elapsed: SharedWord::new(0),
            interval_ticks: SharedWord::new(config.ticks_for(config.default_interval)),
            counter: SharedCounter::new(DisplayCounter::ZERO),
            output: SharedFlag::new(false),
            toggles: SharedWord::new(0),
            uptime: SharedWide::new(0),
            output_fault: SharedFlag::new(false),
        }
    }

    /// Ticks since the last toggle event
    pub fn elapsed(&self) -> u32 {
        self.elapsed.load()
    }

    /// Toggle threshold the next tick will compare against
    pub fn interval_ticks(&self) -> u32 {
        self.interval_ticks.load()
    }

    /// Value for the display
    pub fn counter(&self) -> DisplayCounter {
        self.counter.load()
    }

    /// Logical level of the output line
    pub fn output(&self) -> bool {
        self.output.load()
    }

    /// Toggle events since start (wrapping)
    pub fn toggle_count(&self) -> u32 {
        self.toggles.load()
    }

    /// Ticks since start
    pub fn uptime(&self) -> Tick {
        Tick::new(self.uptime.load())
    }

    /// True once the output line driver has reported an error
    pub fn output_fault(&self) -> bool {
        self.output_fault.load()
    }

    /// Publish a new toggle threshold; zero is raised to one tick
    pub fn publish_interval(&self, cx: &ForegroundContext, ticks: u32) {
        self.interval_ticks.store(cx, ticks.max(1));
    }

    /// Inputs of the next state-machine step
    ///
    /// Each field is read atomically; the fields are not read as a group, so
    /// a snapshot taken outside interrupt context may straddle a tick.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            elapsed: self.elapsed(),
            interval_ticks: self.interval_ticks(),
            counter: self.counter(),
            output: self.output(),
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(&EngineConfig::new())
    }
}
