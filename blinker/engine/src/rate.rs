//! Rate selection: from sampled switches to a toggle interval

use blinker_core::{interval, BlinkError, BlinkResult, EngineConfig, InputMask, IntervalMs, MAX_SWITCHES};
use heapless::Vec;

/// One switch-to-interval assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateEntry {
    pub switch: u8,
    pub interval: IntervalMs,
}

/// Rates for the four push buttons (SW2..SW5 on bits 0..3) of the EduBase
/// board
const EDUBASE_RATES: [RateEntry; 4] = [
    RateEntry { switch: 0, interval: interval!(1000 ms) },
    RateEntry { switch: 1, interval: interval!(500 ms) },
    RateEntry { switch: 2, interval: interval!(250 ms) },
    RateEntry { switch: 3, interval: interval!(100 ms) },
];

/// Integrator-supplied mapping from single pressed switch to interval
///
/// Only masks with exactly one pressed switch that has an entry select a new
/// interval. Everything else (nothing pressed, several pressed, a switch
/// without an entry) keeps the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateTable {
    entries: Vec<RateEntry, MAX_SWITCHES>,
}

impl RateTable {
    /// Empty table; every mask keeps the previous interval
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Table for the EduBase push buttons: 1000, 500, 250 and 100 ms
    pub fn edubase() -> Self {
        let mut table = Self::new();
        for entry in EDUBASE_RATES {
            table.set(entry.switch, entry.interval);
        }
        table
    }

    /// Builder form of [`RateTable::insert`]
    pub fn with_rate(mut self, switch: u8, interval: IntervalMs) -> BlinkResult<Self> {
        self.insert(switch, interval)?;
        Ok(self)
    }

    /// Assign `interval` to `switch`, replacing any previous assignment
    pub fn insert(&mut self, switch: u8, interval: IntervalMs) -> BlinkResult<()> {
        if switch as usize >= MAX_SWITCHES {
            return Err(BlinkError::SwitchOutOfRange(switch));
        }
        self.set(switch, interval);
        Ok(())
    }

    fn set(&mut self, switch: u8, interval: IntervalMs) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.switch == switch) {
            entry.interval = interval;
        } else {
            // One slot per switch index, so a valid switch always fits.
            let _ = self.entries.push(RateEntry { switch, interval });
        }
    }

    /// Interval assigned to `switch`
    pub fn lookup(&self, switch: u8) -> Option<IntervalMs> {
        self.entries
            .iter()
            .find(|e| e.switch == switch)
            .map(|e| e.interval)
    }

    /// Map a sampled mask to an interval, falling back to `previous`
    pub fn map(&self, mask: InputMask, previous: IntervalMs) -> IntervalMs {
        mask.sole_switch()
            .and_then(|switch| self.lookup(switch))
            .unwrap_or(previous)
    }

    /// Configured entries, in insertion order
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of one selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub interval: IntervalMs,
    pub changed: bool,
}

/// Rate table plus the interval currently in force
#[derive(Debug, Clone)]
pub struct RateSelector {
    table: RateTable,
    config: EngineConfig,
    current: IntervalMs,
}

impl RateSelector {
    /// Start from the configured default interval
    pub fn new(table: RateTable, config: EngineConfig) -> Self {
        Self {
            table,
            current: config.clamp(config.default_interval),
            config,
        }
    }

    /// Select the interval for `mask` and make it current
    pub fn select(&mut self, mask: InputMask) -> Selection {
        let interval = self.config.clamp(self.table.map(mask, self.current));
        let changed = interval != self.current;
        self.current = interval;
        Selection { interval, changed }
    }

    /// Interval currently in force
    pub fn current(&self) -> IntervalMs {
        self.current
    }

    /// Threshold in ticks for the current interval
    pub fn current_ticks(&self) -> u32 {
        self.config.ticks_for(self.current)
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
