//! Simulated peripherals for running the engine on a host

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use blinker_core::{DisplayCounter, InputMask};
use blinker_engine::Yield;
use blinker_hal::{DisplaySink, HalResult, InputSampler, OutputLine};
use log::info;

use crate::error::{PosixError, PosixResult};

/// Observer side of a [`SimLine`], readable from any thread
#[derive(Debug, Default)]
pub struct LineProbe {
    level: AtomicBool,
    toggles: AtomicU32,
}

impl LineProbe {
    /// Current simulated output level
    pub fn level(&self) -> bool {
        self.level.load(Ordering::Acquire)
    }

    /// Toggles performed so far
    pub fn toggles(&self) -> u32 {
        self.toggles.load(Ordering::Acquire)
    }
}

/// Simulated LED
pub struct SimLine {
    probe: Arc<LineProbe>,
}

impl SimLine {
    /// Create a line and the probe observing it
    pub fn new() -> (Self, Arc<LineProbe>) {
        let probe = Arc::new(LineProbe::default());
        (
            Self {
                probe: Arc::clone(&probe),
            },
            probe,
        )
    }
}

impl OutputLine for SimLine {
    fn toggle(&mut self) -> HalResult<()> {
        self.probe.level.fetch_xor(true, Ordering::AcqRel);
        self.probe.toggles.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

/// Parse a comma separated list of switch masks
///
/// Entries may be decimal (`4`), hexadecimal (`0x4`) or binary (`0b100`).
pub fn parse_script(script: &str) -> PosixResult<Vec<InputMask>> {
    script
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let parsed = if let Some(hex) = entry.strip_prefix("0x") {
                u8::from_str_radix(hex, 16)
            } else if let Some(bin) = entry.strip_prefix("0b") {
                u8::from_str_radix(bin, 2)
            } else {
                entry.parse::<u8>()
            };
            parsed
                .map(InputMask::from_bits)
                .map_err(|err| PosixError::InvalidScript {
                    entry: entry.to_string(),
                    reason: err.to_string(),
                })
        })
        .collect()
}

/// Switches pressed according to a looping script, each step held for a
/// fixed time
pub struct ScriptedInputs {
    steps: Vec<InputMask>,
    hold: Duration,
    started: Instant,
}

impl ScriptedInputs {
    pub fn new(steps: Vec<InputMask>, hold: Duration) -> Self {
        Self {
            steps,
            hold,
            started: Instant::now(),
        }
    }

    /// Mask in effect `elapsed` after start
    pub fn mask_at(&self, elapsed: Duration) -> InputMask {
        if self.steps.is_empty() || self.hold.is_zero() {
            return self.steps.first().copied().unwrap_or(InputMask::EMPTY);
        }
        let step = (elapsed.as_nanos() / self.hold.as_nanos()) as usize % self.steps.len();
        self.steps[step]
    }
}

impl InputSampler for ScriptedInputs {
    fn sample(&mut self) -> HalResult<InputMask> {
        Ok(self.mask_at(self.started.elapsed()))
    }
}

/// Seven-segment stand-in that logs each new value
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    shown: Option<DisplayCounter>,
    renders: u64,
}

impl ConsoleDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value rendered
    pub fn shown(&self) -> Option<DisplayCounter> {
        self.shown
    }

    /// Render calls so far
    pub fn renders(&self) -> u64 {
        self.renders
    }
}

impl DisplaySink for ConsoleDisplay {
    fn render(&mut self, value: DisplayCounter) -> HalResult<()> {
        self.renders += 1;
        if self.shown != Some(value) {
            info!("display [{}]", value);
            self.shown = Some(value);
        }
        Ok(())
    }
}

/// Foreground yield for hosted runs: give up the CPU, optionally sleeping
#[derive(Debug, Clone, Copy, Default)]
pub struct HostYield {
    pause: Option<Duration>,
}

impl HostYield {
    /// Sleep for `pause` at every yield point
    pub fn sleeping(pause: Duration) -> Self {
        Self { pause: Some(pause) }
    }
}

impl Yield for HostYield {
    fn yield_now(&mut self) {
        match self.pause {
            Some(pause) if !pause.is_zero() => thread::sleep(pause),
            _ => thread::yield_now(),
        }
    }
}
