#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # Blinker Engine
//!
//! A periodic tick drives [`TimingMachine`], which counts ticks and, each
//! time the configured interval elapses, flips an output line and advances
//! a four-bit display counter. A cooperative [`Foreground`] loop samples the
//! switches, lets [`RateSelector`] pick the interval, and renders the
//! counter.
//!
//! The two sides share nothing but a [`TimerState`], whose fields each have
//! a single writer.
//!
//! ```rust,ignore
//! static STATE: TimerState = TimerState::new(&EngineConfig::new());
//!
//! let machine = TimingMachine::new(&STATE, led);
//! machine.attach(&mut timer0a, TickPeriod::MILLISECOND)?;
//!
//! let selector = RateSelector::new(RateTable::edubase(), EngineConfig::new());
//! Foreground::new(&STATE, selector, buttons, seven_segment).run();
//! ```

use core::fmt;

use blinker_core::BlinkError;
use blinker_hal::HalError;

pub mod foreground;
pub mod machine;
pub mod rate;
pub mod state;

pub use foreground::*;
pub use machine::*;
pub use rate::*;
pub use state::*;

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Invalid value or configuration
    Core(BlinkError),
    /// A collaborator failed
    Hal(HalError),
}

impl From<BlinkError> for EngineError {
    fn from(value: BlinkError) -> Self {
        Self::Core(value)
    }
}

impl From<HalError> for EngineError {
    fn from(value: HalError) -> Self {
        Self::Hal(value)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core(err) => write!(f, "configuration error: {err}"),
            Self::Hal(err) => write!(f, "hal error: {err}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(err) => Some(err),
            Self::Hal(err) => Some(err),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EngineError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Core(err) => defmt::write!(fmt, "Core({})", err),
            Self::Hal(err) => defmt::write!(fmt, "Hal({})", err),
        }
    }
}
