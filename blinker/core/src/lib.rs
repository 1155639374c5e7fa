#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # Blinker Core
//!
//! Core types, execution-context tokens and single-writer shared cells for
//! the blinker timing engine. Everything here is `no_std` and allocation
//! free so it can sit between an interrupt handler and a foreground loop on
//! a small microcontroller.

use core::fmt;

pub mod config;
pub mod context;
pub mod counter;
pub mod input;
pub mod shared;
pub mod time;

pub use config::*;
pub use context::*;
pub use counter::*;
pub use input::*;
pub use shared::*;
pub use time::*;

/// Blinker crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout the blinker crates
pub type BlinkResult<T> = Result<T, BlinkError>;

/// Error types for value construction and configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkError {
    /// A toggle interval of zero milliseconds was requested
    ZeroInterval,
    /// A tick period of zero was requested
    ZeroPeriod,
    /// Display counter value does not fit in four bits
    CounterOutOfRange(u8),
    /// Switch index does not fit in the input mask
    SwitchOutOfRange(u8),
}

impl fmt::Display for BlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlinkError::ZeroInterval => write!(f, "Toggle interval must be at least 1 ms"),
            BlinkError::ZeroPeriod => write!(f, "Tick period must be at least 1 ms"),
            BlinkError::CounterOutOfRange(v) => write!(f, "Counter value {} exceeds 15", v),
            BlinkError::SwitchOutOfRange(s) => write!(f, "Switch index {} out of range", s),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BlinkError {}

#[cfg(feature = "defmt")]
impl defmt::Format for BlinkError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BlinkError::ZeroInterval => defmt::write!(fmt, "ZeroInterval"),
            BlinkError::ZeroPeriod => defmt::write!(fmt, "ZeroPeriod"),
            BlinkError::CounterOutOfRange(v) => defmt::write!(fmt, "CounterOutOfRange({})", v),
            BlinkError::SwitchOutOfRange(s) => defmt::write!(fmt, "SwitchOutOfRange({})", s),
        }
    }
}
