//! Hardware abstraction for the blinker timing engine
//!
//! The engine core never touches registers. It talks to four collaborators
//! through the traits in this crate: a periodic tick source, an output line
//! toggled from the tick handler, an input sampler returning the debounced
//! switch mask, and a display sink for the four-bit counter.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod display;
pub mod error;
pub mod gpio;
pub mod timer;

#[cfg(feature = "embedded-hal")]
pub mod adapters;

// Re-export commonly used types
pub use display::DisplaySink;
pub use error::{HalError, HalResult};
pub use gpio::{InputSampler, OutputLine};
pub use timer::{PeriodicHandler, PeriodicTask, TickSource};
