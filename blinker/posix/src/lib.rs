//! # Blinker POSIX port
//!
//! Runs the blinker engine on a host operating system. A dedicated thread
//! stands in for the timer interrupt, simulated peripherals stand in for
//! the LED, switches and seven-segment display, and the `blinker-sim`
//! binary wires them together.

pub mod error;
pub mod logger;
pub mod manual;
pub mod sim;
pub mod time;

pub use error::{PosixError, PosixResult};
pub use manual::ManualTicker;
pub use sim::{parse_script, ConsoleDisplay, HostYield, LineProbe, ScriptedInputs, SimLine};
pub use time::ThreadTicker;
