//! Execution-context tokens
//!
//! The engine runs in exactly two contexts: the periodic interrupt that
//! advances the timing state machine, and the cooperative foreground loop
//! that configures and observes it. Code that must only run in one of them
//! takes the matching token by reference. Writes to shared cells require the
//! token of the cell's owning context (see [`crate::shared`]).

use core::fmt;

/// Tag naming one of the two execution contexts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExecutionContext {
    /// Periodic tick handler, preempts the foreground
    Interrupt,
    /// Cooperative polling loop
    Foreground,
}

impl fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionContext::Interrupt => write!(f, "Interrupt"),
            ExecutionContext::Foreground => write!(f, "Foreground"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ExecutionContext {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ExecutionContext::Interrupt => defmt::write!(fmt, "Interrupt"),
            ExecutionContext::Foreground => defmt::write!(fmt, "Foreground"),
        }
    }
}

/// Proof of running inside the periodic tick handler
///
/// Tick sources claim one at the top of every invocation and lend it to the
/// registered task. Handlers receiving it must not block.
#[derive(Debug)]
pub struct InterruptContext {
    _private: (),
}

impl InterruptContext {
    /// Claim the interrupt context.
    ///
    /// Only tick source implementations (and tests driving the state machine
    /// directly) should call this, from the handler invocation itself.
    pub const fn claim() -> Self {
        Self { _private: () }
    }

    /// Context tag
    pub const fn tag(&self) -> ExecutionContext {
        ExecutionContext::Interrupt
    }
}

/// Proof of running in the foreground loop
#[derive(Debug)]
pub struct ForegroundContext {
    _private: (),
}

impl ForegroundContext {
    /// Claim the foreground context.
    ///
    /// There is one foreground loop per engine; it claims this once at
    /// construction.
    pub const fn claim() -> Self {
        Self { _private: () }
    }

    /// Context tag
    pub const fn tag(&self) -> ExecutionContext {
        ExecutionContext::Foreground
    }
}
