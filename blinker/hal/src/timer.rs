//! Periodic tick source abstraction

use core::fmt;

use blinker_core::{ExecutionContext, InterruptContext, TickPeriod};

use crate::error::HalResult;

/// Work performed once per tick, in interrupt context
///
/// Implementations must finish well within one tick period, must not block,
/// and must not call back into the tick source's configuration path. The
/// only way to get an [`InterruptContext`] here is from the tick source, so
/// foreground-only operations that demand a `ForegroundContext` are out of
/// reach.
pub trait PeriodicTask: Sync {
    /// Handle one tick
    fn on_tick(&self, cx: &InterruptContext);
}

impl<F> PeriodicTask for F
where
    F: Fn(&InterruptContext) + Sync,
{
    fn on_tick(&self, cx: &InterruptContext) {
        self(cx)
    }
}

/// Capability to run a [`PeriodicTask`] from a tick source
///
/// Pairs the task with the context it is allowed to run in.
#[derive(Clone, Copy)]
pub struct PeriodicHandler<'a> {
    task: &'a dyn PeriodicTask,
    context: ExecutionContext,
}

impl<'a> PeriodicHandler<'a> {
    /// Wrap `task` for interrupt-context execution
    pub fn new(task: &'a dyn PeriodicTask) -> Self {
        Self {
            task,
            context: ExecutionContext::Interrupt,
        }
    }

    /// Context the task runs in
    pub fn context(&self) -> ExecutionContext {
        self.context
    }

    /// Run the task for one tick
    #[inline]
    pub fn invoke(&self, cx: &InterruptContext) {
        self.task.on_tick(cx);
    }
}

impl fmt::Debug for PeriodicHandler<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PeriodicHandler")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Hardware (or simulated) timer that invokes a handler at a fixed cadence
///
/// `init_periodic` is a one-time setup call made before the foreground loop
/// starts. After it returns `Ok`, the handler runs once per `period`,
/// forever.
pub trait TickSource<'a> {
    /// Register `handler` and start ticking every `period`
    fn init_periodic(&mut self, period: TickPeriod, handler: PeriodicHandler<'a>) -> HalResult<()>;

    /// Configured period, if started
    fn period(&self) -> Option<TickPeriod>;
}
