//! Periodic handler tests for blinker-hal

use std::sync::atomic::{AtomicU32, Ordering};

use blinker_core::{ExecutionContext, InterruptContext};
use blinker_hal::{PeriodicHandler, PeriodicTask};

struct CountingTask {
    ticks: AtomicU32,
}

impl PeriodicTask for CountingTask {
    fn on_tick(&self, _cx: &InterruptContext) {
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }
}

#[test]
fn test_handler_is_tagged_interrupt() {
    let task = CountingTask { ticks: AtomicU32::new(0) };
    let handler = PeriodicHandler::new(&task);
    assert_eq!(handler.context(), ExecutionContext::Interrupt);
}

#[test]
fn test_handler_invokes_task() {
    let task = CountingTask { ticks: AtomicU32::new(0) };
    let handler = PeriodicHandler::new(&task);
    let cx = InterruptContext::claim();
    for _ in 0..3 {
        handler.invoke(&cx);
    }
    assert_eq!(task.ticks.load(Ordering::Relaxed), 3);
}

#[test]
fn test_closure_as_task() {
    let hits = AtomicU32::new(0);
    let task = |_cx: &InterruptContext| {
        hits.fetch_add(1, Ordering::Relaxed);
    };
    let handler = PeriodicHandler::new(&task);
    handler.invoke(&InterruptContext::claim());
    assert_eq!(hits.load(Ordering::Relaxed), 1);
}
