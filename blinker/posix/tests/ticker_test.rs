//! Host ticker thread tests

use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

use blinker_core::{InterruptContext, TickPeriod};
use blinker_hal::{HalError, PeriodicHandler, TickSource};
use blinker_posix::time::period_duration;
use blinker_posix::ThreadTicker;

static HITS: AtomicU32 = AtomicU32::new(0);

fn count_hit(_cx: &InterruptContext) {
    HITS.fetch_add(1, Ordering::SeqCst);
}

static COUNTER: fn(&InterruptContext) = count_hit;

#[test]
fn test_period_duration() {
    assert_eq!(period_duration(TickPeriod::MILLISECOND), Duration::from_millis(1));
    assert_eq!(
        period_duration(TickPeriod::from_millis(10).unwrap()),
        Duration::from_millis(10)
    );
}

#[test]
fn test_ticker_thread() {
    let mut ticker = ThreadTicker::new();
    let period = TickPeriod::from_millis(10).unwrap();
    ticker
        .init_periodic(period, PeriodicHandler::new(&COUNTER))
        .unwrap();
    assert!(ticker.is_running());
    assert_eq!(ticker.period(), Some(period));

    // Let it run for ~100ms
    thread::sleep(Duration::from_millis(100));
    ticker.stop();
    assert!(!ticker.is_running());

    let count = HITS.load(Ordering::SeqCst);
    // ~10 ticks expected; missed deadlines are caught up, so only a floor
    assert!(count >= 5, "Expected ~10 ticks, got {}", count);
    assert_eq!(u64::from(count), ticker.fired());
}

#[test]
fn test_ticker_rejects_second_start() {
    static NOOP: fn(&InterruptContext) = |_| {};

    let mut ticker = ThreadTicker::new();
    ticker
        .init_periodic(TickPeriod::MILLISECOND, PeriodicHandler::new(&NOOP))
        .unwrap();
    assert_eq!(
        ticker.init_periodic(TickPeriod::MILLISECOND, PeriodicHandler::new(&NOOP)),
        Err(HalError::AlreadyStarted)
    );
}
