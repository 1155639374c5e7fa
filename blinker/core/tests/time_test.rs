//! Time type tests for blinker-core

use blinker_core::{interval, BlinkError, EngineConfig, IntervalMs, Tick, TickPeriod};

#[test]
fn test_interval_rejects_zero() {
    assert_eq!(IntervalMs::new(0), Err(BlinkError::ZeroInterval));
    assert_eq!(IntervalMs::try_from(0u32), Err(BlinkError::ZeroInterval));
}

#[test]
fn test_interval_accepts_positive() {
    let interval = IntervalMs::new(250).unwrap();
    assert_eq!(interval.get(), 250);
    assert_eq!(u32::from(interval), 250);
}

#[test]
fn test_interval_clamped_to_floor() {
    let floor = IntervalMs::new(10).unwrap();
    assert_eq!(IntervalMs::clamped(0, floor), floor);
    assert_eq!(IntervalMs::clamped(3, floor), floor);
    assert_eq!(IntervalMs::clamped(40, floor).get(), 40);
}

#[test]
fn test_interval_macro() {
    assert_eq!(interval!(500 ms).get(), 500);
    assert_eq!(interval!(2 s).get(), 2000);
    assert_eq!(interval!(0 ms), IntervalMs::MIN);
}

#[test]
fn test_interval_ticks_rounds_up() {
    let one_ms = TickPeriod::MILLISECOND;
    let five_ms = TickPeriod::from_millis(5).unwrap();
    assert_eq!(interval!(500 ms).ticks(one_ms), 500);
    assert_eq!(interval!(500 ms).ticks(five_ms), 100);
    assert_eq!(interval!(501 ms).ticks(five_ms), 101);
    assert_eq!(interval!(1 ms).ticks(five_ms), 1);
}

#[test]
fn test_tick_period_rejects_zero() {
    assert_eq!(TickPeriod::from_millis(0), Err(BlinkError::ZeroPeriod));
    assert_eq!(TickPeriod::default().as_millis(), 1);
    assert_eq!(TickPeriod::MILLISECOND.as_micros(), 1_000);
}

#[test]
fn test_tick_wraps() {
    let mut tick = Tick::MAX;
    tick.increment();
    assert_eq!(tick, Tick::ZERO);
    assert_eq!(Tick::new(3).elapsed_since(Tick::MAX), 4);
}

#[test]
fn test_default_config() {
    let config = EngineConfig::default();
    assert_eq!(config.tick_period, TickPeriod::MILLISECOND);
    assert_eq!(config.default_interval.get(), 500);
    assert_eq!(config.min_interval, IntervalMs::MIN);
    assert_eq!(IntervalMs::default().get(), 500);
}

#[test]
fn test_config_min_interval_raises_default() {
    let config = EngineConfig::new()
        .with_default_interval(interval!(20 ms))
        .with_min_interval(interval!(50 ms));
    assert_eq!(config.default_interval.get(), 50);
    assert_eq!(config.clamp(interval!(10 ms)).get(), 50);
    assert_eq!(config.ticks_for(interval!(100 ms)), 100);
}

#[test]
fn test_config_ticks_for_coarse_period() {
    let config = EngineConfig::new().with_tick_period(TickPeriod::from_millis(10).unwrap());
    assert_eq!(config.ticks_for(interval!(500 ms)), 50);
    assert_eq!(config.ticks_for(interval!(1 ms)), 1);
}
