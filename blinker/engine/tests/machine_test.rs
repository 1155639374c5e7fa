//! Timing state machine tests for blinker-engine

mod support;

use blinker_core::{
    DisplayCounter, EngineConfig, ForegroundContext, InterruptContext, IntervalMs, Tick,
};
use blinker_engine::{Phase, Snapshot, TimerState, TimingMachine};
use support::CountingLine;

fn state_with_interval(ms: u32) -> TimerState {
    let config = EngineConfig::new().with_default_interval(IntervalMs::new(ms).unwrap());
    TimerState::new(&config)
}

fn run(machine: &TimingMachine<'_, CountingLine>, ticks: u32) -> u32 {
    let cx = InterruptContext::claim();
    (0..ticks)
        .filter(|_| machine.tick(&cx) == Phase::Event)
        .count() as u32
}

#[test]
fn test_scenario_a_500ms() {
    let state = state_with_interval(500);
    let machine = TimingMachine::new(&state, CountingLine::default());

    assert_eq!(run(&machine, 499), 0);
    assert_eq!(state.counter(), DisplayCounter::ZERO);
    assert_eq!(state.elapsed(), 499);
    assert!(!state.output());

    assert_eq!(run(&machine, 1), 1);
    assert_eq!(state.counter().get(), 1);
    assert_eq!(state.elapsed(), 0);
    assert!(state.output());
    assert_eq!(machine.with_line(|line| line.toggles), 1);
}

#[test]
fn test_scenario_b_counter_wraps() {
    let state = state_with_interval(1);
    let machine = TimingMachine::new(&state, CountingLine::default());

    assert_eq!(run(&machine, 15), 15);
    assert_eq!(state.counter(), DisplayCounter::MAX);
    assert_eq!(run(&machine, 1), 1);
    assert_eq!(state.counter(), DisplayCounter::ZERO);
}

#[test]
fn test_threshold_law() {
    for rate in [1u32, 2, 3, 7, 10, 64] {
        let state = state_with_interval(rate);
        let machine = TimingMachine::new(&state, CountingLine::default());
        let cx = InterruptContext::claim();

        let mut events = 0;
        for n in 1..=rate * 5 + rate / 2 {
            if machine.tick(&cx) == Phase::Event {
                events += 1;
            }
            assert_eq!(state.elapsed(), n % rate, "rate {rate}, tick {n}");
            assert_eq!(events, n / rate, "rate {rate}, tick {n}");
            assert!(state.elapsed() < rate);
        }
        assert_eq!(state.toggle_count(), events);
    }
}

#[test]
fn test_output_flips_once_per_event() {
    let state = state_with_interval(3);
    let machine = TimingMachine::new(&state, CountingLine::default());
    let cx = InterruptContext::claim();

    let mut level = state.output();
    for _ in 0..100 {
        let phase = machine.tick(&cx);
        let now = state.output();
        assert_eq!(now != level, phase == Phase::Event);
        level = now;
    }
    machine.with_line(|line| {
        assert_eq!(line.toggles, state.toggle_count());
        assert_eq!(line.level, state.output());
    });
}

#[test]
fn test_interval_change_applies_on_next_tick() {
    let state = state_with_interval(500);
    let machine = TimingMachine::new(&state, CountingLine::default());
    let fg = ForegroundContext::claim();

    run(&machine, 10);
    state.publish_interval(&fg, 5);
    // elapsed 10 already exceeds the new threshold: the next tick fires.
    assert_eq!(run(&machine, 1), 1);
    assert_eq!(state.elapsed(), 0);
    assert_eq!(run(&machine, 5), 1);
}

#[test]
fn test_zero_interval_is_raised_to_one_tick() {
    let state = TimerState::default();
    let machine = TimingMachine::new(&state, CountingLine::default());
    state.publish_interval(&ForegroundContext::claim(), 0);

    assert_eq!(state.interval_ticks(), 1);
    assert_eq!(run(&machine, 4), 4);
    assert_eq!(state.elapsed(), 0);
}

#[test]
fn test_step_treats_zero_threshold_as_one() {
    let (next, phase) = Snapshot::start(0).step();
    assert_eq!(phase, Phase::Event);
    assert_eq!(next.counter.get(), 1);
    assert_eq!(next.elapsed, 0);
}

#[test]
fn test_step_matches_machine() {
    let state = state_with_interval(4);
    let machine = TimingMachine::new(&state, CountingLine::default());
    let cx = InterruptContext::claim();

    let mut model = Snapshot::start(4);
    for _ in 0..50 {
        let (next, expected) = model.step();
        assert_eq!(machine.tick(&cx), expected);
        assert_eq!(state.snapshot(), next);
        model = next;
    }
}

#[test]
fn test_output_fault_latches_but_signal_still_flips() {
    let state = state_with_interval(2);
    let line = CountingLine {
        fail: true,
        ..CountingLine::default()
    };
    let machine = TimingMachine::new(&state, line);

    assert_eq!(run(&machine, 2), 1);
    assert!(state.output_fault());
    assert!(state.output());
    assert_eq!(state.counter().get(), 1);

    machine.with_line(|line| line.fail = false);
    run(&machine, 2);
    assert!(state.output_fault());
    assert_eq!(machine.into_line().toggles, 1);
}

#[test]
fn test_uptime_counts_every_tick() {
    let state = state_with_interval(7);
    let machine = TimingMachine::new(&state, CountingLine::default());

    run(&machine, 1234);
    assert_eq!(state.uptime(), Tick::new(1234));
}
