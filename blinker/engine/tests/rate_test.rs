//! Rate table and selector tests for blinker-engine

use blinker_core::{interval, BlinkError, EngineConfig, InputMask, IntervalMs};
use blinker_engine::{RateSelector, RateTable};

#[test]
fn test_edubase_table() {
    let table = RateTable::edubase();
    assert_eq!(table.len(), 4);
    assert_eq!(table.lookup(0), Some(interval!(1000 ms)));
    assert_eq!(table.lookup(1), Some(interval!(500 ms)));
    assert_eq!(table.lookup(2), Some(interval!(250 ms)));
    assert_eq!(table.lookup(3), Some(interval!(100 ms)));
    assert_eq!(table.lookup(4), None);
}

#[test]
fn test_scenario_c_switch_selection() {
    let table = RateTable::edubase();
    let mut selector = RateSelector::new(table, EngineConfig::new());

    let r1 = selector.select(InputMask::single(0).unwrap()).interval;
    let r2 = selector.select(InputMask::single(1).unwrap()).interval;
    assert_ne!(r1, r2);

    let released = selector.select(InputMask::EMPTY);
    assert_eq!(released.interval, r2);
    assert!(!released.changed);
}

#[test]
fn test_multiple_switches_keep_previous() {
    let mut selector = RateSelector::new(RateTable::edubase(), EngineConfig::new());
    selector.select(InputMask::single(3).unwrap());

    let both = selector.select(InputMask::from_bits(0b0011));
    assert_eq!(both.interval, interval!(100 ms));
    assert!(!both.changed);
}

#[test]
fn test_unmapped_switch_keeps_previous() {
    let mut selector = RateSelector::new(RateTable::edubase(), EngineConfig::new());
    let selection = selector.select(InputMask::single(6).unwrap());
    assert_eq!(selection.interval, interval!(500 ms));
}

#[test]
fn test_map_is_total_and_positive() {
    let table = RateTable::edubase();
    for previous in [IntervalMs::MIN, interval!(500 ms), IntervalMs::MAX] {
        for bits in 0..=u8::MAX {
            let mask = InputMask::from_bits(bits);
            let chosen = table.map(mask, previous);
            assert!(chosen.get() > 0);
            match mask.sole_switch().and_then(|s| table.lookup(s)) {
                Some(expected) => assert_eq!(chosen, expected),
                None => assert_eq!(chosen, previous),
            }
        }
    }
}

#[test]
fn test_map_is_deterministic() {
    let table = RateTable::edubase();
    let mask = InputMask::single(2).unwrap();
    assert_eq!(
        table.map(mask, interval!(7 ms)),
        table.map(mask, interval!(7 ms))
    );
}

#[test]
fn test_custom_table_builder() {
    let table = RateTable::new()
        .with_rate(5, interval!(40 ms))
        .and_then(|t| t.with_rate(5, interval!(80 ms)))
        .unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.lookup(5), Some(interval!(80 ms)));
    assert_eq!(table.entries()[0].switch, 5);
}

#[test]
fn test_insert_rejects_out_of_range_switch() {
    let mut table = RateTable::new();
    assert_eq!(
        table.insert(8, interval!(10 ms)),
        Err(BlinkError::SwitchOutOfRange(8))
    );
    assert!(table.is_empty());
}

#[test]
fn test_selector_applies_min_interval() {
    let table = RateTable::new().with_rate(0, interval!(2 ms)).unwrap();
    let config = EngineConfig::new().with_min_interval(interval!(20 ms));
    let mut selector = RateSelector::new(table, config);

    let selection = selector.select(InputMask::single(0).unwrap());
    assert_eq!(selection.interval, interval!(20 ms));
    assert_eq!(selector.current_ticks(), 20);
}

#[test]
fn test_selector_starts_at_default() {
    let config = EngineConfig::new().with_default_interval(interval!(250 ms));
    let selector = RateSelector::new(RateTable::new(), config);
    assert_eq!(selector.current(), interval!(250 ms));
    assert!(selector.table().is_empty());
}
