//! Tests for most unstable sensor selection

use super::*;
use crate::Error;
use crate::app::services::stability_analyzer::find_most_unstable;

#[test]
fn test_selects_reference_sensor() {
    let records = reference_records();
    let unstable = find_most_unstable(&records).unwrap().unwrap();

    assert_eq!(unstable.id, 2);
    assert_eq!(unstable.average().unwrap(), 101.25);
    assert_eq!(unstable.max_deviation().unwrap(), 11.25);
}

#[test]
fn test_empty_input_returns_none() {
    let records: Vec<SensorRecord> = Vec::new();
    assert!(find_most_unstable(&records).unwrap().is_none());
}

#[test]
fn test_single_record_is_selected() {
    let records = vec![SensorRecord::new(8, vec![5.0])];
    let unstable = find_most_unstable(&records).unwrap().unwrap();

    assert_eq!(unstable.id, 8);
}

#[test]
fn test_tie_prefers_earlier_record() {
    // The last two records share a max deviation of exactly 1.0
    let records = vec![
        SensorRecord::new(1, vec![0.0, 0.0]),
        SensorRecord::new(20, vec![1.0, 3.0]),
        SensorRecord::new(30, vec![10.0, 12.0]),
    ];
    let unstable = find_most_unstable(&records).unwrap().unwrap();

    assert_eq!(unstable.id, 20);
}

#[test]
fn test_tie_among_all_zero_deviation_records() {
    let records = vec![
        SensorRecord::new(4, vec![42.0, 42.0]),
        SensorRecord::new(5, vec![7.0]),
    ];
    let unstable = find_most_unstable(&records).unwrap().unwrap();

    assert_eq!(unstable.id, 4);
}

#[test]
fn test_later_strictly_larger_record_wins() {
    let records = vec![
        SensorRecord::new(1, vec![1.0, 3.0]),
        SensorRecord::new(2, vec![1.0, 5.0]),
    ];
    let unstable = find_most_unstable(&records).unwrap().unwrap();

    assert_eq!(unstable.id, 2);
}

#[test]
fn test_duplicate_ids_are_distinct_records() {
    let records = vec![
        SensorRecord::new(3, vec![1.0, 1.0]),
        SensorRecord::new(3, vec![1.0, 9.0]),
    ];
    let unstable = find_most_unstable(&records).unwrap().unwrap();

    assert_eq!(unstable.values(), &[1.0, 9.0]);
}

#[test]
fn test_empty_values_record_fails_selection() {
    let records = vec![
        SensorRecord::new(1, vec![1.0, 2.0]),
        SensorRecord::new(99, Vec::new()),
    ];

    assert!(matches!(
        find_most_unstable(&records),
        Err(Error::EmptyValues { id: 99 })
    ));
}
