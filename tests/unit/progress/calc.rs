use super::*;
use crate::foundation::error::StackError;

#[test]
fn progress_clamps_outside_window() {
    for current in [-1000.0, -1.0, 99.999] {
        assert_eq!(progress(current, 100.0, 200.0), 0.0);
    }
    for current in [200.001, 250.0, 1e9] {
        assert_eq!(progress(current, 100.0, 200.0), 1.0);
    }
}

#[test]
fn progress_is_linear_and_monotonic_inside() {
    assert_eq!(progress(100.0, 100.0, 200.0), 0.0);
    assert_eq!(progress(150.0, 100.0, 200.0), 0.5);
    assert_eq!(progress(200.0, 100.0, 200.0), 1.0);

    let mut last = 0.0;
    let mut s = 90.0;
    while s <= 210.0 {
        let p = progress(s, 100.0, 200.0);
        assert!(p >= last);
        assert!((0.0..=1.0).contains(&p));
        last = p;
        s += 0.5;
    }
}

#[test]
fn resolve_distance_handles_both_forms() {
    assert_eq!(resolve_distance("20%", 800.0).unwrap(), 160.0);
    assert_eq!(resolve_distance("10%", 0.0).unwrap(), 0.0);
    assert_eq!(resolve_distance("75", 800.0).unwrap(), 75.0);
    assert!(matches!(
        resolve_distance("auto", 800.0),
        Err(StackError::InvalidConfiguration(_))
    ));
}

#[test]
fn trigger_window_is_closed() {
    let w = TriggerWindow {
        start: 10.0,
        end: 20.0,
    };
    assert!(w.contains(10.0));
    assert!(w.contains(20.0));
    assert!(!w.contains(9.99));
    assert!(!w.contains(20.01));

    let empty = TriggerWindow {
        start: 30.0,
        end: 20.0,
    };
    assert!(!empty.contains(25.0));
}

#[test]
fn collapsed_window_steps_at_start() {
    let start = 1e19;
    let end = start + 0.8 * 800.0;
    assert_eq!(end, start);
    assert_eq!(progress(start - 1e6, start, end), 0.0);
    assert_eq!(progress(start, start, end), 1.0);
    assert_eq!(progress(5.0, 5.0, 1.0), 1.0);
}
