use super::*;

#[test]
fn round_to_matches_two_and_three_places() {
    assert_eq!(round_to(1.23456, 2), 1.23);
    assert_eq!(round_to(0.87654, 3), 0.877);
    assert_eq!(round_to(2.5, 0), 3.0);
    assert_eq!(round_to(-2.5, 0), -2.0);
}

#[test]
fn round_to_never_yields_negative_zero() {
    let r = round_to(-0.0001, 2);
    assert_eq!(r, 0.0);
    assert!(r.is_sign_positive());
}

#[test]
fn damp_moves_toward_target_without_overshoot() {
    let mut v = 0.0;
    for _ in 0..30 {
        let next = damp(v, 100.0, 6.0, 1.0 / 60.0);
        assert!(next > v && next < 100.0);
        v = next;
    }
    assert_eq!(damp(5.0, 5.0, 6.0, 1.0 / 60.0), 5.0);
}
