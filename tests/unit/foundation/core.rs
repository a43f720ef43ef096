use super::*;

#[test]
fn parses_percent_and_pixels() {
    assert_eq!(Distance::parse("20%").unwrap(), Distance::Percent(20.0));
    assert_eq!(Distance::parse(" 12.5 % ").unwrap(), Distance::Percent(12.5));
    assert_eq!(Distance::parse("120").unwrap(), Distance::Px(120.0));
    assert_eq!(Distance::parse("120px").unwrap(), Distance::Px(120.0));
    assert_eq!(Distance::parse("-4").unwrap(), Distance::Px(-4.0));
}

#[test]
fn rejects_garbage() {
    for bad in ["", "%", "abc", "twenty%", "NaN", "inf%"] {
        let err = Distance::parse(bad).unwrap_err();
        assert!(
            matches!(err, StackError::InvalidConfiguration(_)),
            "{bad:?} -> {err}"
        );
    }
}

#[test]
fn resolve_scales_only_percentages() {
    assert_eq!(Distance::Percent(20.0).resolve(800.0), 160.0);
    assert_eq!(Distance::Px(42.0).resolve(800.0), 42.0);
}

#[test]
fn serde_accepts_numbers_and_strings() {
    let d: Distance = serde_json::from_str("\"10%\"").unwrap();
    assert_eq!(d, Distance::Percent(10.0));
    let d: Distance = serde_json::from_str("64").unwrap();
    assert_eq!(d, Distance::Px(64.0));
    assert!(serde_json::from_str::<Distance>("\"ten\"").is_err());

    let s = serde_json::to_string(&Distance::Percent(20.0)).unwrap();
    assert_eq!(s, "\"20%\"");
}
