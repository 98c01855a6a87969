use numeric_range_shared_kernel::{DomainError, Number};

#[test]
fn parses_trimmed_decimal_text() {
    assert_eq!("  1.5 ".parse::<Number>().unwrap(), 1.5);
    assert_eq!("-3".parse::<Number>().unwrap(), -3.0);
    assert_eq!("1e3".parse::<Number>().unwrap(), 1000.0);
    assert_eq!("inf".parse::<Number>().unwrap(), f64::INFINITY);
}

#[test]
fn rejects_blank_and_non_numeric_text() {
    for text in ["", "   ", "a", "1,5", "NaN"] {
        let err = text.parse::<Number>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }), "{text:?} gave {err:?}");
    }
}

#[test]
fn new_rejects_nan_only() {
    assert!(Number::new(f64::NAN).is_err());
    assert!(Number::new(f64::NEG_INFINITY).is_ok());
    assert!(Number::new(-0.0).is_ok());
}

#[test]
fn clamp_to_projects_onto_bounds() {
    let lower = Number::new(1.0).unwrap();
    let upper = Number::new(3.0).unwrap();
    assert_eq!(Number::new(-2.0).unwrap().clamp_to(lower, upper), 1.0);
    assert_eq!(Number::new(2.5).unwrap().clamp_to(lower, upper), 2.5);
    assert_eq!(Number::new(9.0).unwrap().clamp_to(lower, upper), 3.0);
}
