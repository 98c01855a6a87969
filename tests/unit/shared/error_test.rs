use numeric_range::{DomainError, ErrorContext, NumericRangeError, Range};

#[test]
fn context_preserves_domain_error() {
    let err: NumericRangeError = Range::new(2, 1).context("loading bounds").unwrap_err();
    assert!(err.to_string().starts_with("loading bounds: "));
    assert!(matches!(err.domain(), Some(DomainError::InvalidOrdering { .. })));
}

#[test]
fn ordering_error_names_both_bounds() {
    let err = Range::new(2.5, 1).unwrap_err();
    assert_eq!(
        err.to_string(),
        "The maximal value cannot be smaller than the minimal value (min = 2.5, max = 1)"
    );
}

#[test]
fn step_error_is_invalid_argument() {
    let err = Range::new(0, 1).unwrap().enumerate_by(0).unwrap_err();
    assert_eq!(
        err,
        DomainError::invalid_argument("step", "the step must be a positive number, got 0")
    );
}
