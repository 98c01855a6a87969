use numeric_range::{DomainError, Range};
use proptest::prelude::*;

use crate::common::{strict, unit_interval};

#[test]
fn quarter_steps_cover_unit_interval() {
    assert_eq!(
        unit_interval().enumerate_by(0.25).unwrap(),
        vec![0.0, 0.25, 0.5, 0.75, 1.0]
    );
}

#[test]
fn failed_mutation_is_atomic() {
    let mut range = Range::new(3, 10).unwrap();
    let before = range;

    assert!(matches!(range.set_max(2), Err(DomainError::InvalidOrdering { .. })));
    assert!(matches!(range.set_min("x"), Err(DomainError::InvalidValue { .. })));
    assert_eq!(range, before);
}

#[test]
fn strict_range_still_includes_its_bounds() {
    let range = strict(-1.0, 1.0);
    assert!(range.includes(-1).unwrap());
    assert!(range.includes(1).unwrap());
}

#[test]
fn strict_range_rejects_collapsing_mutation() {
    let mut range = strict(0.0, 5.0);
    assert!(range.set_max(0).is_err());
    assert_eq!(range.max(), 5.0);
}

proptest! {
    #[test]
    fn clamped_values_are_fixed_points(x in -10.0..10.0_f64) {
        let range = unit_interval();
        let once = range.incorporate(x).unwrap();
        prop_assert_eq!(range.incorporate(once).unwrap(), once);
    }
}
