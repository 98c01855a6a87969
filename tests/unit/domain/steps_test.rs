use numeric_range::Range;

use crate::common::unit_interval;

#[test]
fn lazy_and_materialized_enumeration_agree() {
    let range = Range::new(-3, 3).unwrap();
    let lazy: Vec<f64> = range.steps(0.75).unwrap().collect();
    assert_eq!(lazy, range.enumerate_by(0.75).unwrap());
    assert_eq!(lazy, vec![-3.0, -2.25, -1.5, -0.75, 0.0, 0.75, 1.5, 2.25, 3.0]);
}

#[test]
fn steps_report_exact_length() {
    let steps = unit_interval().steps(0.1).unwrap();
    assert_eq!(steps.len(), 11);
    assert_eq!(steps.size_hint(), (11, Some(11)));
}

#[test]
fn reversed_steps_mirror_forward_order() {
    let range = unit_interval();
    let mut forward = range.enumerate_by(0.2).unwrap();
    forward.reverse();
    let backward: Vec<f64> = range.steps(0.2).unwrap().rev().collect();
    assert_eq!(backward, forward);
}
