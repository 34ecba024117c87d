use super::*;

#[test]
fn mul_div255_trunc_edges() {
    assert_eq!(mul_div255_trunc(255, 255), 255);
    assert_eq!(mul_div255_trunc(0, 255), 0);
    assert_eq!(mul_div255_trunc(254, 1), 0);
    assert_eq!(mul_div255_trunc(128, 128), 64);
}

#[test]
fn clamp_index_bounds_and_nan() {
    assert_eq!(clamp_index(-3.5, 0, 9), 0);
    assert_eq!(clamp_index(12.0, 0, 9), 9);
    assert_eq!(clamp_index(4.9, 0, 9), 4);
    assert_eq!(clamp_index(f64::NAN, 0, 9), 0);
    assert_eq!(clamp_index(f64::INFINITY, 0, 9), 9);
}
