use super::*;

#[test]
fn same_seed_same_sequence() {
    let mut a = Rng64::new(7);
    let mut b = Rng64::new(7);
    for _ in 0..32 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = Rng64::new(1);
    let mut b = Rng64::new(2);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn unit_interval_and_range_bounds() {
    let mut r = Rng64::new(42);
    for _ in 0..1000 {
        let v = r.next_f64_01();
        assert!((0.0..1.0).contains(&v));
        let w = r.range_f64(-3.0, 5.0);
        assert!((-3.0..5.0).contains(&w));
    }
}

#[test]
fn chance_extremes() {
    let mut r = Rng64::new(9);
    for _ in 0..100 {
        assert!(!r.chance(0.0));
        assert!(r.chance(1.0));
    }
}

#[test]
fn matches_reference_splitmix64_output() {
    let mut r = Rng64::new(0);
    assert_eq!(r.next_u64(), 0xE220_A839_7B1D_CDAF);
    let mut r = Rng64::new(0);
    assert_eq!(r.next_f64_01(), (0xE220_A839_7B1D_CDAFu64 >> 11) as f64 / (1u64 << 53) as f64);
}
