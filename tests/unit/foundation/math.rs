use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"reelforge");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_bytes(b"reel");
    b.write_bytes(b"forge");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn rng_is_deterministic_and_bounded() {
    let mut a = Rng64::new(42);
    let mut b = Rng64::new(42);
    for _ in 0..64 {
        let x = a.next_f64_01();
        assert_eq!(x, b.next_f64_01());
        assert!((0.0..1.0).contains(&x));
    }
    assert_ne!(Rng64::new(1).next_u64(), Rng64::new(2).next_u64());
}

#[test]
fn lerp_clamped_interpolates_and_clamps() {
    assert_eq!(lerp_clamped(15.0, (15.0, 45.0), (0.0, 1.0)), 0.0);
    assert_eq!(lerp_clamped(30.0, (15.0, 45.0), (0.0, 1.0)), 0.5);
    assert_eq!(lerp_clamped(45.0, (15.0, 45.0), (0.0, 1.0)), 1.0);
    assert_eq!(lerp_clamped(-5.0, (15.0, 45.0), (0.0, 1.0)), 0.0);
    assert_eq!(lerp_clamped(99.0, (15.0, 45.0), (0.0, 1.0)), 1.0);
    assert_eq!(lerp_clamped(0.0, (0.0, 30.0), (50.0, 0.0)), 50.0);
}

#[test]
fn lerp_clamped_zero_width_is_a_step() {
    assert_eq!(lerp_clamped(9.0, (10.0, 10.0), (1.0, 0.0)), 1.0);
    assert_eq!(lerp_clamped(10.0, (10.0, 10.0), (1.0, 0.0)), 0.0);
}
