use super::*;

#[test]
fn clamped_saturates_each_channel() {
    assert_eq!(Rgba8::clamped(-5, 300, 128, 999), Rgba8::new(0, 255, 128, 255));
}

#[test]
fn premultiply_truncates() {
    // 200 * 128 / 255 = 100.39 -> 100, 1 * 128 / 255 = 0.5 -> 0
    let p = Rgba8::new(200, 1, 255, 128).premultiply();
    assert_eq!(p, Rgba8Premul::from_bytes([100, 0, 128, 128]));
}

#[test]
fn premultiplied_channels_never_exceed_alpha() {
    for a in [0u8, 1, 2, 17, 128, 254, 255] {
        for c in [0u8, 1, 100, 254, 255] {
            let p = Rgba8::new(c, c, c, a).premultiply();
            assert!(p.r <= p.a && p.g <= p.a && p.b <= p.a);
        }
    }
}

#[test]
fn to_straight_of_transparent_is_all_zero() {
    let p = Rgba8Premul::from_bytes([3, 4, 5, 0]);
    assert_eq!(p.to_straight(), Rgba8::TRANSPARENT);
}

#[test]
fn to_straight_clamps_and_truncates() {
    let p = Rgba8Premul::from_bytes([100, 0, 200, 128]);
    // 100 * 255 / 128 = 199.2 -> 199; 200 * 255 / 128 = 398 -> 255
    assert_eq!(p.to_straight(), Rgba8::new(199, 0, 255, 128));
}

#[test]
fn opaque_roundtrip_is_exact() {
    let c = Rgba8::opaque(12, 200, 77);
    assert_eq!(c.premultiply().to_straight(), c);
}
