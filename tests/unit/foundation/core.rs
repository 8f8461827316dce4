use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    let empty = FrameRange::from_start_len(7, 0);
    assert!(empty.is_empty());
    assert!(!empty.contains(FrameIndex(7)));
    assert_eq!(empty.len_frames(), 0);
}

#[test]
fn secs_to_frames_ceil_matches_float_product() {
    let fps = Fps::integral(30).unwrap();
    assert_eq!(fps.secs_to_frames_ceil(3.0), 90);
    assert_eq!(fps.secs_to_frames_ceil(2.5), 75);
    // (0.1 + 0.2) * 30 = 9.000000000000002 in f64.
    assert_eq!(fps.secs_to_frames_ceil(0.1 + 0.2), 10);
    assert_eq!(fps.secs_to_frames_ceil(0.1), 3);
    assert_eq!(fps.secs_to_frames_ceil(0.0), 0);
    assert_eq!(fps.secs_to_frames_ceil(-1.0), 0);
    assert_eq!(fps.secs_to_frames_ceil(f64::NAN), 0);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let ntsc = Fps::new(30000, 1001).unwrap();
    assert!((ntsc.as_f64() - 29.97).abs() < 1e-3);
}

#[test]
fn hex_colors_parse_short_long_and_alpha() {
    assert_eq!(
        Rgba8Premul::from_hex("#fff").unwrap(),
        Rgba8Premul::opaque(255, 255, 255)
    );
    assert_eq!(
        Rgba8Premul::from_hex("FF0000").unwrap(),
        Rgba8Premul::opaque(255, 0, 0)
    );
    let half = Rgba8Premul::from_hex("#ffffff80").unwrap();
    assert_eq!(half.a, 128);
    assert_eq!(half.r, 128);
    assert!(Rgba8Premul::from_hex("#12345").is_err());
    assert!(Rgba8Premul::from_hex("#gggggg").is_err());
    assert!(Rgba8Premul::from_hex("#ééé").is_err());
}
