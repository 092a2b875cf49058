use harris_detect::{harris_corner_detector, DetectorBuilder, PixelBuffer, Point, PATCH_SIZE};
use proptest::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Gray image with a bright square covering `x0..=x1`, `y0..=y1` in every channel
fn square_image(w: usize, h: usize, c: usize, (x0, y0): (isize, isize), (x1, y1): (isize, isize)) -> PixelBuffer {
    let mut img = PixelBuffer::filled(w, h, c, 0.5);
    for ch in 0..c {
        for y in y0..=y1 {
            for x in x0..=x1 {
                img.set(x, y, ch, 1.0);
            }
        }
    }
    img
}

fn locations(img: &PixelBuffer, sigma: f32, threshold: f32, nms: usize) -> Vec<Point> {
    harris_corner_detector(img, sigma, threshold, nms)
        .iter()
        .map(|d| d.location)
        .collect()
}

#[test]
fn small_square_merges_into_single_centre_corner() {
    init_logger();
    // With sigma = 1 the Gaussian window spans the whole 3x3 square, so the
    // four corner responses merge into one maximum at its centre.
    for channels in [1, 3] {
        let img = square_image(9, 9, channels, (3, 3), (5, 5));
        let corners = harris_corner_detector(&img, 1.0, 0.0, 2);
        assert_eq!(corners.len(), 1, "channels = {}", channels);
        assert_eq!(corners[0].location, Point::new(4, 4));
        assert_eq!(corners[0].len(), PATCH_SIZE * PATCH_SIZE * channels);
    }
}

#[test]
fn large_square_yields_its_four_corners() {
    init_logger();
    let img = square_image(21, 21, 1, (6, 6), (14, 14));
    let expected = vec![
        Point::new(6, 6),
        Point::new(14, 6),
        Point::new(6, 14),
        Point::new(14, 14),
    ];
    assert_eq!(locations(&img, 1.0, 0.0, 2), expected);
    assert_eq!(locations(&img, 1.0, 0.0, 3), expected);
}

#[test]
fn corner_descriptors_see_the_square() {
    let img = square_image(21, 21, 1, (6, 6), (14, 14));
    let corners = harris_corner_detector(&img, 1.0, 0.0, 2);
    let top_left = &corners[0];
    assert_eq!(top_left.location, Point::new(6, 6));
    // Patch origin (4, 4) is background, centre is inside the square
    assert_eq!(top_left.values[0], -0.5);
    // Bottom-right of the patch is inside the square too
    assert_eq!(top_left.values[24], 0.0);
}

#[test]
fn corners_follow_translation() {
    let base = square_image(21, 21, 1, (6, 6), (14, 14));
    let shifted = square_image(24, 24, 1, (8, 7), (16, 15));

    for threshold in [0.0, 0.5] {
        let moved: Vec<Point> = locations(&base, 1.0, threshold, 2)
            .into_iter()
            .map(|p| Point::new(p.x + 2, p.y + 1))
            .collect();
        assert_eq!(locations(&shifted, 1.0, threshold, 2), moved);
    }
    assert!(locations(&shifted, 1.0, 2.0, 2).is_empty());
}

#[test]
fn constant_image_has_no_corners() {
    for &(w, h, c) in &[(1, 1, 1), (9, 9, 1), (16, 11, 3)] {
        let img = PixelBuffer::filled(w, h, c, 0.3);
        for &sigma in &[0.5, 1.0, 2.5] {
            for &threshold in &[0.0, 1.0, 50.0] {
                assert!(harris_corner_detector(&img, sigma, threshold, 2).is_empty());
            }
        }
    }
}

#[test]
fn builder_detector_agrees_with_free_function() {
    let img = square_image(21, 21, 3, (6, 6), (14, 14));
    let detector = DetectorBuilder::new()
        .sigma(1.0)
        .threshold(0.0)
        .nms_radius(2)
        .threads(1)
        .build()
        .unwrap();
    assert_eq!(detector.detect_corners(&img), harris_corner_detector(&img, 1.0, 0.0, 2));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn raising_threshold_never_adds_corners(
        data in prop::collection::vec(0.0f32..1.0, 12 * 12),
        low in -1.0f32..1.0,
        step in 0.0f32..2.0,
    ) {
        let img = PixelBuffer::from_vec(12, 12, 1, data).unwrap();
        let loose = harris_corner_detector(&img, 1.0, low, 2);
        let strict = harris_corner_detector(&img, 1.0, low + step, 2);
        prop_assert!(strict.len() <= loose.len());
        for d in &strict {
            prop_assert!(loose.iter().any(|l| l.location == d.location));
        }
    }
}
