use harris_core::{Descriptor, PixelBuffer, Point};
use rayon::prelude::*;

/// Side length of the square patch sampled around each point
pub const PATCH_SIZE: usize = 5;

/// Describe the `PATCH_SIZE × PATCH_SIZE` neighbourhood of `point`.
///
/// Each sample has the centre value of its channel subtracted, which cancels
/// uniform brightness offsets. The centre itself contributes a zero so every
/// descriptor has exactly `PATCH_SIZE² * channels` values, ordered channel,
/// then row, then column. Patch pixels past the border clamp to the edge.
pub fn describe_point(image: &PixelBuffer, point: Point) -> Descriptor {
    let half = (PATCH_SIZE / 2) as isize;
    let (px, py) = (point.x as isize, point.y as isize);
    let mut values = Vec::with_capacity(PATCH_SIZE * PATCH_SIZE * image.channels());

    for c in 0..image.channels() {
        let centre = image.get(px, py, c);
        for dy in -half..=half {
            for dx in -half..=half {
                values.push(image.get(px + dx, py + dy, c) - centre);
            }
        }
    }

    Descriptor { location: point, values }
}

/// Describe every point, keeping the input order
pub fn describe_points(image: &PixelBuffer, points: &[Point]) -> Vec<Descriptor> {
    points.par_iter().map(|&p| describe_point(image, p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indexed(w: usize, h: usize, c: usize) -> PixelBuffer {
        let mut img = PixelBuffer::new(w, h, c);
        for ch in 0..c {
            for y in 0..h as isize {
                for x in 0..w as isize {
                    img.set(x, y, ch, (ch * 100) as f32 + (y * 10 + x) as f32);
                }
            }
        }
        img
    }

    #[test]
    fn test_length_and_zero_centre() {
        let img = indexed(9, 9, 3);
        let d = describe_point(&img, Point::new(4, 4));
        assert_eq!(d.len(), PATCH_SIZE * PATCH_SIZE * 3);
        assert_eq!(d.location, Point::new(4, 4));
        for c in 0..3 {
            assert_eq!(d.values[c * 25 + 12], 0.0);
        }
    }

    #[test]
    fn test_row_major_order() {
        let img = indexed(9, 9, 1);
        let d = describe_point(&img, Point::new(4, 4));
        // First entry is (-2, -2): 10 * -2 + -2
        assert_eq!(d.values[0], -22.0);
        // Second entry steps along the row
        assert_eq!(d.values[1], -21.0);
        // Sixth entry starts the next row
        assert_eq!(d.values[5], -12.0);
        assert_eq!(d.values[24], 22.0);
    }

    #[test]
    fn test_brightness_invariance() {
        let img = indexed(9, 9, 2);
        let mut brighter = img.clone();
        brighter.shift(0, 50.0);
        brighter.shift(1, 50.0);
        let p = Point::new(3, 5);
        assert_eq!(describe_point(&img, p), describe_point(&brighter, p));
    }

    #[test]
    fn test_border_patch_clamps() {
        let img = indexed(6, 6, 1);
        let d = describe_point(&img, Point::new(0, 0));
        assert_eq!(d.len(), 25);
        // (-2, -2) and (-1, -1) both clamp to the point itself
        assert_eq!(d.values[0], 0.0);
        assert_eq!(d.values[6], 0.0);
        assert_eq!(d.values[24], 22.0);
    }

    #[test]
    fn test_describe_points_keeps_order() {
        let img = indexed(9, 9, 1);
        let points = [Point::new(7, 1), Point::new(2, 2), Point::new(5, 8)];
        let ds = describe_points(&img, &points);
        let locations: Vec<Point> = ds.iter().map(|d| d.location).collect();
        assert_eq!(locations, points.to_vec());
    }
}
