use harris_core::{Descriptor, PixelBuffer, Point};

use crate::detector::HarrisDetector;

/// Half-length of the cross-hair drawn by [`mark_spot`]
pub const MARKER_HALF_LEN: isize = 9;

/// Draw a magenta cross-hair centred on `p`.
///
/// Pixels outside the image are skipped, as are channels the image lacks,
/// so single-channel images get a white cross.
pub fn mark_spot(im: &mut PixelBuffer, p: Point) {
    let (x, y) = (p.x as isize, p.y as isize);
    for i in -MARKER_HALF_LEN..=MARKER_HALF_LEN {
        for (px, py) in [(x + i, y), (x, y + i)] {
            im.set(px, py, 0, 1.0);
            im.set(px, py, 1, 0.0);
            im.set(px, py, 2, 1.0);
        }
    }
}

/// Mark every descriptor's location
pub fn mark_corners(im: &mut PixelBuffer, corners: &[Descriptor]) {
    for d in corners {
        mark_spot(im, d.location);
    }
}

/// Run `detector` on `im`, mark what it finds and return the descriptors.
///
/// Descriptors are taken before drawing, so the markers never leak into them.
pub fn detect_and_draw_corners(im: &mut PixelBuffer, detector: &HarrisDetector) -> Vec<Descriptor> {
    let corners = detector.detect_corners(im);
    mark_corners(im, &corners);
    corners
}
