use harris_core::PixelBuffer;
use rayon::prelude::*;

/// Response given to suppressed pixels. No finite threshold admits it.
pub const SUPPRESSED: f32 = f32::MIN;

/// Keep only local maxima of a response map.
///
/// A pixel is replaced by [`SUPPRESSED`] when any pixel in the
/// `(2 * radius + 1)²` window around it has a strictly greater response.
/// Equal neighbours do not suppress each other, so plateaus survive whole.
/// Window reads past the border clamp to the edge.
///
/// Running the suppression again on its own output changes nothing.
///
/// # Panics
/// If `response` is not single-channel or `radius < 1`.
pub fn non_max_suppression(response: &PixelBuffer, radius: usize) -> PixelBuffer {
    assert_eq!(response.channels(), 1, "response map must be single-channel");
    assert!(radius >= 1, "nms radius must be at least 1");

    let r = radius as isize;
    let mut out = response.clone();
    out.as_mut_slice()
        .par_chunks_mut(response.width())
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as isize;
            for (x, dst) in row.iter_mut().enumerate() {
                let x = x as isize;
                let v = response.get(x, y, 0);
                let dominated = (y - r..=y + r)
                    .any(|ny| (x - r..=x + r).any(|nx| response.get(nx, ny, 0) > v));
                if dominated {
                    *dst = SUPPRESSED;
                }
            }
        });
    out
}
