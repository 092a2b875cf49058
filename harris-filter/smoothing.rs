use harris_core::PixelBuffer;

use crate::convolution::convolve;
use crate::kernels::gaussian_kernel_1d;

/// Gaussian blur as a horizontal pass followed by a vertical pass.
///
/// Equivalent, up to float rounding, to one [`convolve`] with
/// [`crate::kernels::gaussian_filter`], at `O(size)` instead of `O(size²)`
/// work per sample. Channels are kept.
///
/// # Panics
/// If `sigma <= 0`.
pub fn smooth(image: &PixelBuffer, sigma: f32) -> PixelBuffer {
    let row = gaussian_kernel_1d(sigma);
    let column = transpose(&row);

    let horizontal = convolve(image, &row, true);
    convolve(&horizontal, &column, true)
}

/// Swap the axes of a filter
fn transpose(filter: &PixelBuffer) -> PixelBuffer {
    let mut t = PixelBuffer::new(filter.height(), filter.width(), filter.channels());
    for c in 0..filter.channels() {
        for y in 0..filter.height() as isize {
            for x in 0..filter.width() as isize {
                t.set(y, x, c, filter.get(x, y, c));
            }
        }
    }
    t
}
