use harris_core::PixelBuffer;
use rayon::prelude::*;

use crate::structure::{IXX, IXY, IYY};

/// Trace penalty used when none is configured
pub const DEFAULT_ALPHA: f32 = 0.06;

/// Harris response `det(M) - alpha * trace(M)²` per pixel.
///
/// `M = [[Ixx, Ixy], [Ixy, Iyy]]` is read from a structure matrix produced by
/// [`crate::structure_matrix`]. Corners (two large eigenvalues) score high,
/// edges (one large, one near zero) score negative, flat regions near zero.
pub fn cornerness_response(s: &PixelBuffer, alpha: f32) -> PixelBuffer {
    assert_eq!(s.channels(), 3, "structure matrix must have 3 channels");

    let (a, d, b) = (s.plane(IXX), s.plane(IYY), s.plane(IXY));
    let mut response = PixelBuffer::new(s.width(), s.height(), 1);
    response
        .as_mut_slice()
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, r)| {
            let det = a[i] * d[i] - b[i] * b[i];
            let trace = a[i] + d[i];
            *r = det - alpha * trace * trace;
        });
    response
}
