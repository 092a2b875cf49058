use harris_core::PixelBuffer;
use harris_filter::kernels::{gx_filter, gy_filter};
use harris_filter::{convolve, smooth};
use log::debug;
use rayon::prelude::*;

/// Channel of the structure matrix holding weighted `Ix²`
pub const IXX: usize = 0;
/// Channel holding weighted `Iy²`
pub const IYY: usize = 1;
/// Channel holding weighted `Ix·Iy`
pub const IXY: usize = 2;

/// Gaussian-weighted second-moment matrix of the image gradients.
///
/// Returns a 3-channel buffer laid out as [`IXX`], [`IYY`], [`IXY`]. Gradients
/// of a multi-channel image are summed over channels before the products are
/// formed.
///
/// # Panics
/// If `sigma <= 0`.
pub fn structure_matrix(image: &PixelBuffer, sigma: f32) -> PixelBuffer {
    let ix = convolve(image, &gx_filter(), false);
    let iy = convolve(image, &gy_filter(), false);

    let (w, h) = (image.width(), image.height());
    let n = w * h;
    let mut products = PixelBuffer::new(w, h, 3);
    let (gx, gy) = (ix.as_slice(), iy.as_slice());

    products
        .as_mut_slice()
        .par_chunks_mut(n)
        .enumerate()
        .for_each(|(c, plane)| {
            for (i, dst) in plane.iter_mut().enumerate() {
                *dst = match c {
                    IXX => gx[i] * gx[i],
                    IYY => gy[i] * gy[i],
                    _ => gx[i] * gy[i],
                };
            }
        });

    debug!("structure matrix {}x{} from {} channels, sigma={}", w, h, image.channels(), sigma);
    smooth(&products, sigma)
}
