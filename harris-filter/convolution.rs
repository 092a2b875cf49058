use harris_core::PixelBuffer;
use log::trace;
use rayon::prelude::*;

/// Filter response at a single output pixel of one image channel.
///
/// The filter centre sits on `(x, y)`; samples falling outside the image are
/// read with edge clamping.
#[inline]
fn response_at(image: &PixelBuffer, filter: &PixelBuffer, x: isize, y: isize, c: usize, fc: usize) -> f32 {
    let half_w = (filter.width() / 2) as isize;
    let half_h = (filter.height() / 2) as isize;
    let mut acc = 0.0f32;
    for fy in 0..filter.height() as isize {
        let iy = y - (half_h - fy);
        for fx in 0..filter.width() as isize {
            let ix = x - (half_w - fx);
            acc += filter.get(fx, fy, fc) * image.get(ix, iy, c);
        }
    }
    acc
}

/// Convolve `image` with `filter`.
///
/// The filter either has one channel, applied to every image channel, or one
/// channel per image channel. With `preserve` the output keeps the image's
/// channel count; without it the per-channel responses are summed into a
/// single plane (not averaged), which is how a multi-channel image yields one
/// gradient map.
///
/// # Panics
/// If the filter has neither 1 nor `image.channels()` channels.
pub fn convolve(image: &PixelBuffer, filter: &PixelBuffer, preserve: bool) -> PixelBuffer {
    assert!(
        filter.channels() == image.channels() || filter.channels() == 1,
        "filter has {} channels, image has {}",
        filter.channels(),
        image.channels()
    );

    let (w, h) = (image.width(), image.height());
    let per_channel = filter.channels() == image.channels();
    let filter_channel = |c: usize| if per_channel { c } else { 0 };

    trace!(
        "convolve {}x{}x{} with {}x{}x{} filter, preserve={}",
        w,
        h,
        image.channels(),
        filter.width(),
        filter.height(),
        filter.channels(),
        preserve
    );

    if preserve {
        let mut out = PixelBuffer::new(w, h, image.channels());
        // Planes are stacked, so row chunk `r` is row `r % h` of channel `r / h`.
        out.as_mut_slice()
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(r, row)| {
                let (c, y) = (r / h, (r % h) as isize);
                let fc = filter_channel(c);
                for (x, dst) in row.iter_mut().enumerate() {
                    *dst = response_at(image, filter, x as isize, y, c, fc);
                }
            });
        out
    } else {
        let mut out = PixelBuffer::new(w, h, 1);
        out.as_mut_slice()
            .par_chunks_mut(w)
            .enumerate()
            .for_each(|(y, row)| {
                let y = y as isize;
                for (x, dst) in row.iter_mut().enumerate() {
                    let mut sum = 0.0f32;
                    for c in 0..image.channels() {
                        sum += response_at(image, filter, x as isize, y, c, filter_channel(c));
                    }
                    *dst = sum;
                }
            });
        out
    }
}
