use harris_core::color::hsv_to_rgb;
use harris_core::{ImageError, ImageResult, PixelBuffer};

use crate::convolution::convolve;
use crate::kernels::{gx_filter, gy_filter};

fn zip_with<F>(a: &PixelBuffer, b: &PixelBuffer, op: F) -> ImageResult<PixelBuffer>
where
    F: Fn(f32, f32) -> f32,
{
    if !a.same_shape(b) {
        return Err(ImageError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    let mut out = a.clone();
    out.as_mut_slice()
        .iter_mut()
        .zip(b.as_slice())
        .for_each(|(x, &y)| *x = op(*x, y));
    Ok(out)
}

pub fn add_image(a: &PixelBuffer, b: &PixelBuffer) -> ImageResult<PixelBuffer> {
    zip_with(a, b, |x, y| x + y)
}

pub fn sub_image(a: &PixelBuffer, b: &PixelBuffer) -> ImageResult<PixelBuffer> {
    zip_with(a, b, |x, y| x - y)
}

/// Min-max rescale all samples into `[0, 1]`. A constant image becomes zero.
pub fn feature_normalize(im: &mut PixelBuffer) {
    let (min, max) = im
        .as_slice()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let range = max - min;
    im.as_mut_slice().iter_mut().for_each(|v| {
        *v = if range > 0.0 { (*v - min) / range } else { 0.0 };
    });
}

/// Gradient magnitude and direction (radians, `atan2(gy, gx)`), both single-channel.
/// Multi-channel inputs have their channel gradients summed first.
pub fn sobel_image(im: &PixelBuffer) -> (PixelBuffer, PixelBuffer) {
    let gx = convolve(im, &gx_filter(), false);
    let gy = convolve(im, &gy_filter(), false);

    let mut magnitude = PixelBuffer::new(im.width(), im.height(), 1);
    let mut direction = PixelBuffer::new(im.width(), im.height(), 1);
    for (i, (&dx, &dy)) in gx.as_slice().iter().zip(gy.as_slice()).enumerate() {
        magnitude.as_mut_slice()[i] = (dx * dx + dy * dy).sqrt();
        direction.as_mut_slice()[i] = dy.atan2(dx);
    }
    (magnitude, direction)
}

/// False-colour gradient view: hue encodes direction, saturation and value
/// encode magnitude.
pub fn colorize_sobel(im: &PixelBuffer) -> ImageResult<PixelBuffer> {
    let (mut magnitude, mut direction) = sobel_image(im);
    feature_normalize(&mut magnitude);
    feature_normalize(&mut direction);

    let mut hsv = PixelBuffer::new(im.width(), im.height(), 3);
    hsv.plane_mut(0).copy_from_slice(direction.as_slice());
    hsv.plane_mut(1).copy_from_slice(magnitude.as_slice());
    hsv.plane_mut(2).copy_from_slice(magnitude.as_slice());
    hsv_to_rgb(&mut hsv)?;
    Ok(hsv)
}
