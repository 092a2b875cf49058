//! RGB, HSV and grayscale conversions on 3-channel planar buffers.
//!
//! HSV components are all stored in `[0, 1]`, hue included.

use crate::error::{ImageError, ImageResult};
use crate::image::PixelBuffer;

fn require_rgb(im: &PixelBuffer) -> ImageResult<()> {
    if im.channels() != 3 {
        return Err(ImageError::ChannelMismatch {
            expected: 3,
            actual: im.channels(),
        });
    }
    Ok(())
}

/// Luma with the Rec. 601 weights
pub fn rgb_to_grayscale(im: &PixelBuffer) -> ImageResult<PixelBuffer> {
    require_rgb(im)?;
    let mut gray = PixelBuffer::new(im.width(), im.height(), 1);
    let (r, g, b) = (im.plane(0), im.plane(1), im.plane(2));
    for (i, out) in gray.plane_mut(0).iter_mut().enumerate() {
        *out = 0.299 * r[i] + 0.587 * g[i] + 0.114 * b[i];
    }
    Ok(gray)
}

/// Convert RGB to HSV in place
pub fn rgb_to_hsv(im: &mut PixelBuffer) -> ImageResult<()> {
    require_rgb(im)?;
    let n = im.width() * im.height();
    let data = im.as_mut_slice();
    for i in 0..n {
        let (r, g, b) = (data[i], data[n + i], data[2 * n + i]);
        let value = r.max(g).max(b);
        let chroma = value - r.min(g).min(b);
        let saturation = if value == 0.0 { 0.0 } else { chroma / value };

        let hue = if chroma == 0.0 {
            0.0
        } else {
            let h = if value == r {
                (g - b) / chroma
            } else if value == g {
                2.0 + (b - r) / chroma
            } else {
                4.0 + (r - g) / chroma
            };
            if h < 0.0 {
                1.0 + h / 6.0
            } else {
                h / 6.0
            }
        };

        data[i] = hue;
        data[n + i] = saturation;
        data[2 * n + i] = value;
    }
    Ok(())
}

/// Convert HSV back to RGB in place
pub fn hsv_to_rgb(im: &mut PixelBuffer) -> ImageResult<()> {
    require_rgb(im)?;
    let n = im.width() * im.height();
    let data = im.as_mut_slice();
    for i in 0..n {
        let (hue, saturation, value) = (data[i], data[n + i], data[2 * n + i]);
        let chroma = saturation * value;
        let m = value - chroma;
        let h = 6.0 * hue;

        let (r, g, b) = if chroma == 0.0 {
            (value, value, value)
        } else if h <= 1.0 {
            (value, m + h * chroma, m)
        } else if h <= 2.0 {
            (m - chroma * (h - 2.0), value, m)
        } else if h <= 3.0 {
            (m, value, m + chroma * (h - 2.0))
        } else if h <= 4.0 {
            (m, m - chroma * (h - 4.0), value)
        } else if h <= 5.0 {
            (m + chroma * (h - 4.0), m, value)
        } else {
            // sector [5, 6) wraps to h' in [-1, 0)
            let h = h - 6.0;
            (value, m, m - h * chroma)
        };

        data[i] = r;
        data[n + i] = g;
        data[2 * n + i] = b;
    }
    Ok(())
}
