use crate::image::PixelBuffer;

/// Sample the nearest pixel to a fractional coordinate (clamped)
pub fn nn_interpolate(im: &PixelBuffer, x: f32, y: f32, c: usize) -> f32 {
    im.get(x.round() as isize, y.round() as isize, c)
}

/// Bilinear blend of the four pixels surrounding a fractional coordinate
pub fn bilinear_interpolate(im: &PixelBuffer, x: f32, y: f32, c: usize) -> f32 {
    let (left, right) = (x.floor(), x.ceil());
    let (top, bottom) = (y.floor(), y.ceil());
    let (l, r, t, b) = (left as isize, right as isize, top as isize, bottom as isize);

    // On integer coordinates floor == ceil and both weights vanish.
    let (wx, wy) = if left == right { (1.0, 0.0) } else { (right - x, x - left) };
    let (wt, wb) = if top == bottom { (1.0, 0.0) } else { (bottom - y, y - top) };

    let q_left = wt * im.get(l, t, c) + wb * im.get(l, b, c);
    let q_right = wt * im.get(r, t, c) + wb * im.get(r, b, c);
    wx * q_left + wy * q_right
}

fn resize_with<F>(im: &PixelBuffer, width: usize, height: usize, sample: F) -> PixelBuffer
where
    F: Fn(&PixelBuffer, f32, f32, usize) -> f32,
{
    let mut out = PixelBuffer::new(width, height, im.channels());

    // Align pixel centres: -0.5 maps to -0.5 on both grids.
    let ax = im.width() as f32 / width as f32;
    let ay = im.height() as f32 / height as f32;
    let bx = 0.5 * (ax - 1.0);
    let by = 0.5 * (ay - 1.0);

    for c in 0..im.channels() {
        for y in 0..height {
            let sy = ay * y as f32 + by;
            for x in 0..width {
                let sx = ax * x as f32 + bx;
                out.set(x as isize, y as isize, c, sample(im, sx, sy, c));
            }
        }
    }
    out
}

/// Nearest-neighbour resize
pub fn nn_resize(im: &PixelBuffer, width: usize, height: usize) -> PixelBuffer {
    resize_with(im, width, height, nn_interpolate)
}

/// Bilinear resize
pub fn bilinear_resize(im: &PixelBuffer, width: usize, height: usize) -> PixelBuffer {
    resize_with(im, width, height, bilinear_interpolate)
}
