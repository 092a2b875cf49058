//! Precomputed filter kernels, each returned as a small [`PixelBuffer`].
//!
//! All kernels have odd width and height so the centre pixel is defined.

use harris_core::PixelBuffer;

/// Scale every channel so its samples sum to 1. Channels summing to zero are
/// left untouched.
pub fn l1_normalize(filter: &mut PixelBuffer) {
    for c in 0..filter.channels() {
        let plane = filter.plane_mut(c);
        let sum: f32 = plane.iter().sum();
        if sum != 0.0 {
            plane.iter_mut().for_each(|v| *v /= sum);
        }
    }
}

/// `w×w` averaging filter
pub fn box_filter(w: usize) -> PixelBuffer {
    let mut f = PixelBuffer::filled(w, w, 1, 1.0);
    l1_normalize(&mut f);
    f
}

/// Odd kernel length covering ±3σ: `round(6σ)`, bumped to the next odd number.
pub fn gaussian_size(sigma: f32) -> usize {
    assert!(sigma > 0.0, "gaussian sigma must be positive, got {}", sigma);
    let size = (6.0 * sigma).round() as usize;
    if size % 2 == 0 {
        size + 1
    } else {
        size
    }
}

#[inline]
fn gaussian_weight(d2: f32, sigma: f32) -> f32 {
    (-d2 / (2.0 * sigma * sigma)).exp()
}

/// `size×1` Gaussian row kernel, L1-normalized.
///
/// # Panics
/// If `sigma <= 0`.
pub fn gaussian_kernel_1d(sigma: f32) -> PixelBuffer {
    let size = gaussian_size(sigma);
    let half = (size / 2) as isize;
    let mut f = PixelBuffer::new(size, 1, 1);
    for i in 0..size as isize {
        let x = (i - half) as f32;
        f.set(i, 0, 0, gaussian_weight(x * x, sigma));
    }
    l1_normalize(&mut f);
    f
}

/// `size×size` Gaussian kernel, L1-normalized. The single-pass counterpart of
/// [`crate::smooth`].
///
/// # Panics
/// If `sigma <= 0`.
pub fn gaussian_filter(sigma: f32) -> PixelBuffer {
    let size = gaussian_size(sigma);
    let half = (size / 2) as isize;
    let mut f = PixelBuffer::new(size, size, 1);
    for y in 0..size as isize {
        for x in 0..size as isize {
            let (dx, dy) = ((x - half) as f32, (y - half) as f32);
            f.set(x, y, 0, gaussian_weight(dx * dx + dy * dy, sigma));
        }
    }
    l1_normalize(&mut f);
    f
}

fn kernel_3x3(values: [f32; 9]) -> PixelBuffer {
    let mut f = PixelBuffer::new(3, 3, 1);
    f.as_mut_slice().copy_from_slice(&values);
    f
}

/// Laplacian-style edge detector
pub fn highpass_filter() -> PixelBuffer {
    kernel_3x3([0.0, -1.0, 0.0, -1.0, 4.0, -1.0, 0.0, -1.0, 0.0])
}

pub fn sharpen_filter() -> PixelBuffer {
    kernel_3x3([0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0])
}

pub fn emboss_filter() -> PixelBuffer {
    kernel_3x3([-2.0, -1.0, 0.0, -1.0, 1.0, 1.0, 0.0, 1.0, 2.0])
}

/// Horizontal Sobel derivative
pub fn gx_filter() -> PixelBuffer {
    kernel_3x3([-1.0, 0.0, 1.0, -2.0, 0.0, 2.0, -1.0, 0.0, 1.0])
}

/// Vertical Sobel derivative
pub fn gy_filter() -> PixelBuffer {
    kernel_3x3([-1.0, -2.0, -1.0, 0.0, 0.0, 0.0, 1.0, 2.0, 1.0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_gaussian_size_is_odd() {
        assert_eq!(gaussian_size(1.0), 7);
        assert_eq!(gaussian_size(2.0), 13);
        assert_eq!(gaussian_size(0.5), 3);
        assert_eq!(gaussian_size(0.7), 5);
    }

    #[test]
    fn test_gaussian_1d_normalized_and_symmetric() {
        let k = gaussian_kernel_1d(1.5);
        assert_eq!(k.height(), 1);
        assert_eq!(k.width() % 2, 1);
        let sum: f32 = k.as_slice().iter().sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-5);
        let n = k.width() as isize;
        for i in 0..n / 2 {
            assert_abs_diff_eq!(k.get(i, 0, 0), k.get(n - 1 - i, 0, 0), epsilon = 1e-7);
        }
        assert!(k.get(n / 2, 0, 0) > k.get(0, 0, 0));
    }

    #[test]
    fn test_gaussian_2d_is_outer_product() {
        let k1 = gaussian_kernel_1d(1.0);
        let k2 = gaussian_filter(1.0);
        assert_eq!(k2.width(), k1.width());
        for y in 0..k2.height() as isize {
            for x in 0..k2.width() as isize {
                assert_abs_diff_eq!(k2.get(x, y, 0), k1.get(x, 0, 0) * k1.get(y, 0, 0), epsilon = 1e-6);
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_non_positive_sigma_panics() {
        let _ = gaussian_kernel_1d(0.0);
    }

    #[test]
    fn test_l1_normalize_per_channel() {
        let mut f = PixelBuffer::from_vec(2, 1, 2, vec![1.0, 3.0, 2.0, 2.0]).unwrap();
        l1_normalize(&mut f);
        assert_eq!(f.as_slice(), &[0.25, 0.75, 0.5, 0.5]);

        let mut zero_sum = gx_filter();
        l1_normalize(&mut zero_sum);
        assert_eq!(zero_sum, gx_filter());
    }

    #[test]
    fn test_box_and_derivative_kernels() {
        let b = box_filter(3);
        assert!(b.as_slice().iter().all(|&v| (v - 1.0 / 9.0).abs() < 1e-7));
        assert_eq!(gx_filter().get(0, 1, 0), -2.0);
        assert_eq!(gy_filter().get(1, 2, 0), 2.0);
        let sharpen_sum: f32 = sharpen_filter().as_slice().iter().sum();
        assert_eq!(sharpen_sum, 1.0);
        let highpass_sum: f32 = highpass_filter().as_slice().iter().sum();
        assert_eq!(highpass_sum, 0.0);
    }
}
