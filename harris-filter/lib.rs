//! Linear filtering on planar [`PixelBuffer`]s.
//!
//! [`convolve`] is the general engine every other stage goes through;
//! [`smooth`] runs a Gaussian as two 1D passes of it.

pub mod convolution;
pub mod kernels;
pub mod ops;
pub mod smoothing;

pub use convolution::convolve;
pub use kernels::{gaussian_filter, gaussian_kernel_1d, gx_filter, gy_filter, l1_normalize};
pub use smoothing::smooth;

pub use harris_core::PixelBuffer;
