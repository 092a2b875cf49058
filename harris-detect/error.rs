use harris_core::ImageError;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HarrisError {
    #[error("Invalid sigma: {0} (must be finite and > 0)")]
    InvalidSigma(f32),

    #[error("Invalid NMS radius: {0} (must be >= 1)")]
    InvalidNmsRadius(usize),

    #[error("Invalid threshold: {0} (must be finite)")]
    InvalidThreshold(f32),

    #[error("Invalid alpha: {0} (must be finite and >= 0)")]
    InvalidAlpha(f32),

    #[error("Invalid thread count: {0} (must be >= 1)")]
    InvalidThreadCount(usize),

    #[error(transparent)]
    Image(#[from] ImageError),
}

pub type HarrisResult<T> = Result<T, HarrisError>;
