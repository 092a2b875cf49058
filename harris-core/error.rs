/// Errors raised when pixel data arrives from outside the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    #[error("Invalid image dimensions: {width}x{height}x{channels} (must be > 0)")]
    InvalidDimensions {
        width: usize,
        height: usize,
        channels: usize,
    },

    #[error("Image data length mismatch: expected {expected_len}, got {actual_len}")]
    DataLengthMismatch { expected_len: usize, actual_len: usize },

    #[error("Expected {expected} channels, got {actual}")]
    ChannelMismatch { expected: usize, actual: usize },

    #[error("Image shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize, usize),
        right: (usize, usize, usize),
    },
}

pub type ImageResult<T> = Result<T, ImageError>;
