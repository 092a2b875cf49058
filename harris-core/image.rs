use crate::error::{ImageError, ImageResult};

/// Dense `width × height × channels` buffer of `f32` samples.
///
/// Storage is channel-planar: sample `(x, y, c)` lives at
/// `x + y * width + c * width * height`. Every channel plane is therefore a
/// contiguous run of `height` rows, which is what the row-parallel stages
/// downstream split on.
///
/// Reads through [`PixelBuffer::get`] clamp out-of-range coordinates to the
/// nearest edge pixel. Writes through [`PixelBuffer::set`] silently drop
/// anything outside the buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Zero-filled buffer.
    ///
    /// # Panics
    /// If any dimension is zero.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self::filled(width, height, channels, 0.0)
    }

    /// Buffer with every sample set to `value`.
    ///
    /// # Panics
    /// If any dimension is zero.
    pub fn filled(width: usize, height: usize, channels: usize, value: f32) -> Self {
        assert!(
            width > 0 && height > 0 && channels > 0,
            "invalid buffer dimensions {}x{}x{}",
            width,
            height,
            channels
        );
        Self {
            width,
            height,
            channels,
            data: vec![value; width * height * channels],
        }
    }

    /// Wrap externally produced planar data, validating its shape.
    pub fn from_vec(width: usize, height: usize, channels: usize, data: Vec<f32>) -> ImageResult<Self> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(ImageError::InvalidDimensions { width, height, channels });
        }
        let expected_len = width * height * channels;
        if data.len() != expected_len {
            return Err(ImageError::DataLengthMismatch {
                expected_len,
                actual_len: data.len(),
            });
        }
        Ok(Self { width, height, channels, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// `(width, height, channels)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.channels)
    }

    pub fn same_shape(&self, other: &PixelBuffer) -> bool {
        self.shape() == other.shape()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Offset of an in-bounds sample in the planar layout
    #[inline]
    pub fn offset(&self, x: usize, y: usize, c: usize) -> usize {
        debug_assert!(x < self.width && y < self.height && c < self.channels);
        x + y * self.width + c * self.width * self.height
    }

    /// Clamped read: coordinates outside the image take the nearest edge pixel.
    ///
    /// # Panics
    /// If `c` is not a channel of this buffer.
    #[inline]
    pub fn get(&self, x: isize, y: isize, c: usize) -> f32 {
        assert!(c < self.channels, "channel {} out of range ({})", c, self.channels);
        let xx = x.clamp(0, self.width as isize - 1) as usize;
        let yy = y.clamp(0, self.height as isize - 1) as usize;
        self.data[self.offset(xx, yy, c)]
    }

    /// Bounds-dropping write: anything outside the buffer, including an
    /// absent channel, is a no-op.
    #[inline]
    pub fn set(&mut self, x: isize, y: isize, c: usize, value: f32) {
        if x < 0 || y < 0 || c >= self.channels {
            return;
        }
        let (xx, yy) = (x as usize, y as usize);
        if xx >= self.width || yy >= self.height {
            return;
        }
        let idx = self.offset(xx, yy, c);
        self.data[idx] = value;
    }

    /// Contiguous samples of one channel
    pub fn plane(&self, c: usize) -> &[f32] {
        let n = self.width * self.height;
        &self.data[c * n..(c + 1) * n]
    }

    pub fn plane_mut(&mut self, c: usize) -> &mut [f32] {
        let n = self.width * self.height;
        &mut self.data[c * n..(c + 1) * n]
    }

    /// Add `value` to every sample of channel `c`
    pub fn shift(&mut self, c: usize, value: f32) {
        self.plane_mut(c).iter_mut().for_each(|v| *v += value);
    }

    /// Clamp every sample into `[0, 1]`
    pub fn clamp_unit(&mut self) {
        self.data.iter_mut().for_each(|v| *v = v.clamp(0.0, 1.0));
    }
}
