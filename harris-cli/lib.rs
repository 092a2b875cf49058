use std::path::Path;
use std::str::FromStr;

use harris_core::color::rgb_to_grayscale;
use harris_core::{init_thread_pool, HarrisConfig, ImageError};
use harris_detect::{mark_corners, DetectorConfig, HarrisDetector, HarrisError};
use harris_filter::ops::feature_normalize;
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_circle_mut;
use log::{debug, warn};

pub use harris_core::{self, Descriptor, PixelBuffer, Point};
pub use harris_detect;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Harris error: {0}")]
    Harris(#[from] HarrisError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Image I/O error: {0}")]
    ImageIo(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type CliResult<T> = Result<T, CliError>;

/// How detected corners are drawn on the output image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// Magenta cross-hair drawn on the float buffer
    #[default]
    Cross,
    /// Hollow circle drawn on the 8-bit output
    Circle,
}

impl FromStr for Marker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cross" => Ok(Marker::Cross),
            "circle" => Ok(Marker::Circle),
            other => Err(format!("unknown marker '{}', expected cross or circle", other)),
        }
    }
}

/// High-level Harris pipeline: thread pool setup plus a validated detector
pub struct CornerPipeline {
    detector: HarrisDetector,
}

impl CornerPipeline {
    /// Validate `cfg` and size the global thread pool from it.
    ///
    /// The pool can only be built once per process; later pipelines reuse it.
    pub fn new(cfg: HarrisConfig) -> CliResult<Self> {
        let detector = HarrisDetector::new(cfg)?;
        if let Err(e) = init_thread_pool(detector.config().n_threads) {
            warn!("Thread pool already initialized, keeping it: {}", e);
        }
        Ok(Self { detector })
    }

    pub fn from_config(config: DetectorConfig) -> CliResult<Self> {
        config.validate()?;
        debug!("{}", config.summary());
        Self::new(config.core)
    }

    /// Detect corners and describe them
    pub fn detect(&self, img: &PixelBuffer) -> Vec<Descriptor> {
        self.detector.detect_corners(img)
    }

    /// Cornerness map rescaled into `[0, 1]` for viewing
    pub fn normalized_response(&self, img: &PixelBuffer) -> PixelBuffer {
        let mut response = self.detector.response_map(img);
        feature_normalize(&mut response);
        response
    }

    pub fn detector(&self) -> &HarrisDetector {
        &self.detector
    }

    /// Get detector configuration
    pub fn config(&self) -> &HarrisConfig {
        self.detector.config()
    }
}

/// Load a detector configuration, picking the format from the extension
#[cfg(feature = "serde")]
pub fn load_config<P: AsRef<Path>>(path: P) -> CliResult<DetectorConfig> {
    let path = path.as_ref();
    let loaded = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => DetectorConfig::load_json(path),
        Some("toml") => DetectorConfig::load_toml(path),
        _ => {
            return Err(CliError::Config(format!(
                "{}: expected a .json or .toml file",
                path.display()
            )))
        }
    };
    loaded.map_err(|e| CliError::Config(format!("{}: {}", path.display(), e)))
}

pub fn load_image<P: AsRef<Path>>(path: P) -> CliResult<DynamicImage> {
    Ok(image::open(path)?)
}

/// Planar RGB buffer with samples scaled into `[0, 1]`
pub fn to_pixel_buffer(img: &DynamicImage) -> PixelBuffer {
    let rgb = img.to_rgb8();
    let (w, h) = (rgb.width() as usize, rgb.height() as usize);
    let mut buf = PixelBuffer::new(w.max(1), h.max(1), 3);
    for (x, y, px) in rgb.enumerate_pixels() {
        for c in 0..3 {
            buf.set(x as isize, y as isize, c, px[c] as f32 / 255.0);
        }
    }
    buf
}

/// Single-channel luma buffer in `[0, 1]`
pub fn to_grayscale_buffer(img: &DynamicImage) -> CliResult<PixelBuffer> {
    Ok(rgb_to_grayscale(&to_pixel_buffer(img))?)
}

/// 8-bit RGB rendering of a buffer. Single-channel buffers are shown gray;
/// samples are clamped into `[0, 1]` first.
pub fn to_rgb_image(buf: &PixelBuffer) -> RgbImage {
    let mut view = buf.clone();
    view.clamp_unit();
    let gray = view.channels() < 3;
    RgbImage::from_fn(view.width() as u32, view.height() as u32, |x, y| {
        let sample = |c: usize| {
            let c = if gray { 0 } else { c };
            (view.get(x as isize, y as isize, c) * 255.0).round() as u8
        };
        Rgb([sample(0), sample(1), sample(2)])
    })
}

/// Render `canvas` with every corner marked
pub fn render_corners(canvas: &PixelBuffer, corners: &[Descriptor], marker: Marker) -> RgbImage {
    match marker {
        Marker::Cross => {
            let mut marked = canvas.clone();
            mark_corners(&mut marked, corners);
            to_rgb_image(&marked)
        }
        Marker::Circle => {
            let mut out = to_rgb_image(canvas);
            for d in corners {
                let (Ok(x), Ok(y)) = (i32::try_from(d.location.x), i32::try_from(d.location.y)) else {
                    continue;
                };
                draw_hollow_circle_mut(&mut out, (x, y), 4, Rgb([255, 0, 255]));
            }
            out
        }
    }
}
