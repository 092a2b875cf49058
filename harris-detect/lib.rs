//! Harris corner detection over planar [`PixelBuffer`]s.
//!
//! The pipeline runs strictly in order:
//! structure matrix → cornerness → non-max suppression → threshold →
//! patch descriptors. Each stage is exposed on its own so intermediate maps
//! can be inspected.

pub mod builder;
pub mod config;
pub mod cornerness;
pub mod descriptor;
pub mod detector;
pub mod draw;
pub mod error;
pub mod nms;
pub mod structure;

pub use builder::DetectorBuilder;
pub use config::DetectorConfig;
pub use cornerness::{cornerness_response, DEFAULT_ALPHA};
pub use descriptor::{describe_point, PATCH_SIZE};
pub use detector::{harris_corner_detector, HarrisDetector};
pub use draw::{detect_and_draw_corners, mark_corners, mark_spot};
pub use error::{HarrisError, HarrisResult};
pub use nms::{non_max_suppression, SUPPRESSED};
pub use structure::structure_matrix;

pub use harris_core::{Descriptor, HarrisConfig, PixelBuffer, Point};
