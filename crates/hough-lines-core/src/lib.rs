//! Hough transform for straight lines in binary edge images.
//!
//! This crate is intentionally small. It does *not* depend on any concrete
//! image type or edge detector: callers hand in a row-major buffer through
//! [`EdgeImageView`] and get back a vote accumulator over (distance, angle)
//! space, which [`find_peak`] reduces to the single strongest line.
//!
//! Pixel coordinates are `x = column`, `y = row`, origin at the top-left
//! pixel. Every edge pixel votes for `rho = round(x*cos(theta) + y*sin(theta))`
//! once per angle.
//!
//! ```
//! use hough_lines_core::{find_peak, hough_transform, EdgeImage};
//!
//! let mut img = EdgeImage::<u8>::zeros(31, 31);
//! for y in [1, 5, 10, 15, 20, 25, 30] {
//!     img.set(15, y, 255);
//! }
//! let space = hough_transform(&img.view(), 1.0).unwrap();
//! let peak = find_peak(&space.accumulator, &space.angles, &space.distances).unwrap();
//! assert_eq!(peak.angle, 0.0);
//! assert_eq!(peak.distance, 15);
//! ```

mod error;
mod geometry;
mod image;
mod logger;
mod params;
mod peak;
mod transform;

pub use error::HoughError;
pub use geometry::{intercept_from_peak, slope_from_angle, PolarLine};
pub use image::{EdgeImage, EdgeImageView, EdgePixel};
pub use params::HoughParams;
pub use peak::{find_peak, Peak};
pub use transform::{
    distance_range, hough_transform, hough_transform_with, Accumulator, HoughSpace,
};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
