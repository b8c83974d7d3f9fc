//! High-level facade for the `hough-lines-*` workspace.
//!
//! This crate provides:
//! - re-exports of the transform engine and peak extractor from
//!   `hough-lines-core`
//! - [`detect_line`], which runs transform + peak + slope/intercept in one go
//! - JSON config and report types ([`io`])
//! - (feature `image`) helpers that start from an `image::GrayImage`
//!
//! ## Quickstart
//!
//! ```no_run
//! use hough_lines::{detect, HoughParams};
//! use image::ImageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = ImageReader::open("edges.png")?.decode()?.to_luma8();
//! let found = detect::detect_line_gray(&img, 0, &HoughParams::default())?;
//! match (found.slope, found.intercept) {
//!     (Some(m), Some(b)) => println!("row = {b:.2} - {m:.3} * col"),
//!     _ => println!("vertical line at col {}", found.peak.distance),
//! }
//! # Ok(())
//! # }
//! ```

pub use hough_lines_core as core;

pub use hough_lines_core::{
    find_peak, hough_transform, hough_transform_with, intercept_from_peak, slope_from_angle,
    Accumulator, EdgeImage, EdgeImageView, EdgePixel, HoughError, HoughParams, HoughSpace, Peak,
    PolarLine,
};

mod line;

pub mod io;

#[cfg(feature = "image")]
pub mod detect;

pub use line::{detect_line, DetectError, LineDetection};
