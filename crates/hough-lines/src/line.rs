use crate::core::{EdgeImageView, EdgePixel, HoughError, HoughParams, Peak, PolarLine};
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level helpers.
#[derive(thiserror::Error, Debug)]
pub enum DetectError {
    #[error(transparent)]
    Hough(#[from] HoughError),
}

/// Strongest line of an edge image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineDetection {
    pub width: usize,
    pub height: usize,
    pub edge_pixels: usize,
    pub angle_step_deg: f64,
    /// Accumulator shape as `[distances, angles]`.
    pub accumulator_shape: [usize; 2],
    pub peak: Peak,
    /// `cos/sin` of the peak angle; `None` for a vertical line.
    pub slope: Option<f64>,
    /// Row at column 0; `None` for a vertical line.
    pub intercept: Option<f64>,
}

impl LineDetection {
    pub fn line(&self) -> PolarLine {
        self.peak.line()
    }

    pub fn is_vertical(&self) -> bool {
        self.slope.is_none()
    }

    pub fn angle_deg(&self) -> f64 {
        self.peak.angle.to_degrees()
    }
}

/// Transform `image`, take the global peak and convert it to slope/intercept.
///
/// A vertical winner is not an error: slope and intercept come back as `None`.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(image, params),
        fields(width = image.width, height = image.height)
    )
)]
pub fn detect_line<T: EdgePixel>(
    image: &EdgeImageView<'_, T>,
    params: &HoughParams,
) -> Result<LineDetection, DetectError> {
    let space = crate::core::hough_transform_with(image, params)?;
    let peak = space.peak()?;
    let line = peak.line();

    let (slope, intercept) = if line.is_vertical() {
        debug!("peak at theta = {} is vertical", line.theta);
        (None, None)
    } else {
        (Some(line.slope()?), Some(line.intercept()?))
    };

    let (rows, cols) = space.accumulator.shape();
    info!(
        "line peak: {} votes at theta = {:.2} deg, rho = {}",
        peak.votes,
        peak.angle.to_degrees(),
        peak.distance
    );

    Ok(LineDetection {
        width: image.width,
        height: image.height,
        edge_pixels: image.count_edges(),
        angle_step_deg: params.angle_step_deg,
        accumulator_shape: [rows, cols],
        peak,
        slope,
        intercept,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EdgeImage;

    #[test]
    fn vertical_winner_has_no_slope() {
        let mut img = EdgeImage::<u8>::zeros(31, 31);
        for y in [1, 5, 10, 15, 20, 25, 30] {
            img.set(15, y, 255);
        }
        let found = detect_line(&img.view(), &HoughParams::default()).unwrap();
        assert!(found.is_vertical());
        assert_eq!(found.intercept, None);
        assert_eq!(found.peak.distance, 15);
        assert_eq!(found.edge_pixels, 7);
        assert_eq!(found.accumulator_shape, [88, 180]);
    }

    #[test]
    fn blank_image_reports_first_cell() {
        let img = EdgeImage::<u8>::zeros(8, 6);
        let found = detect_line(&img.view(), &HoughParams::default()).unwrap();
        assert_eq!(found.peak.index, 0);
        assert_eq!(found.peak.votes, 0);
        assert_eq!(found.angle_deg(), -90.0);
        assert!(found.slope.is_some());
    }

    #[test]
    fn empty_image_is_an_error() {
        let img = EdgeImage::<u8>::zeros(0, 0);
        let err = detect_line(&img.view(), &HoughParams::default()).unwrap_err();
        assert!(matches!(err, DetectError::Hough(HoughError::EmptyAccumulator)));
    }

    #[test]
    fn bad_step_propagates() {
        let img = EdgeImage::<u8>::zeros(4, 4);
        for step in [-2.0, 1e-300] {
            let err = detect_line(&img.view(), &HoughParams::with_angle_step(step)).unwrap_err();
            assert!(matches!(
                err,
                DetectError::Hough(HoughError::InvalidAngleStep { .. })
            ));
        }
    }
}
