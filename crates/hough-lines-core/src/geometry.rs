//! Conversion from Hough (theta, rho) to slope/intercept form.
//!
//! With `x = column` and `y = row`, a cell votes for the line
//! `x*cos(theta) + y*sin(theta) = rho`. Slopes are reported as they look on
//! screen, with rows growing downward: points satisfy
//! `row = intercept - slope * col`, and the intercept is the row at column 0.

use crate::HoughError;
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Gradient `cos(theta) / sin(theta)` of the line with normal angle `theta`.
///
/// Fails with [`HoughError::VerticalLine`] when `sin(theta) == 0`.
pub fn slope_from_angle(theta: f64) -> Result<f64, HoughError> {
    let s = theta.sin();
    if s == 0.0 {
        return Err(HoughError::VerticalLine { theta });
    }
    Ok(theta.cos() / s)
}

/// Row at column 0, `rho / sin(theta)`. Same singularity as [`slope_from_angle`].
pub fn intercept_from_peak(theta: f64, rho: f64) -> Result<f64, HoughError> {
    let s = theta.sin();
    if s == 0.0 {
        return Err(HoughError::VerticalLine { theta });
    }
    Ok(rho / s)
}

/// A line in Hough normal form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolarLine {
    /// Normal angle, radians.
    pub theta: f64,
    /// Signed distance from the origin, pixels.
    pub rho: f64,
}

impl PolarLine {
    pub fn new(theta: f64, rho: f64) -> Self {
        Self { theta, rho }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.theta.sin() == 0.0
    }

    pub fn slope(&self) -> Result<f64, HoughError> {
        slope_from_angle(self.theta)
    }

    pub fn intercept(&self) -> Result<f64, HoughError> {
        intercept_from_peak(self.theta, self.rho)
    }

    /// Unit normal `(cos, sin)` in `(x, y)` pixel coordinates.
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.theta.cos(), self.theta.sin())
    }

    /// Point of the line closest to the origin.
    pub fn foot(&self) -> Point2<f64> {
        Point2::from(self.normal() * self.rho)
    }

    /// Unsigned perpendicular distance from `p` to the line.
    pub fn distance_to(&self, p: Point2<f64>) -> f64 {
        (self.normal().dot(&p.coords) - self.rho).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn zero_angle_is_vertical() {
        assert_eq!(
            slope_from_angle(0.0),
            Err(HoughError::VerticalLine { theta: 0.0 })
        );
        assert!(intercept_from_peak(0.0, 15.0).is_err());
        assert!(PolarLine::new(0.0, 15.0).is_vertical());
    }

    #[test]
    fn diagonal_line() {
        let line = PolarLine::new(FRAC_PI_4, 10.0);
        assert_relative_eq!(line.slope().unwrap(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(
            line.intercept().unwrap(),
            10.0 * std::f64::consts::SQRT_2,
            epsilon = 1e-9
        );
    }

    #[test]
    fn slope_intercept_points_lie_on_line() {
        let line = PolarLine::new(0.3, -7.5);
        let m = line.slope().unwrap();
        let b = line.intercept().unwrap();
        for col in [0.0, 3.0, 12.5, 40.0] {
            let row = b - m * col;
            assert_relative_eq!(line.distance_to(Point2::new(col, row)), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn foot_is_on_line_along_normal() {
        let line = PolarLine::new(-1.1, 12.0);
        let foot = line.foot();
        assert_relative_eq!(line.distance_to(foot), 0.0, epsilon = 1e-12);
        assert_relative_eq!(foot.coords.norm(), 12.0, epsilon = 1e-12);
        assert_relative_eq!(line.distance_to(Point2::origin()), 12.0, epsilon = 1e-12);
    }

    #[test]
    fn horizontal_line_has_flat_slope() {
        let line = PolarLine::new(-std::f64::consts::FRAC_PI_2, -20.0);
        assert!(line.slope().unwrap().abs() < 1e-12);
        assert_relative_eq!(line.intercept().unwrap(), 20.0, epsilon = 1e-12);
    }
}
