use crate::HoughError;
use serde::{Deserialize, Serialize};

/// Slack subtracted before rounding up the angle count, so that steps which
/// divide 180 exactly do not pick up an extra bucket at +90 degrees.
const ANGLE_COUNT_EPS: f64 = 1e-9;

/// Upper bound on accumulator columns (a step of 1.8e-4 degrees).
const MAX_ANGLES: f64 = 1_000_000.0;

/// Parameters of the line Hough transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughParams {
    /// Angular resolution in degrees. Angles start at -90° and stay below +90°;
    /// the last bucket may be narrower when the step does not divide 180.
    pub angle_step_deg: f64,
}

impl Default for HoughParams {
    fn default() -> Self {
        Self {
            angle_step_deg: 1.0, // 180 angles
        }
    }
}

impl HoughParams {
    pub fn with_angle_step(angle_step_deg: f64) -> Self {
        Self { angle_step_deg }
    }

    pub fn validate(&self) -> Result<(), HoughError> {
        let step = self.angle_step_deg;
        if !step.is_finite() || step <= 0.0 {
            return Err(HoughError::InvalidAngleStep { step });
        }
        let count = 180.0 / step;
        if !count.is_finite() || count - ANGLE_COUNT_EPS > MAX_ANGLES {
            return Err(HoughError::InvalidAngleStep { step });
        }
        Ok(())
    }

    /// Number of angle columns, `ceil(180 / step)`.
    pub fn num_angles(&self) -> usize {
        ((180.0 / self.angle_step_deg) - ANGLE_COUNT_EPS).ceil().max(1.0) as usize
    }

    /// Angle set in radians: `-90° + i * step` for `i in 0..num_angles()`.
    pub fn angles(&self) -> Vec<f64> {
        (0..self.num_angles())
            .map(|i| (-90.0 + i as f64 * self.angle_step_deg).to_radians())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn default_is_one_degree_180_angles() {
        let params = HoughParams::default();
        let angles = params.angles();
        assert_eq!(angles.len(), 180);
        assert_relative_eq!(angles[0], -FRAC_PI_2);
        assert_eq!(angles[90], 0.0);
        assert_relative_eq!(angles[179], 89f64.to_radians());
    }

    #[test]
    fn uneven_step_rounds_count_up() {
        let params = HoughParams::with_angle_step(0.7);
        assert_eq!(params.num_angles(), 258);
        let last = *params.angles().last().unwrap();
        assert!(last < FRAC_PI_2);
    }

    #[test]
    fn exact_divisors_do_not_gain_a_bucket() {
        for (step, n) in [(0.1, 1800), (0.5, 360), (3.0, 60), (45.0, 4), (180.0, 1)] {
            assert_eq!(HoughParams::with_angle_step(step).num_angles(), n, "step {step}");
        }
    }

    #[test]
    fn step_larger_than_range_keeps_one_angle() {
        let params = HoughParams::with_angle_step(500.0);
        assert_eq!(params.angles(), vec![-FRAC_PI_2]);
    }

    #[test]
    fn rejects_bad_steps() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(HoughParams::with_angle_step(step).validate().is_err());
        }
        assert!(HoughParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_steps_too_fine_to_allocate() {
        for step in [1e-300, f64::MIN_POSITIVE, 1e-7] {
            assert_eq!(
                HoughParams::with_angle_step(step).validate(),
                Err(HoughError::InvalidAngleStep { step })
            );
        }
        assert!(HoughParams::with_angle_step(1.8e-4).validate().is_ok());
    }

    #[test]
    fn deserializes_with_defaults() {
        let params: HoughParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, HoughParams::default());
        let params: HoughParams = serde_json::from_str(r#"{"angle_step_deg": 2.5}"#).unwrap();
        assert_eq!(params.num_angles(), 72);
    }
}
