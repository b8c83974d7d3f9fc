/// Errors returned by the transform, the peak extractor and the line geometry helpers.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum HoughError {
    #[error("invalid edge image buffer length (expected {expected} pixels, got {got})")]
    InvalidImageBuffer { expected: usize, got: usize },

    #[error("angle step must be finite and positive (got {step} degrees)")]
    InvalidAngleStep { step: f64 },

    #[error("{what} length {got} does not match accumulator dimension {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("accumulator has no cells")]
    EmptyAccumulator,

    #[error("line with theta = {theta} rad is vertical; slope and intercept are undefined")]
    VerticalLine { theta: f64 },
}
