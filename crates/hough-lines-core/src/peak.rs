use crate::{Accumulator, HoughError, PolarLine};
use serde::{Deserialize, Serialize};

/// The highest-voted accumulator cell.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Peak {
    /// Row-major position in the accumulator (`row * cols + col`).
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub votes: u64,
    /// Normal angle in radians.
    pub angle: f64,
    /// Signed distance from the origin in pixels.
    pub distance: i64,
}

impl Peak {
    pub fn line(&self) -> PolarLine {
        PolarLine::new(self.angle, self.distance as f64)
    }
}

/// Find the single strongest cell of `accumulator`.
///
/// Cells are scanned distance-major, angle-minor; the first cell holding the
/// maximum wins, so an all-zero accumulator yields index 0.
pub fn find_peak(
    accumulator: &Accumulator,
    angles: &[f64],
    distances: &[i64],
) -> Result<Peak, HoughError> {
    let (rows, cols) = accumulator.shape();
    if angles.len() != cols {
        return Err(HoughError::ShapeMismatch {
            what: "angles",
            expected: cols,
            got: angles.len(),
        });
    }
    if distances.len() != rows {
        return Err(HoughError::ShapeMismatch {
            what: "distances",
            expected: rows,
            got: distances.len(),
        });
    }

    let mut best: Option<(usize, u64)> = None;
    for (idx, &v) in accumulator.as_slice().iter().enumerate() {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((idx, v)),
        }
    }
    let (index, votes) = best.ok_or(HoughError::EmptyAccumulator)?;

    let row = index / cols;
    let col = index % cols;
    Ok(Peak {
        index,
        row,
        col,
        votes,
        angle: angles[col],
        distance: distances[row],
    })
}
