//! Voting pass of the line Hough transform.
//!
//! Accumulator rows are distances (shifted by the image diagonal `D` so the
//! first row is `rho = -D`), columns are angles. Every edge pixel casts one
//! vote per angle column.

use crate::{find_peak, EdgeImageView, EdgePixel, HoughError, HoughParams, Peak};
use log::debug;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Minimal number of edge pixels per rayon work item.
#[cfg(feature = "rayon")]
const PAR_CHUNK: usize = 256;

/// 2D vote histogram over (distance, angle), row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accumulator {
    pub rows: usize,
    pub cols: usize,
    data: Vec<u64>,
}

impl Accumulator {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Wrap a row-major buffer of `rows * cols` counts.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<u64>) -> Result<Self, HoughError> {
        if data.len() != rows * cols {
            return Err(HoughError::ShapeMismatch {
                what: "accumulator buffer",
                expected: rows * cols,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<u64> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.data[self.flat_index(row, col)])
    }

    pub fn row(&self, row: usize) -> Option<&[u64]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.data[start..start + self.cols])
    }

    /// Votes cast at one angle; equals the edge-pixel count for a transform output.
    pub fn column_sum(&self, col: usize) -> u64 {
        if col >= self.cols {
            return 0;
        }
        self.data.iter().skip(col).step_by(self.cols).sum()
    }

    pub fn total_votes(&self) -> u64 {
        self.data.iter().sum()
    }

    pub fn max_votes(&self) -> u64 {
        self.data.iter().copied().max().unwrap_or(0)
    }

    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.data
    }
}

/// Output of [`hough_transform`]: the accumulator plus the axes needed to read it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoughSpace {
    pub accumulator: Accumulator,
    /// Angle of each accumulator column, radians.
    pub angles: Vec<f64>,
    /// Distance of each accumulator row, pixels, from `-D` to `D - 1`.
    pub distances: Vec<i64>,
}

impl HoughSpace {
    /// Image diagonal `D` used to shift distances into row indices.
    pub fn diagonal(&self) -> usize {
        self.distances.len() / 2
    }

    pub fn peak(&self) -> Result<Peak, HoughError> {
        find_peak(&self.accumulator, &self.angles, &self.distances)
    }

    pub fn into_parts(self) -> (Accumulator, Vec<f64>, Vec<i64>) {
        (self.accumulator, self.angles, self.distances)
    }
}

/// Diagonal `D = ceil(sqrt(w² + h²))` and the distance axis `-D..D`.
pub fn distance_range(width: usize, height: usize) -> (usize, Vec<i64>) {
    let (w, h) = (width as f64, height as f64);
    let diag = (w * w + h * h).sqrt().ceil() as usize;
    let d = diag as i64;
    (diag, (-d..d).collect())
}

/// Run the transform with a given angular step in degrees.
pub fn hough_transform<T: EdgePixel>(
    image: &EdgeImageView<'_, T>,
    angle_step_deg: f64,
) -> Result<HoughSpace, HoughError> {
    hough_transform_with(image, &HoughParams::with_angle_step(angle_step_deg))
}

#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(image, params),
        fields(width = image.width, height = image.height, step = params.angle_step_deg)
    )
)]
pub fn hough_transform_with<T: EdgePixel>(
    image: &EdgeImageView<'_, T>,
    params: &HoughParams,
) -> Result<HoughSpace, HoughError> {
    params.validate()?;

    let angles = params.angles();
    let table = TrigTable::new(&angles);
    let (diag, distances) = distance_range(image.width, image.height);
    let rows = distances.len();
    let cols = angles.len();

    let points = image.edge_points();
    debug!(
        "hough: {}x{} image, {} edge pixels, accumulator {}x{}",
        image.width,
        image.height,
        points.len(),
        rows,
        cols
    );

    let data = vote(&points, &table, diag, rows, cols);

    Ok(HoughSpace {
        accumulator: Accumulator { rows, cols, data },
        angles,
        distances,
    })
}

/// cos/sin of each angle, computed once per transform.
struct TrigTable {
    cos: Vec<f64>,
    sin: Vec<f64>,
}

impl TrigTable {
    fn new(angles: &[f64]) -> Self {
        Self {
            cos: angles.iter().map(|a| a.cos()).collect(),
            sin: angles.iter().map(|a| a.sin()).collect(),
        }
    }
}

fn vote_points(
    acc: &mut [u64],
    points: &[[usize; 2]],
    table: &TrigTable,
    diag: usize,
    cols: usize,
) {
    let shift = diag as i64;
    for &[x, y] in points {
        let (xf, yf) = (x as f64, y as f64);
        for (col, (c, s)) in table.cos.iter().zip(&table.sin).enumerate() {
            let rho = (xf * c + yf * s).round() as i64;
            let row = (rho + shift) as usize;
            debug_assert!(rho >= -shift && rho < shift, "rho {rho} outside ±{diag}");
            acc[row * cols + col] += 1;
        }
    }
}

#[cfg(not(feature = "rayon"))]
fn vote(
    points: &[[usize; 2]],
    table: &TrigTable,
    diag: usize,
    rows: usize,
    cols: usize,
) -> Vec<u64> {
    let mut acc = vec![0u64; rows * cols];
    vote_points(&mut acc, points, table, diag, cols);
    acc
}

#[cfg(feature = "rayon")]
fn vote(
    points: &[[usize; 2]],
    table: &TrigTable,
    diag: usize,
    rows: usize,
    cols: usize,
) -> Vec<u64> {
    use rayon::prelude::*;

    let len = rows * cols;
    if points.len() <= PAR_CHUNK {
        let mut acc = vec![0u64; len];
        vote_points(&mut acc, points, table, diag, cols);
        return acc;
    }

    points
        .par_chunks(PAR_CHUNK)
        .fold(
            || vec![0u64; len],
            |mut acc, chunk| {
                vote_points(&mut acc, chunk, table, diag, cols);
                acc
            },
        )
        .reduce(
            || vec![0u64; len],
            |mut a, b| {
                a.iter_mut().zip(&b).for_each(|(dst, src)| *dst += src);
                a
            },
        )
}
