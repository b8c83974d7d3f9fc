use crate::HoughError;

/// A pixel value that can be classified as edge or background.
pub trait EdgePixel: Copy + Send + Sync {
    fn is_edge(&self) -> bool;
}

macro_rules! impl_edge_pixel_nonzero {
    ($($t:ty),*) => {
        $(
            impl EdgePixel for $t {
                #[inline]
                fn is_edge(&self) -> bool {
                    *self != 0 as $t
                }
            }
        )*
    };
}

impl_edge_pixel_nonzero!(u8, u16, u32, f32, f64);

impl EdgePixel for bool {
    #[inline]
    fn is_edge(&self) -> bool {
        *self
    }
}

/// Borrowed binary edge image. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug)]
pub struct EdgeImageView<'a, T = u8> {
    pub width: usize,
    pub height: usize,
    pub data: &'a [T], // row-major, len = w*h
}

impl<'a, T: EdgePixel> EdgeImageView<'a, T> {
    /// Wrap a row-major buffer, checking its length against the dimensions.
    pub fn new(width: usize, height: usize, data: &'a [T]) -> Result<Self, HoughError> {
        let expected = width * height;
        if data.len() != expected {
            return Err(HoughError::InvalidImageBuffer {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x)
    }

    /// `[x, y]` coordinates of every edge pixel, in row-major scan order.
    pub fn edge_points(&self) -> Vec<[usize; 2]> {
        if self.width == 0 {
            return Vec::new();
        }
        self.data
            .chunks_exact(self.width)
            .take(self.height)
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .filter(|(_, v)| v.is_edge())
                    .map(move |(x, _)| [x, y])
            })
            .collect()
    }

    /// Number of edge pixels inside the `width * height` window.
    pub fn count_edges(&self) -> usize {
        self.data
            .iter()
            .take(self.width * self.height)
            .filter(|v| v.is_edge())
            .count()
    }
}

/// Owned binary edge image, mostly for building fixtures.
#[derive(Clone, Debug)]
pub struct EdgeImage<T = u8> {
    pub width: usize,
    pub height: usize,
    pub data: Vec<T>,
}

impl<T: EdgePixel + Default> EdgeImage<T> {
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![T::default(); width * height],
        }
    }

    /// Build an image from `[x, y]` edge coordinates; out-of-bounds points are dropped.
    pub fn from_points(width: usize, height: usize, points: &[[usize; 2]], value: T) -> Self {
        let mut img = Self::zeros(width, height);
        for &[x, y] in points {
            img.set(x, y, value);
        }
        img
    }
}

impl<T: EdgePixel> EdgeImage<T> {
    /// Set pixel `(x, y)`. Returns `false` when the coordinate is outside the image.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y * self.width + x] = value;
        true
    }

    pub fn view(&self) -> EdgeImageView<'_, T> {
        EdgeImageView {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}
