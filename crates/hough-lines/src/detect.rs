//! End-to-end helpers starting from an `image::GrayImage`.

use crate::core::{EdgeImage, EdgeImageView, HoughParams};
use crate::{detect_line, DetectError, LineDetection};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Borrow an `image::GrayImage` as an edge view (non-zero pixels are edges).
pub fn gray_edge_view(img: &::image::GrayImage) -> EdgeImageView<'_, u8> {
    EdgeImageView {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw(),
    }
}

/// Binarize a gray image: a pixel is an edge when its value is above `threshold`.
pub fn threshold_edges(img: &::image::GrayImage, threshold: u8) -> EdgeImage<bool> {
    EdgeImage {
        width: img.width() as usize,
        height: img.height() as usize,
        data: img.as_raw().iter().map(|&v| v > threshold).collect(),
    }
}

/// Find the strongest line of a gray edge image.
///
/// `threshold = 0` keeps the plain non-zero rule and avoids copying the buffer.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(img, params),
        fields(width = img.width(), height = img.height())
    )
)]
pub fn detect_line_gray(
    img: &::image::GrayImage,
    threshold: u8,
    params: &HoughParams,
) -> Result<LineDetection, DetectError> {
    if threshold == 0 {
        return detect_line(&gray_edge_view(img), params);
    }
    let edges = threshold_edges(img, threshold);
    detect_line(&edges.view(), params)
}

/// Convenience overload using `HoughParams::default()` and the non-zero rule.
pub fn detect_line_gray_default(img: &::image::GrayImage) -> Result<LineDetection, DetectError> {
    detect_line_gray(img, 0, &HoughParams::default())
}
