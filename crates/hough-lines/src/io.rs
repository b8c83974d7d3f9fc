//! JSON configuration and report helpers for line detection.

use crate::{DetectError, HoughParams, LineDetection};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(thiserror::Error, Debug)]
pub enum HoughIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "image")]
    #[error(transparent)]
    Image(#[from] ::image::ImageError),
}

fn default_angle_step_deg() -> f64 {
    HoughParams::default().angle_step_deg
}

/// Configuration for a single-image detection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoughDetectConfig {
    pub image_path: String,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default = "default_angle_step_deg")]
    pub angle_step_deg: f64,
    /// Gray values strictly above this count as edges.
    #[serde(default)]
    pub edge_threshold: u8,
}

impl HoughDetectConfig {
    pub fn for_image(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            output_path: None,
            angle_step_deg: default_angle_step_deg(),
            edge_threshold: 0,
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, HoughIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), HoughIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn params(&self) -> HoughParams {
        HoughParams::with_angle_step(self.angle_step_deg)
    }

    pub fn output_path(&self) -> Option<PathBuf> {
        self.output_path.as_ref().map(PathBuf::from)
    }

    /// Load the configured image as 8-bit gray.
    #[cfg(feature = "image")]
    pub fn load_image(&self) -> Result<::image::GrayImage, HoughIoError> {
        Ok(::image::ImageReader::open(&self.image_path)?
            .decode()?
            .to_luma8())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoughDetectReport {
    pub image_path: String,
    #[serde(default)]
    pub config_path: Option<String>,
    pub angle_step_deg: f64,
    pub edge_threshold: u8,
    #[serde(default)]
    pub detection: Option<LineDetection>,
    #[serde(default)]
    pub vertical: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl HoughDetectReport {
    /// Build a base report from the input config.
    pub fn new(cfg: &HoughDetectConfig, config_path: Option<&Path>) -> Self {
        Self {
            image_path: cfg.image_path.clone(),
            config_path: config_path.map(|p| p.to_string_lossy().into_owned()),
            angle_step_deg: cfg.angle_step_deg,
            edge_threshold: cfg.edge_threshold,
            detection: None,
            vertical: false,
            error: None,
        }
    }

    pub fn set_detection(&mut self, res: LineDetection) {
        self.vertical = res.is_vertical();
        self.detection = Some(res);
        self.error = None;
    }

    pub fn set_error(&mut self, err: DetectError) {
        self.error = Some(err.to_string());
    }

    pub fn to_json(&self) -> Result<String, HoughIoError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, HoughIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), HoughIoError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{detect_line, EdgeImage, HoughError};

    #[test]
    fn config_defaults_fill_in() {
        let cfg: HoughDetectConfig =
            serde_json::from_str(r#"{"image_path": "edges.png"}"#).unwrap();
        assert_eq!(cfg, HoughDetectConfig::for_image("edges.png"));
        assert_eq!(cfg.params(), HoughParams::default());
        assert_eq!(cfg.output_path(), None);
    }

    #[test]
    fn config_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        let cfg = HoughDetectConfig {
            output_path: Some("out.json".into()),
            angle_step_deg: 0.5,
            edge_threshold: 12,
            ..HoughDetectConfig::for_image("a.png")
        };
        cfg.write_json(&path).unwrap();
        assert_eq!(HoughDetectConfig::load_json(&path).unwrap(), cfg);
    }

    #[test]
    fn report_flags_vertical_lines() {
        let column: Vec<[usize; 2]> = [1, 5, 10, 15, 20, 25, 30].iter().map(|&y| [15, y]).collect();
        let img = EdgeImage::from_points(31, 31, &column, 1u8);
        let found = detect_line(&img.view(), &HoughParams::default()).unwrap();

        let cfg = HoughDetectConfig::for_image("vertical.png");
        let mut report = HoughDetectReport::new(&cfg, Some(Path::new("cfg.json")));
        report.set_detection(found);
        assert!(report.vertical);

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["config_path"], "cfg.json");
        assert!(json["detection"]["slope"].is_null());
        assert_eq!(json["detection"]["peak"]["distance"], 15);
    }

    #[test]
    fn report_records_errors() {
        let cfg = HoughDetectConfig::for_image("empty.png");
        let mut report = HoughDetectReport::new(&cfg, None);
        report.set_error(DetectError::Hough(HoughError::EmptyAccumulator));
        assert_eq!(report.error.as_deref(), Some("accumulator has no cells"));
        assert!(report.detection.is_none());
    }

    #[test]
    fn missing_config_is_io_error() {
        let err = HoughDetectConfig::load_json("/nonexistent/hough.json").unwrap_err();
        assert!(matches!(err, HoughIoError::Io(_)));
    }
}
