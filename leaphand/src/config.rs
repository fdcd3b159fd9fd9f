//! Tracker configuration, optionally loaded from a JSON file.
//!
//! ```json
//! { "calibration": { "y": { "min": 100.0, "max": 420.0 } }, "grab_threshold": 0.8 }
//! ```
//!
//! Any field left out keeps its default.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::normalize::Calibration;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub calibration: Calibration,
    /// A hand counts as touching when its grab strength is strictly above this.
    pub grab_threshold: f32,
}

impl TrackerConfig {
    pub const DEFAULT_GRAB_THRESHOLD: f32 = 0.75;

    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_json(&text)?;
        log::info!("loaded tracker config from {}", path.display());
        Ok(cfg)
    }

    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: TrackerConfig = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject ranges that would divide by zero and a non-finite threshold.
    pub fn validate(&self) -> Result<()> {
        for (axis, range) in self.calibration.axes() {
            if range.is_degenerate() {
                return Err(Error::DegenerateRange { axis, min: range.min, max: range.max });
            }
        }
        if !self.grab_threshold.is_finite() {
            return Err(Error::InvalidThreshold(self.grab_threshold));
        }
        Ok(())
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            calibration:    Calibration::default(),
            grab_threshold: Self::DEFAULT_GRAB_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::AxisRange;

    #[test]
    fn defaults_match_working_volume() {
        let cfg = TrackerConfig::default();
        assert_eq!(cfg.grab_threshold, 0.75);
        assert_eq!(cfg.calibration.x, AxisRange::new(-100.0, 150.0));
        assert_eq!(cfg.calibration.y, AxisRange::new(80.0, 400.0));
        assert_eq!(cfg.calibration.z, AxisRange::new(-350.0, 350.0));
        assert_eq!(cfg.calibration.pressure, AxisRange::new(0.0, 300.0));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(TrackerConfig::from_json("{}").unwrap(), TrackerConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_axes() {
        let cfg = TrackerConfig::from_json(
            r#"{ "calibration": { "y": { "min": 100.0, "max": 420.0 } }, "grab_threshold": 0.8 }"#,
        ).unwrap();
        assert_eq!(cfg.calibration.y, AxisRange::new(100.0, 420.0));
        assert_eq!(cfg.calibration.x, Calibration::X);
        assert_eq!(cfg.grab_threshold, 0.8);
    }

    #[test]
    fn degenerate_axis_rejected() {
        let err = TrackerConfig::from_json(
            r#"{ "calibration": { "pressure": { "min": 10.0, "max": 10.0 } } }"#,
        ).unwrap_err();
        assert!(matches!(err, Error::DegenerateRange { axis: "pressure", .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = TrackerConfig::from_json("{ grab_threshold: }").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = TrackerConfig::load("/nonexistent/leaphand.json").unwrap_err();
        assert!(matches!(err, Error::ConfigIo { .. }));
    }
}
