//! Sensor millimetres → normalized screen space.
//!
//! The LeapMotion working volume is mapped onto `[0, 1]` per axis using a
//! [`Calibration`].  Depth additionally drives a pressure proxy: the closer
//! the palm is to the device plane, the harder the "press".

use serde::{Deserialize, Serialize};

use crate::sample::PalmPosition;

/// Map `value` from `[minimum, maximum]` onto `[0, 1]`.
///
/// The result is not clamped, so values outside the range land outside
/// `[0, 1]`.  `maximum == minimum` divides by zero; callers must not pass a
/// degenerate range.
pub fn normalize(value: f32, minimum: f32, maximum: f32) -> f32 {
    (value - minimum) / (maximum - minimum)
}

// ════════════════════════════════════════════════════════════════════════════
// AxisRange / Calibration
// ════════════════════════════════════════════════════════════════════════════

/// Inclusive range of sensor millimetres along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f32,
    pub max: f32,
}

impl AxisRange {
    pub const fn new(min: f32, max: f32) -> Self {
        AxisRange { min, max }
    }

    pub fn normalize(&self, value: f32) -> f32 {
        normalize(value, self.min, self.max)
    }

    pub fn is_degenerate(&self) -> bool {
        self.min == self.max || !self.min.is_finite() || !self.max.is_finite()
    }
}

/// Working volume of the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    /// Left/right sweep → `sx`.
    pub x: AxisRange,
    /// Height above the device → `sy`.
    pub y: AxisRange,
    /// Toward/away from the user → `sz`.
    pub z: AxisRange,
    /// Depth band over which pressure falls from 1.0 to 0.0.
    pub pressure: AxisRange,
}

impl Calibration {
    pub const X: AxisRange        = AxisRange::new(-100.0, 150.0);
    pub const Y: AxisRange        = AxisRange::new(80.0, 400.0);
    pub const Z: AxisRange        = AxisRange::new(-350.0, 350.0);
    pub const PRESSURE: AxisRange = AxisRange::new(0.0, 300.0);

    /// Named axes, for validation and error reporting.
    pub fn axes(&self) -> [(&'static str, AxisRange); 4] {
        [
            ("x", self.x),
            ("y", self.y),
            ("z", self.z),
            ("pressure", self.pressure),
        ]
    }

    /// Pressure proxy for a raw depth: 1.0 at or below `pressure.min`,
    /// 0.0 at or above `pressure.max`, linear in between.
    pub fn pressure(&self, z: f32) -> f32 {
        let norm = self.pressure.normalize(z).clamp(0.0, 1.0);
        1.0 - norm
    }

    /// Apply the calibration to one palm position.
    pub fn map(&self, pos: &PalmPosition) -> NormalizedPosition {
        let pressure = self.pressure(pos.z);
        log::trace!("pressure = {pressure}");
        NormalizedPosition {
            sx: self.x.normalize(pos.x),
            sy: self.y.normalize(pos.y),
            sz: self.z.normalize(pos.z),
            z:  pos.z,
            pressure,
        }
    }
}

impl Default for Calibration {
    fn default() -> Self {
        Calibration {
            x:        Self::X,
            y:        Self::Y,
            z:        Self::Z,
            pressure: Self::PRESSURE,
        }
    }
}

/// Output of [`Calibration::map`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPosition {
    pub sx: f32,
    pub sy: f32,
    /// Normalized depth; carried along but not used for touch decisions.
    pub sz: f32,
    /// Raw depth in millimetres.
    pub z:  f32,
    pub pressure: f32,
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_x_origin() {
        assert_eq!(normalize(0.0, -100.0, 150.0), 0.4);
    }

    #[test]
    fn normalize_endpoints() {
        assert_eq!(normalize(80.0, 80.0, 400.0), 0.0);
        assert_eq!(normalize(400.0, 80.0, 400.0), 1.0);
    }

    #[test]
    fn normalize_is_unclamped() {
        assert_relative_eq!(normalize(-350.0, -100.0, 150.0), -1.0);
        assert_relative_eq!(normalize(400.0, -100.0, 150.0), 2.0);
    }

    #[test]
    fn normalize_matches_formula() {
        for &(v, lo, hi) in &[(3.0f32, 1.0f32, 5.0f32), (-2.5, -10.0, 10.0), (7.0, 10.0, 0.0)] {
            assert_relative_eq!(normalize(v, lo, hi), (v - lo) / (hi - lo));
        }
    }

    #[test]
    fn pressure_clamps_at_device_plane() {
        let cal = Calibration::default();
        assert_eq!(cal.pressure(0.0), 1.0);
        assert_eq!(cal.pressure(-40.0), 1.0);
    }

    #[test]
    fn pressure_clamps_far_away() {
        let cal = Calibration::default();
        assert_eq!(cal.pressure(300.0), 0.0);
        assert_eq!(cal.pressure(520.0), 0.0);
    }

    #[test]
    fn pressure_midpoint() {
        assert_eq!(Calibration::default().pressure(150.0), 0.5);
    }

    #[test]
    fn pressure_non_increasing_in_depth() {
        let cal = Calibration::default();
        let mut prev = cal.pressure(-10.0);
        for step in 0..=62 {
            let p = cal.pressure(step as f32 * 5.0);
            assert!(p <= prev, "pressure rose at z={}", step * 5);
            assert!((0.0..=1.0).contains(&p));
            prev = p;
        }
    }

    #[test]
    fn map_uses_every_axis() {
        let n = Calibration::default().map(&PalmPosition::new(0.0, 240.0, 0.0));
        assert_eq!(n.sx, 0.4);
        assert_relative_eq!(n.sy, 0.5);
        assert_relative_eq!(n.sz, 0.5);
        assert_eq!(n.z, 0.0);
        assert_eq!(n.pressure, 1.0);
    }

    #[test]
    fn degenerate_range_detected() {
        assert!(AxisRange::new(5.0, 5.0).is_degenerate());
        assert!(AxisRange::new(0.0, f32::NAN).is_degenerate());
        assert!(!Calibration::Y.is_degenerate());
    }
}
