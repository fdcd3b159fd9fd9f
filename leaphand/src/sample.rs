//! Raw per-frame input from the sensor.
//!
//! These types carry only what the tracker consumes: identity, palm position,
//! grab strength and handedness.  Fingers, bones and SDK gestures are ignored.

use std::fmt;

/// Sensor-assigned hand identity.
///
/// Unique within a frame and reused across frames while the sensor keeps
/// tracking the same physical hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandId(pub u32);

impl fmt::Display for HandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handedness { Left, Right }

impl Handedness {
    pub fn from_is_right(is_right: bool) -> Self {
        if is_right { Handedness::Right } else { Handedness::Left }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Handedness::Left  => "left",
            Handedness::Right => "right",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Palm centre in sensor millimetres.
///
/// `y` is height above the device, `z` grows toward the user.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PalmPosition {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PalmPosition {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        PalmPosition { x, y, z }
    }
}

/// One hand as reported in a single frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RawHandSample {
    pub id:            HandId,
    /// `None` when the sensor reported the hand without a usable palm position.
    pub palm_position: Option<PalmPosition>,
    /// How closed the hand is, 0.0 (open) to 1.0 (fist).
    pub grab_strength: f32,
    pub handedness:    Handedness,
}

impl RawHandSample {
    pub fn new(id: u32, position: PalmPosition, grab_strength: f32, handedness: Handedness) -> Self {
        RawHandSample {
            id: HandId(id),
            palm_position: Some(position),
            grab_strength,
            handedness,
        }
    }
}

/// All hands visible to the sensor at one instant, in sensor order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    pub hands: Vec<RawHandSample>,
}

impl Frame {
    pub fn new(hands: Vec<RawHandSample>) -> Self {
        Frame { hands }
    }

    pub fn empty() -> Self {
        Frame::default()
    }

    pub fn is_empty(&self) -> bool { self.hands.is_empty() }
}

impl From<Vec<RawHandSample>> for Frame {
    fn from(hands: Vec<RawHandSample>) -> Self {
        Frame { hands }
    }
}
