//! Scripted hand motion for running without hardware.
//!
//! * Right hand (id 10) enters open, sweeps left→right, grabs and pushes
//!   toward the device, lets go, then leaves.  One mid-sweep frame has no
//!   palm position, as the sensor occasionally reports.
//! * Left hand (id 11) appears halfway through, already grabbing, rises and
//!   disappears.

use leaphand::{Frame, HandId, Handedness, PalmPosition, RawHandSample};

pub const RIGHT: u32 = 10;
pub const LEFT:  u32 = 11;

const FRAMES: usize = 62;

pub fn demo_script() -> Vec<Frame> {
    (0..FRAMES).map(frame_at).collect()
}

fn frame_at(i: usize) -> Frame {
    let mut hands = Vec::new();

    if i < 60 {
        let t = i as f32 / 59.0;
        let grab = if (15..45).contains(&i) { 0.9 } else { 0.2 };
        // Push down from 200 mm to 20 mm while grabbing, back up afterwards.
        let z = match i {
            0..=14  => 200.0,
            15..=44 => 200.0 - (i - 15) as f32 * 6.0,
            _       => 120.0,
        };
        let sample = if i == 30 {
            RawHandSample {
                id:            HandId(RIGHT),
                palm_position: None,
                grab_strength: grab,
                handedness:    Handedness::Right,
            }
        } else {
            RawHandSample::new(RIGHT, PalmPosition::new(-100.0 + 250.0 * t, 220.0, z), grab, Handedness::Right)
        };
        hands.push(sample);
    }

    if (20..=40).contains(&i) {
        let y = 100.0 + (i - 20) as f32 * 12.0;
        hands.push(RawHandSample::new(LEFT, PalmPosition::new(-40.0, y, 80.0), 0.8, Handedness::Left));
    }

    Frame::new(hands)
}
