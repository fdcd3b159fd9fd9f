//! # leaphand
//!
//! LeapMotion hand tracking as a touch input provider.  Each hand the sensor
//! sees becomes a touch; closing the hand (a grab) marks it as touching, and
//! the palm's height above the sensor becomes a pressure value.
//!
//! ## Pipeline
//!
//! ```text
//! sensor thread ──push──▶ FrameQueue ──drain──▶ FrameTracker ──▶ TouchSink
//!  (FrameSource)                       (HandEventProvider::update)
//! ```
//!
//! ## Event lifecycle
//!
//! | Situation | Event |
//! |---|---|
//! | Hand id seen for the first time | `Begin` |
//! | Hand id seen again, grab state unchanged | `Update` |
//! | Hand id seen again, grab state flipped | `End` (no `Begin` until a later frame) |
//! | Tracked hand id missing from the frame | `End` |
//!
//! ## Feature flags
//!
//! * (default): simulation sources only.
//! * `leap`: [`source::LeapFrameSource`] polls a real LeapMotion controller via LeapC.

pub mod error;
pub mod sample;
pub mod normalize;
pub mod config;
pub mod touch;
pub mod tracker;
pub mod queue;
pub mod source;
pub mod provider;

pub use error::{Error, Result};
pub use sample::{Frame, HandId, Handedness, PalmPosition, RawHandSample};
pub use normalize::{normalize, AxisRange, Calibration, NormalizedPosition};
pub use config::TrackerConfig;
pub use touch::{Capability, EventKind, TouchEvent, TouchRecord};
pub use tracker::FrameTracker;
pub use queue::{frame_queue, FrameConsumer, FrameProducer};
pub use source::{spawn_frame_source, FrameSource, SimFrameSource};
pub use provider::{HandEventProvider, TouchSink, PROVIDER_NAME};
