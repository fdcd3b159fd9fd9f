//! Frame → touch event reconciliation.
//!
//! [`FrameTracker`] keeps one [`TouchRecord`] per hand id it has seen and not
//! yet ended.  Each call to [`FrameTracker::process_frame`] compares the hands
//! in the new frame against that set:
//!
//! * a new id begins a touch;
//! * a known id with the same grab state updates its touch in place;
//! * a known id whose grab state flipped ends its touch.  The hand is then
//!   untracked and only begins again on a later frame;
//! * a known id missing from the frame ends its touch.
//!
//! Ends for missing hands come after all begins/updates of the frame.

use crate::config::TrackerConfig;
use crate::sample::{Frame, HandId};
use crate::touch::{TouchEvent, TouchRecord};

pub struct FrameTracker {
    /// Live touches in the order their hands first appeared.
    touches: Vec<TouchRecord>,
    config:  TrackerConfig,
}

impl FrameTracker {
    pub fn new(config: TrackerConfig) -> Self {
        FrameTracker { touches: Vec::new(), config }
    }

    pub fn config(&self) -> &TrackerConfig { &self.config }

    /// Grab classification; the threshold itself does not count as touching.
    pub fn is_touch(&self, grab_strength: f32) -> bool {
        grab_strength > self.config.grab_threshold
    }

    /// Reconcile one frame and return the events it produces, in order.
    pub fn process_frame(&mut self, frame: &Frame) -> Vec<TouchEvent> {
        let mut events = Vec::with_capacity(frame.hands.len() + self.touches.len());
        let present: Vec<HandId> = frame.hands.iter().map(|h| h.id).collect();
        let calibration = &self.config.calibration;

        for hand in &frame.hands {
            let Some(pos) = hand.palm_position else {
                log::debug!("hand {} reported without a palm position, skipped", hand.id);
                continue;
            };
            let is_touch = self.is_touch(hand.grab_strength);

            match self.index_of(hand.id) {
                None => {
                    let touch = TouchRecord::new(hand.id, &pos, is_touch, hand.handedness, calibration);
                    self.touches.push(touch);
                    log::debug!("begin {} ({}, touch={})", touch.id, touch.hand, is_touch);
                    events.push(TouchEvent::Begin(touch));
                }
                Some(i) if self.touches[i].is_touch != is_touch => {
                    let touch = self.touches.remove(i);
                    log::debug!("end {} (grab {} → {})", touch.id, touch.is_touch, is_touch);
                    events.push(TouchEvent::End(touch));
                }
                Some(i) => {
                    let touch = &mut self.touches[i];
                    touch.move_to(&pos, calibration);
                    events.push(TouchEvent::Update(*touch));
                }
            }
        }

        self.touches.retain(|touch| {
            if present.contains(&touch.id) {
                return true;
            }
            log::debug!("end {} (hand lost)", touch.id);
            events.push(TouchEvent::End(*touch));
            false
        });

        events
    }

    fn index_of(&self, id: HandId) -> Option<usize> {
        self.touches.iter().position(|t| t.id == id)
    }

    pub fn get(&self, id: HandId) -> Option<&TouchRecord> {
        self.touches.iter().find(|t| t.id == id)
    }

    pub fn is_tracked(&self, id: HandId) -> bool { self.index_of(id).is_some() }

    pub fn touches(&self) -> impl Iterator<Item = &TouchRecord> { self.touches.iter() }

    pub fn len(&self) -> usize { self.touches.len() }

    pub fn is_empty(&self) -> bool { self.touches.is_empty() }
}

impl Default for FrameTracker {
    fn default() -> Self {
        FrameTracker::new(TrackerConfig::default())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
