//! Touch records and the events that carry them.

use crate::normalize::{Calibration, NormalizedPosition};
use crate::sample::{HandId, Handedness, PalmPosition};

// ════════════════════════════════════════════════════════════════════════════
// Capability: what a touch record can report
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Normalized 2D position (`sx`, `sy`).
    Pos,
    /// Depth (`sz`, raw `z`).
    Pos3d,
    /// Pressure proxy derived from depth.
    Pressure,
}

// ════════════════════════════════════════════════════════════════════════════
// TouchRecord
// ════════════════════════════════════════════════════════════════════════════

/// The touch synthesized for one tracked hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchRecord {
    pub id:       HandId,
    pub sx:       f32,
    pub sy:       f32,
    pub sz:       f32,
    /// Raw depth in millimetres.
    pub z:        f32,
    pub pressure: f32,
    /// Whether the hand is grabbing, i.e. pressed down on the virtual screen.
    pub is_touch: bool,
    pub hand:     Handedness,
}

impl TouchRecord {
    pub const PROFILE: [Capability; 3] = [Capability::Pos, Capability::Pos3d, Capability::Pressure];

    pub fn new(
        id: HandId,
        pos: &PalmPosition,
        is_touch: bool,
        hand: Handedness,
        calibration: &Calibration,
    ) -> Self {
        let mut record = TouchRecord {
            id,
            sx: 0.0,
            sy: 0.0,
            sz: 0.0,
            z: 0.0,
            pressure: 0.0,
            is_touch,
            hand,
        };
        record.apply(calibration.map(pos));
        record
    }

    /// Move the touch to a new palm position.  Touch flag and handedness stay.
    pub fn move_to(&mut self, pos: &PalmPosition, calibration: &Calibration) {
        self.apply(calibration.map(pos));
    }

    fn apply(&mut self, n: NormalizedPosition) {
        self.sx       = n.sx;
        self.sy       = n.sy;
        self.sz       = n.sz;
        self.z        = n.z;
        self.pressure = n.pressure;
    }

    pub fn profile(&self) -> &'static [Capability] { &Self::PROFILE }

    pub fn has(&self, cap: Capability) -> bool {
        Self::PROFILE.contains(&cap)
    }

    pub fn pos(&self) -> (f32, f32) { (self.sx, self.sy) }
}

// ════════════════════════════════════════════════════════════════════════════
// TouchEvent
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind { Begin, Update, End }

/// One step of a touch lifecycle.
///
/// The payload is a snapshot of the tracker's record at emission time.  For
/// `End` it is the state the touch had before the frame that ended it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Begin(TouchRecord),
    Update(TouchRecord),
    End(TouchRecord),
}

impl TouchEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            TouchEvent::Begin(_)  => EventKind::Begin,
            TouchEvent::Update(_) => EventKind::Update,
            TouchEvent::End(_)    => EventKind::End,
        }
    }

    pub fn touch(&self) -> &TouchRecord {
        match self {
            TouchEvent::Begin(t) | TouchEvent::Update(t) | TouchEvent::End(t) => t,
        }
    }

    pub fn id(&self) -> HandId { self.touch().id }
}
