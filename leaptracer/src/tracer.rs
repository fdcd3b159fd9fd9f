//! Per-touch trail bookkeeping: the consumer side of the provider.
//!
//! Every `Begin` opens a trail, `Update`s extend it, and `End` closes it and
//! moves it to the finished list.  Nothing about a touch is kept live past
//! its `End`.

use std::collections::HashMap;

use leaphand::{Capability, HandId, Handedness, TouchEvent, TouchRecord, TouchSink};

/// The path one touch traced, in normalized coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    pub id:            HandId,
    pub hand:          Handedness,
    /// Grabbing (pressed) or hovering for the whole trail.
    pub touching:      bool,
    pub points:        Vec<(f32, f32)>,
    pub peak_pressure: f32,
}

impl Trail {
    fn open(t: &TouchRecord) -> Self {
        Trail {
            id:            t.id,
            hand:          t.hand,
            touching:      t.is_touch,
            points:        vec![t.pos()],
            peak_pressure: pressure_of(t),
        }
    }

    fn extend(&mut self, t: &TouchRecord) {
        self.points.push(t.pos());
        self.peak_pressure = self.peak_pressure.max(pressure_of(t));
    }
}

/// Pressure if the record advertises it, zero otherwise.
fn pressure_of(t: &TouchRecord) -> f32 {
    if t.has(Capability::Pressure) { t.pressure } else { 0.0 }
}

#[derive(Debug, Default)]
pub struct TouchTracer {
    live:     HashMap<HandId, Trail>,
    finished: Vec<Trail>,
}

impl TouchTracer {
    pub fn new() -> Self { Self::default() }

    pub fn live(&self) -> usize { self.live.len() }

    pub fn finished(&self) -> &[Trail] { &self.finished }
}

impl TouchSink for TouchTracer {
    fn dispatch(&mut self, event: &TouchEvent) {
        match event {
            TouchEvent::Begin(t) => {
                log::info!("{}", label("begin", t));
                self.live.insert(t.id, Trail::open(t));
            }
            TouchEvent::Update(t) => {
                log::debug!("{}", label("move", t));
                match self.live.get_mut(&t.id) {
                    Some(trail) => trail.extend(t),
                    None => log::warn!("update for unknown touch {}", t.id),
                }
            }
            TouchEvent::End(t) => {
                match self.live.remove(&t.id) {
                    Some(trail) => {
                        log::info!(
                            "{}  points={} peak pressure={:.2}",
                            label("end", t), trail.points.len(), trail.peak_pressure,
                        );
                        self.finished.push(trail);
                    }
                    None => log::warn!("end for unknown touch {}", t.id),
                }
            }
        }
    }
}

fn label(what: &str, t: &TouchRecord) -> String {
    format!(
        "{what:<5} ID: {}  Pos: ({:.3}, {:.3})  Hand: {}  Touch: {}  Pressure: {:.2}",
        t.id, t.sx, t.sy, t.hand, t.is_touch, t.pressure,
    )
}
