//! Source thread → queue → provider → sink, end to end.

use std::thread;
use std::time::{Duration, Instant};

use leaphand::{
    EventKind, Frame, HandEventProvider, HandId, Handedness, PalmPosition, RawHandSample,
    SimFrameSource, TouchEvent, TrackerConfig,
};

fn hand(id: u32, grab: f32, z: f32, handedness: Handedness) -> RawHandSample {
    RawHandSample::new(id, PalmPosition::new(0.0, 200.0, z), grab, handedness)
}

fn run_to_completion(frames: Vec<Frame>) -> Vec<TouchEvent> {
    let mut provider = HandEventProvider::start(
        SimFrameSource::new(frames, Duration::from_millis(1)),
        TrackerConfig::default(),
    )
    .expect("simulation source starts");
    let mut events = Vec::new();
    let deadline = Instant::now() + Duration::from_secs(5);
    while provider.is_source_connected() && Instant::now() < deadline {
        provider.update(&mut |ev: &TouchEvent| events.push(*ev));
        thread::sleep(Duration::from_millis(2));
    }
    assert!(!provider.is_source_connected(), "simulation did not finish in time");
    events
}

#[test]
fn begin_update_end_through_the_queue() {
    let events = run_to_completion(vec![
        Frame::new(vec![hand(1, 0.9, 50.0, Handedness::Right)]),
        Frame::new(vec![hand(1, 0.9, 40.0, Handedness::Right)]),
        Frame::empty(),
    ]);
    let kinds: Vec<EventKind> = events.iter().map(TouchEvent::kind).collect();
    assert_eq!(kinds, vec![EventKind::Begin, EventKind::Update, EventKind::End]);
    assert!(events.iter().all(|e| e.id() == HandId(1)));
}

#[test]
fn two_hands_with_a_release() {
    let events = run_to_completion(vec![
        Frame::new(vec![hand(1, 0.9, 50.0, Handedness::Right), hand(2, 0.1, 250.0, Handedness::Left)]),
        Frame::new(vec![hand(1, 0.2, 60.0, Handedness::Right), hand(2, 0.1, 240.0, Handedness::Left)]),
        Frame::new(vec![hand(1, 0.2, 70.0, Handedness::Right)]),
        Frame::empty(),
    ]);
    let got: Vec<(EventKind, u32)> = events.iter().map(|e| (e.kind(), e.id().0)).collect();
    assert_eq!(got, vec![
        (EventKind::Begin,  1),
        (EventKind::Begin,  2),
        (EventKind::End,    1),
        (EventKind::Update, 2),
        (EventKind::Begin,  1),
        (EventKind::End,    2),
        (EventKind::End,    1),
    ]);

    // The release carries the state from before the hand opened.
    assert!(events[2].touch().is_touch);
    assert_eq!(events[2].touch().z, 50.0);
    assert!(!events[4].touch().is_touch);
    assert_eq!(events[5].touch().hand, Handedness::Left);
}
