//! Frame sources: LeapMotion hardware or a scripted simulation.
//!
//! A source runs on its own thread and pushes every frame it produces into a
//! [`FrameProducer`].  Consumers only see the [`FrameConsumer`] end and don't
//! need to know whether frames come from real hardware or a script.

use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::provider::PROVIDER_NAME;
use crate::queue::{frame_queue, FrameConsumer, FrameProducer};
use crate::sample::Frame;

// ════════════════════════════════════════════════════════════════════════════
// FrameSource trait: unified interface for hw and sim
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`Frame`]s into the queue.
///
/// `open` runs first, on the source thread, and its failure is reported back
/// to whoever spawned the source.  `run` returns when the source is exhausted
/// or the consumer is gone; the producer is dropped with it, which the
/// consumer observes as [`FrameConsumer::is_finished`].
pub trait FrameSource: Send + 'static {
    /// Whatever `open` acquires, e.g. a device connection.  Never leaves the
    /// source thread.
    type Session;

    fn open(&mut self) -> Result<Self::Session>;

    fn run(self: Box<Self>, session: Self::Session, producer: FrameProducer);
}

/// Spawn a frame source on its own named thread and return the consuming end.
///
/// Blocks until the source has opened, so a missing device surfaces here
/// rather than as an empty stream.
pub fn spawn_frame_source<S: FrameSource>(mut source: S) -> Result<FrameConsumer> {
    let (producer, consumer) = frame_queue();
    let (ready_tx, ready_rx) = crossbeam_channel::bounded::<Result<()>>(1);

    thread::Builder::new()
        .name(format!("{PROVIDER_NAME}-source"))
        .spawn(move || match source.open() {
            Ok(session) => {
                let _ = ready_tx.send(Ok(()));
                Box::new(source).run(session, producer);
            }
            Err(e) => {
                let _ = ready_tx.send(Err(e));
            }
        })
        .map_err(Error::Spawn)?;

    match ready_rx.recv() {
        Ok(opened) => opened.map(|()| consumer),
        Err(_) => Err(Error::Connection("source thread exited before opening".into())),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// SimFrameSource: scripted frames (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Replays a fixed list of frames, one every `interval`, then disconnects.
pub struct SimFrameSource {
    pub frames:   Vec<Frame>,
    pub interval: Duration,
}

impl SimFrameSource {
    pub fn new(frames: Vec<Frame>, interval: Duration) -> Self {
        SimFrameSource { frames, interval }
    }
}

impl FrameSource for SimFrameSource {
    type Session = ();

    fn open(&mut self) -> Result<()> { Ok(()) }

    fn run(self: Box<Self>, (): (), producer: FrameProducer) {
        let SimFrameSource { frames, interval } = *self;
        log::info!("{PROVIDER_NAME}: simulation started ({} frames)", frames.len());
        for frame in frames {
            if !producer.push(frame) {
                log::info!("{PROVIDER_NAME}: consumer gone, simulation stopped");
                return;
            }
            if !interval.is_zero() {
                thread::sleep(interval);
            }
        }
        log::info!("{PROVIDER_NAME}: simulation finished");
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LeapFrameSource: real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Frame source backed by a real LeapMotion controller.
///
/// Requires the `leap` feature flag and the LeapC shared library installed.
/// Each tracking event becomes one [`Frame`] carrying, per hand, its id,
/// palm position, grab strength and handedness.
#[cfg(feature = "leap")]
pub struct LeapFrameSource {
    /// Poll timeout handed to LeapC, in milliseconds.
    pub poll_timeout_ms: u32,
}

#[cfg(feature = "leap")]
impl Default for LeapFrameSource {
    fn default() -> Self {
        LeapFrameSource { poll_timeout_ms: 100 }
    }
}

#[cfg(feature = "leap")]
impl FrameSource for LeapFrameSource {
    type Session = leaprs::Connection;

    fn open(&mut self) -> Result<leaprs::Connection> {
        use leaprs::{Connection, ConnectionConfig};

        let mut connection = Connection::create(ConnectionConfig::default())
            .map_err(|e| Error::Connection(format!("failed to create LeapC connection: {e:?}")))?;
        connection.open()
            .map_err(|e| Error::Connection(format!("failed to open LeapMotion device: {e:?}")))?;
        log::info!("{PROVIDER_NAME}: Initialized");
        Ok(connection)
    }

    fn run(self: Box<Self>, mut connection: leaprs::Connection, producer: FrameProducer) {
        use leaprs::{Event, HandType};
        use crate::sample::{HandId, Handedness, PalmPosition, RawHandSample};

        while producer.is_consumer_alive() {
            let msg = match connection.poll(self.poll_timeout_ms) {
                Ok(m)  => m,
                Err(e) => {
                    log::trace!("{PROVIDER_NAME}: poll returned {e:?}");
                    continue;
                }
            };

            match msg.event() {
                Event::Connection(_)     => log::info!("{PROVIDER_NAME}: Connected"),
                Event::ConnectionLost(_) => log::info!("{PROVIDER_NAME}: Disconnected"),
                Event::Tracking(frame)   => {
                    let hands = frame.hands().map(|h| {
                        let p = h.palm().position();
                        RawHandSample {
                            id:            HandId(h.id),
                            palm_position: Some(PalmPosition::new(p.x, p.y, p.z)),
                            grab_strength: h.grab_strength,
                            handedness:    Handedness::from_is_right(h.hand_type() == HandType::Right),
                        }
                    }).collect();
                    if !producer.push(Frame::new(hands)) {
                        break;
                    }
                }
                _ => {}
            }
        }
        log::info!("{PROVIDER_NAME}: consumer gone, closing connection");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{Handedness, PalmPosition, RawHandSample};
    use crossbeam_channel::Sender;
    use std::time::Instant;

    fn script(n: u32) -> Vec<Frame> {
        (0..n)
            .map(|i| Frame::new(vec![RawHandSample::new(i, PalmPosition::default(), 0.5, Handedness::Right)]))
            .collect()
    }

    /// Drain until the source disconnects, giving up after a couple of seconds.
    fn collect(consumer: &FrameConsumer) -> Vec<Frame> {
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut out = Vec::new();
        while !consumer.is_finished() && Instant::now() < deadline {
            out.extend(consumer.drain());
            thread::sleep(Duration::from_millis(1));
        }
        out
    }

    #[test]
    fn sim_source_replays_in_order_then_finishes() {
        let consumer = spawn_frame_source(SimFrameSource::new(script(6), Duration::ZERO)).unwrap();
        let frames = collect(&consumer);
        let ids: Vec<u32> = frames.iter().map(|f| f.hands[0].id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
        assert!(consumer.is_finished());
    }

    #[test]
    fn empty_script_finishes_immediately() {
        let consumer = spawn_frame_source(SimFrameSource::new(Vec::new(), Duration::ZERO)).unwrap();
        assert!(collect(&consumer).is_empty());
        assert!(consumer.is_finished());
    }

    /// Reports the name of the thread it runs on, then stops.
    struct ThreadName(Sender<Option<String>>);

    impl FrameSource for ThreadName {
        type Session = ();

        fn open(&mut self) -> Result<()> { Ok(()) }

        fn run(self: Box<Self>, (): (), _producer: FrameProducer) {
            self.0.send(thread::current().name().map(str::to_owned)).unwrap();
        }
    }

    #[test]
    fn source_runs_on_a_named_thread() {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let consumer = spawn_frame_source(ThreadName(tx)).unwrap();
        let name = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(name.as_deref(), Some("leaphand-source"));
        assert!(collect(&consumer).is_empty());
    }

    /// A device that is never there.
    struct Unplugged;

    impl FrameSource for Unplugged {
        type Session = ();

        fn open(&mut self) -> Result<()> {
            Err(Error::Connection("no device attached".into()))
        }

        fn run(self: Box<Self>, (): (), _producer: FrameProducer) {
            unreachable!("run after a failed open");
        }
    }

    #[test]
    fn open_failure_is_returned_to_the_caller() {
        match spawn_frame_source(Unplugged) {
            Err(Error::Connection(msg)) => assert_eq!(msg, "no device attached"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("spawn succeeded without a device"),
        }
    }
}
