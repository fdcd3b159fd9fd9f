//! Frame queue between the sensor thread and the consumer.
//!
//! An unbounded FIFO: the producer never blocks and the consumer drains
//! without waiting.  Frames queue up if the consumer falls behind.

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TryRecvError};

use crate::sample::Frame;

/// Create a connected producer/consumer pair.
pub fn frame_queue() -> (FrameProducer, FrameConsumer) {
    let (tx, rx) = crossbeam_channel::unbounded();
    let consumer_alive = Arc::new(AtomicBool::new(true));
    (
        FrameProducer { tx, consumer_alive: Arc::clone(&consumer_alive) },
        FrameConsumer { rx, finished: Cell::new(false), consumer_alive },
    )
}

/// Sending half, owned by the sensor thread.  Cloneable.
#[derive(Clone)]
pub struct FrameProducer {
    tx:             Sender<Frame>,
    consumer_alive: Arc<AtomicBool>,
}

impl FrameProducer {
    /// Append a frame.  Returns `false` once the consumer is gone.
    pub fn push(&self, frame: Frame) -> bool {
        self.tx.send(frame).is_ok()
    }

    /// False once the consumer has been dropped.  Lets a source that is
    /// waiting on hardware stop without having to push a frame first.
    pub fn is_consumer_alive(&self) -> bool {
        self.consumer_alive.load(Ordering::Acquire)
    }
}

/// Receiving half, owned by the consumer.
pub struct FrameConsumer {
    rx:       Receiver<Frame>,
    /// Set once a pop found the queue empty with every producer dropped.
    finished:       Cell<bool>,
    consumer_alive: Arc<AtomicBool>,
}

impl FrameConsumer {
    /// Pop the oldest frame, or `None` if the queue is currently empty.
    pub fn try_pop(&self) -> Option<Frame> {
        match self.rx.try_recv() {
            Ok(frame) => Some(frame),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.finished.set(true);
                None
            }
        }
    }

    /// Iterate over the frames queued right now, oldest first, without blocking.
    pub fn drain(&self) -> impl Iterator<Item = Frame> + '_ {
        std::iter::from_fn(move || self.try_pop())
    }

    pub fn len(&self) -> usize { self.rx.len() }

    pub fn is_empty(&self) -> bool { self.rx.is_empty() }

    /// True once every producer has been dropped and the last frame was popped.
    ///
    /// Only updated by popping, so check it after a drain.
    pub fn is_finished(&self) -> bool { self.finished.get() }
}

impl Drop for FrameConsumer {
    fn drop(&mut self) {
        self.consumer_alive.store(false, Ordering::Release);
    }
}
