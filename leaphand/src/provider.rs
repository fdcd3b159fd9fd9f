//! The input provider: queue → tracker → sink, once per consumer tick.

use crate::config::TrackerConfig;
use crate::error::Result;
use crate::queue::FrameConsumer;
use crate::source::{spawn_frame_source, FrameSource};
use crate::touch::TouchEvent;
use crate::tracker::FrameTracker;

/// Name the provider registers under, used as a log prefix.
pub const PROVIDER_NAME: &str = "leaphand";

// ════════════════════════════════════════════════════════════════════════════
// TouchSink: the rendering side
// ════════════════════════════════════════════════════════════════════════════

/// Receives touch events in emission order.
///
/// A touch is live from its `Begin` to the matching `End`; whatever the sink
/// allocated for that id should be released on `End`.
pub trait TouchSink {
    fn dispatch(&mut self, event: &TouchEvent);
}

impl<F: FnMut(&TouchEvent)> TouchSink for F {
    fn dispatch(&mut self, event: &TouchEvent) {
        self(event)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HandEventProvider
// ════════════════════════════════════════════════════════════════════════════

pub struct HandEventProvider {
    tracker:  FrameTracker,
    consumer: FrameConsumer,
    frames:   u64,
}

impl HandEventProvider {
    pub fn new(consumer: FrameConsumer, config: TrackerConfig) -> Self {
        HandEventProvider {
            tracker: FrameTracker::new(config),
            consumer,
            frames: 0,
        }
    }

    /// Spawn `source` on its own thread and consume what it produces.
    ///
    /// Fails if the source thread can't be spawned or the source can't open
    /// its device.
    pub fn start<S: FrameSource>(source: S, config: TrackerConfig) -> Result<Self> {
        let provider = Self::new(spawn_frame_source(source)?, config);
        log::info!(
            "{PROVIDER_NAME}: provider started, grab threshold {}",
            provider.tracker.config().grab_threshold,
        );
        Ok(provider)
    }

    /// Process every frame queued right now, dispatching each frame's events
    /// before the next frame is touched.  Never blocks.
    ///
    /// Returns the number of frames processed.
    pub fn update<K: TouchSink + ?Sized>(&mut self, sink: &mut K) -> usize {
        let mut processed = 0;
        while let Some(frame) = self.consumer.try_pop() {
            for event in self.tracker.process_frame(&frame) {
                sink.dispatch(&event);
            }
            processed += 1;
        }
        self.frames += processed as u64;
        processed
    }

    /// False once the source has stopped and every frame it sent was processed.
    pub fn is_source_connected(&self) -> bool { !self.consumer.is_finished() }

    pub fn tracker(&self) -> &FrameTracker { &self.tracker }

    /// Frames processed since the provider started.
    pub fn frames_processed(&self) -> u64 { self.frames }
}
