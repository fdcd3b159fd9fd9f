//! leaptracer: touch tracer driven by hand tracking.
//!
//! Usage:
//!
//! ```text
//! leaptracer [--config tracker.json] [--interval-ms 16] [--leap]
//! ```
//!
//! Without `--leap` (or without the `leap` feature) a scripted two-hand
//! session is replayed.  Set `RUST_LOG=debug` to see every move.

mod demo;
mod tracer;

use std::thread;
use std::time::Duration;

use anyhow::Context;
use leaphand::{HandEventProvider, SimFrameSource, TrackerConfig};

use crate::tracer::TouchTracer;

/// Consumer tick, roughly one display frame.
const TICK: Duration = Duration::from_millis(16);

struct Args {
    config:   Option<String>,
    interval: Duration,
    leap:     bool,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        config:   None,
        interval: Duration::from_millis(16),
        leap:     false,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => {
                args.config = Some(it.next().context("--config needs a path")?);
            }
            "--interval-ms" => {
                let ms: u64 = it.next()
                    .context("--interval-ms needs a value")?
                    .parse()
                    .context("--interval-ms must be a whole number")?;
                args.interval = Duration::from_millis(ms);
            }
            "--leap" => args.leap = true,
            other => anyhow::bail!("unknown argument `{other}`"),
        }
    }
    Ok(args)
}

fn start_provider(args: &Args, config: TrackerConfig) -> anyhow::Result<HandEventProvider> {
    if args.leap {
        #[cfg(feature = "leap")]
        {
            log::info!("Mode: LeapMotion hardware");
            return HandEventProvider::start(leaphand::source::LeapFrameSource::default(), config)
                .context("starting LeapMotion source");
        }
        #[cfg(not(feature = "leap"))]
        anyhow::bail!("--leap requires building with `--features leap`");
    }
    log::info!("Mode: scripted simulation");
    HandEventProvider::start(SimFrameSource::new(demo::demo_script(), args.interval), config)
        .context("starting simulation source")
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => TrackerConfig::load(path)
            .with_context(|| format!("loading tracker config {path}"))?,
        None => TrackerConfig::default(),
    };

    let mut provider = start_provider(&args, config)?;
    let mut tracer = TouchTracer::new();

    while provider.is_source_connected() {
        provider.update(&mut tracer);
        thread::sleep(TICK);
    }

    for trail in tracer.finished() {
        log::info!(
            "trail {} ({}, {}): {} points, peak pressure {:.2}",
            trail.id,
            trail.hand,
            if trail.touching { "touch" } else { "hover" },
            trail.points.len(),
            trail.peak_pressure,
        );
    }
    let touching = tracer.finished().iter().filter(|t| t.touching).count();
    log::info!(
        "source finished after {} frames: {} trails ({} touching, {} hovering)",
        provider.frames_processed(),
        tracer.finished().len(),
        touching,
        tracer.finished().len() - touching,
    );
    Ok(())
}
