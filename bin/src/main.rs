#[macro_use]
extern crate log;

use clap::Parser;
use evaluators::*;
use holo_core::app::*;
use holo_core::emitter::*;
use holo_core::frame::*;
use holo_core::host::*;
use holo_core::numeric::*;
use holo_core::point_io::*;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use std::time::Instant;

#[cfg(all(feature = "dhat-rs", feature = "jemalloc"))]
compile_error!("feature 'dhat-rs' and feature 'jemalloc' cannot be enabled at the same time");

#[cfg(feature = "dhat-rs")]
use dhat::{Dhat, DhatAlloc};

#[cfg(feature = "dhat-rs")]
#[global_allocator]
static ALLOCATOR: DhatAlloc = DhatAlloc;

#[cfg(feature = "jemalloc")]
#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static ALLOCATOR: Jemalloc = Jemalloc;

/// Yaw applied to the camera each frame.
const ORBIT_STEP: Float = 0.02;

fn main() {
    #[cfg(feature = "dhat-rs")]
    let _dhat = Dhat::start_heap_profiling();

    // Initialize `env_logger`.
    env_logger::init();

    let options = Options::parse();
    if let Err(e) = run(&options) {
        error!("{e}");
    }
}

/// Runs the headless host loop: the camera orbits the volume while the
/// explorer renders `frames` frames.
///
/// * `options` - The application options.
fn run(options: &Options) -> Result<(), String> {
    let mut explorer = Explorer::new(options, default_registry());

    let bar = ProgressBar::new(options.frames);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} frames {msg}") {
        bar.set_style(style);
    }

    // Points go to a counter except for the last frame when exporting.
    let counter = CountingSink::default();
    let collector = CollectingSink::default();

    let start = Instant::now();
    let mut failed = 0;
    for frame in 0..options.frames {
        let sink: &dyn BatchSink = if options.outfile.is_some() && frame + 1 == options.frames {
            &collector
        } else {
            &counter
        };

        explorer.camera_mut().rotate(BasisPair::ForwardRight, ORBIT_STEP);
        let time = start.elapsed().as_secs_f32();

        match explorer.tick(HostKeys::empty(), time, sink) {
            Ok(Some(t)) => bar.set_message(format!("{} vps {:.1} dots {}", t.evaluator_name, t.measured_rate, t.samples)),
            Ok(None) => break,
            // Already logged by the explorer.
            Err(_) => failed += 1,
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    info!(
        "Rendered {} frames ({} points) in {}",
        explorer.frames(),
        counter.points(),
        HumanDuration(start.elapsed())
    );

    if let Some(path) = options.outfile.as_ref() {
        write_ply_file(path, &collector.take())?;
    }

    if failed > 0 {
        Err(format!("{failed} of {} frames failed", options.frames))
    } else {
        Ok(())
    }
}
