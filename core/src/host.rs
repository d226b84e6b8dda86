//! Frame driver

use crate::app::*;
use crate::color::*;
use crate::density::*;
use crate::dither::*;
use crate::emitter::*;
use crate::error::*;
use crate::evaluator::*;
use crate::frame::*;
use crate::low_discrepancy::*;
use crate::numeric::*;
use crate::sampler::*;
use crate::telemetry::*;
use bitflags::bitflags;

/// Scale change per second while a scale key is held.
const SCALE_RATE: Float = 1.5;

bitflags! {
    /// Host input collected for one tick.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HostKeys: u16 {
        const RATE_UP = 1;
        const RATE_DOWN = 1 << 1;
        const NEXT_EVALUATOR = 1 << 2;
        const PREV_EVALUATOR = 1 << 3;
        const NEXT_PALETTE = 1 << 4;
        const PREV_PALETTE = 1 << 5;
        const RESET_VIEW = 1 << 6;
        const SCALE_UP = 1 << 7;
        const SCALE_DOWN = 1 << 8;
        const QUIT = 1 << 9;
    }
}

/// Owns the interactive state and drives one frame per tick: apply host
/// input, snapshot the state, dispatch the workers and feed the frame time
/// back to the density controller.
pub struct Explorer {
    /// The evaluators.
    registry: EvaluatorRegistry,

    /// Sample count controller.
    controller: DensityController,

    /// Selected evaluator.
    evaluator: CyclicIndex,

    /// Selected palette.
    palette: CyclicIndex,

    /// Camera frame.
    camera: CameraFrame,

    /// The sampled volume.
    volume: Volume,

    /// Gamma table; `None` disables dithering.
    gamma_lut: Option<GammaLut>,

    /// Runs the workers.
    dispatcher: Dispatcher,

    /// Points per batch.
    batch_capacity: usize,

    /// The sample sequence.
    sequence: R3Sequence,

    /// Number of frames completed.
    frame: u64,
}

impl Explorer {
    /// Create a new explorer.
    ///
    /// * `options`  - The application options.
    /// * `registry` - The evaluators.
    pub fn new(options: &Options, registry: EvaluatorRegistry) -> Self {
        if options.evaluator >= registry.len() {
            warn!(
                "Evaluator {} out of range; {} evaluators available",
                options.evaluator,
                registry.len()
            );
        }
        if options.batch_size == 0 {
            warn!("Invalid batch size 0; using 1");
        }

        let mut camera = CameraFrame::default();
        camera.scale_by(options.scale);

        let dispatcher = Dispatcher::new(options.threads());
        info!("Sampling with {} worker threads", dispatcher.workers());

        Self {
            controller: DensityController::new(options.density_config()),
            evaluator: CyclicIndex::new(options.evaluator, registry.len()),
            palette: CyclicIndex::new(options.palette, PALETTES.len()),
            registry,
            camera,
            volume: options.half_extents().map_or_else(Volume::default, Volume::new),
            gamma_lut: (!options.no_dither).then(|| GammaLut::new(options.gamma)),
            dispatcher,
            batch_capacity: options.batch_size.max(1),
            sequence: R3Sequence::new(options.sequence_offset),
            frame: 0,
        }
    }

    /// Returns the camera frame.
    pub fn camera(&self) -> &CameraFrame {
        &self.camera
    }

    /// Returns the camera frame for host navigation.
    pub fn camera_mut(&mut self) -> &mut CameraFrame {
        &mut self.camera
    }

    /// Returns the sampled volume.
    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    /// Returns the density controller.
    pub fn controller(&self) -> &DensityController {
        &self.controller
    }

    /// Returns the evaluators.
    pub fn registry(&self) -> &EvaluatorRegistry {
        &self.registry
    }

    /// Returns the selected evaluator index.
    pub fn evaluator_index(&self) -> usize {
        self.evaluator.get()
    }

    /// Returns the selected palette index.
    pub fn palette_index(&self) -> usize {
        self.palette.get()
    }

    /// Returns the number of frames completed.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// Sets the display gamma and rebuilds the gamma table if it changed.
    /// Has no effect when dithering is disabled.
    ///
    /// * `gamma` - The gamma exponent.
    pub fn set_gamma(&mut self, gamma: Float) {
        if let Some(lut) = self.gamma_lut.as_mut() {
            if lut.gamma() != gamma {
                *lut = GammaLut::new(gamma);
            }
        }
    }

    /// Applies host input. Returns `false` if the host asked to quit.
    ///
    /// * `keys` - The keys for this tick.
    pub fn apply_keys(&mut self, keys: HostKeys) -> bool {
        if keys.contains(HostKeys::QUIT) {
            return false;
        }

        if keys.contains(HostKeys::RATE_UP) {
            self.controller.increase_rate();
        }
        if keys.contains(HostKeys::RATE_DOWN) {
            self.controller.decrease_rate();
        }
        if keys.contains(HostKeys::NEXT_EVALUATOR) {
            self.evaluator.next();
        }
        if keys.contains(HostKeys::PREV_EVALUATOR) {
            self.evaluator.prev();
        }
        if keys.contains(HostKeys::NEXT_PALETTE) {
            self.palette.next();
        }
        if keys.contains(HostKeys::PREV_PALETTE) {
            self.palette.prev();
        }
        if keys.contains(HostKeys::RESET_VIEW) {
            self.camera.reset();
        }

        // Held scale keys change the scale at a fixed rate per second.
        let dt = self
            .controller
            .last_frame_time()
            .unwrap_or(1.0 / self.controller.target_rate() as f64) as Float;
        if keys.contains(HostKeys::SCALE_UP) {
            self.camera.scale_by(SCALE_RATE.powf(dt));
        }
        if keys.contains(HostKeys::SCALE_DOWN) {
            self.camera.scale_by(SCALE_RATE.powf(-dt));
        }

        true
    }

    /// Returns an immutable snapshot of the current state.
    ///
    /// * `time` - Animation time in seconds.
    pub fn snapshot(&self, time: Float) -> Result<FrameSnapshot, FrameError> {
        let index = self.evaluator.get();
        let evaluator = self
            .registry
            .get(index)
            .ok_or(FrameError::NoEvaluator { index })?;

        Ok(FrameSnapshot::new(
            self.volume,
            &self.camera,
            evaluator.clone(),
            EvalEnv::new(time, palette(self.palette.get())),
            self.controller.samples(),
            self.sequence,
            self.batch_capacity,
            self.gamma_lut.clone(),
        ))
    }

    /// Runs one tick. Returns `Ok(None)` if the host asked to quit. A failed
    /// frame is logged and leaves the density state untouched so the next
    /// tick retries it.
    ///
    /// * `keys` - The keys for this tick.
    /// * `time` - Animation time in seconds.
    /// * `sink` - Receives the point batches.
    pub fn tick(
        &mut self,
        keys: HostKeys,
        time: Float,
        sink: &dyn BatchSink,
    ) -> Result<Option<FrameTelemetry>, FrameError> {
        if !self.apply_keys(keys) {
            info!("Quit requested after {} frames", self.frame);
            return Ok(None);
        }

        let result = self
            .snapshot(time)
            .and_then(|snapshot| self.dispatcher.run(&snapshot, sink).map(|stats| (snapshot, stats)));

        let (snapshot, stats) = match result {
            Ok(r) => r,
            Err(e) => {
                error!("Frame {} aborted: {}", self.frame, e);
                return Err(e);
            }
        };

        let frame_time = stats.elapsed.as_secs_f64();
        self.controller.update(frame_time);

        let telemetry = FrameTelemetry {
            frame: self.frame,
            target_rate: self.controller.target_rate(),
            measured_rate: if frame_time > 0.0 {
                (1.0 / frame_time) as Float
            } else {
                0.0
            },
            samples: snapshot.sample_count,
            evaluator_index: self.evaluator.get(),
            evaluator_name: snapshot.evaluator.name(),
            palette_index: self.palette.get(),
            solid_points: stats.solid,
            batches: stats.batches,
        };
        info!("{}", telemetry);

        self.frame += 1;
        Ok(Some(telemetry))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::*;
    use clap::Parser;

    /// Solid inside a ball of radius 0.5 with the first palette color that
    /// is not black.
    struct Ball;

    impl Evaluator for Ball {
        fn name(&self) -> &'static str {
            "ball"
        }

        fn evaluate(&self, p: &Point3f, env: &EvalEnv) -> Classification {
            if Point3f::zero().distance_squared(p) <= 0.25 {
                Classification::Solid(Rgb::new(env.palette.entry(1).packed() | 1))
            } else {
                Classification::Empty
            }
        }
    }

    /// Panics on every sample.
    struct Faulty;

    impl Evaluator for Faulty {
        fn name(&self) -> &'static str {
            "faulty"
        }

        fn evaluate(&self, _p: &Point3f, _env: &EvalEnv) -> Classification {
            panic!("faulty evaluator");
        }
    }

    fn options(extra: &[&str]) -> Options {
        let mut args = vec![
            "holofract",
            "-t",
            "2",
            "--samples",
            "4096",
            "--min-samples",
            "1024",
            "--max-samples",
            "8192",
        ];
        args.extend_from_slice(extra);
        Options::parse_from(args)
    }

    fn registry() -> EvaluatorRegistry {
        EvaluatorRegistry::default().with(Ball).with(Faulty)
    }

    #[test]
    fn tick_reports_telemetry() {
        let mut explorer = Explorer::new(&options(&["--no-dither"]), registry());
        let sink = CountingSink::default();

        let t = explorer.tick(HostKeys::empty(), 0.0, &sink).unwrap().unwrap();
        assert_eq!(t.frame, 0);
        assert_eq!(t.samples, 4096);
        assert_eq!(t.evaluator_index, 0);
        assert_eq!(t.evaluator_name, "ball");
        assert_eq!(t.solid_points, sink.points());
        assert_eq!(t.batches, sink.batches());
        assert!(t.solid_points > 0);
        assert_eq!(explorer.frames(), 1);

        // The controller saw the frame time.
        assert!(explorer.controller().last_frame_time().is_some());
        let n = explorer.controller().samples();
        assert!((1024..=8192).contains(&n));
    }

    #[test]
    fn quit_stops_without_sampling() {
        let mut explorer = Explorer::new(&options(&[]), registry());
        let sink = CountingSink::default();
        let keys = HostKeys::QUIT | HostKeys::NEXT_EVALUATOR;
        assert_eq!(explorer.tick(keys, 0.0, &sink), Ok(None));
        assert_eq!(sink.batches(), 0);
        assert_eq!(explorer.evaluator_index(), 0);
    }

    #[test]
    fn failed_frame_keeps_density_state_and_retries() {
        let mut explorer = Explorer::new(&options(&["-e", "1"]), registry());
        let sink = CountingSink::default();
        let before = *explorer.controller();

        let r = explorer.tick(HostKeys::empty(), 0.0, &sink);
        assert!(matches!(r, Err(FrameError::WorkerPanicked { .. })));
        assert_eq!(*explorer.controller(), before);
        assert_eq!(explorer.frames(), 0);

        // Switch to the working evaluator on the next tick.
        let t = explorer.tick(HostKeys::NEXT_EVALUATOR, 0.0, &sink).unwrap().unwrap();
        assert_eq!(t.evaluator_index, 0);
        assert_eq!(t.frame, 0);
    }

    #[test]
    fn empty_registry_is_an_error() {
        let mut explorer = Explorer::new(&options(&[]), EvaluatorRegistry::default());
        let sink = CountingSink::default();
        assert_eq!(
            explorer.tick(HostKeys::empty(), 0.0, &sink),
            Err(FrameError::NoEvaluator { index: 0 })
        );
    }

    #[test]
    fn selection_keys_cycle() {
        let mut explorer = Explorer::new(&options(&[]), registry());
        assert!(explorer.apply_keys(HostKeys::PREV_EVALUATOR));
        assert_eq!(explorer.evaluator_index(), 1);
        assert!(explorer.apply_keys(HostKeys::NEXT_EVALUATOR));
        assert_eq!(explorer.evaluator_index(), 0);

        assert!(explorer.apply_keys(HostKeys::PREV_PALETTE));
        assert_eq!(explorer.palette_index(), PALETTES.len() - 1);
        assert!(explorer.apply_keys(HostKeys::NEXT_PALETTE));
        assert_eq!(explorer.palette_index(), 0);
    }

    #[test]
    fn rate_and_view_keys() {
        let mut explorer = Explorer::new(&options(&[]), registry());
        explorer.apply_keys(HostKeys::RATE_UP);
        assert_eq!(explorer.controller().target_rate(), 31.0);
        explorer.apply_keys(HostKeys::RATE_DOWN);
        assert_eq!(explorer.controller().target_rate(), 30.0);

        explorer.apply_keys(HostKeys::SCALE_UP);
        assert!(explorer.camera().scale > 1.0);
        explorer.camera_mut().translate(&Vector3f::new(1.0, 0.0, 0.0));
        explorer.apply_keys(HostKeys::RESET_VIEW);
        assert_eq!(*explorer.camera(), CameraFrame::default());

        explorer.apply_keys(HostKeys::SCALE_DOWN);
        assert!(explorer.camera().scale < 1.0);
    }

    #[test]
    fn dithered_points_are_on_or_off() {
        let mut explorer = Explorer::new(&options(&["-g", "2.2"]), registry());
        explorer.set_gamma(1.0);
        let sink = CollectingSink::default();
        explorer.tick(HostKeys::empty(), 0.0, &sink).unwrap();
        for p in sink.take() {
            assert!(p.color.r() == 0 || p.color.r() == 0xff);
            assert!(p.color.g() == 0 || p.color.g() == 0xff);
            assert!(p.color.b() == 0 || p.color.b() == 0xff);
            assert!(explorer.volume().contains(&p.position));
        }
    }
}
