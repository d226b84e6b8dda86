//! Adaptive sample density

use crate::numeric::*;

/// Parameters of the sample count controller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DensityConfig {
    /// Proportional gain in samples per second of timing error.
    pub gain: f64,

    /// Lower bound on the sample count.
    pub min_samples: u64,

    /// Upper bound on the sample count.
    pub max_samples: u64,

    /// Starting sample count.
    pub initial_samples: u64,

    /// Starting target volume rate in frames per second.
    pub target_rate: Float,

    /// Amount the target rate changes per adjustment.
    pub rate_step: Float,

    /// Lower bound on the target rate.
    pub min_rate: Float,

    /// Upper bound on the target rate.
    pub max_rate: Float,
}

impl Default for DensityConfig {
    /// Returns gain 2²², bounds [2¹⁵, 2²⁷], 2²¹ initial samples and a
    /// target of 30 frames per second adjustable in [3, 120].
    fn default() -> Self {
        Self {
            gain: 4_194_304.0,
            min_samples: 1 << 15,
            max_samples: 1 << 27,
            initial_samples: 1 << 21,
            target_rate: 30.0,
            rate_step: 1.0,
            min_rate: 3.0,
            max_rate: 120.0,
        }
    }
}

impl DensityConfig {
    /// Returns a copy with every parameter clamped into a usable range.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();

        let gain = if self.gain.is_finite() && self.gain >= 0.0 {
            self.gain
        } else {
            warn!("Invalid density gain {}; using {}", self.gain, defaults.gain);
            defaults.gain
        };

        let min_samples = self.min_samples.max(1);
        let max_samples = if self.max_samples < min_samples {
            warn!("Maximum samples {} below minimum {}", self.max_samples, min_samples);
            min_samples
        } else {
            self.max_samples
        };

        let min_rate = if self.min_rate.is_finite() && self.min_rate > 0.0 {
            self.min_rate
        } else {
            warn!("Invalid minimum rate {}; using {}", self.min_rate, defaults.min_rate);
            defaults.min_rate
        };
        let max_rate = if self.max_rate.is_finite() && self.max_rate >= min_rate {
            self.max_rate
        } else {
            warn!("Invalid maximum rate {}; using {}", self.max_rate, min_rate.max(defaults.max_rate));
            min_rate.max(defaults.max_rate)
        };

        let target_rate = if self.target_rate.is_finite() {
            clamp(self.target_rate, min_rate, max_rate)
        } else {
            clamp(defaults.target_rate, min_rate, max_rate)
        };
        let rate_step = if self.rate_step.is_finite() && self.rate_step > 0.0 {
            self.rate_step
        } else {
            defaults.rate_step
        };

        Self {
            gain,
            min_samples,
            max_samples,
            initial_samples: clamp(self.initial_samples, min_samples, max_samples),
            target_rate,
            rate_step,
            min_rate,
            max_rate,
        }
    }
}

/// Proportional controller adjusting the per-frame sample count so the
/// measured frame time tracks the target rate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DensityController {
    /// The sanitized parameters.
    config: DensityConfig,

    /// Current sample count.
    samples: u64,

    /// Current target rate.
    target_rate: Float,

    /// Last frame time fed to the controller in seconds.
    last_frame_time: Option<f64>,
}

impl DensityController {
    /// Create a new controller.
    ///
    /// * `config` - The parameters; clamped into a usable range.
    pub fn new(config: DensityConfig) -> Self {
        let config = config.sanitized();
        Self {
            config,
            samples: config.initial_samples,
            target_rate: config.target_rate,
            last_frame_time: None,
        }
    }

    /// Returns the parameters.
    pub fn config(&self) -> &DensityConfig {
        &self.config
    }

    /// Returns the current sample count.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Returns the current target rate.
    pub fn target_rate(&self) -> Float {
        self.target_rate
    }

    /// Returns the last frame time fed to the controller.
    pub fn last_frame_time(&self) -> Option<f64> {
        self.last_frame_time
    }

    /// Raises the target rate by one step.
    pub fn increase_rate(&mut self) {
        self.target_rate = min(self.target_rate + self.config.rate_step, self.config.max_rate);
    }

    /// Lowers the target rate by one step.
    pub fn decrease_rate(&mut self) {
        self.target_rate = max(self.target_rate - self.config.rate_step, self.config.min_rate);
    }

    /// Feeds back a measured frame time and returns the new sample count
    /// `N + trunc(gain · (1/rate - frame_time))` clamped to the bounds.
    /// Non-finite or negative frame times leave the count unchanged.
    ///
    /// * `frame_time` - Measured frame time in seconds.
    pub fn update(&mut self, frame_time: f64) -> u64 {
        if !frame_time.is_finite() || frame_time < 0.0 {
            warn!("Ignoring frame time {}", frame_time);
            return self.samples;
        }

        let error = 1.0 / self.target_rate as f64 - frame_time;
        let n = self.samples as f64 + (self.config.gain * error).trunc();
        self.samples = clamp(n, self.config.min_samples as f64, self.config.max_samples as f64) as u64;
        self.last_frame_time = Some(frame_time);
        self.samples
    }
}

impl Default for DensityController {
    /// Returns a controller with the default parameters.
    fn default() -> Self {
        Self::new(DensityConfig::default())
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn controller(initial_samples: u64) -> DensityController {
        DensityController::new(DensityConfig {
            initial_samples,
            ..DensityConfig::default()
        })
    }

    #[test]
    fn defaults() {
        let c = DensityController::default();
        assert_eq!(c.samples(), 1 << 21);
        assert_eq!(c.target_rate(), 30.0);
        assert_eq!(c.last_frame_time(), None);
    }

    #[test]
    fn on_target_frame_time_is_stable_immediately() {
        let mut c = controller(1 << 20);
        let frame_time = 1.0 / c.target_rate() as f64;
        for _ in 0..100 {
            assert_eq!(c.update(frame_time), 1 << 20);
        }
    }

    #[test]
    fn linear_cost_model_converges() {
        // Frame time proportional to the sample count with gain · cost = 0.5.
        let mut c = controller(1 << 20);
        let cost = 0.5 / c.config().gain;
        let fixed_point = 1.0 / (c.target_rate() as f64 * cost);

        let mut frame = 0;
        let mut previous = c.samples();
        loop {
            let n = c.update(c.samples() as f64 * cost);
            frame += 1;
            if n.abs_diff(previous) <= 1 {
                break;
            }
            previous = n;
            assert!(frame <= 64, "not stable after {} frames", frame);
        }
        assert!((c.samples() as f64 - fixed_point).abs() / fixed_point < 0.001);
    }

    #[test]
    fn slow_frames_hit_the_lower_bound() {
        let mut c = controller(1 << 16);
        for _ in 0..10 {
            c.update(1.0);
        }
        assert_eq!(c.samples(), 1 << 15);
    }

    #[test]
    fn fast_frames_hit_the_upper_bound() {
        let mut c = controller(1 << 26);
        for _ in 0..1000 {
            c.update(0.0);
        }
        assert_eq!(c.samples(), 1 << 27);
    }

    #[test]
    fn invalid_frame_times_are_ignored() {
        let mut c = controller(1 << 20);
        assert_eq!(c.update(f64::NAN), 1 << 20);
        assert_eq!(c.update(f64::INFINITY), 1 << 20);
        assert_eq!(c.update(-1.0), 1 << 20);
        assert_eq!(c.last_frame_time(), None);
    }

    #[test]
    fn rate_steps_are_clamped() {
        let mut c = DensityController::default();
        for _ in 0..200 {
            c.increase_rate();
        }
        assert_eq!(c.target_rate(), 120.0);
        for _ in 0..200 {
            c.decrease_rate();
        }
        assert_eq!(c.target_rate(), 3.0);
    }

    #[test]
    fn config_is_sanitized() {
        let c = DensityConfig {
            gain: f64::NAN,
            min_samples: 0,
            max_samples: 0,
            initial_samples: 100,
            target_rate: 500.0,
            rate_step: -1.0,
            min_rate: -3.0,
            max_rate: 1.0,
        }
        .sanitized();

        assert_eq!(c.gain, DensityConfig::default().gain);
        assert_eq!(c.min_samples, 1);
        assert_eq!(c.max_samples, 1);
        assert_eq!(c.initial_samples, 1);
        assert_eq!(c.min_rate, 3.0);
        assert_eq!(c.max_rate, 120.0);
        assert_eq!(c.target_rate, 120.0);
        assert_eq!(c.rate_step, 1.0);
    }

    proptest! {
        #[test]
        fn samples_stay_in_bounds(initial in 0..(1u64 << 28), times in prop::collection::vec(0.0..2.0f64, 1..50)) {
            let mut c = controller(initial);
            prop_assert!(c.samples() >= 1 << 15 && c.samples() <= 1 << 27);
            for t in times {
                let n = c.update(t);
                prop_assert!((1 << 15..=1 << 27).contains(&n));
            }
        }
    }
}
