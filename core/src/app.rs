//! Application related stuff

use crate::density::*;
use crate::geometry::*;
use crate::numeric::*;
use clap::Parser;

/// System wide options.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Options {
    /// Number of sampler threads; 0 picks one per logical CPU.
    #[arg(
        long = "nthreads",
        short = 't',
        value_name = "NUM",
        default_value_t = 0,
        help = "Use specified number of sampler threads (0 = automatic)."
    )]
    n_threads: usize,

    /// The host runs its own display or emulation loop on one CPU.
    #[arg(long = "host-loop", help = "Reserve one CPU for the host's display loop.")]
    pub host_loop: bool,

    /// Number of frames to render in headless mode.
    #[arg(
        long = "frames",
        short = 'f',
        value_name = "NUM",
        default_value_t = 120,
        help = "Number of frames to render."
    )]
    pub frames: u64,

    /// Target volume rate.
    #[arg(
        long = "rate",
        short = 'r',
        value_name = "FPS",
        default_value_t = 30.0,
        help = "Target volume rate in frames per second."
    )]
    pub target_rate: Float,

    /// Initial number of samples per frame.
    #[arg(
        long = "samples",
        short = 'n',
        value_name = "NUM",
        default_value_t = 1 << 21,
        help = "Initial number of samples per frame."
    )]
    pub initial_samples: u64,

    /// Lower bound on samples per frame.
    #[arg(long = "min-samples", value_name = "NUM", default_value_t = 1 << 15, help = "Minimum samples per frame.")]
    pub min_samples: u64,

    /// Upper bound on samples per frame.
    #[arg(long = "max-samples", value_name = "NUM", default_value_t = 1 << 27, help = "Maximum samples per frame.")]
    pub max_samples: u64,

    /// Density controller gain.
    #[arg(
        long = "gain",
        value_name = "FLOAT",
        default_value_t = 4194304.0,
        help = "Samples added per second of frame time error."
    )]
    pub gain: f64,

    /// Initial evaluator index.
    #[arg(long = "evaluator", short = 'e', value_name = "NUM", default_value_t = 0, help = "Initial evaluator index.")]
    pub evaluator: usize,

    /// Initial palette index.
    #[arg(long = "palette", short = 'p', value_name = "NUM", default_value_t = 0, help = "Initial palette index.")]
    pub palette: usize,

    /// Display gamma used for dithering.
    #[arg(long = "gamma", short = 'g', value_name = "FLOAT", default_value_t = 1.0, help = "Display gamma for dithering.")]
    pub gamma: Float,

    /// Disable dithering.
    #[arg(long = "no-dither", help = "Emit evaluator colors without dithering.")]
    pub no_dither: bool,

    /// Points per batch.
    #[arg(
        long = "batchsize",
        short = 'b',
        value_name = "NUM",
        default_value_t = 4096,
        help = "Number of points handed to the sink at once."
    )]
    pub batch_size: usize,

    /// Volume half-extents x, y, z.
    #[arg(
        long = "extents",
        value_name = "FLOAT",
        num_args = 3,
        help = "Volume half-extents (x y z)."
    )]
    pub half_extents: Vec<Float>,

    /// Initial object scale.
    #[arg(long = "scale", short = 's', value_name = "FLOAT", default_value_t = 1.0, help = "Initial object scale.")]
    pub scale: Float,

    /// Additive offset into the sample sequence.
    #[arg(long = "offset", value_name = "NUM", default_value_t = 0, help = "Additive offset into the sample sequence.")]
    pub sequence_offset: u64,

    /// Path to the PLY file.
    #[arg(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        help = "Write the last frame's point cloud to the given PLY file."
    )]
    pub outfile: Option<String>,
}

impl Options {
    /// Returns the number of sampler threads to use.
    pub fn threads(&self) -> usize {
        resolve_threads(self.n_threads, num_cpus::get(), self.host_loop)
    }

    /// Returns the volume half-extents, or `None` to use the default volume.
    pub fn half_extents(&self) -> Option<Vector3f> {
        match self.half_extents.as_slice() {
            [x, y, z] => Some(Vector3f::new(*x, *y, *z)),
            _ => None,
        }
    }

    /// Returns the density controller parameters.
    pub fn density_config(&self) -> DensityConfig {
        DensityConfig {
            gain: self.gain,
            min_samples: self.min_samples,
            max_samples: self.max_samples,
            initial_samples: self.initial_samples,
            target_rate: self.target_rate,
            ..DensityConfig::default()
        }
    }
}

/// Returns the number of sampler threads. 0 requests one thread per logical
/// CPU, less one if the host runs its own loop; explicit requests above the
/// CPU count are clamped.
///
/// * `requested` - Requested thread count.
/// * `available` - Number of logical CPUs.
/// * `host_loop` - The host runs its own display loop.
pub fn resolve_threads(requested: usize, available: usize, host_loop: bool) -> usize {
    let max_threads = available.max(1);
    match requested {
        0 => {
            if host_loop {
                max(max_threads - 1, 1)
            } else {
                max_threads
            }
        }
        n if n > max_threads => {
            warn!("Num threads > max logical CPUs {}", max_threads);
            max_threads
        }
        n => n,
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn automatic_threads() {
        assert_eq!(resolve_threads(0, 8, false), 8);
        assert_eq!(resolve_threads(0, 8, true), 7);
        assert_eq!(resolve_threads(0, 1, true), 1);
        assert_eq!(resolve_threads(0, 0, false), 1);
    }

    #[test]
    fn explicit_threads_are_clamped() {
        assert_eq!(resolve_threads(3, 8, true), 3);
        assert_eq!(resolve_threads(64, 8, false), 8);
    }

    #[test]
    fn defaults() {
        let o = Options::parse_from(["holofract"]);
        assert_eq!(o.frames, 120);
        assert_eq!(o.batch_size, 4096);
        assert_eq!(o.half_extents(), None);
        assert!(o.outfile.is_none());
        assert!(!o.no_dither);
        assert!(o.threads() >= 1);

        let d = o.density_config();
        assert_eq!(d, DensityConfig::default());
    }

    #[test]
    fn parse_arguments() {
        let o = Options::parse_from([
            "holofract",
            "-t",
            "2",
            "--extents",
            "1",
            "0.5",
            "0.25",
            "--samples",
            "4096",
            "--no-dither",
            "-o",
            "cloud.ply",
        ]);
        assert_eq!(o.half_extents(), Some(Vector3f::new(1.0, 0.5, 0.25)));
        assert_eq!(o.density_config().initial_samples, 4096);
        assert!(o.no_dither);
        assert_eq!(o.outfile.as_deref(), Some("cloud.ply"));
        assert!(o.threads() <= 2);
    }
}
