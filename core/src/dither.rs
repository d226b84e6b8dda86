//! Dithering

use crate::color::*;
use crate::numeric::*;

/// Initial accumulator value: each 10-bit channel at half intensity.
pub const DITHER_SEED: u32 = 0x0802_0080;

/// Keeps the low 8 bits of each channel and clears the carry bits.
const DITHER_KEEP_MASK: u32 = 0x0ff3_fcff;

/// Red carry bit.
const RED_CARRY: u32 = 1 << 28;

/// Green carry bit.
const GREEN_CARRY: u32 = 1 << 18;

/// Blue carry bit.
const BLUE_CARRY: u32 = 1 << 8;

/// Lookup table mapping 8-bit intensities to gamma corrected values in
/// [0, 256].
#[derive(Clone, Debug, PartialEq)]
pub struct GammaLut {
    /// The gamma exponent.
    gamma: Float,

    /// `round((i / 255)^gamma · 256)`.
    table: [u16; 256],
}

impl GammaLut {
    /// Create a new gamma table. Non-finite or non-positive gamma values
    /// fall back to 1.
    ///
    /// * `gamma` - The gamma exponent.
    pub fn new(gamma: Float) -> Self {
        let gamma = if gamma.is_finite() && gamma > 0.0 {
            gamma
        } else {
            warn!("Invalid gamma {}; using 1.0", gamma);
            1.0
        };

        let mut table = [0_u16; 256];
        for (i, v) in table.iter_mut().enumerate() {
            *v = ((i as Float / 255.0).powf(gamma) * 256.0).round() as u16;
        }

        Self { gamma, table }
    }

    /// Returns the gamma exponent.
    pub fn gamma(&self) -> Float {
        self.gamma
    }

    /// Returns the table value for an intensity.
    ///
    /// * `i` - The intensity.
    #[inline(always)]
    pub fn get(&self, i: u8) -> u32 {
        self.table[i as usize] as u32
    }
}

impl Default for GammaLut {
    /// Returns a linear table.
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Per-worker ordered error diffusion quantizing each channel to on/off.
/// All three channels share one packed accumulator.
#[derive(Clone, Debug)]
pub struct Ditherer<'a> {
    /// The gamma table.
    lut: &'a GammaLut,

    /// Packed 10-bit per channel accumulator.
    acc: u32,
}

impl<'a> Ditherer<'a> {
    /// Create a new ditherer seeded at half intensity.
    ///
    /// * `lut` - The gamma table.
    pub fn new(lut: &'a GammaLut) -> Self {
        Self {
            lut,
            acc: DITHER_SEED,
        }
    }

    /// Quantizes a color. Each channel is either off or fully on depending on
    /// whether its accumulator carried.
    ///
    /// * `c` - The color.
    #[inline]
    pub fn dither(&mut self, c: Rgb) -> Rgb {
        let di = (self.lut.get(c.r()) << 20) + (self.lut.get(c.g()) << 10) + self.lut.get(c.b());
        self.acc = (self.acc & DITHER_KEEP_MASK) + di;

        let on = |bit: u32| if self.acc & bit != 0 { 0xff } else { 0x00 };
        Rgb::from_channels(on(RED_CARRY), on(GREEN_CARRY), on(BLUE_CARRY))
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lut_end_points() {
        for gamma in [0.5, 1.0, 2.2] {
            let lut = GammaLut::new(gamma);
            assert_eq!(lut.get(0), 0);
            assert_eq!(lut.get(255), 256);
        }
        assert_eq!(GammaLut::new(1.0).get(128), 129);
    }

    #[test]
    fn invalid_gamma_is_linear() {
        assert_eq!(GammaLut::new(Float::NAN), GammaLut::default());
        assert_eq!(GammaLut::new(-2.0).gamma(), 1.0);
    }

    #[test]
    fn white_stays_white() {
        let lut = GammaLut::new(2.2);
        let mut d = Ditherer::new(&lut);
        for _ in 0..1000 {
            assert_eq!(d.dither(Rgb::WHITE), Rgb::WHITE);
        }
    }

    #[test]
    fn black_stays_black() {
        let lut = GammaLut::new(2.2);
        let mut d = Ditherer::new(&lut);
        for _ in 0..1000 {
            assert_eq!(d.dither(Rgb::BLACK), Rgb::BLACK);
        }
    }

    #[test]
    fn half_gray_toggles() {
        let lut = GammaLut::new(1.0);
        let mut d = Ditherer::new(&lut);
        let gray = Rgb::from_channels(128, 128, 128);

        let mut on = 0;
        let mut prev = None;
        let mut changes = 0;
        for _ in 0..1000 {
            let c = d.dither(gray);
            assert!(c == Rgb::WHITE || c == Rgb::BLACK);
            if c == Rgb::WHITE {
                on += 1;
            }
            if prev.map_or(false, |p| p != c) {
                changes += 1;
            }
            prev = Some(c);
        }

        // 129/256 of the samples are on.
        assert!((490..=515).contains(&on), "on = {}", on);
        assert!(changes > 900, "changes = {}", changes);
    }

    #[test]
    fn channels_are_independent() {
        let lut = GammaLut::new(1.0);
        let mut d = Ditherer::new(&lut);
        for _ in 0..100 {
            assert_eq!(d.dither(Rgb::MAGENTA), Rgb::MAGENTA);
        }
    }
}
