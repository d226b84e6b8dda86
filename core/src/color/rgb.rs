//! Packed RGB

use crate::numeric::*;
use std::fmt;

/// A 24-bit color packed as `0xRRGGBB`. The value 0 (black) is reserved to
/// mean "no point" wherever evaluators return packed colors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(u32);

impl Rgb {
    /// Black. Also the "empty" color.
    pub const BLACK: Self = Self(0x000000);

    /// White.
    pub const WHITE: Self = Self(0xffffff);

    /// Cyan.
    pub const CYAN: Self = Self(0x00ffff);

    /// Magenta.
    pub const MAGENTA: Self = Self(0xff00ff);

    /// Yellow.
    pub const YELLOW: Self = Self(0xffff00);

    /// Creates a new color from a packed `0xRRGGBB` value. Bits above the
    /// lower 24 are discarded.
    ///
    /// * `packed` - The packed color.
    pub const fn new(packed: u32) -> Self {
        Self(packed & 0xffffff)
    }

    /// Creates a new color from 8-bit channel values.
    ///
    /// * `r` - Red channel.
    /// * `g` - Green channel.
    /// * `b` - Blue channel.
    pub const fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Returns the packed `0xRRGGBB` value.
    pub const fn packed(&self) -> u32 {
        self.0
    }

    /// Returns the red channel.
    pub const fn r(&self) -> u8 {
        ((self.0 >> 16) & 0xff) as u8
    }

    /// Returns the green channel.
    pub const fn g(&self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    /// Returns the blue channel.
    pub const fn b(&self) -> u8 {
        (self.0 & 0xff) as u8
    }

    /// Returns `true` if the color is black.
    pub const fn is_black(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Rgb {
    /// Formats the value using the given formatter.
    ///
    /// * `f` - Formatter.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

/// Returns a packed color from channel intensities in [0, 255]. Each channel
/// is truncated towards zero and clamped to [0, 255]; NaN maps to 0.
///
/// * `r` - Red intensity.
/// * `g` - Green intensity.
/// * `b` - Blue intensity.
pub fn rgb(r: Float, g: Float, b: Float) -> Rgb {
    Rgb::from_channels(channel(r), channel(g), channel(b))
}

/// Truncates and clamps a channel intensity.
///
/// * `v` - The intensity.
#[inline(always)]
fn channel(v: Float) -> u8 {
    // `as` saturates and maps NaN to 0.
    clamp(v.trunc(), 0.0, 255.0) as u8
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn channels() {
        let c = Rgb::new(0x123456);
        assert_eq!(c.r(), 0x12);
        assert_eq!(c.g(), 0x34);
        assert_eq!(c.b(), 0x56);
        assert_eq!(Rgb::from_channels(0x12, 0x34, 0x56), c);
    }

    #[test]
    fn new_discards_high_bits() {
        assert_eq!(Rgb::new(0xff00ff00).packed(), 0x00ff00);
    }

    #[test]
    fn rgb_clamps_and_truncates() {
        assert_eq!(rgb(300.0, -5.0, 127.9), Rgb::new(0xff007f));
        assert_eq!(rgb(Float::NAN, Float::INFINITY, Float::NEG_INFINITY), Rgb::new(0x00ff00));
        assert!(rgb(0.0, 0.5, 0.99).is_black());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Rgb::MAGENTA), "#ff00ff");
    }

    proptest! {
        #[test]
        fn rgb_in_range_is_truncated(r in 0.0..256.0f32, g in 0.0..256.0f32, b in 0.0..256.0f32) {
            let c = rgb(r, g, b);
            prop_assert_eq!(c.r() as u32, (r as u32).min(255));
            prop_assert_eq!(c.g() as u32, (g as u32).min(255));
            prop_assert_eq!(c.b() as u32, (b as u32).min(255));
        }
    }
}
