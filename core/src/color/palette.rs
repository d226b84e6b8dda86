//! Palettes

use super::Rgb;

/// Number of entries in a palette.
pub const PALETTE_SIZE: usize = 8;

/// A cyclic table of colors indexed by an escape count. Entry value 0
/// (black) means the point is empty.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette([Rgb; PALETTE_SIZE]);

impl Palette {
    /// Creates a new palette from packed `0xRRGGBB` entries.
    ///
    /// * `entries` - The packed colors.
    pub const fn new(entries: [u32; PALETTE_SIZE]) -> Self {
        let mut colors = [Rgb::BLACK; PALETTE_SIZE];
        let mut i = 0;
        while i < PALETTE_SIZE {
            colors[i] = Rgb::new(entries[i]);
            i += 1;
        }
        Self(colors)
    }

    /// Returns the entry for an index, wrapping around modulo the palette
    /// size.
    ///
    /// * `index` - The index.
    pub fn entry(&self, index: usize) -> Rgb {
        self.0[index % PALETTE_SIZE]
    }

    /// Returns the palette entries.
    pub fn entries(&self) -> &[Rgb; PALETTE_SIZE] {
        &self.0
    }
}

impl Default for Palette {
    /// Returns the first built-in palette.
    fn default() -> Self {
        PALETTES[0]
    }
}

/// The built-in palettes.
pub const PALETTES: [Palette; 3] = [
    Palette::new([
        0x000000, 0x0000ff, 0xff0000, 0x00ff00, 0x000000, 0x0000ff, 0xff0000, 0x00ff00,
    ]),
    Palette::new([
        0x000000, 0x0000ff, 0xff0000, 0x00ff00, 0xff00ff, 0x00ffff, 0xffff00, 0xffffff,
    ]),
    Palette::new([
        0xffffff, 0xffff00, 0x00ffff, 0xff00ff, 0x00ff00, 0xff0000, 0x0000ff, 0x000000,
    ]),
];

/// Returns the built-in palette for an index, wrapping around modulo the
/// palette count.
///
/// * `index` - The palette index.
pub fn palette(index: usize) -> Palette {
    PALETTES[index % PALETTES.len()]
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
