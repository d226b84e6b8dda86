//! Classification

use crate::color::*;

/// Result of evaluating a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Classification {
    /// The point is not part of the surface.
    Empty,

    /// The point is part of the surface and has a color.
    Solid(Rgb),
}

impl Classification {
    /// Returns a classification from a packed color where 0 means empty.
    ///
    /// * `packed` - The packed `0xRRGGBB` color.
    pub fn from_packed(packed: u32) -> Self {
        Self::from(Rgb::new(packed))
    }

    /// Returns `true` if the point is solid.
    pub fn is_solid(&self) -> bool {
        matches!(self, Self::Solid(_))
    }

    /// Returns the color of a solid point.
    pub fn color(&self) -> Option<Rgb> {
        match self {
            Self::Solid(c) => Some(*c),
            Self::Empty => None,
        }
    }
}

impl From<Rgb> for Classification {
    /// Convert a color to a classification where black means empty.
    ///
    /// * `c` - The color.
    fn from(c: Rgb) -> Self {
        if c.is_black() {
            Self::Empty
        } else {
            Self::Solid(c)
        }
    }
}

impl From<bool> for Classification {
    /// Convert an inside test to a classification using white for solid.
    ///
    /// * `inside` - `true` if the point is inside.
    fn from(inside: bool) -> Self {
        if inside {
            Self::Solid(Rgb::WHITE)
        } else {
            Self::Empty
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_is_empty() {
        assert_eq!(Classification::from_packed(0), Classification::Empty);
        assert_eq!(Classification::from(Rgb::BLACK), Classification::Empty);
        assert_eq!(Classification::from_packed(0x01000000), Classification::Empty);
    }

    #[test]
    fn colors_are_solid() {
        let c = Classification::from_packed(0x00ffff);
        assert!(c.is_solid());
        assert_eq!(c.color(), Some(Rgb::CYAN));
        assert_eq!(Classification::Empty.color(), None);
    }

    #[test]
    fn inside_test_is_white() {
        assert_eq!(Classification::from(true), Classification::Solid(Rgb::WHITE));
        assert_eq!(Classification::from(false), Classification::Empty);
    }
}
