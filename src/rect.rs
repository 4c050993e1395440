use crate::units::*;

/// The ink bounds of a run of text, as offsets from the point where the text is
/// drawn (the left end of its baseline). y grows downward, so `top` is usually
/// negative and `bottom` positive.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Bounds {
    /// Offset of the leftmost ink from the text origin
    pub left: Px,
    /// Offset of the highest ink from the baseline
    pub top: Px,
    /// Offset of the rightmost ink from the text origin
    pub right: Px,
    /// Offset of the lowest ink from the baseline
    pub bottom: Px,
}

impl Bounds {
    pub fn new(left: Px, top: Px, right: Px, bottom: Px) -> Bounds {
        Bounds {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> Px {
        self.right - self.left
    }

    pub fn height(&self) -> Px {
        self.bottom - self.top
    }

    /// The smallest bounds containing both `self` and `other`
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Shift the bounds horizontally, i.e. to place a glyph at the current pen position
    pub fn translate_x(&self, dx: Px) -> Bounds {
        Bounds {
            left: self.left + dx,
            top: self.top,
            right: self.right + dx,
            bottom: self.bottom,
        }
    }
}

impl From<(f32, f32, f32, f32)> for Bounds {
    fn from(b: (f32, f32, f32, f32)) -> Self {
        Bounds {
            left: Px(b.0),
            top: Px(b.1),
            right: Px(b.2),
            bottom: Px(b.3),
        }
    }
}
