use crate::error::LayoutError;
use crate::units::Px;

/// Margins add space between the edges of the box and the text. There is no control
/// preventing text from overflowing the margins: a box that is smaller than its
/// margins simply places its text at negative offsets.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Px, horizontal: Px) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Px(0.0))
    }

    /// Combined left and right margins
    pub fn horizontal(&self) -> Px {
        self.left + self.right
    }

    /// Combined top and bottom margins
    pub fn vertical(&self) -> Px {
        self.top + self.bottom
    }

    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !(value.is_finite() && *value >= 0.0) {
                return Err(LayoutError::invalid(format!(
                    "{side} margin must be zero or positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}
