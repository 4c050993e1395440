use derive_more::{Add, AddAssign, Deref, DerefMut, Display, From, Into, Sub, SubAssign, Sum};
use std::ops::{Div, Mul, Neg};

/// A distance in pixels. Layout happens in a y-down coordinate space where the
/// origin of each line of text sits on its baseline, so most vertical offsets
/// above the baseline are negative.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Sum,
    Deref,
    DerefMut,
    Display,
    From,
    Into,
)]
#[display("{_0}px")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Px(pub f32);

impl Px {
    pub const ZERO: Px = Px(0.0);

    pub fn abs(self) -> Px {
        Px(self.0.abs())
    }

    pub fn max(self, other: Px) -> Px {
        Px(self.0.max(other.0))
    }

    pub fn min(self, other: Px) -> Px {
        Px(self.0.min(other.0))
    }

    pub fn floor(self) -> Px {
        Px(self.0.floor())
    }

    /// Round up to the next whole pixel, never returning less than a single pixel
    pub fn whole_pixels(self) -> u32 {
        let ceiled = self.0.ceil();
        if ceiled.is_finite() && ceiled >= 1.0 {
            ceiled as u32
        } else {
            1
        }
    }
}

impl Mul<f32> for Px {
    type Output = Px;

    fn mul(self, rhs: f32) -> Px {
        Px(self.0 * rhs)
    }
}

impl Mul<Px> for f32 {
    type Output = Px;

    fn mul(self, rhs: Px) -> Px {
        Px(self * rhs.0)
    }
}

impl Div<f32> for Px {
    type Output = Px;

    fn div(self, rhs: f32) -> Px {
        Px(self.0 / rhs)
    }
}

/// Dividing two distances yields a unitless ratio
impl Div<Px> for Px {
    type Output = f32;

    fn div(self, rhs: Px) -> f32 {
        self.0 / rhs.0
    }
}

impl Neg for Px {
    type Output = Px;

    fn neg(self) -> Px {
        Px(-self.0)
    }
}
