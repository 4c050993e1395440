//! The measurement seam between layout and whatever actually knows about fonts.
//!
//! Layout never looks at glyphs directly: it asks a [`Measurer`] for the width and
//! ink bounds of strings, and for the vertical metrics of a font at a given size.
//! [`FontBook`](crate::FontBook) answers those questions from real TrueType/OpenType
//! faces; [`MonospaceMeasurer`] answers them with fixed advances, which is handy for
//! bitmap fonts, terminals and tests.

use crate::error::MeasureError;
use crate::rect::Bounds;
use crate::units::Px;

/// Vertical metrics of a font at a specific size.
///
/// All values are offsets from the baseline in a y-down space: `top` and `ascent`
/// are normally negative, `bottom` and `descent` positive.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct FontMetrics {
    /// The greatest distance above the baseline any glyph in the font reaches
    pub top: Px,
    /// The greatest distance below the baseline any glyph in the font reaches
    pub bottom: Px,
    /// The recommended distance above the baseline
    pub ascent: Px,
    /// The recommended distance below the baseline
    pub descent: Px,
    /// Extra space to add between lines
    pub leading: Px,
    /// Height of lowercase letters above the baseline (positive)
    pub x_height: Px,
}

impl FontMetrics {
    /// The height of a single line of text before any multiplier or leading is applied
    pub fn extent(&self) -> Px {
        self.top.abs() + self.bottom.abs()
    }
}

/// Which font to measure with, and at what size
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontSpec<'a> {
    pub family: &'a str,
    pub size: Px,
    pub antialias: bool,
}

impl<'a> FontSpec<'a> {
    pub fn new(family: &'a str, size: Px) -> FontSpec<'a> {
        FontSpec {
            family,
            size,
            antialias: true,
        }
    }

    pub fn at_size(&self, size: Px) -> FontSpec<'a> {
        FontSpec { size, ..*self }
    }
}

/// Backend-agnostic text measurement.
///
/// Implementors must be deterministic: measuring the same string with the same
/// [`FontSpec`] always yields the same answer. Layout relies on this when it re-runs
/// the metrics pass after shrinking text to fit.
pub trait Measurer {
    /// Vertical metrics for the font
    fn font_metrics(&self, font: &FontSpec<'_>) -> Result<FontMetrics, MeasureError>;

    /// Horizontal advance of the whole string, including any whitespace
    fn measure_width(&self, font: &FontSpec<'_>, text: &str) -> Result<Px, MeasureError>;

    /// Ink bounds of the string relative to its origin. An empty string, or one made up
    /// of whitespace only, has zero-sized bounds at the origin
    fn measure_bounds(&self, font: &FontSpec<'_>, text: &str) -> Result<Bounds, MeasureError>;
}

impl<M: Measurer + ?Sized> Measurer for &M {
    fn font_metrics(&self, font: &FontSpec<'_>) -> Result<FontMetrics, MeasureError> {
        (**self).font_metrics(font)
    }

    fn measure_width(&self, font: &FontSpec<'_>, text: &str) -> Result<Px, MeasureError> {
        (**self).measure_width(font, text)
    }

    fn measure_bounds(&self, font: &FontSpec<'_>, text: &str) -> Result<Bounds, MeasureError> {
        (**self).measure_bounds(font, text)
    }
}

/// A measurer where every character has the same advance. All dimensions are
/// expressed in ems and scaled by the font size.
#[derive(Debug, Clone, PartialEq)]
pub struct MonospaceMeasurer {
    /// Advance of every character, including spaces
    pub advance: f32,
    /// Distance from the baseline to the top of the ink of every character
    pub ascent: f32,
    /// Distance from the baseline to the bottom of the ink of every character
    pub descent: f32,
    /// Extra space between lines
    pub leading: f32,
    /// Height of lowercase letters
    pub x_height: f32,
    /// Families this measurer answers for. Empty means any family
    pub families: Vec<String>,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        MonospaceMeasurer {
            advance: 0.6,
            ascent: 0.8,
            descent: 0.2,
            leading: 0.0,
            x_height: 0.5,
            families: Vec::new(),
        }
    }
}

impl MonospaceMeasurer {
    /// A measurer with the given advance per character and default vertical metrics
    pub fn with_advance(advance: f32) -> MonospaceMeasurer {
        MonospaceMeasurer {
            advance,
            ..Default::default()
        }
    }

    /// Only answer for the given family; any other family fails to measure
    pub fn restrict_to<S: Into<String>>(mut self, family: S) -> MonospaceMeasurer {
        self.families.push(family.into());
        self
    }

    fn check_family(&self, font: &FontSpec<'_>) -> Result<(), MeasureError> {
        if self.families.is_empty() || self.families.iter().any(|f| f == font.family) {
            Ok(())
        } else {
            Err(MeasureError::UnknownFamily(font.family.to_string()))
        }
    }

    fn char_advance(&self, size: Px) -> Px {
        size * self.advance
    }
}

impl Measurer for MonospaceMeasurer {
    fn font_metrics(&self, font: &FontSpec<'_>) -> Result<FontMetrics, MeasureError> {
        self.check_family(font)?;
        Ok(FontMetrics {
            top: -(font.size * self.ascent),
            bottom: font.size * self.descent,
            ascent: -(font.size * self.ascent),
            descent: font.size * self.descent,
            leading: font.size * self.leading,
            x_height: font.size * self.x_height,
        })
    }

    fn measure_width(&self, font: &FontSpec<'_>, text: &str) -> Result<Px, MeasureError> {
        self.check_family(font)?;
        Ok(self.char_advance(font.size) * text.chars().count() as f32)
    }

    fn measure_bounds(&self, font: &FontSpec<'_>, text: &str) -> Result<Bounds, MeasureError> {
        self.check_family(font)?;
        let leading_blanks = text.chars().take_while(|c| c.is_whitespace()).count();
        let inked = text.trim().chars().count();
        if inked == 0 {
            return Ok(Bounds::default());
        }

        let advance = self.char_advance(font.size);
        let left = advance * leading_blanks as f32;
        Ok(Bounds {
            left,
            top: -(font.size * self.ascent),
            right: left + advance * inked as f32,
            bottom: font.size * self.descent,
        })
    }
}
