use crate::colour::{colours, Colour};
use crate::error::LayoutError;
use crate::layout::Margins;
use crate::units::Px;

/// The largest box, in whole pixels along either side, that text is laid out into.
/// Past this, `f32` pixel positions stop being exact
pub const MAX_BOX_SIZE: u32 = 1 << 24;

/// How the measured size of the text is reconciled with the requested box size
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Overflow {
    /// Grow the box to fit the text; never shrink the text
    #[default]
    Scale,
    /// Clamp the box to the requested size and let the text overflow it
    Limit,
    /// Keep the requested box size and shrink the font until the text fits
    ScaleText,
    /// Word-wrap the text to the requested width, growing the box vertically
    BreakText,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum HorizontalAlign {
    #[default]
    Left,
    Right,
    Center,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum VerticalAlign {
    #[default]
    Top,
    Bottom,
    Center,
}

/// The anchor point of a box, used to position it within a larger scene
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Origin {
    /// Follow the horizontal and vertical alignment
    #[default]
    Auto,
    Center,
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Everything that controls how a text box is laid out, plus the few rendering
/// settings that travel along with the layout to the renderer
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct LayoutOptions {
    /// Requested box width, 0 for unconstrained
    pub width: Px,
    /// Requested box height, 0 for unconstrained
    pub height: Px,
    /// Scales the distance between consecutive baselines
    pub line_height: f32,
    /// Maximum number of lines to keep, 0 for unlimited
    pub max_lines: usize,
    pub overflow: Overflow,
    pub align: HorizontalAlign,
    pub align_vertical: VerticalAlign,
    pub margins: Margins,
    pub origin: Origin,
    /// Added to the resolved origin, in pixels
    pub origin_offset: (Px, Px),
    /// Uniform scale applied to the finished box when it is placed
    pub scale: f32,
    pub colour: Colour,
    pub background: Colour,
    pub antialias: bool,
    /// Draw margin, border and origin guides
    pub draw_debug: bool,
    /// Also draw baseline, ascent, descent and x-height guides for every line
    pub draw_font_metrics: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            width: Px(0.0),
            height: Px(0.0),
            line_height: 1.0,
            max_lines: 0,
            overflow: Overflow::default(),
            align: HorizontalAlign::default(),
            align_vertical: VerticalAlign::default(),
            margins: Margins::empty(),
            origin: Origin::default(),
            origin_offset: (Px(0.0), Px(0.0)),
            scale: 1.0,
            colour: colours::WHITE,
            background: colours::TRANSPARENT,
            antialias: true,
            draw_debug: false,
            draw_font_metrics: false,
        }
    }
}

impl LayoutOptions {
    pub fn with_size<W: Into<Px>, H: Into<Px>>(mut self, width: W, height: H) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    pub fn with_overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    pub fn with_align(mut self, align: HorizontalAlign, align_vertical: VerticalAlign) -> Self {
        self.align = align;
        self.align_vertical = align_vertical;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_origin(mut self, origin: Origin, offset: (Px, Px)) -> Self {
        self.origin = origin;
        self.origin_offset = offset;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_colours(mut self, colour: Colour, background: Colour) -> Self {
        self.colour = colour;
        self.background = background;
        self
    }

    pub fn with_debug(mut self, draw_debug: bool, draw_font_metrics: bool) -> Self {
        self.draw_debug = draw_debug;
        self.draw_font_metrics = draw_font_metrics;
        self
    }

    /// Check that every option is within range. Margins are deliberately not checked
    /// against the box size: margins larger than the box just push text outside of it
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.width.is_finite() && *self.width >= 0.0) {
            return Err(LayoutError::invalid(format!(
                "box width must be zero or positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && *self.height >= 0.0) {
            return Err(LayoutError::invalid(format!(
                "box height must be zero or positive, got {}",
                self.height
            )));
        }
        if *self.width > MAX_BOX_SIZE as f32 || *self.height > MAX_BOX_SIZE as f32 {
            return Err(LayoutError::invalid(format!(
                "box size {}x{} is larger than {MAX_BOX_SIZE}px",
                self.width, self.height
            )));
        }
        if !(self.line_height.is_finite() && self.line_height >= 0.0) {
            return Err(LayoutError::invalid(format!(
                "line height multiplier must be zero or positive, got {}",
                self.line_height
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(LayoutError::invalid(format!(
                "render scale must be positive, got {}",
                self.scale
            )));
        }
        self.margins.validate()?;
        if !(self.origin_offset.0.is_finite() && self.origin_offset.1.is_finite()) {
            return Err(LayoutError::invalid("origin offset must be finite"));
        }
        Ok(())
    }

    /// Apply a partial set of changes, producing new options
    pub fn merge(&self, patch: &OptionsPatch) -> LayoutOptions {
        let mut merged = self.clone();
        macro_rules! apply {
            ($($field:ident),* $(,)?) => {
                $(
                    if let Some(value) = &patch.$field {
                        merged.$field = value.clone();
                    }
                )*
            };
        }
        apply!(
            width,
            height,
            line_height,
            max_lines,
            overflow,
            align,
            align_vertical,
            margins,
            origin,
            origin_offset,
            scale,
            colour,
            background,
            antialias,
            draw_debug,
            draw_font_metrics,
        );
        merged
    }
}

/// A partial set of [`LayoutOptions`]: every field that is `Some` replaces the
/// corresponding option when merged
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct OptionsPatch {
    pub width: Option<Px>,
    pub height: Option<Px>,
    pub line_height: Option<f32>,
    pub max_lines: Option<usize>,
    pub overflow: Option<Overflow>,
    pub align: Option<HorizontalAlign>,
    pub align_vertical: Option<VerticalAlign>,
    pub margins: Option<Margins>,
    pub origin: Option<Origin>,
    pub origin_offset: Option<(Px, Px)>,
    pub scale: Option<f32>,
    pub colour: Option<Colour>,
    pub background: Option<Colour>,
    pub antialias: Option<bool>,
    pub draw_debug: Option<bool>,
    pub draw_font_metrics: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_an_unconstrained_box() {
        let options = LayoutOptions::default();
        assert_eq!(options.width, Px(0.0));
        assert_eq!(options.height, Px(0.0));
        assert_eq!(options.line_height, 1.0);
        assert_eq!(options.overflow, Overflow::Scale);
        assert_eq!(options.align, HorizontalAlign::Left);
        assert_eq!(options.align_vertical, VerticalAlign::Top);
        assert_eq!(options.origin, Origin::Auto);
        assert_eq!(options.background, colours::TRANSPARENT);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn merge_only_replaces_patched_fields() {
        let options = LayoutOptions::default()
            .with_size(Px(200.0), Px(50.0))
            .with_overflow(Overflow::BreakText);
        let patch = OptionsPatch {
            height: Some(Px(80.0)),
            align: Some(HorizontalAlign::Center),
            ..Default::default()
        };

        let merged = options.merge(&patch);
        assert_eq!(merged.width, Px(200.0));
        assert_eq!(merged.height, Px(80.0));
        assert_eq!(merged.overflow, Overflow::BreakText);
        assert_eq!(merged.align, HorizontalAlign::Center);
        assert_eq!(options.merge(&OptionsPatch::default()), options);
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let bad = [
            LayoutOptions::default().with_size(Px(-1.0), Px(0.0)),
            LayoutOptions::default().with_line_height(-0.5),
            LayoutOptions::default().with_scale(0.0),
            LayoutOptions::default().with_margins(Margins::all(Px(-2.0))),
            LayoutOptions::default().with_size(Px(1e10), Px(0.0)),
            LayoutOptions::default().with_size(Px(0.0), Px(MAX_BOX_SIZE as f32 * 2.0)),
        ];
        for options in bad.iter() {
            assert!(
                matches!(options.validate(), Err(LayoutError::InvalidArgument(_))),
                "{options:?} should not validate"
            );
        }
    }

    #[test]
    fn oversized_margins_are_allowed() {
        let options = LayoutOptions::default()
            .with_size(Px(10.0), Px(10.0))
            .with_margins(Margins::all(Px(40.0)));
        assert!(options.validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_deserialize_with_camel_case_tags() {
        let options: LayoutOptions = serde_json::from_str(
            r#"{ "width": 120.0, "overflow": "scaleText", "origin": "topLeft", "maxLines": 2 }"#,
        )
        .expect("can parse options");
        assert_eq!(options.width, Px(120.0));
        assert_eq!(options.overflow, Overflow::ScaleText);
        assert_eq!(options.origin, Origin::TopLeft);
        assert_eq!(options.max_lines, 2);
        assert_eq!(options.line_height, 1.0);
    }
}
