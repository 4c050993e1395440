//! Text box layout.
//!
//! Laying out a [`TextRun`] is a pure function of the run and a
//! [`Measurer`](crate::Measurer). The pipeline runs top to bottom:
//!
//! 1. [`split_lines`] turns the text into display lines, word-wrapping when the
//!    overflow mode is [`Overflow::BreakText`](crate::Overflow::BreakText)
//! 2. [`limit_lines`] drops lines past `max_lines`
//! 3. [`fit_lines`] measures the lines and sizes the box, shrinking the font once if
//!    the overflow mode is [`Overflow::ScaleText`](crate::Overflow::ScaleText)
//! 4. [`place`] computes every line's pen position and the box's origin
//!
//! Changing anything about a run means laying it out again; a [`LayoutResult`] is never
//! modified after it is produced.
//!
//! # Example
//!
//! ```
//! use textbox_layout::{LayoutOptions, MonospaceMeasurer, Overflow, Px};
//! use textbox_layout::layout::{layout_text, TextRun};
//!
//! let measurer = MonospaceMeasurer::with_advance(1.0);
//! let options = LayoutOptions::default()
//!     .with_size(Px(100.0), Px(0.0))
//!     .with_overflow(Overflow::BreakText);
//! let run = TextRun::new("aaaa bbbb cccc", "mono", Px(10.0), options).expect("valid run");
//!
//! let layout = layout_text(&measurer, &run).expect("can lay out");
//! assert_eq!(layout.width, 100);
//! assert_eq!(layout.lines.len(), 2);
//! ```

mod fit;
mod guides;
mod lines;
mod margins;
mod metrics;
mod placement;

pub use fit::*;
pub use guides::*;
pub use lines::*;
pub use margins::*;
pub use metrics::*;
pub use placement::*;

use crate::error::LayoutError;
use crate::measure::{FontMetrics, FontSpec, Measurer};
use crate::options::{LayoutOptions, OptionsPatch, MAX_BOX_SIZE};
use crate::units::Px;

/// A piece of text to lay out: the text itself, its font, and layout options.
///
/// Runs are validated on construction and never change afterwards; use
/// [`TextRun::update`] to derive a new run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    text: String,
    family: String,
    size: Px,
    options: LayoutOptions,
}

impl TextRun {
    /// Create a run, rejecting font sizes that aren't positive and out of range options
    pub fn new<T: Into<String>, F: Into<String>>(
        text: T,
        family: F,
        size: Px,
        options: LayoutOptions,
    ) -> Result<TextRun, LayoutError> {
        if !(size.is_finite() && *size > 0.0) {
            return Err(LayoutError::invalid(format!(
                "font size must be positive, got {size}"
            )));
        }
        options.validate()?;

        Ok(TextRun {
            text: text.into(),
            family: family.into(),
            size,
            options,
        })
    }

    /// Derive a new run with new text, keeping the font family and size unless given,
    /// and merging `patch` into the current options
    pub fn update<T: Into<String>>(
        &self,
        text: T,
        family: Option<&str>,
        size: Option<Px>,
        patch: &OptionsPatch,
    ) -> Result<TextRun, LayoutError> {
        TextRun::new(
            text,
            family.unwrap_or(&self.family),
            size.unwrap_or(self.size),
            self.options.merge(patch),
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn size(&self) -> Px {
        self.size
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn font(&self) -> FontSpec<'_> {
        FontSpec {
            family: &self.family,
            size: self.size,
            antialias: self.options.antialias,
        }
    }
}

/// A line of text and where to draw it: `pen` is the left end of the line's baseline,
/// in pixels from the top-left corner of the box
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub pen: (Px, Px),
}

/// The fully resolved geometry of a text box, ready to hand to a
/// [`Renderer`](crate::Renderer)
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Box width in whole pixels, margins included. Always at least 1
    pub width: u32,
    /// Box height in whole pixels, margins included. Always at least 1
    pub height: u32,
    pub family: String,
    /// The font size to draw with. Smaller than requested if the text was shrunk to fit
    pub font_size: Px,
    pub metrics: FontMetrics,
    pub lines: Vec<PlacedLine>,
    /// The box's anchor point, relative to its centre
    pub origin: (Px, Px),
    /// Size of the measured text, without margins
    pub content_size: (Px, Px),
    /// Distance between consecutive baselines
    pub line_pitch: Px,
    /// The options the box was laid out with
    pub options: LayoutOptions,
}

impl LayoutResult {
    /// Uniform scale to apply when placing the finished box
    pub fn scale(&self) -> f32 {
        self.options.scale
    }

    /// The origin after the box's scale is applied; subtract this from the desired
    /// anchor position to find where the centre of the box goes
    pub fn anchor_offset(&self) -> (Px, Px) {
        (self.origin.0 * self.scale(), self.origin.1 * self.scale())
    }

    /// The font the lines should be drawn with
    pub fn font(&self) -> FontSpec<'_> {
        FontSpec {
            family: &self.family,
            size: self.font_size,
            antialias: self.options.antialias,
        }
    }
}

/// Lay out a text run, measuring with `measurer`
pub fn layout_text<M: Measurer + ?Sized>(
    measurer: &M,
    run: &TextRun,
) -> Result<LayoutResult, LayoutError> {
    let options = run.options();
    let font = run.font();

    let lines = split_lines(measurer, &font, run.text(), options)?;
    let lines = limit_lines(lines, options.max_lines);

    // empty text is still one (empty) line, but takes up no space
    let measured: &[String] = if run.text().is_empty() { &[] } else { &lines };
    let fit = fit_lines(measurer, &font, measured, options)?;
    if fit.width > MAX_BOX_SIZE || fit.height > MAX_BOX_SIZE {
        return Err(LayoutError::invalid(format!(
            "text needs a {}x{} box, larger than {MAX_BOX_SIZE}px",
            fit.width, fit.height
        )));
    }
    let placement = place(&fit.block, lines.len(), fit.width, fit.height, options);

    log::debug!(
        "laid out {} line(s) of {} at {} ({:?}) into {}x{}",
        lines.len(),
        run.family(),
        fit.block.font_size,
        options.overflow,
        fit.width,
        fit.height
    );

    // the measured block borrows the lines, so take what we need before consuming them
    let Fit {
        block,
        width,
        height,
    } = fit;
    let font_size = block.font_size;
    let metrics = block.metrics;
    let content_size = (block.content_width, block.content_height);
    let line_pitch = block.pitch();

    let lines = lines
        .into_iter()
        .zip(placement.pens)
        .map(|(text, pen)| PlacedLine { text, pen })
        .collect();

    Ok(LayoutResult {
        width,
        height,
        family: run.family().to_string(),
        font_size,
        metrics,
        lines,
        origin: placement.origin,
        content_size,
        line_pitch,
        options: options.clone(),
    })
}
