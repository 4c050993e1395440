//! Reconciles the measured text with the requested box size.
//!
//! Fitting runs in at most two stages. The first stage is the metrics pass at the
//! requested font size. Only [`Overflow::ScaleText`] has a second stage: it shrinks the
//! font to fit and measures the lines exactly once more at the new size.

use crate::error::MeasureError;
use crate::layout::metrics::{measure_lines, MeasuredBlock};
use crate::measure::{FontSpec, Measurer};
use crate::options::{LayoutOptions, Overflow};
use crate::units::Px;

/// The smallest font size text is ever shrunk to
pub const MIN_FONT_SIZE: Px = Px(1.0);

/// Scale factors this close to 1 are rounding noise and leave the font alone
const FIT_TOLERANCE: f32 = 1e-4;

/// A block of measured lines and the final size of the box holding it, margins included
#[derive(Debug, Clone, PartialEq)]
pub struct Fit<'a> {
    pub block: MeasuredBlock<'a>,
    pub width: u32,
    pub height: u32,
}

/// Measure the lines and size the box according to the overflow mode
pub fn fit_lines<'a, M: Measurer + ?Sized>(
    measurer: &M,
    font: &FontSpec<'_>,
    lines: &'a [String],
    options: &LayoutOptions,
) -> Result<Fit<'a>, MeasureError> {
    let measured = measure_lines(measurer, font, lines, options.line_height)?;
    let unscaled = (measured.content_width, measured.content_height);
    let block = match options.overflow {
        Overflow::ScaleText => shrink_to_fit(measurer, font, lines, options, measured)?,
        Overflow::Scale | Overflow::Limit | Overflow::BreakText => measured,
    };

    let (width, height) = box_size(options, unscaled);
    let width = (width + options.margins.horizontal()).whole_pixels();
    let height = (height + options.margins.vertical()).whole_pixels();

    Ok(Fit {
        block,
        width,
        height,
    })
}

/// Factor to scale text by so that `content` fits in `requested`. Unconstrained
/// (zero) requested dimensions and empty content never cause scaling, and text is
/// never grown: the factor is at most 1
pub fn scale_factor(requested: (Px, Px), content: (Px, Px)) -> f32 {
    let mut s = 1.0f32;
    if *requested.0 > 0.0 && *content.0 > 0.0 {
        s = s.min(requested.0 / content.0);
    }
    if *requested.1 > 0.0 && *content.1 > 0.0 {
        s = s.min(requested.1 / content.1);
    }
    s
}

/// Second stage of [`Overflow::ScaleText`]: shrink the font size so the block fits the
/// requested box, then measure once more at that size
fn shrink_to_fit<'a, M: Measurer + ?Sized>(
    measurer: &M,
    font: &FontSpec<'_>,
    lines: &'a [String],
    options: &LayoutOptions,
    first: MeasuredBlock<'a>,
) -> Result<MeasuredBlock<'a>, MeasureError> {
    let s = scale_factor(
        (options.width, options.height),
        (first.content_width, first.content_height),
    );
    if s >= 1.0 - FIT_TOLERANCE {
        return Ok(first);
    }
    let size = (font.size * s).floor().max(MIN_FONT_SIZE);
    if size >= font.size {
        return Ok(first);
    }

    log::debug!(
        "shrinking text from {} to {size} to fit {}x{}",
        font.size,
        options.width,
        options.height
    );
    measure_lines(measurer, &font.at_size(size), lines, options.line_height)
}

/// Content size of the box before margins are added. `measured` is the content size at
/// the requested font size, so text shrunk by [`Overflow::ScaleText`] doesn't shrink
/// the unconstrained sides of its box
fn box_size(options: &LayoutOptions, measured: (Px, Px)) -> (Px, Px) {
    let requested_or = |requested: Px, measured: Px| {
        if *requested > 0.0 {
            requested
        } else {
            measured
        }
    };
    let (w, h) = measured;

    match options.overflow {
        Overflow::Scale => (options.width.max(w), options.height.max(h)),
        Overflow::Limit => (requested_or(options.width, w), requested_or(options.height, h)),
        // the lines were already wrapped to the requested width
        Overflow::BreakText => (requested_or(options.width, w), options.height.max(h)),
        Overflow::ScaleText => (requested_or(options.width, w), requested_or(options.height, h)),
    }
}
