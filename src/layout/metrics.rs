use crate::error::MeasureError;
use crate::measure::{FontMetrics, FontSpec, Measurer};
use crate::rect::Bounds;
use crate::units::Px;

/// The measured ink bounds of a single display line
#[derive(Debug, Clone, PartialEq)]
pub struct LineBox<'a> {
    pub text: &'a str,
    pub bounds: Bounds,
}

/// The result of measuring a block of lines at one font size
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredBlock<'a> {
    pub font_size: Px,
    pub metrics: FontMetrics,
    pub line_boxes: Vec<LineBox<'a>>,
    /// Height of a single line, after the line height multiplier is applied
    pub line_height: Px,
    /// Leftmost ink across all lines; every line shares this left edge
    pub min_left: Px,
    pub content_width: Px,
    pub content_height: Px,
}

impl MeasuredBlock<'_> {
    /// Distance between consecutive baselines
    pub fn pitch(&self) -> Px {
        self.line_height + self.metrics.leading
    }
}

/// Measure every line at the given font size, aggregating them into a single block.
///
/// The block's width is the distance from the leftmost ink of any line to the rightmost
/// ink of any line; its height is one line pitch per line. Measuring no lines at all
/// produces an empty block.
pub fn measure_lines<'a, M: Measurer + ?Sized>(
    measurer: &M,
    font: &FontSpec<'_>,
    lines: &'a [String],
    line_height: f32,
) -> Result<MeasuredBlock<'a>, MeasureError> {
    let metrics = measurer.font_metrics(font)?;
    let line_height = metrics.extent() * line_height;

    let mut line_boxes: Vec<LineBox> = Vec::with_capacity(lines.len());
    for line in lines.iter() {
        let bounds = measurer.measure_bounds(font, line)?;
        log::trace!(
            "measured `{line}` at {}: {} → {}",
            font.size,
            bounds.left,
            bounds.right
        );
        line_boxes.push(LineBox { text: line, bounds });
    }

    let (min_left, max_right) = if line_boxes.is_empty() {
        (Px(0.0), Px(0.0))
    } else {
        line_boxes.iter().fold(
            (Px(f32::MAX), Px(-f32::MAX)),
            |(left, right), line| (left.min(line.bounds.left), right.max(line.bounds.right)),
        )
    };

    Ok(MeasuredBlock {
        font_size: font.size,
        metrics,
        content_width: max_right - min_left,
        content_height: (line_height + metrics.leading) * lines.len() as f32,
        line_boxes,
        line_height,
        min_left,
    })
}
