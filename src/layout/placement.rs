use crate::layout::metrics::MeasuredBlock;
use crate::layout::Margins;
use crate::options::{HorizontalAlign, LayoutOptions, Origin, VerticalAlign};
use crate::units::Px;

/// Where each line's baseline starts, plus the box's anchor point
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub pens: Vec<(Px, Px)>,
    /// Anchor point relative to the centre of the box
    pub origin: (Px, Px),
}

/// Horizontal pen position, shared by every line.
///
/// Right alignment pins the pen at `-margin.right` no matter how wide the text is.
pub fn pen_x(align: HorizontalAlign, margins: &Margins, width: Px, block: &MeasuredBlock) -> Px {
    match align {
        HorizontalAlign::Left => margins.left - block.min_left,
        HorizontalAlign::Right => -margins.right,
        HorizontalAlign::Center => (width - block.content_width) / 2.0 - block.min_left,
    }
}

/// Baseline of the first line
pub fn first_baseline(
    align: VerticalAlign,
    margins: &Margins,
    height: Px,
    block: &MeasuredBlock,
) -> Px {
    let top = block.metrics.top;
    match align {
        VerticalAlign::Top => margins.top - top,
        VerticalAlign::Bottom => height - top - block.content_height - margins.bottom,
        VerticalAlign::Center => (height - block.content_height) / 2.0 - top + margins.top,
    }
}

/// Resolve the anchor point of a `width` × `height` box relative to its centre. `Auto`
/// follows the alignment, so that a box anchored by its origin stays put when its text
/// changes length
pub fn resolve_origin(
    origin: Origin,
    align: HorizontalAlign,
    align_vertical: VerticalAlign,
    width: Px,
    height: Px,
) -> (Px, Px) {
    let left = -width / 2.0;
    let right = width / 2.0;
    let top = -height / 2.0;
    let bottom = height / 2.0;
    let centre = Px(0.0);

    match origin {
        Origin::Center => (centre, centre),
        Origin::Left => (left, centre),
        Origin::Right => (right, centre),
        Origin::Top => (centre, top),
        Origin::Bottom => (centre, bottom),
        Origin::TopLeft => (left, top),
        Origin::TopRight => (right, top),
        Origin::BottomLeft => (left, bottom),
        Origin::BottomRight => (right, bottom),
        Origin::Auto => {
            let x = match align {
                HorizontalAlign::Left => left,
                HorizontalAlign::Right => right,
                HorizontalAlign::Center => centre,
            };
            let y = match align_vertical {
                VerticalAlign::Top => top,
                VerticalAlign::Bottom => bottom,
                VerticalAlign::Center => centre,
            };
            (x, y)
        }
    }
}

/// Position `line_count` lines inside a box of the given pixel size
pub fn place(
    block: &MeasuredBlock,
    line_count: usize,
    width: u32,
    height: u32,
    options: &LayoutOptions,
) -> Placement {
    let (width, height) = (Px(width as f32), Px(height as f32));

    let x = pen_x(options.align, &options.margins, width, block);
    let y = first_baseline(options.align_vertical, &options.margins, height, block);
    let pitch = block.pitch();
    let pens = (0..line_count)
        .map(|row| (x, y + pitch * row as f32))
        .collect();

    let (ox, oy) = resolve_origin(
        options.origin,
        options.align,
        options.align_vertical,
        width,
        height,
    );
    let origin = (ox + options.origin_offset.0, oy + options.origin_offset.1);

    Placement { pens, origin }
}
