use crate::colour::{colours, Colour};
use crate::layout::LayoutResult;
use crate::units::Px;

/// What a debug guide marks
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GuideKind {
    Margin,
    Border,
    Baseline,
    Ascent,
    Descent,
    XHeight,
    Origin,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GuideShape {
    Line { from: (Px, Px), to: (Px, Px) },
    Rect { min: (Px, Px), max: (Px, Px), filled: bool },
}

/// A single piece of debug overlay geometry, in box pixel coordinates
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Guide {
    pub kind: GuideKind,
    pub shape: GuideShape,
    pub colour: Colour,
}

impl Guide {
    fn line(kind: GuideKind, colour: Colour, from: (Px, Px), to: (Px, Px)) -> Guide {
        Guide {
            kind,
            shape: GuideShape::Line { from, to },
            colour,
        }
    }

    fn rect(kind: GuideKind, colour: Colour, centre: (Px, Px), half: Px, filled: bool) -> Guide {
        Guide {
            kind,
            shape: GuideShape::Rect {
                min: (centre.0 - half, centre.1 - half),
                max: (centre.0 + half, centre.1 + half),
                filled,
            },
            colour,
        }
    }
}

/// Build the debug overlay for a finished layout: margins, font metrics for each line
/// (if requested), the box border and a marker on the origin. Nothing is produced
/// unless `draw_debug` is set
pub fn guides(layout: &LayoutResult) -> Vec<Guide> {
    let options = &layout.options;
    if !options.draw_debug {
        return Vec::new();
    }

    let w = Px(layout.width as f32);
    let h = Px(layout.height as f32);
    let zero = Px(0.0);
    let margins = &options.margins;
    let mut guides: Vec<Guide> = Vec::new();

    // margins
    let margin = |from, to| Guide::line(GuideKind::Margin, colours::GREEN, from, to);
    guides.push(margin((margins.left, zero), (margins.left, h)));
    guides.push(margin((zero, margins.top), (w, margins.top)));
    guides.push(margin((w - margins.right, zero), (w - margins.right, h)));
    guides.push(margin((zero, h - margins.bottom), (w, h - margins.bottom)));

    if options.draw_font_metrics {
        let metrics = &layout.metrics;
        for line in layout.lines.iter() {
            let baseline = line.pen.1;
            for (kind, colour, y) in [
                (GuideKind::Baseline, colours::YELLOW, baseline),
                (GuideKind::Ascent, colours::BLUE, baseline + metrics.ascent),
                (GuideKind::Descent, colours::CYAN, baseline + metrics.descent),
                (GuideKind::XHeight, colours::MAGENTA, baseline - metrics.x_height),
            ] {
                guides.push(Guide::line(kind, colour, (zero, y), (w, y)));
            }
        }
    }

    guides.push(Guide {
        kind: GuideKind::Border,
        shape: GuideShape::Rect {
            min: (zero, zero),
            max: (w - Px(1.0), h - Px(1.0)),
            filled: false,
        },
        colour: colours::RED,
    });

    let marker = (w / 2.0 + layout.origin.0, h / 2.0 + layout.origin.1);
    guides.push(Guide::rect(GuideKind::Origin, colours::RED, marker, Px(3.0), true));
    guides.push(Guide::rect(GuideKind::Origin, colours::RED, marker, Px(5.0), false));

    guides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{layout_text, TextRun};
    use crate::measure::MonospaceMeasurer;
    use crate::options::{LayoutOptions, Origin};

    fn laid_out(options: LayoutOptions) -> LayoutResult {
        let measurer = MonospaceMeasurer::with_advance(1.0);
        let run = TextRun::new("ab\ncd", "mono", Px(10.0), options).expect("valid run");
        layout_text(&measurer, &run).expect("can lay out")
    }

    #[test]
    fn no_guides_unless_debugging() {
        assert!(guides(&laid_out(LayoutOptions::default())).is_empty());
    }

    #[test]
    fn debug_guides_outline_the_box() {
        let layout = laid_out(
            LayoutOptions::default()
                .with_origin(Origin::TopLeft, (Px(0.0), Px(0.0)))
                .with_debug(true, false),
        );
        let guides = guides(&layout);

        let count = |kind: GuideKind| guides.iter().filter(|g| g.kind == kind).count();
        assert_eq!(count(GuideKind::Margin), 4);
        assert_eq!(count(GuideKind::Border), 1);
        assert_eq!(count(GuideKind::Origin), 2);
        assert_eq!(count(GuideKind::Baseline), 0);

        // top-left origin puts the marker on the box's corner
        let marker = guides
            .iter()
            .find(|g| g.kind == GuideKind::Origin)
            .expect("has an origin marker");
        assert_eq!(
            marker.shape,
            GuideShape::Rect {
                min: (Px(-3.0), Px(-3.0)),
                max: (Px(3.0), Px(3.0)),
                filled: true
            }
        );
    }

    #[test]
    fn font_metric_guides_follow_each_baseline() {
        let layout = laid_out(LayoutOptions::default().with_debug(true, true));
        let baselines: Vec<Px> = guides(&layout)
            .iter()
            .filter(|g| g.kind == GuideKind::Baseline)
            .map(|g| match g.shape {
                GuideShape::Line { from, .. } => from.1,
                GuideShape::Rect { min, .. } => min.1,
            })
            .collect();
        assert_eq!(baselines, vec![Px(8.0), Px(18.0)]);
    }
}
