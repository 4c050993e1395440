//! Invariants that hold for any text and any options.

use proptest::prelude::*;

use textbox_layout::layout::{fit_lines, scale_factor, split_lines};
use textbox_layout::{
    layout_text, FontSpec, HorizontalAlign, LayoutOptions, Margins, Measurer, MonospaceMeasurer,
    Origin, Overflow, Px, TextRun, VerticalAlign,
};

fn measurer() -> MonospaceMeasurer {
    let _ = env_logger::builder().is_test(true).try_init();
    MonospaceMeasurer {
        leading: 0.1,
        ..MonospaceMeasurer::with_advance(0.55)
    }
}

fn arb_overflow() -> impl Strategy<Value = Overflow> {
    prop_oneof![
        Just(Overflow::Scale),
        Just(Overflow::Limit),
        Just(Overflow::ScaleText),
        Just(Overflow::BreakText),
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,12}( [a-z]{1,12}){0,20}",
        "[a-z ]{0,30}(\r[a-z ]{0,30}){0,4}",
        (1usize..60).prop_map(|n| lipsum::lipsum(n)),
    ]
}

fn arb_options() -> impl Strategy<Value = LayoutOptions> {
    (
        (0.0f32..400.0, 0.0f32..200.0),
        arb_overflow(),
        0usize..5,
        (0.0f32..20.0, 0.0f32..20.0, 0.0f32..20.0, 0.0f32..20.0),
        0.0f32..3.0,
    )
        .prop_map(|((w, h), overflow, max_lines, (t, r, b, l), line_height)| {
            LayoutOptions::default()
                .with_size(Px(w), Px(h))
                .with_overflow(overflow)
                .with_max_lines(max_lines)
                .with_margins(Margins::trbl(Px(t), Px(r), Px(b), Px(l)))
                .with_line_height(line_height)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Boxes are always at least one pixel in each direction.
    #[test]
    fn box_is_never_empty(text in arb_text(), options in arb_options(), size in 1.0f32..72.0) {
        let run = TextRun::new(text, "mono", Px(size), options).expect("valid run");
        let layout = layout_text(&measurer(), &run).expect("can lay out");
        prop_assert!(layout.width >= 1);
        prop_assert!(layout.height >= 1);
        prop_assert!(layout.lines.iter().all(|l| l.pen.0.is_finite() && l.pen.1.is_finite()));
    }

    /// `max_lines` is never exceeded.
    #[test]
    fn max_lines_is_respected(text in arb_text(), options in arb_options()) {
        let max_lines = options.max_lines;
        let run = TextRun::new(text, "mono", Px(16.0), options).expect("valid run");
        let layout = layout_text(&measurer(), &run).expect("can lay out");
        if max_lines > 0 {
            prop_assert!(layout.lines.len() <= max_lines);
        }
        prop_assert!(!layout.lines.is_empty());
    }

    /// Wrapped lines fit the width between the margins, unless they hold a single word
    /// that is too long on its own.
    #[test]
    fn wrapped_lines_fit(
        text in arb_text(),
        width in 30.0f32..400.0,
        margin in 0.0f32..10.0,
    ) {
        let measurer = measurer();
        let font = FontSpec::new("mono", Px(16.0));
        let options = LayoutOptions::default()
            .with_size(Px(width), Px(0.0))
            .with_overflow(Overflow::BreakText)
            .with_margins(Margins::symmetric(Px(0.0), Px(margin)));
        let limit = width - 2.0 * margin;

        for line in split_lines(&measurer, &font, &text, &options).expect("can split") {
            let ink = measurer.measure_width(&font, line.trim_end()).expect("can measure");
            let words = line.split_whitespace().count();
            prop_assert!(
                *ink <= limit + 1e-3 || words == 1,
                "`{}` is {} wide, limit {}", line, ink, limit
            );
        }
    }

    /// Shrinking text to fit twice doesn't shrink it any further.
    #[test]
    fn scale_text_is_idempotent(
        text in "[a-z]{1,12}( [a-z]{1,12}){0,8}",
        width in 10.0f32..300.0,
        height in 0.0f32..100.0,
        size in 4.0f32..72.0,
    ) {
        let measurer = measurer();
        let options = LayoutOptions::default()
            .with_size(Px(width), Px(height))
            .with_overflow(Overflow::ScaleText);
        let lines = vec![text];

        let font = FontSpec::new("mono", Px(size));
        let first = fit_lines(&measurer, &font, &lines, &options).expect("can fit");
        let fitted = first.block.font_size;
        prop_assert!(fitted <= Px(size));

        let again = fit_lines(&measurer, &font.at_size(fitted), &lines, &options).expect("can fit");
        let shrunk_to_minimum = *fitted <= 1.0;
        let s = scale_factor(
            (options.width, options.height),
            (again.block.content_width, again.block.content_height),
        );
        prop_assert!(shrunk_to_minimum || s > 0.999, "scale factor {} at {}", s, fitted);
        prop_assert_eq!(again.block.font_size, fitted);
    }

    /// A centred box with an automatic origin is anchored on its centre.
    #[test]
    fn centred_auto_origin_is_the_offset(
        text in arb_text(),
        dx in -50.0f32..50.0,
        dy in -50.0f32..50.0,
    ) {
        let options = LayoutOptions::default()
            .with_align(HorizontalAlign::Center, VerticalAlign::Center)
            .with_origin(Origin::Auto, (Px(dx), Px(dy)));
        let run = TextRun::new(text, "mono", Px(12.0), options).expect("valid run");
        let layout = layout_text(&measurer(), &run).expect("can lay out");
        prop_assert_eq!(layout.origin, (Px(dx), Px(dy)));
    }
}

#[test]
fn hello_hugs_its_bounding_box() {
    let measurer = MonospaceMeasurer::with_advance(0.5);
    let run = TextRun::new("Hello", "mono", Px(15.0), LayoutOptions::default()).unwrap();
    let layout = layout_text(&measurer, &run).unwrap();

    // five 7.5px characters and one 15px line
    assert_eq!(layout.width, 38);
    assert_eq!(layout.height, 15);
}

#[test]
fn third_word_forces_a_wrap() {
    let measurer = MonospaceMeasurer::with_advance(1.0);
    let options = LayoutOptions::default()
        .with_size(Px(100.0), Px(0.0))
        .with_overflow(Overflow::BreakText);
    let run = TextRun::new("aaaa bbbb cccc", "mono", Px(10.0), options).unwrap();
    let layout = layout_text(&measurer, &run).unwrap();

    let lines: Vec<&str> = layout.lines.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(lines, vec!["aaaa bbbb ", "cccc "]);
}

#[test]
fn one_line_of_three() {
    let measurer = MonospaceMeasurer::default();
    let options = LayoutOptions::default().with_max_lines(1);
    let run = TextRun::new("first\rsecond\rthird", "mono", Px(10.0), options).unwrap();
    let layout = layout_text(&measurer, &run).unwrap();

    assert_eq!(layout.lines.len(), 1);
    assert_eq!(layout.lines[0].text, "first");
}
