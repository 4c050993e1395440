use textbox_layout::colours;
use textbox_layout::layout::Margins;
use textbox_layout::{
    layout_text, Font, FontBook, GuideCanvas, HorizontalAlign, LayoutOptions, Overflow, Px,
    Renderer, TextRun, VerticalAlign,
};

fn main() {
    env_logger::init();

    // load a font to measure text with
    let font = include_bytes!("../assets/DejaVuSans.ttf");
    let font = Font::load(font.to_vec()).expect("can load font");

    let mut book = FontBook::default();
    book.add_font(font);

    let options = LayoutOptions::default()
        .with_size(Px(480.0), Px(0.0))
        .with_overflow(Overflow::BreakText)
        .with_align(HorizontalAlign::Left, VerticalAlign::Top)
        .with_margins(Margins::all(Px(12.0)))
        .with_colours(colours::BLACK, colours::WHITE)
        .with_debug(true, true);
    let run = TextRun::new(lipsum::lipsum(80), "DejaVu Sans", Px(16.0), options)
        .expect("valid text run");
    let layout = layout_text(&book, &run).expect("can lay out text");

    for line in layout.lines.iter() {
        println!("{:>8} {:>8}  {}", line.pen.0, line.pen.1, line.text);
    }
    println!(
        "{}x{} at {}, anchored at {:?}",
        layout.width,
        layout.height,
        layout.font_size,
        layout.anchor_offset()
    );

    let image = GuideCanvas.render(&layout).expect("can render guides");
    image.save("text-layout.png").expect("can save image");
}
