use crate::error::MeasureError;
use crate::measure::{FontSpec, Measurer};
use crate::options::{LayoutOptions, Overflow};
use crate::units::Px;

/// Split raw text into display lines.
///
/// Text is first split into paragraphs at explicit line breaks (`\r\n`, `\r` or `\n`);
/// empty paragraphs are kept as empty lines. When the overflow mode is
/// [`Overflow::BreakText`] and a box width is set, each paragraph is then word-wrapped
/// to the width left between the horizontal margins. Otherwise every paragraph is a
/// line of its own.
pub fn split_lines<M: Measurer + ?Sized>(
    measurer: &M,
    font: &FontSpec<'_>,
    text: &str,
    options: &LayoutOptions,
) -> Result<Vec<String>, MeasureError> {
    // normalize newlines
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let paragraphs = text.split('\n');

    if options.overflow != Overflow::BreakText || *options.width <= 0.0 {
        return Ok(paragraphs.map(str::to_string).collect());
    }

    let limit = options.width - options.margins.horizontal();
    let mut lines: Vec<String> = Vec::new();
    for paragraph in paragraphs {
        wrap_paragraph(measurer, font, paragraph, limit, &mut lines)?;
    }
    Ok(lines)
}

/// Greedy first-fit word wrap. Each word is followed by a single space. A word moves to
/// a new line when the current line plus the word would be wider than `limit`; a word
/// that exactly fills the line stays on it. A word wider than `limit` on its own gets a
/// line to itself.
fn wrap_paragraph<M: Measurer + ?Sized>(
    measurer: &M,
    font: &FontSpec<'_>,
    paragraph: &str,
    limit: Px,
    lines: &mut Vec<String>,
) -> Result<(), MeasureError> {
    let mut line = String::new();
    let mut line_width = Px(0.0);

    for word in paragraph.split_whitespace() {
        let word_width = measurer.measure_width(font, word)?;
        if !line.is_empty() && line_width + word_width > limit {
            log::trace!("wrapping before `{word}` at {line_width} of {limit}");
            lines.push(std::mem::take(&mut line));
        }

        line.push_str(word);
        line.push(' ');
        line_width = measurer.measure_width(font, &line)?;
    }

    // a paragraph without any words still takes up a line
    lines.push(line);
    Ok(())
}

/// Keep at most `max_lines` lines, dropping the rest. `0` keeps everything
pub fn limit_lines(mut lines: Vec<String>, max_lines: usize) -> Vec<String> {
    if max_lines > 0 {
        lines.truncate(max_lines);
    }
    lines
}
