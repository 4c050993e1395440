//! Turning a finished layout into something drawable.

use crate::error::LayoutError;
use crate::layout::{guides, Guide, GuideShape, LayoutResult};
use crate::units::Px;
use image::{Rgba, RgbaImage};

/// Produces a drawable surface (an image, a texture, ...) from a finished layout.
///
/// A surface is expected to be exactly `width` × `height` pixels, with line `i`'s
/// baseline starting at `layout.lines[i].pen`. Surfaces are handed back through
/// [`Renderer::dispose`] once they are replaced, so renderers that own external
/// resources can release them.
pub trait Renderer {
    type Surface;

    fn render(&mut self, layout: &LayoutResult) -> Result<Self::Surface, LayoutError>;

    fn dispose(&mut self, surface: Self::Surface) {
        drop(surface);
    }
}

/// Renders the box itself into an RGBA image: the background colour plus any debug
/// guides the layout asks for. Glyphs are left to a text rasterizer.
#[derive(Debug, Default, Copy, Clone)]
pub struct GuideCanvas;

impl Renderer for GuideCanvas {
    type Surface = RgbaImage;

    fn render(&mut self, layout: &LayoutResult) -> Result<RgbaImage, LayoutError> {
        let background = Rgba(layout.options.background.to_rgba_bytes());
        let mut image = RgbaImage::from_pixel(layout.width, layout.height, background);
        for guide in guides(layout).iter() {
            draw_guide(&mut image, guide);
        }
        Ok(image)
    }
}

fn draw_guide(image: &mut RgbaImage, guide: &Guide) {
    let colour = Rgba(guide.colour.to_rgba_bytes());
    match guide.shape {
        GuideShape::Line { from, to } => draw_line(image, from, to, colour),
        GuideShape::Rect {
            min,
            max,
            filled: false,
        } => {
            draw_line(image, min, (max.0, min.1), colour);
            draw_line(image, (max.0, min.1), max, colour);
            draw_line(image, max, (min.0, max.1), colour);
            draw_line(image, (min.0, max.1), min, colour);
        }
        GuideShape::Rect {
            min,
            max,
            filled: true,
        } => {
            let (x1, y1) = (min.0.round() as i64, min.1.round() as i64);
            let (x2, y2) = (max.0.round() as i64, max.1.round() as i64);
            for y in y1..=y2 {
                for x in x1..=x2 {
                    put(image, x, y, colour);
                }
            }
        }
    }
}

/// Step along the line one pixel at a time, without anti-aliasing
fn draw_line(image: &mut RgbaImage, from: (Px, Px), to: (Px, Px), colour: Rgba<u8>) {
    let (dx, dy) = (*to.0 - *from.0, *to.1 - *from.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i64;
    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        let x = (*from.0 + dx * t).round() as i64;
        let y = (*from.1 + dy * t).round() as i64;
        put(image, x, y, colour);
    }
}

fn put(image: &mut RgbaImage, x: i64, y: i64, colour: Rgba<u8>) {
    if x >= 0 && y >= 0 && x < image.width() as i64 && y < image.height() as i64 {
        image.put_pixel(x as u32, y as u32, colour);
    }
}
