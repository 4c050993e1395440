use crate::{
    error::MeasureError,
    measure::{FontMetrics, FontSpec, Measurer},
    rect::Bounds,
    units::Px,
};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::collections::HashMap;

/// A parsed font object. Fonts can be TTF or OTF fonts, and are only used to measure
/// text: glyphs are never rasterized here.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, MeasureError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the family name of the font, if the font declares one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Px) -> f32 {
        *size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the vertical metrics of the font at the given size. `top` and `bottom`
    /// come from the face's global bounding box, so they cover every glyph in the font
    pub fn metrics(&self, size: Px) -> FontMetrics {
        let face = self.face.as_face_ref();
        let scaling = self.scaling(size);
        let bbox = face.global_bounding_box();

        FontMetrics {
            top: Px(-(bbox.y_max as f32) * scaling),
            bottom: Px(-(bbox.y_min as f32) * scaling),
            ascent: Px(-(face.ascender() as f32) * scaling),
            descent: Px(-(face.descender() as f32) * scaling),
            leading: Px(face.line_gap() as f32 * scaling),
            x_height: Px(self.x_height_units() * scaling),
        }
    }

    /// Height of a lowercase `x` in font units. Older `OS/2` tables don't record it, in
    /// which case the ink top of the `x` glyph stands in
    fn x_height_units(&self) -> f32 {
        let face = self.face.as_face_ref();
        face.x_height()
            .filter(|&h| h > 0)
            .or_else(|| {
                face.glyph_index('x')
                    .and_then(|gid| face.glyph_bounding_box(gid))
                    .map(|bbox| bbox.y_max)
            })
            .or_else(|| face.capital_height().filter(|&h| h > 0))
            .unwrap_or_default() as f32
    }

    /// Glyph to use for the character, falling back to the replacement glyph
    fn glyph_for(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Px) -> Px {
        let scaling = self.scaling(size);
        let face = self.face.as_face_ref();
        text.chars()
            .filter_map(|ch| self.glyph_for(ch))
            .map(|gid| Px(scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f32))
            .sum()
    }

    /// Calculate the ink bounds of a string of text at the given font size, relative to
    /// the left end of its baseline
    pub fn bounds_of_text(&self, text: &str, size: Px) -> Bounds {
        let scaling = self.scaling(size);
        let face = self.face.as_face_ref();

        let mut pen = Px(0.0);
        let mut ink: Option<Bounds> = None;
        for gid in text.chars().filter_map(|ch| self.glyph_for(ch)) {
            if let Some(bbox) = face.glyph_bounding_box(gid) {
                let glyph = Bounds {
                    left: Px(bbox.x_min as f32 * scaling),
                    top: Px(-(bbox.y_max as f32) * scaling),
                    right: Px(bbox.x_max as f32 * scaling),
                    bottom: Px(-(bbox.y_min as f32) * scaling),
                }
                .translate_x(pen);
                ink = Some(match ink {
                    Some(b) => b.union(&glyph),
                    None => glyph,
                });
            }
            pen += Px(scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f32);
        }

        ink.unwrap_or_default()
    }
}

/// A collection of fonts, addressable by [`Id`] and by family name. A font book is the
/// usual [`Measurer`] for real typefaces.
#[derive(Default)]
pub struct FontBook {
    pub fonts: Arena<Font>,
    families: HashMap<String, Id<Font>>,
}

impl FontBook {
    /// Add a font to the book under the family name it declares. Fonts without a family
    /// name can still be reached through [`FontBook::add_font_as`]. A later font with the
    /// same family name replaces the earlier one for lookups
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        let family = font.family();
        let id = self.fonts.alloc(font);
        if let Some(family) = family {
            log::debug!("registered font family `{family}`");
            self.families.insert(family, id);
        }
        id
    }

    /// Add a font to the book under an explicit family name
    pub fn add_font_as<S: Into<String>>(&mut self, family: S, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        self.families.insert(family.into(), id);
        id
    }

    /// Find the font registered for a family
    pub fn lookup(&self, family: &str) -> Option<&Font> {
        self.families.get(family).map(|&id| &self.fonts[id])
    }

    fn font(&self, spec: &FontSpec<'_>) -> Result<&Font, MeasureError> {
        self.lookup(spec.family)
            .ok_or_else(|| MeasureError::UnknownFamily(spec.family.to_string()))
    }
}

impl Measurer for FontBook {
    fn font_metrics(&self, font: &FontSpec<'_>) -> Result<FontMetrics, MeasureError> {
        Ok(self.font(font)?.metrics(font.size))
    }

    fn measure_width(&self, font: &FontSpec<'_>, text: &str) -> Result<Px, MeasureError> {
        Ok(self.font(font)?.width_of_text(text, font.size))
    }

    fn measure_bounds(&self, font: &FontSpec<'_>, text: &str) -> Result<Bounds, MeasureError> {
        Ok(self.font(font)?.bounds_of_text(text, font.size))
    }
}
