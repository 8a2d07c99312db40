//! Outline font faces rendered with ab_glyph.

use crate::overlay::font::{FontHandle, Point, TextExtent};
use crate::overlay::renderer::blend_over;
use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use std::fmt;

/// A TrueType/OpenType face at a fixed pixel size.
#[derive(Clone)]
pub struct GlyphFont {
    font: FontArc,
    scale: PxScale,
}

impl GlyphFont {
    pub fn new(font: FontArc, px: f32) -> Self {
        Self {
            font,
            scale: PxScale::from(px.max(1.0)),
        }
    }

    /// Parse raw font file bytes.
    pub fn from_bytes(data: Vec<u8>, px: f32) -> Result<Self, ab_glyph::InvalidFont> {
        Ok(Self::new(FontArc::try_from_vec(data)?, px))
    }
}

impl fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphFont")
            .field("px", &self.scale.y)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl FontHandle for GlyphFont {
    fn px_size(&self) -> f32 {
        self.scale.y
    }

    fn measure(&self, text: &str) -> TextExtent {
        let scaled_font = self.font.as_scaled(self.scale);

        let mut width = 0.0f32;
        let mut prev_glyph: Option<GlyphId> = None;

        for c in text.chars() {
            let glyph_id = scaled_font.glyph_id(c);
            if let Some(prev) = prev_glyph {
                width += scaled_font.kern(prev, glyph_id);
            }
            width += scaled_font.h_advance(glyph_id);
            prev_glyph = Some(glyph_id);
        }

        TextExtent {
            width: width.max(0.0).ceil() as u32,
            height: (scaled_font.ascent() - scaled_font.descent()).ceil() as u32,
        }
    }

    fn draw(&self, canvas: &mut RgbaImage, text: &str, origin: Point, color: Rgba<u8>) {
        let scaled_font = self.font.as_scaled(self.scale);
        let (canvas_width, canvas_height) = (canvas.width() as i32, canvas.height() as i32);

        let baseline_y = origin.y as f32 + scaled_font.ascent();
        let mut cursor_x = origin.x as f32;
        let mut prev_glyph: Option<GlyphId> = None;

        for c in text.chars() {
            let glyph_id = scaled_font.glyph_id(c);
            if let Some(prev) = prev_glyph {
                cursor_x += scaled_font.kern(prev, glyph_id);
            }

            let glyph =
                glyph_id.with_scale_and_position(self.scale, ab_glyph::point(cursor_x, baseline_y));

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let x = px as i32 + bounds.min.x as i32;
                    let y = py as i32 + bounds.min.y as i32;
                    if x < 0 || y < 0 || x >= canvas_width || y >= canvas_height {
                        return;
                    }

                    let alpha = (coverage.clamp(0.0, 1.0) * color[3] as f32).round() as u8;
                    if alpha == 0 {
                        return;
                    }
                    let pixel = Rgba([color[0], color[1], color[2], alpha]);
                    let existing = *canvas.get_pixel(x as u32, y as u32);
                    canvas.put_pixel(x as u32, y as u32, blend_over(existing, pixel));
                });
            }

            cursor_x += scaled_font.h_advance(glyph_id);
            prev_glyph = Some(glyph_id);
        }
    }
}
