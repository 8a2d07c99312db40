// Shared test fonts

use image::{Rgba, RgbaImage};
use quote_overlay::overlay::{FontHandle, Point, TextExtent};

/// Fixed-metric face: every character advances round(0.6 * px) and lines are
/// round(0.8 * px) + round(0.2 * px) tall, so positions can be worked out by hand.
#[derive(Debug, Clone, Copy)]
pub struct FixedFont {
    px: f32,
}

impl FixedFont {
    pub fn new(px: f32) -> Self {
        Self { px }
    }

    fn scaled(&self, factor: f32) -> u32 {
        (self.px * factor).round().max(1.0) as u32
    }
}

impl FontHandle for FixedFont {
    fn px_size(&self) -> f32 {
        self.px
    }

    fn measure(&self, text: &str) -> TextExtent {
        TextExtent {
            width: text.chars().count() as u32 * self.scaled(0.6),
            height: self.scaled(0.8) + self.scaled(0.2),
        }
    }

    fn draw(&self, _canvas: &mut RgbaImage, _text: &str, _origin: Point, _color: Rgba<u8>) {}
}
