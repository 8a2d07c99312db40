//! Overlay rendering: translucent box, text, and flattening.
//!
//! All blending uses integer 8-bit arithmetic with rounding so that output
//! pixels are reproducible bit for bit.

use super::error::OverlayError;
use super::layout::{BoxGeometry, DrawInstruction};
use crate::constants::{BOX_ALPHA, BOX_BLACK, BOX_GREY};
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};

/// Fill color and alpha of the translucent box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxFill {
    pub color: [u8; 3],
    pub alpha: u8,
}

impl BoxFill {
    /// Grey at 60% opacity, used behind quote text.
    pub fn grey() -> Self {
        Self {
            color: BOX_GREY,
            alpha: BOX_ALPHA,
        }
    }

    /// Black at 60% opacity, used by the box-only variant.
    pub fn black() -> Self {
        Self {
            color: BOX_BLACK,
            alpha: BOX_ALPHA,
        }
    }

    fn pixel(&self) -> Rgba<u8> {
        Rgba([self.color[0], self.color[1], self.color[2], self.alpha])
    }
}

/// Opaque black, the only text color.
pub const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Composite the box and text onto a copy of `source`.
///
/// The returned image is opaque RGB with the same dimensions as `source`.
pub fn render(
    source: &DynamicImage,
    geometry: &BoxGeometry,
    instructions: &[DrawInstruction],
    fill: BoxFill,
) -> Result<DynamicImage, OverlayError> {
    let (width, height) = (source.width(), source.height());
    if width == 0 || height == 0 {
        return Err(OverlayError::RenderFailure(format!(
            "cannot render onto an empty {}x{} image",
            width, height
        )));
    }

    let overlay = box_overlay(width, height, geometry, fill);

    let mut composited = source.to_rgba8();
    alpha_composite(&mut composited, &overlay);

    for instruction in instructions {
        instruction
            .font
            .draw(&mut composited, &instruction.text, instruction.origin, TEXT_COLOR);
    }

    Ok(DynamicImage::ImageRgb8(flatten_on_white(&composited)))
}

/// Build a transparent layer with the filled box painted into it.
///
/// The rectangle is clipped to the canvas.
pub fn box_overlay(width: u32, height: u32, geometry: &BoxGeometry, fill: BoxFill) -> RgbaImage {
    let mut overlay = RgbaImage::new(width, height);

    let x_start = geometry.x.max(0) as i64;
    let y_start = geometry.y.max(0) as i64;
    let x_end = (geometry.x as i64 + geometry.width as i64).min(width as i64);
    let y_end = (geometry.y as i64 + geometry.height as i64).min(height as i64);

    let pixel = fill.pixel();
    for y in y_start..y_end {
        for x in x_start..x_end {
            overlay.put_pixel(x as u32, y as u32, pixel);
        }
    }

    overlay
}

/// Composite `overlay` over `base` in place. Both images must share dimensions.
pub fn alpha_composite(base: &mut RgbaImage, overlay: &RgbaImage) {
    for (dst, src) in base.pixels_mut().zip(overlay.pixels()) {
        if src[3] == 0 {
            continue;
        }
        *dst = blend_over(*dst, *src);
    }
}

/// Porter-Duff "over": `foreground` on top of `background`, non-premultiplied.
///
/// For an opaque background this reduces to
/// `round((fg * a + bg * (255 - a)) / 255)` per channel.
pub fn blend_over(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    let fg_alpha = foreground[3] as u32;
    if fg_alpha == 255 {
        return foreground;
    }
    if fg_alpha == 0 {
        return background;
    }

    // Everything below is scaled by 255 * 255.
    let bg_weight = background[3] as u32 * (255 - fg_alpha);
    let fg_weight = fg_alpha * 255;
    let out_alpha = fg_weight + bg_weight;

    if out_alpha == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |fg: u8, bg: u8| -> u8 {
        ((fg as u32 * fg_weight + bg as u32 * bg_weight + out_alpha / 2) / out_alpha) as u8
    };

    Rgba([
        channel(foreground[0], background[0]),
        channel(foreground[1], background[1]),
        channel(foreground[2], background[2]),
        ((out_alpha + 127) / 255) as u8,
    ])
}

/// Paste `image` onto an opaque white canvas using its own alpha as the mask.
pub fn flatten_on_white(image: &RgbaImage) -> RgbImage {
    let white = Rgba([255, 255, 255, 255]);
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let p = blend_over(white, *image.get_pixel(x, y));
        Rgb([p[0], p[1], p[2]])
    })
}
