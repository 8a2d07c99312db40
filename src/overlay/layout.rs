//! Box geometry and text placement for the overlay.
//!
//! The box is always 80% of the image width and exactly as tall as the
//! wrapped quote plus the attribution line plus padding. It is centered on
//! the image; positions are never clamped, so a box taller than the image
//! starts above the top edge and is clipped by the renderer.
//!
//! Vertical structure of the box:
//!
//! ```text
//! box_y
//!   + BOX_PADDING
//!   + (line height + LINE_SPACING) for every quote line
//!   + ATTRIBUTION_GAP
//!   + attribution height
//!   + BOX_PADDING
//! ```

use super::font::{FontHandle, Point, SharedFont};
use super::wrap::Line;
use crate::constants::{
    ATTRIBUTION_GAP, ATTRIBUTION_PREFIX, BOX_ONLY_HEIGHT_DENOMINATOR, BOX_ONLY_HEIGHT_NUMERATOR,
    BOX_PADDING, BOX_WIDTH_DENOMINATOR, BOX_WIDTH_NUMERATOR, LINE_SPACING,
};

/// Dimensions of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Top-left corner and size of the translucent box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// One string to paint with a given font at a given top-left position.
#[derive(Debug, Clone)]
pub struct DrawInstruction {
    pub text: String,
    pub font: SharedFont,
    pub origin: Point,
}

/// Result of laying out a quote: box geometry and what to draw inside it.
#[derive(Debug, Clone)]
pub struct Layout {
    pub geometry: BoxGeometry,
    pub instructions: Vec<DrawInstruction>,
}

/// Width of the overlay box for an image of the given width.
pub fn box_width(image_width: u32) -> u32 {
    (image_width as u64 * BOX_WIDTH_NUMERATOR as u64 / BOX_WIDTH_DENOMINATOR as u64) as u32
}

/// Maximum pixel width available to a quote line inside the box.
pub fn text_width_limit(image_width: u32) -> u32 {
    box_width(image_width).saturating_sub(2 * BOX_PADDING as u32)
}

/// Attribution string as it is measured and drawn.
pub fn attribution_text(attribution: &str) -> String {
    format!("{}{}", ATTRIBUTION_PREFIX, attribution)
}

/// Center a span of `inner` pixels inside `outer`, flooring toward negative infinity.
fn centered_offset(outer: i64, inner: i64) -> i32 {
    (outer - inner).div_euclid(2) as i32
}

/// Compute box geometry and draw positions for a wrapped quote.
pub fn layout(
    image: ImageDimensions,
    quote_lines: &[Line],
    attribution: &str,
    quote_font: &SharedFont,
    attribution_font: &SharedFont,
) -> Layout {
    let width = box_width(image.width);

    let quote_height: i64 = quote_lines
        .iter()
        .map(|line| line.height as i64 + LINE_SPACING as i64)
        .sum();

    let attribution = attribution_text(attribution);
    let attribution_extent = attribution_font.measure(&attribution);

    let height = quote_height
        + attribution_extent.height as i64
        + 2 * BOX_PADDING as i64
        + ATTRIBUTION_GAP as i64;

    let geometry = BoxGeometry {
        x: centered_offset(image.width as i64, width as i64),
        y: centered_offset(image.height as i64, height),
        width,
        height: height as u32,
    };

    let mut instructions = Vec::with_capacity(quote_lines.len() + 1);
    let mut cursor_y = geometry.y + BOX_PADDING;

    for line in quote_lines {
        let x = geometry.x + centered_offset(width as i64, line.width as i64);
        instructions.push(DrawInstruction {
            text: line.text.clone(),
            font: quote_font.clone(),
            origin: Point::new(x, cursor_y),
        });
        cursor_y += line.height as i32 + LINE_SPACING;
    }

    let attribution_x =
        geometry.x + width as i32 - attribution_extent.width as i32 - BOX_PADDING;
    instructions.push(DrawInstruction {
        text: attribution,
        font: attribution_font.clone(),
        origin: Point::new(attribution_x, cursor_y + ATTRIBUTION_GAP),
    });

    Layout {
        geometry,
        instructions,
    }
}

/// Geometry of the box-only variant: 80% of the width, 30% of the height, centered.
pub fn box_only_geometry(image: ImageDimensions) -> BoxGeometry {
    let width = box_width(image.width);
    let height = (image.height as u64 * BOX_ONLY_HEIGHT_NUMERATOR as u64
        / BOX_ONLY_HEIGHT_DENOMINATOR as u64) as u32;

    BoxGeometry {
        x: centered_offset(image.width as i64, width as i64),
        y: centered_offset(image.height as i64, height as i64),
        width,
        height,
    }
}
