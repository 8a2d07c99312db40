//! Font handle interface consumed by the overlay core.
//!
//! The wrapper, layout engine and renderer only ever see a [`FontHandle`]:
//! a face loaded at one pixel size that can measure and paint a string.
//! Concrete faces live in [`crate::fonts`].

use image::{Rgba, RgbaImage};
use std::fmt;
use std::sync::Arc;

/// A pixel coordinate. May be negative or outside the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Measured size of a rendered string.
///
/// `height` is ascent + descent of the face, independent of the glyphs used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// A scalable font face loaded at a specific pixel size.
///
/// Handles are immutable once loaded and may be shared across threads.
pub trait FontHandle: Send + Sync + fmt::Debug {
    /// Pixel size this handle was loaded at.
    fn px_size(&self) -> f32;

    /// Measure `text` as it would be drawn.
    fn measure(&self, text: &str) -> TextExtent;

    /// Paint `text` onto `canvas` with its top-left corner at `origin`.
    ///
    /// Pixels outside the canvas are skipped.
    fn draw(&self, canvas: &mut RgbaImage, text: &str, origin: Point, color: Rgba<u8>);
}

/// Shared, reference-counted font handle.
pub type SharedFont = Arc<dyn FontHandle>;
