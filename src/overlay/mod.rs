//! Quote overlay compositing.
//!
//! Places a translucent box holding a wrapped quote and its attribution in
//! the middle of an image.
//!
//! # Pipeline
//!
//! - [`wrap`](wrap::wrap) breaks the quote into lines that fit the box
//! - [`layout`](layout::layout) sizes and centers the box and positions each line
//! - [`render`](renderer::render) composites the box, draws the text and
//!   flattens the result onto white
//!
//! Font metrics and glyph painting come through the [`FontHandle`] trait; the
//! core never touches the filesystem or HTTP.

pub mod codec;
pub mod compositor;
pub mod error;
pub mod font;
pub mod layout;
pub mod renderer;
pub mod wrap;

// Re-export main types for convenience
pub use codec::{decode, encode_jpeg, is_image_content_type, EncodedImage, JPEG_CONTENT_TYPE};
pub use compositor::{font_sizes, OverlayCompositor, OverlayRequest};
pub use error::OverlayError;
pub use font::{FontHandle, Point, SharedFont, TextExtent};
pub use layout::{
    attribution_text, box_only_geometry, box_width, layout, text_width_limit, BoxGeometry,
    DrawInstruction, ImageDimensions, Layout,
};
pub use renderer::{alpha_composite, blend_over, box_overlay, flatten_on_white, render, BoxFill};
pub use wrap::{wrap, Line};
