// Constants module - centralized default values for configuration
//
// This module defines all default values used throughout the codebase.
// Layout constants are fixed: they are not exposed through configuration.

// =============================================================================
// Server defaults
// =============================================================================

/// Default bind address
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default maximum request body size (20 MB)
pub const DEFAULT_MAX_BODY_SIZE: usize = 20 * 1024 * 1024;

/// Service name reported by `GET /`
pub const SERVICE_NAME: &str = "Image Overlay Service";

// =============================================================================
// Layout constants
// =============================================================================

/// Padding between the box edge and its content, in pixels
pub const BOX_PADDING: i32 = 40;

/// Vertical spacing added after every quote line
pub const LINE_SPACING: i32 = 10;

/// Gap between the quote block and the attribution line
pub const ATTRIBUTION_GAP: i32 = 20;

/// Box width as a fraction of the image width: numerator / denominator
pub const BOX_WIDTH_NUMERATOR: u32 = 4;
pub const BOX_WIDTH_DENOMINATOR: u32 = 5;

/// Box-only variant height as a fraction of the image height
pub const BOX_ONLY_HEIGHT_NUMERATOR: u32 = 3;
pub const BOX_ONLY_HEIGHT_DENOMINATOR: u32 = 10;

/// Prefix placed before the attribution text (em-dash and space)
pub const ATTRIBUTION_PREFIX: &str = "\u{2014} ";

// =============================================================================
// Rendering constants
// =============================================================================

/// Box alpha: round(0.6 * 255)
pub const BOX_ALPHA: u8 = 153;

/// Fill color of the text-aware box
pub const BOX_GREY: [u8; 3] = [128, 128, 128];

/// Fill color of the box-only variant
pub const BOX_BLACK: [u8; 3] = [0, 0, 0];

/// Default JPEG quality for composited output
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

// =============================================================================
// Font defaults
// =============================================================================

/// Quote font size is image width divided by this value
pub const QUOTE_FONT_DIVISOR: u32 = 20;

/// Attribution font size is image width divided by this value
pub const ATTRIBUTION_FONT_DIVISOR: u32 = 30;

/// Smallest quote font size in pixels
pub const MIN_QUOTE_FONT_PX: u32 = 12;

/// Smallest attribution font size in pixels
pub const MIN_ATTRIBUTION_FONT_PX: u32 = 10;

/// Name reported for the built-in fallback face
pub const BUILTIN_FONT_NAME: &str = "builtin";

/// Default directories scanned for font files
pub const DEFAULT_FONT_DIRECTORIES: &[&str] = &["fonts", "/usr/share/fonts", "/usr/local/share/fonts"];

/// Well-known system font files tried after discovered fonts
pub const DEFAULT_SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Maximum directory depth followed during font discovery
pub const FONT_DISCOVERY_MAX_DEPTH: usize = 4;
