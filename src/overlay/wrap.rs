//! Greedy word wrapping against measured pixel widths.

use super::font::FontHandle;

/// A wrapped line with its measured size at the wrapping font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub width: u32,
    pub height: u32,
}

/// Break `text` into lines no wider than `max_width` pixels.
///
/// Words are split on whitespace and rejoined with single spaces. A word that
/// is wider than `max_width` on its own still gets a line to itself; it is
/// never split, so that line overflows.
pub fn wrap(text: &str, font: &dyn FontHandle, max_width: u32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word)
        };

        if font.measure(&candidate).width <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(measured_line(std::mem::take(&mut current), font));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(measured_line(current, font));
    }

    lines
}

fn measured_line(text: String, font: &dyn FontHandle) -> Line {
    let extent = font.measure(&text);
    Line {
        text,
        width: extent.width,
        height: extent.height,
    }
}
