//! Text measurement using rustybuzz for accurate font metrics
//!
//! Widths come from shaping the string with the same TTF that gets embedded
//! in the PDF, so centering and column sizing match the printed output.

use rustybuzz::{Face, UnicodeBuffer};

use crate::error::RenderError;

/// Text measurement helper bound to one parsed font face
pub struct TtfMeasurer<'a> {
    face: Face<'a>,
}

impl<'a> TtfMeasurer<'a> {
    /// Create a text measurer from font bytes
    pub fn new(font_bytes: &'a [u8]) -> Option<Self> {
        let face = Face::from_slice(font_bytes, 0)?;
        Some(Self { face })
    }

    /// First character the font has no glyph for, ignoring control characters
    pub fn missing_glyph(&self, text: &str) -> Option<char> {
        text.chars()
            .filter(|c| !c.is_control())
            .find(|&c| self.face.glyph_index(c).is_none())
    }

    /// Measure the width of text in points, without coverage checks
    pub fn measure_width_pt(&self, text: &str, font_size: f32) -> f32 {
        let mut buffer = UnicodeBuffer::new();
        buffer.push_str(text);

        let output = rustybuzz::shape(&self.face, &[], buffer);

        let units_per_em = self.face.units_per_em() as f32;
        let scale = font_size / units_per_em;

        let total_advance: i32 = output
            .glyph_positions()
            .iter()
            .map(|pos| pos.x_advance)
            .sum();

        total_advance as f32 * scale
    }

    /// Measure the width of text in points, failing on uncovered characters
    pub fn text_width(&self, text: &str, font_size: f32) -> Result<f32, RenderError> {
        if let Some(c) = self.missing_glyph(text) {
            return Err(RenderError::TextMeasure {
                text: text.to_string(),
                reason: format!("font has no glyph for {:?}", c),
            });
        }
        Ok(self.measure_width_pt(text, font_size))
    }
}
