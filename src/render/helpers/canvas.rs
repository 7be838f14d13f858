//! Drawing surface abstraction
//!
//! The layout calculator and card renderer only talk to a [`Canvas`], so they
//! can run against the printpdf backend or a recording fake in tests.
//!
//! Coordinates are in points with the origin at the top-left corner of the
//! page and y growing downward.

use crate::error::RenderError;

/// Which configured font a piece of text uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    /// Large callsign font
    Callsign,
    /// Table labels, QSO data and remarks
    Body,
}

/// Trait for text measurement operations
pub trait TextMeasure {
    /// Rendered width of `text` in points at `font_size`
    fn text_width(&self, font: FontRole, text: &str, font_size: f32) -> Result<f32, RenderError>;
}

/// A page-oriented drawing surface
pub trait Canvas: TextMeasure {
    /// Begin a new page; all following drawing goes onto it
    fn start_page(&mut self, width: f32, height: f32);

    /// Select the font for subsequent `place_text` calls
    fn set_font(&mut self, font: FontRole, font_size: f32) -> Result<(), RenderError>;

    /// Set the stroke width for rectangles and lines
    fn set_line_width(&mut self, width: f32) -> Result<(), RenderError>;

    /// Stroke a rectangle given its upper-left corner
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<(), RenderError>;

    /// Stroke a straight line
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError>;

    /// Place text with its left edge at `x` and baseline at `y`
    fn place_text(&mut self, x: f32, y: f32, text: &str) -> Result<(), RenderError>;

    /// Number of pages started so far
    fn page_count(&self) -> usize;

    /// Finish the document and return its bytes
    fn finish(self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized;
}
