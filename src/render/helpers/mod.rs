//! Helper utilities for PDF rendering

pub mod canvas;
pub mod compress;
pub mod fonts;
pub mod layer;
pub mod pdf_canvas;
pub mod text_metrics;

pub use canvas::{Canvas, FontRole, TextMeasure};
pub use compress::compress_pdf;
pub use fonts::{FontFile, FontFiles, FontManager, LoadedFont};
pub use layer::LayerBuilder;
pub use pdf_canvas::PdfCanvas;
pub use text_metrics::TtfMeasurer;
