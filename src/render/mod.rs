//! PDF rendering modules

pub mod card;
pub mod helpers;
pub mod layout;

pub use card::{generate_pdf, QslCardRenderer};
pub use helpers::{Canvas, FontFiles, FontRole, PdfCanvas, TextMeasure};
pub use layout::{ComputedLayout, PlacedText, TableLayout};
