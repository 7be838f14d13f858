//! Operation collector for printpdf pages
//!
//! Drawing calls append `Op`s to a list that becomes one `PdfPage`.
//! Coordinates here are already in PDF space (origin bottom-left).

use printpdf::{
    FontId, Line, LinePoint, Op, PaintMode, PdfFontHandle, Point, Polygon, PolygonRing, Pt,
    TextItem, WindingOrder,
};

/// A builder that collects PDF operations for a single page
#[derive(Default)]
pub struct LayerBuilder {
    ops: Vec<Op>,
}

fn point(x: Pt, y: Pt) -> LinePoint {
    LinePoint {
        p: Point { x, y },
        bezier: false,
    }
}

impl LayerBuilder {
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Get the collected operations
    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }

    /// Get a reference to the operations (for inspection)
    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    /// Set the outline thickness
    pub fn set_outline_thickness(&mut self, thickness: f32) {
        self.ops.push(Op::SetOutlineThickness { pt: Pt(thickness) });
    }

    /// Draw text with its baseline starting at (x, y)
    pub fn use_text<S: Into<String>>(&mut self, text: S, font_size: f32, x: Pt, y: Pt, font: &FontId) {
        let text_str = text.into();
        if text_str.is_empty() {
            return;
        }

        self.ops.push(Op::StartTextSection);
        self.ops.push(Op::SetTextCursor {
            pos: Point { x, y },
        });
        self.ops.push(Op::SetFont {
            size: Pt(font_size),
            font: PdfFontHandle::External(font.clone()),
        });
        self.ops.push(Op::ShowText {
            items: vec![TextItem::Text(text_str)],
        });
        self.ops.push(Op::EndTextSection);
    }

    /// Stroke a rectangle given lower-left and upper-right corners
    pub fn add_rect(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) {
        let points = vec![
            point(x1, y1),
            point(x2, y1),
            point(x2, y2),
            point(x1, y2),
        ];

        let polygon = Polygon {
            rings: vec![PolygonRing { points }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        };

        self.ops.push(Op::DrawPolygon { polygon });
    }

    /// Draw a line from (x1, y1) to (x2, y2)
    pub fn add_line(&mut self, x1: Pt, y1: Pt, x2: Pt, y2: Pt) {
        let line = Line {
            points: vec![point(x1, y1), point(x2, y2)],
            is_closed: false,
        };
        self.ops.push(Op::DrawLine { line });
    }
}
