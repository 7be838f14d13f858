//! QSL card page renderer
//!
//! Draws one card per contact: own callsign, the correspondent's callsign,
//! and the QSO table with its data row.

use crate::config::CardLayoutConfig;
use crate::error::RenderError;
use crate::model::ContactRecord;

use super::helpers::canvas::Canvas;
use super::helpers::fonts::FontFiles;
use super::helpers::pdf_canvas::PdfCanvas;
use super::layout::{ComputedLayout, PlacedText};

/// Stroke width of the table's outer rectangle
const OUTER_LINE_WIDTH: f32 = 2.0;

/// Stroke width of the grid inside the table
const INNER_LINE_WIDTH: f32 = 1.0;

/// Document title written into the PDF metadata
const DOCUMENT_TITLE: &str = "QSL Cards";

/// Renders contacts onto any [`Canvas`]
pub struct QslCardRenderer<'a> {
    config: &'a CardLayoutConfig,
}

impl<'a> QslCardRenderer<'a> {
    pub fn new(config: &'a CardLayoutConfig) -> Self {
        Self { config }
    }

    /// Render every contact, in order, and finish the document
    pub fn render<C: Canvas>(
        &self,
        mut canvas: C,
        contacts: &[ContactRecord],
    ) -> Result<Vec<u8>, RenderError> {
        for contact in contacts {
            self.render_card(&mut canvas, contact)?;
        }
        log::info!("Rendered {} cards", canvas.page_count());
        canvas.finish()
    }

    /// Append one page for a contact
    pub fn render_card<C: Canvas>(
        &self,
        canvas: &mut C,
        contact: &ContactRecord,
    ) -> Result<(), RenderError> {
        let layout = ComputedLayout::compute(self.config, contact, &*canvas)?;

        canvas.start_page(self.config.card.width, self.config.card.height);

        place(canvas, &layout.own_callsign)?;
        place(canvas, &layout.peer_label)?;
        place(canvas, &layout.peer_callsign)?;

        self.draw_table(canvas, &layout)?;

        for text in layout.headers.iter().chain(&layout.fields) {
            place(canvas, text)?;
        }
        if let Some(ref remarks) = layout.remarks {
            place(canvas, remarks)?;
        }
        Ok(())
    }

    /// Outer rectangle, header divider, and column separators
    fn draw_table<C: Canvas>(&self, canvas: &mut C, layout: &ComputedLayout) -> Result<(), RenderError> {
        let table = &layout.table;

        canvas.set_line_width(OUTER_LINE_WIDTH)?;
        canvas.draw_rect(table.left(), table.top, table.width(), table.height())?;

        canvas.set_line_width(INNER_LINE_WIDTH)?;
        canvas.draw_line(table.left(), table.divider, table.right(), table.divider)?;
        for &x in table.inner_boundaries() {
            canvas.draw_line(x, table.top, x, table.bottom)?;
        }
        Ok(())
    }
}

/// Select the text's font and draw it at its anchor
fn place<C: Canvas>(canvas: &mut C, text: &PlacedText) -> Result<(), RenderError> {
    canvas.set_font(text.font, text.size)?;
    canvas.place_text(text.x, text.y, &text.text)
}

/// Generate the QSL card PDF for a list of contacts
///
/// Fonts are loaded from the paths in `config`. Nothing is written to disk;
/// the caller decides where the bytes go.
pub fn generate_pdf(
    config: &CardLayoutConfig,
    contacts: &[ContactRecord],
) -> Result<Vec<u8>, RenderError> {
    let fonts = FontFiles::load(&config.fonts)?;
    let canvas = PdfCanvas::new(DOCUMENT_TITLE, &fonts)?;
    QslCardRenderer::new(config).render(canvas, contacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::helpers::canvas::FontRole;
    use crate::render::helpers::canvas::testing::{
        sample_config, sample_contact, DrawOp, RecordingCanvas,
    };
    use pretty_assertions::assert_eq;

    fn contacts(n: usize) -> Vec<ContactRecord> {
        (0..n)
            .map(|i| {
                let mut c = sample_contact();
                c.id = i as u32 + 1;
                c.callsign = format!("JA{}XYZ", i % 10);
                c
            })
            .collect()
    }

    #[test]
    fn test_one_page_per_contact() {
        let config = sample_config();
        let renderer = QslCardRenderer::new(&config);
        for n in [1, 2, 7] {
            let mut canvas = RecordingCanvas::new();
            for contact in &contacts(n) {
                renderer.render_card(&mut canvas, contact).unwrap();
            }
            assert_eq!(canvas.page_count(), n);
        }
    }

    #[test]
    fn test_pages_follow_input_order() {
        let config = sample_config();
        let renderer = QslCardRenderer::new(&config);
        let mut canvas = RecordingCanvas::new();
        let list = contacts(3);
        for contact in &list {
            renderer.render_card(&mut canvas, contact).unwrap();
        }
        for (page, contact) in list.iter().enumerate() {
            assert!(canvas.find_text(page, &contact.callsign).is_some());
        }
    }

    #[test]
    fn test_render_finishes_document() {
        let config = sample_config();
        let bytes = QslCardRenderer::new(&config)
            .render(RecordingCanvas::new(), &contacts(4))
            .unwrap();
        assert_eq!(bytes, b"4 pages".to_vec());
    }

    #[test]
    fn test_page_size_and_grid() {
        let config = sample_config();
        let mut canvas = RecordingCanvas::new();
        QslCardRenderer::new(&config)
            .render_card(&mut canvas, &sample_contact())
            .unwrap();

        assert_eq!(
            canvas.ops[0],
            DrawOp::StartPage {
                width: 419.5,
                height: 283.5
            }
        );

        let ops = canvas.page_ops(0);
        let rects = ops.iter().filter(|op| matches!(op, DrawOp::Rect { .. })).count();
        let lines = ops.iter().filter(|op| matches!(op, DrawOp::Line { .. })).count();
        assert_eq!(rects, 1);
        // Header divider plus one separator between each pair of columns
        assert_eq!(lines, 1 + 6);

        let widths: Vec<f32> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::LineWidth(w) => Some(*w),
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![OUTER_LINE_WIDTH, INNER_LINE_WIDTH]);
    }

    #[test]
    fn test_scenario_text_placement() {
        let config = sample_config();
        let mut canvas = RecordingCanvas::new();
        QslCardRenderer::new(&config)
            .render_card(&mut canvas, &sample_contact())
            .unwrap();

        let (x, _) = canvas.find_text(0, "JJ1HGP").unwrap();
        let width = 6.0 * 0.6 * 36.0;
        assert!((x - (419.5 - width) / 2.0).abs() < 1e-3);

        let (_, y) = canvas.find_text(0, "2019").unwrap();
        assert_eq!(y, 180.0);

        // Every text op carries the font it was selected with
        for op in canvas.texts_on_page(0) {
            if let DrawOp::Text { text, font, .. } = op {
                let expected = if text == "JJ1HGP" || text == "JA1XYZ" {
                    FontRole::Callsign
                } else {
                    FontRole::Body
                };
                assert_eq!(*font, expected, "wrong font for {}", text);
            }
        }
    }

    #[test]
    fn test_measure_failure_aborts_before_page() {
        let config = sample_config();
        let mut canvas = RecordingCanvas::new();
        canvas.unsupported.push('#');
        let mut contact = sample_contact();
        contact.callsign = "JA1#".to_string();

        let err = QslCardRenderer::new(&config)
            .render_card(&mut canvas, &contact)
            .unwrap_err();
        assert!(matches!(err, RenderError::TextMeasure { .. }));
        assert_eq!(canvas.page_count(), 0);
    }
}
