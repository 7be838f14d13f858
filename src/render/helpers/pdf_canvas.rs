//! printpdf-backed [`Canvas`]

use printpdf::{FontId, Mm, PdfDocument, PdfPage, PdfSaveOptions, Pt};

use crate::error::RenderError;

use super::canvas::{Canvas, FontRole, TextMeasure};
use super::compress::compress_or_keep;
use super::fonts::{FontFiles, FontManager};
use super::layer::LayerBuilder;

/// One page being drawn, taking top-left coordinates
struct PageInProgress {
    width: f32,
    height: f32,
    layer: LayerBuilder,
}

impl PageInProgress {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            layer: LayerBuilder::new(),
        }
    }

    /// Flip a top-left y into PDF space
    fn y(&self, y: f32) -> Pt {
        Pt(self.height - y)
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        let (bottom, top) = (self.y(y + height), self.y(y));
        self.layer.add_rect(Pt(x), bottom, Pt(x + width), top);
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let (y1, y2) = (self.y(y1), self.y(y2));
        self.layer.add_line(Pt(x1), y1, Pt(x2), y2);
    }

    fn text(&mut self, x: f32, y: f32, text: &str, size: f32, font: &FontId) {
        let baseline = self.y(y);
        self.layer.use_text(text, size, Pt(x), baseline, font);
    }

    fn into_page(self) -> PdfPage {
        let width: Mm = Pt(self.width).into();
        let height: Mm = Pt(self.height).into();
        PdfPage::new(width, height, self.layer.into_ops())
    }
}

/// Finished pages plus the one currently open
#[derive(Default)]
struct PageStack {
    done: Vec<PdfPage>,
    current: Option<PageInProgress>,
}

impl PageStack {
    fn start(&mut self, width: f32, height: f32) {
        if let Some(page) = self.current.take() {
            self.done.push(page.into_page());
        }
        self.current = Some(PageInProgress::new(width, height));
    }

    fn current(&mut self) -> Result<&mut PageInProgress, RenderError> {
        self.current.as_mut().ok_or(RenderError::NoPage)
    }

    fn len(&self) -> usize {
        self.done.len() + usize::from(self.current.is_some())
    }

    /// Close the open page; a document needs at least one
    fn into_pages(mut self) -> Result<Vec<PdfPage>, RenderError> {
        if let Some(page) = self.current.take() {
            self.done.push(page.into_page());
        }
        if self.done.is_empty() {
            return Err(RenderError::PdfGeneration(
                "document has no pages".to_string(),
            ));
        }
        Ok(self.done)
    }
}

/// Canvas that builds a PDF document in memory
pub struct PdfCanvas<'a> {
    doc: PdfDocument,
    fonts: FontManager<'a>,
    pages: PageStack,
    font: Option<(FontRole, f32)>,
}

impl<'a> PdfCanvas<'a> {
    /// Create a document and embed the font files into it
    pub fn new(title: &str, files: &'a FontFiles) -> Result<Self, RenderError> {
        let mut doc = PdfDocument::new(title);
        let fonts = FontManager::new(&mut doc, files)?;
        log::debug!("Embedded {} font(s)", fonts.embedded());
        Ok(Self {
            doc,
            fonts,
            pages: PageStack::default(),
            font: None,
        })
    }
}

impl TextMeasure for PdfCanvas<'_> {
    fn text_width(&self, font: FontRole, text: &str, font_size: f32) -> Result<f32, RenderError> {
        self.fonts.get(font).measurer().text_width(text, font_size)
    }
}

impl Canvas for PdfCanvas<'_> {
    fn start_page(&mut self, width: f32, height: f32) {
        self.pages.start(width, height);
    }

    fn set_font(&mut self, font: FontRole, font_size: f32) -> Result<(), RenderError> {
        self.font = Some((font, font_size));
        Ok(())
    }

    fn set_line_width(&mut self, width: f32) -> Result<(), RenderError> {
        self.pages.current()?.layer.set_outline_thickness(width);
        Ok(())
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> Result<(), RenderError> {
        self.pages.current()?.rect(x, y, width, height);
        Ok(())
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Result<(), RenderError> {
        self.pages.current()?.line(x1, y1, x2, y2);
        Ok(())
    }

    fn place_text(&mut self, x: f32, y: f32, text: &str) -> Result<(), RenderError> {
        let page = self.pages.current()?;
        let (role, size) = self.font.ok_or(RenderError::NoFontSelected)?;
        page.text(x, y, text, size, &self.fonts.get(role).id);
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn finish(mut self) -> Result<Vec<u8>, RenderError> {
        let pages = self.pages.into_pages()?;
        let page_count = pages.len();
        self.doc.with_pages(pages);

        let mut warnings = Vec::new();
        let bytes = self.doc.save(&PdfSaveOptions::default(), &mut warnings);
        log::debug!(
            "Saved {} pages ({} bytes, {} warnings)",
            page_count,
            bytes.len(),
            warnings.len()
        );

        Ok(compress_or_keep(bytes))
    }
}
