use std::fs;
use std::path::{Path, PathBuf};

use printpdf::{FontId, ParsedFont, PdfDocument};

use crate::config::{FontRegion, Fonts};
use crate::error::RenderError;

use super::canvas::FontRole;
use super::text_metrics::TtfMeasurer;

/// Raw bytes of a TTF read from disk
pub struct FontFile {
    pub name: String,
    pub path: PathBuf,
    bytes: Vec<u8>,
}

impl FontFile {
    /// Read a font file and check it can be shaped
    pub fn read(region: &FontRegion) -> Result<Self, RenderError> {
        let bytes = fs::read(&region.path).map_err(|e| {
            RenderError::FontLoad(format!(
                "{} ({}): {}",
                region.name,
                region.path.display(),
                e
            ))
        })?;

        if TtfMeasurer::new(&bytes).is_none() {
            return Err(RenderError::FontLoad(format!(
                "{} ({}): not a usable TrueType font",
                region.name,
                region.path.display()
            )));
        }

        log::debug!("Read font {} from {}", region.name, region.path.display());

        Ok(Self {
            name: region.name.clone(),
            path: region.path.clone(),
            bytes,
        })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Distinct paths among `[callsign, body]`, and the index each role uses
fn distinct_paths<'p>(paths: [&'p Path; 2]) -> (Vec<&'p Path>, [usize; 2]) {
    let mut distinct: Vec<&Path> = Vec::new();
    let mut indices = [0; 2];
    for (slot, path) in paths.into_iter().enumerate() {
        indices[slot] = match distinct.iter().position(|p| *p == path) {
            Some(i) => i,
            None => {
                distinct.push(path);
                distinct.len() - 1
            }
        };
    }
    (distinct, indices)
}

/// The font files a card needs, one per distinct path
pub struct FontFiles {
    files: Vec<FontFile>,
    callsign: usize,
    body: usize,
}

impl FontFiles {
    /// Read the configured fonts; a file used by both regions is read once
    pub fn load(fonts: &Fonts) -> Result<Self, RenderError> {
        let (paths, [callsign, body]) =
            distinct_paths([fonts.callsign.path.as_path(), fonts.body.path.as_path()]);
        let files = paths
            .into_iter()
            .map(|path| {
                let region = if path == fonts.callsign.path.as_path() {
                    &fonts.callsign
                } else {
                    &fonts.body
                };
                FontFile::read(region)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            files,
            callsign,
            body,
        })
    }
}

/// A font registered with the document, with its shaping face parsed once
pub struct LoadedFont<'a> {
    pub name: &'a str,
    pub id: FontId,
    measurer: TtfMeasurer<'a>,
}

impl<'a> LoadedFont<'a> {
    /// Parse a font file and add it to the document
    pub fn load(doc: &mut PdfDocument, file: &'a FontFile) -> Result<Self, RenderError> {
        let measurer = TtfMeasurer::new(file.bytes()).ok_or_else(|| {
            RenderError::FontLoad(format!("Failed to parse {}", file.path.display()))
        })?;

        let mut warnings = Vec::new();
        let parsed = ParsedFont::from_bytes(file.bytes(), 0, &mut warnings).ok_or_else(|| {
            RenderError::FontLoad(format!("Failed to parse {}", file.path.display()))
        })?;
        let id = doc.add_font(&parsed);

        log::debug!("Embedded font {} from {}", file.name, file.path.display());

        Ok(Self {
            name: &file.name,
            id,
            measurer,
        })
    }

    pub fn measurer(&self) -> &TtfMeasurer<'a> {
        &self.measurer
    }
}

/// Font manager for PDF rendering
///
/// Holds one embedded font per distinct file. Both roles share an entry
/// when they are configured with the same path.
pub struct FontManager<'a> {
    fonts: Vec<LoadedFont<'a>>,
    callsign: usize,
    body: usize,
}

impl<'a> FontManager<'a> {
    /// Embed every font file into the document
    pub fn new(doc: &mut PdfDocument, files: &'a FontFiles) -> Result<Self, RenderError> {
        let fonts = files
            .files
            .iter()
            .map(|file| LoadedFont::load(doc, file))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            fonts,
            callsign: files.callsign,
            body: files.body,
        })
    }

    /// Get the font for a text role
    pub fn get(&self, role: FontRole) -> &LoadedFont<'a> {
        match role {
            FontRole::Callsign => &self.fonts[self.callsign],
            FontRole::Body => &self.fonts[self.body],
        }
    }

    /// Number of fonts embedded in the document
    pub fn embedded(&self) -> usize {
        self.fonts.len()
    }
}
