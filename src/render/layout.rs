//! Card layout calculation
//!
//! Turns the configuration and one contact into absolute coordinates.
//! Everything is in points, origin at the top-left of the card.

use crate::config::CardLayoutConfig;
use crate::error::RenderError;
use crate::model::ContactRecord;

use super::helpers::canvas::{FontRole, TextMeasure};

/// Table column headers, left to right
pub const COLUMN_LABELS: [&str; 7] = ["DAY", "MONTH", "YEAR", "TIME", "RST", "BAND", "MODE"];

/// Sample data row used to position the table horizontally
pub const REFERENCE_ROW: &str = "00 01 2019 00:00 599 144 SSB";

/// Scale applied to the reference row width before centering it
pub const REFERENCE_SCALE: f32 = 1.3;

/// Each column is its header width times this factor
pub const COLUMN_PADDING: f32 = 1.2;

/// Space above and below text inside a table row
pub const CELL_PADDING: f32 = 2.0;

/// Baseline of the own-station callsign
pub const OWN_CALLSIGN_BASELINE: f32 = 60.0;

/// Baseline of the correspondent's callsign line
pub const PEER_CALLSIGN_BASELINE: f32 = 118.0;

/// Correspondent callsign size relative to the callsign font size
pub const PEER_CALLSIGN_SCALE: f32 = 0.6;

/// Label printed in front of the correspondent's callsign
pub const PEER_LABEL: &str = "To Radio";

/// Left edge of [`PEER_LABEL`]
pub const PEER_LABEL_X: f32 = 30.0;

/// A string with its font and anchor (left edge, baseline)
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub font: FontRole,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

/// Grid geometry of the QSO table
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Column edges, left to right; one more than the number of columns
    pub boundaries: Vec<f32>,
    pub top: f32,
    /// Line between the header row and the data row
    pub divider: f32,
    pub bottom: f32,
    pub header_baseline: f32,
    pub data_baseline: f32,
}

impl TableLayout {
    /// Compute the table grid for a card width and body font size
    pub fn compute<M: TextMeasure + ?Sized>(
        measurer: &M,
        card_width: f32,
        table_top: f32,
        font_size: f32,
    ) -> Result<Self, RenderError> {
        let boundaries = column_boundaries(measurer, card_width, font_size, &COLUMN_LABELS)?;

        let row_height = font_size + 2.0 * CELL_PADDING;
        let divider = table_top + row_height;

        Ok(Self {
            boundaries,
            top: table_top,
            divider,
            bottom: divider + row_height,
            header_baseline: row_baseline(table_top, font_size),
            data_baseline: row_baseline(divider, font_size),
        })
    }

    pub fn left(&self) -> f32 {
        self.boundaries.first().copied().unwrap_or(0.0)
    }

    pub fn right(&self) -> f32 {
        self.boundaries.last().copied().unwrap_or(0.0)
    }

    pub fn width(&self) -> f32 {
        self.right() - self.left()
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn column_count(&self) -> usize {
        self.boundaries.len().saturating_sub(1)
    }

    /// Interior column edges (excluding the outer left and right)
    pub fn inner_boundaries(&self) -> &[f32] {
        match self.boundaries.len() {
            0..=2 => &[],
            n => &self.boundaries[1..n - 1],
        }
    }

    /// Left edge that centers text of `text_width` in column `index`
    pub fn centered_in_column(&self, index: usize, text_width: f32) -> f32 {
        let left = self.boundaries[index];
        let right = self.boundaries[index + 1];
        left + (right - left - text_width) / 2.0
    }
}

/// Baseline of text inside a row starting at `row_top`
fn row_baseline(row_top: f32, font_size: f32) -> f32 {
    row_top + font_size - CELL_PADDING
}

/// Left edge that centers text of `text_width` on a page of `page_width`
pub fn centered_x(page_width: f32, text_width: f32) -> f32 {
    (page_width - text_width) / 2.0
}

/// Column edges for the given header labels
///
/// The first edge centers [`REFERENCE_ROW`] (scaled by [`REFERENCE_SCALE`])
/// on the card; each following edge adds the padded width of one label.
pub fn column_boundaries<M: TextMeasure + ?Sized>(
    measurer: &M,
    card_width: f32,
    font_size: f32,
    labels: &[&str],
) -> Result<Vec<f32>, RenderError> {
    let reference = measurer.text_width(FontRole::Body, REFERENCE_ROW, font_size)?;
    let mut x = centered_x(card_width, reference * REFERENCE_SCALE);

    let mut boundaries = Vec::with_capacity(labels.len() + 1);
    boundaries.push(x);
    for label in labels {
        x += measurer.text_width(FontRole::Body, label, font_size)? * COLUMN_PADDING;
        boundaries.push(x);
    }
    Ok(boundaries)
}

/// Every coordinate needed to draw one card
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedLayout {
    pub own_callsign: PlacedText,
    pub peer_label: PlacedText,
    pub peer_callsign: PlacedText,
    pub table: TableLayout,
    /// Header labels, one per column
    pub headers: Vec<PlacedText>,
    /// Contact data, one per column
    pub fields: Vec<PlacedText>,
    pub remarks: Option<PlacedText>,
}

impl ComputedLayout {
    pub fn compute<M: TextMeasure + ?Sized>(
        config: &CardLayoutConfig,
        contact: &ContactRecord,
        measurer: &M,
    ) -> Result<Self, RenderError> {
        let width = config.card.width;
        let callsign_size = config.fonts.callsign.size;
        let body_size = config.fonts.body.size;

        let centered = |text: &str, font: FontRole, size: f32, y: f32| {
            let text_width = measurer.text_width(font, text, size)?;
            Ok::<_, RenderError>(PlacedText {
                text: text.to_string(),
                font,
                size,
                x: centered_x(width, text_width),
                y,
            })
        };

        let own_callsign = centered(
            &config.station.callsign,
            FontRole::Callsign,
            callsign_size,
            OWN_CALLSIGN_BASELINE,
        )?;

        let peer_label = PlacedText {
            text: PEER_LABEL.to_string(),
            font: FontRole::Body,
            size: body_size,
            x: PEER_LABEL_X,
            y: PEER_CALLSIGN_BASELINE,
        };

        let peer_callsign = centered(
            &contact.callsign,
            FontRole::Callsign,
            callsign_size * PEER_CALLSIGN_SCALE,
            PEER_CALLSIGN_BASELINE,
        )?;

        let table = TableLayout::compute(measurer, width, config.table_top, body_size)?;

        let in_row = |texts: &[&str], baseline: f32| {
            texts
                .iter()
                .enumerate()
                .map(|(i, text)| {
                    let text_width = measurer.text_width(FontRole::Body, text, body_size)?;
                    Ok(PlacedText {
                        text: text.to_string(),
                        font: FontRole::Body,
                        size: body_size,
                        x: table.centered_in_column(i, text_width),
                        y: baseline,
                    })
                })
                .collect::<Result<Vec<_>, RenderError>>()
        };

        let headers = in_row(&COLUMN_LABELS, table.header_baseline)?;
        let fields = in_row(&contact.table_values(), table.data_baseline)?;

        let remarks = match config.remarks.as_deref() {
            Some(text) if !text.is_empty() => Some(centered(
                text,
                FontRole::Body,
                body_size,
                table.bottom + 2.0 * body_size,
            )?),
            _ => None,
        };

        log::debug!(
            "Contact {}: callsign at ({:.1}, {:.1}), columns {:?}",
            contact.id,
            peer_callsign.x,
            peer_callsign.y,
            table.boundaries
        );

        Ok(Self {
            own_callsign,
            peer_label,
            peer_callsign,
            table,
            headers,
            fields,
            remarks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::helpers::canvas::testing::{
        sample_config, sample_contact, RecordingCanvas, BODY_ADVANCE, CALLSIGN_ADVANCE,
    };

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_boundaries_strictly_increase() {
        let measurer = RecordingCanvas::new();
        for size in [0.5, 8.0, 14.0, 30.0] {
            for width in [100.0, 419.5, 1000.0] {
                let bounds = column_boundaries(&measurer, width, size, &COLUMN_LABELS).unwrap();
                assert_eq!(bounds.len(), COLUMN_LABELS.len() + 1);
                assert!(
                    bounds.windows(2).all(|w| w[1] > w[0]),
                    "not increasing at size {} width {}: {:?}",
                    size,
                    width,
                    bounds
                );
            }
        }
    }

    #[test]
    fn test_first_boundary_centers_reference_row() {
        let measurer = RecordingCanvas::new();
        let bounds = column_boundaries(&measurer, 419.5, 14.0, &COLUMN_LABELS).unwrap();
        let reference = REFERENCE_ROW.len() as f32 * BODY_ADVANCE * 14.0 * REFERENCE_SCALE;
        assert!(approx(bounds[0], (419.5 - reference) / 2.0));
        // DAY is three characters wide
        assert!(approx(bounds[1] - bounds[0], 3.0 * BODY_ADVANCE * 14.0 * COLUMN_PADDING));
    }

    #[test]
    fn test_scenario_single_card() {
        let measurer = RecordingCanvas::new();
        let layout =
            ComputedLayout::compute(&sample_config(), &sample_contact(), &measurer).unwrap();

        // Correspondent callsign centered
        let callsign_width = 6.0 * CALLSIGN_ADVANCE * 36.0 * PEER_CALLSIGN_SCALE;
        assert!(approx(layout.peer_callsign.x, (419.5 - callsign_width) / 2.0));

        // Six date/time/report fields on row y = 180 at increasing x
        let first_six = &layout.fields[..6];
        let texts: Vec<&str> = first_six.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["01", "01", "2019", "00:00", "599", "144"]);
        assert!(first_six.iter().all(|f| approx(f.y, 180.0)));
        assert!(first_six.windows(2).all(|w| w[1].x > w[0].x));
        assert_eq!(layout.fields[6].text, "SSB");
    }

    #[test]
    fn test_rows_scale_with_font_size() {
        let measurer = RecordingCanvas::new();
        let table = TableLayout::compute(&measurer, 419.5, 150.0, 14.0).unwrap();
        assert!(approx(table.header_baseline, 162.0));
        assert!(approx(table.divider, 168.0));
        assert!(approx(table.data_baseline, 180.0));
        assert!(approx(table.bottom, 186.0));

        let larger = TableLayout::compute(&measurer, 419.5, 150.0, 20.0).unwrap();
        assert!(larger.data_baseline - larger.header_baseline > table.data_baseline - table.header_baseline);
        assert!(approx(larger.top, 150.0));
    }

    #[test]
    fn test_own_callsign_centered() {
        let measurer = RecordingCanvas::new();
        let mut config = sample_config();
        for callsign in ["JJ1HGP", "W1AW", "VK2/JJ1HGP/P"] {
            config.station.callsign = callsign.to_string();
            let layout = ComputedLayout::compute(&config, &sample_contact(), &measurer).unwrap();
            let width = measurer
                .text_width(FontRole::Callsign, callsign, config.fonts.callsign.size)
                .unwrap();
            assert!(approx(layout.own_callsign.x, (config.card.width - width) / 2.0));
            assert!(approx(layout.own_callsign.y, OWN_CALLSIGN_BASELINE));
        }
    }

    #[test]
    fn test_callsign_anchor_depends_only_on_width() {
        let measurer = RecordingCanvas::new();
        let config = sample_config();
        let first = sample_contact();
        let mut same_width = sample_contact();
        same_width.callsign = "JA1ABC".to_string();
        let mut wider = sample_contact();
        wider.callsign = "JA1XYZ/1".to_string();

        let a = ComputedLayout::compute(&config, &first, &measurer).unwrap();
        let b = ComputedLayout::compute(&config, &same_width, &measurer).unwrap();
        let c = ComputedLayout::compute(&config, &wider, &measurer).unwrap();

        assert_eq!(a.peer_callsign.y, b.peer_callsign.y);
        assert_eq!(a.peer_callsign.y, c.peer_callsign.y);
        assert_eq!(a.peer_callsign.x, b.peer_callsign.x);
        assert_ne!(a.peer_callsign.x, c.peer_callsign.x);
        assert_eq!(a.table, c.table);
    }

    #[test]
    fn test_remarks_below_table() {
        let measurer = RecordingCanvas::new();
        let mut config = sample_config();
        assert!(ComputedLayout::compute(&config, &sample_contact(), &measurer)
            .unwrap()
            .remarks
            .is_none());

        config.remarks = Some("PSE QSL TNX".to_string());
        let layout = ComputedLayout::compute(&config, &sample_contact(), &measurer).unwrap();
        let remarks = layout.remarks.unwrap();
        assert!(remarks.y > layout.table.bottom);
        assert_eq!(remarks.font, FontRole::Body);
    }

    #[test]
    fn test_measurement_failure_propagates() {
        let mut measurer = RecordingCanvas::new();
        measurer.unsupported.push('Ø');
        let mut contact = sample_contact();
        contact.callsign = "OZ/JØABC".to_string();
        let err = ComputedLayout::compute(&sample_config(), &contact, &measurer).unwrap_err();
        assert!(matches!(err, RenderError::TextMeasure { .. }));
    }

    #[test]
    fn test_inner_boundaries() {
        let measurer = RecordingCanvas::new();
        let table = TableLayout::compute(&measurer, 419.5, 150.0, 14.0).unwrap();
        assert_eq!(table.column_count(), COLUMN_LABELS.len());
        assert_eq!(table.inner_boundaries().len(), COLUMN_LABELS.len() - 1);
        assert!(approx(table.width(), table.right() - table.left()));
    }
}
