//! PDF compression helper
//!
//! Uses lopdf to compress PDF streams after printpdf generates uncompressed output.

use std::io::Cursor;

use crate::error::RenderError;

/// Compress PDF streams to reduce file size.
pub fn compress_pdf(uncompressed: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut doc = lopdf::Document::load_mem(uncompressed).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to parse PDF for compression: {}", e))
    })?;

    doc.compress();

    let mut output = Cursor::new(Vec::new());
    doc.save_to(&mut output).map_err(|e| {
        RenderError::PdfGeneration(format!("Failed to save compressed PDF: {}", e))
    })?;

    Ok(output.into_inner())
}

/// Compress if possible, otherwise keep the original bytes
pub fn compress_or_keep(bytes: Vec<u8>) -> Vec<u8> {
    match compress_pdf(&bytes) {
        Ok(compressed) => compressed,
        Err(e) => {
            log::warn!("{}; writing uncompressed PDF", e);
            bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_kept() {
        let bytes = b"not a pdf".to_vec();
        assert!(compress_pdf(&bytes).is_err());
        assert_eq!(compress_or_keep(bytes.clone()), bytes);
    }
}
