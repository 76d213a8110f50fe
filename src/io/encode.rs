//! Data-URI encoding for rendered canvases

use crate::io::error::{Result, SynthesisError};
use crate::render::canvas::Canvas;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageFormat;
use std::io::Cursor;

/// Encode a canvas as a `data:image/png;base64,...` string
///
/// # Errors
///
/// Returns an error if PNG encoding fails (zero-sized canvases included).
pub fn png_data_uri(canvas: &Canvas) -> Result<String> {
    let mut bytes = Vec::new();
    canvas
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|source| SynthesisError::ImageEncode { source })?;
    Ok(format!(
        "data:image/png;base64,{}",
        STANDARD.encode(&bytes)
    ))
}

/// Minimal flat-color SVG placeholder at exact pixel dimensions
pub fn svg_placeholder(width: u32, height: u32, fill: &str) -> String {
    format!(
        r#"data:image/svg+xml;utf8,<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" fill="{fill}"/>"#
    )
}
