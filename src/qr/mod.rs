//! QR symbol encoder, version 1, EC level L, mask pattern 0.
//!
//! A single-pass, deterministic pipeline over short ASCII text: alphanumeric
//! packing, Reed-Solomon error correction over GF(256), BCH-coded format
//! information, and exact module placement. Re-invoking with identical
//! arguments produces identical output.

pub mod alphanumeric;
pub mod format;
pub mod gf256;
pub mod placer;
pub mod reed_solomon;
pub mod render;

pub use placer::{QUIET_ZONE, SYMBOL_SIZE, Symbol};

use crate::error::QrError;

/// Encode text into a finished 21x21 symbol.
pub fn encode(text: &str) -> Result<Symbol, QrError> {
    let data = alphanumeric::pack(text)?;
    let codewords = reed_solomon::codewords(&data);
    Ok(placer::place(&codewords))
}

/// Encode text and render it as an SVG document.
pub fn to_svg(text: &str, scale: usize) -> Result<String, QrError> {
    Ok(render::to_svg(&encode(text)?, scale))
}

/// Encode text and render it as an RGB image.
pub fn to_image(text: &str, scale: usize) -> Result<image::RgbImage, QrError> {
    Ok(render::to_image(&encode(text)?, scale))
}
