//! Symbol rendering: SVG vector path and raster image.

use image::{Rgb, RgbImage};

use crate::qr::placer::{QUIET_ZONE, SYMBOL_SIZE, Symbol};

/// Canvas side length in pixels for a given scale.
pub fn canvas_side(scale: usize) -> usize {
    (SYMBOL_SIZE + QUIET_ZONE * 2) * scale
}

/// Render the symbol as an SVG document.
///
/// Each dark module becomes an axis-aligned `scale` x `scale` square in one
/// filled path, offset by the 4-module quiet zone.
pub fn to_svg(symbol: &Symbol, scale: usize) -> String {
    let dim = canvas_side(scale);
    let mut path = String::new();
    for y in 0..SYMBOL_SIZE {
        for x in 0..SYMBOL_SIZE {
            if !symbol.is_dark(x, y) {
                continue;
            }
            let rx = (x + QUIET_ZONE) * scale;
            let ry = (y + QUIET_ZONE) * scale;
            path.push_str(&format!("M{rx} {ry}h{scale}v{scale}h-{scale}Z"));
        }
    }
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {dim} {dim}\" \
         width=\"{dim}\" height=\"{dim}\" shape-rendering=\"crispEdges\">\n  \
         <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n  \
         <path d=\"{path}\" fill=\"black\"/>\n</svg>"
    )
}

/// Render the symbol as an RGB image with the same geometry as the SVG.
pub fn to_image(symbol: &Symbol, scale: usize) -> RgbImage {
    let dim = canvas_side(scale) as u32;
    let mut img = RgbImage::from_pixel(dim, dim, Rgb([255, 255, 255]));
    for y in 0..SYMBOL_SIZE {
        for x in 0..SYMBOL_SIZE {
            if !symbol.is_dark(x, y) {
                continue;
            }
            let px = ((x + QUIET_ZONE) * scale) as u32;
            let py = ((y + QUIET_ZONE) * scale) as u32;
            for dy in 0..scale as u32 {
                for dx in 0..scale as u32 {
                    img.put_pixel(px + dx, py + dy, Rgb([0, 0, 0]));
                }
            }
        }
    }
    img
}
