//! Module placement for a 21x21 version 1 symbol.
//!
//! Function modules (finders, timing, dark module, format strips) are fixed
//! before any data bit is placed and are never overwritten. Data codewords
//! stream through the remaining modules in right-to-left column pairs under
//! mask pattern 0.

use crate::models::ModuleGrid;
use crate::qr::format::{FORMAT_COORDS_EDGES, FORMAT_COORDS_TOP_LEFT, format_bits};
use crate::qr::reed_solomon::TOTAL_CODEWORDS;

/// Symbol side length in modules (version 1).
pub const SYMBOL_SIZE: usize = 21;
/// Quiet zone width in modules, each side.
pub const QUIET_ZONE: usize = 4;

/// A finished 21x21 symbol: a dark/light plane plus the parallel
/// function-module classification. Built fresh per render, never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    dark: ModuleGrid,
    function: ModuleGrid,
}

impl Symbol {
    /// Whether the module at (x, y) is dark.
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.dark.get(x, y)
    }

    /// Whether the module at (x, y) is a function module.
    pub fn is_function(&self, x: usize, y: usize) -> bool {
        self.function.get(x, y)
    }

    /// Side length in modules.
    pub fn size(&self) -> usize {
        SYMBOL_SIZE
    }

    /// Number of dark modules.
    pub fn dark_count(&self) -> usize {
        self.dark.count_set()
    }
}

/// Assemble the symbol from the 26 interleaved codewords.
pub fn place(codewords: &[u8; TOTAL_CODEWORDS]) -> Symbol {
    let mut dark = ModuleGrid::new(SYMBOL_SIZE);
    let mut function = ModuleGrid::new(SYMBOL_SIZE);

    place_finder(&mut dark, &mut function, 0, 0);
    place_finder(&mut dark, &mut function, SYMBOL_SIZE - 7, 0);
    place_finder(&mut dark, &mut function, 0, SYMBOL_SIZE - 7);
    place_timing(&mut dark, &mut function);

    // Dark module at (x = 8, y = 4 * version + 9).
    dark.set(8, 13, true);
    function.set(8, 13, true);

    // Reserve both format strips before data placement.
    for &(y, x) in FORMAT_COORDS_TOP_LEFT.iter().chain(&FORMAT_COORDS_EDGES) {
        function.set(x, y, true);
    }

    place_data(&mut dark, &function, codewords);
    place_format(&mut dark);

    Symbol { dark, function }
}

/// 7x7 finder pattern with its one-module separator ring, clipped to bounds.
fn place_finder(dark: &mut ModuleGrid, function: &mut ModuleGrid, x: usize, y: usize) {
    for dy in -1i32..=7 {
        for dx in -1i32..=7 {
            let xx = x as i32 + dx;
            let yy = y as i32 + dy;
            if xx < 0 || yy < 0 || xx >= SYMBOL_SIZE as i32 || yy >= SYMBOL_SIZE as i32 {
                continue;
            }
            let on = ((0..=6).contains(&dx) && (dy == 0 || dy == 6))
                || ((0..=6).contains(&dy) && (dx == 0 || dx == 6))
                || ((2..=4).contains(&dx) && (2..=4).contains(&dy));
            dark.set(xx as usize, yy as usize, on);
            function.set(xx as usize, yy as usize, true);
        }
    }
}

/// Timing lines in row 6 and column 6, alternating starting dark.
fn place_timing(dark: &mut ModuleGrid, function: &mut ModuleGrid) {
    for i in 8..=SYMBOL_SIZE - 9 {
        let on = i % 2 == 0;
        dark.set(i, 6, on);
        dark.set(6, i, on);
        function.set(i, 6, true);
        function.set(6, i, true);
    }
}

/// Stream codeword bits (MSB first) through the data modules.
///
/// Column pairs run right to left, alternating bottom-up / top-down and
/// skipping the timing column; each placed bit is inverted where mask
/// pattern 0 applies (`(x + y) % 2 == 0`).
fn place_data(dark: &mut ModuleGrid, function: &ModuleGrid, codewords: &[u8; TOTAL_CODEWORDS]) {
    let mut bits = codewords
        .iter()
        .flat_map(|&cw| (0..8).rev().map(move |i| (cw >> i) & 1 == 1));

    let mut x = SYMBOL_SIZE - 1;
    let mut upward = true;
    loop {
        if x == 6 {
            x -= 1;
        }
        for i in 0..SYMBOL_SIZE {
            let y = if upward { SYMBOL_SIZE - 1 - i } else { i };
            for dx in 0..2 {
                let xx = x - dx;
                if function.get(xx, y) {
                    continue;
                }
                let bit = bits.next().unwrap_or(false);
                dark.set(xx, y, bit ^ ((xx + y) % 2 == 0));
            }
        }
        upward = !upward;
        if x < 2 {
            break;
        }
        x -= 2;
    }
}

/// Write the 15 format bits, most significant first, into both strips.
fn place_format(dark: &mut ModuleGrid) {
    let fmt = format_bits();
    for i in 0..15 {
        let bit = (fmt >> (14 - i)) & 1 == 1;
        let (y1, x1) = FORMAT_COORDS_TOP_LEFT[i];
        let (y2, x2) = FORMAT_COORDS_EDGES[i];
        dark.set(x1, y1, bit);
        dark.set(x2, y2, bit);
    }
}
