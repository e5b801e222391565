//! Alphanumeric-mode packing for a version 1-L symbol.
//!
//! Character set: 0-9, A-Z, space, `$%*+-./:` (45 values). Pairs pack to 11
//! bits as `45 * a + b`, a trailing single to 6 bits, after a 4-bit mode
//! indicator and a 9-bit count.

use crate::error::QrError;

/// The 45-character alphanumeric-mode alphabet, in value order.
const ALPHANUMERIC_TABLE: &[u8; 45] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Mode indicator for alphanumeric data.
const MODE_ALPHANUMERIC: u16 = 0b0010;
/// Version 1-L holds 19 data codewords.
pub const DATA_CODEWORDS: usize = 19;
/// 19 codewords = 152 data bits.
pub const DATA_BITS: usize = DATA_CODEWORDS * 8;

fn value_of(ch: char) -> Option<u16> {
    ALPHANUMERIC_TABLE
        .iter()
        .position(|&c| c as char == ch)
        .map(|i| i as u16)
}

fn push_bits(out: &mut Vec<bool>, value: u16, count: usize) {
    for i in (0..count).rev() {
        out.push((value >> i) & 1 == 1);
    }
}

/// Pack text into exactly 19 data codewords.
///
/// Input is uppercased first. Fails with `UnsupportedChar` for characters
/// outside the alphabet and with `TextTooLong` when the packed bitstream
/// exceeds 152 bits, before any padding is applied. Otherwise up to four zero
/// terminator bits are appended, the stream is zero-padded to a byte
/// boundary, and the alternating fillers 0xEC / 0x11 bring it to 19 bytes.
pub fn pack(text: &str) -> Result<[u8; DATA_CODEWORDS], QrError> {
    let upper = text.to_uppercase();
    let mut values = Vec::with_capacity(upper.chars().count());
    for ch in upper.chars() {
        values.push(value_of(ch).ok_or(QrError::UnsupportedChar(ch))?);
    }

    let mut bits = Vec::with_capacity(DATA_BITS);
    push_bits(&mut bits, MODE_ALPHANUMERIC, 4);
    push_bits(&mut bits, values.len() as u16, 9);

    for pair in values.chunks(2) {
        match *pair {
            [a, b] => push_bits(&mut bits, a * 45 + b, 11),
            [a] => push_bits(&mut bits, a, 6),
            _ => unreachable!(),
        }
    }

    if bits.len() > DATA_BITS {
        return Err(QrError::TextTooLong { bits: bits.len() });
    }

    // Terminator: up to 4 zero bits, only as many as fit.
    let remaining = DATA_BITS - bits.len();
    for _ in 0..remaining.min(4) {
        bits.push(false);
    }
    while bits.len() % 8 != 0 {
        bits.push(false);
    }

    let mut codewords = [0u8; DATA_CODEWORDS];
    for (i, byte_bits) in bits.chunks(8).enumerate() {
        let mut b = 0u8;
        for &bit in byte_bits {
            b = (b << 1) | bit as u8;
        }
        codewords[i] = b;
    }

    // Alternating filler bytes up to capacity.
    let filled = bits.len() / 8;
    for (pad, slot) in codewords[filled..].iter_mut().enumerate() {
        *slot = if pad % 2 == 0 { 0xEC } else { 0x11 };
    }

    Ok(codewords)
}
