//! Crockford-style base32 with tolerant decoding.
//!
//! The alphabet is digits then uppercase letters minus I, L, O and U. On
//! decode, visually confusable characters are remapped to their canonical
//! symbol before lookup, so hand-typed codes survive the usual 0/O and 1/I/L
//! mixups.

/// The 32-symbol alphabet.
pub const ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Encode bytes MSB-first into 5-bit groups, one alphabet character each.
///
/// A trailing partial group is left-aligned and zero-padded on the right.
pub fn encode(bytes: &[u8]) -> String {
    let mut bits = 0u32;
    let mut value = 0u32;
    let mut out = String::with_capacity(bytes.len() * 8 / 5 + 1);

    for &b in bytes {
        value = (value << 8) | b as u32;
        bits += 8;
        while bits >= 5 {
            out.push(ALPHABET[((value >> (bits - 5)) & 31) as usize] as char);
            bits -= 5;
        }
    }

    if bits > 0 {
        out.push(ALPHABET[((value << (5 - bits)) & 31) as usize] as char);
    }

    out
}

/// Decode a string, tolerating case, separators and confusable characters.
///
/// Non-alphanumeric characters are stripped first. Any remaining character
/// outside the alphabet and the confusable table fails. 5-bit values
/// accumulate MSB-first into bytes; a trailing fragment shorter than 8 bits
/// is discarded without a padding-correctness check.
pub fn decode(input: &str) -> Option<Vec<u8>> {
    let mut bits = 0u32;
    let mut value = 0u32;
    let mut out = Vec::new();

    for ch in input.chars() {
        let ch = ch.to_ascii_uppercase();
        if !ch.is_ascii_alphanumeric() {
            continue;
        }
        let v = value_of(ch)?;
        value = (value << 5) | v as u32;
        bits += 5;
        if bits >= 8 {
            out.push(((value >> (bits - 8)) & 255) as u8);
            bits -= 8;
        }
    }

    Some(out)
}

/// The alphabet character for a 5-bit value (lowercase).
pub fn char_for(n: u8) -> char {
    (ALPHABET[(n & 31) as usize] as char).to_ascii_lowercase()
}

/// The 5-bit value for a character, applying the confusable remapping.
pub fn value_of(ch: char) -> Option<u8> {
    let ch = match ch.to_ascii_uppercase() {
        'O' => '0',
        'I' | 'L' => '1',
        'U' => 'V',
        other => other,
    };
    ALPHABET.iter().position(|&a| a as char == ch).map(|i| i as u8)
}
