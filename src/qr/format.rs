//! BCH(15,5) format information for (EC level L, mask 0).
//!
//! The 5-bit descriptor is extended with a 10-bit BCH remainder and XORed
//! with a fixed mask so the format strip is never all zeros. Placement order
//! for both redundant copies is a fixed coordinate list.

/// BCH generator polynomial x^10 + x^8 + x^5 + x^4 + x^2 + x + 1.
const BCH_GENERATOR: u16 = 0x537;
/// Fixed XOR applied to the finished 15-bit codeword.
const FORMAT_MASK: u16 = 0x5412;
/// EC level L (`01`) with mask pattern 0 (`000`).
const FORMAT_L_MASK0: u16 = 0b01000;

/// Format strip around the top-left finder, in placement order (y, x).
pub const FORMAT_COORDS_TOP_LEFT: [(usize, usize); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

/// Second copy along the bottom-left and top-right edges, in placement
/// order (y, x). Position (13, 8) doubles as the dark module; the encoded
/// bit there is always dark for (L, 0).
pub const FORMAT_COORDS_EDGES: [(usize, usize); 15] = [
    (20, 8),
    (19, 8),
    (18, 8),
    (17, 8),
    (16, 8),
    (15, 8),
    (14, 8),
    (13, 8),
    (8, 20),
    (8, 19),
    (8, 18),
    (8, 17),
    (8, 16),
    (8, 15),
    (8, 14),
];

/// BCH(15,5)-encode a 5-bit descriptor into the masked 15-bit format code.
pub fn encode_format(descriptor: u16) -> u16 {
    let mut remainder = descriptor << 10;
    for i in (10..15).rev() {
        if (remainder >> i) & 1 == 1 {
            remainder ^= BCH_GENERATOR << (i - 10);
        }
    }
    ((descriptor << 10) | (remainder & 0x3FF)) ^ FORMAT_MASK
}

/// The format code this symbol always carries: level L, mask 0.
pub fn format_bits() -> u16 {
    encode_format(FORMAT_L_MASK0)
}
