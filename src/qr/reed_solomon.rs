//! Reed-Solomon error-correction codewords for version 1-L.

use std::sync::OnceLock;

use crate::qr::gf256;

/// Version 1-L appends 7 EC codewords to the 19 data codewords.
pub const EC_CODEWORDS: usize = 7;
/// Total codewords in the symbol.
pub const TOTAL_CODEWORDS: usize = 26;

/// The degree-7 generator polynomial: product of (x - alpha^i) for i in 0..7.
///
/// Built once; coefficients are highest-degree first with a leading 1.
fn generator() -> &'static [u8; EC_CODEWORDS + 1] {
    static GENERATOR: OnceLock<[u8; EC_CODEWORDS + 1]> = OnceLock::new();
    GENERATOR.get_or_init(|| {
        let mut poly = vec![1u8];
        for i in 0..EC_CODEWORDS {
            poly = gf256::poly_mul(&poly, &[1, gf256::exp(i)]);
        }
        poly.try_into().expect("degree-7 generator has 8 coefficients")
    })
}

/// Compute the 7 EC codewords for a block of data codewords.
///
/// Polynomial division of `data * x^7` by the generator; the remainder is the
/// EC block.
pub fn ec_codewords(data: &[u8]) -> [u8; EC_CODEWORDS] {
    let gen_poly = generator();
    let mut msg = vec![0u8; data.len() + EC_CODEWORDS];
    msg[..data.len()].copy_from_slice(data);

    for i in 0..data.len() {
        let coef = msg[i];
        if coef == 0 {
            continue;
        }
        for (j, &g) in gen_poly.iter().enumerate() {
            msg[i + j] ^= gf256::mul(g, coef);
        }
    }

    msg[data.len()..]
        .try_into()
        .expect("remainder is exactly 7 bytes")
}

/// Concatenate data and EC codewords into the full 26-codeword sequence.
pub fn codewords(data: &[u8; super::alphanumeric::DATA_CODEWORDS]) -> [u8; TOTAL_CODEWORDS] {
    let ec = ec_codewords(data);
    let mut out = [0u8; TOTAL_CODEWORDS];
    out[..data.len()].copy_from_slice(data);
    out[data.len()..].copy_from_slice(&ec);
    out
}
