//! GF(256) arithmetic for Reed-Solomon encoding.
//!
//! QR codes use the field generated by the primitive polynomial
//! x^8 + x^4 + x^3 + x^2 + 1 (0x11D). Exponent and log tables are built once
//! per process and shared read-only; the exponent table is doubled so that
//! `exp[log a + log b]` never needs a modular reduction.

use std::sync::OnceLock;

const PRIMITIVE_POLY: u16 = 0x11D;

struct Tables {
    exp: [u8; 512],
    log: [u8; 256],
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut exp = [0u8; 512];
        let mut log = [0u8; 256];
        let mut x: u16 = 1;
        for i in 0..255 {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
        }
        for i in 255..512 {
            exp[i] = exp[i - 255];
        }
        Tables { exp, log }
    })
}

/// Multiply two field elements.
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let t = tables();
    t.exp[t.log[a as usize] as usize + t.log[b as usize] as usize]
}

/// alpha^i for i in 0..255.
pub fn exp(i: usize) -> u8 {
    tables().exp[i % 255]
}

/// Multiply two polynomials over GF(256), coefficients highest-degree first.
pub fn poly_mul(p: &[u8], q: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; p.len() + q.len() - 1];
    for (i, &pi) in p.iter().enumerate() {
        for (j, &qj) in q.iter().enumerate() {
            out[i + j] ^= mul(pi, qj);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_identities() {
        assert_eq!(mul(0, 7), 0);
        assert_eq!(mul(7, 0), 0);
        assert_eq!(mul(1, 7), 7);
        assert_eq!(mul(7, 1), 7);
    }

    #[test]
    fn test_mul_commutes() {
        for a in [3u8, 29, 140, 255] {
            for b in [2u8, 91, 200] {
                assert_eq!(mul(a, b), mul(b, a));
            }
        }
    }

    #[test]
    fn test_exp_cycle() {
        assert_eq!(exp(0), 1);
        assert_eq!(exp(1), 2);
        // alpha^8 = 0x1D under 0x11D
        assert_eq!(exp(8), 0x1D);
        assert_eq!(exp(255), 1);
    }

    #[test]
    fn test_poly_mul() {
        // (x + 1)(x + 2) = x^2 + 3x + 2 in GF(256)
        assert_eq!(poly_mul(&[1, 1], &[1, 2]), vec![1, 3, 2]);
    }
}
