//! 5-bit transcription-typo checksum.
//!
//! FNV-1a 32-bit folded down to 5 bits. This catches accidental typos only; a
//! single base32 character covers 1/32 of the mutation space and is not a
//! security primitive.

const FNV_OFFSET_BASIS: u32 = 0x811c9dc5;
const FNV_PRIME: u32 = 0x01000193;

/// Deterministic 5-bit fingerprint of a byte sequence.
pub fn checksum5(bytes: &[u8]) -> u8 {
    let mut hash = FNV_OFFSET_BASIS;
    for &b in bytes {
        hash ^= b as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash ^= hash >> 16;
    hash ^= hash >> 8;
    (hash & 31) as u8
}
