//! Human code -> identifier.
//!
//! Decoding is a pure classification over the input string: it either
//! reconstructs the exact identifier that was encoded or reports a precise
//! failure reason, never a different valid-looking identifier.

use crate::code::base32;
use crate::code::checksum::checksum5;
use crate::code::wordlist::WordList;
use crate::code::{CHECKSUM_CHARS, SUFFIX_BYTES, SUFFIX_CHARS, WORD_LENGTH};
use crate::error::DecodeError;
use crate::models::{ExchangeId, ID_BYTES};

/// A successfully decoded human code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The reconstructed identifier.
    pub id: ExchangeId,
    /// The input after normalization (lowercase alphanumerics only).
    pub normalized: String,
    /// Whether the 19th (checksum) character was present and verified.
    pub checksum_present: bool,
}

/// Lowercase the input and strip everything outside `[a-z0-9]`.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Decode a human code back to its identifier.
///
/// Tolerates case, hyphen placement and the confusable substitutions of the
/// base32 alphabet. The checksum character is optional: an 18-character code
/// decodes with `checksum_present = false`.
pub fn decode(input: &str, words: &WordList) -> Result<Decoded, DecodeError> {
    let normalized = normalize(input);

    let with_checksum = WORD_LENGTH * 2 + SUFFIX_CHARS + CHECKSUM_CHARS; // 19
    let without_checksum = WORD_LENGTH * 2 + SUFFIX_CHARS; // 18

    let checksum_present = if normalized.len() == without_checksum {
        false
    } else if normalized.len() == with_checksum {
        true
    } else {
        return Err(DecodeError::InvalidFormat);
    };

    let (w1, rest) = normalized.split_at(WORD_LENGTH);
    let (w2, rest) = rest.split_at(WORD_LENGTH);
    let (suffix, check) = rest.split_at(SUFFIX_CHARS);

    let b0 = words.index_of(w1).ok_or(DecodeError::UnknownWords)?;
    let b1 = words.index_of(w2).ok_or(DecodeError::UnknownWords)?;

    let suffix_bytes = base32::decode(suffix).ok_or(DecodeError::InvalidSuffix)?;
    if suffix_bytes.len() != SUFFIX_BYTES {
        return Err(DecodeError::InvalidSuffix);
    }

    let mut id_bytes = [0u8; ID_BYTES];
    id_bytes[0] = b0;
    id_bytes[1] = b1;
    id_bytes[2..].copy_from_slice(&suffix_bytes);

    if checksum_present {
        let supplied = check
            .chars()
            .next()
            .and_then(base32::value_of)
            .ok_or(DecodeError::InvalidFormat)?;
        if supplied != checksum5(&id_bytes) {
            return Err(DecodeError::ChecksumMismatch);
        }
    }

    Ok(Decoded {
        id: ExchangeId::from_bytes(id_bytes),
        normalized,
        checksum_present,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::encoder::encode;

    fn words() -> &'static WordList {
        WordList::builtin()
    }

    #[test]
    fn test_golden_decode() {
        let decoded = decode("ember-laser-081g81864", words()).unwrap();
        assert_eq!(
            decoded.id,
            ExchangeId::from_bytes([0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06])
        );
        assert!(decoded.checksum_present);
        assert_eq!(decoded.normalized, "emberlaser081g81864");
    }

    #[test]
    fn test_tolerates_case_and_hyphens() {
        let golden = decode("ember-laser-081g81864", words()).unwrap();
        for variant in [
            "EMBER-LASER-081G81864",
            "emberlaser081g81864",
            "  Ember Laser 081g 8186 4  ",
            "ember--laser--081g81864",
        ] {
            assert_eq!(decode(variant, words()).unwrap().id, golden.id);
        }
    }

    #[test]
    fn test_tolerates_confusables() {
        let golden = decode("ember-laser-081g81864", words()).unwrap();
        // suffix O->0, I/L->1 (words stay strict dictionary lookups)
        let decoded = decode("ember-laser-O8IG8I864", words()).unwrap();
        assert_eq!(decoded.id, golden.id);
    }

    #[test]
    fn test_missing_checksum_ok() {
        let decoded = decode("ember-laser-081g8186", words()).unwrap();
        assert!(!decoded.checksum_present);
        assert_eq!(
            decoded.id,
            ExchangeId::from_bytes([0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06])
        );
    }

    #[test]
    fn test_invalid_format_lengths() {
        for bad in ["", "ember", "ember-laser-081g818", "ember-laser-081g818644"] {
            assert_eq!(decode(bad, words()), Err(DecodeError::InvalidFormat));
        }
    }

    #[test]
    fn test_unknown_words() {
        assert_eq!(
            decode("zzzzz-laser-081g81864", words()),
            Err(DecodeError::UnknownWords)
        );
        assert_eq!(
            decode("ember-zzzzz-081g81864", words()),
            Err(DecodeError::UnknownWords)
        );
    }

    #[test]
    fn test_checksum_mismatch_every_wrong_symbol() {
        let id = ExchangeId::from_bytes([9, 42, 1, 2, 3, 4, 5]);
        let code = encode(&id, words());
        let correct = code.chars().last().unwrap();
        for &sym in base32::ALPHABET {
            let sym = (sym as char).to_ascii_lowercase();
            if sym == correct {
                continue;
            }
            let mut mutated = code.clone();
            mutated.pop();
            mutated.push(sym);
            assert_eq!(
                decode(&mutated, words()),
                Err(DecodeError::ChecksumMismatch),
                "symbol {sym} should fail"
            );
        }
    }

    #[test]
    fn test_roundtrip_sample() {
        // a spread of identifiers, including the byte-range corners
        let samples = [
            [0, 0, 0, 0, 0, 0, 0],
            [255, 255, 255, 255, 255, 255, 255],
            [0, 255, 1, 2, 3, 4, 5],
            [17, 34, 51, 68, 85, 102, 119],
            [200, 100, 50, 25, 12, 6, 3],
        ];
        for bytes in samples {
            let id = ExchangeId::from_bytes(bytes);
            let decoded = decode(&encode(&id, words()), words()).unwrap();
            assert_eq!(decoded.id, id);
            assert!(decoded.checksum_present);
        }
    }
}
