//! Identifier -> human code.

use crate::code::base32;
use crate::code::checksum::checksum5;
use crate::code::wordlist::WordList;
use crate::code::{CHECKSUM_CHARS, SUFFIX_BYTES, SUFFIX_CHARS, WORD_LENGTH};
use crate::models::ExchangeId;

/// Encode a 7-byte identifier as `word-word-suffix+checksum`.
///
/// The first two bytes select dictionary words, the remaining five become an
/// 8-character base32 suffix (40 bits, no padding slack), and the final
/// character is the base32 symbol for the 5-bit checksum of all seven bytes.
/// Total over every input; the output is always lowercase.
pub fn encode(id: &ExchangeId, words: &WordList) -> String {
    let bytes = id.as_bytes();
    let word1 = words.word(bytes[0]);
    let word2 = words.word(bytes[1]);

    let suffix = base32::encode(&bytes[2..]).to_lowercase();
    debug_assert_eq!(suffix.len(), SUFFIX_CHARS);
    let check = base32::char_for(checksum5(bytes));

    format!("{word1}-{word2}-{suffix}{check}")
}

/// Re-hyphenate a code for display: `word-word-rest`, lowercase.
///
/// Inputs that do not normalize to 18 or 19 alphanumeric characters are
/// returned unchanged.
pub fn format_code(input: &str) -> String {
    let normalized = crate::code::decoder::normalize(input);
    let with = WORD_LENGTH * 2 + SUFFIX_CHARS + CHECKSUM_CHARS;
    let without = WORD_LENGTH * 2 + SUFFIX_CHARS;
    if normalized.len() != with && normalized.len() != without {
        return input.to_string();
    }
    let (w1, rest) = normalized.split_at(WORD_LENGTH);
    let (w2, tail) = rest.split_at(WORD_LENGTH);
    format!("{w1}-{w2}-{tail}")
}

// Suffix length sanity: 5 bytes pack to exactly 8 symbols.
const _: () = assert!(SUFFIX_BYTES * 8 == SUFFIX_CHARS * 5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_encoding() {
        let id = ExchangeId::from_bytes([0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(encode(&id, WordList::builtin()), "ember-laser-081g81864");
    }

    #[test]
    fn test_encode_is_lowercase_and_shaped() {
        let id = ExchangeId::from_bytes([255, 128, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE]);
        let code = encode(&id, WordList::builtin());
        assert_eq!(code.matches('-').count(), 2);
        assert_eq!(code, code.to_lowercase());
        // two 5-char words, 8-char suffix, 1 checksum char, 2 hyphens
        assert_eq!(code.len(), 21);
    }

    #[test]
    fn test_format_code() {
        assert_eq!(
            format_code("EMBER laser 081G 8186 4"),
            "ember-laser-081g81864"
        );
        // 18 characters (no checksum) also re-hyphenates
        assert_eq!(format_code("emberlaser081g8186"), "ember-laser-081g8186");
        // wrong length passes through untouched
        assert_eq!(format_code("too-short"), "too-short");
    }
}
