//! Human-typable identifier codec.
//!
//! A 7-byte identifier becomes `word-word-suffix+checksum`: the first two
//! bytes select dictionary words, the last five become an 8-character base32
//! suffix, and one trailing base32 character carries a 5-bit typo checksum.
//! `decode(encode(id)) == id` for every 7-byte identifier.

pub mod base32;
pub mod checksum;
pub mod decoder;
pub mod encoder;
pub mod wordlist;

pub use decoder::{Decoded, decode, normalize};
pub use encoder::{encode, format_code};
pub use wordlist::{WORD_COUNT, WORD_LENGTH, WordList};

/// Suffix carries the identifier's last five bytes.
pub const SUFFIX_BYTES: usize = 5;
/// 40 suffix bits pack to exactly eight base32 characters.
pub const SUFFIX_CHARS: usize = 8;
/// One trailing checksum character.
pub const CHECKSUM_CHARS: usize = 1;
