//! Error types for the code and QR pipelines.
//!
//! Every failure is a discriminated value; the library never panics on bad
//! input and never produces partial output.

use thiserror::Error;

/// Why a human code failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Normalized input is not 18 or 19 characters, or the checksum
    /// character is not a base32 symbol.
    #[error("invalid_format: code does not normalize to 18 or 19 characters")]
    InvalidFormat,
    /// One or both words are not in the dictionary.
    #[error("unknown_words: word not present in the dictionary")]
    UnknownWords,
    /// The suffix is not valid base32 or does not decode to 5 bytes.
    #[error("invalid_suffix: suffix is not 8 valid base32 characters")]
    InvalidSuffix,
    /// The supplied checksum disagrees with the recomputed one.
    #[error("checksum_mismatch: checksum character does not match")]
    ChecksumMismatch,
}

/// Why text could not be encoded as a QR symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QrError {
    /// Input contains a character outside the alphanumeric-mode alphabet.
    #[error("unsupported_char: {0:?} is not in the QR alphanumeric set")]
    UnsupportedChar(char),
    /// Packed input exceeds the 152-bit version 1-L data capacity.
    #[error("text_too_long: {bits} bits exceed the 152-bit v1-L capacity")]
    TextTooLong {
        /// Number of bits the input packed to.
        bits: usize,
    },
}

/// Why a word dictionary failed to load.
#[derive(Debug, Error)]
pub enum WordListError {
    /// The source did not contain exactly 256 words.
    #[error("word list has {0} entries, expected exactly 256")]
    WrongCount(usize),
    /// Two entries normalize to the same word.
    #[error("duplicate word {0:?} in word list")]
    Duplicate(String),
    /// The source could not be read.
    #[error("failed to read word list")]
    Io(#[from] std::io::Error),
    /// The source was not a JSON array of strings.
    #[error("failed to parse word list JSON")]
    Json(#[from] serde_json::Error),
}

/// Why a string is not a valid exchange identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    /// Not valid URL-safe base64.
    #[error("identifier is not valid url-safe base64")]
    Base64,
    /// Decoded to a length other than 7 bytes.
    #[error("identifier decodes to {0} bytes, expected 7")]
    WrongLength(usize),
}
