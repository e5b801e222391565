//! wirecode - human-typable exchange codes and a from-scratch QR encoder
//!
//! Two self-contained binary codecs with no I/O in their core paths:
//!
//! - [`code`]: a 7-byte identifier becomes `word-word-suffix+checksum` (two
//!   dictionary words, an 8-character base32 suffix, one typo-checksum
//!   character) and decodes back tolerantly.
//! - [`qr`]: short ASCII text becomes a version 1-L QR symbol built from
//!   first principles - alphanumeric packing, Reed-Solomon over GF(256),
//!   BCH format information, exact module placement - rendered to SVG or a
//!   raster image.
//!
//! [`exchange`] carries the surrounding session state: issuing identifiers,
//! the in-memory store, and expiry.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Human code encode/decode (words, base32, checksum)
pub mod code;
/// Error types for every pipeline
pub mod error;
/// Short-lived exchange sessions and their store
pub mod exchange;
/// Core data structures (ExchangeId, ModuleGrid)
pub mod models;
/// QR symbol encoding and rendering (version 1-L, mask 0)
pub mod qr;

pub use code::{Decoded, WordList, decode, encode, format_code};
pub use error::{DecodeError, IdParseError, QrError, WordListError};
pub use models::ExchangeId;
pub use qr::Symbol;
