use std::fmt;
use std::str::FromStr;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::IdParseError;

/// Exchange identifiers are exactly 7 opaque bytes (56 bits).
pub const ID_BYTES: usize = 7;

/// Opaque identifier naming one exchange.
///
/// The byte length is a type-level guarantee: every `ExchangeId` holds
/// exactly 7 bytes, so the code encoder has no length failure mode. The
/// canonical text form is unpadded URL-safe base64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExchangeId([u8; ID_BYTES]);

impl ExchangeId {
    /// Wrap raw identifier bytes.
    pub fn from_bytes(bytes: [u8; ID_BYTES]) -> Self {
        Self(bytes)
    }

    /// Generate a random identifier.
    pub fn random() -> Self {
        use rand::Rng;
        let mut bytes = [0u8; ID_BYTES];
        rand::thread_rng().fill(bytes.as_mut_slice());
        Self(bytes)
    }

    /// The raw 7 bytes.
    pub fn as_bytes(&self) -> &[u8; ID_BYTES] {
        &self.0
    }
}

impl fmt::Display for ExchangeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&URL_SAFE_NO_PAD.encode(self.0))
    }
}

impl FromStr for ExchangeId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = URL_SAFE_NO_PAD.decode(s).map_err(|_| IdParseError::Base64)?;
        let bytes: [u8; ID_BYTES] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| IdParseError::WrongLength(v.len()))?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for ExchangeId {
    type Error = IdParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ExchangeId> for String {
    fn from(id: ExchangeId) -> Self {
        id.to_string()
    }
}
