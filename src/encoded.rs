use std::str::FromStr;

use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Separates the salt from the hex digest in an [`EncodedDigest`].
pub const DELIMITER: char = ':';

/// An opaque token appended to the password before it is digested.
///
/// Salts are normally produced by [`Salt::generate`]. A salt containing [`DELIMITER`]
/// yields a digest that can never be verified.
#[derive(
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Deref,
    AsRef,
    Display,
    From,
    Into,
    Serialize,
    Deserialize,
    Zeroize,
)]
#[deref(forward)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Salt(String);

impl Salt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains_delimiter(&self) -> bool {
        self.0.contains(DELIMITER)
    }
}

impl From<&str> for Salt {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// The persisted form of a hashed password, `<salt>:<lowercase hex digest>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EncodedDigest {
    pub salt: Salt,
    pub hex_digest: String,
}

impl EncodedDigest {
    pub(crate) fn new(salt: Salt, digest: &[u8]) -> Self {
        Self {
            salt,
            hex_digest: hex::encode(digest),
        }
    }

    /// Decodes the hex digest back into raw bytes.
    pub fn digest_bytes(&self) -> std::result::Result<Vec<u8>, hex::FromHexError> {
        hex::decode(&self.hex_digest)
    }
}

impl std::fmt::Display for EncodedDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{DELIMITER}{}", self.salt, self.hex_digest)
    }
}

impl FromStr for EncodedDigest {
    type Err = Error;

    /// Splits on the first delimiter only. Everything after it is taken as the digest,
    /// so the result always renders back to the exact input text.
    fn from_str(encoded: &str) -> Result<Self> {
        let (salt, hex_digest) = encoded
            .split_once(DELIMITER)
            .ok_or(Error::MalformedEncodedDigest)?;

        Ok(Self {
            salt: Salt::from(salt),
            hex_digest: hex_digest.to_owned(),
        })
    }
}

impl TryFrom<String> for EncodedDigest {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<EncodedDigest> for String {
    fn from(value: EncodedDigest) -> Self {
        value.to_string()
    }
}
