//! Random password generation.
//!
//! A password of `length` characters is produced by drawing `length` random bytes,
//! hex-encoding them and keeping the first `length` characters. Half of the drawn
//! randomness is discarded, which bounds the entropy at `4 * length` bits. Stored
//! values depend on this exact scheme, so it must not be replaced by a full-entropy
//! generator.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use crate::encoded::Salt;
use crate::error::{Error, Result};

pub const DEFAULT_PASSWORD_LENGTH: usize = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateOptions {
    /// Number of characters to generate. Must be a multiple of 3.
    /// Defaults to [`DEFAULT_PASSWORD_LENGTH`].
    pub length: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
        }
    }
}

impl GenerateOptions {
    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

/// Generates a password of lowercase hex characters using the operating system's CSPRNG.
pub fn generate_password(options: &GenerateOptions) -> Result<String> {
    generate_password_with_rng(OsRng, options)
}

/// Like [`generate_password`], drawing bytes from `rng` instead.
pub fn generate_password_with_rng(
    mut rng: impl CryptoRng + RngCore,
    options: &GenerateOptions,
) -> Result<String> {
    let length = options.length;

    if length % 3 != 0 {
        return Err(Error::InvalidLength);
    }

    let mut bytes = Zeroizing::new(vec![0_u8; length]);
    rng.fill_bytes(&mut bytes);

    let mut password = hex::encode(&*bytes);
    password.truncate(length);

    debug!(length, "Password generated");

    Ok(password)
}

impl Salt {
    pub fn generate() -> Result<Self> {
        Self::generate_with_length(DEFAULT_PASSWORD_LENGTH)
    }

    pub fn generate_with_length(length: usize) -> Result<Self> {
        generate_password(&GenerateOptions::with_length(length)).map(Salt::from)
    }
}
