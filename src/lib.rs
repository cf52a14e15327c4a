//! Salted password digests in the `<salt>:<hex digest>` format, and random hex passwords.
//!
//! ```
//! use saltdigest::{HashOptions, VerifyOptions, hash_blocking, verify_blocking};
//!
//! let encoded = hash_blocking("12345678", &HashOptions::default())?.to_string();
//! assert!(verify_blocking("12345678", &encoded, &VerifyOptions::default())?);
//! assert!(!verify_blocking("123456789", &encoded, &VerifyOptions::default())?);
//! # Ok::<(), saltdigest::error::Error>(())
//! ```

pub mod crypto;
pub mod encoded;
pub mod error;
pub mod generator;

pub use crypto::algorithm::HashAlgorithm;
pub use crypto::digest::{HashOptions, VerifyOptions, hash, hash_blocking, verify, verify_blocking};
pub use encoded::{EncodedDigest, Salt};
pub use error::{Error, Result};
pub use generator::{
    DEFAULT_PASSWORD_LENGTH, GenerateOptions, generate_password, generate_password_with_rng,
};
