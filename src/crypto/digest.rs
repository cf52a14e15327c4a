use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};
use zeroize::Zeroizing;

use crate::crypto::algorithm::HashAlgorithm;
use crate::crypto::constant_time::constant_time_eq;
use crate::encoded::{EncodedDigest, Salt};
use crate::error::Result;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashOptions {
    /// Defaults to SHA-256.
    pub algorithm: HashAlgorithm,
    /// When absent, a fresh salt of the default generated password length is used.
    pub salt: Option<Salt>,
}

impl HashOptions {
    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            ..Default::default()
        }
    }

    pub fn with_salt(salt: impl Into<Salt>) -> Self {
        Self {
            salt: Some(salt.into()),
            ..Default::default()
        }
    }

    pub fn salt(mut self, salt: impl Into<Salt>) -> Self {
        self.salt = Some(salt.into());
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyOptions {
    /// Must match the algorithm the digest was produced with. Defaults to SHA-256.
    pub algorithm: HashAlgorithm,
}

impl VerifyOptions {
    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }
}

impl From<&HashOptions> for VerifyOptions {
    fn from(value: &HashOptions) -> Self {
        Self {
            algorithm: value.algorithm,
        }
    }
}

/// Digests the UTF-8 bytes of `password` immediately followed by the salt.
#[instrument(skip_all, fields(algorithm = %options.algorithm))]
pub fn hash_blocking(password: &str, options: &HashOptions) -> Result<EncodedDigest> {
    let salt = match &options.salt {
        Some(salt) => salt.clone(),
        None => Salt::generate()?,
    };

    if salt.contains_delimiter() {
        warn!("Salt contains the `:` delimiter! The resulting digest will never verify successfully!");
    }

    let mut input = Zeroizing::new(Vec::with_capacity(password.len() + salt.len()));
    input.extend_from_slice(password.as_bytes());
    input.extend_from_slice(salt.as_bytes());

    let digest = options.algorithm.digest(&input);

    debug!("Password hashed");

    Ok(EncodedDigest::new(salt, &digest))
}

pub async fn hash(password: &str, options: &HashOptions) -> Result<EncodedDigest> {
    let password = Zeroizing::new(password.to_owned());
    let options = options.clone();
    tokio::task::spawn_blocking(move || hash_blocking(&password, &options)).await?
}

/// Recomputes the digest of `password` with the salt stored in `encoded_digest` and
/// compares the result to `encoded_digest` as a whole.
///
/// Returns `Ok(false)` when `encoded_digest` cannot be parsed.
#[instrument(skip_all, fields(algorithm = %options.algorithm))]
pub fn verify_blocking(
    password: &str,
    encoded_digest: &str,
    options: &VerifyOptions,
) -> Result<bool> {
    let Ok(stored) = encoded_digest.parse::<EncodedDigest>() else {
        debug!("Encoded digest has no delimiter");
        return Ok(false);
    };

    let recomputed = hash_blocking(
        password,
        &HashOptions {
            algorithm: options.algorithm,
            salt: Some(stored.salt),
        },
    )?;
    let matches = constant_time_eq(recomputed.to_string().as_bytes(), encoded_digest.as_bytes());

    debug!(matches, "Password verified");

    Ok(matches)
}

pub async fn verify(password: &str, encoded_digest: &str, options: &VerifyOptions) -> Result<bool> {
    let password = Zeroizing::new(password.to_owned());
    let encoded_digest = encoded_digest.to_owned();
    let options = *options;
    tokio::task::spawn_blocking(move || verify_blocking(&password, &encoded_digest, &options))
        .await?
}

#[cfg(test)]
mod tests {
    use sha1::Sha1;
    use sha2::{Digest, Sha256, Sha384, Sha512};
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn known_answers() {
        let expected = [
            (HashAlgorithm::Sha1, hex::encode(Sha1::digest(b"passwordsalt"))),
            (HashAlgorithm::Sha256, hex::encode(Sha256::digest(b"passwordsalt"))),
            (HashAlgorithm::Sha384, hex::encode(Sha384::digest(b"passwordsalt"))),
            (HashAlgorithm::Sha512, hex::encode(Sha512::digest(b"passwordsalt"))),
        ];

        for (algorithm, hex_digest) in expected {
            let options = HashOptions::with_algorithm(algorithm).salt("salt");
            let encoded = hash_blocking("password", &options).unwrap();
            assert_eq!(encoded.to_string(), format!("salt:{hex_digest}"));
        }
    }

    #[test]
    fn sha256_of_empty_password_and_salt() {
        let encoded = hash_blocking("", &HashOptions::with_salt("")).unwrap();
        assert_eq!(
            encoded.to_string(),
            ":e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn generates_salt_when_absent() {
        let encoded = hash_blocking("12345678", &HashOptions::default()).unwrap();
        assert_eq!(encoded.salt.len(), 18);
        assert_eq!(encoded.hex_digest.len(), 64);
    }

    #[test]
    fn salt_changes_the_digest() {
        let a = hash_blocking("12345678", &HashOptions::with_salt("aaa")).unwrap();
        let b = hash_blocking("12345678", &HashOptions::with_salt("bbb")).unwrap();
        assert_ne!(a.hex_digest, b.hex_digest);
    }

    #[test]
    fn verifies_matching_password() {
        let encoded = hash_blocking("12345678", &HashOptions::default()).unwrap();
        let encoded = encoded.to_string();
        assert!(verify_blocking("12345678", &encoded, &VerifyOptions::default()).unwrap());
        assert!(!verify_blocking("123456789", &encoded, &VerifyOptions::default()).unwrap());
    }

    #[test]
    fn algorithm_mismatch_fails_verification() {
        let options = HashOptions::with_algorithm(HashAlgorithm::Sha512);
        let encoded = hash_blocking("pw", &options).unwrap().to_string();
        assert!(verify_blocking("pw", &encoded, &VerifyOptions::from(&options)).unwrap());
        assert!(!verify_blocking("pw", &encoded, &VerifyOptions::default()).unwrap());
    }

    #[test]
    fn malformed_digests_do_not_verify() {
        let options = VerifyOptions::default();
        for encoded in ["", "no-delimiter", "salt:", "salt:zz", ":"] {
            assert!(!verify_blocking("pw", encoded, &options).unwrap());
        }
    }

    #[test]
    fn uppercase_hex_does_not_verify() {
        let encoded = hash_blocking("pw", &HashOptions::with_salt("s")).unwrap();
        let uppercase = format!("s:{}", encoded.hex_digest.to_uppercase());
        assert!(!verify_blocking("pw", &uppercase, &VerifyOptions::default()).unwrap());
    }

    #[test]
    #[traced_test]
    fn warns_about_delimiter_in_salt() {
        let encoded = hash_blocking("pw", &HashOptions::with_salt("a:b")).unwrap();
        assert!(logs_contain("delimiter"));
        assert!(!verify_blocking("pw", &encoded.to_string(), &VerifyOptions::default()).unwrap());
    }

    #[tokio::test]
    async fn async_round_trip() {
        let encoded = hash("12345678", &HashOptions::default()).await.unwrap();
        let encoded = encoded.to_string();
        assert!(verify("12345678", &encoded, &VerifyOptions::default()).await.unwrap());
        assert!(!verify("123456789", &encoded, &VerifyOptions::default()).await.unwrap());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: HashOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, HashOptions::default());

        let options: HashOptions =
            serde_json::from_str(r#"{"algorithm":"SHA-384","salt":"pepper"}"#).unwrap();
        assert_eq!(options.algorithm, HashAlgorithm::Sha384);
        assert_eq!(options.salt.unwrap().as_str(), "pepper");

        let error = serde_json::from_str::<VerifyOptions>(r#"{"algorithm":"MD5"}"#).unwrap_err();
        assert!(error.to_string().contains("Unsupported hashing algorithm."));
    }
}
