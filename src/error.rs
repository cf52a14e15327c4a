use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported hashing algorithm.")]
    UnsupportedAlgorithm,
    #[error("Length of password should be a multiple of 3.")]
    InvalidLength,
    /// The text has no `:` separating the salt from the hex digest.
    #[error("Malformed encoded digest")]
    MalformedEncodedDigest,
    #[error("Tokio Join: {0}")]
    Join(#[from] tokio::task::JoinError),
}
