use thiserror::Error;

/// Result type for cryptographic operations.
pub type CryptoResult<T> = std::result::Result<T, CryptoError>;

/// Errors raised by key handling, signing and verification.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The private key bytes are not a valid P-256 scalar.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The public key bytes are not a valid compressed P-256 point.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// The signature bytes are malformed or the signature does not verify.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// A WIF string failed base58check decoding or has the wrong layout.
    #[error("invalid WIF: {0}")]
    InvalidWif(String),
}
