use std::cmp::Ordering;
use std::fmt;

use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::{Signature, VerifyingKey};

use crate::{sha256, CryptoError, CryptoResult, SIGNATURE_SIZE};

/// Size of a compressed SEC1 P-256 public key.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// A P-256 public key in compressed form.
///
/// Ordering compares the compressed SEC1 encodings lexicographically,
/// which is the ordering multi-sig verification scripts list keys in.
#[derive(Clone)]
pub struct PublicKey {
    key: VerifyingKey,
    encoded: [u8; COMPRESSED_PUBLIC_KEY_SIZE],
}

impl PublicKey {
    /// Parses a compressed SEC1 encoding.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != COMPRESSED_PUBLIC_KEY_SIZE {
            return Err(CryptoError::InvalidPublicKey(format!(
                "expected {} bytes, got {}",
                COMPRESSED_PUBLIC_KEY_SIZE,
                bytes.len()
            )));
        }
        let key = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        let mut encoded = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
        encoded.copy_from_slice(bytes);
        Ok(Self { key, encoded })
    }

    /// Parses a hex-encoded compressed key.
    pub fn from_hex(hex_str: &str) -> CryptoResult<Self> {
        let bytes =
            hex::decode(hex_str).map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Self::from_bytes(&bytes)
    }

    pub(crate) fn from_verifying_key(key: VerifyingKey) -> Self {
        let point = key.to_encoded_point(true);
        let mut encoded = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
        encoded.copy_from_slice(point.as_bytes());
        Self { key, encoded }
    }

    /// The compressed SEC1 encoding.
    pub fn encoded(&self) -> &[u8; COMPRESSED_PUBLIC_KEY_SIZE] {
        &self.encoded
    }

    /// Verifies a 64-byte `r || s` signature over `message`.
    ///
    /// The message is hashed with SHA-256 before verification, matching
    /// how [`crate::KeyPair::sign_message`] produces signatures.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<()> {
        if signature.len() != SIGNATURE_SIZE {
            return Err(CryptoError::InvalidSignature(format!(
                "expected {} bytes, got {}",
                SIGNATURE_SIZE,
                signature.len()
            )));
        }
        let signature = Signature::from_slice(signature)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        self.key
            .verify_prehash(&sha256(message), &signature)
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.encoded == other.encoded
    }
}

impl Eq for PublicKey {}

impl PartialOrd for PublicKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PublicKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.encoded.cmp(&other.encoded)
    }
}

impl std::hash::Hash for PublicKey {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.encoded.hash(state);
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.encoded))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.encoded))
    }
}
