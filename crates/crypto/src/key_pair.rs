use p256::ecdsa::signature::hazmat::PrehashSigner;
use p256::ecdsa::{Signature, SigningKey};
use rand::rngs::OsRng;

use crate::{sha256, CryptoError, CryptoResult, PublicKey};

/// Size of a raw `r || s` ECDSA signature.
pub const SIGNATURE_SIZE: usize = 64;

/// A P-256 private/public key pair.
pub struct KeyPair {
    signing_key: SigningKey,
    public_key: PublicKey,
}

impl KeyPair {
    /// Builds a key pair from a 32-byte private key.
    pub fn from_private_key(private_key: &[u8]) -> CryptoResult<Self> {
        let signing_key = SigningKey::from_slice(private_key)
            .map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
        let public_key = PublicKey::from_verifying_key(*signing_key.verifying_key());
        Ok(Self {
            signing_key,
            public_key,
        })
    }

    /// Builds a key pair from a hex-encoded private key.
    pub fn from_private_key_hex(hex_str: &str) -> CryptoResult<Self> {
        let bytes =
            hex::decode(hex_str).map_err(|e| CryptoError::InvalidPrivateKey(e.to_string()))?;
        Self::from_private_key(&bytes)
    }

    /// Builds a key pair from a WIF-encoded private key.
    pub fn from_wif(wif: &str) -> CryptoResult<Self> {
        let private_key = crate::private_key_from_wif(wif)?;
        Self::from_private_key(&private_key)
    }

    /// Generates a fresh key pair from the system RNG.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut OsRng);
        let public_key = PublicKey::from_verifying_key(*signing_key.verifying_key());
        Self {
            signing_key,
            public_key,
        }
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// The raw 32-byte private key.
    pub fn private_key(&self) -> [u8; 32] {
        self.signing_key.to_bytes().into()
    }

    /// Exports the private key in WIF.
    pub fn export_wif(&self) -> String {
        crate::private_key_to_wif(&self.private_key())
    }

    /// Signs SHA-256(`message`) with ECDSA, returning the 64-byte
    /// `r || s` encoding with `s` normalized to the lower half order.
    pub fn sign_message(&self, message: &[u8]) -> CryptoResult<[u8; SIGNATURE_SIZE]> {
        let signature: Signature = self
            .signing_key
            .sign_prehash(&sha256(message))
            .map_err(|e| CryptoError::InvalidSignature(e.to_string()))?;
        let signature = signature.normalize_s().unwrap_or(signature);
        let mut raw = [0u8; SIGNATURE_SIZE];
        raw.copy_from_slice(&signature.to_bytes());
        Ok(raw)
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // never print the private key
        f.debug_struct("KeyPair")
            .field("public_key", &self.public_key)
            .finish()
    }
}
