//! Cryptographic primitives for Neo N3 transaction signing.
//!
//! Neo uses ECDSA over the NIST P-256 curve with SHA-256 as the message
//! digest. This crate wraps the `p256` crate behind the key and signature
//! shapes the rest of the workspace works with, and provides the hash
//! functions used for script hashes and transaction hashes.

mod error;
mod hash;
mod key_pair;
mod public_key;
mod wif;

pub use error::{CryptoError, CryptoResult};
pub use hash::{hash160, hash256, ripemd160, sha256};
pub use key_pair::{KeyPair, SIGNATURE_SIZE};
pub use public_key::{PublicKey, COMPRESSED_PUBLIC_KEY_SIZE};
pub use wif::{private_key_from_wif, private_key_to_wif};
