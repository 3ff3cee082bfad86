use crate::{CryptoError, CryptoResult};

// WIF layout: version byte, 32-byte key, compressed-key marker.
const WIF_VERSION: u8 = 0x80;
const WIF_COMPRESSED_SUFFIX: u8 = 0x01;

/// Encodes a 32-byte private key in Wallet Import Format.
pub fn private_key_to_wif(private_key: &[u8; 32]) -> String {
    let mut payload = Vec::with_capacity(34);
    payload.push(WIF_VERSION);
    payload.extend_from_slice(private_key);
    payload.push(WIF_COMPRESSED_SUFFIX);
    bs58::encode(payload).with_check().into_string()
}

/// Decodes a WIF string into the raw 32-byte private key.
pub fn private_key_from_wif(wif: &str) -> CryptoResult<[u8; 32]> {
    let payload = bs58::decode(wif)
        .with_check(None)
        .into_vec()
        .map_err(|e| CryptoError::InvalidWif(e.to_string()))?;
    if payload.len() != 34 {
        return Err(CryptoError::InvalidWif(format!(
            "payload is {} bytes, expected 34",
            payload.len()
        )));
    }
    if payload[0] != WIF_VERSION {
        return Err(CryptoError::InvalidWif(format!(
            "version byte 0x{:02x}, expected 0x80",
            payload[0]
        )));
    }
    if payload[33] != WIF_COMPRESSED_SUFFIX {
        return Err(CryptoError::InvalidWif(
            "missing compressed-key suffix".into(),
        ));
    }
    let mut key = [0u8; 32];
    key.copy_from_slice(&payload[1..33]);
    Ok(key)
}
