// Copyright (C) 2015-2025 The Neo Project.
//
// h256.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use std::fmt;

use neotx_io::{BinaryWriter, IoResult, MemoryReader, Serializable};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};

/// A 256-bit hash, used for transaction and block identifiers.
///
/// Same byte conventions as [`crate::types::H160`]: little-endian wire
/// order, reversed hex display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct H256([u8; 32]);

impl H256 {
    pub const LENGTH: usize = 32;

    pub fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Wraps bytes already in wire (little-endian) order.
    pub fn from_le_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Wraps a digest whose bytes are in display (big-endian) order.
    pub fn from_be_bytes(mut bytes: [u8; 32]) -> Self {
        bytes.reverse();
        Self(bytes)
    }

    /// Parses a big-endian hex string, with or without a `0x` prefix.
    pub fn from_hex(hex_str: &str) -> CoreResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(hex_str)
            .map_err(|e| CoreError::config(format!("invalid hash hex: {e}")))?;
        if bytes.len() != Self::LENGTH {
            return Err(CoreError::config(format!(
                "hash must be {} bytes, got {}",
                Self::LENGTH,
                bytes.len()
            )));
        }
        let mut be = [0u8; 32];
        be.copy_from_slice(&bytes);
        Ok(Self::from_be_bytes(be))
    }

    /// Bytes in wire (little-endian) order.
    pub fn as_le_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for H256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut be = self.0;
        be.reverse();
        f.write_str(&hex::encode(be))
    }
}

impl Serializable for H256 {
    fn size(&self) -> usize {
        Self::LENGTH
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        Ok(Self(reader.read_array()?))
    }
}

impl Serialize for H256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{self}"))
    }
}

impl<'de> Deserialize<'de> for H256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        H256::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reverses_wire_order() {
        let mut le = [0u8; 32];
        le[0] = 0xAA;
        let hash = H256::from_le_bytes(le);
        assert!(hash.to_string().ends_with("aa"));
    }

    #[test]
    fn hex_round_trip() {
        let hash =
            H256::from_hex("0x2b2d8a6ab286b1253a7a16561fe1dbb5a79906f8b5bab654a4b1d3ac9ca5d9e1")
                .unwrap();
        assert_eq!(
            hash.to_string(),
            "2b2d8a6ab286b1253a7a16561fe1dbb5a79906f8b5bab654a4b1d3ac9ca5d9e1"
        );
    }
}
