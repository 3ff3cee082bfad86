// Copyright (C) 2015-2025 The Neo Project.
//
// h160.rs file belongs to the neo project and is free
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

use crate::config::NetworkConfig;
use crate::error::{CoreError, CoreResult};

/// A 160-bit hash identifying an account or contract.
///
/// Bytes are stored in wire order (little-endian); the textual form is
/// the reversed, "big-endian" hex string every explorer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct H160([u8; 20]);

impl H160 {
    pub const LENGTH: usize = 20;

    pub fn zero() -> Self {
        Self([0u8; 20])
    }

    /// Wraps bytes already in wire (little-endian) order.
    pub fn from_le_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The script hash of the given script bytes.
    pub fn from_script(script: &[u8]) -> Self {
        Self(neotx_crypto::hash160(script))
    }

    /// Parses a big-endian hex string, with or without a `0x` prefix.
    pub fn from_hex(hex_str: &str) -> CoreResult<Self> {
        let hex_str = hex_str.strip_prefix("0x").unwrap_or(hex_str);
        let bytes = hex::decode(hex_str)
            .map_err(|e| CoreError::config(format!("invalid script hash hex: {e}")))?;
        if bytes.len() != Self::LENGTH {
            return Err(CoreError::config(format!(
                "script hash must be {} bytes, got {}",
                Self::LENGTH,
                bytes.len()
            )));
        }
        let mut le = [0u8; 20];
        for (i, b) in bytes.iter().rev().enumerate() {
            le[i] = *b;
        }
        Ok(Self(le))
    }

    /// Decodes a base58-check address into its script hash.
    pub fn from_address(address: &str, config: &NetworkConfig) -> CoreResult<Self> {
        let payload = bs58::decode(address)
            .with_check(None)
            .into_vec()
            .map_err(|e| CoreError::config(format!("invalid address {address}: {e}")))?;
        if payload.len() != Self::LENGTH + 1 {
            return Err(CoreError::config(format!(
                "address payload is {} bytes, expected {}",
                payload.len(),
                Self::LENGTH + 1
            )));
        }
        if payload[0] != config.address_version {
            return Err(CoreError::config(format!(
                "address version 0x{:02x} does not match the network's 0x{:02x}",
                payload[0], config.address_version
            )));
        }
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&payload[1..]);
        Ok(Self(bytes))
    }

    /// Renders the base58-check address for this hash.
    pub fn to_address(&self, config: &NetworkConfig) -> String {
        let mut payload = Vec::with_capacity(Self::LENGTH + 1);
        payload.push(config.address_version);
        payload.extend_from_slice(&self.0);
        bs58::encode(payload).with_check().into_string()
    }

    /// Bytes in wire (little-endian) order.
    pub fn as_le_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for H160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut be = self.0;
        be.reverse();
        f.write_str(&hex::encode(be))
    }
}

impl Serializable for H160 {
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

impl Serialize for H160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("0x{self}"))
    }
}

impl<'de> Deserialize<'de> for H160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        H160::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
