// Copyright (C) 2015-2025 The Neo Project.
//
// config.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use serde::{Deserialize, Serialize};

/// Network identity threaded through every component that signs or
/// renders addresses. Immutable; build one per target network instead
/// of relying on process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network number. Its little-endian bytes prefix the signing payload,
    /// which ties every signature to one network.
    pub magic: u32,
    /// Version byte of base58-check addresses.
    pub address_version: u8,
    /// Largest allowed distance between the current block height and a
    /// transaction's `valid_until_block`.
    pub max_valid_until_block_increment: u32,
}

/// Address version byte used by all Neo N3 networks.
pub const DEFAULT_ADDRESS_VERSION: u8 = 0x35;

/// Default protocol window for `valid_until_block`.
pub const DEFAULT_MAX_VALID_UNTIL_BLOCK_INCREMENT: u32 = 5760;

impl NetworkConfig {
    /// Neo N3 MainNet.
    pub fn main_net() -> Self {
        Self::private_net(0x004F_454E)
    }

    /// Neo N3 TestNet.
    pub fn test_net() -> Self {
        Self::private_net(0x3254_334E)
    }

    /// A private network with the given magic and default N3 parameters.
    pub fn private_net(magic: u32) -> Self {
        Self {
            magic,
            address_version: DEFAULT_ADDRESS_VERSION,
            max_valid_until_block_increment: DEFAULT_MAX_VALID_UNTIL_BLOCK_INCREMENT,
        }
    }

    /// The magic as the 4 little-endian bytes used in signing payloads.
    pub fn magic_bytes(&self) -> [u8; 4] {
        self.magic.to_le_bytes()
    }
}
