// Copyright (C) 2015-2025 The Neo Project.
//
// signer.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neotx_crypto::{PublicKey, COMPRESSED_PUBLIC_KEY_SIZE};
use neotx_io::{list_size, var_size, BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

use crate::error::{CoreError, CoreResult};
use crate::types::H160;

/// Limit on entries in a signer's contract or group allow-list.
pub const MAX_ALLOWED_ITEMS: usize = 16;

/// How far a signer's authorization reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WitnessScope {
    /// Fee-only; the signature authorizes nothing beyond paying.
    None = 0x00,
    /// Valid only when the entry script calls the verifying contract.
    CalledByEntry = 0x01,
    /// Valid only inside the contracts on the allow-list.
    CustomContracts = 0x10,
    /// Valid only inside contracts of the groups on the allow-list.
    CustomGroups = 0x20,
    /// Valid everywhere. Combines with nothing else.
    Global = 0x80,
}

impl WitnessScope {
    pub fn byte(self) -> u8 {
        self as u8
    }
}

/// An authorizing party of a transaction: an account hash plus the
/// scope its witness is valid in.
///
/// The first signer of a transaction is the fee-paying sender. A
/// transaction carries at most one signer per account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    account: H160,
    scopes: u8,
    allowed_contracts: Vec<H160>,
    allowed_groups: Vec<PublicKey>,
}

impl Signer {
    /// A fee-only signer.
    pub fn none(account: H160) -> Self {
        Self::with_scope(account, WitnessScope::None)
    }

    /// A signer valid for calls made directly by the entry script.
    pub fn called_by_entry(account: H160) -> Self {
        Self::with_scope(account, WitnessScope::CalledByEntry)
    }

    /// A signer valid everywhere.
    pub fn global(account: H160) -> Self {
        Self::with_scope(account, WitnessScope::Global)
    }

    fn with_scope(account: H160, scope: WitnessScope) -> Self {
        Self {
            account,
            scopes: scope.byte(),
            allowed_contracts: Vec::new(),
            allowed_groups: Vec::new(),
        }
    }

    /// A signer valid only inside the given contracts.
    pub fn custom_contracts(account: H160, contracts: Vec<H160>) -> CoreResult<Self> {
        Self::none(account).allow_contracts(contracts)
    }

    /// A signer valid only inside contracts of the given groups.
    pub fn custom_groups(account: H160, groups: Vec<PublicKey>) -> CoreResult<Self> {
        Self::none(account).allow_groups(groups)
    }

    /// Adds contracts to the allow-list, picking up the
    /// `CustomContracts` scope.
    pub fn allow_contracts(mut self, contracts: Vec<H160>) -> CoreResult<Self> {
        if self.has_scope(WitnessScope::Global) {
            return Err(CoreError::config(
                "a global signer cannot carry contract allow-lists",
            ));
        }
        if self.allowed_contracts.len() + contracts.len() > MAX_ALLOWED_ITEMS {
            return Err(CoreError::config(format!(
                "allow-list exceeds {MAX_ALLOWED_ITEMS} contracts"
            )));
        }
        self.scopes |= WitnessScope::CustomContracts.byte();
        self.allowed_contracts.extend(contracts);
        Ok(self)
    }

    /// Adds groups to the allow-list, picking up the `CustomGroups`
    /// scope.
    pub fn allow_groups(mut self, groups: Vec<PublicKey>) -> CoreResult<Self> {
        if self.has_scope(WitnessScope::Global) {
            return Err(CoreError::config(
                "a global signer cannot carry group allow-lists",
            ));
        }
        if self.allowed_groups.len() + groups.len() > MAX_ALLOWED_ITEMS {
            return Err(CoreError::config(format!(
                "allow-list exceeds {MAX_ALLOWED_ITEMS} groups"
            )));
        }
        self.scopes |= WitnessScope::CustomGroups.byte();
        self.allowed_groups.extend(groups);
        Ok(self)
    }

    pub fn account(&self) -> &H160 {
        &self.account
    }

    pub fn scope_byte(&self) -> u8 {
        self.scopes
    }

    pub fn has_scope(&self, scope: WitnessScope) -> bool {
        if scope == WitnessScope::None {
            return self.scopes == 0;
        }
        self.scopes & scope.byte() != 0
    }

    pub fn allowed_contracts(&self) -> &[H160] {
        &self.allowed_contracts
    }

    pub fn allowed_groups(&self) -> &[PublicKey] {
        &self.allowed_groups
    }
}

impl Serializable for Signer {
    fn size(&self) -> usize {
        let mut size = H160::LENGTH + 1;
        if self.has_scope(WitnessScope::CustomContracts) {
            size += list_size(&self.allowed_contracts);
        }
        if self.has_scope(WitnessScope::CustomGroups) {
            size += var_size(self.allowed_groups.len() as u64)
                + self.allowed_groups.len() * COMPRESSED_PUBLIC_KEY_SIZE;
        }
        size
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.account.serialize(writer)?;
        writer.write_u8(self.scopes);
        if self.has_scope(WitnessScope::CustomContracts) {
            writer.write_serializable_list(&self.allowed_contracts)?;
        }
        if self.has_scope(WitnessScope::CustomGroups) {
            writer.write_var_int(self.allowed_groups.len() as u64);
            for group in &self.allowed_groups {
                writer.write_bytes(group.encoded());
            }
        }
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        let account = H160::deserialize(reader)?;
        let scopes = reader.read_u8()?;
        let mut signer = Signer {
            account,
            scopes,
            allowed_contracts: Vec::new(),
            allowed_groups: Vec::new(),
        };
        if signer.has_scope(WitnessScope::CustomContracts) {
            signer.allowed_contracts = reader.read_serializable_list(MAX_ALLOWED_ITEMS)?;
        }
        if signer.has_scope(WitnessScope::CustomGroups) {
            let count = reader.read_var_int(MAX_ALLOWED_ITEMS as u64)? as usize;
            for _ in 0..count {
                let bytes: [u8; COMPRESSED_PUBLIC_KEY_SIZE] = reader.read_array()?;
                let key = PublicKey::from_bytes(&bytes)
                    .map_err(|e| IoError::invalid("group public key", e.to_string()))?;
                signer.allowed_groups.push(key);
            }
        }
        Ok(signer)
    }
}
