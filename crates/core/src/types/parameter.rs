// Copyright (C) 2015-2025 The Neo Project.
//
// parameter.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use num_bigint::BigInt;

use crate::types::{H160, H256};
use neotx_crypto::PublicKey;

/// A typed argument for a contract invocation.
///
/// The closed set of parameter kinds the script assembler can encode.
/// `Array` and `Map` nest arbitrarily; the assembler bounds the depth.
#[derive(Debug, Clone, PartialEq)]
pub enum ContractParameter {
    /// The VM's null value.
    Any,
    Boolean(bool),
    Integer(BigInt),
    ByteArray(Vec<u8>),
    String(String),
    Hash160(H160),
    Hash256(H256),
    PublicKey(PublicKey),
    Signature([u8; 64]),
    Array(Vec<ContractParameter>),
    Map(Vec<(ContractParameter, ContractParameter)>),
}

impl ContractParameter {
    pub fn bool(value: bool) -> Self {
        ContractParameter::Boolean(value)
    }

    pub fn integer(value: impl Into<BigInt>) -> Self {
        ContractParameter::Integer(value.into())
    }

    pub fn byte_array(value: impl Into<Vec<u8>>) -> Self {
        ContractParameter::ByteArray(value.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        ContractParameter::String(value.into())
    }

    pub fn hash160(value: H160) -> Self {
        ContractParameter::Hash160(value)
    }

    pub fn hash256(value: H256) -> Self {
        ContractParameter::Hash256(value)
    }

    pub fn public_key(value: PublicKey) -> Self {
        ContractParameter::PublicKey(value)
    }

    pub fn signature(value: [u8; 64]) -> Self {
        ContractParameter::Signature(value)
    }

    pub fn array(values: impl Into<Vec<ContractParameter>>) -> Self {
        ContractParameter::Array(values.into())
    }

    pub fn map(entries: impl Into<Vec<(ContractParameter, ContractParameter)>>) -> Self {
        ContractParameter::Map(entries.into())
    }
}

impl From<bool> for ContractParameter {
    fn from(value: bool) -> Self {
        ContractParameter::Boolean(value)
    }
}

impl From<i64> for ContractParameter {
    fn from(value: i64) -> Self {
        ContractParameter::Integer(value.into())
    }
}

impl From<BigInt> for ContractParameter {
    fn from(value: BigInt) -> Self {
        ContractParameter::Integer(value)
    }
}

impl From<H160> for ContractParameter {
    fn from(value: H160) -> Self {
        ContractParameter::Hash160(value)
    }
}

impl From<&str> for ContractParameter {
    fn from(value: &str) -> Self {
        ContractParameter::String(value.to_owned())
    }
}
