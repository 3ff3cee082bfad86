// Copyright (C) 2015-2025 The Neo Project.
//
// error.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use num_bigint::BigInt;
use thiserror::Error;

use crate::rpc::RpcError;

/// Result type used across the crate.
pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Errors raised while building, signing or encoding transactions.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The caller configured the build incorrectly. Raised synchronously
    /// at build time, never deferred to signing or sending.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The candidate accounts cannot cover the requested amount or fees.
    #[error("insufficient funds: {held} held, {requested} requested")]
    InsufficientFunds {
        /// Total the candidate accounts hold.
        held: BigInt,
        /// Total the caller asked for.
        requested: BigInt,
    },

    /// Script simulation ended in a FAULT state. The reason is the node's
    /// exception text, passed through verbatim.
    #[error("script execution faulted: {0}")]
    VmFault(String),

    /// A binary format violated one of its invariants.
    #[error(transparent)]
    Io(#[from] neotx_io::IoError),

    /// Key handling or signature production failed.
    #[error(transparent)]
    Crypto(#[from] neotx_crypto::CryptoError),

    /// The node collaborator failed; transport errors pass through
    /// unmodified.
    #[error(transparent)]
    Rpc(#[from] RpcError),
}

impl CoreError {
    /// Convenience constructor for [`CoreError::Config`].
    pub fn config(message: impl Into<String>) -> Self {
        CoreError::Config(message.into())
    }
}
