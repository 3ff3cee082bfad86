// Copyright (C) 2015-2025 The Neo Project.
//
// mod.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The node collaborator interface.
//!
//! The engine is call-and-response: every balance, fee and simulation
//! lookup is one blocking request to a [`NeoClient`]. Transports live
//! outside this crate; tests use in-memory implementations.

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tx::Signer;
use crate::types::{ContractParameter, H160, H256};

/// Transport-level failure of a node request. Passed through to callers
/// unmodified; retry policy belongs to the transport.
#[derive(Debug, Error)]
#[error("rpc request failed: {0}")]
pub struct RpcError(pub String);

/// Result type for node requests.
pub type RpcResult<T> = std::result::Result<T, RpcError>;

/// Final VM state of a simulated script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VmState {
    #[serde(rename = "HALT")]
    Halt,
    #[serde(rename = "FAULT")]
    Fault,
}

/// One item left on the VM evaluation stack after simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StackValue {
    Integer(BigInt),
    ByteString(Vec<u8>),
    Boolean(bool),
    Any,
}

impl StackValue {
    /// Reads the value as an integer where the VM type allows it.
    pub fn as_integer(&self) -> Option<BigInt> {
        match self {
            StackValue::Integer(i) => Some(i.clone()),
            StackValue::Boolean(b) => Some(BigInt::from(*b as u8)),
            _ => None,
        }
    }
}

/// Outcome of a script simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationResult {
    pub state: VmState,
    /// Execution fee consumed, in GAS fractions.
    pub gas_consumed: i64,
    /// The VM's fault reason, when `state` is [`VmState::Fault`].
    pub exception: Option<String>,
    pub stack: Vec<StackValue>,
}

impl InvocationResult {
    pub fn halted(&self) -> bool {
        self.state == VmState::Halt
    }

    /// The first stack item, where simulation produced one.
    pub fn first_stack_item(&self) -> Option<&StackValue> {
        self.stack.first()
    }
}

/// The external node services the engine consumes.
///
/// Blocking request-response; no retries or caching happen behind this
/// trait.
pub trait NeoClient {
    /// Simulates the script and reports consumed gas and VM state.
    fn invoke_script(&self, script: &[u8], signers: &[Signer]) -> RpcResult<InvocationResult>;

    /// Simulates a single contract method call.
    fn invoke_function(
        &self,
        contract: &H160,
        method: &str,
        params: &[ContractParameter],
        signers: &[Signer],
    ) -> RpcResult<InvocationResult>;

    /// Current block height plus one.
    fn block_count(&self) -> RpcResult<u32>;

    /// The network's fee per transaction byte, in GAS fractions.
    ///
    /// Defaults to the protocol's standard value for clients that do
    /// not expose the policy contract.
    fn fee_per_byte(&self) -> RpcResult<i64> {
        Ok(crate::tx::fees::GAS_PER_BYTE)
    }

    /// Broadcasts signed transaction bytes, answering the transaction id.
    fn send_raw_transaction(&self, bytes: &[u8]) -> RpcResult<H256>;
}
