// Copyright (C) 2015-2025 The Neo Project.
//
// lib.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! Client-side transaction construction for Neo N3.
//!
//! The crate turns a high-level intent ("invoke this method", "transfer
//! this token") into byte-exact, fee'd, witnessed transactions:
//!
//! - [`script`] assembles NeoVM bytecode for contract invocations;
//! - [`tx`] models signers, witnesses and the wire format, and hosts
//!   the [`tx::TransactionBuilder`] with its fee model;
//! - [`wallet`] holds accounts (single-sig, multi-sig, watch-only);
//! - [`contract`] carries the NEF container codec and the fungible-token
//!   layer with the multi-account transfer planner;
//! - [`rpc`] defines the node collaborator interface the builder talks to.

pub mod config;
pub mod contract;
pub mod error;
pub mod rpc;
pub mod script;
pub mod tx;
pub mod types;
pub mod wallet;

pub use config::NetworkConfig;
pub use error::{CoreError, CoreResult};
pub use types::{ContractParameter, H160, H256};
