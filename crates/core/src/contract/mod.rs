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

//! Contract-side models: the NEF container codec and the fungible
//! token layer with the multi-account transfer planner.

mod nef;
mod token;

pub use nef::{MethodToken, NefFile};
pub use token::{
    plan_transfer, to_fractions, from_fractions, FungibleToken, TokenContract, TransferLine,
    TransferPlan,
};

use once_cell::sync::Lazy;

use crate::types::H160;

/// The native GAS token contract.
pub static GAS_TOKEN: Lazy<H160> = Lazy::new(|| {
    H160::from_hex("d2a4cff31913016155e38e474a2c06d08be276cf").expect("well-formed constant")
});

/// The native NEO token contract.
pub static NEO_TOKEN: Lazy<H160> = Lazy::new(|| {
    H160::from_hex("ef4073a0f2b305a38ec4050e4d3d28bc40ea63f5").expect("well-formed constant")
});
