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

//! Transactions, signers, witnesses and the builder.

mod attribute;
mod builder;
pub mod fees;
mod signer;
mod transaction;
mod witness;

pub use attribute::TransactionAttribute;
pub use builder::{TransactionBuilder, UnsignedTransaction};
pub use signer::{Signer, WitnessScope, MAX_ALLOWED_ITEMS};
pub use transaction::{
    Transaction, HEADER_SIZE, MAX_SIGNER_SUBITEMS, MAX_TRANSACTION_ATTRIBUTES,
    MAX_TRANSACTION_SIZE,
};
pub use witness::Witness;
