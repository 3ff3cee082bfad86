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

//! Core value types: hashes and contract parameters.

mod h160;
mod h256;
mod parameter;

pub use h160::H160;
pub use h256::H256;
pub use parameter::ContractParameter;
