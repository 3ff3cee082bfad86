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

//! NeoVM script assembly.
//!
//! [`ScriptBuilder`] emits invocation bytecode for contract calls;
//! [`VerificationScript`] and [`InvocationScript`] are the two halves
//! of a witness.

mod builder;
mod interop;
mod invocation;
mod op_code;
mod verification;

pub use builder::ScriptBuilder;
pub use interop::{InteropService, CHECK_SIG_PRICE};
pub use invocation::InvocationScript;
pub use op_code::OpCode;
pub use verification::{VerificationScript, MAX_MULTISIG_KEYS};
