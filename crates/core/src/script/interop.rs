// Copyright (C) 2015-2025 The Neo Project.
//
// interop.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neotx_crypto::sha256;

/// Price of one ECDSA signature check in GAS fractions.
pub const CHECK_SIG_PRICE: i64 = 1_000_000;

/// The interop services invocation scripts call into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteropService {
    SystemContractCall,
    SystemCryptoCheckSig,
    SystemCryptoCheckMultisig,
}

impl InteropService {
    /// The service's registered name.
    pub fn name(self) -> &'static str {
        match self {
            InteropService::SystemContractCall => "System.Contract.Call",
            InteropService::SystemCryptoCheckSig => "System.Crypto.CheckSig",
            InteropService::SystemCryptoCheckMultisig => "System.Crypto.CheckMultisig",
        }
    }

    /// The 4-byte descriptor the SYSCALL instruction carries: the first
    /// four bytes of SHA-256 over the ASCII name.
    pub fn hash(self) -> [u8; 4] {
        let digest = sha256(self.name().as_bytes());
        [digest[0], digest[1], digest[2], digest[3]]
    }

    /// Execution-fee price, where the service has a fixed one.
    ///
    /// CheckMultisig scales with the key count and is priced by the fee
    /// model instead.
    pub fn price(self) -> i64 {
        match self {
            InteropService::SystemCryptoCheckSig => CHECK_SIG_PRICE,
            _ => 0,
        }
    }
}
