// Copyright (C) 2015-2025 The Neo Project.
//
// witness.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neotx_crypto::{KeyPair, SIGNATURE_SIZE};
use neotx_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::error::{CoreError, CoreResult};
use crate::script::{InvocationScript, VerificationScript};
use crate::types::H160;

/// The proof that a signer authorized a transaction: an invocation
/// script supplying signatures and the verification script they satisfy.
///
/// Witnesses pair 1:1, positionally, with the transaction's signers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    invocation: InvocationScript,
    verification: VerificationScript,
}

impl Witness {
    pub fn new(invocation: InvocationScript, verification: VerificationScript) -> Self {
        Self {
            invocation,
            verification,
        }
    }

    /// Signs `message` with the key and wraps the signature in a
    /// single-sig witness.
    pub fn from_key(message: &[u8], key_pair: &KeyPair) -> CoreResult<Self> {
        let signature = key_pair.sign_message(message)?;
        Ok(Self {
            invocation: InvocationScript::from_signature(&signature),
            verification: VerificationScript::single_sig(key_pair.public_key()),
        })
    }

    /// Aggregates signatures into a multi-sig witness.
    ///
    /// Fails when fewer signatures than the script's threshold are
    /// supplied; surplus signatures beyond the threshold are dropped.
    pub fn multi_sig(
        signatures: &[[u8; SIGNATURE_SIZE]],
        verification: &VerificationScript,
    ) -> CoreResult<Self> {
        let threshold = verification.signing_threshold()?;
        if signatures.len() < threshold {
            return Err(CoreError::config(format!(
                "{} signatures do not meet the signing threshold {}",
                signatures.len(),
                threshold
            )));
        }
        Ok(Self {
            invocation: InvocationScript::from_signatures(&signatures[..threshold]),
            verification: verification.clone(),
        })
    }

    pub fn invocation(&self) -> &InvocationScript {
        &self.invocation
    }

    pub fn verification(&self) -> &VerificationScript {
        &self.verification
    }

    /// The hash of the verification script, identifying which signer
    /// this witness belongs to.
    pub fn script_hash(&self) -> H160 {
        self.verification.script_hash()
    }
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        self.invocation.size() + self.verification.size()
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.invocation.serialize(writer)?;
        self.verification.serialize(writer)
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        Ok(Self {
            invocation: InvocationScript::deserialize(reader)?,
            verification: VerificationScript::deserialize(reader)?,
        })
    }
}
