// Copyright (C) 2015-2025 The Neo Project.
//
// invocation.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neotx_crypto::SIGNATURE_SIZE;
use neotx_io::{var_bytes_size, BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::script::{OpCode, ScriptBuilder};

/// Largest invocation script the codec accepts.
const MAX_SCRIPT_SIZE: usize = 65536;

/// The witness half that supplies signatures to a verification script.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InvocationScript {
    script: Vec<u8>,
}

impl InvocationScript {
    /// An empty script, the placeholder for a not-yet-signed witness.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps raw script bytes.
    pub fn from_bytes(script: Vec<u8>) -> Self {
        Self { script }
    }

    /// A script pushing one signature.
    pub fn from_signature(signature: &[u8; SIGNATURE_SIZE]) -> Self {
        Self::from_signatures(std::slice::from_ref(signature))
    }

    /// A script pushing each signature in the given order.
    pub fn from_signatures(signatures: &[[u8; SIGNATURE_SIZE]]) -> Self {
        let mut builder = ScriptBuilder::new();
        for signature in signatures {
            builder.push_data(signature);
        }
        Self {
            script: builder.into_bytes(),
        }
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// Unbundles the signatures this script pushes.
    ///
    /// Answers an empty list when the script is not a plain sequence of
    /// 64-byte pushes.
    pub fn signatures(&self) -> Vec<[u8; SIGNATURE_SIZE]> {
        let mut signatures = Vec::new();
        let mut pos = 0;
        while pos + 2 <= self.script.len() {
            if self.script[pos] != OpCode::PushData1.byte()
                || self.script[pos + 1] != SIGNATURE_SIZE as u8
            {
                return Vec::new();
            }
            let start = pos + 2;
            let end = start + SIGNATURE_SIZE;
            if end > self.script.len() {
                return Vec::new();
            }
            let mut signature = [0u8; SIGNATURE_SIZE];
            signature.copy_from_slice(&self.script[start..end]);
            signatures.push(signature);
            pos = end;
        }
        if pos != self.script.len() {
            return Vec::new();
        }
        signatures
    }
}

impl Serializable for InvocationScript {
    fn size(&self) -> usize {
        var_bytes_size(self.script.len())
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.script);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        Ok(Self {
            script: reader.read_var_bytes(MAX_SCRIPT_SIZE)?,
        })
    }
}
