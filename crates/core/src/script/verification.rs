// Copyright (C) 2015-2025 The Neo Project.
//
// verification.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use num_bigint::BigInt;

use neotx_crypto::{PublicKey, COMPRESSED_PUBLIC_KEY_SIZE};
use neotx_io::{var_bytes_size, BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::error::{CoreError, CoreResult};
use crate::script::{InteropService, OpCode, ScriptBuilder};
use crate::types::H160;

/// Upper bound on key count in a multi-sig account.
pub const MAX_MULTISIG_KEYS: usize = 1024;

/// Largest verification script the codec accepts.
const MAX_SCRIPT_SIZE: usize = 65536;

/// The account-locking script whose hash is the account's identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationScript {
    script: Vec<u8>,
}

impl VerificationScript {
    /// Wraps raw script bytes.
    pub fn from_bytes(script: Vec<u8>) -> Self {
        Self { script }
    }

    /// The script for a single-signature account:
    /// `PUSHDATA1 key, SYSCALL CheckSig`.
    pub fn single_sig(key: &PublicKey) -> Self {
        let mut builder = ScriptBuilder::new();
        builder
            .push_data(key.encoded())
            .sys_call(InteropService::SystemCryptoCheckSig);
        Self {
            script: builder.into_bytes(),
        }
    }

    /// The script for an m-of-n multi-signature account.
    ///
    /// Keys are sorted by their compressed encoding before scripting, so
    /// any permutation of the same key set yields the same script hash.
    pub fn multi_sig(keys: &[PublicKey], threshold: usize) -> CoreResult<Self> {
        if threshold < 1 {
            return Err(CoreError::config("signing threshold must be at least 1"));
        }
        if threshold > keys.len() {
            return Err(CoreError::config(format!(
                "signing threshold {} exceeds the key count {}",
                threshold,
                keys.len()
            )));
        }
        if keys.len() > MAX_MULTISIG_KEYS {
            return Err(CoreError::config(format!(
                "{} keys exceed the multi-sig maximum of {}",
                keys.len(),
                MAX_MULTISIG_KEYS
            )));
        }
        let mut sorted: Vec<&PublicKey> = keys.iter().collect();
        sorted.sort();

        let mut builder = ScriptBuilder::new();
        builder.push_integer(&BigInt::from(threshold))?;
        for key in &sorted {
            builder.push_data(key.encoded());
        }
        builder.push_integer(&BigInt::from(keys.len()))?;
        builder.sys_call(InteropService::SystemCryptoCheckMultisig);
        Ok(Self {
            script: builder.into_bytes(),
        })
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    /// The script hash, the account's canonical identity.
    pub fn script_hash(&self) -> H160 {
        H160::from_script(&self.script)
    }

    pub fn is_single_sig(&self) -> bool {
        self.script.len() == 40
            && self.script[0] == OpCode::PushData1.byte()
            && self.script[1] == COMPRESSED_PUBLIC_KEY_SIZE as u8
            && self.script[35] == OpCode::SysCall.byte()
            && self.script[36..40] == InteropService::SystemCryptoCheckSig.hash()
    }

    pub fn is_multi_sig(&self) -> bool {
        self.parse_multi_sig().is_some()
    }

    /// How many signatures satisfy this script.
    pub fn signing_threshold(&self) -> CoreResult<usize> {
        if self.is_single_sig() {
            return Ok(1);
        }
        self.parse_multi_sig()
            .map(|(m, _)| m)
            .ok_or_else(|| CoreError::config("script is neither single-sig nor multi-sig"))
    }

    /// How many accounts participate in this script.
    pub fn nr_of_accounts(&self) -> CoreResult<usize> {
        Ok(self.public_keys()?.len())
    }

    /// The public keys the script checks against, in script order.
    pub fn public_keys(&self) -> CoreResult<Vec<PublicKey>> {
        if self.is_single_sig() {
            let key = PublicKey::from_bytes(&self.script[2..35])?;
            return Ok(vec![key]);
        }
        self.parse_multi_sig()
            .map(|(_, keys)| keys)
            .ok_or_else(|| CoreError::config("script is neither single-sig nor multi-sig"))
            .and_then(|keys| {
                keys.into_iter()
                    .map(|raw| PublicKey::from_bytes(&raw).map_err(CoreError::from))
                    .collect()
            })
    }

    /// Parses an m-of-n layout, answering the threshold and raw keys.
    fn parse_multi_sig(&self) -> Option<(usize, Vec<[u8; COMPRESSED_PUBLIC_KEY_SIZE]>)> {
        let s = &self.script;
        let (threshold, mut pos) = read_pushed_int(s, 0)?;
        let mut keys = Vec::new();
        while pos + 1 < s.len()
            && s[pos] == OpCode::PushData1.byte()
            && s[pos + 1] == COMPRESSED_PUBLIC_KEY_SIZE as u8
        {
            let start = pos + 2;
            let end = start + COMPRESSED_PUBLIC_KEY_SIZE;
            if end > s.len() {
                return None;
            }
            let mut key = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
            key.copy_from_slice(&s[start..end]);
            keys.push(key);
            pos = end;
        }
        let (count, pos) = read_pushed_int(s, pos)?;
        if count != keys.len() || threshold < 1 || threshold > count {
            return None;
        }
        let tail = &s[pos..];
        if tail.len() != 5
            || tail[0] != OpCode::SysCall.byte()
            || tail[1..] != InteropService::SystemCryptoCheckMultisig.hash()
        {
            return None;
        }
        Some((threshold, keys))
    }
}

/// Decodes a pushed small integer at `pos`, answering the value and the
/// position after it. Covers the encodings multi-sig scripts use.
fn read_pushed_int(script: &[u8], pos: usize) -> Option<(usize, usize)> {
    let op = *script.get(pos)?;
    if (OpCode::Push1.byte()..=OpCode::Push16.byte()).contains(&op) {
        return Some(((op - OpCode::Push0.byte()) as usize, pos + 1));
    }
    if op == OpCode::PushInt8.byte() {
        return Some((*script.get(pos + 1)? as usize, pos + 2));
    }
    if op == OpCode::PushInt16.byte() {
        let lo = *script.get(pos + 1)? as usize;
        let hi = *script.get(pos + 2)? as usize;
        return Some((hi << 8 | lo, pos + 3));
    }
    None
}

impl Serializable for VerificationScript {
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
