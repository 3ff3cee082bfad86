// Copyright (C) 2015-2025 The Neo Project.
//
// account.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neotx_crypto::{CryptoResult, KeyPair, PublicKey};

use crate::config::NetworkConfig;
use crate::error::CoreResult;
use crate::script::VerificationScript;
use crate::types::H160;

/// One account of a wallet: a script hash, usually a verification
/// script, and sometimes a private key.
///
/// Immutable once constructed; the script hash always equals the hash
/// of the verification script where one exists.
#[derive(Debug)]
pub struct Account {
    key_pair: Option<KeyPair>,
    verification_script: Option<VerificationScript>,
    script_hash: H160,
    label: Option<String>,
}

impl Account {
    /// A single-sig account holding its private key.
    pub fn from_key_pair(key_pair: KeyPair) -> Self {
        let verification_script = VerificationScript::single_sig(key_pair.public_key());
        let script_hash = verification_script.script_hash();
        Self {
            key_pair: Some(key_pair),
            verification_script: Some(verification_script),
            script_hash,
            label: None,
        }
    }

    /// A single-sig account imported from a WIF string.
    pub fn from_wif(wif: &str) -> CryptoResult<Self> {
        Ok(Self::from_key_pair(KeyPair::from_wif(wif)?))
    }

    /// A signature-less account for a known public key.
    pub fn from_public_key(key: &PublicKey) -> Self {
        let verification_script = VerificationScript::single_sig(key);
        let script_hash = verification_script.script_hash();
        Self {
            key_pair: None,
            verification_script: Some(verification_script),
            script_hash,
            label: None,
        }
    }

    /// An m-of-n multi-sig account. Holds no key itself; the component
    /// keys live in their own single-sig accounts.
    pub fn multi_sig(keys: &[PublicKey], threshold: usize) -> CoreResult<Self> {
        let verification_script = VerificationScript::multi_sig(keys, threshold)?;
        let script_hash = verification_script.script_hash();
        Ok(Self {
            key_pair: None,
            verification_script: Some(verification_script),
            script_hash,
            label: None,
        })
    }

    /// A watch-only account known only by its script hash.
    pub fn watch_only(script_hash: H160) -> Self {
        Self {
            key_pair: None,
            verification_script: None,
            script_hash,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn key_pair(&self) -> Option<&KeyPair> {
        self.key_pair.as_ref()
    }

    pub fn verification_script(&self) -> Option<&VerificationScript> {
        self.verification_script.as_ref()
    }

    pub fn script_hash(&self) -> &H160 {
        &self.script_hash
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn address(&self, config: &NetworkConfig) -> String {
        self.script_hash.to_address(config)
    }

    pub fn is_multi_sig(&self) -> bool {
        self.verification_script
            .as_ref()
            .map(VerificationScript::is_multi_sig)
            .unwrap_or(false)
    }

    /// Whether the account can sign on its own.
    pub fn has_key(&self) -> bool {
        self.key_pair.is_some()
    }
}
