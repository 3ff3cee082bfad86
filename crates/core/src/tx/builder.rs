// Copyright (C) 2015-2025 The Neo Project.
//
// builder.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use num_bigint::BigInt;
use tracing::debug;

use neotx_io::var_size;

use crate::config::NetworkConfig;
use crate::contract::GAS_TOKEN;
use crate::error::{CoreError, CoreResult};
use crate::rpc::NeoClient;
use crate::script::{OpCode, ScriptBuilder, VerificationScript};
use crate::tx::{
    fees, Signer, Transaction, TransactionAttribute, Witness, MAX_SIGNER_SUBITEMS,
    MAX_TRANSACTION_ATTRIBUTES,
};
use crate::types::{ContractParameter, H160};
use crate::wallet::Wallet;

/// Configures and builds transactions in a fixed phase order: script,
/// signer reconciliation, fee computation, signing.
///
/// One builder produces one transaction; build independent transactions
/// on independent builders.
#[derive(Debug)]
pub struct TransactionBuilder<'a> {
    config: NetworkConfig,
    version: u8,
    nonce: Option<u32>,
    valid_until_block: Option<u32>,
    signers: Vec<Signer>,
    sender: Option<H160>,
    script: Vec<u8>,
    fail_on_false: bool,
    additional_network_fee: i64,
    attributes: Vec<TransactionAttribute>,
    wallet: Option<&'a Wallet>,
    check_fee_coverage: bool,
}

impl<'a> TransactionBuilder<'a> {
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            version: 0,
            nonce: None,
            valid_until_block: None,
            signers: Vec::new(),
            sender: None,
            script: Vec::new(),
            fail_on_false: false,
            additional_network_fee: 0,
            attributes: Vec::new(),
            wallet: None,
            check_fee_coverage: false,
        }
    }

    pub fn version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Overrides the random nonce.
    pub fn nonce(mut self, nonce: u32) -> Self {
        self.nonce = Some(nonce);
        self
    }

    /// Overrides the default expiry height.
    pub fn valid_until_block(mut self, height: u32) -> Self {
        self.valid_until_block = Some(height);
        self
    }

    /// The wallet accounts and keys are resolved against.
    pub fn wallet(mut self, wallet: &'a Wallet) -> Self {
        self.wallet = Some(wallet);
        self
    }

    /// The fee-paying account. A signer is synthesized for it when none
    /// exists.
    pub fn sender(mut self, sender: H160) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Adds an explicit signer. A second signer for the same account is
    /// a configuration error.
    pub fn signer(mut self, signer: Signer) -> CoreResult<Self> {
        if self.signers.iter().any(|s| s.account() == signer.account()) {
            return Err(CoreError::config(format!(
                "duplicate signer for account {}",
                signer.account()
            )));
        }
        if self.signers.len() == MAX_SIGNER_SUBITEMS {
            return Err(CoreError::config(format!(
                "a transaction carries at most {MAX_SIGNER_SUBITEMS} signers"
            )));
        }
        self.signers.push(signer);
        Ok(self)
    }

    /// Replaces the signer list.
    pub fn signers(mut self, signers: Vec<Signer>) -> CoreResult<Self> {
        self.signers.clear();
        for signer in signers {
            self = self.signer(signer)?;
        }
        Ok(self)
    }

    /// Sets the invocation script.
    pub fn script(mut self, script: Vec<u8>) -> Self {
        self.script = script;
        self
    }

    /// Appends one contract call to the script. Repeated calls build a
    /// multi-call script.
    pub fn contract_call(
        mut self,
        contract: &H160,
        method: &str,
        params: &[ContractParameter],
    ) -> CoreResult<Self> {
        let mut builder = ScriptBuilder::new();
        builder.contract_call(contract, method, params)?;
        self.script.extend(builder.into_bytes());
        Ok(self)
    }

    /// Appends a trailing ASSERT so a `false` result faults instead of
    /// silently halting. Applied once, at build time.
    pub fn fail_on_false(mut self) -> Self {
        self.fail_on_false = true;
        self
    }

    /// Extra network fee on top of the computed one, e.g. for priority.
    pub fn additional_network_fee(mut self, fee: i64) -> Self {
        self.additional_network_fee = fee;
        self
    }

    /// Adds an attribute; duplicates are dropped.
    pub fn attribute(mut self, attribute: TransactionAttribute) -> CoreResult<Self> {
        if self.attributes.contains(&attribute) {
            return Ok(self);
        }
        if self.attributes.len() == MAX_TRANSACTION_ATTRIBUTES {
            return Err(CoreError::config(format!(
                "a transaction carries at most {MAX_TRANSACTION_ATTRIBUTES} attributes"
            )));
        }
        self.attributes.push(attribute);
        Ok(self)
    }

    /// Fails the build when the sender's GAS balance does not cover the
    /// computed fees.
    pub fn check_sender_can_cover_fees(mut self) -> Self {
        self.check_fee_coverage = true;
        self
    }

    /// Runs the build phases and answers a fee-set, signer-set, not yet
    /// witnessed transaction.
    pub fn build_unsigned(self, client: &impl NeoClient) -> CoreResult<UnsignedTransaction> {
        if self.script.is_empty() {
            return Err(CoreError::config("cannot build a transaction without a script"));
        }
        let wallet = self
            .wallet
            .ok_or_else(|| CoreError::config("cannot build a transaction without a wallet"))?;

        let mut script = self.script.clone();
        if self.fail_on_false {
            script.push(OpCode::Assert.byte());
        }
        debug!(script_len = script.len(), "script set");

        let signers = self.reconcile_signers(wallet)?;
        debug!(signers = signers.len(), "signers resolved");

        let valid_until_block = match self.valid_until_block {
            Some(height) => height,
            None => {
                let height = client.block_count()?;
                height + self.config.max_valid_until_block_increment - 1
            }
        };

        let result = client.invoke_script(&script, &signers)?;
        if !result.halted() {
            return Err(CoreError::VmFault(
                result
                    .exception
                    .unwrap_or_else(|| "no fault reason reported".into()),
            ));
        }
        let system_fee = result.gas_consumed;

        let network_fee = self.network_fee(client, wallet, &signers, &script, system_fee)?;
        debug!(system_fee, network_fee, "fees computed");

        let tx = Transaction {
            version: self.version,
            nonce: self.nonce.unwrap_or_else(rand::random),
            system_fee,
            network_fee,
            valid_until_block,
            signers,
            attributes: self.attributes.clone(),
            script,
            witnesses: Vec::new(),
        };

        if self.check_fee_coverage {
            check_fee_coverage(client, &tx)?;
        }

        Ok(UnsignedTransaction {
            tx,
            config: self.config,
            provided_witnesses: Vec::new(),
        })
    }

    /// Merges explicit signers with the synthesized default-account or
    /// sender signer. Explicit intent always wins over synthesis.
    fn reconcile_signers(&self, wallet: &Wallet) -> CoreResult<Vec<Signer>> {
        let mut signers = self.signers.clone();
        if signers.is_empty() {
            let sender = match self.sender {
                Some(sender) => sender,
                None => *wallet
                    .default_account()
                    .ok_or_else(|| {
                        CoreError::config("no signers, no sender and no default account")
                    })?
                    .script_hash(),
            };
            signers.push(Signer::called_by_entry(sender));
        } else if let Some(sender) = self.sender {
            if !signers.iter().any(|s| s.account() == &sender) {
                signers.insert(0, Signer::called_by_entry(sender));
            }
        }
        for signer in &signers {
            if !wallet.holds_account(signer.account()) {
                return Err(CoreError::config(format!(
                    "signer account {} is not in the wallet",
                    signer.account()
                )));
            }
        }
        Ok(signers)
    }

    /// Verification execution fee per signer, plus the size fee over
    /// the projected signed length, plus the caller's additional fee.
    fn network_fee(
        &self,
        client: &impl NeoClient,
        wallet: &Wallet,
        signers: &[Signer],
        script: &[u8],
        system_fee: i64,
    ) -> CoreResult<i64> {
        let mut execution_fee = 0i64;
        let mut witness_bytes = 0usize;
        for signer in signers {
            let script = signer_verification_script(wallet, signer)?;
            execution_fee += fees::verification_fee(&script)?;
            witness_bytes += fees::expected_witness_size(&script)?;
        }

        let unsigned = Transaction {
            version: self.version,
            nonce: 0,
            system_fee,
            network_fee: 0,
            valid_until_block: 0,
            signers: signers.to_vec(),
            attributes: self.attributes.clone(),
            script: script.to_vec(),
            witnesses: Vec::new(),
        };
        let signed_size = unsigned.unsigned_size() + var_size(signers.len() as u64) + witness_bytes;

        let fee_per_byte = client.fee_per_byte()?;
        Ok(execution_fee + signed_size as i64 * fee_per_byte + self.additional_network_fee)
    }
}

/// A fee-set transaction awaiting its witnesses.
#[derive(Debug)]
pub struct UnsignedTransaction {
    tx: Transaction,
    config: NetworkConfig,
    provided_witnesses: Vec<Witness>,
}

impl UnsignedTransaction {
    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// The payload a signature over this transaction commits to.
    pub fn hash_data(&self) -> CoreResult<Vec<u8>> {
        self.tx.hash_data(&self.config)
    }

    /// Attaches an externally produced witness, e.g. from an offline
    /// signer. It is matched to its signer by script hash during
    /// [`UnsignedTransaction::sign`].
    pub fn add_witness(&mut self, witness: Witness) {
        self.provided_witnesses.push(witness);
    }

    /// Produces a witness for every signer, in signer order, and
    /// answers the broadcastable transaction.
    ///
    /// Wallet keys sign here; externally added witnesses fill in for
    /// accounts the wallet cannot sign for. A watch-only signer without
    /// an external witness fails the whole signing step.
    pub fn sign(self, wallet: &Wallet) -> CoreResult<Transaction> {
        let payload = self.tx.hash_data(&self.config)?;
        let mut witnesses = Vec::with_capacity(self.tx.signers.len());
        for signer in &self.tx.signers {
            if let Some(provided) = self
                .provided_witnesses
                .iter()
                .find(|w| &w.script_hash() == signer.account())
            {
                witnesses.push(provided.clone());
                continue;
            }
            witnesses.push(sign_for(wallet, signer, &payload)?);
        }
        let mut tx = self.tx;
        tx.witnesses = witnesses;
        Ok(tx)
    }
}

fn signer_verification_script(wallet: &Wallet, signer: &Signer) -> CoreResult<VerificationScript> {
    let account = wallet.get_account(signer.account()).ok_or_else(|| {
        CoreError::config(format!(
            "signer account {} is not in the wallet",
            signer.account()
        ))
    })?;
    account
        .verification_script()
        .cloned()
        .ok_or_else(|| {
            CoreError::config(format!(
                "account {} has no verification script",
                signer.account()
            ))
        })
}

fn sign_for(wallet: &Wallet, signer: &Signer, payload: &[u8]) -> CoreResult<Witness> {
    let account = wallet.get_account(signer.account()).ok_or_else(|| {
        CoreError::config(format!(
            "signer account {} is not in the wallet",
            signer.account()
        ))
    })?;

    if account.is_multi_sig() {
        let script = account
            .verification_script()
            .cloned()
            .ok_or_else(|| {
                CoreError::config(format!(
                    "account {} has no verification script",
                    signer.account()
                ))
            })?;
        let threshold = script.signing_threshold()?;
        let mut signatures = Vec::new();
        for key in script.public_keys()? {
            let holder = wallet.accounts().iter().find_map(|a| {
                a.key_pair()
                    .filter(|kp| kp.public_key() == &key)
            });
            if let Some(key_pair) = holder {
                signatures.push(key_pair.sign_message(payload)?);
            }
        }
        if signatures.len() < threshold {
            return Err(CoreError::config(format!(
                "wallet holds {} of the {} keys needed to sign for {}",
                signatures.len(),
                threshold,
                signer.account()
            )));
        }
        return Witness::multi_sig(&signatures, &script);
    }

    match account.key_pair() {
        Some(key_pair) => Witness::from_key(payload, key_pair),
        None => Err(CoreError::config(format!(
            "account {} is watch-only and no external witness was provided",
            signer.account()
        ))),
    }
}

/// Compares the sender's GAS balance against the transaction's fees.
fn check_fee_coverage(client: &impl NeoClient, tx: &Transaction) -> CoreResult<()> {
    let sender = tx
        .sender()
        .ok_or_else(|| CoreError::config("transaction has no sender"))?;
    let result = client.invoke_function(
        &GAS_TOKEN,
        "balanceOf",
        &[ContractParameter::hash160(*sender)],
        &[],
    )?;
    let held = result
        .first_stack_item()
        .and_then(|item| item.as_integer())
        .unwrap_or_default();
    let requested = BigInt::from(tx.system_fee + tx.network_fee);
    if held < requested {
        return Err(CoreError::InsufficientFunds { held, requested });
    }
    Ok(())
}
