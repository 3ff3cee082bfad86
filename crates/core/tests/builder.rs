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

//! End-to-end builder tests against an in-memory node.

use std::cell::RefCell;
use std::collections::HashMap;

use num_bigint::BigInt;
use num_traits::Zero;

use neotx_core::config::NetworkConfig;
use neotx_core::contract::{FungibleToken, GAS_TOKEN};
use neotx_core::error::CoreError;
use neotx_core::rpc::{InvocationResult, NeoClient, RpcError, RpcResult, StackValue, VmState};
use neotx_core::script::OpCode;
use neotx_core::tx::{fees, Signer, TransactionAttribute, TransactionBuilder, Witness};
use neotx_core::types::{ContractParameter, H160, H256};
use neotx_core::wallet::{Account, Wallet};
use neotx_crypto::KeyPair;

const BLOCK_COUNT: u32 = 1000;
const GAS_CONSUMED: i64 = 9_007_810;

/// In-memory stand-in for the node: canned balances and simulation
/// results, recorded invocations.
struct MockClient {
    balances: HashMap<H160, BigInt>,
    fault: Option<String>,
    sent: RefCell<Vec<Vec<u8>>>,
    scripts_invoked: RefCell<Vec<Vec<u8>>>,
    decimals: u32,
}

impl MockClient {
    fn new() -> Self {
        Self {
            balances: HashMap::new(),
            fault: None,
            sent: RefCell::new(Vec::new()),
            scripts_invoked: RefCell::new(Vec::new()),
            decimals: 8,
        }
    }

    fn with_balance(mut self, account: H160, balance: i64) -> Self {
        self.balances.insert(account, BigInt::from(balance));
        self
    }

    fn with_fault(mut self, reason: &str) -> Self {
        self.fault = Some(reason.to_owned());
        self
    }

    fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    fn halt(stack: Vec<StackValue>) -> InvocationResult {
        InvocationResult {
            state: VmState::Halt,
            gas_consumed: GAS_CONSUMED,
            exception: None,
            stack,
        }
    }
}

impl NeoClient for MockClient {
    fn invoke_script(&self, script: &[u8], _signers: &[Signer]) -> RpcResult<InvocationResult> {
        self.scripts_invoked.borrow_mut().push(script.to_vec());
        if let Some(reason) = &self.fault {
            return Ok(InvocationResult {
                state: VmState::Fault,
                gas_consumed: 0,
                exception: Some(reason.clone()),
                stack: Vec::new(),
            });
        }
        Ok(Self::halt(Vec::new()))
    }

    fn invoke_function(
        &self,
        _contract: &H160,
        method: &str,
        params: &[ContractParameter],
        _signers: &[Signer],
    ) -> RpcResult<InvocationResult> {
        match method {
            "decimals" => Ok(Self::halt(vec![StackValue::Integer(BigInt::from(
                self.decimals,
            ))])),
            "balanceOf" => {
                let owner = match params.first() {
                    Some(ContractParameter::Hash160(hash)) => *hash,
                    _ => return Err(RpcError("balanceOf expects a hash".into())),
                };
                let balance = self.balances.get(&owner).cloned().unwrap_or_else(BigInt::zero);
                Ok(Self::halt(vec![StackValue::Integer(balance)]))
            }
            other => Err(RpcError(format!("unexpected method {other}"))),
        }
    }

    fn block_count(&self) -> RpcResult<u32> {
        Ok(BLOCK_COUNT)
    }

    fn send_raw_transaction(&self, bytes: &[u8]) -> RpcResult<H256> {
        self.sent.borrow_mut().push(bytes.to_vec());
        Ok(H256::zero())
    }
}

fn pair(seed: u8) -> KeyPair {
    let mut private = [0u8; 32];
    private[31] = seed;
    KeyPair::from_private_key(&private).unwrap()
}

fn single_account_wallet(seed: u8) -> Wallet {
    Wallet::with_accounts(vec![Account::from_key_pair(pair(seed))]).unwrap()
}

fn config() -> NetworkConfig {
    NetworkConfig::main_net()
}

#[test]
fn build_without_script_fails() {
    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let err = TransactionBuilder::new(config())
        .wallet(&wallet)
        .build_unsigned(&client)
        .unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn default_signer_is_the_default_account_called_by_entry() {
    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let unsigned = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .build_unsigned(&client)
        .unwrap();

    let tx = unsigned.transaction();
    assert_eq!(tx.signers.len(), 1);
    assert_eq!(
        tx.signers[0].account(),
        wallet.default_account().unwrap().script_hash()
    );
    assert_eq!(tx.signers[0].scope_byte(), 0x01);
}

#[test]
fn explicit_sender_is_inserted_first() {
    let client = MockClient::new();
    let mut wallet = single_account_wallet(1);
    wallet.add_account(Account::from_key_pair(pair(2))).unwrap();
    let sender = *wallet.accounts()[1].script_hash();
    let other = *wallet.accounts()[0].script_hash();

    let unsigned = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .signer(Signer::called_by_entry(other))
        .unwrap()
        .sender(sender)
        .build_unsigned(&client)
        .unwrap();

    let tx = unsigned.transaction();
    assert_eq!(tx.signers.len(), 2);
    assert_eq!(tx.sender(), Some(&sender));
}

#[test]
fn explicit_signer_for_the_sender_wins_over_synthesis() {
    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let sender = *wallet.default_account().unwrap().script_hash();

    let unsigned = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .signer(Signer::global(sender))
        .unwrap()
        .sender(sender)
        .build_unsigned(&client)
        .unwrap();

    let tx = unsigned.transaction();
    assert_eq!(tx.signers.len(), 1);
    assert_eq!(tx.signers[0].scope_byte(), 0x80);
}

#[test]
fn duplicate_signers_are_rejected() {
    let wallet = single_account_wallet(1);
    let account = *wallet.default_account().unwrap().script_hash();
    let result = TransactionBuilder::new(config())
        .signer(Signer::called_by_entry(account))
        .unwrap()
        .signer(Signer::none(account));
    assert!(result.is_err());
}

#[test]
fn signer_outside_the_wallet_is_named_in_the_error() {
    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let foreign = H160::from_script(b"not in wallet");

    let err = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .signer(Signer::called_by_entry(foreign))
        .unwrap()
        .build_unsigned(&client)
        .unwrap_err();
    assert!(err.to_string().contains(&foreign.to_string()));
}

#[test]
fn valid_until_block_defaults_to_height_plus_window() {
    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let unsigned = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .build_unsigned(&client)
        .unwrap();

    let expected = BLOCK_COUNT + config().max_valid_until_block_increment - 1;
    assert_eq!(unsigned.transaction().valid_until_block, expected);
}

#[test]
fn system_fee_comes_from_simulation() {
    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let unsigned = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .build_unsigned(&client)
        .unwrap();
    assert_eq!(unsigned.transaction().system_fee, GAS_CONSUMED);
}

#[test]
fn simulation_fault_reason_is_surfaced_verbatim() {
    let client = MockClient::new().with_fault("ASSERT is executed with false result.");
    let wallet = single_account_wallet(1);
    let err = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .build_unsigned(&client)
        .unwrap_err();
    match err {
        CoreError::VmFault(reason) => {
            assert_eq!(reason, "ASSERT is executed with false result.")
        }
        other => panic!("expected a VM fault, got {other}"),
    }
}

#[test]
fn network_fee_is_verification_plus_size_fee() {
    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let unsigned = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .build_unsigned(&client)
        .unwrap();

    let tx = unsigned.transaction();
    let witness_size = 67 + 41; // pushed signature + single-sig script
    let signed_size = tx.unsigned_size() + 1 + witness_size;
    let expected =
        fees::single_sig_verification_fee() + signed_size as i64 * fees::GAS_PER_BYTE;
    assert_eq!(tx.network_fee, expected);
}

#[test]
fn additional_network_fee_is_added_on_top() {
    let wallet = single_account_wallet(1);
    let client = MockClient::new();
    let base = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .build_unsigned(&client)
        .unwrap()
        .transaction()
        .network_fee;

    let raised = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .additional_network_fee(12345)
        .build_unsigned(&client)
        .unwrap()
        .transaction()
        .network_fee;
    assert_eq!(raised, base + 12345);
}

#[test]
fn fail_on_false_appends_exactly_one_assert() {
    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let unsigned = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .fail_on_false()
        .build_unsigned(&client)
        .unwrap();

    let script = &unsigned.transaction().script;
    assert_eq!(script.last(), Some(&OpCode::Assert.byte()));
    assert_eq!(
        script
            .iter()
            .filter(|&&b| b == OpCode::Assert.byte())
            .count(),
        1
    );
    // the simulated script already carried the assert
    assert_eq!(&client.scripts_invoked.borrow()[0], script);
}

#[test]
fn high_priority_attribute_is_deduplicated() {
    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let unsigned = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .attribute(TransactionAttribute::HighPriority)
        .unwrap()
        .attribute(TransactionAttribute::HighPriority)
        .unwrap()
        .build_unsigned(&client)
        .unwrap();
    assert_eq!(unsigned.transaction().attributes.len(), 1);
}

#[test]
fn signing_produces_one_witness_per_signer_in_order() {
    let client = MockClient::new();
    let mut wallet = single_account_wallet(1);
    wallet.add_account(Account::from_key_pair(pair(2))).unwrap();
    let first = *wallet.accounts()[0].script_hash();
    let second = *wallet.accounts()[1].script_hash();

    let tx = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .signers(vec![
            Signer::called_by_entry(first),
            Signer::called_by_entry(second),
        ])
        .unwrap()
        .build_unsigned(&client)
        .unwrap()
        .sign(&wallet)
        .unwrap();

    assert_eq!(tx.witnesses.len(), 2);
    assert_eq!(tx.witnesses[0].script_hash(), first);
    assert_eq!(tx.witnesses[1].script_hash(), second);
}

#[test]
fn signatures_verify_against_the_network_payload() {
    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let cfg = config();

    let unsigned = TransactionBuilder::new(cfg)
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .build_unsigned(&client)
        .unwrap();
    let payload = unsigned.hash_data().unwrap();
    let tx = unsigned.sign(&wallet).unwrap();

    let signature = tx.witnesses[0].invocation().signatures()[0];
    pair(1).public_key().verify(&payload, &signature).unwrap();
}

#[test]
fn watch_only_account_cannot_be_priced_for_fees() {
    let client = MockClient::new();
    let watched = H160::from_script(b"cold storage");
    let wallet = Wallet::with_accounts(vec![Account::watch_only(watched)]).unwrap();

    let err = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .signer(Signer::called_by_entry(watched))
        .unwrap()
        .build_unsigned(&client)
        .unwrap_err();
    // the watch-only account cannot even be priced for fees
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn external_witness_fills_in_for_a_key_less_account() {
    let client = MockClient::new();
    let offline = pair(5);
    let account = Account::from_public_key(offline.public_key());
    let hash = *account.script_hash();
    let wallet = Wallet::with_accounts(vec![account]).unwrap();

    let mut unsigned = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .signer(Signer::called_by_entry(hash))
        .unwrap()
        .build_unsigned(&client)
        .unwrap();

    // without the external witness the account cannot sign
    let payload = unsigned.hash_data().unwrap();
    unsigned.add_witness(Witness::from_key(&payload, &offline).unwrap());
    let tx = unsigned.sign(&wallet).unwrap();
    assert_eq!(tx.witnesses.len(), 1);
    assert_eq!(tx.witnesses[0].script_hash(), hash);
}

#[test]
fn multi_sig_signing_aggregates_wallet_keys() {
    let client = MockClient::new();
    let keys = vec![
        pair(1).public_key().clone(),
        pair(2).public_key().clone(),
        pair(3).public_key().clone(),
    ];
    let shared = Account::multi_sig(&keys, 2).unwrap();
    let shared_hash = *shared.script_hash();
    let wallet = Wallet::with_accounts(vec![
        shared,
        Account::from_key_pair(pair(1)),
        Account::from_key_pair(pair(2)),
    ])
    .unwrap();

    let tx = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .signer(Signer::called_by_entry(shared_hash))
        .unwrap()
        .build_unsigned(&client)
        .unwrap()
        .sign(&wallet)
        .unwrap();

    assert_eq!(tx.witnesses[0].script_hash(), shared_hash);
    assert_eq!(tx.witnesses[0].invocation().signatures().len(), 2);
    tx.validate_for_send().unwrap();
}

#[test]
fn multi_sig_below_threshold_fails_signing() {
    let client = MockClient::new();
    let keys = vec![
        pair(1).public_key().clone(),
        pair(2).public_key().clone(),
        pair(3).public_key().clone(),
    ];
    let shared = Account::multi_sig(&keys, 2).unwrap();
    let shared_hash = *shared.script_hash();
    // only one of the three component keys is in the wallet
    let wallet =
        Wallet::with_accounts(vec![shared, Account::from_key_pair(pair(1))]).unwrap();

    let err = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .signer(Signer::called_by_entry(shared_hash))
        .unwrap()
        .build_unsigned(&client)
        .unwrap()
        .sign(&wallet)
        .unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn fee_coverage_check_reports_held_and_requested() {
    let wallet = single_account_wallet(1);
    let sender = *wallet.default_account().unwrap().script_hash();
    let client = MockClient::new().with_balance(sender, 10);

    let err = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .check_sender_can_cover_fees()
        .build_unsigned(&client)
        .unwrap_err();
    match err {
        CoreError::InsufficientFunds { held, requested } => {
            assert_eq!(held, BigInt::from(10));
            assert!(requested > held);
        }
        other => panic!("expected insufficient funds, got {other}"),
    }
}

#[test]
fn sent_transaction_bytes_deserialize_back() {
    use neotx_io::SerializableExt;
    use neotx_core::tx::Transaction;

    let client = MockClient::new();
    let wallet = single_account_wallet(1);
    let tx = TransactionBuilder::new(config())
        .wallet(&wallet)
        .script(vec![OpCode::NewArray0.byte()])
        .build_unsigned(&client)
        .unwrap()
        .sign(&wallet)
        .unwrap();
    tx.send(&client).unwrap();

    let sent = client.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(Transaction::from_array(&sent[0]).unwrap(), tx);
}

#[test]
fn transfer_plans_across_accounts_and_signs() {
    let cfg = config();
    let wallet = {
        let mut w = Wallet::new();
        w.add_account(Account::from_key_pair(pair(1))).unwrap();
        w.add_account(Account::from_key_pair(pair(2))).unwrap();
        w.add_account(Account::from_key_pair(pair(3))).unwrap();
        w
    };
    let a = *wallet.accounts()[0].script_hash();
    let b = *wallet.accounts()[1].script_hash();
    let c = *wallet.accounts()[2].script_hash();
    let client = MockClient::new()
        .with_decimals(0)
        .with_balance(a, 5)
        .with_balance(b, 4)
        .with_balance(c, 3);

    let token = FungibleToken::new(*GAS_TOKEN);
    let to = H160::from_script(b"recipient");
    let tx = token
        .transfer_from_accounts(&client, cfg, &wallet, &[a, b, c], to, "7".parse().unwrap())
        .unwrap()
        .build_unsigned(&client)
        .unwrap()
        .sign(&wallet)
        .unwrap();

    // two contributing accounts, so two signers and two witnesses
    assert_eq!(tx.signers.len(), 2);
    assert_eq!(tx.signers[0].account(), &a);
    assert_eq!(tx.signers[1].account(), &b);
    assert_eq!(tx.witnesses.len(), 2);
    assert_eq!(tx.script.last(), Some(&OpCode::Assert.byte()));
}
