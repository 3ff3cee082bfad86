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

//! In-memory accounts and wallets.

mod account;

pub use account::Account;

use crate::error::{CoreError, CoreResult};
use crate::types::H160;

/// An ordered collection of accounts with a default fee payer.
///
/// In-memory only; file persistence lives outside this crate.
#[derive(Debug)]
pub struct Wallet {
    accounts: Vec<Account>,
    default_index: usize,
}

impl Wallet {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
            default_index: 0,
        }
    }

    /// A wallet over the given accounts; the first becomes the default.
    pub fn with_accounts(accounts: Vec<Account>) -> CoreResult<Self> {
        let mut wallet = Self::new();
        for account in accounts {
            wallet.add_account(account)?;
        }
        Ok(wallet)
    }

    /// Appends an account. Duplicate script hashes are rejected.
    pub fn add_account(&mut self, account: Account) -> CoreResult<()> {
        if self.holds_account(account.script_hash()) {
            return Err(CoreError::config(format!(
                "wallet already holds account {}",
                account.script_hash()
            )));
        }
        self.accounts.push(account);
        Ok(())
    }

    /// The accounts in wallet order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn get_account(&self, script_hash: &H160) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|a| a.script_hash() == script_hash)
    }

    pub fn holds_account(&self, script_hash: &H160) -> bool {
        self.get_account(script_hash).is_some()
    }

    /// The default fee-paying account.
    pub fn default_account(&self) -> Option<&Account> {
        self.accounts.get(self.default_index)
    }

    /// Chooses the default account by script hash.
    pub fn set_default_account(&mut self, script_hash: &H160) -> CoreResult<()> {
        match self
            .accounts
            .iter()
            .position(|a| a.script_hash() == script_hash)
        {
            Some(index) => {
                self.default_index = index;
                Ok(())
            }
            None => Err(CoreError::config(format!(
                "wallet holds no account {script_hash}"
            ))),
        }
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}
