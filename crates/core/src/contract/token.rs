// Copyright (C) 2015-2025 The Neo Project.
//
// token.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use once_cell::sync::OnceCell;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::NetworkConfig;
use crate::error::{CoreError, CoreResult};
use crate::rpc::{NeoClient, StackValue};
use crate::script::ScriptBuilder;
use crate::tx::{Signer, TransactionBuilder};
use crate::types::{ContractParameter, H160};
use crate::wallet::Wallet;

/// The capability set the transfer planner needs from a token.
pub trait TokenContract {
    fn script_hash(&self) -> &H160;

    /// The token's fractional precision.
    fn decimals(&self, client: &impl NeoClient) -> CoreResult<u32>;

    /// The owner's balance in token fractions.
    fn balance_of(&self, client: &impl NeoClient, owner: &H160) -> CoreResult<BigInt>;

    /// Bytecode for one `transfer` call debiting `from`.
    fn build_transfer_call(&self, from: &H160, to: &H160, amount: &BigInt)
        -> CoreResult<Vec<u8>>;
}

/// A NEP-17 fungible token.
pub struct FungibleToken {
    script_hash: H160,
    decimals: OnceCell<u32>,
}

impl FungibleToken {
    pub fn new(script_hash: H160) -> Self {
        Self {
            script_hash,
            decimals: OnceCell::new(),
        }
    }

    /// The token's display symbol, for diagnostics.
    pub fn symbol(&self, client: &impl NeoClient) -> CoreResult<String> {
        let result = client.invoke_function(&self.script_hash, "symbol", &[], &[])?;
        match result.first_stack_item() {
            Some(StackValue::ByteString(bytes)) => String::from_utf8(bytes.clone())
                .map_err(|e| CoreError::config(format!("symbol is not UTF-8: {e}"))),
            _ => Err(CoreError::config(format!(
                "token {} answered no symbol",
                self.script_hash
            ))),
        }
    }

    /// Builds a transaction transferring `amount` to `to`, funded by
    /// the wallet's accounts in wallet order with the default account
    /// first.
    pub fn transfer<'a>(
        &self,
        client: &impl NeoClient,
        config: NetworkConfig,
        wallet: &'a Wallet,
        to: H160,
        amount: Decimal,
    ) -> CoreResult<TransactionBuilder<'a>> {
        let mut candidates = Vec::with_capacity(wallet.accounts().len());
        if let Some(default) = wallet.default_account() {
            candidates.push(*default.script_hash());
        }
        for account in wallet.accounts() {
            if !candidates.contains(account.script_hash()) {
                candidates.push(*account.script_hash());
            }
        }
        self.transfer_from_accounts(client, config, wallet, &candidates, to, amount)
    }

    /// Builds a transaction transferring `amount` to `to`, funded by
    /// the given accounts in exactly the given priority order.
    ///
    /// Each contributing account adds one `transfer` call to the script
    /// and one called-by-entry signer.
    pub fn transfer_from_accounts<'a>(
        &self,
        client: &impl NeoClient,
        config: NetworkConfig,
        wallet: &'a Wallet,
        from: &[H160],
        to: H160,
        amount: Decimal,
    ) -> CoreResult<TransactionBuilder<'a>> {
        if from.is_empty() {
            return Err(CoreError::config("no candidate accounts for the transfer"));
        }
        let decimals = self.decimals(client)?;
        let fractions = to_fractions(amount, decimals)?;
        let plan = plan_transfer(client, self, from, &fractions)?;

        let mut script = Vec::new();
        let mut signers = Vec::with_capacity(plan.lines().len());
        for line in plan.lines() {
            script.extend(self.build_transfer_call(&line.from, &to, &line.amount)?);
            signers.push(Signer::called_by_entry(line.from));
        }

        Ok(TransactionBuilder::new(config)
            .wallet(wallet)
            .script(script)
            .signers(signers)?
            .fail_on_false())
    }
}

impl TokenContract for FungibleToken {
    fn script_hash(&self) -> &H160 {
        &self.script_hash
    }

    fn decimals(&self, client: &impl NeoClient) -> CoreResult<u32> {
        self.decimals
            .get_or_try_init(|| {
                let result =
                    client.invoke_function(&self.script_hash, "decimals", &[], &[])?;
                let value = result
                    .first_stack_item()
                    .and_then(StackValue::as_integer)
                    .and_then(|i| i.to_u32())
                    .ok_or_else(|| {
                        CoreError::config(format!(
                            "token {} answered no usable decimals",
                            self.script_hash
                        ))
                    })?;
                Ok(value)
            })
            .copied()
    }

    fn balance_of(&self, client: &impl NeoClient, owner: &H160) -> CoreResult<BigInt> {
        let result = client.invoke_function(
            &self.script_hash,
            "balanceOf",
            &[ContractParameter::hash160(*owner)],
            &[],
        )?;
        result
            .first_stack_item()
            .and_then(StackValue::as_integer)
            .ok_or_else(|| {
                CoreError::config(format!(
                    "token {} answered no balance for {owner}",
                    self.script_hash
                ))
            })
    }

    fn build_transfer_call(
        &self,
        from: &H160,
        to: &H160,
        amount: &BigInt,
    ) -> CoreResult<Vec<u8>> {
        let mut builder = ScriptBuilder::new();
        builder.contract_call(
            &self.script_hash,
            "transfer",
            &[
                ContractParameter::hash160(*from),
                ContractParameter::hash160(*to),
                ContractParameter::Integer(amount.clone()),
                ContractParameter::Any,
            ],
        )?;
        Ok(builder.into_bytes())
    }
}

/// One debit of a transfer plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferLine {
    pub from: H160,
    pub amount: BigInt,
}

/// The planner's output: which account pays how much, in priority
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferPlan {
    lines: Vec<TransferLine>,
}

impl TransferPlan {
    pub fn lines(&self) -> &[TransferLine] {
        &self.lines
    }

    pub fn total(&self) -> BigInt {
        self.lines.iter().map(|l| l.amount.clone()).sum()
    }
}

/// Greedily covers `target` fractions from `candidates`, in exactly the
/// caller's order.
///
/// Zero-balance candidates contribute no line. Each contributor pays
/// `min(balance, remaining)`. When every candidate is exhausted with an
/// uncovered remainder, the error carries the held and requested
/// totals.
pub fn plan_transfer(
    client: &impl NeoClient,
    token: &impl TokenContract,
    candidates: &[H160],
    target: &BigInt,
) -> CoreResult<TransferPlan> {
    if target.is_negative() {
        return Err(CoreError::config("transfer amount must not be negative"));
    }
    let mut remaining = target.clone();
    let mut held = BigInt::zero();
    let mut lines = Vec::new();
    for candidate in candidates {
        if remaining.is_zero() {
            break;
        }
        let balance = token.balance_of(client, candidate)?;
        held += &balance;
        if balance.is_zero() || balance.is_negative() {
            debug!(account = %candidate, "skipping empty candidate");
            continue;
        }
        let contribution = balance.min(remaining.clone());
        remaining -= &contribution;
        debug!(account = %candidate, amount = %contribution, "transfer plan line");
        lines.push(TransferLine {
            from: *candidate,
            amount: contribution,
        });
    }
    if !remaining.is_zero() {
        return Err(CoreError::InsufficientFunds {
            held,
            requested: target.clone(),
        });
    }
    Ok(TransferPlan { lines })
}

/// Converts a caller-facing decimal amount into token fractions.
///
/// An amount with more fractional digits than the token carries is
/// rejected before any network call.
pub fn to_fractions(amount: Decimal, decimals: u32) -> CoreResult<BigInt> {
    let normalized = amount.normalize();
    if normalized.scale() > decimals {
        return Err(CoreError::config(format!(
            "amount {amount} has {} fractional digits, token carries {decimals}",
            normalized.scale()
        )));
    }
    let mantissa = BigInt::from(normalized.mantissa());
    Ok(mantissa * BigInt::from(10u32).pow(decimals - normalized.scale()))
}

/// Converts token fractions back into a decimal amount.
pub fn from_fractions(fractions: &BigInt, decimals: u32) -> CoreResult<Decimal> {
    if decimals > 28 {
        return Err(CoreError::config(format!(
            "{decimals} decimals exceed the representable precision"
        )));
    }
    let value = fractions.to_i128().ok_or_else(|| {
        CoreError::config(format!("{fractions} fractions exceed the representable range"))
    })?;
    Decimal::try_from_i128_with_scale(value, decimals)
        .map_err(|e| CoreError::config(format!("cannot represent {fractions}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_fractions_shifts_by_decimals() {
        let amount = Decimal::new(15, 1); // 1.5
        assert_eq!(to_fractions(amount, 8).unwrap(), BigInt::from(150_000_000));
        assert_eq!(to_fractions(Decimal::from(2), 0).unwrap(), BigInt::from(2));
    }

    #[test]
    fn excess_scale_is_rejected() {
        let amount = Decimal::new(15, 1); // 1.5
        assert!(to_fractions(amount, 0).is_err());
        let amount = Decimal::new(123_456_789, 9); // 9 fractional digits
        assert!(to_fractions(amount, 8).is_err());
    }

    #[test]
    fn trailing_zeros_do_not_count_as_scale() {
        let amount = Decimal::new(1500, 3); // 1.500
        assert_eq!(to_fractions(amount, 1).unwrap(), BigInt::from(15));
    }

    #[test]
    fn fraction_round_trip() {
        let fractions = to_fractions(Decimal::new(25, 1), 8).unwrap();
        assert_eq!(
            from_fractions(&fractions, 8).unwrap().normalize(),
            Decimal::new(25, 1)
        );
    }
}
