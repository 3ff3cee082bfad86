// Copyright (C) 2015-2025 The Neo Project.
//
// fees.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

//! The network-fee model: witness verification costs and size fees.

use neotx_io::var_bytes_size;

use crate::error::{CoreError, CoreResult};
use crate::script::{OpCode, VerificationScript, CHECK_SIG_PRICE};

/// Fallback fee per transaction byte in GAS fractions, used when the
/// node does not report one.
pub const GAS_PER_BYTE: i64 = 1000;

/// Byte length of a pushed 64-byte signature: PUSHDATA1, length, data.
pub const INVOCATION_SCRIPT_SIZE: usize = 66;

/// Execution cost of verifying one single-sig witness: the pushed
/// signature, the pushed key, a null and the signature check itself.
pub fn single_sig_verification_fee() -> i64 {
    OpCode::PushData1.price() * 2 + OpCode::PushNull.price() + CHECK_SIG_PRICE
}

/// Execution cost of verifying one m-of-n multi-sig witness.
///
/// Every one of the n candidate keys is checked by the VM even when
/// only m signatures succeed, so the cost scales with both numbers.
pub fn multi_sig_verification_fee(threshold: usize, keys: usize) -> CoreResult<i64> {
    if threshold < 1 || threshold > keys {
        return Err(CoreError::config(format!(
            "invalid multi-sig shape {threshold}-of-{keys}"
        )));
    }
    let m = threshold as i64;
    let n = keys as i64;
    Ok(m * OpCode::PushData1.price()
        + push_int_price()
        + n * OpCode::PushData1.price()
        + push_int_price()
        + OpCode::PushNull.price()
        + n * CHECK_SIG_PRICE)
}

/// Execution cost of the witness for the given verification script.
pub fn verification_fee(script: &VerificationScript) -> CoreResult<i64> {
    if script.is_single_sig() {
        return Ok(single_sig_verification_fee());
    }
    if script.is_multi_sig() {
        return multi_sig_verification_fee(
            script.signing_threshold()?,
            script.nr_of_accounts()?,
        );
    }
    Err(CoreError::config(
        "cannot price the verification script: neither single-sig nor multi-sig",
    ))
}

/// Serialized byte size the witness for this script will occupy once
/// signed, used for the size fee before signatures exist.
pub fn expected_witness_size(script: &VerificationScript) -> CoreResult<usize> {
    let threshold = script.signing_threshold()?;
    let invocation_len = threshold * INVOCATION_SCRIPT_SIZE;
    Ok(var_bytes_size(invocation_len) + var_bytes_size(script.script().len()))
}

// All integers a multi-sig script pushes (m and n, up to 1024) cost the
// same as any other push.
fn push_int_price() -> i64 {
    OpCode::Push1.price()
}

#[cfg(test)]
mod tests {
    use super::*;
    use neotx_crypto::{KeyPair, PublicKey};

    fn key(seed: u8) -> PublicKey {
        let mut private = [0u8; 32];
        private[31] = seed;
        KeyPair::from_private_key(&private)
            .unwrap()
            .public_key()
            .clone()
    }

    #[test]
    fn single_sig_fee_formula() {
        assert_eq!(single_sig_verification_fee(), 180 + 180 + 30 + 1_000_000);
    }

    #[test]
    fn two_of_two_fee_formula() {
        let fee = multi_sig_verification_fee(2, 2).unwrap();
        assert_eq!(fee, 2 * 180 + 30 + 2 * 180 + 30 + 30 + 2 * 1_000_000);
    }

    #[test]
    fn fee_scales_with_key_count_not_just_threshold() {
        let narrow = multi_sig_verification_fee(2, 2).unwrap();
        let wide = multi_sig_verification_fee(2, 5).unwrap();
        assert!(wide > narrow);
    }

    #[test]
    fn invalid_shapes_are_rejected() {
        assert!(multi_sig_verification_fee(0, 2).is_err());
        assert!(multi_sig_verification_fee(3, 2).is_err());
    }

    #[test]
    fn witness_fee_dispatches_on_script_kind() {
        let single = VerificationScript::single_sig(&key(1));
        assert_eq!(
            verification_fee(&single).unwrap(),
            single_sig_verification_fee()
        );

        let multi = VerificationScript::multi_sig(&[key(1), key(2)], 2).unwrap();
        assert_eq!(
            verification_fee(&multi).unwrap(),
            multi_sig_verification_fee(2, 2).unwrap()
        );
    }

    #[test]
    fn expected_single_sig_witness_size() {
        let script = VerificationScript::single_sig(&key(1));
        // 1 + 66 invocation, 1 + 40 verification
        assert_eq!(expected_witness_size(&script).unwrap(), 67 + 41);
    }
}
