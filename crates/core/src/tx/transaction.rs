// Copyright (C) 2015-2025 The Neo Project.
//
// transaction.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use tracing::debug;

use neotx_crypto::sha256;
use neotx_io::{
    list_size, var_bytes_size, BinaryWriter, IoResult, MemoryReader, Serializable,
    SerializableExt,
};

use crate::config::NetworkConfig;
use crate::error::{CoreError, CoreResult};
use crate::rpc::NeoClient;
use crate::tx::{Signer, TransactionAttribute, Witness};
use crate::types::{H160, H256};

/// Largest serialized transaction the network accepts.
pub const MAX_TRANSACTION_SIZE: usize = 102_400;

/// Limit on attributes per transaction.
pub const MAX_TRANSACTION_ATTRIBUTES: usize = 16;

/// Limit on signers (and therefore witnesses) per transaction.
pub const MAX_SIGNER_SUBITEMS: usize = 16;

/// Fixed-width portion of the wire format: version, nonce, system fee,
/// network fee and valid-until-block.
pub const HEADER_SIZE: usize = 1 + 4 + 8 + 8 + 4;

/// A Neo N3 transaction.
///
/// Built through [`crate::tx::TransactionBuilder`]; immutable once the
/// witnesses are attached. Witnesses align positionally with signers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: u8,
    pub nonce: u32,
    /// Execution cost of the script, in GAS fractions.
    pub system_fee: i64,
    /// Size and verification cost, in GAS fractions.
    pub network_fee: i64,
    pub valid_until_block: u32,
    pub signers: Vec<Signer>,
    pub attributes: Vec<TransactionAttribute>,
    pub script: Vec<u8>,
    pub witnesses: Vec<Witness>,
}

impl Transaction {
    /// The fee-paying sender: the first signer's account.
    pub fn sender(&self) -> Option<&H160> {
        self.signers.first().map(Signer::account)
    }

    /// Serializes every field except the witnesses.
    pub fn unsigned_bytes(&self) -> CoreResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.unsigned_size());
        self.serialize_unsigned(&mut writer)?;
        Ok(writer.into_bytes())
    }

    fn serialize_unsigned(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.version);
        writer.write_u32(self.nonce);
        writer.write_i64(self.system_fee);
        writer.write_i64(self.network_fee);
        writer.write_u32(self.valid_until_block);
        writer.write_serializable_list(&self.signers)?;
        writer.write_serializable_list(&self.attributes)?;
        writer.write_var_bytes(&self.script);
        Ok(())
    }

    /// Byte size of the witness-less serialization.
    pub fn unsigned_size(&self) -> usize {
        HEADER_SIZE
            + list_size(&self.signers)
            + list_size(&self.attributes)
            + var_bytes_size(self.script.len())
    }

    /// The transaction id: SHA-256 of the unsigned bytes, rendered in
    /// reversed byte order like every other hash.
    pub fn tx_id(&self) -> CoreResult<H256> {
        let unsigned = self.unsigned_bytes()?;
        Ok(H256::from_le_bytes(sha256(&unsigned)))
    }

    /// The payload signatures commit to: the network magic followed by
    /// the hash of the unsigned transaction. Binding the magic into the
    /// payload prevents cross-network replay.
    pub fn hash_data(&self, config: &NetworkConfig) -> CoreResult<Vec<u8>> {
        let unsigned = self.unsigned_bytes()?;
        let mut data = Vec::with_capacity(4 + 32);
        data.extend_from_slice(&config.magic_bytes());
        data.extend_from_slice(&sha256(&unsigned));
        Ok(data)
    }

    /// Checks the invariants a transaction must satisfy to be
    /// broadcastable.
    pub fn validate_for_send(&self) -> CoreResult<()> {
        if self.witnesses.len() != self.signers.len() {
            return Err(CoreError::config(format!(
                "{} witnesses do not match {} signers",
                self.witnesses.len(),
                self.signers.len()
            )));
        }
        for witness in &self.witnesses {
            let verification = witness.verification();
            if verification.is_multi_sig() {
                let threshold = verification.signing_threshold()?;
                let provided = witness.invocation().signatures().len();
                if provided < threshold {
                    return Err(CoreError::config(format!(
                        "multi-sig witness for {} carries {provided} of {threshold} \
                         required signatures",
                        verification.script_hash()
                    )));
                }
            }
        }
        let size = self.size();
        if size > MAX_TRANSACTION_SIZE {
            return Err(CoreError::config(format!(
                "transaction of {size} bytes exceeds the maximum of {MAX_TRANSACTION_SIZE}"
            )));
        }
        Ok(())
    }

    /// Validates and broadcasts the transaction, answering its id.
    pub fn send(&self, client: &impl NeoClient) -> CoreResult<H256> {
        self.validate_for_send()?;
        let bytes = self.to_array()?;
        let id = client.send_raw_transaction(&bytes)?;
        debug!(tx_id = %id, size = bytes.len(), "transaction broadcast");
        Ok(id)
    }
}

impl Serializable for Transaction {
    fn size(&self) -> usize {
        self.unsigned_size() + list_size(&self.witnesses)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.serialize_unsigned(writer)?;
        writer.write_serializable_list(&self.witnesses)
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        let version = reader.read_u8()?;
        let nonce = reader.read_u32()?;
        let system_fee = reader.read_i64()?;
        let network_fee = reader.read_i64()?;
        let valid_until_block = reader.read_u32()?;
        let signers = reader.read_serializable_list(MAX_SIGNER_SUBITEMS)?;
        let attributes = reader.read_serializable_list(MAX_TRANSACTION_ATTRIBUTES)?;
        let script = reader.read_var_bytes(MAX_TRANSACTION_SIZE)?;
        let witnesses = reader.read_serializable_list(MAX_SIGNER_SUBITEMS)?;
        Ok(Self {
            version,
            nonce,
            system_fee,
            network_fee,
            valid_until_block,
            signers,
            attributes,
            script,
            witnesses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neotx_crypto::KeyPair;

    fn sample() -> Transaction {
        let account = H160::from_script(b"an account");
        Transaction {
            version: 0,
            nonce: 0x01020304,
            system_fee: 9_007_810,
            network_fee: 1_230_610,
            valid_until_block: 2_102_660,
            signers: vec![Signer::called_by_entry(account)],
            attributes: vec![TransactionAttribute::HighPriority],
            script: vec![0xC2, 0x40],
            witnesses: Vec::new(),
        }
    }

    #[test]
    fn header_layout_is_fixed_order_little_endian() {
        let tx = sample();
        let bytes = tx.unsigned_bytes().unwrap();
        assert_eq!(bytes[0], 0); // version
        assert_eq!(&bytes[1..5], &[0x04, 0x03, 0x02, 0x01]); // nonce LE
        assert_eq!(
            &bytes[5..13],
            &9_007_810i64.to_le_bytes() // system fee LE
        );
        assert_eq!(bytes.len(), tx.unsigned_size());
    }

    #[test]
    fn wire_round_trip() {
        let mut tx = sample();
        let key_pair = KeyPair::from_private_key(&{
            let mut k = [0u8; 32];
            k[31] = 9;
            k
        })
        .unwrap();
        tx.witnesses = vec![Witness::from_key(b"payload", &key_pair).unwrap()];

        let bytes = tx.to_array().unwrap();
        assert_eq!(bytes.len(), tx.size());
        assert_eq!(Transaction::from_array(&bytes).unwrap(), tx);
    }

    #[test]
    fn signing_payload_is_stable_and_field_sensitive() {
        let config = NetworkConfig::main_net();
        let tx = sample();
        let baseline = tx.hash_data(&config).unwrap();
        assert_eq!(baseline, tx.hash_data(&config).unwrap());
        assert_eq!(&baseline[..4], &config.magic_bytes());

        let mut changed = tx.clone();
        changed.nonce += 1;
        assert_ne!(changed.hash_data(&config).unwrap(), baseline);

        let mut changed = tx.clone();
        changed.system_fee += 1;
        assert_ne!(changed.hash_data(&config).unwrap(), baseline);

        let mut changed = tx.clone();
        changed.script.push(0x40);
        assert_ne!(changed.hash_data(&config).unwrap(), baseline);
    }

    #[test]
    fn payload_differs_across_networks() {
        let tx = sample();
        let main = tx.hash_data(&NetworkConfig::main_net()).unwrap();
        let test = tx.hash_data(&NetworkConfig::test_net()).unwrap();
        assert_ne!(main, test);
    }

    #[test]
    fn send_requires_witness_per_signer() {
        let tx = sample();
        assert!(tx.validate_for_send().is_err());
    }

    #[test]
    fn tx_id_is_the_reversed_sha256_of_unsigned_bytes() {
        let tx = sample();
        let mut digest = sha256(&tx.unsigned_bytes().unwrap());
        digest.reverse();
        assert_eq!(tx.tx_id().unwrap().to_string(), hex::encode(digest));
    }

    #[test]
    fn tx_id_ignores_witnesses() {
        let mut tx = sample();
        let before = tx.tx_id().unwrap();
        let key_pair = KeyPair::generate();
        tx.witnesses = vec![Witness::from_key(b"payload", &key_pair).unwrap()];
        assert_eq!(tx.tx_id().unwrap(), before);
    }
}
