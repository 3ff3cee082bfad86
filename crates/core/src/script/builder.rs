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

use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use neotx_io::BinaryWriter;

use crate::error::{CoreError, CoreResult};
use crate::script::{InteropService, OpCode};
use crate::types::{ContractParameter, H160};

/// Deepest allowed nesting of `Array`/`Map` parameters.
const MAX_PARAMETER_DEPTH: usize = 16;

/// Assembles NeoVM bytecode.
///
/// Each contract call emitted through [`ScriptBuilder::contract_call`]
/// is self-contained, so several calls appended to one builder form a
/// valid multi-call script by plain concatenation.
pub struct ScriptBuilder {
    writer: BinaryWriter,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self {
            writer: BinaryWriter::new(),
        }
    }

    /// Consumes the builder and returns the assembled script.
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }

    pub fn len(&self) -> usize {
        self.writer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writer.is_empty()
    }

    /// Emits a bare opcode.
    pub fn op_code(&mut self, op: OpCode) -> &mut Self {
        self.writer.write_u8(op.byte());
        self
    }

    /// Emits raw, already-assembled bytecode.
    pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
        self.writer.write_bytes(bytes);
        self
    }

    /// Pushes a byte string with the shortest PUSHDATA form that fits.
    pub fn push_data(&mut self, data: &[u8]) -> &mut Self {
        if data.len() < 0x100 {
            self.op_code(OpCode::PushData1);
            self.writer.write_u8(data.len() as u8);
        } else if data.len() < 0x10000 {
            self.op_code(OpCode::PushData2);
            self.writer.write_u16(data.len() as u16);
        } else {
            self.op_code(OpCode::PushData4);
            self.writer.write_u32(data.len() as u32);
        }
        self.writer.write_bytes(data);
        self
    }

    /// Pushes a UTF-8 string as a byte string.
    pub fn push_string(&mut self, value: &str) -> &mut Self {
        self.push_data(value.as_bytes())
    }

    pub fn push_bool(&mut self, value: bool) -> &mut Self {
        self.op_code(if value { OpCode::Push1 } else { OpCode::Push0 })
    }

    /// Pushes an integer with its canonical minimal encoding.
    ///
    /// Values in `[-1, 16]` map to single opcodes; anything else uses
    /// the smallest PUSHINT class, sign-extended to the class width.
    /// Integers wider than 256 bits are a construction error.
    pub fn push_integer(&mut self, value: &BigInt) -> CoreResult<&mut Self> {
        if let Some(small) = value.to_i32() {
            if small == -1 {
                return Ok(self.op_code(OpCode::PushM1));
            }
            if (0..=16).contains(&small) {
                return Ok(self.op_code(OpCode::push_small(small as u8)));
            }
        }
        let bytes = value.to_signed_bytes_le();
        let (op, width) = match bytes.len() {
            1 => (OpCode::PushInt8, 1),
            2 => (OpCode::PushInt16, 2),
            3..=4 => (OpCode::PushInt32, 4),
            5..=8 => (OpCode::PushInt64, 8),
            9..=16 => (OpCode::PushInt128, 16),
            17..=32 => (OpCode::PushInt256, 32),
            n => {
                return Err(CoreError::config(format!(
                    "integer of {n} bytes exceeds the 32-byte push limit"
                )))
            }
        };
        let pad = if value.sign() == Sign::Minus { 0xFF } else { 0x00 };
        self.op_code(op);
        self.writer.write_bytes(&bytes);
        for _ in bytes.len()..width {
            self.writer.write_u8(pad);
        }
        Ok(self)
    }

    /// Pushes one typed parameter.
    pub fn push_param(&mut self, param: &ContractParameter) -> CoreResult<&mut Self> {
        self.push_param_at(param, 0)?;
        Ok(self)
    }

    fn push_param_at(&mut self, param: &ContractParameter, depth: usize) -> CoreResult<()> {
        if depth > MAX_PARAMETER_DEPTH {
            return Err(CoreError::config(format!(
                "parameter nesting exceeds {MAX_PARAMETER_DEPTH} levels"
            )));
        }
        match param {
            ContractParameter::Any => {
                self.op_code(OpCode::PushNull);
            }
            ContractParameter::Boolean(b) => {
                self.push_bool(*b);
            }
            ContractParameter::Integer(i) => {
                self.push_integer(i)?;
            }
            ContractParameter::ByteArray(bytes) => {
                self.push_data(bytes);
            }
            ContractParameter::Signature(sig) => {
                self.push_data(sig);
            }
            ContractParameter::String(s) => {
                self.push_string(s);
            }
            ContractParameter::Hash160(hash) => {
                self.push_data(hash.as_le_bytes());
            }
            ContractParameter::Hash256(hash) => {
                self.push_data(hash.as_le_bytes());
            }
            ContractParameter::PublicKey(key) => {
                self.push_data(key.encoded());
            }
            ContractParameter::Array(items) => {
                self.push_array_at(items, depth)?;
            }
            ContractParameter::Map(entries) => {
                self.push_map_at(entries, depth)?;
            }
        }
        Ok(())
    }

    /// Pushes the parameters as one VM array, last argument first.
    pub fn push_params(&mut self, params: &[ContractParameter]) -> CoreResult<&mut Self> {
        self.push_array_at(params, 0)?;
        Ok(self)
    }

    fn push_array_at(&mut self, items: &[ContractParameter], depth: usize) -> CoreResult<()> {
        if items.is_empty() {
            self.op_code(OpCode::NewArray0);
            return Ok(());
        }
        for item in items.iter().rev() {
            self.push_param_at(item, depth + 1)?;
        }
        self.push_integer(&BigInt::from(items.len()))?;
        self.op_code(OpCode::Pack);
        Ok(())
    }

    fn push_map_at(
        &mut self,
        entries: &[(ContractParameter, ContractParameter)],
        depth: usize,
    ) -> CoreResult<()> {
        for (key, value) in entries {
            self.push_param_at(value, depth + 1)?;
            self.push_param_at(key, depth + 1)?;
        }
        self.push_integer(&BigInt::from(entries.len()))?;
        self.op_code(OpCode::PackMap);
        Ok(())
    }

    /// Emits a SYSCALL of the given interop service.
    pub fn sys_call(&mut self, service: InteropService) -> &mut Self {
        self.op_code(OpCode::SysCall);
        self.writer.write_bytes(&service.hash());
        self
    }

    /// Emits a full `System.Contract.Call` sequence: arguments array,
    /// method name, target hash, syscall.
    pub fn contract_call(
        &mut self,
        contract: &H160,
        method: &str,
        params: &[ContractParameter],
    ) -> CoreResult<&mut Self> {
        if method.is_empty() {
            return Err(CoreError::config("contract call without a method name"));
        }
        self.push_params(params)?;
        self.push_string(method);
        self.push_data(contract.as_le_bytes());
        self.sys_call(InteropService::SystemContractCall);
        Ok(self)
    }
}

impl Default for ScriptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built(f: impl FnOnce(&mut ScriptBuilder)) -> Vec<u8> {
        let mut b = ScriptBuilder::new();
        f(&mut b);
        b.into_bytes()
    }

    #[test]
    fn small_integers_use_single_opcodes() {
        let script = built(|b| {
            b.push_integer(&BigInt::from(-1)).unwrap();
            b.push_integer(&BigInt::from(0)).unwrap();
            b.push_integer(&BigInt::from(16)).unwrap();
        });
        assert_eq!(script, [0x0F, 0x10, 0x20]);
    }

    #[test]
    fn wider_integers_use_smallest_pushint_class() {
        assert_eq!(
            built(|b| {
                b.push_integer(&BigInt::from(17)).unwrap();
            }),
            [0x00, 0x11]
        );
        assert_eq!(
            built(|b| {
                b.push_integer(&BigInt::from(256)).unwrap();
            }),
            [0x01, 0x00, 0x01]
        );
        // 3-byte magnitude is sign-extended to the 4-byte class
        assert_eq!(
            built(|b| {
                b.push_integer(&BigInt::from(0x10000)).unwrap();
            }),
            [0x02, 0x00, 0x00, 0x01, 0x00]
        );
    }

    #[test]
    fn negative_integers_pad_with_ff() {
        assert_eq!(
            built(|b| {
                b.push_integer(&BigInt::from(-800)).unwrap();
            }),
            [0x01, 0xE0, 0xFC]
        );
        assert_eq!(
            built(|b| {
                b.push_integer(&BigInt::from(-100_000i64)).unwrap();
            }),
            [0x02, 0x60, 0x79, 0xFE, 0xFF]
        );
    }

    #[test]
    fn oversized_integer_is_rejected() {
        let huge = BigInt::from(1) << 300;
        let mut b = ScriptBuilder::new();
        assert!(b.push_integer(&huge).is_err());
    }

    #[test]
    fn push_data_selects_prefix_by_length() {
        let script = built(|b| {
            b.push_data(&[0xAA; 3]);
        });
        assert_eq!(script, [0x0C, 0x03, 0xAA, 0xAA, 0xAA]);

        let script = built(|b| {
            b.push_data(&vec![0u8; 256]);
        });
        assert_eq!(&script[..3], &[0x0D, 0x00, 0x01]);
        assert_eq!(script.len(), 3 + 256);

        let script = built(|b| {
            b.push_data(&vec![0u8; 0x10000]);
        });
        assert_eq!(&script[..5], &[0x0E, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn empty_parameter_list_becomes_newarray0() {
        let script = built(|b| {
            b.push_params(&[]).unwrap();
        });
        assert_eq!(script, [0xC2]);
    }

    #[test]
    fn parameters_are_packed_in_reverse() {
        let script = built(|b| {
            b.push_params(&[
                ContractParameter::integer(1),
                ContractParameter::integer(2),
            ])
            .unwrap();
        });
        // 2 first, then 1, then count, then PACK
        assert_eq!(script, [0x12, 0x11, 0x12, 0xC0]);
    }

    #[test]
    fn map_packs_value_then_key() {
        let script = built(|b| {
            b.push_param(&ContractParameter::map(vec![(
                ContractParameter::integer(1),
                ContractParameter::integer(5),
            )]))
            .unwrap();
        });
        assert_eq!(script, [0x15, 0x11, 0x11, 0xBE]);
    }

    #[test]
    fn zero_parameter_contract_call_layout() {
        let contract = H160::from_hex("23ba2703c53263e8d6e522dc32203339dcd8eee9").unwrap();
        let script = built(|b| {
            b.contract_call(&contract, "name", &[]).unwrap();
        });

        let mut expected = vec![0xC2]; // NEWARRAY0
        expected.extend_from_slice(&[0x0C, 0x04]); // PUSHDATA1 "name"
        expected.extend_from_slice(b"name");
        expected.extend_from_slice(&[0x0C, 0x14]); // PUSHDATA1 hash
        expected.extend_from_slice(contract.as_le_bytes());
        expected.push(0x41); // SYSCALL
        expected.extend_from_slice(&InteropService::SystemContractCall.hash());
        assert_eq!(script, expected);
    }

    #[test]
    fn empty_method_is_rejected() {
        let contract = H160::zero();
        let mut b = ScriptBuilder::new();
        assert!(b.contract_call(&contract, "", &[]).is_err());
    }

    #[test]
    fn excessive_nesting_is_rejected() {
        let mut param = ContractParameter::integer(1);
        for _ in 0..20 {
            param = ContractParameter::array(vec![param]);
        }
        let mut b = ScriptBuilder::new();
        assert!(b.push_param(&param).is_err());
    }
}
