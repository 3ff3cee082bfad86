// Copyright (C) 2015-2025 The Neo Project.
//
// nef.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neotx_io::{
    list_size, var_bytes_size, BinaryWriter, IoError, IoResult, MemoryReader, Serializable,
};

use crate::error::{CoreError, CoreResult};
use crate::types::H160;

/// "NEF3" in little-endian byte order.
pub const NEF_MAGIC: u32 = 0x3346_454E;

/// Space reserved for the compiler and version fields.
const FIELD_SIZE: usize = 32;

/// Largest script a NEF may carry.
const MAX_SCRIPT_LENGTH: usize = 512 * 1024;

/// Largest NEF the codec accepts.
const MAX_NEF_SIZE: usize = 1024 * 1024;

/// Longest method name a token may reference.
const MAX_METHOD_LENGTH: usize = 32;

/// A pre-resolved call from a contract's script into another contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodToken {
    pub hash: H160,
    pub method: String,
    pub params_count: u16,
    pub has_return_value: bool,
    pub call_flags: u8,
}

impl Serializable for MethodToken {
    fn size(&self) -> usize {
        H160::LENGTH + var_bytes_size(self.method.len()) + 2 + 1 + 1
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.hash.serialize(writer)?;
        writer.write_var_string(&self.method);
        writer.write_u16(self.params_count);
        writer.write_bool(self.has_return_value);
        writer.write_u8(self.call_flags);
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        Ok(Self {
            hash: H160::deserialize(reader)?,
            method: reader.read_var_string(MAX_METHOD_LENGTH)?,
            params_count: reader.read_u16()?,
            has_return_value: reader.read_bool()?,
            call_flags: reader.read_u8()?,
        })
    }
}

/// The portable binary container for compiled contract bytecode.
///
/// The checksum is recomputed on every serialize and validated on every
/// deserialize, so a `NefFile` in memory is always internally
/// consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NefFile {
    compiler: String,
    version: String,
    tokens: Vec<MethodToken>,
    script: Vec<u8>,
}

impl NefFile {
    pub fn new(
        compiler: impl Into<String>,
        version: impl Into<String>,
        tokens: Vec<MethodToken>,
        script: Vec<u8>,
    ) -> CoreResult<Self> {
        let compiler = compiler.into();
        let version = version.into();
        if compiler.as_bytes().len() > FIELD_SIZE {
            return Err(CoreError::config(format!(
                "compiler name of {} bytes exceeds the {FIELD_SIZE}-byte field",
                compiler.as_bytes().len()
            )));
        }
        if version.as_bytes().len() > FIELD_SIZE {
            return Err(CoreError::config(format!(
                "version of {} bytes exceeds the {FIELD_SIZE}-byte field",
                version.as_bytes().len()
            )));
        }
        if script.is_empty() {
            return Err(CoreError::config("NEF script must not be empty"));
        }
        if script.len() > MAX_SCRIPT_LENGTH {
            return Err(CoreError::config(format!(
                "NEF script of {} bytes exceeds the maximum of {MAX_SCRIPT_LENGTH}",
                script.len()
            )));
        }
        Ok(Self {
            compiler,
            version,
            tokens,
            script,
        })
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn tokens(&self) -> &[MethodToken] {
        &self.tokens
    }

    pub fn script(&self) -> &[u8] {
        &self.script
    }

    /// The checksum the serialized form carries: the first four bytes
    /// of double SHA-256 over every preceding byte, as a LE integer.
    pub fn checksum(&self) -> IoResult<u32> {
        let body = self.body_bytes()?;
        Ok(checksum_of(&body))
    }

    fn body_bytes(&self) -> IoResult<Vec<u8>> {
        let mut writer = BinaryWriter::with_capacity(self.size());
        self.serialize_body(&mut writer)?;
        Ok(writer.into_bytes())
    }

    fn serialize_body(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u32(NEF_MAGIC);
        writer.write_fixed_string(&self.compiler, FIELD_SIZE)?;
        writer.write_fixed_string(&self.version, FIELD_SIZE)?;
        writer.write_serializable_list(&self.tokens)?;
        writer.write_var_bytes(&self.script);
        Ok(())
    }
}

fn checksum_of(body: &[u8]) -> u32 {
    let digest = neotx_crypto::hash256(body);
    u32::from_le_bytes([digest[0], digest[1], digest[2], digest[3]])
}

impl Serializable for NefFile {
    fn size(&self) -> usize {
        4 + FIELD_SIZE * 2 + list_size(&self.tokens) + var_bytes_size(self.script.len()) + 4
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        let body = self.body_bytes()?;
        writer.write_bytes(&body);
        writer.write_u32(checksum_of(&body));
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        let start = reader.position();
        let magic = reader.read_u32()?;
        if magic != NEF_MAGIC {
            return Err(IoError::invalid(
                "NEF magic",
                format!("0x{magic:08x}, expected 0x{NEF_MAGIC:08x}"),
            ));
        }
        let compiler = reader.read_fixed_string(FIELD_SIZE)?;
        let version = reader.read_fixed_string(FIELD_SIZE)?;
        let tokens = reader.read_serializable_list(u16::MAX as usize)?;
        let script = reader.read_var_bytes(MAX_SCRIPT_LENGTH)?;
        if script.is_empty() {
            return Err(IoError::invalid("NEF script", "script must not be empty"));
        }
        let body_len = reader.position() - start;
        if body_len + 4 > MAX_NEF_SIZE {
            return Err(IoError::ValueOutOfRange {
                what: "NEF size",
                value: (body_len + 4) as u64,
                max: MAX_NEF_SIZE as u64,
            });
        }

        let nef = Self {
            compiler,
            version,
            tokens,
            script,
        };
        let expected = checksum_of(&nef.body_bytes()?);
        let declared = reader.read_u32()?;
        if declared != expected {
            return Err(IoError::invalid(
                "NEF checksum",
                format!("0x{declared:08x} does not match computed 0x{expected:08x}"),
            ));
        }
        Ok(nef)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neotx_io::SerializableExt;

    fn sample() -> NefFile {
        NefFile::new(
            "neon",
            "3.0.0",
            vec![MethodToken {
                hash: H160::from_script(b"callee"),
                method: "transfer".into(),
                params_count: 4,
                has_return_value: true,
                call_flags: 0x0F,
            }],
            vec![0x10, 0x40],
        )
        .unwrap()
    }

    #[test]
    fn round_trip() {
        let nef = sample();
        let bytes = nef.to_array().unwrap();
        assert_eq!(bytes.len(), nef.size());
        assert_eq!(NefFile::from_array(&bytes).unwrap(), nef);
    }

    #[test]
    fn layout_starts_with_magic_and_padded_compiler() {
        let bytes = sample().to_array().unwrap();
        assert_eq!(&bytes[..4], b"NEF3");
        assert_eq!(&bytes[4..8], b"neon");
        assert_eq!(bytes[8], 0); // padding
    }

    #[test]
    fn checksum_corruption_is_detected() {
        let mut bytes = sample().to_array().unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x01;
        let err = NefFile::from_array(&bytes).unwrap_err();
        assert!(err.to_string().contains("checksum"));
    }

    #[test]
    fn body_corruption_is_detected() {
        let mut bytes = sample().to_array().unwrap();
        bytes[5] ^= 0x01; // inside the compiler field
        assert!(NefFile::from_array(&bytes).is_err());
    }

    #[test]
    fn wrong_magic_is_rejected() {
        let mut bytes = sample().to_array().unwrap();
        bytes[0] = 0x00;
        let err = NefFile::from_array(&bytes).unwrap_err();
        assert!(err.to_string().contains("magic"));
    }

    #[test]
    fn oversized_fields_are_rejected_at_construction() {
        let long = "x".repeat(33);
        assert!(NefFile::new(long.clone(), "1", vec![], vec![0x40]).is_err());
        assert!(NefFile::new("c", long, vec![], vec![0x40]).is_err());
    }

    #[test]
    fn empty_script_is_rejected() {
        assert!(NefFile::new("c", "1", vec![], vec![]).is_err());
    }

    #[test]
    fn checksum_matches_double_sha256_prefix() {
        let nef = sample();
        let bytes = nef.to_array().unwrap();
        let body = &bytes[..bytes.len() - 4];
        let digest = neotx_crypto::hash256(body);
        assert_eq!(&bytes[bytes.len() - 4..], &digest[..4]);
    }
}
