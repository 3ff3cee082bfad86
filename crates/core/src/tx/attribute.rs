// Copyright (C) 2015-2025 The Neo Project.
//
// attribute.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use neotx_io::{BinaryWriter, IoError, IoResult, MemoryReader, Serializable};

/// A transaction-level attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionAttribute {
    /// Marks the transaction for priority treatment by consensus nodes.
    HighPriority,
}

impl TransactionAttribute {
    const HIGH_PRIORITY: u8 = 0x01;

    pub fn type_byte(self) -> u8 {
        match self {
            TransactionAttribute::HighPriority => Self::HIGH_PRIORITY,
        }
    }
}

impl Serializable for TransactionAttribute {
    fn size(&self) -> usize {
        1
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_u8(self.type_byte());
        Ok(())
    }

    fn deserialize(reader: &mut MemoryReader<'_>) -> IoResult<Self> {
        match reader.read_u8()? {
            Self::HIGH_PRIORITY => Ok(TransactionAttribute::HighPriority),
            other => Err(IoError::invalid(
                "transaction attribute",
                format!("unknown type byte 0x{other:02x}"),
            )),
        }
    }
}
