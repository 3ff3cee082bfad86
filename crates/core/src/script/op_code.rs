// Copyright (C) 2015-2025 The Neo Project.
//
// op_code.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

/// The NeoVM opcodes the script assembler and fee model work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    PushInt8 = 0x00,
    PushInt16 = 0x01,
    PushInt32 = 0x02,
    PushInt64 = 0x03,
    PushInt128 = 0x04,
    PushInt256 = 0x05,
    PushNull = 0x0B,
    /// Push up to 255 bytes, one-byte length prefix.
    PushData1 = 0x0C,
    /// Push up to 65535 bytes, two-byte length prefix.
    PushData2 = 0x0D,
    /// Push up to 2^32 - 1 bytes, four-byte length prefix.
    PushData4 = 0x0E,
    PushM1 = 0x0F,
    Push0 = 0x10,
    Push1 = 0x11,
    Push2 = 0x12,
    Push3 = 0x13,
    Push4 = 0x14,
    Push5 = 0x15,
    Push6 = 0x16,
    Push7 = 0x17,
    Push8 = 0x18,
    Push9 = 0x19,
    Push10 = 0x1A,
    Push11 = 0x1B,
    Push12 = 0x1C,
    Push13 = 0x1D,
    Push14 = 0x1E,
    Push15 = 0x1F,
    Push16 = 0x20,
    /// Abort execution unless the top stack item is true.
    Assert = 0x39,
    Ret = 0x40,
    SysCall = 0x41,
    PackMap = 0xBE,
    Pack = 0xC0,
    NewArray0 = 0xC2,
}

impl OpCode {
    /// The opcode byte.
    pub fn byte(self) -> u8 {
        self as u8
    }

    /// Execution-fee price of this opcode in GAS fractions.
    ///
    /// Only the opcodes the network-fee formula touches carry a price;
    /// everything else in the subset answers zero.
    pub fn price(self) -> i64 {
        match self {
            OpCode::PushInt8
            | OpCode::PushInt16
            | OpCode::PushInt32
            | OpCode::PushInt64
            | OpCode::PushInt128
            | OpCode::PushInt256
            | OpCode::PushNull
            | OpCode::PushM1
            | OpCode::Push0
            | OpCode::Push1
            | OpCode::Push2
            | OpCode::Push3
            | OpCode::Push4
            | OpCode::Push5
            | OpCode::Push6
            | OpCode::Push7
            | OpCode::Push8
            | OpCode::Push9
            | OpCode::Push10
            | OpCode::Push11
            | OpCode::Push12
            | OpCode::Push13
            | OpCode::Push14
            | OpCode::Push15
            | OpCode::Push16 => 30,
            OpCode::PushData1 => 180,
            OpCode::PushData2 => 13_000,
            OpCode::PushData4 => 110_000,
            OpCode::Assert => 30,
            _ => 0,
        }
    }

    /// The `PUSH0`..`PUSH16` opcode for a small non-negative integer.
    ///
    /// Callers guarantee `value <= 16`.
    pub(crate) fn push_small(value: u8) -> OpCode {
        debug_assert!(value <= 16);
        match value {
            0 => OpCode::Push0,
            1 => OpCode::Push1,
            2 => OpCode::Push2,
            3 => OpCode::Push3,
            4 => OpCode::Push4,
            5 => OpCode::Push5,
            6 => OpCode::Push6,
            7 => OpCode::Push7,
            8 => OpCode::Push8,
            9 => OpCode::Push9,
            10 => OpCode::Push10,
            11 => OpCode::Push11,
            12 => OpCode::Push12,
            13 => OpCode::Push13,
            14 => OpCode::Push14,
            15 => OpCode::Push15,
            _ => OpCode::Push16,
        }
    }
}
