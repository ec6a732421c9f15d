// Copyright (C) 2024 Ethan Uppal. All rights reserved.

use core::fmt;

use enum_tags::enum_tags;

use crate::arch::{Address, Byte, RegisterId, INSTRUCTION_WIDTH, PC_REGISTER};

/// Smallest sized integer type that can fit an op code.
pub type RawOpCode = Byte;

/// The two bytes following an opcode.
pub type Operands = [Byte; INSTRUCTION_WIDTH - 1];

/// A VM operation. Every operation occupies [`INSTRUCTION_WIDTH`] bytes in
/// memory: the tag, then the two operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
#[enum_tags(public, repr(RawOpCode))]
pub enum Op {
    /// `Self::LoadW(r, a)` loads the little-endian word at addresses `a` and
    /// `a + 1` into register `r`.
    LoadW(RegisterId, Address) = 0x01,
    /// `Self::Store(r, a)` writes register `r` as a little-endian word to
    /// addresses `a` and `a + 1`.
    Store(RegisterId, Address) = 0x02,
    /// `Self::Add(a, b)` adds register `b` into register `a`.
    Add(RegisterId, RegisterId) = 0x03,
    /// `Self::Sub(a, b)` subtracts register `b` from register `a`.
    Sub(RegisterId, RegisterId) = 0x04,
    /// `Self::Halt` stops execution. Its operand bytes are never read.
    Halt = 0xff,
}

impl Op {
    pub const fn opcode(&self) -> RawOpCode {
        self.tag()
    }

    /// Builds an operation from an opcode and its operand bytes, or `None`
    /// if `opcode` names no operation.
    pub const fn from_parts(
        opcode: RawOpCode,
        operands: Operands,
    ) -> Option<Self> {
        let [a, b] = operands;
        match opcode {
            Self::LOADW_TAG => Some(Self::LoadW(a, b)),
            Self::STORE_TAG => Some(Self::Store(a, b)),
            Self::ADD_TAG => Some(Self::Add(a, b)),
            Self::SUB_TAG => Some(Self::Sub(a, b)),
            Self::HALT_TAG => Some(Self::Halt),
            _ => None,
        }
    }

    /// Decodes one instruction.
    pub const fn decode(bytes: [Byte; INSTRUCTION_WIDTH]) -> Option<Self> {
        let [opcode, a, b] = bytes;
        Self::from_parts(opcode, [a, b])
    }

    /// Encodes this operation as an instruction. Unused operands are zero.
    pub const fn encode(&self) -> [Byte; INSTRUCTION_WIDTH] {
        let [a, b] = match *self {
            Self::LoadW(r, a) | Self::Store(r, a) => [r, a],
            Self::Add(a, b) | Self::Sub(a, b) => [a, b],
            Self::Halt => [0, 0],
        };
        [self.opcode(), a, b]
    }

    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Self::LoadW(..) => "LOADW",
            Self::Store(..) => "STORE",
            Self::Add(..) => "ADD",
            Self::Sub(..) => "SUB",
            Self::Halt => "HALT",
        }
    }
}

struct RegisterName(RegisterId);

impl fmt::Display for RegisterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == PC_REGISTER {
            write!(f, "PC")
        } else {
            write!(f, "R{}", self.0)
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mnemonic = self.mnemonic();
        match *self {
            Self::LoadW(r, a) | Self::Store(r, a) => {
                write!(f, "{} {} {:#04x}", mnemonic, RegisterName(r), a)
            }
            Self::Add(a, b) | Self::Sub(a, b) => {
                let (a, b) = (RegisterName(a), RegisterName(b));
                write!(f, "{} {} {}", mnemonic, a, b)
            }
            Self::Halt => f.write_str(mnemonic),
        }
    }
}
