// Copyright (C) 2024 Ethan Uppal and Utku Melemetci. All rights reserved.

use static_assertions::const_assert;

/// A single memory cell.
pub type Byte = u8;

/// The width of a general-purpose register.
pub type Word = u16;

/// Operand naming a register.
pub type RegisterId = u8;

/// Operand naming a memory cell.
pub type Address = u8;

pub const BYTE_BITS: usize = 8;
const_assert!(BYTE_BITS == Byte::BITS as usize);

/// Bytes a [`Word`] occupies in memory.
pub const WORD_BYTES: usize = 2;
const_assert!(WORD_BYTES * BYTE_BITS == Word::BITS as usize);

/// Opcode byte plus two operand bytes.
pub const INSTRUCTION_WIDTH: usize = 3;
const_assert!(
    INSTRUCTION_WIDTH
        == (Byte::BITS + RegisterId::BITS + Address::BITS) as usize / BYTE_BITS
);

/// Program counter plus two accumulators.
pub const REGISTER_COUNT: usize = 3;
const_assert!(REGISTER_COUNT <= 1usize << RegisterId::BITS);

pub const PC_REGISTER: RegisterId = 0;
pub const GENERAL_REGISTER_COUNT: usize = REGISTER_COUNT - 1;

/// Memory size the reference programs are laid out for.
pub const REFERENCE_MEMORY_SIZE: usize = 20;
