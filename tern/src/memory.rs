// Copyright (C) 2024 Ethan Uppal and Utku Melemetci. All rights reserved.

use crate::{
    arch::{Address, Byte, Word, WORD_BYTES},
    coding::{decode_le, encode_le},
    op::{Operands, RawOpCode},
    vm::{Access, VMError, VMResult},
};

/// Bounds-checked view of the caller's memory. Code and data share the
/// same cells, but fetches and data accesses are checked and reported
/// separately.
pub struct Memory<'m> {
    cells: &'m mut [Byte],
}

impl<'m> Memory<'m> {
    pub fn new(cells: &'m mut [Byte]) -> Self {
        Self { cells }
    }

    /// Reads the opcode byte of the instruction at `pc`.
    pub fn fetch_opcode(&self, pc: usize) -> VMResult<RawOpCode> {
        let [opcode] = self.read(pc, |address| Access::Fetch { address })?;
        Ok(opcode)
    }

    /// Reads the two operand bytes of the instruction at `pc`.
    pub fn fetch_operands(&self, pc: usize) -> VMResult<Operands> {
        self.read(pc.saturating_add(1), |address| Access::Fetch { address })
    }

    pub fn load_word(&self, address: Address) -> VMResult<Word> {
        let bytes: [Byte; WORD_BYTES] =
            self.read(address as usize, |address| Access::Load { address })?;
        Ok(decode_le(bytes))
    }

    /// Writes both bytes of `value` or, if either is out of range, neither.
    pub fn store_word(&mut self, address: Address, value: Word) -> VMResult {
        let start = address as usize;
        self.check::<WORD_BYTES>(start, |address| Access::Store { address })?;
        let bytes: [Byte; WORD_BYTES] = encode_le(value);
        self.cells[start..start + WORD_BYTES].copy_from_slice(&bytes);
        Ok(())
    }

    fn read<const N: usize>(
        &self,
        start: usize,
        access: impl FnOnce(usize) -> Access,
    ) -> VMResult<[Byte; N]> {
        self.check::<N>(start, access)?;
        Ok(core::array::from_fn(|i| self.cells[start + i]))
    }

    fn check<const N: usize>(
        &self,
        start: usize,
        access: impl FnOnce(usize) -> Access,
    ) -> VMResult {
        if start.saturating_add(N) <= self.cells.len() {
            Ok(())
        } else {
            // first cell of the attempted access that does not exist
            Err(VMError::OutOfBounds(access(start.max(self.cells.len()))))
        }
    }
}
