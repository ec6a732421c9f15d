// Copyright (C) 2024 Ethan Uppal and Utku Melemetci. All rights reserved.

use core::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    arch::{
        Byte, RegisterId, Word, GENERAL_REGISTER_COUNT, INSTRUCTION_WIDTH,
        PC_REGISTER,
    },
    memory::Memory,
    op::{Op, RawOpCode},
};

/// What the VM was attempting when it left the machine's bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Reading an instruction; `address` is the first cell of the attempted
    /// fetch that does not exist.
    Fetch { address: usize },
    /// Reading a data word; `address` is the first cell of the attempted
    /// load that does not exist.
    Load { address: usize },
    /// Writing a data word; `address` is the first cell of the attempted
    /// store that does not exist.
    Store { address: usize },
    /// Naming a register that does not exist.
    Register { id: RegisterId },
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch { address } => write!(f, "fetch at {:#04x}", address),
            Self::Load { address } => write!(f, "load at {:#04x}", address),
            Self::Store { address } => write!(f, "store at {:#04x}", address),
            Self::Register { id } => write!(f, "register {}", id),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VMError {
    #[error("out of bounds {0}")]
    OutOfBounds(Access),
    #[error("unknown opcode {opcode:#04x} at {pc:#04x}")]
    UnknownOpcode { opcode: RawOpCode, pc: usize },
    #[error("no halt within {budget} steps")]
    StepBudgetExhausted { budget: usize },
}

pub type VMResult<T = ()> = Result<T, VMError>;

/// How the VM treats an opcode byte that names no operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownOpcodePolicy {
    /// Skip the instruction as if it were a no-op.
    #[default]
    Ignore,
    /// Fail with [`VMError::UnknownOpcode`].
    Reject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub unknown_opcode: UnknownOpcodePolicy,
    /// Maximum dispatch iterations before giving up. `None` runs until
    /// halt, which may be forever.
    pub step_budget: Option<usize>,
}

impl Options {
    pub fn reject_unknown_opcodes(mut self) -> Self {
        self.unknown_opcode = UnknownOpcodePolicy::Reject;
        self
    }

    pub fn with_step_budget(mut self, budget: usize) -> Self {
        self.step_budget = Some(budget);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// Register file. Id [`PC_REGISTER`] names the program counter; the
/// remaining ids name the general registers in order.
#[derive(Default)]
struct Registers {
    pc: usize,
    general: [Word; GENERAL_REGISTER_COUNT],
}

impl Registers {
    fn read(&self, id: RegisterId) -> VMResult<Word> {
        if id == PC_REGISTER {
            Ok(self.pc as Word)
        } else {
            self.general
                .get(id as usize - 1)
                .copied()
                .ok_or(VMError::OutOfBounds(Access::Register { id }))
        }
    }

    fn write(&mut self, id: RegisterId, value: Word) -> VMResult {
        if id == PC_REGISTER {
            self.pc = value as usize;
            Ok(())
        } else {
            let register = self
                .general
                .get_mut(id as usize - 1)
                .ok_or(VMError::OutOfBounds(Access::Register { id }))?;
            *register = value;
            Ok(())
        }
    }
}

/// Runs `memory` as a program from address 0 until it halts, with the
/// default [`Options`].
pub fn run(memory: &mut [Byte]) -> VMResult {
    VM::new(memory).run()
}

pub fn run_with_options(memory: &mut [Byte], options: Options) -> VMResult {
    VM::with_options(memory, options).run()
}

/// A single run over borrowed memory. Registers start at zero and are
/// dropped with the [`VM`].
pub struct VM<'m> {
    memory: Memory<'m>,
    registers: Registers,
    options: Options,
    state: State,
    steps: usize,
}

impl<'m> VM<'m> {
    pub fn new(memory: &'m mut [Byte]) -> Self {
        Self::with_options(memory, Options::default())
    }

    pub fn with_options(memory: &'m mut [Byte], options: Options) -> Self {
        Self {
            memory: Memory::new(memory),
            registers: Registers::default(),
            options,
            state: State::Running,
            steps: 0,
        }
    }

    /// Runs the [`VM`] until it executes a halt.
    pub fn run(&mut self) -> VMResult {
        while self.step()? == State::Running {}
        Ok(())
    }

    /// Completed dispatch iterations, counting the one that halted.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Fetches, decodes and executes one instruction. An error leaves
    /// memory and registers as they were before the instruction.
    pub fn step(&mut self) -> VMResult<State> {
        if self.state == State::Halted {
            return Ok(State::Halted);
        }
        if let Some(budget) = self.options.step_budget {
            if self.steps >= budget {
                return Err(VMError::StepBudgetExhausted { budget });
            }
        }

        let pc = self.registers.pc;
        let Some(op) = self.decode_op(pc)? else {
            return Ok(self.advance());
        };
        trace!(pc, %op, "dispatch");

        match op {
            Op::LoadW(r, address) => {
                let value = self.memory.load_word(address)?;
                self.registers.write(r, value)?;
            }
            Op::Store(r, address) => {
                let value = self.registers.read(r)?;
                self.memory.store_word(address, value)?;
            }
            Op::Add(a, b) => {
                let (first, second) =
                    (self.registers.read(a)?, self.registers.read(b)?);
                self.registers.write(a, first.wrapping_add(second))?;
            }
            Op::Sub(a, b) => {
                let (first, second) =
                    (self.registers.read(a)?, self.registers.read(b)?);
                self.registers.write(a, first.wrapping_sub(second))?;
            }
            Op::Halt => {
                self.steps += 1;
                self.state = State::Halted;
                debug!(pc, steps = self.steps, "halted");
                return Ok(State::Halted);
            }
        }

        Ok(self.advance())
    }

    /// Decodes the instruction at `pc`, or `None` for an ignored unknown
    /// opcode. Halt is recognized before its operands are read.
    fn decode_op(&self, pc: usize) -> VMResult<Option<Op>> {
        let opcode = self.memory.fetch_opcode(pc)?;
        if opcode == Op::HALT_TAG {
            return Ok(Some(Op::Halt));
        }

        let operands = self.memory.fetch_operands(pc)?;
        match Op::from_parts(opcode, operands) {
            Some(op) => Ok(Some(op)),
            None => match self.options.unknown_opcode {
                UnknownOpcodePolicy::Ignore => {
                    debug!(pc, opcode, "ignoring unknown opcode");
                    Ok(None)
                }
                UnknownOpcodePolicy::Reject => {
                    Err(VMError::UnknownOpcode { opcode, pc })
                }
            },
        }
    }

    fn advance(&mut self) -> State {
        self.registers.pc += INSTRUCTION_WIDTH;
        self.steps += 1;
        State::Running
    }
}
