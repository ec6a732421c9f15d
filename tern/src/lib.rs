// Copyright (C) 2024 Ethan Uppal and Utku Melemetci. All rights reserved.

#![forbid(unsafe_code)]

pub mod arch;
pub mod coding;
pub mod memory;
pub mod op;
pub mod program;
pub mod samples;
pub mod vm;

pub use vm::{run, run_with_options, Options, VMError, VMResult, VM};
