// Copyright (C) 2024 Ethan Uppal and Utku Melemetci. All rights reserved.

//! The reference programs. Each is a full memory image:
//!
//! ```text
//! 00 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f 10 11 12 13
//! INSTRUCTIONS ------------------------------ OUT-- IN-1- IN-2-
//! ```

use crate::{
    arch::{Address, Byte, Word, REFERENCE_MEMORY_SIZE, WORD_BYTES},
    coding::decode_le,
    vm::{run, VMResult},
};

pub type MemoryImage = [Byte; REFERENCE_MEMORY_SIZE];

pub const OUTPUT_ADDRESS: Address = 0x0e;

pub struct Sample {
    pub name: &'static str,
    pub memory: MemoryImage,
    pub expected_output: Word,
}

impl Sample {
    /// Runs a copy of the image and returns the final memory.
    pub fn run(&self) -> VMResult<MemoryImage> {
        let mut memory = self.memory;
        run(&mut memory)?;
        Ok(memory)
    }
}

/// Reads the output slot of a finished image.
pub fn output(memory: &MemoryImage) -> Word {
    let start = OUTPUT_ADDRESS as usize;
    let mut bytes = [0; WORD_BYTES];
    bytes.copy_from_slice(&memory[start..start + WORD_BYTES]);
    decode_le(bytes)
}

#[rustfmt::skip]
pub const SAMPLES: [Sample; 3] = [
    Sample {
        name: "10 + 12",
        memory: [
            0x01, 0x01, 0x10, // LOADW R1 0x10
            0x01, 0x02, 0x12, // LOADW R2 0x12
            0x03, 0x01, 0x02, // ADD R1 R2
            0x02, 0x01, 0x0e, // STORE R1 0x0e
            0xff,             // HALT
            0x00,             // unused
            0x00, 0x00,       // output
            0x0a, 0x00,       // input 1
            0x0c, 0x00,       // input 2
        ],
        expected_output: 22,
    },
    Sample {
        name: "500 + 200",
        memory: [
            0x01, 0x01, 0x10,
            0x01, 0x02, 0x12,
            0x03, 0x01, 0x02,
            0x02, 0x01, 0x0e,
            0xff,
            0x00,
            0x00, 0x00,
            0xf4, 0x01,
            0xc8, 0x00,
        ],
        expected_output: 700,
    },
    Sample {
        name: "400 - 155",
        memory: [
            0x01, 0x01, 0x10,
            0x01, 0x02, 0x12,
            0x04, 0x01, 0x02, // SUB R1 R2
            0x02, 0x01, 0x0e,
            0xff,
            0x00,
            0x00, 0x00,
            0x90, 0x01,
            0x9b, 0x00,
        ],
        expected_output: 245,
    },
];

#[cfg(test)]
mod tests {
    use crate::{
        op::Op,
        program::decode_program,
        samples::{output, SAMPLES},
    };

    #[test]
    fn images_decode_to_the_same_shape() {
        for sample in &SAMPLES {
            let program = decode_program(&sample.memory)
                .expect("sample should decode up to its halt");
            assert_eq!(5, program.len(), "{}", sample.name);
            assert_eq!(Op::LoadW(1, 0x10), program[0]);
            assert_eq!(Op::Store(1, 0x0e), program[3]);
        }
    }

    #[test]
    fn output_slot_starts_clear() {
        for sample in &SAMPLES {
            assert_eq!(0, output(&sample.memory), "{}", sample.name);
        }
    }
}
