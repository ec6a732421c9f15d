// Copyright (C) 2024 Ethan Uppal and Utku Melemetci. All rights reserved.

use crate::{
    arch::{Byte, INSTRUCTION_WIDTH},
    op::Op,
};

pub type EncodedProgram = Vec<Byte>;
pub type DecodedProgram = Vec<Op>;

/// Lays `program` out as consecutive instructions starting at offset 0.
pub fn encode_program(program: &[Op]) -> EncodedProgram {
    program.iter().flat_map(Op::encode).collect()
}

/// Decodes instructions from address 0 through the first halt. Returns
/// `None` if an unknown opcode or a truncated instruction comes first, or
/// if there is no halt at all.
pub fn decode_program(memory: &[Byte]) -> Option<DecodedProgram> {
    let mut program = Vec::new();
    for instruction in memory.chunks(INSTRUCTION_WIDTH) {
        let op = match *instruction {
            [opcode, ..] if opcode == Op::HALT_TAG => Op::Halt,
            [opcode, a, b] => Op::from_parts(opcode, [a, b])?,
            _ => return None,
        };
        program.push(op);
        if op == Op::Halt {
            return Some(program);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::{
        op::Op,
        program::{decode_program, encode_program},
    };

    #[test]
    fn encodes_in_order() {
        assert_eq!(
            vec![0x01, 0x01, 0x10, 0x03, 0x01, 0x02, 0xff, 0x00, 0x00],
            encode_program(&[Op::LoadW(1, 0x10), Op::Add(1, 2), Op::Halt])
        );
    }

    #[test]
    fn decodes_through_halt_only() {
        // data after the halt is not code
        let memory = [
            0x01, 0x01, 0x10, 0x04, 0x01, 0x02, 0xff, 0x00, 0x00, 0x00, 0x90,
            0x01,
        ];
        assert_eq!(
            Some(vec![Op::LoadW(1, 0x10), Op::Sub(1, 2), Op::Halt]),
            decode_program(&memory)
        );
    }

    #[test]
    fn decodes_trailing_short_halt() {
        assert_eq!(
            Some(vec![Op::Add(2, 1), Op::Halt]),
            decode_program(&[0x03, 0x02, 0x01, 0xff])
        );
    }

    #[test]
    fn fails_without_halt() {
        assert_eq!(None, decode_program(&[0x03, 0x01, 0x02]));
        assert_eq!(None, decode_program(&[0x03, 0x01]));
        assert_eq!(None, decode_program(&[0x09, 0x01, 0x02, 0xff]));
        assert_eq!(None, decode_program(&[]));
    }
}
