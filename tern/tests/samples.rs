// Copyright (C) 2024 Ethan Uppal and Utku Melemetci. All rights reserved.

use pretty_assertions::assert_eq;
use tern::{
    run,
    samples::{output, SAMPLES},
};

#[test]
fn adds_small_inputs() {
    let mut memory = SAMPLES[0].memory;
    run(&mut memory).expect("program should run without errors");

    assert_eq!(22, memory[0x0e]);
    assert_eq!(22, output(&memory));
}

#[test]
fn adds_across_the_byte_boundary() {
    let mut memory = SAMPLES[1].memory;
    run(&mut memory).expect("program should run without errors");

    assert_eq!([0xbc, 0x02], [memory[0x0e], memory[0x0f]]);
    assert_eq!(700, output(&memory));
}

#[test]
fn subtracts() {
    let mut memory = SAMPLES[2].memory;
    run(&mut memory).expect("program should run without errors");

    assert_eq!(245, output(&memory));
}

#[test]
fn only_the_output_slot_changes() {
    for sample in &SAMPLES {
        let after = sample.run().expect("program should run without errors");

        let mut expected = sample.memory;
        expected[0x0e..0x10]
            .copy_from_slice(&sample.expected_output.to_le_bytes());
        assert_eq!(expected, after, "{}", sample.name);
    }
}

#[test]
fn reruns_are_identical() {
    for sample in &SAMPLES {
        assert_eq!(sample.run(), sample.run(), "{}", sample.name);
    }
}
