// Copyright (C) 2024 Ethan Uppal and Utku Melemetci. All rights reserved.

//! Little-endian packing of unsigned words into memory cells.

use num_traits::{AsPrimitive, PrimInt, Unsigned};

use crate::arch::{Byte, BYTE_BITS};

/// Splits `value` into `N` bytes, least significant first. Bits beyond
/// `N` bytes are dropped.
pub fn encode_le<W, const N: usize>(value: W) -> [Byte; N]
where
    W: PrimInt + Unsigned + AsPrimitive<Byte>,
{
    core::array::from_fn(|i| {
        let shift = (BYTE_BITS * i) as u32;
        if shift >= W::zero().count_zeros() {
            0
        } else {
            value.unsigned_shr(shift).as_()
        }
    })
}

/// Reassembles a value from `N` bytes stored least significant first.
pub fn decode_le<W, const N: usize>(bytes: [Byte; N]) -> W
where
    W: PrimInt + Unsigned + 'static,
    Byte: AsPrimitive<W>,
{
    let width = W::zero().count_zeros();
    bytes.iter().enumerate().fold(W::zero(), |acc, (i, &byte)| {
        let shift = (BYTE_BITS * i) as u32;
        if shift >= width {
            acc
        } else {
            let byte: W = byte.as_();
            acc | byte.unsigned_shl(shift)
        }
    })
}
