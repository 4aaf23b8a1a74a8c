//! Run‑time distance dispatch.
//!
//! For callers whose shift distance is only known during execution.  A
//! distance below 16 indexes straight into a table of the per‑distance
//! transforms; anything larger applies the 16‑bit permutation and recurses
//! on `d - 16`, so a `u8` distance never recurses more than 15 times.
//!
//! With the optimised path switched off both entry points are the native
//! operator (zero for distances of 32 and above).
//!
//! Compiled only with the `runtime-api` feature.

use crate::{left, native, right, word::Word32, OPTIMIZED};

type Transform = fn(Word32) -> Word32;

#[inline(always)]
const fn identity(w: Word32) -> Word32 {
    w
}

/// Left transforms indexed by distance (`0..16`).
const LEFT: [Transform; 16] = [
    identity,
    left::shl1,
    left::shl2,
    left::shl3,
    left::shl4,
    left::shl5,
    left::shl6,
    left::shl7,
    left::shl8,
    left::shl9,
    left::shl10,
    left::shl11,
    left::shl12,
    left::shl13,
    left::shl14,
    left::shl15,
];

/// Right transforms indexed by distance (`0..16`).
const RIGHT: [Transform; 16] = [
    identity,
    right::shr1,
    right::shr2,
    right::shr3,
    right::shr4,
    right::shr5,
    right::shr6,
    right::shr7,
    right::shr8,
    right::shr9,
    right::shr10,
    right::shr11,
    right::shr12,
    right::shr13,
    right::shr14,
    right::shr15,
];

fn dispatch(w: Word32, d: u8, table: &[Transform; 16], half: Transform) -> Word32 {
    match d {
        0..=15 => table[d as usize](w),
        // one permutation per 16 bits; everything from 32 on is zero by now
        _ => dispatch(half(w), d - 16, table, half),
    }
}

/// `value << d` for a distance chosen at run time.
#[inline]
pub fn lshift(value: u32, d: u8) -> u32 {
    if !OPTIMIZED {
        return native::lshift(value, d);
    }
    if d == 0 {
        return value;
    }
    dispatch(Word32::new(value), d, &LEFT, left::shl16).get()
}

/// Logical `value >> d` for a distance chosen at run time.
#[inline]
pub fn rshift(value: u32, d: u8) -> u32 {
    if !OPTIMIZED {
        return native::rshift(value, d);
    }
    if d == 0 {
        return value;
    }
    dispatch(Word32::new(value), d, &RIGHT, right::shr16).get()
}

/// The optimised dispatcher regardless of [`OPTIMIZED`], so both build
/// configurations can be checked from one test binary.
#[cfg(test)]
pub(crate) fn dispatch_left(value: u32, d: u8) -> u32 {
    dispatch(Word32::new(value), d, &LEFT, left::shl16).get()
}

#[cfg(test)]
pub(crate) fn dispatch_right(value: u32, d: u8) -> u32 {
    dispatch(Word32::new(value), d, &RIGHT, right::shr16).get()
}
