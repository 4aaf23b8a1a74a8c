//! Right‑shift transform table.
//!
//! Mirror image of [`left`](crate::left): the same recipes, run from the most
//! significant byte downward and always zero‑filling from the top.  All
//! values are unsigned, so nothing here ever sign‑extends.

use crate::{
    left::PROBES,
    native,
    table::{self, Strategy},
    word::{rol, Word32},
};

#[inline(always)]
const fn via_native(w: Word32, d: u8) -> Word32 {
    Word32::new(native::rshift(w.get(), d))
}

/// `>> 1`, native.
#[inline(always)]
pub const fn shr1(w: Word32) -> Word32 {
    via_native(w, 1)
}

/// `>> 2`, native.
#[inline(always)]
pub const fn shr2(w: Word32) -> Word32 {
    via_native(w, 2)
}

/// `>> 3`, native.
#[inline(always)]
pub const fn shr3(w: Word32) -> Word32 {
    via_native(w, 3)
}

/// `>> 4`: nibble ladder from byte 0 up to byte 3.
#[inline(always)]
pub const fn shr4(w: Word32) -> Word32 {
    w.nibble_down(0, 3)
}

/// `>> 5`
#[inline(always)]
pub const fn shr5(w: Word32) -> Word32 {
    w.nibble_down(0, 3).rotate_right_through(0, 3, false).0
}

/// Shift bytes `lo..=3` *left* through the carry `passes` times; the bits
/// leaving byte 3 collect at the bottom of a spill byte.
#[inline(always)]
const fn spill_left(w: Word32, lo: usize, passes: u8) -> (Word32, u8) {
    let mut w = w;
    let mut spill = 0u8;
    let mut n = 0;
    while n < passes {
        let (next, carry) = w.rotate_left_through(lo, 3, false);
        spill = rol(spill, carry).0;
        w = next;
        n += 1;
    }
    (w, spill)
}

/// `>> 6`: two left chains into a spill byte, then one byte down with the
/// spill on top.
#[inline(always)]
pub const fn shr6(w: Word32) -> Word32 {
    let (w, spill) = spill_left(w, 0, 2);
    w.bytes_down().with_byte(3, spill)
}

/// `>> 7`
#[inline(always)]
pub const fn shr7(w: Word32) -> Word32 {
    let (w, spill) = spill_left(w, 0, 1);
    w.bytes_down().with_byte(3, spill)
}

/// `>> 8`, native.
#[inline(always)]
pub const fn shr8(w: Word32) -> Word32 {
    via_native(w, 8)
}

#[inline(always)]
const fn carry_then_byte(w: Word32, passes: u8) -> Word32 {
    let mut w = w;
    let mut n = 0;
    while n < passes {
        w = w.rotate_right_through(1, 3, false).0;
        n += 1;
    }
    w.bytes_down()
}

/// `>> 9`: one right chain over the top three bytes, then one byte down.
#[inline(always)]
pub const fn shr9(w: Word32) -> Word32 {
    carry_then_byte(w, 1)
}

/// `>> 10`
#[inline(always)]
pub const fn shr10(w: Word32) -> Word32 {
    carry_then_byte(w, 2)
}

/// `>> 11`
#[inline(always)]
pub const fn shr11(w: Word32) -> Word32 {
    carry_then_byte(w, 3)
}

/// `>> 12`: nibble ladder over the top three bytes, then one byte down.
#[inline(always)]
pub const fn shr12(w: Word32) -> Word32 {
    w.nibble_down(1, 3).bytes_down()
}

/// `>> 13`
#[inline(always)]
pub const fn shr13(w: Word32) -> Word32 {
    w.nibble_down(1, 3).rotate_right_through(1, 3, false).0.bytes_down()
}

/// `>> 14`: two left chains over the top three bytes; the result lands two
/// bytes down with the spill in byte 2.
#[inline(always)]
pub const fn shr14(w: Word32) -> Word32 {
    let (w, spill) = spill_left(w, 1, 2);
    w.half_down().with_byte(2, spill)
}

/// `>> 15`
#[inline(always)]
pub const fn shr15(w: Word32) -> Word32 {
    let (w, spill) = spill_left(w, 1, 1);
    w.half_down().with_byte(2, spill)
}

/// `>> 16`: bytes 2–3 move to 0–1.
#[inline(always)]
pub const fn shr16(w: Word32) -> Word32 {
    w.half_down()
}

/// Logical `value >> d` through the transform table, for any 8‑bit distance.
///
/// Decomposes exactly like [`left::lshift`](crate::left::lshift).
#[inline(always)]
pub const fn rshift(value: u32, d: u8) -> u32 {
    let mut w = Word32::new(value);
    let mut d = d;
    while matches!(table::right(d), Strategy::Decompose) {
        w = shr16(w);
        d -= 16;
    }
    let w = match d {
        4 => shr4(w),
        5 => shr5(w),
        6 => shr6(w),
        7 => shr7(w),
        9 => shr9(w),
        10 => shr10(w),
        11 => shr11(w),
        12 => shr12(w),
        13 => shr13(w),
        14 => shr14(w),
        15 => shr15(w),
        16 => shr16(w),
        _ => via_native(w, d),
    };
    w.get()
}

/// `true` when [`rshift`] matches the native operator at distance `d` on
/// every probe word.
pub const fn agrees_with_native(d: u8) -> bool {
    let mut i = 0;
    while i < PROBES.len() {
        if rshift(PROBES[i], d) != native::rshift(PROBES[i], d) {
            return false;
        }
        i += 1;
    }
    true
}
