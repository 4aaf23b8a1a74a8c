//! Left‑shift transform table.
//!
//! One `const fn` per distance from 1 to 16, each a fixed sequence of byte
//! operations computing `value << d` without any data‑dependent branch.
//! The sequences follow the register recipes that beat AVR‑GCC's own output
//! (see <https://aykevl.nl/2021/02/avr-bitshift>), expressed with the
//! portable primitives of [`Word32`]:
//!
//! | d           | recipe                                                        |
//! |-------------|---------------------------------------------------------------|
//! | 4, 12       | nibble ladder (12 = ladder over the low three bytes + byte move) |
//! | 5, 13       | as 4 / 12, plus one `lsl`/`rol` chain                         |
//! | 6, 7        | `lsr`/`ror` chain 2 / 1 times, spilling into a fresh low byte, then byte move |
//! | 14, 15      | as 6 / 7 on the low three bytes, then two byte moves          |
//! | 9, 10, 11   | 1 / 2 / 3 `lsl`/`rol` chains on the low three bytes, then byte move |
//! | 16          | register permutation                                          |
//! | 1–3, 8      | native operator                                               |
//!
//! Distances above 16 go through [`lshift`], which peels off 16‑bit
//! permutations until a table row applies.

use crate::{
    native,
    table::{self, Strategy},
    word::{ror, Word32},
};

#[inline(always)]
const fn via_native(w: Word32, d: u8) -> Word32 {
    Word32::new(native::lshift(w.get(), d))
}

/// `<< 1`, native.
#[inline(always)]
pub const fn shl1(w: Word32) -> Word32 {
    via_native(w, 1)
}

/// `<< 2`, native.
#[inline(always)]
pub const fn shl2(w: Word32) -> Word32 {
    via_native(w, 2)
}

/// `<< 3`, native.
#[inline(always)]
pub const fn shl3(w: Word32) -> Word32 {
    via_native(w, 3)
}

/// `<< 4`: nibble ladder over all four bytes.
#[inline(always)]
pub const fn shl4(w: Word32) -> Word32 {
    w.nibble_up(0, 3)
}

/// `<< 5`: `<< 4`, then one carry chain.
#[inline(always)]
pub const fn shl5(w: Word32) -> Word32 {
    w.nibble_up(0, 3).rotate_left_through(0, 3, false).0
}

/// Shift bytes `0..=hi` *right* through the carry `passes` times, catching
/// the bits that fall out of byte 0 at the top of a spill byte.
///
/// Moving the result up one byte and placing the spill below it gives a
/// left shift by `8 - passes`.
#[inline(always)]
const fn spill_right(w: Word32, hi: usize, passes: u8) -> (Word32, u8) {
    let mut w = w;
    let mut spill = 0u8;
    let mut n = 0;
    while n < passes {
        let (next, carry) = w.rotate_right_through(0, hi, false);
        spill = ror(spill, carry).0;
        w = next;
        n += 1;
    }
    (w, spill)
}

/// `<< 6`: two right chains into a spill byte, then one byte up.
#[inline(always)]
pub const fn shl6(w: Word32) -> Word32 {
    let (w, spill) = spill_right(w, 3, 2);
    w.bytes_up().with_byte(0, spill)
}

/// `<< 7`: one right chain into a spill byte, then one byte up.
#[inline(always)]
pub const fn shl7(w: Word32) -> Word32 {
    let (w, spill) = spill_right(w, 3, 1);
    w.bytes_up().with_byte(0, spill)
}

/// `<< 8`, native.
#[inline(always)]
pub const fn shl8(w: Word32) -> Word32 {
    via_native(w, 8)
}

/// `passes` left chains over the low three bytes, then one byte up.
#[inline(always)]
const fn carry_then_byte(w: Word32, passes: u8) -> Word32 {
    let mut w = w;
    let mut n = 0;
    while n < passes {
        w = w.rotate_left_through(0, 2, false).0;
        n += 1;
    }
    w.bytes_up()
}

/// `<< 9`
#[inline(always)]
pub const fn shl9(w: Word32) -> Word32 {
    carry_then_byte(w, 1)
}

/// `<< 10`
#[inline(always)]
pub const fn shl10(w: Word32) -> Word32 {
    carry_then_byte(w, 2)
}

/// `<< 11`
#[inline(always)]
pub const fn shl11(w: Word32) -> Word32 {
    carry_then_byte(w, 3)
}

/// `<< 12`: nibble ladder over the low three bytes, then one byte up.
#[inline(always)]
pub const fn shl12(w: Word32) -> Word32 {
    w.nibble_up(0, 2).bytes_up()
}

/// `<< 13`: as `<< 12` with one carry chain before the byte move.
#[inline(always)]
pub const fn shl13(w: Word32) -> Word32 {
    w.nibble_up(0, 2).rotate_left_through(0, 2, false).0.bytes_up()
}

/// `<< 14`: two right chains over the low three bytes, result lands two
/// bytes up with the spill in byte 1.
#[inline(always)]
pub const fn shl14(w: Word32) -> Word32 {
    let (w, spill) = spill_right(w, 2, 2);
    w.half_up().with_byte(1, spill)
}

/// `<< 15`
#[inline(always)]
pub const fn shl15(w: Word32) -> Word32 {
    let (w, spill) = spill_right(w, 2, 1);
    w.half_up().with_byte(1, spill)
}

/// `<< 16`: bytes 0–1 move to 2–3.
#[inline(always)]
pub const fn shl16(w: Word32) -> Word32 {
    w.half_up()
}

/// `value << d` through the transform table, for any 8‑bit distance.
///
/// While the table says [`Strategy::Decompose`] the word is moved up 16 bits
/// and `d` drops by 16, so at most 15 permutations run before a table row
/// applies.  With a constant `d` the whole body folds down to the single
/// sequence for that distance.
#[inline(always)]
pub const fn lshift(value: u32, d: u8) -> u32 {
    let mut w = Word32::new(value);
    let mut d = d;
    while matches!(table::left(d), Strategy::Decompose) {
        w = shl16(w);
        d -= 16;
    }
    let w = match d {
        4 => shl4(w),
        5 => shl5(w),
        6 => shl6(w),
        7 => shl7(w),
        9 => shl9(w),
        10 => shl10(w),
        11 => shl11(w),
        12 => shl12(w),
        13 => shl13(w),
        14 => shl14(w),
        15 => shl15(w),
        16 => shl16(w),
        _ => via_native(w, d),
    };
    w.get()
}

/// Probe words used to check a transform at build time.
pub(crate) const PROBES: [u32; 5] = [0xFFFF_FFFF, 0x0000_8235, 0x8000_0001, 0x1234_5678, 0xA5C3_3C5A];

/// `true` when [`lshift`] matches the native operator at distance `d` on
/// every probe word.  Evaluated in `const` context by [`crate::lshift`].
pub const fn agrees_with_native(d: u8) -> bool {
    let mut i = 0;
    while i < PROBES.len() {
        if lshift(PROBES[i], d) != native::lshift(PROBES[i], d) {
            return false;
        }
        i += 1;
    }
    true
}
