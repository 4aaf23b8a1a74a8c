//! Byte‑level model of a 32‑bit word.
//!
//! An 8‑bit core holds a `u32` in four registers and has no barrel shifter,
//! so every multi‑bit shift is really a recipe over those four bytes.  This
//! module exposes the word in that form ([`Word32`], least significant byte
//! first) together with the handful of primitives the transforms in
//! [`left`](crate::left) and [`right`](crate::right) are assembled from:
//!
//! - **nibble ladders**: swap the nibbles of each byte, mask, and fold the
//!   neighbouring byte in with exclusive‑or, moving a byte range by 4 bits;
//! - **carry chains**: one‑bit shifts that pass the carry from byte to byte;
//! - **byte moves**: whole‑byte repositioning, plus the pure 16‑bit
//!   permutation used by the decomposition rule.
//!
//! Everything here is a `const fn` on a `Copy` value and never branches on
//! the data being shifted.

/// High nibble mask.
const HIGH: u8 = 0xF0;
/// Low nibble mask.
const LOW: u8 = 0x0F;

/// Exchange the two nibbles of a byte (`swap` on AVR).
#[inline(always)]
pub const fn swap_nibbles(b: u8) -> u8 {
    b.rotate_left(4)
}

/// Rotate a byte left through the carry flag (`rol`).
///
/// Returns the new byte and the bit pushed out of bit 7.
#[inline(always)]
pub const fn rol(b: u8, carry: bool) -> (u8, bool) {
    ((b << 1) | carry as u8, b & 0x80 != 0)
}

/// Rotate a byte right through the carry flag (`ror`).
///
/// Returns the new byte and the bit pushed out of bit 0.
#[inline(always)]
pub const fn ror(b: u8, carry: bool) -> (u8, bool) {
    ((b >> 1) | ((carry as u8) << 7), b & 0x01 != 0)
}

/// A `u32` viewed as four bytes, least significant first.
///
/// Byte `0` is the low register (`A` in AVR operand notation), byte `3` the
/// high one (`D`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Word32([u8; 4]);

impl Word32 {
    /// All four bytes zero.
    pub const ZERO: Self = Self([0; 4]);

    /// Split `value` into bytes.
    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    /// Build a word from bytes, least significant first.
    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Reassemble the `u32`.
    #[inline(always)]
    pub const fn get(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    /// The four bytes, least significant first.
    #[inline(always)]
    pub const fn bytes(self) -> [u8; 4] {
        self.0
    }

    /// Byte `i` (0 = least significant).
    ///
    /// # Panics
    ///
    /// If `i > 3`.
    #[inline(always)]
    pub const fn byte(self, i: usize) -> u8 {
        self.0[i]
    }

    /// Copy of `self` with byte `i` replaced by `b`.
    #[inline(always)]
    pub const fn with_byte(self, i: usize, b: u8) -> Self {
        let mut bytes = self.0;
        bytes[i] = b;
        Self(bytes)
    }

    /// Nibble ladder towards the top: bytes `lo..=hi` move up four bits as
    /// one unit.
    ///
    /// The top nibble of byte `hi` is discarded, the low nibble of byte `lo`
    /// becomes zero, and bytes outside the range are untouched.  Each step
    /// is `swap`, `and 0xF0`, two `xor`s: the swapped lower byte is folded
    /// in whole, then its low half (now in the wrong place) is folded back
    /// out.
    #[inline(always)]
    pub const fn nibble_up(self, lo: usize, hi: usize) -> Self {
        let mut b = self.0;
        b[hi] = swap_nibbles(b[hi]) & HIGH;
        let mut i = hi;
        while i > lo {
            let below = swap_nibbles(b[i - 1]);
            b[i] ^= below;
            let below = below & HIGH;
            b[i] ^= below;
            b[i - 1] = below;
            i -= 1;
        }
        Self(b)
    }

    /// Nibble ladder towards the bottom: mirror of [`nibble_up`](Self::nibble_up).
    ///
    /// The low nibble of byte `lo` is discarded and the high nibble of byte
    /// `hi` becomes zero.
    #[inline(always)]
    pub const fn nibble_down(self, lo: usize, hi: usize) -> Self {
        let mut b = self.0;
        b[lo] = swap_nibbles(b[lo]) & LOW;
        let mut i = lo;
        while i < hi {
            let above = swap_nibbles(b[i + 1]);
            b[i] ^= above;
            let above = above & LOW;
            b[i] ^= above;
            b[i + 1] = above;
            i += 1;
        }
        Self(b)
    }

    /// One‑bit carry chain towards the top over bytes `lo..=hi`
    /// (`lsl`/`rol` when `carry` is clear).
    ///
    /// `carry` enters bit 0 of byte `lo`; the bit leaving bit 7 of byte `hi`
    /// is returned.
    #[inline(always)]
    pub const fn rotate_left_through(self, lo: usize, hi: usize, carry: bool) -> (Self, bool) {
        let mut b = self.0;
        let mut c = carry;
        let mut i = lo;
        while i <= hi {
            let (byte, out) = rol(b[i], c);
            b[i] = byte;
            c = out;
            i += 1;
        }
        (Self(b), c)
    }

    /// One‑bit carry chain towards the bottom over bytes `lo..=hi`
    /// (`lsr`/`ror` when `carry` is clear).
    ///
    /// `carry` enters bit 7 of byte `hi`; the bit leaving bit 0 of byte `lo`
    /// is returned.
    #[inline(always)]
    pub const fn rotate_right_through(self, lo: usize, hi: usize, carry: bool) -> (Self, bool) {
        let mut b = self.0;
        let mut c = carry;
        let mut i = hi + 1;
        while i > lo {
            i -= 1;
            let (byte, out) = ror(b[i], c);
            b[i] = byte;
            c = out;
        }
        (Self(b), c)
    }

    /// Move every byte one position up; byte 0 becomes zero.
    #[inline(always)]
    pub const fn bytes_up(self) -> Self {
        let [a, b, c, _] = self.0;
        Self([0, a, b, c])
    }

    /// Move every byte one position down; byte 3 becomes zero.
    #[inline(always)]
    pub const fn bytes_down(self) -> Self {
        let [_, b, c, d] = self.0;
        Self([b, c, d, 0])
    }

    /// `value << 16` as a register permutation.
    #[inline(always)]
    pub const fn half_up(self) -> Self {
        let [a, b, _, _] = self.0;
        Self([0, 0, a, b])
    }

    /// `value >> 16` as a register permutation.
    #[inline(always)]
    pub const fn half_down(self) -> Self {
        let [_, _, c, d] = self.0;
        Self([c, d, 0, 0])
    }
}

impl From<u32> for Word32 {
    #[inline(always)]
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Word32> for u32 {
    #[inline(always)]
    fn from(w: Word32) -> Self {
        w.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order_is_little_endian() {
        let w = Word32::new(0x1122_3344);
        assert_eq!(w.bytes(), [0x44, 0x33, 0x22, 0x11]);
        assert_eq!(w.byte(0), 0x44);
        assert_eq!(w.byte(3), 0x11);
        assert_eq!(Word32::from_bytes([0x44, 0x33, 0x22, 0x11]).get(), 0x1122_3344);
        assert_eq!(u32::from(Word32::from(0xDEAD_BEEF)), 0xDEAD_BEEF);
    }

    #[test]
    fn byte_carry_helpers() {
        assert_eq!(swap_nibbles(0xA5), 0x5A);
        assert_eq!(rol(0x81, false), (0x02, true));
        assert_eq!(rol(0x40, true), (0x81, false));
        assert_eq!(ror(0x81, false), (0x40, true));
        assert_eq!(ror(0x02, true), (0x81, false));
    }

    #[test]
    fn nibble_ladders_move_four_bits() {
        let v = 0x89AB_CDEF;
        assert_eq!(Word32::new(v).nibble_up(0, 3).get(), v << 4);
        assert_eq!(Word32::new(v).nibble_down(0, 3).get(), v >> 4);
        // partial ranges leave the outer bytes alone
        assert_eq!(Word32::new(v).nibble_up(0, 2).get(), 0x89BC_DEF0);
        assert_eq!(Word32::new(v).nibble_down(1, 3).get(), 0x089A_BCEF);
    }

    #[test]
    fn carry_chains_move_one_bit() {
        let v = 0x8000_0001;
        let (w, c) = Word32::new(v).rotate_left_through(0, 3, false);
        assert_eq!((w.get(), c), (0x0000_0002, true));
        let (w, c) = Word32::new(v).rotate_right_through(0, 3, false);
        assert_eq!((w.get(), c), (0x4000_0000, true));
        // carry in lands in the vacated bit
        let (w, _) = Word32::new(0).rotate_left_through(1, 2, true);
        assert_eq!(w.get(), 0x0000_0100);
        let (w, _) = Word32::new(0).rotate_right_through(1, 2, true);
        assert_eq!(w.get(), 0x0080_0000);
    }

    #[test]
    fn byte_moves() {
        let w = Word32::new(0x1122_3344);
        assert_eq!(w.bytes_up().get(), 0x2233_4400);
        assert_eq!(w.bytes_down().get(), 0x0011_2233);
        assert_eq!(w.half_up().get(), 0x3344_0000);
        assert_eq!(w.half_down().get(), 0x0000_1122);
        assert_eq!(w.half_up().half_up(), Word32::ZERO);
        assert_eq!(w.with_byte(2, 0xFF).get(), 0x11FF_3344);
    }
}
