//! Shift distance → algorithm family, for both directions.
//!
//! This is the fixed, compile‑time table the rest of the crate is organised
//! around.  The optimised kernels walk it to decide when to peel off a
//! 16‑bit permutation; the compile‑time entry points and the demos use it
//! to describe what a given distance compiles to.
//!
//! Which distances are worth specialising depends on the target and the
//! compiler generation.  The rows marked [`Strategy::Native`] are the ones
//! where AVR code generation was already as good as a hand‑written sequence
//! when the transforms were validated; re‑measure before trusting them on a
//! different core.

use core::fmt;

/// How a shift of one particular distance is carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The platform shift operator, unchanged.
    Native,
    /// Nibble swap, mask and xor across the byte ladder (4, 12).
    NibbleSwap,
    /// Nibble ladder followed by one single‑bit carry chain (5, 13).
    NibbleSwapCarry,
    /// Shift the *other* way through carry by `8 - d % 8` bits, then move
    /// whole bytes (6, 7, 14, 15).
    CarryRotate,
    /// One to three single‑bit carry chains, then a whole‑byte move (9–11).
    CarryThenByte,
    /// Pure register permutation (16).
    BytePermute,
    /// `shift(shift(value, 16), d - 16)`.
    Decompose,
}

impl Strategy {
    /// `true` when the distance has its own byte/nibble sequence, rather
    /// than using the native operator or being split into smaller shifts.
    #[inline]
    pub const fn is_specialised(self) -> bool {
        !matches!(self, Strategy::Native | Strategy::Decompose)
    }

    /// Short lowercase name of the family.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Native => "native",
            Strategy::NibbleSwap => "nibble-swap",
            Strategy::NibbleSwapCarry => "nibble-swap+carry",
            Strategy::CarryRotate => "carry-rotate",
            Strategy::CarryThenByte => "carry+byte",
            Strategy::BytePermute => "byte-permute",
            Strategy::Decompose => "decompose",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Table row for `value << d`.
#[inline]
pub const fn left(d: u8) -> Strategy {
    specialised(d)
}

/// Table row for `value >> d`.
///
/// Same families as [`left`]: every right transform mirrors its left
/// counterpart, working from the top byte down.
#[inline]
pub const fn right(d: u8) -> Strategy {
    specialised(d)
}

const fn specialised(d: u8) -> Strategy {
    match d {
        0..=3 | 8 | 24 => Strategy::Native,
        4 | 12 => Strategy::NibbleSwap,
        5 | 13 => Strategy::NibbleSwapCarry,
        6 | 7 | 14 | 15 => Strategy::CarryRotate,
        9..=11 => Strategy::CarryThenByte,
        16 => Strategy::BytePermute,
        17..=23 | 25..=u8::MAX => Strategy::Decompose,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_rows() {
        assert_eq!(left(0), Strategy::Native);
        assert_eq!(left(4), Strategy::NibbleSwap);
        assert_eq!(left(13), Strategy::NibbleSwapCarry);
        assert_eq!(left(7), Strategy::CarryRotate);
        assert_eq!(left(10), Strategy::CarryThenByte);
        assert_eq!(left(16), Strategy::BytePermute);
        assert_eq!(left(24), Strategy::Native);
        assert_eq!(left(17), Strategy::Decompose);
        assert_eq!(left(u8::MAX), Strategy::Decompose);
        assert_eq!(right(15), Strategy::CarryRotate);
        assert_eq!(right(3), Strategy::Native);
    }

    #[test]
    fn decompose_only_above_sixteen() {
        for d in 0..=u8::MAX {
            let decomposed = left(d) == Strategy::Decompose;
            assert_eq!(decomposed, d > 16 && d != 24, "d = {d}");
        }
    }

    #[test]
    fn specialised_set() {
        let specialised: Vec<u8> = (0..=u8::MAX).filter(|&d| left(d).is_specialised()).collect();
        assert_eq!(specialised, [4, 5, 6, 7, 9, 10, 11, 12, 13, 14, 15, 16]);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Strategy::CarryRotate.to_string(), "carry-rotate");
    }
}
