//! Validated shift distances.
//!
//! Every shift in this crate takes its distance as a `u8`.  Callers holding a
//! wider integer convert it through [`Distance`], which is the only place a
//! [`ShiftError`] can arise: once a distance fits in eight bits, every shift
//! of every value is defined.

use crate::{table, ShiftError, Strategy};

/// A shift distance in `0..=255`.
///
/// Distances of 32 and above are valid and shift the whole word out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Distance(u8);

impl Distance {
    /// Width of the shifted word in bits.
    pub const WORD_BITS: u8 = 32;

    #[inline]
    pub const fn new(d: u8) -> Self {
        Self(d)
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// `true` if a shift by this distance always yields `0`.
    #[inline]
    pub const fn shifts_out(self) -> bool {
        self.0 >= Self::WORD_BITS
    }

    /// Transform table row for a left shift by this distance.
    #[inline]
    pub const fn left(self) -> Strategy {
        table::left(self.0)
    }

    /// Transform table row for a right shift by this distance.
    #[inline]
    pub const fn right(self) -> Strategy {
        table::right(self.0)
    }

    /// `value << self`, dispatched at run time.
    #[cfg(feature = "runtime-api")]
    #[inline]
    pub fn shl(self, value: u32) -> u32 {
        crate::runtime::lshift(value, self.0)
    }

    /// `value >> self`, dispatched at run time.
    #[cfg(feature = "runtime-api")]
    #[inline]
    pub fn shr(self, value: u32) -> u32 {
        crate::runtime::rshift(value, self.0)
    }
}

impl From<u8> for Distance {
    #[inline]
    fn from(d: u8) -> Self {
        Self(d)
    }
}

impl From<Distance> for u8 {
    #[inline]
    fn from(d: Distance) -> Self {
        d.0
    }
}

macro_rules! try_from_wider {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for Distance {
            type Error = ShiftError;

            #[inline]
            fn try_from(d: $t) -> Result<Self, Self::Error> {
                u8::try_from(d)
                    .map(Self)
                    .map_err(|_| ShiftError::DistanceOutOfRange { distance: d as i128 })
            }
        }
    )*};
}

try_from_wider!(u16, u32, u64, usize, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_eight_bit_values() {
        assert_eq!(Distance::try_from(0u32), Ok(Distance::new(0)));
        assert_eq!(Distance::try_from(255usize).map(Distance::get), Ok(255));
        assert_eq!(Distance::try_from(31i32).map(u8::from), Ok(31));
    }

    #[test]
    fn rejects_wider_values() {
        assert_eq!(
            Distance::try_from(256u32),
            Err(ShiftError::DistanceOutOfRange { distance: 256 })
        );
        assert_eq!(
            Distance::try_from(-1i32),
            Err(ShiftError::DistanceOutOfRange { distance: -1 })
        );
        let msg = Distance::try_from(70_000u64).unwrap_err().to_string();
        assert_eq!(msg, "shift distance (70000) does not fit in 8 bits");
    }

    #[test]
    fn shift_out_boundary() {
        assert!(!Distance::new(31).shifts_out());
        assert!(Distance::new(32).shifts_out());
        assert_eq!(Distance::new(12).left(), Strategy::NibbleSwap);
        assert_eq!(Distance::new(40).right(), Strategy::Decompose);
    }

    #[cfg(feature = "runtime-api")]
    #[test]
    fn shifts_through_dispatcher() {
        let d = Distance::try_from(5u16).unwrap();
        assert_eq!(d.shl(33_333), 1_066_656);
        assert_eq!(d.shr(33_333), 1_041);
    }
}
