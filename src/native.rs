//! Generic fallback: the platform shift operator.
//!
//! Used for distances the transform table leaves native, for every distance
//! when the optimised path is switched off, and as the reference every
//! specialisation is checked against.  Distances of 32 or more shift the
//! whole word out and give `0`, so the fallback is total over `u8`.

/// `value << d`, zero for `d >= 32`.
#[inline(always)]
pub const fn lshift(value: u32, d: u8) -> u32 {
    match value.checked_shl(d as u32) {
        Some(v) => v,
        None => 0,
    }
}

/// Logical `value >> d`, zero for `d >= 32`.
#[inline(always)]
pub const fn rshift(value: u32, d: u8) -> u32 {
    match value.checked_shr(d as u32) {
        Some(v) => v,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_matches_operator() {
        let v = 0x8235_F00D;
        for d in 0..32u8 {
            assert_eq!(lshift(v, d), v << d);
            assert_eq!(rshift(v, d), v >> d);
        }
    }

    #[test]
    fn out_of_range_is_zero() {
        for d in 32..=u8::MAX {
            assert_eq!(lshift(u32::MAX, d), 0);
            assert_eq!(rshift(u32::MAX, d), 0);
        }
    }
}
