//! # fast‑shift‑rs
//!
//! Constant‑distance 32‑bit shifts for 8‑bit cores without a barrel shifter.
//!
//! On AVR a shift by more than one bit costs one cycle per bit per register,
//! and the compiler's code for a `u32` shifted by a constant is often far
//! from the best sequence.  This crate provides, for each shift distance, a
//! replacement built from byte and nibble operations (nibble swaps, masks
//! and xor ladders, carry chains and whole‑byte moves) that produces exactly
//! `value << d` or `value >> d`.
//!
//! - [`lshift`] / [`rshift`]: distance as a const generic; the transform is
//!   selected at compile time.
//! - [`runtime::lshift`] / [`runtime::rshift`]: distance known only at run
//!   time (feature `runtime-api`, on by default).
//! - [`left`] / [`right`]: the per‑distance transforms themselves, usable
//!   directly in any build.
//!
//! Distances above 16 are decomposed as `shift(shift(value, 16), d - 16)`.
//! Every distance in `0..=255` is accepted; 32 and above give `0`.
//!
//! ## Build switches
//!
//! The specialisations are enabled automatically on `target_arch = "avr"`,
//! or on any target with the `optimized-shifts` feature.  The
//! `native-shifts` feature turns them off everywhere.  When they are off,
//! every entry point is the native shift operator and gives bit‑identical
//! results.  [`OPTIMIZED`] reports the resolved setting.
//!
//! ## Example
//!
//! ```rust
//! use fast_shift_rs::{lshift, rshift};
//!
//! let tooth_delta: u32 = 33_333;
//! assert_eq!(lshift::<5>(tooth_delta), 1_066_656);
//! assert_eq!(rshift::<5>(tooth_delta), 1_041);
//! assert_eq!(lshift::<32>(tooth_delta), 0);
//!
//! # #[cfg(feature = "runtime-api")]
//! # {
//! use fast_shift_rs::runtime;
//! let d: u8 = 10;
//! assert_eq!(runtime::lshift(tooth_delta, d), tooth_delta << 10);
//! # }
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

/// Byte‑level word model and shared primitives.
pub mod word;

/// Left‑shift transform table.
pub mod left;
/// Right‑shift transform table.
pub mod right;
/// Native operator fallback and correctness reference.
pub mod native;
pub mod table;
pub mod distance;

/// Run‑time distance dispatcher.
#[cfg(feature = "runtime-api")]
pub mod runtime;

// ──────────────────────────────────────────────────────────────
// Re‑exports: public API surface
// --------------------------------------------------------------------------

pub use distance::Distance;
pub use table::Strategy;
pub use word::Word32;

/// Run‑time left shift.
#[cfg(feature = "runtime-api")]
pub use runtime::lshift as lshift_dyn;
/// Run‑time right shift.
#[cfg(feature = "runtime-api")]
pub use runtime::rshift as rshift_dyn;

// ──────────────────────────────────────────────────────────────
// Build switch
// --------------------------------------------------------------------------

/// `true` when the public entry points use the byte/nibble transforms,
/// `false` when they use the native operator.
pub const OPTIMIZED: bool = cfg!(all(
    any(feature = "optimized-shifts", target_arch = "avr"),
    not(feature = "native-shifts")
));

// ──────────────────────────────────────────────────────────────
// Compile‑time entry points
// --------------------------------------------------------------------------

/// `value << D` with the transform for `D` chosen at compile time.
///
/// The selected transform is checked against the native operator while the
/// crate using it is compiled; a distance without a working transform is a
/// build error.
#[inline(always)]
pub const fn lshift<const D: u8>(value: u32) -> u32 {
    const {
        assert!(left::agrees_with_native(D), "no left-shift transform for this distance");
    }
    if OPTIMIZED {
        left::lshift(value, D)
    } else {
        native::lshift(value, D)
    }
}

/// Logical `value >> D` with the transform for `D` chosen at compile time.
#[inline(always)]
pub const fn rshift<const D: u8>(value: u32) -> u32 {
    const {
        assert!(right::agrees_with_native(D), "no right-shift transform for this distance");
    }
    if OPTIMIZED {
        right::rshift(value, D)
    } else {
        native::rshift(value, D)
    }
}

// ──────────────────────────────────────────────────────────────
// Crate‑wide result and error types
// --------------------------------------------------------------------------

/// Shorthand `Result` alias for this crate’s operations.
pub type Result<T, E = ShiftError> = core::result::Result<T, E>;

/// Errors raised when a shift distance is built from a wider integer.
///
/// Shifting itself never fails.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftError {
    /// The distance does not fit in `u8`.
    #[error("shift distance ({distance}) does not fit in 8 bits")]
    DistanceOutOfRange { distance: i128 },
}

// ──────────────────────────────────────────────────────────────
// Basic smoke tests
// --------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanity_const_api() {
        assert_eq!(lshift::<0>(33_333), 33_333);
        assert_eq!(lshift::<5>(33_333), 1_066_656);
        assert_eq!(rshift::<5>(33_333), 1_041);
        assert_eq!(lshift::<16>(33_333), 2_184_511_488);
        assert_eq!(rshift::<4>(u32::MAX), 268_435_455);
        assert_eq!(lshift::<31>(1), 2_147_483_648);
        assert_eq!(lshift::<32>(1), 0);
        assert_eq!(rshift::<200>(u32::MAX), 0);
    }

    #[test]
    fn usable_in_const_context() {
        const SCALED: u32 = lshift::<10>(3);
        assert_eq!(SCALED, 3072);
    }

    #[test]
    fn switch_matches_features() {
        let forced_off = cfg!(feature = "native-shifts");
        let forced_on = cfg!(feature = "optimized-shifts") || cfg!(target_arch = "avr");
        assert_eq!(OPTIMIZED, forced_on && !forced_off);
    }
}
