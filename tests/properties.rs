use fast_shift_rs::{left, native, right};
use proptest::prelude::*;

proptest! {
    #[test]
    fn left_kernel_matches_native(v: u32, d: u8) {
        prop_assert_eq!(left::lshift(v, d), native::lshift(v, d));
    }

    #[test]
    fn right_kernel_matches_native(v: u32, d: u8) {
        prop_assert_eq!(right::rshift(v, d), native::rshift(v, d));
    }

    #[test]
    fn reference_below_word_width(v: u32, d in 0u8..32) {
        prop_assert_eq!(left::lshift(v, d), v << d);
        prop_assert_eq!(right::rshift(v, d), v >> d);
    }

    #[test]
    fn identity_and_shift_out(v: u32, d in 32u8..=u8::MAX) {
        prop_assert_eq!(left::lshift(v, 0), v);
        prop_assert_eq!(right::rshift(v, 0), v);
        prop_assert_eq!(left::lshift(v, d), 0);
        prop_assert_eq!(right::rshift(v, d), 0);
    }

    #[test]
    fn decomposition_law(v: u32, d in 17u8..=u8::MAX) {
        prop_assert_eq!(left::lshift(v, d), left::lshift(left::lshift(v, 16), d - 16));
        prop_assert_eq!(right::rshift(v, d), right::rshift(right::rshift(v, 16), d - 16));
    }

    #[test]
    fn repeated_calls_agree(v: u32, d: u8) {
        prop_assert_eq!(left::lshift(v, d), left::lshift(v, d));
        prop_assert_eq!(right::rshift(v, d), right::rshift(v, d));
    }
}

#[cfg(feature = "runtime-api")]
proptest! {
    #[test]
    fn dispatcher_matches_native(v: u32, d: u8) {
        prop_assert_eq!(fast_shift_rs::runtime::lshift(v, d), native::lshift(v, d));
        prop_assert_eq!(fast_shift_rs::runtime::rshift(v, d), native::rshift(v, d));
    }
}
