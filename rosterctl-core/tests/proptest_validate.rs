use proptest::prelude::*;
use rosterctl_core::validate::{is_digits, parse_positive_int};

proptest! {
    /// Property: every positive i32, printed in decimal, round-trips
    #[test]
    fn prop_positive_ints_round_trip(n in 1..=i32::MAX) {
        let s = n.to_string();
        prop_assert!(is_digits(&s));
        prop_assert_eq!(parse_positive_int(&s), Some(n));
    }

    /// Property: any string containing a non-digit is rejected
    #[test]
    fn prop_non_digit_strings_rejected(s in ".*") {
        prop_assume!(!s.chars().all(|c| c.is_ascii_digit()) || s.is_empty());
        prop_assert!(!is_digits(&s));
        prop_assert_eq!(parse_positive_int(&s), None);
    }

    /// Property: zero-valued digit strings are rejected however padded
    #[test]
    fn prop_zero_rejected(zeros in "0{1,30}") {
        prop_assert!(is_digits(&zeros));
        prop_assert_eq!(parse_positive_int(&zeros), None);
    }

    /// Property: leading zeros do not change the parsed value
    #[test]
    fn prop_leading_zeros_ignored(n in 1..=i32::MAX, pad in 0usize..5) {
        let s = format!("{}{}", "0".repeat(pad), n);
        prop_assert_eq!(parse_positive_int(&s), Some(n));
    }

    /// Property: the parser never panics on arbitrary input
    #[test]
    fn prop_parser_never_panics(s in ".*") {
        let _ = parse_positive_int(&s);
    }
}
