use proptest::prelude::*;
use union_transfer::amount::{format_base_units, to_base_units};

proptest! {
    #[test]
    fn format_then_parse_round_trips(raw in 0u128..1_000_000_000_000_000_000_000_000_000_000u128, decimals in 0u8..=18) {
        let formatted = format_base_units(raw, decimals);
        prop_assert_eq!(to_base_units(&formatted, decimals).unwrap(), raw);
    }

    #[test]
    fn parsing_never_panics(input in "\\PC{0,40}", decimals in 0u8..=18) {
        let _ = to_base_units(&input, decimals);
    }

    #[test]
    fn digits_beyond_precision_are_floored(integer in 0u64..1_000_000u64, frac in 0u32..1_000_000u32, decimals in 1u8..=6) {
        // Writing the full-precision value and then appending extra digits
        // must not change the parsed base units.
        let width = decimals as usize;
        let frac = u64::from(frac) % 10u64.pow(decimals as u32);
        let exact = format!("{}.{:0>width$}", integer, frac, width = width);
        let overlong = format!("{}999", exact);

        let a = to_base_units(&exact, decimals).unwrap();
        let b = to_base_units(&overlong, decimals).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn integer_strings_scale_exactly(value in 0u64..1_000_000_000u64, decimals in 0u8..=18) {
        let raw = to_base_units(&value.to_string(), decimals).unwrap();
        prop_assert_eq!(raw, u128::from(value) * 10u128.pow(decimals as u32));
    }
}
