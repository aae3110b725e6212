//! Decimal amount normalization
//!
//! Converts human-entered decimal amounts into integer base units using a
//! token's declared precision. Pure integer arithmetic throughout; a float
//! intermediate would drop base units on 18-decimal tokens.

use crate::error::{TransferError, TransferResult};

/// Convert a decimal string to base units: floor(amount * 10^decimals).
///
/// Fractional digits beyond the token's precision are truncated, which is
/// the floor for non-negative inputs. Negative amounts, empty strings, and
/// anything that is not a plain decimal number are rejected.
pub fn to_base_units(amount: &str, decimals: u8) -> TransferResult<u128> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(TransferError::validation("Amount is empty"));
    }
    if trimmed.starts_with('-') || trimmed.starts_with('+') {
        return Err(TransferError::validation(format!(
            "Amount must be an unsigned decimal: '{}'",
            trimmed
        )));
    }

    let (integer_str, fraction_str) = match trimmed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (trimmed, ""),
    };

    // "1." and ".5" are accepted; "." alone is not
    if integer_str.is_empty() && fraction_str.is_empty() {
        return Err(TransferError::validation(format!("Invalid amount: '{}'", trimmed)));
    }
    if !integer_str.chars().all(|c| c.is_ascii_digit())
        || !fraction_str.chars().all(|c| c.is_ascii_digit())
    {
        return Err(TransferError::validation(format!(
            "Invalid decimal amount: '{}'",
            trimmed
        )));
    }

    let integer: u128 = if integer_str.is_empty() {
        0
    } else {
        integer_str
            .parse()
            .map_err(|_| TransferError::validation(format!("Amount overflow: '{}'", trimmed)))?
    };

    // Truncate beyond-precision digits (floor), pad the rest to full width
    let kept = &fraction_str[..fraction_str.len().min(decimals as usize)];
    let fraction: u128 = if kept.is_empty() {
        0
    } else {
        let padded = format!("{:0<width$}", kept, width = decimals as usize);
        padded
            .parse()
            .map_err(|_| TransferError::validation(format!("Amount overflow: '{}'", trimmed)))?
    };

    let multiplier = 10u128
        .checked_pow(decimals as u32)
        .ok_or_else(|| TransferError::validation(format!("Unsupported precision: {}", decimals)))?;

    integer
        .checked_mul(multiplier)
        .and_then(|v| v.checked_add(fraction))
        .ok_or_else(|| TransferError::validation(format!("Amount overflow: '{}'", trimmed)))
}

/// Re-express a base-unit amount as a trimmed decimal string
pub fn format_base_units(raw: u128, decimals: u8) -> String {
    let multiplier = 10u128.pow(decimals as u32);
    let integer = raw / multiplier;
    let fraction = raw % multiplier;

    if fraction == 0 {
        integer.to_string()
    } else {
        let frac_str = format!("{:0>width$}", fraction, width = decimals as usize);
        format!("{}.{}", integer, frac_str.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_reference_values() {
        assert_eq!(to_base_units("0.0001", 18).unwrap(), 100_000_000_000_000);
        assert_eq!(to_base_units("1", 6).unwrap(), 1_000_000);
        assert_eq!(to_base_units("0", 18).unwrap(), 0);
    }

    #[test]
    fn test_floor_semantics() {
        // Digits beyond the precision are dropped, never rounded up
        assert_eq!(to_base_units("0.1234567", 6).unwrap(), 123_456);
        assert_eq!(to_base_units("0.9999999", 6).unwrap(), 999_999);
        assert_eq!(to_base_units("1.00000000000000000099", 18).unwrap(), 10u128.pow(18));
    }

    #[test]
    fn test_partial_forms() {
        assert_eq!(to_base_units(".5", 6).unwrap(), 500_000);
        assert_eq!(to_base_units("5.", 6).unwrap(), 5_000_000);
        assert_eq!(to_base_units(" 2.5 ", 2).unwrap(), 250);
    }

    #[test]
    fn test_zero_decimals() {
        assert_eq!(to_base_units("42", 0).unwrap(), 42);
        assert_eq!(to_base_units("42.9", 0).unwrap(), 42);
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in ["", ".", "-1", "+1", "1e18", "0x10", "one", "1.2.3", "1,5"] {
            let err = to_base_units(bad, 18).unwrap_err();
            assert_eq!(err.code, ErrorCode::Validation, "input {:?}", bad);
        }
    }

    #[test]
    fn test_overflow_rejected() {
        let huge = u128::MAX.to_string();
        let err = to_base_units(&huge, 18).unwrap_err();
        assert_eq!(err.code, ErrorCode::Validation);
    }

    #[test]
    fn test_format_base_units() {
        assert_eq!(format_base_units(100_000_000_000_000, 18), "0.0001");
        assert_eq!(format_base_units(1_000_000, 6), "1");
        assert_eq!(format_base_units(0, 18), "0");
        assert_eq!(format_base_units(1_234_500, 6), "1.2345");
    }

    #[test]
    fn test_round_trip() {
        for (amount, decimals) in [("0.0001", 18u8), ("1", 6), ("12.34", 8), ("0.5", 1)] {
            let raw = to_base_units(amount, decimals).unwrap();
            let formatted = format_base_units(raw, decimals);
            assert_eq!(to_base_units(&formatted, decimals).unwrap(), raw);
        }
    }
}
