//! Precision-12 conversion between display amounts and canonical values
//!
//! The chain accounts balances in the base unit with 12 decimal digits of
//! precision. The canonical value stored in form state is therefore a
//! fixed-point decimal string with exactly 12 fractional digits; whatever
//! the user types is interpreted in the selected [`MetricUnit`] and rescaled
//! here. Digits beyond the 12th base-unit decimal are truncated, not
//! rounded.

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::mask;
use crate::core::units::MetricUnit;
use crate::shared::error::{AppError, AppResult};
use crate::shared::errors::{ERR_AMOUNT_OVERFLOW, ERR_INVALID_AMOUNT, ERR_NEGATIVE_AMOUNT};

/// Fractional digits of the canonical base-unit representation.
pub const PRECISION_DIGITS: u32 = 12;

/// `10^exponent` as an exact decimal, for |exponent| <= 19.
fn scale_factor(exponent: i32) -> Decimal {
    if exponent >= 0 {
        Decimal::from(10u64.pow(exponent as u32))
    } else {
        Decimal::new(1, (-exponent) as u32)
    }
}

fn parse_amount(digits: &str) -> AppResult<Decimal> {
    let amount = Decimal::from_str(digits)
        .map_err(|_| AppError::Validation(format!("{}: '{}'", ERR_INVALID_AMOUNT, digits)))?;
    if amount.is_sign_negative() {
        return Err(AppError::Validation(ERR_NEGATIVE_AMOUNT.to_string()));
    }
    Ok(amount)
}

/// Reinterpret a masked display string as `unit` and rescale it to the
/// canonical base-unit representation.
///
/// Empty input yields `Ok(None)`: an untouched input has no value, which is
/// not the same thing as zero. Thousands separators are stripped before
/// parsing and never survive into the canonical string.
pub fn convert_display_to_canonical(raw: &str, unit: MetricUnit) -> AppResult<Option<String>> {
    let digits = mask::strip_separators(raw.trim());
    if digits.is_empty() {
        return Ok(None);
    }

    let amount = parse_amount(&digits)?;
    let base = amount
        .checked_mul(scale_factor(unit.exponent()))
        .ok_or_else(|| AppError::Calculation(ERR_AMOUNT_OVERFLOW.to_string()))?;

    Ok(Some(format_with_precision_12(base)?))
}

/// Render a canonical value back into `unit` for display: rescaled, trailing
/// fractional zeroes trimmed, thousands regrouped.
///
/// Unlike the entry mask this keeps the fraction in full. A canonical value
/// shown in a unit above the base needs up to 24 fractional digits (Tera:
/// 12 from the exponent plus the 12 canonical digits); capping them would
/// render nonzero balances as zero.
pub fn convert_canonical_to_display(canonical: &str, unit: MetricUnit) -> AppResult<Option<String>> {
    let trimmed = canonical.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let base = parse_amount(trimmed)?;
    let scaled = base
        .checked_mul(scale_factor(-unit.exponent()))
        .ok_or_else(|| AppError::Calculation(ERR_AMOUNT_OVERFLOW.to_string()))?
        .normalize();

    Ok(Some(format_display(scaled)))
}

// Group the integer part with the thousands separator, leaving every
// fractional digit in place.
fn format_display(value: Decimal) -> String {
    let text = value.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => {
            format!("{}.{}", mask::group_thousands(int_part), frac_part)
        }
        None => mask::group_thousands(&text),
    }
}

/// Format with exactly [`PRECISION_DIGITS`] digits after the point,
/// truncating anything beyond them.
fn format_with_precision_12(value: Decimal) -> AppResult<String> {
    let value = value.round_dp_with_strategy(PRECISION_DIGITS, RoundingStrategy::ToZero);
    let int_part = value.trunc();
    let frac_digits = ((value - int_part) * Decimal::from(10u64.pow(PRECISION_DIGITS)))
        .trunc()
        .to_u64()
        .ok_or_else(|| AppError::Calculation(ERR_AMOUNT_OVERFLOW.to_string()))?;

    Ok(format!("{}.{:012}", int_part, frac_digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milli_input_rescales_down() {
        assert_eq!(
            convert_display_to_canonical("1 000.5", MetricUnit::Milli).unwrap(),
            Some("1.000500000000".to_string())
        );
    }

    #[test]
    fn test_base_unit_input_keeps_magnitude() {
        assert_eq!(
            convert_display_to_canonical("1 000.5", MetricUnit::None).unwrap(),
            Some("1000.500000000000".to_string())
        );
    }

    #[test]
    fn test_kilo_input_rescales_up() {
        assert_eq!(
            convert_display_to_canonical("2.5", MetricUnit::Kilo).unwrap(),
            Some("2500.000000000000".to_string())
        );
    }

    #[test]
    fn test_always_twelve_fractional_digits() {
        for unit in MetricUnit::ALL {
            let canonical = convert_display_to_canonical("7.25", unit).unwrap().unwrap();
            let (_, frac) = canonical.split_once('.').expect("canonical has a point");
            assert_eq!(frac.len(), 12, "unit {:?} produced {}", unit, canonical);
        }
    }

    #[test]
    fn test_empty_input_is_absent_not_zero() {
        assert_eq!(convert_display_to_canonical("", MetricUnit::Kilo).unwrap(), None);
        assert_eq!(convert_display_to_canonical("   ", MetricUnit::None).unwrap(), None);
    }

    #[test]
    fn test_separators_never_reach_the_canonical_value() {
        let canonical = convert_display_to_canonical("1 234 567", MetricUnit::None)
            .unwrap()
            .unwrap();
        assert_eq!(canonical, "1234567.000000000000");
        assert!(!canonical.contains(' '));
    }

    #[test]
    fn test_digits_beyond_precision_are_truncated() {
        // 0.5 pico-units is 5e-13 in base units, below the 12-digit grid.
        assert_eq!(
            convert_display_to_canonical("0.5", MetricUnit::Pico).unwrap(),
            Some("0.000000000000".to_string())
        );
        // Truncation, not rounding: 1.9 pico-units -> 0.0000000000019.
        assert_eq!(
            convert_display_to_canonical("1.9", MetricUnit::Pico).unwrap(),
            Some("0.000000000001".to_string())
        );
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        assert!(convert_display_to_canonical("-5", MetricUnit::None).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(convert_display_to_canonical("1.2.3", MetricUnit::None).is_err());
    }

    #[test]
    fn test_canonical_to_display_trims_and_groups() {
        assert_eq!(
            convert_canonical_to_display("1.000500000000", MetricUnit::Milli).unwrap(),
            Some("1 000.5".to_string())
        );
        assert_eq!(
            convert_canonical_to_display("2500.000000000000", MetricUnit::Kilo).unwrap(),
            Some("2.5".to_string())
        );
        assert_eq!(convert_canonical_to_display("", MetricUnit::None).unwrap(), None);
    }

    #[test]
    fn test_round_trip_is_identity_at_fixed_precision() {
        for unit in MetricUnit::ALL {
            for canonical in ["1234.567000000000", "0.000000000001"] {
                let display = convert_canonical_to_display(canonical, unit).unwrap().unwrap();
                let back = convert_display_to_canonical(&display, unit).unwrap().unwrap();
                assert_eq!(back, canonical, "unit {:?} via '{}'", unit, display);
            }
        }
    }

    #[test]
    fn test_display_keeps_the_full_fraction_above_the_base_unit() {
        // Tera needs 15 fractional digits here; none of them may be cut.
        assert_eq!(
            convert_canonical_to_display("1234.567000000000", MetricUnit::Tera).unwrap(),
            Some("0.000000001234567".to_string())
        );
    }

    #[test]
    fn test_tiny_balances_do_not_display_as_zero() {
        assert_eq!(
            convert_canonical_to_display("0.000000000001", MetricUnit::Kilo).unwrap(),
            Some("0.000000000000001".to_string())
        );
        assert_eq!(
            convert_canonical_to_display("0.000000000001", MetricUnit::Tera).unwrap(),
            Some("0.000000000000000000000001".to_string())
        );
    }

    #[test]
    fn test_unit_switch_changes_value_by_scale_ratio() {
        let milli = convert_display_to_canonical("42", MetricUnit::Milli).unwrap().unwrap();
        let kilo = convert_display_to_canonical("42", MetricUnit::Kilo).unwrap().unwrap();
        assert_eq!(milli, "0.042000000000");
        assert_eq!(kilo, "42000.000000000000");
    }
}
