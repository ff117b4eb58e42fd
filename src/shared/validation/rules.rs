use chrono::NaiveDate;
use email_address::EmailAddress;
use rust_decimal::Decimal;

use super::errors::RuleViolation;

const fn calendar_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Inclusive bounds for every date captured by the admin forms.
pub const EARLIEST_DATE: NaiveDate = calendar_date(1981, 1, 1);
pub const LATEST_DATE: NaiveDate = calendar_date(2026, 1, 31);

/// Upload size ceiling enforced on every attachment before it reaches storage.
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Absent dates pass; presence is enforced separately by `validate_required`-style checks.
pub fn validate_date_in_range(date: Option<NaiveDate>) -> Result<(), RuleViolation> {
    match date {
        Some(d) if d < EARLIEST_DATE || d > LATEST_DATE => Err(RuleViolation::OutOfRange {
            earliest: EARLIEST_DATE,
            latest: LATEST_DATE,
        }),
        _ => Ok(()),
    }
}

pub fn validate_date_order(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<(), RuleViolation> {
    match (start, end) {
        (Some(s), Some(e)) if s > e => Err(RuleViolation::InvalidDateOrder),
        _ => Ok(()),
    }
}

pub fn validate_non_negative(value: Decimal) -> Result<(), RuleViolation> {
    if value.is_sign_negative() && !value.is_zero() {
        Err(RuleViolation::NegativeValue)
    } else {
        Ok(())
    }
}

/// Matches a `NUMERIC(max_digits, decimal_places)` column. Trailing zeros don't count.
pub fn validate_decimal_digits(
    value: Decimal,
    max_digits: u32,
    decimal_places: u32,
) -> Result<(), RuleViolation> {
    let violation = RuleViolation::TooManyDigits {
        max_digits,
        decimal_places,
    };

    if value.normalize().scale() > decimal_places {
        return Err(violation);
    }

    let whole_digits = max_digits.saturating_sub(decimal_places);
    match 10u64.checked_pow(whole_digits) {
        Some(limit) if value.abs().trunc() >= Decimal::from(limit) => Err(violation),
        _ => Ok(()),
    }
}

pub fn validate_required(value: &str) -> Result<(), RuleViolation> {
    if value.trim().is_empty() {
        Err(RuleViolation::Required)
    } else {
        Ok(())
    }
}

/// Length is counted in characters, not bytes.
pub fn validate_max_len(value: &str, max: usize) -> Result<(), RuleViolation> {
    if value.chars().count() > max {
        Err(RuleViolation::TooLong { max })
    } else {
        Ok(())
    }
}

pub fn validate_min(value: i64, min: i64) -> Result<(), RuleViolation> {
    if value < min {
        Err(RuleViolation::BelowMinimum { min })
    } else {
        Ok(())
    }
}

pub fn validate_email(value: Option<&str>) -> Result<(), RuleViolation> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() && !EmailAddress::is_valid(v) => Err(RuleViolation::InvalidEmail),
        _ => Ok(()),
    }
}

pub fn validate_file_size(size_bytes: usize, max_bytes: u64) -> Result<(), RuleViolation> {
    if size_bytes as u64 > max_bytes {
        Err(RuleViolation::FileTooLarge { max_bytes })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    // -----------------------
    // date range
    // -----------------------

    #[test]
    fn date_range_accepts_both_boundaries() {
        assert!(validate_date_in_range(Some(d(1981, 1, 1))).is_ok());
        assert!(validate_date_in_range(Some(d(2026, 1, 31))).is_ok());
        assert!(validate_date_in_range(Some(d(2000, 5, 1))).is_ok());
    }

    #[test]
    fn date_range_rejects_just_outside() {
        assert!(matches!(
            validate_date_in_range(Some(d(1980, 12, 31))),
            Err(RuleViolation::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_date_in_range(Some(d(2026, 2, 1))),
            Err(RuleViolation::OutOfRange { .. })
        ));
    }

    #[test]
    fn date_range_ignores_missing_date() {
        assert!(validate_date_in_range(None).is_ok());
    }

    #[test]
    fn date_range_holds_over_a_sweep_of_days() {
        let mut day = d(1980, 12, 1);
        while day <= d(2026, 3, 1) {
            let expected = day >= EARLIEST_DATE && day <= LATEST_DATE;
            assert_eq!(validate_date_in_range(Some(day)).is_ok(), expected, "{day}");
            day = day + chrono::Duration::days(7);
        }
    }

    // -----------------------
    // date order
    // -----------------------

    #[test]
    fn date_order_fails_only_when_start_after_end() {
        assert!(validate_date_order(Some(d(2010, 1, 1)), Some(d(2010, 1, 1))).is_ok());
        assert!(validate_date_order(Some(d(2010, 1, 1)), Some(d(2011, 1, 1))).is_ok());
        assert_eq!(
            validate_date_order(Some(d(2011, 1, 2)), Some(d(2011, 1, 1))),
            Err(RuleViolation::InvalidDateOrder)
        );
    }

    #[test]
    fn date_order_skips_when_either_side_missing() {
        assert!(validate_date_order(None, Some(d(2011, 1, 1))).is_ok());
        assert!(validate_date_order(Some(d(2011, 1, 1)), None).is_ok());
    }

    // -----------------------
    // numbers and text
    // -----------------------

    #[test]
    fn decimal_digits_follow_column_precision() {
        let dec = |v: &str| Decimal::from_str(v).unwrap();
        let too_many = Err(RuleViolation::TooManyDigits {
            max_digits: 10,
            decimal_places: 2,
        });

        assert!(validate_decimal_digits(dec("12345678.99"), 10, 2).is_ok());
        assert!(validate_decimal_digits(dec("-12345678.99"), 10, 2).is_ok());
        assert!(validate_decimal_digits(dec("1.500"), 10, 2).is_ok());
        assert!(validate_decimal_digits(Decimal::ZERO, 10, 2).is_ok());
        assert_eq!(validate_decimal_digits(dec("1.005"), 10, 2), too_many);
        assert_eq!(validate_decimal_digits(dec("100000000"), 10, 2), too_many);
        assert_eq!(validate_decimal_digits(dec("123456789012.345"), 10, 2), too_many);
    }

    #[test]
    fn non_negative_value() {
        assert!(validate_non_negative(Decimal::ZERO).is_ok());
        assert!(validate_non_negative(Decimal::from_str("0.01").unwrap()).is_ok());
        assert_eq!(
            validate_non_negative(Decimal::from(-50)),
            Err(RuleViolation::NegativeValue)
        );
    }

    #[test]
    fn required_rejects_blank() {
        assert_eq!(validate_required("   "), Err(RuleViolation::Required));
        assert!(validate_required("x").is_ok());
    }

    #[test]
    fn max_len_counts_characters() {
        assert!(validate_max_len("ñandú", 5).is_ok());
        assert_eq!(
            validate_max_len("abcdef", 5),
            Err(RuleViolation::TooLong { max: 5 })
        );
    }

    #[test]
    fn min_value() {
        assert!(validate_min(0, 0).is_ok());
        assert_eq!(
            validate_min(-1, 0),
            Err(RuleViolation::BelowMinimum { min: 0 })
        );
    }

    #[test]
    fn email_optional_but_must_be_valid() {
        assert!(validate_email(None).is_ok());
        assert!(validate_email(Some("")).is_ok());
        assert!(validate_email(Some("ana@example.com")).is_ok());
        assert_eq!(
            validate_email(Some("not-an-email")),
            Err(RuleViolation::InvalidEmail)
        );
    }

    #[test]
    fn file_size_ceiling() {
        assert!(validate_file_size(MAX_UPLOAD_BYTES as usize, MAX_UPLOAD_BYTES).is_ok());
        assert!(matches!(
            validate_file_size(MAX_UPLOAD_BYTES as usize + 1, MAX_UPLOAD_BYTES),
            Err(RuleViolation::FileTooLarge { .. })
        ));
    }
}
