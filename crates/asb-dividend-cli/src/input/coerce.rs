use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

/// Coerce free-text numeric entry to a Decimal.
///
/// Blank, unparseable or zero text yields `fallback`, the same way a form
/// field bound to `parse || fallback` behaves.
pub fn number_or(text: &str, fallback: Decimal) -> Decimal {
    let trimmed = text.trim();
    let parsed = Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed));
    match parsed {
        Ok(v) if !v.is_zero() => v,
        Ok(_) => fallback,
        Err(_) => {
            warn!(input = trimmed, fallback = %fallback, "not a number, using fallback");
            fallback
        }
    }
}

/// Coerce free-text entry to a whole number of years.
///
/// Fractional values are truncated, so "2.5" runs two full years.
pub fn years_or(text: &str, fallback: i32) -> i32 {
    number_or(text, Decimal::from(fallback))
        .trunc()
        .to_i32()
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_number_parses_plain_and_scientific() {
        assert_eq!(number_or("50000", Decimal::ZERO), dec!(50000));
        assert_eq!(number_or(" 0.5 ", Decimal::ZERO), dec!(0.5));
        assert_eq!(number_or("-3", Decimal::ZERO), dec!(-3));
        assert_eq!(number_or("1e3", Decimal::ZERO), dec!(1000));
    }

    #[test]
    fn test_number_falls_back_on_garbage_or_zero() {
        assert_eq!(number_or("", dec!(7)), dec!(7));
        assert_eq!(number_or("abc", Decimal::ZERO), Decimal::ZERO);
        assert_eq!(number_or("0", Decimal::ONE), Decimal::ONE);
    }

    #[test]
    fn test_years_truncates_and_falls_back() {
        assert_eq!(years_or("10", 1), 10);
        assert_eq!(years_or("2.5", 1), 2);
        assert_eq!(years_or("", 1), 1);
        assert_eq!(years_or("0", 1), 1);
        assert_eq!(years_or("-4", 1), -4);
        assert_eq!(years_or("99999999999999", 1), 1);
    }
}
