//! Stat value parsing
//!
//! HoYoLAB sends stat values as display strings: `"299"` for flat stats and
//! `"12.8%"` for percentage stats. GOOD stores percentages on the percent
//! scale as well, so `"12.8%"` becomes `12.8`.

use crate::error::{ConvertError, Result};

/// Parse a HoYoLAB stat display string into a number.
///
/// A missing or empty value is `0.0`.
pub fn parse_stat_value(value: Option<&str>) -> Result<f64> {
    let raw = match value.map(str::trim) {
        None | Some("") => return Ok(0.0),
        Some(v) => v,
    };

    let number = raw.strip_suffix('%').unwrap_or(raw).trim_end();
    match number.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ConvertError::MalformedNumericString(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_keeps_scale() {
        assert_eq!(parse_stat_value(Some("12.8%")).unwrap(), 12.8);
        assert_eq!(parse_stat_value(Some("5.8%")).unwrap(), 5.8);
        assert_eq!(parse_stat_value(Some("46.6%")).unwrap(), 46.6);
    }

    #[test]
    fn test_flat_values() {
        assert_eq!(parse_stat_value(Some("4780")).unwrap(), 4780.0);
        assert_eq!(parse_stat_value(Some("19")).unwrap(), 19.0);
    }

    #[test]
    fn test_missing_is_zero() {
        assert_eq!(parse_stat_value(None).unwrap(), 0.0);
        assert_eq!(parse_stat_value(Some("")).unwrap(), 0.0);
    }

    #[test]
    fn test_malformed_values() {
        for bad in ["abc", "12.8%%", "%", "NaN", "inf", "1,000"] {
            match parse_stat_value(Some(bad)) {
                Err(ConvertError::MalformedNumericString(s)) => assert_eq!(s, bad),
                other => panic!("expected error for {:?}, got {:?}", bad, other),
            }
        }
    }
}
