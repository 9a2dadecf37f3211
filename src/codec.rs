//! Conversions between native scalars and their XSD wire lexical forms
//!
//! Parsing is strict: input is trimmed of surrounding whitespace, and
//! anything empty, malformed or overflowing fails with a parse error that
//! carries the attempted type name and the offending literal. There is no
//! partial success and no locale-dependent coercion.

use crate::error::{Error, Result};

/// Converts a boolean to its XSD wire form.
pub fn bool_to_string(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Parses an XSD boolean. The lexical space is `true`, `false`, `1`, `0`.
pub fn bool_from_string(s: &str) -> Result<bool> {
    match s.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(Error::parse("boolean", s)),
    }
}

/// Converts a double to its XSD wire form.
///
/// Finite values use the shortest round-trippable decimal form; the
/// non-finite values use the XSD literals `NaN`, `INF` and `-INF`.
pub fn double_to_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "INF".to_string()
    } else if value == f64::NEG_INFINITY {
        "-INF".to_string()
    } else {
        format!("{}", value)
    }
}

/// Parses an XSD double.
pub fn double_from_string(s: &str) -> Result<f64> {
    let trimmed = s.trim();

    // The non-finite literals are case sensitive in XSD
    match trimmed {
        "NaN" => return Ok(f64::NAN),
        "INF" => return Ok(f64::INFINITY),
        "-INF" => return Ok(f64::NEG_INFINITY),
        "" => return Err(Error::parse("double", s)),
        _ => {}
    }

    match trimmed.parse::<f64>() {
        // Rejecting non-finite results filters out both alternative
        // spellings ("inf", "nan") and magnitudes beyond the double range
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::parse("double", s)),
    }
}

/// Converts a 32-bit integer to its XSD wire form.
pub fn int_to_string(value: i32) -> String {
    value.to_string()
}

/// Parses an XSD int.
pub fn int_from_string(s: &str) -> Result<i32> {
    s.trim().parse::<i32>().map_err(|_| Error::parse("int", s))
}

/// Converts a 64-bit integer to its XSD wire form.
pub fn long_to_string(value: i64) -> String {
    value.to_string()
}

/// Parses an XSD long.
pub fn long_from_string(s: &str) -> Result<i64> {
    s.trim().parse::<i64>().map_err(|_| Error::parse("long", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn expect_parse_error<T: std::fmt::Debug>(result: Result<T>, wanted_prefix: &str) {
        let err = result.expect_err("parsing must fail");
        assert!(matches!(err, Error::Parse { .. }), "wrong kind: {:?}", err);
        assert!(
            err.to_string().starts_with(wanted_prefix),
            "message {:?} does not start with {:?}",
            err.to_string(),
            wanted_prefix
        );
    }

    #[test]
    fn double_to_string_canonical_forms() {
        assert_eq!("0", double_to_string(0.0));
        assert_eq!("10.1", double_to_string(10.1));
        assert_eq!("-3.8", double_to_string(-3.8));
        assert_eq!("NaN", double_to_string(f64::NAN));
        assert_eq!("INF", double_to_string(f64::INFINITY));
        assert_eq!("-INF", double_to_string(f64::NEG_INFINITY));
    }

    #[test]
    fn double_from_string_accepts_valid_forms() {
        assert_eq!(0.0, double_from_string("0 ").unwrap());
        assert_eq!(10.1, double_from_string(" 10.1").unwrap());
        assert_eq!(-3.8, double_from_string("-3.8  ").unwrap());
        assert_eq!(9e15, double_from_string("9e15").unwrap());
        assert!(double_from_string("  NaN").unwrap().is_nan());
        assert_eq!(f64::INFINITY, double_from_string("INF").unwrap());
    }

    #[test]
    fn double_from_string_rejects_garbage() {
        expect_parse_error(double_from_string("0,4"), "Failed to parse double");
        expect_parse_error(double_from_string(""), "Failed to parse double");
        expect_parse_error(double_from_string("  "), "Failed to parse double");
        expect_parse_error(double_from_string("a"), "Failed to parse double");
        expect_parse_error(double_from_string("1e999"), "Failed to parse double");
        // Alternative non-finite spellings are not part of the lexical space
        expect_parse_error(double_from_string("inf"), "Failed to parse double");
        expect_parse_error(double_from_string("nan"), "Failed to parse double");
    }

    #[test]
    fn long_round_trips_boundaries() {
        assert_eq!("0", long_to_string(0));
        assert_eq!("-9223372036854775808", long_to_string(i64::MIN));
        assert_eq!("9223372036854775807", long_to_string(i64::MAX));

        assert_eq!(0, long_from_string("0  ").unwrap());
        assert_eq!(39, long_from_string("  39").unwrap());
        assert_eq!(i64::MIN, long_from_string(" -9223372036854775808").unwrap());
        assert_eq!(i64::MAX, long_from_string("9223372036854775807 ").unwrap());
    }

    #[test]
    fn long_from_string_rejects_garbage() {
        expect_parse_error(long_from_string(" "), "Failed to parse long");
        expect_parse_error(long_from_string("rtt"), "Failed to parse long");
        expect_parse_error(long_from_string("5.3"), "Failed to parse long");
        expect_parse_error(long_from_string("9223372036854775808"), "Failed to parse long");
    }

    #[test]
    fn int_round_trips_boundaries() {
        assert_eq!("-2147483648", int_to_string(i32::MIN));
        assert_eq!("2147483647", int_to_string(i32::MAX));

        assert_eq!(-8, int_from_string("-8 ").unwrap());
        assert_eq!(i32::MIN, int_from_string(" -2147483648").unwrap());
        assert_eq!(i32::MAX, int_from_string("2147483647 ").unwrap());
    }

    #[test]
    fn int_from_string_rejects_garbage() {
        expect_parse_error(int_from_string(" "), "Failed to parse int");
        expect_parse_error(int_from_string("rtt"), "Failed to parse int");
        expect_parse_error(int_from_string("5.3"), "Failed to parse int");
        expect_parse_error(int_from_string("2147483648"), "Failed to parse int");
    }

    #[test]
    fn bool_round_trips() {
        assert_eq!("true", bool_to_string(true));
        assert_eq!("false", bool_to_string(false));

        assert!(bool_from_string("  1 ").unwrap());
        assert!(bool_from_string("true  ").unwrap());
        assert!(!bool_from_string("  0").unwrap());
        assert!(!bool_from_string(" false").unwrap());

        expect_parse_error(bool_from_string("fafse"), "Failed to parse boolean");
        expect_parse_error(bool_from_string("TRUE"), "Failed to parse boolean");
    }

    proptest! {
        #[test]
        fn prop_double_round_trip(v in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let encoded = double_to_string(v);
            prop_assert_eq!(v, double_from_string(&encoded).unwrap());
        }

        #[test]
        fn prop_int_round_trip(v in any::<i32>()) {
            prop_assert_eq!(v, int_from_string(&int_to_string(v)).unwrap());
        }

        #[test]
        fn prop_long_round_trip(v in any::<i64>()) {
            prop_assert_eq!(v, long_from_string(&long_to_string(v)).unwrap());
        }
    }
}
