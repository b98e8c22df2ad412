//! Lenient text-to-number parsing for field updates.
//!
//! Field values arrive as free text typed by a user. Parsing follows the
//! web host conventions the simulator was first embedded in:
//! - [`parse_float`] reads the longest decimal prefix (`"12.5abc"` is 12.5).
//! - [`parse_int`] reads the longest integer prefix (`"3.9"` is 3) and
//!   honours a `0x` prefix.
//!
//! Neither fails. Text with no numeric prefix yields NaN, which the
//! projection then carries through to every derived figure.

use serde::{Deserialize, Serialize};

/// Which parser a field uses.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Rates and amounts: [`parse_float`].
    Float,
    /// Counts and durations: [`parse_int`].
    Integer,
}

impl FieldKind {
    pub fn parse(self, text: &str) -> f64 {
        match self {
            Self::Float => parse_float(text),
            Self::Integer => parse_int(text),
        }
    }
}

fn trim_leading(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn digit_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Parse the longest decimal-literal prefix of `text`.
///
/// Accepts an optional sign, `Infinity`, digits with an optional fraction
/// (`1.`, `.5`) and an exponent that is only consumed when it has digits.
/// Returns NaN when no prefix matches.
pub fn parse_float(text: &str) -> f64 {
    let s = trim_leading(text);
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = digit_run(bytes, end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Parse the longest integer prefix of `text`.
///
/// Accepts an optional sign and a `0x`/`0X` prefix for base 16. Digits past
/// the first invalid character are ignored. Returns NaN when no digit is
/// found. The value is returned as `f64` so it can flow into the projection
/// unchanged.
pub fn parse_int(text: &str) -> f64 {
    let s = trim_leading(text);
    let mut rest = s;
    let mut negative = false;

    if let Some(stripped) = rest.strip_prefix('-') {
        negative = true;
        rest = stripped;
    } else if let Some(stripped) = rest.strip_prefix('+') {
        rest = stripped;
    }

    let mut radix = 10;
    if let Some(stripped) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        radix = 16;
        rest = stripped;
    }

    let mut value = 0.0f64;
    let mut digits = 0;
    for c in rest.chars() {
        let Some(d) = c.to_digit(radix) else { break };
        value = value * radix as f64 + d as f64;
        digits += 1;
    }

    if digits == 0 {
        return f64::NAN;
    }
    if negative { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ------------------------------------------------------------------
    // parse_float
    // ------------------------------------------------------------------

    #[test]
    fn float_plain() {
        assert_eq!(parse_float("317"), 317.0);
        assert_eq!(parse_float("12.5"), 12.5);
        assert_eq!(parse_float("-0.25"), -0.25);
        assert_eq!(parse_float("+7"), 7.0);
    }

    #[test]
    fn float_leading_whitespace() {
        assert_eq!(parse_float("  \t42"), 42.0);
    }

    #[test]
    fn float_trailing_garbage_ignored() {
        assert_eq!(parse_float("12abc"), 12.0);
        assert_eq!(parse_float("3.5%"), 3.5);
        assert_eq!(parse_float("1.2.3"), 1.2);
    }

    #[test]
    fn float_partial_forms() {
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-.").is_nan());
    }

    #[test]
    fn float_exponent() {
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2.5E-1"), 0.25);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("1e+"), 1.0);
    }

    #[test]
    fn float_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityx"), f64::NEG_INFINITY);
        assert!(parse_float("inf").is_nan());
    }

    #[test]
    fn float_garbage_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("   ").is_nan());
        assert!(parse_float("$100").is_nan());
    }

    #[test]
    fn float_locale_comma_stops_parse() {
        assert_eq!(parse_float("1,5"), 1.0);
    }

    // ------------------------------------------------------------------
    // parse_int
    // ------------------------------------------------------------------

    #[test]
    fn int_plain() {
        assert_eq!(parse_int("100"), 100.0);
        assert_eq!(parse_int("-3"), -3.0);
        assert_eq!(parse_int("+8"), 8.0);
    }

    #[test]
    fn int_truncates_fraction() {
        assert_eq!(parse_int("3.9"), 3.0);
        assert_eq!(parse_int("-3.9"), -3.0);
    }

    #[test]
    fn int_hex_prefix() {
        assert_eq!(parse_int("0x1A"), 26.0);
        assert_eq!(parse_int("0Xff"), 255.0);
        assert!(parse_int("0x").is_nan());
    }

    #[test]
    fn int_trailing_garbage_ignored() {
        assert_eq!(parse_int(" 45 days"), 45.0);
        assert_eq!(parse_int("1e3"), 1.0);
    }

    #[test]
    fn int_garbage_is_nan() {
        assert!(parse_int("").is_nan());
        assert!(parse_int("days").is_nan());
        assert!(parse_int("-").is_nan());
    }

    #[test]
    fn field_kind_dispatches() {
        assert_eq!(FieldKind::Float.parse("2.5"), 2.5);
        assert_eq!(FieldKind::Integer.parse("2.5"), 2.0);
    }

    proptest! {
        #[test]
        fn int_roundtrips_display(n in -1_000_000_000i64..1_000_000_000i64) {
            prop_assert_eq!(parse_int(&n.to_string()), n as f64);
        }

        #[test]
        fn float_roundtrips_display(x in -1e12f64..1e12f64) {
            prop_assert_eq!(parse_float(&x.to_string()), x);
        }

        #[test]
        fn float_never_panics(s in ".*") {
            let _ = parse_float(&s);
        }

        #[test]
        fn int_never_panics(s in ".*") {
            let _ = parse_int(&s);
        }
    }
}
