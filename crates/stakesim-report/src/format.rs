//! Locale-aware number formatting.
//!
//! Numbers are rounded half away from zero to at most `max_fraction_digits`
//! (so `0.0078125` shows six digits as `0,007813`), trailing zeros are
//! trimmed down to `min_fraction_digits`, and integer digits are grouped in
//! threes. Non-finite values print as `NaN`, `∞` and `-∞` so that a poisoned
//! input is visible in the output instead of hidden.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separators and fraction-digit bounds for one locale.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: char,
    pub min_fraction_digits: usize,
    pub max_fraction_digits: usize,
}

impl NumberFormat {
    /// Brazilian Portuguese: `1.234,56`. Two to six fraction digits.
    pub fn pt_br() -> Self {
        Self {
            decimal_separator: ',',
            group_separator: '.',
            min_fraction_digits: 2,
            max_fraction_digits: 6,
        }
    }

    /// US English: `1,234.56`. Two to six fraction digits.
    pub fn en_us() -> Self {
        Self {
            decimal_separator: '.',
            group_separator: ',',
            min_fraction_digits: 2,
            max_fraction_digits: 6,
        }
    }

    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            return if value < 0.0 { "-∞" } else { "∞" }.to_string();
        }

        let max = self.max_fraction_digits.max(self.min_fraction_digits);
        let fixed = round_half_away(value.abs(), max);
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let keep = frac_part
            .trim_end_matches('0')
            .len()
            .max(self.min_fraction_digits);
        let frac_part = &frac_part[..keep.min(frac_part.len())];

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        if value < 0.0 {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.group_separator));
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::pt_br()
    }
}

/// Enough fraction digits to print any finite `f64` exactly.
const EXACT_DIGITS: usize = 1100;

/// `abs` with `digits` fraction digits, ties rounded away from zero.
///
/// `{:.N}` rounds ties to even on the exact binary value; this rounds the
/// exact decimal expansion instead.
fn round_half_away(abs: f64, digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS.max(digits + 1), abs);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let round_up = frac_part.as_bytes()[digits] >= b'5';

    let mut buf: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    if round_up {
        let mut carry = true;
        for d in buf.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            buf.insert(0, b'1');
        }
    }

    let split = buf.len() - digits;
    let mut out = String::with_capacity(buf.len() + 1);
    out.extend(buf[..split].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(buf[split..].iter().map(|&b| b as char));
    }
    out
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Fixed-point rendering with exactly `digits` fraction digits and no
/// grouping, like the value-per-point card shows it. Ties round away from
/// zero and negative zero prints unsigned.
pub fn format_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }
    let fixed = round_half_away(value.abs(), digits);
    if value < 0.0 {
        format!("-{fixed}")
    } else {
        fixed
    }
}

/// Supported output locales.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

impl Locale {
    pub fn number_format(self) -> NumberFormat {
        match self {
            Self::PtBr => NumberFormat::pt_br(),
            Self::EnUs => NumberFormat::en_us(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::PtBr => "pt-br",
            Self::EnUs => "en-us",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown locale: {0} (expected pt-br or en-us)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "pt-br" => Ok(Self::PtBr),
            "en-us" => Ok(Self::EnUs),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn pt_br_grouping_and_min_digits() {
        let f = NumberFormat::pt_br();
        assert_eq!(f.format(1234.5), "1.234,50");
        assert_eq!(f.format(1_234_567.0), "1.234.567,00");
        assert_eq!(f.format(0.0), "0,00");
    }

    #[test]
    fn pt_br_max_digits_rounds() {
        let f = NumberFormat::pt_br();
        assert_eq!(f.format(0.1234567), "0,123457");
        assert_eq!(f.format(434.24657534246575), "434,246575");
    }

    #[test]
    fn en_us_separators() {
        assert_eq!(NumberFormat::en_us().format(388_800_000.0), "388,800,000.00");
    }

    #[test]
    fn negative_values() {
        assert_eq!(NumberFormat::pt_br().format(-1234.5), "-1.234,50");
        assert_eq!(NumberFormat::en_us().format(-0.5), "-0.50");
    }

    #[test]
    fn non_finite_values() {
        let f = NumberFormat::pt_br();
        assert_eq!(f.format(f64::NAN), "NaN");
        assert_eq!(f.format(f64::INFINITY), "∞");
        assert_eq!(f.format(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn zero_fraction_digits() {
        let f = NumberFormat {
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            ..NumberFormat::en_us()
        };
        assert_eq!(f.format(1234.4), "1,234");
    }

    #[test]
    fn fixed_digits() {
        assert_eq!(format_fixed(0.000_001_234, 10), "0.0000012340");
        assert_eq!(format_fixed(f64::NAN, 10), "NaN");
        assert_eq!(format_fixed(f64::INFINITY, 10), "Infinity");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    // ------------------------------------------------------------------
    // Rounding ties
    // ------------------------------------------------------------------

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(NumberFormat::pt_br().format(0.0078125), "0,007813");
        assert_eq!(NumberFormat::en_us().format(-0.0078125), "-0.007813");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-2.5, 0), "-3");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(0.5, 0), "1");
    }

    #[test]
    fn rounding_carries_into_integer_part() {
        assert_eq!(format_fixed(9.5, 0), "10");
        let whole = NumberFormat {
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            ..NumberFormat::en_us()
        };
        assert_eq!(whole.format(999_999.5), "1,000,000");
    }

    #[test]
    fn near_ties_follow_the_exact_value() {
        // 1.005 is stored slightly below the tie.
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(0.1, 20), "0.10000000000000000555");
    }

    #[test]
    fn fixed_signs() {
        assert_eq!(format_fixed(-0.0, 2), "0.00");
        assert_eq!(format_fixed(-0.001, 2), "-0.00");
        assert_eq!(format_fixed(-1.25, 1), "-1.3");
        assert_eq!(format_fixed(5e-324, 2), "0.00");
    }

    #[test]
    fn locale_parse() {
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("en_us".parse::<Locale>(), Ok(Locale::EnUs));
        assert!("fr-fr".parse::<Locale>().is_err());
        assert_eq!(Locale::EnUs.to_string().parse::<Locale>(), Ok(Locale::EnUs));
    }

    proptest! {
        #[test]
        fn grouped_output_parses_back(x in -1e6f64..1e6f64) {
            let s = NumberFormat::en_us().format(x).replace(',', "");
            let back: f64 = s.parse().unwrap();
            prop_assert!((back - x).abs() <= 1e-6);
        }

        #[test]
        fn half_integers_round_up_in_magnitude(n in 0u32..1_000_000) {
            let x = f64::from(n) + 0.5;
            prop_assert_eq!(format_fixed(x, 0), (n + 1).to_string());
            prop_assert_eq!(format_fixed(-x, 0), format!("-{}", n + 1));
        }
    }
}
