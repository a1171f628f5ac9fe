//! Locale- and flag-aware numeric parsing.
//!
//! A single normalization pass walks the raw string under the column's
//! [`NumberStyle`] and [`Locale`], separating sign, integral digits,
//! fraction digits, and exponent. Each numeric target kind then interprets
//! the normalized parts: integers apply the exponent as a decimal-point
//! shift and require an integral result, floats and decimals reassemble the
//! parts into a plain ASCII numeric string for their native parsers.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::column::NumberStyle;
use crate::locale::Locale;

/// Digits of a numeric string after locale normalization
#[derive(Debug, Clone, PartialEq, Eq)]
struct NumericParts {
    negative: bool,
    integral: String,
    fraction: String,
    exponent: Option<i32>,
}

// Integer results never exceed 39 digits (i128); a decimal point shifted
// past that is an overflow unless every digit is zero.
const MAX_INTEGRAL_DIGITS: i64 = 39;

/// Parse a 32-bit integer under the given style and locale
pub(super) fn parse_i32(raw: &str, style: NumberStyle, locale: &Locale) -> Option<i32> {
    parse_integral(raw, style, locale)?.try_into().ok()
}

/// Parse a 64-bit integer under the given style and locale
pub(super) fn parse_i64(raw: &str, style: NumberStyle, locale: &Locale) -> Option<i64> {
    parse_integral(raw, style, locale)?.try_into().ok()
}

/// Parse a single-precision float under the given style and locale
pub(super) fn parse_f32(raw: &str, style: NumberStyle, locale: &Locale) -> Option<f32> {
    parse_float(raw, style, locale)
}

/// Parse a double-precision float under the given style and locale
pub(super) fn parse_f64(raw: &str, style: NumberStyle, locale: &Locale) -> Option<f64> {
    parse_float(raw, style, locale)
}

/// Parse a decimal under the given style and locale
///
/// Digits pass through normalization verbatim, so no precision is lost
/// within `Decimal`'s representable range.
pub(super) fn parse_decimal(raw: &str, style: NumberStyle, locale: &Locale) -> Option<Decimal> {
    let parts = normalize(raw, style, locale)?;
    let text = reassemble(&parts);
    if parts.exponent.is_some() {
        Decimal::from_scientific(&text).ok()
    } else {
        Decimal::from_str(&text).ok()
    }
}

fn parse_float<T: FromStr>(raw: &str, style: NumberStyle, locale: &Locale) -> Option<T> {
    let trimmed = trim_per_style(raw, style);
    if let Some(special) = special_float_token(trimmed, style) {
        return special.parse().ok();
    }
    let parts = normalize(raw, style, locale)?;
    reassemble(&parts).parse().ok()
}

/// Interpret normalized parts as an integer, applying the exponent as a
/// decimal-point shift; a nonzero fractional remainder fails
fn parse_integral(raw: &str, style: NumberStyle, locale: &Locale) -> Option<i128> {
    let parts = normalize(raw, style, locale)?;

    let mut digits = String::with_capacity(parts.integral.len() + parts.fraction.len());
    digits.push_str(&parts.integral);
    digits.push_str(&parts.fraction);

    // Position of the decimal point within `digits` after the shift
    let point = parts.integral.len() as i64 + i64::from(parts.exponent.unwrap_or(0));
    let len = digits.len() as i64;

    if point <= 0 {
        return all_zero(&digits).then_some(0);
    }
    if point > MAX_INTEGRAL_DIGITS {
        return all_zero(&digits).then_some(0);
    }

    let (int_digits, frac_digits) = if point >= len {
        (digits.as_str(), "")
    } else {
        digits.split_at(point as usize)
    };
    if !all_zero(frac_digits) {
        return None;
    }

    let mut value: i128 = 0;
    for b in int_digits.bytes() {
        value = value
            .checked_mul(10)?
            .checked_add(i128::from(b - b'0'))?;
    }
    // Trailing zeros implied by a positive exponent shift
    for _ in len..point {
        value = value.checked_mul(10)?;
    }
    Some(if parts.negative { -value } else { value })
}

/// Single normalization pass over a raw numeric string
fn normalize(raw: &str, style: NumberStyle, locale: &Locale) -> Option<NumericParts> {
    let s = trim_per_style(raw, style);
    if s.is_empty() {
        return None;
    }

    let mut chars = s.chars().peekable();

    let mut negative = false;
    if let Some(&c) = chars.peek() {
        if c == '+' || c == '-' {
            if !style.allow_sign {
                return None;
            }
            negative = c == '-';
            chars.next();
        }
    }

    let mut integral = String::new();
    let mut fraction: Option<String> = None;
    let mut exponent: Option<String> = None;

    while let Some(c) = chars.next() {
        if let Some(exp) = exponent.as_mut() {
            if !c.is_ascii_digit() {
                return None;
            }
            exp.push(c);
            continue;
        }

        if c.is_ascii_digit() {
            match fraction.as_mut() {
                Some(f) => f.push(c),
                None => integral.push(c),
            }
        } else if c == locale.decimal_separator && fraction.is_none() {
            if !style.allow_decimal_point {
                return None;
            }
            fraction = Some(String::new());
        } else if c == locale.group_separator && fraction.is_none() {
            // Grouping only between integral digits; group sizes are not
            // validated
            if !style.allow_thousands || integral.is_empty() {
                return None;
            }
            if !matches!(chars.peek(), Some(d) if d.is_ascii_digit()) {
                return None;
            }
        } else if c == 'e' || c == 'E' {
            if !style.allow_exponent {
                return None;
            }
            if integral.is_empty() && fraction.as_deref().is_none_or(str::is_empty) {
                return None;
            }
            let mut exp = String::new();
            if let Some(&sign) = chars.peek() {
                if sign == '+' || sign == '-' {
                    if sign == '-' {
                        exp.push('-');
                    }
                    chars.next();
                }
            }
            exponent = Some(exp);
        } else {
            return None;
        }
    }

    if integral.is_empty() && fraction.as_deref().is_none_or(str::is_empty) {
        return None;
    }

    let exponent = match exponent {
        Some(exp) => {
            if !exp.bytes().any(|b| b.is_ascii_digit()) {
                return None;
            }
            Some(exp.parse::<i32>().ok()?)
        }
        None => None,
    };

    Some(NumericParts {
        negative,
        integral,
        fraction: fraction.unwrap_or_default(),
        exponent,
    })
}

/// Rebuild normalized parts into a plain ASCII numeric string
fn reassemble(parts: &NumericParts) -> String {
    let mut out = String::new();
    if parts.negative {
        out.push('-');
    }
    if parts.integral.is_empty() {
        out.push('0');
    } else {
        out.push_str(&parts.integral);
    }
    if !parts.fraction.is_empty() {
        out.push('.');
        out.push_str(&parts.fraction);
    }
    if let Some(exp) = parts.exponent {
        out.push('e');
        out.push_str(&exp.to_string());
    }
    out
}

fn trim_per_style(raw: &str, style: NumberStyle) -> &str {
    let mut s = raw;
    if style.allow_leading_whitespace {
        s = s.trim_start();
    }
    if style.allow_trailing_whitespace {
        s = s.trim_end();
    }
    s
}

/// Detect sign-prefixed `inf`/`infinity`/`nan` words, which bypass digit
/// normalization and go straight to the native float parser
fn special_float_token<'a>(trimmed: &'a str, style: NumberStyle) -> Option<&'a str> {
    let (body, signed) = match trimmed.strip_prefix(['+', '-']) {
        Some(rest) => (rest, true),
        None => (trimmed, false),
    };
    if signed && !style.allow_sign {
        return None;
    }
    let lower = body.to_ascii_lowercase();
    matches!(lower.as_str(), "inf" | "infinity" | "nan").then_some(trimmed)
}

fn all_zero(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}
