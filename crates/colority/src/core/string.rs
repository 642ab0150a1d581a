use std::ops::RangeInclusive;

use super::FloatExt;
use crate::error::{ColorFormatError, ErrorKind};
use crate::Float;

/// Remove all white space from the string.
fn compact(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Strip the function name with opening parenthesis as well as the closing
/// parenthesis. The remaining body must not contain further parentheses.
fn strip_function<'a>(s: &'a str, name: &str) -> Result<&'a str, ErrorKind> {
    let body = s
        .strip_prefix(name)
        .and_then(|rest| rest.strip_prefix('('))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ErrorKind::UnknownFormat)?;

    if body.contains(['(', ')']) {
        Err(ErrorKind::UnknownFormat)
    } else {
        Ok(body)
    }
}

/// Ensure that the iterator has no more coordinates.
fn expect_end<'a, I: Iterator<Item = &'a str>>(mut iter: I) -> Result<(), ErrorKind> {
    if iter.next().is_some() {
        Err(ErrorKind::TooManyCoordinates)
    } else {
        Ok(())
    }
}

/// Parse an unsigned decimal number without exponent and check its range.
///
/// The number must have digits before or after the decimal point, i.e., `5`,
/// `5.25`, and `.25` are well-formed but `5.` and `.` are not.
fn parse_decimal(s: Option<&str>, range: &RangeInclusive<Float>) -> Result<Float, ErrorKind> {
    let s = s
        .filter(|t| !t.is_empty())
        .ok_or(ErrorKind::MissingCoordinate)?;

    let is_digits = |t: &str| t.bytes().all(|b| b.is_ascii_digit());
    let well_formed = match s.split_once('.') {
        Some((integral, fractional)) => {
            is_digits(integral) && !fractional.is_empty() && is_digits(fractional)
        }
        None => is_digits(s),
    };
    if !well_formed {
        return Err(ErrorKind::MalformedNumber);
    }

    let value: Float = s.parse().map_err(|_| ErrorKind::MalformedNumber)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ErrorKind::OutOfRange)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize a color in hashed hexadecimal format. This function removes all
/// white space as well as hashes, expands three digits to six digits, and
/// prefixes the result with a single hash.
pub(crate) fn normalize_hex(s: &str) -> String {
    let digits: Vec<char> = s.chars().filter(|c| !c.is_whitespace() && *c != '#').collect();

    let mut result = String::with_capacity(7);
    result.push('#');
    if digits.len() == 3 {
        for c in digits {
            result.push(c);
            result.push(c);
        }
    } else {
        result.extend(digits);
    }
    result
}

/// Validate a normalized color in hashed hexadecimal format. If successful,
/// this function returns the six digits, preserving their case.
pub(crate) fn parse_hex(s: &str) -> Result<[u8; 6], ColorFormatError> {
    let error = |kind| ColorFormatError::new(kind, s);

    let digits = s
        .strip_prefix('#')
        .ok_or_else(|| error(ErrorKind::UnknownFormat))?;
    let digits = <[u8; 6]>::try_from(digits.as_bytes())
        .map_err(|_| error(ErrorKind::UnexpectedCharacters))?;

    if digits.iter().all(u8::is_ascii_hexdigit) {
        Ok(digits)
    } else {
        Err(error(ErrorKind::UnexpectedCharacters))
    }
}

/// Convert six hexadecimal digits into three bytes.
pub(crate) const fn hex_to_24bit(digits: &[u8; 6]) -> [u8; 3] {
    const fn nibble(digit: u8) -> u8 {
        match digit {
            b'0'..=b'9' => digit - b'0',
            b'a'..=b'f' => digit - b'a' + 10,
            b'A'..=b'F' => digit - b'A' + 10,
            _ => 0,
        }
    }

    [
        (nibble(digits[0]) << 4) | nibble(digits[1]),
        (nibble(digits[2]) << 4) | nibble(digits[3]),
        (nibble(digits[4]) << 4) | nibble(digits[5]),
    ]
}

/// Convert three bytes into six uppercase hexadecimal digits.
pub(crate) const fn to_hex_digits(rgb: [u8; 3]) -> [u8; 6] {
    const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

    let [r, g, b] = rgb;
    [
        DIGITS[(r >> 4) as usize],
        DIGITS[(r & 0xf) as usize],
        DIGITS[(g >> 4) as usize],
        DIGITS[(g & 0xf) as usize],
        DIGITS[(b >> 4) as usize],
        DIGITS[(b & 0xf) as usize],
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize a color in `rgb()` format. This function removes all white space,
/// function names, and closing parentheses before wrapping the remaining
/// comma-separated list in a single `rgb()`. Hence a bare list like `0,0,0`
/// normalizes to a well-formed color, too.
pub(crate) fn normalize_rgb(s: &str) -> String {
    let body = compact(s).replace("rgb(", "").replace(')', "");
    format!("rgb({})", body)
}

/// Validate a normalized color in `rgb()` format. If successful, this function
/// returns the three coordinates as unsigned bytes.
pub(crate) fn parse_rgb(s: &str) -> Result<[u8; 3], ColorFormatError> {
    fn parse_coordinate(s: Option<&str>) -> Result<u8, ErrorKind> {
        let t = s
            .filter(|t| !t.is_empty())
            .ok_or(ErrorKind::MissingCoordinate)?;
        if !t.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ErrorKind::MalformedNumber);
        } else if 3 < t.len() {
            return Err(ErrorKind::OutOfRange);
        }

        t.parse().map_err(|_| ErrorKind::OutOfRange)
    }

    let parse = || -> Result<[u8; 3], ErrorKind> {
        let mut iter = strip_function(s, "rgb")?.split(',');
        let c1 = parse_coordinate(iter.next())?;
        let c2 = parse_coordinate(iter.next())?;
        let c3 = parse_coordinate(iter.next())?;
        expect_end(iter)?;
        Ok([c1, c2, c3])
    };

    parse().map_err(|kind| ColorFormatError::new(kind, s))
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize a color in `hsl()` format. This function removes all white space,
/// function names, closing parentheses, and the `deg` and `%` units before
/// wrapping the remaining comma-separated list in a single `hsl()`.
pub(crate) fn normalize_hsl(s: &str) -> String {
    let body = compact(s)
        .replace("hsl(", "")
        .replace(')', "")
        .replace("deg", "")
        .replace('%', "");
    format!("hsl({})", body)
}

/// Validate a normalized color in `hsl()` format. If successful, this function
/// returns hue in degrees and saturation and lightness in percent.
pub(crate) fn parse_hsl(input: &str) -> Result<[Float; 3], ColorFormatError> {
    let parse = || -> Result<[Float; 3], ErrorKind> {
        let mut iter = strip_function(input, "hsl")?.split(',');
        let h = parse_decimal(iter.next(), &(0.0..=360.0))?;
        let s = parse_decimal(iter.next(), &(0.0..=100.0))?;
        let l = parse_decimal(iter.next(), &(0.0..=100.0))?;
        expect_end(iter)?;
        Ok([h, s, l])
    };

    parse().map_err(|kind| ColorFormatError::new(kind, input))
}

// --------------------------------------------------------------------------------------------------------------------

/// Normalize a color in `oklch()` format. This function removes the `deg` unit
/// and collapses white space into single spaces. Unlike the other formats,
/// coordinates are space-separated.
pub(crate) fn normalize_oklch(s: &str) -> String {
    s.replace("deg", "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate a normalized color in `oklch()` format. If successful, this
/// function returns lightness as a fraction, chroma, and hue in degrees.
/// Lightness may also be written as a percentage.
pub(crate) fn parse_oklch(s: &str) -> Result<[Float; 3], ColorFormatError> {
    fn parse_lightness(s: Option<&str>) -> Result<Float, ErrorKind> {
        s.and_then(|t| t.strip_suffix('%')).map_or_else(
            || parse_decimal(s, &(0.0..=1.0)),
            // Drop floating point noise from the division.
            |percent| {
                parse_decimal(Some(percent), &(0.0..=100.0)).map(|l| (l / 100.0).round_to(10))
            },
        )
    }

    let parse = || -> Result<[Float; 3], ErrorKind> {
        let mut iter = strip_function(s, "oklch")?.split_whitespace();
        let l = parse_lightness(iter.next())?;
        let c = parse_decimal(iter.next(), &(0.0..=1.0))?;
        let h = parse_decimal(iter.next(), &(0.0..=360.0))?;
        expect_end(iter)?;
        Ok([l, c, h])
    };

    parse().map_err(|kind| ColorFormatError::new(kind, s))
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the number for a canonical color string.
///
/// This function uses the shortest representation that round-trips, without
/// exponent, without trailing zeros, and without fractional part for integral
/// values. Negative zero is written as `0`.
pub(crate) fn format_number(value: Float, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_fmt(format_args!("{}", value.without_negative_zero()))
}

// ====================================================================================================================
