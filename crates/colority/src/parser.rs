//! Parsers for the four textual color formats.
//!
//! Each parser first normalizes its input, e.g., by stripping white space and
//! units, and then validates the normalized input against the format's
//! grammar. Parsers are stateless unit structs, so they are trivially shared
//! between threads.
//!
//! ```
//! # use colority::parser::{HslParser, ValueParser};
//! # use colority::error::ColorFormatError;
//! # fn main() -> Result<(), ColorFormatError> {
//! assert_eq!(HslParser.normalize("hsl(167.5deg, 52.17%, 27.06%)"), "hsl(167.5,52.17,27.06)");
//! assert_eq!(HslParser.parse("hsl(167.50deg, 52.17%, 27.06%)")?, "hsl(167.5,52.17,27.06)");
//! assert!(HslParser.parse("hsl(0,0,0,0)").is_err());
//! # Ok(())
//! # }
//! ```

use crate::core::{
    normalize_hex, normalize_hsl, normalize_oklch, normalize_rgb, parse_hex, parse_hsl,
    parse_oklch, parse_rgb,
};
use crate::error::ColorFormatError;
use crate::{HexColor, HslColor, OklchColor, RgbColor};

/// A parser for one textual color format.
pub trait ValueParser {
    /// The color value type produced by this parser.
    type Output: std::fmt::Display;

    /// Normalize the input. The result need not be well-formed.
    fn normalize(&self, input: &str) -> String;

    /// Validate the normalized input against this parser's grammar, returning
    /// the corresponding color value.
    fn validate(&self, normalized: &str) -> Result<Self::Output, ColorFormatError>;

    /// Normalize and validate the input.
    fn parse_color(&self, input: &str) -> Result<Self::Output, ColorFormatError> {
        self.validate(&self.normalize(input))
    }

    /// Normalize and validate the input, returning the canonical string.
    fn parse(&self, input: &str) -> Result<String, ColorFormatError> {
        self.parse_color(input).map(|color| color.to_string())
    }
}

/// The parser for hashed hexadecimal colors such as `#21695A` or `#FFF`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HexParser;

impl ValueParser for HexParser {
    type Output = HexColor;

    fn normalize(&self, input: &str) -> String {
        normalize_hex(input)
    }

    fn validate(&self, normalized: &str) -> Result<HexColor, ColorFormatError> {
        parse_hex(normalized).map(HexColor::from_digits)
    }
}

/// The parser for `rgb(R,G,B)` colors with integer coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct RgbParser;

impl ValueParser for RgbParser {
    type Output = RgbColor;

    fn normalize(&self, input: &str) -> String {
        normalize_rgb(input)
    }

    fn validate(&self, normalized: &str) -> Result<RgbColor, ColorFormatError> {
        parse_rgb(normalized).map(RgbColor::from)
    }
}

/// The parser for `hsl(H,S,L)` colors, optionally with `deg` and `%` units.
#[derive(Clone, Copy, Debug, Default)]
pub struct HslParser;

impl ValueParser for HslParser {
    type Output = HslColor;

    fn normalize(&self, input: &str) -> String {
        normalize_hsl(input)
    }

    fn validate(&self, normalized: &str) -> Result<HslColor, ColorFormatError> {
        parse_hsl(normalized).map(HslColor::new_unchecked)
    }
}

/// The parser for `oklch(L C H)` colors with space-separated coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct OklchParser;

impl ValueParser for OklchParser {
    type Output = OklchColor;

    fn normalize(&self, input: &str) -> String {
        normalize_oklch(input)
    }

    fn validate(&self, normalized: &str) -> Result<OklchColor, ColorFormatError> {
        parse_oklch(normalized).map(OklchColor::new_unchecked)
    }
}

#[cfg(test)]
mod test {
    use super::{HexParser, HslParser, OklchParser, RgbParser, ValueParser};
    use crate::error::{ColorFormatError, ErrorKind};

    #[test]
    fn test_canonical() -> Result<(), ColorFormatError> {
        assert_eq!(HexParser.parse("#fa0")?, "#ffaa00");
        assert_eq!(HexParser.parse(" 21695A ")?, "#21695A");
        assert_eq!(RgbParser.parse("rgb( 33 , 105 , 90 )")?, "rgb(33,105,90)");
        assert_eq!(RgbParser.parse("rgb(007,0,0)")?, "rgb(7,0,0)");
        assert_eq!(HslParser.parse("hsl(200deg,50%,50%)")?, "hsl(200,50,50)");
        assert_eq!(HslParser.parse("hsl(0.0,100.00,50)")?, "hsl(0,100,50)");
        assert_eq!(OklchParser.parse("oklch(0.5  0.1 180deg)")?, "oklch(0.5 0.1 180)");
        assert_eq!(OklchParser.parse("oklch(62.5% 0.2 90)")?, "oklch(0.625 0.2 90)");
        assert_eq!(OklchParser.parse("oklch(33.3% 0.1 180)")?, "oklch(0.333 0.1 180)");
        Ok(())
    }

    #[test]
    fn test_validate() {
        assert!(HexParser.validate("#21695A").is_ok());
        assert!(HexParser.validate("21695A").is_err());
        assert!(RgbParser.validate("rgb(0, 0, 0)").is_err());

        let error = HslParser.parse_color("hsl(0, 0, 0, 0)").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::TooManyCoordinates);
        assert_eq!(error.input(), "hsl(0,0,0,0)");
    }
}
