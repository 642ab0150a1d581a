#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::contrast::{ContrastLevel, DARK_LUMINANCE_THRESHOLD};
use crate::core::{contrast_ratio, relative_luminance};
use crate::error::{ColorFormatError, ErrorKind};
use crate::{Float, HexColor, HslColor, OklchColor, RgbColor};

/// The capability shared by all color values: conversion to each of the four
/// color formats.
///
/// Conversion to a value's own format is the identity and returns a copy of
/// the value. All other conversions go through 24-bit sRGB, with Hex to Rgb
/// and Rgb to Hex being exact. Since conversions are total, none of them
/// fails.
///
/// Building on the four conversions, this trait also provides methods for
/// equality, luminance, and contrast, all of which are computed on the 24-bit
/// sRGB coordinates.
///
/// ```
/// # use colority::{HexColor, HslColor, TransformableColor};
/// # use colority::contrast::ContrastLevel;
/// # use colority::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let background: HexColor = "#ABC841".parse()?;
/// let foreground = HslColor::new(0.0, 0.0, 0.0)?;
///
/// assert!(background.is_light());
/// assert!(foreground.is_darker_than(&background));
/// assert_eq!(background.contrast_ratio(&foreground), 11.06);
/// assert_eq!(background.contrast_level(&foreground), ContrastLevel::Excellent);
/// # Ok(())
/// # }
/// ```
pub trait TransformableColor {
    /// Convert to hashed hexadecimal format.
    fn to_hex(&self) -> HexColor;

    /// Convert to `rgb()` format.
    fn to_rgb(&self) -> RgbColor;

    /// Convert to `hsl()` format.
    fn to_hsl(&self) -> HslColor;

    /// Convert to `oklch()` format.
    fn to_oklch(&self) -> OklchColor;

    /// Determine whether this color and the other color are the same after
    /// conversion to hashed hexadecimal format.
    fn is_equal_to<C: TransformableColor + ?Sized>(&self, other: &C) -> bool {
        self.to_hex() == other.to_hex()
    }

    /// Determine this color's relative luminance as defined by WCAG.
    fn luminance(&self) -> Float {
        relative_luminance(self.to_rgb().coordinates())
    }

    /// Determine whether this color is dark, i.e., has a luminance below
    /// [`DARK_LUMINANCE_THRESHOLD`].
    fn is_dark(&self) -> bool {
        self.luminance() < DARK_LUMINANCE_THRESHOLD
    }

    /// Determine whether this color is light, i.e., not dark.
    fn is_light(&self) -> bool {
        !self.is_dark()
    }

    /// Determine whether this color has strictly less luminance than the other
    /// color.
    fn is_darker_than<C: TransformableColor + ?Sized>(&self, other: &C) -> bool {
        self.luminance() < other.luminance()
    }

    /// Determine whether this color has strictly more luminance than the other
    /// color.
    fn is_lighter_than<C: TransformableColor + ?Sized>(&self, other: &C) -> bool {
        self.luminance() > other.luminance()
    }

    /// Determine the WCAG contrast ratio between this color as background and
    /// the foreground color. The ratio is truncated to two digits after the
    /// decimal and ranges from 1 to 21.
    fn contrast_ratio<C: TransformableColor + ?Sized>(&self, foreground: &C) -> Float {
        contrast_ratio(
            self.to_rgb().coordinates(),
            foreground.to_rgb().coordinates(),
        )
    }

    /// Determine the contrast level between this color as background and the
    /// foreground color.
    fn contrast_level<C: TransformableColor + ?Sized>(&self, foreground: &C) -> ContrastLevel {
        ContrastLevel::from_ratio(self.contrast_ratio(foreground))
    }
}

// ====================================================================================================================

/// A color value in any of the four formats.
///
/// Parsing a color from a string tries the hashed hexadecimal, `hsl()`,
/// `rgb()`, and `oklch()` formats in that order and returns the first
/// successfully parsed color. Since the `rgb()` and `hsl()` parsers accept bare
/// comma-separated lists, such a list parses as an HSL color.
///
/// ```
/// # use colority::{Color, TransformableColor};
/// # use colority::error::{ColorFormatError, ErrorKind};
/// # fn main() -> Result<(), ColorFormatError> {
/// let color: Color = "rgb(33, 105, 90)".parse()?;
/// assert!(matches!(color, Color::Rgb(_)));
/// assert_eq!(color.to_hex().to_string(), "#21695A");
///
/// let error = "cmyk(0,0,0,0)".parse::<Color>().unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::UnknownFormat);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(feature = "pyffi", derive(FromPyObject))]
#[derive(Clone, Copy, Debug)]
pub enum Color {
    Hex(HexColor),
    Rgb(RgbColor),
    Hsl(HslColor),
    Oklch(OklchColor),
}

impl TransformableColor for Color {
    fn to_hex(&self) -> HexColor {
        match self {
            Self::Hex(color) => color.to_hex(),
            Self::Rgb(color) => color.to_hex(),
            Self::Hsl(color) => color.to_hex(),
            Self::Oklch(color) => color.to_hex(),
        }
    }

    fn to_rgb(&self) -> RgbColor {
        match self {
            Self::Hex(color) => color.to_rgb(),
            Self::Rgb(color) => color.to_rgb(),
            Self::Hsl(color) => color.to_rgb(),
            Self::Oklch(color) => color.to_rgb(),
        }
    }

    fn to_hsl(&self) -> HslColor {
        match self {
            Self::Hex(color) => color.to_hsl(),
            Self::Rgb(color) => color.to_hsl(),
            Self::Hsl(color) => color.to_hsl(),
            Self::Oklch(color) => color.to_hsl(),
        }
    }

    fn to_oklch(&self) -> OklchColor {
        match self {
            Self::Hex(color) => color.to_oklch(),
            Self::Rgb(color) => color.to_oklch(),
            Self::Hsl(color) => color.to_oklch(),
            Self::Oklch(color) => color.to_oklch(),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse()
            .map(Self::Hex)
            .or_else(|_| s.parse().map(Self::Hsl))
            .or_else(|_| s.parse().map(Self::Rgb))
            .or_else(|_| s.parse().map(Self::Oklch))
            .map_err(|_| ColorFormatError::new(ErrorKind::UnknownFormat, s))
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorFormatError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HexColor> for Color {
    fn from(value: HexColor) -> Self {
        Self::Hex(value)
    }
}

impl From<RgbColor> for Color {
    fn from(value: RgbColor) -> Self {
        Self::Rgb(value)
    }
}

impl From<HslColor> for Color {
    fn from(value: HslColor) -> Self {
        Self::Hsl(value)
    }
}

impl From<OklchColor> for Color {
    fn from(value: OklchColor) -> Self {
        Self::Oklch(value)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for Color {}

impl std::hash::Hash for Color {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_hex().hash(state);
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hex(color) => std::fmt::Display::fmt(color, f),
            Self::Rgb(color) => std::fmt::Display::fmt(color, f),
            Self::Hsl(color) => std::fmt::Display::fmt(color, f),
            Self::Oklch(color) => std::fmt::Display::fmt(color, f),
        }
    }
}

// ====================================================================================================================
