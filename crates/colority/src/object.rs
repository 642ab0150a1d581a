use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    format_number, hex_to_24bit, hsl_to_rgb, oklch_to_rgb, rgb_to_hsl, rgb_to_oklch,
    to_hex_digits, FloatExt,
};
use crate::error::{ColorFormatError, ErrorKind};
use crate::parser::{HexParser, HslParser, OklchParser, RgbParser, ValueParser};
use crate::{Float, TransformableColor};

/// Check that the coordinate is a finite number within the range.
fn check_coordinate(value: Float, range: &RangeInclusive<Float>) -> Result<Float, ErrorKind> {
    if !value.is_finite() {
        Err(ErrorKind::MalformedNumber)
    } else if !range.contains(&value) {
        Err(ErrorKind::OutOfRange)
    } else {
        Ok(value.without_negative_zero())
    }
}

/// Implement equality and hashing by way of 24-bit coordinates, both for the
/// same and for the other color value types.
macro_rules! impl_equality {
    ($name:ident => $($other:ident),+) => {
        $(
            impl PartialEq<$other> for $name {
                fn eq(&self, other: &$other) -> bool {
                    self.to_24bit() == other.to_24bit()
                }
            }
        )+

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.to_24bit().hash(state);
            }
        }
    };
}

/// Implement parsing from strings, including the `TryFrom` conversions.
macro_rules! impl_from_str {
    ($name:ident, $parser:ident) => {
        impl std::str::FromStr for $name {
            type Err = ColorFormatError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $parser.parse_color(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ColorFormatError;

            #[inline]
            fn try_from(value: &str) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl TryFrom<String> for $name {
            type Error = ColorFormatError;

            #[inline]
            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

/// Implement the methods shared by all color value types in Python.
///
/// PyO3 accepts only one `#[pymethods]` block per class, hence the macro
/// generates the entire block, including any type-specific methods.
macro_rules! python_methods {
    ($name:ident, $coordinates:ty; $($extra:tt)*) => {
        #[cfg(feature = "pyffi")]
        #[pymethods]
        impl $name {
            /// Parse the string as a color. <i class=python-only>Python only!</i>
            #[new]
            pub fn py_new(s: &str) -> Result<Self, ColorFormatError> {
                s.parse()
            }

            /// Access this color's coordinates. <i class=python-only>Python
            /// only!</i>
            #[pyo3(name = "coordinates")]
            pub fn py_coordinates(&self) -> $coordinates {
                self.coordinates()
            }

            /// Convert this color to hashed hexadecimal format. <i
            /// class=python-only>Python only!</i>
            #[pyo3(name = "to_hex")]
            pub fn py_to_hex(&self) -> HexColor {
                TransformableColor::to_hex(self)
            }

            /// Convert this color to `rgb()` format. <i class=python-only>Python
            /// only!</i>
            #[pyo3(name = "to_rgb")]
            pub fn py_to_rgb(&self) -> RgbColor {
                TransformableColor::to_rgb(self)
            }

            /// Convert this color to `hsl()` format. <i class=python-only>Python
            /// only!</i>
            #[pyo3(name = "to_hsl")]
            pub fn py_to_hsl(&self) -> HslColor {
                TransformableColor::to_hsl(self)
            }

            /// Convert this color to `oklch()` format. <i
            /// class=python-only>Python only!</i>
            #[pyo3(name = "to_oklch")]
            pub fn py_to_oklch(&self) -> OklchColor {
                TransformableColor::to_oklch(self)
            }

            /// Determine this color's relative luminance. <i
            /// class=python-only>Python only!</i>
            #[pyo3(name = "luminance")]
            pub fn py_luminance(&self) -> Float {
                TransformableColor::luminance(self)
            }

            /// Determine whether this color is dark. <i class=python-only>Python
            /// only!</i>
            #[pyo3(name = "is_dark")]
            pub fn py_is_dark(&self) -> bool {
                TransformableColor::is_dark(self)
            }

            /// Determine the contrast ratio between this background and the
            /// foreground color. <i class=python-only>Python only!</i>
            #[pyo3(name = "contrast_ratio")]
            pub fn py_contrast_ratio(&self, foreground: crate::Color) -> Float {
                TransformableColor::contrast_ratio(self, &foreground)
            }

            /// Determine the contrast level between this background and the
            /// foreground color. <i class=python-only>Python only!</i>
            #[pyo3(name = "contrast_level")]
            pub fn py_contrast_level(
                &self,
                foreground: crate::Color,
            ) -> crate::contrast::ContrastLevel {
                TransformableColor::contrast_level(self, &foreground)
            }

            /// Convert this color to its debug representation. <i
            /// class=python-only>Python only!</i>
            pub fn __repr__(&self) -> String {
                format!("{:?}", self)
            }

            /// Convert this color to its canonical string. <i
            /// class=python-only>Python only!</i>
            pub fn __str__(&self) -> String {
                format!("{}", self)
            }

            $($extra)*
        }
    };
}

// ====================================================================================================================
// Hex
// ====================================================================================================================

/// A color in hashed hexadecimal format, e.g., `#21695A`.
///
/// A hex color keeps the six digits as written, so that its canonical string
/// preserves their case. Colors produced by conversion always use uppercase
/// digits. Equality ignores case:
///
/// ```
/// # use colority::HexColor;
/// # use colority::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let lower: HexColor = "#fa0".parse()?;
/// let upper = HexColor::new(0xff, 0xaa, 0x00);
/// assert_eq!(lower.to_string(), "#ffaa00");
/// assert_eq!(upper.to_string(), "#FFAA00");
/// assert_eq!(lower, upper);
/// # Ok(())
/// # }
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "colority")
)]
#[derive(Clone, Copy)]
pub struct HexColor {
    digits: [u8; 6],
    rgb: [u8; 3],
}

impl HexColor {
    /// Black.
    pub const BLACK: HexColor = HexColor::new(0, 0, 0);

    /// White.
    pub const WHITE: HexColor = HexColor::new(255, 255, 255);

    /// Create a new hex color with the given red, green, and blue
    /// coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        let rgb = [r, g, b];
        Self {
            digits: to_hex_digits(rgb),
            rgb,
        }
    }

    /// Create a new hex color from six validated hexadecimal digits.
    pub(crate) const fn from_digits(digits: [u8; 6]) -> Self {
        Self {
            digits,
            rgb: hex_to_24bit(&digits),
        }
    }

    /// Access this hex color's coordinates.
    pub const fn coordinates(&self) -> [u8; 3] {
        self.rgb
    }

    pub(crate) const fn to_24bit(&self) -> [u8; 3] {
        self.rgb
    }
}

python_methods!(HexColor, [u8; 3];);

impl_from_str!(HexColor, HexParser);
impl_equality!(HexColor => HexColor, RgbColor, HslColor, OklchColor);

impl From<[u8; 3]> for HexColor {
    fn from(value: [u8; 3]) -> Self {
        let [r, g, b] = value;
        Self::new(r, g, b)
    }
}

impl AsRef<[u8; 3]> for HexColor {
    fn as_ref(&self) -> &[u8; 3] {
        &self.rgb
    }
}

impl TransformableColor for HexColor {
    fn to_hex(&self) -> HexColor {
        *self
    }

    fn to_rgb(&self) -> RgbColor {
        RgbColor::from(self.rgb)
    }

    fn to_hsl(&self) -> HslColor {
        HslColor::new_unchecked(rgb_to_hsl(self.rgb))
    }

    fn to_oklch(&self) -> OklchColor {
        OklchColor::new_unchecked(rgb_to_oklch(self.rgb))
    }
}

impl std::fmt::Debug for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HexColor").field(&self.to_string()).finish()
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;

        f.write_char('#')?;
        for digit in self.digits {
            f.write_char(char::from(digit))?;
        }
        Ok(())
    }
}

// ====================================================================================================================
// Rgb
// ====================================================================================================================

/// A color in `rgb()` format, e.g., `rgb(33,105,90)`.
///
/// ```
/// # use colority::{RgbColor, TransformableColor};
/// let teal = RgbColor::new(33, 105, 90);
/// assert_eq!(teal.to_string(), "rgb(33,105,90)");
/// assert_eq!(teal.to_hex().to_string(), "#21695A");
/// assert_eq!(teal.to_hsl().to_string(), "hsl(167.5,52.17,27.06)");
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "colority")
)]
#[derive(Clone, Copy)]
pub struct RgbColor([u8; 3]);

impl RgbColor {
    /// Create a new RGB color with the given red, green, and blue coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Access this RGB color's coordinates.
    pub const fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    pub(crate) const fn to_24bit(&self) -> [u8; 3] {
        self.0
    }
}

python_methods!(RgbColor, [u8; 3];);

impl_from_str!(RgbColor, RgbParser);
impl_equality!(RgbColor => HexColor, RgbColor, HslColor, OklchColor);

impl From<[u8; 3]> for RgbColor {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl AsRef<[u8; 3]> for RgbColor {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl TransformableColor for RgbColor {
    fn to_hex(&self) -> HexColor {
        HexColor::from(self.0)
    }

    fn to_rgb(&self) -> RgbColor {
        *self
    }

    fn to_hsl(&self) -> HslColor {
        HslColor::new_unchecked(rgb_to_hsl(self.0))
    }

    fn to_oklch(&self) -> OklchColor {
        OklchColor::new_unchecked(rgb_to_oklch(self.0))
    }
}

impl std::fmt::Debug for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RgbColor").field(&self.to_string()).finish()
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb({},{},{})", r, g, b)
    }
}

// ====================================================================================================================
// Hsl
// ====================================================================================================================

/// A color in `hsl()` format, e.g., `hsl(167.5,52.17,27.06)`.
///
/// Hue is in degrees and saturation and lightness are in percent. The
/// canonical string omits units, whereas [`HslColor::with_units`] and the
/// alternate flag of the display format include them:
///
/// ```
/// # use colority::HslColor;
/// # use colority::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let teal = HslColor::new(167.5, 52.17, 27.06)?;
/// assert_eq!(format!("{}", teal), "hsl(167.5,52.17,27.06)");
/// assert_eq!(format!("{:#}", teal), "hsl(167.5deg,52.17%,27.06%)");
/// assert_eq!(teal.with_units(), "hsl(167.5deg,52.17%,27.06%)");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "colority")
)]
#[derive(Clone, Copy)]
pub struct HslColor([Float; 3]);

impl HslColor {
    /// Create a new HSL color with the given hue, saturation, and lightness.
    ///
    /// This method validates that hue is in `0..=360` and saturation and
    /// lightness are in `0..=100`.
    pub fn new(h: Float, s: Float, l: Float) -> Result<Self, ColorFormatError> {
        let validate = || -> Result<Self, ErrorKind> {
            Ok(Self([
                check_coordinate(h, &(0.0..=360.0))?,
                check_coordinate(s, &(0.0..=100.0))?,
                check_coordinate(l, &(0.0..=100.0))?,
            ]))
        };

        validate().map_err(|kind| ColorFormatError::new(kind, format!("hsl({},{},{})", h, s, l)))
    }

    /// Create a new HSL color from validated coordinates.
    pub(crate) const fn new_unchecked(coordinates: [Float; 3]) -> Self {
        Self(coordinates)
    }

    /// Access this HSL color's coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        self.0
    }

    /// Format this HSL color with `deg` and `%` units.
    pub fn with_units(&self) -> String {
        format!("{:#}", self)
    }

    pub(crate) fn to_24bit(&self) -> [u8; 3] {
        hsl_to_rgb(&self.0)
    }
}

python_methods!(
    HslColor,
    [Float; 3];
    /// Format this HSL color with `deg` and `%` units. <i
    /// class=python-only>Python only!</i>
    #[pyo3(name = "with_units")]
    pub fn py_with_units(&self) -> String {
        self.with_units()
    }
);

impl_from_str!(HslColor, HslParser);
impl_equality!(HslColor => HexColor, RgbColor, HslColor, OklchColor);

impl TryFrom<[Float; 3]> for HslColor {
    type Error = ColorFormatError;

    fn try_from(value: [Float; 3]) -> Result<Self, Self::Error> {
        let [h, s, l] = value;
        Self::new(h, s, l)
    }
}

impl AsRef<[Float; 3]> for HslColor {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl TransformableColor for HslColor {
    fn to_hex(&self) -> HexColor {
        HexColor::from(self.to_24bit())
    }

    fn to_rgb(&self) -> RgbColor {
        RgbColor::from(self.to_24bit())
    }

    fn to_hsl(&self) -> HslColor {
        *self
    }

    fn to_oklch(&self) -> OklchColor {
        OklchColor::new_unchecked(rgb_to_oklch(self.to_24bit()))
    }
}

impl std::fmt::Debug for HslColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HslColor").field(&self.to_string()).finish()
    }
}

impl std::fmt::Display for HslColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [h, s, l] = self.0;
        let (degree, percent) = if f.alternate() {
            ("deg", "%")
        } else {
            ("", "")
        };

        f.write_str("hsl(")?;
        format_number(h, f)?;
        f.write_str(degree)?;
        f.write_str(",")?;
        format_number(s, f)?;
        f.write_str(percent)?;
        f.write_str(",")?;
        format_number(l, f)?;
        f.write_str(percent)?;
        f.write_str(")")
    }
}

// ====================================================================================================================
// Oklch
// ====================================================================================================================

/// A color in `oklch()` format, e.g., `oklch(0.5 0.1 180)`.
///
/// Lightness is a fraction in `0..=1`, chroma is in `0..=1`, and hue is in
/// degrees. Even though chroma is unbounded in theory, colors with chroma
/// beyond 1 are rejected. Conversion to other formats clamps out-of-gamut
/// colors to the sRGB gamut.
///
/// ```
/// # use colority::{OklchColor, TransformableColor};
/// # use colority::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let green: OklchColor = "oklch(0.5 0.1 180)".parse()?;
/// assert_eq!(green.to_rgb().to_string(), "rgb(0,117,101)");
/// assert_eq!(green.to_hex().to_string(), "#007565");
/// # Ok(())
/// # }
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, module = "colority")
)]
#[derive(Clone, Copy)]
pub struct OklchColor([Float; 3]);

impl OklchColor {
    /// Create a new Oklch color with the given lightness, chroma, and hue.
    ///
    /// This method validates that lightness and chroma are in `0..=1` and hue
    /// is in `0..=360`.
    pub fn new(l: Float, c: Float, h: Float) -> Result<Self, ColorFormatError> {
        let validate = || -> Result<Self, ErrorKind> {
            Ok(Self([
                check_coordinate(l, &(0.0..=1.0))?,
                check_coordinate(c, &(0.0..=1.0))?,
                check_coordinate(h, &(0.0..=360.0))?,
            ]))
        };

        validate().map_err(|kind| ColorFormatError::new(kind, format!("oklch({} {} {})", l, c, h)))
    }

    /// Create a new Oklch color from validated coordinates.
    pub(crate) const fn new_unchecked(coordinates: [Float; 3]) -> Self {
        Self(coordinates)
    }

    /// Access this Oklch color's coordinates.
    pub const fn coordinates(&self) -> [Float; 3] {
        self.0
    }

    pub(crate) fn to_24bit(&self) -> [u8; 3] {
        oklch_to_rgb(&self.0)
    }
}

python_methods!(OklchColor, [Float; 3];);

impl_from_str!(OklchColor, OklchParser);
impl_equality!(OklchColor => HexColor, RgbColor, HslColor, OklchColor);

impl TryFrom<[Float; 3]> for OklchColor {
    type Error = ColorFormatError;

    fn try_from(value: [Float; 3]) -> Result<Self, Self::Error> {
        let [l, c, h] = value;
        Self::new(l, c, h)
    }
}

impl AsRef<[Float; 3]> for OklchColor {
    fn as_ref(&self) -> &[Float; 3] {
        &self.0
    }
}

impl TransformableColor for OklchColor {
    fn to_hex(&self) -> HexColor {
        HexColor::from(self.to_24bit())
    }

    fn to_rgb(&self) -> RgbColor {
        RgbColor::from(self.to_24bit())
    }

    fn to_hsl(&self) -> HslColor {
        HslColor::new_unchecked(rgb_to_hsl(self.to_24bit()))
    }

    fn to_oklch(&self) -> OklchColor {
        *self
    }
}

impl std::fmt::Debug for OklchColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("OklchColor").field(&self.to_string()).finish()
    }
}

impl std::fmt::Display for OklchColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [l, c, h] = self.0;

        f.write_str("oklch(")?;
        format_number(l, f)?;
        f.write_str(" ")?;
        format_number(c, f)?;
        f.write_str(" ")?;
        format_number(h, f)?;
        f.write_str(")")
    }
}

// ====================================================================================================================
