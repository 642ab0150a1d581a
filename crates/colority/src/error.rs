//! Utility module with colority's errors.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// The grammar rule a rejected color format violates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A color format that does not use a known notation. For example,
    /// `rgba(0,0,0)` uses an unknown function name.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#CC` is missing a hexadecimal digit, whereas
    /// `#0G0` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format that is missing a coordinate. For example, `rgb(0,0)`
    /// has only two coordinates.
    MissingCoordinate,

    /// A color format with more than three coordinates. For example,
    /// `hsl(0,0,0,0)` has one coordinate too many.
    TooManyCoordinates,

    /// A color format with a coordinate that is not a plain decimal number.
    /// For example, `rgb(1e2,0,0)` uses exponent notation.
    MalformedNumber,

    /// A color format with a coordinate outside its range. For example,
    /// `rgb(256,0,0)` exceeds the maximum of 255 for the red channel.
    OutOfRange,
}

/// An erroneous color format.
///
/// This is the only error raised by colority. It is always raised while
/// constructing a color value, never during conversion, and carries the
/// rejected input after normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorFormatError {
    kind: ErrorKind,
    input: String,
}

impl ColorFormatError {
    /// Create a new color format error.
    pub fn new<S: Into<String>>(kind: ErrorKind, input: S) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }

    /// Get the violated grammar rule.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorKind::*;

        let message = match self.kind {
            UnknownFormat => {
                "color format should be hex, `rgb()`, `hsl()`, or `oklch()` but is not"
            }
            UnexpectedCharacters => {
                "color format should have 3 or 6 hexadecimal digits but has other characters"
            }
            MissingCoordinate => "color format should have 3 coordinates but is missing one",
            TooManyCoordinates => "color format should have 3 coordinates but has more",
            MalformedNumber => {
                "color format coordinates should be plain decimal numbers but one is not"
            }
            OutOfRange => "color format coordinates should be in range but one is not",
        };

        f.write_fmt(format_args!("{}: {:?}", message, self.input))
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
