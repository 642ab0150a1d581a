//! # Colority
//!
//! Colority parses, converts, and compares colors in the four formats most
//! common on the web: hashed hexadecimal, `rgb()`, `hsl()`, and `oklch()`.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. Enabling the `pyffi` feature adds Python integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. "
)]
//!
//!
//! ## 1. Overview
//!
//! Colority's main abstractions are:
//!
//!   * The **color value types** [`HexColor`], [`RgbColor`], [`HslColor`],
//!     and [`OklchColor`]. They are small, immutable, `Copy` values that
//!     always hold valid coordinates. Their string representations are
//!     canonical, e.g., `rgb(33,105,90)` without spaces.
//!   * The [`parser`] module's **parsers** for the four textual formats, which
//!     normalize and then validate their input.
//!   * The [`TransformableColor`] trait, which **converts** between the four
//!     formats and derives WCAG luminance and contrast.
//!   * The [`Color`] enum, which **resolves** a string in any of the four
//!     formats.
//!   * The [`contrast`] module's [`ContrastLevel`](contrast::ContrastLevel)
//!     and [`ResolveContrast`](contrast::ResolveContrast) for **picking
//!     foreground colors** with sufficient contrast, and the [`adjust`]
//!     module's [`Adjust`](adjust::Adjust) for **adjusting** lightness and
//!     saturation.
//!
//!
//! ## 2. Conversions
//!
//! Hex and Rgb convert into each other without loss. Hsl converts to and
//! from Rgb with the usual sector-based formulas, rounding hue, saturation,
//! and lightness to two digits after the decimal. Oklch converts to and from
//! Rgb by way of linear sRGB, XYZ, and Oklab, with the [`converter`] module
//! exposing the individual steps. All other conversions compose these.
//!
//! ```
//! # use colority::{Color, HexColor, TransformableColor};
//! # use colority::error::ColorFormatError;
//! # fn main() -> Result<(), ColorFormatError> {
//! let teal: HexColor = "#21695A".parse()?;
//! assert_eq!(teal.to_rgb().to_string(), "rgb(33,105,90)");
//! assert_eq!(teal.to_hsl().to_string(), "hsl(167.5,52.17,27.06)");
//! assert_eq!(teal.to_oklch().to_string(), "oklch(0.472099 0.074683 176.36)");
//!
//! let color: Color = "oklch(0.7 0.15 120)".parse()?;
//! assert_eq!(color.to_rgb().to_string(), "rgb(147,171,44)");
//! # Ok(())
//! # }
//! ```
//!
//! Conversions never fail, since every color value is valid by construction.
//! Equality between colors, no matter their formats, is equality of their
//! hashed hexadecimal forms, ignoring case.
//!
//!
//! ## 3. Contrast
//!
//! ```
//! # use colority::{HexColor, TransformableColor};
//! # use colority::contrast::{ContrastLevel, ResolveContrast};
//! # use colority::error::ColorFormatError;
//! # fn main() -> Result<(), ColorFormatError> {
//! let background: HexColor = "#5B7A80".parse()?;
//! assert_eq!(background.contrast_ratio(&HexColor::BLACK), 4.54);
//! assert_eq!(background.contrast_level(&HexColor::BLACK), ContrastLevel::Good);
//! assert_eq!(background.best_black_or_white(), HexColor::WHITE);
//! # Ok(())
//! # }
//! ```

/// The floating point type in use.
pub type Float = f64;

/// [`Float`]'s bits.
pub type Bits = u64;

pub mod adjust;
mod color;
pub mod contrast;
mod core;
pub mod error;
mod object;
pub mod parser;

pub mod converter {
    //! The individual steps of converting between sRGB and Oklch.
    //!
    //! All functions are pure and operate on plain coordinates. sRGB
    //! coordinates are in unit range.
    pub use crate::core::{
        linear_rgb_to_xyz, linear_to_srgb, oklab_to_oklch, oklab_to_xyz, oklch_to_oklab,
        srgb_to_linear, xyz_to_linear_rgb, xyz_to_oklab,
    };
}

#[doc(hidden)]
pub use core::to_eq_bits;

pub use color::{Color, TransformableColor};
pub use object::{HexColor, HslColor, OklchColor, RgbColor};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn colority(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(contrast::relative_luminance, m)?)?;
    m.add_function(wrap_pyfunction!(contrast::contrast_ratio, m)?)?;
    m.add("DARK_LUMINANCE_THRESHOLD", contrast::DARK_LUMINANCE_THRESHOLD)?;

    m.add_class::<HexColor>()?;
    m.add_class::<RgbColor>()?;
    m.add_class::<HslColor>()?;
    m.add_class::<OklchColor>()?;
    m.add_class::<contrast::ContrastLevel>()?;

    Ok(())
}
