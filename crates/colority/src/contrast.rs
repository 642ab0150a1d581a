//! WCAG luminance, contrast ratios, and contrast levels.
//!
//! The functions in this module operate on 24-bit sRGB coordinates. For color
//! values, the same functionality is also available through
//! [`TransformableColor`] and [`ResolveContrast`].

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::FloatExt;
use crate::{Color, Float, HexColor, HslColor, TransformableColor};

/// The luminance threshold below which a color is considered dark.
pub const DARK_LUMINANCE_THRESHOLD: Float = 0.179;

/// Compute the WCAG relative luminance for the 24-bit sRGB coordinates.
///
/// ```
/// # use colority::contrast::relative_luminance;
/// assert_eq!(relative_luminance([0, 0, 0]), 0.0);
/// assert_eq!(relative_luminance([255, 255, 255]), 1.0);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn relative_luminance(rgb: [u8; 3]) -> Float {
    crate::core::relative_luminance(rgb)
}

/// Compute the WCAG contrast ratio between the background and text colors,
/// truncated to two digits after the decimal.
///
/// ```
/// # use colority::contrast::contrast_ratio;
/// assert_eq!(contrast_ratio([255, 255, 255], [0, 0, 0]), 21.0);
/// assert_eq!(contrast_ratio([0xab, 0xc8, 0x41], [0, 0, 0]), 11.06);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
#[inline]
pub fn contrast_ratio(background: [u8; 3], text: [u8; 3]) -> Float {
    crate::core::contrast_ratio(background, text)
}

// ====================================================================================================================

/// The contrast level reached by a contrast ratio.
///
/// The variants are ordered from highest to lowest contrast.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "colority")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContrastLevel {
    /// A contrast ratio of at least 7.
    Excellent,
    /// A contrast ratio of at least 4.5.
    Good,
    /// A contrast ratio of at least 3.
    Acceptable,
    /// Any lower contrast ratio.
    Insufficient,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl ContrastLevel {
    /// Get the minimum contrast ratio for this level. For
    /// [`ContrastLevel::Insufficient`], that is 0, which serves as a floor
    /// only.
    pub const fn min_ratio(&self) -> Float {
        match self {
            Self::Excellent => 7.0,
            Self::Good => 4.5,
            Self::Acceptable => 3.0,
            Self::Insufficient => 0.0,
        }
    }

    /// Determine the level for the contrast ratio.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn from_ratio(ratio: Float) -> Self {
        Self::classify(ratio)
    }

    /// Determine the level for the contrast ratio.
    #[cfg(not(feature = "pyffi"))]
    pub fn from_ratio(ratio: Float) -> Self {
        Self::classify(ratio)
    }

    /// Determine whether the contrast ratio passes WCAG level AA for text.
    /// Large text requires a ratio of 3 and other text of 4.5.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn passes_text_aa(ratio: Float, large_text: bool) -> bool {
        ratio >= if large_text { 3.0 } else { 4.5 }
    }

    /// Determine whether the contrast ratio passes WCAG level AA for text.
    /// Large text requires a ratio of 3 and other text of 4.5.
    #[cfg(not(feature = "pyffi"))]
    pub fn passes_text_aa(ratio: Float, large_text: bool) -> bool {
        ratio >= if large_text { 3.0 } else { 4.5 }
    }

    /// Determine whether the contrast ratio passes WCAG level AAA for text.
    /// Large text requires a ratio of 4.5 and other text of 7.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn passes_text_aaa(ratio: Float, large_text: bool) -> bool {
        ratio >= if large_text { 4.5 } else { 7.0 }
    }

    /// Determine whether the contrast ratio passes WCAG level AAA for text.
    /// Large text requires a ratio of 4.5 and other text of 7.
    #[cfg(not(feature = "pyffi"))]
    pub fn passes_text_aaa(ratio: Float, large_text: bool) -> bool {
        ratio >= if large_text { 4.5 } else { 7.0 }
    }

    /// Determine whether the contrast ratio passes WCAG level AA for user
    /// interface components, which requires a ratio of 3.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn passes_ui_aa(ratio: Float) -> bool {
        ratio >= 3.0
    }

    /// Determine whether the contrast ratio passes WCAG level AA for user
    /// interface components, which requires a ratio of 3.
    #[cfg(not(feature = "pyffi"))]
    pub fn passes_ui_aa(ratio: Float) -> bool {
        ratio >= 3.0
    }
}

impl ContrastLevel {
    fn classify(ratio: Float) -> Self {
        [Self::Excellent, Self::Good, Self::Acceptable]
            .into_iter()
            .find(|level| ratio >= level.min_ratio())
            .unwrap_or(Self::Insufficient)
    }
}

// ====================================================================================================================

/// Contrast-driven selection of foreground colors.
///
/// This trait is implemented for all [`TransformableColor`]s, with the
/// implementing color serving as background.
pub trait ResolveContrast: TransformableColor {
    /// Find the candidate foreground color with the highest contrast ratio
    /// against this color. The first candidate wins ties. This method returns
    /// `None` if there are no candidates.
    fn best_foreground<'a, C: TransformableColor>(&self, candidates: &'a [C]) -> Option<&'a C> {
        let mut best: Option<(&C, Float)> = None;
        for candidate in candidates {
            let ratio = self.contrast_ratio(candidate);
            if best.map_or(true, |(_, best_ratio)| ratio > best_ratio) {
                best = Some((candidate, ratio));
            }
        }
        best.map(|(candidate, _)| candidate)
    }

    /// Pick black or white, whichever has the higher contrast ratio against
    /// this color. Black wins ties.
    fn best_black_or_white(&self) -> HexColor {
        if self.contrast_ratio(&HexColor::WHITE) > self.contrast_ratio(&HexColor::BLACK) {
            HexColor::WHITE
        } else {
            HexColor::BLACK
        }
    }

    /// Find a foreground color with the same hue and saturation as this color
    /// that reaches the given contrast level.
    ///
    /// This method walks lightness away from this color's lightness in
    /// increments of `step`, which is clamped to `1..=100`. It goes darker if
    /// this color's lightness exceeds 50% and lighter otherwise. It returns the
    /// first color that reaches the level or, if the walk runs out of
    /// lightness, the better of black and white.
    ///
    /// ```
    /// # use colority::{HexColor, TransformableColor};
    /// # use colority::contrast::{ContrastLevel, ResolveContrast};
    /// let foreground = HexColor::WHITE.matching_foreground(ContrastLevel::Good, 1.0);
    /// assert_eq!(foreground.to_string(), "hsl(0,0,46)");
    /// assert!(HexColor::WHITE.contrast_ratio(&foreground) >= 4.5);
    /// ```
    fn matching_foreground(&self, level: ContrastLevel, step: Float) -> Color {
        let [h, s, l] = self.to_hsl().coordinates();
        let target = level.min_ratio();
        let step = step.clamp(1.0, 100.0);
        let delta = if l > 50.0 { -step } else { step };

        (1_u32..)
            // Drop floating point noise from repeated addition.
            .map(|n| (l + delta * n as Float).round_to(10))
            .take_while(|lightness| (0.0..=100.0).contains(lightness))
            .map(|lightness| HslColor::new_unchecked([h, s, lightness]))
            .find(|candidate| self.contrast_ratio(candidate) >= target)
            .map_or_else(|| Color::Hex(self.best_black_or_white()), Color::Hsl)
    }
}

impl<T: TransformableColor + ?Sized> ResolveContrast for T {}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::{ContrastLevel, ResolveContrast};
    use crate::error::ColorFormatError;
    use crate::{Color, HexColor, TransformableColor};

    #[test]
    fn test_contrast_level() {
        assert_eq!(ContrastLevel::from_ratio(21.0), ContrastLevel::Excellent);
        assert_eq!(ContrastLevel::from_ratio(7.0), ContrastLevel::Excellent);
        assert_eq!(ContrastLevel::from_ratio(6.99), ContrastLevel::Good);
        assert_eq!(ContrastLevel::from_ratio(4.5), ContrastLevel::Good);
        assert_eq!(ContrastLevel::from_ratio(4.49), ContrastLevel::Acceptable);
        assert_eq!(ContrastLevel::from_ratio(3.0), ContrastLevel::Acceptable);
        assert_eq!(ContrastLevel::from_ratio(2.99), ContrastLevel::Insufficient);
        assert_eq!(ContrastLevel::from_ratio(1.0), ContrastLevel::Insufficient);
        assert_eq!(ContrastLevel::Insufficient.min_ratio(), 0.0);
    }

    #[test]
    fn test_wcag() {
        assert!(ContrastLevel::passes_text_aa(4.5, false));
        assert!(!ContrastLevel::passes_text_aa(4.49, false));
        assert!(ContrastLevel::passes_text_aa(3.0, true));
        assert!(!ContrastLevel::passes_text_aa(2.99, true));

        assert!(ContrastLevel::passes_text_aaa(7.0, false));
        assert!(!ContrastLevel::passes_text_aaa(6.99, false));
        assert!(ContrastLevel::passes_text_aaa(4.5, true));
        assert!(!ContrastLevel::passes_text_aaa(4.49, true));

        assert!(ContrastLevel::passes_ui_aa(3.0));
        assert!(!ContrastLevel::passes_ui_aa(2.99));
    }

    #[test]
    fn test_best_foreground() -> Result<(), ColorFormatError> {
        let candidates = [
            "#000000", "#441273", "#592B88", "#7B4C4C", "#327E16", "#BD4747", "#454C42",
            "#857297", "#D4E5CC", "#FFFFFF",
        ]
        .into_iter()
        .map(HexColor::from_str)
        .collect::<Result<Vec<_>, _>>()?;

        let best = HexColor::BLACK.best_foreground(&candidates);
        assert_eq!(best.map(ToString::to_string), Some("#FFFFFF".to_string()));
        let best = HexColor::WHITE.best_foreground(&candidates);
        assert_eq!(best.map(ToString::to_string), Some("#000000".to_string()));

        let empty: [HexColor; 0] = [];
        assert!(HexColor::WHITE.best_foreground(&empty).is_none());

        // The first of equally good candidates wins.
        let twins = [HexColor::from_str("#fff")?, HexColor::WHITE];
        let best = HexColor::BLACK.best_foreground(&twins);
        assert_eq!(best.map(ToString::to_string), Some("#ffffff".to_string()));

        assert_eq!(HexColor::BLACK.best_black_or_white(), HexColor::WHITE);
        assert_eq!(HexColor::WHITE.best_black_or_white(), HexColor::BLACK);
        Ok(())
    }

    #[test]
    fn test_matching_foreground() -> Result<(), ColorFormatError> {
        let white = HexColor::WHITE;
        let foreground = white.matching_foreground(ContrastLevel::Good, 1.0);
        assert!(matches!(foreground, Color::Hsl(_)));
        assert_eq!(foreground.to_string(), "hsl(0,0,46)");
        assert_eq!(white.contrast_ratio(&foreground), 4.6);

        let foreground = white.matching_foreground(ContrastLevel::Excellent, 5.0);
        assert_eq!(foreground.to_string(), "hsl(0,0,35)");
        assert_eq!(white.contrast_ratio(&foreground), 7.0);

        let foreground = HexColor::BLACK.matching_foreground(ContrastLevel::Acceptable, 10.0);
        assert_eq!(foreground.to_string(), "hsl(0,0,40)");

        let teal = HexColor::from_str("#21695A")?;
        let foreground = teal.matching_foreground(ContrastLevel::Good, 10.0);
        assert_eq!(foreground.to_string(), "hsl(167.5,52.17,77.06)");
        assert_eq!(teal.contrast_ratio(&foreground), 4.5);

        // Steps are clamped to at least 1.
        let foreground = white.matching_foreground(ContrastLevel::Good, 0.0);
        assert_eq!(foreground.to_string(), "hsl(0,0,46)");
        Ok(())
    }

    #[test]
    fn test_matching_foreground_fallback() -> Result<(), ColorFormatError> {
        // Even white has too little contrast against medium gray.
        let gray = HexColor::from_str("#808080")?;
        let foreground = gray.matching_foreground(ContrastLevel::Excellent, 1.0);
        assert_eq!(foreground, Color::Hex(HexColor::BLACK));
        assert!(matches!(foreground, Color::Hex(_)));

        let blue = HexColor::from_str("#4095BF")?;
        let foreground = blue.matching_foreground(ContrastLevel::Good, 1.0);
        assert_eq!(foreground.to_string(), "#000000");
        Ok(())
    }
}
