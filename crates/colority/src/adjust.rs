//! Lightness and saturation adjustments.

use crate::core::FloatExt;
use crate::{Float, HslColor, TransformableColor};

/// The conventional amount for [`Adjust::lighter`], [`Adjust::darker`],
/// [`Adjust::saturate`], and [`Adjust::desaturate`].
pub const DEFAULT_ADJUSTMENT: Float = 10.0;

/// Shift a percentage by the amount and clamp the result to `0..=100`. A NaN
/// amount leaves the percentage unchanged.
fn shift(value: Float, amount: Float) -> Float {
    if amount.is_nan() {
        return value;
    }
    (value + amount).round_to(10).clamp(0.0, 100.0)
}

/// Adjustments of a color's lightness and saturation.
///
/// All adjustments operate on the color's HSL coordinates and hence return
/// an [`HslColor`] no matter the original format. Hue is left as is.
///
/// ```
/// # use colority::{HslColor, TransformableColor};
/// # use colority::adjust::{Adjust, DEFAULT_ADJUSTMENT};
/// # use colority::error::ColorFormatError;
/// # fn main() -> Result<(), ColorFormatError> {
/// let color = HslColor::new(200.0, 50.0, 50.0)?;
/// assert_eq!(color.lighter(DEFAULT_ADJUSTMENT).to_string(), "hsl(200,50,60)");
/// assert_eq!(color.desaturate(20.0).to_string(), "hsl(200,30,50)");
/// assert_eq!(color.adjust_lightness(-80.0).to_string(), "hsl(200,50,0)");
/// # Ok(())
/// # }
/// ```
pub trait Adjust: TransformableColor {
    /// Shift lightness by the percentage, with positive percentages making
    /// the color lighter and negative ones making it darker.
    #[must_use]
    fn adjust_lightness(&self, percent: Float) -> HslColor {
        let [h, s, l] = self.to_hsl().coordinates();
        HslColor::new_unchecked([h, s, shift(l, percent)])
    }

    /// Shift saturation by the percentage, with positive percentages
    /// saturating the color and negative ones desaturating it.
    #[must_use]
    fn adjust_saturation(&self, percent: Float) -> HslColor {
        let [h, s, l] = self.to_hsl().coordinates();
        HslColor::new_unchecked([h, shift(s, percent), l])
    }

    /// Make the color lighter by the amount.
    #[must_use]
    fn lighter(&self, amount: Float) -> HslColor {
        self.adjust_lightness(amount)
    }

    /// Make the color darker by the amount.
    #[must_use]
    fn darker(&self, amount: Float) -> HslColor {
        self.adjust_lightness(-amount)
    }

    /// Make the color more saturated by the amount.
    #[must_use]
    fn saturate(&self, amount: Float) -> HslColor {
        self.adjust_saturation(amount)
    }

    /// Make the color less saturated by the amount.
    #[must_use]
    fn desaturate(&self, amount: Float) -> HslColor {
        self.adjust_saturation(-amount)
    }
}

impl<T: TransformableColor + ?Sized> Adjust for T {}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::{Adjust, DEFAULT_ADJUSTMENT};
    use crate::error::ColorFormatError;
    use crate::{Color, Float, HexColor, HslColor, RgbColor, TransformableColor};

    #[test]
    fn test_lightness() -> Result<(), ColorFormatError> {
        let color = HslColor::from_str("hsl(200, 50, 50)")?;
        assert_eq!(color.adjust_lightness(20.0).coordinates(), [200.0, 50.0, 70.0]);
        assert_eq!(color.adjust_lightness(-20.0).coordinates(), [200.0, 50.0, 30.0]);
        assert_eq!(color.lighter(DEFAULT_ADJUSTMENT).coordinates(), [200.0, 50.0, 60.0]);
        assert_eq!(color.darker(DEFAULT_ADJUSTMENT).coordinates(), [200.0, 50.0, 40.0]);

        let dark = HslColor::from_str("hsl(200, 50, 10)")?;
        assert_eq!(dark.adjust_lightness(-50.0).coordinates(), [200.0, 50.0, 0.0]);
        let light = HslColor::from_str("hsl(200, 50, 90)")?;
        assert_eq!(light.adjust_lightness(50.0).coordinates(), [200.0, 50.0, 100.0]);
        Ok(())
    }

    #[test]
    fn test_saturation() -> Result<(), ColorFormatError> {
        let color = HslColor::from_str("hsl(200, 50, 50)")?;
        assert_eq!(color.adjust_saturation(20.0).coordinates(), [200.0, 70.0, 50.0]);
        assert_eq!(color.adjust_saturation(-20.0).coordinates(), [200.0, 30.0, 50.0]);
        assert_eq!(color.saturate(DEFAULT_ADJUSTMENT).coordinates(), [200.0, 60.0, 50.0]);
        assert_eq!(color.desaturate(DEFAULT_ADJUSTMENT).coordinates(), [200.0, 40.0, 50.0]);

        let dull = HslColor::from_str("hsl(200, 10, 50)")?;
        assert_eq!(dull.adjust_saturation(-50.0).coordinates(), [200.0, 0.0, 50.0]);
        let vivid = HslColor::from_str("hsl(200, 90, 50)")?;
        assert_eq!(vivid.adjust_saturation(50.0).coordinates(), [200.0, 100.0, 50.0]);
        Ok(())
    }

    #[test]
    fn test_other_formats() -> Result<(), ColorFormatError> {
        let teal = HexColor::from_str("#21695A")?;
        assert_eq!(teal.lighter(10.0).to_string(), "hsl(167.5,52.17,37.06)");

        let gray = RgbColor::new(128, 128, 128);
        assert_eq!(gray.darker(10.0).to_string(), "hsl(0,0,40.2)");

        let color = Color::from_str("#FF0000")?;
        assert_eq!(color.desaturate(100.0).to_string(), "hsl(0,0,50)");
        Ok(())
    }

    #[test]
    fn test_non_finite_amount() -> Result<(), ColorFormatError> {
        let color = HslColor::new(200.0, 50.0, 50.0)?;
        assert_eq!(color.lighter(Float::NAN).to_string(), "hsl(200,50,50)");
        assert_eq!(color.darker(Float::NAN).to_string(), "hsl(200,50,50)");
        assert_eq!(color.saturate(Float::NAN).to_string(), "hsl(200,50,50)");
        assert_eq!(color.adjust_saturation(Float::NAN).coordinates(), [200.0, 50.0, 50.0]);

        let lighter = color.lighter(Float::NAN);
        assert_eq!(HslColor::from_str(&lighter.to_string())?, color);
        assert_eq!(lighter.to_rgb(), color.to_rgb());

        assert_eq!(color.lighter(Float::INFINITY).to_string(), "hsl(200,50,100)");
        assert_eq!(color.desaturate(Float::INFINITY).to_string(), "hsl(200,0,50)");
        Ok(())
    }
}
