use super::FloatExt;
use crate::Float;

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[Float; 3]; 3], vector: &[Float; 3]) -> [Float; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0] * vector[0] + row1[1] * vector[1] + row1[2] * vector[2],
        row2[0] * vector[0] + row2[1] * vector[1] + row2[2] * vector[2],
        row3[0] * vector[0] + row3[1] * vector[1] + row3[2] * vector[2],
    ]
}

/// Convert the 24-bit coordinates to unit range.
#[inline]
fn from_24bit(rgb: [u8; 3]) -> [Float; 3] {
    let [r, g, b] = rgb;
    [r as Float / 255.0, g as Float / 255.0, b as Float / 255.0]
}

/// Convert a unit range coordinate to a byte, rounding to the nearest integer
/// and clamping to `0..=255`.
#[inline]
fn to_byte(value: Float) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert an sRGB coordinate to linear sRGB, i.e., expand its gamma.
///
/// ```
/// # use colority::converter::srgb_to_linear;
/// assert_eq!(srgb_to_linear(0.0), 0.0);
/// assert_eq!(srgb_to_linear(1.0), 1.0);
/// assert!(srgb_to_linear(0.5) < 0.22);
/// ```
pub fn srgb_to_linear(value: Float) -> Float {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear sRGB coordinate to sRGB, i.e., compress its gamma.
///
/// ```
/// # use colority::converter::{linear_to_srgb, srgb_to_linear};
/// # use colority::assert_close_enough;
/// assert_close_enough!(linear_to_srgb(srgb_to_linear(0.5)), 0.5);
/// ```
pub fn linear_to_srgb(value: Float) -> Float {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

// --------------------------------------------------------------------------------------------------------------------

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.4124564, 0.3575761, 0.1804375 ],
    [ 0.2126729, 0.7151522, 0.0721750 ],
    [ 0.0193339, 0.1191920, 0.9503041 ],
];

/// Convert linear sRGB coordinates to XYZ with the D65 illuminant.
pub fn linear_rgb_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    multiply(&LINEAR_SRGB_TO_XYZ, value)
}

#[rustfmt::skip]
const XYZ_TO_LINEAR_SRGB: [[Float; 3]; 3] = [
    [  3.2404542, -1.5371385, -0.4985314 ],
    [ -0.9692660,  1.8760108,  0.0415560 ],
    [  0.0556434, -0.2040259,  1.0572252 ],
];

/// Convert XYZ coordinates with the D65 illuminant to linear sRGB.
pub fn xyz_to_linear_rgb(value: &[Float; 3]) -> [Float; 3] {
    multiply(&XYZ_TO_LINEAR_SRGB, value)
}

// --------------------------------------------------------------------------------------------------------------------
// https://bottosson.github.io/posts/oklab/

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_OKLMS: [[Float; 3]; 3] = [
    [ 0.8189330101, 0.3618667424, -0.1288597137 ],
    [ 0.0329845436, 0.9293118715,  0.0361456387 ],
    [ 0.0482003018, 0.2643662691,  0.6338517070 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_OKLAB: [[Float; 3]; 3] = [
    [ 0.2104542553,  0.7936177850, -0.0040720468 ],
    [ 1.9779984951, -2.4285922050,  0.4505937099 ],
    [ 0.0259040371,  0.7827717662, -0.8086757660 ],
];

/// Convert XYZ coordinates to Oklab.
///
/// The conversion takes the cube root of the intermediate LMS coordinates.
/// Negative LMS coordinates, which only result from out-of-gamut inputs, are
/// clamped to zero first.
pub fn xyz_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&XYZ_TO_OKLMS, value);
    multiply(
        &OKLMS_TO_OKLAB,
        &[l.max(0.0).cbrt(), m.max(0.0).cbrt(), s.max(0.0).cbrt()],
    )
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLAB_TO_OKLMS: [[Float; 3]; 3] = [
    [ 1.0,  0.3963377774,  0.2158037573 ],
    [ 1.0, -0.1055613458, -0.0638541728 ],
    [ 1.0, -0.0894841775, -1.2914855480 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const OKLMS_TO_XYZ: [[Float; 3]; 3] = [
    [  1.2270138511, -0.5577999807,  0.2812561490 ],
    [ -0.0405801784,  1.1122568696, -0.0716766787 ],
    [ -0.0763812845, -0.4214819784,  1.5861632204 ],
];

/// Convert Oklab coordinates to XYZ.
pub fn oklab_to_xyz(value: &[Float; 3]) -> [Float; 3] {
    let [l, m, s] = multiply(&OKLAB_TO_OKLMS, value);
    multiply(&OKLMS_TO_XYZ, &[l * l * l, m * m * m, s * s * s])
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert Oklch coordinates to Oklab, i.e., from polar to Cartesian
/// coordinates.
#[allow(non_snake_case)]
pub fn oklch_to_oklab(value: &[Float; 3]) -> [Float; 3] {
    let [L, C, h] = *value;
    let hue_radian = h.to_radians();
    [L, C * hue_radian.cos(), C * hue_radian.sin()]
}

/// Convert Oklab coordinates to Oklch, i.e., from Cartesian to polar
/// coordinates. The hue is normalized to `0..360`.
///
/// ```
/// # use colority::converter::{oklab_to_oklch, oklch_to_oklab};
/// # use colority::assert_close_enough;
/// let [l, c, h] = oklab_to_oklch(&oklch_to_oklab(&[0.5, 0.1, 300.0]));
/// assert_close_enough!(l, 0.5);
/// assert_close_enough!(c, 0.1);
/// assert_close_enough!(h, 300.0);
/// ```
#[allow(non_snake_case)]
pub fn oklab_to_oklch(value: &[Float; 3]) -> [Float; 3] {
    let [L, a, b] = *value;

    let C = a.hypot(b);
    let h = b.atan2(a).to_degrees();
    let h = if h < 0.0 { h + 360.0 } else { h };

    [L, C, h]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit sRGB coordinates to HSL.
///
/// Hue is in degrees, saturation and lightness are in percent, and all three
/// are rounded to two digits after the decimal.
pub(crate) fn rgb_to_hsl(rgb: [u8; 3]) -> [Float; 3] {
    let [r, g, b] = from_24bit(rgb);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return [0.0, 0.0, (l * 100.0).round_to(2)];
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sector = if max == r {
        let wrap = if g < b { 6.0 } else { 0.0 };
        (g - b) / d + wrap
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = sector / 6.0;

    [
        (h * 360.0).round_to(2),
        (s * 100.0).round_to(2),
        (l * 100.0).round_to(2),
    ]
}

/// Convert HSL coordinates to 24-bit sRGB.
///
/// The hue must be in `0..=360` and the saturation and lightness in `0..=100`.
/// The conversion picks the channel order from the 60º hue sector.
pub(crate) fn hsl_to_rgb(hsl: &[Float; 3]) -> [u8; 3] {
    let [h, s, l] = *hsl;
    let (s, l) = (s / 100.0, l / 100.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [to_byte(r + m), to_byte(g + m), to_byte(b + m)]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit sRGB coordinates to Oklch.
///
/// This is a five-hop conversion through linear sRGB, XYZ, and Oklab.
/// Lightness and chroma are rounded to six and hue to two digits after the
/// decimal. The rounded coordinates are clamped to the ranges accepted by the
/// Oklch grammar.
#[allow(non_snake_case)]
pub(crate) fn rgb_to_oklch(rgb: [u8; 3]) -> [Float; 3] {
    let [r, g, b] = from_24bit(rgb);
    let linear = [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)];
    let xyz = linear_rgb_to_xyz(&linear);
    let oklab = xyz_to_oklab(&xyz);
    let [L, C, h] = oklab_to_oklch(&oklab);

    [
        L.round_to(6).clamp(0.0, 1.0),
        C.round_to(6).clamp(0.0, 1.0),
        h.round_to(2).clamp(0.0, 360.0),
    ]
}

/// Convert Oklch coordinates to 24-bit sRGB.
///
/// This is a five-hop conversion through Oklab, XYZ, and linear sRGB.
/// Out-of-gamut coordinates are clamped to `0..=255` after rounding.
pub(crate) fn oklch_to_rgb(oklch: &[Float; 3]) -> [u8; 3] {
    let oklab = oklch_to_oklab(oklch);
    let xyz = oklab_to_xyz(&oklab);
    let [r, g, b] = xyz_to_linear_rgb(&xyz);

    [
        to_byte(linear_to_srgb(r)),
        to_byte(linear_to_srgb(g)),
        to_byte(linear_to_srgb(b)),
    ]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{
        hsl_to_rgb, linear_rgb_to_xyz, oklab_to_xyz, oklch_to_rgb, rgb_to_hsl, rgb_to_oklch,
        srgb_to_linear, xyz_to_linear_rgb, xyz_to_oklab,
    };
    use crate::assert_close_enough;

    #[test]
    fn test_gamma() {
        assert_eq!(srgb_to_linear(0.04045), 0.04045 / 12.92);
        assert_close_enough!(srgb_to_linear(1.0), 1.0);
        assert_close_enough!(super::linear_to_srgb(1.0), 1.0);
        assert_close_enough!(super::linear_to_srgb(-0.1), -1.292);
    }

    #[test]
    fn test_xyz_round_trip() {
        let linear = [0.2, 0.4, 0.6];
        let [r, g, b] = xyz_to_linear_rgb(&linear_rgb_to_xyz(&linear));

        // The 7-digit matrices are inverses of each other to about 1e-7.
        assert!((r - 0.2).abs() < 1e-6);
        assert!((g - 0.4).abs() < 1e-6);
        assert!((b - 0.6).abs() < 1e-6);

        let [x, y, z] = oklab_to_xyz(&xyz_to_oklab(&[0.3, 0.4, 0.5]));
        assert!((x - 0.3).abs() < 1e-6);
        assert!((y - 0.4).abs() < 1e-6);
        assert!((z - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_negative_lms() {
        // A strongly negative Z yields negative LMS, which must not produce NaN.
        let [l, a, b] = xyz_to_oklab(&[0.0, 0.0, -1.0]);
        assert!(!l.is_nan() && !a.is_nan() && !b.is_nan());
    }

    #[test]
    fn test_rgb_hsl() {
        assert_eq!(rgb_to_hsl([0, 0, 0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsl([255, 255, 255]), [0.0, 0.0, 100.0]);
        assert_eq!(rgb_to_hsl([255, 0, 0]), [0.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl([33, 105, 90]), [167.5, 52.17, 27.06]);
        assert_eq!(rgb_to_hsl([141, 49, 179]), [282.46, 57.02, 44.71]);
        assert_eq!(rgb_to_hsl([206, 137, 56]), [32.4, 60.48, 51.37]);
        assert_eq!(rgb_to_hsl([0, 0, 255]), [240.0, 100.0, 50.0]);

        // Red is max and green is below blue, so hue wraps around.
        assert_eq!(rgb_to_hsl([255, 0, 128]), [329.88, 100.0, 50.0]);

        assert_eq!(hsl_to_rgb(&[0.0, 0.0, 0.0]), [0, 0, 0]);
        assert_eq!(hsl_to_rgb(&[0.0, 100.0, 50.0]), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(&[360.0, 100.0, 50.0]), [255, 0, 0]);
        assert_eq!(hsl_to_rgb(&[167.5, 52.17, 27.06]), [33, 105, 90]);
        assert_eq!(hsl_to_rgb(&[282.46, 57.02, 44.71]), [141, 49, 179]);
        assert_eq!(hsl_to_rgb(&[32.4, 60.48, 51.37]), [206, 137, 56]);
    }

    #[test]
    fn test_rgb_oklch() {
        assert_eq!(oklch_to_rgb(&[0.5, 0.1, 180.0]), [0, 117, 101]);
        assert_eq!(oklch_to_rgb(&[0.7, 0.15, 120.0]), [147, 171, 44]);
        assert_eq!(oklch_to_rgb(&[0.6, 0.2, 90.0]), [174, 117, 0]);

        assert_eq!(rgb_to_oklch([0, 0, 0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_oklch([255, 255, 255]), [1.0, 0.000087, 263.28]);
        assert_eq!(rgb_to_oklch([255, 0, 0]), [0.627987, 0.25764, 29.23]);
        assert_eq!(rgb_to_oklch([0, 0, 255]), [0.451978, 0.313294, 264.06]);
        assert_eq!(rgb_to_oklch([33, 105, 90]), [0.472099, 0.074683, 176.36]);

        // The rounded coordinates still map back onto the same bytes.
        for rgb in [[255, 0, 0], [33, 105, 90], [0, 117, 101], [255, 255, 255]] {
            assert_eq!(oklch_to_rgb(&rgb_to_oklch(rgb)), rgb);
        }
    }
}
