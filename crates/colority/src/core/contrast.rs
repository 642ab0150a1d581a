use crate::Float;

/// The coefficients for computing relative luminance from linear sRGB
/// coordinates.
const LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// Compute the relative luminance for the given 24-bit sRGB coordinates.
///
/// This function uses the [WCAG 2.x
/// definition](https://www.w3.org/TR/WCAG22/#dfn-relative-luminance),
/// including its 0.03928 threshold for linearization.
pub(crate) fn relative_luminance(rgb: [u8; 3]) -> Float {
    #[inline]
    fn linearize(value: u8) -> Float {
        let value = value as Float / 255.0;
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [c1, c2, c3] = *LUMINANCE;
    let [r, g, b] = rgb;

    c1 * linearize(r) + c2 * linearize(g) + c3 * linearize(b)
}

/// Compute the WCAG contrast ratio between background and text.
///
/// Since the ratio divides the larger by the smaller luminance, the two
/// arguments are interchangeable. The result is truncated, not rounded, to two
/// digits after the decimal.
pub(crate) fn contrast_ratio(background: [u8; 3], text: [u8; 3]) -> Float {
    let luminance1 = relative_luminance(background);
    let luminance2 = relative_luminance(text);

    let lighter = luminance1.max(luminance2);
    let darker = luminance1.min(luminance2);

    ((lighter + 0.05) / (darker + 0.05) * 100.0).floor() / 100.0
}

#[cfg(test)]
mod test {
    use super::{contrast_ratio, relative_luminance};

    const BLACK: [u8; 3] = [0, 0, 0];
    const WHITE: [u8; 3] = [255, 255, 255];

    #[test]
    fn test_luminance() {
        assert_eq!(relative_luminance(BLACK), 0.0);
        assert_eq!(relative_luminance(WHITE), 1.0);
        assert_eq!(relative_luminance([255, 0, 0]), 0.2126);

        let gray = relative_luminance([128, 128, 128]);
        assert!(0.215 < gray && gray < 0.216);
    }

    #[test]
    fn test_contrast_ratio() {
        assert_eq!(contrast_ratio(WHITE, BLACK), 21.0);
        assert_eq!(contrast_ratio(BLACK, WHITE), 21.0);
        assert_eq!(contrast_ratio(BLACK, BLACK), 1.0);
        assert_eq!(contrast_ratio(WHITE, WHITE), 1.0);

        // 11.0696... is truncated, not rounded.
        assert_eq!(contrast_ratio([0xab, 0xc8, 0x41], BLACK), 11.06);
        assert_eq!(contrast_ratio([0x4b, 0xd3, 0x96], BLACK), 11.05);
        assert_eq!(contrast_ratio([0xb9, 0xb6, 0xb6], BLACK), 10.42);
        assert_eq!(contrast_ratio([0xed, 0xa0, 0x2a], BLACK), 9.66);
        assert_eq!(contrast_ratio([0xab, 0xab, 0xab], BLACK), 9.14);
        assert_eq!(contrast_ratio([0x5b, 0x7a, 0x80], BLACK), 4.54);
        assert_eq!(contrast_ratio([0x32, 0x34, 0x33], BLACK), 1.67);
        assert_eq!(contrast_ratio([0x16, 0x18, 0x17], BLACK), 1.17);

        assert_eq!(contrast_ratio([0x44, 0x12, 0x73], WHITE), 13.29);
        assert_eq!(contrast_ratio([0x59, 0x2b, 0x88], WHITE), 9.87);
        assert_eq!(contrast_ratio([0x7b, 0x4c, 0x4c], WHITE), 7.04);
        assert_eq!(contrast_ratio([0x32, 0x7e, 0x16], WHITE), 5.08);
        assert_eq!(contrast_ratio([0xbd, 0x47, 0x47], WHITE), 5.05);
        assert_eq!(contrast_ratio([0x45, 0x4c, 0x42], WHITE), 8.87);
        assert_eq!(contrast_ratio([0x85, 0x72, 0x97], WHITE), 4.32);
        assert_eq!(contrast_ratio([0xd4, 0xe5, 0xcc], WHITE), 1.32);
    }
}
