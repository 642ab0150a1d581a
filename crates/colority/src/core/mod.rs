mod contrast;
mod conversion;
mod equality;
mod math;
mod string;

// contrast
pub(crate) use contrast::{contrast_ratio, relative_luminance};

// conversion
pub use conversion::{
    linear_rgb_to_xyz, linear_to_srgb, oklab_to_oklch, oklab_to_xyz, oklch_to_oklab,
    srgb_to_linear, xyz_to_linear_rgb, xyz_to_oklab,
};
pub(crate) use conversion::{hsl_to_rgb, oklch_to_rgb, rgb_to_hsl, rgb_to_oklch};

// equality
pub use equality::to_eq_bits;

// math
pub(crate) use math::FloatExt;

// string
pub(crate) use string::{
    format_number, hex_to_24bit, normalize_hex, normalize_hsl, normalize_oklch, normalize_rgb,
    parse_hex, parse_hsl, parse_oklch, parse_rgb, to_hex_digits,
};
