use std::cmp::Ordering;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use image::Rgba;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Empty color value")]
    Empty,
    #[error("Invalid hexadecimal color: {0:?}")]
    InvalidDigit(String),
    #[error("Color does not fit in 32 bits: {0:?}")]
    OutOfRange(String),
}

/// A single RGBA color, one byte per component.
///
/// Ordering follows the packed numeric value (see [`pack`]), so a sorted
/// collection of colors lists them red-major, then green, blue and alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTuple {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl ColorTuple {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn from_packed(numeric: u32) -> Self {
        unpack(numeric)
    }

    pub const fn to_packed(self) -> u32 {
        pack(self)
    }
}

/// Splits a packed color into its components.
///
/// The layout is `0xRRGGBBAA`: red in the top byte, then green, blue and
/// alpha in the lowest byte.
pub const fn unpack(numeric: u32) -> ColorTuple {
    ColorTuple {
        blue: (numeric >> 8) as u8,
        green: (numeric >> 16) as u8,
        red: (numeric >> 24) as u8,
        alpha: numeric as u8,
    }
}

/// Inverse of [`unpack`].
pub const fn pack(color: ColorTuple) -> u32 {
    ((color.blue as u32) << 8)
        | ((color.green as u32) << 16)
        | ((color.red as u32) << 24)
        | color.alpha as u32
}

/// Parses a hexadecimal color, with or without a `0x` prefix.
pub fn parse_hex_color(text: &str) -> Result<u32, ColorParseError> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() {
        return Err(ColorParseError::Empty);
    }
    // from_str_radix would also accept a leading sign
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit(text.to_string()));
    }

    u32::from_str_radix(digits, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ColorParseError::OutOfRange(text.to_string()),
        _ => ColorParseError::InvalidDigit(text.to_string()),
    })
}

impl FromStr for ColorTuple {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s).map(unpack)
    }
}

impl Ord for ColorTuple {
    fn cmp(&self, other: &Self) -> Ordering {
        pack(*self).cmp(&pack(*other))
    }
}

impl PartialOrd for ColorTuple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ColorTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RGBA = (0x{:02x}, 0x{:02x}, 0x{:02x}, 0x{:02x})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl From<Rgba<u8>> for ColorTuple {
    fn from(pixel: Rgba<u8>) -> Self {
        let [red, green, blue, alpha] = pixel.0;
        Self::new(red, green, blue, alpha)
    }
}

impl From<ColorTuple> for Rgba<u8> {
    fn from(color: ColorTuple) -> Self {
        Rgba([color.red, color.green, color.blue, color.alpha])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unpack_byte_layout() {
        let color = unpack(0xffff00ff);
        assert_eq!(color, ColorTuple::new(0xff, 0xff, 0x00, 0xff));

        let color = unpack(0xffff0080);
        assert_eq!(color, ColorTuple::new(0xff, 0xff, 0x00, 0x80));

        let color = unpack(0x12345678);
        assert_eq!(color.red, 0x12);
        assert_eq!(color.green, 0x34);
        assert_eq!(color.blue, 0x56);
        assert_eq!(color.alpha, 0x78);
    }

    #[test]
    fn test_pack_is_inverse() {
        for numeric in [0, 1, 0xff, 0x100, 0xdeadbeef, 0x80000000, u32::MAX] {
            assert_eq!(pack(unpack(numeric)), numeric);
        }
    }

    #[test]
    fn test_display_format() {
        let color = ColorTuple::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(color.to_string(), "RGBA = (0x12, 0x34, 0x56, 0x78)");

        // Zero padded, lowercase
        let color = ColorTuple::new(0x0a, 0x00, 0xBC, 0x01);
        assert_eq!(color.to_string(), "RGBA = (0x0a, 0x00, 0xbc, 0x01)");
    }

    #[test]
    fn test_parse_with_and_without_prefix() {
        assert_eq!(parse_hex_color("0xffff00ff"), Ok(0xffff00ff));
        assert_eq!(parse_hex_color("ffff00ff"), Ok(0xffff00ff));
        assert_eq!(parse_hex_color("0XFFFF00FF"), Ok(0xffff00ff));
        assert_eq!(parse_hex_color("  ff "), Ok(0xff));
        assert_eq!(parse_hex_color("0"), Ok(0));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_hex_color(""), Err(ColorParseError::Empty));
        assert_eq!(parse_hex_color("0x"), Err(ColorParseError::Empty));
        assert!(matches!(
            parse_hex_color("0xffzz00ff"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            parse_hex_color("+ff"),
            Err(ColorParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            parse_hex_color("0x1ffffffff"),
            Err(ColorParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_from_str() {
        let color: ColorTuple = "0x11223344".parse().unwrap();
        assert_eq!(color, ColorTuple::new(0x11, 0x22, 0x33, 0x44));
        assert!("yellow".parse::<ColorTuple>().is_err());
    }

    #[test]
    fn test_ordering_follows_packed_value() {
        // Alpha is the least significant byte, red the most
        let low_red = ColorTuple::new(0x00, 0xff, 0xff, 0xff);
        let high_red = ColorTuple::new(0x01, 0x00, 0x00, 0x00);
        assert!(low_red < high_red);

        let a = ColorTuple::new(0x10, 0x10, 0x10, 0x01);
        let b = ColorTuple::new(0x10, 0x10, 0x10, 0x02);
        assert!(a < b);
    }

    #[test]
    fn test_rgba_conversion() {
        let color = ColorTuple::new(1, 2, 3, 4);
        let pixel: Rgba<u8> = color.into();
        assert_eq!(pixel.0, [1, 2, 3, 4]);
        assert_eq!(ColorTuple::from(pixel), color);
    }
}
