//! Hex <-> RGB color conversion

use crate::error::ConvertError;
use std::fmt;
use std::str::FromStr;

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse `#rrggbb` or `rrggbb` (hex digits in either case).
    ///
    /// # Examples
    ///
    /// ```
    /// use utilkit::Rgb;
    ///
    /// let color = Rgb::from_hex("#FF8000").unwrap();
    /// assert_eq!(color, Rgb::new(255, 128, 0));
    /// assert!(Rgb::from_hex("#fff").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self, ConvertError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConvertError::InvalidHexColor(hex.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ConvertError::InvalidHexColor(hex.to_string()))?;

        Ok(Self {
            red: (value >> 16) as u8,
            green: ((value & 0x00FF00) >> 8) as u8,
            blue: (value & 0x0000FF) as u8,
        })
    }

    /// Render as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

/// Split a hex color into its `(red, green, blue)` channels.
pub fn color_hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ConvertError> {
    let rgb = Rgb::from_hex(hex)?;
    Ok((rgb.red, rgb.green, rgb.blue))
}

/// Join three channels into a `#rrggbb` string.
pub fn color_rgb_to_hex(red: u8, green: u8, blue: u8) -> String {
    Rgb::new(red, green, blue).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("#000000", (0, 0, 0))]
    #[case("#ffffff", (255, 255, 255))]
    #[case("FFFFFF", (255, 255, 255))]
    #[case("#1e90ff", (30, 144, 255))]
    #[case("#0a0b0c", (10, 11, 12))]
    fn test_hex_to_rgb(#[case] hex: &str, #[case] expected: (u8, u8, u8)) {
        assert_eq!(color_hex_to_rgb(hex).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("#")]
    #[case("#fff")]
    #[case("#12345g")]
    #[case("#1234567")]
    #[case("+12345")]
    #[case("##123456")]
    fn test_invalid_hex_rejected(#[case] hex: &str) {
        let err = Rgb::from_hex(hex).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidHexColor(ref s) if s == hex));
    }

    #[test]
    fn test_rgb_to_hex_pads_channels() {
        assert_eq!(color_rgb_to_hex(1, 2, 3), "#010203");
        assert_eq!(color_rgb_to_hex(255, 0, 171), "#ff00ab");
    }

    #[test]
    fn test_display_and_from_str() {
        let color: Rgb = "#C0FFEE".parse().unwrap();
        assert_eq!(color.to_string(), "#c0ffee");
        assert_eq!(Rgb::from((192, 255, 238)), color);
    }
}
