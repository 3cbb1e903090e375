use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Packed 24-bit color, `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Self = Self(0x000000);
    pub const WHITE: Self = Self(0xFFFFFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn channels(self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xFF) as u8,
            ((self.0 >> 8) & 0xFF) as u8,
            (self.0 & 0xFF) as u8,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub branch_fill: String,
    pub leaf_fill: String,
    pub text_color: String,
    pub line_color: String,
}

impl Theme {
    /// Red directories, yellow files, black ink on white.
    pub fn classic() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            branch_fill: "#FF0000".to_string(),
            leaf_fill: "#FFFF00".to_string(),
            text_color: "#000000".to_string(),
            line_color: "#000000".to_string(),
        }
    }

    pub fn modern() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            branch_fill: "#C7D2E5".to_string(),
            leaf_fill: "#F8FAFF".to_string(),
            text_color: "#1C2430".to_string(),
            line_color: "#7A8AA6".to_string(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "classic" | "default" => Some(Self::classic()),
            "modern" => Some(Self::modern()),
            _ => None,
        }
    }

    /// Parses every color of the theme.
    pub fn palette(&self) -> Result<Palette> {
        Ok(Palette {
            background: parse_color(&self.background)?,
            branch_fill: parse_color(&self.branch_fill)?,
            leaf_fill: parse_color(&self.leaf_fill)?,
            text: parse_color(&self.text_color)?,
            line: parse_color(&self.line_color)?,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// A theme with its colors resolved to packed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub branch_fill: Color,
    pub leaf_fill: Color,
    pub text: Color,
    pub line: Color,
}

/// Parses `#RRGGBB` or `#RGB` (the `#` is optional).
pub fn parse_color(value: &str) -> Result<Color> {
    let invalid = || Error::InvalidColor(value.to_string());
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    match hex.len() {
        6 => u32::from_str_radix(hex, 16).map(Color).map_err(|_| invalid()),
        3 => {
            let mut packed = 0u32;
            for digit in hex.chars() {
                let nibble = digit.to_digit(16).ok_or_else(invalid)?;
                packed = (packed << 8) | (nibble << 4) | nibble;
            }
            Ok(Color(packed))
        }
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(parse_color("#FF0000").unwrap(), Color(0xFF0000));
        assert_eq!(parse_color("ffff00").unwrap(), Color(0xFFFF00));
        assert_eq!(parse_color("#abc").unwrap(), Color(0xAABBCC));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_color("red"), Err(Error::InvalidColor(_))));
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#+12345").is_err());
    }

    #[test]
    fn channels_are_rgb_order() {
        assert_eq!(Color(0x123456).channels(), [0x12, 0x34, 0x56]);
        assert_eq!(Color::rgb(1, 2, 3), Color(0x010203));
    }

    #[test]
    fn classic_palette_resolves() {
        let palette = Theme::classic().palette().unwrap();
        assert_eq!(palette.branch_fill, Color(0xFF0000));
        assert_eq!(palette.leaf_fill, Color(0xFFFF00));
        assert_eq!(palette.background, Color::WHITE);
    }
}
