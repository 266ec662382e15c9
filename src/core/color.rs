use crate::core::error::{CoreError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`.
    pub fn from_hex(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        let hex_str = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || CoreError::InvalidColor(value.to_string());

        if !hex_str.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex_str.len() {
            6 => {
                let channel = |i: usize| u8::from_str_radix(&hex_str[i..i + 2], 16).map_err(|_| invalid());
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            3 => {
                let channel = |i: usize| u8::from_str_radix(&hex_str[i..i + 1], 16).map(|v| v * 17).map_err(|_| invalid());
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_rgba(&self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl Default for Color {
    fn default() -> Self { Self::black() }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self> { Self::from_hex(s) }
}
