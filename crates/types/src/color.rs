use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    pub const fn black() -> Self {
        Self::gray(0)
    }

    pub const fn white() -> Self {
        Self::gray(255)
    }

    /// Components scaled to the 0..=1 range used by PDF colour operators.
    pub fn unit_components(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }

    /// Relative luminance in 0..=1 (Rec. 601 weights).
    pub fn luminance(&self) -> f32 {
        let [r, g, b] = self.unit_components();
        0.299 * r + 0.587 * g + 0.114 * b
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid color component: {}", e))
        };
        match hex.len() {
            3 => Ok(Color {
                r: channel(&hex[0..1].repeat(2))?,
                g: channel(&hex[1..2].repeat(2))?,
                b: channel(&hex[2..3].repeat(2))?,
            }),
            6 => Ok(Color {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        let short: Color = serde_json::from_str("\"#ccc\"").unwrap();
        assert_eq!(short, Color::gray(0xcc));
        let long: Color = serde_json::from_str("\"#102030\"").unwrap();
        assert_eq!(long, Color::rgb(0x10, 0x20, 0x30));
        assert!(serde_json::from_str::<Color>("\"102030\"").is_err());
    }

    #[test]
    fn luminance_orders_black_below_white() {
        assert_eq!(Color::black().luminance(), 0.0);
        assert!((Color::white().luminance() - 1.0).abs() < 1e-6);
        assert!(Color::gray(200).luminance() > 0.5);
    }
}
