// This file is part of simple-color-picker and is licenced under the GNU GPL v3.0.
// See LICENSE file for full text.
// Copyright © 2024 Michael Ripley

/// Serialize an [`Rgb8`](crate::private::util::color::Rgb8) as an `RRGGBB` hex string, because
/// that's what everyone pastes around. A leading `#` is accepted when reading.
pub mod rgb_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::private::util::color::Rgb8;

    pub fn serialize<S>(color: &Rgb8, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:02X}{:02X}{:02X}", color.r, color.g, color.b))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Rgb8, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    pub fn parse(s: &str) -> Result<Rgb8, String> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("expected a color like \"FF8000\", got \"{s}\""));
        }
        let packed = u32::from_str_radix(hex, 16).map_err(|e| e.to_string())?;
        let [b, g, r, _] = packed.to_le_bytes();
        Ok(Rgb8::new(r, g, b))
    }
}
