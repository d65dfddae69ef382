use serde::Deserialize;

use crate::foundation::core::Rgba;
use crate::foundation::error::{ConicError, ConicResult};
use crate::gradient::stops::StopSpec;

/// A color literal as written by the user, not yet range checked.
///
/// Accepted forms: `"#RRGGBB"`, `"#RRGGBBAA"`, `[r, g, b]`, `[r, g, b, a]` and
/// `{ "r": .., "g": .., "b": .., "a"?: .. }`, channels in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDef {
    pub rgb: [f64; 3],
    pub alpha: Option<f64>,
}

impl ColorDef {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: None,
        }
    }

    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            rgb: [r, g, b],
            alpha: Some(a),
        }
    }

    pub(crate) fn from_channels(v: &[f64]) -> ConicResult<Self> {
        match *v {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(ConicError::invalid_color(format!(
                "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a]), got {}",
                v.len()
            ))),
        }
    }

    pub(crate) fn to_stop_spec(self, position: Option<f64>) -> StopSpec {
        StopSpec {
            rgb: self.rgb,
            alpha: self.alpha,
            position,
        }
    }

    /// Range-checked conversion used for flat colors (clip fill).
    pub fn to_rgba(self) -> ConicResult<Rgba> {
        let [r, g, b] = self.rgb;
        let color = Rgba::new(r, g, b, self.alpha.unwrap_or(1.0));
        if let Some(c) = color
            .channels()
            .into_iter()
            .find(|c| !(0.0..=1.0).contains(c))
        {
            return Err(ConicError::invalid_color(format!(
                "color component out of range [0, 1]: {c}"
            )));
        }
        Ok(color)
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default)]
                a: Option<f64>,
            },
            Arr(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self {
                rgb: [r, g, b],
                alpha: a,
            }),
            Repr::Arr(v) => Self::from_channels(&v).map_err(serde::de::Error::custom),
        }
    }
}

/// Parse `#RRGGBB` / `#RRGGBBAA` (case-insensitive, `#` optional).
pub fn parse_hex(s: &str) -> ConicResult<ColorDef> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> ConicResult<f64> {
        // from_str_radix alone would accept a leading sign.
        if !pair.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConicError::invalid_color(format!(
                "invalid hex byte \"{pair}\""
            )));
        }
        u8::from_str_radix(pair, 16)
            .map(|b| f64::from(b) / 255.0)
            .map_err(|_| ConicError::invalid_color(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() || !(s.len() == 6 || s.len() == 8) {
        return Err(ConicError::invalid_color(format!(
            "hex color must be #RRGGBB or #RRGGBBAA, got \"{s}\""
        )));
    }

    let r = hex_byte(&s[0..2])?;
    let g = hex_byte(&s[2..4])?;
    let b = hex_byte(&s[4..6])?;
    if s.len() == 8 {
        Ok(ColorDef::rgba(r, g, b, hex_byte(&s[6..8])?))
    } else {
        Ok(ColorDef::rgb(r, g, b))
    }
}

/// Parse a color written as an attribute value: a hex string or a JSON channel array.
pub fn parse_color_str(s: &str) -> ConicResult<ColorDef> {
    let s = s.trim();
    if s.starts_with('[') {
        let v: Vec<f64> = serde_json::from_str(s)
            .map_err(|e| ConicError::invalid_color(format!("color array \"{s}\": {e}")))?;
        ColorDef::from_channels(&v)
    } else {
        parse_hex(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/color.rs"]
mod tests;
