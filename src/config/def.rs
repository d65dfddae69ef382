use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use kurbo::Point;
use serde::Deserialize;

use crate::config::color::{ColorDef, parse_color_str, parse_hex};
use crate::foundation::core::Canvas;
use crate::foundation::error::{ConicError, ConicResult};
use crate::foundation::math::degrees_to_radians;
use crate::gradient::stops::{GradientStops, StopSpec};
use crate::profile::radial::RadialProfile;
use crate::render::raster::{ClipPolicy, GradientConfig};

/// Attribute names understood by [`GradientDef::with_attribute`].
pub const ATTRIBUTE_NAMES: &[&str] = &[
    "stops",
    "cx",
    "cy",
    "r",
    "p",
    "rx",
    "ry",
    "clip",
    "angle",
    "clip-angle",
    "width",
    "height",
];

/// One stop entry: a color with an optional position.
///
/// JSON forms: `"#RRGGBB[AA]"`, `[r,g,b]`, `[r,g,b,a]`, `[r,g,b,a,pos]`,
/// `{ "color": <color>, "pos"?: <number> }` or a bare `{ "r", "g", "b", "a"? }` object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopDef {
    pub color: ColorDef,
    pub pos: Option<f64>,
}

impl StopDef {
    fn to_spec(self) -> StopSpec {
        self.color.to_stop_spec(self.pos)
    }
}

impl<'de> Deserialize<'de> for StopDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<f64>),
            Positioned {
                color: ColorDef,
                #[serde(default)]
                pos: Option<f64>,
            },
            Plain(ColorDef),
        }

        let stop = match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => StopDef {
                color: parse_hex(&s).map_err(serde::de::Error::custom)?,
                pos: None,
            },
            Repr::Arr(v) => match *v.as_slice() {
                [r, g, b, a, pos] => StopDef {
                    color: ColorDef::rgba(r, g, b, a),
                    pos: Some(pos),
                },
                _ => StopDef {
                    color: ColorDef::from_channels(&v).map_err(serde::de::Error::custom)?,
                    pos: None,
                },
            },
            Repr::Positioned { color, pos } => StopDef { color, pos },
            Repr::Plain(color) => StopDef { color, pos: None },
        };
        Ok(stop)
    }
}

/// The stop list, either structured or as a single attribute-style string.
///
/// The string form is a comma-separated hex list (`"#ff0000,#0000ff"`) or a JSON array of stop
/// entries (`"[[1,0,0],[0,0,1]]"`).
#[derive(Debug, Clone, PartialEq)]
pub enum StopsDef {
    List(Vec<StopDef>),
    Inline(String),
}

// Dispatch on the JSON shape directly so errors from individual stops reach the caller.
impl<'de> Deserialize<'de> for StopsDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct StopsVisitor;

        impl<'de> serde::de::Visitor<'de> for StopsVisitor {
            type Value = StopsDef;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a list of color stops or a stop string")
            }

            fn visit_str<E>(self, v: &str) -> Result<StopsDef, E>
            where
                E: serde::de::Error,
            {
                Ok(StopsDef::Inline(v.to_owned()))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<StopsDef, A::Error>
            where
                A: serde::de::SeqAccess<'de>,
            {
                let mut stops = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(stop) = seq.next_element::<StopDef>()? {
                    stops.push(stop);
                }
                Ok(StopsDef::List(stops))
            }
        }

        deserializer.deserialize_any(StopsVisitor)
    }
}

impl Default for StopsDef {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl StopsDef {
    fn resolve(&self) -> ConicResult<Vec<StopSpec>> {
        match self {
            Self::List(stops) => Ok(stops.iter().map(|s| s.to_spec()).collect()),
            Self::Inline(text) => {
                let text = text.trim();
                if text.starts_with('#') {
                    text.split(',')
                        .map(|part| parse_hex(part).map(|c| c.to_stop_spec(None)))
                        .collect()
                } else if text.starts_with('[') {
                    let stops: Vec<StopDef> = serde_json::from_str(text)
                        .map_err(|e| ConicError::invalid_color(format!("stop list: {e}")))?;
                    Ok(stops.into_iter().map(StopDef::to_spec).collect())
                } else {
                    Err(ConicError::invalid_color(format!(
                        "stops must be a comma-separated hex list or a JSON array, got \"{text}\""
                    )))
                }
            }
        }
    }
}

/// Out-of-shape behaviour: the keyword `"clamp"` or a fill color.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum ClipDef {
    #[default]
    Clamp,
    Color(ColorDef),
}

impl ClipDef {
    /// Parse an attribute value: `clamp`, a hex color or a JSON channel array.
    pub fn parse(s: &str) -> ConicResult<Self> {
        let s = s.trim();
        if s == "clamp" {
            return Ok(Self::Clamp);
        }
        parse_color_str(s).map(Self::Color)
    }

    fn to_policy(self) -> ConicResult<ClipPolicy> {
        match self {
            Self::Clamp => Ok(ClipPolicy::Clamp),
            Self::Color(color) => color.to_rgba().map(ClipPolicy::FixedColor),
        }
    }
}

impl<'de> Deserialize<'de> for ClipDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Color(ColorDef),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Self::parse(&s).map_err(serde::de::Error::custom),
            Repr::Color(c) => Ok(Self::Color(c)),
        }
    }
}

fn default_extent() -> u32 {
    400
}

fn default_exponent() -> f64 {
    2.0
}

/// JSON-facing, human-edited gradient definition.
///
/// Angles are in degrees. Unset center defaults to the canvas center; unset radii default to
/// `r`, or to half the shorter canvas side when `r` is unset too. Lower it into a
/// [`GradientConfig`] with [`GradientDef::build`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradientDef {
    #[serde(default = "default_extent")]
    pub width: u32,
    #[serde(default = "default_extent")]
    pub height: u32,
    #[serde(default)]
    pub cx: Option<f64>,
    #[serde(default)]
    pub cy: Option<f64>,
    #[serde(default)]
    pub r: Option<f64>,
    #[serde(default)]
    pub rx: Option<f64>,
    #[serde(default)]
    pub ry: Option<f64>,
    #[serde(default = "default_exponent")]
    pub p: f64,
    #[serde(default)]
    pub angle: f64,
    #[serde(default, alias = "clip-angle")]
    pub clip_angle: f64,
    pub stops: StopsDef,
    #[serde(default)]
    pub clip: ClipDef,
}

impl Default for GradientDef {
    fn default() -> Self {
        Self::new(StopsDef::default())
    }
}

impl GradientDef {
    pub fn new(stops: StopsDef) -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            cx: None,
            cy: None,
            r: None,
            rx: None,
            ry: None,
            p: default_exponent(),
            angle: 0.0,
            clip_angle: 0.0,
            stops,
            clip: ClipDef::Clamp,
        }
    }

    /// Parse a definition from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ConicResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ConicError::serde(format!("parse gradient JSON: {e}")))
    }

    /// Parse a definition from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ConicResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ConicError::validation(format!("open gradient JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn from_json_str(s: &str) -> ConicResult<Self> {
        serde_json::from_str(s).map_err(|e| ConicError::serde(format!("parse gradient JSON: {e}")))
    }

    /// Build a definition from `(name, value)` attribute pairs applied in order.
    pub fn from_attributes<'a>(
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> ConicResult<Self> {
        attrs
            .into_iter()
            .try_fold(Self::default(), |def, (name, value)| {
                def.with_attribute(name, value)
            })
    }

    /// Return a copy with one attribute replaced, parsing `value` the way the attribute form
    /// expects (numbers, degrees, color strings).
    ///
    /// `r` sets both radii and clears earlier `rx`/`ry`; a later `rx`/`ry` overrides it again.
    pub fn with_attribute(mut self, name: &str, value: &str) -> ConicResult<Self> {
        match name {
            "stops" => self.stops = StopsDef::Inline(value.to_owned()),
            "cx" => self.cx = Some(parse_number(name, value)?),
            "cy" => self.cy = Some(parse_number(name, value)?),
            "r" => {
                self.r = Some(parse_number(name, value)?);
                self.rx = None;
                self.ry = None;
            }
            "rx" => self.rx = Some(parse_number(name, value)?),
            "ry" => self.ry = Some(parse_number(name, value)?),
            "p" => self.p = parse_number(name, value)?,
            "clip" => self.clip = ClipDef::parse(value)?,
            "angle" => self.angle = parse_number(name, value)?,
            "clip-angle" | "clip_angle" => self.clip_angle = parse_number(name, value)?,
            "width" => self.width = parse_extent(name, value)?,
            "height" => self.height = parse_extent(name, value)?,
            _ => {
                return Err(ConicError::validation(format!(
                    "unknown attribute \"{name}\" (expected one of: {})",
                    ATTRIBUTE_NAMES.join(", ")
                )));
            }
        }
        Ok(self)
    }

    /// Validate and lower into the numeric runtime configuration.
    pub fn build(&self) -> ConicResult<GradientConfig> {
        let canvas = Canvas::new(self.width, self.height)?;
        let (w, h) = (f64::from(self.width), f64::from(self.height));

        let cx = finite("cx", self.cx.unwrap_or(w / 2.0))?;
        let cy = finite("cy", self.cy.unwrap_or(h / 2.0))?;
        let base = self.r.unwrap_or(w.min(h) / 2.0);
        let rx = positive("rx", self.rx.unwrap_or(base))?;
        let ry = positive("ry", self.ry.unwrap_or(base))?;
        let p = positive("p", self.p)?;
        let angle = finite("angle", self.angle)?;
        let clip_angle = finite("clip_angle", self.clip_angle)?;

        let stops = GradientStops::new(self.stops.resolve()?)?;
        let clip = self.clip.to_policy()?;

        let profile = RadialProfile::new(Point::new(cx, cy), rx, ry)
            .with_exponent(p)
            .with_rotation(degrees_to_radians(angle))
            .with_clip_angle(degrees_to_radians(clip_angle));
        Ok(GradientConfig::new(canvas, profile, stops, clip))
    }

    pub fn validate(&self) -> ConicResult<()> {
        self.build().map(|_| ())
    }
}

fn parse_number(name: &str, value: &str) -> ConicResult<f64> {
    value.trim().parse::<f64>().map_err(|e| {
        ConicError::validation(format!("attribute \"{name}\": invalid number \"{value}\": {e}"))
    })
}

fn parse_extent(name: &str, value: &str) -> ConicResult<u32> {
    let v = parse_number(name, value)?;
    if !(v >= 1.0 && v <= f64::from(u32::MAX) && v.fract() == 0.0) {
        return Err(ConicError::validation(format!(
            "attribute \"{name}\" must be a positive whole number of pixels, got {value}"
        )));
    }
    Ok(v as u32)
}

fn finite(name: &str, v: f64) -> ConicResult<f64> {
    if !v.is_finite() {
        return Err(ConicError::validation(format!("{name} must be finite, got {v}")));
    }
    Ok(v)
}

fn positive(name: &str, v: f64) -> ConicResult<f64> {
    if !(v.is_finite() && v > 0.0) {
        return Err(ConicError::validation(format!(
            "{name} must be finite and > 0, got {v}"
        )));
    }
    Ok(v)
}

#[cfg(test)]
#[path = "../../tests/unit/config/def.rs"]
mod tests;
