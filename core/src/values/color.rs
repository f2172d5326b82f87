//! RGBA colors and CSS color parsing.

use super::named_colors;
use core::fmt;
use core::str::FromStr;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from a packed `0xRRGGBB` value.
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Channels in `[r, g, b, a]` order.
    pub fn channels(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_channels([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Parse a CSS color: hex (`#RGB`, `#RRGGBB`, `#AARRGGBB`), `rgb()`,
    /// `rgba()`, `hsl()`, `hsla()` or a named color.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix('#') {
            return parse_hex(hex);
        }
        let lower = text.to_ascii_lowercase();
        if let Some(args) = function_args(&lower, "rgba") {
            return parse_rgb(args, true);
        }
        if let Some(args) = function_args(&lower, "rgb") {
            return parse_rgb(args, false);
        }
        if let Some(args) = function_args(&lower, "hsla") {
            return parse_hsl(args, true);
        }
        if let Some(args) = function_args(&lower, "hsl") {
            return parse_hsl(args, false);
        }
        named_colors::lookup(&lower)
    }
}

impl FromStr for Color {
    type Err = crate::errors::CoercionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| crate::errors::CoercionError::NotAColor {
            found: s.to_string(),
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02X}{:02X}{:02X}{:02X}",
                self.a, self.r, self.g, self.b
            )
        }
    }
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Strip `name(` and `)` from `text`, returning the argument list.
fn function_args<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(2)?, byte(4)?, byte(6)?, byte(0)?)),
        _ => None,
    }
}

fn split_args(args: &str, expected: usize) -> Option<Vec<&str>> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    (parts.len() == expected).then_some(parts)
}

/// A color channel given either as `0..=255` or as a percentage.
fn channel(part: &str) -> Option<u8> {
    let value = match part.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? * 2.55,
        None => part.parse::<f64>().ok()?,
    };
    value.is_finite().then(|| to_channel(value))
}

/// Alpha given as a fraction in `[0, 1]`.
fn alpha(part: &str) -> Option<u8> {
    let value = part.parse::<f64>().ok()?;
    value.is_finite().then(|| to_channel(value * 255.0))
}

fn percentage(part: &str) -> Option<f64> {
    let value = part.strip_suffix('%')?.trim().parse::<f64>().ok()?;
    value.is_finite().then(|| (value / 100.0).clamp(0.0, 1.0))
}

pub(crate) fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn parse_rgb(args: &str, with_alpha: bool) -> Option<Color> {
    let parts = split_args(args, if with_alpha { 4 } else { 3 })?;
    let a = if with_alpha { alpha(parts[3])? } else { 255 };
    Some(Color::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        a,
    ))
}

fn parse_hsl(args: &str, with_alpha: bool) -> Option<Color> {
    let parts = split_args(args, if with_alpha { 4 } else { 3 })?;
    let hue = parts[0].trim_end_matches("deg").parse::<f64>().ok()?;
    if !hue.is_finite() {
        return None;
    }
    let saturation = percentage(parts[1])?;
    let lightness = percentage(parts[2])?;
    let a = if with_alpha { alpha(parts[3])? } else { 255 };

    let (r, g, b) = hsl_to_rgb(hue.rem_euclid(360.0) / 360.0, saturation, lightness);
    Some(Color::rgba(
        to_channel(r * 255.0),
        to_channel(g * 255.0),
        to_channel(b * 255.0),
        a,
    ))
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
