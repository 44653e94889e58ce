//! Color conversion primitives.
//!
//! Pure, stateless conversions between the three representations the tool
//! speaks: 8-bit RGB channels, HSL (hue in degrees, saturation/lightness as
//! fractions), and `#RRGGBB` hex strings.
//!
//! Range invariants live in the signatures: RGB channels are `u8`, so the
//! 0-255 clamp is enforced by the type system. Callers working with wider
//! integers (slider input, config values) clamp before converting.

use serde::{Deserialize, Serialize};

/// An RGB triple with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Format an RGB triple as a 7-character uppercase hex string, `#RRGGBB`.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Parse a hex color string into an RGB triple.
///
/// Accepts exactly six hex digits with an optional leading `#`. Anything
/// else (shorthand `#RGB`, alpha digits, non-hex characters) returns `None`;
/// callers ignore the update rather than surfacing an error.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

/// Convert 8-bit RGB channels to HSL.
///
/// Returns hue in degrees `[0, 360)` and saturation/lightness as fractions
/// `[0, 1]`. Achromatic input (r == g == b) yields `h = 0, s = 0` so the
/// zero-delta case never divides by zero.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let rf = f64::from(r) / 255.0;
    let gf = f64::from(g) / 255.0;
    let bf = f64::from(b) / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is undefined, pin it to zero.
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == rf {
        (gf - bf) / d + if gf < bf { 6.0 } else { 0.0 }
    } else if max == gf {
        (bf - rf) / d + 2.0
    } else {
        (rf - gf) / d + 4.0
    };

    (normalize_angle(h * 60.0), s, l)
}

/// Convert HSL to RGB channels.
///
/// Hue is in degrees (wrapping values are normalized), saturation and
/// lightness are fractions `[0, 1]`. Output channels are floating point in
/// `[0, 255]`; callers round before display.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let hue = normalize_angle(h);
    let a = s * l.min(1.0 - l);
    let f = |n: f64| -> f64 {
        let k = (n + hue / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };
    (f(0.0) * 255.0, f(8.0) * 255.0, f(4.0) * 255.0)
}

fn normalize_angle(t: f64) -> f64 {
    let mut t = t % 360.0;
    if t < 0.0 {
        t += 360.0;
    }
    t
}
