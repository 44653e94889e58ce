//! Current-color state and its update cycle.
//!
//! `ColorState` is the single source of truth for the current color. All
//! mutation goes through [`ColorState::apply`] with a [`ColorEvent`]; the
//! triple the event edited is authoritative for that update and the other
//! representation is recomputed from it. Every update yields a
//! [`ColorSnapshot`] and display surfaces render only from snapshots, so no
//! control can ever show a stale value.

use serde::{Deserialize, Serialize};

use crate::convert::{Rgb, hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl};

/// HSL triple in display units: hue in degrees `0..=360`, saturation and
/// lightness as percentages `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// RGB channel selector for slider-style edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

/// HSL channel selector for slider-style edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HslChannel {
    Hue,
    Saturation,
    Lightness,
}

/// A user-driven state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorEvent {
    /// An RGB slider or number field changed.
    SetRgb { channel: RgbChannel, value: u8 },
    /// An HSL slider or number field changed. Hue is clamped to `0..=360`,
    /// saturation and lightness to `0..=100`.
    SetHsl { channel: HslChannel, value: u16 },
    /// A direct selection (preset or palette swatch). Invalid hex ignores
    /// the update and leaves the state untouched.
    Select { hex: String },
}

/// Everything a display surface needs, derived once per update from the
/// single current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSnapshot {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub h: u16,
    pub s: u8,
    pub l: u8,
    /// `#RRGGBB` — doubles as the preview surface value.
    pub hex: String,
    /// `rgb(r, g, b)`
    pub rgb_css: String,
    /// `hsl(h, s%, l%)`
    pub hsl_css: String,
}

/// The current color, with RGB and HSL views kept in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorState {
    rgb: Rgb,
    hsl: Hsl,
}

impl Default for ColorState {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorState {
    /// Initial state: pure red.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rgb(Rgb::new(255, 0, 0))
    }

    /// Build state from an RGB triple, deriving the HSL view.
    #[must_use]
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            hsl: derive_hsl(rgb),
        }
    }

    #[must_use]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    #[must_use]
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Apply a transition and return the snapshot of the updated state.
    pub fn apply(&mut self, event: &ColorEvent) -> ColorSnapshot {
        match event {
            ColorEvent::SetRgb { channel, value } => {
                match channel {
                    RgbChannel::Red => self.rgb.r = *value,
                    RgbChannel::Green => self.rgb.g = *value,
                    RgbChannel::Blue => self.rgb.b = *value,
                }
                self.hsl = derive_hsl(self.rgb);
            }
            ColorEvent::SetHsl { channel, value } => {
                match channel {
                    HslChannel::Hue => self.hsl.h = (*value).min(360),
                    HslChannel::Saturation => self.hsl.s = (*value).min(100) as u8,
                    HslChannel::Lightness => self.hsl.l = (*value).min(100) as u8,
                }
                self.rgb = derive_rgb(self.hsl);
            }
            ColorEvent::Select { hex } => match hex_to_rgb(hex) {
                Some(rgb) => {
                    self.rgb = rgb;
                    self.hsl = derive_hsl(rgb);
                }
                None => {
                    tracing::debug!(%hex, "ignoring selection of unparsable color");
                }
            },
        }
        self.snapshot()
    }

    /// Derive the full display snapshot from the current state.
    #[must_use]
    pub fn snapshot(&self) -> ColorSnapshot {
        let Rgb { r, g, b } = self.rgb;
        let Hsl { h, s, l } = self.hsl;
        ColorSnapshot {
            r,
            g,
            b,
            h,
            s,
            l,
            hex: rgb_to_hex(r, g, b),
            rgb_css: format!("rgb({r}, {g}, {b})"),
            hsl_css: format!("hsl({h}, {s}%, {l}%)"),
        }
    }
}

fn derive_hsl(rgb: Rgb) -> Hsl {
    let (h, s, l) = rgb_to_hsl(rgb.r, rgb.g, rgb.b);
    Hsl {
        h: h.round() as u16 % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

fn derive_rgb(hsl: Hsl) -> Rgb {
    let (r, g, b) = hsl_to_rgb(
        f64::from(hsl.h),
        f64::from(hsl.s) / 100.0,
        f64::from(hsl.l) / 100.0,
    );
    Rgb {
        r: r.round() as u8,
        g: g.round() as u8,
        b: b.round() as u8,
    }
}
