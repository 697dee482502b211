// File: crates/plotpoint-core/src/theme.rs
// Summary: Chart palettes (line, point, grid, background, axis, tick labels) and presets.

use std::fmt;
use std::str::FromStr;

use crate::error::PlotError;

/// 8-bit RGBA color, independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const DARK_GRAY: Rgba = Rgba::rgb(64, 64, 64);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, PlotError> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || PlotError::InvalidColor(s.to_string());
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self { r: byte(0)?, g: byte(2)?, b: byte(4)?, a })
    }

    /// `#rrggbb`, with an alpha suffix only when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = PlotError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::from_hex(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Color used for axis captions and the title; not part of the palette.
pub const CAPTION: Rgba = Rgba::DARK_GRAY;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub line: Rgba,
    pub point: Rgba,
    pub grid: Rgba,
    pub background: Rgba,
    pub axis: Rgba,
    pub ticks: Rgba,
}

/// Palette entries addressable by name from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorKey {
    Line,
    Point,
    Grid,
    Background,
    Axis,
    Ticks,
}

impl ColorKey {
    pub const ALL: [ColorKey; 6] =
        [ColorKey::Line, ColorKey::Point, ColorKey::Grid, ColorKey::Background, ColorKey::Axis, ColorKey::Ticks];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorKey::Line => "line",
            ColorKey::Point => "point",
            ColorKey::Grid => "grid",
            ColorKey::Background => "background",
            ColorKey::Axis => "axis",
            ColorKey::Ticks => "ticks",
        }
    }
}

impl FromStr for ColorKey {
    type Err = PlotError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        ColorKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(key))
            .ok_or_else(|| PlotError::UnknownColorKey(key.to_string()))
    }
}

impl Theme {
    /// Red line, blue points, light gray dashed grid on white.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            line: Rgba::rgb(220, 0, 0),
            point: Rgba::rgb(40, 150, 255),
            grid: Rgba::rgb(190, 190, 190),
            background: Rgba::WHITE,
            axis: Rgba::BLACK,
            ticks: Rgba::rgb(40, 40, 40),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            line: Rgba::rgb(64, 160, 255),
            point: Rgba::rgb(255, 230, 70),
            grid: Rgba::rgb(40, 40, 45),
            background: Rgba::rgb(18, 18, 20),
            axis: Rgba::rgb(180, 180, 190),
            ticks: Rgba::rgb(150, 150, 160),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            line: Rgba::rgb(32, 120, 200),
            point: Rgba::rgb(200, 60, 60),
            grid: Rgba::rgb(230, 230, 235),
            background: Rgba::rgb(250, 250, 252),
            axis: Rgba::rgb(60, 60, 70),
            ticks: Rgba::rgb(100, 100, 110),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            line: Rgba::rgb(0x26, 0x8b, 0xd2),       // blue
            point: Rgba::rgb(0xb5, 0x89, 0x00),      // yellow
            grid: Rgba::rgb(0x07, 0x36, 0x42),       // base02
            background: Rgba::rgb(0x00, 0x2b, 0x36), // base03
            axis: Rgba::rgb(0x93, 0xa1, 0xa1),       // base1
            ticks: Rgba::rgb(0x83, 0x94, 0x96),      // base0
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            line: Rgba::rgb(0x26, 0x8b, 0xd2),
            point: Rgba::rgb(0xcb, 0x4b, 0x16),      // orange
            grid: Rgba::rgb(0xee, 0xe8, 0xd5),       // base2
            background: Rgba::rgb(0xfd, 0xf6, 0xe3), // base3
            axis: Rgba::rgb(0x65, 0x7b, 0x83),       // base00
            ticks: Rgba::rgb(0x58, 0x6e, 0x75),      // base01
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            line: Rgba::rgb(0x00, 0xff, 0xff),
            point: Rgba::rgb(0xff, 0xff, 0x00),
            grid: Rgba::rgb(0x22, 0x22, 0x22),
            background: Rgba::rgb(0x00, 0x00, 0x00),
            axis: Rgba::rgb(0xff, 0xff, 0xff),
            ticks: Rgba::rgb(0xcc, 0xcc, 0xcc),
        }
    }

    pub fn color(&self, key: ColorKey) -> Rgba {
        match key {
            ColorKey::Line => self.line,
            ColorKey::Point => self.point,
            ColorKey::Grid => self.grid,
            ColorKey::Background => self.background,
            ColorKey::Axis => self.axis,
            ColorKey::Ticks => self.ticks,
        }
    }

    pub fn set_color(&mut self, key: ColorKey, color: Rgba) {
        let slot = match key {
            ColorKey::Line => &mut self.line,
            ColorKey::Point => &mut self.point,
            ColorKey::Grid => &mut self.grid,
            ColorKey::Background => &mut self.background,
            ColorKey::Axis => &mut self.axis,
            ColorKey::Ticks => &mut self.ticks,
        };
        *slot = color;
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::classic(),
        Theme::light(),
        Theme::dark(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Look up a preset by name (case-insensitive).
pub fn find(name: &str) -> Option<Theme> {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
}

/// Look up a preset by name, falling back to classic.
pub fn find_or_default(name: &str) -> Theme {
    find(name).unwrap_or_else(|| {
        tracing::warn!(name, "unknown theme; using classic");
        Theme::classic()
    })
}

/// The preset following `current` in [`presets`] order, wrapping around.
pub fn next_preset(current: &str) -> Theme {
    let all = presets();
    let idx = all.iter().position(|t| t.name == current).map_or(0, |i| (i + 1) % all.len());
    all[idx]
}
