use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StarWheelError};

/// RGBA color as handed to a drawing surface.
pub type Color = Srgba<u8>;

/// Semantic role a theme assigns a color to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Background,
    Shading,
    Grid,
    Star,
    Stick,
    Constellation,
    Date,
    Edge,
    Text,
}

impl ColorRole {
    pub fn all() -> &'static [ColorRole] {
        &[
            ColorRole::Background,
            ColorRole::Shading,
            ColorRole::Grid,
            ColorRole::Star,
            ColorRole::Stick,
            ColorRole::Constellation,
            ColorRole::Date,
            ColorRole::Edge,
            ColorRole::Text,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Shading => "shading",
            ColorRole::Grid => "grid",
            ColorRole::Star => "star",
            ColorRole::Stick => "stick",
            ColorRole::Constellation => "constellation",
            ColorRole::Date => "date",
            ColorRole::Edge => "edge",
            ColorRole::Text => "text",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ColorRole::all()
            .iter()
            .copied()
            .find(|role| role.name() == s.to_lowercase())
            .ok_or_else(|| format!("Unknown color role: {}", s))
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.trim().trim_start_matches('#');
    match digits.len() {
        6 => {
            let rgb = Srgb::<u8>::from_str(digits).ok()?;
            Some(Srgba::new(rgb.red, rgb.green, rgb.blue, 255))
        }
        8 => {
            let rgb = Srgb::<u8>::from_str(&digits[0..6]).ok()?;
            let alpha = u8::from_str_radix(&digits[6..8], 16).ok()?;
            Some(Srgba::new(rgb.red, rgb.green, rgb.blue, alpha))
        }
        _ => None,
    }
}

/// `#rrggbb` for the color channels only.
pub fn to_hex(color: &Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Alpha as a 0..1 opacity.
pub fn opacity(color: &Color) -> f32 {
    f32::from(color.alpha) / 255.0
}

/// Mapping from every semantic role to a color.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    colors: BTreeMap<ColorRole, Color>,
}

impl Theme {
    fn from_table(name: &str, table: &[(ColorRole, (u8, u8, u8, u8))]) -> Self {
        let colors = table
            .iter()
            .map(|&(role, (r, g, b, a))| (role, Srgba::new(r, g, b, a)))
            .collect();
        Self {
            name: name.to_string(),
            colors,
        }
    }

    /// Black ink on white card.
    pub fn default_theme() -> Self {
        Self::from_table(
            "default",
            &[
                (ColorRole::Background, (255, 255, 255, 255)),
                (ColorRole::Shading, (178, 178, 178, 51)),
                (ColorRole::Grid, (178, 178, 178, 255)),
                (ColorRole::Star, (0, 0, 0, 255)),
                (ColorRole::Stick, (64, 64, 64, 255)),
                (ColorRole::Constellation, (64, 64, 64, 255)),
                (ColorRole::Date, (0, 0, 0, 255)),
                (ColorRole::Edge, (0, 0, 0, 255)),
                (ColorRole::Text, (0, 0, 0, 255)),
            ],
        )
    }

    /// Light ink on a deep blue disc.
    pub fn dark_theme() -> Self {
        Self::from_table(
            "dark",
            &[
                (ColorRole::Background, (18, 24, 48, 255)),
                (ColorRole::Shading, (90, 110, 160, 90)),
                (ColorRole::Grid, (70, 86, 128, 255)),
                (ColorRole::Star, (255, 255, 255, 255)),
                (ColorRole::Stick, (160, 180, 220, 255)),
                (ColorRole::Constellation, (200, 210, 240, 255)),
                (ColorRole::Date, (230, 230, 230, 255)),
                (ColorRole::Edge, (230, 230, 230, 255)),
                (ColorRole::Text, (230, 230, 230, 255)),
            ],
        )
    }

    pub fn builtin() -> Vec<Theme> {
        vec![Self::default_theme(), Self::dark_theme()]
    }

    pub fn color(&self, role: ColorRole) -> Color {
        // Every constructor fills all roles; fall back to opaque black regardless.
        self.colors
            .get(&role)
            .copied()
            .unwrap_or(Srgba::new(0, 0, 0, 255))
    }

    /// Start from `base` and replace the roles named in `overrides`.
    pub fn with_overrides(
        name: &str,
        base: &Theme,
        overrides: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let mut colors = base.colors.clone();
        for (role_name, value) in overrides {
            let role = ColorRole::from_str(role_name).map_err(|_| StarWheelError::InvalidColor {
                role: role_name.clone(),
                value: value.clone(),
            })?;
            let color = parse_hex(value).ok_or_else(|| StarWheelError::InvalidColor {
                role: role_name.clone(),
                value: value.clone(),
            })?;
            colors.insert(role, color);
        }
        Ok(Self {
            name: name.to_string(),
            colors,
        })
    }
}

/// All themes available to a render, keyed by name.
#[derive(Debug, Clone)]
pub struct ThemeTable {
    themes: BTreeMap<String, Theme>,
}

impl Default for ThemeTable {
    fn default() -> Self {
        Self {
            themes: Theme::builtin()
                .into_iter()
                .map(|t| (t.name.clone(), t))
                .collect(),
        }
    }
}

impl ThemeTable {
    /// Built-in themes plus user themes; user themes inherit unset roles from `default`.
    pub fn with_custom(custom: &BTreeMap<String, BTreeMap<String, String>>) -> Result<Self> {
        let mut table = Self::default();
        let base = Theme::default_theme();
        for (name, overrides) in custom {
            let theme = Theme::with_overrides(name, &base, overrides)?;
            table.themes.insert(name.clone(), theme);
        }
        Ok(table)
    }

    pub fn get(&self, name: &str) -> Result<&Theme> {
        self.themes
            .get(name)
            .ok_or_else(|| StarWheelError::UnknownTheme(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}
