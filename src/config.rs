use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use crate::geometry::DiscGeometry;
use crate::layout::StarStyle;
use crate::renderer::{RenderSettings, StarWheel};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub observer: ObserverConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub geometry: GeometryConfig,
    #[serde(default)]
    pub stars: StarStyle,
    #[serde(default)]
    pub data: DataConfig,
    /// User themes: theme name -> color role -> hex color
    #[serde(default)]
    pub themes: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    /// Signed degrees, negative in the southern hemisphere
    pub latitude: f64,
    pub language: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            latitude: 52.0,
            language: "en".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub theme: String,
    pub output: PathBuf,
    /// Base text height in millimetres
    pub font_size_mm: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            output: PathBuf::from(format!("{}.svg", StarWheel::default_filename())),
            font_size_mm: 1.6,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    pub outer_radius_mm: f64,
    pub gap_mm: f64,
    pub central_hole_mm: f64,
    pub stick_length_cap_mm: f64,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        let g = DiscGeometry::default();
        Self {
            outer_radius_mm: g.outer_radius,
            gap_mm: g.gap,
            central_hole_mm: g.central_hole_radius,
            stick_length_cap_mm: g.stick_length_cap,
        }
    }
}

impl GeometryConfig {
    pub fn to_geometry(&self) -> DiscGeometry {
        DiscGeometry {
            outer_radius: self.outer_radius_mm,
            gap: self.gap_mm,
            central_hole_radius: self.central_hole_mm,
            stick_length_cap: self.stick_length_cap_mm,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the three .dat files; bundled data when unset
    pub directory: Option<PathBuf>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/starwheel/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("starwheel").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            match Self::load(&path) {
                Ok(config) => Some(config),
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse config at {}: {}. Using defaults.",
                        path.display(),
                        e
                    );
                    None
                }
            }
        } else {
            None
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, Self::generate_config_template())?;

        Ok(path)
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r##"# Starwheel Configuration
# This file is auto-generated. Edit as needed.

[observer]
# Latitude in degrees; negative values draw a southern-hemisphere wheel
latitude = 52.0
# Language for constellation names: "en", "fr", "de", "es"
language = "en"

[render]
# Theme: "default", "dark", or a theme defined under [themes.<name>]
theme = "default"
# Output file (SVG)
output = "star_wheel.svg"
# Base text height in millimetres
font_size_mm = 1.6

[geometry]
# Radius of the printed disc
outer_radius_mm = 75.0
# Width of the Nakshatra ring around the star chart
gap_mm = 12.0
# Radius of the central pivot hole
central_hole_mm = 1.5
# Longest stick-figure line drawn; longer ones are too distorted near the rim
stick_length_cap_mm = 40.0

[stars]
# Stars at or fainter than this magnitude are not drawn
magnitude_limit = 5.0
# Marker radius (mm) per magnitude above the limit
marker_scale = 0.18

[data]
# Directory with bright_stars.dat, constellation_stick_figures.dat and
# constellation_names.dat (omit to use the bundled data)
# directory = "/path/to/raw_data"

# Custom themes. Roles not listed inherit from the default theme.
# Roles: background, shading, grid, star, stick, constellation, date, edge, text
# [themes.sepia]
# background = "#f4ecd8"
# star = "#3b2f2f"
# shading = "#8b735533"
"##
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &Args) {
        if let Some(latitude) = args.latitude {
            self.observer.latitude = latitude;
        }
        if let Some(ref language) = args.language {
            self.observer.language = language.clone();
        }
        if let Some(ref theme) = args.theme {
            self.render.theme = theme.clone();
        }
        if let Some(ref output) = args.output {
            self.render.output = output.clone();
        }
        if let Some(ref dir) = args.data_dir {
            self.data.directory = Some(dir.clone());
        }
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            latitude: self.observer.latitude,
            language: self.observer.language.clone(),
            theme: self.render.theme.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn template_parses_to_defaults() {
        let config: Config = toml::from_str(&Config::generate_config_template()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.observer.latitude, defaults.observer.latitude);
        assert_eq!(config.render.output, defaults.render.output);
        assert_eq!(config.geometry.to_geometry(), DiscGeometry::default());
        assert_eq!(config.stars, StarStyle::default());
        assert!(config.themes.is_empty());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[observer]\nlatitude = -35.0\n").unwrap();
        assert_eq!(config.observer.latitude, -35.0);
        assert_eq!(config.observer.language, "en");
        assert_eq!(config.render.theme, "default");
    }

    #[test]
    fn cli_overrides_file() {
        let mut config = Config::default();
        let args = Args::parse_from([
            "starwheel",
            "--latitude",
            "-35",
            "--language",
            "fr",
            "--theme",
            "dark",
        ]);
        config.merge_args(&args);
        let settings = config.render_settings();
        assert_eq!(settings.latitude, -35.0);
        assert_eq!(settings.language, "fr");
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn custom_themes_are_read() {
        let config: Config =
            toml::from_str("[themes.sepia]\nbackground = \"#f4ecd8\"\n").unwrap();
        assert_eq!(config.themes["sepia"]["background"], "#f4ecd8");
    }

    #[test]
    fn load_reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\ntheme = \"dark\"\n").unwrap();
        assert_eq!(Config::load(&path).unwrap().render.theme, "dark");
        assert!(Config::load(&dir.path().join("missing.toml")).is_err());
    }
}
