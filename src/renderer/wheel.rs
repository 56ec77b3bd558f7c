//! Star wheel rendering driver.

use tracing::info;

use super::{DrawingSurface, StrokeStyle, TextPlacement};
use crate::catalogue::Catalogue;
use crate::color::{ColorRole, Theme, ThemeTable};
use crate::error::{Result, StarWheelError};
use crate::geometry::{BoundingBox, DiscGeometry};
use crate::i18n::Translations;
use crate::layout::{StarStyle, WheelLayout};
use crate::projection::{ObserverContext, Projector};

const DEFAULT_FONT_SIZE: f64 = 1.2;
const CONSTELLATION_FONT_SIZE: f64 = 0.7;
const NAKSHATRA_FONT_SIZE: f64 = 1.8;

/// Per-render choices normally supplied by the settings loader.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    /// Signed degrees; negative draws a southern-hemisphere wheel.
    pub latitude: f64,
    pub language: String,
    pub theme: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            latitude: 52.0,
            language: "en".to_string(),
            theme: "default".to_string(),
        }
    }
}

/// How many features of each kind ended up on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    pub grid_rings: usize,
    pub stick_segments: usize,
    pub stars: usize,
    pub labels: usize,
    pub sectors: usize,
}

/// The rotating star disc of a planisphere.
pub struct StarWheel<'a> {
    pub geometry: DiscGeometry,
    pub star_style: StarStyle,
    pub catalogue: &'a Catalogue,
    pub translations: &'a Translations,
    pub themes: &'a ThemeTable,
}

impl<'a> StarWheel<'a> {
    pub fn new(
        catalogue: &'a Catalogue,
        translations: &'a Translations,
        themes: &'a ThemeTable,
    ) -> Self {
        Self {
            geometry: DiscGeometry::default(),
            star_style: StarStyle::default(),
            catalogue,
            translations,
            themes,
        }
    }

    pub fn default_filename() -> &'static str {
        "star_wheel"
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.geometry.bounding_box()
    }

    /// Draw one wheel onto `surface`.
    ///
    /// Theme, language, latitude, geometry and star style are all resolved
    /// before the first drawing call, so a configuration error leaves the
    /// surface untouched.
    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        settings: &RenderSettings,
        surface: &mut S,
    ) -> Result<RenderSummary> {
        self.geometry
            .validate()
            .map_err(StarWheelError::InvalidSettings)?;
        self.star_style
            .validate()
            .map_err(StarWheelError::InvalidSettings)?;
        let observer = ObserverContext::from_latitude(settings.latitude)?;
        let theme = self.themes.get(&settings.theme)?;
        let language = self.translations.language(&settings.language)?;

        info!(
            "Rendering star wheel: latitude {} ({:?}), language {}, theme {}",
            observer.latitude_abs, observer.hemisphere, language.code, theme.name
        );

        let projector = Projector::new(observer, &self.geometry);
        let layout = WheelLayout::compute(&projector, self.catalogue, &language, &self.star_style);

        surface.set_font_size(DEFAULT_FONT_SIZE);
        surface.set_color(theme.color(ColorRole::Text));
        self.paint_disc(surface, theme);
        paint_grid(surface, &layout, theme);
        paint_stick_figures(surface, &layout, theme);
        paint_stars(surface, &layout, theme);
        paint_constellation_names(surface, &layout, theme);
        paint_nakshatra_ring(surface, &layout, theme);

        // Dividing line between chart and ring
        surface.begin_path();
        surface.circle(0.0, 0.0, self.geometry.r2());
        surface.stroke(StrokeStyle::solid(theme.color(ColorRole::Date)));

        Ok(RenderSummary {
            grid_rings: layout.rings.len(),
            stick_segments: layout.strokes.len(),
            stars: layout.stars.len(),
            labels: layout.labels.len(),
            sectors: layout.sectors.len(),
        })
    }

    /// Shading, disc, central hole, then clip to the disc.
    fn paint_disc<S: DrawingSurface + ?Sized>(&self, surface: &mut S, theme: &Theme) {
        let g = &self.geometry;

        surface.begin_path();
        surface.circle(0.0, 0.0, g.r1());
        surface.circle(0.0, 0.0, g.shading_inner_radius());
        surface.fill(theme.color(ColorRole::Shading));

        surface.begin_path();
        surface.circle(0.0, 0.0, g.r1());
        surface.fill(theme.color(ColorRole::Background));

        surface.begin_sub_path();
        surface.circle(0.0, 0.0, g.central_hole_radius);
        surface.stroke(StrokeStyle::solid(theme.color(ColorRole::Edge)));

        surface.clip();
    }
}

fn paint_grid<S: DrawingSurface + ?Sized>(surface: &mut S, layout: &WheelLayout, theme: &Theme) {
    let style = StrokeStyle::solid(theme.color(ColorRole::Grid));
    for ring in &layout.rings {
        surface.begin_path();
        surface.circle(0.0, 0.0, ring.radius);
        surface.stroke(style);
    }
}

fn paint_stick_figures<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &WheelLayout,
    theme: &Theme,
) {
    let style = StrokeStyle::dotted(theme.color(ColorRole::Stick));
    for stroke in &layout.strokes {
        surface.begin_path();
        surface.move_to(stroke.from.x, stroke.from.y);
        surface.line_to(stroke.to.x, stroke.to.y);
        surface.stroke(style);
    }
}

fn paint_stars<S: DrawingSurface + ?Sized>(surface: &mut S, layout: &WheelLayout, theme: &Theme) {
    let color = theme.color(ColorRole::Star);
    for star in &layout.stars {
        surface.begin_path();
        surface.circle(star.at.x, star.at.y, star.marker_radius);
        surface.fill(color);
    }
}

fn paint_constellation_names<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &WheelLayout,
    theme: &Theme,
) {
    surface.set_font_size(CONSTELLATION_FONT_SIZE);
    surface.set_color(theme.color(ColorRole::Constellation));
    for label in &layout.labels {
        surface.text(&TextPlacement::centred(
            &label.text,
            label.at.x,
            label.at.y,
            label.rotation,
        ));
    }
}

fn paint_nakshatra_ring<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    layout: &WheelLayout,
    theme: &Theme,
) {
    surface.set_font_size(NAKSHATRA_FONT_SIZE);
    surface.set_color(theme.color(ColorRole::Date));
    for sector in &layout.sectors {
        surface.begin_path();
        surface.move_to(sector.tick_outer.x, sector.tick_outer.y);
        surface.line_to(sector.tick_inner.x, sector.tick_inner.y);
        surface.stroke(StrokeStyle::current());

        surface.text(&TextPlacement::centred(
            sector.name,
            sector.label_at.x,
            sector.label_at.y,
            sector.label_rotation,
        ));
    }
}
