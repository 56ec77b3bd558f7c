//! Feature layout for the star wheel.
//!
//! Every feature type is an independent filter→map stage over its source
//! records. Stages only compute positions and visibility; drawing happens in
//! the renderer.

pub mod figures;
pub mod grid;
pub mod labels;
pub mod nakshatra;
pub mod stars;

pub use figures::{stick_figures, FigureStroke, SegmentRejection};
pub use grid::{declination_rings, DeclinationRing};
pub use labels::{constellation_labels, reading_rotation, ConstellationLabel};
pub use nakshatra::{nakshatra_ring, NakshatraSector, NAKSHATRAS, SECTOR_STEP_DEG};
pub use stars::{star_markers, StarMarker, StarStyle};

use tracing::debug;

use crate::calendar::DateAngle;
use crate::catalogue::Catalogue;
use crate::i18n::Language;
use crate::projection::Projector;

/// Everything that will be drawn on one wheel, in disc-plane coordinates.
#[derive(Debug, Clone)]
pub struct WheelLayout {
    pub rings: Vec<DeclinationRing>,
    pub strokes: Vec<FigureStroke>,
    pub stars: Vec<StarMarker>,
    pub labels: Vec<ConstellationLabel>,
    pub sectors: Vec<NakshatraSector>,
}

impl WheelLayout {
    pub fn compute(
        projector: &Projector,
        catalogue: &Catalogue,
        language: &Language,
        star_style: &StarStyle,
    ) -> Self {
        let date_angle = DateAngle::new(projector.observer.hemisphere);

        let layout = Self {
            rings: declination_rings(projector),
            strokes: stick_figures(projector, &catalogue.stick_figures),
            stars: star_markers(projector, &catalogue.stars, star_style),
            labels: constellation_labels(projector, &catalogue.labels, language),
            sectors: nakshatra_ring(date_angle.reference_angle(), projector.geometry),
        };

        debug!(
            "Layout: {} grid rings, {}/{} stick segments, {}/{} stars, {}/{} labels, {} sectors",
            layout.rings.len(),
            layout.strokes.len(),
            catalogue.stick_figures.len(),
            layout.stars.len(),
            catalogue.stars.len(),
            layout.labels.len(),
            catalogue.labels.len(),
            layout.sectors.len()
        );

        layout
    }
}
