use serde::{Deserialize, Serialize};

use crate::catalogue::Star;
use crate::geometry::UNIT_MM;
use crate::projection::{CelestialPoint, ProjectedPoint, Projector};

/// How catalogue magnitudes become marker sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarStyle {
    /// Faintest magnitude drawn; a star exactly at the limit gets no marker.
    pub magnitude_limit: f64,
    /// Marker radius per magnitude of brightness above the limit.
    pub marker_scale: f64,
}

impl Default for StarStyle {
    fn default() -> Self {
        Self {
            magnitude_limit: 5.0,
            marker_scale: 0.18 * UNIT_MM,
        }
    }
}

impl StarStyle {
    /// Marker radius, or `None` if the star is too faint to draw.
    ///
    /// Linear in magnitude, so negative magnitudes keep growing.
    pub fn marker_radius(&self, magnitude: f64) -> Option<f64> {
        if !magnitude.is_finite() || magnitude >= self.magnitude_limit {
            return None;
        }
        Some(self.marker_scale * (self.magnitude_limit - magnitude))
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.magnitude_limit.is_finite() {
            return Err(format!(
                "magnitude limit {} must be finite",
                self.magnitude_limit
            ));
        }
        if !self.marker_scale.is_finite() || self.marker_scale <= 0.0 {
            return Err(format!(
                "marker scale {} must be positive",
                self.marker_scale
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StarMarker {
    /// Position of the source record in the catalogue.
    pub index: usize,
    pub name: Option<String>,
    /// Coordinates after hemisphere normalization.
    pub sky: CelestialPoint,
    pub at: ProjectedPoint,
    pub magnitude: f64,
    pub marker_radius: f64,
}

pub fn star_markers(projector: &Projector, stars: &[Star], style: &StarStyle) -> Vec<StarMarker> {
    stars
        .iter()
        .enumerate()
        .filter_map(|(index, star)| {
            let magnitude = star.magnitude?;
            let marker_radius = style.marker_radius(magnitude)?;
            let (sky, at) = projector.project(star.position);
            at.is_within(projector.clip_radius()).then(|| StarMarker {
                index,
                name: star.name.clone(),
                sky,
                at,
                magnitude,
                marker_radius,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brighter_stars_get_larger_markers() {
        let style = StarStyle::default();
        let bright = style.marker_radius(1.0).unwrap();
        let faint = style.marker_radius(4.0).unwrap();
        assert!(bright > faint);
    }

    #[test]
    fn negative_magnitudes_keep_growing() {
        let style = StarStyle::default();
        let zero = style.marker_radius(0.0).unwrap();
        assert!((zero - style.marker_scale * style.magnitude_limit).abs() < 1e-12);
        let sirius = style.marker_radius(-1.46).unwrap();
        assert!(sirius > zero);
        assert!((sirius - 0.18 * 6.46).abs() < 1e-12, "sirius = {sirius}");
    }

    #[test]
    fn style_must_be_usable() {
        assert!(StarStyle::default().validate().is_ok());
        let zero_scale = StarStyle {
            marker_scale: 0.0,
            ..StarStyle::default()
        };
        assert!(zero_scale.validate().is_err());
        let no_limit = StarStyle {
            magnitude_limit: f64::INFINITY,
            ..StarStyle::default()
        };
        assert!(no_limit.validate().is_err());
    }

    #[test]
    fn limit_magnitude_is_excluded() {
        let style = StarStyle::default();
        assert_eq!(style.marker_radius(style.magnitude_limit), None);
        assert_eq!(style.marker_radius(6.0), None);
        assert_eq!(style.marker_radius(f64::NAN), None);
    }
}
