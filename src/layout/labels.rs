use crate::catalogue::LabelPoint;
use crate::geometry::UNIT_REV;
use crate::i18n::Language;
use crate::projection::{CelestialPoint, ProjectedPoint, Projector};

#[derive(Debug, Clone, PartialEq)]
pub struct ConstellationLabel {
    pub text: String,
    pub sky: CelestialPoint,
    pub at: ProjectedPoint,
    /// Text rotation in radians.
    pub rotation: f64,
}

/// Rotation that keeps text tangential to the circle through `at` and upright.
pub fn reading_rotation(at: &ProjectedPoint) -> f64 {
    UNIT_REV / 2.0 - at.x.atan2(at.y)
}

pub fn constellation_labels(
    projector: &Projector,
    labels: &[LabelPoint],
    language: &Language,
) -> Vec<ConstellationLabel> {
    labels
        .iter()
        .filter_map(|label| {
            let (sky, at) = projector.project(label.position);
            if !at.is_within(projector.clip_radius()) {
                return None;
            }
            Some(ConstellationLabel {
                text: language.constellation(&label.name),
                sky,
                at,
                rotation: reading_rotation(&at),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_below_centre_is_turned_half_way() {
        // Straight down the positive y axis: atan2(0, r) = 0.
        let at = ProjectedPoint::from_polar(10.0, 270.0);
        assert!(at.x.abs() < 1e-9 && at.y > 0.0);
        assert!((reading_rotation(&at) - UNIT_REV / 2.0).abs() < 1e-9);
    }

    #[test]
    fn rotation_follows_the_azimuth() {
        for ra in [0.0, 30.0, 90.0, 135.0, 200.0, 315.0] {
            let at = ProjectedPoint::from_polar(25.0, ra);
            let expected = std::f64::consts::PI - at.x.atan2(at.y);
            let got = reading_rotation(&at);
            assert!((got - expected).abs() < 1e-12, "ra {ra}: {got} vs {expected}");
        }
        // Opposite points differ by half a turn.
        let a = reading_rotation(&ProjectedPoint::from_polar(25.0, 45.0));
        let b = reading_rotation(&ProjectedPoint::from_polar(25.0, 225.0));
        let diff = (a - b).rem_euclid(UNIT_REV);
        assert!((diff - UNIT_REV / 2.0).abs() < 1e-9, "diff = {diff}");
    }
}
